use crate::entities::token::Token;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Anything an amount or a price can be denominated in.
pub trait BaseCurrency: Clone + Debug + Send + Sync {
    fn decimals(&self) -> u8;
    fn symbol(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    /// Identity check. Tokens compare by chain and address only.
    fn equals(&self, other: &Self) -> bool;
}

/// Either the chain's native currency or an ERC20 token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Ether,
    Token(Token),
}

impl Currency {
    /// The native currency of every supported chain.
    pub const ETHER: Currency = Currency::Ether;

    pub fn is_ether(&self) -> bool {
        matches!(self, Currency::Ether)
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Currency::Token(token) => Some(token),
            Currency::Ether => None,
        }
    }
}

impl BaseCurrency for Currency {
    fn decimals(&self) -> u8 {
        match self {
            Currency::Ether => 18,
            Currency::Token(token) => token.decimals,
        }
    }

    fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Ether => Some("ETH"),
            Currency::Token(token) => token.symbol(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Currency::Ether => Some("Ether"),
            Currency::Token(token) => token.name(),
        }
    }

    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Currency::Ether, Currency::Ether) => true,
            (Currency::Token(a), Currency::Token(b)) => a.equals(b),
            _ => false,
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}
