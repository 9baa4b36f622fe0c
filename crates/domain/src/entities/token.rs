use crate::entities::currency::BaseCurrency;
use crate::error::SdkError;
use crate::value_objects::address::Address;
use crate::value_objects::chain_id::ChainId;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An ERC20 token on a specific chain.
///
/// Identity is `(chain_id, address)`. Decimals, symbol and name are metadata
/// and take no part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: ChainId,
    pub address: Address,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub name: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol,
            name,
        }
    }

    /// Builds a token from a hex address string.
    pub fn parse(
        chain_id: ChainId,
        address: &str,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Result<Self, SdkError> {
        Ok(Self::new(
            chain_id,
            Address::parse(address)?,
            decimals,
            symbol,
            name,
        ))
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn equals(&self, other: &Token) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }

    /// Whether `self` is token0 of a pair with `other`.
    ///
    /// Both tokens must share a chain and differ in address.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, SdkError> {
        if self.chain_id != other.chain_id {
            return Err(SdkError::ChainMismatch {
                left: self.chain_id,
                right: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(SdkError::IdenticalAddresses(self.address));
        }
        Ok(self.address < other.address)
    }

    /// Canonical wrapped ether for the chains the exchange is deployed on.
    pub fn weth(chain_id: ChainId) -> Option<Token> {
        let address = match chain_id {
            ChainId::MAINNET => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            ChainId::ROPSTEN | ChainId::RINKEBY => "0xc778417E063141139Fce010982780140Aa0cD5Ab",
            ChainId::GOERLI => "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6",
            ChainId::KOVAN => "0xd0A1E359811322d97991E03f863a0C30C2cF029C",
            _ => return None,
        };
        Token::parse(
            chain_id,
            address,
            18,
            Some("WETH".to_string()),
            Some("Wrapped Ether".to_string()),
        )
        .ok()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl BaseCurrency for Token {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        Token::symbol(self)
    }

    fn name(&self) -> Option<&str> {
        Token::name(self)
    }

    fn equals(&self, other: &Self) -> bool {
        Token::equals(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS_ONE: &str = "0x0000000000000000000000000000000000000001";
    const ADDRESS_TWO: &str = "0x0000000000000000000000000000000000000002";

    fn token(chain_id: ChainId, address: &str, symbol: &str) -> Token {
        Token::parse(chain_id, address, 18, Some(symbol.to_string()), None).unwrap()
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = token(ChainId::MAINNET, ADDRESS_ONE, "ABC");
        let mut b = token(ChainId::MAINNET, ADDRESS_ONE, "DEF");
        b.decimals = 6;
        b.name = Some("Other".to_string());
        assert!(a.equals(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_requires_same_chain() {
        let a = token(ChainId::MAINNET, ADDRESS_ONE, "ABC");
        let b = token(ChainId::ROPSTEN, ADDRESS_ONE, "ABC");
        assert!(!a.equals(&b));
    }

    #[test]
    fn test_sorts_before() {
        let a = token(ChainId::MAINNET, ADDRESS_ONE, "A");
        let b = token(ChainId::MAINNET, ADDRESS_TWO, "B");
        assert!(a.sorts_before(&b).unwrap());
        assert!(!b.sorts_before(&a).unwrap());
    }

    #[test]
    fn test_sorts_before_chain_mismatch() {
        let a = token(ChainId::MAINNET, ADDRESS_ONE, "A");
        let b = token(ChainId::KOVAN, ADDRESS_TWO, "B");
        assert_eq!(
            a.sorts_before(&b),
            Err(SdkError::ChainMismatch {
                left: ChainId::MAINNET,
                right: ChainId::KOVAN,
            })
        );
    }

    #[test]
    fn test_sorts_before_identical_addresses() {
        let a = token(ChainId::MAINNET, ADDRESS_ONE, "A");
        assert!(matches!(
            a.sorts_before(&a.clone()),
            Err(SdkError::IdenticalAddresses(_))
        ));
    }

    #[test]
    fn test_weth() {
        let weth = Token::weth(ChainId::MAINNET).unwrap();
        assert_eq!(weth.decimals, 18);
        assert_eq!(weth.symbol(), Some("WETH"));
        assert_eq!(
            weth.address.to_string(),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
        for chain in [ChainId::ROPSTEN, ChainId::RINKEBY, ChainId::GOERLI, ChainId::KOVAN] {
            assert!(Token::weth(chain).is_some());
        }
        assert!(Token::weth(ChainId::new(137)).is_none());
    }
}
