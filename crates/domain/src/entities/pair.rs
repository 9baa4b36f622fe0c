//! Dynamic-fee pair with real and virtual reserves.
//!
//! Swaps are priced on the virtual reserves and capped by the real ones.
//! Liquidity shares are minted against the real reserves. All arithmetic is
//! 256-bit with 512-bit intermediates and truncates exactly as the pair
//! contract does.

use crate::entities::token::Token;
use crate::error::SdkError;
use crate::math::big_int::{U256, checked_add, sqrt};
use crate::math::constant_product::{
    PRECISION, calculate_in_amount, calculate_out_amount, calculate_root_k,
};
use crate::math::liquidity::{
    initial_liquidity, liquidity_value, proportional_liquidity, protocol_fee_liquidity,
};
use crate::value_objects::address::Address;
use crate::value_objects::amount::TokenAmount;
use crate::value_objects::chain_id::ChainId;
use crate::value_objects::fraction::Fraction;
use crate::value_objects::price::Price;
use rust_decimal::Decimal;
use serde::Serialize;

/// Decimals of the pair's liquidity token.
pub const LIQUIDITY_TOKEN_DECIMALS: u8 = 18;
pub const LIQUIDITY_TOKEN_SYMBOL: &str = "DMM-LP";
pub const LIQUIDITY_TOKEN_NAME: &str = "DMM LP";

/// Result of a swap quote.
///
/// `virtual_reserves` holds the virtual reserves after the trade, input token
/// first. The pair itself is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapOutcome {
    pub amount: TokenAmount,
    pub virtual_reserves: [TokenAmount; 2],
}

/// Snapshot of a pool: two real reserves, two virtual reserves and a fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pair {
    address: Address,
    liquidity_token: Token,
    token_amounts: [TokenAmount; 2],
    virtual_token_amounts: [TokenAmount; 2],
    fee: U256,
}

impl Pair {
    /// Builds a pair, ordering the tokens so that `token0` sorts first.
    ///
    /// `virtual_a` and `virtual_b` must be denominated in the same tokens as
    /// `amount_a` and `amount_b`. `fee` is a numerator over [`PRECISION`].
    pub fn new(
        address: Address,
        amount_a: TokenAmount,
        amount_b: TokenAmount,
        virtual_a: TokenAmount,
        virtual_b: TokenAmount,
        fee: U256,
    ) -> Result<Self, SdkError> {
        if fee >= PRECISION {
            return Err(SdkError::InvalidFee { fee });
        }
        if !virtual_a.currency().equals(amount_a.currency())
            || !virtual_b.currency().equals(amount_b.currency())
        {
            return Err(SdkError::TokenMismatch(
                "virtual reserve token differs from reserve token",
            ));
        }

        let (token_amounts, virtual_token_amounts) =
            if amount_a.currency().sorts_before(amount_b.currency())? {
                ([amount_a, amount_b], [virtual_a, virtual_b])
            } else {
                ([amount_b, amount_a], [virtual_b, virtual_a])
            };

        let liquidity_token = Token::new(
            token_amounts[0].currency().chain_id,
            address,
            LIQUIDITY_TOKEN_DECIMALS,
            Some(LIQUIDITY_TOKEN_SYMBOL.to_string()),
            Some(LIQUIDITY_TOKEN_NAME.to_string()),
        );

        Ok(Self {
            address,
            liquidity_token,
            token_amounts,
            virtual_token_amounts,
            fee,
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    pub fn chain_id(&self) -> ChainId {
        self.token0().chain_id
    }

    pub fn token0(&self) -> &Token {
        self.token_amounts[0].currency()
    }

    pub fn token1(&self) -> &Token {
        self.token_amounts[1].currency()
    }

    pub fn reserve0(&self) -> &TokenAmount {
        &self.token_amounts[0]
    }

    pub fn reserve1(&self) -> &TokenAmount {
        &self.token_amounts[1]
    }

    pub fn virtual_reserve0(&self) -> &TokenAmount {
        &self.virtual_token_amounts[0]
    }

    pub fn virtual_reserve1(&self) -> &TokenAmount {
        &self.virtual_token_amounts[1]
    }

    /// Fee numerator over [`PRECISION`].
    pub fn fee(&self) -> U256 {
        self.fee
    }

    /// Fee as a rate (`0.003` for 0.3%).
    pub fn fee_rate(&self) -> Result<Decimal, SdkError> {
        Fraction::new(self.fee, PRECISION)?.to_decimal()
    }

    pub fn involves_token(&self, token: &Token) -> bool {
        token.equals(self.token0()) || token.equals(self.token1())
    }

    fn index_of(&self, token: &Token) -> Result<usize, SdkError> {
        if token.equals(self.token0()) {
            Ok(0)
        } else if token.equals(self.token1()) {
            Ok(1)
        } else {
            Err(SdkError::TokenNotInPair)
        }
    }

    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount, SdkError> {
        Ok(&self.token_amounts[self.index_of(token)?])
    }

    pub fn virtual_reserve_of(&self, token: &Token) -> Result<&TokenAmount, SdkError> {
        Ok(&self.virtual_token_amounts[self.index_of(token)?])
    }

    /// Mid price of token0 in token1, from the virtual reserves.
    pub fn token0_price(&self) -> Result<Price<Token>, SdkError> {
        Price::new(
            self.token0().clone(),
            self.token1().clone(),
            self.virtual_token_amounts[0].raw(),
            self.virtual_token_amounts[1].raw(),
        )
    }

    /// Mid price of token1 in token0, from the virtual reserves.
    pub fn token1_price(&self) -> Result<Price<Token>, SdkError> {
        Price::new(
            self.token1().clone(),
            self.token0().clone(),
            self.virtual_token_amounts[1].raw(),
            self.virtual_token_amounts[0].raw(),
        )
    }

    pub fn price_of(&self, token: &Token) -> Result<Price<Token>, SdkError> {
        match self.index_of(token)? {
            0 => self.token0_price(),
            _ => self.token1_price(),
        }
    }

    fn ensure_reserves(&self) -> Result<(), SdkError> {
        let empty = self
            .token_amounts
            .iter()
            .chain(self.virtual_token_amounts.iter())
            .any(TokenAmount::is_zero);
        if empty {
            return Err(SdkError::InsufficientReserves);
        }
        Ok(())
    }

    /// Quotes the output of selling `input_amount` into the pair.
    pub fn get_output_amount(&self, input_amount: &TokenAmount) -> Result<SwapOutcome, SdkError> {
        let input_index = self.index_of(input_amount.currency())?;
        let output_index = 1 - input_index;
        self.ensure_reserves()?;

        let input_reserve = &self.virtual_token_amounts[input_index];
        let output_reserve = &self.virtual_token_amounts[output_index];
        let output_raw = calculate_out_amount(
            input_amount.raw(),
            input_reserve.raw(),
            output_reserve.raw(),
            self.fee,
        )?;

        // Virtual reserves may price more than the pool actually holds.
        if output_raw > self.token_amounts[output_index].raw() {
            return Err(SdkError::InsufficientReserves);
        }
        if output_raw.is_zero() {
            return Err(SdkError::InsufficientInputAmount);
        }

        let output_amount = TokenAmount::new(output_reserve.currency().clone(), output_raw);
        let virtual_reserves = [
            input_reserve.add(input_amount)?,
            output_reserve.subtract(&output_amount)?,
        ];
        Ok(SwapOutcome {
            amount: output_amount,
            virtual_reserves,
        })
    }

    /// Quotes the input needed to buy `output_amount` from the pair.
    ///
    /// Rounds against the trader: the result never under-pays the pool.
    pub fn get_input_amount(&self, output_amount: &TokenAmount) -> Result<SwapOutcome, SdkError> {
        let output_index = self.index_of(output_amount.currency())?;
        let input_index = 1 - output_index;
        self.ensure_reserves()?;

        let output_reserve = &self.virtual_token_amounts[output_index];
        let input_reserve = &self.virtual_token_amounts[input_index];
        if output_amount.raw() >= self.token_amounts[output_index].raw()
            || output_amount.raw() >= output_reserve.raw()
        {
            return Err(SdkError::InsufficientReserves);
        }

        let input_raw = calculate_in_amount(
            output_amount.raw(),
            input_reserve.raw(),
            output_reserve.raw(),
            self.fee,
        )?;
        let input_amount = TokenAmount::new(input_reserve.currency().clone(), input_raw);
        let virtual_reserves = [
            input_reserve.add(&input_amount)?,
            output_reserve.subtract(output_amount)?,
        ];
        Ok(SwapOutcome {
            amount: input_amount,
            virtual_reserves,
        })
    }

    /// Liquidity minted for depositing `amount_a` and `amount_b`.
    pub fn get_liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount, SdkError> {
        if !total_supply.currency().equals(&self.liquidity_token) {
            return Err(SdkError::TokenMismatch(
                "total supply is not the liquidity token",
            ));
        }
        let (amount0, amount1) = if amount_a.currency().sorts_before(amount_b.currency())? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if !amount0.currency().equals(self.token0()) || !amount1.currency().equals(self.token1())
        {
            return Err(SdkError::TokenMismatch("deposit tokens are not the pair tokens"));
        }

        let liquidity = if total_supply.is_zero() {
            initial_liquidity(amount0.raw(), amount1.raw())
        } else {
            proportional_liquidity(
                amount0.raw(),
                amount1.raw(),
                total_supply.raw(),
                self.token_amounts[0].raw(),
                self.token_amounts[1].raw(),
            )?
        };
        if liquidity.is_zero() {
            return Err(SdkError::InsufficientInputAmount);
        }
        Ok(TokenAmount::new(self.liquidity_token.clone(), liquidity))
    }

    /// Amount of `token` redeemable by burning `liquidity`.
    ///
    /// With `fee_on`, the supply is first grown by the protocol fee that would
    /// accrue since `k_last`. A `k_last` of zero means the fee was never
    /// checkpointed and leaves the supply unchanged.
    pub fn get_liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<U256>,
    ) -> Result<TokenAmount, SdkError> {
        let reserve = self.reserve_of(token)?;
        if !total_supply.currency().equals(&self.liquidity_token) {
            return Err(SdkError::TokenMismatch(
                "total supply is not the liquidity token",
            ));
        }
        if !liquidity.currency().equals(&self.liquidity_token) {
            return Err(SdkError::TokenMismatch("liquidity is not the liquidity token"));
        }
        if liquidity.raw() > total_supply.raw() {
            return Err(SdkError::InsufficientLiquidity);
        }

        let adjusted_supply = if fee_on {
            let k_last = k_last.ok_or(SdkError::MissingKLast)?;
            self.supply_with_protocol_fee(total_supply.raw(), k_last)?
        } else {
            total_supply.raw()
        };

        let value = liquidity_value(liquidity.raw(), reserve.raw(), adjusted_supply)?;
        Ok(TokenAmount::new(token.clone(), value))
    }

    fn supply_with_protocol_fee(&self, total_supply: U256, k_last: U256) -> Result<U256, SdkError> {
        if k_last.is_zero() {
            return Ok(total_supply);
        }
        let root_k = calculate_root_k(
            self.virtual_token_amounts[0].raw(),
            self.virtual_token_amounts[1].raw(),
        );
        let root_k_last = sqrt(k_last);
        let fee_liquidity = protocol_fee_liquidity(total_supply, root_k, root_k_last)?;
        Ok(checked_add(total_supply, fee_liquidity)?)
    }
}
