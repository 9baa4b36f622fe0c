//! Property-based tests for the pair invariants.
//!
//! 1. **Conservation**: the input quoted for an output always buys at least
//!    that output, so truncation never costs the pool.
//! 2. **Fee monotonicity**: a higher fee never yields more output.
//! 3. **Zero fee**: the plain `x * y = k` formula is reproduced exactly.
//! 4. **Ordering**: argument order does not change token0/token1.
//! 5. **Token equality**: metadata never affects identity.

use proptest::prelude::*;

use crate::entities::pair::Pair;
use crate::entities::token::Token;
use crate::math::big_int::U256;
use crate::math::constant_product::PRECISION;
use crate::value_objects::address::Address;
use crate::value_objects::amount::TokenAmount;
use crate::value_objects::chain_id::ChainId;

fn tok(last_byte: u8) -> Token {
    let mut bytes = [0u8; 20];
    bytes[19] = last_byte;
    Token::new(ChainId::MAINNET, Address::new(bytes), 18, None, None)
}

fn make_pair(reserve0: u128, reserve1: u128, fee: U256) -> Pair {
    let (a, b) = (tok(1), tok(2));
    let Ok(pair) = Pair::new(
        Address::new([0xaa; 20]),
        TokenAmount::new(a.clone(), reserve0),
        TokenAmount::new(b.clone(), reserve1),
        TokenAmount::new(a, reserve0),
        TokenAmount::new(b, reserve1),
        fee,
    ) else {
        panic!("valid pair");
    };
    pair
}

fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Fee numerators up to 10% of [`PRECISION`].
fn fee_strategy() -> impl Strategy<Value = U256> {
    (0u64..=100_000_000_000_000_000u64).prop_map(U256::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_quoted_input_covers_output(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        fee in fee_strategy(),
        divisor in 2u128..=10_000u128,
    ) {
        let pair = make_pair(r0, r1, fee);
        let wanted = TokenAmount::new(tok(2), (r1 / divisor).max(1));
        let Ok(quote) = pair.get_input_amount(&wanted) else {
            return Ok(());
        };
        let Ok(received) = pair.get_output_amount(&quote.amount) else {
            return Ok(());
        };
        prop_assert!(
            received.amount.raw() >= wanted.raw(),
            "quoted input {} only buys {} of {}",
            quote.amount.raw(), received.amount.raw(), wanted.raw()
        );
    }

    #[test]
    fn prop_higher_fee_never_pays_more(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        low in fee_strategy(),
        bump in 1u64..=100_000_000_000_000_000u64,
    ) {
        let high = low + U256::from(bump);
        prop_assume!(high < PRECISION);
        let input = TokenAmount::new(tok(1), (r0 / 100).max(1));
        let Ok(cheap) = make_pair(r0, r1, low).get_output_amount(&input) else {
            return Ok(());
        };
        let expensive = make_pair(r0, r1, high)
            .get_output_amount(&input)
            .map(|outcome| outcome.amount.raw())
            .unwrap_or_default();
        prop_assert!(expensive <= cheap.amount.raw());
    }

    #[test]
    fn prop_zero_fee_is_constant_product(
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000_000_000_000u128,
    ) {
        let pair = make_pair(r0, r1, U256::zero());
        let expected = U256::from(amount_in) * U256::from(r1)
            / (U256::from(r0) + U256::from(amount_in));
        match pair.get_output_amount(&TokenAmount::new(tok(1), amount_in)) {
            Ok(out) => prop_assert_eq!(out.amount.raw(), expected),
            Err(_) => prop_assert!(expected.is_zero()),
        }
    }

    #[test]
    fn prop_token_order_is_canonical(
        a in 1u8..=255u8,
        b in 1u8..=255u8,
        r0 in reserve_strategy(),
        r1 in reserve_strategy(),
    ) {
        prop_assume!(a != b);
        let (ta, tb) = (tok(a), tok(b));
        let build = |x: &Token, rx: u128, y: &Token, ry: u128| {
            Pair::new(
                Address::new([0xbb; 20]),
                TokenAmount::new(x.clone(), rx),
                TokenAmount::new(y.clone(), ry),
                TokenAmount::new(x.clone(), rx),
                TokenAmount::new(y.clone(), ry),
                U256::zero(),
            )
        };
        let (Ok(forward), Ok(reversed)) = (build(&ta, r0, &tb, r1), build(&tb, r1, &ta, r0)) else {
            panic!("valid pairs");
        };
        prop_assert_eq!(forward.token0(), reversed.token0());
        prop_assert_eq!(forward.token1(), reversed.token1());
        prop_assert_eq!(forward.reserve0(), reversed.reserve0());
        prop_assert!(forward.token0().sorts_before(forward.token1()).unwrap_or(false));
    }

    #[test]
    fn prop_token_equality_ignores_metadata(
        byte in any::<u8>(),
        decimals in any::<u8>(),
        symbol in "[A-Z]{1,6}",
    ) {
        let plain = tok(byte);
        let decorated = Token::new(
            plain.chain_id,
            plain.address,
            decimals,
            Some(symbol.clone()),
            Some(symbol),
        );
        prop_assert!(plain.equals(&decorated));
        let mut other_chain = decorated.clone();
        other_chain.chain_id = ChainId::ROPSTEN;
        prop_assert!(!plain.equals(&other_chain));
    }
}
