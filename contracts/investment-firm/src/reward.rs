use soroban_sdk::{Env, U256};

use crate::error::Error;

/// Fixed-point base shared by token amounts and plan rates (18 decimals)
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Seconds in a year for reward calculation
pub const SECONDS_PER_YEAR: u64 = 60 * 60 * 24 * 365;

/// Reward accrues per whole hour; a year is exactly 8760 of them.
pub const ACCRUAL_PERIOD: u64 = 60 * 60;

/// Reward owed on `deposit` at yearly `rate` after `elapsed` seconds:
///
/// `floor(deposit * rate * accrued / (SECONDS_PER_YEAR * SCALE))`
///
/// where `accrued` is `elapsed` rounded down to a whole `ACCRUAL_PERIOD`.
/// Always truncates. Intermediates are 256-bit so the product never
/// overflows before the division.
pub fn calculate_reward(env: &Env, deposit: i128, rate: i128, elapsed: u64) -> Result<i128, Error> {
    if deposit < 0 || rate < 0 {
        return Err(Error::InvalidAmount);
    }

    let accrued = elapsed - elapsed % ACCRUAL_PERIOD;
    if deposit == 0 || rate == 0 || accrued == 0 {
        return Ok(0);
    }

    let weighted = U256::from_u128(env, deposit as u128).mul(&U256::from_u128(env, rate as u128));
    let year = U256::from_u128(env, SECONDS_PER_YEAR as u128 * SCALE as u128);
    let accrued = U256::from_u128(env, accrued as u128);

    // floor(w * t / y) == (w / y) * t + floor((w % y) * t / y), and neither
    // side of the sum can exceed 256 bits.
    let whole = weighted.div(&year).mul(&accrued);
    let part = weighted.rem_euclid(&year).mul(&accrued).div(&year);

    let reward = whole.add(&part).to_u128().ok_or(Error::Overflow)?;
    i128::try_from(reward).map_err(|_| Error::Overflow)
}

#[cfg(test)]
mod test {
    use super::*;

    const DAY: u64 = 60 * 60 * 24;

    #[test]
    fn test_one_year_at_twenty_percent() {
        let env = Env::default();
        let reward = calculate_reward(&env, SCALE, SCALE / 5, SECONDS_PER_YEAR).unwrap();
        assert_eq!(reward, SCALE / 5);
    }

    #[test]
    fn test_partial_period_is_truncated() {
        let env = Env::default();
        let year = calculate_reward(&env, SCALE, SCALE / 5, SECONDS_PER_YEAR).unwrap();
        let year_and_half_hour =
            calculate_reward(&env, SCALE, SCALE / 5, SECONDS_PER_YEAR + 30 * 60).unwrap();
        assert_eq!(year, year_and_half_hour);

        assert_eq!(calculate_reward(&env, SCALE, SCALE, ACCRUAL_PERIOD - 1).unwrap(), 0);
    }

    #[test]
    fn test_zero_inputs() {
        let env = Env::default();
        assert_eq!(calculate_reward(&env, SCALE, SCALE / 5, 0).unwrap(), 0);
        assert_eq!(calculate_reward(&env, SCALE, 0, SECONDS_PER_YEAR).unwrap(), 0);
        assert_eq!(calculate_reward(&env, 0, SCALE, SECONDS_PER_YEAR).unwrap(), 0);
    }

    #[test]
    fn test_floors_instead_of_rounding() {
        let env = Env::default();
        // 10 units at 10% for one day is 10^18 / 365 = 2739726027397260.27...
        let reward = calculate_reward(&env, 10 * SCALE, SCALE / 10, DAY).unwrap();
        assert_eq!(reward, 2_739_726_027_397_260);

        // 1 base unit at 100% for an hour is far below one base unit
        assert_eq!(calculate_reward(&env, 1, SCALE, ACCRUAL_PERIOD).unwrap(), 0);
    }

    #[test]
    fn test_large_inputs_do_not_overflow_intermediates() {
        let env = Env::default();
        let deposit = 1_000_000_000 * SCALE;
        let reward = calculate_reward(&env, deposit, 5 * SCALE, 10 * SECONDS_PER_YEAR).unwrap();
        assert_eq!(reward, 50 * deposit);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let env = Env::default();
        assert_eq!(
            calculate_reward(&env, -1, SCALE, SECONDS_PER_YEAR),
            Err(Error::InvalidAmount)
        );
        assert_eq!(
            calculate_reward(&env, SCALE, -1, SECONDS_PER_YEAR),
            Err(Error::InvalidAmount)
        );
    }

    #[test]
    fn test_unrepresentable_reward_is_overflow() {
        let env = Env::default();
        assert_eq!(
            calculate_reward(&env, i128::MAX, i128::MAX, SECONDS_PER_YEAR),
            Err(Error::Overflow)
        );
    }
}
