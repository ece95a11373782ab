use soroban_sdk::{contracttype, Address};

/// An investment tier defined by the admin. Identified by its index in the
/// plan registry.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Plan {
    /// Yearly reward per unit deposited, 18-decimal fixed point (2 * 10^17 = 20%)
    pub rate: i128,
    /// Smallest accepted deposit, same unit as token amounts
    pub min_deposit: i128,
}

/// A single deposit made against a plan on behalf of `owner`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    /// Per-owner sequence number, starting at 1
    pub id: u32,
    /// Account that may withdraw reward from or close this investment
    pub owner: Address,
    /// Plan index fixed at creation
    pub plan_id: u32,
    /// Principal currently held; zeroed on close
    pub deposit: i128,
    /// Timestamp of the deposit
    pub start_time: u64,
    /// Start of the current accrual window
    pub last_withdraw_time: u64,
    /// False once the investment has been closed
    pub is_active: bool,
}
