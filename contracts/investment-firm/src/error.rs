use soroban_sdk::contracterror;

/// Every way a ledger call can be rejected. A rejected call leaves no state behind.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the admin (plan ops) or not the investment owner.
    Unauthorized = 1,
    /// Plan index does not exist.
    InvalidPlan = 2,
    /// Deposit is below the plan's minimum.
    DepositTooSmall = 3,
    /// Owner has no investment with this id.
    NotFound = 4,
    /// Investment is already closed.
    Inactive = 5,
    /// Requested reward is larger than what has accrued.
    ExceedsEarning = 6,
    /// Held funds cannot cover the payout.
    InsufficientFunds = 7,
    /// Negative or zero amount where a positive one is required.
    InvalidAmount = 8,
    Overflow = 9,
    /// Ledger time went backwards relative to a stored timestamp.
    TimeError = 10,
    NotInitialized = 11,
    /// Reward cannot be paid to the ledger's own address.
    InvalidBeneficiary = 12,
}
