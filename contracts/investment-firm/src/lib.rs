#![no_std]
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

mod error;
mod events;
mod reward;
mod storage;
mod types;


pub use error::Error;
pub use reward::{ACCRUAL_PERIOD, SCALE, SECONDS_PER_YEAR};
pub use types::{Investment, Plan};

#[contract]
pub struct InvestmentFirm;

#[contractimpl]
impl InvestmentFirm {
    /// Deploy the ledger with its admin and the token it custodies.
    ///
    /// The admin is fixed here for the lifetime of the contract; there is no
    /// operation that changes it.
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        storage::write_admin(&env, &admin);
        storage::write_token(&env, &token);
        storage::write_plans(&env, &Vec::new(&env));
        storage::write_held_funds(&env, 0);
        storage::extend_instance(&env);

        log!(&env, "investment firm deployed, admin {}", admin);
    }

    // --- Access control -----------------------------------------------------

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        storage::read_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::read_token(&env)
    }

    /// Whether `caller` is the administrator.
    pub fn is_admin(env: Env, caller: Address) -> bool {
        match storage::read_admin(&env) {
            Ok(admin) => admin == caller,
            Err(_) => false,
        }
    }

    // --- Plans --------------------------------------------------------------

    /// Append a plan to the registry and return its index.
    ///
    /// # Security:
    /// - `caller` must authorize and must be the admin
    /// - Rate and minimum deposit must be non-negative
    pub fn create_plan(
        env: Env,
        caller: Address,
        rate: i128,
        min_deposit: i128,
    ) -> Result<u32, Error> {
        caller.require_auth();

        if !Self::is_admin(env.clone(), caller) {
            return Err(Error::Unauthorized);
        }
        if rate < 0 || min_deposit < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut plans = storage::read_plans(&env);
        let plan_id = plans.len();
        let plan = Plan { rate, min_deposit };
        plans.push_back(plan.clone());
        storage::write_plans(&env, &plans);
        storage::extend_instance(&env);

        events::plan_created(&env, plan_id, &plan);
        log!(&env, "plan {} created, rate {}", plan_id, rate);

        Ok(plan_id)
    }

    /// All plans in creation order.
    pub fn get_plans(env: Env) -> Vec<Plan> {
        storage::read_plans(&env)
    }

    pub fn get_plan(env: Env, plan_id: u32) -> Result<Plan, Error> {
        storage::read_plan(&env, plan_id)
    }

    // --- Investments --------------------------------------------------------

    /// Deposit `amount` from `funder` into a new investment controlled by
    /// `owner`, returning its id.
    ///
    /// Any account may fund an investment for any owner; only the owner can
    /// later withdraw reward from it or close it.
    pub fn invest(
        env: Env,
        funder: Address,
        plan_id: u32,
        owner: Address,
        amount: i128,
    ) -> Result<u32, Error> {
        funder.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let plan = storage::read_plan(&env, plan_id)?;
        if amount < plan.min_deposit {
            return Err(Error::DepositTooSmall);
        }

        let now = env.ledger().timestamp();
        let id = storage::read_investment_count(&env, &owner)
            .checked_add(1)
            .ok_or(Error::Overflow)?;
        let held = storage::read_held_funds(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        let token = token::Client::new(&env, &storage::read_token(&env)?);
        token.transfer(&funder, &env.current_contract_address(), &amount);

        storage::write_investment(
            &env,
            &Investment {
                id,
                owner: owner.clone(),
                plan_id,
                deposit: amount,
                start_time: now,
                last_withdraw_time: now,
                is_active: true,
            },
        );
        storage::write_investment_count(&env, &owner, id);
        storage::write_held_funds(&env, held);
        storage::extend_instance(&env);

        events::invested(&env, &owner, id, &funder, amount);
        log!(&env, "investment {} opened for {} with {}", id, owner, amount);

        Ok(id)
    }

    /// Investments of `owner`, ordered by id.
    pub fn get_investments(env: Env, owner: Address) -> Vec<Investment> {
        storage::read_investments(&env, &owner)
    }

    pub fn get_investment(env: Env, owner: Address, id: u32) -> Result<Investment, Error> {
        storage::read_investment(&env, &owner, id)
    }

    /// Reward accrued by `investment` since its last withdrawal. Read-only.
    ///
    /// Only `owner` and `id` are taken from the argument; the stored record
    /// is what gets evaluated, so a stale copy of a closed investment earns 0.
    pub fn get_investment_earning(env: Env, investment: Investment) -> Result<i128, Error> {
        Self::get_earning(env, investment.owner, investment.id)
    }

    /// Same as `get_investment_earning`, looked up by owner and id.
    pub fn get_earning(env: Env, owner: Address, id: u32) -> Result<i128, Error> {
        let investment = storage::read_investment(&env, &owner, id)?;
        if !investment.is_active {
            return Ok(0);
        }
        let now = env.ledger().timestamp();
        Self::earning_at(&env, &investment, now)
    }

    /// Pay `amount` of accrued reward to `beneficiary`.
    ///
    /// # Security:
    /// - `caller` must authorize and must own the investment
    /// - `amount` is checked against the earning computed now, never a
    ///   value supplied by the caller
    /// - Held funds are checked and debited before the transfer
    /// - `beneficiary` cannot be the ledger itself
    ///
    /// The accrual window restarts at now whatever `amount` is, so any
    /// reward left unwithdrawn is forfeited.
    pub fn withdraw_reward(
        env: Env,
        caller: Address,
        owner: Address,
        id: u32,
        amount: i128,
        beneficiary: Address,
    ) -> Result<i128, Error> {
        caller.require_auth();
        if caller != owner {
            return Err(Error::Unauthorized);
        }

        let mut investment = storage::read_investment(&env, &owner, id)?;
        if !investment.is_active {
            return Err(Error::Inactive);
        }
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }

        let now = env.ledger().timestamp();
        let earning = Self::earning_at(&env, &investment, now)?;
        if amount > earning {
            return Err(Error::ExceedsEarning);
        }

        let held = storage::read_held_funds(&env);
        if held < amount {
            return Err(Error::InsufficientFunds);
        }

        investment.last_withdraw_time = now;
        storage::write_investment(&env, &investment);
        storage::write_held_funds(&env, held - amount);
        storage::extend_instance(&env);

        let token = token::Client::new(&env, &storage::read_token(&env)?);
        token.transfer(&env.current_contract_address(), &beneficiary, &amount);

        events::reward_withdrawn(&env, &owner, id, &beneficiary, amount);
        log!(&env, "investment {} of {} paid reward {}", id, owner, amount);

        Ok(amount)
    }

    /// Return the principal of an investment to its owner and close it.
    ///
    /// Accrued reward is not paid out; withdraw it first or it is lost.
    pub fn close_investment(
        env: Env,
        caller: Address,
        owner: Address,
        id: u32,
    ) -> Result<i128, Error> {
        caller.require_auth();
        if caller != owner {
            return Err(Error::Unauthorized);
        }

        let mut investment = storage::read_investment(&env, &owner, id)?;
        if !investment.is_active {
            return Err(Error::Inactive);
        }

        let principal = investment.deposit;
        let held = storage::read_held_funds(&env);
        if held < principal {
            return Err(Error::InsufficientFunds);
        }

        // Mark closed before the transfer so the principal can only leave once
        investment.is_active = false;
        investment.deposit = 0;
        storage::write_investment(&env, &investment);
        storage::write_held_funds(&env, held - principal);
        storage::extend_instance(&env);

        let token = token::Client::new(&env, &storage::read_token(&env)?);
        token.transfer(&env.current_contract_address(), &owner, &principal);

        events::closed(&env, &owner, id, principal);
        log!(&env, "investment {} of {} closed, returned {}", id, owner, principal);

        Ok(principal)
    }

    // --- Funds --------------------------------------------------------------

    /// Add `amount` to the balance that rewards are paid from.
    pub fn fund_reserve(env: Env, funder: Address, amount: i128) -> Result<i128, Error> {
        funder.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        let held = storage::read_held_funds(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        let token = token::Client::new(&env, &storage::read_token(&env)?);
        token.transfer(&funder, &env.current_contract_address(), &amount);

        storage::write_held_funds(&env, held);
        storage::extend_instance(&env);

        events::reserve_funded(&env, &funder, amount);
        log!(&env, "reserve funded with {} by {}", amount, funder);

        Ok(held)
    }

    /// Balance currently custodied by the ledger.
    pub fn held_funds(env: Env) -> i128 {
        storage::read_held_funds(&env)
    }

    /// Reward for `deposit` at `rate` over `elapsed` seconds.
    pub fn calculate_reward(
        env: Env,
        deposit: i128,
        rate: i128,
        elapsed: u64,
    ) -> Result<i128, Error> {
        reward::calculate_reward(&env, deposit, rate, elapsed)
    }
}

impl InvestmentFirm {
    fn earning_at(env: &Env, investment: &Investment, now: u64) -> Result<i128, Error> {
        let plan = storage::read_plan(env, investment.plan_id)?;
        let elapsed = now
            .checked_sub(investment.last_withdraw_time)
            .ok_or(Error::TimeError)?;
        reward::calculate_reward(env, investment.deposit, plan.rate, elapsed)
    }
}
