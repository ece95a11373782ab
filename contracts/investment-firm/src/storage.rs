use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::Error;
use crate::types::{Investment, Plan};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const BUMP_THRESHOLD: u32 = DAY_IN_LEDGERS;
pub(crate) const BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Storage keys for the contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address, set by the constructor
    Admin,
    /// Token custodied by the contract
    Token,
    /// Append-only list of plans
    Plans,
    /// Custodied balance available for payouts
    HeldFunds,
    /// Mapping: (owner, id) -> Investment
    Investment(Address, u32),
    /// Number of investments ever opened for an owner
    InvestmentCount(Address),
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub(crate) fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub(crate) fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub(crate) fn read_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub(crate) fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub(crate) fn read_held_funds(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::HeldFunds)
        .unwrap_or(0)
}

pub(crate) fn write_held_funds(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::HeldFunds, &amount);
}

pub(crate) fn read_plans(env: &Env) -> Vec<Plan> {
    env.storage()
        .instance()
        .get(&DataKey::Plans)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn write_plans(env: &Env, plans: &Vec<Plan>) {
    env.storage().instance().set(&DataKey::Plans, plans);
}

pub(crate) fn read_plan(env: &Env, plan_id: u32) -> Result<Plan, Error> {
    read_plans(env).get(plan_id).ok_or(Error::InvalidPlan)
}

pub(crate) fn read_investment_count(env: &Env, owner: &Address) -> u32 {
    let key = DataKey::InvestmentCount(owner.clone());
    match env.storage().persistent().get(&key) {
        Some(count) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
            count
        }
        None => 0,
    }
}

pub(crate) fn write_investment_count(env: &Env, owner: &Address, count: u32) {
    let key = DataKey::InvestmentCount(owner.clone());
    env.storage().persistent().set(&key, &count);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

pub(crate) fn read_investment(env: &Env, owner: &Address, id: u32) -> Result<Investment, Error> {
    let key = DataKey::Investment(owner.clone(), id);
    let investment = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
    Ok(investment)
}

pub(crate) fn write_investment(env: &Env, investment: &Investment) {
    let key = DataKey::Investment(investment.owner.clone(), investment.id);
    env.storage().persistent().set(&key, investment);
    env.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_AMOUNT);
}

/// Investments of `owner` with ids `1..=count`, in id order.
pub(crate) fn read_investments(env: &Env, owner: &Address) -> Vec<Investment> {
    let mut investments = Vec::new(env);
    for id in 1..=read_investment_count(env, owner) {
        if let Ok(investment) = read_investment(env, owner, id) {
            investments.push_back(investment);
        }
    }
    investments
}
