use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::Plan;

const EVT_PLAN: Symbol = symbol_short!("plan");
const EVT_INVEST: Symbol = symbol_short!("invest");
const EVT_REWARD: Symbol = symbol_short!("reward");
const EVT_CLOSE: Symbol = symbol_short!("close");
const EVT_FUND: Symbol = symbol_short!("fund");

pub(crate) fn plan_created(env: &Env, plan_id: u32, plan: &Plan) {
    env.events()
        .publish((EVT_PLAN, plan_id), (plan.rate, plan.min_deposit));
}

pub(crate) fn invested(env: &Env, owner: &Address, id: u32, funder: &Address, amount: i128) {
    env.events()
        .publish((EVT_INVEST, owner.clone(), id), (funder.clone(), amount));
}

pub(crate) fn reward_withdrawn(
    env: &Env,
    owner: &Address,
    id: u32,
    beneficiary: &Address,
    amount: i128,
) {
    env.events()
        .publish((EVT_REWARD, owner.clone(), id), (beneficiary.clone(), amount));
}

pub(crate) fn closed(env: &Env, owner: &Address, id: u32, principal: i128) {
    env.events()
        .publish((EVT_CLOSE, owner.clone(), id), principal);
}

pub(crate) fn reserve_funded(env: &Env, funder: &Address, amount: i128) {
    env.events().publish((EVT_FUND, funder.clone()), amount);
}
