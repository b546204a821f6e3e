use soroban_sdk::{contracttype, Address, Env};

// Storage key types for the contract
#[contracttype]
pub enum DataKey {
    Owner,               // Address, set once at initialize
    TotalSupply,         // i128, grows on mint only
    Balance(Address),    // i128 per account, implicit zero
    LendingEngine,       // Address (optional), one-time binding
}

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

pub fn read_owner(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0i128)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().persistent().set(&DataKey::TotalSupply, &supply);
}

pub fn read_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    let persistent = env.storage().persistent();
    if persistent.has(&key) {
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    persistent.get(&key).unwrap_or(0i128)
}

pub fn write_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    let persistent = env.storage().persistent();
    persistent.set(&key, &amount);
    persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn read_lending_engine(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::LendingEngine)
}

pub fn write_lending_engine(env: &Env, engine: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::LendingEngine, engine);
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    if persistent.has(&DataKey::Owner) {
        persistent.extend_ttl(&DataKey::Owner, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::TotalSupply) {
        persistent.extend_ttl(&DataKey::TotalSupply, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::LendingEngine) {
        persistent.extend_ttl(&DataKey::LendingEngine, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
