use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};

use crate::errors::Error;
use crate::events::{EngineBound, Mint, Transfer};
use crate::storage::{
    bump_core_ttl, read_balance, read_lending_engine, read_owner, read_total_supply,
    write_balance, write_lending_engine, write_owner, write_total_supply,
};

#[contract]
pub struct TokenLedger;

#[contractimpl]
impl TokenLedger {
    /// Records the owner capability. The owner is the only account that may
    /// mint and bind the lending engine custody account.
    pub fn initialize(env: Env, owner: Address) {
        if read_owner(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        owner.require_auth();
        write_owner(&env, &owner);
        write_total_supply(&env, 0);
    }

    /// Balance of an account, zero if it has never been credited.
    pub fn get_balance(env: Env, account: Address) -> i128 {
        read_balance(&env, &account)
    }

    /// Sum of all mints. Equals the sum of all balances at every point.
    pub fn get_total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn get_owner(env: Env) -> Address {
        match read_owner(&env) {
            Some(owner) => owner,
            None => panic_with_error!(&env, Error::NotInitialized),
        }
    }

    /// Owner-only issuance: credits `to` with new supply, no debit anywhere.
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) {
        let owner = Self::require_owner(&env, &caller);
        owner.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let credited = match read_balance(&env, &to).checked_add(amount) {
            Some(v) => v,
            None => panic_with_error!(&env, Error::Overflow),
        };
        let supply = match read_total_supply(&env).checked_add(amount) {
            Some(v) => v,
            None => panic_with_error!(&env, Error::Overflow),
        };
        write_balance(&env, &to, credited);
        write_total_supply(&env, supply);
        bump_core_ttl(&env);
        Mint { to, amount }.publish(&env);
    }

    /// Self-service transfer. Debits `from` and credits `to` in one unit;
    /// never leaves a negative balance behind.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if amount <= 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            panic_with_error!(&env, Error::InsufficientBalance);
        }
        // Read the destination after the debit so a self-transfer nets to zero.
        write_balance(&env, &from, from_balance - amount);
        let credited = match read_balance(&env, &to).checked_add(amount) {
            Some(v) => v,
            None => panic_with_error!(&env, Error::Overflow),
        };
        write_balance(&env, &to, credited);
        Transfer { from, to, amount }.publish(&env);
    }

    /// Owner-only, one-shot binding of the lending engine custody account.
    /// The binding grants no transfer power; it only lets observers resolve
    /// which account holds offers in custody.
    pub fn set_lending_engine(env: Env, caller: Address, engine: Address) {
        let owner = Self::require_owner(&env, &caller);
        owner.require_auth();
        if read_lending_engine(&env).is_some() {
            panic_with_error!(&env, Error::EngineAlreadyBound);
        }
        write_lending_engine(&env, &engine);
        bump_core_ttl(&env);
        EngineBound { engine }.publish(&env);
    }

    pub fn get_lending_engine(env: Env) -> Option<Address> {
        read_lending_engine(&env)
    }

    fn require_owner(env: &Env, caller: &Address) -> Address {
        let Some(owner) = read_owner(env) else {
            panic_with_error!(env, Error::NotInitialized);
        };
        if caller != &owner {
            panic_with_error!(env, Error::Unauthorized);
        }
        owner
    }
}
