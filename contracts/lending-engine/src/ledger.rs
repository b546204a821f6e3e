use soroban_sdk::{Address, Env};

/// Entry points the engine uses on the token ledger it settles against.
/// Matches the `token-ledger` contract interface.
#[soroban_sdk::contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn get_balance(env: Env, account: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}
