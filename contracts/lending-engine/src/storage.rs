use soroban_sdk::{contracttype, Address, Env};

// Storage key types for the contract
#[contracttype]
pub enum DataKey {
    TokenLedger,     // Address, set once at initialize
    CollateralToken, // Address, set once at initialize
    OfferCount,      // u64, next offer id
    Offer(u64),      // Offer per id, append-only
}

/// One lender's standing proposal. Offers move CREATED -> FUNDED -> REPAID
/// and are never removed from storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    pub id: u64,
    pub lender: Address,
    pub amount: i128,
    pub ltv_rate: i128,
    pub daily_interest_rate: i128,
    pub duration: u64,
    pub borrower: Option<Address>,
    pub is_taken: bool,
    pub collateral_held: i128,
    pub funded_at: u64,
    pub loan_expiry: u64,
    pub is_repaid: bool,
}

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

pub fn read_token_ledger(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::TokenLedger)
}

pub fn write_token_ledger(env: &Env, ledger: &Address) {
    env.storage().persistent().set(&DataKey::TokenLedger, ledger);
}

pub fn read_collateral_token(env: &Env) -> Option<Address> {
    env.storage().persistent().get(&DataKey::CollateralToken)
}

pub fn write_collateral_token(env: &Env, token: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::CollateralToken, token);
}

pub fn read_offer_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::OfferCount)
        .unwrap_or(0u64)
}

pub fn write_offer_count(env: &Env, count: u64) {
    env.storage().persistent().set(&DataKey::OfferCount, &count);
}

pub fn read_offer(env: &Env, id: u64) -> Option<Offer> {
    let key = DataKey::Offer(id);
    let persistent = env.storage().persistent();
    if persistent.has(&key) {
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    persistent.get(&key)
}

pub fn write_offer(env: &Env, offer: &Offer) {
    let key = DataKey::Offer(offer.id);
    let persistent = env.storage().persistent();
    persistent.set(&key, offer);
    persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn bump_core_ttl(env: &Env) {
    let persistent = env.storage().persistent();
    if persistent.has(&DataKey::TokenLedger) {
        persistent.extend_ttl(&DataKey::TokenLedger, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::CollateralToken) {
        persistent.extend_ttl(&DataKey::CollateralToken, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::OfferCount) {
        persistent.extend_ttl(&DataKey::OfferCount, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
