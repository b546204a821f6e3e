use soroban_sdk::{contractevent, Address};

/// Emitted when a lender posts a new offer and its principal enters custody.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferCreated {
    #[topic]
    pub id: u64,
    pub lender: Address,
    pub amount: i128,
    pub ltv_rate: i128,
    pub required_collateral: i128,
}

/// Emitted when a borrower funds an offer and the loan clock starts.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferTaken {
    #[topic]
    pub id: u64,
    pub borrower: Address,
    pub collateral_held: i128,
    pub loan_expiry: u64,
}

/// Emitted when the borrower settles principal plus interest and the
/// escrowed collateral is released.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OfferRepaid {
    #[topic]
    pub id: u64,
}
