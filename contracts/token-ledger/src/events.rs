use soroban_sdk::{contractevent, Address};

/// Emitted when the owner issues new supply.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mint {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// Emitted on every successful balance movement.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}

/// Emitted once when the owner binds the lending engine custody account.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EngineBound {
    #[topic]
    pub engine: Address,
}
