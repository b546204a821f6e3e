#![no_std]

mod constants;
mod contract;
mod errors;
mod events;
mod ledger;
mod storage;

pub use crate::contract::{LendingEngine, LendingEngineClient};
pub use crate::errors::Error;
pub use crate::storage::Offer;
