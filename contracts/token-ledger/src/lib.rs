#![no_std]

mod contract;
mod errors;
mod events;
mod storage;

pub use crate::contract::{TokenLedger, TokenLedgerClient};
pub use crate::errors::Error;
