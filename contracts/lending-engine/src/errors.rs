use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    OfferNotFound = 5,
    OfferAlreadyTaken = 6,
    InsufficientCollateral = 7,
    NotBorrower = 8,
    InvalidState = 9,
    Overflow = 10,
}
