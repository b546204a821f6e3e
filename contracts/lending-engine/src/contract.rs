use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env};

use crate::constants::{DAILY_RATE_SCALE, SECONDS_PER_DAY};
use crate::errors::Error;
use crate::events::{OfferCreated, OfferRepaid, OfferTaken};
use crate::ledger::LedgerClient;
use crate::storage::{
    bump_core_ttl, read_collateral_token, read_offer, read_offer_count, read_token_ledger,
    write_collateral_token, write_offer, write_offer_count, write_token_ledger, Offer,
};

#[contract]
pub struct LendingEngine;

#[contractimpl]
impl LendingEngine {
    /// Binds the engine to the token ledger it settles against and the
    /// collateral token it escrows against funded offers.
    pub fn initialize(env: Env, token_ledger: Address, collateral_token: Address) {
        if read_token_ledger(&env).is_some() {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        write_token_ledger(&env, &token_ledger);
        write_collateral_token(&env, &collateral_token);
        write_offer_count(&env, 0);
    }

    /// Posts a new offer: moves the principal from the lender into the
    /// engine's custody account and appends the offer with the next id.
    pub fn create_offer(
        env: Env,
        lender: Address,
        amount: i128,
        ltv_rate: i128,
        duration: u64,
        daily_interest_rate: i128,
    ) -> u64 {
        let token_ledger = ensure_initialized(&env);
        lender.require_auth();
        if amount <= 0 || ltv_rate <= 0 || daily_interest_rate < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }

        let ledger = LedgerClient::new(&env, &token_ledger);
        if ledger.get_balance(&lender) < amount {
            panic_with_error!(&env, Error::InsufficientBalance);
        }
        ledger.transfer(&lender, &env.current_contract_address(), &amount);

        let id = read_offer_count(&env);
        let offer = Offer {
            id,
            lender: lender.clone(),
            amount,
            ltv_rate,
            daily_interest_rate,
            duration,
            borrower: None,
            is_taken: false,
            collateral_held: 0,
            funded_at: 0,
            loan_expiry: 0,
            is_repaid: false,
        };
        write_offer(&env, &offer);
        write_offer_count(&env, id + 1);
        bump_core_ttl(&env);

        OfferCreated {
            id,
            lender,
            amount,
            ltv_rate,
            // Integer division: non-divisible ratios truncate.
            required_collateral: amount / ltv_rate,
        }
        .publish(&env);
        id
    }

    /// Funds an offer: escrows the borrower's collateral payment, releases
    /// the principal from custody and starts the loan clock. Succeeds at
    /// most once per offer.
    pub fn borrow(env: Env, borrower: Address, offer_id: u64, collateral_amount: i128) {
        let token_ledger = ensure_initialized(&env);
        borrower.require_auth();

        let Some(mut offer) = read_offer(&env, offer_id) else {
            panic_with_error!(&env, Error::OfferNotFound);
        };
        if offer.is_taken {
            panic_with_error!(&env, Error::OfferAlreadyTaken);
        }
        if collateral_amount < 0 {
            panic_with_error!(&env, Error::InvalidAmount);
        }
        let required = offer.amount / offer.ltv_rate;
        if collateral_amount < required {
            panic_with_error!(&env, Error::InsufficientCollateral);
        }

        // Escrow the collateral payment under the engine.
        if collateral_amount > 0 {
            let collateral = token::Client::new(&env, &collateral_token(&env));
            collateral.transfer(
                &borrower,
                &env.current_contract_address(),
                &collateral_amount,
            );
        }

        let now = env.ledger().timestamp();
        offer.borrower = Some(borrower.clone());
        offer.is_taken = true;
        offer.collateral_held = collateral_amount;
        offer.funded_at = now;
        offer.loan_expiry = now.saturating_add(offer.duration);
        write_offer(&env, &offer);

        // Release the principal from custody to the borrower.
        LedgerClient::new(&env, &token_ledger).transfer(
            &env.current_contract_address(),
            &borrower,
            &offer.amount,
        );

        OfferTaken {
            id: offer.id,
            borrower,
            collateral_held: collateral_amount,
            loan_expiry: offer.loan_expiry,
        }
        .publish(&env);
    }

    /// Interest accrued so far: zero before funding, otherwise the daily
    /// rate applied to the principal for each whole elapsed day.
    pub fn get_interest(env: Env, offer_id: u64) -> i128 {
        let Some(offer) = read_offer(&env, offer_id) else {
            panic_with_error!(&env, Error::OfferNotFound);
        };
        if !offer.is_taken {
            return 0;
        }
        accrued_interest(&env, &offer)
    }

    /// Settles a funded offer: the borrower pays principal plus interest to
    /// the lender and the escrowed collateral flows back to the borrower.
    pub fn repay(env: Env, caller: Address, offer_id: u64) {
        let token_ledger = ensure_initialized(&env);
        caller.require_auth();

        let Some(mut offer) = read_offer(&env, offer_id) else {
            panic_with_error!(&env, Error::OfferNotFound);
        };
        if !offer.is_taken || offer.is_repaid {
            panic_with_error!(&env, Error::InvalidState);
        }
        let Some(borrower) = offer.borrower.clone() else {
            panic_with_error!(&env, Error::InvalidState);
        };
        if caller != borrower {
            panic_with_error!(&env, Error::NotBorrower);
        }

        let interest = accrued_interest(&env, &offer);
        let due = match offer.amount.checked_add(interest) {
            Some(v) => v,
            None => panic_with_error!(&env, Error::Overflow),
        };
        let ledger = LedgerClient::new(&env, &token_ledger);
        if ledger.get_balance(&caller) < due {
            panic_with_error!(&env, Error::InsufficientBalance);
        }
        // Principal plus interest settles straight to the lender, conserving
        // total supply.
        ledger.transfer(&caller, &offer.lender, &due);

        offer.is_repaid = true;
        write_offer(&env, &offer);

        if offer.collateral_held > 0 {
            let collateral = token::Client::new(&env, &collateral_token(&env));
            collateral.transfer(
                &env.current_contract_address(),
                &borrower,
                &offer.collateral_held,
            );
        }

        OfferRepaid { id: offer.id }.publish(&env);
    }

    /// Full offer record for external inspection.
    pub fn get_offer(env: Env, offer_id: u64) -> Offer {
        match read_offer(&env, offer_id) {
            Some(offer) => offer,
            None => panic_with_error!(&env, Error::OfferNotFound),
        }
    }

    pub fn get_offer_count(env: Env) -> u64 {
        read_offer_count(&env)
    }

    /// Collateral the next borrower must post, in collateral-token units.
    pub fn get_required_collateral(env: Env, offer_id: u64) -> i128 {
        let Some(offer) = read_offer(&env, offer_id) else {
            panic_with_error!(&env, Error::OfferNotFound);
        };
        offer.amount / offer.ltv_rate
    }

    pub fn get_token_ledger(env: Env) -> Address {
        ensure_initialized(&env)
    }

    pub fn get_collateral_token(env: Env) -> Address {
        collateral_token(&env)
    }
}

fn ensure_initialized(env: &Env) -> Address {
    match read_token_ledger(env) {
        Some(ledger) => ledger,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn collateral_token(env: &Env) -> Address {
    match read_collateral_token(env) {
        Some(token) => token,
        None => panic_with_error!(env, Error::NotInitialized),
    }
}

fn accrued_interest(env: &Env, offer: &Offer) -> i128 {
    let now = env.ledger().timestamp();
    let elapsed_days = (now.saturating_sub(offer.funded_at) / SECONDS_PER_DAY) as i128;
    if elapsed_days == 0 {
        return 0;
    }
    let interest = offer
        .amount
        .checked_mul(offer.daily_interest_rate)
        .and_then(|v| v.checked_mul(elapsed_days));
    match interest {
        Some(v) => v / DAILY_RATE_SCALE,
        None => panic_with_error!(env, Error::Overflow),
    }
}
