//! # Supplier Registry Contract
//!
//! Tracks supplier onboarding and administrator-attested verification.
//! A supplier registers itself once; the administrator may then mark it
//! verified with a numeric score.
//!
//! ## Supplier Lifecycle
//!
//! ```text
//! [Unregistered] → [Registered] → [Verified]
//!                                    ↑   │
//!                                    └───┘ (re-verification overwrites score)
//! ```
//!
//! ## Error Codes
//!
//! | Code | Error               | Raised by          |
//! |------|---------------------|--------------------|
//! | 1    | `AlreadyRegistered` | `register_supplier`|
//! | 2    | `NotAuthorized`     | `verify_supplier`  |
//! | 3    | `SupplierNotFound`  | `verify_supplier`  |
//!
//! Every failing call leaves storage untouched.

#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};

pub mod events;

pub use events::{SupplierRegisteredEvent, SupplierVerifiedEvent};


// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract administrator, the only address allowed to verify.
    Admin,
    /// Supplier record by address.
    Supplier(Address),
}

/// Registration and verification state of one supplier.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierRecord {
    pub company_name: String,
    pub industry: String,
    /// Ledger sequence of registration, refreshed by every verification.
    pub updated_at: u32,
    /// Set by the first successful verification and never cleared.
    pub is_verified: bool,
    /// Score from the most recent verification, 0 until verified.
    pub verification_score: u32,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SupplierError {
    /// The caller already has a supplier record.
    AlreadyRegistered = 1,
    /// Only the administrator can verify suppliers.
    NotAuthorized = 2,
    /// The target has no supplier record.
    SupplierNotFound = 3,
}

// ════════════════════════════════════════════════════════════════════
//  Contract
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct SupplierRegistryContract;

#[contractimpl]
impl SupplierRegistryContract {
    /// Initialize the contract with its administrator.
    ///
    /// The administrator is fixed for the lifetime of the contract.
    pub fn initialize(env: Env, admin: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic!("already initialized");
        }
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &admin);
    }

    /// Register the calling supplier.
    ///
    /// The record starts unverified with a score of 0. Names are stored
    /// as given, including empty strings.
    pub fn register_supplier(
        env: Env,
        supplier: Address,
        company_name: String,
        industry: String,
    ) -> Result<(), SupplierError> {
        supplier.require_auth();

        let key = DataKey::Supplier(supplier.clone());
        if env.storage().instance().has(&key) {
            return Err(SupplierError::AlreadyRegistered);
        }

        let now = env.ledger().sequence();
        let record = SupplierRecord {
            company_name: company_name.clone(),
            industry: industry.clone(),
            updated_at: now,
            is_verified: false,
            verification_score: 0,
        };
        env.storage().instance().set(&key, &record);

        events::emit_supplier_registered(&env, &supplier, &company_name, &industry, now);
        Ok(())
    }

    /// Mark a registered supplier as verified with `score`.
    ///
    /// Authorization is checked before the target's existence. Verifying
    /// an already verified supplier overwrites its score and ledger
    /// sequence.
    pub fn verify_supplier(
        env: Env,
        caller: Address,
        supplier: Address,
        score: u32,
    ) -> Result<(), SupplierError> {
        caller.require_auth();
        if caller != Self::get_admin(env.clone()) {
            return Err(SupplierError::NotAuthorized);
        }

        let key = DataKey::Supplier(supplier.clone());
        let mut record: SupplierRecord = env
            .storage()
            .instance()
            .get(&key)
            .ok_or(SupplierError::SupplierNotFound)?;

        let now = env.ledger().sequence();
        record.is_verified = true;
        record.updated_at = now;
        record.verification_score = score;
        env.storage().instance().set(&key, &record);

        events::emit_supplier_verified(&env, &supplier, score, &caller, now);
        Ok(())
    }

    /// Whether `supplier` is registered and verified.
    pub fn is_supplier_verified(env: Env, supplier: Address) -> bool {
        Self::get_supplier_details(env, supplier)
            .map(|record| record.is_verified)
            .unwrap_or(false)
    }

    /// Whether `supplier` has a record.
    pub fn is_supplier_registered(env: Env, supplier: Address) -> bool {
        env.storage()
            .instance()
            .has(&DataKey::Supplier(supplier))
    }

    /// Get the supplier record, or `None` if it never registered.
    pub fn get_supplier_details(env: Env, supplier: Address) -> Option<SupplierRecord> {
        env.storage().instance().get(&DataKey::Supplier(supplier))
    }

    /// Get contract admin.
    pub fn get_admin(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .expect("not initialized")
    }
}
