//! # Supplier Registry Events
//!
//! Structured events for the supplier lifecycle, published only when a
//! call succeeds.
//!
//! | Topic     | Payload                   |
//! |-----------|---------------------------|
//! | `sup_reg` | `SupplierRegisteredEvent` |
//! | `sup_ver` | `SupplierVerifiedEvent`   |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

/// Topic for supplier registration events
pub const TOPIC_SUPPLIER_REGISTERED: Symbol = symbol_short!("sup_reg");
/// Topic for supplier verification events
pub const TOPIC_SUPPLIER_VERIFIED: Symbol = symbol_short!("sup_ver");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

/// Event data for a new supplier registration
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierRegisteredEvent {
    /// Address that registered itself
    pub supplier: Address,
    pub company_name: String,
    pub industry: String,
    /// Ledger sequence at registration
    pub ledger_seq: u32,
}

/// Event data for a supplier verification
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct SupplierVerifiedEvent {
    pub supplier: Address,
    /// Score supplied by the administrator
    pub score: u32,
    pub verified_by: Address,
    /// Ledger sequence at verification
    pub ledger_seq: u32,
}

// ════════════════════════════════════════════════════════════════════
//  Emitters
// ════════════════════════════════════════════════════════════════════

pub fn emit_supplier_registered(
    env: &Env,
    supplier: &Address,
    company_name: &String,
    industry: &String,
    ledger_seq: u32,
) {
    env.events().publish(
        (TOPIC_SUPPLIER_REGISTERED,),
        SupplierRegisteredEvent {
            supplier: supplier.clone(),
            company_name: company_name.clone(),
            industry: industry.clone(),
            ledger_seq,
        },
    );
}

pub fn emit_supplier_verified(
    env: &Env,
    supplier: &Address,
    score: u32,
    verified_by: &Address,
    ledger_seq: u32,
) {
    env.events().publish(
        (TOPIC_SUPPLIER_VERIFIED,),
        SupplierVerifiedEvent {
            supplier: supplier.clone(),
            score,
            verified_by: verified_by.clone(),
            ledger_seq,
        },
    );
}
