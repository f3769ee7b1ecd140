//! Shared types for the vault registry contracts.
//!
//! Both the release registry and the endorsement registry depend on this
//! crate for the error taxonomy, the single-holder authority helper, the
//! [`Release`] record and the client interfaces of the contracts they call.

#![cfg_attr(not(test), no_std)]

pub mod authority;
pub mod interfaces;

#[cfg(any(test, feature = "testutils"))]
pub mod mocks;

#[cfg(test)]
mod authority_test;

pub use interfaces::{
    EndorsableClient, EndorsableInterface, ReleaseLedgerClient, ReleaseLedgerInterface,
    VaultFactoryClient, VaultFactoryInterface,
};

use soroban_sdk::{contracterror, contracttype, Address, Env, String};

// ════════════════════════════════════════════════════════════════════
//  Errors
// ════════════════════════════════════════════════════════════════════

/// Errors returned by the release registry and the endorsement registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// `initialize` was called on an initialized contract.
    AlreadyInitialized = 1,
    /// The contract has not been initialized yet.
    NotInitialized = 2,
    /// Caller is not the governance (or ledger owner).
    Unauthorized = 3,
    /// The zero address was supplied where a real identity is required.
    InvalidAddress = 4,
    /// Requested release or asset index does not exist.
    OutOfRange = 5,
    /// Contract api version does not match the release ("Wrong API Version").
    VersionMismatch = 6,
    /// Address has never been endorsed ("!Endorsed").
    NotEndorsed = 7,
    /// Address already has an endorsement entry.
    AlreadyEndorsed = 8,
    /// A release with the same api version already exists.
    DuplicateRelease = 9,
    /// `Unendorsed` was passed where a vault or strategy kind is required.
    InvalidKind = 10,
}

// ════════════════════════════════════════════════════════════════════
//  Shared records
// ════════════════════════════════════════════════════════════════════

/// One generation of the vault deployment mechanism.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Release {
    /// Position in the release ledger, assigned sequentially from 0.
    pub index: u32,
    /// Factory contract bound to this release.
    pub factory: Address,
    /// Version tag reported by the factory when the release was added.
    pub api_version: String,
    /// Ledger timestamp when the release was added.
    pub released_at: u64,
}

// ════════════════════════════════════════════════════════════════════
//  Zero address
// ════════════════════════════════════════════════════════════════════

/// Strkey of the all-zero ed25519 account.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// The "unset" address sentinel.
pub fn zero_address(env: &Env) -> Address {
    Address::from_string(&String::from_str(env, ZERO_ACCOUNT))
}

/// Returns `true` if `address` is the zero address.
pub fn is_zero_address(env: &Env, address: &Address) -> bool {
    *address == zero_address(env)
}
