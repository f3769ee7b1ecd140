//! # Release Registry Contract
//!
//! Append-only ledger of vault factory releases. Each release binds a
//! factory contract to the api version it reports, under a sequential index
//! starting at 0. The endorsement registry resolves release deltas against
//! this ledger and validates endorsed contracts against the recorded
//! versions.
//!
//! ## Ledger Rules
//!
//! ```text
//! new_release(factory) → index = num_releases()   (never reused, never removed)
//! ```
//!
//! - Only the owner can append releases
//! - An api version can be released at most once
//! - Releases are immutable once appended
//!
//! Release records live in persistent storage and their TTL is never
//! extended here; an archived record must be restored before it is read.

#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};
use vault_registry_common::{authority, RegistryError, Release, VaultFactoryClient};

pub mod events;

pub use events::{NewReleaseEvent, OwnershipTransferredEvent};


// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

/// Storage keys for the release ledger
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Number of releases appended so far
    NumReleases,
    /// Release record by index
    Release(u32),
    /// Release index by api version
    Target(String),
}

// ════════════════════════════════════════════════════════════════════
//  Contract Implementation
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct ReleaseRegistryContract;

#[contractimpl]
impl ReleaseRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// Initialize the ledger with its owner.
    ///
    /// The caller must authorize as `owner`.
    pub fn initialize(env: Env, owner: Address) -> Result<(), RegistryError> {
        if authority::is_initialized(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        owner.require_auth();
        authority::init(&env, &owner)?;
        env.storage().instance().set(&DataKey::NumReleases, &0u32);
        Ok(())
    }

    // ── Owner Functions ─────────────────────────────────────────────

    /// Append a release for `factory`, recording the api version the
    /// factory reports. Returns the new release index.
    ///
    /// * `caller` - Must be the owner
    /// * `factory` - Vault factory contract for this release
    pub fn new_release(env: Env, caller: Address, factory: Address) -> Result<u32, RegistryError> {
        authority::require_holder(&env, &caller)?;

        let api_version = VaultFactoryClient::new(&env, &factory).api_version();
        let target = DataKey::Target(api_version.clone());
        if env.storage().persistent().has(&target) {
            return Err(RegistryError::DuplicateRelease);
        }

        let index = Self::num_releases(env.clone());
        let release = Release {
            index,
            factory: factory.clone(),
            api_version: api_version.clone(),
            released_at: env.ledger().timestamp(),
        };

        env.storage()
            .persistent()
            .set(&DataKey::Release(index), &release);
        env.storage().persistent().set(&target, &index);
        env.storage()
            .instance()
            .set(&DataKey::NumReleases, &(index + 1));

        events::emit_new_release(&env, index, &factory, &api_version);
        Ok(index)
    }

    /// Hand ownership of the ledger to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), RegistryError> {
        let previous = authority::transfer(&env, &caller, &new_owner)?;
        events::emit_ownership_transferred(&env, &previous, &new_owner);
        Ok(())
    }

    // ── Query Functions ─────────────────────────────────────────────

    /// Number of releases appended so far.
    pub fn num_releases(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::NumReleases)
            .unwrap_or(0)
    }

    /// Get the release at `index`.
    pub fn release_at(env: Env, index: u32) -> Result<Release, RegistryError> {
        env.storage()
            .persistent()
            .get(&DataKey::Release(index))
            .ok_or(RegistryError::OutOfRange)
    }

    /// Get the most recent release.
    pub fn latest_release(env: Env) -> Result<Release, RegistryError> {
        let latest = Self::num_releases(env.clone())
            .checked_sub(1)
            .ok_or(RegistryError::OutOfRange)?;
        Self::release_at(env, latest)
    }

    /// Factory of the most recent release.
    pub fn latest_factory(env: Env) -> Result<Address, RegistryError> {
        Ok(Self::latest_release(env)?.factory)
    }

    /// Api version of the most recent release.
    pub fn latest_api_version(env: Env) -> Result<String, RegistryError> {
        Ok(Self::latest_release(env)?.api_version)
    }

    /// Index of the release that carries `api_version`, if any.
    pub fn release_target(env: Env, api_version: String) -> Option<u32> {
        env.storage()
            .persistent()
            .get(&DataKey::Target(api_version))
    }

    /// Get the ledger owner.
    pub fn owner(env: Env) -> Result<Address, RegistryError> {
        authority::holder(&env)
    }
}
