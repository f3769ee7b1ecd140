//! # Vault Endorsement Registry Contract
//!
//! Tracks which vault and strategy contracts governance has endorsed for an
//! underlying asset, and under which factory release each one was endorsed.
//!
//! ## Endorsement Paths
//!
//! ```text
//! deploy_new_vault ──► release factory deploys ──┐
//!                                                ├──► entry + asset/version indexes + event
//! endorse_vault / endorse_strategy ──► version ──┘
//!                                      check
//! ```
//!
//! Both paths resolve a release delta against the release registry
//! (`0` = newest release) and converge on the same catalog state.
//!
//! ## Security
//!
//! Only the governance address can:
//! - Deploy and endorse new vaults
//! - Endorse externally deployed vaults and strategies
//! - Tag endorsed contracts
//! - Transfer governance
//!
//! Endorsements are permanent; the tag is the only field that changes.

#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String, Vec};
use vault_registry_common::{authority, RegistryError, VaultFactoryClient};

pub mod catalog;
pub mod events;
pub mod releases;

pub use catalog::{EndorsedEntry, EndorsementKind};
pub use events::{
    GovernanceTransferredEvent, NewEndorsedStrategyEvent, NewEndorsedVaultEvent,
    VaultTaggedEvent,
};

#[cfg(test)]
mod endorse_test;

// ════════════════════════════════════════════════════════════════════
//  Storage Types
// ════════════════════════════════════════════════════════════════════

/// Configuration keys (instance storage). Governance lives under
/// `authority::AuthorityKey::Holder`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Human-readable registry name
    Name,
    /// Release ledger contract
    ReleaseRegistry,
}

// ════════════════════════════════════════════════════════════════════
//  Contract Implementation
// ════════════════════════════════════════════════════════════════════

#[contract]
pub struct VaultRegistryContract;

#[contractimpl]
#[allow(clippy::too_many_arguments)]
impl VaultRegistryContract {
    // ── Initialization ──────────────────────────────────────────────

    /// One-time setup. The caller must authorize as `governance`.
    ///
    /// * `governance` - Address allowed to mutate the registry (not zero)
    /// * `name` - Label for this registry instance
    /// * `release_registry` - Release ledger used to resolve release deltas
    pub fn initialize(
        env: Env,
        governance: Address,
        name: String,
        release_registry: Address,
    ) -> Result<(), RegistryError> {
        if authority::is_initialized(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }
        governance.require_auth();
        authority::init(&env, &governance)?;

        env.storage().instance().set(&DataKey::Name, &name);
        env.storage()
            .instance()
            .set(&DataKey::ReleaseRegistry, &release_registry);
        Ok(())
    }

    // ── Governance ──────────────────────────────────────────────────

    /// Hand governance to `new_governance`. Takes effect immediately.
    pub fn transfer_governance(
        env: Env,
        caller: Address,
        new_governance: Address,
    ) -> Result<(), RegistryError> {
        let previous = authority::transfer(&env, &caller, &new_governance)?;
        events::emit_governance_transferred(&env, &previous, &new_governance);
        Ok(())
    }

    // ── Endorsement ─────────────────────────────────────────────────

    /// Deploy a vault through the factory of the selected release and
    /// endorse it in the same call.
    ///
    /// * `caller` - Must be governance
    /// * `release_delta` - Releases to step back from the newest (0 = newest)
    ///
    /// Returns the address of the new vault.
    pub fn deploy_new_vault(
        env: Env,
        caller: Address,
        asset: Address,
        name: String,
        symbol: String,
        role_manager: Address,
        profit_max_unlock_time: u64,
        release_delta: u32,
    ) -> Result<Address, RegistryError> {
        authority::require_holder(&env, &caller)?;
        let release = releases::resolve(&env, release_delta)?;

        let vault = VaultFactoryClient::new(&env, &release.factory).deploy_new_vault(
            &asset,
            &name,
            &symbol,
            &role_manager,
            &profit_max_unlock_time,
        );

        catalog::record(
            &env,
            &vault,
            EndorsementKind::Vault,
            &asset,
            release.index,
            env.ledger().timestamp(),
        )?;
        events::emit_vault_endorsed(&env, &asset, &vault, release.index);
        Ok(vault)
    }

    /// Endorse a vault that was deployed outside this registry.
    ///
    /// The vault must report the api version of the selected release.
    /// Pass `deployment_timestamp = 0` when the deployment time is unknown.
    pub fn endorse_vault(
        env: Env,
        caller: Address,
        vault: Address,
        release_delta: u32,
        deployment_timestamp: u64,
    ) -> Result<(), RegistryError> {
        Self::endorse(
            &env,
            &caller,
            &vault,
            EndorsementKind::Vault,
            release_delta,
            deployment_timestamp,
        )
    }

    /// Endorse a strategy that was deployed outside this registry.
    ///
    /// Same rules as `endorse_vault`, indexed with the strategies.
    pub fn endorse_strategy(
        env: Env,
        caller: Address,
        strategy: Address,
        release_delta: u32,
        deployment_timestamp: u64,
    ) -> Result<(), RegistryError> {
        Self::endorse(
            &env,
            &caller,
            &strategy,
            EndorsementKind::Strategy,
            release_delta,
            deployment_timestamp,
        )
    }

    /// Set the tag of an endorsed vault or strategy, replacing the old one.
    pub fn tag_vault(
        env: Env,
        caller: Address,
        vault: Address,
        tag: String,
    ) -> Result<(), RegistryError> {
        authority::require_holder(&env, &caller)?;
        catalog::set_tag(&env, &vault, &tag)?;
        events::emit_vault_tagged(&env, &vault, &tag);
        Ok(())
    }

    // ── Configuration Queries ───────────────────────────────────────

    pub fn governance(env: Env) -> Result<Address, RegistryError> {
        authority::holder(&env)
    }

    pub fn name(env: Env) -> Result<String, RegistryError> {
        env.storage()
            .instance()
            .get(&DataKey::Name)
            .ok_or(RegistryError::NotInitialized)
    }

    pub fn release_registry(env: Env) -> Result<Address, RegistryError> {
        releases::ledger_address(&env)
    }

    // ── Catalog Queries ─────────────────────────────────────────────

    /// Catalog row for `address`; the zero-valued entry if never endorsed.
    pub fn info(env: Env, address: Address) -> EndorsedEntry {
        catalog::get_entry(&env, &address).unwrap_or_else(|| EndorsedEntry::unendorsed(&env))
    }

    pub fn is_endorsed(env: Env, address: Address) -> bool {
        catalog::is_endorsed(&env, &address)
    }

    pub fn num_assets(env: Env) -> u32 {
        catalog::assets(&env).len()
    }

    /// Assets with at least one endorsed vault or strategy, in first-seen order.
    pub fn get_assets(env: Env) -> Vec<Address> {
        catalog::assets(&env)
    }

    pub fn asset_at(env: Env, index: u32) -> Result<Address, RegistryError> {
        catalog::assets(&env)
            .get(index)
            .ok_or(RegistryError::OutOfRange)
    }

    pub fn num_endorsed_vaults(env: Env, asset: Address) -> u32 {
        Self::get_endorsed_vaults(env, asset).len()
    }

    pub fn get_endorsed_vaults(env: Env, asset: Address) -> Vec<Address> {
        catalog::endorsed(&env, EndorsementKind::Vault, &asset)
    }

    pub fn num_endorsed_vaults_by_version(env: Env, asset: Address, version: u32) -> u32 {
        Self::get_endorsed_vaults_by_version(env, asset, version).len()
    }

    pub fn get_endorsed_vaults_by_version(env: Env, asset: Address, version: u32) -> Vec<Address> {
        catalog::endorsed_by_version(&env, EndorsementKind::Vault, &asset, version)
    }

    /// Endorsed vaults of every tracked asset, one list per asset in
    /// `get_assets` order.
    pub fn get_all_endorsed_vaults(env: Env) -> Vec<Vec<Address>> {
        catalog::snapshot(&env, EndorsementKind::Vault)
    }

    pub fn num_endorsed_strategies(env: Env, asset: Address) -> u32 {
        Self::get_endorsed_strategies(env, asset).len()
    }

    pub fn get_endorsed_strategies(env: Env, asset: Address) -> Vec<Address> {
        catalog::endorsed(&env, EndorsementKind::Strategy, &asset)
    }

    pub fn num_strategies_by_version(env: Env, asset: Address, version: u32) -> u32 {
        Self::get_strategies_by_version(env, asset, version).len()
    }

    pub fn get_strategies_by_version(env: Env, asset: Address, version: u32) -> Vec<Address> {
        catalog::endorsed_by_version(&env, EndorsementKind::Strategy, &asset, version)
    }

    /// Endorsed strategies of every tracked asset, one list per asset in
    /// `get_assets` order.
    pub fn get_all_endorsed_strategies(env: Env) -> Vec<Vec<Address>> {
        catalog::snapshot(&env, EndorsementKind::Strategy)
    }

    // ── Internal Helpers ────────────────────────────────────────────

    fn endorse(
        env: &Env,
        caller: &Address,
        target: &Address,
        kind: EndorsementKind,
        release_delta: u32,
        deployment_timestamp: u64,
    ) -> Result<(), RegistryError> {
        if kind == EndorsementKind::Unendorsed {
            return Err(RegistryError::InvalidKind);
        }
        authority::require_holder(env, caller)?;
        let release = releases::resolve(env, release_delta)?;
        if catalog::is_endorsed(env, target) {
            return Err(RegistryError::AlreadyEndorsed);
        }
        let asset = releases::check_endorsable(env, target, &release)?;

        catalog::record(
            env,
            target,
            kind,
            &asset,
            release.index,
            deployment_timestamp,
        )?;
        match kind {
            EndorsementKind::Vault => {
                events::emit_vault_endorsed(env, &asset, target, release.index)
            }
            EndorsementKind::Strategy => {
                events::emit_strategy_endorsed(env, target, &asset, release.index)
            }
            EndorsementKind::Unendorsed => return Err(RegistryError::InvalidKind),
        }
        Ok(())
    }
}
