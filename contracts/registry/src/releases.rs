//! Release resolution against the release ledger.
//!
//! A release delta counts back from the newest release: delta 0 is
//! `num_releases - 1`, delta 1 the one before it, and so on.

use soroban_sdk::{Address, Env, String};
use vault_registry_common::{EndorsableClient, RegistryError, Release, ReleaseLedgerClient};

use crate::DataKey;

/// Address of the release ledger this registry reads from.
pub fn ledger_address(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::ReleaseRegistry)
        .ok_or(RegistryError::NotInitialized)
}

/// Index `release_delta` steps back from the newest of `num_releases`.
pub fn target_index(num_releases: u32, release_delta: u32) -> Result<u32, RegistryError> {
    num_releases
        .checked_sub(1)
        .and_then(|latest| latest.checked_sub(release_delta))
        .ok_or(RegistryError::OutOfRange)
}

/// Fetch the release selected by `release_delta`.
pub fn resolve(env: &Env, release_delta: u32) -> Result<Release, RegistryError> {
    let ledger = ReleaseLedgerClient::new(env, &ledger_address(env)?);
    let index = target_index(ledger.num_releases(), release_delta)?;
    Ok(ledger.release_at(&index))
}

/// Read the asset of `target` after checking that it reports the api
/// version of `release`.
pub fn check_endorsable(
    env: &Env,
    target: &Address,
    release: &Release,
) -> Result<Address, RegistryError> {
    let endorsable = EndorsableClient::new(env, target);
    let api_version: String = endorsable.api_version();
    if api_version != release.api_version {
        return Err(RegistryError::VersionMismatch);
    }
    Ok(endorsable.asset())
}
