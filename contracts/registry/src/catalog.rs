//! # Endorsement Catalog
//!
//! Rows of endorsed contracts and the secondary indexes over them.
//!
//! ## Layout (persistent storage)
//!
//! | Key                               | Value                  |
//! |-----------------------------------|------------------------|
//! | `Entry(address)`                  | `EndorsedEntry`        |
//! | `Assets`                          | `Vec<Address>`         |
//! | `KnownAsset(asset)`               | `bool`                 |
//! | `Vaults(asset)`                   | `Vec<Address>`         |
//! | `VaultsByVersion(asset, version)` | `Vec<Address>`         |
//! | `Strategies(asset)`               | `Vec<Address>`         |
//! | `StrategiesByVersion(asset, ver)` | `Vec<Address>`         |
//!
//! [`record`] writes an entry and every index it belongs to in one call.
//! Lists are append-only and an address is written at most once, so each
//! endorsed address sits in exactly one per-asset list and one
//! per-asset-per-version list of its kind.
//!
//! ## Limits
//!
//! - Nothing here extends the TTL of the persistent entries, nor of the
//!   contract instance. Entries left unread past their TTL are archived by
//!   the network and must be restored before the registry can read them.
//! - Each index is a single `Vec` stored under one key, so a list grows
//!   with every endorsement for its asset until it reaches the ledger entry
//!   size limit. Endorsements for that asset then fail.

use soroban_sdk::{contracttype, Address, Env, String, Vec};
use vault_registry_common::{zero_address, RegistryError};

// ======= Storage keys ======

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogKey {
    /// Endorsement row by contract address
    Entry(Address),
    /// Assets with at least one endorsed vault or strategy, in first-seen order
    Assets,
    /// Membership flag for `Assets`
    KnownAsset(Address),
    /// Endorsed vaults of an asset
    Vaults(Address),
    /// Endorsed vaults of an asset for one release
    VaultsByVersion(Address, u32),
    /// Endorsed strategies of an asset
    Strategies(Address),
    /// Endorsed strategies of an asset for one release
    StrategiesByVersion(Address, u32),
}

// ====== Types ======

/// Which index family an endorsed address belongs to.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EndorsementKind {
    /// Only in the zero-valued entry; never recorded.
    Unendorsed,
    Vault,
    Strategy,
}

/// Catalog row for one endorsed contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndorsedEntry {
    /// `Unendorsed` only for the zero-valued entry of an unknown address.
    pub kind: EndorsementKind,
    /// Underlying asset of the endorsed contract.
    pub asset: Address,
    /// Index of the release the contract was endorsed against.
    pub release_version: u32,
    /// Deployment time supplied or observed at endorsement.
    pub deployment_timestamp: u64,
    /// Free-form annotation, the only field that changes after creation.
    pub tag: String,
}

impl EndorsedEntry {
    /// Value reported for an address that was never endorsed.
    pub fn unendorsed(env: &Env) -> Self {
        EndorsedEntry {
            kind: EndorsementKind::Unendorsed,
            asset: zero_address(env),
            release_version: 0,
            deployment_timestamp: 0,
            tag: String::from_str(env, ""),
        }
    }
}

// ====== Entries ======

pub fn get_entry(env: &Env, address: &Address) -> Option<EndorsedEntry> {
    env.storage()
        .persistent()
        .get(&CatalogKey::Entry(address.clone()))
}

pub fn is_endorsed(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&CatalogKey::Entry(address.clone()))
}

/// Create the entry for `address` and append it to the asset set and the
/// two indexes of `kind`.
pub fn record(
    env: &Env,
    address: &Address,
    kind: EndorsementKind,
    asset: &Address,
    release_version: u32,
    deployment_timestamp: u64,
) -> Result<EndorsedEntry, RegistryError> {
    let by_asset = asset_key(kind, asset)?;
    let by_version = version_key(kind, asset, release_version)?;
    if is_endorsed(env, address) {
        return Err(RegistryError::AlreadyEndorsed);
    }

    let entry = EndorsedEntry {
        kind,
        asset: asset.clone(),
        release_version,
        deployment_timestamp,
        tag: String::from_str(env, ""),
    };
    env.storage()
        .persistent()
        .set(&CatalogKey::Entry(address.clone()), &entry);

    track_asset(env, asset);
    append(env, &by_asset, address);
    append(env, &by_version, address);

    Ok(entry)
}

/// Overwrite the tag of an existing entry.
pub fn set_tag(env: &Env, address: &Address, tag: &String) -> Result<(), RegistryError> {
    let mut entry = get_entry(env, address).ok_or(RegistryError::NotEndorsed)?;
    entry.tag = tag.clone();
    env.storage()
        .persistent()
        .set(&CatalogKey::Entry(address.clone()), &entry);
    Ok(())
}

// ====== Indexes ======

/// Per-asset index of `kind`. `Unendorsed` has no index.
pub fn asset_key(kind: EndorsementKind, asset: &Address) -> Result<CatalogKey, RegistryError> {
    match kind {
        EndorsementKind::Vault => Ok(CatalogKey::Vaults(asset.clone())),
        EndorsementKind::Strategy => Ok(CatalogKey::Strategies(asset.clone())),
        EndorsementKind::Unendorsed => Err(RegistryError::InvalidKind),
    }
}

/// Per-asset, per-release index of `kind`. `Unendorsed` has no index.
pub fn version_key(
    kind: EndorsementKind,
    asset: &Address,
    release_version: u32,
) -> Result<CatalogKey, RegistryError> {
    match kind {
        EndorsementKind::Vault => Ok(CatalogKey::VaultsByVersion(asset.clone(), release_version)),
        EndorsementKind::Strategy => Ok(CatalogKey::StrategiesByVersion(
            asset.clone(),
            release_version,
        )),
        EndorsementKind::Unendorsed => Err(RegistryError::InvalidKind),
    }
}

pub fn list(env: &Env, key: &CatalogKey) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or_else(|| Vec::new(env))
}

/// Endorsed addresses of `kind` for `asset`.
pub fn endorsed(env: &Env, kind: EndorsementKind, asset: &Address) -> Vec<Address> {
    match asset_key(kind, asset) {
        Ok(key) => list(env, &key),
        Err(_) => Vec::new(env),
    }
}

/// Endorsed addresses of `kind` for `asset` under one release.
pub fn endorsed_by_version(
    env: &Env,
    kind: EndorsementKind,
    asset: &Address,
    release_version: u32,
) -> Vec<Address> {
    match version_key(kind, asset, release_version) {
        Ok(key) => list(env, &key),
        Err(_) => Vec::new(env),
    }
}

pub fn assets(env: &Env) -> Vec<Address> {
    list(env, &CatalogKey::Assets)
}

/// One list of `kind` addresses per tracked asset, in asset order.
pub fn snapshot(env: &Env, kind: EndorsementKind) -> Vec<Vec<Address>> {
    let mut all = Vec::new(env);
    for asset in assets(env).iter() {
        all.push_back(endorsed(env, kind, &asset));
    }
    all
}

fn track_asset(env: &Env, asset: &Address) {
    let known = CatalogKey::KnownAsset(asset.clone());
    if env.storage().persistent().has(&known) {
        return;
    }
    env.storage().persistent().set(&known, &true);
    append(env, &CatalogKey::Assets, asset);
}

fn append(env: &Env, key: &CatalogKey, address: &Address) {
    let mut addresses = list(env, key);
    addresses.push_back(address.clone());
    env.storage().persistent().set(key, &addresses);
}
