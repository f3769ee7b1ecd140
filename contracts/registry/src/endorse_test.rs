//! # Endorse-Existing Tests
//!
//! Endorsing vaults and strategies deployed outside the registry: the
//! version gate, release deltas and the duplicate-address policy.

use crate::test::{add_release, deploy_vault, setup, API_VERSION};
use crate::{EndorsementKind, NewEndorsedStrategyEvent, RegistryError};
use soroban_sdk::testutils::{Address as _, Events as _};
use soroban_sdk::{Address, String, TryFromVal, Vec};
use vault_registry_common::mocks::{register_strategy, register_vault};
use vault_registry_common::zero_address;

// ════════════════════════════════════════════════════════════════════
//  Vault Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_endorse_deployed_vault() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);

    s.registry.endorse_vault(&s.governance, &vault, &0, &1_650_000_000);

    let info = s.registry.info(&vault);
    assert_eq!(info.kind, EndorsementKind::Vault);
    assert_eq!(info.asset, s.asset);
    assert_eq!(info.release_version, 0);
    assert_eq!(info.deployment_timestamp, 1_650_000_000);
    assert_eq!(info.tag, String::from_str(&s.env, ""));

    assert!(s.registry.is_endorsed(&vault));
    assert_eq!(s.registry.get_assets(), Vec::from_array(&s.env, [s.asset.clone()]));
    assert_eq!(
        s.registry.get_endorsed_vaults(&s.asset),
        Vec::from_array(&s.env, [vault.clone()])
    );
    assert_eq!(
        s.registry.get_endorsed_vaults_by_version(&s.asset, &0),
        Vec::from_array(&s.env, [vault])
    );
}

#[test]
fn test_endorse_vault_without_timestamp_records_zero() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);

    s.registry.endorse_vault(&s.governance, &vault, &0, &0);

    assert_eq!(s.registry.info(&vault).deployment_timestamp, 0);
}

#[test]
fn test_endorse_vault_with_release_delta_checks_older_release() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    add_release(&s, "3.0.2", 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);

    // Newest release is 3.0.2; the vault is 3.0.1-beta.
    assert_eq!(
        s.registry.try_endorse_vault(&s.governance, &vault, &0, &0),
        Err(Ok(RegistryError::VersionMismatch))
    );

    s.registry.endorse_vault(&s.governance, &vault, &1, &0);
    assert_eq!(s.registry.info(&vault).release_version, 0);
    assert_eq!(s.registry.num_endorsed_vaults_by_version(&s.asset, &0), 1);
    assert_eq!(s.registry.num_endorsed_vaults_by_version(&s.asset, &1), 0);
}

#[test]
fn test_endorse_vault_wrong_api_version_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, "6.9");

    let result = s.registry.try_endorse_vault(&s.governance, &vault, &0, &0);

    assert_eq!(result, Err(Ok(RegistryError::VersionMismatch)));
    let info = s.registry.info(&vault);
    assert_eq!(info.kind, EndorsementKind::Unendorsed);
    assert_eq!(info.asset, zero_address(&s.env));
    assert_eq!(info.release_version, 0);
    assert!(!s.registry.is_endorsed(&vault));
    assert_eq!(s.registry.num_assets(), 0);
    assert_eq!(s.registry.num_endorsed_vaults(&s.asset), 0);
}

#[test]
fn test_endorse_vault_without_releases_fails() {
    let s = setup();
    let vault = register_vault(&s.env, &s.asset, API_VERSION);

    let result = s.registry.try_endorse_vault(&s.governance, &vault, &0, &0);
    assert_eq!(result, Err(Ok(RegistryError::OutOfRange)));
    assert!(!s.registry.is_endorsed(&vault));
}

#[test]
fn test_endorse_vault_without_governance_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);
    let user = Address::generate(&s.env);

    let result = s.registry.try_endorse_vault(&user, &vault, &0, &0);
    assert_eq!(result, Err(Ok(RegistryError::Unauthorized)));
    assert!(!s.registry.is_endorsed(&vault));
    assert_eq!(s.registry.num_assets(), 0);
}

// ════════════════════════════════════════════════════════════════════
//  Strategy Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_endorse_deployed_strategy() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let strategy = register_strategy(&s.env, &s.asset, API_VERSION);

    s.registry.endorse_strategy(&s.governance, &strategy, &0, &0);

    let info = s.registry.info(&strategy);
    assert_eq!(info.kind, EndorsementKind::Strategy);
    assert_eq!(info.asset, s.asset);
    assert_eq!(info.release_version, 0);

    assert_eq!(s.registry.num_assets(), 1);
    assert_eq!(s.registry.num_endorsed_strategies(&s.asset), 1);
    assert_eq!(s.registry.num_strategies_by_version(&s.asset, &0), 1);
    assert_eq!(
        s.registry.get_endorsed_strategies(&s.asset),
        Vec::from_array(&s.env, [strategy.clone()])
    );
    assert_eq!(
        s.registry.get_strategies_by_version(&s.asset, &0),
        Vec::from_array(&s.env, [strategy])
    );
    // Strategies never leak into the vault indexes.
    assert_eq!(s.registry.num_endorsed_vaults(&s.asset), 0);
}

#[test]
fn test_endorse_strategy_emits_event() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let strategy = register_strategy(&s.env, &s.asset, API_VERSION);

    s.registry.endorse_strategy(&s.governance, &strategy, &0, &0);

    let (contract, _topics, data) = s.env.events().all().last().unwrap();
    assert_eq!(contract, s.registry.address);
    assert_eq!(
        NewEndorsedStrategyEvent::try_from_val(&s.env, &data).unwrap(),
        NewEndorsedStrategyEvent {
            strategy,
            asset: s.asset.clone(),
            release_version: 0,
        }
    );
}

#[test]
fn test_endorse_strategy_wrong_api_version_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let strategy = register_strategy(&s.env, &s.asset, "6.9");

    let result = s.registry.try_endorse_strategy(&s.governance, &strategy, &0, &0);
    assert_eq!(result, Err(Ok(RegistryError::VersionMismatch)));
    assert_eq!(s.registry.num_endorsed_strategies(&s.asset), 0);
    assert_eq!(s.registry.num_assets(), 0);
}

#[test]
fn test_endorse_strategy_without_governance_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let strategy = register_strategy(&s.env, &s.asset, API_VERSION);
    let user = Address::generate(&s.env);

    let result = s.registry.try_endorse_strategy(&user, &strategy, &0, &0);
    assert_eq!(result, Err(Ok(RegistryError::Unauthorized)));
    assert_eq!(s.registry.num_endorsed_strategies(&s.asset), 0);
}

#[test]
fn test_vault_and_strategy_share_one_asset_entry() {
    let s = setup();
    add_release(&s, API_VERSION, 1);
    let vault = deploy_vault(&s, &s.asset);
    let strategy = register_strategy(&s.env, &s.asset, API_VERSION);

    s.registry.endorse_strategy(&s.governance, &strategy, &0, &0);

    assert_eq!(s.registry.get_assets(), Vec::from_array(&s.env, [s.asset.clone()]));
    assert_eq!(
        s.registry.get_endorsed_vaults(&s.asset),
        Vec::from_array(&s.env, [vault])
    );
    assert_eq!(
        s.registry.get_endorsed_strategies(&s.asset),
        Vec::from_array(&s.env, [strategy])
    );
}

// ════════════════════════════════════════════════════════════════════
//  Duplicate Policy Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_endorse_same_vault_twice_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);
    s.registry.endorse_vault(&s.governance, &vault, &0, &100);

    let result = s.registry.try_endorse_vault(&s.governance, &vault, &0, &200);

    assert_eq!(result, Err(Ok(RegistryError::AlreadyEndorsed)));
    assert_eq!(s.registry.num_endorsed_vaults(&s.asset), 1);
    assert_eq!(s.registry.num_endorsed_vaults_by_version(&s.asset, &0), 1);
    assert_eq!(s.registry.info(&vault).deployment_timestamp, 100);
}

#[test]
fn test_endorse_vault_as_strategy_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);
    s.registry.endorse_vault(&s.governance, &vault, &0, &0);

    let result = s.registry.try_endorse_strategy(&s.governance, &vault, &0, &0);

    assert_eq!(result, Err(Ok(RegistryError::AlreadyEndorsed)));
    assert_eq!(s.registry.num_endorsed_strategies(&s.asset), 0);
    assert_eq!(s.registry.info(&vault).kind, EndorsementKind::Vault);
}

#[test]
fn test_endorse_deployed_vault_again_fails() {
    let s = setup();
    add_release(&s, API_VERSION, 1);
    let vault = deploy_vault(&s, &s.asset);

    let result = s.registry.try_endorse_vault(&s.governance, &vault, &0, &0);

    assert_eq!(result, Err(Ok(RegistryError::AlreadyEndorsed)));
    assert_eq!(
        s.registry.get_endorsed_vaults(&s.asset),
        Vec::from_array(&s.env, [vault])
    );
}

// ════════════════════════════════════════════════════════════════════
//  Release History Tests
// ════════════════════════════════════════════════════════════════════

#[test]
fn test_entries_survive_new_releases() {
    let s = setup();
    add_release(&s, API_VERSION, 0);
    let vault = register_vault(&s.env, &s.asset, API_VERSION);
    s.registry.endorse_vault(&s.governance, &vault, &0, &0);

    add_release(&s, "3.0.2", 0);
    add_release(&s, "3.0.3", 0);

    let info = s.registry.info(&vault);
    assert_eq!(info.release_version, 0);
    assert_eq!(
        s.registry.get_endorsed_vaults_by_version(&s.asset, &0),
        Vec::from_array(&s.env, [vault.clone()])
    );

    // The same release is now reached with delta 2.
    let sibling = register_vault(&s.env, &s.asset, API_VERSION);
    s.registry.endorse_vault(&s.governance, &sibling, &2, &0);
    assert_eq!(
        s.registry.get_endorsed_vaults_by_version(&s.asset, &0),
        Vec::from_array(&s.env, [vault, sibling])
    );
}
