//! # Mock Collaborators
//!
//! Stand-ins for the vault, strategy and factory contracts the registries
//! talk to. They implement only the calls the registries make plus the
//! getters tests assert on; no accounting of any kind.
//!
//! Soroban tests cannot deploy wasm from inside a contract call, so
//! [`MockVaultFactory`] hands out vault instances that the test registered
//! beforehand with [`MockVaultFactory::provision`] and initializes them on
//! deploy, the way a real factory would configure a fresh clone. Vaults queued
//! with [`MockVaultFactory::provision_configured`] are handed out as is.

mod factory;
mod strategy;
mod vault;

pub use factory::{MockVaultFactory, MockVaultFactoryClient, NewVaultEvent};
pub use strategy::{MockStrategy, MockStrategyClient};
pub use vault::{MockVault, MockVaultClient, MockVaultConfig};

use soroban_sdk::{Address, Env, String};

/// Register a factory reporting `api_version` with `vaults` instances ready
/// to be handed out.
pub fn register_factory(env: &Env, api_version: &str, vaults: u32) -> Address {
    let factory = env.register(MockVaultFactory, ());
    let client = MockVaultFactoryClient::new(env, &factory);
    client.initialize(
        &String::from_str(env, "Mock Vault Factory"),
        &String::from_str(env, api_version),
    );
    for _ in 0..vaults {
        client.provision(&env.register(MockVault, ()));
    }
    factory
}

/// Register a vault deployed outside any registry.
pub fn register_vault(env: &Env, asset: &Address, api_version: &str) -> Address {
    let vault = env.register(MockVault, ());
    MockVaultClient::new(env, &vault).initialize(
        asset,
        &String::from_str(env, "Standalone Vault"),
        &String::from_str(env, "svTest"),
        asset,
        &604_800u64,
        &String::from_str(env, api_version),
    );
    vault
}

/// Register a strategy for `asset` reporting `api_version`.
pub fn register_strategy(env: &Env, asset: &Address, api_version: &str) -> Address {
    let strategy = env.register(MockStrategy, ());
    MockStrategyClient::new(env, &strategy).initialize(asset, &String::from_str(env, api_version));
    strategy
}
