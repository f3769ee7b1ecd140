//! Client interfaces for the contracts the registries call into.

use soroban_sdk::{contractclient, Address, Env, String};

use crate::{RegistryError, Release};

// Interface for a vault factory bound to one release
#[contractclient(name = "VaultFactoryClient")]
pub trait VaultFactoryInterface {
    fn api_version(env: Env) -> String;
    fn deploy_new_vault(
        env: Env,
        asset: Address,
        name: String,
        symbol: String,
        role_manager: Address,
        profit_max_unlock_time: u64,
    ) -> Address;
}

// Interface for a deployed vault or strategy that can be endorsed
#[contractclient(name = "EndorsableClient")]
pub trait EndorsableInterface {
    fn api_version(env: Env) -> String;
    fn asset(env: Env) -> Address;
}

// Interface for the release ledger
#[contractclient(name = "ReleaseLedgerClient")]
pub trait ReleaseLedgerInterface {
    fn num_releases(env: Env) -> u32;
    fn release_at(env: Env, index: u32) -> Result<Release, RegistryError>;
}
