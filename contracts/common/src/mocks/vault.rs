use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};

/// Storage keys for the mock vault
#[contracttype]
#[derive(Clone)]
pub enum MockVaultKey {
    Config,
}

/// Everything a factory configures on a fresh vault.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct MockVaultConfig {
    pub asset: Address,
    pub name: String,
    pub symbol: String,
    pub role_manager: Address,
    pub profit_max_unlock_time: u64,
    pub api_version: String,
}

#[contract]
pub struct MockVault;

#[contractimpl]
impl MockVault {
    pub fn initialize(
        env: Env,
        asset: Address,
        name: String,
        symbol: String,
        role_manager: Address,
        profit_max_unlock_time: u64,
        api_version: String,
    ) {
        if env.storage().instance().has(&MockVaultKey::Config) {
            panic!("already initialized");
        }
        let config = MockVaultConfig {
            asset,
            name,
            symbol,
            role_manager,
            profit_max_unlock_time,
            api_version,
        };
        env.storage().instance().set(&MockVaultKey::Config, &config);
    }

    pub fn config(env: Env) -> MockVaultConfig {
        env.storage()
            .instance()
            .get(&MockVaultKey::Config)
            .expect("not initialized")
    }

    pub fn api_version(env: Env) -> String {
        Self::config(env).api_version
    }

    pub fn asset(env: Env) -> Address {
        Self::config(env).asset
    }
}
