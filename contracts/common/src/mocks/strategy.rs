use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone)]
pub enum MockStrategyKey {
    Asset,
    ApiVersion,
}

#[contract]
pub struct MockStrategy;

#[contractimpl]
impl MockStrategy {
    pub fn initialize(env: Env, asset: Address, api_version: String) {
        if env.storage().instance().has(&MockStrategyKey::Asset) {
            panic!("already initialized");
        }
        env.storage().instance().set(&MockStrategyKey::Asset, &asset);
        env.storage()
            .instance()
            .set(&MockStrategyKey::ApiVersion, &api_version);
    }

    pub fn api_version(env: Env) -> String {
        env.storage()
            .instance()
            .get(&MockStrategyKey::ApiVersion)
            .expect("not initialized")
    }

    pub fn asset(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&MockStrategyKey::Asset)
            .expect("not initialized")
    }
}
