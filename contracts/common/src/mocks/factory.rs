use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

use super::vault::MockVaultClient;

const TOPIC_NEW_VAULT: Symbol = symbol_short!("new_vault");

#[contracttype]
#[derive(Clone)]
pub enum MockFactoryKey {
    Name,
    ApiVersion,
    /// Registered vault instances not handed out yet
    Pending,
    /// Pending vault that is already configured and is handed out as is
    Configured(Address),
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct NewVaultEvent {
    pub vault_address: Address,
    pub asset: Address,
}

#[contract]
pub struct MockVaultFactory;

#[contractimpl]
impl MockVaultFactory {
    pub fn initialize(env: Env, name: String, api_version: String) {
        if env.storage().instance().has(&MockFactoryKey::ApiVersion) {
            panic!("already initialized");
        }
        env.storage().instance().set(&MockFactoryKey::Name, &name);
        env.storage()
            .instance()
            .set(&MockFactoryKey::ApiVersion, &api_version);
        env.storage()
            .instance()
            .set(&MockFactoryKey::Pending, &Vec::<Address>::new(&env));
    }

    /// Queue an uninitialized `MockVault` instance for the next deploy.
    pub fn provision(env: Env, vault: Address) {
        let mut pending = Self::pending_vaults(&env);
        pending.push_back(vault);
        env.storage()
            .instance()
            .set(&MockFactoryKey::Pending, &pending);
    }

    /// Queue a vault that is already configured. The next deploy that picks
    /// it returns it without initializing it again.
    pub fn provision_configured(env: Env, vault: Address) {
        env.storage()
            .instance()
            .set(&MockFactoryKey::Configured(vault.clone()), &true);
        Self::provision(env, vault);
    }

    pub fn num_pending(env: Env) -> u32 {
        Self::pending_vaults(&env).len()
    }

    pub fn name(env: Env) -> String {
        env.storage()
            .instance()
            .get(&MockFactoryKey::Name)
            .expect("not initialized")
    }

    pub fn api_version(env: Env) -> String {
        env.storage()
            .instance()
            .get(&MockFactoryKey::ApiVersion)
            .expect("not initialized")
    }

    pub fn deploy_new_vault(
        env: Env,
        asset: Address,
        name: String,
        symbol: String,
        role_manager: Address,
        profit_max_unlock_time: u64,
    ) -> Address {
        let mut pending = Self::pending_vaults(&env);
        let vault = pending.pop_front().expect("no vault provisioned");
        env.storage()
            .instance()
            .set(&MockFactoryKey::Pending, &pending);

        let configured = MockFactoryKey::Configured(vault.clone());
        if env.storage().instance().has(&configured) {
            env.storage().instance().remove(&configured);
        } else {
            MockVaultClient::new(&env, &vault).initialize(
                &asset,
                &name,
                &symbol,
                &role_manager,
                &profit_max_unlock_time,
                &Self::api_version(env.clone()),
            );
        }

        env.events().publish(
            (TOPIC_NEW_VAULT,),
            NewVaultEvent {
                vault_address: vault.clone(),
                asset,
            },
        );
        vault
    }

    fn pending_vaults(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&MockFactoryKey::Pending)
            .unwrap_or_else(|| Vec::new(env))
    }
}
