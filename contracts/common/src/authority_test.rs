//! # Authority Tests
//!
//! The helper has no contract of its own, so each test runs it inside the
//! storage frame of a registered mock.

use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

use crate::authority;
use crate::mocks::MockStrategy;
use crate::{is_zero_address, zero_address, RegistryError};

fn setup() -> (Env, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(MockStrategy, ());
    (env, contract_id)
}

#[test]
fn test_zero_address_is_stable() {
    let env = Env::default();
    assert_eq!(zero_address(&env), zero_address(&env));
    assert!(is_zero_address(&env, &zero_address(&env)));
    assert!(!is_zero_address(&env, &Address::generate(&env)));
}

#[test]
fn test_init_stores_holder() {
    let (env, contract_id) = setup();
    let holder = Address::generate(&env);
    env.as_contract(&contract_id, || {
        assert!(!authority::is_initialized(&env));
        authority::init(&env, &holder).unwrap();
        assert!(authority::is_initialized(&env));
        assert_eq!(authority::holder(&env), Ok(holder.clone()));
    });
}

#[test]
fn test_init_twice_fails() {
    let (env, contract_id) = setup();
    let holder = Address::generate(&env);
    env.as_contract(&contract_id, || {
        authority::init(&env, &holder).unwrap();
        assert_eq!(
            authority::init(&env, &Address::generate(&env)),
            Err(RegistryError::AlreadyInitialized)
        );
        assert_eq!(authority::holder(&env), Ok(holder.clone()));
    });
}

#[test]
fn test_init_rejects_zero_address() {
    let (env, contract_id) = setup();
    env.as_contract(&contract_id, || {
        assert_eq!(
            authority::init(&env, &zero_address(&env)),
            Err(RegistryError::InvalidAddress)
        );
        assert_eq!(authority::holder(&env), Err(RegistryError::NotInitialized));
    });
}

// Each authorized call runs in its own frame; an address can authorize
// only once per frame.

#[test]
fn test_require_holder_before_init_fails() {
    let (env, contract_id) = setup();
    let holder = Address::generate(&env);
    env.as_contract(&contract_id, || {
        assert_eq!(
            authority::require_holder(&env, &holder),
            Err(RegistryError::NotInitialized)
        );
    });
}

#[test]
fn test_require_holder() {
    let (env, contract_id) = setup();
    let holder = Address::generate(&env);
    let other = Address::generate(&env);
    env.as_contract(&contract_id, || {
        authority::init(&env, &holder).unwrap();
    });
    env.as_contract(&contract_id, || {
        assert_eq!(authority::require_holder(&env, &holder), Ok(()));
    });
    env.as_contract(&contract_id, || {
        assert_eq!(
            authority::require_holder(&env, &other),
            Err(RegistryError::Unauthorized)
        );
    });
}

#[test]
fn test_transfer() {
    let (env, contract_id) = setup();
    let holder = Address::generate(&env);
    let next = Address::generate(&env);
    env.as_contract(&contract_id, || {
        authority::init(&env, &holder).unwrap();
    });
    env.as_contract(&contract_id, || {
        assert_eq!(authority::transfer(&env, &holder, &next), Ok(holder.clone()));
        assert_eq!(authority::holder(&env), Ok(next.clone()));
    });

    // The previous holder lost the role.
    env.as_contract(&contract_id, || {
        assert_eq!(
            authority::transfer(&env, &holder, &holder),
            Err(RegistryError::Unauthorized)
        );
        assert_eq!(authority::holder(&env), Ok(next.clone()));
    });
}

#[test]
fn test_transfer_to_zero_address_fails() {
    let (env, contract_id) = setup();
    let holder = Address::generate(&env);
    env.as_contract(&contract_id, || {
        authority::init(&env, &holder).unwrap();
        assert_eq!(
            authority::transfer(&env, &holder, &zero_address(&env)),
            Err(RegistryError::InvalidAddress)
        );
        assert_eq!(authority::holder(&env), Ok(holder.clone()));
    });
}
