//! # Single-Holder Authority
//!
//! One address at a time is allowed to mutate a contract. The endorsement
//! registry calls the holder its *governance*, the release registry calls it
//! its *owner*; both store it here, in instance storage, under
//! [`AuthorityKey::Holder`].
//!
//! ## Rules
//!
//! - The holder is set once by [`init`] and is never the zero address
//! - Only the current holder may hand the role over, and the hand-over is
//!   immediate (no accept step)
//! - Every gated call must be authorized by the caller it names

use soroban_sdk::{contracttype, Address, Env};

use crate::{is_zero_address, RegistryError};

/// Storage keys for the authority holder
#[contracttype]
#[derive(Clone)]
pub enum AuthorityKey {
    /// Address currently allowed to mutate the contract
    Holder,
}

/// Store the first holder.
///
/// # Errors
/// - `AlreadyInitialized` if a holder is already stored
/// - `InvalidAddress` if `holder` is the zero address
pub fn init(env: &Env, holder: &Address) -> Result<(), RegistryError> {
    if is_initialized(env) {
        return Err(RegistryError::AlreadyInitialized);
    }
    if is_zero_address(env, holder) {
        return Err(RegistryError::InvalidAddress);
    }
    env.storage().instance().set(&AuthorityKey::Holder, holder);
    Ok(())
}

/// Whether a holder has been stored.
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&AuthorityKey::Holder)
}

/// Get the current holder.
pub fn holder(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&AuthorityKey::Holder)
        .ok_or(RegistryError::NotInitialized)
}

/// Require `caller` to authorize the call and to be the current holder.
pub fn require_holder(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    caller.require_auth();
    if *caller != holder(env)? {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

/// Hand the role from `caller` to `new_holder`. Returns the previous holder.
///
/// # Errors
/// - `Unauthorized` if `caller` is not the current holder
/// - `InvalidAddress` if `new_holder` is the zero address
pub fn transfer(
    env: &Env,
    caller: &Address,
    new_holder: &Address,
) -> Result<Address, RegistryError> {
    require_holder(env, caller)?;
    if is_zero_address(env, new_holder) {
        return Err(RegistryError::InvalidAddress);
    }
    env.storage()
        .instance()
        .set(&AuthorityKey::Holder, new_holder);
    Ok(caller.clone())
}
