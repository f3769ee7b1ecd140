//! Events emitted by the release ledger.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

/// Topic for release appended events
pub const TOPIC_NEW_RELEASE: Symbol = symbol_short!("rel_new");
/// Topic for ownership transfer events
pub const TOPIC_OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("own_xfer");

/// Event data for a new release
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct NewReleaseEvent {
    /// Index assigned to the release
    pub release_id: u32,
    /// Factory bound to the release
    pub factory: Address,
    /// Api version reported by the factory
    pub api_version: String,
}

/// Event data for an ownership transfer
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
}

pub fn emit_new_release(env: &Env, release_id: u32, factory: &Address, api_version: &String) {
    let event = NewReleaseEvent {
        release_id,
        factory: factory.clone(),
        api_version: api_version.clone(),
    };
    env.events()
        .publish((TOPIC_NEW_RELEASE, factory.clone()), event);
}

pub fn emit_ownership_transferred(env: &Env, previous_owner: &Address, new_owner: &Address) {
    let event = OwnershipTransferredEvent {
        previous_owner: previous_owner.clone(),
        new_owner: new_owner.clone(),
    };
    env.events()
        .publish((TOPIC_OWNERSHIP_TRANSFERRED, previous_owner.clone()), event);
}
