//! # Registry Events
//!
//! | Event                 | Topic      | Second topic         |
//! |-----------------------|------------|----------------------|
//! | NewEndorsedVault      | `vlt_end`  | asset                |
//! | NewEndorsedStrategy   | `str_end`  | asset                |
//! | VaultTagged           | `vlt_tag`  | tagged address       |
//! | GovernanceTransferred | `gov_xfer` | previous governance  |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

/// Topic for vault endorsement events
pub const TOPIC_VAULT_ENDORSED: Symbol = symbol_short!("vlt_end");
/// Topic for strategy endorsement events
pub const TOPIC_STRATEGY_ENDORSED: Symbol = symbol_short!("str_end");
/// Topic for tag updates
pub const TOPIC_VAULT_TAGGED: Symbol = symbol_short!("vlt_tag");
/// Topic for governance transfers
pub const TOPIC_GOVERNANCE_TRANSFERRED: Symbol = symbol_short!("gov_xfer");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct NewEndorsedVaultEvent {
    pub asset: Address,
    pub vault: Address,
    pub release_version: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct NewEndorsedStrategyEvent {
    pub strategy: Address,
    pub asset: Address,
    pub release_version: u32,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct VaultTaggedEvent {
    pub vault: Address,
    pub tag: String,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct GovernanceTransferredEvent {
    pub previous_governance: Address,
    pub new_governance: Address,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

pub fn emit_vault_endorsed(env: &Env, asset: &Address, vault: &Address, release_version: u32) {
    let event = NewEndorsedVaultEvent {
        asset: asset.clone(),
        vault: vault.clone(),
        release_version,
    };
    env.events()
        .publish((TOPIC_VAULT_ENDORSED, asset.clone()), event);
}

pub fn emit_strategy_endorsed(
    env: &Env,
    strategy: &Address,
    asset: &Address,
    release_version: u32,
) {
    let event = NewEndorsedStrategyEvent {
        strategy: strategy.clone(),
        asset: asset.clone(),
        release_version,
    };
    env.events()
        .publish((TOPIC_STRATEGY_ENDORSED, asset.clone()), event);
}

pub fn emit_vault_tagged(env: &Env, vault: &Address, tag: &String) {
    let event = VaultTaggedEvent {
        vault: vault.clone(),
        tag: tag.clone(),
    };
    env.events()
        .publish((TOPIC_VAULT_TAGGED, vault.clone()), event);
}

/// Emitted after the governance field has been updated.
pub fn emit_governance_transferred(
    env: &Env,
    previous_governance: &Address,
    new_governance: &Address,
) {
    let event = GovernanceTransferredEvent {
        previous_governance: previous_governance.clone(),
        new_governance: new_governance.clone(),
    };
    env.events().publish(
        (TOPIC_GOVERNANCE_TRANSFERRED, previous_governance.clone()),
        event,
    );
}
