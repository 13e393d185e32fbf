// Borsh-encoded events for indexer consumption.
// Emitted as base64 behind an "EVENT:" prefix via `env::log_str`.

use near_sdk::base64::Engine;
use near_sdk::json_types::U128;
use near_sdk::{borsh, env, near, AccountId};
use std::cell::Cell;

use crate::types::TokenId;

// --- Constants ---

const EVENT_STANDARD: &str = "nft-market";
const EVENT_VERSION: &str = "1.0.0";
const EVENT_PREFIX: &str = "EVENT:";

// --- Thread-local log index for unique event IDs within a transaction ---
thread_local! {
    static LOG_INDEX: Cell<u32> = Cell::new(0);
}

fn next_log_index() -> u32 {
    LOG_INDEX.with(|idx| {
        let current = idx.get();
        idx.set(current + 1);
        current
    })
}

// --- Event Data Structures ---

/// Market event data variants for the different operations.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub enum MarketEventData {
    NftMint {
        owner_id: String,
        token_id: TokenId,
    },
    NftList {
        seller_id: String,
        token_id: TokenId,
        price: String, // yoctoNEAR as string for indexer consistency
    },
    NftDelist {
        seller_id: String,
        token_id: TokenId,
    },
    NftPurchase {
        buyer_id: String,
        seller_id: String,
        token_id: TokenId,
        price: String,
    },
    NftTransfer {
        sender_id: String,
        receiver_id: String,
        token_id: TokenId,
    },
    OwnerTransferred {
        old_owner_id: String,
        new_owner_id: String,
    },
    ContractMetadataUpdated {
        owner_id: String,
        name: String,
        symbol: String,
    },
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct MarketEvent {
    pub evt_standard: String,
    pub version: String,
    pub evt_type: String,
    pub evt_id: String,
    pub log_index: u32,
    pub block_height: u64,
    pub timestamp: u64,
    pub data: MarketEventData,
}

// --- Helper Functions ---

/// Format: {event_type}-{account}-{block_height}-{timestamp}-{log_index}
fn generate_event_id(event_type: &str, account_id: &AccountId, log_index: u32) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        event_type,
        account_id,
        env::block_height(),
        env::block_timestamp(),
        log_index
    )
}

fn emit(evt_type: &str, account_id: &AccountId, data: MarketEventData) {
    let log_index = next_log_index();
    let event = MarketEvent {
        evt_standard: EVENT_STANDARD.to_string(),
        version: EVENT_VERSION.to_string(),
        evt_type: evt_type.to_string(),
        evt_id: generate_event_id(evt_type, account_id, log_index),
        log_index,
        block_height: env::block_height(),
        timestamp: env::block_timestamp(),
        data,
    };
    emit_borsh_event(&event);
}

/// Serialize to Borsh, base64-encode behind the event prefix, and log.
fn emit_borsh_event(event: &MarketEvent) {
    let buffer = borsh::to_vec(event).expect("Failed to serialize event");

    let encoded_len = buffer.len().div_ceil(3) * 4;
    let mut log_str = String::with_capacity(EVENT_PREFIX.len() + encoded_len);

    log_str.push_str(EVENT_PREFIX);
    near_sdk::base64::engine::general_purpose::STANDARD.encode_string(&buffer, &mut log_str);

    env::log_str(&log_str);
}

// --- Emitters ---

pub fn emit_mint(owner_id: &AccountId, token_id: TokenId) {
    emit(
        "nft_mint",
        owner_id,
        MarketEventData::NftMint {
            owner_id: owner_id.to_string(),
            token_id,
        },
    );
}

pub fn emit_list(seller_id: &AccountId, token_id: TokenId, price: U128) {
    emit(
        "nft_list",
        seller_id,
        MarketEventData::NftList {
            seller_id: seller_id.to_string(),
            token_id,
            price: price.0.to_string(),
        },
    );
}

pub fn emit_delist(seller_id: &AccountId, token_id: TokenId) {
    emit(
        "nft_delist",
        seller_id,
        MarketEventData::NftDelist {
            seller_id: seller_id.to_string(),
            token_id,
        },
    );
}

pub fn emit_purchase(buyer_id: &AccountId, seller_id: &AccountId, token_id: TokenId, price: U128) {
    emit(
        "nft_purchase",
        buyer_id,
        MarketEventData::NftPurchase {
            buyer_id: buyer_id.to_string(),
            seller_id: seller_id.to_string(),
            token_id,
            price: price.0.to_string(),
        },
    );
}

pub fn emit_transfer(sender_id: &AccountId, receiver_id: &AccountId, token_id: TokenId) {
    emit(
        "nft_transfer",
        sender_id,
        MarketEventData::NftTransfer {
            sender_id: sender_id.to_string(),
            receiver_id: receiver_id.to_string(),
            token_id,
        },
    );
}

pub fn emit_owner_transferred(old_owner_id: &AccountId, new_owner_id: &AccountId) {
    emit(
        "owner_transferred",
        old_owner_id,
        MarketEventData::OwnerTransferred {
            old_owner_id: old_owner_id.to_string(),
            new_owner_id: new_owner_id.to_string(),
        },
    );
}

pub fn emit_contract_metadata_updated(owner_id: &AccountId, name: &str, symbol: &str) {
    emit(
        "contract_metadata_updated",
        owner_id,
        MarketEventData::ContractMetadataUpdated {
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
        },
    );
}
