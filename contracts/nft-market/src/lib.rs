//! NFT Market — a single-collection token registry with a fixed-price sale
//! state machine: holders mint tokens, list them at a price, and any buyer
//! paying exactly that price receives ownership while the proceeds go to the
//! seller, all within one call.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

// --- Modules ---

mod admin;
pub mod constants;
mod errors;
mod events;
mod internal;
mod sale;
mod sale_views;
mod token_core;
mod token_views;
pub mod types;


pub use constants::*;
pub use errors::MarketError;
pub use types::*;

// --- Storage Keys ---

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    TokensById,
    TokensPerOwner,
    TokensPerOwnerInner { account_id_hash: Vec<u8> },
    Sales,
}

// --- Contract State ---

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/nft-market/nft-market",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    /// From Cargo.toml.
    pub version: String,

    /// Administrator; never consulted by mint/list/buy/delist.
    pub owner_id: AccountId,

    /// Next identifier to assign; equals the count of tokens ever minted.
    pub next_token_id: TokenId,

    pub tokens_by_id: IterableMap<TokenId, Token>,
    pub tokens_per_owner: LookupMap<AccountId, IterableSet<TokenId>>,

    /// Sale records persist after delist/purchase with `is_for_sale = false`;
    /// an absent key is equivalent to the default not-for-sale record.
    pub sales: IterableMap<TokenId, SaleRecord>,

    /// NEP-177-shaped metadata; carries the collection `base_uri`.
    pub contract_metadata: MarketContractMetadata,
}
