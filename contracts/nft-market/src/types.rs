use near_sdk::json_types::U128;
use near_sdk::{near, AccountId};

/// Unique integer naming one token; assigned `0, 1, 2, …` at mint time,
/// never reused, never decremented.
pub type TokenId = u64;

// --- Structs ---

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Token {
    pub owner_id: AccountId,
    /// Immutable after mint.
    pub minter_id: AccountId,
    /// Nanoseconds, from `env::block_timestamp()`.
    pub minted_at: u64,
}

/// Per-token sale state. Created on first listing and kept for the life of
/// the token; `is_for_sale` flips back to false on delist or purchase.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct SaleRecord {
    /// Token owner at the time of listing.
    pub seller: AccountId,
    /// yoctoNEAR. Zero is a valid listing price.
    pub price: U128,
    pub is_for_sale: bool,
}

/// View projection of a sale record. Never-listed tokens resolve to the
/// default: no seller, zero price, not for sale.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct SaleDetails {
    pub seller: Option<AccountId>,
    pub price: U128,
    pub is_for_sale: bool,
}

impl Default for SaleDetails {
    fn default() -> Self {
        Self {
            seller: None,
            price: U128(0),
            is_for_sale: false,
        }
    }
}

impl From<&SaleRecord> for SaleDetails {
    fn from(record: &SaleRecord) -> Self {
        Self {
            seller: Some(record.seller.clone()),
            price: record.price,
            is_for_sale: record.is_for_sale,
        }
    }
}

/// Row shape for paginated sale queries.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct SaleView {
    pub token_id: TokenId,
    pub seller: AccountId,
    pub price: U128,
    pub is_for_sale: bool,
}

/// NEP-177-shaped contract metadata; updatable by the contract owner.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct MarketContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    /// Collection-wide URI; every token resolves to it.
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<String>,
}

impl Default for MarketContractMetadata {
    fn default() -> Self {
        Self {
            spec: "nft-1.0.0".to_string(),
            name: "NFT Market".to_string(),
            symbol: "NFTM".to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        }
    }
}
