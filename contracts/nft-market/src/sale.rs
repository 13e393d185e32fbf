//! The sale state machine — listing, purchase, delisting.
//!
//! Per token: `NotListed → Listed` via `list_nft` (owner only),
//! `Listed → NotListed` via `delist_nft` (seller only) or via a successful
//! `buy_nft`, `Listed → Listed` via re-listing (overwrites seller/price).
//! Records are never deleted; tokens stay re-listable indefinitely.

use crate::internal::check_no_deposit;
use crate::*;

#[near]
impl Contract {
    /// List `token_id` at `price`. Owner only. Re-listing overwrites the
    /// previous record. A zero price is accepted: the purchase path then
    /// acts as a free claim (documented policy, not an oversight).
    #[payable]
    #[handle_result]
    pub fn list_nft(&mut self, token_id: TokenId, price: U128) -> Result<(), MarketError> {
        check_no_deposit()?;
        let caller = env::predecessor_account_id();
        self.internal_list(&caller, token_id, price)
    }

    /// Purchase a listed token. The attached deposit must equal the listed
    /// price exactly; overpayment is rejected, not refunded as change.
    /// On any error the whole call reverts and the deposit bounces back.
    #[payable]
    #[handle_result]
    pub fn buy_nft(&mut self, token_id: TokenId) -> Result<(), MarketError> {
        let buyer = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.internal_buy(&buyer, token_id, deposit)
    }

    /// Take `token_id` off sale. Seller only. Idempotent once delisted.
    #[payable]
    #[handle_result]
    pub fn delist_nft(&mut self, token_id: TokenId) -> Result<(), MarketError> {
        check_no_deposit()?;
        let caller = env::predecessor_account_id();
        self.internal_delist(&caller, token_id)
    }
}

// ── Sale state transitions ───────────────────────────────────────────────────

impl Contract {
    pub(crate) fn internal_list(
        &mut self,
        seller_id: &AccountId,
        token_id: TokenId,
        price: U128,
    ) -> Result<(), MarketError> {
        let token = self
            .tokens_by_id
            .get(&token_id)
            .ok_or_else(MarketError::token_not_found)?;
        if &token.owner_id != seller_id {
            return Err(MarketError::not_the_owner());
        }

        let record = SaleRecord {
            seller: seller_id.clone(),
            price,
            is_for_sale: true,
        };
        self.sales.insert(token_id, record);

        events::emit_list(seller_id, token_id, price);
        Ok(())
    }

    pub(crate) fn internal_buy(
        &mut self,
        buyer_id: &AccountId,
        token_id: TokenId,
        deposit: u128,
    ) -> Result<(), MarketError> {
        // Precondition order is part of the contract: listed first, price second.
        let record = self
            .sales
            .get(&token_id)
            .filter(|record| record.is_for_sale)
            .cloned()
            .ok_or_else(MarketError::not_listed)?;

        let price = record.price.0;
        if deposit != price {
            return Err(MarketError::wrong_payment(price, deposit));
        }

        let seller_id = record.seller.clone();
        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .ok_or_else(MarketError::token_not_found)?
            .clone();
        if token.owner_id != seller_id {
            // Unreachable while transfers clear listings; kept as a guard.
            return Err(MarketError::InvalidState(
                "Listing is stale: token owner changed".into(),
            ));
        }

        // Flag, ownership, and payment settle in this one call; any Err
        // above or below reverts all of it.
        let mut record = record;
        record.is_for_sale = false;
        self.sales.insert(token_id, record);

        self.remove_token_from_owner(&seller_id, token_id);
        token.owner_id = buyer_id.clone();
        self.add_token_to_owner(buyer_id, token_id);
        self.tokens_by_id.insert(token_id, token);

        if price > 0 {
            let _ = Promise::new(seller_id.clone()).transfer(NearToken::from_yoctonear(price));
        }

        events::emit_purchase(buyer_id, &seller_id, token_id, U128(price));
        Ok(())
    }

    pub(crate) fn internal_delist(
        &mut self,
        caller: &AccountId,
        token_id: TokenId,
    ) -> Result<(), MarketError> {
        // A token never listed has no seller to match, so the caller cannot
        // be authorized — same outcome as the original's zero-address seller.
        let record = self
            .sales
            .get(&token_id)
            .cloned()
            .ok_or_else(MarketError::not_the_owner)?;
        if &record.seller != caller {
            return Err(MarketError::not_the_owner());
        }

        if record.is_for_sale {
            let mut record = record;
            record.is_for_sale = false;
            self.sales.insert(token_id, record);
            events::emit_delist(caller, token_id);
        }
        Ok(())
    }

    /// Flip an active listing back to not-for-sale, if one exists.
    pub(crate) fn internal_clear_listing(&mut self, token_id: TokenId) {
        if let Some(record) = self.sales.get(&token_id) {
            if record.is_for_sale {
                let seller = record.seller.clone();
                let mut record = record.clone();
                record.is_for_sale = false;
                self.sales.insert(token_id, record);
                events::emit_delist(&seller, token_id);
            }
        }
    }
}
