//! Minting and direct ownership transfer.

use crate::internal::check_no_deposit;
use crate::*;

#[near]
impl Contract {
    /// Mint the next token to the caller. Open to anyone, no payment.
    /// Returns the assigned identifier.
    #[payable]
    #[handle_result]
    pub fn mint_new_nft(&mut self) -> Result<TokenId, MarketError> {
        check_no_deposit()?;
        let minter = env::predecessor_account_id();
        self.internal_mint(&minter)
    }

    /// Direct owner-to-owner transfer. Clears any active listing so a sale
    /// record can never name a seller who no longer owns the token.
    #[payable]
    #[handle_result]
    pub fn transfer_nft(
        &mut self,
        receiver_id: AccountId,
        token_id: TokenId,
    ) -> Result<(), MarketError> {
        check_no_deposit()?;
        let sender = env::predecessor_account_id();
        self.internal_transfer(&sender, &receiver_id, token_id)
    }
}

impl Contract {
    pub(crate) fn internal_mint(&mut self, owner_id: &AccountId) -> Result<TokenId, MarketError> {
        let token_id = self.next_token_id;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or_else(|| MarketError::InternalError("Token ID counter overflow".into()))?;

        let token = Token {
            owner_id: owner_id.clone(),
            minter_id: owner_id.clone(),
            minted_at: env::block_timestamp(),
        };
        self.tokens_by_id.insert(token_id, token);
        self.add_token_to_owner(owner_id, token_id);

        events::emit_mint(owner_id, token_id);
        Ok(token_id)
    }

    pub(crate) fn internal_transfer(
        &mut self,
        sender_id: &AccountId,
        receiver_id: &AccountId,
        token_id: TokenId,
    ) -> Result<(), MarketError> {
        let mut token = self
            .tokens_by_id
            .get(&token_id)
            .ok_or_else(MarketError::token_not_found)?
            .clone();

        if &token.owner_id != sender_id {
            return Err(MarketError::not_the_owner());
        }
        if sender_id == receiver_id {
            return Err(MarketError::InvalidInput(
                "Sender and receiver must differ".into(),
            ));
        }

        self.remove_token_from_owner(sender_id, token_id);
        token.owner_id = receiver_id.clone();
        self.add_token_to_owner(receiver_id, token_id);
        self.tokens_by_id.insert(token_id, token);

        // Ownership moved outside the purchase path; the listing is void.
        self.internal_clear_listing(token_id);

        events::emit_transfer(sender_id, receiver_id, token_id);
        Ok(())
    }
}
