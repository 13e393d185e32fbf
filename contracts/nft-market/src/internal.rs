// Internal helper functions for the market contract.

use crate::*;

impl Contract {
    /// Add `token_id` to the owner's index set, creating the set on first use.
    pub(crate) fn add_token_to_owner(&mut self, account_id: &AccountId, token_id: TokenId) {
        let mut owned = self.tokens_per_owner.remove(account_id).unwrap_or_else(|| {
            IterableSet::new(StorageKey::TokensPerOwnerInner {
                account_id_hash: hash_account_id(account_id),
            })
        });
        owned.insert(token_id);
        self.tokens_per_owner.insert(account_id.clone(), owned);
    }

    /// Remove `token_id` from the owner's index set, dropping empty sets.
    pub(crate) fn remove_token_from_owner(&mut self, account_id: &AccountId, token_id: TokenId) {
        if let Some(mut owned) = self.tokens_per_owner.remove(account_id) {
            owned.remove(&token_id);
            if !owned.is_empty() {
                self.tokens_per_owner.insert(account_id.clone(), owned);
            }
        }
    }

    pub(crate) fn check_contract_owner(&self, account_id: &AccountId) -> Result<(), MarketError> {
        if account_id != &self.owner_id {
            return Err(MarketError::only_contract_owner());
        }
        Ok(())
    }
}

/// Hash an account ID for use in storage keys.
pub(crate) fn hash_account_id(account_id: &AccountId) -> Vec<u8> {
    env::sha256(account_id.as_bytes())
}

/// Reject any attached value. `buy_nft` is the only method that accepts a
/// deposit; everywhere else value must bounce back to the caller untouched.
pub(crate) fn check_no_deposit() -> Result<(), MarketError> {
    if env::attached_deposit().as_yoctonear() != 0 {
        return Err(MarketError::unsolicited_deposit());
    }
    Ok(())
}
