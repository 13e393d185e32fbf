// View methods for querying token ownership and metadata.

use crate::*;

#[near]
impl Contract {
    /// Current owner of `token_id`, or None if it was never minted.
    pub fn owner_of(&self, token_id: TokenId) -> Option<AccountId> {
        self.tokens_by_id
            .get(&token_id)
            .map(|token| token.owner_id.clone())
    }

    pub fn get_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens_by_id.get(&token_id).cloned()
    }

    /// Next identifier to assign; equals the count of tokens ever minted.
    pub fn get_next_token_id(&self) -> TokenId {
        self.next_token_id
    }

    pub fn nft_supply(&self) -> u64 {
        self.tokens_by_id.len() as u64
    }

    /// Paginated token identifiers owned by `account_id`.
    pub fn tokens_for_owner(
        &self,
        account_id: AccountId,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<TokenId> {
        let owned = match self.tokens_per_owner.get(&account_id) {
            Some(owned) => owned,
            None => return vec![],
        };

        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT);

        owned
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .copied()
            .collect()
    }

    /// One collection-wide URI for every existing token, per the original
    /// deployment model; None for unknown tokens or when no base URI is set.
    pub fn token_uri(&self, token_id: TokenId) -> Option<String> {
        self.tokens_by_id.get(&token_id)?;
        self.contract_metadata.base_uri.clone()
    }
}
