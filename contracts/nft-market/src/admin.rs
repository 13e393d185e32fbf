use crate::internal::check_no_deposit;
use crate::*;

#[near]
impl Contract {
    // --- Init ---

    #[init]
    pub fn new(owner_id: AccountId, contract_metadata: Option<MarketContractMetadata>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            next_token_id: 0,
            tokens_by_id: IterableMap::new(StorageKey::TokensById),
            tokens_per_owner: LookupMap::new(StorageKey::TokensPerOwner),
            sales: IterableMap::new(StorageKey::Sales),
            contract_metadata: contract_metadata.unwrap_or_default(),
        }
    }

    // --- Admin ---

    /// Owner only.
    #[payable]
    #[handle_result]
    pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), MarketError> {
        check_no_deposit()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if new_owner == self.owner_id {
            return Err(MarketError::InvalidInput(
                "New owner must differ from current owner".to_string(),
            ));
        }
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner;
        events::emit_owner_transferred(&old_owner, &self.owner_id);
        Ok(())
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    /// Owner only. `None` leaves a field untouched; `Some(None)` clears an
    /// optional field.
    #[payable]
    #[handle_result]
    pub fn set_contract_metadata(
        &mut self,
        name: Option<String>,
        symbol: Option<String>,
        icon: Option<Option<String>>,
        base_uri: Option<Option<String>>,
        reference: Option<Option<String>>,
    ) -> Result<(), MarketError> {
        check_no_deposit()?;
        self.check_contract_owner(&env::predecessor_account_id())?;
        if let Some(n) = name {
            self.contract_metadata.name = n;
        }
        if let Some(s) = symbol {
            self.contract_metadata.symbol = s;
        }
        if let Some(v) = icon {
            self.contract_metadata.icon = v;
        }
        if let Some(v) = base_uri {
            self.contract_metadata.base_uri = v;
        }
        if let Some(v) = reference {
            self.contract_metadata.reference = v;
        }
        events::emit_contract_metadata_updated(
            &self.owner_id,
            &self.contract_metadata.name,
            &self.contract_metadata.symbol,
        );
        Ok(())
    }

    pub fn market_metadata(&self) -> &MarketContractMetadata {
        &self.contract_metadata
    }
}
