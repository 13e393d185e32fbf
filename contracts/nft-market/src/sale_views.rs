// View methods for querying sale state.

use crate::*;

#[near]
impl Contract {
    /// Pure read; always succeeds. Tokens never listed return the default
    /// not-for-sale record (no seller, zero price).
    pub fn get_sale_details(&self, token_id: TokenId) -> SaleDetails {
        self.sales
            .get(&token_id)
            .map(SaleDetails::from)
            .unwrap_or_default()
    }

    /// Total number of sale records, active and dormant.
    pub fn get_supply_sales(&self) -> u64 {
        self.sales.len() as u64
    }

    /// Paginated sale records in storage order.
    pub fn get_sales(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<SaleView> {
        let start = from_index.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT);

        self.sales
            .iter()
            .skip(start as usize)
            .take(limit as usize)
            .map(|(token_id, record)| SaleView {
                token_id: *token_id,
                seller: record.seller.clone(),
                price: record.price,
                is_for_sale: record.is_for_sale,
            })
            .collect()
    }
}
