use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn unknown_token_returns_default_sale_details() {
    let contract = new_contract();

    let details = contract.get_sale_details(999);
    assert!(details.seller.is_none());
    assert_eq!(details.price.0, 0);
    assert!(!details.is_for_sale);
}

#[test]
fn owner_of_unknown_token_is_none() {
    let contract = new_contract();
    assert_eq!(contract.owner_of(0), None);
    assert!(contract.get_token(0).is_none());
}

#[test]
fn supply_counts_dormant_records() {
    let mut contract = new_contract();
    let token_id = mint_and_list(&mut contract, &seller(), ONE_NEAR);
    contract.delist_nft(token_id).unwrap();

    // Delisting keeps the record around.
    assert_eq!(contract.get_supply_sales(), 1);
    mint_as(&mut contract, &seller());
    assert_eq!(contract.get_supply_sales(), 1);
}

#[test]
fn get_sales_paginates() {
    let mut contract = new_contract();
    for _ in 0..5 {
        mint_and_list(&mut contract, &seller(), ONE_NEAR);
    }

    let all = contract.get_sales(None, None);
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|sale| sale.is_for_sale && sale.seller == seller()));

    let page = contract.get_sales(Some(2), Some(2));
    assert_eq!(page.len(), 2);

    let tail = contract.get_sales(Some(4), None);
    assert_eq!(tail.len(), 1);
}

#[test]
fn get_sales_limit_is_capped() {
    let mut contract = new_contract();
    mint_and_list(&mut contract, &seller(), ONE_NEAR);

    // A huge limit must not panic; the cap bounds the page.
    let page = contract.get_sales(None, Some(1_000_000));
    assert_eq!(page.len(), 1);
}

#[test]
fn tokens_for_owner_paginates() {
    let mut contract = new_contract();
    for _ in 0..4 {
        mint_as(&mut contract, &seller());
    }

    assert_eq!(contract.tokens_for_owner(seller(), None, None).len(), 4);
    assert_eq!(contract.tokens_for_owner(seller(), Some(1), Some(2)).len(), 2);
    assert!(contract.tokens_for_owner(third(), None, None).is_empty());
}

#[test]
fn token_uri_resolves_to_collection_base_uri() {
    let mut contract = new_contract();
    let token_id = mint_as(&mut contract, &seller());

    assert_eq!(contract.token_uri(token_id), None);

    testing_env!(context(admin()).build());
    contract
        .set_contract_metadata(
            None,
            None,
            None,
            Some(Some("ipfs://QmExample".to_string())),
            None,
        )
        .unwrap();

    assert_eq!(
        contract.token_uri(token_id),
        Some("ipfs://QmExample".to_string())
    );
    // Unknown tokens still resolve to nothing.
    assert_eq!(contract.token_uri(token_id + 1), None);
}
