use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn transfer_moves_ownership_and_indexes() {
    let mut contract = new_contract();
    let token_id = mint_as(&mut contract, &seller());

    contract.transfer_nft(buyer(), token_id).unwrap();

    assert_eq!(contract.owner_of(token_id), Some(buyer()));
    assert!(contract.tokens_for_owner(seller(), None, None).is_empty());
    assert_eq!(contract.tokens_for_owner(buyer(), None, None), vec![token_id]);
}

#[test]
fn transfer_clears_active_listing() {
    let mut contract = new_contract();
    let token_id = mint_and_list(&mut contract, &seller(), ONE_NEAR);

    contract.transfer_nft(buyer(), token_id).unwrap();

    assert!(!contract.get_sale_details(token_id).is_for_sale);

    // The old listing cannot be bought out from under the new owner.
    testing_env!(context_with_deposit(third(), ONE_NEAR).build());
    let err = contract.buy_nft(token_id).unwrap_err();
    assert!(matches!(err, MarketError::InvalidState(_)));
    assert_eq!(contract.owner_of(token_id), Some(buyer()));
}

#[test]
fn transfer_by_non_owner_fails() {
    let mut contract = new_contract();
    let token_id = mint_as(&mut contract, &seller());

    testing_env!(context(buyer()).build());
    let err = contract.transfer_nft(third(), token_id).unwrap_err();

    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert_eq!(contract.owner_of(token_id), Some(seller()));
}

#[test]
fn transfer_to_self_fails() {
    let mut contract = new_contract();
    let token_id = mint_as(&mut contract, &seller());

    let err = contract.transfer_nft(seller(), token_id).unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn transfer_unknown_token_fails() {
    let mut contract = new_contract();

    testing_env!(context(seller()).build());
    let err = contract.transfer_nft(buyer(), 9).unwrap_err();
    assert!(matches!(err, MarketError::NotFound(_)));
}

#[test]
fn receiver_can_list_after_transfer() {
    let mut contract = new_contract();
    let token_id = mint_as(&mut contract, &seller());
    contract.transfer_nft(buyer(), token_id).unwrap();

    testing_env!(context(buyer()).build());
    contract.list_nft(token_id, U128(2 * ONE_NEAR)).unwrap();

    let details = contract.get_sale_details(token_id);
    assert_eq!(details.seller, Some(buyer()));
    assert!(details.is_for_sale);
}
