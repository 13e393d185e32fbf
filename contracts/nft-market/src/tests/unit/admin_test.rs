use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

#[test]
fn new_sets_version_and_owner() {
    let contract = new_contract();

    assert_eq!(contract.version, env!("CARGO_PKG_VERSION"));
    assert_eq!(contract.get_owner(), &admin());
    assert_eq!(contract.get_next_token_id(), 0);
}

#[test]
fn default_metadata_is_applied() {
    let contract = new_contract();

    let metadata = contract.market_metadata();
    assert_eq!(metadata.spec, "nft-1.0.0");
    assert_eq!(metadata.name, "NFT Market");
    assert_eq!(metadata.symbol, "NFTM");
    assert!(metadata.base_uri.is_none());
}

#[test]
fn transfer_ownership_by_owner_succeeds() {
    let mut contract = new_contract();

    contract.transfer_ownership(buyer()).unwrap();
    assert_eq!(contract.get_owner(), &buyer());
}

#[test]
fn transfer_ownership_by_non_owner_fails() {
    let mut contract = new_contract();

    testing_env!(context(buyer()).build());
    let err = contract.transfer_ownership(buyer()).unwrap_err();

    assert!(matches!(err, MarketError::Unauthorized(_)));
    assert_eq!(contract.get_owner(), &admin());
}

#[test]
fn transfer_ownership_to_same_owner_fails() {
    let mut contract = new_contract();

    let err = contract.transfer_ownership(admin()).unwrap_err();
    assert!(matches!(err, MarketError::InvalidInput(_)));
}

#[test]
fn set_contract_metadata_updates_fields() {
    let mut contract = new_contract();

    contract
        .set_contract_metadata(
            Some("Gallery".to_string()),
            Some("GLRY".to_string()),
            None,
            Some(Some("ipfs://base".to_string())),
            None,
        )
        .unwrap();

    let metadata = contract.market_metadata();
    assert_eq!(metadata.name, "Gallery");
    assert_eq!(metadata.symbol, "GLRY");
    assert_eq!(metadata.base_uri.as_deref(), Some("ipfs://base"));
}

#[test]
fn set_contract_metadata_by_non_owner_fails() {
    let mut contract = new_contract();

    testing_env!(context(seller()).build());
    let err = contract
        .set_contract_metadata(Some("X".into()), None, None, None, None)
        .unwrap_err();

    assert!(matches!(err, MarketError::Unauthorized(_)));
}

#[test]
fn admin_identity_plays_no_part_in_sales() {
    let mut contract = new_contract();
    let token_id = mint_and_list(&mut contract, &seller(), ONE_NEAR);

    // The contract owner cannot delist someone else's token.
    testing_env!(context(admin()).build());
    let err = contract.delist_nft(token_id).unwrap_err();
    assert!(matches!(err, MarketError::Unauthorized(_)));
}
