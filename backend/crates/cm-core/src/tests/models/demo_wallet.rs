use crate::DemoWallet;

use uuid::Uuid;

#[test]
fn test_demo_wallet_address_is_labeled() {
    let wallet = DemoWallet::new(Uuid::new_v4());

    assert!(wallet.address.starts_with("demo-"));
    assert!(wallet.tokens.is_empty());
}

#[test]
fn test_demo_wallet_mint_is_once_per_certificate() {
    let mut wallet = DemoWallet::new(Uuid::new_v4());
    let certificate_id = Uuid::new_v4();

    assert!(wallet.mint(certificate_id));
    assert!(!wallet.mint(certificate_id));
    assert!(wallet.mint(Uuid::new_v4()));
    assert_eq!(wallet.tokens.len(), 2);
}
