use super::*;

#[test]
fn buyer_home_is_storefront_root() {
    assert_eq!(role_home(Role::Buyer), "/");
}

#[test]
fn seller_home_is_seller_dashboard() {
    assert_eq!(role_home(Role::Seller), "/seller");
}

#[test]
fn admin_home_is_admin_dashboard() {
    assert_eq!(role_home(Role::Admin), "/admin");
}
