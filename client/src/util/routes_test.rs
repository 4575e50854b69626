use super::*;

#[test]
fn product_path_formats_detail_route() {
    assert_eq!(product_path(&ProductId::from("7")), "/products/7");
}

#[test]
fn edit_product_path_formats_edit_route() {
    assert_eq!(edit_product_path(&ProductId::from("7")), "/products/7/edit");
}

#[test]
fn static_paths_match_route_table() {
    assert_eq!(HOME_PATH, "/");
    assert_eq!(PRODUCTS_PATH, "/products");
    assert_eq!(ADD_PRODUCT_PATH, "/addproduct");
}

#[test]
fn logo_is_served_from_assets() {
    assert!(LOGO_PATH.starts_with("/assets/"));
}
