use super::*;

fn form() -> ProductForm {
    ProductForm {
        title: "Basil Plant".to_owned(),
        description: "Fragrant and easy to grow".to_owned(),
        category: "herbs".to_owned(),
        price: "12.50".to_owned(),
        image: "https://example.test/basil.png".to_owned(),
    }
}

#[test]
fn list_products_request_targets_collection() {
    let request = list_products_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/products");
    assert!(request.body.is_none());
}

#[test]
fn get_product_request_targets_item() {
    let request = get_product_request(&ProductId::from("7"));
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/products/7");
}

#[test]
fn create_product_request_posts_form_body() {
    let request = create_product_request(&form());
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/products");
    assert_eq!(request.body, Some(form()));
}

#[test]
fn update_product_request_puts_to_item() {
    let request = update_product_request(&ProductId::from("7"), &form());
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/products/7");
    assert_eq!(request.body, Some(form()));
}

#[test]
fn delete_product_request_has_no_body() {
    let request = delete_product_request(&ProductId::from("3"));
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.path, "/products/3");
    assert!(request.body.is_none());
}

#[test]
fn url_joins_base_and_path() {
    let request = get_product_request(&ProductId::from("3"));
    assert_eq!(request.url(), format!("{}/products/3", api_base()));
}

#[test]
fn method_display_uses_http_verbs() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
    assert_eq!(Method::Put.to_string(), "PUT");
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed with status 404");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_json_is_unavailable_outside_browser() {
    let result: Result<Product, ApiError> = futures::executor::block_on(send_json(list_products_request()));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn send_empty_is_unavailable_outside_browser() {
    let result = futures::executor::block_on(send_empty(delete_product_request(&ProductId::from("3"))));
    assert_eq!(result, Err(ApiError::Unavailable));
}
