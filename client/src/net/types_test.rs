use super::*;

// =============================================================
// Product decoding
// =============================================================

#[test]
fn product_decodes_numeric_id_and_price() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Basil Plant",
        "price": 12.5,
        "description": "Fragrant and easy to grow",
        "category": "herbs",
        "image": "https://example.test/basil.png",
        "rating": { "rate": 4.4, "count": 120 }
    }))
    .unwrap();

    assert_eq!(product.id, ProductId::from("7"));
    assert_eq!(product.price, "12.5");
    assert_eq!(product.rating, Some(Rating { rate: 4.4, count: 120 }));
}

#[test]
fn product_decodes_string_id_and_price() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": "21",
        "title": "Fern",
        "price": "8.00"
    }))
    .unwrap();

    assert_eq!(product.id.as_str(), "21");
    assert_eq!(product.price, "8.00");
    assert!(product.description.is_empty());
    assert!(product.rating.is_none());
}

#[test]
fn product_tolerates_sparse_create_response() {
    let product: Product = serde_json::from_value(serde_json::json!({ "title": "Basil Plant" })).unwrap();
    assert_eq!(product.title, "Basil Plant");
    assert_eq!(product.id, ProductId::default());
}

#[test]
fn product_rejects_non_scalar_price() {
    let result: Result<Product, _> = serde_json::from_value(serde_json::json!({ "price": [1, 2] }));
    assert!(result.is_err());
}

#[test]
fn malformed_rating_is_dropped_not_fatal() {
    let product: Product = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Fern",
        "rating": { "rate": "4.5", "count": 3 }
    }))
    .unwrap();

    assert_eq!(product.title, "Fern");
    assert!(product.rating.is_none());
}

#[test]
fn null_rating_decodes_as_none() {
    let product: Product = serde_json::from_value(serde_json::json!({ "title": "Fern", "rating": null })).unwrap();
    assert!(product.rating.is_none());
}

#[test]
fn display_price_prefixes_dollar_sign() {
    let product = Product { price: "109.95".to_owned(), ..Product::default() };
    assert_eq!(product.display_price(), "$109.95");
}

// =============================================================
// Rating display
// =============================================================

#[test]
fn rating_display_rounds_to_whole_stars() {
    let rating = Rating { rate: 3.6, count: 12 };
    assert_eq!(rating.to_string(), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606} (3.6) (12 ratings)");
}

#[test]
fn rating_display_clamps_out_of_range_rates() {
    let rating = Rating { rate: 9.0, count: 1 };
    assert!(rating.to_string().starts_with("\u{2605}\u{2605}\u{2605}\u{2605}\u{2605} "));
}
