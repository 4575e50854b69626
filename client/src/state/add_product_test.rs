use super::*;
use crate::net::api::Method;
use crate::state::notice::BannerKind;

fn filled() -> AddProductState {
    let mut state = AddProductState::default();
    state.set_field(ProductField::Title, "Basil Plant".to_owned());
    state.set_field(ProductField::Description, "Fragrant and easy to grow".to_owned());
    state.set_field(ProductField::Category, "herbs".to_owned());
    state.set_field(ProductField::Price, "12.50".to_owned());
    state.set_field(ProductField::Image, "https://example.test/basil.png".to_owned());
    state
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submission_posts_all_five_fields() {
    let state = filled();
    let request = state.submission();

    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/products");
    let body = request.body.unwrap();
    assert_eq!(body.title, "Basil Plant");
    assert_eq!(body.description, "Fragrant and easy to grow");
    assert_eq!(body.category, "herbs");
    assert_eq!(body.price, "12.50");
    assert_eq!(body.image, "https://example.test/basil.png");
}

#[test]
fn repeated_submission_builds_identical_requests() {
    let state = filled();
    assert_eq!(state.submission(), state.submission());
}

// =============================================================
// Outcomes
// =============================================================

#[test]
fn created_response_names_the_title() {
    let mut state = filled();
    let created: Product = serde_json::from_value(serde_json::json!({ "title": "Basil Plant" })).unwrap();
    state.apply_created(Ok(created));

    let banner = state.success.clone().unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.message, "Basil Plant created successfully!");
    assert!(state.error.is_none());
}

#[test]
fn success_keeps_form_populated() {
    let mut state = filled();
    let before = state.form.clone();
    state.apply_created(Ok(Product { title: "Basil Plant".to_owned(), ..Product::default() }));
    assert_eq!(state.form, before);
}

#[test]
fn failure_shows_error_and_keeps_form() {
    let mut state = filled();
    let before = state.form.clone();
    state.apply_created(Err(ApiError::Status(500)));

    let banner = state.error.clone().unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, "Error submitting form. Please try again: request failed with status 500");
    assert!(state.success.is_none());
    assert_eq!(state.form, before);
}

#[test]
fn success_after_failure_clears_error() {
    let mut state = filled();
    state.apply_created(Err(ApiError::Network("offline".to_owned())));
    state.apply_created(Ok(Product { title: "Basil Plant".to_owned(), ..Product::default() }));
    assert!(state.error.is_none());
    assert!(state.success.is_some());
}

#[test]
fn dismiss_clears_only_its_banner() {
    let mut state = filled();
    state.success = Some(Banner::success("ok"));
    state.error = Some(Banner::error("bad"));

    state.dismiss_success();
    assert!(state.success.is_none());
    assert!(state.error.is_some());

    state.dismiss_error();
    assert!(state.error.is_none());
}
