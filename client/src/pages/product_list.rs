//! Product list page: a grid of summary cards.

use leptos::prelude::*;

use crate::components::loading_error::LoadingError;
use crate::components::product_card::ProductCard;
use crate::net::api::fetch_products;
use crate::state::fetch::FetchState;

const LOAD_FAILED_MESSAGE: &str = "Failed to fetch products";

/// Fetches the collection once on mount; there is no refetch.
#[component]
pub fn ProductListPage() -> impl IntoView {
    let products = LocalResource::new(|| async {
        let result = fetch_products().await;
        if let Err(e) = &result {
            log::error!("loading product list failed: {e}");
        }
        result
    });
    let state = Signal::derive(move || FetchState::from_outcome(products.get(), LOAD_FAILED_MESSAGE));

    let loading = Signal::derive(move || state.with(FetchState::is_loading));
    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_owned)));

    view! {
        <LoadingError loading=loading error=error/>
        {move || {
            state
                .with(|s| s.loaded().cloned())
                .map(|list| {
                    view! {
                        <div class="container mt-5">
                            <div class="row">
                                {list
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product/> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
