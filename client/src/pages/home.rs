//! Home page: welcome copy, rotating product preview, and a link to the list.

use leptos::prelude::*;

use crate::components::carousel::ProductCarousel;
use crate::components::loading_error::LoadingError;
use crate::net::api::fetch_products;
use crate::state::fetch::FetchState;
use crate::util::routes::PRODUCTS_PATH;

const LOAD_FAILED_MESSAGE: &str = "Failed to load products";

#[component]
pub fn HomePage() -> impl IntoView {
    let products = LocalResource::new(|| async {
        let result = fetch_products().await;
        if let Err(e) = &result {
            log::error!("loading home carousel failed: {e}");
        }
        result
    });
    let state = Signal::derive(move || FetchState::from_outcome(products.get(), LOAD_FAILED_MESSAGE));

    let loading = Signal::derive(move || state.with(FetchState::is_loading));
    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_owned)));

    view! {
        <div class="content-wrapper">
            <h1 class="mt-5">"Welcome to Cheeky Roots!"</h1>
            <p>
                "We have a range of products that may interest you! Click on Products below to see the full list!"
            </p>

            <LoadingError loading=loading error=error/>

            {move || {
                state
                    .with(|s| s.loaded().filter(|list| !list.is_empty()).cloned())
                    .map(|list| view! { <ProductCarousel products=list/> })
            }}

            <div class="mt-4">
                <a href=PRODUCTS_PATH>
                    <button class="btn-product0">"Products"</button>
                </a>
            </div>
        </div>
    }
}
