//! Add-product page: a five-field form that creates a product.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::alert::banner_view;
use crate::components::product_form::{FormLayout, ProductFormFields};
use crate::net::api;
use crate::net::types::Product;
use crate::state::add_product::AddProductState;
use crate::state::form::ProductField;

/// Each submit sends one creation request; the form is kept afterwards.
#[component]
pub fn AddProductPage() -> impl IntoView {
    let state = RwSignal::new(AddProductState::default());

    let form = Signal::derive(move || state.with(|s| s.form.clone()));
    let on_input = Callback::new(move |(field, value): (ProductField, String)| {
        state.update(|s| s.set_field(field, value));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = state.with_untracked(AddProductState::submission);
        spawn_local(async move {
            let result = api::send_json::<Product>(request).await;
            match &result {
                Ok(product) => log::info!("created product {:?}", product.title),
                Err(e) => log::error!("creating product failed: {e}"),
            }
            state.try_update(|s| s.apply_created(result));
        });
    };

    view! {
        <div class="container form-container">
            <h2>"Add Product"</h2>

            {move || {
                banner_view(
                    state.with(|s| s.success.clone()),
                    Callback::new(move |()| state.update(AddProductState::dismiss_success)),
                )
            }}
            {move || {
                banner_view(
                    state.with(|s| s.error.clone()),
                    Callback::new(move |()| state.update(AddProductState::dismiss_error)),
                )
            }}

            <form class="form-border" on:submit=on_submit>
                <ProductFormFields form=form on_input=on_input layout=FormLayout::Create/>
                <button class="btn-product0" type="submit">
                    "Submit"
                </button>
            </form>
        </div>
    }
}
