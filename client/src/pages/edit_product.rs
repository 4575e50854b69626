//! Edit-product page: pre-filled form that updates a product, then returns
//! to its details page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::banner_view;
use crate::components::product_form::{FormLayout, ProductFormFields};
use crate::net::api;
use crate::net::types::{Product, ProductId};
use crate::state::edit_product::EditProductState;
use crate::state::form::ProductField;
use crate::util::timer::{DelayedAction, schedule_redirect};

#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let product_id = move || params.read().get("id").map(ProductId::from).unwrap_or_default();

    let initial_id = params.with_untracked(|p| p.get("id")).map(ProductId::from).unwrap_or_default();
    let state = RwSignal::new(EditProductState::new(initial_id));
    let redirect_timer = DelayedAction::new();

    Effect::new(move || {
        redirect_timer.cancel();
        let id = product_id();
        let fresh = EditProductState::new(id.clone());
        let request = fresh.load_request();
        state.set(fresh);

        spawn_local(async move {
            let result = api::send_json::<Product>(request).await;
            if let Err(e) = &result {
                log::error!("loading product {id} for edit failed: {e}");
            }
            state.try_update(|s| s.apply_loaded(&id, result));
        });
    });

    let form = Signal::derive(move || state.with(|s| s.form.clone()));
    let on_input = Callback::new(move |(field, value): (ProductField, String)| {
        state.update(|s| s.set_field(field, value));
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (id, request) = state.with_untracked(|s| (s.id.clone(), s.submission()));
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::send_empty(request).await;
            match &result {
                Ok(()) => log::info!("updated product {id}"),
                Err(e) => log::error!("updating product {id} failed: {e}"),
            }
            let redirect = state.try_update(|s| s.apply_updated(&id, result)).flatten();
            if let Some(redirect) = redirect {
                if let Err(e) = schedule_redirect(redirect_timer, redirect, navigate) {
                    log::error!("redirect after update failed: {e}");
                }
            }
        });
    };

    view! {
        <Show
            when=move || !state.with(|s| s.loading)
            fallback=|| view! { <p>"Loading product..."</p> }
        >
            <div class="container edit-page d-flex flex-column align-items-center justify-content-center mt-5">
                <div class="edit-page__messages">
                    {move || {
                        banner_view(
                            state.with(|s| s.success.clone()),
                            Callback::new(move |()| state.update(EditProductState::dismiss_success)),
                        )
                    }}
                    {move || {
                        banner_view(
                            state.with(|s| s.error.clone()),
                            Callback::new(move |()| state.update(EditProductState::dismiss_error)),
                        )
                    }}
                </div>

                <div class="form-container edit-page__form">
                    <h2>"Edit Product"</h2>
                    <form class="form-border" on:submit=on_submit.clone()>
                        <ProductFormFields form=form on_input=on_input layout=FormLayout::Edit/>
                        <button class="btn-product0" type="submit">
                            "Save Changes"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
