//! Product details page with add-to-cart, edit, and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::alert::{ErrorMessage, banner_view};
use crate::net::api;
use crate::net::types::{Product, ProductId};
use crate::state::product_details::{DetailsPlaceholder, ProductDetailsState};
use crate::util::routes::edit_product_path;
use crate::util::timer::{DelayedAction, schedule_redirect};

/// Reads the product id from the route and refetches whenever it changes.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let product_id = move || params.read().get("id").map(ProductId::from);

    let initial_id = params.with_untracked(|p| p.get("id")).map(ProductId::from).unwrap_or_default();
    let state = RwSignal::new(ProductDetailsState::new(initial_id));
    let cart_timer = DelayedAction::new();
    let redirect_timer = DelayedAction::new();

    Effect::new(move || {
        cart_timer.cancel();
        redirect_timer.cancel();
        let Some(id) = product_id() else {
            state.set(ProductDetailsState::default());
            return;
        };
        let fresh = ProductDetailsState::new(id.clone());
        let request = fresh.load_request();
        state.set(fresh);

        spawn_local(async move {
            let result = api::send_json::<Product>(request).await;
            if let Err(e) = &result {
                log::error!("loading product {id} failed: {e}");
            }
            state.try_update(|s| s.apply_loaded(&id, result));
        });
    });

    let on_add_to_cart = Callback::new(move |()| {
        let Some(delay) = state.try_update(ProductDetailsState::add_to_cart) else {
            return;
        };
        let cleared = cart_timer.schedule(delay, move || {
            state.try_update(ProductDetailsState::clear_cart_notice);
        });
        if let Err(e) = cleared {
            log::error!("add to cart failed: {e}");
            state.update(ProductDetailsState::cart_failed);
        }
    });

    let on_edit = Callback::new({
        let navigate = navigate.clone();
        move |()| {
            let path = state.with_untracked(|s| edit_product_path(&s.id));
            navigate(&path, NavigateOptions::default());
        }
    });

    let on_delete = Callback::new(move |()| {
        let (id, request) = state.with_untracked(|s| (s.id.clone(), s.delete_request()));
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = api::send_empty(request).await;
            match &result {
                Ok(()) => log::info!("deleted product {id}"),
                Err(e) => log::error!("deleting product {id} failed: {e}"),
            }
            let redirect = state.try_update(|s| s.apply_deleted(&id, result)).flatten();
            if let Some(redirect) = redirect {
                if let Err(e) = schedule_redirect(redirect_timer, redirect, navigate) {
                    log::error!("redirect after delete failed: {e}");
                }
            }
        });
    });

    let messages = move || {
        let s = state.get();
        view! {
            {banner_view(s.cart_banner(), Callback::new(move |()| state.update(ProductDetailsState::clear_cart_notice)))}
            {banner_view(s.cart_error, Callback::new(move |()| state.update(ProductDetailsState::dismiss_cart_error)))}
            {banner_view(s.deleted, Callback::new(move |()| state.update(ProductDetailsState::dismiss_deleted)))}
            {banner_view(s.delete_error, Callback::new(move |()| state.update(ProductDetailsState::dismiss_delete_error)))}
        }
    };

    view! {
        {move || match state.with(ProductDetailsState::placeholder) {
            Some(placeholder) => {
                view! {
                    <div class="status-container d-flex flex-column align-items-center justify-content-center mt-5">
                        {match placeholder {
                            DetailsPlaceholder::Loading => view! { <p>"Loading product..."</p> }.into_any(),
                            DetailsPlaceholder::LoadError(message) => {
                                view! {
                                    <ErrorMessage
                                        message=message
                                        on_close=Callback::new(move |()| state.update(ProductDetailsState::dismiss_load_error))
                                    />
                                }
                                    .into_any()
                            }
                            DetailsPlaceholder::NoData => view! { <p>"No product data available."</p> }.into_any(),
                        }}
                    </div>
                }
                    .into_any()
            }
            None => {
                let product = state.with(|s| s.product.loaded().cloned()).unwrap_or_default();
                view! {
                    <div class="details-page mt-5 d-flex flex-column align-items-center justify-content-center">
                        <div class="details-page__messages">{messages}</div>
                        <DetailsCard
                            product=product
                            on_add_to_cart=on_add_to_cart
                            on_edit=on_edit
                            on_delete=on_delete
                        />
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn DetailsCard(
    product: Product,
    on_add_to_cart: Callback<()>,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let price = product.display_price();
    let rating = product.rating.map(|rating| rating.to_string());
    let Product { title, description, category, image, .. } = product;
    let alt = title.clone();

    view! {
        <div class="card product-card details-page__card p-3">
            <img class="card-img-top product-image" src=image alt=alt/>
            <div class="card-body">
                <h5 class="card-title">{title}</h5>
                <p class="card-text">
                    <strong>"Description:"</strong>
                    " "
                    {description}
                </p>
                <p class="card-text">
                    <strong>"Category: "</strong>
                    {category}
                </p>
                <p class="card-text">
                    <strong>"Price: "</strong>
                    {price}
                </p>
                {rating.map(|rating| view! { <p class="card-text details-page__rating">{rating}</p> })}

                <div class="d-flex justify-content-center gap-2 mt-3">
                    <button class="btn-product0" on:click=move |_| on_add_to_cart.run(())>
                        "Add to Cart"
                    </button>
                    <button class="btn-product1" on:click=move |_| on_edit.run(())>
                        "Edit Product"
                    </button>
                    <button class="btn-product2" on:click=move |_| on_delete.run(())>
                        "Delete Product"
                    </button>
                </div>
            </div>
        </div>
    }
}
