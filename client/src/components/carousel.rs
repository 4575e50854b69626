//! Rotating product preview for the home page.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::state::carousel::CarouselState;
#[cfg(feature = "hydrate")]
use crate::state::carousel::AUTO_ADVANCE_INTERVAL;

/// One slide per product with previous/next controls and slide indicators.
/// Advances automatically in the browser.
#[component]
pub fn ProductCarousel(products: Vec<Product>) -> impl IntoView {
    let carousel = RwSignal::new(CarouselState::new(products.len()));

    #[cfg(feature = "hydrate")]
    {
        match set_interval_with_handle(move || carousel.update(CarouselState::next), AUTO_ADVANCE_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("carousel auto-advance disabled: {e:?}"),
        }
    }

    let indicators = (0..products.len())
        .map(|index| {
            view! {
                <button
                    type="button"
                    class:active=move || carousel.with(|c| c.is_active(index))
                    aria-label=format!("Slide {}", index + 1)
                    on:click=move |_| carousel.update(|c| c.select(index))
                ></button>
            }
        })
        .collect_view();

    let slides = products
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            let price = product.display_price();
            let Product { title, image, .. } = product;
            let alt = title.clone();
            view! {
                <div class="carousel-item" class:active=move || carousel.with(|c| c.is_active(index))>
                    <img class="d-block w-100 carousel-item__image" src=image alt=alt/>
                    <div class="carousel-caption carousel-item__caption">
                        <h5>{title}</h5>
                        <p>{price}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="carousel slide mt-4">
            <div class="carousel-indicators">{indicators}</div>
            <div class="carousel-inner">{slides}</div>
            <button class="carousel-control-prev" type="button" on:click=move |_| carousel.update(CarouselState::prev)>
                <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                <span class="visually-hidden">"Previous"</span>
            </button>
            <button class="carousel-control-next" type="button" on:click=move |_| carousel.update(CarouselState::next)>
                <span class="carousel-control-next-icon" aria-hidden="true"></span>
                <span class="visually-hidden">"Next"</span>
            </button>
        </div>
    }
}
