//! Summary card for the product grid.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::routes::product_path;

/// Image, title, and price with a link to the details screen.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product_path(&product.id);
    let price = product.display_price();
    let Product { title, image, .. } = product;
    let alt = title.clone();

    view! {
        <div class="col-md-4 mb-3 d-flex">
            <div class="card product-card flex-fill d-flex flex-column">
                <img class="card-img-top product-card__image" src=image alt=alt/>
                <div class="card-body d-flex flex-column justify-content-between flex-grow-1">
                    <div>
                        <h5 class="card-title">{title}</h5>
                        <p class="card-text">{price}</p>
                    </div>
                </div>
                <a class="btn-product0" href=href>
                    "View Details"
                </a>
            </div>
        </div>
    }
}
