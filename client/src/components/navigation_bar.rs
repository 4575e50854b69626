//! Top navigation bar visible on every screen.

use leptos::prelude::*;

use crate::util::routes::{ADD_PRODUCT_PATH, HOME_PATH, LOGO_PATH, PRODUCTS_PATH};

/// Brand logo, route links, and a collapse toggle for narrow screens.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let expanded = RwSignal::new(false);

    let toggle = move |_| expanded.update(|open| *open = !*open);
    let collapse = move |_| expanded.set(false);

    view! {
        <nav class="navbar navbar-expand-lg custom-navbar fixed-top">
            <div class="container d-flex justify-content-between">
                <a class="navbar-brand d-flex align-items-center" href=HOME_PATH on:click=collapse>
                    <img
                        src=LOGO_PATH
                        alt="Store Logo"
                        width="160"
                        height="40"
                        class="d-inline-block align-top"
                    />
                </a>

                <button
                    class="navbar-toggler custom-toggler"
                    type="button"
                    aria-controls="basic-navbar-nav"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=toggle
                >
                    <div class="navbar-toggler-icon">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                </button>

                <div id="basic-navbar-nav" class="navbar-collapse collapse" class:show=move || expanded.get()>
                    <div class="navbar-nav justify-content-around">
                        <a class="nav-link" href=HOME_PATH on:click=collapse>"Home"</a>
                        <a class="nav-link" href=PRODUCTS_PATH on:click=collapse>"Products"</a>
                        <a class="nav-link" href=ADD_PRODUCT_PATH on:click=collapse>"Add Product"</a>
                    </div>
                </div>
            </div>
        </nav>
    }
}
