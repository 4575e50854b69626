//! Dismissible success/error banners.

use leptos::prelude::*;

use crate::state::notice::{Banner, BannerKind};

/// A dismissible banner. Clicking the close button runs `on_close` once.
#[component]
pub fn Alert(kind: BannerKind, #[prop(into)] message: String, on_close: Callback<()>) -> impl IntoView {
    let class = match kind {
        BannerKind::Success => "alert alert-success alert-dismissible mt-3",
        BannerKind::Error => "alert alert-danger alert-dismissible mt-3",
    };

    view! {
        <div class=class role="alert">
            <span class="alert__message">{message}</span>
            <button type="button" class="btn-close" aria-label="Close" on:click=move |_| on_close.run(())></button>
        </div>
    }
}

/// Standalone error banner for placeholders that have no slot of their own.
#[component]
pub fn ErrorMessage(#[prop(into)] message: String, on_close: Callback<()>) -> impl IntoView {
    view! { <Alert kind=BannerKind::Error message=message on_close=on_close/> }
}

/// Render an optional banner slot; `on_close` clears the slot.
pub fn banner_view(banner: Option<Banner>, on_close: Callback<()>) -> Option<impl IntoView> {
    banner.map(|banner| view! { <Alert kind=banner.kind message=banner.message on_close=on_close/> })
}
