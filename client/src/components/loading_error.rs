//! Status placeholder shown while a collection loads or after it failed.

use leptos::prelude::*;

/// Renders nothing when neither flag is set.
#[component]
pub fn LoadingError(loading: Signal<bool>, error: Signal<Option<String>>) -> impl IntoView {
    let visible = move || loading.get() || error.with(Option::is_some);

    view! {
        <Show when=visible>
            <div class="status-container d-flex flex-column align-items-center justify-content-center mt-5">
                <Show when=move || loading.get()>
                    <p>"Loading products..."</p>
                </Show>
                {move || error.get().map(|message| view! { <p class="status-container__error">{message}</p> })}
            </div>
        </Show>
    }
}
