//! Root application component with the route table.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation_bar::NavigationBar;
use crate::pages::{
    add_product::AddProductPage, edit_product::EditProductPage, home::HomePage,
    product_details::ProductDetailsPage, product_list::ProductListPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The navigation bar persists across routes; each route renders one screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/cheeky-roots.css"/>
        <Title text="Cheeky Roots"/>

        <Router>
            <div class="app-container">
                <NavigationBar/>
                <main class="app-container__content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("products") view=ProductListPage/>
                        <Route path=(StaticSegment("products"), ParamSegment("id")) view=ProductDetailsPage/>
                        <Route
                            path=(StaticSegment("products"), ParamSegment("id"), StaticSegment("edit"))
                            view=EditProductPage
                        />
                        <Route path=StaticSegment("addproduct") view=AddProductPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
