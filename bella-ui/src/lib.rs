use leptos::*;
use leptos_meta::*;
use leptos_router::*;

mod components;
mod pages;
mod timer;
pub mod utils;

use bella_common::content::{FOUNDED, RESTAURANT_NAME};
use components::Navbar;
use pages::{ContactPage, HomePage, MenuPage, NotFound};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/bella-italia-ui.css"/>
        <Title text="Bella Italia - Auténtica cocina italiana"/>
        <Meta name="description" content="Restaurante italiano en Madrid: pizzas, pastas y vinos de la Toscana"/>

        <Router>
            <Navbar/>

            <main class="main-content">
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/menu" view=MenuPage/>
                    <Route path="/contact" view=ContactPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>

            <footer class="footer">
                <p>{format!("© {} - Tradición italiana desde {}", RESTAURANT_NAME, FOUNDED)}</p>
            </footer>
        </Router>
    }
}

/// Browser entry point
pub fn mount() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
