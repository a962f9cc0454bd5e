use bella_common::navigation::CONTACT;
use bella_common::{CategoryFilter, MenuItem, MenuListing};
use leptos::*;
use leptos_router::*;

use crate::utils::asset_url;

#[component]
pub fn MenuPage() -> impl IntoView {
    let listing = create_rw_signal(MenuListing::new());

    view! {
        <div class="menu-page">
            <section class="menu-hero">
                <div class="container">
                    <h1 class="menu-hero-title">"Nuestro Menú"</h1>
                    <p class="menu-hero-subtitle">"Descubre los auténticos sabores de Italia"</p>
                </div>
            </section>

            <section class="menu-section">
                <div class="container">
                    <div class="menu-filters">
                        {CategoryFilter::OPTIONS
                            .into_iter()
                            .map(|filter| view! {
                                <button
                                    class=move || {
                                        if listing.with(|l| l.is_active(filter)) {
                                            "filter-btn active"
                                        } else {
                                            "filter-btn"
                                        }
                                    }
                                    on:click=move |_| listing.update(|l| l.select_category(filter))
                                >
                                    {filter.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>

                    <div class="menu-grid grid grid-3">
                        <For
                            each=move || listing.with(|l| l.visible_items())
                            key=|item| item.id
                            children=move |item| view! { <MenuCard item=item/> }
                        />
                    </div>

                    <div class="menu-cta text-center mt-3">
                        <h3>"¿Te gustaría probar nuestros platos?"</h3>
                        <p>"Reserva tu mesa ahora y disfruta de una experiencia culinaria auténtica"</p>
                        <A href=CONTACT.path class="btn btn-primary">"Reservar Mesa"</A>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn MenuCard(item: &'static MenuItem) -> impl IntoView {
    view! {
        <div class="menu-card card" data-category=item.category.as_str()>
            <img src=asset_url(item.image) alt=item.name loading="lazy"/>
            <div class="menu-card-content">
                <h3 class="card-title">{item.name}</h3>
                <p class="card-text">{item.description}</p>
                <p class="card-price">{item.display_price()}</p>
            </div>
        </div>
    }
}
