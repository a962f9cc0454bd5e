use bella_common::content::{ABOUT_FEATURES, FEATURED_DISHES, FOUNDED};
use bella_common::navigation::{CONTACT, MENU};
use bella_common::Asset;
use leptos::*;
use leptos_router::*;

use crate::utils::{asset_url, scroll_to_bottom};

#[component]
pub fn HomePage() -> impl IntoView {
    let logo = asset_url(Asset::Logo);

    view! {
        <div class="home">
            // Hero
            <section class="hero">
                <div class="hero-content">
                    <img src=logo.clone() alt="Bella Italia" class="hero-logo"/>
                    <h1 class="hero-title">"Bienvenidos a Bella Italia"</h1>
                    <p class="hero-subtitle">"Auténtica cocina italiana en el corazón de la ciudad"</p>
                    <p class="hero-description">
                        "Descubre los sabores tradicionales de Italia con ingredientes frescos
                        y recetas transmitidas por generaciones. Una experiencia culinaria
                        que te transportará directamente a la Toscana."
                    </p>
                    <div class="hero-buttons">
                        <A href=MENU.path class="btn btn-primary">"Ver Menú"</A>
                        <A href=CONTACT.path class="btn btn-secondary">"Reservar Mesa"</A>
                    </div>
                    <button class="hero-scroll" on:click=move |_| scroll_to_bottom()>
                        "Descubre más ↓"
                    </button>
                </div>
            </section>

            // Featured dishes
            <section class="featured-section">
                <div class="container">
                    <h2 class="section-title text-center">"Nuestros Platos Destacados"</h2>
                    <p class="section-subtitle text-center">"Delicias preparadas con pasión y dedicación"</p>

                    <div class="grid grid-4 featured-grid">
                        {FEATURED_DISHES
                            .iter()
                            .map(|dish| view! {
                                <div class="featured-card">
                                    <img src=asset_url(dish.image) alt=dish.name loading="lazy"/>
                                    <h3 class="featured-card-title">{dish.name}</h3>
                                    <p class="featured-card-description">{dish.description}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="text-center mt-3">
                        <A href=MENU.path class="btn btn-outline">"Ver Menú Completo"</A>
                    </div>
                </div>
            </section>

            // About
            <section class="about-section">
                <div class="container">
                    <div class="about-content">
                        <div class="about-text">
                            <h2>{format!("Tradición Italiana Desde {}", FOUNDED)}</h2>
                            <p>
                                "En Bella Italia, cada plato cuenta una historia. Nuestra familia
                                ha traído las auténticas recetas italianas a través del océano,
                                manteniendo vivas las tradiciones culinarias de la región de Toscana."
                            </p>
                            <p>
                                "Utilizamos únicamente ingredientes de la más alta calidad, importados
                                directamente de Italia, combinados con productos locales frescos para
                                crear una experiencia gastronómica inolvidable."
                            </p>
                            <ul class="about-features">
                                {ABOUT_FEATURES
                                    .into_iter()
                                    .map(|feature| view! { <li>{feature}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div class="about-image">
                            <img src=logo alt="Bella Italia"/>
                        </div>
                    </div>
                </div>
            </section>

            // Call to action
            <section class="cta-section">
                <div class="container text-center">
                    <h2 class="cta-title">"¿Listo para una experiencia italiana auténtica?"</h2>
                    <p class="cta-description">
                        "Reserva tu mesa hoy y descubre por qué somos el restaurante italiano
                        favorito de la ciudad"
                    </p>
                    <A href=CONTACT.path class="btn btn-primary btn-lg">"Hacer una Reservación"</A>
                </div>
            </section>
        </div>
    }
}
