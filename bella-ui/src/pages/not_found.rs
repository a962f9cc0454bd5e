use bella_common::navigation::HOME;
use leptos::*;
use leptos_router::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <p class="not-found-message">"Página no encontrada"</p>
            <A href=HOME.path class="btn btn-primary">"Volver al inicio"</A>
        </div>
    }
}
