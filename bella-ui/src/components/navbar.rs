use bella_common::navigation::{nav_links, CONTACT, HOME, RESERVE_LABEL};
use bella_common::Asset;
use leptos::*;
use leptos_router::*;

use crate::utils::asset_url;

/// Top navigation bar; the entry matching the current path exactly is active
#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let links = move || nav_links(&location.pathname.get());

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <A href=HOME.path class="navbar-logo">
                    <img src=asset_url(Asset::Logo) alt="Bella Italia Logo" class="logo-img"/>
                </A>

                <ul class="navbar-menu">
                    {move || {
                        links()
                            .into_iter()
                            .map(|link| view! {
                                <li class="navbar-item">
                                    <A href=link.path() class=link.class()>
                                        {link.label()}
                                    </A>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>

                <A href=CONTACT.path class="btn btn-primary navbar-btn">
                    {RESERVE_LABEL}
                </A>
            </div>
        </nav>
    }
}
