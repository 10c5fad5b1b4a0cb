//! Top navigation bar.

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    <span class="navbar__logo" aria-hidden="true">"</>"</span>
                    "WebBuilder"
                </a>
            </div>
        </nav>
    }
}
