//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use sitegen::Workbench;

use crate::components::{
    fullscreen_modal::FullscreenModal, navbar::Navbar, preview_panel::PreviewPanel, prompt_panel::PromptPanel,
    toast_stack::ToastStack,
};
use crate::state::toasts::ToastState;

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
/// Provides the workbench and toast contexts and mounts the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let workbench = RwSignal::new(Workbench::new());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(workbench);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/webbuilder.css"/>
        <Title text="WebBuilder"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=BuilderPage/>
            </Routes>
        </Router>
    }
}

/// The builder: prompt on top, preview card below, modal and toasts overlaid.
#[component]
fn BuilderPage() -> impl IntoView {
    let workbench = expect_context::<RwSignal<Workbench>>();
    let fullscreen_open = move || workbench.with(|w| w.fullscreen_width().is_some());

    view! {
        <div class="builder">
            <Navbar/>
            <main class="builder__main">
                <PromptPanel/>
                <PreviewPanel/>
            </main>
            <Show when=fullscreen_open>
                <FullscreenModal/>
            </Show>
            <ToastStack/>
        </div>
    }
}
