//! Sandboxed iframe for a `PreviewFrame`.

use leptos::prelude::*;
use sitegen::PreviewFrame;

/// Renders `frame` as an iframe. Only `srcdoc` and width are reactive.
#[component]
pub fn SandboxedFrame(#[prop(into)] frame: Signal<PreviewFrame>, frame_class: &'static str) -> impl IntoView {
    let initial = frame.get_untracked();
    view! {
        <iframe
            class=frame_class
            title=initial.title
            sandbox=initial.sandbox
            style:width=move || frame.with(|f| f.width)
            srcdoc=move || frame.with(|f| f.srcdoc.clone())
        ></iframe>
    }
}
