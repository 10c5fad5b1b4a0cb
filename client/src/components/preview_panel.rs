//! Preview card: toolbar plus code or live preview.

use leptos::prelude::*;
use sitegen::document::EXPORT_FILENAME;
use sitegen::{EmbeddedPreview, Pane, Workbench};

use crate::components::code_editor::CodeEditor;
use crate::components::preview_frame::SandboxedFrame;

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let workbench = expect_context::<RwSignal<Workbench>>();
    let show_code = move || workbench.with(|w| w.pane() == Pane::Code);
    let download_href = move || workbench.with(|w| w.export().data_url());

    let on_fullscreen = move |_| workbench.update(Workbench::open_fullscreen);
    let on_toggle_code = move |_| workbench.update(Workbench::toggle_code);

    view! {
        <section class="preview-card">
            <div class="preview-card__toolbar">
                <div class="preview-card__title">
                    <span class="preview-card__dots" aria-hidden="true">
                        <span class="preview-card__dot preview-card__dot--red"></span>
                        <span class="preview-card__dot preview-card__dot--yellow"></span>
                        <span class="preview-card__dot preview-card__dot--green"></span>
                    </span>
                    <span class="preview-card__label">"Live Preview"</span>
                </div>
                <div class="preview-card__actions">
                    <button class="preview-card__icon-btn" title="Open full screen preview" on:click=on_fullscreen>
                        "⤢"
                    </button>
                    <a class="preview-card__icon-btn" title="Download Code" download=EXPORT_FILENAME href=download_href>
                        "⤓"
                    </a>
                    <button
                        class="preview-card__toggle"
                        class:preview-card__toggle--active=show_code
                        on:click=on_toggle_code
                    >
                        {move || if show_code() { "Hide Code" } else { "Show Code" }}
                    </button>
                </div>
            </div>
            <div class="preview-card__content">
                <Show when=show_code fallback=move || view! { <EmbeddedContent workbench/> }>
                    <CodeEditor/>
                </Show>
            </div>
        </section>
    }
}

/// Renders whatever `Workbench::embedded_preview` says, computed once per change.
#[component]
fn EmbeddedContent(workbench: RwSignal<Workbench>) -> impl IntoView {
    let preview = Memo::new(move |_| workbench.with(Workbench::embedded_preview));

    move || match preview.get() {
        EmbeddedPreview::Loading => view! {
            <div class="preview-card__loading" role="status">
                <span class="preview-card__spinner" aria-hidden="true"></span>
                <h3 class="preview-card__loading-text">"Generating your website..."</h3>
            </div>
        }
        .into_any(),
        EmbeddedPreview::Frame(frame) => view! { <SandboxedFrame frame frame_class="preview-card__frame"/> }.into_any(),
        EmbeddedPreview::Hidden => ().into_any(),
    }
}
