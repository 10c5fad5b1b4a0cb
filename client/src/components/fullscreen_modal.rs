//! Full-screen preview overlay with width presets.

use leptos::prelude::*;
use sitegen::{PreviewFrame, WidthPreset, Workbench};

use crate::components::preview_frame::SandboxedFrame;

/// Rendered only while the workbench has the modal open. Escape closes it.
#[component]
pub fn FullscreenModal() -> impl IntoView {
    let workbench = expect_context::<RwSignal<Workbench>>();
    let on_close = Callback::new(move |()| workbench.update(Workbench::close_fullscreen));

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let frame = Signal::derive(move || {
        workbench.with(|w| {
            w.fullscreen_preview()
                .unwrap_or_else(|| PreviewFrame::fullscreen(w.document().as_str(), WidthPreset::Desktop))
        })
    });

    view! {
        <div class="fullscreen-modal" role="dialog" aria-modal="true">
            <div class="fullscreen-modal__header">
                <h3 class="fullscreen-modal__title">"Full Screen Preview"</h3>
                <div class="fullscreen-modal__widths">
                    {WidthPreset::ALL
                        .into_iter()
                        .map(|preset| {
                            let active = move || workbench.with(|w| w.fullscreen_width() == Some(preset));
                            view! {
                                <button
                                    class="fullscreen-modal__width"
                                    class:fullscreen-modal__width--active=active
                                    title=preset.label()
                                    on:click=move |_| workbench.update(|w| w.select_width(preset))
                                >
                                    {preset.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="fullscreen-modal__close" title="Close preview" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <div class="fullscreen-modal__body">
                <SandboxedFrame frame frame_class="fullscreen-modal__frame"/>
            </div>
        </div>
    }
}
