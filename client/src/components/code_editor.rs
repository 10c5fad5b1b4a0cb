//! Code pane: the document as an editable textarea.

use leptos::prelude::*;
use sitegen::Workbench;

/// Every keystroke replaces the whole document.
#[component]
pub fn CodeEditor() -> impl IntoView {
    let workbench = expect_context::<RwSignal<Workbench>>();

    view! {
        <textarea
            class="code-editor"
            spellcheck="false"
            aria-label="HTML source"
            prop:value=move || workbench.with(|w| w.document().as_str().to_owned())
            on:input=move |ev| workbench.update(|w| w.edit(event_target_value(&ev)))
        ></textarea>
    }
}
