//! Hero heading and prompt form.

use leptos::prelude::*;
use sitegen::Workbench;

use crate::net::api::HttpGenerationClient;
use crate::state::toasts::ToastState;
use crate::util::submit::submit_prompt;

const PROMPT_PLACEHOLDER: &str = "Describe your website (e.g., 'A modern portfolio for a photographer with a dark theme, image gallery, and contact form')...";

#[component]
pub fn PromptPanel() -> impl IntoView {
    let workbench = expect_context::<RwSignal<Workbench>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let prompt = RwSignal::new(String::new());
    let busy = move || workbench.with(Workbench::is_generating);

    let on_submit = Callback::new(move |()| {
        submit_prompt(workbench, toasts, HttpGenerationClient, &prompt.get_untracked());
    });

    // Enter submits; Shift+Enter falls through to insert a newline.
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_submit.run(());
        }
    };

    view! {
        <section class="prompt-panel">
            <header class="prompt-panel__hero">
                <h1 class="prompt-panel__title">
                    "Build Beautiful Websites with "
                    <span class="prompt-panel__accent">"AI"</span>
                </h1>
                <p class="prompt-panel__tagline">
                    "Describe your dream website in detail, and let our AI generate production-ready code for you instantly."
                </p>
            </header>
            <div class="prompt-panel__form">
                <textarea
                    class="prompt-panel__input"
                    rows="4"
                    placeholder=PROMPT_PLACEHOLDER
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <div class="prompt-panel__actions">
                    <button class="prompt-panel__submit" disabled=busy on:click=move |_| on_submit.run(())>
                        {move || if busy() { "Generating..." } else { "Generate Website" }}
                    </button>
                </div>
            </div>
        </section>
    }
}
