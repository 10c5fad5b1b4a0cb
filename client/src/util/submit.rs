//! Prompt submission: workbench transition, network call, settle.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use leptos::prelude::*;
use sitegen::{GenerationClient, Submission, Workbench};

use crate::state::toasts::ToastState;
use crate::util::notify::show_notice;

/// Submit `description`. Blank input shows a toast; a busy workbench ignores
/// the call; otherwise the request runs on the local task queue and the
/// result is settled into the workbench.
pub fn submit_prompt<C>(workbench: RwSignal<Workbench>, toasts: RwSignal<ToastState>, client: C, description: &str)
where
    C: GenerationClient + 'static,
{
    match workbench.try_update(|w| w.submit(description)) {
        Some(Submission::Dispatch(request)) => {
            leptos::task::spawn_local(async move {
                let result = sitegen::generate::run(&client, &request).await;
                if let Some(Some(notice)) = workbench.try_update(|w| w.settle(result)) {
                    show_notice(toasts, notice);
                }
            });
        }
        Some(Submission::Rejected(notice)) => show_notice(toasts, notice),
        Some(Submission::Busy) | None => {}
    }
}
