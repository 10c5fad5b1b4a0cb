//! Toast display with auto-dismiss.

use leptos::prelude::*;
use sitegen::Notice;

use crate::state::toasts::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toasts::TOAST_DISMISS_MS;

/// Push `notice` onto the toast stack and schedule its removal.
pub fn show_notice(toasts: RwSignal<ToastState>, notice: Notice) {
    let id = toasts.try_update(|t| t.push(notice));

    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
            toasts.try_update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
