//! Toast host and the helper pages use to raise a toast.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION_MS, Toast, ToastKind, ToastState};

/// Show `toast` and schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, toast: Toast) {
    let mut id = 0;
    toasts.update(|state| id = state.show(toast));

    #[cfg(feature = "hydrate")]
    gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
        toasts.update(|state| state.dismiss(id));
    })
    .forget();
    #[cfg(not(feature = "hydrate"))]
    let _ = (id, TOAST_DURATION_MS);
}

/// Fixed-position host for the current toast.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toasts
                .get()
                .current
                .map(|toast| {
                    let error = toast.kind == ToastKind::Error;
                    let description = (!toast.description.is_empty())
                        .then(|| view! { <p class="toast__description">{toast.description}</p> });
                    view! {
                        <div class="toast" class:toast--error=error role="status" aria-live="polite">
                            <strong class="toast__title">{toast.title}</strong>
                            {description}
                        </div>
                    }
                })
        }}
    }
}
