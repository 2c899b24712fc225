//! Password reset request page.

use leptos::prelude::*;
use profile::identity::validate_reset;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = match validate_reset(&email.get()) {
            Ok(address) => address,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        info.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::reset_password(&address).await {
                Ok(message) => info.set(Some(message)),
                Err(e) => error.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = address;
    };

    view! {
        <div class="auth-page">
            <p class="auth-page__logo">"devlinks"</p>
            <form class="auth-card" on:submit=on_submit novalidate>
                <h1>"Reset password"</h1>
                <p class="auth-card__subtitle">"We'll email you a link to choose a new password"</p>
                <label for="reset-email">"Email address"</label>
                <input
                    id="reset-email"
                    type="email"
                    autocomplete="email"
                    placeholder="e.g. alex@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || info.get().is_some()>
                    <p class="form-info" role="status">{move || info.get().unwrap_or_default()}</p>
                </Show>
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Send reset link"
                </button>
                <p class="auth-card__footer">
                    <a href="/auth/login">"Back to login"</a>
                </p>
            </form>
        </div>
    }
}
