//! Email + password sign-in page.

use leptos::prelude::*;
use profile::identity::validate_sign_in;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = match validate_sign_in(&email.get(), &password.get()) {
            Ok(creds) => creds,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&creds.email, &creds.password).await {
                Ok(()) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/profile/customize-links");
                    }
                }
                Err(e) => {
                    error.set(Some(e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = creds;
    };

    view! {
        <div class="auth-page">
            <p class="auth-page__logo">"devlinks"</p>
            <form class="auth-card" on:submit=on_submit novalidate>
                <h1>"Login"</h1>
                <p class="auth-card__subtitle">"Add your details below to get back into the app"</p>
                <label for="login-email">"Email address"</label>
                <input
                    id="login-email"
                    type="email"
                    autocomplete="email"
                    placeholder="e.g. alex@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Enter your password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-card__footer">
                    "Don't have an account? " <a href="/auth/signup">"Create account"</a>
                </p>
                <p class="auth-card__footer">
                    <a href="/auth/forgot-password">"Forgot password?"</a>
                </p>
            </form>
        </div>
    }
}
