//! Account creation page.

use leptos::prelude::*;
use profile::identity::validate_sign_up;

#[cfg(feature = "hydrate")]
use crate::components::toast::show_toast;
#[cfg(feature = "hydrate")]
use crate::state::toast::Toast;
use crate::state::toast::ToastState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = match validate_sign_up(&email.get(), &password.get(), &confirm.get()) {
            Ok(creds) => creds,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let confirm_value = confirm.get();
            leptos::task::spawn_local(async move {
                match crate::net::api::signup(&creds.email, &creds.password, &confirm_value).await {
                    Ok(message) => {
                        show_toast(toasts, Toast::success("Account created", &message));
                        navigate("/auth/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (creds, toasts);
    };

    view! {
        <div class="auth-page">
            <p class="auth-page__logo">"devlinks"</p>
            <form class="auth-card" on:submit=on_submit novalidate>
                <h1>"Create account"</h1>
                <p class="auth-card__subtitle">"Let's get you started sharing your links!"</p>
                <label for="signup-email">"Email address"</label>
                <input
                    id="signup-email"
                    type="email"
                    autocomplete="email"
                    placeholder="e.g. alex@email.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <label for="signup-password">"Create password"</label>
                <input
                    id="signup-password"
                    type="password"
                    autocomplete="new-password"
                    placeholder="At least 8 characters"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label for="signup-confirm">"Confirm password"</label>
                <input
                    id="signup-confirm"
                    type="password"
                    autocomplete="new-password"
                    placeholder="At least 8 characters"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="form-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="button" type="submit" disabled=move || busy.get()>
                    "Create new account"
                </button>
                <p class="auth-card__footer">
                    "Already have an account? " <a href="/auth/login">"Login"</a>
                </p>
            </form>
        </div>
    }
}
