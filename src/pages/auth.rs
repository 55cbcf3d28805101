//! Login/signup page: email + password form backed by the auth API.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::toast_host::ToastHost;
use crate::state::auth::{AuthState, LOGGED_IN_MESSAGE};
use crate::state::form::FormState;
use crate::state::toast::ToastState;
use crate::util::auth_flow::AuthAction;

fn field_class(invalid: bool) -> &'static str {
    if invalid { "auth-field auth-field--invalid" } else { "auth-field" }
}

fn button_label(action: AuthAction, submitting: bool) -> &'static str {
    match (action, submitting) {
        (AuthAction::Login, false) => "Login",
        (AuthAction::Login, true) => "Logging in...",
        (AuthAction::Signup, false) => "Signup",
        (AuthAction::Signup, true) => "Signing up...",
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let form = RwSignal::new(FormState::default());

    let submit = move |action: AuthAction| {
        let Some(Ok(credentials)) = form.try_update(FormState::begin_submit) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::BrowserTransport::from_config();
            let outcome = crate::util::auth_flow::perform(&transport, action, &credentials).await;
            form.update(FormState::finish_submit);
            auth.update(|state| outcome.apply(state));
            crate::components::toast_host::show_toast(toasts, outcome.notice());
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (action, credentials, auth, toasts);
            form.update(FormState::finish_submit);
        }
    };

    let email_invalid = move || form.with(|f| f.email_error().is_some());
    let password_invalid = move || form.with(|f| f.password_error().is_some());
    let disabled = move || !form.with(FormState::can_submit);
    let submitting = move || form.with(|f| f.submitting);

    let form_view = move || {
        view! {
            <form
                class="auth-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit(AuthAction::Login);
                }
            >
                <div class=move || field_class(email_invalid())>
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                    <Show when=email_invalid>
                        <p class="auth-field__error">{crate::state::form::EMAIL_REQUIRED}</p>
                    </Show>
                </div>
                <div class=move || field_class(password_invalid())>
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <Show when=password_invalid>
                        <p class="auth-field__error">{crate::state::form::PASSWORD_REQUIRED}</p>
                    </Show>
                </div>
                <button
                    class="auth-button auth-button--login"
                    type="submit"
                    disabled=disabled
                    aria-busy=move || submitting().to_string()
                >
                    {move || button_label(AuthAction::Login, submitting())}
                </button>
                <button
                    class="auth-button auth-button--signup"
                    type="button"
                    disabled=disabled
                    aria-busy=move || submitting().to_string()
                    on:click=move |_| submit(AuthAction::Signup)
                >
                    {move || button_label(AuthAction::Signup, submitting())}
                </button>
            </form>
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__heading">{move || auth.get().heading()}</h1>
                <Show
                    when=move || !auth.get().logged_in
                    fallback=|| view! { <p class="auth-card__welcome">{LOGGED_IN_MESSAGE}</p> }
                >
                    {form_view}
                </Show>
            </div>
            <ToastHost/>
        </main>
    }
}
