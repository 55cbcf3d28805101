//! Notification stack rendered in the page corner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `ToastState` from context. Toasts are pushed through `show_toast`,
//! which also schedules their auto-dismissal in the browser.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toast::{Notice, Toast, ToastState, ToastStatus};

fn toast_class(status: ToastStatus) -> &'static str {
    match status {
        ToastStatus::Success => "toast toast--success",
        ToastStatus::Error => "toast toast--error",
    }
}

/// Push `notice` onto the stack and dismiss it once its duration elapses.
pub fn show_toast(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|state| state.push(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        let duration_ms = toasts.with_untracked(|state| state.get(id).map(|toast| toast.duration_ms));
        if let Some(duration_ms) = duration_ms {
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                toasts.update(|state| {
                    state.dismiss(id);
                });
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let closable = toast.closable;
                    view! {
                        <div class=toast_class(toast.status)>
                            <strong class="toast__title">{toast.title}</strong>
                            <p class="toast__description">{toast.description}</p>
                            <Show when=move || closable>
                                <button
                                    class="toast__close"
                                    type="button"
                                    aria-label="Close"
                                    on:click=move |_| {
                                        toasts.update(|state| {
                                            state.dismiss(id);
                                        });
                                    }
                                >
                                    "\u{d7}"
                                </button>
                            </Show>
                        </div>
                    }
                }
            />
        </div>
    }
}
