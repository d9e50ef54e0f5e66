//! Toast notifications: the browser-side [`Notifier`].

use std::time::Duration;

use leptos::prelude::*;
use stageready::notify::{Notice, NoticeLevel, Notifier};

const TOAST_LIFETIME: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    notice: Notice,
}

/// Shared toast stack, provided as context by the app root.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                notice: Notice {
                    level,
                    message: message.to_string(),
                },
            })
        });

        let this = *self;
        set_timeout(move || this.dismiss(id), TOAST_LIFETIME);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify_success(&self, message: &str) {
        self.push(NoticeLevel::Success, message);
    }

    fn notify_error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.notice.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                    };
                    view! {
                        <div class=class>
                            <span class="toast-message">{toast.notice.message}</span>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
