//! Small bindings to browser facilities the pages need.

use std::time::Duration;

use futures::channel::oneshot;
use leptos::prelude::set_timeout;
use stageready::Delay;

/// `setTimeout`-backed delay for the simulated submission endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutDelay;

impl Delay for TimeoutDelay {
    async fn wait(&self, duration: Duration) {
        let (done, fired) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = done.send(());
            },
            duration,
        );
        // A dropped sender just means the page went away; resolve anyway.
        let _ = fired.await;
    }
}

/// Local date as `YYYY-MM-DD`, for the `min` of date inputs.
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
