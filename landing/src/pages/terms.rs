use leptos::prelude::*;

use crate::content::{SITE, TERMS};
use crate::sections::PageHeader;

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="container page terms">
            <PageHeader badge="Hire agreement" title="Terms and Conditions" />
            {TERMS
                .iter()
                .map(|section| view! {
                    <section class="terms-section">
                        <h2>{section.heading}</h2>
                        <ul>
                            {section.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                        </ul>
                    </section>
                })
                .collect_view()}
            <p class="muted small">
                {format!("Questions about these terms? Email {}.", SITE.business.email)}
            </p>
        </div>
    }
}
