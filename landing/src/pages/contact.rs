use leptos::prelude::*;

use crate::content::{BUSINESS_HOURS, SERVICE_AREAS, SITE};
use crate::sections::{ContactCard, PageHeader};

#[component]
pub fn ContactPage() -> impl IntoView {
    let business = &SITE.business;

    view! {
        <div class="container page">
            <PageHeader
                badge="We'd love to hear about your project"
                title="Contact Stage Ready"
                intro="Tell us about your property and goals. We'll respond promptly with next steps and availability."
            >
                <a href=business.phone_href.clone() class="btn btn-primary" aria-label="Call Stage Ready">"Call us"</a>
                <a href=business.mailto() class="btn btn-secondary" aria-label="Email Stage Ready">"Email us"</a>
            </PageHeader>

            <div class="contact-grid">
                <section class="card">
                    <h2>"Contact details"</h2>
                    <p class="muted">"Reach us directly by phone or email."</p>
                    <a href=business.phone_href.clone() class="contact-row">
                        <span class="contact-label">"Phone"</span>
                        <span class="muted">{business.phone.clone()}</span>
                    </a>
                    <a href=business.mailto() class="contact-row">
                        <span class="contact-label">"Email"</span>
                        <span class="muted">{business.email.clone()}</span>
                    </a>
                </section>

                <section class="card">
                    <h2>"Business hours"</h2>
                    <p class="muted">"We aim to reply within one business day."</p>
                    <dl class="hours">
                        {BUSINESS_HOURS
                            .iter()
                            .map(|(days, hours)| view! {
                                <div class="hours-row">
                                    <dt class="muted">{*days}</dt>
                                    <dd>{*hours}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </section>

                <section class="card">
                    <h2>"Service areas"</h2>
                    <p class="muted">{format!("We frequently serve these areas around {}:", business.region)}</p>
                    <ul class="area-pills">
                        {SERVICE_AREAS.iter().map(|area| view! { <li>{*area}</li> }).collect_view()}
                    </ul>
                    <p class="muted small">
                        "Not on the list? We often travel! Reach out and we'll do our best to accommodate."
                    </p>
                </section>
            </div>

            <ContactCard />
        </div>
    }
}
