use leptos::prelude::*;
use stageready::Page;

use crate::content::SERVICES;
use crate::sections::{CtaBanner, PageHeader};

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <div class="container page">
            <PageHeader
                badge="Services"
                title="Staging that sells the story of every home"
                intro="From empty shells to lived-in family homes, we shape each space so buyers can see themselves there."
            >
                <a href=Page::Book.path() class="btn btn-primary">"Book a consultation"</a>
                <a href=Page::Work.path() class="btn btn-secondary">"See our work"</a>
            </PageHeader>

            <section class="service-grid">
                {SERVICES
                    .iter()
                    .map(|service| view! {
                        <article class="card service-card">
                            <h2>{service.title}</h2>
                            <p class="muted">{service.summary}</p>
                            <dl class="service-stats">
                                {service
                                    .stats
                                    .iter()
                                    .map(|(label, value)| view! {
                                        <div class="service-stat">
                                            <dt>{*label}</dt>
                                            <dd>{*value}</dd>
                                        </div>
                                    })
                                    .collect_view()}
                            </dl>
                        </article>
                    })
                    .collect_view()}
            </section>

            <CtaBanner
                title="Not sure which service fits?"
                body="A short consultation is enough to map out the right plan for your property."
            />
        </div>
    }
}
