use leptos::prelude::*;

use crate::content::{APPROACH, Feature, VALUES};
use crate::sections::{CtaBanner, PageHeader};

#[component]
fn FeatureGrid(items: &'static [Feature]) -> impl IntoView {
    view! {
        <div class="feature-grid">
            {items
                .iter()
                .map(|f| view! {
                    <article class="card feature-card">
                        <h3>{f.title}</h3>
                        <p class="muted">{f.body}</p>
                    </article>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="container page">
            <PageHeader
                badge="Stage Ready · About"
                title="Spaces that tell stories and come alive"
                intro="Stage Ready offers interior designing and property styling with a meticulous eye for detail. \
                       We create refined, welcoming environments that resonate with buyers and reflect the people who live there."
            />

            <section class="page-section">
                <h2>"What we stand for"</h2>
                <p class="muted">"A holistic approach that blends design rigour with real-world market insight."</p>
                <FeatureGrid items=VALUES />
            </section>

            <section class="page-section">
                <h2>"Our approach"</h2>
                <p class="muted">
                    "Tailored services for owner-occupied homes, vacant properties, and pre-sale consultations."
                </p>
                <FeatureGrid items=APPROACH />
            </section>

            <section class="page-section">
                <h2>"Experience that moves buyers"</h2>
                <p>
                    "With years of hands-on experience across renovations, furnishing, and property marketing, "
                    "Stage Ready bridges design sensibility with what moves buyers. Our philosophy is simple: "
                    "design with empathy, style with restraint, and let the story of the space lead the way."
                </p>
            </section>

            <CtaBanner
                title="Let's tell your property's story"
                body="Tell us about your home and timeline. We'll recommend the right level of styling."
            />
        </div>
    }
}
