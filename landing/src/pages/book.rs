use leptos::prelude::*;

use crate::content::{BOOKING_STEPS, REFERRAL_TIERS, SITE};
use crate::sections::{BookingCard, PageHeader};

#[component]
pub fn BookPage() -> impl IntoView {
    let business = &SITE.business;

    view! {
        <div class="container page">
            <PageHeader
                badge="Free consultation"
                title="Book a staging consultation"
                intro="Tell us about your property and timeline. We'll tailor a plan that shows your home at its best."
            />

            <div class="book-layout">
                <BookingCard />

                <aside class="book-aside">
                    <section class="card">
                        <h2>"How it works"</h2>
                        <ol class="steps">
                            {BOOKING_STEPS
                                .iter()
                                .map(|step| view! {
                                    <li>
                                        <h3>{step.title}</h3>
                                        <p class="muted">{step.body}</p>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </section>

                    <section class="card">
                        <h2>"Prefer to talk now?"</h2>
                        <p class="muted">{business.hours.clone()}</p>
                        <a href=business.phone_href.clone() class="btn btn-secondary">
                            {format!("Call {}", business.phone)}
                        </a>
                    </section>

                    <section class="card referral">
                        <h2>"Agent referral program"</h2>
                        <p class="muted">"Refer a vendor and receive a thank-you bonus once the staging is installed."</p>
                        <ul>
                            {REFERRAL_TIERS.iter().map(|tier| view! { <li>{*tier}</li> }).collect_view()}
                        </ul>
                    </section>
                </aside>
            </div>
        </div>
    }
}
