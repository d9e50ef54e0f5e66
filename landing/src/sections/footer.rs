use leptos::prelude::*;
use stageready::Page;

use crate::content::SITE;

#[component]
pub fn Footer() -> impl IntoView {
    let business = &SITE.business;

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo" aria-hidden="true">"SR"</span>
                    <div>
                        <span class="footer-title">{business.name.clone()}</span>
                        <p class="footer-tagline">{business.tagline.clone()}</p>
                    </div>
                </div>
                <nav class="footer-links" aria-label="Footer">
                    {[Page::Home, Page::About, Page::Services, Page::Work, Page::Contact]
                        .into_iter()
                        .map(|page| view! { <a href=page.path() class="footer-link">{page.nav_label()}</a> })
                        .collect_view()}
                </nav>
                <div class="footer-contact">
                    <a href=business.phone_href.clone() class="footer-link">{business.phone.clone()}</a>
                    <a href=business.mailto() class="footer-link">{business.email.clone()}</a>
                    <span class="footer-muted">{business.region.clone()}</span>
                </div>
                <p class="footer-copyright">
                    {format!("© {} · All rights reserved · ", business.name)}
                    <a href=Page::Terms.path() class="footer-link">{Page::Terms.nav_label()}</a>
                </p>
            </div>
        </footer>
    }
}
