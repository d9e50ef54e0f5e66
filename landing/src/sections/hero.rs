use leptos::prelude::*;
use stageready::Page;

use crate::content::SITE;

#[component]
pub fn Hero() -> impl IntoView {
    let badge = format!("{} - {}", SITE.business.name, SITE.business.tagline);
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {badge}
                    </div>
                    <h1 class="hero-title">
                        "Story-led home staging that "
                        <span class="hero-title-accent">"inspires buyers"</span>
                        " and elevates value"
                    </h1>
                    <p class="hero-description">
                        "We craft spaces that feel lived, loved, and ready. From cozy nooks to open-plan living, "
                        "our styling draws out each property's unique narrative so buyers can picture their life there."
                    </p>
                    <div class="hero-actions">
                        <a href=Page::Book.path() class="btn btn-primary">"Book a consultation"</a>
                        <a href=Page::Services.path() class="btn btn-secondary">"View services"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Badge, heading and intro paragraph at the top of an inner page.
#[component]
pub fn PageHeader(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] intro: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="hero-badge">
                <span class="hero-badge-dot"></span>
                {badge}
            </div>
            <h1 class="page-title">{title}</h1>
            {intro.map(|text| view! { <p class="page-intro">{text}</p> })}
            {children.map(|c| view! { <div class="hero-actions">{c()}</div> })}
        </header>
    }
}

#[component]
pub fn CtaBanner(
    title: &'static str,
    body: &'static str,
    #[prop(default = "Book a consultation")] action: &'static str,
) -> impl IntoView {
    view! {
        <section class="cta-banner card">
            <div>
                <h2>{title}</h2>
                <p class="muted">{body}</p>
            </div>
            <div class="hero-actions">
                <a href=Page::Book.path() class="btn btn-primary">{action}</a>
                <a href=Page::Services.path() class="btn btn-secondary">"Learn more"</a>
            </div>
            <ul class="cta-pills">
                <li>"Tailored packages"</li>
                <li>"Flexible timelines"</li>
                <li>"Photo-ready results"</li>
            </ul>
        </section>
    }
}
