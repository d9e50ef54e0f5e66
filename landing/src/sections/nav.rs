use leptos::prelude::*;
use leptos_router::hooks::use_location;
use stageready::Page;
use stageready::brand::{FALLBACK_INITIALS, LOGO_ALT, LOGO_SRC, LogoState};

use crate::browser::set_document_title;
use crate::content::SITE;

#[component]
pub fn Nav() -> impl IntoView {
    let (drawer_open, set_drawer_open) = signal(false);
    let logo = RwSignal::new(LogoState::default());
    let pathname = use_location().pathname;

    // Close the mobile drawer and retitle the document on every route change
    Effect::new(move || {
        let path = pathname.get();
        set_drawer_open.set(false);
        if let Some(page) = Page::from_path(&path) {
            set_document_title(&page.title());
        }
    });

    let link_class = move |page: Page| {
        if page.is_active(&pathname.get()) {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let links = move || {
        Page::NAV
            .into_iter()
            .map(|page| {
                view! {
                    <a
                        href=page.path()
                        class=move || link_class(page)
                        aria-current=move || page.is_active(&pathname.get()).then_some("page")
                    >
                        {page.nav_label()}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="nav" role="banner">
            <div class="nav-inner">
                <a href="/" class="nav-brand" aria-label="Stage Ready Home">
                    <div class="nav-logo" aria-hidden="true">
                        <Show
                            when=move || logo.get().shows_image()
                            fallback=|| view! { <span class="nav-logo-initials">{FALLBACK_INITIALS}</span> }
                        >
                            <img src=LOGO_SRC alt=LOGO_ALT on:error=move |_| logo.update(|l| l.fail()) />
                        </Show>
                    </div>
                    <span class="nav-title">{SITE.business.name.clone()}</span>
                    <span class="sr-only">"Home Staging"</span>
                </a>
                <nav class="nav-links" aria-label="Primary">
                    {links}
                </nav>
                <button
                    class=move || if drawer_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || drawer_open.get().to_string()
                    aria-controls="mobile-nav"
                    on:click=move |_| set_drawer_open.update(|o| *o = !*o)
                >
                    {move || if drawer_open.get() { "Close" } else { "Menu" }}
                </button>
            </div>

            <Show when=move || drawer_open.get()>
                <nav id="mobile-nav" class="nav-drawer" aria-label="Mobile primary">
                    {links}
                </nav>
            </Show>
        </header>
    }
}
