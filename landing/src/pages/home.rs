// Home page - hero, style showcase with lightbox, call to action
use leptos::prelude::*;
use stageready::{Gallery, MediaItem};
use tracing::warn;

use crate::content::STYLE_TILES;
use crate::sections::{CtaBanner, Hero, Lightbox};

fn style_gallery() -> Gallery {
    Gallery::new(
        STYLE_TILES
            .iter()
            .map(|tile| {
                MediaItem::new(tile.key, tile.image)
                    .with_title(tile.title)
                    .with_category(tile.description)
            })
            .collect(),
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let gallery = RwSignal::new(style_gallery());

    let open = move |index: usize| {
        gallery.update(|g| {
            if let Err(e) = g.open(index) {
                warn!(error = %e, "style preview ignored");
            }
        });
    };

    view! {
        <Hero />

        <section class="styles container">
            <div class="section-header">
                <span class="section-eyebrow">"Our styling language"</span>
                <h2>"Four distinct styles, one cohesive story"</h2>
                <p class="muted">
                    "We tailor each property with a focused palette and consistent details, "
                    "resulting in spaces that feel effortless and market-ready."
                </p>
            </div>
            <div class="style-grid">
                {STYLE_TILES
                    .iter()
                    .enumerate()
                    .map(|(index, tile)| view! {
                        <article class="card style-card">
                            <button
                                class="style-card-image"
                                aria-label=format!("Preview {}", tile.title)
                                on:click=move |_| open(index)
                            >
                                <img src=tile.image alt=tile.title />
                                <span class="badge">{tile.title}</span>
                            </button>
                            <p class="muted">{tile.description}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>

        <Lightbox gallery=gallery />

        <div class="container">
            <CtaBanner
                title="Ready to stage your next listing?"
                body="Book a no-pressure consultation. We'll discuss your goals and suggest a clear, story-led plan."
                action="Book consultation"
            />
        </div>
    }
}
