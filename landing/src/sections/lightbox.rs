//! Full-screen image overlay driven by a [`Gallery`].

use leptos::ev;
use leptos::prelude::*;
use stageready::Gallery;

#[component]
pub fn Lightbox(gallery: RwSignal<Gallery>) -> impl IntoView {
    // Keyboard navigation only matters while the overlay is up
    let keys = window_event_listener(ev::keydown, move |event| {
        if !gallery.with_untracked(|g| g.is_open()) {
            return;
        }
        match event.key().as_str() {
            "Escape" => gallery.update(|g| g.close()),
            "ArrowRight" => gallery.update(|g| g.next()),
            "ArrowLeft" => gallery.update(|g| g.previous()),
            _ => {}
        }
    });
    on_cleanup(move || keys.remove());

    let image = move || {
        gallery.with(|g| {
            g.selected()
                .map(|item| (item.image_url.clone(), item.alt_text().to_string()))
        })
    };

    view! {
        <Show when=move || gallery.with(|g| g.is_open())>
            <div
                class="lightbox"
                role="dialog"
                aria-modal="true"
                on:click=move |_| gallery.update(|g| g.close())
            >
                <button
                    class="lightbox-close"
                    aria-label="Close"
                    on:click=move |e| {
                        e.stop_propagation();
                        gallery.update(|g| g.close());
                    }
                >
                    "×"
                </button>
                <button
                    class="lightbox-prev"
                    aria-label="Previous image"
                    on:click=move |e| {
                        e.stop_propagation();
                        gallery.update(|g| g.previous());
                    }
                >
                    "‹"
                </button>
                <figure class="lightbox-figure" on:click=|e| e.stop_propagation()>
                    {move || {
                        image()
                            .map(|(src, alt)| {
                                view! {
                                    <img class="lightbox-image" src=src alt=alt.clone() />
                                    <figcaption class="lightbox-caption">{alt}</figcaption>
                                }
                            })
                    }}
                    <span class="lightbox-position">
                        {move || gallery.with(|g| g.position_label()).unwrap_or_default()}
                    </span>
                </figure>
                <button
                    class="lightbox-next"
                    aria-label="Next image"
                    on:click=move |e| {
                        e.stop_propagation();
                        gallery.update(|g| g.next());
                    }
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
