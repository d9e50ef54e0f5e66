//! Portfolio grid with style / property filters and a lightbox.

use leptos::prelude::*;
use stageready::portfolio::{FilterState, FilterValue, Metrics, Portfolio, Project};
use stageready::{Gallery, Page};
use tracing::warn;

use super::Lightbox;
use crate::content::SITE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Grid,
    List,
}

#[component]
pub fn PortfolioBrowser(#[prop(default = None)] initial: Option<FilterState>) -> impl IntoView {
    let projects = SITE.portfolio.projects.clone();
    let options = SITE.portfolio.options.clone();
    let start = match initial {
        Some(filter) => Portfolio::with_filters(projects.clone(), options.clone(), filter)
            .unwrap_or_else(|e| {
                warn!(error = %e, "initial filters ignored");
                Portfolio::new(projects, options)
            }),
        None => Portfolio::new(projects, options),
    };
    let portfolio = RwSignal::new(start);
    let gallery = RwSignal::new(Gallery::new(
        portfolio.with_untracked(|p| p.gallery_items()),
    ));
    let (layout, set_layout) = signal(Layout::Grid);

    let visible = Memo::new(move |_| {
        portfolio.with(|p| p.visible_items().cloned().collect::<Vec<Project>>())
    });

    // The lightbox always browses what the filters currently show
    let sync_gallery = move || {
        let items = portfolio.with_untracked(|p| p.gallery_items());
        gallery.update(|g| g.replace_items(items));
    };

    let set_style = move |key: String| {
        let applied = portfolio
            .try_update(|p| p.set_style_filter(FilterValue::from_key(&key)))
            .unwrap_or(Ok(()));
        match applied {
            Ok(()) => sync_gallery(),
            Err(e) => warn!(error = %e, "style filter ignored"),
        }
    };

    let set_property = move |key: String| {
        let applied = portfolio
            .try_update(|p| p.set_property_filter(FilterValue::from_key(&key)))
            .unwrap_or(Ok(()));
        match applied {
            Ok(()) => sync_gallery(),
            Err(e) => warn!(error = %e, "property filter ignored"),
        }
    };

    let open_image = move |index: usize| {
        gallery.update(|g| {
            if let Err(e) = g.open(index) {
                warn!(error = %e, "lightbox open ignored");
            }
        });
    };

    let style_key = move || portfolio.with(|p| p.filter().style.key().to_string());
    let property_key = move || portfolio.with(|p| p.filter().property.key().to_string());
    let options = &SITE.portfolio.options;

    view! {
        <section class="portfolio" aria-label="Our work portfolio">
            <div class="portfolio-controls">
                <div class="filter-tabs" role="tablist">
                    {std::iter::once((FilterValue::ALL_KEY.to_string(), "All styles".to_string()))
                        .chain(options.styles.iter().map(|o| (o.key.clone(), o.label.clone())))
                        .map(|(key, label)| {
                            let tab_key = key.clone();
                            view! {
                                <button
                                    role="tab"
                                    class=move || {
                                        if style_key() == tab_key { "filter-tab active" } else { "filter-tab" }
                                    }
                                    on:click=move |_| set_style(key.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <select
                    class="filter-select"
                    aria-label="Property type"
                    on:change=move |ev| set_property(event_target_value(&ev))
                >
                    <option value=FilterValue::ALL_KEY selected=move || property_key() == FilterValue::ALL_KEY>
                        "All property types"
                    </option>
                    {options
                        .property_types
                        .iter()
                        .map(|o| {
                            let key = o.key.clone();
                            let option_key = key.clone();
                            view! {
                                <option value=key selected=move || property_key() == option_key>
                                    {o.label.clone()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <div class="layout-toggle">
                    <button
                        class=move || if layout.get() == Layout::Grid { "layout-btn active" } else { "layout-btn" }
                        aria-pressed=move || (layout.get() == Layout::Grid).to_string()
                        on:click=move |_| set_layout.set(Layout::Grid)
                    >
                        "Grid"
                    </button>
                    <button
                        class=move || if layout.get() == Layout::List { "layout-btn active" } else { "layout-btn" }
                        aria-pressed=move || (layout.get() == Layout::List).to_string()
                        on:click=move |_| set_layout.set(Layout::List)
                    >
                        "List"
                    </button>
                </div>
            </div>

            <div class=move || if layout.get() == Layout::Grid { "project-grid" } else { "project-list" }>
                <Show
                    when=move || !visible.with(|v| v.is_empty())
                    fallback=|| view! {
                        <div class="card project-empty">
                            <p>"No projects match your filters. Try a different combination."</p>
                        </div>
                    }
                >
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(position, project)| (*position, project.id.clone())
                        children=move |(position, project)| {
                            let subtitle = portfolio.with_untracked(|p| p.subtitle(&project));
                            view! {
                                <ProjectCard
                                    project=project
                                    subtitle=subtitle
                                    on_open=Callback::new(move |after: bool| {
                                        open_image(position * 2 + usize::from(after))
                                    })
                                />
                            }
                        }
                    />
                </Show>
            </div>

            <Lightbox gallery=gallery />

            <CaseStudies portfolio=portfolio />
            <Testimonials portfolio=portfolio />

            <div class="portfolio-cta">
                <div>
                    <h2>"Ready to elevate your listing?"</h2>
                    <p class="muted">"Book a complimentary consultation and we'll tailor a plan to your property."</p>
                </div>
                <a href=Page::Book.path() class="btn btn-primary">"Book a consultation"</a>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, subtitle: String, on_open: Callback<bool>) -> impl IntoView {
    view! {
        <article class="card project-card">
            <div class="before-after">
                <button class="before-after-half" on:click=move |_| on_open.run(false)>
                    <img src=project.before_image alt="Before staging" />
                    <span class="badge badge-outline">"Before"</span>
                </button>
                <button class="before-after-half" on:click=move |_| on_open.run(true)>
                    <img src=project.after_image alt="After staging" />
                    <span class="badge">"After"</span>
                </button>
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="muted">{subtitle}</p>
                <p>{project.description}</p>
            </div>
            <div class="project-footer">
                <MetricPills metrics=project.metrics />
            </div>
        </article>
    }
}

#[component]
fn MetricPills(metrics: Option<Metrics>) -> impl IntoView {
    match metrics {
        None => view! { <span class="muted small">"Tailored staging for impact"</span> }.into_any(),
        Some(metrics) => view! {
            <div class="metric-pills">
                {metrics
                    .pills()
                    .into_iter()
                    .map(|(label, value)| view! {
                        <span class="metric-pill">
                            <span class="sr-only">{label}</span>
                            {value}
                        </span>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn CaseStudies(portfolio: RwSignal<Portfolio>) -> impl IntoView {
    let studies = portfolio.with_untracked(|p| {
        p.case_studies()
            .iter()
            .map(|project| (project.clone(), p.subtitle(project)))
            .collect::<Vec<_>>()
    });
    (!studies.is_empty()).then(move || view! {
        <section class="case-studies">
            <h2>"Case studies"</h2>
            <div class="case-study-grid">
                {studies
                    .into_iter()
                    .map(|(project, subtitle)| view! {
                        <article class="card">
                            <h3>{project.title.clone()}</h3>
                            <p class="muted">{subtitle}</p>
                            <figure class="case-study-image">
                                <img src=project.after_image.clone() alt=format!("{} after staging", project.title) />
                            </figure>
                            <p class="muted">{project.description.clone()}</p>
                            <div class="project-footer">
                                <MetricPills metrics=project.metrics.clone() />
                                <span class="muted small">"Story-led approach"</span>
                            </div>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    })
}

#[component]
fn Testimonials(portfolio: RwSignal<Portfolio>) -> impl IntoView {
    let quotes = portfolio.with_untracked(|p| {
        p.testimonials()
            .into_iter()
            .map(|t| {
                (
                    t.quote.to_string(),
                    t.client.to_string(),
                    format!("{} · {}", t.role, t.project_title),
                )
            })
            .collect::<Vec<_>>()
    });
    (!quotes.is_empty()).then(move || view! {
        <section class="testimonials">
            <h2>"What clients are saying"</h2>
            <div class="testimonial-grid">
                {quotes
                    .into_iter()
                    .map(|(quote, client, byline)| view! {
                        <figure class="card testimonial">
                            <blockquote>{format!("\"{quote}\"")}</blockquote>
                            <figcaption>
                                <span class="testimonial-client">{client}</span>
                                <span class="muted small">{byline}</span>
                            </figcaption>
                        </figure>
                    })
                    .collect_view()}
            </div>
        </section>
    })
}
