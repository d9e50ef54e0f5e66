use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use stageready::portfolio::{FilterState, FilterValue};

use crate::sections::{PageHeader, PortfolioBrowser};

#[component]
pub fn WorkPage() -> impl IntoView {
    // `/work?style=coastal&property=townhouse` opens the grid pre-filtered
    let initial = use_query_map().with_untracked(|query| {
        let style = query.get("style");
        let property = query.get("property");
        (style.is_some() || property.is_some()).then(|| FilterState {
            style: FilterValue::from_key(style.as_deref().unwrap_or_default()),
            property: FilterValue::from_key(property.as_deref().unwrap_or_default()),
        })
    });

    view! {
        <div class="container page">
            <PageHeader
                badge="Our Work"
                title="Before and after, room by room"
                intro="Browse recent projects by style and property type. Select any image to view it full screen."
            />
            <PortfolioBrowser initial=initial />
        </div>
    }
}
