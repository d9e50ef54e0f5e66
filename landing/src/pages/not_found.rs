use leptos::prelude::*;
use stageready::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container page not-found">
            <h1>"Page not found"</h1>
            <p class="muted">"The page you're looking for has moved or never existed."</p>
            <a href=Page::Home.path() class="btn btn-primary">"Back to home"</a>
        </div>
    }
}
