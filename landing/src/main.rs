// Stage Ready site - Leptos 0.8 CSR

mod browser;
mod content;
mod logging;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "stage ready site starting");
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(Toaster::new());

    view! {
        <Router>
            <div class="site">
                <Nav />
                <main class="site-main">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/services") view=ServicesPage />
                        <Route path=path!("/work") view=WorkPage />
                        <Route path=path!("/book") view=BookPage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/terms") view=TermsPage />
                    </Routes>
                </main>
                <Footer />
                <Toasts />
            </div>
        </Router>
    }
}
