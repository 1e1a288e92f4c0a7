mod about;
mod footer;
mod header;
mod hero;
mod loader;
mod projects;
mod reveal;
mod scroll_lines;
mod services;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::i18n::provide_i18n;
use crate::motion::provide_page_progress;

use about::{AboutPage, AboutSection};
use footer::Footer;
use header::Header;
use hero::Hero;
use loader::Loader;
use projects::Projects;
use scroll_lines::ScrollLines;
use services::Services;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-body bg-dark text-light antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_i18n();

    let (is_loaded, set_is_loaded) = signal(false);
    let page_ref = NodeRef::<html::Div>::new();
    provide_page_progress(page_ref);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ghassen Gasmi - {title}") />

        <Router>
            <Loader on_complete=Callback::new(move |_| set_is_loaded(true)) />
            <div
                node_ref=page_ref
                class="transition-opacity duration-500"
                style:opacity=move || if is_loaded.get() { "1" } else { "0" }
            >
                <ScrollLines />
                <Header />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

/// The single-page flow: hero, stacked projects, depth services, about.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Fullstack & Mobile Developer" />
        <Hero />
        <Projects />
        <Services />
        <AboutSection />
    }
}
