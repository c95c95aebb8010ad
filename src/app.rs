mod footer;
mod header;
mod homepage;
mod quote;
mod scope_builder;
mod sinks;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use header::Header;
use homepage::HomePage;
use quote::QuickQuoteModal;

use crate::content::PROFILE;

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
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

/// Open/closed state of the quick quote modal, shared by every "get a quote" button.
#[derive(Debug, Clone, Copy)]
pub struct QuoteOpen(pub RwSignal<bool>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let quote_open = RwSignal::new(false);
    provide_context(QuoteOpen(quote_open));

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <QuickQuoteModal open=quote_open />
        </Router>
    }
}

#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[cfg(not(feature = "ssr"))]
fn set_not_found_status() {}

#[component]
fn NotFound() -> impl IntoView {
    set_not_found_status();

    view! {
        <Title text="Not Found" />
        <div class="py-24 text-center space-y-4">
            <h1 class="text-3xl font-bold">"404"</h1>
            <p class="text-muted">"This page doesn't exist."</p>
            <a href="/" class="text-primary hover:underline">
                "Back to the portfolio"
            </a>
        </div>
    }
}
