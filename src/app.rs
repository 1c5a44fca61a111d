mod contact;
mod header;
mod homepage;
mod projects;
mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use header::Header;
use homepage::HomePage;

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
            <body class="min-h-screen bg-[#0b0c10] text-[#c5c6c7] overflow-x-hidden">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.summary />

        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}
