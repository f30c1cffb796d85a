//! Root application component with routing and explicit dependency wiring.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::net::api::HttpAuthService;
use crate::net::auth::AuthHandle;
use crate::pages::sign_up::SignUpPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the auth collaborator once and hands it to pages as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth: AuthHandle = Arc::new(HttpAuthService::new(config.clone()));

    view! {
        <Stylesheet id="leptos" href="/pkg/timos-web.css"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route
                    path=StaticSegment("signup")
                    view=move || view! { <SignUpPage auth=auth.clone() config=config.clone()/> }
                />
            </Routes>
        </Router>
    }
}
