//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::pages::sign_in::SignInPage;
use crate::routes;
use crate::util::submission::SinkHandle;

/// Title shown when no screen-specific title applies.
pub const APP_TITLE: &str = "Sign-in Shell";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Provides the submission sink and maps `/user/signIn` to the sign-in page.
/// Any other path renders nothing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SinkHandle::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/signin-shell.css"/>

        <Router>
            <RouteTitle/>
            <Routes fallback=|| ()>
                <Route path=(StaticSegment("user"), StaticSegment("signIn")) view=SignInPage/>
            </Routes>
        </Router>
    }
}

/// Keeps the document title in step with the resolved screen.
#[component]
fn RouteTitle() -> impl IntoView {
    let location = use_location();
    let text = move || document_title(&location.pathname.get());
    view! { <Title text=text/> }
}

/// Document title for `path`.
pub fn document_title(path: &str) -> String {
    match routes::resolve(path) {
        Some(screen) => format!("{} | {APP_TITLE}", screen.title()),
        None => APP_TITLE.to_owned(),
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;
