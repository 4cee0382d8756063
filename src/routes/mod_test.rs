use super::*;

async fn spawn(router: Router) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server");
    });
    addr
}

#[tokio::test]
async fn healthz_returns_ok_with_empty_body() {
    let addr = spawn(service_routes()).await;

    let resp = reqwest::get(format!("http://{addr}/healthz")).await.expect("request healthz");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.text().await.expect("read body").is_empty());
}

#[tokio::test]
async fn unknown_service_path_is_not_found() {
    let addr = spawn(service_routes()).await;

    let resp = reqwest::get(format!("http://{addr}/nope")).await.expect("request unknown path");
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

// =============================================================
// Leptos app
// =============================================================

async fn spawn_app() -> std::net::SocketAddr {
    spawn(app().expect("leptos app should build")).await
}

#[tokio::test]
async fn sign_in_path_renders_form_markup() {
    let addr = spawn_app().await;

    let resp = reqwest::get(format!("http://{addr}/user/signIn")).await.expect("request sign-in page");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.expect("read body");

    for needle in [
        "<form",
        r#"type="email""#,
        r#"id="exampleInputEmail1""#,
        r#"aria-describedby="emailHelp""#,
        r#"id="emailHelp""#,
        "Email address",
        "never share your email with anyone else.",
        r#"type="password""#,
        r#"id="exampleInputPassword1""#,
        r#"type="checkbox""#,
        r#"id="exampleCheck1""#,
        "Check me out",
        r#"type="submit""#,
        r#"class="btn btn-primary""#,
        "Submit",
    ] {
        assert!(body.contains(needle), "expected {needle:?} in sign-in page body");
    }
}

#[tokio::test]
async fn unmapped_paths_are_not_found() {
    let addr = spawn_app().await;

    for path in ["/", "/other", "/user/signIn/", "/user/signin", "/USER/SIGNIN"] {
        let resp = reqwest::get(format!("http://{addr}{path}")).await.expect("request unmapped path");
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND, "expected 404 for {path:?}");
    }
}

#[tokio::test]
async fn leptos_routes_match_route_table() {
    let mut served: Vec<String> = generate_route_list(signin_ui::App)
        .iter()
        .map(|listing| listing.path().to_owned())
        .collect();
    served.sort();

    let mut table: Vec<String> = signin_ui::routes::ROUTES.iter().map(|entry| entry.path.to_owned()).collect();
    table.sort();

    assert_eq!(served, table);
    for path in &served {
        assert!(signin_ui::routes::resolve(path).is_some(), "{path:?} served but not resolvable");
    }
}
