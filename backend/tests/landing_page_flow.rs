//! End-to-end landing page flows over in-memory adapters and real session
//! middleware: registration, login, logout, catalogue rendering, and
//! escaping.

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::NaiveDate;

use backend::Trace;
use backend::domain::catalogue::{
    Destination, DestinationDraft, Promotion, PromotionDraft, StatsDraft, TravelStats,
};
use backend::inbound::http::landing::{landing, landing_submit};
use backend::inbound::http::state::HttpState;
use backend::inbound::http::test_utils::test_session_middleware;
use backend::outbound::persistence::{
    InMemoryCatalogue, InMemoryUserRepository, PasswordAuthService,
};

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test date literal")
}

fn seeded_catalogue() -> InMemoryCatalogue {
    InMemoryCatalogue::new()
        .with_destinations(vec![
            Destination::new(DestinationDraft {
                id: 1,
                name: Some("Kyoto".to_owned()),
                region: Some("Asia".to_owned()),
                image: None,
            }),
            Destination::new(DestinationDraft {
                id: 2,
                name: Some("<script>alert('xss')</script>".to_owned()),
                region: None,
                image: None,
            }),
        ])
        .with_promotions(vec![
            Promotion::new(PromotionDraft {
                id: 1,
                description: Some("Evergreen offer".to_owned()),
                discount: Some(15),
                start_date: NaiveDate::MIN,
                end_date: NaiveDate::MAX,
            }),
            Promotion::new(PromotionDraft {
                id: 2,
                description: Some("Expired millennium sale".to_owned()),
                discount: Some(99),
                start_date: date("2000-01-01"),
                end_date: date("2000-01-02"),
            }),
        ])
        .with_stats(TravelStats::new(StatsDraft {
            destinations: Some(2),
            tours: Some(7),
            cruises: None,
            hotels: Some(12),
        }))
}

fn app_state() -> HttpState {
    HttpState::new(
        Arc::new(PasswordAuthService::new(Arc::new(
            InMemoryUserRepository::new(),
        ))),
        Arc::new(seeded_catalogue()),
    )
}

fn landing_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .wrap(Trace)
        .service(landing)
        .service(landing_submit)
}

fn register_form<'a>(username: &'a str, email: &'a str, password: &'a str) -> [(&'a str, &'a str); 4] {
    [
        ("register", ""),
        ("username", username),
        ("email", email),
        ("password", password),
    ]
}

fn login_form<'a>(identifier: &'a str, password: &'a str) -> [(&'a str, &'a str); 3] {
    [
        ("login", ""),
        ("username_email", identifier),
        ("password", password),
    ]
}

async fn page_body(response: actix_web::dev::ServiceResponse) -> String {
    let bytes = test::read_body(response).await;
    String::from_utf8(bytes.to_vec()).expect("utf8 page")
}

fn session_cookie(response: &actix_web::dev::ServiceResponse) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

#[actix_web::test]
async fn register_login_logout_round_trip() {
    let app = test::init_service(landing_app(app_state())).await;

    // Register, then confirm the success notice asks the user to log in.
    let register = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(register_form("alice", "alice@example.com", "secret123"))
            .to_request(),
    )
    .await;
    assert_eq!(register.status(), StatusCode::OK);
    let body = page_body(register).await;
    assert!(body.contains("Registration successful. Please login."));

    // Login redirects and establishes the authenticated session.
    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(login_form("alice", "secret123"))
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        login
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/")
    );
    let cookie = session_cookie(&login);

    let page = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body = page_body(page).await;
    assert!(body.contains("Welcome, <strong>alice</strong>!"));
    assert!(body.contains("name=\"logout\""));

    // Logout redirects and drops the identity.
    let logout = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .cookie(cookie.clone())
            .set_form([("logout", "")])
            .to_request(),
    )
    .await;
    assert_eq!(logout.status(), StatusCode::SEE_OTHER);

    let page = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = page_body(page).await;
    assert!(body.contains("id=\"login-form\""));
    assert!(!body.contains("Welcome,"));
}

#[actix_web::test]
async fn login_replaces_the_previous_session_identity_and_cookie() {
    let app = test::init_service(landing_app(app_state())).await;
    for (username, email) in [("alice", "alice@example.com"), ("bob", "bob@example.com")] {
        let response = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/")
                .set_form(register_form(username, email, "secret123"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let first_login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(login_form("alice", "secret123"))
            .to_request(),
    )
    .await;
    let first_cookie = session_cookie(&first_login);

    // Logging in again with the old cookie attached renews the identifier
    // and swaps the identity; a session holds at most one.
    let second_login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .cookie(first_cookie.clone())
            .set_form(login_form("bob", "secret123"))
            .to_request(),
    )
    .await;
    let second_cookie = session_cookie(&second_login);
    assert_ne!(first_cookie.value(), second_cookie.value());

    let page = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/")
            .cookie(second_cookie)
            .to_request(),
    )
    .await;
    let body = page_body(page).await;
    assert!(body.contains("Welcome, <strong>bob</strong>!"));
    assert!(!body.contains("alice"));
}

#[actix_web::test]
async fn failed_login_leaves_the_session_anonymous() {
    let app = test::init_service(landing_app(app_state())).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(register_form("alice", "alice@example.com", "secret123"))
            .to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(login_form("alice", "not-the-password"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = page_body(response).await;
    assert!(body.contains("Invalid login credentials."));
    assert!(body.contains("id=\"login-form\""));
    assert!(!body.contains("Welcome,"));
}

#[actix_web::test]
async fn duplicate_registration_shows_conflict_message() {
    let app = test::init_service(landing_app(app_state())).await;
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(register_form("alice", "alice@example.com", "secret123"))
            .to_request(),
    )
    .await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/")
            .set_form(register_form("alice", "second@example.com", "secret123"))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = page_body(response).await;
    assert!(body.contains("Username or email already taken."));
}

#[actix_web::test]
async fn catalogue_sections_render_with_window_filtering_and_escaping() {
    let app = test::init_service(landing_app(app_state())).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    // Every response carries the trace header.
    assert!(response.headers().contains_key("trace-id"));
    let body = page_body(response).await;

    // Seeded records appear, with defaults for missing columns.
    assert!(body.contains("Kyoto"));
    assert!(body.contains("Unknown"));
    assert!(body.contains("<strong>7</strong><br />Tours"));
    assert!(body.contains("<strong>0</strong><br />Cruises"));

    // The always-active promotion shows; the expired one is filtered out by
    // the reference-date window.
    assert!(body.contains("Evergreen offer"));
    assert!(body.contains("Discount: 15%"));
    assert!(!body.contains("Expired millennium sale"));

    // Stored markup is neutralised.
    assert!(!body.contains("<script>alert('xss')</script>"));
    assert!(body.contains("&lt;script&gt;alert(&#39;xss&#39;)&lt;/script&gt;"));
}
