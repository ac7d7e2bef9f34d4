//! Landing page handlers.
//!
//! ```text
//! GET  /    render the page
//! POST /    form actions: register | login | logout
//! ```
//!
//! Validation, conflict, and credential errors are consumed here and shown
//! as flash messages on the re-rendered page. Store failures propagate and
//! become the generic error page. Successful login and logout redirect with
//! `303 See Other` so a refresh never resubmits the form.

use actix_web::http::header;
use actix_web::{HttpResponse, get, post, web};
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tracing::info;

use crate::domain::ports::CataloguePersistenceError;
use crate::domain::{ApiResult, Error, LoginCredentials, Registration};
use crate::inbound::http::render::{
    FlashMessages, PageContext, SessionView, render_landing_page,
};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Message shown in the login card after a successful registration.
const REGISTERED_PLEASE_LOGIN: &str = "Registration successful. Please login.";

/// Raw landing form; which submit button was pressed selects the action.
#[derive(Debug, Deserialize)]
pub struct LandingForm {
    register: Option<String>,
    login: Option<String>,
    logout: Option<String>,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
    username_email: Option<String>,
}

/// Parsed POST action.
#[derive(Debug, PartialEq, Eq)]
enum PostAction {
    Register {
        username: String,
        email: String,
        password: String,
    },
    Login {
        identifier: String,
        password: String,
    },
    Logout,
}

impl TryFrom<LandingForm> for PostAction {
    type Error = Error;

    fn try_from(form: LandingForm) -> Result<Self, Error> {
        if form.register.is_some() {
            Ok(Self::Register {
                username: form.username.unwrap_or_default(),
                email: form.email.unwrap_or_default(),
                password: form.password.unwrap_or_default(),
            })
        } else if form.login.is_some() {
            Ok(Self::Login {
                identifier: form.username_email.unwrap_or_default(),
                password: form.password.unwrap_or_default(),
            })
        } else if form.logout.is_some() {
            Ok(Self::Logout)
        } else {
            Err(Error::invalid_request("unrecognised form submission"))
        }
    }
}

fn map_catalogue_error(error: CataloguePersistenceError) -> Error {
    match error {
        CataloguePersistenceError::Connection { message } => Error::service_unavailable(message),
        CataloguePersistenceError::Query { message } => Error::internal(message),
    }
}

/// Fetch the catalogue and render the page for the current session.
async fn render_page(
    state: &HttpState,
    session: &SessionContext,
    flash: FlashMessages,
) -> ApiResult<HttpResponse> {
    let now = Utc::now();
    let destinations = state
        .catalogue
        .list_destinations()
        .await
        .map_err(map_catalogue_error)?;
    let packages = state
        .catalogue
        .list_packages()
        .await
        .map_err(map_catalogue_error)?;
    let promotions = state
        .catalogue
        .list_active_promotions(now.date_naive())
        .await
        .map_err(map_catalogue_error)?;
    let stats = state.catalogue.stats().await.map_err(map_catalogue_error)?;

    let session_view = match session.current_user()? {
        Some(user) => SessionView::Authenticated {
            username: user.username,
        },
        None => SessionView::Anonymous,
    };

    let page = render_landing_page(&PageContext {
        session: session_view,
        destinations,
        packages,
        promotions,
        stats,
        flash,
        footer_year: now.year(),
    });
    Ok(HttpResponse::Ok()
        .content_type(actix_web::http::header::ContentType::html())
        .body(page))
}

fn see_other_to_root() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// Render the landing page.
#[get("/")]
pub async fn landing(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    render_page(&state, &session, FlashMessages::none()).await
}

/// Handle a landing form submission.
#[post("/")]
pub async fn landing_submit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<LandingForm>,
) -> ApiResult<HttpResponse> {
    match PostAction::try_from(form.into_inner())? {
        PostAction::Register {
            username,
            email,
            password,
        } => {
            let registration = match Registration::try_from_parts(&username, &email, &password) {
                Ok(registration) => registration,
                Err(validation) => {
                    return render_page(
                        &state,
                        &session,
                        FlashMessages::register_error(validation.to_string()),
                    )
                    .await;
                }
            };
            match state.auth.register(&registration).await {
                Ok(account) => {
                    info!(username = %account.username(), "account registered");
                    render_page(
                        &state,
                        &session,
                        FlashMessages::login_notice(REGISTERED_PLEASE_LOGIN),
                    )
                    .await
                }
                Err(error) if error.is_form_recoverable() => {
                    render_page(
                        &state,
                        &session,
                        FlashMessages::register_error(error.message().to_owned()),
                    )
                    .await
                }
                Err(error) => Err(error),
            }
        }
        PostAction::Login {
            identifier,
            password,
        } => {
            let credentials = match LoginCredentials::try_from_parts(&identifier, &password) {
                Ok(credentials) => credentials,
                Err(validation) => {
                    return render_page(
                        &state,
                        &session,
                        FlashMessages::login_error(validation.to_string()),
                    )
                    .await;
                }
            };
            match state.auth.authenticate(&credentials).await {
                Ok(account) => {
                    session.sign_in(&account)?;
                    info!(username = %account.username(), "login succeeded");
                    Ok(see_other_to_root())
                }
                Err(error) if error.is_form_recoverable() => {
                    render_page(
                        &state,
                        &session,
                        FlashMessages::login_error(error.message().to_owned()),
                    )
                    .await
                }
                Err(error) => Err(error),
            }
        }
        PostAction::Logout => {
            // Idempotent: purging an anonymous session is a no-op.
            session.sign_out();
            Ok(see_other_to_root())
        }
    }
}
