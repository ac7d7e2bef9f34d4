//! Landing page markup.
//!
//! Pure functions from page state to HTML; no I/O and no business logic
//! live here. Every stored or user-influenced text value is routed through
//! [`escape_html`] before interpolation so catalogue rows or usernames can
//! never inject markup into the output.

use crate::domain::catalogue::{Destination, Promotion, TravelPackage, TravelStats};

/// What the page knows about the requesting session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionView {
    /// No authenticated identity; show the login/register card.
    Anonymous,
    /// Logged in; show the welcome card with a logout button.
    Authenticated {
        /// Username to greet, escaped at render time.
        username: String,
    },
}

/// Visual style of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

/// One transient message shown inside the auth card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

/// Transient messages produced by a POST action, keyed by the form they
/// belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashMessages {
    pub login: Option<Flash>,
    pub register: Option<Flash>,
}

impl FlashMessages {
    /// No messages; the GET rendering path.
    pub fn none() -> Self {
        Self::default()
    }

    /// Error shown in the login form.
    pub fn login_error(text: impl Into<String>) -> Self {
        Self {
            login: Some(Flash {
                kind: FlashKind::Error,
                text: text.into(),
            }),
            register: None,
        }
    }

    /// Notice shown in the login form (e.g. after a successful registration
    /// the user is asked to log in).
    pub fn login_notice(text: impl Into<String>) -> Self {
        Self {
            login: Some(Flash {
                kind: FlashKind::Success,
                text: text.into(),
            }),
            register: None,
        }
    }

    /// Error shown in the register form; the form is rendered expanded so
    /// the message is visible without toggling.
    pub fn register_error(text: impl Into<String>) -> Self {
        Self {
            login: None,
            register: Some(Flash {
                kind: FlashKind::Error,
                text: text.into(),
            }),
        }
    }
}

/// Everything the landing page needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContext {
    pub session: SessionView,
    pub destinations: Vec<Destination>,
    pub packages: Vec<TravelPackage>,
    pub promotions: Vec<Promotion>,
    pub stats: Option<TravelStats>,
    pub flash: FlashMessages,
    /// Year printed in the footer.
    pub footer_year: i32,
}

/// Escape a string for interpolation into HTML text or attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the full landing page.
pub fn render_landing_page(ctx: &PageContext) -> String {
    let mut page = String::with_capacity(8 * 1024);
    page.push_str(PAGE_HEAD);
    page.push_str("<body>\n");
    auth_card(&mut page, &ctx.session, &ctx.flash);
    page.push_str(HERO);
    packages_section(&mut page, &ctx.packages);
    stats_section(&mut page, ctx.stats.as_ref());
    destinations_section(&mut page, &ctx.destinations);
    promotions_section(&mut page, &ctx.promotions);
    footer(&mut page, ctx.footer_year);
    page.push_str(
        "<script src=\"https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/js/bootstrap.bundle.min.js\"></script>\n</body>\n</html>\n",
    );
    page
}

/// Render the generic error page used when a request aborts.
///
/// `message` must already be safe to show (the HTTP error mapping redacts
/// store failures before calling this); it is escaped anyway.
pub fn render_error_page(title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\" />\n<title>{}</title>\n</head>\n<body>\n<main style=\"max-width:32rem;margin:4rem auto;font-family:sans-serif;text-align:center;\">\n<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the landing page</a></p>\n</main>\n</body>\n</html>\n",
        escape_html(title),
        escape_html(title),
        escape_html(message),
    )
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>Travel Landing Page</title>
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet" />
<style>
.hero {
    background: url('images/hero.jpg') center/cover no-repeat;
    height: 100vh;
    color: white;
    text-align: center;
    position: relative;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    justify-content: center;
}
.hero h1 span {
    color: #ffd700;
}
.destination-img {
    width: 100%;
    height: 140px;
    object-fit: cover;
    border-radius: 0.375rem;
}
.promo-section {
    background: url('images/promo.jpg') center/cover no-repeat;
    color: white;
    padding: 4rem 2rem;
    text-align: center;
}
</style>
<script>
function toggleForms() {
    const loginForm = document.getElementById('login-form');
    const registerForm = document.getElementById('register-form');
    if (loginForm.style.display === 'none') {
        loginForm.style.display = 'block';
        registerForm.style.display = 'none';
    } else {
        loginForm.style.display = 'none';
        registerForm.style.display = 'block';
    }
}
</script>
</head>
"#;

const HERO: &str = r#"<header class="hero">
    <h1>Travel with <span>Peace of Mind</span></h1>
    <p>Discover the world with us</p>
</header>
"#;

fn flash_alert(out: &mut String, flash: &Flash) {
    let class = match flash.kind {
        FlashKind::Success => "alert alert-success",
        FlashKind::Error => "alert alert-danger",
    };
    out.push_str(&format!(
        "<div class=\"{class}\">{}</div>\n",
        escape_html(&flash.text)
    ));
}

fn auth_card(out: &mut String, session: &SessionView, flash: &FlashMessages) {
    out.push_str(
        "<div class=\"position-fixed top-0 end-0 p-3\" style=\"z-index:1050; max-width:320px;\">\n<div class=\"card p-3 shadow bg-white\">\n",
    );
    match session {
        SessionView::Authenticated { username } => {
            out.push_str(&format!(
                "<div class=\"mb-2\">Welcome, <strong>{}</strong>!</div>\n",
                escape_html(username)
            ));
            out.push_str(
                "<form method=\"post\" action=\"/\">\n<button type=\"submit\" name=\"logout\" class=\"btn btn-danger w-100\">Logout</button>\n</form>\n",
            );
        }
        SessionView::Anonymous => {
            // A register-form flash expands the register form so the message
            // is visible without toggling.
            let register_open = flash.register.is_some();
            let (login_style, register_style) = if register_open {
                (" style=\"display:none;\"", "")
            } else {
                ("", " style=\"display:none;\"")
            };

            out.push_str(&format!("<div id=\"login-form\"{login_style}>\n<h5>Login</h5>\n"));
            if let Some(login_flash) = &flash.login {
                flash_alert(out, login_flash);
            }
            out.push_str(
                "<form method=\"post\" action=\"/\" class=\"mb-3\">\n<input type=\"text\" name=\"username_email\" placeholder=\"Username or Email\" class=\"form-control mb-2\" required />\n<input type=\"password\" name=\"password\" placeholder=\"Password\" class=\"form-control mb-2\" required />\n<button type=\"submit\" name=\"login\" class=\"btn btn-primary w-100\">Login</button>\n</form>\n<a href=\"javascript:void(0)\" onclick=\"toggleForms()\">Don&#39;t have an account? Register</a>\n</div>\n",
            );

            out.push_str(&format!(
                "<div id=\"register-form\"{register_style}>\n<h5>Register</h5>\n"
            ));
            if let Some(register_flash) = &flash.register {
                flash_alert(out, register_flash);
            }
            out.push_str(
                "<form method=\"post\" action=\"/\" class=\"mb-3\">\n<input type=\"text\" name=\"username\" placeholder=\"Username\" class=\"form-control mb-2\" required />\n<input type=\"email\" name=\"email\" placeholder=\"Email\" class=\"form-control mb-2\" required />\n<input type=\"password\" name=\"password\" placeholder=\"Password\" class=\"form-control mb-2\" required />\n<button type=\"submit\" name=\"register\" class=\"btn btn-success w-100\">Register</button>\n</form>\n<a href=\"javascript:void(0)\" onclick=\"toggleForms()\">Already have an account? Login</a>\n</div>\n",
            );
        }
    }
    out.push_str("</div>\n</div>\n");
}

fn packages_section(out: &mut String, packages: &[TravelPackage]) {
    out.push_str(
        "<section class=\"container my-5\">\n<h2 class=\"mb-4\">Popular Travel Packages</h2>\n<div class=\"row\">\n",
    );
    if packages.is_empty() {
        out.push_str("<p>No travel packages available.</p>\n");
    } else {
        for package in packages {
            out.push_str(&format!(
                "<div class=\"col-md-4 mb-4\">\n<div class=\"card h-100 shadow-sm\">\n<img src=\"{image}\" class=\"card-img-top\" alt=\"{title}\" />\n<div class=\"card-body d-flex flex-column\">\n<h5 class=\"card-title\">{title}</h5>\n<p class=\"card-text flex-grow-1\">{description}</p>\n<strong class=\"text-primary\">Price: ${price}</strong>\n</div>\n</div>\n</div>\n",
                image = escape_html(&package.image),
                title = escape_html(&package.title),
                description = escape_html(&package.description),
                price = package.price,
            ));
        }
    }
    out.push_str("</div>\n</section>\n");
}

fn stats_section(out: &mut String, stats: Option<&TravelStats>) {
    out.push_str(
        "<section class=\"container my-5\">\n<h2 class=\"mb-4\">Travel Statistics</h2>\n",
    );
    match stats {
        Some(stats) => {
            out.push_str("<div class=\"row text-center\">\n");
            for (count, label) in [
                (stats.destinations, "Destinations"),
                (stats.tours, "Tours"),
                (stats.cruises, "Cruises"),
                (stats.hotels, "Hotels"),
            ] {
                out.push_str(&format!(
                    "<div class=\"col-sm-3\"><strong>{count}</strong><br />{label}</div>\n"
                ));
            }
            out.push_str("</div>\n");
        }
        None => out.push_str("<p>No statistics data available.</p>\n"),
    }
    out.push_str("</section>\n");
}

fn destinations_section(out: &mut String, destinations: &[Destination]) {
    out.push_str(
        "<section class=\"container my-5\">\n<h2 class=\"mb-4\">Popular Destinations</h2>\n<div class=\"row row-cols-1 row-cols-sm-2 row-cols-md-4 g-3\">\n",
    );
    if destinations.is_empty() {
        out.push_str("<p>No destinations available.</p>\n");
    } else {
        for destination in destinations {
            out.push_str(&format!(
                "<div class=\"col\">\n<div class=\"card h-100 shadow-sm\">\n<img src=\"{image}\" alt=\"{name}\" class=\"destination-img\" />\n<div class=\"card-body p-2\">\n<span class=\"badge bg-warning text-dark\">{region}</span>\n<h6 class=\"mt-2 mb-0\">{name}</h6>\n</div>\n</div>\n</div>\n",
                image = escape_html(&destination.image),
                name = escape_html(&destination.name),
                region = escape_html(&destination.region),
            ));
        }
    }
    out.push_str("</div>\n</section>\n");
}

fn promotions_section(out: &mut String, promotions: &[Promotion]) {
    out.push_str("<section class=\"promo-section my-5\">\n<h2>Current Promotions</h2>\n");
    if promotions.is_empty() {
        out.push_str("<p>No current promotions.</p>\n");
    } else {
        for promotion in promotions {
            out.push_str(&format!(
                "<p>{description}</p>\n<p><strong>Discount: {discount}%</strong></p>\n<hr />\n",
                description = escape_html(&promotion.description),
                discount = promotion.discount,
            ));
        }
    }
    out.push_str("</section>\n");
}

fn footer(out: &mut String, year: i32) {
    out.push_str(&format!(
        "<footer class=\"text-center py-4 bg-light\">\n<small>&copy; {year} Travel App. All rights reserved.</small>\n</footer>\n"
    ));
}

#[cfg(test)]
mod tests {
    //! Regression coverage for escaping and section rendering.
    use super::*;
    use crate::domain::catalogue::{
        DestinationDraft, PromotionDraft, StatsDraft, TravelPackageDraft,
    };
    use chrono::NaiveDate;
    use rstest::rstest;

    fn empty_context() -> PageContext {
        PageContext {
            session: SessionView::Anonymous,
            destinations: Vec::new(),
            packages: Vec::new(),
            promotions: Vec::new(),
            stats: None,
            flash: FlashMessages::none(),
            footer_year: 2026,
        }
    }

    #[rstest]
    #[case("plain text", "plain text")]
    #[case("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
    #[case("a & b", "a &amp; b")]
    #[case("\"quoted\" 'single'", "&quot;quoted&quot; &#39;single&#39;")]
    fn escape_html_neutralises_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_html(raw), expected);
    }

    #[rstest]
    fn empty_page_shows_placeholders() {
        let html = render_landing_page(&empty_context());
        assert!(html.contains("No travel packages available."));
        assert!(html.contains("No destinations available."));
        assert!(html.contains("No statistics data available."));
        assert!(html.contains("No current promotions."));
        assert!(html.contains("&copy; 2026 Travel App."));
    }

    #[rstest]
    fn anonymous_page_shows_both_auth_forms() {
        let html = render_landing_page(&empty_context());
        assert!(html.contains("id=\"login-form\""));
        assert!(html.contains("id=\"register-form\""));
        assert!(html.contains("name=\"username_email\""));
        assert!(!html.contains("Logout"));
    }

    #[rstest]
    fn authenticated_page_greets_and_offers_logout() {
        let mut ctx = empty_context();
        ctx.session = SessionView::Authenticated {
            username: "alice".to_owned(),
        };
        let html = render_landing_page(&ctx);
        assert!(html.contains("Welcome, <strong>alice</strong>!"));
        assert!(html.contains("name=\"logout\""));
        assert!(!html.contains("id=\"login-form\""));
    }

    #[rstest]
    fn stored_text_is_escaped_everywhere() {
        let mut ctx = empty_context();
        ctx.session = SessionView::Authenticated {
            username: "<script>alert('u')</script>".to_owned(),
        };
        ctx.destinations = vec![Destination::new(DestinationDraft {
            id: 1,
            name: Some("<img src=x onerror=alert(1)>".to_owned()),
            region: Some("<b>Europe</b>".to_owned()),
            image: None,
        })];
        ctx.promotions = vec![Promotion::new(PromotionDraft {
            id: 1,
            description: Some("50% off <script>steal()</script>".to_owned()),
            discount: Some(50),
            start_date: NaiveDate::MIN,
            end_date: NaiveDate::MAX,
        })];
        let html = render_landing_page(&ctx);
        assert!(!html.contains("<script>alert"));
        assert!(!html.contains("<img src=x"));
        assert!(!html.contains("<b>Europe</b>"));
        assert!(!html.contains("<script>steal()"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[rstest]
    fn sections_render_seeded_records() {
        let mut ctx = empty_context();
        ctx.packages = vec![TravelPackage::new(TravelPackageDraft {
            id: 1,
            title: Some("Island Hopper".to_owned()),
            description: None,
            price: Some(1499),
            image: None,
        })];
        ctx.stats = Some(TravelStats::new(StatsDraft {
            destinations: Some(120),
            tours: None,
            cruises: None,
            hotels: Some(45),
        }));
        let html = render_landing_page(&ctx);
        assert!(html.contains("Island Hopper"));
        assert!(html.contains("Price: $1499"));
        assert!(html.contains("<strong>120</strong><br />Destinations"));
        assert!(html.contains("<strong>0</strong><br />Tours"));
    }

    #[rstest]
    fn login_flash_renders_in_login_form() {
        let mut ctx = empty_context();
        ctx.flash = FlashMessages::login_error("Invalid login credentials.");
        let html = render_landing_page(&ctx);
        assert!(html.contains("alert alert-danger"));
        assert!(html.contains("Invalid login credentials."));
    }

    #[rstest]
    fn register_flash_expands_the_register_form() {
        let mut ctx = empty_context();
        ctx.flash = FlashMessages::register_error("Password must be at least 6 characters.");
        let html = render_landing_page(&ctx);
        assert!(html.contains("<div id=\"login-form\" style=\"display:none;\">"));
        assert!(html.contains("<div id=\"register-form\">"));
        assert!(html.contains("Password must be at least 6 characters."));
    }

    #[rstest]
    fn error_page_escapes_inputs() {
        let html = render_error_page("Something went wrong", "<oops>");
        assert!(html.contains("&lt;oops&gt;"));
        assert!(!html.contains("<oops>"));
    }
}
