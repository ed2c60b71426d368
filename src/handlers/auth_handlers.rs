use actix_session::Session;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use sqlx::PgPool;

use crate::auth::middleware::safe_next;
use crate::auth::session::{self, get_user_id};
use crate::auth::{csrf, password, rate_limit::RateLimiter};
use crate::errors::{AppError, render};
use crate::models::user;
use crate::templates_structs::{LoginTemplate, PageContext};

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
    #[serde(default)]
    pub next: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location))
        .finish()
}

fn login_form(
    session: &Session,
    error: Option<&str>,
    email: &str,
    next: &str,
) -> Result<HttpResponse, AppError> {
    let tmpl = LoginTemplate {
        ctx: PageContext::build(session),
        error: error.map(str::to_string),
        email: email.to_string(),
        next: next.to_string(),
    };
    render(tmpl)
}

pub async fn login_page(
    session: Session,
    query: web::Query<LoginQuery>,
) -> Result<HttpResponse, AppError> {
    let next = safe_next(query.next.as_deref());

    if get_user_id(&session).is_some() {
        return Ok(see_other(next));
    }
    login_form(&session, None, "", next)
}

pub async fn login_submit(
    req: HttpRequest,
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<LoginForm>,
    limiter: web::Data<RateLimiter>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let next = safe_next(Some(form.next.as_str()));

    // Rate-limit check BEFORE any database access
    let ip = req
        .peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED));

    if limiter.is_blocked(ip) {
        log::warn!("Sign-in blocked for {ip}: too many failed attempts");
        return login_form(
            &session,
            Some("Too many failed login attempts. Please try again later."),
            &form.email,
            next,
        );
    }

    let email = form.email.trim();
    let verified = match user::find_by_email(&pool, email).await? {
        Some(u) if password::verify_password(&form.password, &u.password)? => Some(u),
        _ => None,
    };

    let Some(u) = verified else {
        limiter.record_failure(ip);
        return login_form(&session, Some("Invalid email or password"), email, next);
    };

    limiter.clear(ip);
    session::sign_in(&session, u.id, &u.username)?;
    log::info!("User {} signed in", u.id);
    Ok(see_other(next))
}

pub async fn logout(session: Session, form: web::Form<CsrfOnly>) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(see_other("/login"))
}
