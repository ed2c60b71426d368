use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::session::{self, get_user_id, set_flash};
use crate::auth::{csrf, password, validate};
use crate::errors::{AppError, render};
use crate::models::user::{self, NewUser, SignupForm};
use crate::templates_structs::{PageContext, SignupTemplate};

const EMAIL_TAKEN: &str =
    "The email address is already in use by another account. Please log in instead.";

fn signup_form(
    session: &Session,
    error: Option<String>,
    username: &str,
    email: &str,
) -> Result<HttpResponse, AppError> {
    render(SignupTemplate {
        ctx: PageContext::build(session),
        error,
        username: username.to_string(),
        email: email.to_string(),
    })
}

pub async fn form(session: Session) -> Result<HttpResponse, AppError> {
    if get_user_id(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/"))
            .finish());
    }
    signup_form(&session, None, "", "")
}

pub async fn submit(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(error) = validate::validate_signup(&form.username, &form.email, &form.password) {
        return signup_form(&session, Some(error), &form.username, &form.email);
    }

    let new = NewUser {
        username: form.username.clone(),
        email: form.email.clone(),
        password: password::hash_password(&form.password)?,
    };

    match user::create(&pool, &new).await {
        Ok(user_id) => {
            log::info!("Account created for user {user_id}");
            session::sign_in(&session, user_id, &new.username)?;
            set_flash(&session, "success", "Successfully created an account");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/"))
                .finish())
        }
        Err(e) if user::is_duplicate_email(&e) => {
            signup_form(&session, Some(EMAIL_TAKEN.to_string()), &form.username, &form.email)
        }
        Err(e) => {
            log::error!("Error creating account: {e}");
            signup_form(
                &session,
                Some("Error creating account or saving data. Please try again.".to_string()),
                &form.username,
                &form.email,
            )
        }
    }
}
