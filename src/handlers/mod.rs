pub mod api_v1;
pub mod auth_handlers;
pub mod booking_handlers;
pub mod classroom_handlers;
pub mod signup_handlers;

use actix_web::web;

use crate::auth::middleware::require_auth;
use crate::store::BookingStore;

/// Signed-in booking pages and the JSON API, backed by store `S`.
/// `/bookings/new` is registered before `/bookings/{id}/delete`.
pub fn configure_bookings<S: BookingStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .wrap(actix_web::middleware::from_fn(require_auth))
            .route("", web::get().to(booking_handlers::list::<S>))
            .route("/new", web::get().to(booking_handlers::new_form))
            .route("/new", web::post().to(booking_handlers::create::<S>))
            .route("/{id}/delete", web::post().to(booking_handlers::delete::<S>)),
    )
    .service(
        web::scope("/api/v1")
            .wrap(actix_web::middleware::from_fn(require_auth))
            .configure(api_v1::configure::<S>),
    );
}

/// Public pages and account routes.
pub fn configure_public(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(classroom_handlers::home))
        .route("/classrooms/{floor}", web::get().to(classroom_handlers::floor))
        .route("/signup", web::get().to(signup_handlers::form))
        .route("/signup", web::post().to(signup_handlers::submit))
        .route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/logout", web::post().to(auth_handlers::logout));
}
