use actix_session::SessionExt;
use actix_web::{
    Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    middleware::Next,
};

use super::session::get_user_id;

/// Redirects visitors without a signed-in session to the sign-in page,
/// remembering where they were headed.
pub async fn require_auth(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if get_user_id(&req.get_session()).is_none() {
        let target = req
            .uri()
            .path_and_query()
            .map_or("/", |pq| pq.as_str());
        let location = login_location(target);
        let response = HttpResponse::SeeOther()
            .insert_header(("Location", location))
            .finish();
        return Ok(req.into_response(response).map_into_right_body());
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

fn login_location(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/login".to_string();
    }
    let encoded: String = serde_urlencoded::to_string([("next", path)]).unwrap_or_default();
    if encoded.is_empty() {
        "/login".to_string()
    } else {
        format!("/login?{encoded}")
    }
}

/// Only same-site absolute paths are followed after sign-in.
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}
