//! Session Gate.
//!
//! The gate only ever checks for `session=authenticated`. Nothing in the login flow
//! issues that cookie, so any route wrapped in [`RequireSession`] is unreachable.
//! The middleware is therefore not mounted anywhere; see DESIGN.md before wiring it in.

use actix_web::{
    body::EitherBody,
    cookie::{time::Duration, Cookie},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpRequest, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};

pub const SESSION_COOKIE: &str = "session";
pub const AUTHENTICATED_MARKER: &str = "authenticated";

/// True iff the request carries `session=authenticated`.
pub fn is_authenticated(req: &HttpRequest) -> bool {
    req.cookie(SESSION_COOKIE)
        .map_or(false, |cookie| cookie.value() == AUTHENTICATED_MARKER)
}

/// An emptied, already-expired session cookie.
pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .max_age(Duration::ZERO)
        .finish()
}

/// Redirects (302) to `/login` unless [`is_authenticated`] holds.
pub struct RequireSession;

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(RequireSessionMiddleware { service })
    }
}

pub struct RequireSessionMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if is_authenticated(req.request()) {
            let fut = self.service.call(req);
            Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            })
        } else {
            log::warn!("Session gate rejected {} {}", req.method(), req.path());
            Box::pin(async move {
                let (http_req, _payload) = req.into_parts();
                let res = HttpResponse::Found()
                    .append_header((header::LOCATION, "/login"))
                    .finish()
                    .map_into_right_body();
                Ok(ServiceResponse::new(http_req, res))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, web, App};

    #[test]
    fn gate_requires_the_exact_marker() {
        let req = actix_test::TestRequest::default().to_http_request();
        assert!(!is_authenticated(&req));

        let req = actix_test::TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "Authenticated"))
            .to_http_request();
        assert!(!is_authenticated(&req));

        let req = actix_test::TestRequest::default()
            .cookie(Cookie::new("other", AUTHENTICATED_MARKER))
            .to_http_request();
        assert!(!is_authenticated(&req));

        let req = actix_test::TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, AUTHENTICATED_MARKER))
            .to_http_request();
        assert!(is_authenticated(&req));
    }

    #[test]
    fn cleared_cookie_is_empty_and_expired() {
        let cookie = cleared_session_cookie();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }

    #[actix_web::test]
    async fn middleware_redirects_without_marker() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequireSession)
                .route("/secret", web::get().to(|| async { HttpResponse::Ok().body("secret") })),
        )
        .await;

        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/secret").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");

        let req = actix_test::TestRequest::get()
            .uri("/secret")
            .cookie(Cookie::new(SESSION_COOKIE, AUTHENTICATED_MARKER))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
