// src/services/basic_auth_service.rs
//
// Optional Actix middleware guarding the user list.
// Passes everything through when no credentials are configured.

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{self, HeaderValue},
    Error, HttpResponse,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use futures_util::future::{ready, Either, LocalBoxFuture, Ready};

use crate::config::{get_basic_auth, BasicAuthConfig};

/// Checks an `Authorization` header value against the configured pair.
pub fn credentials_match(auth_header: &str, cfg: &BasicAuthConfig) -> bool {
    let Some(encoded) = auth_header.strip_prefix("Basic ").map(str::trim) else {
        return false;
    };
    let Ok(decoded) = STANDARD.decode(encoded) else {
        return false;
    };
    let Ok(pair) = String::from_utf8(decoded) else {
        return false;
    };
    match pair.split_once(':') {
        Some((user, pass)) => {
            // Both halves are always compared.
            let user_ok = constant_time_eq(user.as_bytes(), cfg.username.as_bytes());
            let pass_ok = constant_time_eq(pass.as_bytes(), cfg.password.as_bytes());
            user_ok & pass_ok
        }
        None => false,
    }
}

#[inline]
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub struct BasicAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for BasicAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BasicAuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BasicAuthMiddlewareService { service }))
    }
}

pub struct BasicAuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for BasicAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Either<
        LocalBoxFuture<'static, Result<Self::Response, Self::Error>>,
        Ready<Result<Self::Response, Self::Error>>,
    >;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let allowed = match get_basic_auth() {
            None => true,
            Some(cfg) => req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| credentials_match(v, cfg)),
        };

        if allowed {
            let fut = self.service.call(req);
            return Either::Left(Box::pin(async move {
                let res = fut.await?;
                Ok(res.map_into_left_body())
            }));
        }

        tracing::warn!(path = %req.path(), "Rejected request without valid credentials");
        let res = HttpResponse::Unauthorized()
            .insert_header((
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"userboard\""),
            ))
            .finish()
            .map_into_right_body();

        Either::Right(ready(Ok(req.into_response(res))))
    }
}
