// src/routes/users_route.rs

use actix_web::{web, HttpResponse};

use crate::services::{basic_auth_service::BasicAuthMiddleware, users_page_service::render_users};

pub fn users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("users")
            .wrap(BasicAuthMiddleware)
            .route("/health", web::get().to(|| async { HttpResponse::Ok().body("healthy") }))
            .route("", web::get().to(render_users)),
    );
}
