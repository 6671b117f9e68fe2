// src/services/users_page_service.rs
use std::sync::Arc;

use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde_json::json;

use crate::config::get_page_size;
use crate::user::UserSource;
use crate::utils::pagination::{NavOutcome, PaginationQuery};
use crate::utils::renderer::{build_page_view, paginate_users};

/// Shared handle to the configured record source.
pub type SharedSource = web::Data<Arc<dyn UserSource>>;

pub async fn render_users(source: SharedSource, query: web::Query<PaginationQuery>) -> impl Responder {
    let users = match source.fetch_users().await {
        Ok(users) => users,
        Err(e) => {
            let status_code = e.status_code();
            tracing::error!(source = source.name(), status_code, "Failed to load users: {}", e);
            let status =
                StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            // Details stay in the log; the client only learns the status.
            return HttpResponse::build(status).json(json!({
                "status_code": status.as_u16(),
                "error": status.canonical_reason().unwrap_or("Error"),
            }));
        }
    };

    let (session, outcome) = query.into_inner().into_session(get_page_size(), users.len());
    match outcome {
        NavOutcome::OutOfRange(action) => {
            tracing::debug!(?action, "Navigation target out of range, ignored")
        }
        NavOutcome::Unknown(raw) => tracing::debug!(go = %raw, "Unknown navigation action, ignored"),
        NavOutcome::None | NavOutcome::Applied(_) => {}
    }
    let (rows, pagination) = paginate_users(&users, &session);

    tracing::debug!(
        page = pagination.page,
        total_pages = pagination.total_pages,
        rows = rows.len(),
        "Rendering user page"
    );

    HttpResponse::Ok().json(build_page_view(&rows, &pagination))
}
