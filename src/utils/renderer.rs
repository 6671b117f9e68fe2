// src/utils/renderer.rs
use serde::Serialize;
use serde_json::{json, Value};

use crate::utils::pagination::{
    build_window, slice, NavTargets, PageDirective, PageSession, Pagination,
};

pub fn paginate_users<T: Clone>(all_users: &[T], session: &PageSession) -> (Vec<T>, Pagination) {
    let total = all_users.len();
    let pagination = Pagination::new(session.current(total), session.page_size(), total);
    let visible = slice(all_users, pagination.page_size, pagination.page).to_vec();
    (visible, pagination)
}

#[derive(Debug, Serialize)]
struct DirectiveView {
    #[serde(flatten)]
    directive: PageDirective,
    active: bool,
}

/// View model handed to the rendering layer: visible rows, the page
/// summary, the page-number strip and the fixed navigation targets.
pub fn build_page_view<T: Serialize>(rows: &[T], pagination: &Pagination) -> Value {
    let directives: Vec<DirectiveView> = build_window(pagination.page, pagination.total_pages)
        .into_iter()
        .map(|directive| DirectiveView {
            directive,
            active: directive == PageDirective::Number(pagination.page),
        })
        .collect();

    json!({
        "users": rows,
        "page": {
            "current": pagination.page,
            "size": pagination.page_size,
            "start": pagination.start(),
            "end": pagination.end(),
            "total": pagination.total,
            "total_pages": pagination.total_pages,
            "has_prev": pagination.has_prev,
            "has_next": pagination.has_next,
        },
        "directives": directives,
        "nav": NavTargets::new(pagination.page, pagination.total_pages),
    })
}
