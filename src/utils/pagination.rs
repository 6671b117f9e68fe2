// src/utils/pagination.rs
//
// Page windowing for the user table: which rows belong to a page and which
// page-number controls to show for it.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_PAGE, LOW_MODE_LIMIT, WINDOW_RADIUS};

/// One entry of the page-number control strip, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageDirective {
    /// Interactive control that navigates to the given 1-based page.
    Number(usize),
    /// Non-interactive gap marker.
    Ellipsis,
}

/// Number of pages needed for `item_count` items, `0` for an empty list.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Constrains `page` into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(DEFAULT_PAGE, total_pages.max(DEFAULT_PAGE))
}

/// Returns the rows of `current_page`.
///
/// The page does not need to be clamped beforehand: a page past the end
/// (e.g. a stale page after the list shrank), page `0` or a zero page size
/// all yield an empty slice.
pub fn slice<T>(items: &[T], page_size: usize, current_page: usize) -> &[T] {
    let Some(start) = current_page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };
    if page_size == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Builds the page-number controls for `current_page` out of `total_pages`.
///
/// Below page 10 the first ten pages are listed and nothing else. From page
/// 10 on, a window of two pages either side of the current one is shown,
/// preceded by `1 …` only once the current page is past 10 and followed by
/// `… last` while the last page is outside the window. Page 10 itself gets
/// neither the low listing nor the leading `1 …`.
pub fn build_window(current_page: usize, total_pages: usize) -> Vec<PageDirective> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = clamp_page(current_page, total_pages);

    if current < LOW_MODE_LIMIT {
        return (1..=total_pages.min(LOW_MODE_LIMIT))
            .map(PageDirective::Number)
            .collect();
    }

    let mut window = Vec::with_capacity(2 * WINDOW_RADIUS + 5);
    if current > LOW_MODE_LIMIT {
        window.push(PageDirective::Number(1));
        window.push(PageDirective::Ellipsis);
    }

    let first = current.saturating_sub(WINDOW_RADIUS).max(1);
    let last = current.saturating_add(WINDOW_RADIUS).min(total_pages);
    window.extend((first..=last).map(PageDirective::Number));

    if current.saturating_add(WINDOW_RADIUS) < total_pages {
        window.push(PageDirective::Ellipsis);
        window.push(PageDirective::Number(total_pages));
    }
    window
}

/// Target pages of the fixed First / Previous / Next / Last controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavTargets {
    pub first: usize,
    pub prev: usize,
    pub next: usize,
    pub last: usize,
}

impl NavTargets {
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        let current = clamp_page(current_page, total_pages);
        NavTargets {
            first: DEFAULT_PAGE,
            prev: clamp_page(current.saturating_sub(1), total_pages),
            next: clamp_page(current.saturating_add(1), total_pages),
            last: clamp_page(total_pages, total_pages),
        }
    }
}

/// A "navigate to" request coming from the control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
    Page(usize),
}

impl NavAction {
    /// Page this action points at, `None` when it would fall below page 1.
    fn target(self, current: usize, total_pages: usize) -> Option<usize> {
        match self {
            NavAction::First => Some(DEFAULT_PAGE),
            NavAction::Prev => current.checked_sub(1),
            NavAction::Next => current.checked_add(1),
            NavAction::Last => Some(total_pages),
            NavAction::Page(n) => Some(n),
        }
    }
}

impl FromStr for NavAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(NavAction::First),
            "prev" | "previous" => Ok(NavAction::Prev),
            "next" => Ok(NavAction::Next),
            "last" => Ok(NavAction::Last),
            other => other
                .parse::<usize>()
                .map(NavAction::Page)
                .map_err(|_| format!("unknown navigation action '{}'", s)),
        }
    }
}

/// Navigation state of a single viewer: a fixed page size and the page
/// currently looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSession {
    page: usize,
    page_size: usize,
}

impl PageSession {
    pub fn new(page_size: usize) -> Self {
        Self::resume(page_size, DEFAULT_PAGE)
    }

    /// Restores a session at a previously requested page. The page is kept
    /// as given and clamped whenever it is read.
    pub fn resume(page_size: usize, page: usize) -> Self {
        PageSession { page, page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current(&self, item_count: usize) -> usize {
        clamp_page(self.page, total_pages(item_count, self.page_size))
    }

    /// Applies a navigation request. Targets outside `[1, total_pages]` are
    /// ignored and `false` is returned.
    pub fn apply(&mut self, action: NavAction, item_count: usize) -> bool {
        let total = total_pages(item_count, self.page_size);
        let current = self.current(item_count);
        match action.target(current, total) {
            Some(target) if (1..=total).contains(&target) => {
                self.page = target;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let total_pages = total_pages(total, page_size);
        let page = clamp_page(page, total_pages);

        Pagination {
            page,
            page_size,
            total,
            total_pages,
            has_prev: page > 1,
            has_next: page < total_pages,
        }
    }

    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// 1-based number of the first row on this page, `0` when there are none.
    pub fn start(&self) -> usize {
        if self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// 1-based number of the last row on this page.
    pub fn end(&self) -> usize {
        self.offset().saturating_add(self.page_size).min(self.total)
    }
}

/// Raw `?page=&go=` query. Both fields are kept as text so that junk
/// degrades to a clamped page instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub go: Option<String>,
}

/// Parses a requested page leniently: negative numbers become `0`, numbers
/// too large for `usize` saturate, anything else falls back to page 1.
/// The result still has to go through `clamp_page`.
pub fn parse_requested_page(raw: &str) -> usize {
    let raw = raw.trim();
    if let Ok(page) = raw.parse::<usize>() {
        return page;
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return DEFAULT_PAGE;
    }
    if negative {
        0
    } else {
        usize::MAX
    }
}

/// What happened to the `go` part of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// No `go` was given.
    None,
    Applied(NavAction),
    /// The target page was outside `[1, total_pages]`.
    OutOfRange(NavAction),
    /// `go` did not name a known action.
    Unknown(String),
}

impl PaginationQuery {
    pub fn requested_page(&self) -> usize {
        self.page
            .as_deref()
            .map(parse_requested_page)
            .unwrap_or(DEFAULT_PAGE)
    }

    /// Resumes the viewer's session at `page` and applies `go` on top of it.
    /// A `go` that is unknown or out of range leaves the page unchanged.
    pub fn into_session(self, page_size: usize, item_count: usize) -> (PageSession, NavOutcome) {
        let mut session = PageSession::resume(page_size, self.requested_page());
        let outcome = match self.go {
            None => NavOutcome::None,
            Some(raw) => match raw.parse::<NavAction>() {
                Ok(action) if session.apply(action, item_count) => NavOutcome::Applied(action),
                Ok(action) => NavOutcome::OutOfRange(action),
                Err(_) => NavOutcome::Unknown(raw),
            },
        };
        (session, outcome)
    }
}
