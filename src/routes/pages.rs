//! Page handlers: the tabbed site and the hidden developer settings panel.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use crate::site::{self, PortfolioFilter, Tab};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Selected tab; unknown or absent values fall back to About.
    pub tab: Option<String>,
    /// Portfolio category filter; unknown values mean All.
    pub category: Option<String>,
}

/// `GET /` — the whole site; `tab` picks the visible section.
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let tab = resolve_tab(query.tab.as_deref(), state.site.blog_enabled);
    let filter = PortfolioFilter::from_param(query.category.as_deref());
    Html(site::render_home(&state, tab, filter))
}

pub(crate) fn resolve_tab(param: Option<&str>, blog_enabled: bool) -> Tab {
    let tab = param.and_then(Tab::from_param).unwrap_or(Tab::About);
    if tab == Tab::Blog && !blog_enabled {
        return Tab::About;
    }
    tab
}

/// `GET /dev` — developer settings, 404 unless `DEV_SETTINGS_ENABLED`.
pub async fn dev_settings(State(state): State<AppState>) -> Response {
    if !state.site.dev_settings_enabled {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(site::render_dev_settings(&state)).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
