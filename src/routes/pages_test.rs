use super::*;
use crate::config::SiteConfig;
use crate::state::test_helpers::{test_state_unconfigured, test_state_with_site};

// =============================================================================
// resolve_tab
// =============================================================================

#[test]
fn resolve_tab_defaults_to_about() {
    assert_eq!(resolve_tab(None, true), Tab::About);
    assert_eq!(resolve_tab(Some("unknown"), true), Tab::About);
    assert_eq!(resolve_tab(Some(""), true), Tab::About);
}

#[test]
fn resolve_tab_accepts_known_slugs() {
    assert_eq!(resolve_tab(Some("about"), true), Tab::About);
    assert_eq!(resolve_tab(Some("resume"), true), Tab::Resume);
    assert_eq!(resolve_tab(Some("portfolio"), true), Tab::Portfolio);
    assert_eq!(resolve_tab(Some("blog"), true), Tab::Blog);
    assert_eq!(resolve_tab(Some("contact"), true), Tab::Contact);
}

#[test]
fn resolve_tab_hides_blog_when_disabled() {
    assert_eq!(resolve_tab(Some("blog"), false), Tab::About);
    assert_eq!(resolve_tab(Some("contact"), false), Tab::Contact);
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn home_renders_requested_tab() {
    let state = test_state_unconfigured();
    let query = PageQuery { tab: Some("resume".into()), category: None };
    let Html(html) = home(State(state), Query(query)).await;

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Resume"));
    assert!(html.contains("Daniel Rajakumar"));
}

#[tokio::test]
async fn dev_page_is_404_when_disabled() {
    let response = dev_settings(State(test_state_unconfigured())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dev_page_renders_when_enabled() {
    let site = SiteConfig { dev_settings_enabled: true, ..SiteConfig::default() };
    let response = dev_settings(State(test_state_with_site(site))).await;
    assert_eq!(response.status(), StatusCode::OK);
}
