//! Server-rendered site.
//!
//! Every page is a Leptos view rendered to a static HTML string per request.
//! There is no hydration: interactive behavior (tab transitions, the contact
//! form fetch, the dev toggle) ships separately in `assets/js/site.js`.

pub mod clients;
pub mod dev;
pub mod layout;
pub mod sections;
pub mod sidebar;
pub mod tabs;
pub mod testimonials;

use leptos::prelude::*;

use crate::content::{ProjectCategory, SiteContent};
use crate::state::AppState;

use dev::DevPanel;
use sections::about::About;
use sections::blog::Blog;
use sections::contact::Contact;
use sections::portfolio::Portfolio;
use sections::resume::Resume;
use sidebar::Sidebar;
use tabs::TabsNav;

/// One of the five content sections, selected via the `tab` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    About,
    Resume,
    Portfolio,
    Blog,
    Contact,
}

impl Tab {
    pub const ALL: [Self; 5] = [Self::About, Self::Resume, Self::Portfolio, Self::Blog, Self::Contact];

    #[must_use]
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "about" => Some(Self::About),
            "resume" => Some(Self::Resume),
            "portfolio" => Some(Self::Portfolio),
            "blog" => Some(Self::Blog),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Resume => "resume",
            Self::Portfolio => "portfolio",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Resume => "Resume",
            Self::Portfolio => "Portfolio",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

/// Portfolio category filter parsed from the `category` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PortfolioFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl PortfolioFilter {
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("all") => Self::All,
            Some(other) => ProjectCategory::from_slug(other).map_or(Self::All, Self::Category),
        }
    }

    #[must_use]
    pub fn matches(self, category: ProjectCategory) -> bool {
        match self {
            Self::All => true,
            Self::Category(wanted) => wanted == category,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
        }
    }
}

/// Render the full page with the given tab visible.
#[must_use]
pub fn render_home(state: &AppState, tab: Tab, filter: PortfolioFilter) -> String {
    let content = state.content;
    let blog_enabled = state.site.blog_enabled;
    let section = section_view(content, tab, filter);
    let panel_class = format!("tab-panel {} active", tab.slug());

    let body = view! {
        <main class="site-main">
            <Sidebar content=content/>
            <div class="main-content">
                <TabsNav active=tab blog_enabled=blog_enabled/>
                <article class=panel_class data-tab=tab.slug()>{section}</article>
            </div>
        </main>
    }
    .into_any();

    layout::page(&state.site, &layout::PageMeta::for_tab(content, tab), body)
}

/// Render the hidden developer settings page.
#[must_use]
pub fn render_dev_settings(state: &AppState) -> String {
    let body = view! {
        <main class="dev-settings-page">
            <article class="dev-settings-panel active">
                <DevPanel/>
            </article>
        </main>
    }
    .into_any();

    layout::page(&state.site, &layout::PageMeta::dev(state.content), body)
}

fn section_view(content: &'static SiteContent, tab: Tab, filter: PortfolioFilter) -> AnyView {
    match tab {
        Tab::About => view! { <About content=content/> }.into_any(),
        Tab::Resume => view! { <Resume content=content/> }.into_any(),
        Tab::Portfolio => view! { <Portfolio content=content filter=filter/> }.into_any(),
        Tab::Blog => view! { <Blog content=content/> }.into_any(),
        Tab::Contact => view! { <Contact/> }.into_any(),
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
