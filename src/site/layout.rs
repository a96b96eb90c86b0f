//! Document shell: metadata, analytics tags, asset includes.

use leptos::prelude::*;

use super::Tab;
use crate::config::SiteConfig;
use crate::content::SiteContent;

pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Path plus query string, appended to `SITE_URL` for the canonical link.
    pub path: String,
}

impl PageMeta {
    #[must_use]
    pub fn for_tab(content: &SiteContent, tab: Tab) -> Self {
        let title = match tab {
            Tab::About => "Portfolio".to_owned(),
            other => format!("{} | Portfolio", other.label()),
        };
        let path = match tab {
            Tab::About => "/".to_owned(),
            other => format!("/?tab={}", other.slug()),
        };
        Self { title, description: description_for(content), path }
    }

    #[must_use]
    pub fn dev(content: &SiteContent) -> Self {
        Self {
            title: "Developer Settings".to_owned(),
            description: description_for(content),
            path: "/dev".to_owned(),
        }
    }
}

fn description_for(content: &SiteContent) -> String {
    format!("Personal portfolio of {}", content.profile.name)
}

/// Assemble the full HTML document around a rendered body.
#[must_use]
pub fn page(site: &SiteConfig, meta: &PageMeta, body: AnyView) -> String {
    let canonical = site.site_url.as_ref().map(|url| {
        let href = format!("{url}{}", meta.path);
        view! { <link rel="canonical" href=href/> }.into_any()
    });

    let document = view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{meta.title.clone()}</title>
                <meta name="description" content=meta.description.clone()/>
                {canonical}
                <link rel="stylesheet" href="/assets/css/style.css"/>
                {analytics_tags(site)}
                <script src="/assets/js/site.js" defer=true></script>
            </head>
            <body class="min-h-screen">{body}</body>
        </html>
    };

    format!("<!DOCTYPE html>{}", document.to_html())
}

/// Script tags for whichever analytics providers are configured. Absent
/// identifiers mean no tag at all, not an empty placeholder.
fn analytics_tags(site: &SiteConfig) -> Vec<AnyView> {
    let mut tags = Vec::new();

    if let Some(domain) = &site.plausible_domain {
        let domain = domain.clone();
        tags.push(
            view! {
                <script defer=true data-domain=domain src="https://plausible.io/js/script.js"></script>
            }
            .into_any(),
        );
    }

    if let Some(website_id) = &site.umami_website_id {
        let website_id = website_id.clone();
        tags.push(
            view! {
                <script defer=true src="https://cloud.umami.is/script.js" data-website-id=website_id></script>
            }
            .into_any(),
        );
    }

    if let Some(measurement_id) = &site.ga_measurement_id {
        let src = format!("https://www.googletagmanager.com/gtag/js?id={measurement_id}");
        let inline = format!(
            "window.dataLayer=window.dataLayer||[];function gtag(){{dataLayer.push(arguments);}}gtag('js',new Date());gtag('config','{measurement_id}');"
        );
        tags.push(view! { <script defer=true src=src></script> }.into_any());
        tags.push(view! { <script inner_html=inline></script> }.into_any());
    }

    tags
}
