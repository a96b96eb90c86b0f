//! Portfolio section: category filter links and project cards.
//!
//! Filtering is server-side: each filter is a link carrying the `category`
//! query parameter, so the section works without any client script.

use leptos::prelude::*;

use crate::content::{Project, ProjectCategory, ProjectStatus, SiteContent};
use crate::site::PortfolioFilter;

#[component]
pub fn Portfolio(content: &'static SiteContent, filter: PortfolioFilter) -> impl IntoView {
    view! {
        <header>
            <h2 class="h2 article-title">"Portfolio"</h2>
        </header>

        <section class="projects">
            <ul class="filter-list">
                <FilterLink current=filter target=PortfolioFilter::All/>
                {ProjectCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <FilterLink current=filter target=PortfolioFilter::Category(category)/>
                        }
                    })
                    .collect_view()}
            </ul>

            <ul class="project-list">
                {content
                    .projects
                    .iter()
                    .filter(|project| filter.matches(project.category))
                    .map(|project| view! { <ProjectCard project=project/> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn FilterLink(current: PortfolioFilter, target: PortfolioFilter) -> impl IntoView {
    let href = match target {
        PortfolioFilter::All => "/?tab=portfolio".to_owned(),
        PortfolioFilter::Category(category) => {
            format!("/?tab=portfolio&category={}", category.slug())
        }
    };
    let class = if current == target { "filter-btn active" } else { "filter-btn" };

    view! {
        <li class="filter-item">
            <a class=class href=href>{target.label()}</a>
        </li>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let status = project.status.map(|status| {
        let class = format!("project-status project-status--{}", status_slug(status));
        view! { <span class=class>{status.label()}</span> }.into_any()
    });
    let links = (!project.links.is_empty()).then(|| {
        view! {
            <ul class="project-links">
                {project
                    .links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href target="_blank" rel="noreferrer">{link.label}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    });

    view! {
        <li class="project-item active" data-category=project.category.slug()>
            <figure class="project-img">
                <img src=project.image alt=project.title loading="lazy"/>
            </figure>
            <h3 class="project-title">{project.title}</h3>
            <p class="project-category">{project.category.label()}</p>
            <p class="project-description">{project.description}</p>
            <ul class="project-tech">
                {project
                    .tech
                    .iter()
                    .map(|tech| view! { <li class="project-tech-item">{*tech}</li> })
                    .collect_view()}
            </ul>
            {status}
            {links}
        </li>
    }
}

fn status_slug(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::InProgress => "in-progress",
        ProjectStatus::Shipped => "shipped",
        ProjectStatus::Paused => "paused",
    }
}
