//! Resume section: education and experience timelines plus skill bars.

use leptos::prelude::*;

use crate::content::{SiteContent, TimelineDetails, TimelineItem};

#[component]
pub fn Resume(content: &'static SiteContent) -> impl IntoView {
    view! {
        <header>
            <h2 class="h2 article-title">"Resume"</h2>
        </header>

        <Timeline title="Education" section_id="education" items=content.education/>
        <Timeline title="Leadership & Activities" section_id="experience" items=content.experience/>

        <section class="skill">
            <h3 class="h3 skills-title">"My skills"</h3>
            <ul class="skills-list content-card">
                {content
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="skills-item">
                                <div class="title-wrapper">
                                    <h5 class="h5">{skill.name}</h5>
                                    <data value=skill.level.to_string()>
                                        {format!("{}%", skill.level)}
                                    </data>
                                </div>
                                <div class="skill-progress-bg">
                                    <div
                                        class="skill-progress-fill"
                                        style=format!("width: {}%;", skill.level)
                                    ></div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>

        <a class="resume-download" href=content.profile.resume_url>"Download resume"</a>
    }
}

#[component]
fn Timeline(
    title: &'static str,
    section_id: &'static str,
    items: &'static [TimelineItem],
) -> impl IntoView {
    view! {
        <section class="timeline" id=section_id>
            <div class="title-wrapper">
                <div class="icon-box">
                    <span class="icon icon--book" aria-hidden="true"></span>
                </div>
                <h3 class="h3">{title}</h3>
            </div>

            <ol class="timeline-list">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="timeline-item">
                                <h4 class="h4 timeline-item-title">{item.title}</h4>
                                <span>{item.range}</span>
                                <p class="timeline-text timeline-org">{item.org}</p>
                                {details_view(item)}
                                {coursework_view(item)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

fn details_view(item: &'static TimelineItem) -> AnyView {
    match item.details {
        TimelineDetails::Text(text) => view! { <p class="timeline-text">{text}</p> }.into_any(),
        TimelineDetails::Bullets(bullets) => view! {
            <ul class="timeline-bullets">
                {bullets.iter().map(|bullet| view! { <li>{*bullet}</li> }).collect_view()}
            </ul>
        }
        .into_any(),
    }
}

fn coursework_view(item: &'static TimelineItem) -> Option<AnyView> {
    if item.coursework.is_empty() {
        return None;
    }
    Some(
        view! {
            <p class="timeline-text coursework-inline">
                <strong class="coursework-label">"Relevant coursework: "</strong>
                <span class="coursework-courses">{item.coursework.join(" | ")}</span>
            </p>
        }
        .into_any(),
    )
}
