//! Static site content: the data model and display helpers.
//!
//! Everything here is declarative `'static` data with no runtime mutation.
//! The only lifecycle is process startup; handlers borrow the single
//! [`SiteContent`] instance from [`data::CONTENT`].

pub mod data;

use time::Date;
use time::macros::format_description;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub label: &'static str,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateEntry {
    pub label: &'static str,
    pub datetime: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub resume_url: &'static str,
    pub status: Availability,
    pub birthday: DateEntry,
    pub avatar: &'static str,
    pub about: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Timeline entries carry either a single paragraph or a bullet list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineDetails {
    Text(&'static str),
    Bullets(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineItem {
    pub title: &'static str,
    pub org: &'static str,
    pub range: &'static str,
    pub details: TimelineDetails,
    /// Empty when not applicable.
    pub coursework: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Self-assessed proficiency, 0..=100, rendered as a progress bar.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Design,
    Dev,
    App,
    Photo,
    Data,
    Leadership,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub avatar: &'static str,
    pub date: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Client {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    WebDevelopment,
    WebDesign,
    Applications,
    Other,
}

impl ProjectCategory {
    pub const ALL: [Self; 4] = [Self::WebDevelopment, Self::WebDesign, Self::Applications, Self::Other];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web development",
            Self::WebDesign => "Web design",
            Self::Applications => "Applications",
            Self::Other => "Other",
        }
    }

    /// URL-facing identifier used by the portfolio `category` query parameter.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::WebDesign => "web-design",
            Self::Applications => "applications",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Shipped,
    Paused,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Shipped => "Shipped",
            Self::Paused => "Paused",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub category: ProjectCategory,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub links: &'static [ProjectLink],
    pub status: Option<ProjectStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
}

/// Everything the site renders, bundled for injection into handlers.
#[derive(Debug, Clone, Copy)]
pub struct SiteContent {
    pub profile: Profile,
    pub socials: &'static [SocialLink],
    pub education: &'static [TimelineItem],
    pub experience: &'static [TimelineItem],
    pub skills: &'static [Skill],
    pub services: &'static [Service],
    pub testimonials: &'static [Testimonial],
    pub clients: &'static [Client],
    pub projects: &'static [Project],
    pub blog_posts: &'static [BlogPost],
}

/// Format an ISO `YYYY-MM-DD` date for display, e.g. "Feb 23, 2025".
/// Falls back to the raw string when it does not parse.
#[must_use]
pub fn display_date(iso: &str) -> String {
    let input = format_description!("[year]-[month]-[day]");
    let Ok(date) = Date::parse(iso, input) else {
        return iso.to_owned();
    };
    let output = format_description!("[month repr:short] [day padding:none], [year]");
    date.format(output).unwrap_or_else(|_| iso.to_owned())
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
