//! Configuration parsed from environment variables.

/// Presentation-level configuration. Every field is optional; absent analytics
/// identifiers simply mean no script tag is injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Public site URL used for the canonical link, without trailing slash.
    pub site_url: Option<String>,
    pub plausible_domain: Option<String>,
    pub umami_website_id: Option<String>,
    pub ga_measurement_id: Option<String>,
    /// Expose the hidden `/dev` settings page.
    pub dev_settings_enabled: bool,
    /// Show the Blog tab.
    pub blog_enabled: bool,
}

impl SiteConfig {
    /// Build site config from environment variables.
    ///
    /// Optional:
    /// - `SITE_URL`
    /// - `PLAUSIBLE_DOMAIN`, `UMAMI_WEBSITE_ID`, `GA_MEASUREMENT_ID`
    /// - `DEV_SETTINGS_ENABLED`: default false
    /// - `BLOG_ENABLED`: default true
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            site_url: non_empty(std::env::var("SITE_URL").ok())
                .map(|url| url.trim_end_matches('/').to_owned()),
            plausible_domain: non_empty(std::env::var("PLAUSIBLE_DOMAIN").ok()),
            umami_website_id: non_empty(std::env::var("UMAMI_WEBSITE_ID").ok()),
            ga_measurement_id: non_empty(std::env::var("GA_MEASUREMENT_ID").ok()),
            dev_settings_enabled: env_bool("DEV_SETTINGS_ENABLED").unwrap_or(false),
            blog_enabled: env_bool("BLOG_ENABLED").unwrap_or(true),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: None,
            plausible_domain: None,
            umami_website_id: None,
            ga_measurement_id: None,
            dev_settings_enabled: false,
            blog_enabled: true,
        }
    }
}

/// Secrets for the transactional email provider. Present only when all three
/// required variables are set and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub api_key: String,
    pub to_email: String,
    pub from_email: String,
    /// Send an acknowledgement email back to the submitter.
    pub auto_reply: bool,
}

impl ContactConfig {
    /// Required: `RESEND_API_KEY`, `CONTACT_TO_EMAIL`, `CONTACT_FROM_EMAIL`.
    /// Optional: `CONTACT_AUTO_REPLY` (default false).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var("RESEND_API_KEY").ok(),
            std::env::var("CONTACT_TO_EMAIL").ok(),
            std::env::var("CONTACT_FROM_EMAIL").ok(),
            env_bool("CONTACT_AUTO_REPLY").unwrap_or(false),
        )
    }

    #[must_use]
    pub fn from_vars(
        api_key: Option<String>,
        to_email: Option<String>,
        from_email: Option<String>,
        auto_reply: bool,
    ) -> Option<Self> {
        Some(Self {
            api_key: non_empty(api_key)?,
            to_email: non_empty(to_email)?,
            from_email: non_empty(from_email)?,
            auto_reply,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
