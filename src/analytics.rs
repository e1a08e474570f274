//! Click-tracking events for outbound contact links.
//!
//! Tracking is optional: pages without an analytics global simply drop the
//! events.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

const ENGAGEMENT: &str = "engagement";

/// A named analytics event with its flat property mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub category: &'static str,
    pub label: String,
}

impl AnalyticsEvent {
    /// A click on a social profile link.
    #[must_use]
    pub fn social_click(platform: &str) -> Self {
        Self { name: "social_click", category: ENGAGEMENT, label: platform.to_owned() }
    }

    /// A click on a `mailto:` link.
    #[must_use]
    pub fn email_click() -> Self {
        Self { name: "email_click", category: ENGAGEMENT, label: "contact_email".to_owned() }
    }

    /// Property mapping as a JSON object.
    #[must_use]
    pub fn properties(&self) -> serde_json::Value {
        serde_json::json!({
            "event_category": self.category,
            "event_label": self.label,
        })
    }
}

/// Platform label for a social link: `github` when the href names it,
/// `linkedin` otherwise.
#[must_use]
pub fn social_platform(href: &str) -> &'static str {
    if href.contains("github") { "github" } else { "linkedin" }
}
