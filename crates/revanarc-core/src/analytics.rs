//! Privacy-minded interaction tracking.
//!
//! Nothing leaves the process: events are structured log lines under the
//! `revanarc_core::analytics` target.

const USER_AGENT_LIMIT: usize = 50;
const TEXT_LIMIT: usize = 30;

/// Classes whose clicks are worth recording.
pub const TRACKED_CLASSES: &[&str] = &["cta-button", "card-button", "nav-link"];

fn truncate(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

pub fn track_page_view(path: &str, user_agent: &str) {
    tracing::info!(
        target: "revanarc_core::analytics",
        path,
        user_agent = truncate(user_agent, USER_AGENT_LIMIT),
        "Page view"
    );
}

/// Record a click if the element carries one of the tracked classes.
pub fn track_click(class: &str, text: &str) -> bool {
    if !class.split_whitespace().any(|c| TRACKED_CLASSES.contains(&c)) {
        return false;
    }
    tracing::info!(
        target: "revanarc_core::analytics",
        element = class,
        text = truncate(text, TEXT_LIMIT),
        "Interaction"
    );
    true
}

pub fn track_project_view(project: &str) {
    tracing::info!(target: "revanarc_core::analytics", project, "Project viewed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn only_tracked_classes_count() {
        assert!(track_click("nav-link active", "Projects"));
        assert!(!track_click("filter-btn", "All"));
    }
}
