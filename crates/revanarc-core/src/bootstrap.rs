//! Page bootstrap: load sequencing, welcome animation, error trapping,
//! theme metadata and toast notifications.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::types::{Millis, ThemeMode};

/// Resources the loading screen waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Dom,
    Images,
    Fonts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    /// Loading screen is fading out
    Fading,
    Ready,
}

/// Hero elements revealed one after another once the app is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WelcomeStep {
    Emblem,
    Title,
    Description,
    Actions,
}

impl WelcomeStep {
    pub const ALL: [WelcomeStep; 4] = [
        WelcomeStep::Emblem,
        WelcomeStep::Title,
        WelcomeStep::Description,
        WelcomeStep::Actions,
    ];

    /// Delay after app-ready before this element animates in
    pub fn delay_ms(&self) -> Millis {
        match self {
            WelcomeStep::Emblem => 200,
            WelcomeStep::Title => 600,
            WelcomeStep::Description => 1000,
            WelcomeStep::Actions => 1400,
        }
    }
}

/// Where the page is running, attached to diagnostic records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageEnvironment {
    pub user_agent: String,
    pub url: String,
}

/// Everything known about an uncaught page error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    pub message: String,
    pub stack: String,
    pub timestamp: String,
    pub user_agent: String,
    pub url: String,
}

impl DiagnosticRecord {
    pub fn new(
        message: Option<&str>,
        stack: Option<&str>,
        env: &PageEnvironment,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or("Unknown error")
                .to_string(),
            stack: stack
                .filter(|s| !s.is_empty())
                .unwrap_or("No stack trace")
                .to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: env.user_agent.clone(),
            url: env.url.clone(),
        }
    }
}

pub const RELOAD_PROMPT: &str = "Something went wrong while loading. Please refresh the page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Info => "notification notification-info",
            NoticeKind::Success => "notification notification-success",
            NoticeKind::Warning => "notification notification-warning",
            NoticeKind::Error => "notification notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
    pub expires_at: Millis,
}

#[derive(Debug, Clone, Default)]
pub struct Bootstrap {
    phase: LoadPhase,
    dom: bool,
    images: bool,
    fonts: bool,
    welcome: Vec<WelcomeStep>,
    reload_prompt: bool,
    theme: ThemeMode,
    notices: Vec<Notice>,
    next_notice: u64,
    last_updated: Option<DateTime<Utc>>,
}

impl Bootstrap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Record that a resource finished. Returns true when this completes
    /// the set and the loading screen should start fading.
    pub fn resource_ready(&mut self, resource: Resource) -> bool {
        match resource {
            Resource::Dom => self.dom = true,
            Resource::Images => self.images = true,
            Resource::Fonts => self.fonts = true,
        }
        if self.phase == LoadPhase::Loading && self.dom && self.images && self.fonts {
            self.phase = LoadPhase::Fading;
            tracing::debug!("All resources ready, fading loading screen");
            return true;
        }
        false
    }

    /// A resource failed to load. The site is shown anyway.
    pub fn resource_failed(&mut self, reason: &str) -> bool {
        tracing::error!(%reason, "Loading error");
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Fading;
            return true;
        }
        false
    }

    /// The fade finished. Returns true on the Fading -> Ready transition.
    pub fn finish_fade(&mut self) -> bool {
        if self.phase != LoadPhase::Fading {
            return false;
        }
        self.phase = LoadPhase::Ready;
        tracing::info!("App ready");
        true
    }

    pub fn reveal(&mut self, step: WelcomeStep) {
        if !self.welcome.contains(&step) {
            self.welcome.push(step);
        }
    }

    pub fn is_revealed(&self, step: WelcomeStep) -> bool {
        self.welcome.contains(&step)
    }

    /// Log an uncaught error. Returns true if the reload prompt should be
    /// shown: only before loading completes, and only once.
    pub fn report_error(&mut self, record: &DiagnosticRecord) -> bool {
        match serde_json::to_string(record) {
            Ok(json) => tracing::error!(record = %json, "Page error"),
            Err(_) => tracing::error!(message = %record.message, "Page error"),
        }
        if self.is_loaded() || self.reload_prompt {
            return false;
        }
        self.reload_prompt = true;
        true
    }

    pub fn reload_prompt(&self) -> bool {
        self.reload_prompt
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Returns true when the mode actually changed.
    pub fn switch_mode(&mut self, mode: ThemeMode) -> bool {
        if self.theme == mode {
            return false;
        }
        self.theme = mode;
        tracing::info!(?mode, color = mode.theme_color(), "Theme mode changed");
        true
    }

    pub fn system_scheme_changed(&self, dark: bool) {
        tracing::info!(dark, "System theme changed");
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind, now: Millis, duration: Millis) -> u64 {
        let id = self.next_notice;
        self.next_notice += 1;
        self.notices.push(Notice {
            id,
            message: message.into(),
            kind,
            expires_at: now.saturating_add(duration),
        });
        id
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss_notices(&mut self) {
        self.notices.clear();
    }

    pub fn prune_notices(&mut self, now: Millis) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| n.expires_at > now);
        before - self.notices.len()
    }

    pub fn touch_last_updated(&mut self, at: DateTime<Utc>) {
        self.last_updated = Some(at);
    }

    pub fn last_updated_label(&self) -> Option<String> {
        self.last_updated
            .map(|at| format!("Last updated: {}", at.format("%H:%M:%S")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(msg: Option<&str>) -> DiagnosticRecord {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        DiagnosticRecord::new(msg, None, &PageEnvironment::default(), at)
    }

    #[test]
    fn waits_for_all_resources() {
        let mut b = Bootstrap::new();
        assert!(!b.resource_ready(Resource::Dom));
        assert!(!b.resource_ready(Resource::Fonts));
        assert!(b.resource_ready(Resource::Images));
        assert_eq!(b.phase(), LoadPhase::Fading);
        assert!(!b.resource_ready(Resource::Images));
        assert!(b.finish_fade());
        assert!(!b.finish_fade());
        assert!(b.is_loaded());
    }

    #[test]
    fn failure_still_reveals_site() {
        let mut b = Bootstrap::new();
        assert!(b.resource_failed("font timeout"));
        assert!(b.finish_fade());
    }

    #[test]
    fn reload_prompt_once_and_only_while_loading() {
        let mut b = Bootstrap::new();
        assert!(b.report_error(&record(Some("boom"))));
        assert!(!b.report_error(&record(Some("again"))));

        let mut loaded = Bootstrap::new();
        loaded.resource_failed("x");
        loaded.finish_fade();
        assert!(!loaded.report_error(&record(None)));
        assert!(!loaded.reload_prompt());
    }

    #[test]
    fn diagnostic_defaults() {
        let r = record(None);
        assert_eq!(r.message, "Unknown error");
        assert_eq!(r.stack, "No stack trace");
        assert_eq!(r.timestamp, "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn theme_switch_reports_changes() {
        let mut b = Bootstrap::new();
        assert!(!b.switch_mode(ThemeMode::Blue));
        assert!(b.switch_mode(ThemeMode::Red));
        assert_eq!(b.theme().theme_color(), "#e04848");
    }

    #[test]
    fn notices_expire() {
        let mut b = Bootstrap::new();
        b.notify("Saved", NoticeKind::Success, 0, 3000);
        b.notify("Hi", NoticeKind::Info, 1000, 3000);
        assert_eq!(b.prune_notices(2999), 0);
        assert_eq!(b.prune_notices(3000), 1);
        assert_eq!(b.notices()[0].message, "Hi");
    }

    #[test]
    fn welcome_steps_are_staggered() {
        let delays: Vec<Millis> = WelcomeStep::ALL.iter().map(|s| s.delay_ms()).collect();
        assert_eq!(delays, vec![200, 600, 1000, 1400]);
    }
}
