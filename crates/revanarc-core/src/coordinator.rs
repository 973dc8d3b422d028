//! The view-state coordinator.
//!
//! `SiteCoordinator` owns every controller, the timer queue and the signal
//! bus. The UI layer forwards raw events into it (scroll, resize, pointer,
//! click, timer ticks) and drains the outbound [`Effect`]s it produces.
//! Every method runs to completion before the next event is handled.
//!
//! ```text
//!  browser events ──► SiteCoordinator ──► Effect queue ──► UI adapter
//!                         │     ▲
//!                         ▼     │ tick(now)
//!                     SignalBus TimerQueue
//! ```

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analytics;
use crate::bootstrap::{Bootstrap, DiagnosticRecord, NoticeKind, PageEnvironment, Resource, WelcomeStep};
use crate::catalog::{CardRef, ProjectCatalog};
use crate::config::SiteConfig;
use crate::effects::{generate_starfield, ElementRect, Emblem, ParticleField, Ripples, StarLayer};
use crate::filter::{ProjectFilter, RepoRequest, VisibilitySet};
use crate::motion::MotionPreference;
use crate::navigation::{NavigationController, Shortcut};
use crate::scheduler::TimerQueue;
use crate::signals::{SignalBus, SiteSignal, SubscriptionId};
use crate::stage::{builtin_stages, Constellation};
use crate::types::{Millis, ProjectId, StageId, ThemeMode};
use crate::viewport::{parallax_offset, Debouncer, ElementBox, FrameCoalescer, Viewport, VisibilityTracker};

/// Connection lines drawn between constellation nodes.
pub const CONSTELLATION_EDGES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TimerKey {
    LoadingFade,
    Welcome(WelcomeStep),
    StageAutoSelect,
    StageEntry,
    RepoOpen(ProjectId),
    ComingSoon(ProjectId),
    LastUpdated,
}

/// Side effects the UI adapter must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Open an external URL in a new browsing context
    OpenUrl { url: String },
    /// Scroll the window to a document offset
    ScrollTo { top: f64, smooth: bool },
    /// Show the generic "please reload" overlay
    ShowReloadPrompt,
    /// Update `<meta name="theme-color">`
    SetThemeColor(&'static str),
}

#[derive(Debug)]
pub struct SiteCoordinator {
    config: SiteConfig,
    projects: ProjectFilter,
    nav: NavigationController,
    constellation: Constellation,
    motion: MotionPreference,
    bootstrap: Bootstrap,
    emblem: Emblem,
    ripples: Ripples,
    particles: ParticleField,
    starfield: Vec<StarLayer>,
    reveal: VisibilityTracker,
    in_viewport: VisibilityTracker,
    reveal_targets: Vec<ElementBox>,
    tracked_targets: Vec<ElementBox>,
    viewport: Viewport,
    scroll: FrameCoalescer,
    geometry_dirty: bool,
    resize: Debouncer<(f64, f64)>,
    layout_evaluations: u64,
    parallax: f64,
    timers: TimerQueue<TimerKey>,
    bus: SignalBus,
    effects: Vec<Effect>,
    rng: StdRng,
}

impl SiteCoordinator {
    pub fn new(config: SiteConfig, catalog: ProjectCatalog) -> Self {
        Self::with_rng(config, catalog, StdRng::from_os_rng())
    }

    /// Build with a specific RNG (seeded in tests).
    pub fn with_rng(config: SiteConfig, catalog: ProjectCatalog, mut rng: StdRng) -> Self {
        let stages = builtin_stages().into_iter().map(|s| s.id).collect();
        let starfield = generate_starfield(&mut rng, config.star_layers);
        Self {
            projects: ProjectFilter::new(catalog),
            nav: NavigationController::new(config.header_offset, config.mobile_breakpoint),
            constellation: Constellation::new(stages, CONSTELLATION_EDGES),
            motion: MotionPreference::default(),
            bootstrap: Bootstrap::new(),
            emblem: Emblem::default(),
            ripples: Ripples::new(),
            particles: ParticleField::new(config.particle_count),
            starfield,
            reveal: VisibilityTracker::new(config.reveal_bottom_margin, config.reveal_threshold),
            in_viewport: VisibilityTracker::new(0.0, 0.0),
            reveal_targets: Vec::new(),
            tracked_targets: Vec::new(),
            viewport: Viewport::default(),
            scroll: FrameCoalescer::default(),
            geometry_dirty: false,
            resize: Debouncer::new(config.resize_quiet_ms),
            layout_evaluations: 0,
            parallax: 0.0,
            timers: TimerQueue::new(),
            bus: SignalBus::new(),
            effects: Vec::new(),
            rng,
            config,
        }
    }

    // ------------------------------------------------------------------
    // Read access for rendering
    // ------------------------------------------------------------------

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn projects(&self) -> &ProjectFilter {
        &self.projects
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    pub fn bootstrap(&self) -> &Bootstrap {
        &self.bootstrap
    }

    pub fn emblem(&self) -> &Emblem {
        &self.emblem
    }

    pub fn ripples(&self) -> &Ripples {
        &self.ripples
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn starfield(&self) -> &[StarLayer] {
        &self.starfield
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current starfield translation in px
    pub fn parallax(&self) -> f64 {
        self.parallax
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.reveal.is_visible(id)
    }

    pub fn is_in_viewport(&self, id: &str) -> bool {
        self.in_viewport.is_visible(id)
    }

    /// How many times the layout mode has been evaluated
    pub fn layout_evaluations(&self) -> u64 {
        self.layout_evaluations
    }

    // ------------------------------------------------------------------
    // Signals and effects
    // ------------------------------------------------------------------

    pub fn subscribe(&mut self, listener: impl FnMut(&SiteSignal) + 'static) -> SubscriptionId {
        self.bus.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Whether the next animation frame has work to do.
    pub fn frame_pending(&self) -> bool {
        self.scroll.is_pending() || self.geometry_dirty
    }

    /// Earliest moment at which `tick` has pending work.
    pub fn next_wakeup(&self) -> Option<Millis> {
        [
            self.timers.next_deadline(),
            self.resize.deadline(),
            self.particles.next_expiry(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Initial layout from the first known viewport size.
    pub fn start(&mut self, width: f64, height: f64, now: Millis) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.evaluate_layout(width);
        self.particles.populate(&mut self.rng, width, now);
        self.geometry_dirty = true;
        tracing::debug!(width, height, "Coordinator started");
    }

    pub fn resource_ready(&mut self, resource: Resource, now: Millis) {
        if self.bootstrap.resource_ready(resource) {
            self.timers.schedule(TimerKey::LoadingFade, now, self.config.loading_fade_ms);
        }
    }

    pub fn resource_failed(&mut self, reason: &str, now: Millis) {
        if self.bootstrap.resource_failed(reason) {
            self.timers.schedule(TimerKey::LoadingFade, now, self.config.loading_fade_ms);
        }
    }

    fn on_app_ready(&mut self, now: Millis) {
        self.bus.emit(SiteSignal::AppReady);
        for step in WelcomeStep::ALL {
            self.timers.schedule(TimerKey::Welcome(step), now, step.delay_ms());
        }
        if !self.constellation.auto_select_spent() {
            self.timers
                .schedule(TimerKey::StageAutoSelect, now, self.config.stage_auto_select_ms);
        }
        self.bootstrap.touch_last_updated(Utc::now());
        self.timers
            .schedule(TimerKey::LastUpdated, now, self.config.last_updated_interval_ms);
    }

    /// Advance time: settle debounces, fire due timers, prune effects.
    pub fn tick(&mut self, now: Millis) {
        if let Some((width, height)) = self.resize.poll(now) {
            self.viewport.width = width;
            self.viewport.height = height;
            self.evaluate_layout(width);
            self.geometry_dirty = true;
        }

        for key in self.timers.take_due(now) {
            self.fire(key, now);
        }

        self.emblem.tick(now);
        self.ripples.prune(now);
        self.particles.renew(&mut self.rng, self.viewport.width, now);
        self.bootstrap.prune_notices(now);
    }

    fn fire(&mut self, key: TimerKey, now: Millis) {
        match key {
            TimerKey::LoadingFade => {
                if self.bootstrap.finish_fade() {
                    self.on_app_ready(now);
                }
            }
            TimerKey::Welcome(step) => self.bootstrap.reveal(step),
            TimerKey::StageAutoSelect => {
                if let Some(stage) = self.constellation.auto_select() {
                    self.after_stage_selected(stage, now);
                }
            }
            TimerKey::StageEntry => self.constellation.settle_entry(),
            TimerKey::RepoOpen(project) => {
                if let Some(url) = self.projects.finish_open(&project) {
                    tracing::info!(%project, %url, "Opening repository");
                    self.effects.push(Effect::OpenUrl { url });
                }
            }
            TimerKey::ComingSoon(card) => self.projects.clear_coming_soon(&card),
            TimerKey::LastUpdated => {
                self.bootstrap.touch_last_updated(Utc::now());
                self.timers
                    .schedule(TimerKey::LastUpdated, now, self.config.last_updated_interval_ms);
            }
        }
    }

    // ------------------------------------------------------------------
    // Viewport
    // ------------------------------------------------------------------

    /// Replace the tracked section geometry (document order).
    pub fn set_sections(&mut self, sections: Vec<ElementBox>) {
        self.nav.set_sections(sections);
        self.geometry_dirty = true;
    }

    /// Elements that fade in when scrolled into view.
    pub fn set_reveal_targets(&mut self, targets: Vec<ElementBox>) {
        self.reveal_targets = targets;
        self.geometry_dirty = true;
    }

    /// Elements whose decorative animations pause off-screen.
    pub fn set_tracked_targets(&mut self, targets: Vec<ElementBox>) {
        self.tracked_targets = targets;
        self.geometry_dirty = true;
    }

    /// Record a scroll sample. Returns true if the caller should request an
    /// animation frame (first sample since the last frame).
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.scroll.push(offset)
    }

    /// Animation frame callback: apply the latest scroll sample once.
    /// Returns true if any derived state was recomputed.
    pub fn on_frame(&mut self) -> bool {
        let sample = self.scroll.take();
        if sample.is_none() && !self.geometry_dirty {
            return false;
        }
        self.geometry_dirty = false;

        if let Some(offset) = sample {
            self.viewport.scroll_y = offset.max(0.0);
            if let Some(direction) = self.nav.record_scroll(offset) {
                self.bus.emit(SiteSignal::ScrollDirectionChanged(direction));
            }
        }

        if let Some(active) = self.nav.update_active(&self.viewport) {
            self.bus.emit(SiteSignal::ActiveSectionChanged(active));
        }
        self.parallax = parallax_offset(self.viewport.scroll_y, self.config.parallax_factor);
        self.reveal.update(&self.viewport, &self.reveal_targets);
        self.in_viewport.update(&self.viewport, &self.tracked_targets);
        true
    }

    /// Record a resize. Layout is recomputed once the quiet period passes.
    pub fn on_resize(&mut self, width: f64, height: f64, now: Millis) {
        self.resize.push((width, height), now);
    }

    fn evaluate_layout(&mut self, width: f64) {
        self.layout_evaluations += 1;
        if let Some(layout) = self.nav.apply_width(width) {
            self.bus.emit(SiteSignal::LayoutChanged(layout));
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Smooth-scroll to an in-page anchor. Unknown anchors do nothing.
    pub fn navigate_to(&mut self, anchor: &str) -> bool {
        let Some(top) = self.nav.scroll_target(anchor) else {
            tracing::debug!(%anchor, "Unknown anchor");
            return false;
        };
        self.nav.close_menu();
        self.effects.push(Effect::ScrollTo {
            top,
            smooth: self.motion.animations_enabled(),
        });
        true
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    /// Global key handler. Returns true if the key was consumed.
    pub fn key_down(&mut self, key: &str, ctrl: bool, alt: bool) -> bool {
        match Shortcut::for_key(key, ctrl, alt) {
            Some(Shortcut::Jump(section)) => self.navigate_to(section),
            Some(Shortcut::Dismiss) => {
                self.nav.close_menu();
                self.bootstrap.dismiss_notices();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    pub fn select_filter(&mut self, tag: &str) -> &VisibilitySet {
        self.projects.select_filter(tag);
        self.bus.emit(SiteSignal::FilterChanged {
            filter: self.projects.filter().clone(),
            visible: self.projects.visible().len(),
        });
        self.projects.visible()
    }

    pub fn open_repository(&mut self, card: &CardRef, now: Millis) {
        match self.projects.open_repository(card) {
            RepoRequest::Opening { project, .. } => {
                self.timers
                    .schedule(TimerKey::RepoOpen(project), now, self.config.repo_open_delay_ms);
            }
            RepoRequest::ComingSoon { card } => {
                self.timers
                    .schedule(TimerKey::ComingSoon(card), now, self.config.coming_soon_ms);
            }
            RepoRequest::Ignored => {}
        }
    }

    /// A click on the card body (not its button) behaves like the button.
    pub fn click_card(&mut self, card: &CardRef, now: Millis) {
        analytics::track_project_view(card.resolve_id().as_str());
        self.open_repository(card, now);
    }

    // ------------------------------------------------------------------
    // Constellation
    // ------------------------------------------------------------------

    pub fn select_stage(&mut self, stage: &StageId, now: Millis) -> bool {
        match self.constellation.select(stage) {
            Some(stage) => {
                self.timers.cancel(&TimerKey::StageAutoSelect);
                self.after_stage_selected(stage, now);
                true
            }
            None => false,
        }
    }

    fn after_stage_selected(&mut self, stage: StageId, now: Millis) {
        self.timers
            .schedule(TimerKey::StageEntry, now, self.config.stage_entry_ms);
        self.bus.emit(SiteSignal::StageChanged(stage));
    }

    pub fn hover_node(&mut self, index: usize) {
        self.constellation.hover_enter(index);
    }

    pub fn leave_node(&mut self) {
        self.constellation.hover_leave();
    }

    // ------------------------------------------------------------------
    // Decorative effects
    // ------------------------------------------------------------------

    pub fn emblem_enter(&mut self) {
        self.emblem.enter();
    }

    pub fn emblem_leave(&mut self, now: Millis) {
        self.emblem
            .leave(now, self.motion.scale(self.config.emblem_release_ms));
    }

    /// Pointer entered an interactive element: spawn a ripple.
    pub fn pointer_enter(&mut self, element: &str, rect: ElementRect, x: f64, y: f64, now: Millis) {
        let duration = self.motion.scale(self.config.ripple_ms);
        self.ripples.spawn(element, rect, x, y, now, duration);
    }

    // ------------------------------------------------------------------
    // Environment
    // ------------------------------------------------------------------

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if self.motion.set(reduced) {
            self.bus.emit(SiteSignal::MotionChanged { reduced });
        }
    }

    pub fn system_scheme_changed(&mut self, dark: bool) {
        self.bootstrap.system_scheme_changed(dark);
    }

    pub fn switch_mode(&mut self, mode: ThemeMode) {
        if self.bootstrap.switch_mode(mode) {
            self.effects.push(Effect::SetThemeColor(mode.theme_color()));
            self.bus.emit(SiteSignal::ModeChanged(mode));
        }
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.bootstrap.theme() {
            ThemeMode::Blue => ThemeMode::Red,
            ThemeMode::Red => ThemeMode::Blue,
        };
        self.switch_mode(next);
    }

    /// Funnel an uncaught page error into a diagnostic record.
    pub fn report_error(
        &mut self,
        message: Option<&str>,
        stack: Option<&str>,
        env: &PageEnvironment,
        at: DateTime<Utc>,
    ) {
        let record = DiagnosticRecord::new(message, stack, env, at);
        if self.bootstrap.report_error(&record) {
            self.effects.push(Effect::ShowReloadPrompt);
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: NoticeKind, now: Millis) -> u64 {
        self.bootstrap
            .notify(message, kind, now, self.config.notification_ms)
    }
}
