//! Browser bridge.
//!
//! The webview reports window-level events (scroll, resize, media queries,
//! load progress, uncaught errors) over a single long-lived eval channel.
//! Each message is a tagged JSON object decoded into [`BrowserEvent`] and
//! applied to the coordinator. Effects travel the other way as short
//! scripts built by [`effect_script`].

use chrono::Utc;
use revanarc_core::effects::ElementRect;
use revanarc_core::{
    analytics, Effect, ElementBox, Millis, PageEnvironment, Resource, SiteCoordinator,
};
use serde::Deserialize;

/// Installed once at startup. Sends with `dioxus.send` and never returns.
pub const BRIDGE_JS: &str = r#"
const send = (msg) => dioxus.send(msg);

send({ kind: "env", user_agent: navigator.userAgent, url: location.href });
send({ kind: "start", width: innerWidth, height: innerHeight });

const boxes = (selector, attr) => Array.from(document.querySelectorAll(selector))
  .map((el) => {
    const r = el.getBoundingClientRect();
    return { id: attr ? el.getAttribute(attr) : el.id, top: r.top + scrollY, height: r.height };
  })
  .filter((b) => b.id);

const geometry = () => send({
  kind: "geometry",
  sections: boxes("section[id]", null),
  reveal: boxes("[data-reveal]", "data-reveal"),
  tracked: boxes("[data-track]", "data-track"),
});

addEventListener("scroll", () => send({ kind: "scroll", y: scrollY }), { passive: true });
addEventListener("resize", () => send({ kind: "resize", width: innerWidth, height: innerHeight }));
new ResizeObserver(geometry).observe(document.body);
geometry();

addEventListener("keydown", (e) => {
  if (e.target.matches && e.target.matches("input, textarea, select")) return;
  send({ kind: "key", key: e.key, ctrl: e.ctrlKey || e.metaKey, alt: e.altKey });
});

document.addEventListener("mouseenter", (e) => {
  const el = e.target;
  if (!el.dataset || !el.dataset.ripple) return;
  const r = el.getBoundingClientRect();
  send({
    kind: "pointer",
    element: el.dataset.ripple,
    rect: { left: r.left, top: r.top, width: r.width, height: r.height },
    x: e.clientX,
    y: e.clientY,
  });
}, true);

document.addEventListener("click", (e) => {
  const el = e.target.closest && e.target.closest(".cta-button, .card-button, .nav-link");
  if (el) send({ kind: "click", class: el.className, text: (el.textContent || "").trim() });
}, true);

const motion = matchMedia("(prefers-reduced-motion: reduce)");
send({ kind: "reduced_motion", reduced: motion.matches });
motion.addEventListener("change", (e) => send({ kind: "reduced_motion", reduced: e.matches }));

const scheme = matchMedia("(prefers-color-scheme: dark)");
scheme.addEventListener("change", (e) => send({ kind: "color_scheme", dark: e.matches }));

addEventListener("error", (e) => send({
  kind: "error",
  message: e.message || null,
  stack: (e.error && e.error.stack) || null,
}));
addEventListener("unhandledrejection", (e) => send({
  kind: "error",
  message: String(e.reason),
  stack: (e.reason && e.reason.stack) || null,
}));

const ready = (resource) => send({ kind: "ready", resource });
if (document.readyState === "loading") {
  document.addEventListener("DOMContentLoaded", () => ready("dom"));
} else {
  ready("dom");
}
Promise.all(Array.from(document.images).map((img) => img.complete
  ? Promise.resolve()
  : new Promise((res) => {
      img.addEventListener("load", res, { once: true });
      img.addEventListener("error", res, { once: true });
    })))
  .then(() => ready("images"));
(document.fonts ? document.fonts.ready : Promise.resolve())
  .then(() => ready("fonts"))
  .catch((err) => send({ kind: "failed", reason: String(err) }));

await new Promise(() => {});
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceName {
    Dom,
    Images,
    Fonts,
}

impl From<ResourceName> for Resource {
    fn from(name: ResourceName) -> Self {
        match name {
            ResourceName::Dom => Resource::Dom,
            ResourceName::Images => Resource::Images,
            ResourceName::Fonts => Resource::Fonts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoxMessage {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl From<BoxMessage> for ElementBox {
    fn from(b: BoxMessage) -> Self {
        ElementBox::new(b.id, b.top, b.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RectMessage {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl From<RectMessage> for ElementRect {
    fn from(r: RectMessage) -> Self {
        ElementRect {
            left: r.left,
            top: r.top,
            width: r.width,
            height: r.height,
        }
    }
}

/// One message from the webview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrowserEvent {
    Env {
        user_agent: String,
        url: String,
    },
    Start {
        width: f64,
        height: f64,
    },
    Ready {
        resource: ResourceName,
    },
    Failed {
        reason: String,
    },
    Scroll {
        y: f64,
    },
    Resize {
        width: f64,
        height: f64,
    },
    Geometry {
        #[serde(default)]
        sections: Vec<BoxMessage>,
        #[serde(default)]
        reveal: Vec<BoxMessage>,
        #[serde(default)]
        tracked: Vec<BoxMessage>,
    },
    Pointer {
        element: String,
        rect: RectMessage,
        x: f64,
        y: f64,
    },
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
    },
    ReducedMotion {
        reduced: bool,
    },
    ColorScheme {
        dark: bool,
    },
    Click {
        class: String,
        #[serde(default)]
        text: String,
    },
    Error {
        message: Option<String>,
        stack: Option<String>,
    },
}

/// Apply one bridge message to the coordinator.
pub fn apply(site: &mut SiteCoordinator, env: &mut PageEnvironment, event: BrowserEvent, now: Millis) {
    match event {
        BrowserEvent::Env { user_agent, url } => {
            analytics::track_page_view(&url, &user_agent);
            *env = PageEnvironment { user_agent, url };
        }
        BrowserEvent::Start { width, height } => site.start(width, height, now),
        BrowserEvent::Ready { resource } => site.resource_ready(resource.into(), now),
        BrowserEvent::Failed { reason } => site.resource_failed(&reason, now),
        BrowserEvent::Scroll { y } => {
            site.on_scroll(y);
        }
        BrowserEvent::Resize { width, height } => site.on_resize(width, height, now),
        BrowserEvent::Geometry {
            sections,
            reveal,
            tracked,
        } => {
            site.set_sections(sections.into_iter().map(Into::into).collect());
            site.set_reveal_targets(reveal.into_iter().map(Into::into).collect());
            site.set_tracked_targets(tracked.into_iter().map(Into::into).collect());
        }
        BrowserEvent::Pointer { element, rect, x, y } => {
            site.pointer_enter(&element, rect.into(), x, y, now)
        }
        BrowserEvent::Key { key, ctrl, alt } => {
            site.key_down(&key, ctrl, alt);
        }
        BrowserEvent::ReducedMotion { reduced } => site.set_reduced_motion(reduced),
        BrowserEvent::ColorScheme { dark } => site.system_scheme_changed(dark),
        BrowserEvent::Click { class, text } => {
            analytics::track_click(&class, &text);
        }
        BrowserEvent::Error { message, stack } => {
            site.report_error(message.as_deref(), stack.as_deref(), env, Utc::now())
        }
    }
}

/// Script carrying out an effect in the webview. `None` for effects that
/// are rendered from state instead.
pub fn effect_script(effect: &Effect) -> Option<String> {
    match effect {
        Effect::OpenUrl { url } => {
            let url = serde_json::to_string(url).ok()?;
            Some(format!("window.open({}, '_blank', 'noopener');", url))
        }
        Effect::ScrollTo { top, smooth } => Some(format!(
            "window.scrollTo({{ top: {}, behavior: '{}' }});",
            top,
            if *smooth { "smooth" } else { "auto" }
        )),
        Effect::SetThemeColor(color) => Some(format!(
            "document.querySelector('meta[name=\"theme-color\"]')?.setAttribute('content', '{}');",
            color
        )),
        Effect::ShowReloadPrompt => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use revanarc_core::{ProjectCatalog, SiteConfig};

    fn site() -> SiteCoordinator {
        SiteCoordinator::with_rng(
            SiteConfig::default(),
            ProjectCatalog::builtin(),
            StdRng::seed_from_u64(3),
        )
    }

    fn parse(json: &str) -> BrowserEvent {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn decodes_tagged_messages() {
        assert_eq!(parse(r#"{"kind":"scroll","y":120.5}"#), BrowserEvent::Scroll { y: 120.5 });
        assert_eq!(
            parse(r#"{"kind":"ready","resource":"fonts"}"#),
            BrowserEvent::Ready { resource: ResourceName::Fonts }
        );
        assert_eq!(
            parse(r#"{"kind":"key","key":"h"}"#),
            BrowserEvent::Key { key: "h".into(), ctrl: false, alt: false }
        );
        assert_eq!(
            parse(r#"{"kind":"error","message":null,"stack":null}"#),
            BrowserEvent::Error { message: None, stack: None }
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(serde_json::from_str::<BrowserEvent>(r#"{"kind":"teleport"}"#).is_err());
    }

    #[test]
    fn geometry_feeds_navigation() {
        let mut site = site();
        let mut env = PageEnvironment::default();
        apply(&mut site, &mut env, parse(r#"{"kind":"start","width":1280,"height":800}"#), 0);
        apply(
            &mut site,
            &mut env,
            parse(r#"{"kind":"geometry","sections":[{"id":"home","top":0,"height":900}]}"#),
            0,
        );
        assert!(site.on_frame());
        assert!(site.navigation().is_link_active("#home"));
    }

    #[test]
    fn readiness_messages_complete_loading() {
        let mut site = site();
        let mut env = PageEnvironment::default();
        for r in ["dom", "images", "fonts"] {
            let msg = format!(r#"{{"kind":"ready","resource":"{}"}}"#, r);
            apply(&mut site, &mut env, parse(&msg), 0);
        }
        site.tick(1000);
        assert!(site.bootstrap().is_loaded());
    }

    #[test]
    fn env_is_recorded() {
        let mut site = site();
        let mut env = PageEnvironment::default();
        apply(
            &mut site,
            &mut env,
            parse(r#"{"kind":"env","user_agent":"WebKit","url":"revanarc://index"}"#),
            0,
        );
        assert_eq!(env.user_agent, "WebKit");
    }

    #[test]
    fn effect_scripts() {
        let open = effect_script(&Effect::OpenUrl { url: "https://github.com/RevanArc/hk47".into() });
        assert_eq!(
            open.as_deref(),
            Some("window.open(\"https://github.com/RevanArc/hk47\", '_blank', 'noopener');")
        );
        let scroll = effect_script(&Effect::ScrollTo { top: 1520.0, smooth: false });
        assert_eq!(
            scroll.as_deref(),
            Some("window.scrollTo({ top: 1520, behavior: 'auto' });")
        );
        assert!(effect_script(&Effect::ShowReloadPrompt).is_none());
    }
}
