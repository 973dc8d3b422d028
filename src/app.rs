use std::time::Duration;

use dioxus::prelude::*;
use revanarc_core::{Effect, PageEnvironment, SiteCoordinator};

use crate::bridge::{self, BrowserEvent, BRIDGE_JS};
use crate::context::PageClock;
use crate::get_setup;
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Frame interval of the coordinator loop (~60 Hz)
const FRAME_MS: u64 = 16;

/// Application routes.
///
/// - `/` - The single-page site
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Provides global styles, the site coordinator and clock, the browser
/// bridge and the frame loop.
#[component]
pub fn App() -> Element {
    let clock = use_hook(PageClock::new);
    let mut site: Signal<SiteCoordinator> = use_signal(|| {
        let setup = get_setup();
        let mut site = SiteCoordinator::new(setup.config, setup.catalog);
        site.subscribe(|signal| tracing::debug!(?signal, "Site signal"));
        site
    });

    use_context_provider(|| site);
    use_context_provider(|| clock);

    // Browser events in
    use_future(move || async move {
        let mut channel = document::eval(BRIDGE_JS);
        let mut env = PageEnvironment::default();
        loop {
            match channel.recv::<BrowserEvent>().await {
                Ok(event) => {
                    let now = clock.now();
                    bridge::apply(&mut site.write(), &mut env, event, now);
                }
                Err(e) => {
                    tracing::warn!("Browser bridge closed: {:?}", e);
                    break;
                }
            }
        }
    });

    // Timers, frames and effects out
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_millis(FRAME_MS)).await;
            let now = clock.now();
            let due = {
                let s = site.peek();
                s.frame_pending() || s.has_effects() || s.next_wakeup().is_some_and(|t| t <= now)
            };
            if !due {
                continue;
            }
            let effects = {
                let mut s = site.write();
                s.tick(now);
                s.on_frame();
                s.drain_effects()
            };
            for effect in effects {
                run_effect(&effect);
            }
        }
    });

    let motion_css = site.read().motion().override_css();
    let shell_class = match site.read().motion().body_class() {
        Some(class) => format!("site {}", class),
        None => "site".to_string(),
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        if let Some(css) = motion_css {
            style { {css} }
        }
        div { class: "{shell_class}",
            Router::<Route> {}
        }
    }
}

fn run_effect(effect: &Effect) {
    match bridge::effect_script(effect) {
        Some(script) => {
            let _ = document::eval(&script);
        }
        None => tracing::debug!(?effect, "Effect rendered from state"),
    }
}
