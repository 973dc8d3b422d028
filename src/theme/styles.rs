//! Global CSS styles for the RevanArc site.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --deep-space: #05070d;
  --space-panel: #0c1120;
  --space-border: #1b2338;

  /* BLUE / RED (the two halves) */
  --blue: #4da3ff;
  --blue-glow: rgba(77, 163, 255, 0.35);
  --red: #e04848;
  --red-glow: rgba(224, 72, 72, 0.35);

  /* BRASS (Titles, Active State) */
  --brass: #c9a227;
  --brass-glow: rgba(201, 162, 39, 0.3);

  /* TEXT */
  --text-primary: #eef2ff;
  --text-secondary: rgba(238, 242, 255, 0.72);
  --text-muted: rgba(238, 242, 255, 0.5);

  /* NOTIFICATIONS */
  --success: #3ecf8e;
  --warning: #f5a524;

  /* Typography */
  --font-display: 'Orbitron', 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Layout */
  --header-height: 80px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-padding-top: var(--header-height);
}

body {
  background: var(--deep-space);
  color: var(--text-primary);
  font-family: var(--font-body);
  line-height: 1.6;
  overflow-x: hidden;
}

a {
  color: inherit;
  text-decoration: none;
}

.sr-only {
  position: absolute;
  width: 1px;
  height: 1px;
  overflow: hidden;
  clip: rect(0, 0, 0, 0);
  white-space: nowrap;
}

/* === Loading Screen === */
.loading-screen {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  background: var(--deep-space);
  transition: opacity 1s ease, visibility 1s ease;
}

.loading-screen.fade-out {
  opacity: 0;
  visibility: hidden;
}

.loading-screen.hidden {
  display: none;
}

.loading-ring {
  width: 64px;
  height: 64px;
  border-radius: 50%;
  border: 3px solid var(--space-border);
  border-top-color: var(--blue);
  border-right-color: var(--red);
  animation: spin 1.2s linear infinite;
}

.loading-text {
  font-family: var(--font-display);
  letter-spacing: 0.2em;
  color: var(--text-muted);
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Starfield === */
.starfield {
  position: fixed;
  inset: -50% 0 0 0;
  z-index: -2;
  pointer-events: none;
  will-change: transform;
}

.star-layer {
  position: absolute;
  inset: 0;
}

.star-layer-2 { opacity: 0.8; }
.star-layer-3 { opacity: 0.6; }

.dynamic-star {
  position: absolute;
  border-radius: 50%;
  background: #fff;
  animation: twinkle 4s ease-in-out infinite;
}

@keyframes twinkle {
  0%, 100% { opacity: 0.3; transform: scale(1); }
  50% { opacity: 1; transform: scale(1.2); }
}

/* === Floating Particles === */
.particle-container {
  position: fixed;
  inset: 0;
  z-index: -1;
  overflow: hidden;
  pointer-events: none;
}

.floating-particle {
  position: absolute;
  border-radius: 50%;
  background: radial-gradient(circle, var(--brass) 0%, transparent 70%);
  animation-name: particle-float;
  animation-timing-function: linear;
  animation-fill-mode: forwards;
}

@keyframes particle-float {
  0% { transform: translateY(0); opacity: 0; }
  10% { opacity: 0.8; }
  90% { opacity: 0.8; }
  100% { transform: translateY(-110vh); opacity: 0; }
}

/* === Hover Ripple === */
.hover-ripple {
  position: absolute;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.15);
  transform: scale(0);
  pointer-events: none;
  animation: ripple-expand 0.6s ease-out forwards;
}

@keyframes ripple-expand {
  to { transform: scale(1); opacity: 0; }
}

/* === Navigation Bar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 100;
  height: var(--header-height);
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: rgba(5, 7, 13, 0.85);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--space-border);
  transition: transform var(--transition-normal);
}

.navbar.scroll-down {
  transform: translateY(-100%);
}

.navbar.scroll-up {
  transform: translateY(0);
}

.nav-brand {
  font-family: var(--font-display);
  font-size: 1.4rem;
  color: var(--brass);
  letter-spacing: 0.1em;
}

.nav-links {
  display: flex;
  gap: 2rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  transition: color var(--transition-fast);
  position: relative;
}

.nav-link:hover,
.nav-link.active {
  color: var(--brass);
}

.nav-link.active::after {
  content: '';
  position: absolute;
  left: 0;
  right: 0;
  bottom: -6px;
  height: 2px;
  background: linear-gradient(90deg, var(--blue), var(--red));
}

.nav-toggle {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger-line {
  width: 24px;
  height: 2px;
  background: var(--text-primary);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.nav-toggle.active .hamburger-line:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.nav-toggle.active .hamburger-line:nth-child(2) { opacity: 0; }
.nav-toggle.active .hamburger-line:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.navbar.mobile-mode .nav-toggle {
  display: flex;
}

.navbar.mobile-mode .nav-links {
  position: absolute;
  top: var(--header-height);
  left: 0;
  right: 0;
  flex-direction: column;
  gap: 1rem;
  padding: 1.5rem 2rem;
  background: var(--space-panel);
  transform: translateY(-120%);
  transition: transform var(--transition-normal);
}

.navbar.mobile-mode .nav-links.active {
  transform: translateY(0);
}

.duality-switch {
  width: 48px;
  height: 24px;
  border-radius: 12px;
  border: 1px solid var(--space-border);
  background: linear-gradient(90deg, var(--blue) 50%, var(--red) 50%);
  cursor: pointer;
  position: relative;
}

.duality-switch::after {
  content: '';
  position: absolute;
  top: 2px;
  left: 2px;
  width: 18px;
  height: 18px;
  border-radius: 50%;
  background: var(--text-primary);
  transition: transform var(--transition-fast);
}

.duality-switch.red::after {
  transform: translateX(24px);
}

/* === Sections === */
section {
  min-height: 60vh;
  padding: 6rem 2rem;
  max-width: 1200px;
  margin: 0 auto;
}

.section-title {
  font-family: var(--font-display);
  font-size: 2.2rem;
  color: var(--brass);
  text-align: center;
  margin-bottom: 2.5rem;
}

.fade-in-on-scroll {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

.fade-in-on-scroll.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  text-align: center;
  gap: 1.5rem;
  padding-top: var(--header-height);
}

.hero.welcome-sequence .revan-emblem,
.hero.welcome-sequence .hero-title,
.hero.welcome-sequence .hero-description,
.hero.welcome-sequence .hero-actions {
  opacity: 0;
  transform: translateY(20px);
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.hero.welcome-sequence .animate-in {
  opacity: 1;
  transform: translateY(0);
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  letter-spacing: 0.15em;
  background: linear-gradient(90deg, var(--blue), var(--brass), var(--red));
  -webkit-background-clip: text;
  color: transparent;
}

.hero-description {
  max-width: 640px;
  color: var(--text-secondary);
  font-size: 1.15rem;
}

.hero-actions {
  display: flex;
  gap: 1rem;
  flex-wrap: wrap;
  justify-content: center;
}

/* === Emblem === */
.revan-emblem {
  position: relative;
  border-radius: 50%;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal);
}

.revan-emblem:hover {
  transform: scale(1.05);
}

.emblem-left,
.emblem-right {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 50%;
  pointer-events: none;
  transition: box-shadow var(--transition-normal);
}

.emblem-left { left: 0; border-radius: 100% 0 0 100% / 50% 0 0 50%; }
.emblem-right { right: 0; border-radius: 0 100% 100% 0 / 0 50% 50% 0; }

.revan-emblem.emblem-powered {
  animation: emblem-pulse 1.5s ease-in-out infinite;
}

@keyframes emblem-pulse {
  0%, 100% { filter: drop-shadow(0 0 8px var(--brass-glow)); }
  50% { filter: drop-shadow(0 0 24px var(--brass)); }
}

/* === Buttons === */
.cta-button {
  position: relative;
  overflow: hidden;
  padding: 0.85rem 2rem;
  border-radius: 4px;
  font-family: var(--font-display);
  letter-spacing: 0.08em;
  cursor: pointer;
  transition: box-shadow var(--transition-normal), transform var(--transition-fast);
}

.cta-button.primary {
  background: linear-gradient(90deg, var(--blue), var(--red));
  border: none;
  color: #fff;
}

.cta-button.secondary {
  background: transparent;
  border: 1px solid var(--brass);
  color: var(--brass);
}

.cta-button:hover {
  box-shadow: 0 0 20px var(--brass-glow);
  transform: translateY(-2px);
}

.btn-ghost {
  background: transparent;
  border: 1px solid var(--space-border);
  color: var(--text-secondary);
  padding: 0.5rem 1rem;
  border-radius: 4px;
  cursor: pointer;
}

/* === Knowledge Constellation === */
.constellation {
  position: relative;
  width: min(420px, 90vw);
  aspect-ratio: 1;
  margin: 0 auto 2rem;
}

.constellation-lines {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
}

.connection-line {
  stroke: var(--space-border);
  stroke-width: 1.5;
  transition: stroke var(--transition-normal), stroke-width var(--transition-normal);
}

.connection-line.highlighted {
  stroke: var(--brass);
  stroke-width: 2.5;
}

.knowledge-node {
  position: absolute;
  transform: translate(-50%, -50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.4rem;
  cursor: pointer;
  outline: none;
}

.node-core {
  width: 22px;
  height: 22px;
  border-radius: 50%;
  background: var(--space-panel);
  border: 2px solid var(--blue);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.knowledge-node:hover .node-core,
.knowledge-node:focus-visible .node-core {
  transform: scale(1.25);
  box-shadow: 0 0 16px var(--blue-glow);
}

.knowledge-node.active .node-core {
  border-color: var(--brass);
  background: var(--brass);
  box-shadow: 0 0 20px var(--brass-glow);
}

.node-label {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.constellation:not(.in-viewport) .node-core {
  animation-play-state: paused;
}

.stage-details {
  max-width: 720px;
  margin: 0 auto;
  opacity: 0;
  transition: opacity var(--transition-slow);
}

.stage-details.visible {
  opacity: 1;
}

.stage-content {
  padding: 2rem;
  border: 1px solid var(--space-border);
  border-radius: 8px;
  background: var(--space-panel);
  transition: opacity 0.5s ease, transform 0.5s ease;
}

.stage-content h3 {
  font-family: var(--font-display);
  color: var(--brass);
  margin-bottom: 0.75rem;
}

.stage-content ul {
  margin-top: 1rem;
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

/* === Project Filters === */
.project-filters {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.filter-btn {
  position: relative;
  overflow: hidden;
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.filter-btn:hover {
  border-color: var(--blue);
  color: var(--text-primary);
}

.filter-btn.active {
  border-color: var(--brass);
  background: var(--brass);
  color: var(--deep-space);
}

.project-count {
  text-align: center;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

/* === Project Grid === */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.project-card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.75rem;
  border: 1px solid var(--space-border);
  border-radius: 8px;
  background: var(--space-panel);
  cursor: pointer;
  transition: opacity 0.4s ease, transform 0.4s ease, border-color var(--transition-normal);
}

.project-card:hover {
  border-color: var(--brass);
}

.project-card:not(.in-viewport) {
  animation-play-state: paused;
}

.card-icon {
  font-size: 2rem;
}

.card-title {
  font-family: var(--font-display);
  font-size: 1.3rem;
  color: var(--text-primary);
}

.card-description {
  color: var(--text-secondary);
  flex: 1;
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.card-tag {
  font-size: 0.75rem;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  color: var(--text-muted);
}

.card-status {
  position: absolute;
  top: 1rem;
  right: 1rem;
  display: inline-flex;
  align-items: center;
  gap: 0.4rem;
  font-size: 0.75rem;
  color: var(--text-secondary);
}

.status-dot {
  width: 8px;
  height: 8px;
  border-radius: 50%;
  background: var(--text-muted);
}

.status-active .status-dot { background: var(--success); }
.status-development .status-dot { background: var(--warning); }
.status-planning .status-dot { background: var(--blue); }

.card-button {
  position: relative;
  overflow: hidden;
  align-self: flex-start;
  padding: 0.55rem 1.25rem;
  border-radius: 4px;
  border: 1px solid var(--blue);
  background: transparent;
  color: var(--blue);
  cursor: pointer;
  transition: all var(--transition-fast);
}

.card-button:hover {
  background: var(--blue);
  color: var(--deep-space);
}

.card-button.loading {
  opacity: 0.7;
  cursor: progress;
}

.card-button.coming-soon {
  border-color: var(--warning);
  color: var(--warning);
}

/* === Notifications === */
.notification-stack {
  position: fixed;
  top: calc(var(--header-height) + 1rem);
  right: 1rem;
  z-index: 200;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.notification {
  min-width: 240px;
  padding: 0.85rem 1.25rem;
  border-radius: 6px;
  background: var(--space-panel);
  border-left: 4px solid var(--blue);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
  animation: notification-in 0.3s ease-out;
}

.notification-success { border-left-color: var(--success); }
.notification-warning { border-left-color: var(--warning); }
.notification-error { border-left-color: var(--red); }

@keyframes notification-in {
  from { transform: translateX(120%); }
  to { transform: translateX(0); }
}

/* === Reload Prompt === */
.error-message {
  position: fixed;
  inset: 0;
  z-index: 1100;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.25rem;
  background: rgba(5, 7, 13, 0.95);
  text-align: center;
  padding: 2rem;
}

/* === Page sections === */
.page {
  position: relative;
  z-index: 1;
}

.section-subtitle {
  text-align: center;
  color: var(--text-secondary);
  margin-bottom: 2.5rem;
}

.about-content,
.contact-content {
  max-width: 760px;
  margin: 0 auto;
  text-align: center;
  color: var(--text-secondary);
  line-height: 1.7;
}

.duality-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1.5rem;
  margin-top: 2rem;
}

.duality-card {
  padding: 1.5rem;
  border: 1px solid var(--space-border);
  border-radius: 8px;
  background: rgba(255, 255, 255, 0.02);
}

.duality-card.blue h3 { color: var(--blue); }
.duality-card.red h3 { color: var(--red); }

.contact-content .cta-button {
  margin-top: 1.5rem;
}

.card-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 1rem;
}

/* === Footer === */
.footer {
  padding: 2rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--space-border);
}

.last-updated {
  font-size: 0.8rem;
  margin-top: 0.5rem;
}

/* === Responsive === */
@media (max-width: 768px) {
  .navbar { padding: 0 1.25rem; }
  section { padding: 4rem 1.25rem; }
  .projects-grid { grid-template-columns: 1fr; }
  .hero-actions { flex-direction: column; }
  .duality-grid { grid-template-columns: 1fr; }
}
"#;
