//! Global CSS for the Josata site.
//!
//! Cinematic dark aesthetic: near-black panels, azure/violet gradients,
//! wide letter-spaced microcopy. One stylesheet, injected once by `App`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* INK (Backgrounds) */
  --ink: #050505;
  --ink-deep: #02040a;
  --panel: #0a0a0a;
  --panel-raised: #111111;
  --card: #0d0d0d;
  --field: #1a1a1a;

  /* AZURE (Technology, Links, Primary) */
  --azure: #00a3ff;
  --azure-glow: rgba(0, 163, 255, 0.3);

  /* VIOLET (Accents, Secondary) */
  --violet: #a855f7;
  --violet-glow: rgba(168, 85, 247, 0.3);

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #9ca3af;
  --text-muted: #6b7280;

  /* LINES */
  --border-faint: rgba(255, 255, 255, 0.05);
  --border-soft: rgba(255, 255, 255, 0.1);

  /* Typography */
  --font-display: 'Orbitron', 'Eurostile', 'Bank Gothic', sans-serif;
  --font-body: 'Inter', 'Segoe UI', 'Helvetica Neue', sans-serif;

  /* Transitions */
  --ease-cine: cubic-bezier(0.22, 1, 0.36, 1);
  --ease-snap: cubic-bezier(0.65, 0, 0.35, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-body);
  background: var(--ink);
  color: var(--text-primary);
  line-height: 1.7;
  overflow: hidden;
  cursor: none;
}

::selection {
  background: var(--azure);
  color: white;
}

button {
  font-family: inherit;
  background: none;
  border: none;
  color: inherit;
  cursor: none;
}

a {
  text-decoration: none;
  color: inherit;
  cursor: none;
}

img {
  display: block;
  max-width: 100%;
}

/* === Shell === */
.site-shell {
  position: relative;
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  background: var(--ink);
}

.page-outlet {
  position: relative;
  z-index: 10;
  min-height: 100vh;
}

.page {
  animation: page-fade-in 0.8s var(--ease-cine);
}

@keyframes page-fade-in {
  from { opacity: 0; transform: scale(0.98); filter: blur(10px); }
  to { opacity: 1; transform: scale(1); filter: blur(0); }
}

/* === Particle Field Layer === */
.plexus-layer {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  background: var(--ink-deep);
  overflow: hidden;
}

.plexus-canvas {
  position: absolute;
  inset: 0;
}

.plexus-point {
  fill: var(--azure);
}

.plexus-link {
  stroke: var(--azure);
  stroke-width: 1;
  opacity: 0.12;
}

.plexus-vignette {
  position: absolute;
  inset: 0;
  background:
    linear-gradient(to bottom, var(--ink) 0%, transparent 25%, transparent 75%, var(--ink) 100%),
    radial-gradient(circle at center, transparent 0%, rgba(5, 5, 5, 0.4) 100%);
}

.plexus-scanline {
  position: absolute;
  left: 0;
  width: 100%;
  height: 1px;
  background: rgba(255, 255, 255, 0.05);
  opacity: 0.2;
  animation: scan-slow 12s linear infinite;
}

.plexus-scanline.delayed {
  background: rgba(0, 163, 255, 0.1);
  animation-delay: 6s;
}

@keyframes scan-slow {
  0% { transform: translateY(-50vh); opacity: 0; }
  50% { opacity: 0.2; }
  100% { transform: translateY(150vh); opacity: 0; }
}

/* === Route Transition Sweep === */
.route-sweep {
  position: fixed;
  inset: 0;
  z-index: 9000;
  pointer-events: none;
  overflow: hidden;
  opacity: 0;
  transition: opacity 300ms ease;
}

.route-sweep.active {
  opacity: 1;
}

.route-sweep-line {
  position: absolute;
  left: 0;
  right: 0;
  height: 2px;
  background: linear-gradient(to right, transparent, var(--azure), transparent);
  box-shadow: 0 0 20px var(--azure);
}

.route-sweep.active .route-sweep-line {
  animation: sweep-down 0.6s var(--ease-snap) forwards;
}

.route-sweep-haze {
  position: absolute;
  inset: 0;
  background: rgba(0, 163, 255, 0.05);
  backdrop-filter: blur(2px);
}

.route-sweep.active .route-sweep-haze {
  animation: haze-out 0.6s ease-out forwards;
}

@keyframes sweep-down {
  0% { transform: translateY(-10vh); opacity: 0; }
  20% { opacity: 1; }
  80% { opacity: 1; }
  100% { transform: translateY(110vh); opacity: 0; }
}

@keyframes haze-out {
  from { opacity: 1; }
  to { opacity: 0; }
}

/* === Custom Cursor === */
.cursor-ring {
  position: fixed;
  width: 2rem;
  height: 2rem;
  border: 1px solid rgba(0, 163, 255, 0.5);
  border-radius: 50%;
  transform: translate(-50%, -50%);
  pointer-events: none;
  z-index: 9999;
  transition: transform 300ms ease-out, background 300ms ease-out;
}

.cursor-ring.hot {
  transform: translate(-50%, -50%) scale(1.5);
  background: rgba(0, 163, 255, 0.1);
}

.cursor-dot {
  position: fixed;
  width: 0.375rem;
  height: 0.375rem;
  background: white;
  border-radius: 50%;
  transform: translate(-50%, -50%);
  pointer-events: none;
  z-index: 9999;
}

/* === Shared Typography === */
.eyebrow {
  display: block;
  font-size: 0.625rem;
  font-weight: 900;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  margin-bottom: 0.75rem;
}

.eyebrow.azure { color: var(--azure); }
.eyebrow.violet { color: var(--violet); }

.pill {
  display: inline-block;
  font-size: 0.625rem;
  font-weight: 900;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  margin-bottom: 1.5rem;
}

.pill.azure {
  color: var(--azure);
  background: rgba(0, 163, 255, 0.1);
}

.section-heading {
  text-align: center;
  margin-bottom: 4rem;
  position: relative;
  z-index: 10;
}

.section-title {
  font-family: var(--font-display);
  font-size: clamp(2rem, 5vw, 3.5rem);
  font-weight: 900;
  color: var(--text-primary);
}

.section-title.caps {
  text-transform: uppercase;
  letter-spacing: -0.02em;
}

.section-lede {
  color: var(--text-secondary);
  max-width: 36rem;
  margin: 1rem auto 0;
  font-size: 0.95rem;
  font-weight: 300;
}

.heading-rule {
  width: 6rem;
  height: 4px;
  background: linear-gradient(to right, var(--azure), var(--violet));
  border-radius: 9999px;
  margin: 1.5rem auto 0;
  box-shadow: 0 0 15px var(--azure-glow);
}

.heading-rule.violet {
  background: linear-gradient(to right, var(--violet), var(--azure));
  box-shadow: 0 0 15px var(--violet-glow);
}

.gradient-text {
  background: linear-gradient(to right, var(--azure), var(--violet));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.gradient-flow {
  display: block;
  background: linear-gradient(to right, var(--azure), #ffffff, var(--violet));
  background-size: 200% auto;
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  animation: flow-gradient 10s ease infinite;
}

@keyframes flow-gradient {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}

.azure-text { color: var(--azure); }

/* === Reveal Entrances === */
.reveal {
  opacity: 0;
  transform: translateY(2.5rem);
  animation: reveal-in 1s var(--ease-cine) forwards;
}

@keyframes reveal-in {
  to { opacity: 1; transform: translateY(0); }
}

/* === Buttons === */
.site-btn {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.875rem 2rem;
  border-radius: 9999px;
  font-weight: 700;
  font-size: 0.688rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  transition: transform 300ms ease, box-shadow 300ms ease, opacity 300ms ease;
}

.site-btn:hover { transform: scale(1.05); }
.site-btn:active { transform: scale(0.95); }
.site-btn:disabled { opacity: 0.7; }

.btn-primary {
  background: linear-gradient(to right, var(--azure), var(--violet));
  color: white;
  box-shadow: 0 0 20px var(--azure-glow);
}

.btn-primary:hover {
  box-shadow: 0 0 30px rgba(0, 163, 255, 0.5);
}

.btn-outline {
  border: 1px solid rgba(255, 255, 255, 0.2);
  color: white;
}

.btn-outline:hover { background: rgba(255, 255, 255, 0.05); }

.btn-ghost {
  color: var(--text-secondary);
  padding: 0.875rem 0;
}

.btn-ghost:hover { color: white; }

.btn-spinner .icon {
  animation: spin 1s linear infinite;
}

.nav-cta {
  padding: 0.625rem 2rem;
  font-size: 0.625rem;
  letter-spacing: 0.2em;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Logo === */
.logo {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  user-select: none;
}

.logo-main {
  position: relative;
  overflow: hidden;
  display: block;
  font-family: var(--font-display);
  font-size: 1.75rem;
  font-weight: 900;
  letter-spacing: -0.02em;
  color: white;
  line-height: 1.1;
  transition: color 500ms ease;
}

.logo:hover .logo-main { color: var(--azure); }

.logo-shimmer {
  position: absolute;
  inset: 0;
  background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.4), transparent);
  transform: translateX(-100%);
}

.logo:hover .logo-shimmer {
  animation: shimmer 1.5s infinite;
}

@keyframes shimmer {
  0% { transform: translateX(-100%); }
  100% { transform: translateX(100%); }
}

.logo-sub {
  font-size: 0.563rem;
  font-weight: 700;
  letter-spacing: 0.55em;
  text-transform: uppercase;
  color: #d1d5db;
  transition: color 500ms ease;
}

.logo:hover .logo-sub { color: white; }

.logo-underline {
  position: absolute;
  bottom: -0.25rem;
  left: 0;
  width: 0;
  height: 1px;
  background: linear-gradient(to right, var(--azure), var(--violet));
  transition: width 700ms var(--ease-cine);
}

.logo:hover .logo-underline { width: 100%; }

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 8000;
  padding: 1.5rem 0;
  transition: background 500ms ease, padding 500ms ease, border 500ms ease;
}

.navbar.condensed {
  background: rgba(5, 5, 5, 0.95);
  backdrop-filter: blur(24px);
  padding: 0.5rem 0;
  border-bottom: 1px solid var(--border-faint);
}

.navbar-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 4rem;
  position: relative;
  z-index: 9000;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 2.5rem;
}

.nav-item {
  position: relative;
}

.nav-link {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.5rem 0;
  font-size: 0.688rem;
  font-weight: 900;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: var(--text-secondary);
  transition: color 500ms ease;
}

.nav-link:hover { color: white; }
.nav-link.active { color: var(--azure); }

.nav-chevron {
  display: inline-flex;
  transition: transform 300ms ease;
}

.nav-item:hover .nav-chevron { transform: rotate(180deg); }

.nav-underline {
  position: absolute;
  bottom: -0.25rem;
  left: 0;
  width: 0;
  height: 2px;
  background: linear-gradient(to right, var(--azure), var(--violet));
  transition: width 500ms ease;
}

.nav-item:hover .nav-underline,
.nav-underline.active { width: 100%; }

.nav-dropdown {
  position: absolute;
  top: 100%;
  left: 0;
  padding-top: 1rem;
  opacity: 0;
  visibility: hidden;
  transform: translateY(0.5rem);
  transition: opacity 300ms ease, visibility 300ms ease, transform 300ms ease;
}

.nav-item:hover .nav-dropdown {
  opacity: 1;
  visibility: visible;
  transform: translateY(0);
}

.nav-dropdown-panel {
  background: var(--panel);
  border: 1px solid var(--border-soft);
  border-radius: 0.75rem;
  padding: 0.5rem;
  width: 14rem;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.nav-dropdown-link {
  display: block;
  font-size: 0.563rem;
  font-weight: 700;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-muted);
  padding: 0.625rem 1rem;
  border-radius: 0.5rem;
  transition: color 200ms ease, background 200ms ease;
}

.nav-dropdown-link:hover {
  color: white;
  background: rgba(255, 255, 255, 0.05);
}

.menu-toggle {
  display: none;
  width: 3rem;
  height: 3rem;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.05);
  border: 1px solid var(--border-soft);
  border-radius: 0.75rem;
  color: white;
  transition: background 300ms ease;
}

.menu-toggle:hover { background: rgba(255, 255, 255, 0.1); }

/* === Mobile Menu === */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 8500;
  background: var(--ink);
  opacity: 0;
  transform: translateY(-100%);
  pointer-events: none;
  transition: opacity 700ms var(--ease-snap), transform 700ms var(--ease-snap);
  display: none;
}

.mobile-menu.open {
  opacity: 1;
  transform: translateY(0);
  pointer-events: auto;
}

.mobile-menu-grid {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  background-image:
    linear-gradient(to right, #80808012 1px, transparent 1px),
    linear-gradient(to bottom, #80808012 1px, transparent 1px);
  background-size: 40px 40px;
}

.mobile-menu-items {
  position: relative;
  height: 100%;
  display: flex;
  flex-direction: column;
  padding: 8rem 2.5rem 5rem;
  overflow-y: auto;
}

.mobile-menu-item {
  display: flex;
  flex-direction: column;
  border-bottom: 1px solid var(--border-faint);
  opacity: 0;
  transform: translateX(-2.5rem);
  transition: opacity 700ms ease, transform 700ms ease;
}

.mobile-menu.open .mobile-menu-item {
  opacity: 1;
  transform: translateX(0);
}

.mobile-link-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 0;
}

.mobile-link {
  flex-grow: 1;
  text-align: left;
}

.mobile-link-title {
  font-family: var(--font-display);
  font-size: 1.875rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.02em;
  color: white;
  transition: color 500ms ease;
}

.mobile-link-title.active { color: var(--azure); }
.mobile-link:hover .mobile-link-title { color: var(--azure); }

.mobile-link-arrow { color: rgba(255, 255, 255, 0.2); }

.mobile-accordion-toggle {
  width: 2.5rem;
  height: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.05);
  border-radius: 50%;
  color: var(--text-muted);
}

.mobile-sublinks {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-height: 0;
  opacity: 0;
  overflow: hidden;
  transition: max-height 500ms ease-in-out, opacity 500ms ease-in-out, margin 500ms ease-in-out;
}

.mobile-sublinks.open {
  max-height: 31rem;
  opacity: 1;
  margin: 0.5rem 0 2rem;
}

.mobile-sublink {
  font-size: 0.875rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-secondary);
  border-left: 2px solid var(--border-faint);
  padding: 0.5rem 0 0.5rem 1.5rem;
  transition: color 300ms ease;
}

.mobile-sublink:hover { color: white; }

.mobile-menu-footer {
  margin-top: 3rem;
}

.mobile-cta {
  width: 100%;
  padding: 1.25rem;
  border-radius: 1rem;
  letter-spacing: 0.4em;
  box-shadow: 0 20px 50px rgba(0, 163, 255, 0.3);
}

.mobile-menu-nodes {
  margin-top: 2.5rem;
  display: flex;
  justify-content: center;
  gap: 1.5rem;
}

.node-badge {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
}

.node-dot {
  width: 0.375rem;
  height: 0.375rem;
  border-radius: 50%;
  animation: pulse 2s infinite;
}

.node-dot.azure {
  background: var(--azure);
  box-shadow: 0 0 10px var(--azure);
}

.node-dot.violet {
  background: var(--violet);
  box-shadow: 0 0 10px var(--violet);
}

.node-label {
  font-size: 0.5rem;
  font-weight: 900;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: #4b5563;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding: 8rem 1.5rem 4rem;
}

.hero-grid {
  max-width: 80rem;
  margin: 0 auto;
  width: 100%;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

.hero-copy > .reveal { margin-bottom: 2.5rem; }

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.75rem;
  background: rgba(255, 255, 255, 0.05);
  backdrop-filter: blur(24px);
  border: 1px solid var(--border-soft);
  padding: 0.625rem 1.5rem;
  border-radius: 9999px;
  font-size: 0.563rem;
  font-weight: 900;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: var(--azure);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.hero-badge.violet { color: var(--violet); }

.badge-dot {
  width: 0.375rem;
  height: 0.375rem;
  background: var(--azure);
  border-radius: 50%;
  animation: pulse 2s infinite;
}

.badge-dot.violet { background: var(--violet); box-shadow: 0 0 10px var(--violet); }

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 6vw, 4rem);
  font-weight: 900;
  line-height: 0.9;
  letter-spacing: -0.03em;
  text-transform: uppercase;
}

.hero-lede {
  font-size: 1.25rem;
  font-weight: 300;
  color: var(--text-secondary);
  max-width: 32rem;
  line-height: 1.7;
}

.hero-actions {
  display: flex;
  align-items: center;
  gap: 2rem;
  padding-top: 1rem;
}

.hero-cta {
  padding: 1.5rem 3rem;
  letter-spacing: 0.4em;
  min-width: 15rem;
}

.hero-alt {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 0.625rem;
  letter-spacing: 0.4em;
  color: white;
}

.hero-alt:hover { color: var(--azure); }

.hero-play-ring {
  width: 3rem;
  height: 3rem;
  border: 1px solid var(--border-soft);
  border-radius: 50%;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  transition: border 300ms ease, background 300ms ease;
}

.hero-alt:hover .hero-play-ring {
  border-color: var(--azure);
  background: rgba(255, 255, 255, 0.05);
}

/* Hero media slider */
.hero-media {
  position: relative;
  aspect-ratio: 4 / 5.2;
  max-width: 24rem;
  margin-left: auto;
  border-radius: 4rem;
  overflow: hidden;
  border: 1px solid var(--border-soft);
  box-shadow: 0 80px 150px rgba(0, 0, 0, 0.8);
}

.hero-slides {
  position: absolute;
  inset: 0;
}

.hero-slide {
  position: absolute;
  inset: 0;
  transition: transform 1000ms var(--ease-snap), opacity 1000ms var(--ease-snap), filter 1000ms var(--ease-snap);
}

.hero-slide.on {
  transform: translateX(0);
  opacity: 1;
  z-index: 20;
}

.hero-slide.out {
  transform: translateX(-100%) scale(0.95);
  opacity: 0;
  filter: blur(4px);
  z-index: 10;
}

.hero-slide.off {
  transform: translateX(100%);
  opacity: 0;
  z-index: 10;
}

.hero-slide-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(0.3);
  transition: transform 4s ease;
}

.hero-media:hover .hero-slide-img { transform: scale(1.05); }

.hero-slide-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--ink), transparent 50%);
  z-index: 20;
}

.hero-hud {
  position: absolute;
  inset: 0;
  z-index: 30;
  pointer-events: none;
  padding: 3rem;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
}

.hero-hud-top { opacity: 0.8; }

.hud-ticks {
  display: flex;
  gap: 0.375rem;
  margin-bottom: 0.75rem;
}

.hud-tick {
  height: 1px;
  width: 0.5rem;
  background: var(--azure);
}

.hud-tick.wide {
  width: 2rem;
  background: white;
}

.hud-code {
  font-size: 0.625rem;
  font-weight: 900;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: white;
}

.hud-rule {
  height: 1px;
  width: 100%;
  background: rgba(255, 255, 255, 0.2);
  margin-bottom: 2rem;
}

.hero-hud-row {
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
}

.hud-label {
  font-size: 0.563rem;
  font-weight: 900;
  letter-spacing: 0.6em;
  text-transform: uppercase;
  color: var(--azure);
  margin-bottom: 0.75rem;
}

.hud-title {
  font-family: var(--font-display);
  font-size: 1.375rem;
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.02em;
  line-height: 1.2;
  color: white;
}

.hud-title .dim { color: rgba(255, 255, 255, 0.6); }

.hud-chip {
  width: 4rem;
  height: 4rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 2.5rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(255, 255, 255, 0.05);
  backdrop-filter: blur(24px);
  color: var(--azure);
}

.hero-scrubber {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 100%;
  height: 4px;
  background: rgba(255, 255, 255, 0.1);
  z-index: 40;
}

.hero-scrubber-fill {
  height: 100%;
  background: linear-gradient(to right, var(--azure), var(--violet));
  animation: hero-progress 6s linear forwards;
}

@keyframes hero-progress {
  from { width: 0%; }
  to { width: 100%; }
}

/* === Partner Strip === */
.partner-strip {
  position: relative;
  z-index: 20;
  padding: 2.5rem 0;
  border-top: 1px solid var(--border-faint);
  border-bottom: 1px solid var(--border-faint);
  background: rgba(8, 8, 8, 0.5);
  backdrop-filter: blur(4px);
}

.partner-caption {
  text-align: center;
  font-size: 0.563rem;
  font-weight: 900;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--text-muted);
  margin-bottom: 1.5rem;
  animation: pulse 2s infinite;
}

.partner-logo {
  height: 2.5rem;
  width: auto;
  filter: grayscale(1) brightness(2);
  opacity: 0.3;
  transition: filter 500ms ease, opacity 500ms ease;
}

.partner-logo:hover {
  filter: grayscale(0) brightness(1);
  opacity: 1;
}

/* === Marquees === */
.marquee-window {
  position: relative;
  display: flex;
  overflow: hidden;
}

.marquee-track {
  display: flex;
  align-items: center;
  gap: 3rem;
  white-space: nowrap;
  padding: 0.5rem 1.5rem;
}

.marquee-track.partners {
  animation: marquee-fast 30s linear infinite;
}

.marquee-track.tech {
  gap: 1.5rem;
  padding: 2.5rem 1.5rem;
  animation: marquee 50s linear infinite;
}

.marquee-track.tech:hover {
  animation-play-state: paused;
}

@keyframes marquee {
  0% { transform: translateX(0); }
  100% { transform: translateX(-50%); }
}

@keyframes marquee-fast {
  0% { transform: translateX(0); }
  100% { transform: translateX(-33.33%); }
}

.marquee-mask {
  position: absolute;
  top: 0;
  bottom: 0;
  width: 8rem;
  z-index: 10;
  pointer-events: none;
}

.marquee-mask.left {
  left: 0;
  background: linear-gradient(to right, var(--panel), transparent);
}

.marquee-mask.right {
  right: 0;
  background: linear-gradient(to left, var(--panel), transparent);
}

/* === Tech Stack === */
.tech-stack {
  position: relative;
  z-index: 10;
  padding: 6rem 0;
  background: var(--panel);
  overflow: hidden;
}

.tech-card {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  min-width: 10rem;
  height: 11.25rem;
  background: var(--field);
  border: 1px solid var(--border-faint);
  border-radius: 1rem;
  transition: border 300ms ease, background 300ms ease, transform 300ms ease, box-shadow 300ms ease;
}

.tech-card:hover {
  border-color: rgba(0, 163, 255, 0.5);
  background: #222222;
  transform: translateY(-0.5rem);
  box-shadow: 0 20px 40px rgba(0, 163, 255, 0.2);
}

.tech-card-logo {
  width: 4rem;
  height: 4rem;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 1.5rem;
  transition: transform 500ms ease;
}

.tech-card:hover .tech-card-logo {
  transform: scale(1.25) rotate(360deg);
}

.tech-card-logo img {
  max-width: 100%;
  max-height: 100%;
  object-fit: contain;
  filter: drop-shadow(0 0 15px rgba(255, 255, 255, 0.1));
}

.tech-card:hover .tech-card-logo img {
  filter: drop-shadow(0 0 20px rgba(0, 163, 255, 0.6));
}

.tech-card-name {
  font-size: 0.625rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: #d1d5db;
  transition: color 300ms ease;
}

.tech-card:hover .tech-card-name { color: white; }

/* === Stats Band === */
.stats-band {
  position: relative;
  z-index: 10;
  padding: 8rem 0;
  border-top: 1px solid var(--border-faint);
  border-bottom: 1px solid var(--border-faint);
  background: var(--panel);
  overflow: hidden;
}

.stats-inner {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.stats-grid {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 4rem;
}

.stat-cell { text-align: center; }

.stat-value {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 6vw, 4.5rem);
  font-weight: 900;
  margin-bottom: 1.25rem;
  background: linear-gradient(to right, white, white, #9ca3af);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
  font-variant-numeric: tabular-nums;
  transition: transform 700ms ease;
}

.stat-cell:hover .stat-value {
  background: linear-gradient(to right, var(--azure), var(--violet));
  -webkit-background-clip: text;
  background-clip: text;
  transform: scale(1.1);
}

.stat-rule {
  width: 2.5rem;
  height: 4px;
  margin: 0 auto 1rem;
  background: linear-gradient(to right, var(--azure), var(--violet));
  border-radius: 9999px;
  opacity: 0.2;
  transition: opacity 500ms ease, width 500ms ease;
}

.stat-cell:hover .stat-rule {
  opacity: 1;
  width: 5rem;
}

.stat-label {
  font-size: 0.688rem;
  font-weight: 900;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: var(--text-muted);
  transition: color 300ms ease;
}

.stat-cell:hover .stat-label { color: white; }

/* === Card Grids === */
.card-grid {
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: grid;
  gap: 2rem;
}

.card-grid.three { grid-template-columns: repeat(3, 1fr); }
.card-grid.four { grid-template-columns: repeat(4, 1fr); }

/* === Service Cards === */
.services-section,
.services-grid-section {
  position: relative;
  z-index: 10;
  padding: 6rem 0;
  background: var(--panel);
}

.services-grid-section {
  background: transparent;
  padding-top: 0;
}

.service-card {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 100%;
  background: var(--card);
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 2.5rem;
  padding: 2.5rem;
  overflow: hidden;
  box-shadow: 0 30px 60px -15px rgba(0, 0, 0, 0.5);
  transition: border 700ms ease, transform 700ms ease;
}

.service-card.hovered {
  border-color: rgba(0, 163, 255, 0.5);
  transform: scale(1.03);
  z-index: 20;
}

.service-card-bg {
  position: absolute;
  inset: 0;
  opacity: 0.15;
  overflow: hidden;
  transition: opacity 1000ms ease;
}

.service-card.hovered .service-card-bg { opacity: 0.6; }

.service-card-bg img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(1) brightness(0.75);
  animation: ken-burns 18s ease-in-out infinite alternate;
  transition: filter 1000ms ease, transform 1000ms ease;
}

.service-card.hovered .service-card-bg img {
  filter: grayscale(0) brightness(1);
  transform: scale(1.1);
}

@keyframes ken-burns {
  from { transform: scale(1) translate(0, 0); }
  to { transform: scale(1.08) translate(1%, -1%); }
}

.service-card-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, transparent, rgba(10, 10, 10, 0.4), var(--panel));
}

.service-card-body {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  height: 100%;
}

.service-card-icon {
  width: 4rem;
  height: 4rem;
  background: rgba(255, 255, 255, 0.1);
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 2.5rem;
  color: var(--azure);
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  transition: background 500ms ease, color 500ms ease;
}

.service-card.hovered .service-card-icon {
  background: linear-gradient(to top right, var(--azure), var(--violet));
  color: white;
}

.service-card-title {
  font-family: var(--font-display);
  font-size: 1.875rem;
  font-weight: 900;
  line-height: 1.2;
  margin-bottom: 1.5rem;
  color: white;
  transition: color 300ms ease;
  filter: drop-shadow(0 5px 15px rgba(0, 0, 0, 0.5));
}

.service-card.hovered .service-card-title { color: var(--azure); }

.service-card-desc {
  position: relative;
  min-height: 5rem;
  margin-bottom: 2.5rem;
  overflow: hidden;
}

.service-card-desc p {
  font-size: 1.125rem;
  font-weight: 500;
  line-height: 1.7;
  color: transparent;
  transform: translateX(1rem);
  opacity: 0;
  transition: color 1000ms ease, transform 1000ms ease, opacity 1000ms ease;
}

.service-card.hovered .service-card-desc p {
  color: white;
  transform: translateX(0);
  opacity: 1;
}

.service-card-wipe {
  position: absolute;
  inset: 0;
  background: var(--card);
  z-index: 20;
  pointer-events: none;
  opacity: 0;
  transition: transform 1.2s ease-in-out;
}

.service-card.hovered .service-card-wipe {
  opacity: 1;
  transform: translateX(100%);
}

.service-card-details {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  margin-top: auto;
}

.service-detail {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 0.75rem;
  font-weight: 900;
  letter-spacing: 0.25em;
  text-transform: uppercase;
  color: var(--text-muted);
  opacity: 0;
  transform: translateX(-2rem);
  transition: opacity 700ms var(--ease-cine), transform 700ms var(--ease-cine), color 700ms ease;
}

.service-card.hovered .service-detail {
  opacity: 1;
  transform: translateX(0);
  color: white;
}

.service-detail-dot {
  width: 0.625rem;
  height: 0.625rem;
  border-radius: 50%;
  background: var(--azure);
  box-shadow: 0 0 20px var(--azure);
  transform: scale(0);
  transition: transform 500ms ease;
}

.service-card.hovered .service-detail-dot { transform: scale(1); }

.service-card-foot {
  margin-top: 3rem;
  padding-top: 2rem;
  border-top: 1px solid rgba(255, 255, 255, 0.2);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.service-foot-label {
  font-size: 0.688rem;
  font-weight: 900;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: #9ca3af;
  transition: color 500ms ease;
}

.service-card.hovered .service-foot-label { color: white; }

.service-foot-orb {
  width: 3rem;
  height: 3rem;
  border: 1px solid rgba(255, 255, 255, 0.3);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  box-shadow: 0 0 20px rgba(0, 163, 255, 0.2);
  transition: background 300ms ease, border 300ms ease, transform 300ms ease;
}

.service-card.hovered .service-foot-orb {
  background: var(--azure);
  border-color: var(--azure);
  transform: rotate(45deg);
}

/* === Testimonials === */
.testimonials {
  position: relative;
  z-index: 10;
  padding: 5rem 0;
}

.testimonial-card {
  background: rgba(17, 17, 17, 0.8);
  backdrop-filter: blur(24px);
  padding: 2rem;
  border-radius: 2rem;
  border: 1px solid var(--border-soft);
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  height: 100%;
  transition: border 500ms ease;
}

.testimonial-card:hover { border-color: rgba(0, 163, 255, 0.4); }

.testimonial-stars {
  display: flex;
  gap: 0.25rem;
  color: var(--azure);
}

.testimonial-quote {
  font-size: 1.125rem;
  font-weight: 300;
  font-style: italic;
  line-height: 1.7;
  color: #d1d5db;
}

.testimonial-author {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.testimonial-avatar {
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  filter: grayscale(1);
  transition: filter 700ms ease, box-shadow 700ms ease;
  box-shadow: 0 0 0 2px var(--border-faint);
}

.testimonial-card:hover .testimonial-avatar {
  filter: grayscale(0);
  box-shadow: 0 0 0 2px rgba(0, 163, 255, 0.5);
}

.testimonial-name {
  font-size: 1rem;
  font-weight: 700;
  color: white;
}

.testimonial-role {
  font-size: 0.563rem;
  font-weight: 900;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-muted);
}

/* === CTA Panel === */
.cta-section {
  position: relative;
  z-index: 10;
  padding: 5rem 1.5rem;
}

.cta-panel {
  position: relative;
  max-width: 64rem;
  margin: 0 auto;
  background: rgba(10, 10, 10, 0.9);
  backdrop-filter: blur(24px);
  border: 1px solid var(--border-faint);
  border-radius: 3rem;
  padding: clamp(2.5rem, 8vw, 5rem);
  text-align: center;
  overflow: hidden;
  box-shadow: 0 40px 100px -20px rgba(0, 163, 255, 0.25);
}

.cta-panel::before {
  content: '';
  position: absolute;
  inset: 0;
  background:
    radial-gradient(circle at 0% 0%, rgba(0, 163, 255, 0.2) 0%, transparent 50%),
    radial-gradient(circle at 100% 100%, rgba(168, 85, 247, 0.2) 0%, transparent 50%);
}

.cta-panel > * { position: relative; z-index: 10; }

.cta-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-weight: 900;
  line-height: 0.95;
  letter-spacing: -0.03em;
  color: white;
  margin-bottom: 1.5rem;
}

.cta-lede {
  font-size: 1.125rem;
  font-weight: 300;
  color: var(--text-secondary);
  max-width: 40rem;
  margin: 0 auto 2rem;
  line-height: 1.7;
}

.cta-actions {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
  flex-wrap: wrap;
}

.cta-primary {
  padding: 1rem 2.5rem;
  font-size: 0.813rem;
  box-shadow: 0 30px 80px -20px rgba(0, 163, 255, 0.3);
}

.cta-alt {
  font-size: 0.625rem;
  letter-spacing: 0.3em;
  color: white;
}

.cta-alt:hover { color: var(--azure); }

/* === Page Headers === */
.page-header {
  position: relative;
  z-index: 10;
  max-width: 80rem;
  margin: 0 auto;
  padding: 10rem 1.5rem 4rem;
  text-align: center;
}

.page-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 7vw, 4.5rem);
  font-weight: 900;
  color: white;
  margin-bottom: 1.5rem;
  line-height: 1.05;
}

.page-lede {
  font-size: 1.125rem;
  font-weight: 300;
  color: var(--text-secondary);
  max-width: 46rem;
  margin: 0 auto;
  line-height: 1.7;
}

/* === Split Hero (About / Solutions) === */
.split-hero {
  position: relative;
  z-index: 10;
  max-width: 80rem;
  margin: 0 auto;
  padding: 10rem 1.5rem 6rem;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
  align-items: center;
}

.split-hero-copy {
  filter: drop-shadow(0 0 40px rgba(0, 0, 0, 0.9));
}

.display-title {
  font-family: var(--font-display);
  font-size: clamp(3rem, 8vw, 5.5rem);
  font-weight: 900;
  line-height: 0.85;
  letter-spacing: -0.03em;
  color: white;
  margin: 1.5rem 0;
}

.display-lede {
  font-size: clamp(1.125rem, 2vw, 1.375rem);
  font-weight: 300;
  line-height: 1.7;
  color: #d1d5db;
  max-width: 36rem;
}

.split-hero-actions {
  display: flex;
  align-items: center;
  gap: 2rem;
  padding-top: 2.5rem;
  flex-wrap: wrap;
}

.split-cta {
  padding: 1.5rem 3.5rem;
  letter-spacing: 0.4em;
  min-width: 15rem;
}

.split-cta.violet {
  background: linear-gradient(to right, var(--violet), var(--azure));
}

.status-note {
  display: flex;
  align-items: center;
  gap: 1rem;
  font-size: 0.563rem;
  font-weight: 900;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.status-rule {
  display: inline-block;
  width: 2.5rem;
  height: 1px;
  background: rgba(255, 255, 255, 0.2);
}

.split-hero-media {
  height: clamp(28rem, 50vw, 34rem);
}

/* === Cinematic Slider === */
.cine-slider {
  position: relative;
  height: 100%;
  border-radius: 4rem;
  overflow: hidden;
  border: 1px solid var(--border-soft);
  background: rgba(0, 0, 0, 0.4);
  backdrop-filter: blur(24px);
  box-shadow: 0 60px 120px -30px rgba(0, 0, 0, 0.9);
}

.cine-slides {
  position: absolute;
  inset: 0;
}

.cine-slide {
  position: absolute;
  inset: 0;
  opacity: 0;
  transform: scale(1.1);
  filter: blur(24px);
  transition: opacity 1200ms var(--ease-cine), transform 1200ms var(--ease-cine), filter 1200ms var(--ease-cine);
}

.cine-slide.on {
  opacity: 1;
  transform: scale(1);
  filter: blur(0);
}

.cine-slide-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(1) brightness(0.5);
  transition: filter 5s ease;
}

.cine-slider:hover .cine-slide-img {
  filter: grayscale(0) brightness(0.9);
}

.cine-slide-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, black, transparent 60%);
  opacity: 0.9;
}

.cine-hud {
  position: absolute;
  inset: 0;
  z-index: 20;
  padding: 2.5rem;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
}

.cine-hud-top {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  pointer-events: none;
}

.cine-code-badge {
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(24px);
  border: 1px solid var(--border-soft);
  padding: 1.25rem;
  border-radius: 1.5rem;
}

.cine-code {
  font-size: 0.625rem;
  font-weight: 900;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  margin-bottom: 0.25rem;
}

.cine-slider.azure .cine-code { color: var(--azure); }
.cine-slider.violet .cine-code { color: var(--violet); }

.cine-code-rule {
  width: 3rem;
  height: 2px;
  border-radius: 9999px;
}

.cine-slider.azure .cine-code-rule { background: rgba(0, 163, 255, 0.6); }
.cine-slider.violet .cine-code-rule { background: rgba(168, 85, 247, 0.6); }

.cine-chip {
  width: 3rem;
  height: 3rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(24px);
  animation: pulse 2s infinite;
}

.cine-slider.azure .cine-chip { color: var(--azure); }
.cine-slider.violet .cine-chip { color: var(--violet); }

.cine-hud-bottom {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  filter: drop-shadow(0 10px 20px rgba(0, 0, 0, 0.8));
}

.cine-caption {
  font-size: 0.625rem;
  font-weight: 700;
  letter-spacing: 0.6em;
  text-transform: uppercase;
  color: #9ca3af;
  margin-bottom: 0.25rem;
}

.cine-label {
  font-family: var(--font-display);
  font-size: clamp(1.5rem, 3vw, 2.25rem);
  font-weight: 900;
  text-transform: uppercase;
  letter-spacing: -0.02em;
  color: white;
}

.cine-bars {
  display: flex;
  gap: 0.5rem;
}

.cine-bar {
  height: 4px;
  flex-grow: 1;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.1);
  transition: background 700ms ease, box-shadow 700ms ease;
}

.cine-slider.azure .cine-bar.on {
  background: var(--azure);
  box-shadow: 0 0 15px var(--azure);
}

.cine-slider.violet .cine-bar.on {
  background: var(--violet);
  box-shadow: 0 0 15px var(--azure);
}

.cine-scanline {
  position: absolute;
  left: 0;
  width: 100%;
  height: 4px;
  background: white;
  filter: blur(12px);
  opacity: 0.2;
  pointer-events: none;
  animation: cine-scan 8s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes cine-scan {
  0% { transform: translateY(-200%); opacity: 0; }
  50% { opacity: 0.2; }
  100% { transform: translateY(800%); opacity: 0; }
}

/* === Framework Sections === */
.framework-section {
  position: relative;
  z-index: 10;
  padding: 6rem 0;
  background: rgba(255, 255, 255, 0.02);
  backdrop-filter: blur(4px);
  border-top: 1px solid var(--border-faint);
  border-bottom: 1px solid var(--border-faint);
}

/* === Reveal Cards (Sectors / Values) === */
.reveal-card {
  position: relative;
  display: flex;
  flex-direction: column;
  height: 100%;
  background: var(--card);
  border: 1px solid var(--border-soft);
  border-radius: 2.5rem;
  padding: 2.5rem;
  overflow: hidden;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  transition: border 700ms ease, transform 700ms ease;
}

.reveal-card.hovered {
  transform: scale(1.03);
}

.reveal-card.azure.hovered { border-color: rgba(0, 163, 255, 0.5); }
.reveal-card.violet.hovered { border-color: rgba(168, 85, 247, 0.5); }

.reveal-card-bg {
  position: absolute;
  inset: 0;
  opacity: 0.1;
  transition: opacity 1000ms ease;
}

.reveal-card.hovered .reveal-card-bg { opacity: 0.4; }

.reveal-card-bg img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  filter: grayscale(1) brightness(0.5);
  transition: filter 2s ease, transform 2s ease;
}

.reveal-card.hovered .reveal-card-bg img {
  filter: grayscale(0) brightness(1);
  transform: scale(1.1);
}

.reveal-card-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, var(--panel), transparent);
}

.reveal-card-body {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  height: 100%;
}

.reveal-card-icon {
  width: 3.5rem;
  height: 3.5rem;
  background: rgba(255, 255, 255, 0.05);
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  margin-bottom: 2.5rem;
  transition: background 500ms ease, color 500ms ease;
}

.reveal-card.azure .reveal-card-icon { color: var(--azure); }
.reveal-card.violet .reveal-card-icon { color: var(--violet); }

.reveal-card.hovered .reveal-card-icon {
  background: linear-gradient(to top right, var(--azure), var(--violet));
  color: white;
}

.reveal-card-title {
  font-family: var(--font-display);
  font-size: 1.75rem;
  font-weight: 900;
  line-height: 1.2;
  text-transform: uppercase;
  letter-spacing: -0.02em;
  color: white;
  margin-bottom: 1.5rem;
  transition: color 300ms ease;
}

.reveal-card.azure.hovered .reveal-card-title { color: var(--azure); }
.reveal-card.violet.hovered .reveal-card-title { color: var(--violet); }

.reveal-card-desc {
  position: relative;
  min-height: 5rem;
  margin-bottom: 2rem;
  overflow: hidden;
}

.reveal-card-desc p {
  font-size: 0.938rem;
  font-weight: 300;
  line-height: 1.7;
  color: var(--text-muted);
  transform: translateX(1rem);
  transition: color 1000ms ease, transform 1000ms ease;
}

.reveal-card.hovered .reveal-card-desc p {
  color: white;
  transform: translateX(0);
}

.reveal-card-wipe {
  position: absolute;
  inset: 0;
  background: var(--card);
  z-index: 20;
  pointer-events: none;
  opacity: 0;
  transition: transform 1s ease-in-out;
}

.reveal-card.hovered .reveal-card-wipe {
  opacity: 1;
  transform: translateX(100%);
}

.reveal-card-foot {
  margin-top: auto;
  padding-top: 2rem;
  border-top: 1px solid var(--border-soft);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.reveal-foot-label {
  font-size: 0.625rem;
  font-weight: 900;
  letter-spacing: 0.4em;
  text-transform: uppercase;
  color: #4b5563;
  transition: color 500ms ease;
}

.reveal-card.hovered .reveal-foot-label { color: white; }

.reveal-foot-orb {
  width: 2.5rem;
  height: 2.5rem;
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  transition: background 300ms ease, border 300ms ease, transform 300ms ease;
}

.reveal-card.azure.hovered .reveal-foot-orb {
  background: var(--azure);
  border-color: var(--azure);
  transform: rotate(45deg);
}

.reveal-card.violet.hovered .reveal-foot-orb {
  background: var(--violet);
  border-color: var(--violet);
  transform: rotate(45deg);
}

.reveal-card-beam {
  position: absolute;
  top: 0;
  left: 0;
  width: 6rem;
  height: 2px;
  background: var(--azure);
  filter: blur(4px);
  opacity: 0;
  transition: opacity 500ms ease;
}

.reveal-card.hovered .reveal-card-beam {
  opacity: 1;
  animation: beam-travel 4s linear infinite;
}

@keyframes beam-travel {
  0% { left: -100%; }
  100% { left: 400%; }
}

/* === Process Band === */
.process-band {
  position: relative;
  z-index: 10;
  padding: 6rem 0;
  background: var(--card);
  overflow: hidden;
}

.process-grid {
  position: relative;
  max-width: 80rem;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 2rem;
}

.process-line {
  position: absolute;
  top: 50%;
  left: 0;
  width: 100%;
  height: 1px;
  background: linear-gradient(to right, transparent, var(--border-soft), transparent);
  transform: translateY(-3rem);
  z-index: -1;
}

.process-card {
  position: relative;
  background: #151515;
  border: 1px solid var(--border-faint);
  border-radius: 2.5rem;
  padding: 2.5rem;
  overflow: hidden;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
  transition: border 700ms ease, transform 700ms ease, background 700ms ease;
}

.process-card:hover {
  border-color: rgba(0, 163, 255, 0.4);
  transform: translateY(-1rem);
  background: var(--field);
}

.process-icon {
  width: 3.5rem;
  height: 3.5rem;
  background: linear-gradient(to top right, var(--azure), var(--violet));
  border-radius: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  color: white;
  margin-bottom: 2rem;
  transition: transform 500ms ease;
}

.process-card:hover .process-icon {
  transform: scale(1.1) rotate(3deg);
}

.process-title {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 900;
  color: white;
  margin-bottom: 1rem;
  transition: color 300ms ease;
}

.process-card:hover .process-title { color: var(--azure); }

.process-detail {
  font-size: 0.875rem;
  font-weight: 300;
  line-height: 1.7;
  color: var(--text-secondary);
}

.process-more {
  margin-top: 2rem;
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 0.563rem;
  font-weight: 900;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: #4b5563;
  opacity: 0;
  transform: translateY(1rem);
  transition: opacity 500ms ease, transform 500ms ease, color 500ms ease;
}

.process-card:hover .process-more {
  opacity: 1;
  transform: translateY(0);
  color: white;
}

.process-number {
  position: absolute;
  top: 1rem;
  right: 1.5rem;
  font-family: var(--font-display);
  font-size: 3.75rem;
  font-weight: 900;
  color: rgba(255, 255, 255, 0.03);
  user-select: none;
  transition: color 700ms ease;
}

.process-card:hover .process-number { color: rgba(255, 255, 255, 0.08); }

.process-accent {
  position: absolute;
  bottom: 0;
  left: 0;
  width: 0;
  height: 4px;
  background: linear-gradient(to right, var(--azure), var(--violet));
  transition: width 700ms ease;
}

.process-card:hover .process-accent { width: 100%; }

/* === Careers Placeholder === */
.placeholder-panel {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 5rem 1.5rem;
  text-align: center;
}

.placeholder-status {
  display: block;
  font-size: 0.625rem;
  font-weight: 900;
  letter-spacing: 0.5em;
  text-transform: uppercase;
  color: var(--violet);
  margin-bottom: 1.5rem;
}

.placeholder-title {
  font-family: var(--font-display);
  font-size: clamp(2.5rem, 8vw, 4.5rem);
  font-weight: 900;
  color: white;
  margin-bottom: 1.5rem;
}

.placeholder-lede {
  font-size: 0.938rem;
  color: var(--text-muted);
  max-width: 36rem;
  margin: 0 auto 1.5rem;
}

.placeholder-rule {
  width: 6rem;
  height: 4px;
  margin: 0 auto;
  background: linear-gradient(to right, var(--azure), var(--violet));
  border-radius: 9999px;
  box-shadow: 0 0 20px var(--azure);
}

/* === Contact Page === */
.contact-grid {
  position: relative;
  z-index: 10;
  max-width: 80rem;
  margin: 0 auto;
  padding: 10rem 1.5rem 5rem;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 5rem;
}

.contact-channels {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  margin-top: 3rem;
}

.contact-channel {
  display: flex;
  gap: 1.5rem;
  align-items: flex-start;
}

.channel-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 0.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  flex-shrink: 0;
}

.channel-icon.azure {
  background: rgba(0, 163, 255, 0.1);
  color: var(--azure);
}

.channel-icon.violet {
  background: rgba(168, 85, 247, 0.1);
  color: var(--violet);
}

.channel-title {
  font-size: 1.125rem;
  font-weight: 700;
  color: white;
}

.channel-hint {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.channel-value { margin-top: 0.25rem; }
.channel-value.azure { color: var(--azure); }
.channel-value.violet { color: var(--violet); }

.contact-form-panel {
  position: relative;
  background: var(--field);
  border: 1px solid var(--border-faint);
  border-radius: 1.5rem;
  padding: 2.5rem;
  overflow: hidden;
}

.form-panel-glow {
  position: absolute;
  top: 0;
  right: 0;
  width: 8rem;
  height: 8rem;
  background: rgba(0, 163, 255, 0.05);
  filter: blur(48px);
  border-radius: 50%;
}

.contact-form {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.form-label {
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.form-input {
  width: 100%;
  background: var(--panel);
  border: 1px solid var(--border-soft);
  border-radius: 0.75rem;
  padding: 0.75rem 1rem;
  font-size: 0.875rem;
  font-family: inherit;
  color: white;
  outline: none;
  resize: none;
  transition: border 300ms ease, box-shadow 300ms ease;
}

.form-input:focus {
  border-color: var(--azure);
  box-shadow: 0 0 0 1px var(--azure);
}

.form-input::placeholder { color: #4b5563; }

.form-error {
  font-size: 0.813rem;
  color: #ff3366;
}

.form-submit {
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  background: linear-gradient(to right, var(--azure), var(--violet));
  padding: 1rem;
  border-radius: 0.75rem;
  font-weight: 700;
  font-size: 0.938rem;
  color: white;
  transition: opacity 300ms ease;
}

.form-submit:hover { opacity: 0.9; }

/* === Acknowledgment Modal === */
.ack-overlay {
  position: fixed;
  inset: 0;
  z-index: 9500;
  background: rgba(0, 0, 0, 0.8);
  backdrop-filter: blur(8px);
  display: flex;
  align-items: center;
  justify-content: center;
  animation: haze-in 300ms ease;
}

@keyframes haze-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.ack-modal {
  position: relative;
  background: var(--panel-raised);
  border: 1px solid var(--border-soft);
  border-radius: 2rem;
  padding: 3rem;
  max-width: 26rem;
  text-align: center;
  box-shadow: 0 40px 100px rgba(0, 0, 0, 0.8);
}

.ack-close {
  position: absolute;
  top: 1rem;
  right: 1.25rem;
  font-size: 1.5rem;
  color: var(--text-muted);
  transition: color 200ms ease;
}

.ack-close:hover { color: white; }

.ack-glyph {
  display: inline-flex;
  width: 4rem;
  height: 4rem;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: linear-gradient(to top right, var(--azure), var(--violet));
  color: white;
  margin-bottom: 1.5rem;
}

.ack-headline {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 900;
  color: white;
  margin-bottom: 0.75rem;
}

.ack-detail {
  font-size: 0.938rem;
  color: var(--text-secondary);
}

/* === Footer === */
.site-footer {
  position: relative;
  z-index: 50;
  background: var(--panel);
  border-top: 1px solid var(--border-faint);
  padding: 5rem 0 2.5rem;
}

.footer-grid {
  max-width: 80rem;
  margin: 0 auto 4rem;
  padding: 0 1.5rem;
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 3rem;
}

.footer-brand {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.footer-blurb {
  font-size: 0.875rem;
  line-height: 1.7;
  color: var(--text-muted);
}

.footer-socials {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.footer-social {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.05);
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background 300ms ease;
}

.footer-social:hover { background: var(--azure); }

.footer-heading {
  font-size: 1.125rem;
  font-weight: 700;
  color: white;
  margin-bottom: 1.5rem;
}

.footer-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.footer-link {
  font-size: 0.875rem;
  color: var(--text-muted);
  transition: color 300ms ease;
}

.footer-link:hover { color: var(--azure); }

.footer-contact-row {
  display: flex;
  gap: 0.75rem;
  align-items: flex-start;
}

.footer-contact-icon {
  color: var(--azure);
  flex-shrink: 0;
  padding-top: 0.125rem;
}

.footer-contact-value {
  font-size: 0.875rem;
  color: var(--text-muted);
}

.footer-bar {
  max-width: 80rem;
  margin: 0 auto;
  padding: 2.5rem 1.5rem 0;
  border-top: 1px solid var(--border-faint);
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1.5rem;
  flex-wrap: wrap;
}

.footer-copyright {
  font-size: 0.75rem;
  color: #4b5563;
}

.footer-policies {
  display: flex;
  gap: 2rem;
}

.footer-policy {
  font-size: 0.75rem;
  color: #4b5563;
  transition: color 300ms ease;
}

.footer-policy:hover { color: white; }

/* === Responsive === */
@media (max-width: 1024px) {
  .nav-links { display: none; }
  .menu-toggle { display: flex; }
  .mobile-menu { display: block; }

  .hero-grid { grid-template-columns: 1fr; }
  .hero-media-reveal { display: none; }

  .split-hero {
    grid-template-columns: 1fr;
    gap: 3rem;
  }

  .card-grid.three { grid-template-columns: repeat(2, 1fr); }
  .card-grid.four { grid-template-columns: repeat(2, 1fr); }
  .process-grid { grid-template-columns: repeat(2, 1fr); }
  .process-line { display: none; }
}

@media (max-width: 768px) {
  .card-grid.three,
  .card-grid.four,
  .process-grid,
  .form-row,
  .contact-grid { grid-template-columns: 1fr; }

  .stats-grid {
    grid-template-columns: repeat(2, 1fr);
    gap: 3rem;
  }

  .footer-grid { grid-template-columns: 1fr; }

  .hero { padding-top: 7rem; }
  .hero-actions { flex-direction: column; align-items: flex-start; }

  /* Touch devices get the native cursor back */
  body { cursor: auto; }
  .cursor-ring, .cursor-dot { display: none; }
}
"#;
