//! Global stylesheet and background effects

use dioxus::prelude::*;

/// Global CSS with theme variables
pub const GLOBAL_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;700&family=Space+Grotesk:wght@300;500;700&display=swap');

/* CSS Reset and Base Styles */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --bg-primary: #020617;
    --bg-footer: #01040f;
    --bg-panel: rgba(15, 23, 42, 0.5);
    --bg-panel-solid: #0f172a;
    --bg-raised: #1e293b;
    --border-color: #1e293b;
    --border-strong: #334155;
    --text-primary: #e2e8f0;
    --text-strong: #ffffff;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --text-faint: #334155;
    --neon-purple: #a855f7;
    --neon-purple-deep: #9333ea;
    --neon-cyan: #06b6d4;
    --neon-cyan-light: #22d3ee;
    --neon-green: #4ade80;
    --alert-red: #ef4444;
}

body {
    background-color: var(--bg-primary);
    color: var(--text-primary);
    font-family: 'Space Grotesk', sans-serif;
    line-height: 1.5;
    overflow-x: hidden;
}

::selection {
    background: var(--neon-purple);
    color: white;
}

.font-mono {
    font-family: 'JetBrains Mono', monospace;
}

button {
    font: inherit;
    cursor: pointer;
}

/* Background effects */
.app-container {
    min-height: 100vh;
    position: relative;
}

.bg-grid {
    position: fixed;
    inset: 0;
    z-index: 0;
    pointer-events: none;
    background-size: 50px 50px;
    background-image:
        linear-gradient(to right, rgba(255, 255, 255, 0.05) 1px, transparent 1px),
        linear-gradient(to bottom, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
    mask-image: radial-gradient(circle at center, black 40%, transparent 100%);
}

.bg-fade {
    position: fixed;
    inset: 0;
    z-index: 0;
    pointer-events: none;
    background: linear-gradient(to bottom, transparent, var(--bg-primary));
}

.scanline {
    width: 100%;
    height: 100px;
    z-index: 50;
    background: linear-gradient(0deg, rgba(0,0,0,0) 0%, rgba(255, 255, 255, 0.02) 50%, rgba(0,0,0,0) 100%);
    opacity: 0.1;
    position: fixed;
    bottom: 100%;
    animation: scanline 10s linear infinite;
    pointer-events: none;
}

@keyframes scanline {
    0% { bottom: 100%; }
    100% { bottom: -100px; }
}

.animate-float {
    animation: float 6s ease-in-out infinite;
}

@keyframes float {
    0% { transform: translateY(0px); }
    50% { transform: translateY(-20px); }
    100% { transform: translateY(0px); }
}

@keyframes fadeIn {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes pulse {
    50% { opacity: 0.5; }
}

@keyframes bounce {
    0%, 100% { transform: translateY(-25%); }
    50% { transform: translateY(0); }
}

.text-glow {
    text-shadow: 0 0 10px rgba(168, 85, 247, 0.5);
}

/* Navigation */
.navbar {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    background-color: rgba(2, 6, 23, 0.8);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}

.navbar-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 16px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 700;
    font-size: 1.25rem;
    letter-spacing: -0.05em;
    color: var(--text-strong);
    cursor: pointer;
    background: none;
    border: none;
}

.brand img {
    height: 40px;
    width: auto;
    object-fit: contain;
}

.brand-accent {
    color: var(--neon-cyan-light);
}

.nav-links {
    display: flex;
    align-items: baseline;
    gap: 32px;
    margin-left: 40px;
}

.nav-link {
    padding: 8px 12px;
    border-radius: 6px;
    font-size: 0.875rem;
    font-weight: 500;
    font-family: 'JetBrains Mono', monospace;
    color: #cbd5e1;
    background: none;
    border: none;
    transition: color 0.3s ease, background-color 0.3s ease;
}

.nav-link:hover {
    color: var(--text-strong);
    background-color: rgba(255, 255, 255, 0.05);
}

.nav-link.active {
    color: var(--neon-cyan-light);
    background-color: rgba(6, 182, 212, 0.1);
}

.login-btn {
    background-color: var(--neon-purple-deep);
    color: white;
    padding: 6px 16px;
    border-radius: 4px;
    font-size: 0.875rem;
    font-weight: 700;
    border: none;
}

.menu-toggle {
    display: none;
    padding: 8px;
    border-radius: 6px;
    color: var(--text-secondary);
    background: none;
    border: none;
}

.mobile-menu {
    background-color: var(--bg-primary);
    border-bottom: 1px solid var(--border-color);
    padding: 8px 8px 12px;
}

.mobile-link {
    display: block;
    width: 100%;
    text-align: left;
    padding: 8px 12px;
    border-radius: 6px;
    font-size: 1rem;
    font-weight: 500;
    color: #cbd5e1;
    background: none;
    border: none;
}

.mobile-link:hover {
    color: var(--text-strong);
    background-color: var(--bg-raised);
}

/* Buttons */
.btn {
    position: relative;
    overflow: hidden;
    padding: 12px 24px;
    font-family: 'JetBrains Mono', monospace;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    border: 2px solid;
    transition: all 0.3s ease;
}

.btn-content {
    position: relative;
    z-index: 10;
    display: flex;
    align-items: center;
    gap: 8px;
}

.btn-primary {
    background-color: var(--neon-purple-deep);
    border-color: var(--neon-purple-deep);
    color: white;
}

.btn-primary:hover {
    background-color: #7e22ce;
    border-color: #7e22ce;
}

.btn-secondary {
    background-color: transparent;
    border-color: var(--neon-cyan);
    color: var(--neon-cyan-light);
}

.btn-secondary:hover {
    background-color: rgba(6, 182, 212, 0.1);
}

/* Cards */
.card {
    position: relative;
    background-color: var(--bg-panel);
    backdrop-filter: blur(4px);
    border: 1px solid var(--border-color);
    padding: 24px;
    border-radius: 12px;
    transition: all 0.3s ease;
    opacity: 0;
    animation: fadeIn 0.5s ease-out forwards;
}

.card:hover {
    transform: translateY(-5px);
    box-shadow: 0 10px 30px -10px rgba(168, 85, 247, 0.3);
    border-color: rgba(168, 85, 247, 0.5);
}

.card-watermark {
    position: absolute;
    top: 0;
    right: 0;
    padding: 12px;
    opacity: 0.2;
}

.card-title {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 12px;
    display: flex;
    align-items: center;
    gap: 8px;
}

.card-title svg {
    color: #c084fc;
}

.card-body {
    color: var(--text-secondary);
    line-height: 1.625;
}

.corner-tl, .corner-br {
    position: absolute;
    width: 8px;
    height: 8px;
}

.corner-tl {
    top: 0;
    left: 0;
    border-top: 2px solid var(--neon-purple);
    border-left: 2px solid var(--neon-purple);
    border-top-left-radius: 6px;
}

.corner-br {
    bottom: 0;
    right: 0;
    border-bottom: 2px solid var(--neon-cyan);
    border-right: 2px solid var(--neon-cyan);
    border-bottom-right-radius: 6px;
}

/* Views */
.shell-main {
    position: relative;
    z-index: 10;
    transition: opacity 0.5s ease-in-out;
}

.page {
    padding: 96px 16px 0;
    margin: 0 auto;
    min-height: 100vh;
}

.page-narrow { max-width: 56rem; }
.page-medium { max-width: 64rem; }
.page-wide { max-width: 72rem; }

.accent-cyan { color: var(--neon-cyan-light); }
.accent-purple { color: #c084fc; }
.accent-green { color: var(--neon-green); }

.view-heading {
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 40px;
    display: flex;
    align-items: center;
    gap: 12px;
}

/* Home */
.hero {
    position: relative;
    min-height: 90vh;
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    text-align: center;
    padding: 80px 16px 0;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    z-index: 0;
    user-select: none;
    pointer-events: none;
}

.hero-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.6;
    mix-blend-mode: screen;
    filter: grayscale(30%);
}

.hero-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, #020617, rgba(2, 6, 23, 0.8), rgba(2, 6, 23, 0.6));
}

.hero-content {
    position: relative;
    z-index: 10;
    display: flex;
    flex-direction: column;
    align-items: center;
    max-width: 56rem;
    margin: 0 auto;
}

.status-badge {
    margin-bottom: 16px;
    display: inline-block;
    padding: 4px 16px;
    border-radius: 9999px;
    border: 1px solid rgba(168, 85, 247, 0.3);
    background-color: rgba(168, 85, 247, 0.1);
    color: #d8b4fe;
    font-size: 0.875rem;
    animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.hero-title {
    font-size: 6rem;
    font-weight: 700;
    margin-bottom: 24px;
    letter-spacing: -0.05em;
    color: var(--text-strong);
}

.hero-subtitle {
    display: block;
    margin-top: 8px;
    color: transparent;
    background: linear-gradient(to right, #c084fc, var(--neon-cyan-light));
    -webkit-background-clip: text;
    background-clip: text;
}

.hero-tagline {
    font-size: 1.25rem;
    color: #cbd5e1;
    max-width: 42rem;
    margin-bottom: 40px;
    font-weight: 300;
}

.hero-actions {
    display: flex;
    gap: 16px;
}

.hero-glyph {
    margin-top: 64px;
    opacity: 0.8;
    color: white;
    filter: drop-shadow(0 0 15px rgba(168, 85, 247, 0.5));
}

.pillars {
    padding: 80px 40px;
    max-width: 80rem;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}

/* Schedule */
.timeline {
    position: relative;
    border-left: 2px solid var(--border-color);
    margin-left: 16px;
    padding-left: 48px;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.timeline-entry {
    position: relative;
}

.timeline-dot {
    position: absolute;
    left: -59px;
    top: 4px;
    width: 24px;
    height: 24px;
    border-radius: 9999px;
    border: 4px solid var(--bg-primary);
    background-color: #475569;
}

.timeline-dot.dot-key {
    background-color: var(--neon-purple);
    box-shadow: 0 0 10px rgba(168, 85, 247, 0.8);
}

.timeline-dot.dot-alert {
    background-color: var(--alert-red);
}

.timeline-card {
    background-color: rgba(15, 23, 42, 0.4);
    border: 1px solid var(--border-color);
    padding: 20px;
    border-radius: 8px;
    transition: border-color 0.2s ease;
}

.timeline-card:hover {
    border-color: rgba(168, 85, 247, 0.5);
}

.timeline-time {
    display: block;
    font-size: 0.875rem;
    color: var(--neon-cyan-light);
    margin-bottom: 4px;
}

.timeline-title {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 8px;
}

.timeline-desc {
    color: var(--text-secondary);
}

/* Location */
.location-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 48px;
    align-items: center;
}

.venue-copy {
    font-size: 1.125rem;
    color: #cbd5e1;
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.venue-copy strong {
    color: var(--text-strong);
}

.venue-panel {
    background-color: rgba(15, 23, 42, 0.8);
    padding: 24px;
    border-radius: 8px;
    border: 1px solid var(--border-strong);
}

.venue-panel h4 {
    color: var(--neon-cyan-light);
    margin-bottom: 8px;
}

.venue-panel p {
    margin-bottom: 16px;
}

.venue-panel ul {
    list-style: disc inside;
}

.map-mock {
    position: relative;
    height: 24rem;
    background-color: var(--bg-raised);
    border-radius: 16px;
    overflow: hidden;
    border: 1px solid var(--border-strong);
    display: flex;
    align-items: center;
    justify-content: center;
}

.map-photo {
    position: absolute;
    inset: 0;
    background-image: url('/assets/_DSC0011.jpg');
    background-size: cover;
    background-position: center;
    opacity: 0.4;
    mix-blend-mode: overlay;
    transition: opacity 0.5s ease;
}

.map-mock:hover .map-photo {
    opacity: 0.6;
}

.map-pin {
    position: relative;
    z-index: 10;
    text-align: center;
    color: var(--neon-purple);
}

.map-pin svg {
    margin: 0 auto 16px;
    animation: bounce 1s infinite;
}

.map-btn {
    background-color: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(8px);
    padding: 8px 24px;
    border-radius: 9999px;
    border: 1px solid rgba(255, 255, 255, 0.3);
    color: white;
}

/* Mentors */
.mentor-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 24px;
}

.mentor-card {
    background-color: var(--bg-panel-solid);
    border: 1px solid var(--border-color);
    padding: 24px;
    border-radius: 12px;
    text-align: center;
    transition: all 0.2s ease;
}

.mentor-card:hover {
    border-color: var(--neon-cyan);
}

.mentor-avatar {
    width: 96px;
    height: 96px;
    margin: 0 auto 16px;
    border-radius: 9999px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    font-weight: 700;
    color: #475569;
    background: linear-gradient(to bottom right, #334155, #0f172a);
}

.mentor-name {
    font-size: 1.25rem;
    font-weight: 700;
    color: var(--text-strong);
}

.mentor-role {
    color: #c084fc;
    font-size: 0.875rem;
    margin-bottom: 8px;
}

.mentor-affiliation {
    color: var(--text-muted);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}

.mentor-cta {
    margin-top: 64px;
    background: linear-gradient(to right, rgba(88, 28, 135, 0.2), rgba(22, 78, 99, 0.2));
    padding: 32px;
    border-radius: 16px;
    border: 1px solid rgba(255, 255, 255, 0.1);
    text-align: center;
}

.mentor-cta h3 {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--text-strong);
    margin-bottom: 16px;
}

.mentor-cta p {
    color: var(--text-secondary);
    margin-bottom: 24px;
}

/* Footer */
.footer {
    background-color: var(--bg-footer);
    border-top: 1px solid var(--border-color);
    padding: 48px 0 32px;
    margin-top: 80px;
    position: relative;
    z-index: 10;
}

.footer-grid {
    max-width: 80rem;
    margin: 0 auto 32px;
    padding: 0 16px;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 32px;
}

.footer h3, .footer h4 {
    color: var(--text-strong);
    font-weight: 700;
    margin-bottom: 16px;
}

.footer-text, .footer-links {
    color: var(--text-muted);
    font-size: 0.875rem;
    list-style: none;
}

.footer-links li {
    margin-bottom: 8px;
    cursor: pointer;
}

.footer-links li:hover {
    color: var(--neon-cyan-light);
}

.socials {
    display: flex;
    gap: 16px;
}

.social {
    width: 32px;
    height: 32px;
    background-color: var(--bg-raised);
    border-radius: 4px;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
}

.social:hover {
    background-color: var(--neon-purple-deep);
}

.copyright {
    text-align: center;
    color: var(--text-faint);
    font-size: 0.75rem;
    border-top: 1px solid #0f172a;
    padding-top: 24px;
}

/* Responsive */
@media (max-width: 768px) {
    .nav-links {
        display: none;
    }

    .menu-toggle {
        display: inline-flex;
    }

    .hero-title {
        font-size: 3rem;
    }

    .hero-tagline {
        font-size: 1.125rem;
    }

    .hero-actions {
        flex-direction: column;
    }

    .pillars, .location-grid, .mentor-grid, .footer-grid {
        grid-template-columns: 1fr;
    }

    .pillars {
        padding: 80px 16px;
    }

    .timeline {
        padding-left: 32px;
    }

    .timeline-dot {
        left: -43px;
    }
}

@media (min-width: 769px) {
    .mobile-menu {
        display: none;
    }
}

@media (min-width: 769px) and (max-width: 1024px) {
    .mentor-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}
"#;

/// Inject global CSS into the document
pub fn inject_global_css() -> Element {
    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
    }
}

/// Fixed decorative layers behind every view
#[component]
pub fn Backdrop() -> Element {
    rsx! {
        div { class: "bg-grid" }
        div { class: "bg-fade" }
        div { class: "scanline" }
    }
}
