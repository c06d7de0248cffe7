//! Global CSS for the Atelier portfolio.
//!
//! Paper-and-ink editorial look. The behavioral classes here pair with
//! the components: `header--scrolled`, `page--locked`, `fade-in` /
//! `visible`, `input--error`, `form-success--show`, the mobile menu
//! active states and the lightbox overlay.

pub const GLOBAL_STYLES: &str = r#"
/* === Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --paper: #faf8f4;
  --paper-raised: #ffffff;
  --paper-edge: #e8e3da;

  /* INK (Text) */
  --ink: #1c1a17;
  --ink-soft: rgba(28, 26, 23, 0.72);
  --ink-faint: rgba(28, 26, 23, 0.45);

  /* ACCENT */
  --rust: #b4552d;
  --rust-soft: rgba(180, 85, 45, 0.15);
  --error: #c0392b;
  --ok: #3d7a4f;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', sans-serif;

  /* Chrome */
  --header-height: 72px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 600ms cubic-bezier(0.4, 0, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  color: var(--ink);
  background: var(--paper);
  line-height: 1.6;
}

img {
  display: block;
  max-width: 100%;
}

/* === Page scroll container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.page--locked {
  overflow: hidden;
}

.page-main {
  max-width: 1080px;
  margin: 0 auto;
  padding: calc(var(--header-height) + 3rem) 2rem 4rem;
}

/* === Header === */
.header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--header-height);
  z-index: 40;
  background: transparent;
  transition: background var(--transition-normal), box-shadow var(--transition-normal);
}

.header--scrolled {
  background: var(--paper-raised);
  box-shadow: 0 1px 0 var(--paper-edge), 0 6px 24px rgba(28, 26, 23, 0.06);
}

.header-inner {
  max-width: 1080px;
  height: 100%;
  margin: 0 auto;
  padding: 0 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.header-logo {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--ink);
  text-decoration: none;
  letter-spacing: 0.04em;
}

.header-links {
  display: flex;
  gap: 2rem;
}

.header-link {
  color: var(--ink-soft);
  text-decoration: none;
  font-size: 0.9rem;
  text-transform: uppercase;
  letter-spacing: 0.12em;
  transition: color var(--transition-fast);
}

.header-link:hover {
  color: var(--rust);
}

/* === Burger & mobile menu === */
.header-burger {
  display: none;
  flex-direction: column;
  gap: 5px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 8px;
}

.burger-line {
  width: 24px;
  height: 2px;
  background: var(--ink);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.header-burger--active .burger-line:nth-child(1) {
  transform: translateY(7px) rotate(45deg);
}

.header-burger--active .burger-line:nth-child(2) {
  opacity: 0;
}

.header-burger--active .burger-line:nth-child(3) {
  transform: translateY(-7px) rotate(-45deg);
}

/* Layers under the fixed header so the burger stays clickable (and
   shows its X state) while the menu is open. */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 30;
  background: var(--paper);
  display: flex;
  align-items: center;
  justify-content: center;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.mobile-menu--active {
  opacity: 1;
  pointer-events: auto;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 2rem;
  text-align: center;
}

.mobile-menu-link {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--ink);
  text-decoration: none;
}

@media (max-width: 768px) {
  .header-links { display: none; }
  .header-burger { display: flex; }
}

/* === Reveal === */
.fade-in {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.fade-in.visible {
  opacity: 1;
  transform: translateY(0);
}

/* === Hero === */
.hero {
  padding: 4rem 0 6rem;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3rem;
  font-weight: 500;
  line-height: 1.15;
  max-width: 16em;
}

.hero-lede {
  margin-top: 1.5rem;
  max-width: 34em;
  color: var(--ink-soft);
  font-size: 1.1rem;
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2rem;
  font-weight: 500;
  margin-bottom: 2rem;
}

/* === Project cards === */
.work {
  padding: 3rem 0;
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(290px, 1fr));
  gap: 1.5rem;
}

.project-card {
  background: var(--paper-raised);
  border: 1px solid var(--paper-edge);
  border-radius: 4px;
  padding: 1.75rem;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover,
.project-card:focus-visible {
  transform: translateY(-4px);
  box-shadow: 0 12px 32px rgba(28, 26, 23, 0.1);
  outline: none;
}

.project-card:focus-visible {
  border-color: var(--rust);
}

.project-card-title {
  font-family: var(--font-serif);
  font-size: 1.35rem;
  font-weight: 500;
}

.project-card-summary {
  margin-top: 0.75rem;
  color: var(--ink-soft);
  font-size: 0.95rem;
}

.project-card-tags {
  margin-top: 1rem;
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.project-tag {
  font-size: 0.72rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--rust);
  background: var(--rust-soft);
  padding: 0.2rem 0.6rem;
  border-radius: 2px;
}

.project-card-link {
  display: inline-block;
  margin-top: 1.25rem;
  color: var(--rust);
  text-decoration: none;
  font-size: 0.9rem;
  border-bottom: 1px solid currentColor;
}

/* === Contact form === */
.contact {
  padding: 3rem 0 1rem;
}

.contact-form {
  max-width: 520px;
}

.form-field {
  margin-bottom: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.form-field label {
  font-size: 0.8rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--ink-faint);
}

.input {
  font: inherit;
  color: var(--ink);
  background: var(--paper-raised);
  border: 1px solid var(--paper-edge);
  border-radius: 3px;
  padding: 0.7rem 0.9rem;
  transition: border-color var(--transition-fast);
}

.input:focus {
  outline: none;
  border-color: var(--rust);
}

.input--error {
  border-color: var(--error);
}

.field-error {
  min-height: 1.2em;
  font-size: 0.8rem;
  color: var(--error);
}

.btn-submit {
  font: inherit;
  background: var(--ink);
  color: var(--paper);
  border: none;
  border-radius: 3px;
  padding: 0.8rem 2rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-submit:hover {
  background: var(--rust);
}

.form-success {
  margin-top: 1rem;
  padding: 0.8rem 1rem;
  border-left: 3px solid var(--ok);
  color: var(--ok);
  background: rgba(61, 122, 79, 0.08);
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.form-success--show {
  opacity: 1;
}

/* === Case study === */
.case-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  font-weight: 500;
}

.case-intro {
  margin-top: 1rem;
  max-width: 40em;
  color: var(--ink-soft);
}

.case-gallery {
  margin-top: 3rem;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}

.case-image {
  width: 100%;
  cursor: zoom-in;
  border-radius: 3px;
}

.figure-caption {
  margin-top: 0.5rem;
  font-size: 0.85rem;
  color: var(--ink-faint);
}

.case-back {
  display: inline-block;
  margin-top: 3rem;
  color: var(--rust);
  text-decoration: none;
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  background: rgba(12, 11, 10, 0.92);
  display: flex;
  align-items: center;
  justify-content: center;
  outline: none;
}

.lightbox-content {
  max-width: min(1080px, 88vw);
  max-height: 84vh;
  text-align: center;
}

.lightbox-image {
  max-width: 100%;
  max-height: 76vh;
  margin: 0 auto;
  border-radius: 2px;
}

.lightbox-caption {
  margin-top: 0.75rem;
  color: rgba(250, 248, 244, 0.75);
  font-size: 0.9rem;
}

.lightbox-close,
.lightbox-nav {
  position: absolute;
  background: none;
  border: none;
  color: rgba(250, 248, 244, 0.85);
  font-size: 2.2rem;
  line-height: 1;
  cursor: pointer;
  padding: 0.5rem 0.9rem;
  transition: color var(--transition-fast);
}

.lightbox-close:hover,
.lightbox-nav:hover {
  color: #ffffff;
}

.lightbox-close {
  top: 1.25rem;
  right: 1.5rem;
}

.lightbox-nav {
  top: 50%;
  transform: translateY(-50%);
  font-size: 3rem;
}

.lightbox-prev { left: 1rem; }
.lightbox-next { right: 1rem; }

/* === Footer === */
.site-footer {
  border-top: 1px solid var(--paper-edge);
  margin-top: 2rem;
  padding: 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1080px;
  margin-left: auto;
  margin-right: auto;
}

.local-time {
  font-size: 0.85rem;
  color: var(--ink-faint);
  letter-spacing: 0.04em;
}

.footer-year {
  font-size: 0.85rem;
  color: var(--ink-faint);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    /// First z-index declared in the block for `selector`
    fn z_index_of(selector: &str) -> i32 {
        let block = GLOBAL_STYLES
            .split_once(&format!("{selector} {{"))
            .map(|(_, rest)| rest)
            .and_then(|rest| rest.split_once('}'))
            .map(|(block, _)| block)
            .unwrap_or_else(|| panic!("no block for {selector}"));
        block
            .split("z-index:")
            .nth(1)
            .and_then(|v| v.split(';').next())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or_else(|| panic!("no z-index in {selector}"))
    }

    /// The burger cannot escape the header's stacking context, so the
    /// open menu must paint below the whole header for the toggle to
    /// stay clickable.
    #[test]
    fn test_mobile_menu_layers_under_header() {
        assert!(z_index_of(".mobile-menu") < z_index_of(".header"));
    }

    /// The lightbox overlay must cover both chrome layers
    #[test]
    fn test_lightbox_overlay_is_topmost() {
        let lightbox = z_index_of(".lightbox-overlay");
        assert!(lightbox > z_index_of(".header"));
        assert!(lightbox > z_index_of(".mobile-menu"));
    }
}
