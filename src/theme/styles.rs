//! Global CSS for the portfolio page.
//!
//! Light and dark palettes hang off `[data-theme]` on the page root; the
//! core toggles classes (`animate-in`, `nav--scrolled`, `error`, ...) and
//! inline styles, and everything visual follows from here.

pub const GLOBAL_STYLES: &str = r#"
/* === Palette === */
[data-theme="light"] {
  --bg: #ffffff;
  --bg-alt: #f8fafc;
  --surface: #ffffff;
  --border: #e2e8f0;
  --text: #0f172a;
  --text-muted: #64748b;
  --accent: #2563eb;
  --accent-soft: rgba(37, 99, 235, 0.1);
  --danger: #dc2626;
  --success: #16a34a;
  --shadow: 0 10px 30px rgba(15, 23, 42, 0.08);
}

[data-theme="dark"] {
  --bg: #0b1120;
  --bg-alt: #111827;
  --surface: #1e293b;
  --border: #334155;
  --text: #f1f5f9;
  --text-muted: #94a3b8;
  --accent: #3b82f6;
  --accent-soft: rgba(59, 130, 246, 0.15);
  --danger: #f87171;
  --success: #4ade80;
  --shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

html { scroll-behavior: smooth; }

.page {
  min-height: 100vh;
  background: var(--bg);
  color: var(--text);
  font-family: 'Inter', system-ui, -apple-system, sans-serif;
  line-height: 1.6;
  transition: background 0.3s ease, color 0.3s ease;
  opacity: 0;
}

.page.loaded { opacity: 1; transition: opacity 0.4s ease; }

.container { max-width: 1100px; margin: 0 auto; padding: 0 1.5rem; }

/* === Navigation === */
.nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 80px;
  z-index: 100;
  background: transparent;
  transition: background 0.3s ease, box-shadow 0.3s ease;
}

.nav--scrolled { background: var(--surface); box-shadow: var(--shadow); }

.nav__container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.nav__logo { font-weight: 700; font-size: 1.25rem; color: var(--text); text-decoration: none; }

.nav__menu { display: flex; gap: 1.5rem; list-style: none; }

.nav__link { color: var(--text-muted); text-decoration: none; font-weight: 500; }
.nav__link:hover, .nav__link.active { color: var(--accent); }

.nav__actions { display: flex; align-items: center; gap: 1rem; }

.nav__toggle { display: none; background: none; border: none; cursor: pointer; flex-direction: column; gap: 4px; }
.nav__toggle-bar { display: block; width: 22px; height: 2px; background: var(--text); }

@media (max-width: 768px) {
  .nav__toggle { display: flex; }
  .nav__menu {
    position: fixed;
    top: 80px;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem;
    background: var(--surface);
    transform: translateY(-120%);
    transition: transform 0.3s ease;
  }
  .nav__menu--open { transform: translateY(0); }
}

/* === Theme switch === */
.theme-toggle { position: relative; display: inline-block; width: 48px; height: 26px; }
.theme-toggle__input { opacity: 0; width: 0; height: 0; }
.theme-toggle__slider {
  position: absolute;
  inset: 0;
  border-radius: 26px;
  background: var(--border);
  cursor: pointer;
  transition: background 0.3s ease;
}
.theme-toggle__slider::before {
  content: "";
  position: absolute;
  left: 3px;
  top: 3px;
  width: 20px;
  height: 20px;
  border-radius: 50%;
  background: var(--surface);
  transition: transform 0.3s ease;
}
.theme-toggle__input:checked + .theme-toggle__slider { background: var(--accent); }
.theme-toggle__input:checked + .theme-toggle__slider::before { transform: translateX(22px); }

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font-weight: 600;
  text-decoration: none;
  cursor: pointer;
  border: 2px solid var(--accent);
  transition: transform 0.2s ease, box-shadow 0.2s ease;
}
.btn:hover { transform: translateY(-2px); box-shadow: var(--shadow); }
.btn:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
.btn--primary { background: var(--accent); color: #ffffff; }
.btn--secondary { background: transparent; color: var(--accent); }

/* === Sections and reveals === */
.section { padding: 6rem 0; position: relative; z-index: 2; }
.section:nth-of-type(even) { background: var(--bg-alt); }
.section__header { text-align: center; margin-bottom: 3rem; }
.section__title { font-size: 2.25rem; }
.section__subtitle { color: var(--text-muted); }

.section, .project-card, .skill-item {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}
.animate-child { opacity: 0; transform: translateY(20px); transition: opacity 0.5s ease, transform 0.5s ease; }
.animate-in { opacity: 1; transform: translateY(0); }

/* === Hero === */
.hero { min-height: 100vh; display: flex; align-items: center; padding-top: 80px; }
.hero__title { font-size: 3.5rem; line-height: 1.2; }
.hero__subtitle { font-size: 1.25rem; color: var(--text-muted); margin: 1rem 0 2rem; }
.hero__actions .btn { margin-right: 1rem; }

.glitch { position: relative; color: var(--accent); }

.floating-shapes { position: fixed; inset: 0; pointer-events: none; z-index: 0; }
.floating-shape {
  position: absolute;
  border-radius: 50%;
  background: var(--accent-soft);
  transition: transform 0.3s ease-out;
}
.floating-shape--0 { width: 300px; height: 300px; top: 10%; left: 5%; }
.floating-shape--1 { width: 200px; height: 200px; top: 55%; right: 10%; }
.floating-shape--2 { width: 120px; height: 120px; bottom: 10%; left: 40%; }

/* === Skills === */
.skills__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 2rem; }
.skills__category-title { margin-bottom: 1rem; }
.skill-item { margin-bottom: 1.25rem; }
.skill-item__info { display: flex; justify-content: space-between; margin-bottom: 0.4rem; }
.skill-item__level { color: var(--text-muted); }
.skill-progress { height: 8px; border-radius: 4px; background: var(--border); overflow: hidden; }
.skill-progress__bar { height: 100%; width: 0; background: var(--accent); transition: width 1s ease; }

/* === Projects === */
.projects__grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 2rem; }
.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  box-shadow: var(--shadow);
}
.project-card__image img { width: 100%; height: 200px; object-fit: cover; display: block; }
.project-card__content { padding: 1.5rem; }
.project-card__description { color: var(--text-muted); margin: 0.5rem 0 1rem; }
.project-card__links { display: flex; gap: 0.75rem; margin-top: 1rem; }
.tag {
  display: inline-block;
  margin: 0 0.4rem 0.4rem 0;
  padding: 0.2rem 0.6rem;
  border-radius: 999px;
  font-size: 0.8rem;
  background: var(--accent-soft);
  color: var(--accent);
}

/* === Experience === */
.experience__filters { display: flex; justify-content: center; gap: 0.75rem; margin-bottom: 2.5rem; }
.filter-btn {
  padding: 0.5rem 1.25rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: transparent;
  color: var(--text);
  cursor: pointer;
}
.filter-btn--active { background: var(--accent); border-color: var(--accent); color: #ffffff; }

.timeline { position: relative; max-width: 760px; margin: 0 auto; padding-left: 2rem; border-left: 2px solid var(--border); }
.timeline-item { position: relative; margin-bottom: 2rem; opacity: 0; transition: opacity 0.5s ease; }
.timeline-item__marker {
  position: absolute;
  left: calc(-2rem - 7px);
  top: 0.4rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--accent);
}
.timeline-item__date { color: var(--accent); font-size: 0.9rem; font-weight: 600; }
.timeline-item__subtitle { color: var(--text-muted); }

/* === Contact === */
.contact__form { display: grid; gap: 1.25rem; max-width: 640px; margin: 0 auto; }
.form-label { display: block; font-weight: 600; margin-bottom: 0.4rem; }
.form-required { color: var(--danger); }
.form-input {
  width: 100%;
  padding: 0.75rem 1rem;
  border-radius: 8px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--text);
  font: inherit;
}
.form-input:focus { outline: none; border-color: var(--accent); }
.form-input.error { border-color: var(--danger); }
.form-error { display: none; color: var(--danger); font-size: 0.85rem; margin-top: 0.3rem; }
.form-error.show { display: block; }
.contact__success { text-align: center; color: var(--success); }

/* === Modal === */
.modal { position: fixed; inset: 0; z-index: 200; display: none; align-items: center; justify-content: center; }
.modal[aria-hidden="false"] { display: flex; }
.modal__overlay { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.6); }
.modal__content {
  position: relative;
  max-width: 760px;
  max-height: 90vh;
  overflow-y: auto;
  padding: 2rem;
  border-radius: 12px;
  background: var(--surface);
}
.modal__close {
  position: absolute;
  top: 1rem;
  right: 1rem;
  font-size: 1.75rem;
  background: none;
  border: none;
  color: var(--text);
  cursor: pointer;
}
.modal-project__image img { width: 100%; border-radius: 8px; }
.modal-project__section { margin-top: 1.5rem; }
.modal-project__links { display: flex; gap: 1rem; margin-top: 2rem; }

/* === Effects === */
.matrix-rain { position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 0; opacity: 0; transition: opacity 0.5s ease; }
.matrix-column {
  position: absolute;
  top: -100%;
  font-family: monospace;
  font-size: 14px;
  line-height: 1.1;
  color: #22c55e;
  animation-name: matrix-fall;
  animation-timing-function: linear;
  animation-fill-mode: forwards;
}
@keyframes matrix-fall { to { transform: translateY(200vh); } }

.footer { padding: 2rem 0; text-align: center; color: var(--text-muted); }

/* === Print === */
.printing .nav,
.printing .matrix-rain,
.printing .floating-shapes,
.printing .particle-canvas,
.printing .modal { display: none !important; }
.printing .section, .printing .animate-child, .printing .timeline-item { opacity: 1; transform: none; }
"#;
