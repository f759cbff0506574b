//! Global CSS styles for Folio.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #111827;
  --muted: #6b7280;
  --border: #e5e7eb;
  --surface: #ffffff;
  --background: #f9fafb;
  --accent: #6366f1;
  --accent-soft: rgba(99, 102, 241, 0.12);
  --overlay: rgba(17, 24, 39, 0.7);

  --font-sans: 'Inter', system-ui, -apple-system, sans-serif;

  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--ink);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Section === */
.projects-section {
  max-width: 80rem;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.section-header {
  text-align: center;
  margin-bottom: 3rem;
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-subtitle {
  color: var(--muted);
  max-width: 42rem;
  margin: 0 auto;
}

/* === Category Pills === */
.category-pills {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.5rem;
  margin-bottom: 2.5rem;
}

.pill {
  padding: 0.5rem 1rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--surface);
  color: var(--ink);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.pill:hover {
  border-color: var(--accent);
}

.pill.selected {
  background: var(--ink);
  border-color: var(--ink);
  color: var(--surface);
}

/* === Grid === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 1.5rem;
}

.showcase-empty {
  text-align: center;
  color: var(--muted);
  padding: 3rem 0;
}

/* === Project Card === */
.project-card {
  background: var(--surface);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  overflow: hidden;
  cursor: pointer;
  transition: box-shadow var(--transition-normal);
}

.project-card:focus-visible {
  outline: 2px solid var(--accent);
  outline-offset: 2px;
}

.project-card.hovered {
  box-shadow: 0 10px 25px rgba(17, 24, 39, 0.12);
}

.project-card__media {
  position: relative;
  aspect-ratio: 16 / 9;
  overflow: hidden;
}

.project-card__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  transform: scale(1);
  transition: transform var(--transition-slow);
}

.project-card.hovered .project-card__image {
  transform: scale(1.05);
}

.project-card__overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  background: var(--overlay);
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal);
}

.project-card.hovered .project-card__overlay {
  opacity: 1;
  pointer-events: auto;
}

.project-card__toggle {
  position: absolute;
  bottom: 0.5rem;
  right: 0.5rem;
  z-index: 2;
}

.project-card__content {
  padding: 1.25rem;
}

.project-card__heading {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.project-card__title {
  font-size: 1.25rem;
  font-weight: 700;
}

.project-card__categories,
.project-card__tech,
.project-detail__categories,
.project-detail__tech {
  display: flex;
  flex-wrap: wrap;
  gap: 0.25rem;
}

.project-card__description {
  color: var(--muted);
  font-size: 0.875rem;
}

.project-card__tech {
  margin-top: 0.75rem;
}

/* === Badges === */
.badge {
  display: inline-block;
  padding: 0.125rem 0.5rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
  font-size: 0.75rem;
  font-weight: 600;
  white-space: nowrap;
}

.badge--outline {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--muted);
}

.badge--featured {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  background: var(--accent);
  color: var(--surface);
}

/* === Buttons === */
.btn-primary,
.btn-outline {
  display: inline-flex;
  align-items: center;
  gap: 0.375rem;
  padding: 0.5rem 1rem;
  border-radius: 8px;
  font: inherit;
  font-size: 0.875rem;
  text-decoration: none;
  cursor: pointer;
}

.btn-primary {
  background: var(--surface);
  border: 1px solid var(--surface);
  color: var(--ink);
}

.btn-outline {
  background: transparent;
  border: 1px solid var(--surface);
  color: var(--surface);
}

.project-detail .btn-primary {
  background: var(--ink);
  border-color: var(--ink);
  color: var(--surface);
}

.project-detail .btn-outline {
  border-color: var(--border);
  color: var(--ink);
}

.icon-btn {
  background: transparent;
  border: none;
  font-size: 1.5rem;
  line-height: 1;
  color: var(--muted);
  cursor: pointer;
  padding: 0.25rem 0.5rem;
}

.icon-btn:hover {
  color: var(--ink);
}

/* === Platform Toggle === */
.platform-toggle {
  display: inline-flex;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--surface);
  padding: 0.125rem;
  cursor: pointer;
  font: inherit;
}

.platform-option {
  padding: 0.125rem 0.625rem;
  border-radius: 999px;
  font-size: 0.75rem;
  color: var(--muted);
}

.platform-option.active {
  background: var(--ink);
  color: var(--surface);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.project-detail {
  background: var(--surface);
  border-radius: var(--radius);
  max-width: 720px;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.project-detail__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
}

.modal-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.project-detail__media {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.project-detail__image {
  width: 100%;
  max-height: 60vh;
  object-fit: contain;
  border-radius: 8px;
}

.project-detail__description {
  color: var(--muted);
}

.modal-actions {
  display: flex;
  gap: 0.75rem;
}
"#;
