//! Global CSS styles for Sweetheart.
//!
//! Soft pink valentine palette, floating hearts, flip cards and the envelope.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ROSE (Primary, Buttons, Hearts) */
  --rose: #ff4d6d;
  --rose-light: #ff8fa3;
  --rose-pale: #ffccd5;
  --rose-glow: rgba(255, 77, 109, 0.35);

  /* BLUSH (Backgrounds) */
  --blush: #fff0f3;
  --blush-deep: #ffe3e8;

  /* TEXT */
  --text-primary: #590d22;
  --text-secondary: #800f2f;
  --text-muted: rgba(89, 13, 34, 0.6);

  /* Typography */
  --font-script: 'Dancing Script', 'Brush Script MT', cursive;
  --font-body: 'Poppins', 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-flip: 0.8s cubic-bezier(0.4, 0.2, 0.2, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-body);
  background: linear-gradient(180deg, var(--blush) 0%, var(--blush-deep) 100%);
  color: var(--text-primary);
  min-height: 100vh;
  overflow-x: hidden;
}

.page {
  position: relative;
  z-index: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 5rem;
  padding: 4rem 1.5rem 6rem;
}

.page-title {
  font-family: var(--font-script);
  font-size: 3rem;
  color: var(--text-secondary);
  text-align: center;
}

.section-title {
  font-family: var(--font-script);
  font-size: 2.25rem;
  color: var(--rose);
  text-align: center;
  margin-bottom: 2rem;
}

.error-text {
  color: var(--rose);
  text-align: center;
}

/* === Floating Hearts === */
.floating-hearts {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 0;
}

.heart {
  position: absolute;
  bottom: -3rem;
  animation-name: float-up;
  animation-timing-function: linear;
  animation-fill-mode: forwards;
  opacity: 0.8;
  user-select: none;
}

@keyframes float-up {
  0% { transform: translateY(0) rotate(0deg); opacity: 0.9; }
  100% { transform: translateY(-110vh) rotate(360deg); opacity: 0; }
}

/* === Question Box === */
.question-box {
  position: relative;
  background: rgba(255, 255, 255, 0.85);
  border-radius: 24px;
  box-shadow: 0 20px 50px var(--rose-glow);
  padding: 3rem 2.5rem;
  max-width: 560px;
  width: 100%;
  text-align: center;
}

.question-emoji {
  font-size: 3rem;
  margin-bottom: 1rem;
}

.buttons {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  margin-top: 2rem;
}

.btn {
  font-family: var(--font-body);
  font-size: 1.125rem;
  font-weight: 600;
  border: none;
  border-radius: 999px;
  padding: 0.75rem 2.25rem;
  cursor: pointer;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    left var(--transition-normal), top var(--transition-normal);
}

.btn-yes {
  background: var(--rose);
  color: #fff;
  box-shadow: 0 8px 20px var(--rose-glow);
}

.btn-yes:hover {
  transform: scale(1.08);
}

.btn-no {
  background: #fff;
  color: var(--rose);
  border: 2px solid var(--rose-light);
  z-index: 50;
}

/* === Success Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(89, 13, 34, 0.45);
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-content {
  position: relative;
  background: #fff;
  border-radius: 24px;
  padding: 3rem 2.5rem 2.5rem;
  max-width: 420px;
  text-align: center;
  animation: pop-in 0.4s ease;
}

.close-modal {
  position: absolute;
  top: 0.75rem;
  right: 1.25rem;
  font-size: 2rem;
  color: var(--text-muted);
  cursor: pointer;
}

.modal-title {
  font-family: var(--font-script);
  font-size: 2.5rem;
  color: var(--rose);
}

.modal-description {
  margin-top: 1rem;
  color: var(--text-secondary);
}

.modal-hearts {
  margin-top: 1.5rem;
  font-size: 2rem;
}

@keyframes pop-in {
  0% { transform: scale(0.6); opacity: 0; }
  100% { transform: scale(1); opacity: 1; }
}

/* === Time Together === */
.time-together {
  width: 100%;
  max-width: 720px;
}

.time-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.25rem;
}

.time-unit {
  display: flex;
  flex-direction: column;
  align-items: center;
  background: #fff;
  border-radius: 18px;
  padding: 1.5rem 1rem;
  box-shadow: 0 10px 30px var(--rose-glow);
}

.time-value {
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--rose);
  font-variant-numeric: tabular-nums;
}

.time-label {
  margin-top: 0.25rem;
  font-size: 0.875rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: var(--text-muted);
}

.time-caption {
  margin-top: 1.5rem;
  text-align: center;
  color: var(--text-secondary);
}

/* === Gallery === */
.gallery-section {
  width: 100%;
  max-width: 960px;
}

.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
  gap: 1.5rem;
}

.gallery-item {
  height: 260px;
  perspective: 1000px;
  cursor: pointer;
}

.gallery-inner {
  position: relative;
  width: 100%;
  height: 100%;
  transition: transform var(--transition-flip);
  transform-style: preserve-3d;
}

.gallery-item.flipped .gallery-inner {
  transform: rotateY(180deg);
}

.gallery-front, .gallery-back {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 18px;
  backface-visibility: hidden;
  box-shadow: 0 10px 30px var(--rose-glow);
}

.gallery-front {
  background: #fff;
}

.gallery-back {
  background: var(--rose);
  color: #fff;
  transform: rotateY(180deg);
  padding: 1.5rem;
}

.gallery-emoji {
  font-size: 4.5rem;
}

.gallery-img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  border-radius: 18px;
}

.gallery-caption {
  text-align: center;
  font-size: 1rem;
  line-height: 1.5;
}

/* === Envelope === */
.envelope-section {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
}

.click-instruction {
  color: var(--text-secondary);
  transition: opacity var(--transition-normal);
}

.envelope {
  position: relative;
  width: 320px;
  height: 210px;
  cursor: pointer;
}

.envelope-body {
  position: absolute;
  inset: 0;
  background: var(--rose-light);
  border-radius: 0 0 12px 12px;
  z-index: 2;
}

.envelope-flap {
  position: absolute;
  top: 0;
  left: 0;
  width: 0;
  height: 0;
  border-left: 160px solid transparent;
  border-right: 160px solid transparent;
  border-top: 110px solid var(--rose);
  transform-origin: top;
  transition: transform 0.6s ease;
  z-index: 3;
}

.envelope.open .envelope-flap {
  transform: rotateX(180deg);
  z-index: 1;
}

.card-content {
  position: absolute;
  left: 20px;
  right: 20px;
  top: 10px;
  height: 190px;
  transition: transform 0.8s ease, top 0.8s ease;
  transform-style: preserve-3d;
  z-index: 1;
  cursor: default;
}

.envelope.open .card-content {
  top: -170px;
  z-index: 4;
  cursor: pointer;
}

.card-content.flipped {
  transform: rotateY(180deg);
}

.card-front, .card-back {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  border-radius: 12px;
  background: #fff;
  backface-visibility: hidden;
  box-shadow: 0 6px 20px var(--rose-glow);
  padding: 1rem;
  text-align: center;
}

.card-front h3 {
  font-family: var(--font-script);
  font-size: 2rem;
  color: var(--rose);
}

.card-back {
  transform: rotateY(180deg);
}

.card-message {
  color: var(--text-secondary);
  line-height: 1.6;
}

@media (max-width: 600px) {
  .page-title { font-size: 2.25rem; }
  .time-grid { grid-template-columns: 1fr; }
}
"#;
