/// Page chrome plus the preview rules. The preview reads the four custom
/// properties the tuner pushes onto `:root`, so it tracks every change
/// without reloading the generated stylesheet.
pub(super) fn build_css() -> String {
    r#"* { margin: 0; padding: 0; box-sizing: border-box; }
html, body { background: #F9FAFB; color: #111827;
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif; }

.container { max-width: 1200px; margin: 0 auto; padding: 32px 16px; }
.header { text-align: center; margin-bottom: 48px; }
.header h1 { font-size: 40px; font-weight: 700; margin-bottom: 16px; }
.header p { font-size: 18px; color: #4B5563; max-width: 48rem; margin: 0 auto; }

/* ── Layout ──────────────────────────────────────── */
.grid { display: grid; grid-template-columns: 1fr; gap: 32px; }
@media (min-width: 1024px) { .grid { grid-template-columns: 1fr 1fr; } }
.column > * + * { margin-top: 24px; }

/* ── Controls ────────────────────────────────────── */
.control-panel {
  background: #FFF; border-radius: 8px; padding: 24px;
  box-shadow: 0 1px 3px rgba(0,0,0,0.1);
}
.control-panel h3 { font-size: 20px; font-weight: 600; margin-bottom: 16px; }
.control + .control { margin-top: 16px; }
.control label.title {
  display: block; font-size: 14px; font-weight: 500; color: #374151; margin-bottom: 8px;
}
.control .range { display: flex; justify-content: space-between;
  font-size: 12px; color: #6B7280; margin-top: 4px; }
.slider { width: 100%; }
select { width: 100%; padding: 8px 12px; border: 1px solid #D1D5DB; border-radius: 6px; }
.radio { display: flex; align-items: center; font-size: 14px; }
.radio + .radio { margin-top: 12px; }
.radio input { margin-right: 12px; }
.input-error { color: #B91C1C; font-size: 12px; margin-top: 8px; min-height: 1em; }

/* ── Output ──────────────────────────────────────── */
.code-output {
  background: #1F2937; color: #E5E7EB; border-radius: 6px; padding: 16px;
  font-family: 'JetBrains Mono', monospace; font-size: 12px; white-space: pre;
  overflow: auto; max-height: 420px;
}
.copy-btn {
  margin-top: 12px; width: 100%; background: #2563EB; color: #FFF; border: none;
  padding: 8px 16px; border-radius: 6px; cursor: pointer; font-size: 14px;
}
.copy-btn:hover { background: #1D4ED8; }
.copy-btn.copied { background: #16A34A; }
.copy-btn.failed { background: #B91C1C; }

/* ── Preview ─────────────────────────────────────── */
.preview-card {
  background: #FFF; border-radius: 8px; padding: 32px;
  box-shadow: 0 10px 15px rgba(0,0,0,0.1);
}
.typography {
  font-size: var(--font-size-base);
  line-height: var(--line-height-base);
  letter-spacing: var(--letter-spacing-base);
}
.typography h1, .typography h2, .typography h3,
.typography h4, .typography h5, .typography h6 {
  line-height: 1.25; letter-spacing: -0.025em; margin: 1.5em 0 0.5em;
}
.typography h1 { font-size: calc(var(--font-size-base) * var(--font-scale-ratio) * var(--font-scale-ratio) * var(--font-scale-ratio) * var(--font-scale-ratio)); margin-top: 0; }
.typography h2 { font-size: calc(var(--font-size-base) * var(--font-scale-ratio) * var(--font-scale-ratio) * var(--font-scale-ratio)); }
.typography h3 { font-size: calc(var(--font-size-base) * var(--font-scale-ratio) * var(--font-scale-ratio)); }
.typography h4 { font-size: calc(var(--font-size-base) * var(--font-scale-ratio)); }
.typography h5 { font-size: var(--font-size-base); }
.typography h6 { font-size: calc(var(--font-size-base) / var(--font-scale-ratio)); }
.typography p { margin-bottom: 1em; }
.typography .lead { font-size: calc(var(--font-size-base) * var(--font-scale-ratio)); color: #4B5563; }
.typography .small { font-size: calc(var(--font-size-base) / var(--font-scale-ratio)); }
.typography blockquote {
  border-left: 4px solid #2563EB; padding-left: 1em; font-style: italic;
  color: #4B5563; margin: 1.5em 0;
}
.typography code { font-family: 'JetBrains Mono', monospace; font-size: 0.875em;
  background: #F3F4F6; padding: 0.1em 0.3em; border-radius: 3px; }
.typography pre { background: #1F2937; color: #E5E7EB; padding: 1em; border-radius: 6px;
  overflow: auto; margin-bottom: 1em; }
.typography pre code { background: none; padding: 0; color: inherit; }
.typography ul { padding-left: 1.5em; margin-bottom: 1em; }

/* ── Breakpoints ─────────────────────────────────── */
.breakpoints { display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; text-align: center; }
.breakpoint { background: #F9FAFB; border-radius: 4px; padding: 12px; }
.breakpoint .name { font-size: 12px; color: #6B7280; }
.breakpoint .size { font-size: 14px; font-family: 'JetBrains Mono', monospace; }
"#
    .to_string()
}
