use super::css::build_css;
use super::inline_js::build_inline_js;
use super::util::{html_escape, script_json};
use super::StateResponse;
use crate::codegen::number::css_number;
use crate::settings::{
    Field, LetterSpacing, LineHeight, Method, Settings, SliderRange, BASE_FONT_SIZE_RANGE,
    TYPE_SCALE_RANGE, VIEWPORT_SCALE_RANGE,
};
use crate::tuner::{PropertyMap, Tuner};

pub(super) fn build_tuner_page(tuner: &Tuner<PropertyMap>, seq: u64) -> String {
    let settings = tuner.settings();
    let derived = tuner.derived();
    let css = build_css();
    let controls = build_controls(settings);
    let preview = build_preview();
    let root_vars: String = derived
        .custom_properties
        .iter()
        .map(|p| format!("{}: {}; ", p.name, p.value))
        .collect();
    let css_output = html_escape(&derived.css);
    let breakpoints: String = derived
        .breakpoints
        .iter()
        .map(|b| {
            format!(
                r#"<div class="breakpoint"><div class="name">{}</div><div class="size" id="{}Size">{}</div></div>"#,
                b.device.name(),
                b.device.name().to_lowercase(),
                b.label
            )
        })
        .collect();
    let initial = script_json(&StateResponse::snapshot(tuner, seq, None));
    let inline_js = build_inline_js(&initial);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Responsive Typography Generator</title>
<style>
  :root {{ {root_vars}}}
  {css}
</style>
</head>
<body>
<div class="container">
  <div class="header">
    <h1>Responsive Typography Generator</h1>
    <p>Generate fluid, responsive typography with CSS variables and clamp().
      Control your type system with precision across all screen sizes.</p>
  </div>
  <div class="grid">
    <div class="column">
      {controls}
      <div class="control-panel">
        <h3>Generated CSS</h3>
        <div class="code-output" id="cssOutput">{css_output}</div>
        <button class="copy-btn" id="copyCss">Copy CSS</button>
      </div>
    </div>
    <div class="column">
      {preview}
      <div class="control-panel">
        <h3>Responsive Breakpoint Test</h3>
        <p style="font-size:14px;color:#4B5563;margin-bottom:16px">
          Resize your browser window to see the typography adapt in real time.</p>
        <div class="breakpoints">{breakpoints}</div>
      </div>
    </div>
  </div>
</div>
{inline_js}
</body>
</html>"##
    )
}

fn slider(field: Field, title: &str, range: SliderRange, value: &str, unit: &str, label: &str) -> String {
    let step = css_number(1.0 / range.steps_per_unit);
    let min = css_number(range.min);
    let max = css_number(range.max);
    format!(
        r#"<div class="control">
  <label class="title" for="{field}">{title}</label>
  <input type="range" id="{field}" class="slider" data-field="{field}" min="{min}" max="{max}" step="{step}" value="{value}">
  <div class="range"><span>{min}{unit}</span><span id="{field}-value">{label}</span><span>{max}{unit}</span></div>
</div>"#
    )
}

fn select<T: Copy + PartialEq>(
    field: Field,
    title: &str,
    options: &[T],
    current: T,
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> &'static str,
) -> String {
    let opts: String = options
        .iter()
        .map(|&o| {
            let selected = if o == current { " selected" } else { "" };
            format!(r#"<option value="{}"{selected}>{}</option>"#, value(o), label(o))
        })
        .collect();
    format!(
        r#"<div class="control">
  <label class="title" for="{field}">{title}</label>
  <select id="{field}" data-field="{field}">{opts}</select>
</div>"#
    )
}

fn build_controls(settings: &Settings) -> String {
    let display = crate::codegen::display_values(settings);
    let base = slider(
        Field::BaseFontSize,
        "Base Font Size",
        BASE_FONT_SIZE_RANGE,
        &settings.raw_value(Field::BaseFontSize),
        "px",
        &display.base_font_size,
    );
    let scale = slider(
        Field::TypeScale,
        "Type Scale Ratio",
        TYPE_SCALE_RANGE,
        &settings.raw_value(Field::TypeScale),
        "",
        &display.type_scale,
    );
    let line_height = select(
        Field::LineHeight,
        "Line Height",
        &LineHeight::ALL,
        settings.line_height(),
        LineHeight::as_str,
        LineHeight::label,
    );
    let letter_spacing = select(
        Field::LetterSpacing,
        "Letter Spacing",
        &LetterSpacing::ALL,
        settings.letter_spacing(),
        LetterSpacing::as_str,
        LetterSpacing::label,
    );
    let viewport = slider(
        Field::ViewportScale,
        "Viewport Scaling",
        VIEWPORT_SCALE_RANGE,
        &settings.raw_value(Field::ViewportScale),
        "vw",
        &display.viewport_scale,
    );

    let radio = |method: Method, label: &str| {
        let checked = if settings.method() == method { " checked" } else { "" };
        format!(
            r#"<label class="radio"><input type="radio" name="method" data-field="method" value="{method}"{checked}><span>{label}</span></label>"#
        )
    };
    let individual = radio(Method::Individual, "Individual Element Classes");
    let global = radio(Method::Global, "Global .typography Class");

    format!(
        r#"<div class="control-panel">
  <h3>Typography Controls</h3>
  {base}
  {scale}
  {line_height}
  {letter_spacing}
  {viewport}
  <div class="input-error" id="inputError"></div>
</div>
<div class="control-panel">
  <h3>Application Method</h3>
  {individual}
  {global}
</div>"#
    )
}

fn build_preview() -> String {
    r#"<div class="preview-card">
  <div class="typography" id="preview">
    <h1>Fluid Typography Showcase</h1>
    <p class="lead">This is a lead paragraph that demonstrates how responsive typography adapts
      across different screen sizes and devices.</p>
    <h2>Section Heading</h2>
    <p>This is a regular paragraph with normal text flow. Font sizes, line heights and spacing
      follow the viewport as it changes.</p>
    <h3>Subsection Title</h3>
    <p>Another paragraph showing how vertical rhythm holds across heading levels.</p>
    <blockquote>"Typography is the craft of endowing human language with a durable visual form."</blockquote>
    <h4>Code Examples</h4>
    <p>Inline code like <code>clamp(1rem, 0.9rem + 0.5vw, 1.125rem)</code> shows the fluid scaling.</p>
    <pre><code>.text-fluid-base {
  font-size: clamp(1rem, 0.9rem + 0.5vw, 1.125rem);
}</code></pre>
    <h5>Lists and Structure</h5>
    <ul>
      <li>Fluid typography scales smoothly</li>
      <li>No awkward breakpoints or jumps</li>
      <li>Works across all device sizes</li>
    </ul>
    <h6>Small Details</h6>
    <p class="small">Small text that stays readable while adding hierarchy.</p>
  </div>
</div>"#
        .to_string()
}

pub(super) fn build_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>fluid-type error</title></head>
<body style="font-family:monospace;background:#0A0A0A;color:#EF4444;padding:24px">
<pre>{}</pre>
</body>
</html>"#,
        html_escape(message)
    )
}
