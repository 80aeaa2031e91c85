//! WASM bindings for the typography tuner.
//!
//! Exposes the tuner to JavaScript via wasm-bindgen so a page can run the
//! whole derivation in the browser.
//! Build with: `wasm-pack build --target web --features wasm`

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::codegen::CustomProperty;
use crate::settings::Field;
use crate::tuner::{StyleSink, Tuner};

/// Style sink that writes onto `document.documentElement.style`.
pub struct DocumentStyle {
    root: Option<web_sys::HtmlElement>,
}

impl DocumentStyle {
    pub fn new() -> Self {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok());
        Self { root }
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleSink for DocumentStyle {
    fn apply_custom_properties(&mut self, props: &[CustomProperty]) {
        let Some(root) = &self.root else {
            return;
        };
        let style = root.style();
        for p in props {
            if let Err(e) = style.set_property(p.name, &p.value) {
                tracing::warn!(property = p.name, error = ?e, "setProperty failed");
            }
        }
    }
}

fn parse_field(field: &str) -> Result<Field, JsError> {
    field.parse::<Field>().map_err(|e| JsError::new(&e))
}

/// Stateful tuner bound to the current document.
#[wasm_bindgen]
pub struct TypographyTuner {
    inner: Tuner<DocumentStyle>,
}

#[wasm_bindgen]
impl TypographyTuner {
    /// Create a tuner with default settings and apply its custom properties.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TypographyTuner {
        TypographyTuner {
            inner: Tuner::new(DocumentStyle::new()),
        }
    }

    /// Apply one raw control value, e.g. `set("type-scale", "1.333")`.
    ///
    /// Throws on an unparseable value or unknown option; the previous
    /// value is kept.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), JsError> {
        let field = parse_field(field)?;
        self.inner
            .set(field, value)
            .map(drop)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// The generated CSS; this is also the copy payload.
    pub fn css(&self) -> String {
        self.inner.css().to_string()
    }

    /// All derived values as a plain JS object.
    pub fn derived(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.derived())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Current settings as a plain JS object.
    pub fn settings(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.settings())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Breakpoint sizes as `[mobile, tablet, desktop]` pixel integers.
    pub fn breakpoints(&self) -> js_sys::Array {
        self.inner
            .derived()
            .breakpoints
            .iter()
            .map(|b| JsValue::from_f64(b.size_px as f64))
            .collect()
    }
}

impl Default for TypographyTuner {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateless generation from raw control text.
///
/// Throws if any value is rejected.
#[wasm_bindgen]
pub fn generate_css(
    base_font_size: &str,
    type_scale: &str,
    line_height: &str,
    letter_spacing: &str,
    viewport_scale: &str,
    method: &str,
) -> Result<String, JsError> {
    crate::generate_css_from_raw([
        (Field::BaseFontSize, base_font_size),
        (Field::TypeScale, type_scale),
        (Field::LineHeight, line_height),
        (Field::LetterSpacing, letter_spacing),
        (Field::ViewportScale, viewport_scale),
        (Field::Method, method),
    ])
    .map_err(|e| JsError::new(&e.to_string()))
}
