//! Derivation engine: a pure mapping from [`Settings`] to everything the
//! tuner displays or exports.
//!
//! Nothing here holds state. The same settings always give byte-identical
//! CSS and the same breakpoint integers, so callers recompute after every
//! change instead of caching.

pub mod breakpoints;
mod global;
pub mod number;
pub mod properties;
mod utilities;

use serde::Serialize;

use crate::settings::{Method, Settings};

pub use breakpoints::{BreakpointSize, Breakpoints, Device};
pub use properties::CustomProperty;
pub use utilities::TIER_NAMES;

/// Label text for the three sliders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayValues {
    /// `"16px"`
    pub base_font_size: String,
    /// `"1.25"`
    pub type_scale: String,
    /// `"0.5vw"`
    pub viewport_scale: String,
}

/// All derived outputs for one settings snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derived {
    pub display: DisplayValues,
    pub breakpoints: Breakpoints,
    pub css: String,
    pub custom_properties: Vec<CustomProperty>,
}

/// Compute every derived value.
pub fn derive(settings: &Settings) -> Derived {
    Derived {
        display: display_values(settings),
        breakpoints: breakpoints::compute(settings),
        css: generate_css(settings),
        custom_properties: properties::compute(settings),
    }
}

pub fn display_values(settings: &Settings) -> DisplayValues {
    DisplayValues {
        base_font_size: format!("{}px", settings.base_font_size()),
        type_scale: number::css_number(settings.type_scale()),
        viewport_scale: number::vw(settings.viewport_scale()),
    }
}

/// Generated stylesheet in the shape selected by [`Settings::method`].
pub fn generate_css(settings: &Settings) -> String {
    let rules = match settings.method() {
        Method::Global => global::generate(settings),
        Method::Individual => utilities::generate(settings),
    };
    let mut css = rules.join("\n\n");
    css.push('\n');
    css
}

/// Format one rule: selector, then one declaration per line.
fn rule(selector: &str, declarations: &[(&str, String)]) -> String {
    let mut s = format!("{selector} {{\n");
    for (prop, value) in declarations {
        s.push_str(&format!("  {prop}: {value};\n"));
    }
    s.push('}');
    s
}

/// `clamp(min, mid + <vw>vw, max)` from preformatted px bounds.
fn fluid_clamp(min: String, mid: String, viewport: f64, max: String) -> String {
    format!("clamp({min}, {mid} + {}, {max})", number::vw(viewport))
}

/// Exponents of the type scale for min / preferred / max and the
/// viewport coefficient applied to V.
#[derive(Debug, Clone, Copy)]
struct ScaleStep {
    exponents: [f64; 3],
    viewport_coeff: f64,
}

/// Clamp whose px bounds are `round(B * scale^p)`.
fn scale_clamp(settings: &Settings, step: &ScaleStep) -> String {
    let base = f64::from(settings.base_font_size());
    let scale = settings.type_scale();
    let [min, mid, max] =
        step.exponents.map(|p| format!("{}px", number::round_half_up(base * scale.powf(p))));
    fluid_clamp(min, mid, settings.viewport_scale() * step.viewport_coeff, max)
}

#[cfg(test)]
mod tests;
