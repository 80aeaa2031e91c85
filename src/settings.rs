//! The six tunable parameters and their validating setters.
//!
//! Every value that reaches a [`Settings`] has been parsed and brought into
//! its control's domain: numeric inputs are clamped to the slider range and
//! snapped to the slider step (logged at `warn`), enum inputs must match an
//! option exactly. A rejected input leaves the previous value in place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuneError};

/// Identifies one of the six controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    BaseFontSize,
    TypeScale,
    LineHeight,
    LetterSpacing,
    ViewportScale,
    Method,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::BaseFontSize,
        Field::TypeScale,
        Field::LineHeight,
        Field::LetterSpacing,
        Field::ViewportScale,
        Field::Method,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::BaseFontSize => "base-font-size",
            Field::TypeScale => "type-scale",
            Field::LineHeight => "line-height",
            Field::LetterSpacing => "letter-spacing",
            Field::ViewportScale => "viewport-scale",
            Field::Method => "method",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown control '{s}'"))
    }
}

/// Line height options offered by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineHeight {
    #[serde(rename = "1.25")]
    Tight,
    #[default]
    #[serde(rename = "1.5")]
    Normal,
    #[serde(rename = "1.75")]
    Relaxed,
}

impl LineHeight {
    pub const ALL: [LineHeight; 3] = [LineHeight::Tight, LineHeight::Normal, LineHeight::Relaxed];

    /// The option value, emitted verbatim into CSS.
    pub fn as_str(self) -> &'static str {
        match self {
            LineHeight::Tight => "1.25",
            LineHeight::Normal => "1.5",
            LineHeight::Relaxed => "1.75",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LineHeight::Tight => "Tight (1.25)",
            LineHeight::Normal => "Normal (1.5)",
            LineHeight::Relaxed => "Relaxed (1.75)",
        }
    }
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineHeight {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self> {
        LineHeight::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| {
                TuneError::invalid_input(Field::LineHeight, s, "expected one of 1.25, 1.5, 1.75")
            })
    }
}

/// Letter spacing options offered by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LetterSpacing {
    #[serde(rename = "-0.025em")]
    Tight,
    #[default]
    #[serde(rename = "0")]
    Normal,
    #[serde(rename = "0.025em")]
    Wide,
}

impl LetterSpacing {
    pub const ALL: [LetterSpacing; 3] = [
        LetterSpacing::Tight,
        LetterSpacing::Normal,
        LetterSpacing::Wide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LetterSpacing::Tight => "-0.025em",
            LetterSpacing::Normal => "0",
            LetterSpacing::Wide => "0.025em",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LetterSpacing::Tight => "Tight (-0.025em)",
            LetterSpacing::Normal => "Normal (0)",
            LetterSpacing::Wide => "Wide (0.025em)",
        }
    }
}

impl fmt::Display for LetterSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterSpacing {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self> {
        LetterSpacing::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| {
                TuneError::invalid_input(
                    Field::LetterSpacing,
                    s,
                    "expected one of -0.025em, 0, 0.025em",
                )
            })
    }
}

/// Which shape of CSS to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// `.text-fluid-*` utility classes, one per size tier.
    #[default]
    Individual,
    /// Root custom properties plus `.typography` heading rules.
    Global,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Individual => "individual",
            Method::Global => "global",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = TuneError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "individual" => Ok(Method::Individual),
            "global" => Ok(Method::Global),
            _ => Err(TuneError::invalid_input(
                Field::Method,
                s,
                "expected 'individual' or 'global'",
            )),
        }
    }
}

/// Slider range: inclusive bounds and the number of steps per unit
/// (1 for whole pixels, 40 for 0.025, 4 for 0.25).
#[derive(Debug, Clone, Copy)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub steps_per_unit: f64,
}

pub const BASE_FONT_SIZE_RANGE: SliderRange = SliderRange {
    min: 14.0,
    max: 20.0,
    steps_per_unit: 1.0,
};

pub const TYPE_SCALE_RANGE: SliderRange = SliderRange {
    min: 1.125,
    max: 1.5,
    steps_per_unit: 40.0,
};

pub const VIEWPORT_SCALE_RANGE: SliderRange = SliderRange {
    min: 0.25,
    max: 2.0,
    steps_per_unit: 4.0,
};

impl SliderRange {
    /// Parse slider text and bring it onto the slider. Dividing the rounded
    /// step count keeps the result equal to the parse of the step's
    /// decimal text (45/40 == 1.125, 47/40 == "1.175").
    fn commit(&self, field: Field, raw: &str) -> Result<f64> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| TuneError::invalid_input(field, raw, "not a number"))?;
        if !value.is_finite() {
            return Err(TuneError::invalid_input(field, raw, "not a finite number"));
        }

        let clamped = value.clamp(self.min, self.max);
        let snapped = (clamped * self.steps_per_unit).round() / self.steps_per_unit;
        if snapped != value {
            tracing::warn!(
                field = %field,
                raw,
                committed = snapped,
                min = self.min,
                max = self.max,
                "input outside slider range or step, adjusted"
            );
        }
        Ok(snapped)
    }
}

/// Current type settings. One instance per session, owned by the tuner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    base_font_size: u32,
    type_scale: f64,
    line_height: LineHeight,
    letter_spacing: LetterSpacing,
    viewport_scale: f64,
    method: Method,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_font_size: 16,
            type_scale: 1.25,
            line_height: LineHeight::Normal,
            letter_spacing: LetterSpacing::Normal,
            viewport_scale: 0.5,
            method: Method::Individual,
        }
    }
}

impl Settings {
    /// Base font size in whole pixels, 14..=20.
    pub fn base_font_size(&self) -> u32 {
        self.base_font_size
    }

    /// Type scale ratio, 1.125..=1.5 in steps of 0.025.
    pub fn type_scale(&self) -> f64 {
        self.type_scale
    }

    pub fn line_height(&self) -> LineHeight {
        self.line_height
    }

    pub fn letter_spacing(&self) -> LetterSpacing {
        self.letter_spacing
    }

    /// Viewport scaling factor in vw, 0.25..=2 in steps of 0.25.
    pub fn viewport_scale(&self) -> f64 {
        self.viewport_scale
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn set_base_font_size(&mut self, raw: &str) -> Result<u32> {
        let value = BASE_FONT_SIZE_RANGE.commit(Field::BaseFontSize, raw)?;
        self.base_font_size = value as u32;
        Ok(self.base_font_size)
    }

    pub fn set_type_scale(&mut self, raw: &str) -> Result<f64> {
        self.type_scale = TYPE_SCALE_RANGE.commit(Field::TypeScale, raw)?;
        Ok(self.type_scale)
    }

    pub fn set_line_height(&mut self, raw: &str) -> Result<LineHeight> {
        self.line_height = raw.parse()?;
        Ok(self.line_height)
    }

    pub fn set_letter_spacing(&mut self, raw: &str) -> Result<LetterSpacing> {
        self.letter_spacing = raw.parse()?;
        Ok(self.letter_spacing)
    }

    pub fn set_viewport_scale(&mut self, raw: &str) -> Result<f64> {
        self.viewport_scale = VIEWPORT_SCALE_RANGE.commit(Field::ViewportScale, raw)?;
        Ok(self.viewport_scale)
    }

    pub fn set_method(&mut self, raw: &str) -> Result<Method> {
        self.method = raw.parse()?;
        Ok(self.method)
    }

    /// Route raw control text to the matching setter.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<()> {
        match field {
            Field::BaseFontSize => self.set_base_font_size(raw).map(drop),
            Field::TypeScale => self.set_type_scale(raw).map(drop),
            Field::LineHeight => self.set_line_height(raw).map(drop),
            Field::LetterSpacing => self.set_letter_spacing(raw).map(drop),
            Field::ViewportScale => self.set_viewport_scale(raw).map(drop),
            Field::Method => self.set_method(raw).map(drop),
        }
    }

    /// Current value of a control as the text its widget would hold.
    pub fn raw_value(&self, field: Field) -> String {
        match field {
            Field::BaseFontSize => self.base_font_size.to_string(),
            Field::TypeScale => crate::codegen::number::css_number(self.type_scale),
            Field::LineHeight => self.line_height.to_string(),
            Field::LetterSpacing => self.letter_spacing.to_string(),
            Field::ViewportScale => crate::codegen::number::css_number(self.viewport_scale),
            Field::Method => self.method.to_string(),
        }
    }
}
