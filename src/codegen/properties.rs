use serde::Serialize;

use super::number::{css_number, px, vw};
use crate::settings::Settings;

pub const FONT_SIZE_BASE: &str = "--font-size-base";
pub const LINE_HEIGHT_BASE: &str = "--line-height-base";
pub const LETTER_SPACING_BASE: &str = "--letter-spacing-base";
pub const FONT_SCALE_RATIO: &str = "--font-scale-ratio";

/// One custom property destined for the document's root style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomProperty {
    pub name: &'static str,
    pub value: String,
}

/// `clamp(B*0.875px, B*0.9px + Vvw, B*1.125px)`, unrounded.
pub fn base_font_clamp(settings: &Settings) -> String {
    let base = f64::from(settings.base_font_size());
    format!(
        "clamp({}, {} + {}, {})",
        px(base * 0.875),
        px(base * 0.9),
        vw(settings.viewport_scale()),
        px(base * 1.125),
    )
}

/// The four properties the live preview reads through `var()`.
pub fn compute(settings: &Settings) -> Vec<CustomProperty> {
    vec![
        CustomProperty {
            name: FONT_SIZE_BASE,
            value: base_font_clamp(settings),
        },
        CustomProperty {
            name: LINE_HEIGHT_BASE,
            value: settings.line_height().to_string(),
        },
        CustomProperty {
            name: LETTER_SPACING_BASE,
            value: settings.letter_spacing().to_string(),
        },
        CustomProperty {
            name: FONT_SCALE_RATIO,
            value: css_number(settings.type_scale()),
        },
    ]
}

/// One `name: value;` line per property, in the order given.
pub fn declarations(props: &[CustomProperty]) -> String {
    props
        .iter()
        .map(|p| format!("{}: {};\n", p.name, p.value))
        .collect()
}
