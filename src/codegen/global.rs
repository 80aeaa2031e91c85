use super::properties::{
    base_font_clamp, FONT_SCALE_RATIO, FONT_SIZE_BASE, LETTER_SPACING_BASE, LINE_HEIGHT_BASE,
};
use super::{number::css_number, rule, scale_clamp, ScaleStep};
use crate::settings::Settings;

/// A heading rule under `.typography`.
struct Heading {
    tag: &'static str,
    step: ScaleStep,
    rhythm: &'static str,
}

const HEADINGS: [Heading; 3] = [
    Heading {
        tag: "h1",
        step: ScaleStep {
            exponents: [3.5, 4.0, 5.0],
            viewport_coeff: 2.5,
        },
        rhythm: "3rem",
    },
    Heading {
        tag: "h2",
        step: ScaleStep {
            exponents: [2.5, 3.0, 4.0],
            viewport_coeff: 1.75,
        },
        rhythm: "2.5rem",
    },
    Heading {
        tag: "h3",
        step: ScaleStep {
            exponents: [2.0, 2.5, 3.5],
            viewport_coeff: 1.375,
        },
        rhythm: "2rem",
    },
];

/// Root custom properties followed by the scoped heading rules.
pub(super) fn generate(settings: &Settings) -> Vec<String> {
    let mut rules = Vec::with_capacity(1 + HEADINGS.len());

    rules.push(rule(
        ":root",
        &[
            (FONT_SCALE_RATIO, css_number(settings.type_scale())),
            (FONT_SIZE_BASE, base_font_clamp(settings)),
            (LINE_HEIGHT_BASE, settings.line_height().to_string()),
            (LETTER_SPACING_BASE, settings.letter_spacing().to_string()),
        ],
    ));

    for h in &HEADINGS {
        rules.push(rule(
            &format!(".typography {}", h.tag),
            &[
                ("font-size", scale_clamp(settings, &h.step)),
                ("line-height", "1.25".to_string()),
                ("letter-spacing", "-0.025em".to_string()),
                ("--vertical-rhythm", h.rhythm.to_string()),
            ],
        ));
    }

    rules
}
