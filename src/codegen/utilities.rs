use super::number::{px, round_half_up};
use super::{fluid_clamp, rule, scale_clamp, ScaleStep};
use crate::settings::Settings;

/// How a `.text-fluid-*` tier derives its bounds from the base size.
enum TierSize {
    /// Multipliers of B for min / preferred / max, plus the viewport
    /// coefficient. `exact_*` bounds are printed without rounding.
    Linear {
        min: f64,
        mid: f64,
        max: f64,
        viewport_coeff: f64,
        exact_min: bool,
        exact_max: bool,
    },
    /// `B * scale^p` per bound.
    Scaled(ScaleStep),
}

struct Tier {
    name: &'static str,
    size: TierSize,
}

const fn linear(name: &'static str, min: f64, mid: f64, max: f64, viewport_coeff: f64) -> Tier {
    Tier {
        name,
        size: TierSize::Linear {
            min,
            mid,
            max,
            viewport_coeff,
            exact_min: false,
            exact_max: false,
        },
    }
}

const fn scaled(name: &'static str, exponents: [f64; 3], viewport_coeff: f64) -> Tier {
    Tier {
        name,
        size: TierSize::Scaled(ScaleStep {
            exponents,
            viewport_coeff,
        }),
    }
}

const TIERS: [Tier; 10] = [
    linear("xs", 0.75, 0.7, 0.875, 0.25),
    linear("sm", 0.875, 0.8, 1.0, 0.375),
    Tier {
        name: "base",
        size: TierSize::Linear {
            min: 1.0,
            mid: 0.9,
            max: 1.125,
            viewport_coeff: 1.0,
            exact_min: true,
            exact_max: true,
        },
    },
    linear("lg", 1.125, 1.0, 1.25, 0.625),
    linear("xl", 1.25, 1.1, 1.5, 0.75),
    Tier {
        name: "2xl",
        size: TierSize::Linear {
            min: 1.5,
            mid: 1.3,
            max: 2.0,
            viewport_coeff: 1.0,
            exact_min: false,
            exact_max: true,
        },
    },
    scaled("3xl", [2.0, 2.5, 3.5], 1.375),
    scaled("4xl", [2.5, 3.0, 4.0], 1.75),
    scaled("5xl", [3.5, 4.0, 5.0], 2.5),
    scaled("6xl", [4.5, 5.0, 6.0], 3.25),
];

pub const TIER_NAMES: [&str; 10] = [
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl",
];

fn bound(base: f64, multiplier: f64, exact: bool) -> String {
    if exact {
        px(base * multiplier)
    } else {
        format!("{}px", round_half_up(base * multiplier))
    }
}

fn tier_clamp(settings: &Settings, size: &TierSize) -> String {
    let base = f64::from(settings.base_font_size());
    match size {
        TierSize::Linear {
            min,
            mid,
            max,
            viewport_coeff,
            exact_min,
            exact_max,
        } => fluid_clamp(
            bound(base, *min, *exact_min),
            bound(base, *mid, false),
            settings.viewport_scale() * viewport_coeff,
            bound(base, *max, *exact_max),
        ),
        TierSize::Scaled(step) => scale_clamp(settings, step),
    }
}

/// Size tiers, then line-height and letter-spacing helpers.
pub(super) fn generate(settings: &Settings) -> Vec<String> {
    let mut rules = Vec::with_capacity(TIERS.len() + 6);

    for tier in &TIERS {
        rules.push(rule(
            &format!(".text-fluid-{}", tier.name),
            &[("font-size", tier_clamp(settings, &tier.size))],
        ));
    }

    let leading = [
        ("tight", "1.25".to_string()),
        ("normal", settings.line_height().to_string()),
        ("relaxed", "1.75".to_string()),
    ];
    for (name, value) in leading {
        rules.push(rule(
            &format!(".leading-fluid-{name}"),
            &[("line-height", value)],
        ));
    }

    let tracking = [
        ("tight", "-0.025em".to_string()),
        ("normal", settings.letter_spacing().to_string()),
        ("wide", "0.025em".to_string()),
    ];
    for (name, value) in tracking {
        rules.push(rule(
            &format!(".tracking-fluid-{name}"),
            &[("letter-spacing", value)],
        ));
    }

    rules
}
