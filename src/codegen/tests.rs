use super::*;
use crate::settings::Field;

fn settings(pairs: &[(Field, &str)]) -> Settings {
    let mut s = Settings::default();
    for (field, raw) in pairs {
        s.set(*field, raw).expect("valid setting");
    }
    s
}

fn sizes(s: &Settings) -> (i64, i64, i64) {
    let bp = breakpoints::compute(s);
    (bp.mobile.size_px, bp.tablet.size_px, bp.desktop.size_px)
}

#[test]
fn breakpoints_default_scenario() {
    let bp = breakpoints::compute(&Settings::default());
    assert_eq!(bp.mobile.size_px, 16);
    assert_eq!(bp.tablet.size_px, 18);
    assert_eq!(bp.desktop.size_px, 18);
    assert_eq!(bp.mobile.label, "16px");
    assert_eq!(bp.tablet.viewport_width, 768);
}

#[test]
fn breakpoints_desktop_cap_rounds_half_up() {
    // desktop = min(22.5, 38.48) -> 23
    let s = settings(&[(Field::BaseFontSize, "20"), (Field::ViewportScale, "2")]);
    assert_eq!(sizes(&s), (24, 33, 23));
}

#[test]
fn breakpoints_smallest_settings() {
    let s = settings(&[(Field::BaseFontSize, "14"), (Field::ViewportScale, "0.25")]);
    assert_eq!(sizes(&s), (13, 15, 15));
}

#[test]
fn breakpoints_mobile_can_exceed_desktop() {
    // Mobile is only floored and desktop only capped, so a steep
    // viewport factor pushes mobile past the desktop cap.
    let s = settings(&[(Field::BaseFontSize, "14"), (Field::ViewportScale, "2")]);
    let (mobile, _, desktop) = sizes(&s);
    assert_eq!(mobile, 19);
    assert_eq!(desktop, 16);
}

#[test]
fn display_values_format_controls() {
    let d = display_values(&settings(&[
        (Field::TypeScale, "1.175"),
        (Field::ViewportScale, "1.75"),
    ]));
    assert_eq!(d.base_font_size, "16px");
    assert_eq!(d.type_scale, "1.175");
    assert_eq!(d.viewport_scale, "1.75vw");
}

#[test]
fn custom_properties_default() {
    let props = properties::compute(&Settings::default());
    let pairs: Vec<(&str, &str)> = props.iter().map(|p| (p.name, p.value.as_str())).collect();
    assert_eq!(
        pairs,
        vec![
            ("--font-size-base", "clamp(14px, 14.4px + 0.5vw, 18px)"),
            ("--line-height-base", "1.5"),
            ("--letter-spacing-base", "0"),
            ("--font-scale-ratio", "1.25"),
        ]
    );
}

#[test]
fn custom_property_clamp_is_unrounded() {
    let s = settings(&[(Field::BaseFontSize, "15")]);
    assert_eq!(
        properties::base_font_clamp(&s),
        "clamp(13.125px, 13.5px + 0.5vw, 16.875px)"
    );
}

#[test]
fn individual_linear_tiers() {
    let css = generate_css(&Settings::default());
    assert!(css.contains(".text-fluid-xs {\n  font-size: clamp(12px, 11px + 0.125vw, 14px);\n}"));
    assert!(css.contains(".text-fluid-sm {\n  font-size: clamp(14px, 13px + 0.1875vw, 16px);\n}"));
    assert!(css.contains(".text-fluid-base {\n  font-size: clamp(16px, 14px + 0.5vw, 18px);\n}"));
    assert!(css.contains(".text-fluid-lg {\n  font-size: clamp(18px, 16px + 0.3125vw, 20px);\n}"));
    assert!(css.contains(".text-fluid-xl {\n  font-size: clamp(20px, 18px + 0.375vw, 24px);\n}"));
    assert!(css.contains(".text-fluid-2xl {\n  font-size: clamp(24px, 21px + 0.5vw, 32px);\n}"));
}

#[test]
fn individual_scaled_tiers() {
    let css = generate_css(&Settings::default());
    assert!(css.contains("font-size: clamp(25px, 28px + 0.6875vw, 35px);"));
    assert!(css.contains("font-size: clamp(28px, 31px + 0.875vw, 39px);"));
    assert!(css.contains("font-size: clamp(35px, 39px + 1.25vw, 49px);"));
    assert!(css.contains("font-size: clamp(44px, 49px + 1.625vw, 61px);"));
}

#[test]
fn individual_base_tier_keeps_fractional_max() {
    let css = generate_css(&settings(&[(Field::BaseFontSize, "15")]));
    assert!(css.contains(".text-fluid-base {\n  font-size: clamp(15px, 14px + 0.5vw, 16.875px);\n}"));
    assert!(css.contains(".text-fluid-2xl {\n  font-size: clamp(23px, 20px + 0.5vw, 30px);\n}"));
}

#[test]
fn individual_helpers_follow_dropdowns() {
    let css = generate_css(&settings(&[
        (Field::LineHeight, "1.75"),
        (Field::LetterSpacing, "0.025em"),
    ]));
    assert!(css.contains(".leading-fluid-tight {\n  line-height: 1.25;\n}"));
    assert!(css.contains(".leading-fluid-normal {\n  line-height: 1.75;\n}"));
    assert!(css.contains(".leading-fluid-relaxed {\n  line-height: 1.75;\n}"));
    assert!(css.contains(".tracking-fluid-tight {\n  letter-spacing: -0.025em;\n}"));
    assert!(css.contains(".tracking-fluid-normal {\n  letter-spacing: 0.025em;\n}"));
    assert!(css.contains(".tracking-fluid-wide {\n  letter-spacing: 0.025em;\n}"));
}

#[test]
fn individual_emits_every_tier_in_order() {
    let css = generate_css(&Settings::default());
    let mut last = 0;
    for name in TIER_NAMES {
        let selector = format!(".text-fluid-{name} {{");
        let pos = css.find(&selector).unwrap_or_else(|| panic!("missing {selector}"));
        assert!(pos >= last, "{selector} out of order");
        last = pos;
    }
    assert_eq!(css.matches("font-size:").count(), 10);
    assert!(css.ends_with("}\n"));
}

#[test]
fn global_root_block() {
    let css = generate_css(&settings(&[(Field::Method, "global")]));
    assert!(css.starts_with(
        ":root {\n  --font-scale-ratio: 1.25;\n  --font-size-base: clamp(14px, 14.4px + 0.5vw, 18px);\n  --line-height-base: 1.5;\n  --letter-spacing-base: 0;\n}\n\n"
    ));
}

#[test]
fn global_heading_rules() {
    let css = generate_css(&settings(&[(Field::Method, "global")]));
    assert!(css.contains(
        ".typography h1 {\n  font-size: clamp(35px, 39px + 1.25vw, 49px);\n  line-height: 1.25;\n  letter-spacing: -0.025em;\n  --vertical-rhythm: 3rem;\n}"
    ));
    assert!(css.contains(".typography h2 {\n  font-size: clamp(28px, 31px + 0.875vw, 39px);"));
    assert!(css.contains(".typography h3 {\n  font-size: clamp(25px, 28px + 0.6875vw, 35px);"));
    assert!(css.contains("--vertical-rhythm: 2.5rem;"));
    assert!(css.contains("--vertical-rhythm: 2rem;"));
}

#[test]
fn method_selects_one_grammar() {
    let individual = generate_css(&Settings::default());
    let global = generate_css(&settings(&[(Field::Method, "global")]));

    assert!(individual.starts_with(".text-fluid-xs"));
    assert!(!individual.contains(":root"));
    assert!(!individual.contains(".typography"));

    assert!(global.starts_with(":root"));
    assert!(!global.contains(".text-fluid-"));
    assert!(!global.contains(".leading-fluid-"));
}

#[test]
fn method_does_not_move_breakpoints() {
    let individual = derive(&Settings::default());
    let global = derive(&settings(&[(Field::Method, "global")]));
    assert_eq!(individual.breakpoints, global.breakpoints);
    assert_eq!(individual.custom_properties, global.custom_properties);
    assert_ne!(individual.css, global.css);
}

#[test]
fn derive_is_deterministic() {
    let s = settings(&[
        (Field::BaseFontSize, "17"),
        (Field::TypeScale, "1.4"),
        (Field::ViewportScale, "1.25"),
        (Field::Method, "global"),
    ]);
    assert_eq!(derive(&s), derive(&s.clone()));
}

#[test]
fn property_declarations_keep_preview_order() {
    let text = properties::declarations(&properties::compute(&Settings::default()));
    assert_eq!(
        text,
        "--font-size-base: clamp(14px, 14.4px + 0.5vw, 18px);\n\
         --line-height-base: 1.5;\n\
         --letter-spacing-base: 0;\n\
         --font-scale-ratio: 1.25;\n"
    );
}
