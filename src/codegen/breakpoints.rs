use serde::Serialize;

use super::number::round_half_up;
use crate::settings::Settings;

/// Reference viewport widths for the size readouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Mobile,
    Tablet,
    Desktop,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Mobile, Device::Tablet, Device::Desktop];

    pub fn viewport_width(self) -> f64 {
        match self {
            Device::Mobile => 320.0,
            Device::Tablet => 768.0,
            Device::Desktop => 1024.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Device::Mobile => "Mobile",
            Device::Tablet => "Tablet",
            Device::Desktop => "Desktop",
        }
    }
}

/// Computed base font size at one reference width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakpointSize {
    pub device: Device,
    pub viewport_width: u32,
    pub size_px: i64,
    /// `"<int>px"`.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoints {
    pub mobile: BreakpointSize,
    pub tablet: BreakpointSize,
    pub desktop: BreakpointSize,
}

impl Breakpoints {
    pub fn iter(&self) -> impl Iterator<Item = &BreakpointSize> {
        [&self.mobile, &self.tablet, &self.desktop].into_iter()
    }
}

/// Unclamped preferred size: `B*0.9 + W*V/100`.
pub(crate) fn preferred_at(base: f64, viewport_scale: f64, width: f64) -> f64 {
    base * 0.9 + (width * viewport_scale) / 100.0
}

/// Size at a reference width. Mobile is floored at `B*0.875`, desktop
/// capped at `B*1.125`, tablet is the plain interpolation.
pub fn size_at(settings: &Settings, device: Device) -> i64 {
    let base = f64::from(settings.base_font_size());
    let raw = preferred_at(base, settings.viewport_scale(), device.viewport_width());
    let size = match device {
        Device::Mobile => (base * 0.875).max(raw),
        Device::Tablet => raw,
        Device::Desktop => (base * 1.125).min(raw),
    };
    round_half_up(size)
}

pub fn compute(settings: &Settings) -> Breakpoints {
    let at = |device: Device| {
        let size_px = size_at(settings, device);
        BreakpointSize {
            device,
            viewport_width: device.viewport_width() as u32,
            size_px,
            label: format!("{size_px}px"),
        }
    };
    Breakpoints {
        mobile: at(Device::Mobile),
        tablet: at(Device::Tablet),
        desktop: at(Device::Desktop),
    }
}
