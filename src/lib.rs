pub mod codegen;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod settings;
pub mod tuner;
#[cfg(feature = "wasm")]
pub mod wasm;

use error::Result;
use settings::{Field, Settings};

pub use codegen::{derive, generate_css, Derived};

/// Build settings from `(control, raw value)` pairs, starting from the
/// defaults. Stops at the first rejected value.
pub fn settings_from_raw<'a, I>(pairs: I) -> Result<Settings>
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    let mut settings = Settings::default();
    for (field, raw) in pairs {
        settings.set(field, raw)?;
    }
    Ok(settings)
}

/// Generate CSS straight from raw control values.
pub fn generate_css_from_raw<'a, I>(pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (Field, &'a str)>,
{
    settings_from_raw(pairs).map(|s| generate_css(&s))
}
