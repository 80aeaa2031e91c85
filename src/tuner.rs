//! Top-level controller: owns the settings, keeps derived values current,
//! pushes custom properties to a style sink and handles the copy action.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::codegen::{self, CustomProperty, Derived};
use crate::error::{Result, TuneError};
use crate::settings::{Field, Settings};

/// Receives the custom properties the live preview reads.
pub trait StyleSink {
    fn apply_custom_properties(&mut self, props: &[CustomProperty]);
}

/// Writes text to a system clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// In-memory style scope. Later writes replace earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyMap {
    values: BTreeMap<String, String>,
    applied: usize,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of times properties were applied.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl StyleSink for PropertyMap {
    fn apply_custom_properties(&mut self, props: &[CustomProperty]) {
        for p in props {
            self.values.insert(p.name.to_string(), p.value.clone());
        }
        self.applied += 1;
    }
}

/// State of the "Copy CSS" acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
    Failed,
}

pub struct Tuner<S: StyleSink> {
    settings: Settings,
    derived: Derived,
    sink: S,
    copy: CopyFeedback,
}

impl<S: StyleSink> Tuner<S> {
    pub fn new(sink: S) -> Self {
        Self::with_settings(Settings::default(), sink)
    }

    pub fn with_settings(settings: Settings, mut sink: S) -> Self {
        let derived = codegen::derive(&settings);
        sink.apply_custom_properties(&derived.custom_properties);
        Self {
            settings,
            derived,
            sink,
            copy: CopyFeedback::Idle,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn css(&self) -> &str {
        &self.derived.css
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn copy_feedback(&self) -> CopyFeedback {
        self.copy
    }

    /// Apply one raw control value. On success the derived values and the
    /// style sink reflect the new settings before this returns; on error
    /// nothing changes.
    pub fn set(&mut self, field: Field, raw: &str) -> Result<&Derived> {
        let mut next = self.settings.clone();
        next.set(field, raw)?;
        tracing::debug!(%field, raw, "setting committed");
        self.settings = next;
        self.refresh();
        Ok(&self.derived)
    }

    fn refresh(&mut self) {
        self.derived = codegen::derive(&self.settings);
        self.sink
            .apply_custom_properties(&self.derived.custom_properties);
    }

    /// Send the current CSS to the clipboard. A failure is logged and
    /// reported through [`CopyFeedback::Failed`]; settings and CSS are
    /// never touched.
    pub fn copy_css(&mut self, clipboard: &mut dyn Clipboard) -> CopyFeedback {
        self.copy = match clipboard.write_text(&self.derived.css) {
            Ok(()) => {
                tracing::info!(bytes = self.derived.css.len(), "css copied to clipboard");
                CopyFeedback::Copied
            }
            Err(e) => {
                tracing::warn!(error = %e, "copy failed");
                CopyFeedback::Failed
            }
        };
        self.copy
    }

    pub fn reset_copy_feedback(&mut self) {
        self.copy = CopyFeedback::Idle;
    }
}

/// The desktop clipboard, through `arboard`.
#[cfg(not(target_arch = "wasm32"))]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(not(target_arch = "wasm32"))]
impl SystemClipboard {
    pub fn open() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(TuneError::clipboard)?;
        Ok(Self { inner })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text.to_owned())
            .map_err(TuneError::clipboard)
    }
}

/// Stand-in used when no clipboard can be opened: every write fails.
pub struct NoClipboard {
    reason: String,
}

impl NoClipboard {
    pub fn new(reason: impl ToString) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl Clipboard for NoClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(TuneError::clipboard(&self.reason))
    }
}
