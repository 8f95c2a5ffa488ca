//! # Configuration State
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOPLIST_*`)
//! 2. Defaults (this file)
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `SHOPLIST_NAME_POLICY` | `strict`, `loose` | `strict` |
//! | `SHOPLIST_FALLBACK_QUANTITY` | integer | `1` |
//! | `SHOPLIST_ID_STRATEGY` | `monotonic`, `length` | `monotonic` |
//! | `SHOPLIST_LAYOUT` | `dialog`, `inline` | `dialog` |
//! | `SHOPLIST_EDIT_CONTROLS` | `icons`, `buttons` | `icons` |
//! | `SHOPLIST_OUTPUT` | `text`, `json` | `text` |
//!
//! An unparsable value is logged and the default kept.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shoplist_core::{IdStrategy, ListPolicy, NamePolicy, ValidationError, DEFAULT_FALLBACK_QUANTITY};
use tracing::warn;

/// Prefix shared by every setting.
pub const ENV_PREFIX: &str = "SHOPLIST_";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    pub name_policy: NamePolicy,
    pub fallback_quantity: i32,
    pub id_strategy: IdStrategy,
    pub layout: Layout,
    pub edit_controls: EditControls,
    pub output: OutputFormat,
}

/// Where the add form lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// A dialog opened with `new` and closed on confirm or cancel.
    #[default]
    Dialog,
    /// An entry row always shown above the list.
    Inline,
}

/// How per-row edit and delete controls are labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditControls {
    #[default]
    Icons,
    Buttons,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn not_allowed(field: &str, allowed: &[&str]) -> ValidationError {
    ValidationError::NotAllowed {
        field: field.to_string(),
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

impl FromStr for Layout {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dialog" => Ok(Layout::Dialog),
            "inline" => Ok(Layout::Inline),
            _ => Err(not_allowed("layout", &["dialog", "inline"])),
        }
    }
}

impl FromStr for EditControls {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icons" => Ok(EditControls::Icons),
            "buttons" => Ok(EditControls::Buttons),
            _ => Err(not_allowed("edit controls", &["icons", "buttons"])),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(not_allowed("output", &["text", "json"])),
        }
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        let policy = ListPolicy::default();
        ConfigState {
            name_policy: policy.name_policy,
            fallback_quantity: DEFAULT_FALLBACK_QUANTITY,
            id_strategy: policy.id_strategy,
            layout: Layout::default(),
            edit_controls: EditControls::default(),
            output: OutputFormat::default(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from the process environment and defaults.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Creates a ConfigState from key/value pairs.
    ///
    /// Keys without the `SHOPLIST_` prefix are skipped.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = ConfigState::default();

        for (key, value) in vars {
            let key = key.as_ref();
            let value = value.as_ref().trim();
            let Some(setting) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            match setting {
                "NAME_POLICY" => set_or_warn(&mut config.name_policy, key, value),
                "FALLBACK_QUANTITY" => set_or_warn(&mut config.fallback_quantity, key, value),
                "ID_STRATEGY" => set_or_warn(&mut config.id_strategy, key, value),
                "LAYOUT" => set_or_warn(&mut config.layout, key, value),
                "EDIT_CONTROLS" => set_or_warn(&mut config.edit_controls, key, value),
                "OUTPUT" => set_or_warn(&mut config.output, key, value),
                _ => warn!(key, "Unknown setting"),
            }
        }

        config
    }

    /// The list policy these settings describe.
    pub fn policy(&self) -> ListPolicy {
        ListPolicy {
            name_policy: self.name_policy,
            fallback_quantity: self.fallback_quantity,
            id_strategy: self.id_strategy,
        }
    }
}

fn set_or_warn<T>(slot: &mut T, key: &str, value: &str)
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(err) => warn!(key, value, %err, "Ignoring invalid setting"),
    }
}
