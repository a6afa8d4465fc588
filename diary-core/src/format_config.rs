//! Delimiters and patterns that shape an interchange document.
//!
//! Callers usually hold a sparse [`PartialFormatConfig`] (whatever the user
//! saved) and turn it into a complete [`FormatConfig`] with
//! [`FormatConfig::resolve`] right before exporting or importing.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// The eight option keys, spelled the way they are saved (`entrySeparator`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum FormatOption {
    EntrySeparator,
    SameDaySeparator,
    DatePrefix,
    DateSuffix,
    DateFormat,
    TagOpenBracket,
    TagCloseBracket,
    TagSeparator,
}

/// The built-in value of every option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDefaults {
    pub entry_separator: &'static str,
    pub same_day_separator: &'static str,
    pub date_prefix: &'static str,
    pub date_suffix: &'static str,
    pub date_format: &'static str,
    pub tag_open_bracket: &'static str,
    pub tag_close_bracket: &'static str,
    pub tag_separator: &'static str,
}

/// Default grammar: `---2024-01-01--[work,personal]`, 80 `*` between entries of
/// the same day and 80 `-` after the last entry of a day.
pub const DEFAULT_FORMAT: FormatDefaults = FormatDefaults {
    entry_separator: "--------------------------------------------------------------------------------",
    same_day_separator: "********************************************************************************",
    date_prefix: "---",
    date_suffix: "--",
    date_format: "YYYY-MM-DD",
    tag_open_bracket: "[",
    tag_close_bracket: "]",
    tag_separator: ",",
};

/// A sparse set of options. `None` means "use the default"; `Some("")` is a
/// real value (e.g. no date prefix at all).
///
/// Unknown keys are ignored when deserializing, since callers often store the
/// format next to unrelated settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialFormatConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub same_day_separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_open_bracket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_close_bracket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_separator: Option<String>,
}

impl PartialFormatConfig {
    /// Parses a TOML table with camelCase keys, e.g. the `[format]` table of a config file.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str::<PartialFormatConfig>(s)?)
    }

    fn slot(&mut self, option: FormatOption) -> &mut Option<String> {
        match option {
            FormatOption::EntrySeparator => &mut self.entry_separator,
            FormatOption::SameDaySeparator => &mut self.same_day_separator,
            FormatOption::DatePrefix => &mut self.date_prefix,
            FormatOption::DateSuffix => &mut self.date_suffix,
            FormatOption::DateFormat => &mut self.date_format,
            FormatOption::TagOpenBracket => &mut self.tag_open_bracket,
            FormatOption::TagCloseBracket => &mut self.tag_close_bracket,
            FormatOption::TagSeparator => &mut self.tag_separator,
        }
    }

    pub fn get(&self, option: FormatOption) -> Option<&str> {
        match option {
            FormatOption::EntrySeparator => self.entry_separator.as_deref(),
            FormatOption::SameDaySeparator => self.same_day_separator.as_deref(),
            FormatOption::DatePrefix => self.date_prefix.as_deref(),
            FormatOption::DateSuffix => self.date_suffix.as_deref(),
            FormatOption::DateFormat => self.date_format.as_deref(),
            FormatOption::TagOpenBracket => self.tag_open_bracket.as_deref(),
            FormatOption::TagCloseBracket => self.tag_close_bracket.as_deref(),
            FormatOption::TagSeparator => self.tag_separator.as_deref(),
        }
    }

    pub fn set(&mut self, option: FormatOption, value: impl Into<String>) {
        *self.slot(option) = Some(value.into());
    }

    /// Applies a `key=value` override (`tagSeparator=;`). The value may be empty.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .ok_or_else(|| anyhow!("expected KEY=VALUE, found `{assignment}`"))?;
        let option: FormatOption = key.trim().parse().map_err(|_| {
            let known: Vec<String> = FormatOption::iter().map(|o| o.as_ref().to_string()).collect();
            anyhow!("unknown format option `{}` (known: {})", key.trim(), known.join(", "))
        })?;
        self.set(option, value);
        Ok(())
    }

    /// Layers `other` on top of `self`: keys present in `other` win.
    pub fn merge(mut self, other: &PartialFormatConfig) -> Self {
        for option in FormatOption::iter() {
            if let Some(value) = other.get(option) {
                self.set(option, value);
            }
        }
        self
    }
}

/// A fully populated configuration. Build it with [`FormatConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatConfig {
    pub entry_separator: String,
    pub same_day_separator: String,
    pub date_prefix: String,
    pub date_suffix: String,
    /// Documents the date pattern of the document. Dates are always written
    /// and read as `YYYY-MM-DD`.
    pub date_format: String,
    pub tag_open_bracket: String,
    pub tag_close_bracket: String,
    pub tag_separator: String,
}

impl FormatConfig {
    /// Fills every missing option from [`DEFAULT_FORMAT`]. Never fails.
    ///
    /// ```
    /// # use diary_core::format_config::{FormatConfig, PartialFormatConfig};
    /// let partial = PartialFormatConfig {
    ///     tag_separator: Some(";".into()),
    ///     date_prefix: Some(String::new()),
    ///     ..Default::default()
    /// };
    /// let config = FormatConfig::resolve(&partial);
    /// assert_eq!(config.tag_separator, ";");
    /// assert_eq!(config.date_prefix, "");
    /// assert_eq!(config.tag_open_bracket, "[");
    /// ```
    pub fn resolve(partial: &PartialFormatConfig) -> Self {
        Self::resolve_with(partial, DEFAULT_FORMAT)
    }

    /// Same as [`resolve`](Self::resolve) against an explicit defaults record.
    pub fn resolve_with(partial: &PartialFormatConfig, defaults: FormatDefaults) -> Self {
        let pick = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };
        Self {
            entry_separator: pick(&partial.entry_separator, defaults.entry_separator),
            same_day_separator: pick(&partial.same_day_separator, defaults.same_day_separator),
            date_prefix: pick(&partial.date_prefix, defaults.date_prefix),
            date_suffix: pick(&partial.date_suffix, defaults.date_suffix),
            date_format: pick(&partial.date_format, defaults.date_format),
            tag_open_bracket: pick(&partial.tag_open_bracket, defaults.tag_open_bracket),
            tag_close_bracket: pick(&partial.tag_close_bracket, defaults.tag_close_bracket),
            tag_separator: pick(&partial.tag_separator, defaults.tag_separator),
        }
    }

    pub fn get(&self, option: FormatOption) -> &str {
        match option {
            FormatOption::EntrySeparator => &self.entry_separator,
            FormatOption::SameDaySeparator => &self.same_day_separator,
            FormatOption::DatePrefix => &self.date_prefix,
            FormatOption::DateSuffix => &self.date_suffix,
            FormatOption::DateFormat => &self.date_format,
            FormatOption::TagOpenBracket => &self.tag_open_bracket,
            FormatOption::TagCloseBracket => &self.tag_close_bracket,
            FormatOption::TagSeparator => &self.tag_separator,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::resolve(&PartialFormatConfig::default())
    }
}

impl From<&FormatConfig> for PartialFormatConfig {
    fn from(config: &FormatConfig) -> Self {
        let mut partial = PartialFormatConfig::default();
        for option in FormatOption::iter() {
            partial.set(option, config.get(option));
        }
        partial
    }
}
