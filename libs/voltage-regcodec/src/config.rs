//! Register map configuration
//!
//! Loads the per-field `DataType`/`ByteOrder` map and the numeric locale
//! from YAML, TOML or JSON files, with `REGCODEC_` environment overrides.

use crate::byte_order::ByteOrder;
use crate::data_type::TypedValue;
use crate::encode::NumberLocale;
use crate::error::{CodecError, Result};
use crate::field::RegisterField;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable naming the config file for [`load_config`]
pub const CONFIG_PATH_ENV: &str = "REGCODEC_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset
pub const DEFAULT_CONFIG_PATH: &str = "config/regcodec.yaml";

const ENV_PREFIX: &str = "REGCODEC_";

/// Codec configuration for one device register map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Numeric locale for operator input
    pub locale: NumberLocale,

    /// Byte order for fields that do not name one
    pub default_byte_order: ByteOrder,

    /// Field definitions
    pub fields: Vec<RegisterField>,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            locale: NumberLocale::default(),
            default_byte_order: ByteOrder::ABCD,
            fields: Vec::new(),
        }
    }
}

impl CodecConfig {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&RegisterField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fill in the map default for fields without a byte order
    pub fn apply_defaults(&mut self) {
        for field in &mut self.fields {
            if field.byte_order.is_none() {
                field.byte_order = Some(self.default_byte_order);
            }
        }
    }

    /// Check names, string lengths and register overlaps
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.locale.decimal_separator, '.' | ',') {
            return Err(CodecError::config(format!(
                "Unsupported decimal separator '{}'",
                self.locale.decimal_separator
            )));
        }

        let mut names = HashSet::new();
        let mut spans = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(CodecError::invalid_field(&field.name, "empty field name"));
            }
            if !names.insert(field.name.as_str()) {
                return Err(CodecError::invalid_field(&field.name, "duplicate field name"));
            }
            let end = field.end_address()?;
            if end > u16::MAX as u32 + 1 {
                return Err(CodecError::invalid_field(
                    &field.name,
                    "extends past the last register address",
                ));
            }
            spans.push((field.address as u32, end, field.name.as_str()));
        }

        spans.sort_unstable();
        for pair in spans.windows(2) {
            let (_, prev_end, prev_name) = pair[0];
            let (start, _, name) = pair[1];
            if start < prev_end {
                return Err(CodecError::invalid_field(
                    name,
                    format!("overlaps field '{}'", prev_name),
                ));
            }
        }

        Ok(())
    }

    /// Decode every field that lies inside a polled block
    ///
    /// Fields outside the block are skipped; fields inside it that fail to
    /// decode are returned as errors next to their name.
    pub fn read_block(
        &self,
        block_start: u16,
        registers: &[u16],
    ) -> Vec<(String, Result<TypedValue>)> {
        let block_end = block_start as u32 + registers.len() as u32;
        self.fields
            .iter()
            .filter(|f| {
                f.end_address()
                    .map(|end| f.address >= block_start && end <= block_end)
                    .unwrap_or(false)
            })
            .map(|f| (f.name.clone(), f.read(block_start, registers)))
            .collect()
    }

    fn finish(mut self) -> Result<Self> {
        self.apply_defaults();
        self.validate()?;
        debug!(
            fields = self.fields.len(),
            default_byte_order = %self.default_byte_order,
            "Codec configuration loaded"
        );
        Ok(self)
    }
}

/// Load configuration from the file named by `REGCODEC_CONFIG`
///
/// Priority (highest to lowest):
/// 1. Environment variables (`REGCODEC_` prefix, `__` for nesting)
/// 2. Config file (`REGCODEC_CONFIG`, default `config/regcodec.yaml`)
/// 3. Default values
pub fn load_config() -> Result<CodecConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let mut figment = Figment::from(Serialized::defaults(CodecConfig::default()));
    if Path::new(&path).exists() {
        info!("Loading codec configuration from {}", path);
        figment = figment.merge(file_provider(Path::new(&path))?);
    } else {
        warn!("Config file {} not found, using defaults", path);
    }

    extract(figment)
}

/// Load configuration from a specific file, with environment overrides
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<CodecConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CodecError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let figment =
        Figment::from(Serialized::defaults(CodecConfig::default())).merge(file_provider(path)?);
    extract(figment)
}

fn file_provider(path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| CodecError::config("Config file must have an extension"))?;

    match extension {
        "toml" => Ok(Figment::new().merge(Toml::file(path))),
        "yaml" | "yml" => Ok(Figment::new().merge(Yaml::file(path))),
        "json" => Ok(Figment::new().merge(Json::file(path))),
        _ => Err(CodecError::config(format!(
            "Unsupported config file format: {}",
            extension
        ))),
    }
}

fn extract(figment: Figment) -> Result<CodecConfig> {
    let config: CodecConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]).split("__"))
        .extract()?;
    config.finish()
}
