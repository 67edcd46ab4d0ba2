// crates/keitaiso/src/config.rs

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use serde::Deserialize;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

use crate::analyzer::FeatureLayout;
use crate::errors::ConfigError;

/// Default upper bound for a single analyzed text (bytes).
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1_000_000;

/// Top-level configuration of the analyzer.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
  /// [dictionary] section
  pub dictionary: DictionaryConfig,
  /// Maximum text length accepted by the analyzer (bytes)
  #[serde(default = "default_max_text_length")]
  pub max_text_length: usize,
}

fn default_max_text_length() -> usize {
  DEFAULT_MAX_TEXT_LENGTH
}

/// [dictionary] section configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
  /// Preset dictionary type: "ipadic" | "unidic-cwj" | "unidic-csj"
  ///
  /// Also decides the feature layout when `path` points to a local dictionary.
  pub preset: DictionaryPreset,
  /// Dictionary cache directory.
  ///
  /// `None` means the OS default chosen by `DictionaryManager`.
  #[serde(default)]
  pub cache_dir: Option<PathBuf>,
  /// Compiled local dictionary. Skips the preset download when set.
  #[serde(default)]
  pub path: Option<PathBuf>,
}

/// Preset dictionary type.
///
/// `PresetDictionaryKind` from vibrato-rkyv does not implement `Deserialize`, and the orphan rule
/// forbids adding it here, so configuration uses this enum and converts with `.into()`.
///
/// The preset is also the segmentation granularity knob: vibrato has a single split mode per
/// lexicon, IPAdic yields MeCab-style units and UniDic yields short units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DictionaryPreset {
  /// IpaDic: The smallest
  Ipadic,
  /// Unidic for written language
  UnidicCwj,
  /// Unidic for spoken language
  UnidicCsj,
}

impl DictionaryPreset {
  /// Returns the configuration name of the preset.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Ipadic => "ipadic",
      Self::UnidicCwj => "unidic-cwj",
      Self::UnidicCsj => "unidic-csj",
    }
  }

  /// Returns the feature column layout of the lexicon.
  pub fn feature_layout(&self) -> FeatureLayout {
    match self {
      Self::Ipadic => FeatureLayout::IPADIC,
      Self::UnidicCwj | Self::UnidicCsj => FeatureLayout::UNIDIC,
    }
  }
}

impl FromStr for DictionaryPreset {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "ipadic" => Ok(Self::Ipadic),
      "unidic-cwj" => Ok(Self::UnidicCwj),
      "unidic-csj" => Ok(Self::UnidicCsj),
      _ => Err(format!(
        "Unknown preset: {}. Valid values: ipadic, unidic-cwj, unidic-csj",
        s
      )),
    }
  }
}

impl std::fmt::Display for DictionaryPreset {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl AnalyzerConfig {
  /// Returns the feature layout matching the configured preset.
  pub fn feature_layout(&self) -> FeatureLayout {
    self.dictionary.preset.feature_layout()
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `max_text_length` >= 1
  /// - `dictionary.cache_dir` exists as a directory or can be created
  /// - `dictionary.path` is an existing file
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` if validation fails.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.max_text_length < 1 {
      return Err(ConfigError::InvalidMaxTextLength {
        actual: self.max_text_length,
      });
    }

    if let Some(cache_dir) = &self.dictionary.cache_dir {
      if cache_dir.exists() {
        if !cache_dir.is_dir() {
          return Err(ConfigError::InvalidDictionaryCacheDir {
            path: cache_dir.clone(),
          });
        }
      } else if let Err(e) = std::fs::create_dir_all(cache_dir) {
        return Err(ConfigError::DictionaryCacheDirCreationFailed {
          path: cache_dir.clone(),
          source: Arc::new(e),
        });
      }
    }

    if let Some(path) = &self.dictionary.path {
      if !path.is_file() {
        return Err(ConfigError::DictionaryFileNotFound { path: path.clone() });
      }
    }

    Ok(())
  }
}

impl From<DictionaryPreset> for PresetDictionaryKind {
  fn from(preset: DictionaryPreset) -> Self {
    match preset {
      DictionaryPreset::Ipadic => PresetDictionaryKind::Ipadic,
      DictionaryPreset::UnidicCwj => PresetDictionaryKind::UnidicCwj,
      DictionaryPreset::UnidicCsj => PresetDictionaryKind::UnidicCsj,
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
