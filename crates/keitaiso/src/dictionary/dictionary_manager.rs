//! Dictionary Management Module
//!
//! Manages loading of vibrato-rkyv dictionary data and downloading of preset dictionaries.
//! Automatically downloads on the first run, and loads from the cache directory from the second time onwards.
//! A compiled local dictionary can be loaded directly instead of a preset.

use crate::config::DictionaryConfig;
use crate::errors::error_definition::DictionaryError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;
use vibrato_rkyv::Dictionary;
use vibrato_rkyv::dictionary::LoadMode;
use vibrato_rkyv::dictionary::PresetDictionaryKind;

/// Where the dictionary comes from
#[derive(Debug)]
enum DictionarySource {
  /// vibrato-rkyv preset, downloaded into the cache directory
  Preset(PresetDictionaryKind),
  /// Compiled dictionary file
  Local(PathBuf),
}

/// Dictionary manager structure for vibrato-rkyv
pub struct DictionaryManager {
  /// Dictionary cache directory
  cache_dir: PathBuf,

  /// Preset kind or local dictionary file
  source: DictionarySource,

  /// Loaded dictionary, initialized once on the first `load`.
  /// DictionaryError implements Clone so the Result itself is cached.
  dictionary: OnceLock<Result<Arc<Dictionary>, DictionaryError>>,
}

impl DictionaryManager {
  /// Returns the path of the cache directory
  pub fn cache_dir(&self) -> &Path {
    &self.cache_dir
  }

  /// Returns the preset kind, `None` for local dictionaries
  pub fn preset_kind(&self) -> Option<PresetDictionaryKind> {
    match self.source {
      DictionarySource::Preset(kind) => Some(kind),
      DictionarySource::Local(_) => None,
    }
  }

  /// Constructor using a preset dictionary and the OS default cache directory
  pub fn with_preset(preset_kind: PresetDictionaryKind) -> Result<Self, DictionaryError> {
    let cache_dir = default_cache_dir()?;
    Ok(Self::with_preset_in(preset_kind, cache_dir))
  }

  /// Constructor using a preset dictionary cached under `cache_dir`
  pub fn with_preset_in(preset_kind: PresetDictionaryKind, cache_dir: impl Into<PathBuf>) -> Self {
    Self {
      cache_dir: cache_dir.into(),
      source: DictionarySource::Preset(preset_kind),
      dictionary: OnceLock::new(),
    }
  }

  /// Constructor using a local dictionary file
  pub fn from_local_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref().to_path_buf();

    if !path.is_file() {
      let s = path.display().to_string();
      return Err(DictionaryError::DictionaryNotFound(s));
    }

    // The parent directory of the dictionary file doubles as the cache directory
    let cache_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    Ok(Self {
      cache_dir,
      source: DictionarySource::Local(path),
      dictionary: OnceLock::new(),
    })
  }

  /// Builds a manager from the `[dictionary]` configuration section.
  ///
  /// A local `path` takes precedence over the preset download.
  pub fn from_config(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
    if let Some(path) = &config.path {
      return Self::from_local_path(path);
    }

    let kind = config.preset.into();
    match &config.cache_dir {
      Some(dir) => Ok(Self::with_preset_in(kind, dir)),
      None => Self::with_preset(kind),
    }
  }

  /// Load dictionary
  /// - Loads the dictionary on the first call
  /// - Returns a clone of `Arc<Dictionary>` from the second call onwards
  /// - If the first call fails, the error is cached and returned on every call
  pub fn load(&self) -> Result<Arc<Dictionary>, DictionaryError> {
    self.dictionary.get_or_init(|| self.load_inner().map(Arc::new)).clone()
  }

  fn load_inner(&self) -> Result<Dictionary, DictionaryError> {
    match &self.source {
      DictionarySource::Local(path) => {
        info!(path = %path.display(), "Loading local dictionary");
        Self::load_from_local_path(path)
      }
      DictionarySource::Preset(preset_kind) => {
        info!(
          preset = preset_kind.name(),
          cache_dir = %self.cache_dir.display(),
          "Loading preset dictionary"
        );
        self.load_from_preset(*preset_kind)
      }
    }
  }

  fn load_from_local_path(path: &Path) -> Result<Dictionary, DictionaryError> {
    Dictionary::from_path(path, LoadMode::TrustCache)
      .map_err(|e| DictionaryError::VibratoLoad(Arc::new(e)))
  }

  /// Downloads the preset on the first run, loads from the cache afterwards
  fn load_from_preset(
    &self,
    preset_kind: PresetDictionaryKind,
  ) -> Result<Dictionary, DictionaryError> {
    std::fs::create_dir_all(&self.cache_dir)
      .map_err(|e| DictionaryError::CacheDirCreationFailed(Arc::new(e)))?;

    let dict_dir = self.cache_dir.join(preset_kind.name());

    Dictionary::from_preset_with_download(preset_kind, &dict_dir)
      .map_err(|e| DictionaryError::PresetDictDownloadFailed(Arc::new(e)))
  }
}

/// Returns the default cache directory path according to the OS
///
/// | OS      | Example Path                                  |
/// |---------|-----------------------------------------------|
/// | Linux   | `~/.cache/keitaiso/dict`                      |
/// | macOS   | `~/Library/Caches/keitaiso/dict`              |
/// | Windows | `C:\Users\{user}\AppData\Local\keitaiso\dict` |
pub fn default_cache_dir() -> Result<PathBuf, DictionaryError> {
  let base = dirs::cache_dir().ok_or(DictionaryError::CacheDirNotFound)?;

  Ok(base.join("keitaiso").join("dict"))
}

/// `vibrato_rkyv::Dictionary` does not implement `Debug`, so only meta information is shown.
impl fmt::Debug for DictionaryManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("DictionaryManager")
      .field("cache_dir", &self.cache_dir)
      .field("source", &self.source)
      .field("dictionary_initialized", &self.dictionary.get().is_some())
      .finish()
  }
}
