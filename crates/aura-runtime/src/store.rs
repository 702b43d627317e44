//! Durable customization state.
//!
//! State is a flat string key-value map behind a pluggable [`StorageBackend`]:
//! the selected theme under `current-theme` and one `custom-*` key per
//! override dimension. Absent keys mean "unset".
//!
//! # Design Invariants
//!
//! 1. **Write-through**: every mutation persists immediately; a reload right
//!    after a change must observe it.
//! 2. **Best-effort durability**: persistence failures are logged and
//!    absorbed; the in-memory cache stays authoritative for the session.
//! 3. **Graceful degradation**: corrupt or unreadable state files load as
//!    empty rather than failing.
//! 4. **Atomic writes**: file storage uses the write-rename pattern so a
//!    crash mid-save never corrupts existing state.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use aura_style::{ColorArrangement, Effect3d, FontId, Gradient, Shadow, Shape};
use aura_theme::{Customization, ThemeId};

/// Storage key constants.
pub mod keys {
    /// Selected theme preset.
    pub const THEME: &str = "current-theme";
    /// Border-radius override.
    pub const RADIUS: &str = "custom-radius";
    /// Shape override.
    pub const SHAPE: &str = "custom-shape";
    /// Shadow override.
    pub const SHADOW: &str = "custom-shadow";
    /// Gradient override.
    pub const GRADIENT: &str = "custom-gradient";
    /// Accent color arrangement override.
    pub const COLOR_SWAP: &str = "custom-color-swap";
    /// 3D effect override.
    pub const EFFECT_3D: &str = "custom-3d-effect";
    /// Font override.
    pub const FONT: &str = "custom-font-type";

    /// The override keys, in catalog order (excludes [`THEME`]).
    pub const OVERRIDES: [&str; 7] = [
        RADIUS, SHAPE, SHADOW, GRADIENT, COLOR_SWAP, EFFECT_3D, FONT,
    ];
}

/// The seven override dimensions, each with its storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideField {
    Radius,
    Shape,
    Shadow,
    Gradient,
    Arrangement,
    Effect3d,
    Font,
}

impl OverrideField {
    pub const ALL: [OverrideField; 7] = [
        OverrideField::Radius,
        OverrideField::Shape,
        OverrideField::Shadow,
        OverrideField::Gradient,
        OverrideField::Arrangement,
        OverrideField::Effect3d,
        OverrideField::Font,
    ];

    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            OverrideField::Radius => keys::RADIUS,
            OverrideField::Shape => keys::SHAPE,
            OverrideField::Shadow => keys::SHADOW,
            OverrideField::Gradient => keys::GRADIENT,
            OverrideField::Arrangement => keys::COLOR_SWAP,
            OverrideField::Effect3d => keys::EFFECT_3D,
            OverrideField::Font => keys::FONT,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// Serialization or deserialization error.
    Serialization(String),
    /// Storage content is corrupted or has an invalid format.
    Corruption(String),
    /// Backend is not available.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StorageError::Corruption(msg) => write!(f, "storage corruption: {msg}"),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Storage Backend Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Pluggable flat key-value storage.
///
/// Implementations must be thread-safe (`Send + Sync`). `save_all` replaces
/// the full state (not a merge) and should be atomic.
pub trait StorageBackend: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Load all stored entries. Empty map on first run.
    fn load_all(&self) -> StorageResult<HashMap<String, String>>;

    /// Save all entries atomically, replacing existing state.
    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()>;

    /// Remove all stored state.
    fn clear(&self) -> StorageResult<()>;

    /// Check whether the backend is functional.
    fn is_available(&self) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Storage (always available)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory backend for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create memory storage pre-populated with entries.
    #[must_use]
    pub fn with_entries(entries: HashMap<String, String>) -> Self {
        Self {
            data: RwLock::new(entries),
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn load_all(&self) -> StorageResult<HashMap<String, String>> {
        let guard = self
            .data
            .read()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        *guard = entries.clone();
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        guard.clear();
        Ok(())
    }
}

impl fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.data.read().map(|g| g.len()).unwrap_or(0);
        f.debug_struct("MemoryStorage")
            .field("entries", &count)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Storage
// ─────────────────────────────────────────────────────────────────────────────

mod file_storage {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::{Path, PathBuf};

    /// On-disk format (JSON).
    #[derive(Serialize, Deserialize)]
    struct StateFile {
        /// Format version for future migrations.
        format_version: u32,
        /// Flat key -> value map.
        entries: HashMap<String, String>,
    }

    impl StateFile {
        const FORMAT_VERSION: u32 = 1;

        fn new() -> Self {
            Self {
                format_version: Self::FORMAT_VERSION,
                entries: HashMap::new(),
            }
        }
    }

    /// JSON-file backend with atomic write-rename saves.
    ///
    /// # File Format
    ///
    /// ```json
    /// {
    ///   "format_version": 1,
    ///   "entries": {
    ///     "current-theme": "neonNoir",
    ///     "custom-shape": "pill"
    ///   }
    /// }
    /// ```
    ///
    /// # Atomic Writes
    ///
    /// 1. Write to `{path}.tmp`
    /// 2. Flush and sync
    /// 3. Rename `{path}.tmp` -> `{path}`
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        /// Create a file storage at the given path. The file does not need
        /// to exist; it is created on first save.
        #[must_use]
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
            }
        }

        /// Storage at the default location for the application:
        /// `$XDG_STATE_HOME/aura/{app_name}/theme.json` or the platform
        /// equivalent fallback.
        #[must_use]
        pub fn default_for_app(app_name: &str) -> Self {
            let base = state_dir_or_fallback();
            let path = base.join("aura").join(app_name).join("theme.json");
            Self { path }
        }

        /// The backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn temp_path(&self) -> PathBuf {
            let mut tmp = self.path.clone();
            tmp.set_extension("json.tmp");
            tmp
        }
    }

    fn state_dir_or_fallback() -> PathBuf {
        if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
            return PathBuf::from(state_home);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local").join("state");
        }
        PathBuf::from(".")
    }

    impl StorageBackend for FileStorage {
        fn name(&self) -> &str {
            "FileStorage"
        }

        fn load_all(&self) -> StorageResult<HashMap<String, String>> {
            if !self.path.exists() {
                // First run, no state yet.
                return Ok(HashMap::new());
            }

            let file = File::open(&self.path)?;
            let reader = BufReader::new(file);

            let state_file: StateFile = serde_json::from_reader(reader).map_err(|e| {
                StorageError::Serialization(format!("failed to parse state file: {e}"))
            })?;

            if state_file.format_version != StateFile::FORMAT_VERSION {
                tracing::warn!(
                    stored = state_file.format_version,
                    expected = StateFile::FORMAT_VERSION,
                    "state file format version mismatch, ignoring stored state"
                );
                return Ok(HashMap::new());
            }

            Ok(state_file.entries)
        }

        fn save_all(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }

            let mut state_file = StateFile::new();
            state_file.entries = entries.clone();

            // Write to temp file first (atomic pattern).
            let tmp_path = self.temp_path();
            {
                let file = File::create(&tmp_path)?;
                let mut writer = BufWriter::new(file);
                serde_json::to_writer_pretty(&mut writer, &state_file).map_err(|e| {
                    StorageError::Serialization(format!("failed to serialize state: {e}"))
                })?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            }

            fs::rename(&tmp_path, &self.path)?;

            tracing::debug!(
                path = %self.path.display(),
                entries = entries.len(),
                "saved theme state"
            );

            Ok(())
        }

        fn clear(&self) -> StorageResult<()> {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            Ok(())
        }

        fn is_available(&self) -> bool {
            if let Some(parent) = self.path.parent() {
                if !parent.exists() {
                    return fs::create_dir_all(parent).is_ok();
                }
                let test_path = parent.join(".aura_test_write");
                if fs::write(&test_path, b"test").is_ok() {
                    let _ = fs::remove_file(&test_path);
                    return true;
                }
            }
            false
        }
    }

    impl fmt::Debug for FileStorage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FileStorage")
                .field("path", &self.path)
                .finish()
        }
    }
}

pub use file_storage::FileStorage;

// ─────────────────────────────────────────────────────────────────────────────
// Customization Store
// ─────────────────────────────────────────────────────────────────────────────

/// Write-through store for the theme selection and override fields.
///
/// Keeps an in-memory cache of the flat key-value state and persists the
/// whole map on every mutation. Persistence is best-effort: failures are
/// logged at `warn` and never surface to callers, so the running session
/// keeps working from the cache.
pub struct CustomizationStore {
    backend: Arc<dyn StorageBackend>,
    cache: HashMap<String, String>,
}

impl CustomizationStore {
    /// Create a store over the given backend. Call [`load`](Self::load) to
    /// pull existing state.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            cache: HashMap::new(),
        }
    }

    /// Ephemeral store for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Store backed by a JSON file at the given path.
    #[must_use]
    pub fn with_file(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(Arc::new(FileStorage::new(path)))
    }

    /// Refresh the cache from the backend and return the parsed override
    /// state. Unreadable storage loads as empty.
    pub fn load(&mut self) -> Customization {
        match self.backend.load_all() {
            Ok(entries) => {
                tracing::debug!(
                    backend = %self.backend.name(),
                    entries = entries.len(),
                    "loaded theme state"
                );
                self.cache = entries;
            }
            Err(e) => {
                tracing::warn!(
                    backend = %self.backend.name(),
                    error = %e,
                    "failed to load theme state, starting empty"
                );
                self.cache.clear();
            }
        }
        self.customization()
    }

    /// Parse the cached override fields. Absent or unrecognized values map
    /// to unset; stored strings are never rejected.
    #[must_use]
    pub fn customization(&self) -> Customization {
        Customization {
            radius: self
                .get(keys::RADIUS)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            shape: self.get(keys::SHAPE).and_then(Shape::parse),
            shadow: self.get(keys::SHADOW).and_then(Shadow::parse),
            gradient: self.get(keys::GRADIENT).and_then(Gradient::parse),
            effect_3d: self.get(keys::EFFECT_3D).and_then(Effect3d::parse),
            font: self.get(keys::FONT).and_then(FontId::parse),
            arrangement: self.get(keys::COLOR_SWAP).and_then(ColorArrangement::parse),
        }
    }

    /// The stored theme selection, if present and recognized.
    #[must_use]
    pub fn theme(&self) -> Option<ThemeId> {
        self.get(keys::THEME).and_then(ThemeId::from_key)
    }

    /// Raw cached value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cache.get(key).map(String::as_str)
    }

    /// Write one override field and persist immediately. Other fields are
    /// untouched. The value is stored verbatim, even if the current release
    /// does not recognize it.
    pub fn set_field(&mut self, field: OverrideField, value: &str) {
        self.cache
            .insert(field.storage_key().to_string(), value.to_string());
        self.persist();
    }

    /// Persist the theme selection.
    pub fn set_theme(&mut self, theme: ThemeId) {
        self.cache
            .insert(keys::THEME.to_string(), theme.key().to_string());
        self.persist();
    }

    /// Remove all seven override keys (the theme selection stays) and
    /// persist immediately.
    pub fn clear_overrides(&mut self) {
        for key in keys::OVERRIDES {
            self.cache.remove(key);
        }
        self.persist();
    }

    /// Backend name for logging.
    #[must_use]
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Whether the backend is currently usable.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }

    /// Clone the backend handle (for simulating a reload in tests or
    /// sharing the backend with another store).
    #[must_use]
    pub fn backend(&self) -> Arc<dyn StorageBackend> {
        Arc::clone(&self.backend)
    }

    fn persist(&self) {
        if let Err(e) = self.backend.save_all(&self.cache) {
            tracing::warn!(
                backend = %self.backend.name(),
                error = %e,
                "failed to persist theme state, keeping in-memory state"
            );
        }
    }
}

impl fmt::Debug for CustomizationStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomizationStore")
            .field("backend", &self.backend.name())
            .field("entries", &self.cache.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
