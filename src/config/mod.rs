//! Configuration for the chat widget
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/folio/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::profile::{FileProfile, ProfileFacts};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod features;
mod logging;
mod resolver;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use features::{FileFeatures, Features};
pub use logging::{FileLogging, LogRotation, LoggingConfig};
pub use resolver::{FileResolver, ResolverConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default reply delay in milliseconds
const DEFAULT_REPLY_DELAY_MS: u64 = 500;

/// Longest accepted reply delay; larger values are clamped
pub const MAX_REPLY_DELAY_MS: u64 = 60_000;

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether to run the TUI (false = line-oriented headless chat)
    pub enable_tui: bool,

    /// Theme name: "dark", "light", "terminal"
    pub theme: String,

    /// Simulated latency before each bot reply
    pub reply_delay: Duration,

    /// Feature flags for optional TUI behavior
    pub features: Features,

    /// Resolver behavior
    pub resolver: ResolverConfig,

    /// Facts the resolver answers from
    pub profile: ProfileFacts,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Problems found while loading, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable_tui: true,
            theme: "dark".to_string(),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            features: Features::default(),
            resolver: ResolverConfig::default(),
            profile: ProfileFacts::default(),
            logging: LoggingConfig::default(),
            warnings: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub reply_delay_ms: Option<u64>,

    /// Optional [features] section
    pub features: Option<FileFeatures>,

    /// Optional [resolver] section
    pub resolver: Option<FileResolver>,

    /// Optional [profile] section
    pub profile: Option<FileProfile>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

impl FileConfig {
    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        // Write errors are ignored - config is optional
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// Exits the process if the file exists but cannot be read or parsed.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match FileConfig::parse(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                    eprintln!("║  CONFIG ERROR - Failed to parse configuration file          ║");
                    eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                    eprintln!("  File: {}\n", path.display());
                    eprintln!("  Error: {}\n", e);
                    eprintln!("  Tip: Check for:\n");
                    eprintln!("    - Missing quotes around string values");
                    eprintln!("    - Skills or certifications not written as [\"a\", \"b\"] arrays");
                    eprintln!("    - Experience entries missing company or role");
                    eprintln!("    - Typos in section names\n");
                    eprintln!("  To reset, run `folio config --reset`.\n");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("\n╔══════════════════════════════════════════════════════════════╗");
                eprintln!("║  CONFIG ERROR - Cannot read configuration file              ║");
                eprintln!("╚══════════════════════════════════════════════════════════════╝\n");
                eprintln!("  File: {}\n", path.display());
                eprintln!("  Error: {}\n", e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        Self::from_sources(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed config file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("FOLIO_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        // Theme: env > file > default
        let theme = env("FOLIO_THEME")
            .or(file.theme)
            .unwrap_or_else(|| "dark".to_string());

        // Reply delay: env > file > default (unparseable env values are ignored)
        let reply_delay_ms = env("FOLIO_REPLY_DELAY_MS")
            .and_then(|v| v.parse().ok())
            .or(file.reply_delay_ms)
            .unwrap_or(DEFAULT_REPLY_DELAY_MS);
        if reply_delay_ms > MAX_REPLY_DELAY_MS {
            warnings.push(format!(
                "reply_delay_ms = {} is too long, using {}",
                reply_delay_ms, MAX_REPLY_DELAY_MS
            ));
        }
        let reply_delay = Duration::from_millis(reply_delay_ms.min(MAX_REPLY_DELAY_MS));

        let resolver = ResolverConfig::from_file(file.resolver, &mut warnings);

        Self {
            enable_tui,
            theme,
            reply_delay,
            features: Features::from_file(file.features),
            resolver,
            profile: ProfileFacts::from_file(file.profile),
            logging: LoggingConfig::from_file(file.logging),
            warnings,
        }
    }
}
