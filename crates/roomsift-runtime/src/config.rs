use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROOMSIFT_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.roomsift/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ROOMSIFT_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("roomsift").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".roomsift").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Delays for debouncing and visual transitions, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Quiet period after the last search keystroke.
    pub search_debounce_ms: u64,
    /// Time an exiting item stays on screen before it is hidden.
    pub exit_transition_ms: u64,
    /// Delay before the first revealed item finishes entering.
    pub enter_base_delay_ms: u64,
    /// Extra delay per position in the visible order.
    pub enter_stagger_ms: u64,
    /// When false, items are shown and hidden immediately.
    pub transitions: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            exit_transition_ms: 300,
            enter_base_delay_ms: 100,
            enter_stagger_ms: 50,
            transitions: true,
        }
    }
}

impl TimingConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn exit_transition(&self) -> Duration {
        Duration::from_millis(self.exit_transition_ms)
    }

    /// When the entrance of the item at `rank` in the visible order completes.
    pub fn enter_delay(&self, rank: usize) -> Duration {
        let stagger = self.enter_stagger_ms.saturating_mul(rank as u64);
        Duration::from_millis(self.enter_base_delay_ms.saturating_add(stagger))
    }

    /// Default delays with transitions switched off.
    pub fn immediate() -> Self {
        Self::default().without_transitions()
    }

    /// Same delays, but items are shown and hidden without a transition.
    pub fn without_transitions(self) -> Self {
        Self {
            transitions: false,
            ..self
        }
    }
}

/// Wording of a listing's count label and empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLabels {
    pub singular: String,
    pub plural: String,
    pub empty_title: String,
    pub empty_hint: String,
}

impl ListLabels {
    pub fn rooms() -> Self {
        Self {
            singular: "habitación encontrada".to_string(),
            plural: "habitaciones encontradas".to_string(),
            empty_title: "No se encontraron habitaciones".to_string(),
            empty_hint: "Intenta ajustar los filtros para encontrar habitaciones disponibles."
                .to_string(),
        }
    }

    pub fn reservations() -> Self {
        Self {
            singular: "reserva encontrada".to_string(),
            plural: "reservas encontradas".to_string(),
            empty_title: "No se encontraron reservas".to_string(),
            empty_hint: "Intenta ajustar los filtros de búsqueda.".to_string(),
        }
    }

    /// "0 habitaciones encontradas", "1 habitación encontrada", ...
    pub fn count_label(&self, count: usize) -> String {
        let noun = if count == 1 {
            &self.singular
        } else {
            &self.plural
        };
        format!("{} {}", count, noun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "ListLabels::rooms")]
    pub rooms: ListLabels,
    #[serde(default = "ListLabels::reservations")]
    pub reservations: ListLabels,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            rooms: ListLabels::rooms(),
            reservations: ListLabels::reservations(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    pub filters_cleared: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            filters_cleared: "Filtros limpiados".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub messages: MessageConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    pub fn rooms_presenter(&self) -> PresenterSettings {
        PresenterSettings {
            timing: self.timing.clone(),
            labels: self.labels.rooms.clone(),
            filters_cleared: self.messages.filters_cleared.clone(),
        }
    }

    pub fn reservations_presenter(&self) -> PresenterSettings {
        PresenterSettings {
            timing: self.timing.clone(),
            labels: self.labels.reservations.clone(),
            filters_cleared: self.messages.filters_cleared.clone(),
        }
    }
}

/// Everything a single presenter needs from the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenterSettings {
    pub timing: TimingConfig,
    pub labels: ListLabels,
    pub filters_cleared: String,
}

impl PresenterSettings {
    pub fn rooms() -> Self {
        Config::default().rooms_presenter()
    }

    pub fn reservations() -> Self {
        Config::default().reservations_presenter()
    }

    pub fn with_timing(mut self, timing: TimingConfig) -> Self {
        self.timing = timing;
        self
    }
}
