//! Typed widget configuration with documented defaults.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial JSON
//! document only needs the fields it overrides.

use crate::drag::DEFAULT_ACTIVATION_DISTANCE;
use crate::error::{DeckError, Result};
use crate::snap::GridSpec;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Vertical sortable list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableConfig {
    /// Pointer travel before a press starts a drag. Default 5px.
    pub activation_distance: f64,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
        }
    }
}

/// Multi-column board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Pointer travel before a press starts a drag. Default 5px.
    pub activation_distance: f64,
    /// Append the card count to column headings. Default on.
    pub show_card_count: bool,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            show_card_count: true,
        }
    }
}

/// Grid-snap canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSnapConfig {
    /// Cell and container geometry. Default 100px cells in 800x600.
    pub grid: GridSpec,
    /// Draw grid lines behind the tiles. Default on.
    pub show_grid: bool,
}

impl Default for GridSnapConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            show_grid: true,
        }
    }
}

/// JS-driven progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// Animation length in milliseconds. Default 5000.
    pub duration_ms: u64,
    /// Final percentage, `0..=100`. Default 85.
    pub target: f64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            target: 85.0,
        }
    }
}

impl ProgressConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Number scroll counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Animation length in milliseconds. Default 1500.
    pub duration_ms: u64,
    /// Value counted up to from zero. Default 1000.
    pub target: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1500,
            target: 1000.0,
        }
    }
}

impl CounterConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Tab switcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Cross-fade length in milliseconds. Default 300.
    pub timeout_ms: u64,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self { timeout_ms: 300 }
    }
}

/// Configuration for every widget in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub sortable: SortableConfig,
    pub kanban: KanbanConfig,
    pub grid_snap: GridSnapConfig,
    pub progress: ProgressConfig,
    pub counter: CounterConfig,
    pub tabs: TabsConfig,
}

impl DeckConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no widget can run with.
    pub fn validate(&self) -> Result<()> {
        self.grid_snap.grid.validate()?;

        if !(0.0..=100.0).contains(&self.progress.target) {
            log::warn!("Rejecting progress target {}", self.progress.target);
            return Err(DeckError::InvalidConfiguration(format!(
                "progress target must be within 0..=100, got {}",
                self.progress.target
            )));
        }

        for (name, distance) in [
            ("sortable", self.sortable.activation_distance),
            ("kanban", self.kanban.activation_distance),
        ] {
            if !distance.is_finite() || distance < 0.0 {
                return Err(DeckError::InvalidConfiguration(format!(
                    "{} activation distance must be non-negative, got {}",
                    name, distance
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeckConfig::default();
        assert_eq!(config.sortable.activation_distance, 5.0);
        assert!(config.kanban.show_card_count);
        assert_eq!(config.grid_snap.grid.cell_size, 100.0);
        assert_eq!(config.progress.duration(), Duration::from_secs(5));
        assert_eq!(config.progress.target, 85.0);
        assert_eq!(config.counter.duration(), Duration::from_millis(1500));
        assert_eq!(config.tabs.timeout_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = DeckConfig::from_json(
            r#"{"grid_snap": {"grid": {"cell_size": 50}}, "kanban": {"show_card_count": false}}"#,
        )
        .unwrap();
        assert_eq!(config.grid_snap.grid.cell_size, 50.0);
        assert_eq!(config.grid_snap.grid.container_width, 800.0);
        assert!(config.grid_snap.show_grid);
        assert!(!config.kanban.show_card_count);
        assert_eq!(config.kanban.activation_distance, 5.0);
    }

    #[test]
    fn test_rejects_bad_grid() {
        let result = DeckConfig::from_json(r#"{"grid_snap": {"grid": {"cell_size": 0}}}"#);
        assert!(matches!(result, Err(DeckError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_progress_target() {
        let result = DeckConfig::from_json(r#"{"progress": {"target": 140}}"#);
        assert!(matches!(result, Err(DeckError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_negative_activation_distance() {
        let result = DeckConfig::from_json(r#"{"sortable": {"activation_distance": -1}}"#);
        assert!(matches!(result, Err(DeckError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(DeckConfig::from_json("{"), Err(DeckError::Json(_))));
    }
}
