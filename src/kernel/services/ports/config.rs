use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::kernel::gesture::GestureThresholds;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// `|dx|` past which the drag shows a buy/rent highlight.
    pub intent_threshold: f64,
    /// `|dx|` a release must exceed to count as a decision.
    pub release_threshold: f64,
    pub exit_duration_ms: u64,
    pub settle_duration_ms: u64,
    /// Number of cards rendered from the current position.
    pub window: usize,
    pub storage_key: String,
    pub exit_offset: f64,
    pub rotation_per_unit: f64,
    pub opacity_step: f64,
    pub opacity_floor: f64,
    pub scale_step: f64,
    pub scale_floor: f64,
    pub stagger: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            intent_threshold: 50.0,
            release_threshold: 120.0,
            exit_duration_ms: 600,
            settle_duration_ms: 300,
            window: 3,
            storage_key: "swipeDecisions".to_string(),
            exit_offset: 400.0,
            rotation_per_unit: 0.1,
            opacity_step: 0.2,
            opacity_floor: 0.3,
            scale_step: 0.05,
            scale_floor: 0.85,
            stagger: 8.0,
        }
    }
}

impl DeckConfig {
    pub fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            intent: self.intent_threshold,
            release: self.release_threshold,
        }
    }

    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(self.exit_duration_ms)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    pub fn window(&self) -> usize {
        self.window.max(1)
    }
}
