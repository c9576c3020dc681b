// Scroll-triggered reveal state
use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.2;
pub const SECTION_THRESHOLD: f64 = 0.1;

const HIDDEN_TRANSLATE_Y_PX: f64 = 40.0;
const HIDDEN_BLUR_PX: f64 = 4.0;

/// Visibility of one observed anchor. Replays on every crossing, in and out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    threshold: f64,
    visible: bool,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed the latest intersection ratio; returns true when visibility flipped.
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        let visible = intersection_ratio > 0.0 && intersection_ratio >= self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn style(&self, delay_ms: u32) -> RevealStyle {
        if self.visible {
            RevealStyle {
                opacity: 1.0,
                translate_y_px: 0.0,
                blur_px: 0.0,
                delay_ms,
            }
        } else {
            RevealStyle {
                opacity: 0.0,
                translate_y_px: HIDDEN_TRANSLATE_Y_PX,
                blur_px: HIDDEN_BLUR_PX,
                delay_ms,
            }
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// CSS transition target for a revealed section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate_y_px: f64,
    pub blur_px: f64,
    pub delay_ms: u32,
}

/// Reveal parameters shipped with each landing section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct RevealSpec {
    #[serde(default = "default_section_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub delay_ms: u32,
}

fn default_section_threshold() -> f64 {
    SECTION_THRESHOLD
}

impl RevealSpec {
    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            threshold: SECTION_THRESHOLD,
            delay_ms,
        }
    }

    pub fn state(&self) -> RevealState {
        RevealState::new(self.threshold)
    }
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self::with_delay(0)
    }
}
