// Typewriter text effect driven by an explicit clock
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPEED_MS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    OutOfView,
    Typing { started_at_ms: u64 },
}

/// Progressive character reveal that restarts every time its host re-enters the viewport.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    speed_ms: u64,
    delay_ms: u64,
    phase: Phase,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, speed_ms: u64, delay_ms: u64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            speed_ms: speed_ms.max(1),
            delay_ms,
            phase: Phase::OutOfView,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_in_view(&self) -> bool {
        matches!(self.phase, Phase::Typing { .. })
    }

    /// Restart from an empty string. Re-entering while already typing also restarts.
    pub fn enter_view(&mut self, now_ms: u64) {
        self.phase = Phase::Typing {
            started_at_ms: now_ms,
        };
    }

    pub fn leave_view(&mut self) {
        self.phase = Phase::OutOfView;
    }

    pub fn set_in_view(&mut self, in_view: bool, now_ms: u64) {
        match (in_view, self.is_in_view()) {
            (true, false) => self.enter_view(now_ms),
            (false, true) => self.leave_view(),
            _ => {}
        }
    }

    pub fn visible_chars(&self, now_ms: u64) -> usize {
        let Phase::Typing { started_at_ms } = self.phase else {
            return 0;
        };
        let elapsed = now_ms.saturating_sub(started_at_ms);
        if elapsed < self.delay_ms {
            return 0;
        }
        let ticks = (elapsed - self.delay_ms) / self.speed_ms;
        (ticks as usize).min(self.char_count)
    }

    pub fn typed(&self, now_ms: u64) -> &str {
        let n = self.visible_chars(now_ms);
        match self.text.char_indices().nth(n) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn is_complete(&self, now_ms: u64) -> bool {
        self.is_in_view() && self.visible_chars(now_ms) == self.char_count
    }

    /// Time at which the full text is shown, relative to entering the view
    pub fn full_duration_ms(&self) -> u64 {
        self.delay_ms + self.char_count as u64 * self.speed_ms
    }

    /// The full text is always rendered invisibly so typing never reflows the layout.
    pub fn frame(&self, now_ms: u64) -> TypewriterFrame<'_> {
        TypewriterFrame {
            reserved: &self.text,
            typed: self.typed(now_ms),
            cursor_visible: self.is_in_view(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypewriterFrame<'a> {
    pub reserved: &'a str,
    pub typed: &'a str,
    pub cursor_visible: bool,
}

/// Typewriter parameters shipped with the landing copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct TypewriterSpec {
    pub text: String,
    #[serde(default = "default_speed_ms")]
    pub speed_ms: u64,
    #[serde(default)]
    pub delay_ms: u64,
}

fn default_speed_ms() -> u64 {
    DEFAULT_SPEED_MS
}

impl TypewriterSpec {
    pub fn build(&self) -> Typewriter {
        Typewriter::new(self.text.clone(), self.speed_ms, self.delay_ms)
    }
}
