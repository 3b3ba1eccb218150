//! Frames-per-second counter for the debug overlay.

use serde::{Deserialize, Serialize};

/// Counts frames over a fixed window.
///
/// `fps()` reports the rate measured over the last complete window, so
/// the readout changes at most once per window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FpsCounter {
    /// Window length in seconds.
    window_secs: f32,

    /// Time accumulated in the current window.
    elapsed: f32,

    /// Frames counted in the current window.
    frames: u32,

    /// Rate from the last complete window.
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl FpsCounter {
    /// Create a counter. Non-positive windows fall back to one second.
    #[must_use]
    pub fn new(window_secs: f32) -> Self {
        let window_secs = if window_secs.is_finite() && window_secs > 0.0 {
            window_secs
        } else {
            1.0
        };
        Self {
            window_secs,
            elapsed: 0.0,
            frames: 0,
            fps: 0,
        }
    }

    /// Record one frame that took `delta_secs`.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn tick(&mut self, delta_secs: f32) {
        if !delta_secs.is_finite() || delta_secs < 0.0 {
            return;
        }

        self.frames += 1;
        self.elapsed += delta_secs;
        if self.elapsed >= self.window_secs {
            self.fps = (self.frames as f32 / self.elapsed).round() as u32;
            self.frames = 0;
            self.elapsed = 0.0;
        }
    }

    #[must_use]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    #[must_use]
    pub fn window_secs(&self) -> f32 {
        self.window_secs
    }

    /// Text shown by the overlay.
    #[must_use]
    pub fn label(&self) -> String {
        format!("FPS: {}", self.fps)
    }

    /// Reset all counts, keeping the window length.
    pub fn reset(&mut self) {
        *self = Self::new(self.window_secs);
    }
}
