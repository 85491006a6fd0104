//! Shader time advanced once per rendered frame.

/// Accumulates animation time for the water shader.
///
/// Advances by a fixed step per frame regardless of frame duration or
/// interaction state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    time: f32,
    step: f32,
    frames: u64,
}

impl FrameClock {
    pub fn new(step: f32) -> Self {
        Self {
            time: 0.0,
            step,
            frames: 0,
        }
    }

    /// Advance one frame and return the new shader time.
    pub fn advance(&mut self) -> f32 {
        self.time += self.step;
        self.frames += 1;
        self.time
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
