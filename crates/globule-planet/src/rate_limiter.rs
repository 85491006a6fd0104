//! Placement throttling for drag gestures.
//!
//! Pointer-move events arrive far more often than edits should happen. The
//! limiter keeps a single slot: an action is accepted only when enough time
//! has passed since the last accepted one, and rejected actions are dropped.

use globule_config::PlacementConfig;

use crate::tool::Tool;

/// Milliseconds on a monotonic session clock.
pub type Millis = u64;

/// Single-slot throttle shared by terrain strokes and structure drops.
#[derive(Clone, Debug, Default)]
pub struct PlacementRateLimiter {
    last_accepted: Option<Millis>,
}

impl PlacementRateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept and record `now` if at least `interval` ms passed since the last
    /// accepted action. The first request is always accepted.
    ///
    /// A clock that runs backwards counts as zero elapsed time.
    pub fn try_acquire(&mut self, now: Millis, interval: Millis) -> bool {
        if let Some(last) = self.last_accepted
            && now.saturating_sub(last) < interval
        {
            return false;
        }
        self.last_accepted = Some(now);
        true
    }

    /// Timestamp of the last accepted action.
    pub fn last_accepted(&self) -> Option<Millis> {
        self.last_accepted
    }
}

/// Interval between accepted actions for `tool`.
pub fn interval_for(tool: Tool, placement: &PlacementConfig) -> Millis {
    if tool.is_terrain() {
        placement.terrain_interval_ms
    } else {
        placement.structure_interval_ms
    }
}
