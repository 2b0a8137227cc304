//! Entrance animation state for form rows
//!
//! Each row starts hidden and offset downward, then slides into place on a
//! staggered delay proportional to its position. Purely cosmetic: rendering
//! queries progress, nothing here touches validation.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct EntranceState {
    /// When the entrance started
    start_time: Instant,
    /// Number of animated rows
    row_count: usize,
    /// Set when the user skipped the animation
    skipped: bool,
}

impl EntranceState {
    /// Delay between consecutive rows starting their reveal
    const STAGGER: Duration = Duration::from_millis(100);
    /// Duration of a single row's reveal
    const ROW_DURATION: Duration = Duration::from_millis(600);

    pub fn new(row_count: usize, now: Instant) -> Self {
        Self {
            start_time: now,
            row_count,
            skipped: false,
        }
    }

    /// Create an entrance that is already finished (animation disabled)
    pub fn completed(row_count: usize, now: Instant) -> Self {
        let mut state = Self::new(row_count, now);
        state.skip();
        state
    }

    /// Reveal progress of a row in [0.0, 1.0], eased for rendering
    pub fn row_progress(&self, index: usize, now: Instant) -> f32 {
        if self.skipped {
            return 1.0;
        }
        let elapsed = now.duration_since(self.start_time);
        let row_start = Self::STAGGER * index as u32;
        if elapsed < row_start {
            return 0.0;
        }
        let into_row = elapsed - row_start;
        if into_row >= Self::ROW_DURATION {
            return 1.0;
        }
        let linear = into_row.as_secs_f32() / Self::ROW_DURATION.as_secs_f32();
        // Cubic ease-out for smooth deceleration
        simple_easing::cubic_out(linear)
    }

    /// Whether a row has started its reveal (hidden rows are not drawn)
    pub fn row_started(&self, index: usize, now: Instant) -> bool {
        self.row_progress(index, now) > 0.0
    }

    /// Remaining downward offset of a row, in terminal rows
    pub fn row_offset(&self, index: usize, now: Instant, max_offset: u16) -> u16 {
        let progress = self.row_progress(index, now);
        ((1.0 - progress) * max_offset as f32).round() as u16
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.skipped = true;
    }

    /// Check if every row has finished its reveal
    pub fn is_complete(&self, now: Instant) -> bool {
        if self.skipped {
            return true;
        }
        let total = Self::STAGGER * self.row_count.saturating_sub(1) as u32 + Self::ROW_DURATION;
        now.duration_since(self.start_time) >= total
    }
}
