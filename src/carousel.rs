//! Cursor and swipe-gesture logic for the before/after carousel.

/// Horizontal displacement, in pixels, a touch gesture has to exceed
/// (strictly) before it counts as a swipe.
pub const SWIPE_THRESHOLD_PX: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0);
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Out-of-range jumps are ignored rather than clamped.
    pub fn jump_to(&mut self, i: usize) {
        if i < self.len {
            self.index = i;
        }
    }

    /// Track offset as a percentage of one slide width.
    pub fn offset_percent(&self) -> i32 {
        -(self.index as i32 * 100)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Forward,
    Backward,
}

/// Records the start/end X coordinates of one touch gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    start_x: Option<i32>,
    end_x: Option<i32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: i32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn track(&mut self, x: i32) {
        self.end_x = Some(x);
    }

    /// Resolves the gesture and resets the tracker. A gesture with a missing
    /// coordinate, or one inside the threshold, resolves to `None`.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let resolved = match (self.start_x, self.end_x) {
            (Some(start), Some(end)) => {
                let displacement = start - end;
                if displacement > SWIPE_THRESHOLD_PX {
                    Some(SwipeDirection::Forward)
                } else if displacement < -SWIPE_THRESHOLD_PX {
                    Some(SwipeDirection::Backward)
                } else {
                    None
                }
            }
            _ => None,
        };
        *self = Self::default();
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_around() {
        let mut state = CarouselState::new(4);
        for _ in 0..4 {
            state.next();
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn previous_wraps_backwards() {
        let mut state = CarouselState::new(4);
        state.previous();
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn next_then_previous_is_identity() {
        for len in 1..=6 {
            for start in 0..len {
                let mut state = CarouselState::new(len);
                state.jump_to(start);
                state.next();
                state.previous();
                assert_eq!(state.index(), start, "len {len}, start {start}");
                state.previous();
                state.next();
                assert_eq!(state.index(), start, "len {len}, start {start}");
            }
        }
    }

    #[test]
    fn jump_to_sets_exact_index() {
        let mut state = CarouselState::new(4);
        state.jump_to(2);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn out_of_range_jump_is_ignored() {
        let mut state = CarouselState::new(4);
        state.jump_to(2);
        state.jump_to(4);
        assert_eq!(state.index(), 2);
    }

    #[test]
    fn offset_tracks_index() {
        let mut state = CarouselState::new(4);
        assert_eq!(state.offset_percent(), 0);
        state.jump_to(3);
        assert_eq!(state.offset_percent(), -300);
    }

    #[test]
    fn swipe_threshold_is_strictly_greater_than() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(100);
        swipe.track(49);
        assert_eq!(swipe.finish(), Some(SwipeDirection::Forward)); // 51px

        swipe.begin(100);
        swipe.track(50);
        assert_eq!(swipe.finish(), None); // exactly 50px

        swipe.begin(100);
        swipe.track(151);
        assert_eq!(swipe.finish(), Some(SwipeDirection::Backward)); // -51px
    }

    #[test]
    fn incomplete_gesture_is_a_no_op() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.finish(), None);

        swipe.begin(100);
        assert_eq!(swipe.finish(), None);
    }

    #[test]
    fn finish_resets_the_tracker() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(200);
        swipe.track(0);
        assert_eq!(swipe.finish(), Some(SwipeDirection::Forward));
        // The old start coordinate must not leak into the next gesture.
        swipe.track(0);
        assert_eq!(swipe.finish(), None);
    }
}
