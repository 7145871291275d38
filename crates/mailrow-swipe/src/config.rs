use mailrow_animation::{AnimationSpec, AnimationType, Easing, SpringSpec};
use mailrow_foundation::gesture_constants::{
    COMMIT_DELAY_MILLIS, COMMIT_OVERSHOOT, COMMIT_THRESHOLD, MAX_SWIPE_DISTANCE, REVEAL_THRESHOLD,
};

/// Geometry and timing of a swipe row. Fixed for the lifetime of a
/// controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeConfig {
    pub reveal_threshold: f32,
    pub commit_threshold: f32,
    pub max_swipe_distance: f32,
    /// Extra distance a committed row slides past `max_swipe_distance`.
    pub commit_overshoot: f32,
    pub commit_delay_millis: u64,
    /// Tween for sliding a committed row off-screen.
    pub commit_animation: AnimationType,
    /// Tween for returning the row to rest after a cancel or reset.
    pub settle_animation: AnimationType,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: REVEAL_THRESHOLD,
            commit_threshold: COMMIT_THRESHOLD,
            max_swipe_distance: MAX_SWIPE_DISTANCE,
            commit_overshoot: COMMIT_OVERSHOOT,
            commit_delay_millis: COMMIT_DELAY_MILLIS,
            commit_animation: AnimationType::Tween(AnimationSpec::tween(200, Easing::EaseOut)),
            settle_animation: AnimationType::Spring(SpringSpec::default()),
        }
    }
}

impl SwipeConfig {
    pub fn with_thresholds(mut self, reveal: f32, commit: f32, max_distance: f32) -> Self {
        self.reveal_threshold = reveal;
        self.commit_threshold = commit;
        self.max_swipe_distance = max_distance;
        self
    }

    pub fn with_commit_overshoot(mut self, overshoot: f32) -> Self {
        self.commit_overshoot = overshoot;
        self
    }

    pub fn with_commit_delay_millis(mut self, delay_millis: u64) -> Self {
        self.commit_delay_millis = delay_millis;
        self
    }

    pub fn with_commit_animation(mut self, animation: AnimationType) -> Self {
        self.commit_animation = animation;
        self
    }

    pub fn with_settle_animation(mut self, animation: AnimationType) -> Self {
        self.settle_animation = animation;
        self
    }

    /// Offset a committed row slides to, before the edge sign is applied.
    pub fn commit_target(&self) -> f32 {
        self.max_swipe_distance + self.commit_overshoot
    }

    pub fn validate(&self) -> Result<(), SwipeConfigError> {
        let fields = [
            ("reveal_threshold", self.reveal_threshold),
            ("commit_threshold", self.commit_threshold),
            ("max_swipe_distance", self.max_swipe_distance),
            ("commit_overshoot", self.commit_overshoot),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SwipeConfigError::NonFinite { field, value });
            }
        }
        if !(0.0 <= self.reveal_threshold
            && self.reveal_threshold < self.commit_threshold
            && self.commit_threshold < self.max_swipe_distance)
        {
            return Err(SwipeConfigError::ThresholdOrder {
                reveal: self.reveal_threshold,
                commit: self.commit_threshold,
                max_distance: self.max_swipe_distance,
            });
        }
        if self.commit_overshoot < 0.0 {
            return Err(SwipeConfigError::NegativeOvershoot(self.commit_overshoot));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeConfigError {
    NonFinite {
        field: &'static str,
        value: f32,
    },
    ThresholdOrder {
        reveal: f32,
        commit: f32,
        max_distance: f32,
    },
    NegativeOvershoot(f32),
}

impl std::fmt::Display for SwipeConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeConfigError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            SwipeConfigError::ThresholdOrder {
                reveal,
                commit,
                max_distance,
            } => write!(
                f,
                "thresholds must satisfy 0 <= reveal < commit < max distance; \
                 got reveal {reveal}, commit {commit}, max distance {max_distance}"
            ),
            SwipeConfigError::NegativeOvershoot(overshoot) => {
                write!(f, "commit overshoot must not be negative, got {overshoot}")
            }
        }
    }
}

impl std::error::Error for SwipeConfigError {}
