use crate::easing::Easing;

fn lerp(from: f32, to: f32, fraction: f32) -> f32 {
    from + (to - from) * fraction
}

/// Fixed-duration tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }
}

/// Damped spring pulling the offset towards its target.
///
/// A damping ratio of 1.0 is critically damped; lower values overshoot.
/// The spring counts as settled once both velocity and distance to the
/// target drop under their thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

const SPRING_TIMESTEP_SECS: f32 = 0.004;
const SPRING_MAX_SECS: f32 = 5.0;

/// Integrates a unit spring from progress 0 towards 1.
///
/// Returns the progress at `elapsed_secs` and whether the spring has come to
/// rest by then. Progress is clamped to `[0, 2]`.
fn spring_progress(spec: &SpringSpec, elapsed_secs: f32) -> (f32, bool) {
    let stiffness = spec.stiffness;
    let damping = 2.0 * spec.damping_ratio * stiffness.sqrt();
    let elapsed_secs = elapsed_secs.min(SPRING_MAX_SECS);

    let mut progress = 0.0f32;
    let mut velocity = 0.0f32;
    let mut time = 0.0f32;
    while time < elapsed_secs {
        let step = SPRING_TIMESTEP_SECS.min(elapsed_secs - time);
        let displacement = progress - 1.0;
        let force = -stiffness * displacement - damping * velocity;
        // Semi-implicit Euler.
        velocity += force * step;
        progress = (progress + velocity * step).clamp(0.0, 2.0);
        time += step;

        if velocity.abs() < spec.velocity_threshold
            && (progress - 1.0).abs() < spec.position_threshold
        {
            return (1.0, true);
        }
    }
    (progress, elapsed_secs >= SPRING_MAX_SECS)
}

/// A presentation tween from one offset to another.
///
/// The owning state machine has already moved to `to`; the renderer samples
/// [`value_at`](Self::value_at) every frame to draw the in-between values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetTransition {
    pub from: f32,
    pub to: f32,
    pub animation: AnimationType,
    pub started_at_millis: u64,
}

impl OffsetTransition {
    pub fn new(from: f32, to: f32, animation: AnimationType, started_at_millis: u64) -> Self {
        Self {
            from,
            to,
            animation,
            started_at_millis,
        }
    }

    /// A transition that is already at its target.
    pub fn snap(value: f32, at_millis: u64) -> Self {
        Self::new(
            value,
            value,
            AnimationType::Tween(AnimationSpec::linear(0)),
            at_millis,
        )
    }

    pub fn value_at(&self, now_millis: u64) -> f32 {
        let elapsed = now_millis.saturating_sub(self.started_at_millis);
        match self.animation {
            AnimationType::Tween(spec) => {
                let duration = spec.duration_millis.max(1);
                let linear = (elapsed as f32 / duration as f32).clamp(0.0, 1.0);
                if linear >= 1.0 {
                    return self.to;
                }
                lerp(self.from, self.to, spec.easing.transform(linear))
            }
            AnimationType::Spring(spec) => {
                let (progress, settled) = spring_progress(&spec, elapsed as f32 / 1_000.0);
                if settled {
                    self.to
                } else {
                    lerp(self.from, self.to, progress)
                }
            }
        }
    }

    pub fn is_finished_at(&self, now_millis: u64) -> bool {
        let elapsed = now_millis.saturating_sub(self.started_at_millis);
        match self.animation {
            AnimationType::Tween(spec) => elapsed >= spec.duration_millis,
            AnimationType::Spring(spec) => spring_progress(&spec, elapsed as f32 / 1_000.0).1,
        }
    }
}
