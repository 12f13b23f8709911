//! Spring animation system for SwipeView.
//!
//! Animations are declarative: callers request a target and a spring, and the
//! host advances the value once per rendered frame with [`Animatable::on_frame`].

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for physics calculations.
    fn to_f32(&self) -> f32;

    /// Compute the current progress between the start and target values.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        let current_val = current.to_f32();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Determine whether the current value is close enough to the target to
    /// consider the spring finished.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

/// Spring animation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. 1.0 = critically damped, < 1.0 = under-damped (bouncy), > 1.0 = over-damped.
    pub damping_ratio: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Velocity threshold (in progress units per second) to stop animation.
    pub velocity_threshold: f32,
    /// Position threshold (in value units) to stop animation.
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Create a spring with default material design values.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.01,
        }
    }

    /// Create a spring from a stiffness and a damping coefficient for a unit mass.
    ///
    /// This is the parametrisation swipe options are expressed in; the damping
    /// coefficient `c` maps to a ratio of `c / (2 * sqrt(k))`.
    pub fn interpolating(stiffness: f32, damping: f32) -> Self {
        let critical = 2.0 * stiffness.max(0.0).sqrt();
        let damping_ratio = if critical > 0.0 {
            damping / critical
        } else {
            1.0
        };
        Self {
            damping_ratio,
            stiffness,
            ..Self::default_spring()
        }
    }

    /// Damping coefficient for a unit mass.
    pub fn damping(&self) -> f32 {
        2.0 * self.damping_ratio * self.stiffness.max(0.0).sqrt()
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Generic animatable value holder driven by explicit frame ticks.
#[derive(Debug, Clone)]
pub struct Animatable<T: SpringScalar> {
    current: T,
    /// Velocity in progress units (fractions of start→target distance) per second.
    velocity: f32,
    start: T,
    target: T,
    spring: Option<SpringSpec>,
    last_frame_nanos: Option<u64>,
}

/// Integration step for the spring simulation (~60fps).
const TIMESTEP: f32 = 0.016;

impl<T: SpringScalar> Animatable<T> {
    /// Create a new animatable with the given initial value.
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            spring: None,
            last_frame_nanos: None,
        }
    }

    /// The value as of the last processed frame.
    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// Return the current animation target.
    pub fn target(&self) -> T {
        self.target.clone()
    }

    /// Velocity in progress units per second.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Return the spring currently driving this animatable.
    pub fn spring(&self) -> Option<SpringSpec> {
        self.spring
    }

    pub fn is_running(&self) -> bool {
        self.spring.is_some()
    }

    /// Snap immediately to the target value without animating.
    pub fn snap_to(&mut self, target: T) {
        self.current = target.clone();
        self.start = target.clone();
        self.target = target;
        self.velocity = 0.0;
        self.spring = None;
        self.last_frame_nanos = None;
    }

    /// Animate from the current value to `target` with `spring`.
    ///
    /// `initial_velocity` is relative: 1.0 means covering the whole distance
    /// to the target in one second.
    pub fn animate_to(&mut self, target: T, spring: SpringSpec, initial_velocity: f32) {
        if T::is_near_target(&self.current, &target, spring.position_threshold)
            && initial_velocity.abs() < spring.velocity_threshold
        {
            self.snap_to(target);
            return;
        }
        self.start = self.current.clone();
        self.target = target;
        self.velocity = if initial_velocity.is_finite() {
            initial_velocity
        } else {
            0.0
        };
        self.spring = Some(spring);
        self.last_frame_nanos = None;
    }

    /// Advance the simulation to `frame_time_nanos`.
    ///
    /// The first frame after `animate_to` only records the time base. Returns
    /// whether the animation is still running.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        let Some(spec) = self.spring else {
            return false;
        };
        let Some(last) = self.last_frame_nanos.replace(frame_time_nanos) else {
            return true;
        };
        let dt = frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0;
        if dt == 0.0 {
            return true;
        }

        // Semi-implicit Euler in progress space: the target sits at 1.0.
        let stiffness = spec.stiffness;
        let damping = spec.damping();
        let mut progress = T::spring_progress(&self.start, &self.target, &self.current);
        let mut elapsed = 0.0f32;
        while elapsed < dt {
            let step = TIMESTEP.min(dt - elapsed);
            let displacement = progress - 1.0;
            let spring_force = -stiffness * displacement - damping * self.velocity;
            self.velocity += spring_force * step;
            progress += self.velocity * step;
            elapsed += step;
        }
        self.current = self.start.lerp(&self.target, progress.clamp(-1.0, 2.0));

        let at_rest = self.velocity.abs() < spec.velocity_threshold;
        let near_target = T::is_near_target(&self.current, &self.target, spec.position_threshold);
        if at_rest && near_target {
            log::trace!("spring settled after frame at {frame_time_nanos}ns");
            let target = self.target.clone();
            self.snap_to(target);
            false
        } else {
            true
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
