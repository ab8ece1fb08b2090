//! Tick-driven animation driver shared by animated widgets.
//!
//! An [`AnimationManager`] owns one or more animation instances, each a linear
//! progress value in [0, 1] moving in an [`AnimationDirection`]. The host calls
//! [`AnimationManager::tick`] (or [`AnimationManager::update`] with elapsed wall
//! time) from its timer; widgets read eased progress when painting.
//!
//! A *singular* manager owns exactly one instance whose progress survives
//! restarts, which is what a two-state transition (checked/unchecked) wants.
//! A non-singular manager accumulates independent instances, one per
//! [`AnimationManager::start_with_data`] call, and drops them as they complete.

use crate::easing::AnimationType;
use materia_macros::WithBuilders;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Fixed period between two ticks when driving a manager from wall time
pub const TICK_INTERVAL: Duration = Duration::from_millis(5);

/// Direction an animation instance is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationDirection {
    /// 0 → 1, then complete
    In,
    /// 1 → 0, then complete
    Out,
    /// 0 → 1, then turns into [`AnimationDirection::InOutOut`]
    InOutIn,
    /// Falling half of an in-out animation, paced by the secondary increment
    InOutOut,
    /// 0 → 1, then turns into [`AnimationDirection::InOutRepeatingOut`]
    InOutRepeatingIn,
    /// 1 → 0, then turns back into [`AnimationDirection::InOutRepeatingIn`]
    InOutRepeatingOut,
}

impl AnimationDirection {
    /// Whether progress grows while moving in this direction
    pub fn is_incoming(self) -> bool {
        matches!(
            self,
            AnimationDirection::In
                | AnimationDirection::InOutIn
                | AnimationDirection::InOutRepeatingIn
        )
    }

    /// Progress a freshly started instance begins at
    pub fn initial_progress(self) -> f32 {
        if self.is_incoming() {
            0.0
        } else {
            1.0
        }
    }

    fn uses_secondary_increment(self) -> bool {
        matches!(
            self,
            AnimationDirection::InOutOut | AnimationDirection::InOutRepeatingOut
        )
    }
}

/// Pacing and easing of an [`AnimationManager`]
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct AnimationConfig {
    /// Linear progress added (or removed) per tick
    pub increment: f32,
    /// Linear progress removed per tick during the falling half of in-out animations
    pub secondary_increment: f32,
    /// Easing applied when progress is read
    pub animation_type: AnimationType,
    /// Whether a start request may interrupt a running animation
    pub interrupt_animation: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            increment: 0.03,
            secondary_increment: 0.03,
            animation_type: AnimationType::Linear,
            interrupt_animation: true,
        }
    }
}

/// Errors returned by index-based accessors of [`AnimationManager`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation index {index} is out of range ({len} active)")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone)]
struct AnimationInstance<D> {
    progress: f32,
    direction: AnimationDirection,
    data: D,
}

/// Read-only view of one running animation
#[derive(Debug, Clone, Copy)]
pub struct Animation<'a, D> {
    /// Eased progress in [0, 1]
    pub progress: f32,
    pub direction: AnimationDirection,
    pub data: &'a D,
}

/// Drives one (singular) or many animation instances carrying data of type `D`
pub struct AnimationManager<D = ()> {
    config: AnimationConfig,
    singular: bool,
    running: bool,
    instances: Vec<AnimationInstance<D>>,
    accumulator: Duration,
    listeners: Vec<Box<dyn FnMut()>>,
}

impl<D: fmt::Debug> fmt::Debug for AnimationManager<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationManager")
            .field("config", &self.config)
            .field("singular", &self.singular)
            .field("running", &self.running)
            .field("instances", &self.instances)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<D: Default> AnimationManager<D> {
    /// Create a new manager
    ///
    /// A singular manager starts with one idle instance at progress 0.
    pub fn new(singular: bool, config: AnimationConfig) -> Self {
        let config = AnimationConfig {
            increment: sanitize_primary_increment(config.increment),
            secondary_increment: sanitize_increment(
                config.secondary_increment,
                "secondary_increment",
            ),
            ..config
        };

        let instances = if singular {
            vec![AnimationInstance {
                progress: 0.0,
                direction: AnimationDirection::In,
                data: D::default(),
            }]
        } else {
            Vec::new()
        };

        Self {
            config,
            singular,
            running: false,
            instances,
            accumulator: Duration::ZERO,
            listeners: Vec::new(),
        }
    }

    /// Start an animation carrying default data
    pub fn start_new_animation(&mut self, direction: AnimationDirection) {
        self.start_with_data(direction, D::default());
    }
}

impl<D> AnimationManager<D> {
    /// Start an animation tagged with `data`
    ///
    /// Singular managers retarget their single instance and keep its progress,
    /// so reversing mid-flight continues from where the animation stands.
    pub fn start_with_data(&mut self, direction: AnimationDirection, data: D) {
        if self.running && !self.config.interrupt_animation {
            log::trace!("ignoring {direction:?} start: animation running and not interruptible");
            return;
        }

        match self.instances.first_mut() {
            Some(instance) if self.singular => {
                instance.direction = direction;
                instance.data = data;
            }
            _ => self.instances.push(AnimationInstance {
                progress: direction.initial_progress(),
                direction,
                data,
            }),
        }

        log::trace!(
            "started {direction:?} animation ({} active)",
            self.instances.len()
        );
        self.running = true;
    }

    /// Register a callback fired after every tick that advanced progress
    pub fn on_progress(&mut self, f: impl FnMut() + 'static) {
        self.listeners.push(Box::new(f));
    }

    /// Advance every instance by one step
    ///
    /// Returns `true` if any instance moved, turned around or finished.
    /// Listeners only fire on such productive ticks, so an in-out animation
    /// held at full progress by a zero secondary increment stays quiet.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }

        let increment = self.config.increment;
        let secondary_increment = self.config.secondary_increment;
        let singular = self.singular;
        let mut finished = false;
        let mut changed = false;

        let mut index = 0;
        while index < self.instances.len() {
            let instance = &mut self.instances[index];
            let before = (instance.progress, instance.direction);

            if instance.direction.is_incoming() {
                instance.progress = (instance.progress + increment).min(1.0);
            } else {
                let step = if instance.direction.uses_secondary_increment() {
                    secondary_increment
                } else {
                    increment
                };
                instance.progress = (instance.progress - step).max(0.0);
            }

            let complete = match instance.direction {
                AnimationDirection::InOutIn if instance.progress >= 1.0 => {
                    instance.direction = AnimationDirection::InOutOut;
                    false
                }
                AnimationDirection::InOutRepeatingIn if instance.progress >= 1.0 => {
                    instance.direction = AnimationDirection::InOutRepeatingOut;
                    false
                }
                AnimationDirection::InOutRepeatingOut if instance.progress <= 0.0 => {
                    instance.direction = AnimationDirection::InOutRepeatingIn;
                    false
                }
                AnimationDirection::In => instance.progress >= 1.0,
                AnimationDirection::Out | AnimationDirection::InOutOut => {
                    instance.progress <= 0.0
                }
                _ => false,
            };

            changed |= before != (instance.progress, instance.direction);

            if complete && !singular {
                self.instances.remove(index);
                changed = true;
                log::trace!("animation finished ({} active)", self.instances.len());
                continue;
            }

            finished |= complete;
            index += 1;
        }

        self.running = if singular {
            !finished
        } else {
            !self.instances.is_empty()
        };

        if !self.running {
            log::debug!("animation manager idle");
            self.accumulator = Duration::ZERO;
        }

        if changed {
            for listener in &mut self.listeners {
                listener();
            }
        }

        changed
    }

    /// Advance by as many whole [`TICK_INTERVAL`]s as fit into the elapsed time
    ///
    /// The remainder carries over to the next call. Returns `true` if any tick
    /// advanced progress.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }

        self.accumulator += elapsed;
        let mut progressed = false;
        while self.running && self.accumulator >= TICK_INTERVAL {
            self.accumulator -= TICK_INTERVAL;
            progressed |= self.tick();
        }
        progressed
    }

    /// Whether any instance is still moving
    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Number of instances currently tracked
    pub fn animation_count(&self) -> usize {
        self.instances.len()
    }

    /// Eased progress of the instance at `index`
    pub fn progress(&self, index: usize) -> Result<f32, AnimationError> {
        self.instance(index)
            .map(|instance| self.config.animation_type.apply(instance.progress))
    }

    /// Eased progress of the first instance, or 0 when there is none
    ///
    /// This is the natural accessor for singular managers.
    pub fn current_progress(&self) -> f32 {
        self.progress(0).unwrap_or(0.0)
    }

    pub fn direction(&self, index: usize) -> Result<AnimationDirection, AnimationError> {
        self.instance(index).map(|instance| instance.direction)
    }

    pub fn data(&self, index: usize) -> Result<&D, AnimationError> {
        self.instance(index).map(|instance| &instance.data)
    }

    /// Iterate over all tracked instances in start order
    pub fn iter(&self) -> impl Iterator<Item = Animation<'_, D>> + '_ {
        let animation_type = self.config.animation_type;
        self.instances.iter().map(move |instance| Animation {
            progress: animation_type.apply(instance.progress),
            direction: instance.direction,
            data: &instance.data,
        })
    }

    /// Jump the first instance to `progress` (linear, clamped to [0, 1])
    pub fn set_progress(&mut self, progress: f32) {
        match self.instances.first_mut() {
            Some(instance) => instance.progress = progress.clamp(0.0, 1.0),
            None => log::warn!("set_progress called without any animation instance"),
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn set_secondary_increment(&mut self, increment: f32) {
        self.config.secondary_increment = sanitize_increment(increment, "secondary_increment");
    }

    fn instance(&self, index: usize) -> Result<&AnimationInstance<D>, AnimationError> {
        self.instances
            .get(index)
            .ok_or(AnimationError::IndexOutOfRange {
                index,
                len: self.instances.len(),
            })
    }
}

/// A zero primary step would leave `In`/`Out` animations running forever, so
/// it means "jump to the end" instead.
fn sanitize_primary_increment(value: f32) -> f32 {
    let value = sanitize_increment(value, "increment");
    if value == 0.0 {
        log::warn!("increment 0 would never finish, completing in one tick");
        return 1.0;
    }
    value
}

fn sanitize_increment(value: f32, name: &str) -> f32 {
    if !value.is_finite() {
        log::warn!("{name} {value} is not finite, using 0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        let clamped = value.clamp(0.0, 1.0);
        log::warn!("{name} {value} clamped to {clamped}");
        return clamped;
    }
    value
}
