//! View state: rotation, zoom, and the drag/animate interaction machine.
//!
//! One [`ViewState`] per map instance, owned by the renderer and mutated
//! only through the entry points here: pointer handlers call
//! [`begin_drag`](ViewState::begin_drag)/[`apply_drag`](ViewState::apply_drag)/
//! [`end_drag`](ViewState::end_drag), zoom controls call
//! [`apply_zoom`](ViewState::apply_zoom), click-to-center calls
//! [`set_target_rotation`](ViewState::set_target_rotation), and the frame
//! loop calls [`tick`](ViewState::tick) once per frame.
//!
//! Precedence rule: user input always wins. Any drag gesture cancels an
//! in-flight centering animation immediately.

/// Zoom bounds in projection-scale units.
pub const MIN_SCALE: f64 = 200.0;
pub const MAX_SCALE: f64 = 4000.0;

/// Scale change per zoom step (keyboard `+`/`-`, UI buttons).
pub const ZOOM_STEP: f64 = 200.0;

/// Rotation degrees per pixel of drag.
const DRAG_GAIN: f64 = 0.5;

/// Per-frame approach factor toward the target rotation.
const ANIMATION_ALPHA: f64 = 0.08;

/// Snap threshold, degrees: within this of the target, the animation ends.
const SNAP_EPSILON_DEG: f64 = 0.1;

/// The home view: slightly tilted toward the northern sky.
pub const HOME_ROTATION: [f64; 3] = [0.0, -45.0, 0.0];

/// What the view is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionPhase {
    /// Nothing in flight.
    Idle,
    /// A pointer drag is rotating the view.
    Dragging,
    /// The view is easing toward a target rotation.
    Animating,
}

/// Mutable state of one sky view.
#[derive(Debug, Clone)]
pub struct ViewState {
    rotation: [f64; 3],
    target_rotation: Option<[f64; 3]>,
    scale: f64,
    phase: InteractionPhase,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            rotation: HOME_ROTATION,
            target_rotation: None,
            scale: crate::projection::DEFAULT_SCALE,
            phase: InteractionPhase::Idle,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current `[yaw, pitch, roll]` in degrees.
    pub fn rotation(&self) -> [f64; 3] {
        self.rotation
    }

    /// Current projection scale.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current interaction phase.
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    /// Pending animation target, if any.
    pub fn target_rotation(&self) -> Option<[f64; 3]> {
        self.target_rotation
    }

    /// Pointer down: enter the drag phase and cancel any animation.
    pub fn begin_drag(&mut self) {
        self.target_rotation = None;
        self.phase = InteractionPhase::Dragging;
    }

    /// Pointer move while dragging: rotate by pixel deltas. Horizontal drag
    /// spins yaw, vertical drag tilts pitch (inverted: dragging down moves
    /// the view up, matching the grab-the-sky gesture).
    ///
    /// Also cancels any animation on its own, so a stray move event without
    /// a preceding [`begin_drag`](Self::begin_drag) still takes precedence.
    pub fn apply_drag(&mut self, dx: f64, dy: f64) {
        self.target_rotation = None;
        self.phase = InteractionPhase::Dragging;
        self.rotation[0] += dx * DRAG_GAIN;
        self.rotation[1] -= dy * DRAG_GAIN;
    }

    /// Pointer up: return to idle.
    pub fn end_drag(&mut self) {
        if self.phase == InteractionPhase::Dragging {
            self.phase = InteractionPhase::Idle;
        }
    }

    /// Adjusts the projection scale, clamped to `[MIN_SCALE, MAX_SCALE]`.
    /// Zoom and rotation are independent: this never touches the rotation
    /// or a pending animation.
    pub fn apply_zoom(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// One zoom step in (`+` key, zoom-in button).
    pub fn zoom_in(&mut self) {
        self.apply_zoom(ZOOM_STEP);
    }

    /// One zoom step out (`-` key, zoom-out button).
    pub fn zoom_out(&mut self) {
        self.apply_zoom(-ZOOM_STEP);
    }

    /// Starts easing toward the given rotation. Ignored mid-drag: the
    /// pointer owns the view until it lets go.
    pub fn set_target_rotation(&mut self, target: [f64; 3]) {
        if self.phase == InteractionPhase::Dragging {
            return;
        }
        if target.iter().any(|v| !v.is_finite()) {
            log::warn!("view: rejected non-finite target rotation {:?}", target);
            return;
        }
        self.target_rotation = Some(target);
        self.phase = InteractionPhase::Animating;
    }

    /// Requests the home view: eases back to [`HOME_ROTATION`] and restores
    /// the default scale.
    pub fn reset(&mut self) {
        self.phase = InteractionPhase::Idle;
        self.set_target_rotation(HOME_ROTATION);
        self.scale = crate::projection::DEFAULT_SCALE;
    }

    /// Advances the centering animation by one frame: exponential approach
    /// on yaw and pitch, then a snap once both are within
    /// [`SNAP_EPSILON_DEG`] of the target. Roll is not interpolated; it
    /// jumps with the snap, which is invisible because every caller passes
    /// roll targets equal to the current roll or zero.
    pub fn tick(&mut self) {
        let Some(target) = self.target_rotation else {
            return;
        };

        let next_yaw = self.rotation[0] + (target[0] - self.rotation[0]) * ANIMATION_ALPHA;
        let next_pitch = self.rotation[1] + (target[1] - self.rotation[1]) * ANIMATION_ALPHA;

        if (next_yaw - target[0]).abs() < SNAP_EPSILON_DEG
            && (next_pitch - target[1]).abs() < SNAP_EPSILON_DEG
        {
            self.rotation = target;
            self.target_rotation = None;
            self.phase = InteractionPhase::Idle;
        } else {
            self.rotation[0] = next_yaw;
            self.rotation[1] = next_pitch;
        }
    }

    /// Detects and repairs a corrupted state: any non-finite rotation
    /// component or scale resets the view to the identity rotation and
    /// default scale, dropping any animation. Returns `true` if a repair
    /// happened so the caller can log it.
    pub fn heal(&mut self) -> bool {
        let corrupt = self.rotation.iter().any(|v| !v.is_finite()) || !self.scale.is_finite();
        if corrupt {
            self.rotation = [0.0, 0.0, 0.0];
            self.target_rotation = None;
            self.scale = crate::projection::DEFAULT_SCALE;
            self.phase = InteractionPhase::Idle;
        }
        corrupt
    }
}
