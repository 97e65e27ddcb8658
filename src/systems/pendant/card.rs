use crate::core::math::{Vec2, Vec3};

/// Velocity tracked while the pointer holds the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer world position minus card position at grab time.
    pub offset: Vec3,
    pub velocity: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardMode {
    /// Free: follows the strap under gravity.
    Dynamic,
    /// Kinematic: position set from the pointer every frame.
    Dragging(DragState),
}

/// Outcome of letting go of the card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    Thrown { impulse: Vec3, torque: f32 },
    Settled,
    /// Pointer-up without a drag in progress.
    Ignored,
}

/// The ID card hanging from the strap.
pub struct CardBody {
    /// World position of the card centre.
    pub pos: Vec3,
    pub velocity: Vec3,
    /// Rotation about the view axis (radians).
    pub angle: f32,
    pub angular_vel: f32,
    pub mass: f32,
    pub moment_of_inertia: f32,
    /// Full width and height.
    pub size: Vec2,
    mode: CardMode,
    last_impulse: Option<Vec3>,
}

impl CardBody {
    pub fn new(pos: Vec3, mass: f32, size: Vec2) -> Self {
        // Thin plate about its normal: I = m (w² + h²) / 12
        let moment_of_inertia = (mass * (size.x * size.x + size.y * size.y) / 12.0).max(1e-4);
        Self {
            pos,
            velocity: Vec3::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            mass,
            moment_of_inertia,
            size,
            mode: CardMode::Dynamic,
            last_impulse: None,
        }
    }

    pub fn mode(&self) -> CardMode {
        self.mode
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.mode, CardMode::Dragging(_))
    }

    /// Impulse applied by the most recent release, if it was a throw.
    pub fn last_impulse(&self) -> Option<Vec3> {
        self.last_impulse
    }

    #[inline]
    pub fn local_to_world(&self, local: Vec3) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        self.pos + Vec3::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos, local.z)
    }

    #[inline]
    pub fn world_to_local(&self, world: Vec3) -> Vec3 {
        let d = world - self.pos;
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos, d.z)
    }

    /// Place the card so that `local` lands on `world`.
    pub fn align_local_to(&mut self, local: Vec3, world: Vec3) {
        let current = self.local_to_world(local);
        self.pos += world - current;
    }

    /// Whether `point` lies on the card face (ignores depth).
    pub fn hit_test(&self, point: Vec3) -> bool {
        let local = self.world_to_local(point);
        local.x.abs() <= self.size.x * 0.5 && local.y.abs() <= self.size.y * 0.5
    }

    /// Dynamic -> Dragging. Records the grab offset and zeroes the velocity
    /// accumulator.
    pub fn begin_drag(&mut self, pointer_world: Vec3) {
        self.mode = CardMode::Dragging(DragState {
            offset: pointer_world - self.pos,
            velocity: Vec3::ZERO,
        });
        self.velocity = Vec3::ZERO;
        self.angular_vel = 0.0;
        self.last_impulse = None;
    }

    pub fn drag_offset(&self) -> Option<Vec3> {
        match self.mode {
            CardMode::Dragging(drag) => Some(drag.offset),
            CardMode::Dynamic => None,
        }
    }

    /// Kinematic move to wherever the pointer puts the card. `pointer_world`
    /// is already on the drag plane.
    pub fn drag_to(&mut self, pointer_world: Vec3, plane_z: f32, dt: f32) {
        let CardMode::Dragging(mut drag) = self.mode else {
            return;
        };
        let mut target = pointer_world - drag.offset;
        target.z = plane_z;
        if dt > 0.0 {
            drag.velocity = (target - self.pos) / dt;
        }
        self.pos = target;
        self.velocity = drag.velocity;
        self.mode = CardMode::Dragging(drag);
    }

    /// Dragging -> Dynamic. Fast releases become an impulse plus a spin
    /// from the grab lever arm; slow ones settle in place.
    pub fn end_drag(&mut self, threshold: f32, torque_scale: f32) -> Release {
        let CardMode::Dragging(drag) = self.mode else {
            return Release::Ignored;
        };
        self.mode = CardMode::Dynamic;
        self.velocity = Vec3::ZERO;
        self.angular_vel = 0.0;

        if drag.velocity.length() <= threshold {
            self.last_impulse = None;
            return Release::Settled;
        }

        let impulse = drag.velocity * self.mass;
        let torque = drag.offset.cross(impulse).z * torque_scale;
        self.apply_impulse(impulse);
        self.apply_torque(torque);
        self.last_impulse = Some(impulse);
        Release::Thrown { impulse, torque }
    }

    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse / self.mass;
    }

    pub fn apply_torque(&mut self, torque: f32) {
        self.angular_vel += torque / self.moment_of_inertia;
    }

    /// Damped spring back to upright.
    pub fn integrate_rotation(&mut self, dt: f32, stiffness: f32, damping: f32) {
        self.angular_vel -= stiffness * self.angle * dt;
        self.angular_vel *= damping.clamp(0.0, 1.0).powf(dt * 60.0);
        self.angle += self.angular_vel * dt;
    }
}
