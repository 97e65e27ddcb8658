use crate::core::math::{is_finite, Vec3};
use crate::domain::LinkMode;

/// Links shorter than this are skipped by the solver.
const MIN_LINK_LENGTH: f32 = 1e-6;

/// One strap joint. Velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainParticle {
    pub pos: Vec3,
    pub prev_pos: Vec3,
    /// Zero for pinned particles.
    pub inv_mass: f32,
    mass: f32,
    pub pinned: bool,
}

impl ChainParticle {
    fn new(pos: Vec3, mass: f32) -> Self {
        Self { pos, prev_pos: pos, inv_mass: 1.0 / mass, mass, pinned: false }
    }
}

/// Verlet-integrated strap from a fixed anchor (first particle) to the card
/// attachment point (last particle).
#[derive(Clone, Debug)]
pub struct VerletChain {
    particles: Vec<ChainParticle>,
    rest_length: f32,
    mode: LinkMode,
}

impl VerletChain {
    /// Straight strap hanging down from `anchor`, anchor pinned.
    pub fn hanging(
        anchor: Vec3,
        links: usize,
        rest_length: f32,
        joint_mass: f32,
        end_mass: f32,
        mode: LinkMode,
    ) -> Self {
        let links = links.max(1);
        let mut particles = Vec::with_capacity(links + 1);
        for i in 0..=links {
            let pos = anchor - Vec3::Y * (rest_length * i as f32);
            let mass = if i == links { end_mass } else { joint_mass };
            particles.push(ChainParticle::new(pos, mass));
        }
        let mut chain = Self { particles, rest_length, mode };
        chain.pin(0, anchor);
        chain
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn rest_length(&self) -> f32 {
        self.rest_length
    }

    pub fn particles(&self) -> &[ChainParticle] {
        &self.particles
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.particles.iter().map(|p| p.pos)
    }

    pub fn pos(&self, i: usize) -> Option<Vec3> {
        self.particles.get(i).map(|p| p.pos)
    }

    pub fn end_index(&self) -> usize {
        self.particles.len().saturating_sub(1)
    }

    /// Fix particle `i` at `pos`. It no longer moves on its own or yields to
    /// constraints.
    pub fn pin(&mut self, i: usize, pos: Vec3) {
        if let Some(p) = self.particles.get_mut(i) {
            p.pos = pos;
            p.prev_pos = pos;
            p.inv_mass = 0.0;
            p.pinned = true;
        }
    }

    /// Free particle `i`, at rest where it stands.
    pub fn unpin(&mut self, i: usize) {
        if let Some(p) = self.particles.get_mut(i) {
            p.prev_pos = p.pos;
            p.inv_mass = 1.0 / p.mass;
            p.pinned = false;
        }
    }

    /// Current velocity of particle `i` estimated over a step of `dt`.
    pub fn velocity(&self, i: usize, dt: f32) -> Vec3 {
        match self.particles.get(i) {
            Some(p) if dt > 0.0 => (p.pos - p.prev_pos) / dt,
            _ => Vec3::ZERO,
        }
    }

    /// Give a free particle velocity `v` for the next step of length `dt`.
    pub fn inject_velocity(&mut self, i: usize, v: Vec3, dt: f32) {
        if let Some(p) = self.particles.get_mut(i) {
            if !p.pinned {
                p.prev_pos = p.pos - v * dt;
            }
        }
    }

    /// Position Verlet step for all free particles.
    ///
    /// `damping` is the fraction of velocity kept over a 60 Hz frame and is
    /// rescaled to `dt`.
    pub fn integrate(&mut self, dt: f32, gravity: Vec3, damping: f32) {
        let keep = damping.clamp(0.0, 1.0).powf(dt * 60.0);
        let accel = gravity * dt * dt;
        for p in self.particles.iter_mut().filter(|p| !p.pinned) {
            let velocity = (p.pos - p.prev_pos) * keep;
            p.prev_pos = p.pos;
            p.pos += velocity + accel;
        }
    }

    /// Gauss-Seidel relaxation of the link constraints, mass weighted.
    ///
    /// Returns the largest correction applied in the final pass.
    pub fn relax(&mut self, iterations: usize) -> f32 {
        let mut last_max = 0.0f32;
        for _ in 0..iterations {
            last_max = 0.0;
            for i in 0..self.particles.len().saturating_sub(1) {
                let (head, tail) = self.particles.split_at_mut(i + 1);
                let a = &mut head[i];
                let b = &mut tail[0];

                let w = a.inv_mass + b.inv_mass;
                if w <= 0.0 {
                    continue;
                }
                let delta = b.pos - a.pos;
                let dist = delta.length();
                if dist < MIN_LINK_LENGTH {
                    continue;
                }
                if self.mode == LinkMode::Rope && dist <= self.rest_length {
                    continue;
                }

                let correction = delta * ((dist - self.rest_length) / dist);
                let move_a = correction * (a.inv_mass / w);
                let move_b = correction * (b.inv_mass / w);
                a.pos += move_a;
                b.pos -= move_b;
                last_max = last_max.max(move_a.length()).max(move_b.length());
            }
        }
        last_max
    }

    /// Largest deviation of any link from the rest length.
    pub fn max_link_error(&self) -> f32 {
        self.particles
            .windows(2)
            .map(|w| {
                let d = w[0].pos.distance(w[1].pos);
                match self.mode {
                    LinkMode::Fixed => (d - self.rest_length).abs(),
                    LinkMode::Rope => (d - self.rest_length).max(0.0),
                }
            })
            .fold(0.0, f32::max)
    }

    /// Flatten the chain onto the plane `z`, dropping any z velocity.
    pub fn clamp_z(&mut self, z: f32) {
        for p in self.particles.iter_mut() {
            p.pos.z = z;
            p.prev_pos.z = z;
        }
    }

    pub fn is_finite(&self) -> bool {
        self.particles.iter().all(|p| is_finite(p.pos) && is_finite(p.prev_pos))
    }
}
