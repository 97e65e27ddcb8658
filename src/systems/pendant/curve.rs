//! Interpolating Catmull-Rom spline through the strap joints.
//!
//! Open curve: the end segments use mirrored phantom points. Centripetal and
//! chordal variants space knots by segment length so unevenly spaced joints
//! do not overshoot.

use crate::core::math::Vec3;
use crate::domain::CurveType;

/// Knot intervals shorter than this are replaced to avoid division blow-up.
const MIN_KNOT: f32 = 1e-4;

/// Cubic `c0 + c1 t + c2 t² + c3 t³` for one span.
#[derive(Clone, Copy, Debug)]
struct CubicPoly {
    c0: Vec3,
    c1: Vec3,
    c2: Vec3,
    c3: Vec3,
}

impl CubicPoly {
    /// Hermite form: endpoints `x0`, `x1` with tangents `t0`, `t1`.
    fn hermite(x0: Vec3, x1: Vec3, t0: Vec3, t1: Vec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    fn uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, tension: f32) -> Self {
        Self::hermite(p1, p2, tension * (p2 - p0), tension * (p3 - p1))
    }

    fn non_uniform(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, dt0: f32, dt1: f32, dt2: f32) -> Self {
        let t1 = (p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1;
        let t2 = (p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2;
        Self::hermite(p1, p2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f32) -> Vec3 {
        let t2 = t * t;
        self.c0 + self.c1 * t + self.c2 * t2 + self.c3 * t2 * t
    }
}

#[derive(Clone, Debug)]
pub struct CatmullRom {
    points: Vec<Vec3>,
    curve_type: CurveType,
    tension: f32,
}

impl CatmullRom {
    pub fn new(points: Vec<Vec3>, curve_type: CurveType) -> Self {
        Self { points, curve_type, tension: 0.5 }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Replace control points in place, keeping the allocation.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = Vec3>) {
        self.points.clear();
        self.points.extend(points);
    }

    /// Point at parameter `t` in `0..=1` across the whole curve.
    pub fn point_at(&self, t: f32) -> Option<Vec3> {
        let pts = &self.points;
        let l = pts.len();
        match l {
            0 => return None,
            1 => return Some(pts[0]),
            _ => {}
        }

        let p = (l - 1) as f32 * t.clamp(0.0, 1.0);
        let mut int_point = p.floor() as usize;
        let mut weight = p - int_point as f32;
        if int_point >= l - 1 {
            int_point = l - 2;
            weight = 1.0;
        }

        let p1 = pts[int_point];
        let p2 = pts[int_point + 1];
        let p0 = if int_point > 0 { pts[int_point - 1] } else { 2.0 * p1 - p2 };
        let p3 = if int_point + 2 < l { pts[int_point + 2] } else { 2.0 * p2 - p1 };

        let poly = match self.curve_type {
            CurveType::Uniform => CubicPoly::uniform(p0, p1, p2, p3, self.tension),
            CurveType::Centripetal | CurveType::Chordal => {
                // distance_squared^0.25 = sqrt(distance), ^0.5 = distance
                let pow = if self.curve_type == CurveType::Centripetal { 0.25 } else { 0.5 };
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);
                if dt1 < MIN_KNOT {
                    dt1 = 1.0;
                }
                if dt0 < MIN_KNOT {
                    dt0 = dt1;
                }
                if dt2 < MIN_KNOT {
                    dt2 = dt1;
                }
                CubicPoly::non_uniform(p0, p1, p2, p3, dt0, dt1, dt2)
            }
        };
        Some(poly.eval(weight))
    }

    /// `divisions + 1` points at evenly spaced parameters, written into `out`.
    pub fn sample_into(&self, divisions: usize, out: &mut Vec<Vec3>) {
        out.clear();
        if self.points.is_empty() {
            return;
        }
        let divisions = divisions.max(1);
        out.extend((0..=divisions).filter_map(|i| self.point_at(i as f32 / divisions as f32)));
    }

    pub fn sample(&self, divisions: usize) -> Vec<Vec3> {
        let mut out = Vec::with_capacity(divisions + 1);
        self.sample_into(divisions, &mut out);
        out
    }
}
