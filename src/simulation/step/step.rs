use crate::core::log;
use crate::core::math::vec3;

use super::clock::now_ms;
use super::PendantRig;

pub(super) fn step(rig: &mut PendantRig, dt: f32) -> bool {
    if !dt.is_finite() || dt <= 0.0 {
        rig.stats.skipped_frames += 1;
        return false;
    }
    let start = now_ms();
    let dt = dt.min(rig.settings.max_dt);

    let plane_z = rig.settings.drag_plane_z;
    let offset = vec3(rig.settings.attachment_offset);
    let end = rig.chain.end_index();
    let before = rig.chain.clone();

    // Dragging: the card is kinematic and carries the strap end with it.
    if rig.card.is_dragging() {
        if let Some(hit) = rig.camera.pointer_on_plane(rig.pointer, plane_z) {
            rig.card.drag_to(hit, plane_z, dt);
        }
        let attachment = rig.card.local_to_world(offset);
        rig.chain.pin(end, attachment);
    }

    rig.chain.integrate(dt, vec3(rig.settings.gravity), rig.settings.damping);
    let residual = rig.chain.relax(rig.settings.iterations);

    if !rig.chain.is_finite() {
        rig.chain = before;
        rig.stats.skipped_frames += 1;
        log::warn("pendant: non-finite strap state, frame skipped");
        return false;
    }

    // Dynamic: the card hangs from the strap end, locked to the drag plane.
    if !rig.card.is_dragging() {
        rig.chain.clamp_z(plane_z);
        rig.card.integrate_rotation(
            dt,
            rig.settings.angular_stiffness,
            rig.settings.angular_damping,
        );
        let end_pos = rig.chain.pos(end).unwrap_or(rig.card.pos);
        rig.card.align_local_to(offset, end_pos);
        rig.card.pos.z = plane_z;
        rig.card.velocity = rig.chain.velocity(end, dt);
    }

    rebuild_strap(rig);

    rig.last_dt = dt;
    rig.frame += 1;
    let stats = &mut rig.stats;
    stats.step_ms = (now_ms() - start).max(0.0);
    stats.dt = dt;
    stats.frame = rig.frame;
    stats.solver_residual = residual;
    stats.max_link_error = rig.chain.max_link_error();
    stats.vertex_count = rig.ribbon.vertex_count() as u32;
    stats.dragging = rig.card.is_dragging();
    true
}

/// Thread the curve through the joints, sample it and extrude the band.
/// The last joint is replaced by the lifted clasp on the card.
pub(super) fn rebuild_strap(rig: &mut PendantRig) {
    let clasp = rig.clasp();
    let joints = rig.chain.len().saturating_sub(1);
    let points = rig.chain.positions().take(joints);
    rig.curve.set_points(points.chain(std::iter::once(clasp)));
    rig.curve.sample_into(rig.settings.curve_resolution, &mut rig.samples);

    if !rig.ribbon.rebuild(&rig.samples, rig.settings.strap_width, rig.settings.strap_thickness) {
        log::warn("pendant: strap samples unusable, keeping previous mesh");
    }
}
