use serde::{Deserialize, Serialize};

use super::mail_settings::SettingsError;

pub const MAX_LINKS: usize = 64;
pub const MAX_ITERATIONS: usize = 256;
pub const MAX_CURVE_RESOLUTION: usize = 1024;

/// How neighbouring chain particles are held together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkMode {
    /// Exact rest distance (a rod).
    #[default]
    Fixed,
    /// Rest distance is a maximum; slack links are left alone.
    Rope,
}

/// Parameterization of the strap curve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveType {
    Uniform,
    #[default]
    Centripetal,
    Chordal,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub target: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            target: [0.0, 0.0, 0.0],
            fov_deg: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Tuning for the lanyard scene. Defaults reproduce the site's card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendantSettings {
    pub anchor: [f32; 3],
    /// Number of strap links between anchor and card attachment.
    pub links: usize,
    pub rest_length: f32,
    pub link_mode: LinkMode,
    /// Attachment point in card-local space.
    pub attachment_offset: [f32; 3],
    /// Height of the clasp loop above the attachment point.
    pub clasp_lift: f32,
    pub gravity: [f32; 3],
    /// Fraction of velocity kept per 60 Hz frame.
    pub damping: f32,
    pub iterations: usize,
    pub joint_mass: f32,
    pub card_mass: f32,
    /// Card width and height.
    pub card_size: [f32; 2],
    pub drag_plane_z: f32,
    /// Release speed below which the card just settles.
    pub release_threshold: f32,
    pub torque_scale: f32,
    pub angular_damping: f32,
    /// Pull back to upright (per second squared, per radian).
    pub angular_stiffness: f32,
    /// Longest frame that is simulated in one step.
    pub max_dt: f32,
    pub curve_type: CurveType,
    pub curve_resolution: usize,
    pub strap_width: f32,
    pub strap_thickness: f32,
    pub camera: CameraSettings,
}

impl Default for PendantSettings {
    fn default() -> Self {
        Self {
            anchor: [0.0, 3.2, 0.0],
            links: 3,
            rest_length: 0.6,
            link_mode: LinkMode::Fixed,
            attachment_offset: [0.0, 1.95, 0.0],
            clasp_lift: 0.12,
            gravity: [0.0, -9.81, 0.0],
            damping: 0.98,
            iterations: 16,
            joint_mass: 1.0,
            card_mass: 4.0,
            card_size: [2.5, 3.5],
            drag_plane_z: 0.0,
            release_threshold: 0.05,
            torque_scale: 0.25,
            angular_damping: 0.9,
            angular_stiffness: 30.0,
            max_dt: 1.0 / 30.0,
            curve_type: CurveType::Centripetal,
            curve_resolution: 50,
            strap_width: 0.4,
            strap_thickness: 0.008,
            camera: CameraSettings::default(),
        }
    }
}

impl PendantSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: PendantSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason: reason.to_string() })
        }

        if self.links == 0 {
            return invalid("links", "need at least one link");
        }
        if self.links > MAX_LINKS {
            return invalid("links", "at most 64 links");
        }
        if !(self.rest_length > 0.0) {
            return invalid("rest_length", "must be positive");
        }
        if !(self.joint_mass > 0.0) || !(self.card_mass > 0.0) {
            return invalid("card_mass", "masses must be positive");
        }
        if self.iterations == 0 {
            return invalid("iterations", "need at least one relaxation pass");
        }
        if self.iterations > MAX_ITERATIONS {
            return invalid("iterations", "at most 256 relaxation passes");
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return invalid("damping", "must be within 0..=1");
        }
        if !(0.0..=1.0).contains(&self.angular_damping) {
            return invalid("angular_damping", "must be within 0..=1");
        }
        if self.curve_resolution < 2 {
            return invalid("curve_resolution", "need at least two divisions");
        }
        if self.curve_resolution > MAX_CURVE_RESOLUTION {
            return invalid("curve_resolution", "at most 1024 divisions");
        }
        if !(self.max_dt > 0.0) {
            return invalid("max_dt", "must be positive");
        }
        if !(self.camera.fov_deg > 0.0 && self.camera.fov_deg < 180.0) {
            return invalid("camera", "fov must be within (0, 180)");
        }
        if !(self.camera.aspect > 0.0) || !(self.camera.near > 0.0) || self.camera.far <= self.camera.near {
            return invalid("camera", "bad aspect or clip planes");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(PendantSettings::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let s = PendantSettings::from_json(r#"{"links": 5, "link_mode": "rope", "curve_type": "chordal"}"#)
            .unwrap();
        assert_eq!(s.links, 5);
        assert_eq!(s.link_mode, LinkMode::Rope);
        assert_eq!(s.curve_type, CurveType::Chordal);
        assert_eq!(s.rest_length, 0.6);
        assert_eq!(s.camera.fov_deg, 45.0);
    }

    #[test]
    fn rejects_zero_links() {
        let err = PendantSettings::from_json(r#"{"links": 0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "links", .. }));
    }

    #[test]
    fn rejects_oversized_counts() {
        let huge = usize::MAX;
        for (json, field) in [
            (format!(r#"{{"links": {huge}}}"#), "links"),
            (format!(r#"{{"curve_resolution": {huge}}}"#), "curve_resolution"),
            (format!(r#"{{"iterations": {huge}}}"#), "iterations"),
            (r#"{"links": 65}"#.to_string(), "links"),
            (r#"{"curve_resolution": 1025}"#.to_string(), "curve_resolution"),
        ] {
            match PendantSettings::from_json(&json) {
                Err(SettingsError::Invalid { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{json}: expected invalid {field}, got {other:?}"),
            }
        }
        let edge = PendantSettings { links: MAX_LINKS, curve_resolution: MAX_CURVE_RESOLUTION, ..Default::default() };
        assert!(edge.validate().is_ok());
    }
}
