use crate::api::config::SimConfig;

/// Coarse device class, computed once when the background is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProfile {
    /// Narrow viewport: fewer stars and no pairwise collision pass.
    pub mobile: bool,
    /// The user prefers reduced motion: draw one static frame and stop.
    pub reduced_motion: bool,
}

impl DeviceProfile {
    pub fn detect(viewport_width: f32, reduced_motion: bool, config: &SimConfig) -> Self {
        Self {
            mobile: viewport_width < config.mobile_breakpoint,
            reduced_motion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_is_mobile() {
        let config = SimConfig::default();
        assert!(DeviceProfile::detect(390.0, false, &config).mobile);
        assert!(DeviceProfile::detect(767.9, false, &config).mobile);
        assert!(!DeviceProfile::detect(768.0, false, &config).mobile);
    }

    #[test]
    fn reduced_motion_is_carried_through() {
        let profile = DeviceProfile::detect(1920.0, true, &SimConfig::default());
        assert!(profile.reduced_motion);
        assert!(!profile.mobile);
    }
}
