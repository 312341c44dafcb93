use horizon_core::SkySnapshot;
use serde::{Deserialize, Serialize};

/// Flat view model for the menu-bar layer: the regime label, the solar
/// angles, and the hex gradient. Everything the UI needs, nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyViewModel {
    pub regime: String,
    pub altitude_deg: f64,
    pub azimuth_deg: f64,
    /// (fraction, hex) stops ordered zenith to horizon.
    pub stops: Vec<(f64, String)>,
}

impl SkyViewModel {
    pub fn from_snapshot(snapshot: &SkySnapshot) -> Self {
        Self {
            regime: snapshot.regime.label().to_owned(),
            altitude_deg: snapshot.sun.altitude_deg,
            azimuth_deg: snapshot.sun.azimuth_deg,
            stops: snapshot
                .stops
                .iter()
                .map(|stop| (stop.fraction, stop.hex.clone()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_sky;
    use chrono::TimeZone;
    use horizon_core::{GeoCoordinate, Influences};

    #[test]
    fn test_view_model_mirrors_snapshot() {
        let snapshot = compute_sky(
            chrono::Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(),
            GeoCoordinate::new(40.0, -100.0).unwrap(),
            &Influences::none(),
            None,
            None,
        )
        .expect("pipeline runs");

        let vm = SkyViewModel::from_snapshot(&snapshot);
        assert_eq!(vm.regime, snapshot.regime.label());
        assert_eq!(vm.altitude_deg, snapshot.sun.altitude_deg);
        assert_eq!(vm.stops.len(), snapshot.stops.len());
        for (vm_stop, stop) in vm.stops.iter().zip(&snapshot.stops) {
            assert_eq!(vm_stop.0, stop.fraction);
            assert_eq!(vm_stop.1, stop.hex);
            assert!(vm_stop.1.starts_with('#') && vm_stop.1.len() == 7);
        }
    }
}
