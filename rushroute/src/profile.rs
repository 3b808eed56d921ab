//! Routing profile: the static tables the cost model is built from.
//!
//! Both tables are plain configuration data. They are created once at startup (either the
//! defaults or a profile deserialized from a file) and never change afterwards.

use crate::network::RoadClass;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Speed limit of a road whose class has no entry in [`SpeedLimits`].
pub const DEFAULT_SPEED_LIMIT_KMH: f64 = 50.0;

fn check_positive(what: &str, class: RoadClass, value: f64) -> Result<(), String> {
  if value.is_finite() && value > 0.0 {
    Ok(())
  } else {
    Err(format!("{} for {} must be positive, got {}", what, class, value))
  }
}

/// Posted speed limit in km/h for every road class.
///
/// When deserialized, the given entries override the defaults and the other classes keep their
/// default speed. Speeds must be positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<RoadClass, f64>", into = "HashMap<RoadClass, f64>")]
pub struct SpeedLimits(HashMap<RoadClass, f64>);

impl SpeedLimits {
  pub fn speed_limit(&self, class: RoadClass) -> f64 {
    self.0.get(&class).copied().unwrap_or(DEFAULT_SPEED_LIMIT_KMH)
  }

  pub fn with(mut self, class: RoadClass, speed_km_h: f64) -> Self {
    self.0.insert(class, speed_km_h);
    self
  }
}

impl Default for SpeedLimits {
  fn default() -> Self {
    use RoadClass::*;
    SpeedLimits(
      [
        (Motorway, 100.0),
        (MotorwayLink, 100.0),
        (Trunk, 80.0),
        (TrunkLink, 80.0),
        (Primary, 65.0),
        (PrimaryLink, 65.0),
        (Secondary, 55.0),
        (Tertiary, 40.0),
        (Residential, 40.0),
        (LivingStreet, 20.0),
        (Unclassified, DEFAULT_SPEED_LIMIT_KMH),
      ]
      .iter()
      .cloned()
      .collect(),
    )
  }
}

impl TryFrom<HashMap<RoadClass, f64>> for SpeedLimits {
  type Error = String;

  fn try_from(overrides: HashMap<RoadClass, f64>) -> Result<Self, Self::Error> {
    for (class, speed) in &overrides {
      check_positive("speed limit", *class, *speed)?;
    }
    let mut limits = SpeedLimits::default();
    limits.0.extend(overrides);
    Ok(limits)
  }
}

impl From<SpeedLimits> for HashMap<RoadClass, f64> {
  fn from(limits: SpeedLimits) -> Self {
    limits.0
  }
}

/// Inclusive range of civil hours, e.g. 7..=9
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourWindow {
  pub start: u8,
  pub end: u8,
}

impl HourWindow {
  pub fn new(start: u8, end: u8) -> Self {
    HourWindow { start, end }
  }

  pub fn contains(&self, hour: u8) -> bool {
    hour >= self.start && hour <= self.end
  }
}

/// When rush hours happen and how much slower each road class gets during them.
///
/// Classes without a factor are not affected by rush hours. Windows lie within 0..=23 with
/// `start <= end`, factors are positive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRushHours")]
pub struct RushHours {
  pub windows: Vec<HourWindow>,
  pub factors: HashMap<RoadClass, f64>,
}

// Unchecked form of `RushHours` as found in a profile
#[derive(Deserialize)]
#[serde(default)]
struct RawRushHours {
  windows: Vec<HourWindow>,
  factors: HashMap<RoadClass, f64>,
}

impl Default for RawRushHours {
  fn default() -> Self {
    let RushHours { windows, factors } = RushHours::default();
    RawRushHours { windows, factors }
  }
}

impl TryFrom<RawRushHours> for RushHours {
  type Error = String;

  fn try_from(raw: RawRushHours) -> Result<Self, Self::Error> {
    for window in &raw.windows {
      if window.start > window.end || window.end > 23 {
        return Err(format!(
          "rush hour window {}..={} must lie within 0..=23",
          window.start, window.end
        ));
      }
    }
    for (class, factor) in &raw.factors {
      check_positive("rush hour factor", *class, *factor)?;
    }
    Ok(RushHours {
      windows: raw.windows,
      factors: raw.factors,
    })
  }
}

impl RushHours {
  pub fn is_rush_hour(&self, hour: u8) -> bool {
    self.windows.iter().any(|window| window.contains(hour))
  }

  pub fn factor(&self, class: RoadClass) -> f64 {
    self.factors.get(&class).copied().unwrap_or(1.0)
  }
}

impl Default for RushHours {
  fn default() -> Self {
    use RoadClass::*;
    RushHours {
      windows: vec![HourWindow::new(7, 9), HourWindow::new(17, 19)],
      factors: [
        (Motorway, 0.4),
        (Trunk, 0.4),
        (Primary, 0.6),
        (Secondary, 0.8),
        (Tertiary, 0.8),
      ]
      .iter()
      .cloned()
      .collect(),
    }
  }
}

/// Everything needed to build a network and a cost model for it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
  pub speed_limits: SpeedLimits,
  pub rush_hours: RushHours,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_speed_limits() {
    let limits = SpeedLimits::default();
    assert_eq!(limits.speed_limit(RoadClass::Motorway), 100.0);
    assert_eq!(limits.speed_limit(RoadClass::MotorwayLink), 100.0);
    assert_eq!(limits.speed_limit(RoadClass::Trunk), 80.0);
    assert_eq!(limits.speed_limit(RoadClass::TrunkLink), 80.0);
    assert_eq!(limits.speed_limit(RoadClass::Primary), 65.0);
    assert_eq!(limits.speed_limit(RoadClass::PrimaryLink), 65.0);
    assert_eq!(limits.speed_limit(RoadClass::Secondary), 55.0);
    assert_eq!(limits.speed_limit(RoadClass::Tertiary), 40.0);
    assert_eq!(limits.speed_limit(RoadClass::Residential), 40.0);
    assert_eq!(limits.speed_limit(RoadClass::LivingStreet), 20.0);
    assert_eq!(limits.speed_limit(RoadClass::Unclassified), 50.0);
  }

  #[test]
  fn test_rush_hour_windows_are_inclusive() {
    let rush_hours = RushHours::default();
    let rush: Vec<u8> = (0..24).filter(|h| rush_hours.is_rush_hour(*h)).collect();
    assert_eq!(rush, vec![7, 8, 9, 17, 18, 19]);
  }

  #[test]
  fn test_rush_hour_factors() {
    let rush_hours = RushHours::default();
    assert_eq!(rush_hours.factor(RoadClass::Motorway), 0.4);
    assert_eq!(rush_hours.factor(RoadClass::Trunk), 0.4);
    assert_eq!(rush_hours.factor(RoadClass::Primary), 0.6);
    assert_eq!(rush_hours.factor(RoadClass::Secondary), 0.8);
    assert_eq!(rush_hours.factor(RoadClass::Tertiary), 0.8);
    assert_eq!(rush_hours.factor(RoadClass::MotorwayLink), 1.0);
    assert_eq!(rush_hours.factor(RoadClass::Residential), 1.0);
    assert_eq!(rush_hours.factor(RoadClass::LivingStreet), 1.0);
  }

  #[test]
  fn test_partial_profile_keeps_defaults() {
    let profile: Profile =
      serde_json::from_str(r#"{ "speed_limits": { "motorway": 120.0 } }"#).unwrap();

    assert_eq!(profile.speed_limits.speed_limit(RoadClass::Motorway), 120.0);
    assert_eq!(profile.speed_limits.speed_limit(RoadClass::Trunk), 80.0);
    assert_eq!(profile.rush_hours, RushHours::default());
  }

  #[test]
  fn test_rush_hours_from_json() {
    let profile: Profile = serde_json::from_str(
      r#"{ "rush_hours": { "windows": [{ "start": 6, "end": 10 }], "factors": { "residential": 0.5 } } }"#,
    )
    .unwrap();

    assert!(profile.rush_hours.is_rush_hour(6));
    assert!(!profile.rush_hours.is_rush_hour(17));
    assert_eq!(profile.rush_hours.factor(RoadClass::Residential), 0.5);
    assert_eq!(profile.rush_hours.factor(RoadClass::Motorway), 1.0);
  }

  fn parse_error(json: &str) -> String {
    serde_json::from_str::<Profile>(json).unwrap_err().to_string()
  }

  #[test]
  fn test_invalid_profiles_are_rejected() {
    assert!(parse_error(r#"{ "speed_limits": { "residential": 0.0 } }"#)
      .contains("speed limit for residential must be positive, got 0"));
    assert!(parse_error(r#"{ "speed_limits": { "motorway": -100.0 } }"#)
      .contains("speed limit for motorway must be positive"));
    assert!(parse_error(r#"{ "rush_hours": { "factors": { "motorway": -1.0 } } }"#)
      .contains("rush hour factor for motorway must be positive"));
    assert!(parse_error(r#"{ "rush_hours": { "factors": { "primary": 0.0 } } }"#)
      .contains("rush hour factor for primary must be positive"));
    assert!(parse_error(r#"{ "rush_hours": { "windows": [{ "start": 9, "end": 7 }] } }"#)
      .contains("rush hour window 9..=7 must lie within 0..=23"));
    assert!(parse_error(r#"{ "rush_hours": { "windows": [{ "start": 22, "end": 24 }] } }"#)
      .contains("rush hour window 22..=24"));
  }

  #[test]
  fn test_partial_rush_hours_keep_defaults() {
    let profile: Profile =
      serde_json::from_str(r#"{ "rush_hours": { "factors": { "residential": 0.9 } } }"#).unwrap();

    assert!(profile.rush_hours.is_rush_hour(8));
    assert!(profile.rush_hours.is_rush_hour(18));
    assert_eq!(profile.rush_hours.factor(RoadClass::Residential), 0.9);
  }

  #[test]
  fn test_profile_round_trips_through_json() {
    let profile = Profile::default();
    let json = serde_json::to_string(&profile).unwrap();
    assert_eq!(serde_json::from_str::<Profile>(&json).unwrap(), profile);
  }
}
