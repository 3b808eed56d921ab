//! Edge cost models.

use crate::graph::Cost;
use crate::network::Edge;
use crate::profile::RushHours;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weighting strategy used by the search.
///
/// [`CostMode::Distance`] costs are meters, the two other modes produce seconds. Costs of
/// different units must never be compared against each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
  /// Shortest distance, speed is irrelevant
  Distance,
  /// Travel time at posted speed limits, like a traditional GPS
  SpeedLimit,
  /// Travel time at rush-hour adjusted speed corrected by crowd multipliers
  Learned,
}

impl CostMode {
  pub const ALL: [CostMode; 3] = [CostMode::Distance, CostMode::SpeedLimit, CostMode::Learned];

  pub fn name(self) -> &'static str {
    match self {
      CostMode::Distance => "Pure Distance",
      CostMode::SpeedLimit => "Speed Limit (Traditional GPS)",
      CostMode::Learned => "Learned Patterns (Advanced)",
    }
  }
}

impl fmt::Display for CostMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for CostMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "distance" => Ok(CostMode::Distance),
      "speed-limit" | "speed_limit" => Ok(CostMode::SpeedLimit),
      "learned" => Ok(CostMode::Learned),
      _ => Err(format!("Unknown cost mode '{}'", s)),
    }
  }
}

fn km_h_to_m_s(speed_km_h: f64) -> f64 {
  speed_km_h * 1000.0 / 3600.0
}

/// Converts an edge traversal into a scalar cost for a given mode and hour of the day.
#[derive(Clone, Debug, Default)]
pub struct CostModel {
  rush_hours: RushHours,
}

impl CostModel {
  pub fn new(rush_hours: RushHours) -> Self {
    CostModel { rush_hours }
  }

  pub fn rush_hours(&self) -> &RushHours {
    &self.rush_hours
  }

  pub fn is_rush_hour(&self, hour: u8) -> bool {
    self.rush_hours.is_rush_hour(hour)
  }

  /// Speed limit in km/h derated by road class during rush hours.
  pub fn adjusted_speed(&self, edge: &Edge, hour: u8) -> f64 {
    if self.is_rush_hour(hour) {
      edge.speed_limit * self.rush_hours.factor(edge.road_class)
    } else {
      edge.speed_limit
    }
  }

  /// Expected speed in km/h: adjusted speed corrected by the crowd multiplier.
  pub fn learned_speed(&self, edge: &Edge, hour: u8) -> f64 {
    self.adjusted_speed(edge, hour) * edge.crowd_multiplier
  }

  /// Expected traversal time in seconds at [`CostModel::learned_speed`].
  pub fn travel_time(&self, edge: &Edge, hour: u8) -> f64 {
    edge.distance / km_h_to_m_s(self.learned_speed(edge, hour))
  }

  pub fn cost(&self, edge: &Edge, mode: CostMode, hour: u8) -> Cost {
    match mode {
      CostMode::Distance => edge.distance,
      CostMode::SpeedLimit => edge.distance / km_h_to_m_s(edge.speed_limit),
      CostMode::Learned => self.travel_time(edge, hour),
    }
  }
}
