use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Category of a road, as tagged with `highway=*` in OpenStreetMap.
///
/// The class drives the default speed limit of an edge and how much it suffers in rush hours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
  Motorway,
  MotorwayLink,
  Trunk,
  TrunkLink,
  Primary,
  PrimaryLink,
  Secondary,
  Tertiary,
  Residential,
  LivingStreet,
  /// Unclassified roads and anything which isn't recognized
  Unclassified,
}

impl RoadClass {
  pub const ALL: [RoadClass; 11] = [
    RoadClass::Motorway,
    RoadClass::MotorwayLink,
    RoadClass::Trunk,
    RoadClass::TrunkLink,
    RoadClass::Primary,
    RoadClass::PrimaryLink,
    RoadClass::Secondary,
    RoadClass::Tertiary,
    RoadClass::Residential,
    RoadClass::LivingStreet,
    RoadClass::Unclassified,
  ];

  /// Parses a road tag. Matching is case-sensitive, both `motorway_link` and `motorway-link`
  /// spellings are accepted. Unknown tags fall back to [`RoadClass::Unclassified`].
  pub fn from_tag(tag: &str) -> RoadClass {
    match tag {
      "motorway" => RoadClass::Motorway,
      "motorway_link" | "motorway-link" => RoadClass::MotorwayLink,
      "trunk" => RoadClass::Trunk,
      "trunk_link" | "trunk-link" => RoadClass::TrunkLink,
      "primary" => RoadClass::Primary,
      "primary_link" | "primary-link" => RoadClass::PrimaryLink,
      "secondary" => RoadClass::Secondary,
      "tertiary" => RoadClass::Tertiary,
      "residential" => RoadClass::Residential,
      "living_street" | "living-street" => RoadClass::LivingStreet,
      _ => RoadClass::Unclassified,
    }
  }

  /// OpenStreetMap spelling of the class
  pub fn tag(self) -> &'static str {
    match self {
      RoadClass::Motorway => "motorway",
      RoadClass::MotorwayLink => "motorway_link",
      RoadClass::Trunk => "trunk",
      RoadClass::TrunkLink => "trunk_link",
      RoadClass::Primary => "primary",
      RoadClass::PrimaryLink => "primary_link",
      RoadClass::Secondary => "secondary",
      RoadClass::Tertiary => "tertiary",
      RoadClass::Residential => "residential",
      RoadClass::LivingStreet => "living_street",
      RoadClass::Unclassified => "unclassified",
    }
  }
}

impl Default for RoadClass {
  fn default() -> Self {
    RoadClass::Unclassified
  }
}

impl FromStr for RoadClass {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(RoadClass::from_tag(s))
  }
}

impl fmt::Display for RoadClass {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}
