//! Simulated crowd-sourced traffic patterns.
//!
//! There is no learning here: [`PatternSimulator`] stands in for a feed of observed speeds by
//! assigning crowd multipliers to randomly picked edges. The numbers are plausible, not
//! statistically meaningful.

use crate::network::{RoadClass, RoadNetwork};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Probability that an edge of a class gets a multiplier, and the multiplier it gets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pattern {
  pub probability: f64,
  pub multiplier: f64,
}

impl Pattern {
  pub fn new(probability: f64, multiplier: f64) -> Self {
    Pattern {
      probability,
      multiplier,
    }
  }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PatternPolicy {
  /// Motorways and trunks: hidden congestion
  pub congestion: Pattern,
  /// Primary and secondary roads: local shortcuts
  pub local_shortcut: Pattern,
  /// Residential streets: parallel routes
  pub parallel_route: Pattern,
}

impl Default for PatternPolicy {
  fn default() -> Self {
    PatternPolicy {
      congestion: Pattern::new(0.05, 0.6),
      local_shortcut: Pattern::new(0.03, 1.4),
      parallel_route: Pattern::new(0.02, 1.2),
    }
  }
}

/// What a simulation changed
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternStats {
  pub congestion_points: usize,
  pub shortcuts: usize,
}

/// One-shot mutator of crowd multipliers.
///
/// All the randomness comes from the generator given to the simulator. Use
/// [`PatternSimulator::from_entropy`] for real runs and [`PatternSimulator::with_seed`] for
/// reproducible ones.
pub struct PatternSimulator<R: Rng = ChaCha8Rng> {
  rng: R,
  policy: PatternPolicy,
}

impl PatternSimulator<ChaCha8Rng> {
  pub fn from_entropy() -> Self {
    Self::new(ChaCha8Rng::from_entropy())
  }

  pub fn with_seed(seed: u64) -> Self {
    Self::new(ChaCha8Rng::seed_from_u64(seed))
  }
}

impl<R: Rng> PatternSimulator<R> {
  pub fn new(rng: R) -> Self {
    PatternSimulator {
      rng,
      policy: PatternPolicy::default(),
    }
  }

  pub fn with_policy(mut self, policy: PatternPolicy) -> Self {
    self.policy = policy;
    self
  }

  fn pattern(&self, class: RoadClass) -> Option<Pattern> {
    match class {
      RoadClass::Motorway | RoadClass::Trunk => Some(self.policy.congestion),
      RoadClass::Primary | RoadClass::Secondary => Some(self.policy.local_shortcut),
      RoadClass::Residential => Some(self.policy.parallel_route),
      _ => None,
    }
  }

  /// Draws once for every edge of a class with a pattern and overwrites the multiplier of the
  /// selected edges. Must run before the network is used for routing.
  pub fn apply(mut self, network: &mut RoadNetwork) -> PatternStats {
    let mut stats = PatternStats::default();

    for edge in network.edges_mut() {
      let pattern = match self.pattern(edge.road_class) {
        Some(pattern) => pattern,
        None => continue,
      };
      if self.rng.gen::<f64>() >= pattern.probability {
        continue;
      }

      edge.crowd_multiplier = pattern.multiplier;
      if pattern.multiplier < 1.0 {
        stats.congestion_points += 1;
      } else {
        stats.shortcuts += 1;
      }
    }

    info!(
      "Applied crowd-sourced patterns: {} hidden shortcuts, {} congestion points",
      stats.shortcuts, stats.congestion_points
    );
    stats
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::network::Edge;
  use crate::test_utils::grid;

  fn multipliers(network: &mut RoadNetwork) -> Vec<(RoadClass, f64)> {
    network
      .edges_mut()
      .map(|e: &mut Edge| (e.road_class, e.crowd_multiplier))
      .collect()
  }

  fn always() -> PatternPolicy {
    PatternPolicy {
      congestion: Pattern::new(1.0, 0.6),
      local_shortcut: Pattern::new(1.0, 1.4),
      parallel_route: Pattern::new(1.0, 1.2),
    }
  }

  #[test]
  fn test_every_class_gets_its_multiplier() {
    let mut network = grid(6, 6);
    let stats = PatternSimulator::with_seed(7).with_policy(always()).apply(&mut network);

    for (class, multiplier) in multipliers(&mut network) {
      let expected = match class {
        RoadClass::Motorway => 0.6,
        RoadClass::Primary | RoadClass::Secondary => 1.4,
        RoadClass::Residential => 1.2,
        _ => 1.0,
      };
      assert_eq!(multiplier, expected, "{:?}", class);
    }

    // 2 motorway rows of 10 edges are congested, 3 tertiary columns of 10 edges are left alone
    assert_eq!(stats.congestion_points, 20);
    assert_eq!(stats.shortcuts, network.edge_count() - 20 - 3 * 10);
  }

  #[test]
  fn test_zero_probability_changes_nothing() {
    let never = PatternPolicy {
      congestion: Pattern::new(0.0, 0.6),
      local_shortcut: Pattern::new(0.0, 1.4),
      parallel_route: Pattern::new(0.0, 1.2),
    };
    let mut network = grid(5, 5);
    let stats = PatternSimulator::with_seed(1).with_policy(never).apply(&mut network);

    assert_eq!(stats, PatternStats::default());
    assert!(multipliers(&mut network).iter().all(|(_, m)| *m == 1.0));
  }

  #[test]
  fn test_seeded_simulation_is_reproducible() {
    let mut first = grid(20, 20);
    let mut second = grid(20, 20);

    let first_stats = PatternSimulator::with_seed(42).apply(&mut first);
    let second_stats = PatternSimulator::with_seed(42).apply(&mut second);

    assert_eq!(first_stats, second_stats);
    assert_eq!(multipliers(&mut first), multipliers(&mut second));
  }

  #[test]
  fn test_default_policy_only_touches_known_classes() {
    let mut network = grid(30, 30);
    PatternSimulator::with_seed(3).apply(&mut network);

    for (class, multiplier) in multipliers(&mut network) {
      match class {
        RoadClass::Motorway | RoadClass::Trunk => assert!(multiplier == 1.0 || multiplier == 0.6),
        RoadClass::Primary | RoadClass::Secondary => assert!(multiplier == 1.0 || multiplier == 1.4),
        RoadClass::Residential => assert!(multiplier == 1.0 || multiplier == 1.2),
        _ => assert_eq!(multiplier, 1.0),
      }
    }
  }

  #[test]
  fn test_speed_limits_survive_simulation() {
    let mut network = grid(4, 4);
    let before: Vec<f64> = network.edges_mut().map(|e| e.speed_limit).collect();
    PatternSimulator::with_seed(9).with_policy(always()).apply(&mut network);
    let after: Vec<f64> = network.edges_mut().map(|e| e.speed_limit).collect();

    assert_eq!(before, after);
  }
}
