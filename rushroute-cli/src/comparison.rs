use rushroute::{CostMode, NodeId, PathFinder, RouteQuery, RouteResult};
use std::io::{self, Write};

/// Routes between the same pair of nodes for every cost mode
pub fn compare(
    finder: &PathFinder,
    origin: NodeId,
    destination: NodeId,
    hour: u8,
) -> Result<Vec<RouteResult>, rushroute::Error> {
    CostMode::ALL
        .iter()
        .map(|mode| finder.route(&RouteQuery::new(origin, destination, *mode, hour)))
        .collect()
}

fn find(routes: &[RouteResult], mode: CostMode) -> Option<&RouteResult> {
    routes.iter().find(|route| route.mode == mode)
}

fn minutes(seconds: f64) -> f64 {
    seconds / 60.0
}

fn km(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn print_comparison<W: Write>(routes: &[RouteResult], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(64))?;
    writeln!(out, "           ROUTE COMPARISON: 3 OPTIMIZATION METHODS")?;
    writeln!(out, "{}\n", "=".repeat(64))?;

    let baseline = find(routes, CostMode::SpeedLimit).filter(|route| route.is_found());

    for route in routes {
        let name = route.mode.name();
        writeln!(out, "+--- {} {}+", name, "-".repeat(50usize.saturating_sub(name.len())))?;

        if !route.is_found() {
            writeln!(out, "| No route found")?;
        } else {
            writeln!(out, "| Distance:       {:.2} km", km(route.total_distance))?;
            writeln!(out, "| Estimated Time: {:.1} minutes", minutes(route.estimated_time))?;
            writeln!(out, "| Waypoints:      {} nodes", route.path.len())?;

            if let Some(baseline) = baseline.filter(|_| route.mode != CostMode::SpeedLimit) {
                let time_diff = route.estimated_time - baseline.estimated_time;
                let dist_diff = route.total_distance - baseline.total_distance;

                let time = if time_diff < 0.0 {
                    format!(">> {:.1} min FASTER", minutes(-time_diff))
                } else {
                    format!("<< {:.1} min slower", minutes(time_diff))
                };
                let distance = if dist_diff > 0.0 {
                    format!("+{:.2} km longer", km(dist_diff))
                } else {
                    format!("{:.2} km shorter", km(dist_diff))
                };
                writeln!(out, "| vs Traditional: {} ({})", time, distance)?;
            }
        }

        writeln!(out, "+{}+\n", "-".repeat(63))?;
    }

    print_insights(routes, out)
}

fn print_insights<W: Write>(routes: &[RouteResult], out: &mut W) -> io::Result<()> {
    let found = |mode| find(routes, mode).filter(|route| route.is_found());
    let baseline = match found(CostMode::SpeedLimit) {
        Some(baseline) => baseline,
        None => return writeln!(out),
    };

    writeln!(out, "*** KEY INSIGHTS:")?;

    if let Some(shortest) = found(CostMode::Distance) {
        let slower = minutes(shortest.estimated_time - baseline.estimated_time);
        if slower > 0.0 {
            writeln!(out, "   * Shortest distance != fastest time!")?;
            writeln!(
                out,
                "     Distance route is {:.1} min slower despite being shorter.",
                slower
            )?;
        }
    }

    if let Some(learned) = found(CostMode::Learned) {
        let saved = minutes(baseline.estimated_time - learned.estimated_time);
        if saved > 0.0 {
            writeln!(out, "   * Crowd-sourced learning saves {:.1} minutes!", saved)?;
            writeln!(out, "     The learned route finds shortcuts that traditional GPS misses.")?;
        }
    }

    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::triangle;
    use rushroute::CostModel;

    fn report(routes: &[RouteResult]) -> String {
        let mut out = Vec::new();
        print_comparison(routes, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_compare_all_modes() {
        let network = triangle();
        let finder = PathFinder::new(&network, CostModel::default());

        let routes = compare(&finder, 1, 3, 17).unwrap();
        let modes: Vec<_> = routes.iter().map(|r| r.mode).collect();
        assert_eq!(modes, CostMode::ALL.to_vec());
        assert_eq!(routes[0].path, vec![1, 3]);
        assert_eq!(routes[1].path, vec![1, 2, 3]);
        assert_eq!(routes[2].path, vec![1, 3]);
    }

    #[test]
    fn test_compare_rejects_unknown_nodes() {
        let network = triangle();
        let finder = PathFinder::new(&network, CostModel::default());

        assert_eq!(
            compare(&finder, 1, 42, 12),
            Err(rushroute::Error::InvalidQueryParameter(
                "unknown destination node 42".to_string()
            ))
        );
    }

    #[test]
    fn test_rush_hour_report() {
        let network = triangle();
        let finder = PathFinder::new(&network, CostModel::default());
        let text = report(&compare(&finder, 1, 3, 17).unwrap());

        assert!(text.contains("+--- Speed Limit (Traditional GPS) "));
        assert!(text.contains("| Distance:       2.00 km"));
        assert!(text.contains("| Estimated Time: 3.0 minutes"));
        assert!(text.contains("min FASTER (-0.50 km shorter)"));
        assert!(text.contains("Crowd-sourced learning saves"));
        assert!(!text.contains("Shortest distance != fastest time!"));
    }

    #[test]
    fn test_off_peak_report() {
        let network = triangle();
        let finder = PathFinder::new(&network, CostModel::default());
        let text = report(&compare(&finder, 1, 3, 12).unwrap());

        assert!(text.contains("Shortest distance != fastest time!"));
        assert!(text.contains("| vs Traditional: << "));
        assert!(text.contains("min slower despite being shorter."));
        assert!(!text.contains("Crowd-sourced learning saves"));
    }

    #[test]
    fn test_unreachable_report() {
        let network = triangle();
        let finder = PathFinder::new(&network, CostModel::default());
        let text = report(&compare(&finder, 3, 1, 12).unwrap());

        assert_eq!(text.matches("| No route found").count(), 3);
        assert!(!text.contains("KEY INSIGHTS"));
    }
}
