use rushroute::{CostMode, NodeId, RoadNetwork, RouteResult};
use serde::Serialize;

#[derive(Serialize)]
struct Waypoint {
    id: NodeId,
    lat: f64,
    lon: f64,
}

#[derive(Serialize)]
struct ExportedRoute {
    mode: &'static str,
    color: &'static str,
    total_distance_km: f64,
    estimated_time_min: f64,
    waypoints: Vec<Waypoint>,
}

#[derive(Serialize)]
struct ExportedRoutes {
    routes: Vec<ExportedRoute>,
}

fn color(mode: CostMode) -> &'static str {
    match mode {
        CostMode::Distance => "#FF6B6B",
        CostMode::SpeedLimit => "#4ECDC4",
        CostMode::Learned => "#95E1D3",
    }
}

fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn export_route(network: &RoadNetwork, route: &RouteResult) -> ExportedRoute {
    ExportedRoute {
        mode: route.mode.name(),
        color: color(route.mode),
        total_distance_km: round(route.total_distance / 1000.0, 3),
        estimated_time_min: round(route.estimated_time / 60.0, 1),
        waypoints: route
            .path
            .iter()
            .filter_map(|id| network.get_node(*id))
            .map(|node| Waypoint {
                id: node.id,
                lat: node.lat,
                lon: node.lon,
            })
            .collect(),
    }
}

/// Routes as a JSON document for a map viewer, one colored line per cost mode
pub fn routes_to_json(network: &RoadNetwork, routes: &[RouteResult]) -> serde_json::Result<String> {
    let exported = ExportedRoutes {
        routes: routes
            .iter()
            .map(|route| export_route(network, route))
            .collect(),
    };
    serde_json::to_string_pretty(&exported)
}
