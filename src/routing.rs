use citymap_core::{
    ClockTime, ComparedRoute, Criterion, Network, PlannedRoute, PlannerConfig, RoutePlanner,
};
use geojson::FeatureCollection;
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::Error;

/// A route query as sent by a map front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub criterion: Criterion,
    /// "HH:MM"
    pub departure: ClockTime,
    #[serde(default)]
    pub planner: PlannerConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteResponse {
    pub route: PlannedRoute,
    /// Steps of the best itinerary, ready for a map layer
    pub geometry: FeatureCollection,
}

/// Plans the requested route on `network`.
///
/// # Errors
///
/// Fails when the planner settings are invalid, an endpoint is unknown, or
/// no displayable route exists.
pub fn find_route(network: &Network, request: &RouteRequest) -> Result<RouteResponse, Error> {
    let planner = RoutePlanner::new(network.clone(), request.planner.clone())?;
    let route = planner.find_optimal_route(
        &request.start,
        &request.end,
        request.criterion,
        request.departure,
    )?;
    let geometry = route.best.to_geojson(network)?;
    Ok(RouteResponse { route, geometry })
}

/// Best itinerary for every criterion, using the request's criterion only
/// to validate it.
///
/// # Errors
///
/// Same conditions as [`find_route`].
pub fn compare_routes(
    network: &Network,
    request: &RouteRequest,
) -> Result<Vec<ComparedRoute>, Error> {
    let planner = RoutePlanner::new(network.clone(), request.planner.clone())?;
    Ok(planner.compare_criteria(&request.start, &request.end, request.departure)?)
}

/// JSON in, JSON out. Failures are reported as `{"error": "..."}`.
pub fn find_route_json(network: &Network, request: &str) -> String {
    let response = serde_json::from_str::<RouteRequest>(request)
        .map_err(Error::from)
        .and_then(|request| find_route(network, &request))
        .and_then(|response| serde_json::to_string(&response).map_err(Error::from));

    match response {
        Ok(body) => body,
        Err(e) => {
            warn!("Route request failed: {e}");
            json!({ "error": e.to_string() }).to_string()
        }
    }
}
