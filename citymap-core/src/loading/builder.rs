use log::{debug, info, warn};

use super::config::BuildOptions;
use crate::cost::{self, speed::DEFAULT_VEHICLE_SPEED};
use crate::model::{
    ArcKind, ArcWeights, ClockTime, Criterion, GraphArc, Network, RoadSegment, RouteGraph,
    SegmentCost, TrafficStatus, TransitRoute, WalkingConnection,
};
use crate::{Error, Kilometers};

/// Transfers weight of a walking arc, a light penalty so that equal-ride
/// paths prefer staying on board
pub const WALK_TRANSFER_PENALTY: f64 = 0.5;

/// Builds the search graph of `network` for one criterion and departure
/// time.
///
/// Every road segment, route segment and walking connection yields a pair
/// of opposite arcs. Ride arcs of routes whose expected wait exceeds
/// `options.max_wait` and walking connections longer than
/// `options.max_walk_distance` are left out.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the network fails validation.
pub fn build_graph(
    network: &Network,
    criterion: Criterion,
    departure: ClockTime,
    options: &BuildOptions,
) -> Result<RouteGraph, Error> {
    network.validate()?;

    let mut graph = RouteGraph::with_locations(&network.locations, criterion, departure);

    for road in &network.roads {
        let arc = road_arc(network, road, departure)?;
        graph.add_arc_pair(&road.from, &road.to, arc)?;
    }

    for route in &network.routes {
        add_route_arcs(&mut graph, network, route, departure, options)?;
    }

    for connection in &network.walking {
        if !options.accepts_walk(connection.distance) {
            debug!(
                "Walking connection {}-{} ({:.2} km) exceeds the walking limit",
                connection.from, connection.to, connection.distance
            );
            continue;
        }
        graph.add_arc_pair(&connection.from, &connection.to, walk_arc(connection))?;
    }

    info!(
        "Built {criterion} graph for '{}' at {departure}: {} locations, {} arcs",
        network.name,
        graph.node_count(),
        graph.arc_count()
    );

    Ok(graph)
}

/// Builds a graph meant to be queried under every criterion.
///
/// Each arc already carries its time, fare and transfers weights, so one
/// construction serves comparative queries; the graph's own criterion is
/// [`Criterion::Time`].
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the network fails validation.
pub fn build_multi_weight_graph(
    network: &Network,
    departure: ClockTime,
    options: &BuildOptions,
) -> Result<RouteGraph, Error> {
    build_graph(network, Criterion::Time, departure, options)
}

fn segment_distance(network: &Network, from: &str, to: &str) -> Result<Kilometers, Error> {
    network
        .distance_between(from, to)
        .ok_or_else(|| Error::InvalidData(format!("segment {from}-{to} has unknown endpoints")))
}

fn road_arc(
    network: &Network,
    road: &RoadSegment,
    departure: ClockTime,
) -> Result<GraphArc, Error> {
    let speed = road.road_type.speed();
    let (base_time, distance) = match road.cost {
        SegmentCost::BaseTime(time) => (time, None),
        SegmentCost::Distance(distance) => (cost::travel_time(distance, speed), Some(distance)),
        SegmentCost::Measured => {
            let distance = segment_distance(network, &road.from, &road.to)?;
            (cost::travel_time(distance, speed), Some(distance))
        }
    };

    let status = road.traffic_status.map_or(1.0, TrafficStatus::multiplier);
    let traffic = cost::traffic_multiplier(
        network,
        &road.from,
        &road.to,
        departure,
        Some(&road.road_type),
    );
    let multiplier = status * traffic;
    let time = base_time * multiplier;

    Ok(GraphArc {
        kind: ArcKind::Drive {
            road_type: road.road_type.clone(),
            distance,
            time,
            traffic_multiplier: multiplier,
        },
        weights: ArcWeights {
            time,
            fare: 0.0,
            transfers: 0.0,
        },
    })
}

fn add_route_arcs(
    graph: &mut RouteGraph,
    network: &Network,
    route: &TransitRoute,
    departure: ClockTime,
    options: &BuildOptions,
) -> Result<(), Error> {
    let wait = cost::wait_time(route.frequency);
    if !options.accepts_wait(wait) {
        warn!(
            "Route {} left out: expected wait {wait:.1} min exceeds the {:.1} min cap",
            route.id,
            options.max_wait.unwrap_or_default()
        );
        return Ok(());
    }

    let speed = route.speed.unwrap_or_else(|| {
        debug!(
            "Route {} has no speed, using {DEFAULT_VEHICLE_SPEED} km/h",
            route.id
        );
        DEFAULT_VEHICLE_SPEED
    });

    for (from, to) in route.segments() {
        let distance = segment_distance(network, from, to)?;
        let traffic = cost::traffic_multiplier(network, from, to, departure, None);
        let time = cost::travel_time(distance, speed) * traffic;

        let arc = GraphArc {
            kind: ArcKind::Ride {
                route_id: route.id.clone(),
                fare: route.fare,
                distance,
                time,
                wait_time: wait,
                traffic_multiplier: traffic,
            },
            weights: ArcWeights {
                time: time + wait,
                fare: route.fare,
                transfers: 1.0,
            },
        };
        graph.add_arc_pair(from, to, arc)?;
    }

    Ok(())
}

fn walk_arc(connection: &WalkingConnection) -> GraphArc {
    let time = connection
        .walking_time
        .unwrap_or_else(|| cost::walking_time(connection.distance));

    GraphArc {
        kind: ArcKind::Walk {
            distance: connection.distance,
            time,
        },
        weights: ArcWeights {
            time,
            fare: 0.0,
            transfers: WALK_TRANSFER_PENALTY,
        },
    }
}
