//! Step-by-step itineraries compiled from search results

mod to_geojson;

use log::warn;
use serde::Serialize;

use crate::cost::{TrafficLevel, capped_wait_time};
use crate::model::{ArcKind, ClockTime, Location, Network, RoadType};
use crate::routing::PathResult;
use crate::{Kilometers, LocationId, Minutes, RouteId};

/// What the traveller does during one step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    Walk {
        distance: Kilometers,
    },
    Wait {
        route_id: RouteId,
    },
    Ride {
        route_id: RouteId,
        route_number: String,
        route_color: Option<String>,
        fare: f64,
        distance: Kilometers,
        traffic_multiplier: f64,
        traffic_level: TrafficLevel,
    },
    /// Driving along a road or any other untyped movement
    Move {
        road_type: RoadType,
        distance: Option<Kilometers>,
        traffic_multiplier: f64,
        traffic_level: TrafficLevel,
    },
}

impl StepKind {
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Walk { .. } => "walk",
            StepKind::Wait { .. } => "wait",
            StepKind::Ride { .. } => "ride",
            StepKind::Move { .. } => "move",
        }
    }

    pub fn distance(&self) -> Kilometers {
        match self {
            StepKind::Walk { distance } | StepKind::Ride { distance, .. } => *distance,
            StepKind::Move { distance, .. } => distance.unwrap_or_default(),
            StepKind::Wait { .. } => 0.0,
        }
    }

    pub fn fare(&self) -> f64 {
        match self {
            StepKind::Ride { fare, .. } => *fare,
            _ => 0.0,
        }
    }

    /// Congestion on the ridden or driven segment, none for walks and waits
    pub fn traffic_level(&self) -> Option<TrafficLevel> {
        match self {
            StepKind::Ride { traffic_level, .. } | StepKind::Move { traffic_level, .. } => {
                Some(*traffic_level)
            }
            StepKind::Walk { .. } | StepKind::Wait { .. } => None,
        }
    }

    pub fn route_id(&self) -> Option<&str> {
        match self {
            StepKind::Ride { route_id, .. } | StepKind::Wait { route_id } => Some(route_id),
            StepKind::Walk { .. } | StepKind::Move { .. } => None,
        }
    }
}

/// One user-facing leg. Waits start and end at the same location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItineraryStep {
    /// 1-based position in the itinerary
    pub number: usize,
    #[serde(flatten)]
    pub kind: StepKind,
    pub from: LocationId,
    pub to: LocationId,
    pub from_name: String,
    pub to_name: String,
    pub description: String,
    pub duration: Minutes,
    /// Clock time at the end of the step
    pub arrival: ClockTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RouteSummary {
    pub total_time: Minutes,
    pub total_fare: f64,
    pub total_distance: Kilometers,
    pub transfers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    pub nodes: Vec<LocationId>,
    pub steps: Vec<ItineraryStep>,
    pub summary: RouteSummary,
    pub departure: ClockTime,
    pub arrival: ClockTime,
}

impl Itinerary {
    /// Route ids ridden, in order, without repeats for consecutive rides
    pub fn routes(&self) -> Vec<&str> {
        let mut routes: Vec<&str> = Vec::new();
        for step in &self.steps {
            if let StepKind::Ride { route_id, .. } = &step.kind
                && routes.last() != Some(&route_id.as_str())
            {
                routes.push(route_id);
            }
        }
        routes
    }
}

/// Expands a path into walk, wait, ride and move steps with a running clock
/// starting at `departure`.
///
/// A wait step, and a transfer, is inserted whenever a ride continues on a
/// different route than the previous ride; the first boarding has none.
/// Waits last the arc's expected wait clamped to `max_wait`. Hops whose
/// locations or route are missing from `network` are skipped.
///
/// Returns `None` for unreachable paths and when no step could be compiled.
pub fn compile_itinerary(
    network: &Network,
    path: &PathResult,
    departure: ClockTime,
    max_wait: Option<Minutes>,
) -> Option<Itinerary> {
    if !path.is_reachable() {
        return None;
    }

    let mut compiler = Compiler {
        departure,
        steps: Vec::with_capacity(path.arcs.len() + 2),
        summary: RouteSummary::default(),
    };
    let mut current_route: Option<&str> = None;

    for (arc, hop) in path.arcs.iter().zip(path.nodes.windows(2)) {
        let (Some(from), Some(to)) = (network.location(&hop[0]), network.location(&hop[1])) else {
            warn!("Skipping hop {} -> {}: unknown location", hop[0], hop[1]);
            continue;
        };

        match &arc.kind {
            ArcKind::Walk { distance, time } => {
                compiler.push(
                    StepKind::Walk {
                        distance: *distance,
                    },
                    from,
                    to,
                    format!("Walk from {} to {}", from.name, to.name),
                    *time,
                );
            }
            ArcKind::Ride {
                route_id,
                fare,
                distance,
                time,
                wait_time,
                traffic_multiplier,
            } => {
                let Some(route) = network.route(route_id) else {
                    warn!("Skipping ride on unknown route {route_id}");
                    continue;
                };

                if current_route.is_some_and(|current| current != route_id) {
                    compiler.summary.transfers += 1;
                    compiler.push(
                        StepKind::Wait {
                            route_id: route_id.clone(),
                        },
                        from,
                        from,
                        format!("Wait for route {} at {}", route.number, from.name),
                        capped_wait_time(*wait_time, max_wait),
                    );
                }

                compiler.push(
                    StepKind::Ride {
                        route_id: route_id.clone(),
                        route_number: route.number.clone(),
                        route_color: route.color.clone(),
                        fare: *fare,
                        distance: *distance,
                        traffic_multiplier: *traffic_multiplier,
                        traffic_level: TrafficLevel::from_multiplier(*traffic_multiplier),
                    },
                    from,
                    to,
                    format!(
                        "Take route {} ({}) from {} to {}",
                        route.number, route.name, from.name, to.name
                    ),
                    *time,
                );
                current_route = Some(route_id);
            }
            ArcKind::Drive {
                road_type,
                distance,
                time,
                traffic_multiplier,
            } => {
                compiler.push(
                    StepKind::Move {
                        road_type: road_type.clone(),
                        distance: *distance,
                        traffic_multiplier: *traffic_multiplier,
                        traffic_level: TrafficLevel::from_multiplier(*traffic_multiplier),
                    },
                    from,
                    to,
                    format!("Travel from {} to {}", from.name, to.name),
                    *time,
                );
            }
        }
    }

    if compiler.steps.is_empty() {
        return None;
    }

    Some(Itinerary {
        nodes: path.nodes.clone(),
        arrival: departure.add_minutes(compiler.summary.total_time),
        steps: compiler.steps,
        summary: compiler.summary,
        departure,
    })
}

struct Compiler {
    departure: ClockTime,
    steps: Vec<ItineraryStep>,
    summary: RouteSummary,
}

impl Compiler {
    fn push(
        &mut self,
        kind: StepKind,
        from: &Location,
        to: &Location,
        description: String,
        duration: Minutes,
    ) {
        self.summary.total_time += duration;
        self.summary.total_fare += kind.fare();
        self.summary.total_distance += kind.distance();

        self.steps.push(ItineraryStep {
            number: self.steps.len() + 1,
            kind,
            from: from.id.clone(),
            to: to.id.clone(),
            from_name: from.name.clone(),
            to_name: to.name.clone(),
            description,
            duration,
            arrival: self.departure.add_minutes(self.summary.total_time),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ArcWeights, Criterion, DistanceMetric, GraphArc, TransitRoute, WalkingConnection,
    };
    use crate::routing::shortest_path_multi_criteria;
    use crate::{BuildOptions, build_graph};

    fn stops() -> Network {
        let mut network = Network::new("stops", DistanceMetric::Euclidean);
        network.locations = (0..5)
            .map(|i| Location::new(format!("s{i}"), format!("Stop {i}"), f64::from(i), 0.0))
            .collect();
        network.routes = vec![
            TransitRoute::new("R1", "1", &["s0", "s1", "s2", "s3"], 20.0, 6000.0),
            TransitRoute::new("R2", "2", &["s1", "s2"], 30.0, 7000.0),
        ];
        network.walking = vec![WalkingConnection::new("s3", "s4", 0.3, 4.0)];
        network
    }

    fn ride(route_id: &str, time: f64, wait: f64) -> GraphArc {
        GraphArc {
            kind: ArcKind::Ride {
                route_id: route_id.into(),
                fare: if route_id == "R1" { 6000.0 } else { 7000.0 },
                distance: 1.0,
                time,
                wait_time: wait,
                traffic_multiplier: 1.0,
            },
            weights: ArcWeights {
                time: time + wait,
                fare: 0.0,
                transfers: 1.0,
            },
        }
    }

    fn walk(distance: f64, time: f64) -> GraphArc {
        GraphArc {
            kind: ArcKind::Walk { distance, time },
            weights: ArcWeights {
                time,
                fare: 0.0,
                transfers: 0.5,
            },
        }
    }

    fn path(nodes: &[&str], arcs: Vec<GraphArc>) -> PathResult {
        PathResult {
            nodes: nodes.iter().map(|n| (*n).to_string()).collect(),
            arcs,
            arc_ids: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn departure() -> ClockTime {
        ClockTime::from_hm(8, 0).unwrap()
    }

    #[test]
    fn route_change_adds_wait_and_transfer() {
        let path = path(
            &["s0", "s1", "s2"],
            vec![ride("R1", 1.5, 10.0), ride("R2", 1.5, 15.0)],
        );
        let itinerary = compile_itinerary(&stops(), &path, departure(), Some(15.0)).unwrap();

        let kinds: Vec<_> = itinerary.steps.iter().map(|s| s.kind.name()).collect();
        assert_eq!(kinds, vec!["ride", "wait", "ride"]);
        assert_eq!(itinerary.summary.transfers, 1);
        assert_eq!(itinerary.summary.total_fare, 13000.0);
        assert_eq!(itinerary.summary.total_time, 1.5 + 15.0 + 1.5);
        assert_eq!(itinerary.steps[1].from, "s1");
        assert_eq!(itinerary.steps[1].to, "s1");
        assert_eq!(itinerary.routes(), vec!["R1", "R2"]);
    }

    #[test]
    fn same_route_has_no_transfers() {
        let path = path(
            &["s0", "s1", "s2", "s3"],
            vec![
                ride("R1", 1.5, 10.0),
                ride("R1", 1.5, 10.0),
                ride("R1", 1.5, 10.0),
            ],
        );
        let itinerary = compile_itinerary(&stops(), &path, departure(), Some(15.0)).unwrap();
        assert_eq!(itinerary.summary.transfers, 0);
        assert_eq!(itinerary.steps.len(), 3);
        assert_eq!(itinerary.summary.total_fare, 18000.0);
        assert_eq!(itinerary.routes(), vec!["R1"]);
    }

    #[test]
    fn walk_between_rides_of_one_route() {
        let path = path(
            &["s1", "s2", "s3", "s4"],
            vec![ride("R1", 1.5, 10.0), walk(0.3, 4.0), ride("R1", 1.5, 10.0)],
        );
        let itinerary = compile_itinerary(&stops(), &path, departure(), Some(15.0)).unwrap();

        let kinds: Vec<_> = itinerary.steps.iter().map(|s| s.kind.name()).collect();
        assert_eq!(kinds, vec!["ride", "walk", "ride"]);
        assert_eq!(itinerary.summary.transfers, 0);
        assert_eq!(itinerary.summary.total_time, 1.5 + 4.0 + 1.5);
    }

    #[test]
    fn walk_then_other_route_is_a_transfer() {
        let path = path(
            &["s1", "s2", "s3", "s4"],
            vec![ride("R1", 1.5, 10.0), walk(0.3, 4.0), ride("R2", 1.5, 15.0)],
        );
        let itinerary = compile_itinerary(&stops(), &path, departure(), Some(15.0)).unwrap();

        let kinds: Vec<_> = itinerary.steps.iter().map(|s| s.kind.name()).collect();
        assert_eq!(kinds, vec!["ride", "walk", "wait", "ride"]);
        assert_eq!(itinerary.summary.transfers, 1);
        assert_eq!(itinerary.steps[2].from, "s3");
        assert_eq!(itinerary.steps[2].duration, 15.0);
    }

    #[test]
    fn rides_report_their_traffic_level() {
        let mut congested = ride("R1", 1.5, 10.0);
        if let ArcKind::Ride {
            traffic_multiplier, ..
        } = &mut congested.kind
        {
            *traffic_multiplier = 1.9;
        }
        let path = path(
            &["s0", "s1", "s2", "s3"],
            vec![ride("R1", 1.5, 10.0), congested, walk(0.3, 4.0)],
        );
        let itinerary = compile_itinerary(&stops(), &path, departure(), None).unwrap();

        let levels: Vec<_> = itinerary
            .steps
            .iter()
            .map(|step| step.kind.traffic_level())
            .collect();
        assert_eq!(
            levels,
            vec![
                Some(TrafficLevel::Normal),
                Some(TrafficLevel::VeryHeavy),
                None
            ]
        );
        let json = serde_json::to_value(&itinerary.steps[1]).unwrap();
        assert_eq!(json["traffic_level"], "very_heavy");
    }

    #[test]
    fn displayed_wait_is_capped() {
        let path = path(
            &["s0", "s1", "s2"],
            vec![ride("R1", 1.5, 10.0), ride("R2", 1.5, 15.0)],
        );
        let itinerary = compile_itinerary(&stops(), &path, departure(), Some(12.0)).unwrap();
        assert_eq!(itinerary.steps[1].duration, 12.0);
        let uncapped = compile_itinerary(&stops(), &path, departure(), None).unwrap();
        assert_eq!(uncapped.steps[1].duration, 15.0);
    }

    #[test]
    fn clock_runs_through_the_steps() {
        let network = stops();
        let graph = build_graph(
            &network,
            Criterion::Time,
            departure(),
            &BuildOptions::unrestricted(),
        )
        .unwrap();
        let result = shortest_path_multi_criteria(&graph, "s0", "s4", Criterion::Time);
        let itinerary = compile_itinerary(&network, &result.path, departure(), None).unwrap();

        let summed: f64 = itinerary.steps.iter().map(|step| step.duration).sum();
        assert_eq!(summed, itinerary.summary.total_time);
        assert_eq!(
            itinerary.arrival,
            departure().add_minutes(itinerary.summary.total_time)
        );
        assert_eq!(itinerary.steps.last().unwrap().arrival, itinerary.arrival);
        assert_eq!(itinerary.steps.last().unwrap().kind.name(), "walk");
        for (i, step) in itinerary.steps.iter().enumerate() {
            assert_eq!(step.number, i + 1);
        }
    }

    #[test]
    fn arrival_wraps_past_midnight() {
        let path = path(&["s3", "s4"], vec![walk(0.3, 45.0)]);
        let late = ClockTime::from_hm(23, 30).unwrap();
        let itinerary = compile_itinerary(&stops(), &path, late, None).unwrap();
        assert_eq!(itinerary.arrival.to_string(), "00:15");
    }

    #[test]
    fn failures_yield_none() {
        let network = stops();
        let unreachable = PathResult::unreachable();
        assert!(compile_itinerary(&network, &unreachable, departure(), None).is_none());

        // a lone location is reachable but has nothing to compile
        let own = path(&["s1"], Vec::new());
        assert!(compile_itinerary(&network, &own, departure(), None).is_none());

        // every hop references a location the network does not know
        let foreign = path(&["x", "y"], vec![ride("R1", 1.0, 10.0)]);
        assert!(compile_itinerary(&network, &foreign, departure(), None).is_none());
    }
}
