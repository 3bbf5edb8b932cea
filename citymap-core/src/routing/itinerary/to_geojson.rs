use geo::{LineString, line_string};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::{Itinerary, ItineraryStep};
use crate::{Error, Network};

impl Itinerary {
    /// Converts the itinerary to a `GeoJSON` `FeatureCollection` with one
    /// feature per step: a `Point` for waits and a `LineString` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] if a step references a location that
    /// is not part of `network`.
    pub fn to_geojson(&self, network: &Network) -> Result<FeatureCollection, Error> {
        let features = self
            .steps
            .iter()
            .map(|step| step_feature(network, step))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        })
    }

    pub fn to_geojson_string(&self, network: &Network) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson(network)?)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn step_feature(network: &Network, step: &ItineraryStep) -> Result<Feature, Error> {
    let location = |id: &str| {
        network
            .location(id)
            .map(|location| location.geometry)
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "step {} visits unknown location '{id}'",
                    step.number
                ))
            })
    };
    let from = location(&step.from)?;

    let geometry = if step.from == step.to {
        Geometry::new(GeoJsonValue::from(&from))
    } else {
        let to = location(&step.to)?;
        let line: LineString<f64> = line_string![
            (x: from.x(), y: from.y()),
            (x: to.x(), y: to.y()),
        ];
        Geometry::new(GeoJsonValue::from(&line))
    };

    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": {
            "step_type": step.kind.name(),
            "step_number": step.number,
            "description": step.description,
            "from_name": step.from_name,
            "to_name": step.to_name,
            "duration": step.duration,
            "distance": step.kind.distance(),
            "arrival_time": step.arrival.to_string(),
            "route_id": step.kind.route_id(),
            "traffic_level": step.kind.traffic_level(),
        }
    });

    Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}
