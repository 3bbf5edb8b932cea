use geo::{Distance, Euclidean, Haversine, Point};

use crate::Kilometers;
use crate::model::DistanceMetric;

/// Approximate length of one degree of latitude
pub const KM_PER_DEGREE: f64 = 111.0;

/// Distance between two coordinates under the given metric.
///
/// `Euclidean` returns coordinate units (planar canvases have no real
/// scale), the geographic metrics return kilometres.
pub fn distance(metric: DistanceMetric, a: Point<f64>, b: Point<f64>) -> Kilometers {
    match metric {
        DistanceMetric::Euclidean => Euclidean.distance(a, b),
        DistanceMetric::Haversine => Haversine.distance(a, b) / 1000.0,
        DistanceMetric::Equirectangular => equirectangular(a, b),
    }
}

/// Linear degree-to-km approximation, scaled by the latitude of `a`
fn equirectangular(a: Point<f64>, b: Point<f64>) -> Kilometers {
    let lat_km = (b.y() - a.y()) * KM_PER_DEGREE;
    let lng_km = (b.x() - a.x()) * KM_PER_DEGREE * a.y().to_radians().cos();
    lat_km.hypot(lng_km)
}
