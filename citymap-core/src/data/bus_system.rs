use crate::cost::TrafficModel;
use crate::model::{
    CongestionSegment, DistanceMetric, Location, Network, TimeWindow, TransitRoute,
    WalkingConnection,
};

const STOPS: [(&str, &str, f64, f64); 17] = [
    ("BS01", "Hồ Bơi Hải Quân", 10.7935, 106.7210),
    ("BS02", "Chợ Bà Chiểu", 10.8012, 106.7125),
    ("BS03", "Chợ Văn Thánh", 10.8015, 106.7110),
    ("BS04", "Trường THPT Hồng Đức", 10.8018, 106.7115),
    ("BS05", "Đại học Hutech", 10.7940, 106.7215),
    ("BS06", "Bến đò Bình Quới", 10.7965, 106.7185),
    ("BS07", "Chợ Bình Quới", 10.7982, 106.7172),
    ("BS08", "Cư xá Thanh Đa", 10.7970, 106.7180),
    ("BS09", "Coop Mart Cầu Kinh", 10.8005, 106.7160),
    ("BS10", "Ngã Ba Hàng Xanh", 10.8020, 106.7148),
    ("BS11", "Bến xe Miền Đông mới", 10.8550, 106.7850),
    ("BS12", "Ga Metro Suối Tiên", 10.8630, 106.7820),
    ("BS13", "Ngã tư Thủ Đức", 10.8480, 106.7550),
    ("BS14", "ĐH Quốc Gia (Linh Trung)", 10.8690, 106.7510),
    ("BS15", "ĐH Nông Lâm", 10.8700, 106.7480),
    ("BS16", "GO! Dĩ An", 10.9050, 106.7720),
    ("BS17", "TP. mới Bình Dương (Hikari)", 10.9180, 106.7650),
];

struct RouteRow {
    id: &'static str,
    number: &'static str,
    color: &'static str,
    stops: &'static [&'static str],
    frequency: f64,
    fare: f64,
    speed: f64,
    hours: (&'static str, &'static str),
}

const ROUTES: [RouteRow; 8] = [
    RouteRow {
        id: "R44",
        number: "44",
        color: "#E74C3C",
        stops: &["BS01", "BS05", "BS09", "BS10", "BS02", "BS07", "BS08", "BS06"],
        frequency: 15.0,
        fare: 6000.0,
        speed: 25.0,
        hours: ("05:00", "19:30"),
    },
    RouteRow {
        id: "R30",
        number: "30",
        color: "#3498DB",
        stops: &["BS05", "BS01", "BS10", "BS02", "BS03", "BS04"],
        frequency: 15.0,
        fare: 7000.0,
        speed: 28.0,
        hours: ("05:00", "19:00"),
    },
    RouteRow {
        id: "R56",
        number: "56",
        color: "#27AE60",
        stops: &["BS05", "BS01", "BS09", "BS10", "BS02"],
        frequency: 20.0,
        fare: 6000.0,
        speed: 30.0,
        hours: ("05:00", "21:00"),
    },
    RouteRow {
        id: "R104",
        number: "104",
        color: "#9B59B6",
        stops: &["BS10", "BS02", "BS03", "BS09", "BS07", "BS13", "BS15"],
        frequency: 20.0,
        fare: 6000.0,
        speed: 28.0,
        hours: ("04:30", "20:00"),
    },
    RouteRow {
        id: "R08",
        number: "08",
        color: "#16A085",
        stops: &["BS11", "BS12", "BS13", "BS14"],
        frequency: 20.0,
        fare: 7000.0,
        speed: 30.0,
        hours: ("05:00", "21:00"),
    },
    RouteRow {
        id: "R50",
        number: "50",
        color: "#D35400",
        stops: &["BS13", "BS14", "BS15"],
        frequency: 15.0,
        fare: 7000.0,
        speed: 28.0,
        hours: ("05:30", "18:30"),
    },
    RouteRow {
        id: "R6177",
        number: "61-77",
        color: "#8E44AD",
        stops: &["BS17", "BS16", "BS11"],
        frequency: 20.0,
        fare: 8000.0,
        speed: 35.0,
        hours: ("05:30", "19:00"),
    },
    RouteRow {
        id: "R52",
        number: "52",
        color: "#1ABC9C",
        stops: &["BS10", "BS13", "BS14"],
        frequency: 25.0,
        fare: 7000.0,
        speed: 28.0,
        hours: ("05:30", "19:00"),
    },
];

const WALKING: [(&str, &str, f64, f64); 8] = [
    ("BS01", "BS05", 0.2, 3.0),
    ("BS02", "BS03", 0.15, 2.0),
    ("BS03", "BS04", 0.1, 2.0),
    ("BS07", "BS08", 0.25, 4.0),
    ("BS09", "BS10", 0.2, 3.0),
    ("BS11", "BS12", 0.4, 6.0),
    ("BS13", "BS14", 0.5, 8.0),
    ("BS14", "BS15", 0.3, 5.0),
];

const CONGESTION: [(&str, &str, &str, f64, [&str; 2]); 6] = [
    ("BS02", "BS10", "traffic_jam", 1.8, ["07:00-09:00", "16:00-18:00"]),
    ("BS05", "BS01", "school_zone", 1.2, ["06:30-07:30", "15:30-17:00"]),
    ("BS16", "BS11", "traffic_jam", 1.5, ["07:00-08:30", "16:30-18:30"]),
    ("BS10", "BS13", "traffic_jam", 1.6, ["07:00-09:00", "16:00-18:00"]),
    ("BS13", "BS11", "traffic_jam", 1.5, ["07:00-09:00", "16:00-18:00"]),
    ("BS11", "BS16", "traffic_jam", 1.4, ["07:00-08:30", "16:30-18:30"]),
];

/// Parses a window from the literal tables above, which are known to be
/// well formed.
fn window(start: &str, end: &str) -> Option<TimeWindow> {
    Some(TimeWindow::new(start.parse().ok()?, end.parse().ok()?))
}

/// Seventeen stops in Bình Thạnh, Thủ Đức and Bình Dương served by eight
/// bus routes, with walking links between neighbouring stops and
/// congestion rules on known bottlenecks.
pub fn bus_system() -> Network {
    let mut network = Network::new("bus-system", DistanceMetric::Haversine);

    network.locations = STOPS
        .iter()
        .map(|(id, name, lat, lng)| Location::from_lat_lng(*id, *name, *lat, *lng))
        .collect();

    network.routes = ROUTES
        .iter()
        .map(|row| {
            let mut route =
                TransitRoute::new(row.id, row.number, row.stops, row.frequency, row.fare)
                    .with_speed(row.speed);
            route.color = Some(row.color.to_string());
            route.operating_hours = window(row.hours.0, row.hours.1);
            route
        })
        .collect();

    network.walking = WALKING
        .iter()
        .map(|(from, to, km, minutes)| WalkingConnection::new(*from, *to, *km, *minutes))
        .collect();

    network.congestion = CONGESTION
        .iter()
        .map(|(from, to, condition, multiplier, hours)| CongestionSegment {
            from: (*from).to_string(),
            to: (*to).to_string(),
            condition: Some((*condition).to_string()),
            multiplier: *multiplier,
            active_hours: hours
                .iter()
                .filter_map(|range| range.parse().ok())
                .collect(),
        })
        .collect();

    network.traffic = TrafficModel::rush_hour();
    network
}
