//! Built-in networks shipped with the library

mod bus_system;
mod city_roads;
mod planar_demo;

pub use bus_system::bus_system;
pub use city_roads::city_roads;
pub use planar_demo::planar_demo;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_networks_are_valid() {
        for network in [planar_demo(), city_roads(), bus_system()] {
            assert!(network.validate().is_ok(), "{} is invalid", network.name);
        }
    }

    #[test]
    fn network_sizes() {
        let planar = planar_demo();
        assert_eq!(planar.locations.len(), 8);
        assert_eq!(planar.roads.len(), 10);

        let city = city_roads();
        assert_eq!(city.locations.len(), 16);
        assert_eq!(city.roads.len(), 25);

        let bus = bus_system();
        assert_eq!(bus.locations.len(), 17);
        assert_eq!(bus.routes.len(), 8);
        assert_eq!(bus.walking.len(), 8);
        assert_eq!(bus.congestion.len(), 6);
    }
}
