use crate::core::distance::distance_between;
use crate::models::{Destination, GeoPoint, RouteStop};

/// Regional hub used as the route start when none is given (Bhubaneswar)
pub const DEFAULT_START: GeoPoint = GeoPoint {
    lat: 20.2961,
    lng: 85.8245,
};

/// Order destinations into a visiting sequence (greedy nearest neighbour)
///
/// From the current position, repeatedly travel to the closest remaining
/// destination; ties go to the one listed first. O(n²), fine for the few dozen
/// stops a day trip has.
///
/// Shape of the result:
/// - no destinations: empty
/// - one destination: returned without `distance_from_previous`
/// - otherwise: every routed stop carries its leg distance in km
///
/// Destinations without coordinates are never routed. They are appended after
/// the routed stops, in input order, without a distance.
pub fn optimize_route(destinations: &[Destination], start: Option<GeoPoint>) -> Vec<RouteStop> {
    if destinations.len() <= 1 {
        return destinations
            .iter()
            .map(|destination| RouteStop {
                destination: destination.clone(),
                distance_from_previous: None,
            })
            .collect();
    }

    let (mut remaining, unrouted): (Vec<&Destination>, Vec<&Destination>) = destinations
        .iter()
        .partition(|destination| destination.coordinates().is_some());

    if !unrouted.is_empty() {
        tracing::warn!(
            "{} destination(s) without coordinates appended unrouted",
            unrouted.len()
        );
    }

    let mut current = start.unwrap_or(DEFAULT_START);
    let mut stops = Vec::with_capacity(destinations.len());

    while !remaining.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = f64::INFINITY;
        let mut nearest_point = current;

        for (index, candidate) in remaining.iter().enumerate() {
            if let Some(point) = candidate.coordinates() {
                let distance = distance_between(current, point);
                if distance < nearest_distance {
                    nearest_index = index;
                    nearest_distance = distance;
                    nearest_point = point;
                }
            }
        }

        // Vec::remove keeps the remaining order, which the tie-break relies on
        let next = remaining.remove(nearest_index);
        stops.push(RouteStop {
            destination: next.clone(),
            distance_from_previous: Some(nearest_distance),
        });
        current = nearest_point;
    }

    stops.extend(unrouted.into_iter().map(|destination| RouteStop {
        destination: destination.clone(),
        distance_from_previous: None,
    }));

    stops
}

/// Sum of the leg distances present in a route, in km
pub fn total_distance(stops: &[RouteStop]) -> f64 {
    stops.iter().filter_map(|stop| stop.distance_from_previous).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_destination(id: i64, lat: f64, lng: f64) -> Destination {
        let mut destination = Destination::new(id, &format!("Stop {}", id));
        destination.lat = Some(lat);
        destination.lng = Some(lng);
        destination
    }

    fn ids(stops: &[RouteStop]) -> Vec<String> {
        stops.iter().map(|s| s.destination.id.to_string()).collect()
    }

    #[test]
    fn test_empty_route() {
        assert!(optimize_route(&[], None).is_empty());
    }

    #[test]
    fn test_single_destination_has_no_distance() {
        let destinations = vec![create_destination(1, 19.8135, 85.8312)];
        let stops = optimize_route(&destinations, None);

        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].distance_from_previous, None);
    }

    #[test]
    fn test_greedy_order_along_a_meridian() {
        let start = GeoPoint::new(20.0, 85.0);
        // Listed far to near; 0.1° of latitude is ~11.12 km
        let destinations = vec![
            create_destination(3, 20.3, 85.0),
            create_destination(1, 20.1, 85.0),
            create_destination(2, 20.2, 85.0),
        ];

        let stops = optimize_route(&destinations, Some(start));

        assert_eq!(ids(&stops), vec!["1", "2", "3"]);
        for stop in &stops {
            let leg = stop.distance_from_previous.expect("leg distance");
            assert!((leg - 11.12).abs() < 0.1, "leg should be ~11.12km, got {}", leg);
        }
    }

    #[test]
    fn test_tie_goes_to_first_listed() {
        let start = GeoPoint::new(20.0, 85.0);
        let destinations = vec![
            create_destination(1, 20.1, 85.0),
            create_destination(2, 19.9, 85.0),
        ];

        let stops = optimize_route(&destinations, Some(start));
        assert_eq!(ids(&stops)[0], "1");
    }

    #[test]
    fn test_default_start_is_hub() {
        let destinations = vec![
            create_destination(1, 19.8135, 85.8312), // Puri
            create_destination(2, 20.2961, 85.8245), // Bhubaneswar
        ];

        let stops = optimize_route(&destinations, None);

        assert_eq!(ids(&stops), vec!["2", "1"]);
        assert_eq!(stops[0].distance_from_previous, Some(0.0));
    }

    #[test]
    fn test_missing_coordinates_are_appended() {
        let start = GeoPoint::new(20.0, 85.0);
        let destinations = vec![
            Destination::new(9, "No coordinates"),
            create_destination(2, 20.2, 85.0),
            create_destination(1, 20.1, 85.0),
        ];

        let stops = optimize_route(&destinations, Some(start));

        assert_eq!(ids(&stops), vec!["1", "2", "9"]);
        assert!(stops[..2].iter().all(|s| s.distance_from_previous.is_some()));
        assert_eq!(stops[2].distance_from_previous, None);
    }

    #[test]
    fn test_total_distance_matches_legs() {
        let start = GeoPoint::new(20.2961, 85.8245);
        let destinations = vec![
            create_destination(1, 19.8135, 85.8312),
            create_destination(2, 19.8876, 86.0945),
            create_destination(3, 19.7, 85.3),
            create_destination(4, 21.5, 86.9),
        ];

        let stops = optimize_route(&destinations, Some(start));

        let mut expected = 0.0;
        let mut previous = start;
        for stop in &stops {
            let point = stop.destination.coordinates().expect("coordinates");
            expected += distance_between(previous, point);
            previous = point;
        }

        assert!((total_distance(&stops) - expected).abs() < 1e-9);
    }
}
