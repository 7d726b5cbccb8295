use crate::core::distance::{calculate_bounding_box, distance_between, is_within_bounding_box};
use crate::models::{Destination, GeoPoint, NearbyDestination};

/// Destinations within `radius_km` of `origin`, closest first
///
/// Bounding box pre-filter, then the exact Haversine check. Destinations
/// without coordinates are skipped.
pub fn find_nearby(
    destinations: &[Destination],
    origin: GeoPoint,
    radius_km: f64,
    limit: usize,
) -> Vec<NearbyDestination> {
    let bbox = calculate_bounding_box(origin.lat, origin.lng, radius_km);

    let mut nearby: Vec<NearbyDestination> = destinations
        .iter()
        .filter_map(|destination| {
            let point = destination.coordinates()?;
            if !is_within_bounding_box(point.lat, point.lng, &bbox) {
                return None;
            }

            let distance_km = distance_between(origin, point);
            (distance_km <= radius_km).then(|| NearbyDestination {
                destination: destination.clone(),
                distance_km,
            })
        })
        .collect();

    nearby.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    nearby.truncate(limit);

    nearby
}
