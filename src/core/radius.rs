use crate::models::Location;

/// Check whether `target` lies within `radius_km` of `origin`
///
/// Returns `false` when either location is missing a latitude or a longitude:
/// membership cannot be decided without a position. The boundary is inclusive.
#[inline]
pub fn within_radius(origin: &Location, target: &Location, radius_km: f64) -> bool {
    match distance_between(origin, target) {
        Some(distance) => distance <= radius_km,
        None => false,
    }
}

/// Distance between two locations, if both carry coordinates
#[inline]
pub fn distance_between(origin: &Location, target: &Location) -> Option<f64> {
    let origin = origin.coordinates()?;
    let target = target.coordinates()?;
    Some(origin.distance_to(&target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Location {
        Location::new("Paris").with_coordinates(48.8566, 2.3522)
    }

    fn lyon() -> Location {
        Location::new("Lyon").with_coordinates(45.7640, 4.8357)
    }

    #[test]
    fn test_within_radius() {
        assert!(within_radius(&paris(), &lyon(), 400.0));
        assert!(!within_radius(&paris(), &lyon(), 300.0));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let exact = distance_between(&paris(), &lyon()).unwrap();
        assert!(within_radius(&paris(), &lyon(), exact));
    }

    #[test]
    fn test_missing_coordinates_never_match() {
        let mut half = Location::new("Lyon");
        half.latitude = Some(45.7640);

        assert!(!within_radius(&paris(), &half, f64::MAX));
        assert!(!within_radius(&half, &paris(), f64::MAX));
        assert!(!within_radius(&Location::new("?"), &Location::new("?"), 1000.0));
    }

    #[test]
    fn test_negative_radius_never_matches() {
        assert!(!within_radius(&paris(), &paris(), -1.0));
        assert!(!within_radius(&paris(), &paris(), f64::NAN));
    }
}
