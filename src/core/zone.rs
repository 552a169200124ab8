use std::cmp::Ordering;

use crate::models::{EventInZone, EventListing, Location};
use crate::core::{
    distance::{calculate_bounding_box, is_within_bounding_box},
    format::{format_distance_km, format_location},
    radius::{distance_between, within_radius},
};

/// Result of the zone matching process
#[derive(Debug)]
pub struct ZoneResult {
    pub matches: Vec<EventInZone>,
    pub total_events: usize,
    pub unlocated_events: usize,
    pub mobility_zone_km: f64,
}

/// Finds the events a performer can reach from their base
///
/// # Pipeline Stages
/// 1. Geospatial bounding box pre-filter
/// 2. Exact radius check
/// 3. Ranking by distance, then date
#[derive(Debug, Clone)]
pub struct ZoneMatcher {
    max_radius_km: f64,
}

impl ZoneMatcher {
    /// A negative or NaN cap is treated as zero
    pub fn new(max_radius_km: f64) -> Self {
        let max_radius_km = if max_radius_km >= 0.0 { max_radius_km } else { 0.0 };
        Self { max_radius_km }
    }

    /// Clamp a requested mobility zone to `[0, max_radius_km]`
    pub fn clamp_radius(&self, mobility_zone_km: f64) -> f64 {
        if mobility_zone_km.is_nan() {
            return 0.0;
        }
        mobility_zone_km.clamp(0.0, self.max_radius_km)
    }

    /// List the events inside a performer's mobility zone
    ///
    /// # Arguments
    /// * `performer` - The performer's base location
    /// * `mobility_zone_km` - How far the performer is willing to travel
    /// * `events` - Candidate events
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// ZoneResult with the matching events, closest first
    pub fn events_in_zone(
        &self,
        performer: &Location,
        mobility_zone_km: f64,
        events: Vec<EventListing>,
        limit: usize,
    ) -> ZoneResult {
        let total_events = events.len();
        let radius_km = self.clamp_radius(mobility_zone_km);
        let unlocated_events = events
            .iter()
            .filter(|event| !event.location.has_coordinates())
            .count();

        let Some(base) = performer.coordinates() else {
            tracing::debug!("Performer has no coordinates, no event can be matched");
            return ZoneResult {
                matches: Vec::new(),
                total_events,
                unlocated_events,
                mobility_zone_km: radius_km,
            };
        };

        let bbox = calculate_bounding_box(base.latitude, base.longitude, radius_km);

        let mut matches: Vec<EventInZone> = events
            .into_iter()
            // Stage 1: cheap bounding box rejection
            .filter(|event| {
                event
                    .location
                    .coordinates()
                    .is_some_and(|c| is_within_bounding_box(c.latitude, c.longitude, &bbox))
            })
            // Stage 2: exact great-circle check
            .filter(|event| within_radius(performer, &event.location, radius_km))
            .filter_map(|event| {
                let distance_km = distance_between(performer, &event.location)?;
                Some(EventInZone {
                    event_id: event.id,
                    title: event.title,
                    date: event.date,
                    formatted_distance: format_distance_km(distance_km),
                    formatted_location: format_location(&event.location),
                    location: event.location,
                    distance_km,
                })
            })
            .collect();

        // Stage 3: closest first, then earliest date (undated last), then id
        matches.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
                .then_with(|| match (a.date, b.date) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                })
                .then_with(|| a.event_id.cmp(&b.event_id))
        });

        matches.truncate(limit);

        ZoneResult {
            matches,
            total_events,
            unlocated_events,
            mobility_zone_km: radius_km,
        }
    }
}

impl Default for ZoneMatcher {
    fn default() -> Self {
        Self::new(500.0)
    }
}
