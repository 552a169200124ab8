// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinates, Location, GeoError, EventListing, EventInZone, BoundingBox};
pub use requests::{DistanceRequest, WithinRadiusRequest, FormatLocationRequest, FormatDistanceRequest, GeocodeRequest, EventsInZoneRequest};
pub use responses::{DistanceResponse, WithinRadiusResponse, FormattedResponse, EventsInZoneResponse, HealthResponse, ErrorResponse};
