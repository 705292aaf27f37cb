mod location_service;

pub use location_service::{
    AddressComponents, LocationService, PermissionStatus, Position, PositionSource,
    ReportedPosition, UserLocation,
};
