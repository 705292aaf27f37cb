mod location_dto;

pub use location_dto::{AddressComponentsDto, ResolveLocationDto, UserLocationDto};
