mod profile;

pub use profile::{NewProfile, Profile};
