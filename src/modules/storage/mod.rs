//! Object storage for incident photos and avatars
//!
//! S3-compatible client (MinIO or any S3 endpoint). All stored images are
//! publicly readable; the client applies the bucket policy at startup.

mod object_store;

pub use object_store::ObjectStore;
