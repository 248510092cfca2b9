// Service exports
pub mod overpass;
pub mod postgres;

pub use overpass::{OverpassClient, OverpassError};
pub use postgres::{ProfileStore, ProfileStoreError, StoredProfile};
