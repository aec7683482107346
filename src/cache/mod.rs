//! In-memory response cache
//!
//! Maps a resource path (e.g. `people/1`) to the JSON document the upstream
//! returned for it. Entries live for the whole process: there is no eviction,
//! no TTL and no size bound, which is acceptable for a short-lived demo server.

mod store;

pub use store::ResourceCache;
