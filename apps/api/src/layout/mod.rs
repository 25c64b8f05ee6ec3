// Letter layout: fixed-column word-wrap and page flow.
// Pure and CPU-bound; async callers run it inside tokio::task::spawn_blocking.

pub mod geometry;
pub mod paginate;
pub mod wrap;

// Re-export the public API consumed by the pipeline and renderer.
pub use geometry::PageGeometry;
pub use paginate::{paginate, PaginatedDocument};
