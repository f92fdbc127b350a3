//! Operation-centric modules for AVX2 lane primitives
//!
//! Each operation is organized in its own module with type-specific implementations

pub mod segment_ends;
pub mod segmented_scan;

// Re-export the operation traits for convenience
pub use segmented_scan::SegmentedScan;
