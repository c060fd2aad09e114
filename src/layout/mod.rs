//! Geometry, measurement and invalidation for the calendar layout.

pub mod geometry;
pub mod invalidation;
pub mod measure;

pub use geometry::{grid_offset_for, Geometry, MonthInputs};
pub use invalidation::Changes;
pub use measure::{measure, Measurement};
