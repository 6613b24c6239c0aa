//! Static demo screens.
//!
//! Each screen is a `const` [`Layout`](crate::layout::Layout) table:
//!
//! - [`STARTUP`]: board name, resolution and driver
//! - [`INFO`]: rotation, orientation and panel dimensions
//! - [`ORIENTATION`]: colored corners and a center cross for checking rotation

mod info;
mod orientation;
mod startup;

pub use info::INFO;
pub use orientation::ORIENTATION;
pub use startup::STARTUP;
