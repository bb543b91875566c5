// Public library interface for profmap.
// The binaries (CLI and debug-layout) are thin front ends over these modules.

pub mod error;
pub mod layout;
pub mod profile;
pub mod render;

pub use error::{Error, InvalidInput, Result};
