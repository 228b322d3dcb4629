//! Safe SQL builder: identifiers are fixed and quoted, values go in as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
