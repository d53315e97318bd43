//! tbxmeta - XML metadata generation for geospatial toolboxes
//!
//! Generates default XML metadata documents for toolbox definitions,
//! deriving values from toolbox/tool descriptors and an optional portal
//! user profile, while letting authors override any field explicitly.

pub mod descriptor;
pub mod error;
pub mod meta;
pub mod portal;
pub mod resolve;
pub mod schema;
pub mod xml;

pub use error::{Result, TbxmetaError};
pub use meta::{Generator, Report, generate};
