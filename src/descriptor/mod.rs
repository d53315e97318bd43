//! Descriptor types: the in-memory objects metadata is derived from.

pub mod attribute;
pub mod tool;
pub mod toolbox;

pub use attribute::{AttrValue, AttributeSource};
pub use tool::{ParamFilter, ParameterDescriptor, ScriptExample, ToolDescriptor};
pub use toolbox::ToolboxDescriptor;
