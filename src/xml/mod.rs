//! XML assembly: schema-shaped trees and document serialization.

pub mod tree;
pub mod writer;

pub use tree::{NodeId, XmlNode, XmlTree};
pub use writer::{WriteOutcome, to_xml_string, write_document};
