//! ASCII FBX 6.1 document writer
//!
//! A document is written in six sections, in order: header, definitions,
//! objects, relations, connections and footer. Only definitions, objects,
//! relations and connections depend on the scene graph.

pub mod geometry;
pub mod properties;
pub mod templates;
pub mod writer;

/// File extension of written documents
pub const EXTENSION: &str = "fbx";

pub use writer::{
    write_connections, write_definitions, write_document, write_footer, write_header,
    write_objects, write_relations,
};
