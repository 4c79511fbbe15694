mod document;
mod node;

pub use document::{Document, Mutation, ROOT_ID};
pub use node::Element;
