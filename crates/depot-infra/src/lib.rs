//! Infrastructure layer - relational persistence, input document loading

pub mod document_loader;
pub mod persistence;
