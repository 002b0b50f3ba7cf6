mod chunk;
mod document;
mod statement;

pub use chunk::{Chunk, ChunkId};
pub use document::{Document, DocumentId, SourceFormat};
pub use statement::{DocumentType, Statement, Transaction};
