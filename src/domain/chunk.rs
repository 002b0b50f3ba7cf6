use uuid::Uuid;

use super::document::DocumentId;

/// A bounded window of the normalized document text.
///
/// `offset` is the char position of the chunk start in the source text.
/// `overlap` is the number of leading chars this chunk shares verbatim with
/// the tail of the previous chunk; the first chunk always has overlap 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub id: ChunkId,
    pub text: String,
    pub document_id: DocumentId,
    pub offset: usize,
    pub overlap: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(Uuid);

impl ChunkId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ChunkId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(text: String, document_id: DocumentId, offset: usize, overlap: usize) -> Self {
        Self {
            id: ChunkId::new(),
            text,
            document_id,
            offset,
            overlap,
        }
    }
}
