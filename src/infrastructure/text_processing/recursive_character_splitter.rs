use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId};

/// Greedy boundary-seeking splitter.
///
/// Each chunk ends at the largest boundary within `chunk_size` chars of its
/// start, preferring a paragraph break, then a line break, then whitespace.
/// A single unit with no boundary inside the window is emitted whole rather
/// than cut mid-unit, so a chunk can exceed `chunk_size` in that one case.
/// Consecutive chunks share up to `chunk_overlap` chars: the next chunk
/// starts inside the tail of the previous one, and each chunk records how
/// many of its leading chars are that shared region.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            // Overlap must leave room for new content in every chunk.
            chunk_overlap: chunk_overlap.min(chunk_size - 1),
        }
    }

    /// End position (exclusive, in chars) of the chunk starting at `start`.
    /// Boundaries at or before `min_end` are ignored: the chunk has to
    /// yield content beyond the region it shares with its predecessor,
    /// otherwise splitting stops advancing.
    fn find_chunk_end(&self, chars: &[char], start: usize, min_end: usize) -> usize {
        let total = chars.len();
        let window_end = start + self.chunk_size;
        if window_end >= total {
            return total;
        }

        let mut newline_at = None;
        let mut space_at = None;

        // Candidate ends, largest first. A boundary at `pos` closes the
        // chunk just after chars[pos - 1].
        for pos in (min_end.max(start + 1)..=window_end).rev() {
            let prev = chars[pos - 1];
            if prev == '\n' {
                if pos >= start + 2 && chars[pos - 2] == '\n' {
                    return pos;
                }
                newline_at.get_or_insert(pos);
            } else if prev.is_whitespace() {
                space_at.get_or_insert(pos);
            }
        }

        if let Some(pos) = newline_at.or(space_at) {
            return pos;
        }

        // No boundary in the window: the unit runs past chunk_size. Emit it
        // whole, up to and including its terminating whitespace.
        let mut end = window_end;
        while end < total && !chars[end].is_whitespace() {
            end += 1;
        }
        if end < total {
            end += 1;
        }
        end
    }
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        let chars: Vec<char> = text.chars().collect();
        let total = chars.len();

        let mut chunks = Vec::new();
        if total == 0 {
            return Ok(chunks);
        }

        let mut start = 0usize;
        let mut overlap = 0usize;

        loop {
            let end = self.find_chunk_end(&chars, start, start + overlap + 1);
            let chunk_text: String = chars[start..end].iter().collect();
            chunks.push(Chunk::new(chunk_text, document_id, start, overlap));

            if end >= total {
                break;
            }

            // Clamp so the next start always advances past this one.
            let len = end - start;
            let next_overlap = self.chunk_overlap.min(len.saturating_sub(1));
            start = end - next_overlap;
            overlap = next_overlap;
        }

        Ok(chunks)
    }
}
