//! Digit chunking — cut free text into numerals a system can draw.
//!
//! Every maximal run of ASCII digits is split independently:
//! each `0` becomes its own zero numeral (authors use zeros to separate
//! numerals, so they are never grouped), and a non-zero digit starts a
//! group of up to `max_digit_width` digits read greedily.
//!
//! ```text
//! cistercian  "000001000003222"  →  0 0 0 0 0 1000 0 0 3222
//! basingstoke "12345"            →  12 34 5
//! ```

use crate::model::{Chunk, ChunkOrigin, SystemId};

/// Split `text` into chunk values for `system`.
pub fn chunk_digits(text: &str, system: SystemId) -> Vec<u32> {
    chunk_text(text, system).into_iter().map(|c| c.value).collect()
}

/// Split `text` into chunks, keeping each chunk's origin and byte span.
///
/// Anything that is not an ASCII digit is a separator. Never fails: text
/// without digits gives an empty list.
pub fn chunk_text(text: &str, system: SystemId) -> Vec<Chunk> {
    let width = system.system().max_digit_width;
    let bytes = text.as_bytes();
    let mut chunks = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        chunk_run(&bytes[start..i], start, width, &mut chunks);
    }

    tracing::debug!(system = %system, chunks = chunks.len(), "chunked digit text");
    chunks
}

/// Chunk one digit run that begins at byte `offset` of the source text.
fn chunk_run(run: &[u8], offset: usize, width: usize, out: &mut Vec<Chunk>) {
    let mut i = 0;
    while i < run.len() {
        if run[i] == b'0' {
            out.push(Chunk {
                value: 0,
                origin: ChunkOrigin::Zero,
                start: offset + i,
                end: offset + i + 1,
            });
            i += 1;
            continue;
        }

        let end = (i + width).min(run.len());
        let value = run[i..end]
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
        out.push(Chunk {
            value,
            origin: ChunkOrigin::Significant,
            start: offset + i,
            end: offset + end,
        });
        i = end;
    }
}
