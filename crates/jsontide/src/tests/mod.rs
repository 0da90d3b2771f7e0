mod errors;
mod strings;

use alloc::vec::Vec;

/// Split `payload` into `parts` chunks of roughly equal size. Chunks may cut
/// multibyte characters and escape sequences anywhere; the parser must not
/// care.
pub(crate) fn chunks_of(payload: &[u8], parts: usize) -> Vec<&[u8]> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}
