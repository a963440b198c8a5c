use log::trace;

use crate::{decode_err, opcode::OpcodeDescriptor, Result};

/// Inline cache geometry of quickened code objects.
///
/// The number of `CACHE` words is a property of the opcode family, so every
/// specialized variant skips exactly as many words as its generic opcode.
pub struct InlineCache;

impl InlineCache {
    /// Cache entries following an instruction of `family`. Always zero for
    /// code objects without inline caches.
    #[inline(always)]
    pub fn entries(family: &OpcodeDescriptor, quickened: bool) -> u8 {
        if quickened {
            family.cache_slot_count
        } else {
            0
        }
    }

    /// Bytes taken by the instruction word plus its cache entries.
    #[inline]
    pub fn instruction_length(family: &OpcodeDescriptor, quickened: bool) -> usize {
        2 + 2 * InlineCache::entries(family, quickened) as usize
    }

    /// Offset of the next instruction after the one at `offset`.
    ///
    /// The cache run must fit into the code stream of `size` bytes.
    pub fn skip(
        family: &OpcodeDescriptor,
        quickened: bool,
        offset: usize,
        size: usize,
    ) -> Result<usize> {
        let end = offset + InlineCache::instruction_length(family, quickened);
        if end > size {
            return decode_err!(TruncatedCachePadding {
                offset: offset + 2,
                opcode: family.mnemonic,
                cache_entries: InlineCache::entries(family, quickened),
                size
            });
        }

        if end > offset + 2 {
            trace!(
                "{}: skipping {} cache entries at {}",
                family.mnemonic,
                (end - offset - 2) / 2,
                offset + 2
            );
        }
        Ok(end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::opcode::v311::{Opcode, OPCODES};

    #[test]
    fn test_entries_depend_on_layout() {
        let compare_op = OPCODES.get(Opcode::COMPARE_OP as u8);
        assert_eq!(InlineCache::entries(compare_op, true), 2);
        assert_eq!(InlineCache::entries(compare_op, false), 0);
        assert_eq!(InlineCache::instruction_length(compare_op, true), 6);
        assert_eq!(InlineCache::instruction_length(compare_op, false), 2);
    }

    #[test]
    fn test_skip_within_bounds() {
        let call = OPCODES.get(Opcode::CALL as u8);
        assert_eq!(InlineCache::skip(call, true, 4, 14), Ok(14));
        assert_eq!(InlineCache::skip(call, false, 4, 6), Ok(6));
    }

    #[test]
    fn test_skip_past_end() {
        let load_global = OPCODES.get(Opcode::LOAD_GLOBAL as u8);
        assert_eq!(
            InlineCache::skip(load_global, true, 0, 8),
            Err(DecodeError::TruncatedCachePadding {
                offset: 2,
                opcode: "LOAD_GLOBAL",
                cache_entries: 5,
                size: 8
            })
        );
    }
}
