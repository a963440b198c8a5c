use log::trace;

use crate::{decode_err, Result};

/// Longest `EXTENDED_ARG` run the encoding produces (32-bit operands)
pub const MAX_EXTENDED_ARGS: usize = 3;

/// Pending `EXTENDED_ARG` prefix chain.
///
/// Each prefix contributes one more significant byte to the operand of the
/// instruction it precedes. The chain is empty again after [`resolve`] or
/// [`clear`].
///
/// [`resolve`]: ExtendedArg::resolve
/// [`clear`]: ExtendedArg::clear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtendedArg {
    start: usize,
    depth: usize,
    value: u32,
}

impl ExtendedArg {
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    #[inline(always)]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Offset of the first prefix of the pending chain.
    #[inline]
    pub fn start(&self) -> Option<usize> {
        match self.depth {
            0 => None,
            _ => Some(self.start),
        }
    }

    /// Folds the operand byte of the prefix at `offset` into the chain.
    ///
    /// A prefix beyond [`MAX_EXTENDED_ARGS`] fails at its own offset.
    pub fn push(&mut self, offset: usize, byte: u8) -> Result<()> {
        if self.depth == 0 {
            self.start = offset;
        }
        if self.depth == MAX_EXTENDED_ARGS {
            return decode_err!(UnresolvedPrefixChain {
                offset,
                depth: self.depth + 1
            });
        }

        self.depth += 1;
        self.value = (self.value << 8) | byte as u32;
        trace!(
            "EXTENDED_ARG at {offset}: depth {}, pending {:#x}",
            self.depth,
            self.value
        );
        Ok(())
    }

    /// Combines the chain with the final instruction's operand byte and
    /// leaves the chain empty.
    #[inline]
    pub fn resolve(&mut self, byte: u8) -> u32 {
        let operand = (self.value << 8) | byte as u32;
        self.clear();
        operand
    }

    #[inline]
    pub fn clear(&mut self) {
        *self = ExtendedArg::default();
    }

    /// Fails if the code stream ended while a chain was still pending.
    pub fn finish(&self) -> Result<()> {
        match self.start() {
            None => Ok(()),
            Some(offset) => decode_err!(UnresolvedPrefixChain {
                offset,
                depth: self.depth
            }),
        }
    }
}

/// Folds a run of prefix bytes (most significant first) with the final
/// operand byte.
pub fn fold(prefixes: &[u8], operand: u8) -> Result<u32> {
    let mut chain = ExtendedArg::default();
    for (i, byte) in prefixes.iter().enumerate() {
        chain.push(i * 2, *byte)?;
    }
    Ok(chain.resolve(operand))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_no_prefix() {
        assert_eq!(fold(&[], 0x42), Ok(0x42));
    }

    #[test]
    fn test_single_prefix() {
        assert_eq!(fold(&[0x01], 0x23), Ok(0x0123));
    }

    #[test]
    fn test_full_chain() {
        assert_eq!(fold(&[0x01, 0x23, 0x45], 0x67), Ok(0x0123_4567));
        assert_eq!(fold(&[0xFF, 0xFF, 0xFF], 0xFF), Ok(u32::MAX));
    }

    #[test]
    fn test_overlong_chain() {
        assert_eq!(
            fold(&[0, 0, 0, 1], 0),
            Err(DecodeError::UnresolvedPrefixChain {
                offset: 6,
                depth: 4
            })
        );
    }

    #[test]
    fn test_resolve_resets_chain() {
        let mut chain = ExtendedArg::default();
        chain.push(10, 0x02).unwrap();
        assert_eq!(chain.start(), Some(10));
        assert_eq!(chain.resolve(0x00), 0x0200);
        assert!(chain.is_empty());
        assert_eq!(chain.resolve(0x07), 0x07);
    }

    #[test]
    fn test_finish_with_pending_chain() {
        let mut chain = ExtendedArg::default();
        assert!(chain.finish().is_ok());
        chain.push(6, 0x01).unwrap();
        chain.push(8, 0x02).unwrap();
        assert_eq!(
            chain.finish(),
            Err(DecodeError::UnresolvedPrefixChain {
                offset: 6,
                depth: 2
            })
        );
    }
}
