use std::iter::FusedIterator;

use log::debug;

use crate::opcode::{OpcodeTable, PythonVersion};
use crate::{decode_err, Result};

use super::{ExtendedArg, InlineCache, Instruction};

/// Decodes the whole code stream in one go.
pub fn decode(code: &[u8], version: PythonVersion, quickened: bool) -> Result<Vec<Instruction>> {
    InstructionIterator::new(code, version.opcode_table(), quickened).collect()
}

// ----------------------------------------------------------------------------
// Instruction Iterator
// ----------------------------------------------------------------------------
/// Lazy decoder over a code stream.
///
/// Yields one `Ok` per instruction and stops after the first error. All
/// state lives in the iterator itself, so a blob can be decoded any number
/// of times, concurrently or not.
#[derive(Debug, Clone)]
pub struct InstructionIterator<'a> {
    code: &'a [u8],
    table: &'static OpcodeTable,
    quickened: bool,
    strict: bool,
    pos: usize,
    done: bool,
}

impl<'a> InstructionIterator<'a> {
    pub fn new(code: &'a [u8], table: &'static OpcodeTable, quickened: bool) -> Self {
        Self {
            code,
            table,
            quickened,
            strict: false,
            pos: 0,
            done: false,
        }
    }

    /// Rejects unassigned code points and stray structural words instead of
    /// decoding them as placeholder instructions.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Byte offset the next call to `next` starts reading at.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn opcode_table(&self) -> &'static OpcodeTable {
        self.table
    }

    fn decode_next(&mut self) -> Result<Option<Instruction>> {
        let size = self.code.len();
        if self.pos == 0 && size % 2 != 0 {
            return decode_err!(MalformedLength {
                offset: size - 1,
                size
            });
        }

        let mut prefix = ExtendedArg::default();
        loop {
            if self.pos == size {
                prefix.finish()?;
                return Ok(None);
            }
            if self.pos + 2 > size {
                return decode_err!(MalformedLength {
                    offset: self.pos,
                    size
                });
            }

            let offset = self.pos;
            let raw_opcode = self.code[offset];
            let arg = self.code[offset + 1];

            if self.table.is_extended_arg(raw_opcode) {
                prefix.push(offset, arg)?;
                self.pos += 2;
                continue;
            }

            let desc = self.table.get(raw_opcode);
            // quickened caches are consumed by their owner, so a CACHE word
            // can only start an instruction in the flat layout
            if desc.is_structural() && (self.quickened || self.strict || !prefix.is_empty()) {
                return decode_err!(MisplacedStructuralWord {
                    offset,
                    opcode: desc.mnemonic
                });
            }
            if self.strict && !desc.is_assigned() {
                return decode_err!(UnassignedOpcode {
                    offset,
                    opcode: raw_opcode,
                    version: self.table.version()
                });
            }

            let canonical = self.table.canonical(raw_opcode);
            let prefix_count = prefix.depth() as u8;
            let operand = if canonical.takes_operand {
                prefix.resolve(arg)
            } else {
                if !prefix.is_empty() || arg != 0 {
                    debug!(
                        "{}: ignoring operand byte {arg:#x} and {} prefixes at {offset}",
                        canonical.mnemonic, prefix_count
                    );
                }
                prefix.clear();
                0
            };

            let end = InlineCache::skip(canonical, self.quickened, offset, size)?;
            self.pos = end;
            return Ok(Some(Instruction {
                offset,
                raw_opcode,
                canonical_opcode: canonical.code,
                operand,
                length: end - offset,
                prefix_count,
            }));
        }
    }
}

impl<'a> Iterator for InstructionIterator<'a> {
    type Item = Result<Instruction>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.decode_next() {
            Ok(Some(inst)) => Some(Ok(inst)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a> FusedIterator for InstructionIterator<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::opcode::v311::{Opcode, OPCODES};

    fn decode_311(code: &[u8], quickened: bool) -> Result<Vec<Instruction>> {
        decode(code, PythonVersion::V3_11, quickened)
    }

    #[test]
    fn test_empty_code() {
        assert_eq!(decode_311(&[], true), Ok(vec![]));
    }

    #[test]
    fn test_return_value_only() {
        let insns = decode_311(&[83, 0], false).unwrap();
        assert_eq!(
            insns,
            vec![Instruction {
                offset: 0,
                raw_opcode: 83,
                canonical_opcode: 83,
                operand: 0,
                length: 2,
                prefix_count: 0,
            }]
        );
    }

    #[test]
    fn test_odd_length() {
        assert_eq!(
            decode_311(&[100, 0, 83], false),
            Err(DecodeError::MalformedLength { offset: 2, size: 3 })
        );
    }

    #[test]
    fn test_operand_ignored_below_threshold() {
        // POP_TOP with garbage in its unused byte
        let insns = decode_311(&[1, 0xAB], false).unwrap();
        assert_eq!(insns[0].operand, 0);
    }

    #[test]
    fn test_extended_arg_is_folded() {
        let code = [144, 0x01, 100, 0x23, 83, 0];
        let insns = decode_311(&code, false).unwrap();
        assert_eq!(insns.len(), 2);
        assert_eq!(insns[0].offset, 2);
        assert_eq!(insns[0].operand, 0x0123);
        assert_eq!(insns[0].prefix_count, 1);
        assert_eq!(insns[0].start(), 0);
        assert_eq!(insns[1].operand, 0);
        assert_eq!(insns[1].prefix_count, 0);
    }

    #[test]
    fn test_extended_arg_quick_is_folded() {
        let code = [Opcode::EXTENDED_ARG_QUICK as u8, 0x02, 124, 0x01];
        let insns = decode_311(&code, true).unwrap();
        assert_eq!(insns.len(), 1);
        assert_eq!(insns[0].operand, 0x0201);
    }

    #[test]
    fn test_prefix_on_operandless_opcode_is_dropped() {
        let insns = decode_311(&[144, 0x05, 83, 0], false).unwrap();
        assert_eq!(insns[0].operand, 0);
        assert_eq!(insns[0].prefix_count, 1);
        assert_eq!(insns[0].start(), 0);
    }

    #[test]
    fn test_dangling_prefix() {
        assert_eq!(
            decode_311(&[83, 0, 144, 1, 144, 2], false),
            Err(DecodeError::UnresolvedPrefixChain {
                offset: 2,
                depth: 2
            })
        );
    }

    #[test]
    fn test_too_many_prefixes() {
        let code = [144, 0, 144, 0, 144, 0, 144, 1, 100, 0];
        assert_eq!(
            decode_311(&code, false),
            Err(DecodeError::UnresolvedPrefixChain {
                offset: 6,
                depth: 4
            })
        );
    }

    #[test]
    fn test_cache_entries_skipped() {
        // COMPARE_OP with two cache entries holding junk
        let code = [107, 2, 0xDE, 0xAD, 0xBE, 0xEF, 83, 0];
        let insns = decode_311(&code, true).unwrap();
        assert_eq!(insns.len(), 2);
        assert_eq!(insns[0].length, 6);
        assert_eq!(insns[1].offset, 6);
    }

    #[test]
    fn test_cache_entries_ignored_without_quickening() {
        let code = [107, 2, 0, 0, 0, 0];
        let insns = decode_311(&code, false).unwrap();
        assert_eq!(insns.len(), 3);
        assert!(insns.iter().all(|inst| inst.length == 2));
        assert_eq!(insns[1].canonical_opcode, Opcode::CACHE as u8);
    }

    #[test]
    fn test_truncated_cache() {
        assert_eq!(
            decode_311(&[83, 0, 106, 1, 0, 0], true),
            Err(DecodeError::TruncatedCachePadding {
                offset: 4,
                opcode: "LOAD_ATTR",
                cache_entries: 4,
                size: 6
            })
        );
    }

    #[test]
    fn test_specialized_opcode_normalized() {
        let code = [42, 3, 0, 0, 0, 0, 0, 0, 0, 0];
        let insns = decode_311(&code, true).unwrap();
        assert_eq!(insns.len(), 1);
        assert_eq!(insns[0].raw_opcode, 42);
        assert_eq!(insns[0].canonical_opcode, 106);
        assert_eq!(insns[0].operand, 3);
        assert_eq!(insns[0].length, 10);
    }

    #[test]
    fn test_strict_rejects_unassigned() {
        let code = [83, 0, 0xEE, 0];
        let lenient: Vec<_> = InstructionIterator::new(&code, &OPCODES, false)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lenient[1].canonical_opcode, 0xEE);

        let strict: Result<Vec<_>> = InstructionIterator::new(&code, &OPCODES, false)
            .strict(true)
            .collect();
        assert_eq!(
            strict,
            Err(DecodeError::UnassignedOpcode {
                offset: 2,
                opcode: 0xEE,
                version: PythonVersion::V3_11
            })
        );
    }

    #[test]
    fn test_strict_rejects_stray_cache() {
        let strict: Result<Vec<_>> = InstructionIterator::new(&[0, 0], &OPCODES, false)
            .strict(true)
            .collect();
        assert_eq!(
            strict,
            Err(DecodeError::MisplacedStructuralWord {
                offset: 0,
                opcode: "CACHE"
            })
        );
    }

    #[test]
    fn test_quickened_rejects_cache_at_instruction_start() {
        // LOAD_CONST owns no cache entries, so the CACHE word is orphaned
        assert_eq!(
            decode_311(&[100, 0, 0, 0, 83, 0], true),
            Err(DecodeError::MisplacedStructuralWord {
                offset: 2,
                opcode: "CACHE"
            })
        );
        assert_eq!(
            decode_311(&[83, 0, 255, 0], true),
            Err(DecodeError::MisplacedStructuralWord {
                offset: 2,
                opcode: "DO_TRACING"
            })
        );
    }

    #[test]
    fn test_prefix_before_structural_word() {
        for quickened in [false, true] {
            assert_eq!(
                decode_311(&[144, 1, 0, 0], quickened),
                Err(DecodeError::MisplacedStructuralWord {
                    offset: 2,
                    opcode: "CACHE"
                })
            );
        }
        assert_eq!(
            decode_311(&[144, 1, 255, 0], false),
            Err(DecodeError::MisplacedStructuralWord {
                offset: 2,
                opcode: "DO_TRACING"
            })
        );
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut iter = InstructionIterator::new(&[83, 0, 144, 1], &OPCODES, false);
        assert!(matches!(iter.next(), Some(Ok(_))));
        assert!(matches!(iter.next(), Some(Err(_))));
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_position_advances() {
        let code = [106, 0, 0, 0, 0, 0, 0, 0, 0, 0, 83, 0];
        let mut iter = InstructionIterator::new(&code, &OPCODES, true);
        assert_eq!(iter.position(), 0);
        iter.next();
        assert_eq!(iter.position(), 10);
        iter.next();
        assert_eq!(iter.position(), 12);
    }
}
