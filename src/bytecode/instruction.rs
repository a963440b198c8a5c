use serde::Serialize;

use crate::opcode::{OpcodeDescriptor, OpcodeTable};

/// A decoded instruction with its operand fully resolved.
///
/// `EXTENDED_ARG` prefixes are folded into `operand` and inline cache words
/// are part of `length`; neither shows up as a record of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Instruction {
    /// Offset of the opcode byte itself (after any prefixes), which is what
    /// jump targets address
    pub offset: usize,
    /// Opcode as stored in the code stream, possibly a specialized variant
    pub raw_opcode: u8,
    pub canonical_opcode: u8,
    pub operand: u32,
    /// Instruction word plus trailing cache entries, in bytes
    pub length: usize,
    /// `EXTENDED_ARG` words folded into `operand`
    pub prefix_count: u8,
}

impl Instruction {
    /// First byte accounted for by this record, including its prefixes.
    #[inline(always)]
    pub fn start(&self) -> usize {
        self.offset - 2 * self.prefix_count as usize
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    #[inline]
    pub fn cache_entries(&self) -> usize {
        (self.length - 2) / 2
    }

    #[inline]
    pub fn is_specialized(&self) -> bool {
        self.raw_opcode != self.canonical_opcode
    }

    #[inline]
    pub fn descriptor<'t>(&self, table: &'t OpcodeTable) -> &'t OpcodeDescriptor {
        table.get(self.raw_opcode)
    }

    #[inline]
    pub fn canonical_descriptor<'t>(&self, table: &'t OpcodeTable) -> &'t OpcodeDescriptor {
        table.get(self.canonical_opcode)
    }

    #[inline]
    pub fn name(&self, table: &OpcodeTable) -> &'static str {
        table.mnemonic(self.canonical_opcode)
    }
}
