use crate::opcode::OpcodeTable;

use super::Instruction;

pub mod prettify {

    #[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
    pub enum Variant {
        /// Append the specialized opcode actually stored in the stream
        #[default]
        WithRaw,
        NoRaw,
    }
}

impl Instruction {
    /// `dis`-style line: offset, canonical mnemonic, operand and encoding
    /// notes.
    pub fn to_string(&self, table: &OpcodeTable, opts: prettify::Variant) -> String {
        let canonical = self.canonical_descriptor(table);
        let mut result = format!("{:>6} {:<24}", self.offset, canonical.mnemonic);
        if canonical.takes_operand {
            result.push_str(&format!(" {:>5}", self.operand));
        }

        if opts == prettify::Variant::WithRaw && self.is_specialized() {
            result.push_str(&format!(" [{}]", table.mnemonic(self.raw_opcode)));
        }
        if self.prefix_count > 0 {
            result.push_str(&format!(" (extended: {})", self.prefix_count));
        }
        if self.cache_entries() > 0 {
            result.push_str(&format!(" (cache: {})", self.cache_entries()));
        }
        result.trim_end().to_string()
    }
}

/// One line per instruction.
pub fn pretty_code(insns: &[Instruction], table: &OpcodeTable, opts: prettify::Variant) -> String {
    insns
        .iter()
        .map(|inst| inst.to_string(table, opts))
        .collect::<Vec<String>>()
        .join("\n")
}
