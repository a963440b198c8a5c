use crate::opcode::{OpcodeTable, PythonVersion};
use crate::Result;

use super::{Instruction, InstructionIterator};

/// Code stream of one code object plus how it should be decoded.
///
/// Everything the container-format parser knows about the blob is passed in
/// here; nothing is inferred from the bytes.
#[derive(Debug, Clone)]
pub struct BytecodeContainer<'a> {
    code: &'a [u8],
    version: PythonVersion,
    pub quickened: bool,
    pub strict: bool,
}

impl<'a> BytecodeContainer<'a> {
    pub fn new(code: &'a [u8]) -> Self {
        Self {
            code,
            version: PythonVersion::default(),
            quickened: false,
            strict: false,
        }
    }

    pub fn version(mut self, version: PythonVersion) -> Self {
        self.version = version;
        self
    }

    /// Whether instructions are followed by their inline cache entries.
    pub fn quickened(mut self, quickened: bool) -> Self {
        self.quickened = quickened;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn get_version(&self) -> PythonVersion {
        self.version
    }

    pub fn opcode_table(&self) -> &'static OpcodeTable {
        self.version.opcode_table()
    }

    #[inline(always)]
    pub fn data(&self) -> &'a [u8] {
        self.code
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.code.len()
    }

    pub fn instructions(&self) -> InstructionIterator<'a> {
        InstructionIterator::new(self.code, self.opcode_table(), self.quickened).strict(self.strict)
    }

    pub fn decode(&self) -> Result<Vec<Instruction>> {
        log::debug!(
            "decoding {} bytes for Python {} (quickened: {}, strict: {})",
            self.size(),
            self.version,
            self.quickened,
            self.strict
        );
        let insns = self.instructions().collect::<Result<Vec<_>>>()?;
        log::debug!("decoded {} instructions", insns.len());
        Ok(insns)
    }
}

impl<'a> IntoIterator for &BytecodeContainer<'a> {
    type Item = Result<Instruction>;
    type IntoIter = InstructionIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn test_defaults() {
        let container = BytecodeContainer::new(&[83, 0]);
        assert_eq!(container.get_version(), PythonVersion::V3_11);
        assert!(!container.quickened);
        assert!(!container.strict);
        assert_eq!(container.size(), 2);
    }

    #[test]
    fn test_quickened_layout() {
        let code = [107, 0, 1, 1, 2, 2, 83, 0];
        let flat = BytecodeContainer::new(&code).decode().unwrap();
        assert_eq!(flat.len(), 4);

        let quickened = BytecodeContainer::new(&code).quickened(true).decode().unwrap();
        assert_eq!(quickened.len(), 2);
        assert_eq!(quickened[0].length, 6);
    }

    #[test]
    fn test_strict_flag_reaches_iterator() {
        let code = [0xEE, 0];
        assert!(BytecodeContainer::new(&code).decode().is_ok());
        assert!(matches!(
            BytecodeContainer::new(&code).strict(true).decode(),
            Err(DecodeError::UnassignedOpcode { .. })
        ));
    }

    #[test]
    fn test_iterate_by_reference() {
        let code = [100, 0, 83, 0];
        let container = BytecodeContainer::new(&code);
        let mut count = 0;
        for inst in &container {
            assert!(inst.is_ok());
            count += 1;
        }
        assert_eq!(count, 2);
    }
}
