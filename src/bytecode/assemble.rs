use log::debug;

use crate::opcode::OpcodeTable;
use crate::{decode_err, Result};

/// Encodes `(opcode, operand)` pairs into a code stream `decode` reads back.
///
/// Operands wider than a byte get the shortest `EXTENDED_ARG` chain, and
/// quickened output reserves zeroed cache entries after every instruction.
/// Prefixes, cache words and other structural opcodes are produced here
/// and cannot be passed in.
pub fn assemble(table: &OpcodeTable, program: &[(u8, u32)], quickened: bool) -> Result<Vec<u8>> {
    let mut code = Vec::with_capacity(program.len() * 2);
    for &(opcode, operand) in program {
        let desc = table.get(opcode);
        if table.is_extended_arg(opcode) || desc.is_structural() {
            return decode_err!(UnencodableOpcode {
                offset: code.len(),
                opcode: desc.mnemonic
            });
        }

        let canonical = table.canonical(opcode);
        let arg = if canonical.takes_operand {
            let bytes = operand.to_be_bytes();
            let skip = bytes[..3].iter().take_while(|b| **b == 0).count();
            for byte in &bytes[skip..3] {
                code.push(table.extended_arg());
                code.push(*byte);
            }
            bytes[3]
        } else {
            if operand != 0 {
                debug!(
                    "{}: dropping operand {operand} of opcode without argument",
                    canonical.mnemonic
                );
            }
            0
        };

        code.push(opcode);
        code.push(arg);
        if quickened {
            let cache_bytes = 2 * canonical.cache_slot_count as usize;
            code.resize(code.len() + cache_bytes, 0);
        }
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::opcode::v311::{Opcode, OPCODES};

    #[test]
    fn test_narrow_operands() {
        let code = assemble(
            &OPCODES,
            &[(Opcode::LOAD_CONST as u8, 1), (Opcode::RETURN_VALUE as u8, 0)],
            false,
        )
        .unwrap();
        assert_eq!(code, [100, 1, 83, 0]);
    }

    #[test]
    fn test_wide_operand_gets_prefixes() {
        let code = assemble(&OPCODES, &[(Opcode::LOAD_CONST as u8, 0x1_2345)], false).unwrap();
        assert_eq!(code, [144, 0x01, 144, 0x23, 100, 0x45]);

        let code = assemble(&OPCODES, &[(Opcode::LOAD_CONST as u8, 0x0100)], false).unwrap();
        assert_eq!(code, [144, 0x01, 100, 0x00]);
    }

    #[test]
    fn test_quickened_reserves_cache() {
        let code = assemble(&OPCODES, &[(Opcode::COMPARE_OP_INT_JUMP as u8, 2)], true).unwrap();
        assert_eq!(code, [Opcode::COMPARE_OP_INT_JUMP as u8, 2, 0, 0, 0, 0]);
    }

    #[test]
    fn test_structural_words_rejected() {
        assert_eq!(
            assemble(
                &OPCODES,
                &[(Opcode::NOP as u8, 0), (Opcode::EXTENDED_ARG as u8, 1)],
                false
            ),
            Err(DecodeError::UnencodableOpcode {
                offset: 2,
                opcode: "EXTENDED_ARG"
            })
        );
        assert_eq!(
            assemble(&OPCODES, &[(Opcode::CACHE as u8, 0)], true),
            Err(DecodeError::UnencodableOpcode {
                offset: 0,
                opcode: "CACHE"
            })
        );
        for code in [Opcode::EXTENDED_ARG_QUICK, Opcode::DO_TRACING] {
            assert!(matches!(
                assemble(&OPCODES, &[(code as u8, 0)], false),
                Err(DecodeError::UnencodableOpcode { .. })
            ));
        }
    }
}
