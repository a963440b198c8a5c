#![no_main]

use pyrs_bytecode::bytecode::{assemble, decode};
use pyrs_bytecode::opcode::v311::OPCODES;
use pyrs_bytecode::opcode::PythonVersion;

extern crate libfuzzer_sys;
extern crate pyrs_bytecode;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    let program: Vec<(u8, u32)> = data
        .chunks_exact(5)
        .map(|c| (c[0], u32::from_le_bytes([c[1], c[2], c[3], c[4]])))
        .collect();

    let Ok(code) = assemble(&OPCODES, &program, true) else {
        return;
    };
    let insns = decode(&code, PythonVersion::V3_11, true).expect("assembled code must decode");
    assert_eq!(insns.len(), program.len());
    for (inst, &(opcode, operand)) in insns.iter().zip(&program) {
        assert_eq!(inst.raw_opcode, opcode);
        if OPCODES.takes_operand(OPCODES.canonical(opcode).code) {
            assert_eq!(inst.operand, operand);
        }
    }
});
