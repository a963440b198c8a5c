#![no_main]

use pyrs_bytecode::bytecode::{prettify, BytecodeContainer};

extern crate libfuzzer_sys;
extern crate pyrs_bytecode;

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    for quickened in [false, true] {
        let container = BytecodeContainer::new(data).quickened(quickened);
        if let Ok(insns) = container.decode() {
            // records must tile the whole blob
            let mut pos = 0;
            for inst in &insns {
                assert_eq!(inst.start(), pos);
                assert!(inst.length >= 2);
                pos = inst.end();
                assert!(!inst.to_string(container.opcode_table(), prettify::Variant::WithRaw).is_empty());
            }
            assert_eq!(pos, data.len());
        }
    }
});
