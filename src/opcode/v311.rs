//! CPython 3.11 opcode table
//!
//! Numbering follows `Include/opcode.h` of the 3.11 release. The adaptive,
//! typed and superinstruction variants produced by quickening are listed
//! with the generic opcode they specialize.

use super::PythonVersion;

/// First opcode whose second byte is an operand
pub const HAVE_ARGUMENT: u8 = 90;

/// Inline cache entries reserved after an instruction of `family`.
///
/// Sizes are the `_PyOpcode_Caches` values of 3.11 (in 2-byte code units).
pub const fn inline_cache_entries(family: Opcode) -> u8 {
    match family {
        Opcode::BINARY_OP => 1,
        Opcode::UNPACK_SEQUENCE => 1,
        Opcode::COMPARE_OP => 2,
        Opcode::BINARY_SUBSCR => 4,
        Opcode::STORE_SUBSCR => 1,
        Opcode::LOAD_ATTR => 4,
        Opcode::STORE_ATTR => 4,
        Opcode::LOAD_GLOBAL => 5,
        Opcode::LOAD_METHOD => 10,
        Opcode::PRECALL => 1,
        Opcode::CALL => 4,
        _ => 0,
    }
}

opcode_table!(
    version: PythonVersion::V3_11,
    have_argument: HAVE_ARGUMENT,
    extended_arg: EXTENDED_ARG,
    cache: CACHE,
    cache_entries: inline_cache_entries,
 /* 0x00 */ {CACHE, "CACHE", Structural},
 /* 0x01 */ {POP_TOP, "POP_TOP", Generic},
 /* 0x02 */ {PUSH_NULL, "PUSH_NULL", Generic},
 /* 0x03 */ {BINARY_OP_ADAPTIVE, "BINARY_OP_ADAPTIVE", Specialized(BINARY_OP)},
 /* 0x04 */ {BINARY_OP_ADD_FLOAT, "BINARY_OP_ADD_FLOAT", Specialized(BINARY_OP)},
 /* 0x05 */ {BINARY_OP_ADD_INT, "BINARY_OP_ADD_INT", Specialized(BINARY_OP)},
 /* 0x06 */ {BINARY_OP_ADD_UNICODE, "BINARY_OP_ADD_UNICODE", Specialized(BINARY_OP)},
 /* 0x07 */ {BINARY_OP_INPLACE_ADD_UNICODE, "BINARY_OP_INPLACE_ADD_UNICODE", Specialized(BINARY_OP)},
 /* 0x08 */ {BINARY_OP_MULTIPLY_FLOAT, "BINARY_OP_MULTIPLY_FLOAT", Specialized(BINARY_OP)},
 /* 0x09 */ {NOP, "NOP", Generic},
 /* 0x0a */ {UNARY_POSITIVE, "UNARY_POSITIVE", Generic},
 /* 0x0b */ {UNARY_NEGATIVE, "UNARY_NEGATIVE", Generic},
 /* 0x0c */ {UNARY_NOT, "UNARY_NOT", Generic},
 /* 0x0d */ {BINARY_OP_MULTIPLY_INT, "BINARY_OP_MULTIPLY_INT", Specialized(BINARY_OP)},
 /* 0x0e */ {BINARY_OP_SUBTRACT_FLOAT, "BINARY_OP_SUBTRACT_FLOAT", Specialized(BINARY_OP)},
 /* 0x0f */ {UNARY_INVERT, "UNARY_INVERT", Generic},
 /* 0x10 */ {BINARY_OP_SUBTRACT_INT, "BINARY_OP_SUBTRACT_INT", Specialized(BINARY_OP)},
 /* 0x11 */ {BINARY_SUBSCR_ADAPTIVE, "BINARY_SUBSCR_ADAPTIVE", Specialized(BINARY_SUBSCR)},
 /* 0x12 */ {BINARY_SUBSCR_DICT, "BINARY_SUBSCR_DICT", Specialized(BINARY_SUBSCR)},
 /* 0x13 */ {BINARY_SUBSCR_GETITEM, "BINARY_SUBSCR_GETITEM", Specialized(BINARY_SUBSCR)},
 /* 0x14 */ {BINARY_SUBSCR_LIST_INT, "BINARY_SUBSCR_LIST_INT", Specialized(BINARY_SUBSCR)},
 /* 0x15 */ {BINARY_SUBSCR_TUPLE_INT, "BINARY_SUBSCR_TUPLE_INT", Specialized(BINARY_SUBSCR)},
 /* 0x16 */ {CALL_ADAPTIVE, "CALL_ADAPTIVE", Specialized(CALL)},
 /* 0x17 */ {CALL_PY_EXACT_ARGS, "CALL_PY_EXACT_ARGS", Specialized(CALL)},
 /* 0x18 */ {CALL_PY_WITH_DEFAULTS, "CALL_PY_WITH_DEFAULTS", Specialized(CALL)},
 /* 0x19 */ {BINARY_SUBSCR, "BINARY_SUBSCR", Generic},
 /* 0x1a */ {COMPARE_OP_ADAPTIVE, "COMPARE_OP_ADAPTIVE", Specialized(COMPARE_OP)},
 /* 0x1b */ {COMPARE_OP_FLOAT_JUMP, "COMPARE_OP_FLOAT_JUMP", Specialized(COMPARE_OP)},
 /* 0x1c */ {COMPARE_OP_INT_JUMP, "COMPARE_OP_INT_JUMP", Specialized(COMPARE_OP)},
 /* 0x1d */ {COMPARE_OP_STR_JUMP, "COMPARE_OP_STR_JUMP", Specialized(COMPARE_OP)},
 /* 0x1e */ {GET_LEN, "GET_LEN", Generic},
 /* 0x1f */ {MATCH_MAPPING, "MATCH_MAPPING", Generic},
 /* 0x20 */ {MATCH_SEQUENCE, "MATCH_SEQUENCE", Generic},
 /* 0x21 */ {MATCH_KEYS, "MATCH_KEYS", Generic},
 /* 0x22 */ {EXTENDED_ARG_QUICK, "EXTENDED_ARG_QUICK", Specialized(EXTENDED_ARG)},
 /* 0x23 */ {PUSH_EXC_INFO, "PUSH_EXC_INFO", Generic},
 /* 0x24 */ {CHECK_EXC_MATCH, "CHECK_EXC_MATCH", Generic},
 /* 0x25 */ {CHECK_EG_MATCH, "CHECK_EG_MATCH", Generic},
 /* 0x26 */ {JUMP_BACKWARD_QUICK, "JUMP_BACKWARD_QUICK", Specialized(JUMP_BACKWARD)},
 /* 0x27 */ {LOAD_ATTR_ADAPTIVE, "LOAD_ATTR_ADAPTIVE", Specialized(LOAD_ATTR)},
 /* 0x28 */ {LOAD_ATTR_INSTANCE_VALUE, "LOAD_ATTR_INSTANCE_VALUE", Specialized(LOAD_ATTR)},
 /* 0x29 */ {LOAD_ATTR_MODULE, "LOAD_ATTR_MODULE", Specialized(LOAD_ATTR)},
 /* 0x2a */ {LOAD_ATTR_SLOT, "LOAD_ATTR_SLOT", Specialized(LOAD_ATTR)},
 /* 0x2b */ {LOAD_ATTR_WITH_HINT, "LOAD_ATTR_WITH_HINT", Specialized(LOAD_ATTR)},
 /* 0x2c */ {LOAD_CONST__LOAD_FAST, "LOAD_CONST__LOAD_FAST", Specialized(LOAD_CONST)},
 /* 0x2d */ {LOAD_FAST__LOAD_CONST, "LOAD_FAST__LOAD_CONST", Specialized(LOAD_FAST)},
 /* 0x2e */ {LOAD_FAST__LOAD_FAST, "LOAD_FAST__LOAD_FAST", Specialized(LOAD_FAST)},
 /* 0x2f */ {LOAD_GLOBAL_ADAPTIVE, "LOAD_GLOBAL_ADAPTIVE", Specialized(LOAD_GLOBAL)},
 /* 0x30 */ {LOAD_GLOBAL_BUILTIN, "LOAD_GLOBAL_BUILTIN", Specialized(LOAD_GLOBAL)},
 /* 0x31 */ {WITH_EXCEPT_START, "WITH_EXCEPT_START", Generic},
 /* 0x32 */ {GET_AITER, "GET_AITER", Generic},
 /* 0x33 */ {GET_ANEXT, "GET_ANEXT", Generic},
 /* 0x34 */ {BEFORE_ASYNC_WITH, "BEFORE_ASYNC_WITH", Generic},
 /* 0x35 */ {BEFORE_WITH, "BEFORE_WITH", Generic},
 /* 0x36 */ {END_ASYNC_FOR, "END_ASYNC_FOR", Generic},
 /* 0x37 */ {LOAD_GLOBAL_MODULE, "LOAD_GLOBAL_MODULE", Specialized(LOAD_GLOBAL)},
 /* 0x38 */ {LOAD_METHOD_ADAPTIVE, "LOAD_METHOD_ADAPTIVE", Specialized(LOAD_METHOD)},
 /* 0x39 */ {LOAD_METHOD_CLASS, "LOAD_METHOD_CLASS", Specialized(LOAD_METHOD)},
 /* 0x3a */ {LOAD_METHOD_MODULE, "LOAD_METHOD_MODULE", Specialized(LOAD_METHOD)},
 /* 0x3b */ {LOAD_METHOD_NO_DICT, "LOAD_METHOD_NO_DICT", Specialized(LOAD_METHOD)},
 /* 0x3c */ {STORE_SUBSCR, "STORE_SUBSCR", Generic},
 /* 0x3d */ {DELETE_SUBSCR, "DELETE_SUBSCR", Generic},
 /* 0x3e */ {LOAD_METHOD_WITH_DICT, "LOAD_METHOD_WITH_DICT", Specialized(LOAD_METHOD)},
 /* 0x3f */ {LOAD_METHOD_WITH_VALUES, "LOAD_METHOD_WITH_VALUES", Specialized(LOAD_METHOD)},
 /* 0x40 */ {PRECALL_ADAPTIVE, "PRECALL_ADAPTIVE", Specialized(PRECALL)},
 /* 0x41 */ {PRECALL_BOUND_METHOD, "PRECALL_BOUND_METHOD", Specialized(PRECALL)},
 /* 0x42 */ {PRECALL_BUILTIN_CLASS, "PRECALL_BUILTIN_CLASS", Specialized(PRECALL)},
 /* 0x43 */ {PRECALL_BUILTIN_FAST_WITH_KEYWORDS, "PRECALL_BUILTIN_FAST_WITH_KEYWORDS", Specialized(PRECALL)},
 /* 0x44 */ {GET_ITER, "GET_ITER", Generic},
 /* 0x45 */ {GET_YIELD_FROM_ITER, "GET_YIELD_FROM_ITER", Generic},
 /* 0x46 */ {PRINT_EXPR, "PRINT_EXPR", Generic},
 /* 0x47 */ {LOAD_BUILD_CLASS, "LOAD_BUILD_CLASS", Generic},
 /* 0x48 */ {PRECALL_METHOD_DESCRIPTOR_FAST_WITH_KEYWORDS, "PRECALL_METHOD_DESCRIPTOR_FAST_WITH_KEYWORDS", Specialized(PRECALL)},
 /* 0x49 */ {PRECALL_NO_KW_BUILTIN_FAST, "PRECALL_NO_KW_BUILTIN_FAST", Specialized(PRECALL)},
 /* 0x4a */ {LOAD_ASSERTION_ERROR, "LOAD_ASSERTION_ERROR", Generic},
 /* 0x4b */ {RETURN_GENERATOR, "RETURN_GENERATOR", Generic},
 /* 0x4c */ {PRECALL_NO_KW_BUILTIN_O, "PRECALL_NO_KW_BUILTIN_O", Specialized(PRECALL)},
 /* 0x4d */ {PRECALL_NO_KW_ISINSTANCE, "PRECALL_NO_KW_ISINSTANCE", Specialized(PRECALL)},
 /* 0x4e */ {PRECALL_NO_KW_LEN, "PRECALL_NO_KW_LEN", Specialized(PRECALL)},
 /* 0x4f */ {PRECALL_NO_KW_LIST_APPEND, "PRECALL_NO_KW_LIST_APPEND", Specialized(PRECALL)},
 /* 0x50 */ {PRECALL_NO_KW_METHOD_DESCRIPTOR_FAST, "PRECALL_NO_KW_METHOD_DESCRIPTOR_FAST", Specialized(PRECALL)},
 /* 0x51 */ {PRECALL_NO_KW_METHOD_DESCRIPTOR_NOARGS, "PRECALL_NO_KW_METHOD_DESCRIPTOR_NOARGS", Specialized(PRECALL)},
 /* 0x52 */ {LIST_TO_TUPLE, "LIST_TO_TUPLE", Generic},
 /* 0x53 */ {RETURN_VALUE, "RETURN_VALUE", Generic},
 /* 0x54 */ {IMPORT_STAR, "IMPORT_STAR", Generic},
 /* 0x55 */ {SETUP_ANNOTATIONS, "SETUP_ANNOTATIONS", Generic},
 /* 0x56 */ {YIELD_VALUE, "YIELD_VALUE", Generic},
 /* 0x57 */ {ASYNC_GEN_WRAP, "ASYNC_GEN_WRAP", Generic},
 /* 0x58 */ {PREP_RERAISE_STAR, "PREP_RERAISE_STAR", Generic},
 /* 0x59 */ {POP_EXCEPT, "POP_EXCEPT", Generic},
 /* 0x5a */ {STORE_NAME, "STORE_NAME", Generic},
 /* 0x5b */ {DELETE_NAME, "DELETE_NAME", Generic},
 /* 0x5c */ {UNPACK_SEQUENCE, "UNPACK_SEQUENCE", Generic},
 /* 0x5d */ {FOR_ITER, "FOR_ITER", Generic},
 /* 0x5e */ {UNPACK_EX, "UNPACK_EX", Generic},
 /* 0x5f */ {STORE_ATTR, "STORE_ATTR", Generic},
 /* 0x60 */ {DELETE_ATTR, "DELETE_ATTR", Generic},
 /* 0x61 */ {STORE_GLOBAL, "STORE_GLOBAL", Generic},
 /* 0x62 */ {DELETE_GLOBAL, "DELETE_GLOBAL", Generic},
 /* 0x63 */ {SWAP, "SWAP", Generic},
 /* 0x64 */ {LOAD_CONST, "LOAD_CONST", Generic},
 /* 0x65 */ {LOAD_NAME, "LOAD_NAME", Generic},
 /* 0x66 */ {BUILD_TUPLE, "BUILD_TUPLE", Generic},
 /* 0x67 */ {BUILD_LIST, "BUILD_LIST", Generic},
 /* 0x68 */ {BUILD_SET, "BUILD_SET", Generic},
 /* 0x69 */ {BUILD_MAP, "BUILD_MAP", Generic},
 /* 0x6a */ {LOAD_ATTR, "LOAD_ATTR", Generic},
 /* 0x6b */ {COMPARE_OP, "COMPARE_OP", Generic},
 /* 0x6c */ {IMPORT_NAME, "IMPORT_NAME", Generic},
 /* 0x6d */ {IMPORT_FROM, "IMPORT_FROM", Generic},
 /* 0x6e */ {JUMP_FORWARD, "JUMP_FORWARD", Generic},
 /* 0x6f */ {JUMP_IF_FALSE_OR_POP, "JUMP_IF_FALSE_OR_POP", Generic},
 /* 0x70 */ {JUMP_IF_TRUE_OR_POP, "JUMP_IF_TRUE_OR_POP", Generic},
 /* 0x71 */ {PRECALL_NO_KW_METHOD_DESCRIPTOR_O, "PRECALL_NO_KW_METHOD_DESCRIPTOR_O", Specialized(PRECALL)},
 /* 0x72 */ {POP_JUMP_FORWARD_IF_FALSE, "POP_JUMP_FORWARD_IF_FALSE", Generic},
 /* 0x73 */ {POP_JUMP_FORWARD_IF_TRUE, "POP_JUMP_FORWARD_IF_TRUE", Generic},
 /* 0x74 */ {LOAD_GLOBAL, "LOAD_GLOBAL", Generic},
 /* 0x75 */ {IS_OP, "IS_OP", Generic},
 /* 0x76 */ {CONTAINS_OP, "CONTAINS_OP", Generic},
 /* 0x77 */ {RERAISE, "RERAISE", Generic},
 /* 0x78 */ {COPY, "COPY", Generic},
 /* 0x79 */ {PRECALL_NO_KW_STR_1, "PRECALL_NO_KW_STR_1", Specialized(PRECALL)},
 /* 0x7a */ {BINARY_OP, "BINARY_OP", Generic},
 /* 0x7b */ {SEND, "SEND", Generic},
 /* 0x7c */ {LOAD_FAST, "LOAD_FAST", Generic},
 /* 0x7d */ {STORE_FAST, "STORE_FAST", Generic},
 /* 0x7e */ {DELETE_FAST, "DELETE_FAST", Generic},
 /* 0x7f */ {PRECALL_NO_KW_TUPLE_1, "PRECALL_NO_KW_TUPLE_1", Specialized(PRECALL)},
 /* 0x80 */ {POP_JUMP_FORWARD_IF_NOT_NONE, "POP_JUMP_FORWARD_IF_NOT_NONE", Generic},
 /* 0x81 */ {POP_JUMP_FORWARD_IF_NONE, "POP_JUMP_FORWARD_IF_NONE", Generic},
 /* 0x82 */ {RAISE_VARARGS, "RAISE_VARARGS", Generic},
 /* 0x83 */ {GET_AWAITABLE, "GET_AWAITABLE", Generic},
 /* 0x84 */ {MAKE_FUNCTION, "MAKE_FUNCTION", Generic},
 /* 0x85 */ {BUILD_SLICE, "BUILD_SLICE", Generic},
 /* 0x86 */ {JUMP_BACKWARD_NO_INTERRUPT, "JUMP_BACKWARD_NO_INTERRUPT", Generic},
 /* 0x87 */ {MAKE_CELL, "MAKE_CELL", Generic},
 /* 0x88 */ {LOAD_CLOSURE, "LOAD_CLOSURE", Generic},
 /* 0x89 */ {LOAD_DEREF, "LOAD_DEREF", Generic},
 /* 0x8a */ {STORE_DEREF, "STORE_DEREF", Generic},
 /* 0x8b */ {DELETE_DEREF, "DELETE_DEREF", Generic},
 /* 0x8c */ {JUMP_BACKWARD, "JUMP_BACKWARD", Generic},
 /* 0x8d */ {PRECALL_NO_KW_TYPE_1, "PRECALL_NO_KW_TYPE_1", Specialized(PRECALL)},
 /* 0x8e */ {CALL_FUNCTION_EX, "CALL_FUNCTION_EX", Generic},
 /* 0x8f */ {PRECALL_PYFUNC, "PRECALL_PYFUNC", Specialized(PRECALL)},
 /* 0x90 */ {EXTENDED_ARG, "EXTENDED_ARG", Structural},
 /* 0x91 */ {LIST_APPEND, "LIST_APPEND", Generic},
 /* 0x92 */ {SET_ADD, "SET_ADD", Generic},
 /* 0x93 */ {MAP_ADD, "MAP_ADD", Generic},
 /* 0x94 */ {LOAD_CLASSDEREF, "LOAD_CLASSDEREF", Generic},
 /* 0x95 */ {COPY_FREE_VARS, "COPY_FREE_VARS", Generic},
 /* 0x96 */ {RESUME_QUICK, "RESUME_QUICK", Specialized(RESUME)},
 /* 0x97 */ {RESUME, "RESUME", Generic},
 /* 0x98 */ {MATCH_CLASS, "MATCH_CLASS", Generic},
 /* 0x99 */ {STORE_ATTR_ADAPTIVE, "STORE_ATTR_ADAPTIVE", Specialized(STORE_ATTR)},
 /* 0x9a */ {STORE_ATTR_INSTANCE_VALUE, "STORE_ATTR_INSTANCE_VALUE", Specialized(STORE_ATTR)},
 /* 0x9b */ {FORMAT_VALUE, "FORMAT_VALUE", Generic},
 /* 0x9c */ {BUILD_CONST_KEY_MAP, "BUILD_CONST_KEY_MAP", Generic},
 /* 0x9d */ {BUILD_STRING, "BUILD_STRING", Generic},
 /* 0x9e */ {STORE_ATTR_SLOT, "STORE_ATTR_SLOT", Specialized(STORE_ATTR)},
 /* 0x9f */ {STORE_ATTR_WITH_HINT, "STORE_ATTR_WITH_HINT", Specialized(STORE_ATTR)},
 /* 0xa0 */ {LOAD_METHOD, "LOAD_METHOD", Generic},
 /* 0xa1 */ {STORE_FAST__LOAD_FAST, "STORE_FAST__LOAD_FAST", Specialized(STORE_FAST)},
 /* 0xa2 */ {LIST_EXTEND, "LIST_EXTEND", Generic},
 /* 0xa3 */ {SET_UPDATE, "SET_UPDATE", Generic},
 /* 0xa4 */ {DICT_MERGE, "DICT_MERGE", Generic},
 /* 0xa5 */ {DICT_UPDATE, "DICT_UPDATE", Generic},
 /* 0xa6 */ {PRECALL, "PRECALL", Generic},
 /* 0xa7 */ {STORE_FAST__STORE_FAST, "STORE_FAST__STORE_FAST", Specialized(STORE_FAST)},
 /* 0xa8 */ {STORE_SUBSCR_ADAPTIVE, "STORE_SUBSCR_ADAPTIVE", Specialized(STORE_SUBSCR)},
 /* 0xa9 */ {STORE_SUBSCR_DICT, "STORE_SUBSCR_DICT", Specialized(STORE_SUBSCR)},
 /* 0xaa */ {STORE_SUBSCR_LIST_INT, "STORE_SUBSCR_LIST_INT", Specialized(STORE_SUBSCR)},
 /* 0xab */ {CALL, "CALL", Generic},
 /* 0xac */ {KW_NAMES, "KW_NAMES", Generic},
 /* 0xad */ {POP_JUMP_BACKWARD_IF_NOT_NONE, "POP_JUMP_BACKWARD_IF_NOT_NONE", Generic},
 /* 0xae */ {POP_JUMP_BACKWARD_IF_NONE, "POP_JUMP_BACKWARD_IF_NONE", Generic},
 /* 0xaf */ {POP_JUMP_BACKWARD_IF_FALSE, "POP_JUMP_BACKWARD_IF_FALSE", Generic},
 /* 0xb0 */ {POP_JUMP_BACKWARD_IF_TRUE, "POP_JUMP_BACKWARD_IF_TRUE", Generic},
 /* 0xb1 */ {UNPACK_SEQUENCE_ADAPTIVE, "UNPACK_SEQUENCE_ADAPTIVE", Specialized(UNPACK_SEQUENCE)},
 /* 0xb2 */ {UNPACK_SEQUENCE_LIST, "UNPACK_SEQUENCE_LIST", Specialized(UNPACK_SEQUENCE)},
 /* 0xb3 */ {UNPACK_SEQUENCE_TUPLE, "UNPACK_SEQUENCE_TUPLE", Specialized(UNPACK_SEQUENCE)},
 /* 0xb4 */ {UNPACK_SEQUENCE_TWO_TUPLE, "UNPACK_SEQUENCE_TWO_TUPLE", Specialized(UNPACK_SEQUENCE)},
 /* 0xb5 */ {UNASSIGNED_B5, "<181>", Unassigned},
 /* 0xb6 */ {UNASSIGNED_B6, "<182>", Unassigned},
 /* 0xb7 */ {UNASSIGNED_B7, "<183>", Unassigned},
 /* 0xb8 */ {UNASSIGNED_B8, "<184>", Unassigned},
 /* 0xb9 */ {UNASSIGNED_B9, "<185>", Unassigned},
 /* 0xba */ {UNASSIGNED_BA, "<186>", Unassigned},
 /* 0xbb */ {UNASSIGNED_BB, "<187>", Unassigned},
 /* 0xbc */ {UNASSIGNED_BC, "<188>", Unassigned},
 /* 0xbd */ {UNASSIGNED_BD, "<189>", Unassigned},
 /* 0xbe */ {UNASSIGNED_BE, "<190>", Unassigned},
 /* 0xbf */ {UNASSIGNED_BF, "<191>", Unassigned},
 /* 0xc0 */ {UNASSIGNED_C0, "<192>", Unassigned},
 /* 0xc1 */ {UNASSIGNED_C1, "<193>", Unassigned},
 /* 0xc2 */ {UNASSIGNED_C2, "<194>", Unassigned},
 /* 0xc3 */ {UNASSIGNED_C3, "<195>", Unassigned},
 /* 0xc4 */ {UNASSIGNED_C4, "<196>", Unassigned},
 /* 0xc5 */ {UNASSIGNED_C5, "<197>", Unassigned},
 /* 0xc6 */ {UNASSIGNED_C6, "<198>", Unassigned},
 /* 0xc7 */ {UNASSIGNED_C7, "<199>", Unassigned},
 /* 0xc8 */ {UNASSIGNED_C8, "<200>", Unassigned},
 /* 0xc9 */ {UNASSIGNED_C9, "<201>", Unassigned},
 /* 0xca */ {UNASSIGNED_CA, "<202>", Unassigned},
 /* 0xcb */ {UNASSIGNED_CB, "<203>", Unassigned},
 /* 0xcc */ {UNASSIGNED_CC, "<204>", Unassigned},
 /* 0xcd */ {UNASSIGNED_CD, "<205>", Unassigned},
 /* 0xce */ {UNASSIGNED_CE, "<206>", Unassigned},
 /* 0xcf */ {UNASSIGNED_CF, "<207>", Unassigned},
 /* 0xd0 */ {UNASSIGNED_D0, "<208>", Unassigned},
 /* 0xd1 */ {UNASSIGNED_D1, "<209>", Unassigned},
 /* 0xd2 */ {UNASSIGNED_D2, "<210>", Unassigned},
 /* 0xd3 */ {UNASSIGNED_D3, "<211>", Unassigned},
 /* 0xd4 */ {UNASSIGNED_D4, "<212>", Unassigned},
 /* 0xd5 */ {UNASSIGNED_D5, "<213>", Unassigned},
 /* 0xd6 */ {UNASSIGNED_D6, "<214>", Unassigned},
 /* 0xd7 */ {UNASSIGNED_D7, "<215>", Unassigned},
 /* 0xd8 */ {UNASSIGNED_D8, "<216>", Unassigned},
 /* 0xd9 */ {UNASSIGNED_D9, "<217>", Unassigned},
 /* 0xda */ {UNASSIGNED_DA, "<218>", Unassigned},
 /* 0xdb */ {UNASSIGNED_DB, "<219>", Unassigned},
 /* 0xdc */ {UNASSIGNED_DC, "<220>", Unassigned},
 /* 0xdd */ {UNASSIGNED_DD, "<221>", Unassigned},
 /* 0xde */ {UNASSIGNED_DE, "<222>", Unassigned},
 /* 0xdf */ {UNASSIGNED_DF, "<223>", Unassigned},
 /* 0xe0 */ {UNASSIGNED_E0, "<224>", Unassigned},
 /* 0xe1 */ {UNASSIGNED_E1, "<225>", Unassigned},
 /* 0xe2 */ {UNASSIGNED_E2, "<226>", Unassigned},
 /* 0xe3 */ {UNASSIGNED_E3, "<227>", Unassigned},
 /* 0xe4 */ {UNASSIGNED_E4, "<228>", Unassigned},
 /* 0xe5 */ {UNASSIGNED_E5, "<229>", Unassigned},
 /* 0xe6 */ {UNASSIGNED_E6, "<230>", Unassigned},
 /* 0xe7 */ {UNASSIGNED_E7, "<231>", Unassigned},
 /* 0xe8 */ {UNASSIGNED_E8, "<232>", Unassigned},
 /* 0xe9 */ {UNASSIGNED_E9, "<233>", Unassigned},
 /* 0xea */ {UNASSIGNED_EA, "<234>", Unassigned},
 /* 0xeb */ {UNASSIGNED_EB, "<235>", Unassigned},
 /* 0xec */ {UNASSIGNED_EC, "<236>", Unassigned},
 /* 0xed */ {UNASSIGNED_ED, "<237>", Unassigned},
 /* 0xee */ {UNASSIGNED_EE, "<238>", Unassigned},
 /* 0xef */ {UNASSIGNED_EF, "<239>", Unassigned},
 /* 0xf0 */ {UNASSIGNED_F0, "<240>", Unassigned},
 /* 0xf1 */ {UNASSIGNED_F1, "<241>", Unassigned},
 /* 0xf2 */ {UNASSIGNED_F2, "<242>", Unassigned},
 /* 0xf3 */ {UNASSIGNED_F3, "<243>", Unassigned},
 /* 0xf4 */ {UNASSIGNED_F4, "<244>", Unassigned},
 /* 0xf5 */ {UNASSIGNED_F5, "<245>", Unassigned},
 /* 0xf6 */ {UNASSIGNED_F6, "<246>", Unassigned},
 /* 0xf7 */ {UNASSIGNED_F7, "<247>", Unassigned},
 /* 0xf8 */ {UNASSIGNED_F8, "<248>", Unassigned},
 /* 0xf9 */ {UNASSIGNED_F9, "<249>", Unassigned},
 /* 0xfa */ {UNASSIGNED_FA, "<250>", Unassigned},
 /* 0xfb */ {UNASSIGNED_FB, "<251>", Unassigned},
 /* 0xfc */ {UNASSIGNED_FC, "<252>", Unassigned},
 /* 0xfd */ {UNASSIGNED_FD, "<253>", Unassigned},
 /* 0xfe */ {UNASSIGNED_FE, "<254>", Unassigned},
 /* 0xff */ {DO_TRACING, "DO_TRACING", Structural},
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_code_order() {
        for (i, desc) in OPCODES.iter().enumerate() {
            assert_eq!(desc.code as usize, i);
        }
        assert_eq!(Opcode::CACHE as u8, 0);
        assert_eq!(Opcode::LOAD_CONST as u8, 100);
        assert_eq!(Opcode::EXTENDED_ARG as u8, 144);
        assert_eq!(Opcode::DO_TRACING as u8, 255);
    }

    #[test]
    fn test_structural_opcodes_have_no_family() {
        for code in [Opcode::CACHE, Opcode::EXTENDED_ARG, Opcode::DO_TRACING] {
            let desc = OPCODES.get(code as u8);
            assert!(desc.is_structural());
            assert_eq!(desc.family, None);
        }
        let quick = OPCODES.get(Opcode::EXTENDED_ARG_QUICK as u8);
        assert_eq!(quick.family, Some(Opcode::EXTENDED_ARG as u8));
        assert!(OPCODES.is_extended_arg(Opcode::EXTENDED_ARG as u8));
        assert!(OPCODES.is_extended_arg(Opcode::EXTENDED_ARG_QUICK as u8));
        assert!(!OPCODES.is_extended_arg(Opcode::LOAD_CONST as u8));
        assert_eq!(OPCODES.cache(), Opcode::CACHE as u8);
    }

    #[test]
    fn test_unassigned_code_points() {
        let desc = OPCODES.get(Opcode::UNASSIGNED_EE as u8);
        assert!(!desc.is_assigned());
        assert_eq!(desc.mnemonic, "<238>");
        assert_eq!(desc.cache_slot_count, 0);
        assert_eq!(OPCODES.iter().filter(|d| !d.is_assigned()).count(), 74);
    }

    #[test]
    fn test_cache_geometry() {
        assert_eq!(OPCODES.get(Opcode::LOAD_METHOD as u8).cache_slot_count, 10);
        assert_eq!(OPCODES.get(Opcode::LOAD_GLOBAL_BUILTIN as u8).cache_slot_count, 5);
        assert_eq!(OPCODES.get(Opcode::COMPARE_OP_INT_JUMP as u8).cache_slot_count, 2);
        assert_eq!(OPCODES.get(Opcode::PRECALL_PYFUNC as u8).cache_slot_count, 1);
        assert_eq!(OPCODES.get(Opcode::LOAD_FAST__LOAD_FAST as u8).cache_slot_count, 0);
        assert_eq!(OPCODES.get(Opcode::RETURN_VALUE as u8).cache_slot_count, 0);
    }

    #[test]
    fn test_specialized_operand_follows_threshold() {
        // the raw code is below HAVE_ARGUMENT even though its family is not
        let slot = OPCODES.get(Opcode::LOAD_ATTR_SLOT as u8);
        assert!(!slot.takes_operand);
        assert!(OPCODES.canonical(slot.code).takes_operand);
    }
}
