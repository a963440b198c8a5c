use std::result;

pub mod bytecode;
pub mod error;
pub mod opcode;

pub type Result<T> = result::Result<T, error::DecodeError>;

#[cfg(feature = "python")]
pub(crate) mod py;

#[cfg(feature = "python")]
#[pyo3::pymodule]
mod _internal {

    #[pymodule_export]
    use crate::py::decode;

    #[pymodule_export]
    use crate::py::opname;

    #[pymodule_export]
    use crate::py::PyInstruction;

    #[pymodule_export]
    use crate::py::PyDecodeError;
}
