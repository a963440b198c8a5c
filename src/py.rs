use pyo3::{create_exception, exceptions::PyRuntimeError, pyclass, pyfunction, pymethods, PyErr, PyResult};

use crate::bytecode::{prettify, BytecodeContainer, Instruction};
use crate::error::DecodeError;
use crate::opcode::PythonVersion;

create_exception!(pyrs_bytecode._internal, PyDecodeError, PyRuntimeError);

impl From<DecodeError> for PyErr {
    fn from(err: DecodeError) -> PyErr {
        PyDecodeError::new_err(err.to_string())
    }
}

#[pyclass(name = "Instruction", module = "pyrs_bytecode._internal", frozen)]
pub struct PyInstruction {
    inner: Instruction,
    version: PythonVersion,
}

#[pymethods]
impl PyInstruction {
    #[getter]
    pub fn offset(&self) -> usize {
        self.inner.offset
    }

    #[getter]
    pub fn raw_opcode(&self) -> u8 {
        self.inner.raw_opcode
    }

    #[getter]
    pub fn canonical_opcode(&self) -> u8 {
        self.inner.canonical_opcode
    }

    #[getter]
    pub fn operand(&self) -> u32 {
        self.inner.operand
    }

    #[getter]
    pub fn length(&self) -> usize {
        self.inner.length
    }

    #[getter]
    pub fn prefix_count(&self) -> u8 {
        self.inner.prefix_count
    }

    #[getter]
    pub fn opname(&self) -> &'static str {
        self.inner.name(self.version.opcode_table())
    }

    #[getter]
    pub fn raw_opname(&self) -> &'static str {
        self.version.opcode_table().mnemonic(self.inner.raw_opcode)
    }

    pub fn __repr__(&self) -> String {
        let table = self.version.opcode_table();
        format!(
            "<Instruction {}>",
            self.inner.to_string(table, prettify::Variant::WithRaw).trim()
        )
    }
}

#[pyfunction]
#[pyo3(signature = (data, version = "3.11", quickened = false, strict = false))]
pub fn decode(data: &[u8], version: &str, quickened: bool, strict: bool) -> PyResult<Vec<PyInstruction>> {
    let version: PythonVersion = version.parse()?;
    let insns = BytecodeContainer::new(data)
        .version(version)
        .quickened(quickened)
        .strict(strict)
        .decode()?;
    Ok(insns
        .into_iter()
        .map(|inner| PyInstruction { inner, version })
        .collect())
}

#[pyfunction]
#[pyo3(signature = (code, version = "3.11"))]
pub fn opname(code: u8, version: &str) -> PyResult<&'static str> {
    let version: PythonVersion = version.parse()?;
    Ok(version.opcode_table().mnemonic(code))
}
