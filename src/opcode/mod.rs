//! Version scoped CPython opcode tables
//!
//! Every supported interpreter version owns one static [`OpcodeTable`] with
//! exactly 256 rows, so a lookup for any byte value is infallible. Code
//! points the interpreter never assigned are present as
//! [`OpcodeKind::Unassigned`] rows instead of being left out.
//!
//! Tables are selected through [`PythonVersion`]; there is no process-wide
//! "current version".

use std::fmt::Display;
use std::str::FromStr;

use serde::Serialize;

use crate::{decode_err, Result};

/// Builds a version module's `Opcode` enum and its `OPCODES` table from a
/// list of `{NAME, "mnemonic", Kind}` rows in code order.
///
/// Specialized rows name their family: `Specialized(LOAD_ATTR)`. Their
/// inline cache geometry is always taken from that family.
macro_rules! opcode_table {
    (
        version: $version:expr,
        have_argument: $have_arg:expr,
        extended_arg: $extended_arg:ident,
        cache: $cache:ident,
        cache_entries: $cache_fn:ident,
        $({$code:ident, $name:literal, $kind:ident $(($family:ident))?},)*
    ) => {
        #[repr(u8)]
        #[allow(non_camel_case_types)]
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Opcode {
            $($code,)*
        }

        pub static OPCODES: $crate::opcode::OpcodeTable = $crate::opcode::OpcodeTable::new(
            $version,
            $have_arg,
            Opcode::$extended_arg as u8,
            Opcode::$cache as u8,
            [
                $($crate::opcode::OpcodeDescriptor {
                    code: Opcode::$code as u8,
                    mnemonic: $name,
                    takes_operand: (Opcode::$code as u8) >= $have_arg,
                    family: opcode_table!(@family $($family)?),
                    cache_slot_count: $cache_fn(opcode_table!(@canonical $code $($family)?)),
                    kind: $crate::opcode::OpcodeKind::$kind,
                },)*
            ],
        );
    };
    (@family) => { None };
    (@family $family:ident) => { Some(Opcode::$family as u8) };
    (@canonical $code:ident) => { Opcode::$code };
    (@canonical $code:ident $family:ident) => { Opcode::$family };
}

pub mod v311;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PythonVersion {
    #[serde(rename = "3.11")]
    V3_11,
}

impl PythonVersion {
    pub const ALL: &'static [PythonVersion] = &[PythonVersion::V3_11];

    pub const fn major_minor(&self) -> (u8, u8) {
        match self {
            PythonVersion::V3_11 => (3, 11),
        }
    }

    #[inline]
    pub fn opcode_table(&self) -> &'static OpcodeTable {
        OpcodeTable::for_version(*self)
    }
}

impl Default for PythonVersion {
    fn default() -> Self {
        PythonVersion::V3_11
    }
}

impl Display for PythonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (major, minor) = self.major_minor();
        write!(f, "{major}.{minor}")
    }
}

impl FromStr for PythonVersion {
    type Err = crate::error::DecodeError;

    /// Accepts `3.11`, `3.11.4` and the compact `311` spelling.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let mut parts = s.split('.');
        let key = match (parts.next(), parts.next()) {
            (Some(major), Some(minor)) => (major.parse::<u8>().ok(), minor.parse::<u8>().ok()),
            (Some(compact), None) if compact.len() >= 2 && compact.is_ascii() => {
                let (major, minor) = compact.split_at(1);
                (major.parse::<u8>().ok(), minor.parse::<u8>().ok())
            }
            _ => (None, None),
        };

        match key {
            (Some(major), Some(minor)) => PythonVersion::ALL
                .iter()
                .find(|v| v.major_minor() == (major, minor))
                .copied()
                .map_or_else(|| decode_err!(UnsupportedVersion, s.to_string()), Ok),
            _ => decode_err!(UnsupportedVersion, s.to_string()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum OpcodeKind {
    /// Encoding artifacts (`CACHE`, `EXTENDED_ARG`, ...), never semantic
    Structural,
    Generic,
    /// Quickened variant standing in for its family
    Specialized,
    Unassigned,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OpcodeDescriptor {
    pub code: u8,
    pub mnemonic: &'static str,
    /// `code >= HAVE_ARGUMENT`
    pub takes_operand: bool,
    /// Generic opcode this specialized variant stands in for
    pub family: Option<u8>,
    /// Number of 2-byte `CACHE` words following the instruction when the
    /// code object is quickened
    pub cache_slot_count: u8,
    pub kind: OpcodeKind,
}

impl OpcodeDescriptor {
    #[inline(always)]
    pub const fn canonical_code(&self) -> u8 {
        match self.family {
            Some(family) => family,
            None => self.code,
        }
    }

    #[inline]
    pub const fn is_assigned(&self) -> bool {
        !matches!(self.kind, OpcodeKind::Unassigned)
    }

    #[inline]
    pub const fn is_specialized(&self) -> bool {
        self.family.is_some()
    }

    #[inline]
    pub const fn is_structural(&self) -> bool {
        matches!(self.kind, OpcodeKind::Structural)
    }
}

pub struct OpcodeTable {
    version: PythonVersion,
    have_argument: u8,
    extended_arg: u8,
    cache: u8,
    descriptors: [OpcodeDescriptor; 256],
}

impl OpcodeTable {
    /// Checked at compile time for every static table: rows are in code
    /// order, families are never specialized themselves and share their
    /// cache geometry with every variant.
    pub const fn new(
        version: PythonVersion,
        have_argument: u8,
        extended_arg: u8,
        cache: u8,
        descriptors: [OpcodeDescriptor; 256],
    ) -> Self {
        assert!(matches!(descriptors[extended_arg as usize].kind, OpcodeKind::Structural));
        assert!(matches!(descriptors[cache as usize].kind, OpcodeKind::Structural));

        let mut i = 0;
        while i < descriptors.len() {
            let desc = &descriptors[i];
            assert!(desc.code as usize == i, "opcode rows must be in code order");
            assert!(
                desc.takes_operand == (desc.code >= have_argument),
                "takes_operand must follow HAVE_ARGUMENT"
            );
            if let Some(family) = desc.family {
                let family = &descriptors[family as usize];
                assert!(family.family.is_none(), "families cannot be specialized");
                assert!(
                    family.cache_slot_count == desc.cache_slot_count,
                    "specializations share their family's cache geometry"
                );
                assert!(matches!(desc.kind, OpcodeKind::Specialized));
            } else {
                assert!(!matches!(desc.kind, OpcodeKind::Specialized));
            }
            i += 1;
        }

        Self {
            version,
            have_argument,
            extended_arg,
            cache,
            descriptors,
        }
    }

    pub fn for_version(version: PythonVersion) -> &'static OpcodeTable {
        match version {
            PythonVersion::V3_11 => &v311::OPCODES,
        }
    }

    #[inline(always)]
    pub fn version(&self) -> PythonVersion {
        self.version
    }

    #[inline(always)]
    pub fn have_argument(&self) -> u8 {
        self.have_argument
    }

    /// Whether `code` is an operand prefix, including its quickened forms.
    #[inline(always)]
    pub fn is_extended_arg(&self, code: u8) -> bool {
        self.get(code).canonical_code() == self.extended_arg
    }

    #[inline(always)]
    pub fn extended_arg(&self) -> u8 {
        self.extended_arg
    }

    #[inline(always)]
    pub fn cache(&self) -> u8 {
        self.cache
    }

    #[inline(always)]
    pub fn get(&self, code: u8) -> &OpcodeDescriptor {
        &self.descriptors[code as usize]
    }

    /// Descriptor downstream analysis should consume for `code`.
    #[inline(always)]
    pub fn canonical(&self, code: u8) -> &OpcodeDescriptor {
        self.get(self.get(code).canonical_code())
    }

    #[inline]
    pub fn family_of(&self, desc: &OpcodeDescriptor) -> Option<&OpcodeDescriptor> {
        desc.family.map(|family| self.get(family))
    }

    #[inline]
    pub fn mnemonic(&self, code: u8) -> &'static str {
        self.get(code).mnemonic
    }

    #[inline]
    pub fn takes_operand(&self, code: u8) -> bool {
        self.get(code).takes_operand
    }

    pub fn by_name(&self, mnemonic: &str) -> Option<&OpcodeDescriptor> {
        self.descriptors
            .iter()
            .find(|desc| desc.is_assigned() && desc.mnemonic == mnemonic)
    }

    pub fn specializations(&self, family: u8) -> impl Iterator<Item = &OpcodeDescriptor> + '_ {
        self.descriptors
            .iter()
            .filter(move |desc| desc.family == Some(family))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OpcodeDescriptor> {
        self.descriptors.iter()
    }
}

impl std::fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpcodeTable")
            .field("version", &self.version)
            .field("have_argument", &self.have_argument)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a OpcodeTable {
    type Item = &'a OpcodeDescriptor;
    type IntoIter = std::slice::Iter<'a, OpcodeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
