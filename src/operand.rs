//! Normalized operands.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::register::Register;

/// Where an operand shows up relative to the instruction's syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Written in the instruction syntax.
    Explicit,
    /// Not part of the syntax at all (e.g. the stack pointer of `push`).
    Hidden,
    /// Part of the syntax but fixed by the mnemonic.
    Implicit,
    #[default]
    Invalid,
}

bitflags! {
    /// Read/write access to an operand. Both bits may be set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct OperandAccess: u8 {
        const READ  = 1 << 0;
        const WRITE = 1 << 1;
    }
}

/// A memory reference.
///
/// An instruction-pointer base never survives normalization: `base` is `None`
/// and `displacement` holds the absolute address instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MemoryOperand {
    /// Access width in bytes.
    pub size: u16,
    pub segment: Register,
    pub base: Register,
    pub index: Register,
    pub scale: u8,
    pub displacement: i64,
}

impl MemoryOperand {
    /// True when the operand names a fixed address (no base, no index).
    pub fn is_absolute(&self) -> bool {
        self.base.is_none() && self.index.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperandKind {
    #[default]
    None,
    Register {
        reg: Register,
    },
    /// Relative encodings are already resolved to their absolute target.
    Immediate {
        value: i64,
    },
    Memory(MemoryOperand),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Operand {
    #[serde(flatten)]
    pub kind: OperandKind,
    pub visibility: Visibility,
    pub access: OperandAccess,
}

impl Operand {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn register(reg: Register) -> Self {
        Self::from_kind(OperandKind::Register { reg })
    }

    pub fn immediate(value: i64) -> Self {
        Self::from_kind(OperandKind::Immediate { value })
    }

    pub fn memory(mem: MemoryOperand) -> Self {
        Self::from_kind(OperandKind::Memory(mem))
    }

    fn from_kind(kind: OperandKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind == OperandKind::None
    }

    pub fn reads(&self) -> bool {
        self.access.contains(OperandAccess::READ)
    }

    pub fn writes(&self) -> bool {
        self.access.contains(OperandAccess::WRITE)
    }

    pub fn as_register(&self) -> Option<Register> {
        match self.kind {
            OperandKind::Register { reg } => Some(reg),
            _ => None,
        }
    }

    pub fn as_immediate(&self) -> Option<i64> {
        match self.kind {
            OperandKind::Immediate { value } => Some(value),
            _ => None,
        }
    }

    pub fn as_memory(&self) -> Option<&MemoryOperand> {
        match &self.kind {
            OperandKind::Memory(mem) => Some(mem),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invalid_none() {
        let op = Operand::none();
        assert!(op.is_none());
        assert_eq!(op.visibility, Visibility::Invalid);
        assert!(op.access.is_empty());
    }

    #[test]
    fn test_accessors() {
        let reg = Operand::register(Register::Rcx);
        assert_eq!(reg.as_register(), Some(Register::Rcx));
        assert_eq!(reg.as_immediate(), None);

        let imm = Operand::immediate(-7);
        assert_eq!(imm.as_immediate(), Some(-7));
        assert!(imm.as_memory().is_none());
    }

    #[test]
    fn test_read_modify_write_access() {
        let mut op = Operand::memory(MemoryOperand {
            size: 4,
            base: Register::Rax,
            scale: 1,
            ..MemoryOperand::default()
        });
        op.access = OperandAccess::READ | OperandAccess::WRITE;
        assert!(op.reads());
        assert!(op.writes());
        assert!(!op.as_memory().map(MemoryOperand::is_absolute).unwrap_or(true));
    }
}
