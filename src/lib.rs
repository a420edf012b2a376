//! Instruction model, errors, and dispatch for the x86 normalizer.
//!
//! This library turns the raw output of an x86/x86-64 byte decoder into a
//! small, stable instruction model: relative branch targets and RIP-relative
//! memory references become absolute addresses, the decoder's per-flag action
//! table becomes a pair of EFLAGS masks, and every operand kind is folded into
//! one [`Operand`] type carrying visibility and access metadata.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! use x86_normalize::{MachineMode, Session};
//!
//! let session = Session::with_mode(MachineMode::Long64).unwrap();
//!
//! // call rel32 with a displacement of 5
//! let insn = session.decode(&[0xe8, 0x05, 0x00, 0x00, 0x00], 0x1000).unwrap();
//! assert_eq!(insn.size, 5);
//! assert_eq!(insn.operands[0].as_immediate(), Some(0x100a));
//! ```

pub mod decoder;
pub mod flags;
pub mod format;
pub mod mnemonic;
pub mod normalize;
pub mod operand;
pub mod raw;
pub mod register;
pub mod session;
pub mod sweep;
mod session_tests;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::decoder::CapstoneDecoder;
pub use crate::flags::{CpuFlag, EFlags, FlagAction};
pub use crate::mnemonic::Mnemonic;
pub use crate::operand::{MemoryOperand, Operand, OperandAccess, OperandKind, Visibility};
pub use crate::register::Register;
pub use crate::session::{MachineMode, Session};

/// Represents an address in memory
pub type Address = u64;

/// Maximum instruction size in bytes
pub const MAX_INSTRUCTION_SIZE: usize = 15;

/// Maximum number of operands kept per instruction
pub const MAX_OPERANDS: usize = 10;

/// One decoded, normalized instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// Address the instruction was decoded at
    pub address: Address,
    /// Size of the instruction in bytes
    pub size: u8,
    pub mnemonic: Mnemonic,
    /// Operands in decoder order, at most [`MAX_OPERANDS`]
    pub operands: Vec<Operand>,
    /// Flags the instruction tests
    pub flags_read: EFlags,
    /// Flags the instruction sets, clears, modifies or leaves undefined
    pub flags_write: EFlags,
}

impl Instruction {
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    pub fn operand(&self, index: usize) -> Option<&Operand> {
        self.operands.get(index)
    }

    /// Operands that appear in the instruction syntax.
    pub fn explicit_operands(&self) -> impl Iterator<Item = &Operand> {
        self.operands
            .iter()
            .filter(|op| op.visibility == Visibility::Explicit)
    }

    /// Address of the next instruction in sequence.
    pub fn end_address(&self) -> Address {
        self.address.wrapping_add(self.size as Address)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}: {} ({} bytes)", self.address, self.mnemonic, self.size)
    }
}

/// The byte decoder rejected the input: malformed, truncated, or not valid
/// in the session's machine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("failed to decode instruction at 0x{address:x}")]
pub struct DecodeFailure {
    pub address: Address,
}

/// Error type for everything outside a single decode
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The decoding engine could not be set up
    #[error("Capstone error: {0}")]
    Backend(#[from] capstone::Error),

    #[error(transparent)]
    Decode(#[from] DecodeFailure),

    /// Serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nop_at(address: Address) -> Instruction {
        Instruction {
            address,
            size: 1,
            mnemonic: Mnemonic::Nop,
            operands: Vec::new(),
            flags_read: EFlags::empty(),
            flags_write: EFlags::empty(),
        }
    }

    #[test]
    fn test_end_address() {
        assert_eq!(nop_at(0x1000).end_address(), 0x1001);
        assert_eq!(nop_at(u64::MAX).end_address(), 0);
    }

    #[test]
    fn test_explicit_operands_filter() {
        let mut insn = nop_at(0);
        let mut explicit = Operand::register(Register::Rax);
        explicit.visibility = Visibility::Explicit;
        let mut hidden = Operand::register(Register::Rsp);
        hidden.visibility = Visibility::Hidden;
        insn.operands = vec![explicit, hidden];

        let explicit_regs: Vec<_> = insn
            .explicit_operands()
            .filter_map(Operand::as_register)
            .collect();
        assert_eq!(explicit_regs, vec![Register::Rax]);
        assert_eq!(insn.operand(1).and_then(Operand::as_register), Some(Register::Rsp));
        assert!(insn.operand(2).is_none());
        assert_eq!(insn.operands().len(), 2);
    }

    #[test]
    fn test_decode_failure_message() {
        let err = DecodeFailure { address: 0x40 };
        assert_eq!(err.to_string(), "failed to decode instruction at 0x40");
    }
}
