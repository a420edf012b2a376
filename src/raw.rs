//! The raw decoded-instruction record and the byte decoder that produces it.
//!
//! This is the boundary to the external decoding engine. A [`ByteDecoder`]
//! turns bytes into a [`RawInstruction`] whose operands are still in the
//! decoder's own terms: register ids, displacement-relative immediates and
//! a per-flag action table. [`crate::normalize`] takes it from there.

use bitflags::bitflags;

use crate::flags::{FlagAction, CPU_FLAG_COUNT};
use crate::session::MachineMode;
use crate::Mnemonic;

/// A register id in the decoder's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawRegister(pub u16);

impl RawRegister {
    pub const INVALID: RawRegister = RawRegister(0);

    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

bitflags! {
    /// How an operand is accessed, as the decoder reports it.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RawActions: u8 {
        const READ      = 1 << 0;
        const WRITE     = 1 << 1;
        const CONDREAD  = 1 << 2;
        const CONDWRITE = 1 << 3;

        const MASK_READ  = Self::READ.bits() | Self::CONDREAD.bits();
        const MASK_WRITE = Self::WRITE.bits() | Self::CONDWRITE.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RawVisibility {
    #[default]
    Invalid,
    Hidden,
    Implicit,
    Explicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawImmediate {
    pub value: i64,
    /// Value is a displacement from the end of the instruction.
    pub is_relative: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMemory {
    pub segment: RawRegister,
    pub base: RawRegister,
    pub index: RawRegister,
    pub scale: u8,
    pub displacement: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawOperandKind {
    Unused,
    Register(RawRegister),
    Memory(RawMemory),
    Immediate(RawImmediate),
    /// A kind the decoder reported but the binding could not classify.
    Unknown(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawOperand {
    pub kind: RawOperandKind,
    /// Operand width in bytes.
    pub size: u16,
    pub visibility: RawVisibility,
    pub actions: RawActions,
}

impl RawOperand {
    pub fn unused() -> Self {
        Self {
            kind: RawOperandKind::Unused,
            size: 0,
            visibility: RawVisibility::Invalid,
            actions: RawActions::empty(),
        }
    }
}

/// One instruction exactly as the byte decoder reported it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInstruction {
    /// Bytes consumed.
    pub length: u8,
    pub mnemonic: Mnemonic,
    /// Operands in encoding order.
    pub operands: Vec<RawOperand>,
    /// One action per [`crate::flags::CpuFlag`], in `CpuFlag::ALL` order.
    pub flag_actions: [FlagAction; CPU_FLAG_COUNT],
}

/// Byte-level instruction decoder.
///
/// Implementations are configured once and never change mode afterwards.
pub trait ByteDecoder {
    /// The machine mode this decoder was built for.
    fn mode(&self) -> MachineMode;

    /// Decode the first instruction in `bytes`.
    ///
    /// # Returns
    /// `None` if the bytes are malformed, truncated or not valid in this mode
    fn decode_raw(&self, bytes: &[u8]) -> Option<RawInstruction>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_masks() {
        assert!(RawActions::CONDREAD.intersects(RawActions::MASK_READ));
        assert!(RawActions::CONDWRITE.intersects(RawActions::MASK_WRITE));
        assert!(!RawActions::WRITE.intersects(RawActions::MASK_READ));
        assert!(!RawActions::READ.intersects(RawActions::MASK_WRITE));
    }

    #[test]
    fn test_unused_operand() {
        let op = RawOperand::unused();
        assert_eq!(op.kind, RawOperandKind::Unused);
        assert_eq!(op.visibility, RawVisibility::Invalid);
        assert!(op.actions.is_empty());
    }
}
