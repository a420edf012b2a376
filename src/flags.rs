//! CPU flag actions and the read/write EFLAGS masks derived from them.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Number of entries in a decoder's per-flag action table.
pub const CPU_FLAG_COUNT: usize = 21;

bitflags! {
    /// Mask over the EFLAGS/RFLAGS bits an instruction reads or writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EFlags: u32 {
        const CF   = 1 << 0;
        const PF   = 1 << 2;
        const AF   = 1 << 4;
        const ZF   = 1 << 6;
        const SF   = 1 << 7;
        const TF   = 1 << 8;
        const IF   = 1 << 9;
        const DF   = 1 << 10;
        const OF   = 1 << 11;
        const IOPL = 1 << 12;
        const NT   = 1 << 14;
        const RF   = 1 << 16;
        const VM   = 1 << 17;
        const AC   = 1 << 18;
        const VIF  = 1 << 19;
        const VIP  = 1 << 20;
        const ID   = 1 << 21;
        const C0   = 1 << 22;
        const C1   = 1 << 23;
        const C2   = 1 << 24;
        const C3   = 1 << 25;
    }
}

/// One slot of the decoder's flag action table, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuFlag {
    Carry,
    Parity,
    AuxiliaryCarry,
    Zero,
    Sign,
    Trap,
    Interrupt,
    Direction,
    Overflow,
    IoPrivilegeLevel,
    NestedTask,
    Resume,
    VirtualMode,
    AlignmentCheck,
    VirtualInterrupt,
    VirtualInterruptPending,
    Identification,
    C0,
    C1,
    C2,
    C3,
}

// Indexed by table position, not by bit number.
static FLAG_BITS: [EFlags; CPU_FLAG_COUNT] = [
    EFlags::CF,
    EFlags::PF,
    EFlags::AF,
    EFlags::ZF,
    EFlags::SF,
    EFlags::TF,
    EFlags::IF,
    EFlags::DF,
    EFlags::OF,
    EFlags::IOPL,
    EFlags::NT,
    EFlags::RF,
    EFlags::VM,
    EFlags::AC,
    EFlags::VIF,
    EFlags::VIP,
    EFlags::ID,
    EFlags::C0,
    EFlags::C1,
    EFlags::C2,
    EFlags::C3,
];

impl CpuFlag {
    /// All flags in action-table order.
    pub const ALL: [CpuFlag; CPU_FLAG_COUNT] = [
        CpuFlag::Carry,
        CpuFlag::Parity,
        CpuFlag::AuxiliaryCarry,
        CpuFlag::Zero,
        CpuFlag::Sign,
        CpuFlag::Trap,
        CpuFlag::Interrupt,
        CpuFlag::Direction,
        CpuFlag::Overflow,
        CpuFlag::IoPrivilegeLevel,
        CpuFlag::NestedTask,
        CpuFlag::Resume,
        CpuFlag::VirtualMode,
        CpuFlag::AlignmentCheck,
        CpuFlag::VirtualInterrupt,
        CpuFlag::VirtualInterruptPending,
        CpuFlag::Identification,
        CpuFlag::C0,
        CpuFlag::C1,
        CpuFlag::C2,
        CpuFlag::C3,
    ];

    /// Position of this flag in the action table.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The single EFLAGS bit this flag occupies.
    pub fn mask(self) -> EFlags {
        FLAG_BITS[self.index()]
    }
}

/// What an instruction does to one flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlagAction {
    #[default]
    None,
    Tested,
    TestedModified,
    Modified,
    Set0,
    Set1,
    Undefined,
}

impl FlagAction {
    pub fn is_read(self) -> bool {
        matches!(self, FlagAction::Tested | FlagAction::TestedModified)
    }

    pub fn is_write(self) -> bool {
        matches!(
            self,
            FlagAction::Set0
                | FlagAction::Set1
                | FlagAction::Undefined
                | FlagAction::TestedModified
                | FlagAction::Modified
        )
    }
}

/// Flags read and written by one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlagMasks {
    pub read: EFlags,
    pub write: EFlags,
}

impl FlagMasks {
    /// Collapse a per-flag action table into read/write masks.
    ///
    /// `TestedModified` lands in both masks.
    pub fn from_actions(actions: &[FlagAction; CPU_FLAG_COUNT]) -> Self {
        let mut masks = FlagMasks::default();
        for (flag, action) in CpuFlag::ALL.iter().zip(actions.iter()) {
            if *action == FlagAction::None {
                continue;
            }
            if action.is_write() {
                masks.write |= flag.mask();
            }
            if action.is_read() {
                masks.read |= flag.mask();
            }
        }
        masks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table_with(flag: CpuFlag, action: FlagAction) -> [FlagAction; CPU_FLAG_COUNT] {
        let mut table = [FlagAction::None; CPU_FLAG_COUNT];
        table[flag.index()] = action;
        table
    }

    #[test]
    fn test_bit_layout_follows_eflags_register() {
        assert_eq!(CpuFlag::Carry.mask().bits(), 1 << 0);
        assert_eq!(CpuFlag::Zero.mask().bits(), 1 << 6);
        assert_eq!(CpuFlag::Overflow.mask().bits(), 1 << 11);
        assert_eq!(CpuFlag::NestedTask.mask().bits(), 1 << 14);
        assert_eq!(CpuFlag::Resume.mask().bits(), 1 << 16);
        assert_eq!(CpuFlag::C3.mask().bits(), 1 << 25);
    }

    #[test]
    fn test_every_flag_has_a_distinct_bit() {
        let mut seen = EFlags::empty();
        for flag in CpuFlag::ALL {
            assert_eq!(flag.mask().bits().count_ones(), 1);
            assert!(!seen.intersects(flag.mask()), "{:?} reuses a bit", flag);
            seen |= flag.mask();
        }
        assert_eq!(seen, EFlags::all());
    }

    #[rstest]
    #[case(FlagAction::None, false, false)]
    #[case(FlagAction::Tested, true, false)]
    #[case(FlagAction::TestedModified, true, true)]
    #[case(FlagAction::Modified, false, true)]
    #[case(FlagAction::Set0, false, true)]
    #[case(FlagAction::Set1, false, true)]
    #[case(FlagAction::Undefined, false, true)]
    fn test_action_classification(
        #[case] action: FlagAction,
        #[case] read: bool,
        #[case] write: bool,
    ) {
        let masks = FlagMasks::from_actions(&table_with(CpuFlag::Sign, action));
        assert_eq!(masks.read.contains(EFlags::SF), read);
        assert_eq!(masks.write.contains(EFlags::SF), write);
        assert!((masks.read | masks.write).difference(EFlags::SF).is_empty());
    }

    #[test]
    fn test_mixed_table() {
        // adc: reads CF, writes the arithmetic flags
        let mut table = [FlagAction::None; CPU_FLAG_COUNT];
        table[CpuFlag::Carry.index()] = FlagAction::TestedModified;
        for flag in [
            CpuFlag::Parity,
            CpuFlag::AuxiliaryCarry,
            CpuFlag::Zero,
            CpuFlag::Sign,
            CpuFlag::Overflow,
        ] {
            table[flag.index()] = FlagAction::Modified;
        }

        let masks = FlagMasks::from_actions(&table);
        assert_eq!(masks.read, EFlags::CF);
        assert_eq!(
            masks.write,
            EFlags::CF | EFlags::PF | EFlags::AF | EFlags::ZF | EFlags::SF | EFlags::OF
        );
    }

    #[test]
    fn test_empty_table() {
        let masks = FlagMasks::from_actions(&[FlagAction::None; CPU_FLAG_COUNT]);
        assert!(masks.read.is_empty());
        assert!(masks.write.is_empty());
    }
}
