//! Raw decoded record to [`Instruction`].
//!
//! Normalization never fails. Anything the decoder reports that does not fit
//! one of the known operand kinds becomes an empty operand.

use crate::flags::FlagMasks;
use crate::operand::{MemoryOperand, Operand, OperandAccess, OperandKind, Visibility};
use crate::raw::{
    RawActions, RawImmediate, RawInstruction, RawMemory, RawOperand, RawOperandKind, RawVisibility,
};
use crate::register::Register;
use crate::{Address, Instruction, MAX_OPERANDS};

/// Build the normalized form of `raw`, decoded at `address`.
pub fn normalize(raw: &RawInstruction, address: Address) -> Instruction {
    let masks = FlagMasks::from_actions(&raw.flag_actions);

    let operands = raw
        .operands
        .iter()
        .take(MAX_OPERANDS)
        .map(|op| convert_operand(raw, op, address))
        .collect();

    Instruction {
        address,
        size: raw.length,
        mnemonic: raw.mnemonic,
        operands,
        flags_read: masks.read,
        flags_write: masks.write,
    }
}

/// Offset that turns an end-of-instruction-relative value into an absolute one.
fn next_instruction(raw: &RawInstruction, address: Address) -> i64 {
    (raw.length as i64).wrapping_add(address as i64)
}

fn convert_operand(raw: &RawInstruction, op: &RawOperand, address: Address) -> Operand {
    let kind = match op.kind {
        RawOperandKind::Immediate(imm) => convert_immediate(raw, imm, address),
        RawOperandKind::Register(reg) => OperandKind::Register {
            reg: Register::from_raw(reg),
        },
        RawOperandKind::Memory(mem) => convert_memory(raw, op.size, mem, address),
        RawOperandKind::Unused => OperandKind::None,
        RawOperandKind::Unknown(_) => OperandKind::None,
    };

    Operand {
        kind,
        visibility: convert_visibility(op.visibility),
        access: convert_access(op.actions),
    }
}

fn convert_immediate(raw: &RawInstruction, imm: RawImmediate, address: Address) -> OperandKind {
    let value = if imm.is_relative {
        imm.value.wrapping_add(next_instruction(raw, address))
    } else {
        imm.value
    };
    OperandKind::Immediate { value }
}

fn convert_memory(
    raw: &RawInstruction,
    size: u16,
    mem: RawMemory,
    address: Address,
) -> OperandKind {
    let mut res = MemoryOperand {
        size,
        segment: Register::from_raw(mem.segment),
        base: Register::from_raw(mem.base),
        index: Register::from_raw(mem.index),
        scale: mem.scale,
        displacement: mem.displacement,
    };

    if res.base.is_instruction_pointer() {
        res.displacement = res.displacement.wrapping_add(next_instruction(raw, address));
        res.base = Register::None;
    }

    OperandKind::Memory(res)
}

fn convert_visibility(visibility: RawVisibility) -> Visibility {
    match visibility {
        RawVisibility::Explicit => Visibility::Explicit,
        RawVisibility::Hidden => Visibility::Hidden,
        RawVisibility::Implicit => Visibility::Implicit,
        RawVisibility::Invalid => Visibility::Invalid,
    }
}

fn convert_access(actions: RawActions) -> OperandAccess {
    let mut access = OperandAccess::empty();
    if actions.intersects(RawActions::MASK_READ) {
        access |= OperandAccess::READ;
    }
    if actions.intersects(RawActions::MASK_WRITE) {
        access |= OperandAccess::WRITE;
    }
    access
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{CpuFlag, EFlags, FlagAction, CPU_FLAG_COUNT};
    use crate::raw::RawRegister;
    use crate::Mnemonic;
    use rstest::rstest;

    fn raw_insn(length: u8, operands: Vec<RawOperand>) -> RawInstruction {
        RawInstruction {
            length,
            mnemonic: Mnemonic::Test,
            operands,
            flag_actions: [FlagAction::None; CPU_FLAG_COUNT],
        }
    }

    fn explicit(kind: RawOperandKind, size: u16, actions: RawActions) -> RawOperand {
        RawOperand {
            kind,
            size,
            visibility: RawVisibility::Explicit,
            actions,
        }
    }

    fn relative(value: i64) -> RawOperandKind {
        RawOperandKind::Immediate(RawImmediate {
            value,
            is_relative: true,
        })
    }

    fn rip_memory(base: Register, displacement: i64) -> RawMemory {
        RawMemory {
            segment: Register::Ds.to_raw(),
            base: base.to_raw(),
            index: RawRegister::INVALID,
            scale: 1,
            displacement,
        }
    }

    #[test]
    fn test_relative_call_target() {
        let raw = raw_insn(5, vec![explicit(relative(5), 4, RawActions::READ)]);
        let insn = normalize(&raw, 0x1000);

        assert_eq!(insn.size, 5);
        assert_eq!(insn.address, 0x1000);
        assert_eq!(insn.operands.len(), 1);
        assert_eq!(insn.operands[0].as_immediate(), Some(0x100a));
    }

    #[rstest]
    #[case(-2, 2, 0x40_0000, 0x40_0000)]
    #[case(0, 5, 0, 5)]
    #[case(-0x10, 2, 0x8, -6)]
    fn test_relative_immediate_rule(
        #[case] disp: i64,
        #[case] len: u8,
        #[case] address: Address,
        #[case] expected: i64,
    ) {
        let raw = raw_insn(len, vec![explicit(relative(disp), 1, RawActions::READ)]);
        assert_eq!(normalize(&raw, address).operands[0].as_immediate(), Some(expected));
    }

    #[test]
    fn test_absolute_immediate_unchanged() {
        let kind = RawOperandKind::Immediate(RawImmediate {
            value: -1,
            is_relative: false,
        });
        let raw = raw_insn(5, vec![explicit(kind, 4, RawActions::READ)]);
        assert_eq!(normalize(&raw, 0x1000).operands[0].as_immediate(), Some(-1));
    }

    #[rstest]
    #[case(Register::Rip)]
    #[case(Register::Eip)]
    fn test_instruction_pointer_memory_becomes_absolute(#[case] base: Register) {
        let mem = rip_memory(base, 0x10);
        let raw = raw_insn(7, vec![explicit(RawOperandKind::Memory(mem), 8, RawActions::READ)]);
        let insn = normalize(&raw, 0x2000);

        let out = insn.operands[0].as_memory().copied().unwrap();
        assert_eq!(out.base, Register::None);
        assert_eq!(out.displacement, 0x10 + 7 + 0x2000);
        assert_eq!(out.segment, Register::Ds);
        assert_eq!(out.index, Register::None);
        assert_eq!(out.scale, 1);
        assert_eq!(out.size, 8);
    }

    #[test]
    fn test_instruction_pointer_fixup_ignores_index() {
        let mut mem = rip_memory(Register::Rip, -4);
        mem.index = Register::Rcx.to_raw();
        mem.scale = 4;
        let raw = raw_insn(6, vec![explicit(RawOperandKind::Memory(mem), 4, RawActions::READ)]);

        let out = normalize(&raw, 0x100).operands[0].as_memory().copied().unwrap();
        assert_eq!(out.base, Register::None);
        assert_eq!(out.index, Register::Rcx);
        assert_eq!(out.scale, 4);
        assert_eq!(out.displacement, 0x100 + 6 - 4);
    }

    #[test]
    fn test_register_based_memory_passes_through() {
        let mem = RawMemory {
            segment: Register::Fs.to_raw(),
            base: Register::Rbx.to_raw(),
            index: Register::Rsi.to_raw(),
            scale: 8,
            displacement: -0x20,
        };
        let raw = raw_insn(5, vec![explicit(RawOperandKind::Memory(mem), 2, RawActions::READ)]);

        let out = normalize(&raw, 0xdead_0000).operands[0].as_memory().copied().unwrap();
        assert_eq!(
            out,
            MemoryOperand {
                size: 2,
                segment: Register::Fs,
                base: Register::Rbx,
                index: Register::Rsi,
                scale: 8,
                displacement: -0x20,
            }
        );
    }

    #[test]
    fn test_register_translation() {
        let raw = raw_insn(
            3,
            vec![
                explicit(RawOperandKind::Register(Register::R9d.to_raw()), 4, RawActions::WRITE),
                explicit(RawOperandKind::Register(Register::Eax.to_raw()), 4, RawActions::READ),
            ],
        );
        let insn = normalize(&raw, 0);
        assert_eq!(insn.operands[0].as_register(), Some(Register::R9d));
        assert_eq!(insn.operands[1].as_register(), Some(Register::Eax));
    }

    #[rstest]
    #[case(RawOperandKind::Unused)]
    #[case(RawOperandKind::Unknown(7))]
    fn test_unused_and_unknown_become_none(#[case] kind: RawOperandKind) {
        let op = RawOperand {
            kind,
            size: 0,
            visibility: RawVisibility::Invalid,
            actions: RawActions::empty(),
        };
        let insn = normalize(&raw_insn(1, vec![op]), 0);
        assert!(insn.operands[0].is_none());
        assert_eq!(insn.operands[0].visibility, Visibility::Invalid);
    }

    #[rstest]
    #[case(RawVisibility::Explicit, Visibility::Explicit)]
    #[case(RawVisibility::Hidden, Visibility::Hidden)]
    #[case(RawVisibility::Implicit, Visibility::Implicit)]
    #[case(RawVisibility::Invalid, Visibility::Invalid)]
    fn test_visibility_mapping(#[case] raw: RawVisibility, #[case] expected: Visibility) {
        let mut op = explicit(
            RawOperandKind::Register(Register::Rax.to_raw()),
            8,
            RawActions::READ,
        );
        op.visibility = raw;
        assert_eq!(normalize(&raw_insn(1, vec![op]), 0).operands[0].visibility, expected);
    }

    #[rstest]
    #[case(RawActions::empty(), OperandAccess::empty())]
    #[case(RawActions::READ, OperandAccess::READ)]
    #[case(RawActions::CONDREAD, OperandAccess::READ)]
    #[case(RawActions::WRITE, OperandAccess::WRITE)]
    #[case(RawActions::CONDWRITE, OperandAccess::WRITE)]
    #[case(RawActions::READ | RawActions::WRITE, OperandAccess::READ | OperandAccess::WRITE)]
    #[case(RawActions::READ | RawActions::CONDWRITE, OperandAccess::READ | OperandAccess::WRITE)]
    fn test_access_mapping(#[case] actions: RawActions, #[case] expected: OperandAccess) {
        let op = explicit(RawOperandKind::Register(Register::Es.to_raw()), 2, actions);
        assert_eq!(normalize(&raw_insn(1, vec![op]), 0).operands[0].access, expected);
    }

    #[test]
    fn test_operand_order_and_cap() {
        let ops: Vec<_> = (0..12)
            .map(|i| {
                explicit(
                    RawOperandKind::Immediate(RawImmediate {
                        value: i,
                        is_relative: false,
                    }),
                    1,
                    RawActions::READ,
                )
            })
            .collect();
        let insn = normalize(&raw_insn(4, ops), 0);

        assert_eq!(insn.operands.len(), MAX_OPERANDS);
        let values: Vec<_> = insn.operands.iter().filter_map(Operand::as_immediate).collect();
        assert_eq!(values, (0..MAX_OPERANDS as i64).collect::<Vec<_>>());
    }

    #[test]
    fn test_flags_do_not_depend_on_operands() {
        let mut raw = raw_insn(2, Vec::new());
        raw.flag_actions[CpuFlag::Zero.index()] = FlagAction::Tested;
        raw.flag_actions[CpuFlag::Carry.index()] = FlagAction::TestedModified;
        raw.flag_actions[CpuFlag::Direction.index()] = FlagAction::Set0;

        let bare = normalize(&raw, 0);
        assert_eq!(bare.flags_read, EFlags::ZF | EFlags::CF);
        assert_eq!(bare.flags_write, EFlags::CF | EFlags::DF);

        raw.operands = vec![
            explicit(RawOperandKind::Register(Register::Al.to_raw()), 1, RawActions::READ),
            RawOperand::unused(),
        ];
        let with_ops = normalize(&raw, 0);
        assert_eq!(with_ops.flags_read, bare.flags_read);
        assert_eq!(with_ops.flags_write, bare.flags_write);
    }

    #[test]
    fn test_mnemonic_carried_over() {
        let insn = normalize(&raw_insn(1, Vec::new()), 0);
        assert_eq!(insn.mnemonic, Mnemonic::Test);
        assert!(insn.operands.is_empty());
    }
}
