//! Capstone-based x86 byte decoder producing raw decoded records.

use std::fmt;

use capstone::arch::x86::{ArchMode as X86Mode, X86Operand, X86OperandType};
use capstone::prelude::*;
use capstone::{Insn, RegAccessType, RegId};
use capstone_sys::cs_insn;

use crate::flags::{CpuFlag, FlagAction, CPU_FLAG_COUNT};
use crate::raw::{
    ByteDecoder, RawActions, RawImmediate, RawInstruction, RawMemory, RawOperand, RawOperandKind,
    RawRegister, RawVisibility,
};
use crate::session::MachineMode;
use crate::{Mnemonic, MAX_INSTRUCTION_SIZE, MAX_OPERANDS};

// cs_group_type and x86_insn_group
const GROUP_JUMP: u8 = 1;
const GROUP_CALL: u8 = 2;
const GROUP_BRANCH_RELATIVE: u8 = 7;
const GROUP_FPU: u8 = 169;

const OPSIZE_PREFIX: u8 = 0x66;

// X86_EFLAGS_* bits of cs_x86.eflags
const MODIFY_AF: u64 = 1 << 0;
const MODIFY_CF: u64 = 1 << 1;
const MODIFY_SF: u64 = 1 << 2;
const MODIFY_ZF: u64 = 1 << 3;
const MODIFY_PF: u64 = 1 << 4;
const MODIFY_OF: u64 = 1 << 5;
const MODIFY_TF: u64 = 1 << 6;
const MODIFY_IF: u64 = 1 << 7;
const MODIFY_DF: u64 = 1 << 8;
const MODIFY_NT: u64 = 1 << 9;
const MODIFY_RF: u64 = 1 << 10;
const RESET_OF: u64 = 1 << 21;
const RESET_CF: u64 = 1 << 22;
const RESET_DF: u64 = 1 << 23;
const RESET_IF: u64 = 1 << 24;
const RESET_SF: u64 = 1 << 25;
const RESET_AF: u64 = 1 << 26;
const RESET_TF: u64 = 1 << 27;
const RESET_NT: u64 = 1 << 28;
const RESET_PF: u64 = 1 << 29;
const SET_CF: u64 = 1 << 30;
const SET_DF: u64 = 1 << 31;
const SET_IF: u64 = 1 << 32;
const TEST_OF: u64 = 1 << 33;
const TEST_SF: u64 = 1 << 34;
const TEST_ZF: u64 = 1 << 35;
const TEST_PF: u64 = 1 << 36;
const TEST_CF: u64 = 1 << 37;
const TEST_NT: u64 = 1 << 38;
const TEST_DF: u64 = 1 << 39;
const UNDEFINED_OF: u64 = 1 << 40;
const UNDEFINED_SF: u64 = 1 << 41;
const UNDEFINED_ZF: u64 = 1 << 42;
const UNDEFINED_PF: u64 = 1 << 43;
const UNDEFINED_AF: u64 = 1 << 44;
const UNDEFINED_CF: u64 = 1 << 45;
const RESET_RF: u64 = 1 << 46;
const TEST_RF: u64 = 1 << 47;
const TEST_IF: u64 = 1 << 48;
const TEST_TF: u64 = 1 << 49;
const TEST_AF: u64 = 1 << 50;
const RESET_ZF: u64 = 1 << 51;
const SET_OF: u64 = 1 << 52;
const SET_SF: u64 = 1 << 53;
const SET_ZF: u64 = 1 << 54;
const SET_AF: u64 = 1 << 55;
const SET_PF: u64 = 1 << 56;
const RESET_AC: u64 = 1 << 58;

// X86_FPU_FLAGS_* bits, stored in the same word for x87 instructions
const FPU_MODIFY_C0: u64 = 1 << 0;
const FPU_MODIFY_C1: u64 = 1 << 1;
const FPU_MODIFY_C2: u64 = 1 << 2;
const FPU_MODIFY_C3: u64 = 1 << 3;
const FPU_RESET_C0: u64 = 1 << 4;
const FPU_RESET_C1: u64 = 1 << 5;
const FPU_RESET_C2: u64 = 1 << 6;
const FPU_RESET_C3: u64 = 1 << 7;
const FPU_SET_C0: u64 = 1 << 8;
const FPU_SET_C1: u64 = 1 << 9;
const FPU_SET_C2: u64 = 1 << 10;
const FPU_SET_C3: u64 = 1 << 11;
const FPU_UNDEFINED_C0: u64 = 1 << 12;
const FPU_UNDEFINED_C1: u64 = 1 << 13;
const FPU_UNDEFINED_C2: u64 = 1 << 14;
const FPU_UNDEFINED_C3: u64 = 1 << 15;
const FPU_TEST_C0: u64 = 1 << 16;
const FPU_TEST_C1: u64 = 1 << 17;
const FPU_TEST_C2: u64 = 1 << 18;
const FPU_TEST_C3: u64 = 1 << 19;

/// Capstone's view of one flag: which flag-word bits mean what.
struct FlagBits {
    flag: CpuFlag,
    test: u64,
    modify: u64,
    reset: u64,
    set: u64,
    undefined: u64,
}

const fn bits(
    flag: CpuFlag,
    test: u64,
    modify: u64,
    reset: u64,
    set: u64,
    undefined: u64,
) -> FlagBits {
    FlagBits {
        flag,
        test,
        modify,
        reset,
        set,
        undefined,
    }
}

// Capstone does not report IOPL, VM, VIF, VIP or ID.
static EFLAGS_MAP: [FlagBits; 12] = [
    bits(CpuFlag::Carry, TEST_CF, MODIFY_CF, RESET_CF, SET_CF, UNDEFINED_CF),
    bits(CpuFlag::Parity, TEST_PF, MODIFY_PF, RESET_PF, SET_PF, UNDEFINED_PF),
    bits(CpuFlag::AuxiliaryCarry, TEST_AF, MODIFY_AF, RESET_AF, SET_AF, UNDEFINED_AF),
    bits(CpuFlag::Zero, TEST_ZF, MODIFY_ZF, RESET_ZF, SET_ZF, UNDEFINED_ZF),
    bits(CpuFlag::Sign, TEST_SF, MODIFY_SF, RESET_SF, SET_SF, UNDEFINED_SF),
    bits(CpuFlag::Trap, TEST_TF, MODIFY_TF, RESET_TF, 0, 0),
    bits(CpuFlag::Interrupt, TEST_IF, MODIFY_IF, RESET_IF, SET_IF, 0),
    bits(CpuFlag::Direction, TEST_DF, MODIFY_DF, RESET_DF, SET_DF, 0),
    bits(CpuFlag::Overflow, TEST_OF, MODIFY_OF, RESET_OF, SET_OF, UNDEFINED_OF),
    bits(CpuFlag::NestedTask, TEST_NT, MODIFY_NT, RESET_NT, 0, 0),
    bits(CpuFlag::Resume, TEST_RF, MODIFY_RF, RESET_RF, 0, 0),
    bits(CpuFlag::AlignmentCheck, 0, 0, RESET_AC, 0, 0),
];

static FPU_FLAGS_MAP: [FlagBits; 4] = [
    bits(CpuFlag::C0, FPU_TEST_C0, FPU_MODIFY_C0, FPU_RESET_C0, FPU_SET_C0, FPU_UNDEFINED_C0),
    bits(CpuFlag::C1, FPU_TEST_C1, FPU_MODIFY_C1, FPU_RESET_C1, FPU_SET_C1, FPU_UNDEFINED_C1),
    bits(CpuFlag::C2, FPU_TEST_C2, FPU_MODIFY_C2, FPU_RESET_C2, FPU_SET_C2, FPU_UNDEFINED_C2),
    bits(CpuFlag::C3, FPU_TEST_C3, FPU_MODIFY_C3, FPU_RESET_C3, FPU_SET_C3, FPU_UNDEFINED_C3),
];

/// Lower a Capstone flag word into a per-flag action table.
fn flag_actions(map: &[FlagBits], word: u64) -> [FlagAction; CPU_FLAG_COUNT] {
    let mut table = [FlagAction::None; CPU_FLAG_COUNT];
    for entry in map {
        let has = |mask: u64| word & mask != 0;
        let action = match (has(entry.test), has(entry.modify)) {
            (true, true) => FlagAction::TestedModified,
            (true, false) => FlagAction::Tested,
            (false, true) => FlagAction::Modified,
            (false, false) if has(entry.reset) => FlagAction::Set0,
            (false, false) if has(entry.set) => FlagAction::Set1,
            (false, false) if has(entry.undefined) => FlagAction::Undefined,
            (false, false) => FlagAction::None,
        };
        table[entry.flag.index()] = action;
    }
    table
}

fn raw_access(access: Option<&RegAccessType>) -> RawActions {
    match access {
        Some(RegAccessType::ReadOnly) => RawActions::READ,
        Some(RegAccessType::WriteOnly) => RawActions::WRITE,
        Some(RegAccessType::ReadWrite) => RawActions::READ | RawActions::WRITE,
        None => RawActions::empty(),
    }
}

/// Fields of Capstone's x86 detail record that the safe bindings leave out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ExtraDetail {
    /// `eflags`, or `fpu_flags` for x87 instructions
    flags: u64,
    imm_offset: u8,
    imm_size: u8,
}

impl ExtraDetail {
    fn read(insn: &Insn) -> Option<Self> {
        let raw = (insn as *const Insn).cast::<cs_insn>();
        // SAFETY: `Insn` is `repr(transparent)` over `cs_insn`. With detail on,
        // `detail` is null or points at the record that `insn` borrows.
        let detail = unsafe { (*raw).detail.as_ref()? };
        // SAFETY: the handle is x86, so the x86 member of the union is the live one.
        let x86 = unsafe { &detail.__bindgen_anon_1.x86 };
        Some(Self {
            // SAFETY: both members of the flag union are plain u64
            flags: unsafe { x86.__bindgen_anon_1.eflags },
            imm_offset: x86.encoding.imm_offset,
            imm_size: x86.encoding.imm_size,
        })
    }

    /// The immediate field as encoded in `bytes`, sign-extended.
    fn encoded_immediate(&self, bytes: &[u8]) -> Option<i64> {
        if self.imm_offset == 0 {
            return None;
        }
        let start = self.imm_offset as usize;
        let field = bytes.get(start..start + self.imm_size as usize)?;
        match *field {
            [b] => Some(b as i8 as i64),
            [b0, b1] => Some(i16::from_le_bytes([b0, b1]) as i64),
            [b0, b1, b2, b3] => Some(i32::from_le_bytes([b0, b1, b2, b3]) as i64),
            _ => None,
        }
    }
}

/// An x86 Capstone handle with detail output, fixed to one machine mode.
///
/// Capstone decodes at virtual address 0 so that the records it yields do not
/// depend on where the caller places the bytes.
pub struct CapstoneDecoder {
    cs: Capstone,
    mode: MachineMode,
}

impl CapstoneDecoder {
    /// Build a decoder for `mode`.
    pub fn new(mode: MachineMode) -> Result<Self, capstone::Error> {
        let cs_mode = match mode {
            MachineMode::Long64 => X86Mode::Mode64,
            MachineMode::LongCompat32 => X86Mode::Mode32,
        };
        let cs = Capstone::new().x86().mode(cs_mode).detail(true).build()?;
        Ok(Self { cs, mode })
    }

    /// Undo Capstone's branch resolution: turn a target computed from address 0
    /// back into the displacement from the end of the instruction.
    ///
    /// Capstone truncates the target to the operand size, so it is
    /// sign-extended from that width first.
    fn displacement_from_target(&self, target: i64, length: u8, opsize_override: bool) -> i64 {
        let target = match (self.mode, opsize_override) {
            (MachineMode::Long64, _) => target,
            (MachineMode::LongCompat32, true) => target as i16 as i64,
            (MachineMode::LongCompat32, false) => target as i32 as i64,
        };
        target.wrapping_sub(length as i64)
    }

    fn convert_operand(&self, op: &X86Operand, relative: Option<i64>) -> RawOperand {
        let kind = match &op.op_type {
            X86OperandType::Reg(reg) => RawOperandKind::Register(RawRegister(reg.0)),
            X86OperandType::Imm(value) => RawOperandKind::Immediate(match relative {
                Some(displacement) => RawImmediate {
                    value: displacement,
                    is_relative: true,
                },
                None => RawImmediate {
                    value: *value,
                    is_relative: false,
                },
            }),
            X86OperandType::Mem(mem) => RawOperandKind::Memory(RawMemory {
                segment: RawRegister(mem.segment().0),
                base: RawRegister(mem.base().0),
                index: RawRegister(mem.index().0),
                scale: mem.scale() as u8,
                displacement: mem.disp(),
            }),
            X86OperandType::Invalid => RawOperandKind::Unused,
        };

        // Capstone leaves immediates without an access type
        let actions = match (&op.op_type, raw_access(op.access.as_ref())) {
            (X86OperandType::Imm(_), actions) if actions.is_empty() => RawActions::READ,
            (_, actions) => actions,
        };

        RawOperand {
            kind,
            size: op.size as u16,
            visibility: RawVisibility::Explicit,
            actions,
        }
    }
}

/// Append implicitly used registers as hidden operands, merging read and write.
fn push_hidden(operands: &mut Vec<RawOperand>, reg: RegId, action: RawActions) {
    let raw = RawRegister(reg.0);
    let existing = operands.iter_mut().find(|op| {
        op.visibility == RawVisibility::Hidden && op.kind == RawOperandKind::Register(raw)
    });
    match existing {
        Some(op) => op.actions |= action,
        None => operands.push(RawOperand {
            kind: RawOperandKind::Register(raw),
            size: 0,
            visibility: RawVisibility::Hidden,
            actions: action,
        }),
    }
}

impl ByteDecoder for CapstoneDecoder {
    fn mode(&self) -> MachineMode {
        self.mode
    }

    fn decode_raw(&self, bytes: &[u8]) -> Option<RawInstruction> {
        // An x86 instruction never needs more than 15 bytes
        let window = &bytes[..bytes.len().min(MAX_INSTRUCTION_SIZE)];
        let insns = self.cs.disasm_count(window, 0, 1).ok()?;
        let insn = insns.iter().next()?;
        let length = insn.bytes().len() as u8;

        let detail = self.cs.insn_detail(insn).ok()?;
        let arch_detail = detail.arch_detail();
        let x86 = arch_detail.x86()?;
        let extra = ExtraDetail::read(insn)?;

        let groups: Vec<u8> = detail.groups().iter().map(|g| g.0).collect();
        let explicit: Vec<X86Operand> = x86.operands().collect();
        let immediates = explicit
            .iter()
            .filter(|op| matches!(op.op_type, X86OperandType::Imm(_)))
            .count();
        let is_relative = groups.contains(&GROUP_BRANCH_RELATIVE)
            || ((groups.contains(&GROUP_JUMP) || groups.contains(&GROUP_CALL)) && immediates == 1);

        let mut operands: Vec<RawOperand> = explicit
            .iter()
            .map(|op| {
                let relative = match op.op_type {
                    X86OperandType::Imm(target) if is_relative => {
                        Some(extra.encoded_immediate(insn.bytes()).unwrap_or_else(|| {
                            let opsize_override = x86.prefix()[2] == OPSIZE_PREFIX;
                            self.displacement_from_target(target, length, opsize_override)
                        }))
                    }
                    _ => None,
                };
                self.convert_operand(op, relative)
            })
            .collect();
        for reg in detail.regs_read() {
            push_hidden(&mut operands, *reg, RawActions::READ);
        }
        for reg in detail.regs_write() {
            push_hidden(&mut operands, *reg, RawActions::WRITE);
        }
        operands.truncate(MAX_OPERANDS);

        let flag_map: &[FlagBits] = if groups.contains(&GROUP_FPU) {
            &FPU_FLAGS_MAP
        } else {
            &EFLAGS_MAP
        };

        Some(RawInstruction {
            length,
            mnemonic: Mnemonic::from_raw(insn.id().0),
            operands,
            flag_actions: flag_actions(flag_map, extra.flags),
        })
    }
}

impl fmt::Debug for CapstoneDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapstoneDecoder")
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::Register;
    use rstest::rstest;

    #[test]
    fn test_decoder_keeps_mode() {
        let decoder = CapstoneDecoder::new(MachineMode::LongCompat32).unwrap();
        assert_eq!(decoder.mode(), MachineMode::LongCompat32);
    }

    #[test]
    fn test_x86_decode() {
        // mov eax, 1
        let bytes = [0xb8, 0x01, 0x00, 0x00, 0x00];
        let decoder = CapstoneDecoder::new(MachineMode::LongCompat32).unwrap();

        let raw = decoder.decode_raw(&bytes).unwrap();
        assert_eq!(raw.mnemonic, Mnemonic::Mov);
        assert_eq!(raw.length, 5);
        assert_eq!(raw.operands[0].kind, RawOperandKind::Register(Register::Eax.to_raw()));
        assert_eq!(
            raw.operands[1].kind,
            RawOperandKind::Immediate(RawImmediate {
                value: 1,
                is_relative: false,
            })
        );
    }

    #[test]
    fn test_relative_branch_is_unresolved() {
        // call rel32 +5
        let decoder = CapstoneDecoder::new(MachineMode::Long64).unwrap();
        let raw = decoder.decode_raw(&[0xe8, 0x05, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(
            raw.operands[0].kind,
            RawOperandKind::Immediate(RawImmediate {
                value: 5,
                is_relative: true,
            })
        );
        assert_eq!(raw.operands[0].visibility, RawVisibility::Explicit);
    }

    #[test]
    fn test_backward_branch_in_compat_mode() {
        // jmp short -16
        let decoder = CapstoneDecoder::new(MachineMode::LongCompat32).unwrap();
        let raw = decoder.decode_raw(&[0xeb, 0xf0]).unwrap();
        assert_eq!(
            raw.operands[0].kind,
            RawOperandKind::Immediate(RawImmediate {
                value: -16,
                is_relative: true,
            })
        );
    }

    #[test]
    fn test_push_has_hidden_stack_pointer() {
        let decoder = CapstoneDecoder::new(MachineMode::Long64).unwrap();
        let raw = decoder.decode_raw(&[0x50]).unwrap();

        let rsp = raw
            .operands
            .iter()
            .find(|op| op.kind == RawOperandKind::Register(Register::Rsp.to_raw()))
            .unwrap();
        assert_eq!(rsp.visibility, RawVisibility::Hidden);
        assert!(rsp.actions.contains(RawActions::READ | RawActions::WRITE));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let decoder = CapstoneDecoder::new(MachineMode::Long64).unwrap();
        assert!(decoder.decode_raw(&[0x0f; 4]).is_none());
    }

    #[test]
    fn test_hidden_merge() {
        let mut ops = Vec::new();
        let rsp = RegId(Register::Rsp.to_raw().0);
        push_hidden(&mut ops, rsp, RawActions::READ);
        push_hidden(&mut ops, rsp, RawActions::WRITE);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].actions, RawActions::READ | RawActions::WRITE);
        assert_eq!(ops[0].kind, RawOperandKind::Register(RawRegister(rsp.0)));
    }

    #[test]
    fn test_flag_lowering() {
        let word = MODIFY_CF | TEST_CF | MODIFY_ZF | TEST_SF | RESET_OF | SET_DF;
        let table = flag_actions(&EFLAGS_MAP, word);
        assert_eq!(table[CpuFlag::Carry.index()], FlagAction::TestedModified);
        assert_eq!(table[CpuFlag::Zero.index()], FlagAction::Modified);
        assert_eq!(table[CpuFlag::Sign.index()], FlagAction::Tested);
        assert_eq!(table[CpuFlag::Overflow.index()], FlagAction::Set0);
        assert_eq!(table[CpuFlag::Direction.index()], FlagAction::Set1);
        assert_eq!(table[CpuFlag::Parity.index()], FlagAction::None);
        assert_eq!(table[CpuFlag::C0.index()], FlagAction::None);
    }

    #[test]
    fn test_undefined_flags() {
        let table = flag_actions(&EFLAGS_MAP, UNDEFINED_AF | UNDEFINED_PF);
        assert_eq!(table[CpuFlag::AuxiliaryCarry.index()], FlagAction::Undefined);
        assert_eq!(table[CpuFlag::Parity.index()], FlagAction::Undefined);
    }

    #[test]
    fn test_fpu_flag_lowering() {
        let word = FPU_MODIFY_C1 | FPU_TEST_C1 | FPU_RESET_C0 | FPU_UNDEFINED_C3;
        let table = flag_actions(&FPU_FLAGS_MAP, word);
        assert_eq!(table[CpuFlag::C0.index()], FlagAction::Set0);
        assert_eq!(table[CpuFlag::C1.index()], FlagAction::TestedModified);
        assert_eq!(table[CpuFlag::C2.index()], FlagAction::None);
        assert_eq!(table[CpuFlag::C3.index()], FlagAction::Undefined);
        // the same bits mean nothing for the integer flags
        assert_eq!(table[CpuFlag::Carry.index()], FlagAction::None);
    }

    #[test]
    fn test_flag_word_reaches_record() {
        let decoder = CapstoneDecoder::new(MachineMode::Long64).unwrap();

        // stc
        let raw = decoder.decode_raw(&[0xf9]).unwrap();
        assert_eq!(raw.flag_actions[CpuFlag::Carry.index()], FlagAction::Set1);

        // jz +0
        let raw = decoder.decode_raw(&[0x74, 0x00]).unwrap();
        assert_eq!(raw.flag_actions[CpuFlag::Zero.index()], FlagAction::Tested);
    }

    #[rstest]
    #[case(&[0x05], 1, Some(5))]
    #[case(&[0xf0], 1, Some(-16))]
    #[case(&[0xf0, 0xff], 2, Some(-16))]
    #[case(&[0x00, 0x01, 0x00, 0x00], 4, Some(0x100))]
    #[case(&[0xfb, 0xff, 0xff, 0xff], 4, Some(-5))]
    #[case(&[0x00, 0x00, 0x00], 3, None)]
    fn test_encoded_immediate(
        #[case] field: &[u8],
        #[case] size: u8,
        #[case] expected: Option<i64>,
    ) {
        // opcode byte, then the immediate field
        let mut bytes = vec![0xe9];
        bytes.extend_from_slice(field);
        let extra = ExtraDetail {
            flags: 0,
            imm_offset: 1,
            imm_size: size,
        };
        assert_eq!(extra.encoded_immediate(&bytes), expected);
    }

    #[test]
    fn test_encoded_immediate_out_of_range() {
        let extra = ExtraDetail {
            flags: 0,
            imm_offset: 1,
            imm_size: 4,
        };
        assert_eq!(extra.encoded_immediate(&[0xe9, 0x00]), None);

        let irrelevant = ExtraDetail {
            flags: 0,
            imm_offset: 0,
            imm_size: 0,
        };
        assert_eq!(irrelevant.encoded_immediate(&[0x90]), None);
    }

    #[test]
    fn test_operand_size_branch_in_compat_mode() {
        // jmp rel16 -16
        let decoder = CapstoneDecoder::new(MachineMode::LongCompat32).unwrap();
        let raw = decoder.decode_raw(&[0x66, 0xe9, 0xf0, 0xff]).unwrap();
        assert_eq!(raw.length, 4);
        assert_eq!(
            raw.operands[0].kind,
            RawOperandKind::Immediate(RawImmediate {
                value: -16,
                is_relative: true,
            })
        );
    }

    #[test]
    fn test_target_fallback_respects_operand_size() {
        let decoder = CapstoneDecoder::new(MachineMode::LongCompat32).unwrap();
        // 16-bit target 0xfff4 of a 4-byte instruction
        assert_eq!(decoder.displacement_from_target(0xfff4, 4, true), -16);
        // 32-bit target 0xfffffff2 of a 2-byte instruction
        assert_eq!(decoder.displacement_from_target(0xffff_fff2, 2, false), -16);
    }

    #[test]
    fn test_immediates_are_read() {
        // mov eax, 1
        let decoder = CapstoneDecoder::new(MachineMode::LongCompat32).unwrap();
        let raw = decoder.decode_raw(&[0xb8, 0x01, 0x00, 0x00, 0x00]).unwrap();
        assert_eq!(raw.operands[1].actions, RawActions::READ);
    }
}
