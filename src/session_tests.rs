#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::{
        DecodeFailure, EFlags, MachineMode, Mnemonic, OperandAccess, Register, Session, Visibility,
    };

    fn long64() -> Session {
        Session::with_mode(MachineMode::Long64).expect("Failed to create 64-bit session")
    }

    fn compat32() -> Session {
        Session::with_mode(MachineMode::LongCompat32).expect("Failed to create 32-bit session")
    }

    #[test]
    fn test_relative_call() -> anyhow::Result<()> {
        let insn = long64().decode(&[0xe8, 0x05, 0x00, 0x00, 0x00], 0x1000)?;

        assert_eq!(insn.size, 5);
        assert_eq!(insn.address, 0x1000);
        assert_eq!(insn.mnemonic, Mnemonic::Call);
        let target = insn.operands[0];
        assert_eq!(target.as_immediate(), Some(0x100a));
        assert_eq!(target.visibility, Visibility::Explicit);
        assert_eq!(insn.explicit_operands().count(), 1);
        Ok(())
    }

    #[rstest]
    #[case(&[0xeb, 0xfe], 0x40_0000, 0x40_0000)] // jmp $
    #[case(&[0x74, 0x10], 0x1000, 0x1012)] // jz +0x10
    #[case(&[0xe9, 0x00, 0x01, 0x00, 0x00], 0x2000, 0x2105)] // jmp rel32 +0x100
    fn test_relative_branches(#[case] bytes: &[u8], #[case] address: u64, #[case] target: i64) {
        let insn = long64().decode(bytes, address).unwrap();
        assert_eq!(insn.operands[0].as_immediate(), Some(target));
    }

    #[test]
    fn test_backward_branch_compat32() {
        // jmp short -16
        let insn = compat32().decode(&[0xeb, 0xf0], 0x40_1000).unwrap();
        assert_eq!(insn.size, 2);
        assert_eq!(insn.operands[0].as_immediate(), Some(0x40_1000 + 2 - 16));
    }

    #[test]
    fn test_call_compat32() {
        // call -5 lands on itself
        let insn = compat32().decode(&[0xe8, 0xfb, 0xff, 0xff, 0xff], 0x1000).unwrap();
        assert_eq!(insn.operands[0].as_immediate(), Some(0x1000));
    }

    #[test]
    fn test_operand_size_branch_compat32() {
        // jmp rel16 -16
        let insn = compat32().decode(&[0x66, 0xe9, 0xf0, 0xff], 0x40_1000).unwrap();
        assert_eq!(insn.size, 4);
        assert_eq!(insn.operands[0].as_immediate(), Some(0x40_1000 + 4 - 16));
    }

    #[test]
    fn test_operand_size_forward_branch_compat32() {
        // jmp rel16 +0x20
        let insn = compat32().decode(&[0x66, 0xe9, 0x20, 0x00], 0x40_1000).unwrap();
        assert_eq!(insn.operands[0].as_immediate(), Some(0x40_1000 + 4 + 0x20));
    }

    #[test]
    fn test_immediate_operand_is_read() {
        // mov eax, 0x12345678
        let insn = long64().decode(&[0xb8, 0x78, 0x56, 0x34, 0x12], 0).unwrap();
        assert_eq!(insn.operands[1].as_immediate(), Some(0x1234_5678));
        assert_eq!(insn.operands[1].access, OperandAccess::READ);
    }

    #[test]
    fn test_rip_relative_load() {
        // mov rax, [rip + 0x10]
        let insn = long64()
            .decode(&[0x48, 0x8b, 0x05, 0x10, 0x00, 0x00, 0x00], 0x2000)
            .unwrap();

        assert_eq!(insn.size, 7);
        assert_eq!(insn.operands[0].as_register(), Some(Register::Rax));
        assert!(insn.operands[0].writes());

        let mem = insn.operands[1].as_memory().copied().unwrap();
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.index, Register::None);
        assert_eq!(mem.displacement, 0x10 + 7 + 0x2000);
        assert_eq!(mem.size, 8);
        assert!(insn.operands[1].reads());
    }

    #[test]
    fn test_eip_relative_load() {
        // mov eax, [eip + 0x10]
        let insn = long64()
            .decode(&[0x67, 0x8b, 0x05, 0x10, 0x00, 0x00, 0x00], 0x3000)
            .unwrap();

        assert_eq!(insn.size, 7);
        let mem = insn.operands[1].as_memory().copied().unwrap();
        assert_eq!(mem.base, Register::None);
        assert_eq!(mem.displacement, 0x10 + 7 + 0x3000);
        assert_eq!(mem.size, 4);
    }

    #[test]
    fn test_register_based_memory_unchanged() {
        // mov eax, [rbx + rcx*4 + 8]
        let insn = long64().decode(&[0x8b, 0x44, 0x8b, 0x08], 0x5000).unwrap();
        let mem = insn.operands[1].as_memory().copied().unwrap();

        assert_eq!(mem.base, Register::Rbx);
        assert_eq!(mem.index, Register::Rcx);
        assert_eq!(mem.scale, 4);
        assert_eq!(mem.displacement, 8);
        assert_eq!(mem.size, 4);
    }

    #[test]
    fn test_read_modify_write_memory() {
        // add [rax], ebx
        let insn = long64().decode(&[0x01, 0x18], 0).unwrap();
        assert_eq!(
            insn.operands[0].access,
            OperandAccess::READ | OperandAccess::WRITE
        );
        assert!(insn.operands[1].reads());
    }

    #[test]
    fn test_hidden_stack_pointer() {
        // push rbx
        let insn = long64().decode(&[0x53], 0).unwrap();
        let rsp = insn
            .operands
            .iter()
            .find(|op| op.as_register() == Some(Register::Rsp))
            .expect("push touches rsp");
        assert_eq!(rsp.visibility, Visibility::Hidden);
        assert!(rsp.reads() && rsp.writes());
    }

    #[test]
    fn test_adc_flags_tested_and_modified() {
        // adc eax, ebx
        let insn = long64().decode(&[0x11, 0xd8], 0).unwrap();
        assert!(insn.flags_read.contains(EFlags::CF));
        assert!(insn.flags_write.contains(EFlags::CF | EFlags::ZF | EFlags::OF));
    }

    #[test]
    fn test_conditional_jump_reads_zf() {
        let insn = long64().decode(&[0x74, 0x00], 0).unwrap();
        assert!(insn.flags_read.contains(EFlags::ZF));
        assert!(insn.flags_write.is_empty());
    }

    #[test]
    fn test_stc_sets_carry() {
        let insn = long64().decode(&[0xf9], 0).unwrap();
        assert_eq!(insn.flags_write, EFlags::CF);
        assert!(insn.flags_read.is_empty());
    }

    #[test]
    fn test_x87_compare_writes_condition_codes() {
        // fcom st(1)
        let insn = long64().decode(&[0xd8, 0xd1], 0).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Fcom);
        assert_eq!(insn.flags_write, EFlags::C0 | EFlags::C1 | EFlags::C2 | EFlags::C3);
        assert!(insn.flags_read.is_empty());
    }

    #[test]
    fn test_nop_touches_no_flags() {
        let insn = long64().decode(&[0x90], 0).unwrap();
        assert!(insn.flags_read.is_empty());
        assert!(insn.flags_write.is_empty());
        assert!(insn.operands.is_empty());
    }

    #[test]
    fn test_size_from_decoder_not_buffer() {
        // nop followed by unrelated bytes
        let insn = long64().decode(&[0x90, 0xcc, 0xcc, 0xcc], 0).unwrap();
        assert_eq!(insn.size, 1);
    }

    #[rstest]
    #[case(&[])]
    #[case(&[0x0f, 0x0f, 0x0f, 0x0f])]
    #[case(&[0xe8, 0x05])] // truncated call
    #[case(&[0x48])] // lone REX prefix
    fn test_malformed_input(#[case] bytes: &[u8]) {
        assert_eq!(
            long64().decode(bytes, 0x3000),
            Err(DecodeFailure { address: 0x3000 })
        );
    }

    #[test]
    fn test_failure_does_not_poison_session() {
        let session = long64();
        assert!(session.decode(&[0x0f, 0x0f, 0x0f, 0x0f], 0).is_err());
        let insn = session.decode(&[0xc3], 0x10).unwrap();
        assert_eq!(insn.mnemonic, Mnemonic::Ret);
    }

    #[test]
    fn test_idempotent_decode() {
        let session = long64();
        let bytes = [0x48, 0x8b, 0x05, 0x10, 0x00, 0x00, 0x00];
        let first = session.decode(&bytes, 0x7000).unwrap();
        let second = session.decode(&bytes, 0x7000).unwrap();
        assert_eq!(first, second);

        // a fresh session agrees too
        assert_eq!(long64().decode(&bytes, 0x7000).unwrap(), first);
    }

    #[test]
    fn test_independent_sessions_across_threads() {
        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                std::thread::spawn(move || {
                    let session = long64();
                    session
                        .decode(&[0xe8, 0x05, 0x00, 0x00, 0x00], 0x1000 * i)
                        .map(|insn| insn.operands[0].as_immediate())
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let target = handle.join().expect("worker panicked").unwrap();
            assert_eq!(target, Some(0x1000 * i as i64 + 10));
        }
    }

    #[test]
    fn test_native_session() {
        let session = Session::create().unwrap();
        assert_eq!(session.mode(), MachineMode::native());
    }
}
