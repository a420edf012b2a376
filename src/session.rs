//! Decoder sessions: one configured byte decoder plus normalization.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::decoder::CapstoneDecoder;
use crate::normalize::normalize;
use crate::raw::ByteDecoder;
use crate::{Address, DecodeFailure, Error, Instruction};

/// Processor mode the decoder interprets bytes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum MachineMode {
    /// 64-bit long mode, 64-bit addresses
    Long64,
    /// 32-bit compatibility mode, 32-bit addresses
    LongCompat32,
}

impl MachineMode {
    /// The mode matching the target this crate was built for.
    pub fn native() -> Self {
        if cfg!(target_pointer_width = "64") {
            MachineMode::Long64
        } else {
            MachineMode::LongCompat32
        }
    }

    /// Address width in bits.
    pub fn address_width(self) -> u32 {
        match self {
            MachineMode::Long64 => 64,
            MachineMode::LongCompat32 => 32,
        }
    }
}

impl fmt::Display for MachineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineMode::Long64 => write!(f, "long64"),
            MachineMode::LongCompat32 => write!(f, "compat32"),
        }
    }
}

impl FromStr for MachineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long64" | "x86_64" | "amd64" => Ok(MachineMode::Long64),
            "compat32" | "x86" | "i386" => Ok(MachineMode::LongCompat32),
            _ => Err(format!("Unknown machine mode: {}", s)),
        }
    }
}

/// A byte decoder fixed to one machine mode.
///
/// Each [`Session::decode`] call is independent; a failed decode leaves the
/// session usable. The underlying decoder is released when the session drops.
#[derive(Debug)]
pub struct Session<D = CapstoneDecoder> {
    decoder: D,
}

impl Session<CapstoneDecoder> {
    /// Session in the build target's native mode.
    pub fn create() -> Result<Self, Error> {
        Self::with_mode(MachineMode::native())
    }

    pub fn with_mode(mode: MachineMode) -> Result<Self, Error> {
        let decoder = CapstoneDecoder::new(mode)?;
        log::trace!("Created decoder session in {} mode", mode);
        Ok(Self { decoder })
    }
}

impl<D: ByteDecoder> Session<D> {
    /// Wrap an already configured decoder.
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    pub fn mode(&self) -> MachineMode {
        self.decoder.mode()
    }

    /// Decode and normalize the first instruction in `bytes`, placed at `address`.
    ///
    /// The decoder may consume fewer bytes than given; `size` reports how many.
    pub fn decode(&self, bytes: &[u8], address: Address) -> Result<Instruction, DecodeFailure> {
        let failure = DecodeFailure { address };
        if bytes.is_empty() {
            return Err(failure);
        }

        let raw = self.decoder.decode_raw(bytes).ok_or(failure)?;
        if raw.length == 0 || raw.length as usize > bytes.len() {
            return Err(failure);
        }

        Ok(normalize(&raw, address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::flags::{FlagAction, CPU_FLAG_COUNT};
    use crate::raw::{
        RawActions, RawImmediate, RawInstruction, RawOperand, RawOperandKind, RawVisibility,
    };
    use crate::Mnemonic;

    /// Decoder that replays a fixed answer and counts calls.
    struct Scripted {
        answer: Option<RawInstruction>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn new(answer: Option<RawInstruction>) -> Self {
            Self {
                answer,
                calls: Cell::new(0),
            }
        }
    }

    impl ByteDecoder for Scripted {
        fn mode(&self) -> MachineMode {
            MachineMode::Long64
        }

        fn decode_raw(&self, _bytes: &[u8]) -> Option<RawInstruction> {
            self.calls.set(self.calls.get() + 1);
            self.answer.clone()
        }
    }

    fn jmp_record(length: u8) -> RawInstruction {
        RawInstruction {
            length,
            mnemonic: Mnemonic::Jmp,
            operands: vec![RawOperand {
                kind: RawOperandKind::Immediate(RawImmediate {
                    value: -2,
                    is_relative: true,
                }),
                size: 1,
                visibility: RawVisibility::Explicit,
                actions: RawActions::READ,
            }],
            flag_actions: [FlagAction::None; CPU_FLAG_COUNT],
        }
    }

    #[test]
    fn test_empty_buffer_never_reaches_decoder() {
        let session = Session::with_decoder(Scripted::new(Some(jmp_record(2))));
        assert_eq!(session.decode(&[], 0x10), Err(DecodeFailure { address: 0x10 }));
        assert_eq!(session.decoder.calls.get(), 0);
    }

    #[test]
    fn test_rejection_is_decode_failure() {
        let session = Session::with_decoder(Scripted::new(None));
        assert_eq!(session.decode(&[0x0f], 0x20), Err(DecodeFailure { address: 0x20 }));
    }

    #[test]
    fn test_overlong_record_is_rejected() {
        let session = Session::with_decoder(Scripted::new(Some(jmp_record(4))));
        assert!(session.decode(&[0xeb, 0xfe], 0).is_err());
    }

    #[test]
    fn test_decode_normalizes() {
        let session = Session::with_decoder(Scripted::new(Some(jmp_record(2))));
        let insn = session.decode(&[0xeb, 0xfe, 0x90], 0x4000).unwrap();
        assert_eq!(insn.size, 2);
        assert_eq!(insn.operands[0].as_immediate(), Some(0x4000));
        assert_eq!(session.mode(), MachineMode::Long64);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("x86_64".parse::<MachineMode>().unwrap(), MachineMode::Long64);
        assert_eq!("COMPAT32".parse::<MachineMode>().unwrap(), MachineMode::LongCompat32);
        assert!("arm".parse::<MachineMode>().is_err());
        assert_eq!(MachineMode::LongCompat32.to_string(), "compat32");
        assert_eq!(MachineMode::Long64.address_width(), 64);
        assert_eq!(MachineMode::LongCompat32.address_width(), 32);
    }

    #[test]
    fn test_native_mode_follows_target() {
        let expected = if cfg!(target_pointer_width = "64") { 64 } else { 32 };
        assert_eq!(MachineMode::native().address_width(), expected);
    }
}
