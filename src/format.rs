//! JSON and JSON Lines serialization of normalized instructions

use std::io::Write;

use crate::{Error, Instruction};

/// Pretty-printed JSON array of instructions.
pub fn to_json(instructions: &[Instruction]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(instructions)?)
}

/// One JSON object per line.
pub fn write_json_lines<W: Write>(
    mut writer: W,
    instructions: &[Instruction],
) -> Result<(), Error> {
    for insn in instructions {
        serde_json::to_writer(&mut writer, insn)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse JSON Lines back into instructions, ignoring blank lines.
pub fn from_json_lines(text: &str) -> Result<Vec<Instruction>, Error> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Error::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use serde_json::Value;

    use crate::{
        EFlags, MemoryOperand, Mnemonic, Operand, OperandAccess, Register, Visibility,
    };

    fn create_test_instructions() -> Vec<Instruction> {
        let mut target = Operand::immediate(0x100a);
        target.visibility = Visibility::Explicit;
        target.access = OperandAccess::READ;

        let mut load = Operand::memory(MemoryOperand {
            size: 8,
            segment: Register::Ds,
            base: Register::None,
            index: Register::None,
            scale: 1,
            displacement: 0x2017,
        });
        load.visibility = Visibility::Explicit;
        load.access = OperandAccess::READ;

        let mut dest = Operand::register(Register::Rax);
        dest.visibility = Visibility::Explicit;
        dest.access = OperandAccess::WRITE;

        vec![
            Instruction {
                address: 0x1000,
                size: 5,
                mnemonic: Mnemonic::Call,
                operands: vec![target],
                flags_read: EFlags::empty(),
                flags_write: EFlags::empty(),
            },
            Instruction {
                address: 0x2000,
                size: 7,
                mnemonic: Mnemonic::Mov,
                operands: vec![dest, load, Operand::none()],
                flags_read: EFlags::CF,
                flags_write: EFlags::CF | EFlags::ZF,
            },
        ]
    }

    #[test]
    fn test_json_shape() {
        let json = to_json(&create_test_instructions()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["address"], 0x1000);
        assert_eq!(value[0]["mnemonic"], "call");
        assert_eq!(value[0]["operands"][0]["type"], "immediate");
        assert_eq!(value[0]["operands"][0]["value"], 0x100a);
        assert_eq!(value[1]["operands"][0]["type"], "register");
        assert_eq!(value[1]["operands"][0]["reg"], "rax");
        assert_eq!(value[1]["operands"][1]["type"], "memory");
        assert_eq!(value[1]["operands"][1]["base"], "none");
        assert_eq!(value[1]["operands"][1]["displacement"], 0x2017);
        assert_eq!(value[1]["operands"][2]["type"], "none");
        assert_eq!(value[1]["operands"][2]["visibility"], "invalid");
    }

    #[test]
    fn test_json_lines_file() {
        let instructions = create_test_instructions();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        write_json_lines(fs::File::create(&path).unwrap(), &instructions).unwrap();
        let text = fs::read_to_string(&path).unwrap();

        assert_eq!(text.lines().count(), instructions.len());
        assert_eq!(from_json_lines(&text).unwrap(), instructions);
    }

    #[test]
    fn test_bad_json_line() {
        let err = from_json_lines("{\"address\": 1}\n").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
