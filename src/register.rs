//! The register catalog and its fixed mapping from raw decoder register ids.

use std::fmt;

use capstone::arch::x86::X86Reg;
use serde::{Deserialize, Serialize};

use crate::raw::RawRegister;

macro_rules! registers {
    ($($variant:ident => $cs:ident $name:literal;)*) => {
        /// An x86 register, physical or pseudo (`eiz`/`riz`, `eflags`, `fpsw`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum Register {
            #[default]
            None,
            $($variant,)*
        }

        impl Register {
            /// Translate a raw decoder register id. Ids outside the catalog become `None`.
            pub fn from_raw(raw: RawRegister) -> Register {
                $(
                    if raw.0 == X86Reg::$cs as u16 {
                        return Register::$variant;
                    }
                )*
                Register::None
            }

            /// The raw decoder id of this register.
            pub fn to_raw(self) -> RawRegister {
                match self {
                    Register::None => RawRegister::INVALID,
                    $(Register::$variant => RawRegister(X86Reg::$cs as u16),)*
                }
            }

            /// Lowercase assembler name; `"none"` for the empty register.
            pub fn name(self) -> &'static str {
                match self {
                    Register::None => "none",
                    $(Register::$variant => $name,)*
                }
            }
        }
    };
}

registers! {
    Ah       => X86_REG_AH       "ah";
    Al       => X86_REG_AL       "al";
    Ax       => X86_REG_AX       "ax";
    Bh       => X86_REG_BH       "bh";
    Bl       => X86_REG_BL       "bl";
    Bp       => X86_REG_BP       "bp";
    Bpl      => X86_REG_BPL      "bpl";
    Bx       => X86_REG_BX       "bx";
    Ch       => X86_REG_CH       "ch";
    Cl       => X86_REG_CL       "cl";
    Cs       => X86_REG_CS       "cs";
    Cx       => X86_REG_CX       "cx";
    Dh       => X86_REG_DH       "dh";
    Di       => X86_REG_DI       "di";
    Dil      => X86_REG_DIL      "dil";
    Dl       => X86_REG_DL       "dl";
    Ds       => X86_REG_DS       "ds";
    Dx       => X86_REG_DX       "dx";
    Eax      => X86_REG_EAX      "eax";
    Ebp      => X86_REG_EBP      "ebp";
    Ebx      => X86_REG_EBX      "ebx";
    Ecx      => X86_REG_ECX      "ecx";
    Edi      => X86_REG_EDI      "edi";
    Edx      => X86_REG_EDX      "edx";
    Eflags   => X86_REG_EFLAGS   "eflags";
    Eip      => X86_REG_EIP      "eip";
    Eiz      => X86_REG_EIZ      "eiz";
    Es       => X86_REG_ES       "es";
    Esi      => X86_REG_ESI      "esi";
    Esp      => X86_REG_ESP      "esp";
    Fpsw     => X86_REG_FPSW     "fpsw";
    Fs       => X86_REG_FS       "fs";
    Gs       => X86_REG_GS       "gs";
    Ip       => X86_REG_IP       "ip";
    Rax      => X86_REG_RAX      "rax";
    Rbp      => X86_REG_RBP      "rbp";
    Rbx      => X86_REG_RBX      "rbx";
    Rcx      => X86_REG_RCX      "rcx";
    Rdi      => X86_REG_RDI      "rdi";
    Rdx      => X86_REG_RDX      "rdx";
    Rip      => X86_REG_RIP      "rip";
    Riz      => X86_REG_RIZ      "riz";
    Rsi      => X86_REG_RSI      "rsi";
    Rsp      => X86_REG_RSP      "rsp";
    Si       => X86_REG_SI       "si";
    Sil      => X86_REG_SIL      "sil";
    Sp       => X86_REG_SP       "sp";
    Spl      => X86_REG_SPL      "spl";
    Ss       => X86_REG_SS       "ss";
    Cr0      => X86_REG_CR0      "cr0";
    Cr1      => X86_REG_CR1      "cr1";
    Cr2      => X86_REG_CR2      "cr2";
    Cr3      => X86_REG_CR3      "cr3";
    Cr4      => X86_REG_CR4      "cr4";
    Cr5      => X86_REG_CR5      "cr5";
    Cr6      => X86_REG_CR6      "cr6";
    Cr7      => X86_REG_CR7      "cr7";
    Cr8      => X86_REG_CR8      "cr8";
    Cr9      => X86_REG_CR9      "cr9";
    Cr10     => X86_REG_CR10     "cr10";
    Cr11     => X86_REG_CR11     "cr11";
    Cr12     => X86_REG_CR12     "cr12";
    Cr13     => X86_REG_CR13     "cr13";
    Cr14     => X86_REG_CR14     "cr14";
    Cr15     => X86_REG_CR15     "cr15";
    Dr0      => X86_REG_DR0      "dr0";
    Dr1      => X86_REG_DR1      "dr1";
    Dr2      => X86_REG_DR2      "dr2";
    Dr3      => X86_REG_DR3      "dr3";
    Dr4      => X86_REG_DR4      "dr4";
    Dr5      => X86_REG_DR5      "dr5";
    Dr6      => X86_REG_DR6      "dr6";
    Dr7      => X86_REG_DR7      "dr7";
    Dr8      => X86_REG_DR8      "dr8";
    Dr9      => X86_REG_DR9      "dr9";
    Dr10     => X86_REG_DR10     "dr10";
    Dr11     => X86_REG_DR11     "dr11";
    Dr12     => X86_REG_DR12     "dr12";
    Dr13     => X86_REG_DR13     "dr13";
    Dr14     => X86_REG_DR14     "dr14";
    Dr15     => X86_REG_DR15     "dr15";
    Fp0      => X86_REG_FP0      "fp0";
    Fp1      => X86_REG_FP1      "fp1";
    Fp2      => X86_REG_FP2      "fp2";
    Fp3      => X86_REG_FP3      "fp3";
    Fp4      => X86_REG_FP4      "fp4";
    Fp5      => X86_REG_FP5      "fp5";
    Fp6      => X86_REG_FP6      "fp6";
    Fp7      => X86_REG_FP7      "fp7";
    K0       => X86_REG_K0       "k0";
    K1       => X86_REG_K1       "k1";
    K2       => X86_REG_K2       "k2";
    K3       => X86_REG_K3       "k3";
    K4       => X86_REG_K4       "k4";
    K5       => X86_REG_K5       "k5";
    K6       => X86_REG_K6       "k6";
    K7       => X86_REG_K7       "k7";
    Mm0      => X86_REG_MM0      "mm0";
    Mm1      => X86_REG_MM1      "mm1";
    Mm2      => X86_REG_MM2      "mm2";
    Mm3      => X86_REG_MM3      "mm3";
    Mm4      => X86_REG_MM4      "mm4";
    Mm5      => X86_REG_MM5      "mm5";
    Mm6      => X86_REG_MM6      "mm6";
    Mm7      => X86_REG_MM7      "mm7";
    R8       => X86_REG_R8       "r8";
    R9       => X86_REG_R9       "r9";
    R10      => X86_REG_R10      "r10";
    R11      => X86_REG_R11      "r11";
    R12      => X86_REG_R12      "r12";
    R13      => X86_REG_R13      "r13";
    R14      => X86_REG_R14      "r14";
    R15      => X86_REG_R15      "r15";
    St0      => X86_REG_ST0      "st0";
    St1      => X86_REG_ST1      "st1";
    St2      => X86_REG_ST2      "st2";
    St3      => X86_REG_ST3      "st3";
    St4      => X86_REG_ST4      "st4";
    St5      => X86_REG_ST5      "st5";
    St6      => X86_REG_ST6      "st6";
    St7      => X86_REG_ST7      "st7";
    Xmm0     => X86_REG_XMM0     "xmm0";
    Xmm1     => X86_REG_XMM1     "xmm1";
    Xmm2     => X86_REG_XMM2     "xmm2";
    Xmm3     => X86_REG_XMM3     "xmm3";
    Xmm4     => X86_REG_XMM4     "xmm4";
    Xmm5     => X86_REG_XMM5     "xmm5";
    Xmm6     => X86_REG_XMM6     "xmm6";
    Xmm7     => X86_REG_XMM7     "xmm7";
    Xmm8     => X86_REG_XMM8     "xmm8";
    Xmm9     => X86_REG_XMM9     "xmm9";
    Xmm10    => X86_REG_XMM10    "xmm10";
    Xmm11    => X86_REG_XMM11    "xmm11";
    Xmm12    => X86_REG_XMM12    "xmm12";
    Xmm13    => X86_REG_XMM13    "xmm13";
    Xmm14    => X86_REG_XMM14    "xmm14";
    Xmm15    => X86_REG_XMM15    "xmm15";
    Xmm16    => X86_REG_XMM16    "xmm16";
    Xmm17    => X86_REG_XMM17    "xmm17";
    Xmm18    => X86_REG_XMM18    "xmm18";
    Xmm19    => X86_REG_XMM19    "xmm19";
    Xmm20    => X86_REG_XMM20    "xmm20";
    Xmm21    => X86_REG_XMM21    "xmm21";
    Xmm22    => X86_REG_XMM22    "xmm22";
    Xmm23    => X86_REG_XMM23    "xmm23";
    Xmm24    => X86_REG_XMM24    "xmm24";
    Xmm25    => X86_REG_XMM25    "xmm25";
    Xmm26    => X86_REG_XMM26    "xmm26";
    Xmm27    => X86_REG_XMM27    "xmm27";
    Xmm28    => X86_REG_XMM28    "xmm28";
    Xmm29    => X86_REG_XMM29    "xmm29";
    Xmm30    => X86_REG_XMM30    "xmm30";
    Xmm31    => X86_REG_XMM31    "xmm31";
    Ymm0     => X86_REG_YMM0     "ymm0";
    Ymm1     => X86_REG_YMM1     "ymm1";
    Ymm2     => X86_REG_YMM2     "ymm2";
    Ymm3     => X86_REG_YMM3     "ymm3";
    Ymm4     => X86_REG_YMM4     "ymm4";
    Ymm5     => X86_REG_YMM5     "ymm5";
    Ymm6     => X86_REG_YMM6     "ymm6";
    Ymm7     => X86_REG_YMM7     "ymm7";
    Ymm8     => X86_REG_YMM8     "ymm8";
    Ymm9     => X86_REG_YMM9     "ymm9";
    Ymm10    => X86_REG_YMM10    "ymm10";
    Ymm11    => X86_REG_YMM11    "ymm11";
    Ymm12    => X86_REG_YMM12    "ymm12";
    Ymm13    => X86_REG_YMM13    "ymm13";
    Ymm14    => X86_REG_YMM14    "ymm14";
    Ymm15    => X86_REG_YMM15    "ymm15";
    Ymm16    => X86_REG_YMM16    "ymm16";
    Ymm17    => X86_REG_YMM17    "ymm17";
    Ymm18    => X86_REG_YMM18    "ymm18";
    Ymm19    => X86_REG_YMM19    "ymm19";
    Ymm20    => X86_REG_YMM20    "ymm20";
    Ymm21    => X86_REG_YMM21    "ymm21";
    Ymm22    => X86_REG_YMM22    "ymm22";
    Ymm23    => X86_REG_YMM23    "ymm23";
    Ymm24    => X86_REG_YMM24    "ymm24";
    Ymm25    => X86_REG_YMM25    "ymm25";
    Ymm26    => X86_REG_YMM26    "ymm26";
    Ymm27    => X86_REG_YMM27    "ymm27";
    Ymm28    => X86_REG_YMM28    "ymm28";
    Ymm29    => X86_REG_YMM29    "ymm29";
    Ymm30    => X86_REG_YMM30    "ymm30";
    Ymm31    => X86_REG_YMM31    "ymm31";
    Zmm0     => X86_REG_ZMM0     "zmm0";
    Zmm1     => X86_REG_ZMM1     "zmm1";
    Zmm2     => X86_REG_ZMM2     "zmm2";
    Zmm3     => X86_REG_ZMM3     "zmm3";
    Zmm4     => X86_REG_ZMM4     "zmm4";
    Zmm5     => X86_REG_ZMM5     "zmm5";
    Zmm6     => X86_REG_ZMM6     "zmm6";
    Zmm7     => X86_REG_ZMM7     "zmm7";
    Zmm8     => X86_REG_ZMM8     "zmm8";
    Zmm9     => X86_REG_ZMM9     "zmm9";
    Zmm10    => X86_REG_ZMM10    "zmm10";
    Zmm11    => X86_REG_ZMM11    "zmm11";
    Zmm12    => X86_REG_ZMM12    "zmm12";
    Zmm13    => X86_REG_ZMM13    "zmm13";
    Zmm14    => X86_REG_ZMM14    "zmm14";
    Zmm15    => X86_REG_ZMM15    "zmm15";
    Zmm16    => X86_REG_ZMM16    "zmm16";
    Zmm17    => X86_REG_ZMM17    "zmm17";
    Zmm18    => X86_REG_ZMM18    "zmm18";
    Zmm19    => X86_REG_ZMM19    "zmm19";
    Zmm20    => X86_REG_ZMM20    "zmm20";
    Zmm21    => X86_REG_ZMM21    "zmm21";
    Zmm22    => X86_REG_ZMM22    "zmm22";
    Zmm23    => X86_REG_ZMM23    "zmm23";
    Zmm24    => X86_REG_ZMM24    "zmm24";
    Zmm25    => X86_REG_ZMM25    "zmm25";
    Zmm26    => X86_REG_ZMM26    "zmm26";
    Zmm27    => X86_REG_ZMM27    "zmm27";
    Zmm28    => X86_REG_ZMM28    "zmm28";
    Zmm29    => X86_REG_ZMM29    "zmm29";
    Zmm30    => X86_REG_ZMM30    "zmm30";
    Zmm31    => X86_REG_ZMM31    "zmm31";
    R8b      => X86_REG_R8B      "r8b";
    R9b      => X86_REG_R9B      "r9b";
    R10b     => X86_REG_R10B     "r10b";
    R11b     => X86_REG_R11B     "r11b";
    R12b     => X86_REG_R12B     "r12b";
    R13b     => X86_REG_R13B     "r13b";
    R14b     => X86_REG_R14B     "r14b";
    R15b     => X86_REG_R15B     "r15b";
    R8d      => X86_REG_R8D      "r8d";
    R9d      => X86_REG_R9D      "r9d";
    R10d     => X86_REG_R10D     "r10d";
    R11d     => X86_REG_R11D     "r11d";
    R12d     => X86_REG_R12D     "r12d";
    R13d     => X86_REG_R13D     "r13d";
    R14d     => X86_REG_R14D     "r14d";
    R15d     => X86_REG_R15D     "r15d";
    R8w      => X86_REG_R8W      "r8w";
    R9w      => X86_REG_R9W      "r9w";
    R10w     => X86_REG_R10W     "r10w";
    R11w     => X86_REG_R11W     "r11w";
    R12w     => X86_REG_R12W     "r12w";
    R13w     => X86_REG_R13W     "r13w";
    R14w     => X86_REG_R14W     "r14w";
    R15w     => X86_REG_R15W     "r15w";
    Bnd0     => X86_REG_BND0     "bnd0";
    Bnd1     => X86_REG_BND1     "bnd1";
    Bnd2     => X86_REG_BND2     "bnd2";
    Bnd3     => X86_REG_BND3     "bnd3";
}

impl Register {
    /// RIP or EIP: the forms that can appear as a memory base.
    pub fn is_instruction_pointer(self) -> bool {
        matches!(self, Register::Rip | Register::Eip)
    }

    pub fn is_none(self) -> bool {
        self == Register::None
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Register::Rax, "rax")]
    #[case(Register::R8d, "r8d")]
    #[case(Register::Xmm15, "xmm15")]
    #[case(Register::Rip, "rip")]
    #[case(Register::None, "none")]
    fn test_names(#[case] reg: Register, #[case] name: &str) {
        assert_eq!(reg.name(), name);
        assert_eq!(reg.to_string(), name);
    }

    #[test]
    fn test_mapping_is_one_to_one() {
        for reg in [
            Register::Al,
            Register::Eax,
            Register::Rsp,
            Register::R15b,
            Register::Cs,
            Register::Cr3,
            Register::St0,
            Register::K7,
            Register::Zmm31,
            Register::Bnd3,
            Register::Eflags,
        ] {
            assert!(!reg.to_raw().is_invalid());
            assert_eq!(Register::from_raw(reg.to_raw()), reg);
        }
    }

    #[test]
    fn test_unknown_id_maps_to_none() {
        assert_eq!(Register::from_raw(RawRegister::INVALID), Register::None);
        assert_eq!(Register::from_raw(RawRegister(u16::MAX)), Register::None);
    }

    #[test]
    fn test_instruction_pointer_forms() {
        assert!(Register::Rip.is_instruction_pointer());
        assert!(Register::Eip.is_instruction_pointer());
        assert!(!Register::Ip.is_instruction_pointer());
        assert!(!Register::Rax.is_instruction_pointer());
    }
}
