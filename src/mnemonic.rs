//! The instruction catalog: every x86 instruction the byte decoder can name.

use std::fmt;

use capstone::arch::x86::X86Insn;
use serde::{Deserialize, Serialize};

macro_rules! mnemonics {
    ($($variant:ident => $cs:ident $name:literal;)*) => {
        /// Instruction identity, one entry per decoder catalog id.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[derive(Serialize, Deserialize)]
        #[repr(u32)]
        pub enum Mnemonic {
            #[default]
            #[serde(rename = "invalid")]
            Invalid = X86Insn::X86_INS_INVALID as u32,
            $(
                #[serde(rename = $name)]
                $variant = X86Insn::$cs as u32,
            )*
        }

        /// Catalog in id order, so an id indexes its own entry.
        static CATALOG: &[Mnemonic] = &[Mnemonic::Invalid, $(Mnemonic::$variant,)*];

        impl Mnemonic {
            /// Lowercase mnemonic text (e.g. "call", "mov").
            pub fn name(self) -> &'static str {
                match self {
                    Mnemonic::Invalid => "invalid",
                    $(Mnemonic::$variant => $name,)*
                }
            }
        }
    };
}

mnemonics! {
    Aaa               => X86_INS_AAA               "aaa";
    Aad               => X86_INS_AAD               "aad";
    Aam               => X86_INS_AAM               "aam";
    Aas               => X86_INS_AAS               "aas";
    Fabs              => X86_INS_FABS              "fabs";
    Adc               => X86_INS_ADC               "adc";
    Adcx              => X86_INS_ADCX              "adcx";
    Add               => X86_INS_ADD               "add";
    Addpd             => X86_INS_ADDPD             "addpd";
    Addps             => X86_INS_ADDPS             "addps";
    Addsd             => X86_INS_ADDSD             "addsd";
    Addss             => X86_INS_ADDSS             "addss";
    Addsubpd          => X86_INS_ADDSUBPD          "addsubpd";
    Addsubps          => X86_INS_ADDSUBPS          "addsubps";
    Fadd              => X86_INS_FADD              "fadd";
    Fiadd             => X86_INS_FIADD             "fiadd";
    Adox              => X86_INS_ADOX              "adox";
    Aesdeclast        => X86_INS_AESDECLAST        "aesdeclast";
    Aesdec            => X86_INS_AESDEC            "aesdec";
    Aesenclast        => X86_INS_AESENCLAST        "aesenclast";
    Aesenc            => X86_INS_AESENC            "aesenc";
    Aesimc            => X86_INS_AESIMC            "aesimc";
    Aeskeygenassist   => X86_INS_AESKEYGENASSIST   "aeskeygenassist";
    And               => X86_INS_AND               "and";
    Andn              => X86_INS_ANDN              "andn";
    Andnpd            => X86_INS_ANDNPD            "andnpd";
    Andnps            => X86_INS_ANDNPS            "andnps";
    Andpd             => X86_INS_ANDPD             "andpd";
    Andps             => X86_INS_ANDPS             "andps";
    Arpl              => X86_INS_ARPL              "arpl";
    Bextr             => X86_INS_BEXTR             "bextr";
    Blcfill           => X86_INS_BLCFILL           "blcfill";
    Blci              => X86_INS_BLCI              "blci";
    Blcic             => X86_INS_BLCIC             "blcic";
    Blcmsk            => X86_INS_BLCMSK            "blcmsk";
    Blcs              => X86_INS_BLCS              "blcs";
    Blendpd           => X86_INS_BLENDPD           "blendpd";
    Blendps           => X86_INS_BLENDPS           "blendps";
    Blendvpd          => X86_INS_BLENDVPD          "blendvpd";
    Blendvps          => X86_INS_BLENDVPS          "blendvps";
    Blsfill           => X86_INS_BLSFILL           "blsfill";
    Blsi              => X86_INS_BLSI              "blsi";
    Blsic             => X86_INS_BLSIC             "blsic";
    Blsmsk            => X86_INS_BLSMSK            "blsmsk";
    Blsr              => X86_INS_BLSR              "blsr";
    Bndcl             => X86_INS_BNDCL             "bndcl";
    Bndcn             => X86_INS_BNDCN             "bndcn";
    Bndcu             => X86_INS_BNDCU             "bndcu";
    Bndldx            => X86_INS_BNDLDX            "bndldx";
    Bndmk             => X86_INS_BNDMK             "bndmk";
    Bndmov            => X86_INS_BNDMOV            "bndmov";
    Bndstx            => X86_INS_BNDSTX            "bndstx";
    Bound             => X86_INS_BOUND             "bound";
    Bsf               => X86_INS_BSF               "bsf";
    Bsr               => X86_INS_BSR               "bsr";
    Bswap             => X86_INS_BSWAP             "bswap";
    Bt                => X86_INS_BT                "bt";
    Btc               => X86_INS_BTC               "btc";
    Btr               => X86_INS_BTR               "btr";
    Bts               => X86_INS_BTS               "bts";
    Bzhi              => X86_INS_BZHI              "bzhi";
    Call              => X86_INS_CALL              "call";
    Cbw               => X86_INS_CBW               "cbw";
    Cdq               => X86_INS_CDQ               "cdq";
    Cdqe              => X86_INS_CDQE              "cdqe";
    Fchs              => X86_INS_FCHS              "fchs";
    Clac              => X86_INS_CLAC              "clac";
    Clc               => X86_INS_CLC               "clc";
    Cld               => X86_INS_CLD               "cld";
    Cldemote          => X86_INS_CLDEMOTE          "cldemote";
    Clflush           => X86_INS_CLFLUSH           "clflush";
    Clflushopt        => X86_INS_CLFLUSHOPT        "clflushopt";
    Clgi              => X86_INS_CLGI              "clgi";
    Cli               => X86_INS_CLI               "cli";
    Clrssbsy          => X86_INS_CLRSSBSY          "clrssbsy";
    Clts              => X86_INS_CLTS              "clts";
    Clwb              => X86_INS_CLWB              "clwb";
    Clzero            => X86_INS_CLZERO            "clzero";
    Cmc               => X86_INS_CMC               "cmc";
    Cmova             => X86_INS_CMOVA             "cmova";
    Cmovae            => X86_INS_CMOVAE            "cmovae";
    Cmovb             => X86_INS_CMOVB             "cmovb";
    Cmovbe            => X86_INS_CMOVBE            "cmovbe";
    Fcmovbe           => X86_INS_FCMOVBE           "fcmovbe";
    Fcmovb            => X86_INS_FCMOVB            "fcmovb";
    Cmove             => X86_INS_CMOVE             "cmove";
    Fcmove            => X86_INS_FCMOVE            "fcmove";
    Cmovg             => X86_INS_CMOVG             "cmovg";
    Cmovge            => X86_INS_CMOVGE            "cmovge";
    Cmovl             => X86_INS_CMOVL             "cmovl";
    Cmovle            => X86_INS_CMOVLE            "cmovle";
    Fcmovnbe          => X86_INS_FCMOVNBE          "fcmovnbe";
    Fcmovnb           => X86_INS_FCMOVNB           "fcmovnb";
    Cmovne            => X86_INS_CMOVNE            "cmovne";
    Fcmovne           => X86_INS_FCMOVNE           "fcmovne";
    Cmovno            => X86_INS_CMOVNO            "cmovno";
    Cmovnp            => X86_INS_CMOVNP            "cmovnp";
    Fcmovnu           => X86_INS_FCMOVNU           "fcmovnu";
    Fcmovnp           => X86_INS_FCMOVNP           "fcmovnp";
    Cmovns            => X86_INS_CMOVNS            "cmovns";
    Cmovo             => X86_INS_CMOVO             "cmovo";
    Cmovp             => X86_INS_CMOVP             "cmovp";
    Fcmovu            => X86_INS_FCMOVU            "fcmovu";
    Cmovs             => X86_INS_CMOVS             "cmovs";
    Cmp               => X86_INS_CMP               "cmp";
    Cmppd             => X86_INS_CMPPD             "cmppd";
    Cmpps             => X86_INS_CMPPS             "cmpps";
    Cmpsb             => X86_INS_CMPSB             "cmpsb";
    Cmpsd             => X86_INS_CMPSD             "cmpsd";
    Cmpsq             => X86_INS_CMPSQ             "cmpsq";
    Cmpss             => X86_INS_CMPSS             "cmpss";
    Cmpsw             => X86_INS_CMPSW             "cmpsw";
    Cmpxchg16b        => X86_INS_CMPXCHG16B        "cmpxchg16b";
    Cmpxchg           => X86_INS_CMPXCHG           "cmpxchg";
    Cmpxchg8b         => X86_INS_CMPXCHG8B         "cmpxchg8b";
    Comisd            => X86_INS_COMISD            "comisd";
    Comiss            => X86_INS_COMISS            "comiss";
    Fcomp             => X86_INS_FCOMP             "fcomp";
    Fcompi            => X86_INS_FCOMPI            "fcompi";
    Fcomi             => X86_INS_FCOMI             "fcomi";
    Fcom              => X86_INS_FCOM              "fcom";
    Fcos              => X86_INS_FCOS              "fcos";
    Cpuid             => X86_INS_CPUID             "cpuid";
    Cqo               => X86_INS_CQO               "cqo";
    Crc32             => X86_INS_CRC32             "crc32";
    Cvtdq2pd          => X86_INS_CVTDQ2PD          "cvtdq2pd";
    Cvtdq2ps          => X86_INS_CVTDQ2PS          "cvtdq2ps";
    Cvtpd2dq          => X86_INS_CVTPD2DQ          "cvtpd2dq";
    Cvtpd2ps          => X86_INS_CVTPD2PS          "cvtpd2ps";
    Cvtps2dq          => X86_INS_CVTPS2DQ          "cvtps2dq";
    Cvtps2pd          => X86_INS_CVTPS2PD          "cvtps2pd";
    Cvtsd2si          => X86_INS_CVTSD2SI          "cvtsd2si";
    Cvtsd2ss          => X86_INS_CVTSD2SS          "cvtsd2ss";
    Cvtsi2sd          => X86_INS_CVTSI2SD          "cvtsi2sd";
    Cvtsi2ss          => X86_INS_CVTSI2SS          "cvtsi2ss";
    Cvtss2sd          => X86_INS_CVTSS2SD          "cvtss2sd";
    Cvtss2si          => X86_INS_CVTSS2SI          "cvtss2si";
    Cvttpd2dq         => X86_INS_CVTTPD2DQ         "cvttpd2dq";
    Cvttps2dq         => X86_INS_CVTTPS2DQ         "cvttps2dq";
    Cvttsd2si         => X86_INS_CVTTSD2SI         "cvttsd2si";
    Cvttss2si         => X86_INS_CVTTSS2SI         "cvttss2si";
    Cwd               => X86_INS_CWD               "cwd";
    Cwde              => X86_INS_CWDE              "cwde";
    Daa               => X86_INS_DAA               "daa";
    Das               => X86_INS_DAS               "das";
    Data16            => X86_INS_DATA16            "data16";
    Dec               => X86_INS_DEC               "dec";
    Div               => X86_INS_DIV               "div";
    Divpd             => X86_INS_DIVPD             "divpd";
    Divps             => X86_INS_DIVPS             "divps";
    Fdivr             => X86_INS_FDIVR             "fdivr";
    Fidivr            => X86_INS_FIDIVR            "fidivr";
    Fdivrp            => X86_INS_FDIVRP            "fdivrp";
    Divsd             => X86_INS_DIVSD             "divsd";
    Divss             => X86_INS_DIVSS             "divss";
    Fdiv              => X86_INS_FDIV              "fdiv";
    Fidiv             => X86_INS_FIDIV             "fidiv";
    Fdivp             => X86_INS_FDIVP             "fdivp";
    Dppd              => X86_INS_DPPD              "dppd";
    Dpps              => X86_INS_DPPS              "dpps";
    Encls             => X86_INS_ENCLS             "encls";
    Enclu             => X86_INS_ENCLU             "enclu";
    Enclv             => X86_INS_ENCLV             "enclv";
    Endbr32           => X86_INS_ENDBR32           "endbr32";
    Endbr64           => X86_INS_ENDBR64           "endbr64";
    Enter             => X86_INS_ENTER             "enter";
    Extractps         => X86_INS_EXTRACTPS         "extractps";
    Extrq             => X86_INS_EXTRQ             "extrq";
    F2xm1             => X86_INS_F2XM1             "f2xm1";
    Lcall             => X86_INS_LCALL             "lcall";
    Ljmp              => X86_INS_LJMP              "ljmp";
    Jmp               => X86_INS_JMP               "jmp";
    Fbld              => X86_INS_FBLD              "fbld";
    Fbstp             => X86_INS_FBSTP             "fbstp";
    Fcompp            => X86_INS_FCOMPP            "fcompp";
    Fdecstp           => X86_INS_FDECSTP           "fdecstp";
    Fdisi8087Nop      => X86_INS_FDISI8087_NOP     "fdisi8087_nop";
    Femms             => X86_INS_FEMMS             "femms";
    Feni8087Nop       => X86_INS_FENI8087_NOP      "feni8087_nop";
    Ffree             => X86_INS_FFREE             "ffree";
    Ffreep            => X86_INS_FFREEP            "ffreep";
    Ficom             => X86_INS_FICOM             "ficom";
    Ficomp            => X86_INS_FICOMP            "ficomp";
    Fincstp           => X86_INS_FINCSTP           "fincstp";
    Fldcw             => X86_INS_FLDCW             "fldcw";
    Fldenv            => X86_INS_FLDENV            "fldenv";
    Fldl2e            => X86_INS_FLDL2E            "fldl2e";
    Fldl2t            => X86_INS_FLDL2T            "fldl2t";
    Fldlg2            => X86_INS_FLDLG2            "fldlg2";
    Fldln2            => X86_INS_FLDLN2            "fldln2";
    Fldpi             => X86_INS_FLDPI             "fldpi";
    Fnclex            => X86_INS_FNCLEX            "fnclex";
    Fninit            => X86_INS_FNINIT            "fninit";
    Fnop              => X86_INS_FNOP              "fnop";
    Fnstcw            => X86_INS_FNSTCW            "fnstcw";
    Fnstsw            => X86_INS_FNSTSW            "fnstsw";
    Fpatan            => X86_INS_FPATAN            "fpatan";
    Fstpnce           => X86_INS_FSTPNCE           "fstpnce";
    Fprem             => X86_INS_FPREM             "fprem";
    Fprem1            => X86_INS_FPREM1            "fprem1";
    Fptan             => X86_INS_FPTAN             "fptan";
    Frndint           => X86_INS_FRNDINT           "frndint";
    Frstor            => X86_INS_FRSTOR            "frstor";
    Fnsave            => X86_INS_FNSAVE            "fnsave";
    Fscale            => X86_INS_FSCALE            "fscale";
    Fsetpm            => X86_INS_FSETPM            "fsetpm";
    Fsincos           => X86_INS_FSINCOS           "fsincos";
    Fnstenv           => X86_INS_FNSTENV           "fnstenv";
    Fxam              => X86_INS_FXAM              "fxam";
    Fxrstor           => X86_INS_FXRSTOR           "fxrstor";
    Fxrstor64         => X86_INS_FXRSTOR64         "fxrstor64";
    Fxsave            => X86_INS_FXSAVE            "fxsave";
    Fxsave64          => X86_INS_FXSAVE64          "fxsave64";
    Fxtract           => X86_INS_FXTRACT           "fxtract";
    Fyl2x             => X86_INS_FYL2X             "fyl2x";
    Fyl2xp1           => X86_INS_FYL2XP1           "fyl2xp1";
    Getsec            => X86_INS_GETSEC            "getsec";
    Gf2p8affineinvqb  => X86_INS_GF2P8AFFINEINVQB  "gf2p8affineinvqb";
    Gf2p8affineqb     => X86_INS_GF2P8AFFINEQB     "gf2p8affineqb";
    Gf2p8mulb         => X86_INS_GF2P8MULB         "gf2p8mulb";
    Haddpd            => X86_INS_HADDPD            "haddpd";
    Haddps            => X86_INS_HADDPS            "haddps";
    Hlt               => X86_INS_HLT               "hlt";
    Hsubpd            => X86_INS_HSUBPD            "hsubpd";
    Hsubps            => X86_INS_HSUBPS            "hsubps";
    Idiv              => X86_INS_IDIV              "idiv";
    Fild              => X86_INS_FILD              "fild";
    Imul              => X86_INS_IMUL              "imul";
    In                => X86_INS_IN                "in";
    Inc               => X86_INS_INC               "inc";
    Incsspd           => X86_INS_INCSSPD           "incsspd";
    Incsspq           => X86_INS_INCSSPQ           "incsspq";
    Insb              => X86_INS_INSB              "insb";
    Insertps          => X86_INS_INSERTPS          "insertps";
    Insertq           => X86_INS_INSERTQ           "insertq";
    Insd              => X86_INS_INSD              "insd";
    Insw              => X86_INS_INSW              "insw";
    Int               => X86_INS_INT               "int";
    Int1              => X86_INS_INT1              "int1";
    Int3              => X86_INS_INT3              "int3";
    Into              => X86_INS_INTO              "into";
    Invd              => X86_INS_INVD              "invd";
    Invept            => X86_INS_INVEPT            "invept";
    Invlpg            => X86_INS_INVLPG            "invlpg";
    Invlpga           => X86_INS_INVLPGA           "invlpga";
    Invpcid           => X86_INS_INVPCID           "invpcid";
    Invvpid           => X86_INS_INVVPID           "invvpid";
    Iret              => X86_INS_IRET              "iret";
    Iretd             => X86_INS_IRETD             "iretd";
    Iretq             => X86_INS_IRETQ             "iretq";
    Fisttp            => X86_INS_FISTTP            "fisttp";
    Fist              => X86_INS_FIST              "fist";
    Fistp             => X86_INS_FISTP             "fistp";
    Jae               => X86_INS_JAE               "jae";
    Ja                => X86_INS_JA                "ja";
    Jbe               => X86_INS_JBE               "jbe";
    Jb                => X86_INS_JB                "jb";
    Jcxz              => X86_INS_JCXZ              "jcxz";
    Jecxz             => X86_INS_JECXZ             "jecxz";
    Je                => X86_INS_JE                "je";
    Jge               => X86_INS_JGE               "jge";
    Jg                => X86_INS_JG                "jg";
    Jle               => X86_INS_JLE               "jle";
    Jl                => X86_INS_JL                "jl";
    Jne               => X86_INS_JNE               "jne";
    Jno               => X86_INS_JNO               "jno";
    Jnp               => X86_INS_JNP               "jnp";
    Jns               => X86_INS_JNS               "jns";
    Jo                => X86_INS_JO                "jo";
    Jp                => X86_INS_JP                "jp";
    Jrcxz             => X86_INS_JRCXZ             "jrcxz";
    Js                => X86_INS_JS                "js";
    Kaddb             => X86_INS_KADDB             "kaddb";
    Kaddd             => X86_INS_KADDD             "kaddd";
    Kaddq             => X86_INS_KADDQ             "kaddq";
    Kaddw             => X86_INS_KADDW             "kaddw";
    Kandb             => X86_INS_KANDB             "kandb";
    Kandd             => X86_INS_KANDD             "kandd";
    Kandnb            => X86_INS_KANDNB            "kandnb";
    Kandnd            => X86_INS_KANDND            "kandnd";
    Kandnq            => X86_INS_KANDNQ            "kandnq";
    Kandnw            => X86_INS_KANDNW            "kandnw";
    Kandq             => X86_INS_KANDQ             "kandq";
    Kandw             => X86_INS_KANDW             "kandw";
    Kmovb             => X86_INS_KMOVB             "kmovb";
    Kmovd             => X86_INS_KMOVD             "kmovd";
    Kmovq             => X86_INS_KMOVQ             "kmovq";
    Kmovw             => X86_INS_KMOVW             "kmovw";
    Knotb             => X86_INS_KNOTB             "knotb";
    Knotd             => X86_INS_KNOTD             "knotd";
    Knotq             => X86_INS_KNOTQ             "knotq";
    Knotw             => X86_INS_KNOTW             "knotw";
    Korb              => X86_INS_KORB              "korb";
    Kord              => X86_INS_KORD              "kord";
    Korq              => X86_INS_KORQ              "korq";
    Kortestb          => X86_INS_KORTESTB          "kortestb";
    Kortestd          => X86_INS_KORTESTD          "kortestd";
    Kortestq          => X86_INS_KORTESTQ          "kortestq";
    Kortestw          => X86_INS_KORTESTW          "kortestw";
    Korw              => X86_INS_KORW              "korw";
    Kshiftlb          => X86_INS_KSHIFTLB          "kshiftlb";
    Kshiftld          => X86_INS_KSHIFTLD          "kshiftld";
    Kshiftlq          => X86_INS_KSHIFTLQ          "kshiftlq";
    Kshiftlw          => X86_INS_KSHIFTLW          "kshiftlw";
    Kshiftrb          => X86_INS_KSHIFTRB          "kshiftrb";
    Kshiftrd          => X86_INS_KSHIFTRD          "kshiftrd";
    Kshiftrq          => X86_INS_KSHIFTRQ          "kshiftrq";
    Kshiftrw          => X86_INS_KSHIFTRW          "kshiftrw";
    Ktestb            => X86_INS_KTESTB            "ktestb";
    Ktestd            => X86_INS_KTESTD            "ktestd";
    Ktestq            => X86_INS_KTESTQ            "ktestq";
    Ktestw            => X86_INS_KTESTW            "ktestw";
    Kunpckbw          => X86_INS_KUNPCKBW          "kunpckbw";
    Kunpckdq          => X86_INS_KUNPCKDQ          "kunpckdq";
    Kunpckwd          => X86_INS_KUNPCKWD          "kunpckwd";
    Kxnorb            => X86_INS_KXNORB            "kxnorb";
    Kxnord            => X86_INS_KXNORD            "kxnord";
    Kxnorq            => X86_INS_KXNORQ            "kxnorq";
    Kxnorw            => X86_INS_KXNORW            "kxnorw";
    Kxorb             => X86_INS_KXORB             "kxorb";
    Kxord             => X86_INS_KXORD             "kxord";
    Kxorq             => X86_INS_KXORQ             "kxorq";
    Kxorw             => X86_INS_KXORW             "kxorw";
    Lahf              => X86_INS_LAHF              "lahf";
    Lar               => X86_INS_LAR               "lar";
    Lddqu             => X86_INS_LDDQU             "lddqu";
    Ldmxcsr           => X86_INS_LDMXCSR           "ldmxcsr";
    Lds               => X86_INS_LDS               "lds";
    Fldz              => X86_INS_FLDZ              "fldz";
    Fld1              => X86_INS_FLD1              "fld1";
    Fld               => X86_INS_FLD               "fld";
    Lea               => X86_INS_LEA               "lea";
    Leave             => X86_INS_LEAVE             "leave";
    Les               => X86_INS_LES               "les";
    Lfence            => X86_INS_LFENCE            "lfence";
    Lfs               => X86_INS_LFS               "lfs";
    Lgdt              => X86_INS_LGDT              "lgdt";
    Lgs               => X86_INS_LGS               "lgs";
    Lidt              => X86_INS_LIDT              "lidt";
    Lldt              => X86_INS_LLDT              "lldt";
    Llwpcb            => X86_INS_LLWPCB            "llwpcb";
    Lmsw              => X86_INS_LMSW              "lmsw";
    Lock              => X86_INS_LOCK              "lock";
    Lodsb             => X86_INS_LODSB             "lodsb";
    Lodsd             => X86_INS_LODSD             "lodsd";
    Lodsq             => X86_INS_LODSQ             "lodsq";
    Lodsw             => X86_INS_LODSW             "lodsw";
    Loop              => X86_INS_LOOP              "loop";
    Loope             => X86_INS_LOOPE             "loope";
    Loopne            => X86_INS_LOOPNE            "loopne";
    Retf              => X86_INS_RETF              "retf";
    Retfq             => X86_INS_RETFQ             "retfq";
    Lsl               => X86_INS_LSL               "lsl";
    Lss               => X86_INS_LSS               "lss";
    Ltr               => X86_INS_LTR               "ltr";
    Lwpins            => X86_INS_LWPINS            "lwpins";
    Lwpval            => X86_INS_LWPVAL            "lwpval";
    Lzcnt             => X86_INS_LZCNT             "lzcnt";
    Maskmovdqu        => X86_INS_MASKMOVDQU        "maskmovdqu";
    Maxpd             => X86_INS_MAXPD             "maxpd";
    Maxps             => X86_INS_MAXPS             "maxps";
    Maxsd             => X86_INS_MAXSD             "maxsd";
    Maxss             => X86_INS_MAXSS             "maxss";
    Mfence            => X86_INS_MFENCE            "mfence";
    Minpd             => X86_INS_MINPD             "minpd";
    Minps             => X86_INS_MINPS             "minps";
    Minsd             => X86_INS_MINSD             "minsd";
    Minss             => X86_INS_MINSS             "minss";
    Cvtpd2pi          => X86_INS_CVTPD2PI          "cvtpd2pi";
    Cvtpi2pd          => X86_INS_CVTPI2PD          "cvtpi2pd";
    Cvtpi2ps          => X86_INS_CVTPI2PS          "cvtpi2ps";
    Cvtps2pi          => X86_INS_CVTPS2PI          "cvtps2pi";
    Cvttpd2pi         => X86_INS_CVTTPD2PI         "cvttpd2pi";
    Cvttps2pi         => X86_INS_CVTTPS2PI         "cvttps2pi";
    Emms              => X86_INS_EMMS              "emms";
    Maskmovq          => X86_INS_MASKMOVQ          "maskmovq";
    Movd              => X86_INS_MOVD              "movd";
    Movq              => X86_INS_MOVQ              "movq";
    Movdq2q           => X86_INS_MOVDQ2Q           "movdq2q";
    Movntq            => X86_INS_MOVNTQ            "movntq";
    Movq2dq           => X86_INS_MOVQ2DQ           "movq2dq";
    Pabsb             => X86_INS_PABSB             "pabsb";
    Pabsd             => X86_INS_PABSD             "pabsd";
    Pabsw             => X86_INS_PABSW             "pabsw";
    Packssdw          => X86_INS_PACKSSDW          "packssdw";
    Packsswb          => X86_INS_PACKSSWB          "packsswb";
    Packuswb          => X86_INS_PACKUSWB          "packuswb";
    Paddb             => X86_INS_PADDB             "paddb";
    Paddd             => X86_INS_PADDD             "paddd";
    Paddq             => X86_INS_PADDQ             "paddq";
    Paddsb            => X86_INS_PADDSB            "paddsb";
    Paddsw            => X86_INS_PADDSW            "paddsw";
    Paddusb           => X86_INS_PADDUSB           "paddusb";
    Paddusw           => X86_INS_PADDUSW           "paddusw";
    Paddw             => X86_INS_PADDW             "paddw";
    Palignr           => X86_INS_PALIGNR           "palignr";
    Pandn             => X86_INS_PANDN             "pandn";
    Pand              => X86_INS_PAND              "pand";
    Pavgb             => X86_INS_PAVGB             "pavgb";
    Pavgw             => X86_INS_PAVGW             "pavgw";
    Pcmpeqb           => X86_INS_PCMPEQB           "pcmpeqb";
    Pcmpeqd           => X86_INS_PCMPEQD           "pcmpeqd";
    Pcmpeqw           => X86_INS_PCMPEQW           "pcmpeqw";
    Pcmpgtb           => X86_INS_PCMPGTB           "pcmpgtb";
    Pcmpgtd           => X86_INS_PCMPGTD           "pcmpgtd";
    Pcmpgtw           => X86_INS_PCMPGTW           "pcmpgtw";
    Pextrw            => X86_INS_PEXTRW            "pextrw";
    Phaddd            => X86_INS_PHADDD            "phaddd";
    Phaddsw           => X86_INS_PHADDSW           "phaddsw";
    Phaddw            => X86_INS_PHADDW            "phaddw";
    Phsubd            => X86_INS_PHSUBD            "phsubd";
    Phsubsw           => X86_INS_PHSUBSW           "phsubsw";
    Phsubw            => X86_INS_PHSUBW            "phsubw";
    Pinsrw            => X86_INS_PINSRW            "pinsrw";
    Pmaddubsw         => X86_INS_PMADDUBSW         "pmaddubsw";
    Pmaddwd           => X86_INS_PMADDWD           "pmaddwd";
    Pmaxsw            => X86_INS_PMAXSW            "pmaxsw";
    Pmaxub            => X86_INS_PMAXUB            "pmaxub";
    Pminsw            => X86_INS_PMINSW            "pminsw";
    Pminub            => X86_INS_PMINUB            "pminub";
    Pmovmskb          => X86_INS_PMOVMSKB          "pmovmskb";
    Pmulhrsw          => X86_INS_PMULHRSW          "pmulhrsw";
    Pmulhuw           => X86_INS_PMULHUW           "pmulhuw";
    Pmulhw            => X86_INS_PMULHW            "pmulhw";
    Pmullw            => X86_INS_PMULLW            "pmullw";
    Pmuludq           => X86_INS_PMULUDQ           "pmuludq";
    Por               => X86_INS_POR               "por";
    Psadbw            => X86_INS_PSADBW            "psadbw";
    Pshufb            => X86_INS_PSHUFB            "pshufb";
    Pshufw            => X86_INS_PSHUFW            "pshufw";
    Psignb            => X86_INS_PSIGNB            "psignb";
    Psignd            => X86_INS_PSIGND            "psignd";
    Psignw            => X86_INS_PSIGNW            "psignw";
    Pslld             => X86_INS_PSLLD             "pslld";
    Psllq             => X86_INS_PSLLQ             "psllq";
    Psllw             => X86_INS_PSLLW             "psllw";
    Psrad             => X86_INS_PSRAD             "psrad";
    Psraw             => X86_INS_PSRAW             "psraw";
    Psrld             => X86_INS_PSRLD             "psrld";
    Psrlq             => X86_INS_PSRLQ             "psrlq";
    Psrlw             => X86_INS_PSRLW             "psrlw";
    Psubb             => X86_INS_PSUBB             "psubb";
    Psubd             => X86_INS_PSUBD             "psubd";
    Psubq             => X86_INS_PSUBQ             "psubq";
    Psubsb            => X86_INS_PSUBSB            "psubsb";
    Psubsw            => X86_INS_PSUBSW            "psubsw";
    Psubusb           => X86_INS_PSUBUSB           "psubusb";
    Psubusw           => X86_INS_PSUBUSW           "psubusw";
    Psubw             => X86_INS_PSUBW             "psubw";
    Punpckhbw         => X86_INS_PUNPCKHBW         "punpckhbw";
    Punpckhdq         => X86_INS_PUNPCKHDQ         "punpckhdq";
    Punpckhwd         => X86_INS_PUNPCKHWD         "punpckhwd";
    Punpcklbw         => X86_INS_PUNPCKLBW         "punpcklbw";
    Punpckldq         => X86_INS_PUNPCKLDQ         "punpckldq";
    Punpcklwd         => X86_INS_PUNPCKLWD         "punpcklwd";
    Pxor              => X86_INS_PXOR              "pxor";
    Monitorx          => X86_INS_MONITORX          "monitorx";
    Monitor           => X86_INS_MONITOR           "monitor";
    Montmul           => X86_INS_MONTMUL           "montmul";
    Mov               => X86_INS_MOV               "mov";
    Movabs            => X86_INS_MOVABS            "movabs";
    Movapd            => X86_INS_MOVAPD            "movapd";
    Movaps            => X86_INS_MOVAPS            "movaps";
    Movbe             => X86_INS_MOVBE             "movbe";
    Movddup           => X86_INS_MOVDDUP           "movddup";
    Movdir64b         => X86_INS_MOVDIR64B         "movdir64b";
    Movdiri           => X86_INS_MOVDIRI           "movdiri";
    Movdqa            => X86_INS_MOVDQA            "movdqa";
    Movdqu            => X86_INS_MOVDQU            "movdqu";
    Movhlps           => X86_INS_MOVHLPS           "movhlps";
    Movhpd            => X86_INS_MOVHPD            "movhpd";
    Movhps            => X86_INS_MOVHPS            "movhps";
    Movlhps           => X86_INS_MOVLHPS           "movlhps";
    Movlpd            => X86_INS_MOVLPD            "movlpd";
    Movlps            => X86_INS_MOVLPS            "movlps";
    Movmskpd          => X86_INS_MOVMSKPD          "movmskpd";
    Movmskps          => X86_INS_MOVMSKPS          "movmskps";
    Movntdqa          => X86_INS_MOVNTDQA          "movntdqa";
    Movntdq           => X86_INS_MOVNTDQ           "movntdq";
    Movnti            => X86_INS_MOVNTI            "movnti";
    Movntpd           => X86_INS_MOVNTPD           "movntpd";
    Movntps           => X86_INS_MOVNTPS           "movntps";
    Movntsd           => X86_INS_MOVNTSD           "movntsd";
    Movntss           => X86_INS_MOVNTSS           "movntss";
    Movsb             => X86_INS_MOVSB             "movsb";
    Movsd             => X86_INS_MOVSD             "movsd";
    Movshdup          => X86_INS_MOVSHDUP          "movshdup";
    Movsldup          => X86_INS_MOVSLDUP          "movsldup";
    Movsq             => X86_INS_MOVSQ             "movsq";
    Movss             => X86_INS_MOVSS             "movss";
    Movsw             => X86_INS_MOVSW             "movsw";
    Movsx             => X86_INS_MOVSX             "movsx";
    Movsxd            => X86_INS_MOVSXD            "movsxd";
    Movupd            => X86_INS_MOVUPD            "movupd";
    Movups            => X86_INS_MOVUPS            "movups";
    Movzx             => X86_INS_MOVZX             "movzx";
    Mpsadbw           => X86_INS_MPSADBW           "mpsadbw";
    Mul               => X86_INS_MUL               "mul";
    Mulpd             => X86_INS_MULPD             "mulpd";
    Mulps             => X86_INS_MULPS             "mulps";
    Mulsd             => X86_INS_MULSD             "mulsd";
    Mulss             => X86_INS_MULSS             "mulss";
    Mulx              => X86_INS_MULX              "mulx";
    Fmul              => X86_INS_FMUL              "fmul";
    Fimul             => X86_INS_FIMUL             "fimul";
    Fmulp             => X86_INS_FMULP             "fmulp";
    Mwaitx            => X86_INS_MWAITX            "mwaitx";
    Mwait             => X86_INS_MWAIT             "mwait";
    Neg               => X86_INS_NEG               "neg";
    Nop               => X86_INS_NOP               "nop";
    Not               => X86_INS_NOT               "not";
    Or                => X86_INS_OR                "or";
    Orpd              => X86_INS_ORPD              "orpd";
    Orps              => X86_INS_ORPS              "orps";
    Out               => X86_INS_OUT               "out";
    Outsb             => X86_INS_OUTSB             "outsb";
    Outsd             => X86_INS_OUTSD             "outsd";
    Outsw             => X86_INS_OUTSW             "outsw";
    Packusdw          => X86_INS_PACKUSDW          "packusdw";
    Pause             => X86_INS_PAUSE             "pause";
    Pavgusb           => X86_INS_PAVGUSB           "pavgusb";
    Pblendvb          => X86_INS_PBLENDVB          "pblendvb";
    Pblendw           => X86_INS_PBLENDW           "pblendw";
    Pclmulqdq         => X86_INS_PCLMULQDQ         "pclmulqdq";
    Pcmpeqq           => X86_INS_PCMPEQQ           "pcmpeqq";
    Pcmpestri         => X86_INS_PCMPESTRI         "pcmpestri";
    Pcmpestrm         => X86_INS_PCMPESTRM         "pcmpestrm";
    Pcmpgtq           => X86_INS_PCMPGTQ           "pcmpgtq";
    Pcmpistri         => X86_INS_PCMPISTRI         "pcmpistri";
    Pcmpistrm         => X86_INS_PCMPISTRM         "pcmpistrm";
    Pconfig           => X86_INS_PCONFIG           "pconfig";
    Pdep              => X86_INS_PDEP              "pdep";
    Pext              => X86_INS_PEXT              "pext";
    Pextrb            => X86_INS_PEXTRB            "pextrb";
    Pextrd            => X86_INS_PEXTRD            "pextrd";
    Pextrq            => X86_INS_PEXTRQ            "pextrq";
    Pf2id             => X86_INS_PF2ID             "pf2id";
    Pf2iw             => X86_INS_PF2IW             "pf2iw";
    Pfacc             => X86_INS_PFACC             "pfacc";
    Pfadd             => X86_INS_PFADD             "pfadd";
    Pfcmpeq           => X86_INS_PFCMPEQ           "pfcmpeq";
    Pfcmpge           => X86_INS_PFCMPGE           "pfcmpge";
    Pfcmpgt           => X86_INS_PFCMPGT           "pfcmpgt";
    Pfmax             => X86_INS_PFMAX             "pfmax";
    Pfmin             => X86_INS_PFMIN             "pfmin";
    Pfmul             => X86_INS_PFMUL             "pfmul";
    Pfnacc            => X86_INS_PFNACC            "pfnacc";
    Pfpnacc           => X86_INS_PFPNACC           "pfpnacc";
    Pfrcpit1          => X86_INS_PFRCPIT1          "pfrcpit1";
    Pfrcpit2          => X86_INS_PFRCPIT2          "pfrcpit2";
    Pfrcp             => X86_INS_PFRCP             "pfrcp";
    Pfrsqit1          => X86_INS_PFRSQIT1          "pfrsqit1";
    Pfrsqrt           => X86_INS_PFRSQRT           "pfrsqrt";
    Pfsubr            => X86_INS_PFSUBR            "pfsubr";
    Pfsub             => X86_INS_PFSUB             "pfsub";
    Phminposuw        => X86_INS_PHMINPOSUW        "phminposuw";
    Pi2fd             => X86_INS_PI2FD             "pi2fd";
    Pi2fw             => X86_INS_PI2FW             "pi2fw";
    Pinsrb            => X86_INS_PINSRB            "pinsrb";
    Pinsrd            => X86_INS_PINSRD            "pinsrd";
    Pinsrq            => X86_INS_PINSRQ            "pinsrq";
    Pmaxsb            => X86_INS_PMAXSB            "pmaxsb";
    Pmaxsd            => X86_INS_PMAXSD            "pmaxsd";
    Pmaxud            => X86_INS_PMAXUD            "pmaxud";
    Pmaxuw            => X86_INS_PMAXUW            "pmaxuw";
    Pminsb            => X86_INS_PMINSB            "pminsb";
    Pminsd            => X86_INS_PMINSD            "pminsd";
    Pminud            => X86_INS_PMINUD            "pminud";
    Pminuw            => X86_INS_PMINUW            "pminuw";
    Pmovsxbd          => X86_INS_PMOVSXBD          "pmovsxbd";
    Pmovsxbq          => X86_INS_PMOVSXBQ          "pmovsxbq";
    Pmovsxbw          => X86_INS_PMOVSXBW          "pmovsxbw";
    Pmovsxdq          => X86_INS_PMOVSXDQ          "pmovsxdq";
    Pmovsxwd          => X86_INS_PMOVSXWD          "pmovsxwd";
    Pmovsxwq          => X86_INS_PMOVSXWQ          "pmovsxwq";
    Pmovzxbd          => X86_INS_PMOVZXBD          "pmovzxbd";
    Pmovzxbq          => X86_INS_PMOVZXBQ          "pmovzxbq";
    Pmovzxbw          => X86_INS_PMOVZXBW          "pmovzxbw";
    Pmovzxdq          => X86_INS_PMOVZXDQ          "pmovzxdq";
    Pmovzxwd          => X86_INS_PMOVZXWD          "pmovzxwd";
    Pmovzxwq          => X86_INS_PMOVZXWQ          "pmovzxwq";
    Pmuldq            => X86_INS_PMULDQ            "pmuldq";
    Pmulhrw           => X86_INS_PMULHRW           "pmulhrw";
    Pmulld            => X86_INS_PMULLD            "pmulld";
    Pop               => X86_INS_POP               "pop";
    Popaw             => X86_INS_POPAW             "popaw";
    Popal             => X86_INS_POPAL             "popal";
    Popcnt            => X86_INS_POPCNT            "popcnt";
    Popf              => X86_INS_POPF              "popf";
    Popfd             => X86_INS_POPFD             "popfd";
    Popfq             => X86_INS_POPFQ             "popfq";
    Prefetch          => X86_INS_PREFETCH          "prefetch";
    Prefetchnta       => X86_INS_PREFETCHNTA       "prefetchnta";
    Prefetcht0        => X86_INS_PREFETCHT0        "prefetcht0";
    Prefetcht1        => X86_INS_PREFETCHT1        "prefetcht1";
    Prefetcht2        => X86_INS_PREFETCHT2        "prefetcht2";
    Prefetchw         => X86_INS_PREFETCHW         "prefetchw";
    Prefetchwt1       => X86_INS_PREFETCHWT1       "prefetchwt1";
    Pshufd            => X86_INS_PSHUFD            "pshufd";
    Pshufhw           => X86_INS_PSHUFHW           "pshufhw";
    Pshuflw           => X86_INS_PSHUFLW           "pshuflw";
    Pslldq            => X86_INS_PSLLDQ            "pslldq";
    Psrldq            => X86_INS_PSRLDQ            "psrldq";
    Pswapd            => X86_INS_PSWAPD            "pswapd";
    Ptest             => X86_INS_PTEST             "ptest";
    Ptwrite           => X86_INS_PTWRITE           "ptwrite";
    Punpckhqdq        => X86_INS_PUNPCKHQDQ        "punpckhqdq";
    Punpcklqdq        => X86_INS_PUNPCKLQDQ        "punpcklqdq";
    Push              => X86_INS_PUSH              "push";
    Pushaw            => X86_INS_PUSHAW            "pushaw";
    Pushal            => X86_INS_PUSHAL            "pushal";
    Pushf             => X86_INS_PUSHF             "pushf";
    Pushfd            => X86_INS_PUSHFD            "pushfd";
    Pushfq            => X86_INS_PUSHFQ            "pushfq";
    Rcl               => X86_INS_RCL               "rcl";
    Rcpps             => X86_INS_RCPPS             "rcpps";
    Rcpss             => X86_INS_RCPSS             "rcpss";
    Rcr               => X86_INS_RCR               "rcr";
    Rdfsbase          => X86_INS_RDFSBASE          "rdfsbase";
    Rdgsbase          => X86_INS_RDGSBASE          "rdgsbase";
    Rdmsr             => X86_INS_RDMSR             "rdmsr";
    Rdpid             => X86_INS_RDPID             "rdpid";
    Rdpkru            => X86_INS_RDPKRU            "rdpkru";
    Rdpmc             => X86_INS_RDPMC             "rdpmc";
    Rdrand            => X86_INS_RDRAND            "rdrand";
    Rdseed            => X86_INS_RDSEED            "rdseed";
    Rdsspd            => X86_INS_RDSSPD            "rdsspd";
    Rdsspq            => X86_INS_RDSSPQ            "rdsspq";
    Rdtsc             => X86_INS_RDTSC             "rdtsc";
    Rdtscp            => X86_INS_RDTSCP            "rdtscp";
    Repne             => X86_INS_REPNE             "repne";
    Rep               => X86_INS_REP               "rep";
    Ret               => X86_INS_RET               "ret";
    Rex64             => X86_INS_REX64             "rex64";
    Rol               => X86_INS_ROL               "rol";
    Ror               => X86_INS_ROR               "ror";
    Rorx              => X86_INS_RORX              "rorx";
    Roundpd           => X86_INS_ROUNDPD           "roundpd";
    Roundps           => X86_INS_ROUNDPS           "roundps";
    Roundsd           => X86_INS_ROUNDSD           "roundsd";
    Roundss           => X86_INS_ROUNDSS           "roundss";
    Rsm               => X86_INS_RSM               "rsm";
    Rsqrtps           => X86_INS_RSQRTPS           "rsqrtps";
    Rsqrtss           => X86_INS_RSQRTSS           "rsqrtss";
    Rstorssp          => X86_INS_RSTORSSP          "rstorssp";
    Sahf              => X86_INS_SAHF              "sahf";
    Sal               => X86_INS_SAL               "sal";
    Salc              => X86_INS_SALC              "salc";
    Sar               => X86_INS_SAR               "sar";
    Sarx              => X86_INS_SARX              "sarx";
    Saveprevssp       => X86_INS_SAVEPREVSSP       "saveprevssp";
    Sbb               => X86_INS_SBB               "sbb";
    Scasb             => X86_INS_SCASB             "scasb";
    Scasd             => X86_INS_SCASD             "scasd";
    Scasq             => X86_INS_SCASQ             "scasq";
    Scasw             => X86_INS_SCASW             "scasw";
    Setae             => X86_INS_SETAE             "setae";
    Seta              => X86_INS_SETA              "seta";
    Setbe             => X86_INS_SETBE             "setbe";
    Setb              => X86_INS_SETB              "setb";
    Sete              => X86_INS_SETE              "sete";
    Setge             => X86_INS_SETGE             "setge";
    Setg              => X86_INS_SETG              "setg";
    Setle             => X86_INS_SETLE             "setle";
    Setl              => X86_INS_SETL              "setl";
    Setne             => X86_INS_SETNE             "setne";
    Setno             => X86_INS_SETNO             "setno";
    Setnp             => X86_INS_SETNP             "setnp";
    Setns             => X86_INS_SETNS             "setns";
    Seto              => X86_INS_SETO              "seto";
    Setp              => X86_INS_SETP              "setp";
    Setssbsy          => X86_INS_SETSSBSY          "setssbsy";
    Sets              => X86_INS_SETS              "sets";
    Sfence            => X86_INS_SFENCE            "sfence";
    Sgdt              => X86_INS_SGDT              "sgdt";
    Sha1msg1          => X86_INS_SHA1MSG1          "sha1msg1";
    Sha1msg2          => X86_INS_SHA1MSG2          "sha1msg2";
    Sha1nexte         => X86_INS_SHA1NEXTE         "sha1nexte";
    Sha1rnds4         => X86_INS_SHA1RNDS4         "sha1rnds4";
    Sha256msg1        => X86_INS_SHA256MSG1        "sha256msg1";
    Sha256msg2        => X86_INS_SHA256MSG2        "sha256msg2";
    Sha256rnds2       => X86_INS_SHA256RNDS2       "sha256rnds2";
    Shl               => X86_INS_SHL               "shl";
    Shld              => X86_INS_SHLD              "shld";
    Shlx              => X86_INS_SHLX              "shlx";
    Shr               => X86_INS_SHR               "shr";
    Shrd              => X86_INS_SHRD              "shrd";
    Shrx              => X86_INS_SHRX              "shrx";
    Shufpd            => X86_INS_SHUFPD            "shufpd";
    Shufps            => X86_INS_SHUFPS            "shufps";
    Sidt              => X86_INS_SIDT              "sidt";
    Fsin              => X86_INS_FSIN              "fsin";
    Skinit            => X86_INS_SKINIT            "skinit";
    Sldt              => X86_INS_SLDT              "sldt";
    Slwpcb            => X86_INS_SLWPCB            "slwpcb";
    Smsw              => X86_INS_SMSW              "smsw";
    Sqrtpd            => X86_INS_SQRTPD            "sqrtpd";
    Sqrtps            => X86_INS_SQRTPS            "sqrtps";
    Sqrtsd            => X86_INS_SQRTSD            "sqrtsd";
    Sqrtss            => X86_INS_SQRTSS            "sqrtss";
    Fsqrt             => X86_INS_FSQRT             "fsqrt";
    Stac              => X86_INS_STAC              "stac";
    Stc               => X86_INS_STC               "stc";
    Std               => X86_INS_STD               "std";
    Stgi              => X86_INS_STGI              "stgi";
    Sti               => X86_INS_STI               "sti";
    Stmxcsr           => X86_INS_STMXCSR           "stmxcsr";
    Stosb             => X86_INS_STOSB             "stosb";
    Stosd             => X86_INS_STOSD             "stosd";
    Stosq             => X86_INS_STOSQ             "stosq";
    Stosw             => X86_INS_STOSW             "stosw";
    Str               => X86_INS_STR               "str";
    Fst               => X86_INS_FST               "fst";
    Fstp              => X86_INS_FSTP              "fstp";
    Sub               => X86_INS_SUB               "sub";
    Subpd             => X86_INS_SUBPD             "subpd";
    Subps             => X86_INS_SUBPS             "subps";
    Fsubr             => X86_INS_FSUBR             "fsubr";
    Fisubr            => X86_INS_FISUBR            "fisubr";
    Fsubrp            => X86_INS_FSUBRP            "fsubrp";
    Subsd             => X86_INS_SUBSD             "subsd";
    Subss             => X86_INS_SUBSS             "subss";
    Fsub              => X86_INS_FSUB              "fsub";
    Fisub             => X86_INS_FISUB             "fisub";
    Fsubp             => X86_INS_FSUBP             "fsubp";
    Swapgs            => X86_INS_SWAPGS            "swapgs";
    Syscall           => X86_INS_SYSCALL           "syscall";
    Sysenter          => X86_INS_SYSENTER          "sysenter";
    Sysexit           => X86_INS_SYSEXIT           "sysexit";
    Sysexitq          => X86_INS_SYSEXITQ          "sysexitq";
    Sysret            => X86_INS_SYSRET            "sysret";
    Sysretq           => X86_INS_SYSRETQ           "sysretq";
    T1mskc            => X86_INS_T1MSKC            "t1mskc";
    Test              => X86_INS_TEST              "test";
    Tpause            => X86_INS_TPAUSE            "tpause";
    Ftst              => X86_INS_FTST              "ftst";
    Tzcnt             => X86_INS_TZCNT             "tzcnt";
    Tzmsk             => X86_INS_TZMSK             "tzmsk";
    Ucomisd           => X86_INS_UCOMISD           "ucomisd";
    Ucomiss           => X86_INS_UCOMISS           "ucomiss";
    Fucompi           => X86_INS_FUCOMPI           "fucompi";
    Fucomi            => X86_INS_FUCOMI            "fucomi";
    Fucompp           => X86_INS_FUCOMPP           "fucompp";
    Fucomp            => X86_INS_FUCOMP            "fucomp";
    Fucom             => X86_INS_FUCOM             "fucom";
    Ud0               => X86_INS_UD0               "ud0";
    Ud1               => X86_INS_UD1               "ud1";
    Ud2               => X86_INS_UD2               "ud2";
    Umonitor          => X86_INS_UMONITOR          "umonitor";
    Umwait            => X86_INS_UMWAIT            "umwait";
    Unpckhpd          => X86_INS_UNPCKHPD          "unpckhpd";
    Unpckhps          => X86_INS_UNPCKHPS          "unpckhps";
    Unpcklpd          => X86_INS_UNPCKLPD          "unpcklpd";
    Unpcklps          => X86_INS_UNPCKLPS          "unpcklps";
    V4fmaddps         => X86_INS_V4FMADDPS         "v4fmaddps";
    V4fmaddss         => X86_INS_V4FMADDSS         "v4fmaddss";
    V4fnmaddps        => X86_INS_V4FNMADDPS        "v4fnmaddps";
    V4fnmaddss        => X86_INS_V4FNMADDSS        "v4fnmaddss";
    Vaddpd            => X86_INS_VADDPD            "vaddpd";
    Vaddps            => X86_INS_VADDPS            "vaddps";
    Vaddsd            => X86_INS_VADDSD            "vaddsd";
    Vaddss            => X86_INS_VADDSS            "vaddss";
    Vaddsubpd         => X86_INS_VADDSUBPD         "vaddsubpd";
    Vaddsubps         => X86_INS_VADDSUBPS         "vaddsubps";
    Vaesdeclast       => X86_INS_VAESDECLAST       "vaesdeclast";
    Vaesdec           => X86_INS_VAESDEC           "vaesdec";
    Vaesenclast       => X86_INS_VAESENCLAST       "vaesenclast";
    Vaesenc           => X86_INS_VAESENC           "vaesenc";
    Vaesimc           => X86_INS_VAESIMC           "vaesimc";
    Vaeskeygenassist  => X86_INS_VAESKEYGENASSIST  "vaeskeygenassist";
    Valignd           => X86_INS_VALIGND           "valignd";
    Valignq           => X86_INS_VALIGNQ           "valignq";
    Vandnpd           => X86_INS_VANDNPD           "vandnpd";
    Vandnps           => X86_INS_VANDNPS           "vandnps";
    Vandpd            => X86_INS_VANDPD            "vandpd";
    Vandps            => X86_INS_VANDPS            "vandps";
    Vblendmpd         => X86_INS_VBLENDMPD         "vblendmpd";
    Vblendmps         => X86_INS_VBLENDMPS         "vblendmps";
    Vblendpd          => X86_INS_VBLENDPD          "vblendpd";
    Vblendps          => X86_INS_VBLENDPS          "vblendps";
    Vblendvpd         => X86_INS_VBLENDVPD         "vblendvpd";
    Vblendvps         => X86_INS_VBLENDVPS         "vblendvps";
    Vbroadcastf128    => X86_INS_VBROADCASTF128    "vbroadcastf128";
    Vbroadcastf32x2   => X86_INS_VBROADCASTF32X2   "vbroadcastf32x2";
    Vbroadcastf32x4   => X86_INS_VBROADCASTF32X4   "vbroadcastf32x4";
    Vbroadcastf32x8   => X86_INS_VBROADCASTF32X8   "vbroadcastf32x8";
    Vbroadcastf64x2   => X86_INS_VBROADCASTF64X2   "vbroadcastf64x2";
    Vbroadcastf64x4   => X86_INS_VBROADCASTF64X4   "vbroadcastf64x4";
    Vbroadcasti128    => X86_INS_VBROADCASTI128    "vbroadcasti128";
    Vbroadcasti32x2   => X86_INS_VBROADCASTI32X2   "vbroadcasti32x2";
    Vbroadcasti32x4   => X86_INS_VBROADCASTI32X4   "vbroadcasti32x4";
    Vbroadcasti32x8   => X86_INS_VBROADCASTI32X8   "vbroadcasti32x8";
    Vbroadcasti64x2   => X86_INS_VBROADCASTI64X2   "vbroadcasti64x2";
    Vbroadcasti64x4   => X86_INS_VBROADCASTI64X4   "vbroadcasti64x4";
    Vbroadcastsd      => X86_INS_VBROADCASTSD      "vbroadcastsd";
    Vbroadcastss      => X86_INS_VBROADCASTSS      "vbroadcastss";
    Vcmp              => X86_INS_VCMP              "vcmp";
    Vcmppd            => X86_INS_VCMPPD            "vcmppd";
    Vcmpps            => X86_INS_VCMPPS            "vcmpps";
    Vcmpsd            => X86_INS_VCMPSD            "vcmpsd";
    Vcmpss            => X86_INS_VCMPSS            "vcmpss";
    Vcomisd           => X86_INS_VCOMISD           "vcomisd";
    Vcomiss           => X86_INS_VCOMISS           "vcomiss";
    Vcompresspd       => X86_INS_VCOMPRESSPD       "vcompresspd";
    Vcompressps       => X86_INS_VCOMPRESSPS       "vcompressps";
    Vcvtdq2pd         => X86_INS_VCVTDQ2PD         "vcvtdq2pd";
    Vcvtdq2ps         => X86_INS_VCVTDQ2PS         "vcvtdq2ps";
    Vcvtpd2dq         => X86_INS_VCVTPD2DQ         "vcvtpd2dq";
    Vcvtpd2ps         => X86_INS_VCVTPD2PS         "vcvtpd2ps";
    Vcvtpd2qq         => X86_INS_VCVTPD2QQ         "vcvtpd2qq";
    Vcvtpd2udq        => X86_INS_VCVTPD2UDQ        "vcvtpd2udq";
    Vcvtpd2uqq        => X86_INS_VCVTPD2UQQ        "vcvtpd2uqq";
    Vcvtph2ps         => X86_INS_VCVTPH2PS         "vcvtph2ps";
    Vcvtps2dq         => X86_INS_VCVTPS2DQ         "vcvtps2dq";
    Vcvtps2pd         => X86_INS_VCVTPS2PD         "vcvtps2pd";
    Vcvtps2ph         => X86_INS_VCVTPS2PH         "vcvtps2ph";
    Vcvtps2qq         => X86_INS_VCVTPS2QQ         "vcvtps2qq";
    Vcvtps2udq        => X86_INS_VCVTPS2UDQ        "vcvtps2udq";
    Vcvtps2uqq        => X86_INS_VCVTPS2UQQ        "vcvtps2uqq";
    Vcvtqq2pd         => X86_INS_VCVTQQ2PD         "vcvtqq2pd";
    Vcvtqq2ps         => X86_INS_VCVTQQ2PS         "vcvtqq2ps";
    Vcvtsd2si         => X86_INS_VCVTSD2SI         "vcvtsd2si";
    Vcvtsd2ss         => X86_INS_VCVTSD2SS         "vcvtsd2ss";
    Vcvtsd2usi        => X86_INS_VCVTSD2USI        "vcvtsd2usi";
    Vcvtsi2sd         => X86_INS_VCVTSI2SD         "vcvtsi2sd";
    Vcvtsi2ss         => X86_INS_VCVTSI2SS         "vcvtsi2ss";
    Vcvtss2sd         => X86_INS_VCVTSS2SD         "vcvtss2sd";
    Vcvtss2si         => X86_INS_VCVTSS2SI         "vcvtss2si";
    Vcvtss2usi        => X86_INS_VCVTSS2USI        "vcvtss2usi";
    Vcvttpd2dq        => X86_INS_VCVTTPD2DQ        "vcvttpd2dq";
    Vcvttpd2qq        => X86_INS_VCVTTPD2QQ        "vcvttpd2qq";
    Vcvttpd2udq       => X86_INS_VCVTTPD2UDQ       "vcvttpd2udq";
    Vcvttpd2uqq       => X86_INS_VCVTTPD2UQQ       "vcvttpd2uqq";
    Vcvttps2dq        => X86_INS_VCVTTPS2DQ        "vcvttps2dq";
    Vcvttps2qq        => X86_INS_VCVTTPS2QQ        "vcvttps2qq";
    Vcvttps2udq       => X86_INS_VCVTTPS2UDQ       "vcvttps2udq";
    Vcvttps2uqq       => X86_INS_VCVTTPS2UQQ       "vcvttps2uqq";
    Vcvttsd2si        => X86_INS_VCVTTSD2SI        "vcvttsd2si";
    Vcvttsd2usi       => X86_INS_VCVTTSD2USI       "vcvttsd2usi";
    Vcvttss2si        => X86_INS_VCVTTSS2SI        "vcvttss2si";
    Vcvttss2usi       => X86_INS_VCVTTSS2USI       "vcvttss2usi";
    Vcvtudq2pd        => X86_INS_VCVTUDQ2PD        "vcvtudq2pd";
    Vcvtudq2ps        => X86_INS_VCVTUDQ2PS        "vcvtudq2ps";
    Vcvtuqq2pd        => X86_INS_VCVTUQQ2PD        "vcvtuqq2pd";
    Vcvtuqq2ps        => X86_INS_VCVTUQQ2PS        "vcvtuqq2ps";
    Vcvtusi2sd        => X86_INS_VCVTUSI2SD        "vcvtusi2sd";
    Vcvtusi2ss        => X86_INS_VCVTUSI2SS        "vcvtusi2ss";
    Vdbpsadbw         => X86_INS_VDBPSADBW         "vdbpsadbw";
    Vdivpd            => X86_INS_VDIVPD            "vdivpd";
    Vdivps            => X86_INS_VDIVPS            "vdivps";
    Vdivsd            => X86_INS_VDIVSD            "vdivsd";
    Vdivss            => X86_INS_VDIVSS            "vdivss";
    Vdppd             => X86_INS_VDPPD             "vdppd";
    Vdpps             => X86_INS_VDPPS             "vdpps";
    Verr              => X86_INS_VERR              "verr";
    Verw              => X86_INS_VERW              "verw";
    Vexp2pd           => X86_INS_VEXP2PD           "vexp2pd";
    Vexp2ps           => X86_INS_VEXP2PS           "vexp2ps";
    Vexpandpd         => X86_INS_VEXPANDPD         "vexpandpd";
    Vexpandps         => X86_INS_VEXPANDPS         "vexpandps";
    Vextractf128      => X86_INS_VEXTRACTF128      "vextractf128";
    Vextractf32x4     => X86_INS_VEXTRACTF32X4     "vextractf32x4";
    Vextractf32x8     => X86_INS_VEXTRACTF32X8     "vextractf32x8";
    Vextractf64x2     => X86_INS_VEXTRACTF64X2     "vextractf64x2";
    Vextractf64x4     => X86_INS_VEXTRACTF64X4     "vextractf64x4";
    Vextracti128      => X86_INS_VEXTRACTI128      "vextracti128";
    Vextracti32x4     => X86_INS_VEXTRACTI32X4     "vextracti32x4";
    Vextracti32x8     => X86_INS_VEXTRACTI32X8     "vextracti32x8";
    Vextracti64x2     => X86_INS_VEXTRACTI64X2     "vextracti64x2";
    Vextracti64x4     => X86_INS_VEXTRACTI64X4     "vextracti64x4";
    Vextractps        => X86_INS_VEXTRACTPS        "vextractps";
    Vfixupimmpd       => X86_INS_VFIXUPIMMPD       "vfixupimmpd";
    Vfixupimmps       => X86_INS_VFIXUPIMMPS       "vfixupimmps";
    Vfixupimmsd       => X86_INS_VFIXUPIMMSD       "vfixupimmsd";
    Vfixupimmss       => X86_INS_VFIXUPIMMSS       "vfixupimmss";
    Vfmadd132pd       => X86_INS_VFMADD132PD       "vfmadd132pd";
    Vfmadd132ps       => X86_INS_VFMADD132PS       "vfmadd132ps";
    Vfmadd132sd       => X86_INS_VFMADD132SD       "vfmadd132sd";
    Vfmadd132ss       => X86_INS_VFMADD132SS       "vfmadd132ss";
    Vfmadd213pd       => X86_INS_VFMADD213PD       "vfmadd213pd";
    Vfmadd213ps       => X86_INS_VFMADD213PS       "vfmadd213ps";
    Vfmadd213sd       => X86_INS_VFMADD213SD       "vfmadd213sd";
    Vfmadd213ss       => X86_INS_VFMADD213SS       "vfmadd213ss";
    Vfmadd231pd       => X86_INS_VFMADD231PD       "vfmadd231pd";
    Vfmadd231ps       => X86_INS_VFMADD231PS       "vfmadd231ps";
    Vfmadd231sd       => X86_INS_VFMADD231SD       "vfmadd231sd";
    Vfmadd231ss       => X86_INS_VFMADD231SS       "vfmadd231ss";
    Vfmaddpd          => X86_INS_VFMADDPD          "vfmaddpd";
    Vfmaddps          => X86_INS_VFMADDPS          "vfmaddps";
    Vfmaddsd          => X86_INS_VFMADDSD          "vfmaddsd";
    Vfmaddss          => X86_INS_VFMADDSS          "vfmaddss";
    Vfmaddsub132pd    => X86_INS_VFMADDSUB132PD    "vfmaddsub132pd";
    Vfmaddsub132ps    => X86_INS_VFMADDSUB132PS    "vfmaddsub132ps";
    Vfmaddsub213pd    => X86_INS_VFMADDSUB213PD    "vfmaddsub213pd";
    Vfmaddsub213ps    => X86_INS_VFMADDSUB213PS    "vfmaddsub213ps";
    Vfmaddsub231pd    => X86_INS_VFMADDSUB231PD    "vfmaddsub231pd";
    Vfmaddsub231ps    => X86_INS_VFMADDSUB231PS    "vfmaddsub231ps";
    Vfmaddsubpd       => X86_INS_VFMADDSUBPD       "vfmaddsubpd";
    Vfmaddsubps       => X86_INS_VFMADDSUBPS       "vfmaddsubps";
    Vfmsub132pd       => X86_INS_VFMSUB132PD       "vfmsub132pd";
    Vfmsub132ps       => X86_INS_VFMSUB132PS       "vfmsub132ps";
    Vfmsub132sd       => X86_INS_VFMSUB132SD       "vfmsub132sd";
    Vfmsub132ss       => X86_INS_VFMSUB132SS       "vfmsub132ss";
    Vfmsub213pd       => X86_INS_VFMSUB213PD       "vfmsub213pd";
    Vfmsub213ps       => X86_INS_VFMSUB213PS       "vfmsub213ps";
    Vfmsub213sd       => X86_INS_VFMSUB213SD       "vfmsub213sd";
    Vfmsub213ss       => X86_INS_VFMSUB213SS       "vfmsub213ss";
    Vfmsub231pd       => X86_INS_VFMSUB231PD       "vfmsub231pd";
    Vfmsub231ps       => X86_INS_VFMSUB231PS       "vfmsub231ps";
    Vfmsub231sd       => X86_INS_VFMSUB231SD       "vfmsub231sd";
    Vfmsub231ss       => X86_INS_VFMSUB231SS       "vfmsub231ss";
    Vfmsubadd132pd    => X86_INS_VFMSUBADD132PD    "vfmsubadd132pd";
    Vfmsubadd132ps    => X86_INS_VFMSUBADD132PS    "vfmsubadd132ps";
    Vfmsubadd213pd    => X86_INS_VFMSUBADD213PD    "vfmsubadd213pd";
    Vfmsubadd213ps    => X86_INS_VFMSUBADD213PS    "vfmsubadd213ps";
    Vfmsubadd231pd    => X86_INS_VFMSUBADD231PD    "vfmsubadd231pd";
    Vfmsubadd231ps    => X86_INS_VFMSUBADD231PS    "vfmsubadd231ps";
    Vfmsubaddpd       => X86_INS_VFMSUBADDPD       "vfmsubaddpd";
    Vfmsubaddps       => X86_INS_VFMSUBADDPS       "vfmsubaddps";
    Vfmsubpd          => X86_INS_VFMSUBPD          "vfmsubpd";
    Vfmsubps          => X86_INS_VFMSUBPS          "vfmsubps";
    Vfmsubsd          => X86_INS_VFMSUBSD          "vfmsubsd";
    Vfmsubss          => X86_INS_VFMSUBSS          "vfmsubss";
    Vfnmadd132pd      => X86_INS_VFNMADD132PD      "vfnmadd132pd";
    Vfnmadd132ps      => X86_INS_VFNMADD132PS      "vfnmadd132ps";
    Vfnmadd132sd      => X86_INS_VFNMADD132SD      "vfnmadd132sd";
    Vfnmadd132ss      => X86_INS_VFNMADD132SS      "vfnmadd132ss";
    Vfnmadd213pd      => X86_INS_VFNMADD213PD      "vfnmadd213pd";
    Vfnmadd213ps      => X86_INS_VFNMADD213PS      "vfnmadd213ps";
    Vfnmadd213sd      => X86_INS_VFNMADD213SD      "vfnmadd213sd";
    Vfnmadd213ss      => X86_INS_VFNMADD213SS      "vfnmadd213ss";
    Vfnmadd231pd      => X86_INS_VFNMADD231PD      "vfnmadd231pd";
    Vfnmadd231ps      => X86_INS_VFNMADD231PS      "vfnmadd231ps";
    Vfnmadd231sd      => X86_INS_VFNMADD231SD      "vfnmadd231sd";
    Vfnmadd231ss      => X86_INS_VFNMADD231SS      "vfnmadd231ss";
    Vfnmaddpd         => X86_INS_VFNMADDPD         "vfnmaddpd";
    Vfnmaddps         => X86_INS_VFNMADDPS         "vfnmaddps";
    Vfnmaddsd         => X86_INS_VFNMADDSD         "vfnmaddsd";
    Vfnmaddss         => X86_INS_VFNMADDSS         "vfnmaddss";
    Vfnmsub132pd      => X86_INS_VFNMSUB132PD      "vfnmsub132pd";
    Vfnmsub132ps      => X86_INS_VFNMSUB132PS      "vfnmsub132ps";
    Vfnmsub132sd      => X86_INS_VFNMSUB132SD      "vfnmsub132sd";
    Vfnmsub132ss      => X86_INS_VFNMSUB132SS      "vfnmsub132ss";
    Vfnmsub213pd      => X86_INS_VFNMSUB213PD      "vfnmsub213pd";
    Vfnmsub213ps      => X86_INS_VFNMSUB213PS      "vfnmsub213ps";
    Vfnmsub213sd      => X86_INS_VFNMSUB213SD      "vfnmsub213sd";
    Vfnmsub213ss      => X86_INS_VFNMSUB213SS      "vfnmsub213ss";
    Vfnmsub231pd      => X86_INS_VFNMSUB231PD      "vfnmsub231pd";
    Vfnmsub231ps      => X86_INS_VFNMSUB231PS      "vfnmsub231ps";
    Vfnmsub231sd      => X86_INS_VFNMSUB231SD      "vfnmsub231sd";
    Vfnmsub231ss      => X86_INS_VFNMSUB231SS      "vfnmsub231ss";
    Vfnmsubpd         => X86_INS_VFNMSUBPD         "vfnmsubpd";
    Vfnmsubps         => X86_INS_VFNMSUBPS         "vfnmsubps";
    Vfnmsubsd         => X86_INS_VFNMSUBSD         "vfnmsubsd";
    Vfnmsubss         => X86_INS_VFNMSUBSS         "vfnmsubss";
    Vfpclasspd        => X86_INS_VFPCLASSPD        "vfpclasspd";
    Vfpclassps        => X86_INS_VFPCLASSPS        "vfpclassps";
    Vfpclasssd        => X86_INS_VFPCLASSSD        "vfpclasssd";
    Vfpclassss        => X86_INS_VFPCLASSSS        "vfpclassss";
    Vfrczpd           => X86_INS_VFRCZPD           "vfrczpd";
    Vfrczps           => X86_INS_VFRCZPS           "vfrczps";
    Vfrczsd           => X86_INS_VFRCZSD           "vfrczsd";
    Vfrczss           => X86_INS_VFRCZSS           "vfrczss";
    Vgatherdpd        => X86_INS_VGATHERDPD        "vgatherdpd";
    Vgatherdps        => X86_INS_VGATHERDPS        "vgatherdps";
    Vgatherpf0dpd     => X86_INS_VGATHERPF0DPD     "vgatherpf0dpd";
    Vgatherpf0dps     => X86_INS_VGATHERPF0DPS     "vgatherpf0dps";
    Vgatherpf0qpd     => X86_INS_VGATHERPF0QPD     "vgatherpf0qpd";
    Vgatherpf0qps     => X86_INS_VGATHERPF0QPS     "vgatherpf0qps";
    Vgatherpf1dpd     => X86_INS_VGATHERPF1DPD     "vgatherpf1dpd";
    Vgatherpf1dps     => X86_INS_VGATHERPF1DPS     "vgatherpf1dps";
    Vgatherpf1qpd     => X86_INS_VGATHERPF1QPD     "vgatherpf1qpd";
    Vgatherpf1qps     => X86_INS_VGATHERPF1QPS     "vgatherpf1qps";
    Vgatherqpd        => X86_INS_VGATHERQPD        "vgatherqpd";
    Vgatherqps        => X86_INS_VGATHERQPS        "vgatherqps";
    Vgetexppd         => X86_INS_VGETEXPPD         "vgetexppd";
    Vgetexpps         => X86_INS_VGETEXPPS         "vgetexpps";
    Vgetexpsd         => X86_INS_VGETEXPSD         "vgetexpsd";
    Vgetexpss         => X86_INS_VGETEXPSS         "vgetexpss";
    Vgetmantpd        => X86_INS_VGETMANTPD        "vgetmantpd";
    Vgetmantps        => X86_INS_VGETMANTPS        "vgetmantps";
    Vgetmantsd        => X86_INS_VGETMANTSD        "vgetmantsd";
    Vgetmantss        => X86_INS_VGETMANTSS        "vgetmantss";
    Vgf2p8affineinvqb => X86_INS_VGF2P8AFFINEINVQB "vgf2p8affineinvqb";
    Vgf2p8affineqb    => X86_INS_VGF2P8AFFINEQB    "vgf2p8affineqb";
    Vgf2p8mulb        => X86_INS_VGF2P8MULB        "vgf2p8mulb";
    Vhaddpd           => X86_INS_VHADDPD           "vhaddpd";
    Vhaddps           => X86_INS_VHADDPS           "vhaddps";
    Vhsubpd           => X86_INS_VHSUBPD           "vhsubpd";
    Vhsubps           => X86_INS_VHSUBPS           "vhsubps";
    Vinsertf128       => X86_INS_VINSERTF128       "vinsertf128";
    Vinsertf32x4      => X86_INS_VINSERTF32X4      "vinsertf32x4";
    Vinsertf32x8      => X86_INS_VINSERTF32X8      "vinsertf32x8";
    Vinsertf64x2      => X86_INS_VINSERTF64X2      "vinsertf64x2";
    Vinsertf64x4      => X86_INS_VINSERTF64X4      "vinsertf64x4";
    Vinserti128       => X86_INS_VINSERTI128       "vinserti128";
    Vinserti32x4      => X86_INS_VINSERTI32X4      "vinserti32x4";
    Vinserti32x8      => X86_INS_VINSERTI32X8      "vinserti32x8";
    Vinserti64x2      => X86_INS_VINSERTI64X2      "vinserti64x2";
    Vinserti64x4      => X86_INS_VINSERTI64X4      "vinserti64x4";
    Vinsertps         => X86_INS_VINSERTPS         "vinsertps";
    Vlddqu            => X86_INS_VLDDQU            "vlddqu";
    Vldmxcsr          => X86_INS_VLDMXCSR          "vldmxcsr";
    Vmaskmovdqu       => X86_INS_VMASKMOVDQU       "vmaskmovdqu";
    Vmaskmovpd        => X86_INS_VMASKMOVPD        "vmaskmovpd";
    Vmaskmovps        => X86_INS_VMASKMOVPS        "vmaskmovps";
    Vmaxpd            => X86_INS_VMAXPD            "vmaxpd";
    Vmaxps            => X86_INS_VMAXPS            "vmaxps";
    Vmaxsd            => X86_INS_VMAXSD            "vmaxsd";
    Vmaxss            => X86_INS_VMAXSS            "vmaxss";
    Vmcall            => X86_INS_VMCALL            "vmcall";
    Vmclear           => X86_INS_VMCLEAR           "vmclear";
    Vmfunc            => X86_INS_VMFUNC            "vmfunc";
    Vminpd            => X86_INS_VMINPD            "vminpd";
    Vminps            => X86_INS_VMINPS            "vminps";
    Vminsd            => X86_INS_VMINSD            "vminsd";
    Vminss            => X86_INS_VMINSS            "vminss";
    Vmlaunch          => X86_INS_VMLAUNCH          "vmlaunch";
    Vmload            => X86_INS_VMLOAD            "vmload";
    Vmmcall           => X86_INS_VMMCALL           "vmmcall";
    Vmovq             => X86_INS_VMOVQ             "vmovq";
    Vmovapd           => X86_INS_VMOVAPD           "vmovapd";
    Vmovaps           => X86_INS_VMOVAPS           "vmovaps";
    Vmovddup          => X86_INS_VMOVDDUP          "vmovddup";
    Vmovd             => X86_INS_VMOVD             "vmovd";
    Vmovdqa32         => X86_INS_VMOVDQA32         "vmovdqa32";
    Vmovdqa64         => X86_INS_VMOVDQA64         "vmovdqa64";
    Vmovdqa           => X86_INS_VMOVDQA           "vmovdqa";
    Vmovdqu16         => X86_INS_VMOVDQU16         "vmovdqu16";
    Vmovdqu32         => X86_INS_VMOVDQU32         "vmovdqu32";
    Vmovdqu64         => X86_INS_VMOVDQU64         "vmovdqu64";
    Vmovdqu8          => X86_INS_VMOVDQU8          "vmovdqu8";
    Vmovdqu           => X86_INS_VMOVDQU           "vmovdqu";
    Vmovhlps          => X86_INS_VMOVHLPS          "vmovhlps";
    Vmovhpd           => X86_INS_VMOVHPD           "vmovhpd";
    Vmovhps           => X86_INS_VMOVHPS           "vmovhps";
    Vmovlhps          => X86_INS_VMOVLHPS          "vmovlhps";
    Vmovlpd           => X86_INS_VMOVLPD           "vmovlpd";
    Vmovlps           => X86_INS_VMOVLPS           "vmovlps";
    Vmovmskpd         => X86_INS_VMOVMSKPD         "vmovmskpd";
    Vmovmskps         => X86_INS_VMOVMSKPS         "vmovmskps";
    Vmovntdqa         => X86_INS_VMOVNTDQA         "vmovntdqa";
    Vmovntdq          => X86_INS_VMOVNTDQ          "vmovntdq";
    Vmovntpd          => X86_INS_VMOVNTPD          "vmovntpd";
    Vmovntps          => X86_INS_VMOVNTPS          "vmovntps";
    Vmovsd            => X86_INS_VMOVSD            "vmovsd";
    Vmovshdup         => X86_INS_VMOVSHDUP         "vmovshdup";
    Vmovsldup         => X86_INS_VMOVSLDUP         "vmovsldup";
    Vmovss            => X86_INS_VMOVSS            "vmovss";
    Vmovupd           => X86_INS_VMOVUPD           "vmovupd";
    Vmovups           => X86_INS_VMOVUPS           "vmovups";
    Vmpsadbw          => X86_INS_VMPSADBW          "vmpsadbw";
    Vmptrld           => X86_INS_VMPTRLD           "vmptrld";
    Vmptrst           => X86_INS_VMPTRST           "vmptrst";
    Vmread            => X86_INS_VMREAD            "vmread";
    Vmresume          => X86_INS_VMRESUME          "vmresume";
    Vmrun             => X86_INS_VMRUN             "vmrun";
    Vmsave            => X86_INS_VMSAVE            "vmsave";
    Vmulpd            => X86_INS_VMULPD            "vmulpd";
    Vmulps            => X86_INS_VMULPS            "vmulps";
    Vmulsd            => X86_INS_VMULSD            "vmulsd";
    Vmulss            => X86_INS_VMULSS            "vmulss";
    Vmwrite           => X86_INS_VMWRITE           "vmwrite";
    Vmxoff            => X86_INS_VMXOFF            "vmxoff";
    Vmxon             => X86_INS_VMXON             "vmxon";
    Vorpd             => X86_INS_VORPD             "vorpd";
    Vorps             => X86_INS_VORPS             "vorps";
    Vp4dpwssds        => X86_INS_VP4DPWSSDS        "vp4dpwssds";
    Vp4dpwssd         => X86_INS_VP4DPWSSD         "vp4dpwssd";
    Vpabsb            => X86_INS_VPABSB            "vpabsb";
    Vpabsd            => X86_INS_VPABSD            "vpabsd";
    Vpabsq            => X86_INS_VPABSQ            "vpabsq";
    Vpabsw            => X86_INS_VPABSW            "vpabsw";
    Vpackssdw         => X86_INS_VPACKSSDW         "vpackssdw";
    Vpacksswb         => X86_INS_VPACKSSWB         "vpacksswb";
    Vpackusdw         => X86_INS_VPACKUSDW         "vpackusdw";
    Vpackuswb         => X86_INS_VPACKUSWB         "vpackuswb";
    Vpaddb            => X86_INS_VPADDB            "vpaddb";
    Vpaddd            => X86_INS_VPADDD            "vpaddd";
    Vpaddq            => X86_INS_VPADDQ            "vpaddq";
    Vpaddsb           => X86_INS_VPADDSB           "vpaddsb";
    Vpaddsw           => X86_INS_VPADDSW           "vpaddsw";
    Vpaddusb          => X86_INS_VPADDUSB          "vpaddusb";
    Vpaddusw          => X86_INS_VPADDUSW          "vpaddusw";
    Vpaddw            => X86_INS_VPADDW            "vpaddw";
    Vpalignr          => X86_INS_VPALIGNR          "vpalignr";
    Vpandd            => X86_INS_VPANDD            "vpandd";
    Vpandnd           => X86_INS_VPANDND           "vpandnd";
    Vpandnq           => X86_INS_VPANDNQ           "vpandnq";
    Vpandn            => X86_INS_VPANDN            "vpandn";
    Vpandq            => X86_INS_VPANDQ            "vpandq";
    Vpand             => X86_INS_VPAND             "vpand";
    Vpavgb            => X86_INS_VPAVGB            "vpavgb";
    Vpavgw            => X86_INS_VPAVGW            "vpavgw";
    Vpblendd          => X86_INS_VPBLENDD          "vpblendd";
    Vpblendmb         => X86_INS_VPBLENDMB         "vpblendmb";
    Vpblendmd         => X86_INS_VPBLENDMD         "vpblendmd";
    Vpblendmq         => X86_INS_VPBLENDMQ         "vpblendmq";
    Vpblendmw         => X86_INS_VPBLENDMW         "vpblendmw";
    Vpblendvb         => X86_INS_VPBLENDVB         "vpblendvb";
    Vpblendw          => X86_INS_VPBLENDW          "vpblendw";
    Vpbroadcastb      => X86_INS_VPBROADCASTB      "vpbroadcastb";
    Vpbroadcastd      => X86_INS_VPBROADCASTD      "vpbroadcastd";
    Vpbroadcastmb2q   => X86_INS_VPBROADCASTMB2Q   "vpbroadcastmb2q";
    Vpbroadcastmw2d   => X86_INS_VPBROADCASTMW2D   "vpbroadcastmw2d";
    Vpbroadcastq      => X86_INS_VPBROADCASTQ      "vpbroadcastq";
    Vpbroadcastw      => X86_INS_VPBROADCASTW      "vpbroadcastw";
    Vpclmulqdq        => X86_INS_VPCLMULQDQ        "vpclmulqdq";
    Vpcmov            => X86_INS_VPCMOV            "vpcmov";
    Vpcmp             => X86_INS_VPCMP             "vpcmp";
    Vpcmpb            => X86_INS_VPCMPB            "vpcmpb";
    Vpcmpd            => X86_INS_VPCMPD            "vpcmpd";
    Vpcmpeqb          => X86_INS_VPCMPEQB          "vpcmpeqb";
    Vpcmpeqd          => X86_INS_VPCMPEQD          "vpcmpeqd";
    Vpcmpeqq          => X86_INS_VPCMPEQQ          "vpcmpeqq";
    Vpcmpeqw          => X86_INS_VPCMPEQW          "vpcmpeqw";
    Vpcmpestri        => X86_INS_VPCMPESTRI        "vpcmpestri";
    Vpcmpestrm        => X86_INS_VPCMPESTRM        "vpcmpestrm";
    Vpcmpgtb          => X86_INS_VPCMPGTB          "vpcmpgtb";
    Vpcmpgtd          => X86_INS_VPCMPGTD          "vpcmpgtd";
    Vpcmpgtq          => X86_INS_VPCMPGTQ          "vpcmpgtq";
    Vpcmpgtw          => X86_INS_VPCMPGTW          "vpcmpgtw";
    Vpcmpistri        => X86_INS_VPCMPISTRI        "vpcmpistri";
    Vpcmpistrm        => X86_INS_VPCMPISTRM        "vpcmpistrm";
    Vpcmpq            => X86_INS_VPCMPQ            "vpcmpq";
    Vpcmpub           => X86_INS_VPCMPUB           "vpcmpub";
    Vpcmpud           => X86_INS_VPCMPUD           "vpcmpud";
    Vpcmpuq           => X86_INS_VPCMPUQ           "vpcmpuq";
    Vpcmpuw           => X86_INS_VPCMPUW           "vpcmpuw";
    Vpcmpw            => X86_INS_VPCMPW            "vpcmpw";
    Vpcom             => X86_INS_VPCOM             "vpcom";
    Vpcomb            => X86_INS_VPCOMB            "vpcomb";
    Vpcomd            => X86_INS_VPCOMD            "vpcomd";
    Vpcompressb       => X86_INS_VPCOMPRESSB       "vpcompressb";
    Vpcompressd       => X86_INS_VPCOMPRESSD       "vpcompressd";
    Vpcompressq       => X86_INS_VPCOMPRESSQ       "vpcompressq";
    Vpcompressw       => X86_INS_VPCOMPRESSW       "vpcompressw";
    Vpcomq            => X86_INS_VPCOMQ            "vpcomq";
    Vpcomub           => X86_INS_VPCOMUB           "vpcomub";
    Vpcomud           => X86_INS_VPCOMUD           "vpcomud";
    Vpcomuq           => X86_INS_VPCOMUQ           "vpcomuq";
    Vpcomuw           => X86_INS_VPCOMUW           "vpcomuw";
    Vpcomw            => X86_INS_VPCOMW            "vpcomw";
    Vpconflictd       => X86_INS_VPCONFLICTD       "vpconflictd";
    Vpconflictq       => X86_INS_VPCONFLICTQ       "vpconflictq";
    Vpdpbusds         => X86_INS_VPDPBUSDS         "vpdpbusds";
    Vpdpbusd          => X86_INS_VPDPBUSD          "vpdpbusd";
    Vpdpwssds         => X86_INS_VPDPWSSDS         "vpdpwssds";
    Vpdpwssd          => X86_INS_VPDPWSSD          "vpdpwssd";
    Vperm2f128        => X86_INS_VPERM2F128        "vperm2f128";
    Vperm2i128        => X86_INS_VPERM2I128        "vperm2i128";
    Vpermb            => X86_INS_VPERMB            "vpermb";
    Vpermd            => X86_INS_VPERMD            "vpermd";
    Vpermi2b          => X86_INS_VPERMI2B          "vpermi2b";
    Vpermi2d          => X86_INS_VPERMI2D          "vpermi2d";
    Vpermi2pd         => X86_INS_VPERMI2PD         "vpermi2pd";
    Vpermi2ps         => X86_INS_VPERMI2PS         "vpermi2ps";
    Vpermi2q          => X86_INS_VPERMI2Q          "vpermi2q";
    Vpermi2w          => X86_INS_VPERMI2W          "vpermi2w";
    Vpermil2pd        => X86_INS_VPERMIL2PD        "vpermil2pd";
    Vpermilpd         => X86_INS_VPERMILPD         "vpermilpd";
    Vpermil2ps        => X86_INS_VPERMIL2PS        "vpermil2ps";
    Vpermilps         => X86_INS_VPERMILPS         "vpermilps";
    Vpermpd           => X86_INS_VPERMPD           "vpermpd";
    Vpermps           => X86_INS_VPERMPS           "vpermps";
    Vpermq            => X86_INS_VPERMQ            "vpermq";
    Vpermt2b          => X86_INS_VPERMT2B          "vpermt2b";
    Vpermt2d          => X86_INS_VPERMT2D          "vpermt2d";
    Vpermt2pd         => X86_INS_VPERMT2PD         "vpermt2pd";
    Vpermt2ps         => X86_INS_VPERMT2PS         "vpermt2ps";
    Vpermt2q          => X86_INS_VPERMT2Q          "vpermt2q";
    Vpermt2w          => X86_INS_VPERMT2W          "vpermt2w";
    Vpermw            => X86_INS_VPERMW            "vpermw";
    Vpexpandb         => X86_INS_VPEXPANDB         "vpexpandb";
    Vpexpandd         => X86_INS_VPEXPANDD         "vpexpandd";
    Vpexpandq         => X86_INS_VPEXPANDQ         "vpexpandq";
    Vpexpandw         => X86_INS_VPEXPANDW         "vpexpandw";
    Vpextrb           => X86_INS_VPEXTRB           "vpextrb";
    Vpextrd           => X86_INS_VPEXTRD           "vpextrd";
    Vpextrq           => X86_INS_VPEXTRQ           "vpextrq";
    Vpextrw           => X86_INS_VPEXTRW           "vpextrw";
    Vpgatherdd        => X86_INS_VPGATHERDD        "vpgatherdd";
    Vpgatherdq        => X86_INS_VPGATHERDQ        "vpgatherdq";
    Vpgatherqd        => X86_INS_VPGATHERQD        "vpgatherqd";
    Vpgatherqq        => X86_INS_VPGATHERQQ        "vpgatherqq";
    Vphaddbd          => X86_INS_VPHADDBD          "vphaddbd";
    Vphaddbq          => X86_INS_VPHADDBQ          "vphaddbq";
    Vphaddbw          => X86_INS_VPHADDBW          "vphaddbw";
    Vphadddq          => X86_INS_VPHADDDQ          "vphadddq";
    Vphaddd           => X86_INS_VPHADDD           "vphaddd";
    Vphaddsw          => X86_INS_VPHADDSW          "vphaddsw";
    Vphaddubd         => X86_INS_VPHADDUBD         "vphaddubd";
    Vphaddubq         => X86_INS_VPHADDUBQ         "vphaddubq";
    Vphaddubw         => X86_INS_VPHADDUBW         "vphaddubw";
    Vphaddudq         => X86_INS_VPHADDUDQ         "vphaddudq";
    Vphadduwd         => X86_INS_VPHADDUWD         "vphadduwd";
    Vphadduwq         => X86_INS_VPHADDUWQ         "vphadduwq";
    Vphaddwd          => X86_INS_VPHADDWD          "vphaddwd";
    Vphaddwq          => X86_INS_VPHADDWQ          "vphaddwq";
    Vphaddw           => X86_INS_VPHADDW           "vphaddw";
    Vphminposuw       => X86_INS_VPHMINPOSUW       "vphminposuw";
    Vphsubbw          => X86_INS_VPHSUBBW          "vphsubbw";
    Vphsubdq          => X86_INS_VPHSUBDQ          "vphsubdq";
    Vphsubd           => X86_INS_VPHSUBD           "vphsubd";
    Vphsubsw          => X86_INS_VPHSUBSW          "vphsubsw";
    Vphsubwd          => X86_INS_VPHSUBWD          "vphsubwd";
    Vphsubw           => X86_INS_VPHSUBW           "vphsubw";
    Vpinsrb           => X86_INS_VPINSRB           "vpinsrb";
    Vpinsrd           => X86_INS_VPINSRD           "vpinsrd";
    Vpinsrq           => X86_INS_VPINSRQ           "vpinsrq";
    Vpinsrw           => X86_INS_VPINSRW           "vpinsrw";
    Vplzcntd          => X86_INS_VPLZCNTD          "vplzcntd";
    Vplzcntq          => X86_INS_VPLZCNTQ          "vplzcntq";
    Vpmacsdd          => X86_INS_VPMACSDD          "vpmacsdd";
    Vpmacsdqh         => X86_INS_VPMACSDQH         "vpmacsdqh";
    Vpmacsdql         => X86_INS_VPMACSDQL         "vpmacsdql";
    Vpmacssdd         => X86_INS_VPMACSSDD         "vpmacssdd";
    Vpmacssdqh        => X86_INS_VPMACSSDQH        "vpmacssdqh";
    Vpmacssdql        => X86_INS_VPMACSSDQL        "vpmacssdql";
    Vpmacsswd         => X86_INS_VPMACSSWD         "vpmacsswd";
    Vpmacssww         => X86_INS_VPMACSSWW         "vpmacssww";
    Vpmacswd          => X86_INS_VPMACSWD          "vpmacswd";
    Vpmacsww          => X86_INS_VPMACSWW          "vpmacsww";
    Vpmadcsswd        => X86_INS_VPMADCSSWD        "vpmadcsswd";
    Vpmadcswd         => X86_INS_VPMADCSWD         "vpmadcswd";
    Vpmadd52huq       => X86_INS_VPMADD52HUQ       "vpmadd52huq";
    Vpmadd52luq       => X86_INS_VPMADD52LUQ       "vpmadd52luq";
    Vpmaddubsw        => X86_INS_VPMADDUBSW        "vpmaddubsw";
    Vpmaddwd          => X86_INS_VPMADDWD          "vpmaddwd";
    Vpmaskmovd        => X86_INS_VPMASKMOVD        "vpmaskmovd";
    Vpmaskmovq        => X86_INS_VPMASKMOVQ        "vpmaskmovq";
    Vpmaxsb           => X86_INS_VPMAXSB           "vpmaxsb";
    Vpmaxsd           => X86_INS_VPMAXSD           "vpmaxsd";
    Vpmaxsq           => X86_INS_VPMAXSQ           "vpmaxsq";
    Vpmaxsw           => X86_INS_VPMAXSW           "vpmaxsw";
    Vpmaxub           => X86_INS_VPMAXUB           "vpmaxub";
    Vpmaxud           => X86_INS_VPMAXUD           "vpmaxud";
    Vpmaxuq           => X86_INS_VPMAXUQ           "vpmaxuq";
    Vpmaxuw           => X86_INS_VPMAXUW           "vpmaxuw";
    Vpminsb           => X86_INS_VPMINSB           "vpminsb";
    Vpminsd           => X86_INS_VPMINSD           "vpminsd";
    Vpminsq           => X86_INS_VPMINSQ           "vpminsq";
    Vpminsw           => X86_INS_VPMINSW           "vpminsw";
    Vpminub           => X86_INS_VPMINUB           "vpminub";
    Vpminud           => X86_INS_VPMINUD           "vpminud";
    Vpminuq           => X86_INS_VPMINUQ           "vpminuq";
    Vpminuw           => X86_INS_VPMINUW           "vpminuw";
    Vpmovb2m          => X86_INS_VPMOVB2M          "vpmovb2m";
    Vpmovd2m          => X86_INS_VPMOVD2M          "vpmovd2m";
    Vpmovdb           => X86_INS_VPMOVDB           "vpmovdb";
    Vpmovdw           => X86_INS_VPMOVDW           "vpmovdw";
    Vpmovm2b          => X86_INS_VPMOVM2B          "vpmovm2b";
    Vpmovm2d          => X86_INS_VPMOVM2D          "vpmovm2d";
    Vpmovm2q          => X86_INS_VPMOVM2Q          "vpmovm2q";
    Vpmovm2w          => X86_INS_VPMOVM2W          "vpmovm2w";
    Vpmovmskb         => X86_INS_VPMOVMSKB         "vpmovmskb";
    Vpmovq2m          => X86_INS_VPMOVQ2M          "vpmovq2m";
    Vpmovqb           => X86_INS_VPMOVQB           "vpmovqb";
    Vpmovqd           => X86_INS_VPMOVQD           "vpmovqd";
    Vpmovqw           => X86_INS_VPMOVQW           "vpmovqw";
    Vpmovsdb          => X86_INS_VPMOVSDB          "vpmovsdb";
    Vpmovsdw          => X86_INS_VPMOVSDW          "vpmovsdw";
    Vpmovsqb          => X86_INS_VPMOVSQB          "vpmovsqb";
    Vpmovsqd          => X86_INS_VPMOVSQD          "vpmovsqd";
    Vpmovsqw          => X86_INS_VPMOVSQW          "vpmovsqw";
    Vpmovswb          => X86_INS_VPMOVSWB          "vpmovswb";
    Vpmovsxbd         => X86_INS_VPMOVSXBD         "vpmovsxbd";
    Vpmovsxbq         => X86_INS_VPMOVSXBQ         "vpmovsxbq";
    Vpmovsxbw         => X86_INS_VPMOVSXBW         "vpmovsxbw";
    Vpmovsxdq         => X86_INS_VPMOVSXDQ         "vpmovsxdq";
    Vpmovsxwd         => X86_INS_VPMOVSXWD         "vpmovsxwd";
    Vpmovsxwq         => X86_INS_VPMOVSXWQ         "vpmovsxwq";
    Vpmovusdb         => X86_INS_VPMOVUSDB         "vpmovusdb";
    Vpmovusdw         => X86_INS_VPMOVUSDW         "vpmovusdw";
    Vpmovusqb         => X86_INS_VPMOVUSQB         "vpmovusqb";
    Vpmovusqd         => X86_INS_VPMOVUSQD         "vpmovusqd";
    Vpmovusqw         => X86_INS_VPMOVUSQW         "vpmovusqw";
    Vpmovuswb         => X86_INS_VPMOVUSWB         "vpmovuswb";
    Vpmovw2m          => X86_INS_VPMOVW2M          "vpmovw2m";
    Vpmovwb           => X86_INS_VPMOVWB           "vpmovwb";
    Vpmovzxbd         => X86_INS_VPMOVZXBD         "vpmovzxbd";
    Vpmovzxbq         => X86_INS_VPMOVZXBQ         "vpmovzxbq";
    Vpmovzxbw         => X86_INS_VPMOVZXBW         "vpmovzxbw";
    Vpmovzxdq         => X86_INS_VPMOVZXDQ         "vpmovzxdq";
    Vpmovzxwd         => X86_INS_VPMOVZXWD         "vpmovzxwd";
    Vpmovzxwq         => X86_INS_VPMOVZXWQ         "vpmovzxwq";
    Vpmuldq           => X86_INS_VPMULDQ           "vpmuldq";
    Vpmulhrsw         => X86_INS_VPMULHRSW         "vpmulhrsw";
    Vpmulhuw          => X86_INS_VPMULHUW          "vpmulhuw";
    Vpmulhw           => X86_INS_VPMULHW           "vpmulhw";
    Vpmulld           => X86_INS_VPMULLD           "vpmulld";
    Vpmullq           => X86_INS_VPMULLQ           "vpmullq";
    Vpmullw           => X86_INS_VPMULLW           "vpmullw";
    Vpmultishiftqb    => X86_INS_VPMULTISHIFTQB    "vpmultishiftqb";
    Vpmuludq          => X86_INS_VPMULUDQ          "vpmuludq";
    Vpopcntb          => X86_INS_VPOPCNTB          "vpopcntb";
    Vpopcntd          => X86_INS_VPOPCNTD          "vpopcntd";
    Vpopcntq          => X86_INS_VPOPCNTQ          "vpopcntq";
    Vpopcntw          => X86_INS_VPOPCNTW          "vpopcntw";
    Vpord             => X86_INS_VPORD             "vpord";
    Vporq             => X86_INS_VPORQ             "vporq";
    Vpor              => X86_INS_VPOR              "vpor";
    Vpperm            => X86_INS_VPPERM            "vpperm";
    Vprold            => X86_INS_VPROLD            "vprold";
    Vprolq            => X86_INS_VPROLQ            "vprolq";
    Vprolvd           => X86_INS_VPROLVD           "vprolvd";
    Vprolvq           => X86_INS_VPROLVQ           "vprolvq";
    Vprord            => X86_INS_VPRORD            "vprord";
    Vprorq            => X86_INS_VPRORQ            "vprorq";
    Vprorvd           => X86_INS_VPRORVD           "vprorvd";
    Vprorvq           => X86_INS_VPRORVQ           "vprorvq";
    Vprotb            => X86_INS_VPROTB            "vprotb";
    Vprotd            => X86_INS_VPROTD            "vprotd";
    Vprotq            => X86_INS_VPROTQ            "vprotq";
    Vprotw            => X86_INS_VPROTW            "vprotw";
    Vpsadbw           => X86_INS_VPSADBW           "vpsadbw";
    Vpscatterdd       => X86_INS_VPSCATTERDD       "vpscatterdd";
    Vpscatterdq       => X86_INS_VPSCATTERDQ       "vpscatterdq";
    Vpscatterqd       => X86_INS_VPSCATTERQD       "vpscatterqd";
    Vpscatterqq       => X86_INS_VPSCATTERQQ       "vpscatterqq";
    Vpshab            => X86_INS_VPSHAB            "vpshab";
    Vpshad            => X86_INS_VPSHAD            "vpshad";
    Vpshaq            => X86_INS_VPSHAQ            "vpshaq";
    Vpshaw            => X86_INS_VPSHAW            "vpshaw";
    Vpshlb            => X86_INS_VPSHLB            "vpshlb";
    Vpshldd           => X86_INS_VPSHLDD           "vpshldd";
    Vpshldq           => X86_INS_VPSHLDQ           "vpshldq";
    Vpshldvd          => X86_INS_VPSHLDVD          "vpshldvd";
    Vpshldvq          => X86_INS_VPSHLDVQ          "vpshldvq";
    Vpshldvw          => X86_INS_VPSHLDVW          "vpshldvw";
    Vpshldw           => X86_INS_VPSHLDW           "vpshldw";
    Vpshld            => X86_INS_VPSHLD            "vpshld";
    Vpshlq            => X86_INS_VPSHLQ            "vpshlq";
    Vpshlw            => X86_INS_VPSHLW            "vpshlw";
    Vpshrdd           => X86_INS_VPSHRDD           "vpshrdd";
    Vpshrdq           => X86_INS_VPSHRDQ           "vpshrdq";
    Vpshrdvd          => X86_INS_VPSHRDVD          "vpshrdvd";
    Vpshrdvq          => X86_INS_VPSHRDVQ          "vpshrdvq";
    Vpshrdvw          => X86_INS_VPSHRDVW          "vpshrdvw";
    Vpshrdw           => X86_INS_VPSHRDW           "vpshrdw";
    Vpshufbitqmb      => X86_INS_VPSHUFBITQMB      "vpshufbitqmb";
    Vpshufb           => X86_INS_VPSHUFB           "vpshufb";
    Vpshufd           => X86_INS_VPSHUFD           "vpshufd";
    Vpshufhw          => X86_INS_VPSHUFHW          "vpshufhw";
    Vpshuflw          => X86_INS_VPSHUFLW          "vpshuflw";
    Vpsignb           => X86_INS_VPSIGNB           "vpsignb";
    Vpsignd           => X86_INS_VPSIGND           "vpsignd";
    Vpsignw           => X86_INS_VPSIGNW           "vpsignw";
    Vpslldq           => X86_INS_VPSLLDQ           "vpslldq";
    Vpslld            => X86_INS_VPSLLD            "vpslld";
    Vpsllq            => X86_INS_VPSLLQ            "vpsllq";
    Vpsllvd           => X86_INS_VPSLLVD           "vpsllvd";
    Vpsllvq           => X86_INS_VPSLLVQ           "vpsllvq";
    Vpsllvw           => X86_INS_VPSLLVW           "vpsllvw";
    Vpsllw            => X86_INS_VPSLLW            "vpsllw";
    Vpsrad            => X86_INS_VPSRAD            "vpsrad";
    Vpsraq            => X86_INS_VPSRAQ            "vpsraq";
    Vpsravd           => X86_INS_VPSRAVD           "vpsravd";
    Vpsravq           => X86_INS_VPSRAVQ           "vpsravq";
    Vpsravw           => X86_INS_VPSRAVW           "vpsravw";
    Vpsraw            => X86_INS_VPSRAW            "vpsraw";
    Vpsrldq           => X86_INS_VPSRLDQ           "vpsrldq";
    Vpsrld            => X86_INS_VPSRLD            "vpsrld";
    Vpsrlq            => X86_INS_VPSRLQ            "vpsrlq";
    Vpsrlvd           => X86_INS_VPSRLVD           "vpsrlvd";
    Vpsrlvq           => X86_INS_VPSRLVQ           "vpsrlvq";
    Vpsrlvw           => X86_INS_VPSRLVW           "vpsrlvw";
    Vpsrlw            => X86_INS_VPSRLW            "vpsrlw";
    Vpsubb            => X86_INS_VPSUBB            "vpsubb";
    Vpsubd            => X86_INS_VPSUBD            "vpsubd";
    Vpsubq            => X86_INS_VPSUBQ            "vpsubq";
    Vpsubsb           => X86_INS_VPSUBSB           "vpsubsb";
    Vpsubsw           => X86_INS_VPSUBSW           "vpsubsw";
    Vpsubusb          => X86_INS_VPSUBUSB          "vpsubusb";
    Vpsubusw          => X86_INS_VPSUBUSW          "vpsubusw";
    Vpsubw            => X86_INS_VPSUBW            "vpsubw";
    Vpternlogd        => X86_INS_VPTERNLOGD        "vpternlogd";
    Vpternlogq        => X86_INS_VPTERNLOGQ        "vpternlogq";
    Vptestmb          => X86_INS_VPTESTMB          "vptestmb";
    Vptestmd          => X86_INS_VPTESTMD          "vptestmd";
    Vptestmq          => X86_INS_VPTESTMQ          "vptestmq";
    Vptestmw          => X86_INS_VPTESTMW          "vptestmw";
    Vptestnmb         => X86_INS_VPTESTNMB         "vptestnmb";
    Vptestnmd         => X86_INS_VPTESTNMD         "vptestnmd";
    Vptestnmq         => X86_INS_VPTESTNMQ         "vptestnmq";
    Vptestnmw         => X86_INS_VPTESTNMW         "vptestnmw";
    Vptest            => X86_INS_VPTEST            "vptest";
    Vpunpckhbw        => X86_INS_VPUNPCKHBW        "vpunpckhbw";
    Vpunpckhdq        => X86_INS_VPUNPCKHDQ        "vpunpckhdq";
    Vpunpckhqdq       => X86_INS_VPUNPCKHQDQ       "vpunpckhqdq";
    Vpunpckhwd        => X86_INS_VPUNPCKHWD        "vpunpckhwd";
    Vpunpcklbw        => X86_INS_VPUNPCKLBW        "vpunpcklbw";
    Vpunpckldq        => X86_INS_VPUNPCKLDQ        "vpunpckldq";
    Vpunpcklqdq       => X86_INS_VPUNPCKLQDQ       "vpunpcklqdq";
    Vpunpcklwd        => X86_INS_VPUNPCKLWD        "vpunpcklwd";
    Vpxord            => X86_INS_VPXORD            "vpxord";
    Vpxorq            => X86_INS_VPXORQ            "vpxorq";
    Vpxor             => X86_INS_VPXOR             "vpxor";
    Vrangepd          => X86_INS_VRANGEPD          "vrangepd";
    Vrangeps          => X86_INS_VRANGEPS          "vrangeps";
    Vrangesd          => X86_INS_VRANGESD          "vrangesd";
    Vrangess          => X86_INS_VRANGESS          "vrangess";
    Vrcp14pd          => X86_INS_VRCP14PD          "vrcp14pd";
    Vrcp14ps          => X86_INS_VRCP14PS          "vrcp14ps";
    Vrcp14sd          => X86_INS_VRCP14SD          "vrcp14sd";
    Vrcp14ss          => X86_INS_VRCP14SS          "vrcp14ss";
    Vrcp28pd          => X86_INS_VRCP28PD          "vrcp28pd";
    Vrcp28ps          => X86_INS_VRCP28PS          "vrcp28ps";
    Vrcp28sd          => X86_INS_VRCP28SD          "vrcp28sd";
    Vrcp28ss          => X86_INS_VRCP28SS          "vrcp28ss";
    Vrcpps            => X86_INS_VRCPPS            "vrcpps";
    Vrcpss            => X86_INS_VRCPSS            "vrcpss";
    Vreducepd         => X86_INS_VREDUCEPD         "vreducepd";
    Vreduceps         => X86_INS_VREDUCEPS         "vreduceps";
    Vreducesd         => X86_INS_VREDUCESD         "vreducesd";
    Vreducess         => X86_INS_VREDUCESS         "vreducess";
    Vrndscalepd       => X86_INS_VRNDSCALEPD       "vrndscalepd";
    Vrndscaleps       => X86_INS_VRNDSCALEPS       "vrndscaleps";
    Vrndscalesd       => X86_INS_VRNDSCALESD       "vrndscalesd";
    Vrndscaless       => X86_INS_VRNDSCALESS       "vrndscaless";
    Vroundpd          => X86_INS_VROUNDPD          "vroundpd";
    Vroundps          => X86_INS_VROUNDPS          "vroundps";
    Vroundsd          => X86_INS_VROUNDSD          "vroundsd";
    Vroundss          => X86_INS_VROUNDSS          "vroundss";
    Vrsqrt14pd        => X86_INS_VRSQRT14PD        "vrsqrt14pd";
    Vrsqrt14ps        => X86_INS_VRSQRT14PS        "vrsqrt14ps";
    Vrsqrt14sd        => X86_INS_VRSQRT14SD        "vrsqrt14sd";
    Vrsqrt14ss        => X86_INS_VRSQRT14SS        "vrsqrt14ss";
    Vrsqrt28pd        => X86_INS_VRSQRT28PD        "vrsqrt28pd";
    Vrsqrt28ps        => X86_INS_VRSQRT28PS        "vrsqrt28ps";
    Vrsqrt28sd        => X86_INS_VRSQRT28SD        "vrsqrt28sd";
    Vrsqrt28ss        => X86_INS_VRSQRT28SS        "vrsqrt28ss";
    Vrsqrtps          => X86_INS_VRSQRTPS          "vrsqrtps";
    Vrsqrtss          => X86_INS_VRSQRTSS          "vrsqrtss";
    Vscalefpd         => X86_INS_VSCALEFPD         "vscalefpd";
    Vscalefps         => X86_INS_VSCALEFPS         "vscalefps";
    Vscalefsd         => X86_INS_VSCALEFSD         "vscalefsd";
    Vscalefss         => X86_INS_VSCALEFSS         "vscalefss";
    Vscatterdpd       => X86_INS_VSCATTERDPD       "vscatterdpd";
    Vscatterdps       => X86_INS_VSCATTERDPS       "vscatterdps";
    Vscatterpf0dpd    => X86_INS_VSCATTERPF0DPD    "vscatterpf0dpd";
    Vscatterpf0dps    => X86_INS_VSCATTERPF0DPS    "vscatterpf0dps";
    Vscatterpf0qpd    => X86_INS_VSCATTERPF0QPD    "vscatterpf0qpd";
    Vscatterpf0qps    => X86_INS_VSCATTERPF0QPS    "vscatterpf0qps";
    Vscatterpf1dpd    => X86_INS_VSCATTERPF1DPD    "vscatterpf1dpd";
    Vscatterpf1dps    => X86_INS_VSCATTERPF1DPS    "vscatterpf1dps";
    Vscatterpf1qpd    => X86_INS_VSCATTERPF1QPD    "vscatterpf1qpd";
    Vscatterpf1qps    => X86_INS_VSCATTERPF1QPS    "vscatterpf1qps";
    Vscatterqpd       => X86_INS_VSCATTERQPD       "vscatterqpd";
    Vscatterqps       => X86_INS_VSCATTERQPS       "vscatterqps";
    Vshuff32x4        => X86_INS_VSHUFF32X4        "vshuff32x4";
    Vshuff64x2        => X86_INS_VSHUFF64X2        "vshuff64x2";
    Vshufi32x4        => X86_INS_VSHUFI32X4        "vshufi32x4";
    Vshufi64x2        => X86_INS_VSHUFI64X2        "vshufi64x2";
    Vshufpd           => X86_INS_VSHUFPD           "vshufpd";
    Vshufps           => X86_INS_VSHUFPS           "vshufps";
    Vsqrtpd           => X86_INS_VSQRTPD           "vsqrtpd";
    Vsqrtps           => X86_INS_VSQRTPS           "vsqrtps";
    Vsqrtsd           => X86_INS_VSQRTSD           "vsqrtsd";
    Vsqrtss           => X86_INS_VSQRTSS           "vsqrtss";
    Vstmxcsr          => X86_INS_VSTMXCSR          "vstmxcsr";
    Vsubpd            => X86_INS_VSUBPD            "vsubpd";
    Vsubps            => X86_INS_VSUBPS            "vsubps";
    Vsubsd            => X86_INS_VSUBSD            "vsubsd";
    Vsubss            => X86_INS_VSUBSS            "vsubss";
    Vtestpd           => X86_INS_VTESTPD           "vtestpd";
    Vtestps           => X86_INS_VTESTPS           "vtestps";
    Vucomisd          => X86_INS_VUCOMISD          "vucomisd";
    Vucomiss          => X86_INS_VUCOMISS          "vucomiss";
    Vunpckhpd         => X86_INS_VUNPCKHPD         "vunpckhpd";
    Vunpckhps         => X86_INS_VUNPCKHPS         "vunpckhps";
    Vunpcklpd         => X86_INS_VUNPCKLPD         "vunpcklpd";
    Vunpcklps         => X86_INS_VUNPCKLPS         "vunpcklps";
    Vxorpd            => X86_INS_VXORPD            "vxorpd";
    Vxorps            => X86_INS_VXORPS            "vxorps";
    Vzeroall          => X86_INS_VZEROALL          "vzeroall";
    Vzeroupper        => X86_INS_VZEROUPPER        "vzeroupper";
    Wait              => X86_INS_WAIT              "wait";
    Wbinvd            => X86_INS_WBINVD            "wbinvd";
    Wbnoinvd          => X86_INS_WBNOINVD          "wbnoinvd";
    Wrfsbase          => X86_INS_WRFSBASE          "wrfsbase";
    Wrgsbase          => X86_INS_WRGSBASE          "wrgsbase";
    Wrmsr             => X86_INS_WRMSR             "wrmsr";
    Wrpkru            => X86_INS_WRPKRU            "wrpkru";
    Wrssd             => X86_INS_WRSSD             "wrssd";
    Wrssq             => X86_INS_WRSSQ             "wrssq";
    Wrussd            => X86_INS_WRUSSD            "wrussd";
    Wrussq            => X86_INS_WRUSSQ            "wrussq";
    Xabort            => X86_INS_XABORT            "xabort";
    Xacquire          => X86_INS_XACQUIRE          "xacquire";
    Xadd              => X86_INS_XADD              "xadd";
    Xbegin            => X86_INS_XBEGIN            "xbegin";
    Xchg              => X86_INS_XCHG              "xchg";
    Fxch              => X86_INS_FXCH              "fxch";
    Xcryptcbc         => X86_INS_XCRYPTCBC         "xcryptcbc";
    Xcryptcfb         => X86_INS_XCRYPTCFB         "xcryptcfb";
    Xcryptctr         => X86_INS_XCRYPTCTR         "xcryptctr";
    Xcryptecb         => X86_INS_XCRYPTECB         "xcryptecb";
    Xcryptofb         => X86_INS_XCRYPTOFB         "xcryptofb";
    Xend              => X86_INS_XEND              "xend";
    Xgetbv            => X86_INS_XGETBV            "xgetbv";
    Xlatb             => X86_INS_XLATB             "xlatb";
    Xor               => X86_INS_XOR               "xor";
    Xorpd             => X86_INS_XORPD             "xorpd";
    Xorps             => X86_INS_XORPS             "xorps";
    Xrelease          => X86_INS_XRELEASE          "xrelease";
    Xrstor            => X86_INS_XRSTOR            "xrstor";
    Xrstor64          => X86_INS_XRSTOR64          "xrstor64";
    Xrstors           => X86_INS_XRSTORS           "xrstors";
    Xrstors64         => X86_INS_XRSTORS64         "xrstors64";
    Xsave             => X86_INS_XSAVE             "xsave";
    Xsave64           => X86_INS_XSAVE64           "xsave64";
    Xsavec            => X86_INS_XSAVEC            "xsavec";
    Xsavec64          => X86_INS_XSAVEC64          "xsavec64";
    Xsaveopt          => X86_INS_XSAVEOPT          "xsaveopt";
    Xsaveopt64        => X86_INS_XSAVEOPT64        "xsaveopt64";
    Xsaves            => X86_INS_XSAVES            "xsaves";
    Xsaves64          => X86_INS_XSAVES64          "xsaves64";
    Xsetbv            => X86_INS_XSETBV            "xsetbv";
    Xsha1             => X86_INS_XSHA1             "xsha1";
    Xsha256           => X86_INS_XSHA256           "xsha256";
    Xstore            => X86_INS_XSTORE            "xstore";
    Xtest             => X86_INS_XTEST             "xtest";
}

impl Mnemonic {
    /// Translate a raw decoder instruction id. Ids outside the catalog become `Invalid`.
    pub fn from_raw(id: u32) -> Mnemonic {
        CATALOG.get(id as usize).copied().unwrap_or(Mnemonic::Invalid)
    }

    /// Decoder-defined instruction id.
    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn is_invalid(self) -> bool {
        self == Mnemonic::Invalid
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_catalog_is_indexed_by_id() {
        for (i, mnemonic) in CATALOG.iter().enumerate() {
            assert_eq!(mnemonic.id() as usize, i);
        }
        assert_eq!(CATALOG.len(), X86Insn::X86_INS_ENDING as usize);
    }

    #[rstest]
    #[case(X86Insn::X86_INS_CALL, Mnemonic::Call, "call")]
    #[case(X86Insn::X86_INS_MOV, Mnemonic::Mov, "mov")]
    #[case(X86Insn::X86_INS_CMPXCHG16B, Mnemonic::Cmpxchg16b, "cmpxchg16b")]
    #[case(X86Insn::X86_INS_FDISI8087_NOP, Mnemonic::Fdisi8087Nop, "fdisi8087_nop")]
    fn test_from_raw(#[case] raw: X86Insn, #[case] mnemonic: Mnemonic, #[case] name: &str) {
        assert_eq!(Mnemonic::from_raw(raw as u32), mnemonic);
        assert_eq!(mnemonic.name(), name);
        assert_eq!(mnemonic.to_string(), name);
    }

    #[test]
    fn test_unknown_id_is_invalid() {
        assert!(Mnemonic::from_raw(0).is_invalid());
        assert!(Mnemonic::from_raw(X86Insn::X86_INS_ENDING as u32).is_invalid());
        assert!(Mnemonic::from_raw(u32::MAX).is_invalid());
    }

    #[test]
    fn test_serializes_as_name() {
        assert_eq!(serde_json::to_string(&Mnemonic::Jmp).unwrap(), "\"jmp\"");
        let back: Mnemonic = serde_json::from_str("\"fdisi8087_nop\"").unwrap();
        assert_eq!(back, Mnemonic::Fdisi8087Nop);
    }
}
