//! # Opcode Metadata Table
//!
//! The complete 256-entry table that drives dispatch. Every opcode byte maps to
//! an instruction, an addressing mode and a base cycle cost.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Mapped to [`Instruction::Illegal`], an
//!   implicit-mode placeholder that does nothing for two cycles. This is not
//!   an emulation of the real undocumented behaviour.
//!
//! Base cycles exclude the dynamic extras (page crossings on indexed reads,
//! taken branches), which the engine adds at execution time.

use crate::addressing::AddressingMode;

/// The operation an opcode performs, independent of its addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode placeholder.
    Illegal,
}

impl Instruction {
    /// Three-letter assembler mnemonic, `"???"` for illegal opcodes.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Instruction::Adc => "ADC",
            Instruction::And => "AND",
            Instruction::Asl => "ASL",
            Instruction::Bcc => "BCC",
            Instruction::Bcs => "BCS",
            Instruction::Beq => "BEQ",
            Instruction::Bit => "BIT",
            Instruction::Bmi => "BMI",
            Instruction::Bne => "BNE",
            Instruction::Bpl => "BPL",
            Instruction::Brk => "BRK",
            Instruction::Bvc => "BVC",
            Instruction::Bvs => "BVS",
            Instruction::Clc => "CLC",
            Instruction::Cld => "CLD",
            Instruction::Cli => "CLI",
            Instruction::Clv => "CLV",
            Instruction::Cmp => "CMP",
            Instruction::Cpx => "CPX",
            Instruction::Cpy => "CPY",
            Instruction::Dec => "DEC",
            Instruction::Dex => "DEX",
            Instruction::Dey => "DEY",
            Instruction::Eor => "EOR",
            Instruction::Inc => "INC",
            Instruction::Inx => "INX",
            Instruction::Iny => "INY",
            Instruction::Jmp => "JMP",
            Instruction::Jsr => "JSR",
            Instruction::Lda => "LDA",
            Instruction::Ldx => "LDX",
            Instruction::Ldy => "LDY",
            Instruction::Lsr => "LSR",
            Instruction::Nop => "NOP",
            Instruction::Ora => "ORA",
            Instruction::Pha => "PHA",
            Instruction::Php => "PHP",
            Instruction::Pla => "PLA",
            Instruction::Plp => "PLP",
            Instruction::Rol => "ROL",
            Instruction::Ror => "ROR",
            Instruction::Rti => "RTI",
            Instruction::Rts => "RTS",
            Instruction::Sbc => "SBC",
            Instruction::Sec => "SEC",
            Instruction::Sed => "SED",
            Instruction::Sei => "SEI",
            Instruction::Sta => "STA",
            Instruction::Stx => "STX",
            Instruction::Sty => "STY",
            Instruction::Tax => "TAX",
            Instruction::Tay => "TAY",
            Instruction::Tsx => "TSX",
            Instruction::Txa => "TXA",
            Instruction::Txs => "TXS",
            Instruction::Tya => "TYA",
            Instruction::Illegal => "???",
        }
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nes_cpu::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation performed.
    pub instruction: Instruction,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Cycle cost before dynamic extras.
    pub base_cycles: u8,

    /// Whether an indexed page crossing costs one more cycle.
    ///
    /// Only set for read instructions. Stores and read-modify-write
    /// instructions always pay the indexing cycle, so it is already part of
    /// `base_cycles`.
    pub page_penalty: bool,
}

impl OpcodeMetadata {
    /// Instruction mnemonic, `"???"` for illegal opcodes.
    pub const fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }

    /// Total instruction size in bytes (opcode + operands).
    pub const fn size_bytes(&self) -> u8 {
        1 + self.addressing_mode.operand_bytes()
    }

    /// False for the undocumented placeholders.
    pub const fn is_documented(&self) -> bool {
        !matches!(self.instruction, Instruction::Illegal)
    }
}

/// Entry used for every undocumented opcode.
pub const ILLEGAL_OPCODE: OpcodeMetadata = OpcodeMetadata {
    instruction: Instruction::Illegal,
    addressing_mode: AddressingMode::Implicit,
    base_cycles: 2,
    page_penalty: false,
};

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use nes_cpu::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic(), "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic(), "???");
/// assert!(!illegal.is_documented());
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = build_table();

const fn op(instruction: Instruction, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        instruction,
        addressing_mode,
        base_cycles,
        page_penalty: false,
    }
}

/// Same as [`op`], plus one cycle when indexing crosses a page.
const fn op_px(instruction: Instruction, addressing_mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        instruction,
        addressing_mode,
        base_cycles,
        page_penalty: true,
    }
}

#[rustfmt::skip]
const fn build_table() -> [OpcodeMetadata; 256] {
    use AddressingMode::*;
    use Instruction::*;

    let mut t = [ILLEGAL_OPCODE; 256];

    // Arithmetic
    t[0x69] = op(Adc, Immediate, 2);  t[0x65] = op(Adc, ZeroPage, 3);
    t[0x75] = op(Adc, ZeroPageX, 4);  t[0x6D] = op(Adc, Absolute, 4);
    t[0x7D] = op_px(Adc, AbsoluteX, 4); t[0x79] = op_px(Adc, AbsoluteY, 4);
    t[0x61] = op(Adc, IndirectX, 6);  t[0x71] = op_px(Adc, IndirectY, 5);

    t[0xE9] = op(Sbc, Immediate, 2);  t[0xE5] = op(Sbc, ZeroPage, 3);
    t[0xF5] = op(Sbc, ZeroPageX, 4);  t[0xED] = op(Sbc, Absolute, 4);
    t[0xFD] = op_px(Sbc, AbsoluteX, 4); t[0xF9] = op_px(Sbc, AbsoluteY, 4);
    t[0xE1] = op(Sbc, IndirectX, 6);  t[0xF1] = op_px(Sbc, IndirectY, 5);

    // Logic
    t[0x29] = op(And, Immediate, 2);  t[0x25] = op(And, ZeroPage, 3);
    t[0x35] = op(And, ZeroPageX, 4);  t[0x2D] = op(And, Absolute, 4);
    t[0x3D] = op_px(And, AbsoluteX, 4); t[0x39] = op_px(And, AbsoluteY, 4);
    t[0x21] = op(And, IndirectX, 6);  t[0x31] = op_px(And, IndirectY, 5);

    t[0x09] = op(Ora, Immediate, 2);  t[0x05] = op(Ora, ZeroPage, 3);
    t[0x15] = op(Ora, ZeroPageX, 4);  t[0x0D] = op(Ora, Absolute, 4);
    t[0x1D] = op_px(Ora, AbsoluteX, 4); t[0x19] = op_px(Ora, AbsoluteY, 4);
    t[0x01] = op(Ora, IndirectX, 6);  t[0x11] = op_px(Ora, IndirectY, 5);

    t[0x49] = op(Eor, Immediate, 2);  t[0x45] = op(Eor, ZeroPage, 3);
    t[0x55] = op(Eor, ZeroPageX, 4);  t[0x4D] = op(Eor, Absolute, 4);
    t[0x5D] = op_px(Eor, AbsoluteX, 4); t[0x59] = op_px(Eor, AbsoluteY, 4);
    t[0x41] = op(Eor, IndirectX, 6);  t[0x51] = op_px(Eor, IndirectY, 5);

    t[0x24] = op(Bit, ZeroPage, 3);   t[0x2C] = op(Bit, Absolute, 4);

    // Compare
    t[0xC9] = op(Cmp, Immediate, 2);  t[0xC5] = op(Cmp, ZeroPage, 3);
    t[0xD5] = op(Cmp, ZeroPageX, 4);  t[0xCD] = op(Cmp, Absolute, 4);
    t[0xDD] = op_px(Cmp, AbsoluteX, 4); t[0xD9] = op_px(Cmp, AbsoluteY, 4);
    t[0xC1] = op(Cmp, IndirectX, 6);  t[0xD1] = op_px(Cmp, IndirectY, 5);

    t[0xE0] = op(Cpx, Immediate, 2);  t[0xE4] = op(Cpx, ZeroPage, 3);
    t[0xEC] = op(Cpx, Absolute, 4);

    t[0xC0] = op(Cpy, Immediate, 2);  t[0xC4] = op(Cpy, ZeroPage, 3);
    t[0xCC] = op(Cpy, Absolute, 4);

    // Shifts and rotates
    t[0x0A] = op(Asl, Accumulator, 2); t[0x06] = op(Asl, ZeroPage, 5);
    t[0x16] = op(Asl, ZeroPageX, 6);   t[0x0E] = op(Asl, Absolute, 6);
    t[0x1E] = op(Asl, AbsoluteX, 7);

    t[0x4A] = op(Lsr, Accumulator, 2); t[0x46] = op(Lsr, ZeroPage, 5);
    t[0x56] = op(Lsr, ZeroPageX, 6);   t[0x4E] = op(Lsr, Absolute, 6);
    t[0x5E] = op(Lsr, AbsoluteX, 7);

    t[0x2A] = op(Rol, Accumulator, 2); t[0x26] = op(Rol, ZeroPage, 5);
    t[0x36] = op(Rol, ZeroPageX, 6);   t[0x2E] = op(Rol, Absolute, 6);
    t[0x3E] = op(Rol, AbsoluteX, 7);

    t[0x6A] = op(Ror, Accumulator, 2); t[0x66] = op(Ror, ZeroPage, 5);
    t[0x76] = op(Ror, ZeroPageX, 6);   t[0x6E] = op(Ror, Absolute, 6);
    t[0x7E] = op(Ror, AbsoluteX, 7);

    // Increment and decrement
    t[0xE6] = op(Inc, ZeroPage, 5);   t[0xF6] = op(Inc, ZeroPageX, 6);
    t[0xEE] = op(Inc, Absolute, 6);   t[0xFE] = op(Inc, AbsoluteX, 7);

    t[0xC6] = op(Dec, ZeroPage, 5);   t[0xD6] = op(Dec, ZeroPageX, 6);
    t[0xCE] = op(Dec, Absolute, 6);   t[0xDE] = op(Dec, AbsoluteX, 7);

    t[0xE8] = op(Inx, Implicit, 2);   t[0xC8] = op(Iny, Implicit, 2);
    t[0xCA] = op(Dex, Implicit, 2);   t[0x88] = op(Dey, Implicit, 2);

    // Branches
    t[0x90] = op(Bcc, Relative, 2);   t[0xB0] = op(Bcs, Relative, 2);
    t[0xF0] = op(Beq, Relative, 2);   t[0xD0] = op(Bne, Relative, 2);
    t[0x30] = op(Bmi, Relative, 2);   t[0x10] = op(Bpl, Relative, 2);
    t[0x50] = op(Bvc, Relative, 2);   t[0x70] = op(Bvs, Relative, 2);

    // Control flow
    t[0x00] = op(Brk, Implicit, 7);
    t[0x4C] = op(Jmp, Absolute, 3);   t[0x6C] = op(Jmp, Indirect, 5);
    t[0x20] = op(Jsr, Absolute, 6);
    t[0x40] = op(Rti, Implicit, 6);   t[0x60] = op(Rts, Implicit, 6);
    t[0xEA] = op(Nop, Implicit, 2);

    // Stack
    t[0x48] = op(Pha, Implicit, 3);   t[0x08] = op(Php, Implicit, 3);
    t[0x68] = op(Pla, Implicit, 4);   t[0x28] = op(Plp, Implicit, 4);

    // Flags
    t[0x18] = op(Clc, Implicit, 2);   t[0x38] = op(Sec, Implicit, 2);
    t[0x58] = op(Cli, Implicit, 2);   t[0x78] = op(Sei, Implicit, 2);
    t[0xD8] = op(Cld, Implicit, 2);   t[0xF8] = op(Sed, Implicit, 2);
    t[0xB8] = op(Clv, Implicit, 2);

    // Loads
    t[0xA9] = op(Lda, Immediate, 2);  t[0xA5] = op(Lda, ZeroPage, 3);
    t[0xB5] = op(Lda, ZeroPageX, 4);  t[0xAD] = op(Lda, Absolute, 4);
    t[0xBD] = op_px(Lda, AbsoluteX, 4); t[0xB9] = op_px(Lda, AbsoluteY, 4);
    t[0xA1] = op(Lda, IndirectX, 6);  t[0xB1] = op_px(Lda, IndirectY, 5);

    t[0xA2] = op(Ldx, Immediate, 2);  t[0xA6] = op(Ldx, ZeroPage, 3);
    t[0xB6] = op(Ldx, ZeroPageY, 4);  t[0xAE] = op(Ldx, Absolute, 4);
    t[0xBE] = op_px(Ldx, AbsoluteY, 4);

    t[0xA0] = op(Ldy, Immediate, 2);  t[0xA4] = op(Ldy, ZeroPage, 3);
    t[0xB4] = op(Ldy, ZeroPageX, 4);  t[0xAC] = op(Ldy, Absolute, 4);
    t[0xBC] = op_px(Ldy, AbsoluteX, 4);

    // Stores
    t[0x85] = op(Sta, ZeroPage, 3);   t[0x95] = op(Sta, ZeroPageX, 4);
    t[0x8D] = op(Sta, Absolute, 4);   t[0x9D] = op(Sta, AbsoluteX, 5);
    t[0x99] = op(Sta, AbsoluteY, 5);  t[0x81] = op(Sta, IndirectX, 6);
    t[0x91] = op(Sta, IndirectY, 6);

    t[0x86] = op(Stx, ZeroPage, 3);   t[0x96] = op(Stx, ZeroPageY, 4);
    t[0x8E] = op(Stx, Absolute, 4);

    t[0x84] = op(Sty, ZeroPage, 3);   t[0x94] = op(Sty, ZeroPageX, 4);
    t[0x8C] = op(Sty, Absolute, 4);

    // Transfers
    t[0xAA] = op(Tax, Implicit, 2);   t[0xA8] = op(Tay, Implicit, 2);
    t[0x8A] = op(Txa, Implicit, 2);   t[0x98] = op(Tya, Implicit, 2);
    t[0xBA] = op(Tsx, Implicit, 2);   t[0x9A] = op(Txs, Implicit, 2);

    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|m| m.is_documented()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_illegal_entries_are_inert_placeholders() {
        for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
            if !metadata.is_documented() {
                assert_eq!(
                    *metadata, ILLEGAL_OPCODE,
                    "Opcode 0x{:02X} should be the illegal placeholder",
                    opcode
                );
            }
        }
    }

    #[test]
    fn test_page_penalty_only_on_indexed_modes() {
        for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
            if metadata.page_penalty {
                assert!(
                    matches!(
                        metadata.addressing_mode,
                        AddressingMode::AbsoluteX
                            | AddressingMode::AbsoluteY
                            | AddressingMode::IndirectY
                    ),
                    "Opcode 0x{:02X} has a page penalty on {:?}",
                    opcode,
                    metadata.addressing_mode
                );
            }
        }
    }

    #[test]
    fn test_stores_never_take_page_penalty() {
        for metadata in OPCODE_TABLE.iter() {
            if matches!(
                metadata.instruction,
                Instruction::Sta | Instruction::Stx | Instruction::Sty
            ) {
                assert!(!metadata.page_penalty);
            }
        }
    }
}
