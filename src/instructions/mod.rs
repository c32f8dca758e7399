//! # 6502 Instruction Implementations
//!
//! This module contains the semantics of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function taking the
//! CPU and the operand location produced by the addressing resolver. PC has
//! already been advanced past the operand bytes when it runs.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::Operand;
use crate::{Instruction, MemoryBus, CPU};

/// Runs `instruction` against `operand`.
///
/// Returns the extra cycles the instruction itself incurred (taken branches).
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    instruction: Instruction,
    operand: Operand,
) -> u8 {
    match instruction {
        Instruction::Bcc => return branches::execute_bcc(cpu, operand),
        Instruction::Bcs => return branches::execute_bcs(cpu, operand),
        Instruction::Beq => return branches::execute_beq(cpu, operand),
        Instruction::Bne => return branches::execute_bne(cpu, operand),
        Instruction::Bmi => return branches::execute_bmi(cpu, operand),
        Instruction::Bpl => return branches::execute_bpl(cpu, operand),
        Instruction::Bvc => return branches::execute_bvc(cpu, operand),
        Instruction::Bvs => return branches::execute_bvs(cpu, operand),

        Instruction::Adc => alu::execute_adc(cpu, operand),
        Instruction::Sbc => alu::execute_sbc(cpu, operand),
        Instruction::And => alu::execute_and(cpu, operand),
        Instruction::Ora => alu::execute_ora(cpu, operand),
        Instruction::Eor => alu::execute_eor(cpu, operand),
        Instruction::Bit => alu::execute_bit(cpu, operand),
        Instruction::Cmp => alu::execute_cmp(cpu, operand),
        Instruction::Cpx => alu::execute_cpx(cpu, operand),
        Instruction::Cpy => alu::execute_cpy(cpu, operand),

        Instruction::Asl => shifts::execute_asl(cpu, operand),
        Instruction::Lsr => shifts::execute_lsr(cpu, operand),
        Instruction::Rol => shifts::execute_rol(cpu, operand),
        Instruction::Ror => shifts::execute_ror(cpu, operand),

        Instruction::Inc => inc_dec::execute_inc(cpu, operand),
        Instruction::Dec => inc_dec::execute_dec(cpu, operand),
        Instruction::Inx => inc_dec::execute_inx(cpu),
        Instruction::Iny => inc_dec::execute_iny(cpu),
        Instruction::Dex => inc_dec::execute_dex(cpu),
        Instruction::Dey => inc_dec::execute_dey(cpu),

        Instruction::Lda => load_store::execute_lda(cpu, operand),
        Instruction::Ldx => load_store::execute_ldx(cpu, operand),
        Instruction::Ldy => load_store::execute_ldy(cpu, operand),
        Instruction::Sta => load_store::execute_sta(cpu, operand),
        Instruction::Stx => load_store::execute_stx(cpu, operand),
        Instruction::Sty => load_store::execute_sty(cpu, operand),

        Instruction::Brk => control::execute_brk(cpu),
        Instruction::Jmp => control::execute_jmp(cpu, operand),
        Instruction::Jsr => control::execute_jsr(cpu, operand),
        Instruction::Rts => control::execute_rts(cpu),
        Instruction::Rti => control::execute_rti(cpu),
        Instruction::Nop | Instruction::Illegal => {}

        Instruction::Pha => stack::execute_pha(cpu),
        Instruction::Php => stack::execute_php(cpu),
        Instruction::Pla => stack::execute_pla(cpu),
        Instruction::Plp => stack::execute_plp(cpu),

        Instruction::Clc => flags::execute_clc(cpu),
        Instruction::Sec => flags::execute_sec(cpu),
        Instruction::Cli => flags::execute_cli(cpu),
        Instruction::Sei => flags::execute_sei(cpu),
        Instruction::Cld => flags::execute_cld(cpu),
        Instruction::Sed => flags::execute_sed(cpu),
        Instruction::Clv => flags::execute_clv(cpu),

        Instruction::Tax => transfer::execute_tax(cpu),
        Instruction::Tay => transfer::execute_tay(cpu),
        Instruction::Txa => transfer::execute_txa(cpu),
        Instruction::Tya => transfer::execute_tya(cpu),
        Instruction::Tsx => transfer::execute_tsx(cpu),
        Instruction::Txs => transfer::execute_txs(cpu),
    }

    0
}
