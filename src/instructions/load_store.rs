//! # Load and Store Instructions
//!
//! This module implements register loads and stores:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, leaving flags alone

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Flags affected:
/// - Z: Set if the loaded value is 0
/// - N: Set if bit 7 of the loaded value is set
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a = cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
}

/// Executes the LDX (Load X Register) instruction. Updates Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x = cpu.read_operand(operand);
    cpu.status.set_zn(cpu.x);
}

/// Executes the LDY (Load Y Register) instruction. Updates Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y = cpu.read_operand(operand);
    cpu.status.set_zn(cpu.y);
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.a);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.x);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.y);
}
