//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: Add/subtract with carry (binary only, D is ignored)
//! - AND, ORA, EOR: Bitwise combine into the accumulator
//! - BIT: Test bits against the accumulator
//! - CMP, CPX, CPY: Compare a register with memory

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Adds `value` and the carry to the accumulator.
///
/// Shared by ADC and SBC; SBC passes the one's complement of its operand,
/// which turns `A + !M + C` into `A - M - (1 - C)`.
///
/// Flags affected:
/// - C: bit 8 of the 9-bit sum
/// - Z, N: from the 8-bit result
/// - V: both inputs share a sign and the result's sign differs
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.status.carry as u16;
    let result = sum as u8;

    cpu.status.carry = sum > 0xFF;
    cpu.status.overflow = (a ^ result) & (value ^ result) & 0x80 != 0;
    cpu.status.set_zn(result);

    cpu.a = result;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `operand` - Location of the value to add
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Carry acts as an inverted borrow: set it (SEC) before a fresh subtraction.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `operand` - Location of the value to subtract
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, !value);
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a &= cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a |= cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a ^= cpu.read_operand(operand);
    cpu.status.set_zn(cpu.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// The accumulator is left unchanged.
///
/// Flags affected:
/// - Z: set if `A & M` is zero
/// - N: bit 7 of M
/// - V: bit 6 of M
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.status.zero = cpu.a & value == 0;
    cpu.status.negative = value & 0x80 != 0;
    cpu.status.overflow = value & 0x40 != 0;
}

/// Compares `register` with `value` as `register - value`, discarding the result.
///
/// Flags affected:
/// - C: set if `register >= value`
/// - Z, N: from the difference
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let difference = register.wrapping_sub(value);

    cpu.status.carry = register >= value;
    cpu.status.set_zn(difference);
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    compare(cpu, cpu.a, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    compare(cpu, cpu.x, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    compare(cpu, cpu.y, value);
}
