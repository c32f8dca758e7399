//! # Shift and Rotate Instructions
//!
//! This module implements bit shift operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Every instruction here works on either the accumulator or a memory
//! location, selected by the operand. The bit shifted out lands in C, and
//! Z and N follow the result.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Reads the operand, applies `shift`, writes the result back and updates flags.
///
/// `shift` receives the old value and the incoming carry and returns the
/// new value and the outgoing carry.
fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operand: Operand,
    shift: impl FnOnce(u8, bool) -> (u8, bool),
) {
    let value = cpu.read_operand(operand);
    let (result, carry) = shift(value, cpu.status.carry);

    cpu.write_operand(operand, result);
    cpu.status.carry = carry;
    cpu.status.set_zn(result);
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 moves into C and bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, _| (value << 1, value & 0x80 != 0));
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 moves into C and bit 7 becomes 0, so N always ends up clear.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, _| (value >> 1, value & 0x01 != 0));
}

/// Executes the ROL (Rotate Left) instruction.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    });
}

/// Executes the ROR (Rotate Right) instruction.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    modify(cpu, operand, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    #[test]
    fn test_asl_accumulator() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.a = 0x81;

        execute_asl(&mut cpu, Operand::Accumulator);

        assert_eq!(cpu.a, 0x02);
        assert!(cpu.status.carry);
        assert!(!cpu.status.negative);
    }

    #[test]
    fn test_ror_memory_pulls_in_carry() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.memory.write(0x0020, 0x01);
        cpu.status.carry = true;

        execute_ror(&mut cpu, Operand::Memory(0x0020));

        assert_eq!(cpu.memory.read(0x0020), 0x80);
        assert!(cpu.status.carry);
        assert!(cpu.status.negative);
        assert_eq!(cpu.a, 0x00);
    }

    #[test]
    fn test_lsr_to_zero() {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.a = 0x01;

        execute_lsr(&mut cpu, Operand::Accumulator);

        assert_eq!(cpu.a, 0x00);
        assert!(cpu.status.zero);
        assert!(cpu.status.carry);
    }
}
