//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC, BCS: Branch on carry
//! - BEQ, BNE: Branch on zero
//! - BMI, BPL: Branch on negative
//! - BVC, BVS: Branch on overflow
//!
//! All branch instructions use relative addressing; the resolver has already
//! turned the signed offset into an absolute target. Cycle timing varies based
//! on whether the branch is taken and whether a page boundary is crossed:
//!
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::Operand;
use crate::constants::pages_differ;
use crate::{MemoryBus, CPU};

/// Moves PC to the branch target when `condition` holds.
///
/// Returns the extra cycles incurred on top of the base 2.
fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool, operand: Operand) -> u8 {
    let Some(target) = operand.address() else {
        return 0;
    };

    if !condition {
        return 0;
    }

    // Page comparison is against the address following the branch
    let extra = if pages_differ(cpu.pc, target) { 2 } else { 1 };
    cpu.pc = target;
    extra
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, !cpu.status.carry, operand)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, cpu.status.carry, operand)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, cpu.status.zero, operand)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, !cpu.status.zero, operand)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, cpu.status.negative, operand)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, !cpu.status.negative, operand)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, !cpu.status.overflow, operand)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) -> u8 {
    branch_if(cpu, cpu.status.overflow, operand)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_at(pc: u16) -> CPU<FlatMemory> {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.pc = pc;
        cpu
    }

    #[test]
    fn test_not_taken_costs_nothing_extra() {
        let mut cpu = cpu_at(0x8002);
        cpu.status.carry = true;

        assert_eq!(execute_bcc(&mut cpu, Operand::Memory(0x8010)), 0);
        assert_eq!(cpu.pc, 0x8002);
    }

    #[test]
    fn test_taken_same_page() {
        let mut cpu = cpu_at(0x8002);

        assert_eq!(execute_bcc(&mut cpu, Operand::Memory(0x8010)), 1);
        assert_eq!(cpu.pc, 0x8010);
    }

    #[test]
    fn test_taken_across_page() {
        let mut cpu = cpu_at(0x80F0);
        cpu.status.zero = true;

        assert_eq!(execute_beq(&mut cpu, Operand::Memory(0x8105)), 2);
        assert_eq!(cpu.pc, 0x8105);
    }
}
