//! # Flag Instructions
//!
//! Each instruction here sets or clears exactly one status flag and costs
//! 2 cycles:
//! - CLC, SEC: Carry
//! - CLI, SEI: Interrupt disable
//! - CLD, SED: Decimal (stored but never consulted by ADC/SBC)
//! - CLV: Overflow

use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.carry = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.carry = true;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// A latched IRQ becomes serviceable at the next instruction boundary.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.interrupt_disable = false;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.interrupt_disable = true;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.decimal = false;
}

/// Executes the SED (Set Decimal Flag) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.decimal = true;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.status.overflow = false;
}
