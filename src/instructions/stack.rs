//! # Stack Instructions
//!
//! - PHA, PLA: Push and pull the accumulator
//! - PHP, PLP: Push and pull the status register
//!
//! The stack lives in page one and grows downward. PHP and PLP move the
//! status byte verbatim: no bits are forced on the way in or out.

use crate::{MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags are affected.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.a);
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.push_byte(cpu.status.to_byte());
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.pull_byte();
    cpu.status.set_zn(cpu.a);
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.pull_byte();
    cpu.status = Status::from_byte(value);
}
