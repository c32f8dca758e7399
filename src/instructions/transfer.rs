//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA: Copy between the accumulator and an index register
//! - TSX, TXS: Copy between X and the stack pointer
//!
//! Every transfer updates Z and N from the copied value except TXS, which
//! leaves the flags untouched.

use crate::{MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.a;
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.a;
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.x;
    cpu.status.set_zn(cpu.a);
}

pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.a = cpu.y;
    cpu.status.set_zn(cpu.a);
}

pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.sp;
    cpu.status.set_zn(cpu.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that does not touch Z and N.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}
