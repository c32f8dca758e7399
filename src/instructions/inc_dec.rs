//! # Increment and Decrement Instructions
//!
//! - INC, DEC: Adjust a memory location by one (read-modify-write)
//! - INX, INY, DEX, DEY: Adjust an index register by one
//!
//! All of them wrap at the byte boundary and update Z and N. Carry and
//! overflow are never touched.

use crate::addressing::Operand;
use crate::{MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand).wrapping_add(1);
    cpu.write_operand(operand, value);
    cpu.status.set_zn(value);
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand).wrapping_sub(1);
    cpu.write_operand(operand, value);
    cpu.status.set_zn(value);
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.status.set_zn(cpu.y);
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.status.set_zn(cpu.x);
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.status.set_zn(cpu.y);
}
