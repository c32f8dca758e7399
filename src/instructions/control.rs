//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump to address
//! - JSR, RTS: Subroutine call and return
//! - RTI: Return from interrupt
//!
//! NOP and unassigned opcodes need no handler; the dispatcher skips them.

use crate::addressing::Operand;
use crate::constants::IRQ_VECTOR;
use crate::{MemoryBus, Status, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK forces a software interrupt by:
/// 1. Skipping the padding byte that follows the opcode
/// 2. Pushing the high byte, then the low byte, of PC
/// 3. Pushing the processor status with the B bit set
/// 4. Setting the I (interrupt disable) flag
/// 5. Loading PC from the IRQ vector at $FFFE/$FFFF
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B: Set in the pushed byte only, the live flag is untouched
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.push_word(cpu.pc);

    let status = cpu.status.to_byte() | Status::BREAK;
    cpu.push_byte(status);

    cpu.status.interrupt_disable = true;
    cpu.pc = cpu.memory.read_word(IRQ_VECTOR);
}

/// Executes the JMP (Jump) instruction.
///
/// The indirect form's page-wrap quirk is handled by the resolver, so both
/// forms arrive here as a plain target address. No flags are affected.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Some(target) = operand.address() {
        cpu.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (return point minus one),
/// high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    if let Some(target) = operand.address() {
        let return_address = cpu.pc.wrapping_sub(1);
        cpu.push_word(return_address);
        cpu.pc = target;
    }
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.pc = cpu.pull_word().wrapping_add(1);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte, then the program counter. Unlike RTS the pulled
/// address is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) {
    let status = cpu.pull_byte();
    cpu.status = Status::from_byte(status);
    cpu.pc = cpu.pull_word();
}
