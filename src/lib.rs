//! # NES 6502 CPU Core
//!
//! A tick-driven NMOS 6502 execution engine with per-instruction cycle
//! accounting, suitable as the CPU of a NES-style system emulator.
//!
//! The crate provides the CPU register file and status flags, a trait-based
//! memory bus, a table-driven opcode decoder, an addressing-mode resolver,
//! the semantics of all documented instructions, and IRQ/NMI servicing.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes_cpu::{CPU, FlatMemory, MemoryBus};
//!
//! let mut memory = FlatMemory::new();
//!
//! // Reset vector points at 0x8000
//! memory.write(0xFFFC, 0x00);
//! memory.write(0xFFFD, 0x80);
//!
//! // LDA #$42
//! memory.load(0x8000, &[0xA9, 0x42]).unwrap();
//!
//! let mut cpu = CPU::new(memory);
//! cpu.reset();
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//!
//! // Drain the reset sequence
//! while !cpu.is_completed() {
//!     cpu.step();
//! }
//!
//! // One tick runs the whole instruction; it then owes one more tick
//! assert!(cpu.step());
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.remaining_cycles(), 1);
//! ```
//!
//! ## Architecture
//!
//! - **Tick-driven**: [`CPU::step`] is one clock pulse; an `n`-cycle
//!   instruction spans exactly `n` calls
//! - **Table-driven decode**: [`OPCODE_TABLE`] maps every byte to an
//!   instruction, addressing mode, base cycle cost and page-cross rule
//! - **Bus abstraction**: the CPU is generic over [`MemoryBus`] and never
//!   assumes anything about the address space behind it
//! - **Binary arithmetic only**: the decimal flag is stored but ignored
//!
//! ## Modules
//!
//! - `cpu` - CPU state, the step state machine and interrupt servicing
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and operand resolution
//! - `status` - Processor status flags
//! - `config` - Behavior switches for ambiguous hardware details
//! - `constants` - Vectors, stack layout and cycle costs

pub mod addressing;
pub mod config;
pub mod constants;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand, Resolved};
pub use config::{CpuConfig, InterruptFrame};
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Instruction, OpcodeMetadata, ILLEGAL_OPCODE, OPCODE_TABLE};
pub use status::Status;

/// Errors raised while preparing memory for the CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// A program image does not fit between its start address and 0xFFFF.
    ImageOverflow {
        /// Requested load address.
        start: u16,
        /// Length of the rejected image in bytes.
        len: usize,
    },
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryError::ImageOverflow { start, len } => {
                write!(
                    f,
                    "Image of {} bytes at 0x{:04X} runs past the end of the address space",
                    len, start
                )
            }
        }
    }
}

impl std::error::Error for MemoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_error_display() {
        let err = MemoryError::ImageOverflow {
            start: 0xFFF0,
            len: 32,
        };
        assert_eq!(
            err.to_string(),
            "Image of 32 bytes at 0xFFF0 runs past the end of the address space"
        );
    }
}
