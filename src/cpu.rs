//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the tick-driven fetch-decode-execute state machine.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: [`Status`]
//! - **Remaining cycles**: ticks left before the next instruction may start
//!
//! ## Execution Model
//!
//! The host calls [`CPU::step`] once per emulated clock pulse. The engine is
//! either *busy* (finishing the cycles of the last instruction) or *idle*. An
//! idle tick fetches and executes a whole instruction at once and then stays
//! busy for the rest of its cycle cost, so an instruction of `n` cycles spans
//! exactly `n` ticks.
//!
//! IRQ and NMI requests are latched and only taken at an instruction boundary.
//!
//! ## Lifecycle
//!
//! [`CPU::new`] only wires the memory in. Register contents are undefined until
//! [`CPU::reset`] runs; stepping before the first reset is a caller error.

use log::{debug, trace};

use crate::constants::{
    IRQ_CYCLES, IRQ_VECTOR, NMI_CYCLES, NMI_VECTOR, RESET_CYCLES, RESET_STACK_POINTER,
    RESET_VECTOR, STACK_BASE,
};
use crate::instructions;
use crate::{
    AddressingMode, CpuConfig, InterruptFrame, MemoryBus, OpcodeMetadata, Status, OPCODE_TABLE,
};

/// Hardware interrupt kinds serviced at instruction boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interrupt {
    Irq,
    Nmi,
}

impl Interrupt {
    const fn vector(self) -> u16 {
        match self {
            Interrupt::Irq => IRQ_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
        }
    }

    const fn cycles(self) -> u32 {
        match self {
            Interrupt::Irq => IRQ_CYCLES,
            Interrupt::Nmi => NMI_CYCLES,
        }
    }
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait. The CPU
/// owns its memory for its whole lifetime; use [`CPU::memory`] and
/// [`CPU::memory_mut`] to inspect or patch it between ticks.
///
/// # Examples
///
/// ```
/// use nes_cpu::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
/// memory.write(0x8000, 0xE8); // INX
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset();
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
///
/// // Reset keeps the CPU busy for a few ticks, then INX runs
/// while !cpu.step() {}
/// assert_eq!(cpu.x(), 0x01);
/// assert_eq!(cpu.elapsed_instructions(), 1);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Status flags
    pub(crate) status: Status,

    /// Ticks left before the next fetch. Zero means idle.
    pub(crate) remaining_cycles: u32,

    /// Instructions retired
    pub(crate) elapsed_instructions: u64,

    /// Ticks driven through `step`
    pub(crate) cycles: u64,

    /// Latched IRQ request
    pub(crate) irq_pending: bool,

    /// Latched NMI request
    pub(crate) nmi_pending: bool,

    pub(crate) config: CpuConfig,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU around `memory` with the default configuration.
    ///
    /// Call [`CPU::reset`] before the first [`CPU::step`].
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a CPU around `memory` with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            status: Status::default(),
            remaining_cycles: 0,
            elapsed_instructions: 0,
            cycles: 0,
            irq_pending: false,
            nmi_pending: false,
            config,
            memory,
        }
    }

    /// Advances the CPU by one clock tick.
    ///
    /// Returns `true` if an instruction was fetched and executed on this tick.
    ///
    /// 1. Busy: count one remaining cycle down
    /// 2. Idle with a serviceable NMI or IRQ latched: enter the handler
    /// 3. Idle otherwise: fetch, decode, resolve, execute, refill the counter
    ///
    /// # Examples
    ///
    /// ```
    /// use nes_cpu::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8000, 0xEA); // NOP, 2 cycles
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.reset();
    /// cpu.run_for_cycles(8); // drain reset
    ///
    /// assert!(cpu.step());   // NOP executes on its first cycle
    /// assert!(!cpu.step());  // and finishes on its second
    /// assert!(cpu.is_completed());
    /// ```
    pub fn step(&mut self) -> bool {
        self.cycles += 1;

        if self.remaining_cycles > 0 {
            self.remaining_cycles -= 1;
            return false;
        }

        if let Some(interrupt) = self.take_interrupt() {
            self.service_interrupt(interrupt);
            // The servicing tick is the sequence's first cycle
            self.remaining_cycles = interrupt.cycles() - 1;
            return false;
        }

        let opcode_pc = self.pc;
        let opcode = self.fetch_byte();
        let metadata = OPCODE_TABLE[opcode as usize];

        if !metadata.is_documented() {
            debug!("illegal opcode 0x{opcode:02X} at 0x{opcode_pc:04X}, treated as NOP");
        }

        let resolved = self.resolve(metadata.addressing_mode);

        let mut cycles = metadata.base_cycles as u32;
        if resolved.page_crossed && self.charges_page_penalty(&metadata) {
            cycles += 1;
        }
        cycles += instructions::execute(self, metadata.instruction, resolved.operand) as u32;

        self.remaining_cycles = cycles - 1;
        self.elapsed_instructions += 1;

        trace!(
            "{opcode_pc:04X}  {opcode:02X}  {}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{cycles}",
            metadata.mnemonic(),
            self.a,
            self.x,
            self.y,
            self.status.to_byte(),
            self.sp,
        );

        true
    }

    /// Ticks until one instruction has been executed, returning the ticks consumed.
    ///
    /// Any cycles still owed by a previous instruction, reset or interrupt are
    /// drained first. The remaining cycles of the executed instruction are not.
    pub fn step_instruction(&mut self) -> u64 {
        let start = self.cycles;
        while !self.step() {}
        self.cycles - start
    }

    /// Ticks exactly `cycle_budget` times.
    ///
    /// Returns the number of instructions executed. Useful for frame-locked
    /// hosts, e.g. 29780 ticks per NTSC frame.
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let start = self.elapsed_instructions;
        for _ in 0..cycle_budget {
            self.step();
        }
        self.elapsed_instructions - start
    }

    /// Resets the CPU.
    ///
    /// - A, X and Y are cleared
    /// - SP is set to 0xFD
    /// - Status is cleared except for the unused bit
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - Latched interrupts are discarded
    ///
    /// Nothing is pushed; stack memory is left untouched. The CPU then stays
    /// busy for [`RESET_CYCLES`] ticks.
    pub fn reset(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = RESET_STACK_POINTER;
        self.status = Status {
            unused: true,
            ..Status::default()
        };
        self.pc = self.memory.read_word(RESET_VECTOR);
        self.irq_pending = false;
        self.nmi_pending = false;
        self.remaining_cycles = RESET_CYCLES;

        debug!("reset, PC = 0x{:04X}", self.pc);
    }

    /// Requests a maskable interrupt.
    ///
    /// Refused (returns `false`) while the interrupt-disable flag is set.
    /// An accepted request is serviced at the next instruction boundary at
    /// which the flag is still clear.
    pub fn request_irq(&mut self) -> bool {
        if self.status.interrupt_disable {
            debug!("IRQ refused, interrupt disable set");
            return false;
        }

        self.irq_pending = true;
        true
    }

    /// Requests a non-maskable interrupt, serviced at the next instruction boundary.
    pub fn request_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Picks the interrupt to service at this boundary, NMI first.
    fn take_interrupt(&mut self) -> Option<Interrupt> {
        if self.nmi_pending {
            self.nmi_pending = false;
            return Some(Interrupt::Nmi);
        }

        // A masked IRQ stays latched until the flag clears
        if self.irq_pending && !self.status.interrupt_disable {
            self.irq_pending = false;
            return Some(Interrupt::Irq);
        }

        None
    }

    /// Pushes the return frame and jumps through the interrupt's vector.
    fn service_interrupt(&mut self, interrupt: Interrupt) {
        self.status.break_command = false;
        let status = self.status.to_byte();

        match self.config.interrupt_frame {
            InterruptFrame::StatusFirst => {
                self.push_byte(status);
                self.push_word(self.pc);
            }
            InterruptFrame::ProgramCounterFirst => {
                self.push_word(self.pc);
                self.push_byte(status);
            }
        }

        self.status.interrupt_disable = true;

        let return_pc = self.pc;
        self.pc = self.memory.read_word(interrupt.vector());

        trace!(
            "{interrupt:?} from 0x{return_pc:04X} to 0x{:04X}",
            self.pc
        );
    }

    fn charges_page_penalty(&self, metadata: &OpcodeMetadata) -> bool {
        if !metadata.page_penalty {
            return false;
        }
        metadata.addressing_mode != AddressingMode::IndirectY
            || self.config.indirect_indexed_page_penalty
    }

    // ========== Stack ==========

    /// Writes a byte at 0x0100 | SP, then decrements SP (wrapping).
    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at 0x0100 | SP.
    pub(crate) fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes the high byte, then the low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte(value as u8);
    }

    /// Pulls the low byte, then the high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull_byte() as u16;
        let hi = self.pull_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status.to_byte()
    }

    /// Returns the status flags.
    pub fn flags(&self) -> Status {
        self.status
    }

    /// Returns the number of instructions executed.
    pub fn elapsed_instructions(&self) -> u64 {
        self.elapsed_instructions
    }

    /// Returns the ticks left before the next instruction may start.
    pub fn remaining_cycles(&self) -> u32 {
        self.remaining_cycles
    }

    /// Returns the number of ticks driven through [`CPU::step`].
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// True when the CPU is at an instruction boundary.
    pub fn is_completed(&self) -> bool {
        self.remaining_cycles == 0
    }

    /// True while an accepted IRQ waits for an instruction boundary.
    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// True while an NMI waits for an instruction boundary.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU, handing its memory back.
    pub fn into_memory(self) -> M {
        self.memory
    }
}
