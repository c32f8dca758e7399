//! Fuzz target for the tick-driven step loop.
//!
//! Seeds memory with arbitrary code and data, resets the CPU and drives it
//! for a bounded number of ticks while injecting interrupt requests, looking
//! for panics and broken timing invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nes_cpu::{CpuConfig, FlatMemory, InterruptFrame, MemoryBus, CPU};

/// Memory regions populated from the fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Code placed at the reset target 0x8000
    code: [u8; 64],
    /// Zero page contents, pointers for the indirect modes
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Data region at 0x0200
    data: [u8; 256],
}

/// A tick at which to raise an interrupt line
#[derive(Debug, Arbitrary)]
struct InterruptEvent {
    tick: u16,
    nmi: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    memory: FuzzMemory,
    events: Vec<InterruptEvent>,
    ticks: u16,
    indirect_indexed_page_penalty: bool,
    program_counter_first: bool,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    let _ = memory.load(0x0000, &input.memory.zero_page);
    let _ = memory.load(0x0100, &input.memory.stack_page);
    let _ = memory.load(0x0200, &input.memory.data);
    let _ = memory.load(0x8000, &input.memory.code);

    // Reset, NMI and IRQ vectors
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFA, 0x10);
    memory.write(0xFFFB, 0x80);
    memory.write(0xFFFE, 0x20);
    memory.write(0xFFFF, 0x80);

    let config = CpuConfig {
        indirect_indexed_page_penalty: input.indirect_indexed_page_penalty,
        interrupt_frame: if input.program_counter_first {
            InterruptFrame::ProgramCounterFirst
        } else {
            InterruptFrame::StatusFirst
        },
    };

    let mut cpu = CPU::with_config(memory, config);
    cpu.reset();

    let ticks = input.ticks.min(4096) as u64;
    for tick in 0..ticks {
        for event in input.events.iter().filter(|e| e.tick as u64 == tick) {
            if event.nmi {
                cpu.request_nmi();
            } else {
                let accepted = cpu.request_irq();
                assert_eq!(accepted, !cpu.flags().interrupt_disable);
            }
        }

        let before = cpu.elapsed_instructions();
        let was_idle = cpu.is_completed();
        let fetched = cpu.step();

        // Only an idle tick may fetch, and each fetch retires one instruction
        assert!(!fetched || was_idle);
        assert_eq!(cpu.elapsed_instructions(), before + fetched as u64);
        // No instruction or interrupt entry costs more than 8 cycles
        assert!(cpu.remaining_cycles() < 8);
    }

    assert_eq!(cpu.cycles(), ticks);
});
