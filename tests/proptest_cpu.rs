//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check arithmetic, compare and stack behavior
//! against straightforward reference models across all operand values.

use nes_cpu::{FlatMemory, Instruction, MemoryBus, Status, CPU, OPCODE_TABLE};
use proptest::prelude::*;

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.load(0x8000, program).unwrap();

    let mut cpu = CPU::new(memory);
    cpu.reset();
    cpu.run_for_cycles(8);
    cpu
}

/// Runs one instruction to completion and returns the ticks it took.
fn run_instruction(cpu: &mut CPU<FlatMemory>) -> u64 {
    let start = cpu.cycles();
    cpu.step();
    while !cpu.is_completed() {
        cpu.step();
    }
    cpu.cycles() - start
}

fn carry_opcode(carry: bool) -> u8 {
    // SEC / CLC
    if carry {
        0x38
    } else {
        0x18
    }
}

/// Opcodes that fall through to the next instruction.
fn sequential_opcodes() -> Vec<u8> {
    OPCODE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, m)| {
            !matches!(
                m.instruction,
                Instruction::Bcc
                    | Instruction::Bcs
                    | Instruction::Beq
                    | Instruction::Bne
                    | Instruction::Bmi
                    | Instruction::Bpl
                    | Instruction::Bvc
                    | Instruction::Bvs
                    | Instruction::Jmp
                    | Instruction::Jsr
                    | Instruction::Rts
                    | Instruction::Rti
                    | Instruction::Brk
            )
        })
        .map(|(opcode, _)| opcode as u8)
        .collect()
}

proptest! {
    /// Property: every load sets Z iff the value is zero and N from bit 7
    #[test]
    fn prop_loads_set_zn(value in any::<u8>(), load in prop::sample::select(vec![0xA9u8, 0xA2, 0xA0])) {
        let mut cpu = setup_cpu(&[load, value]);

        run_instruction(&mut cpu);

        let loaded = match load {
            0xA9 => cpu.a(),
            0xA2 => cpu.x(),
            _ => cpu.y(),
        };
        prop_assert_eq!(loaded, value);
        prop_assert_eq!(cpu.flags().zero, value == 0);
        prop_assert_eq!(cpu.flags().negative, value & 0x80 != 0);
    }

    /// Property: ADC matches 9-bit addition with signed overflow detection
    #[test]
    fn prop_adc_matches_reference(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu(&[carry_opcode(carry), 0xA9, a, 0x69, m]);

        for _ in 0..3 {
            run_instruction(&mut cpu);
        }

        let sum = a as u16 + m as u16 + carry as u16;
        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;
        let flags = cpu.flags();

        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(flags.carry, sum > 0xFF);
        prop_assert_eq!(flags.overflow, !(-128..=127).contains(&signed));
        prop_assert_eq!(flags.zero, sum as u8 == 0);
        prop_assert_eq!(flags.negative, sum & 0x80 != 0);
    }

    /// Property: SBC matches subtraction with an inverted borrow
    #[test]
    fn prop_sbc_matches_reference(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let mut cpu = setup_cpu(&[carry_opcode(carry), 0xA9, a, 0xE9, m]);

        for _ in 0..3 {
            run_instruction(&mut cpu);
        }

        let borrow = !carry as i16;
        let difference = a as i16 - m as i16 - borrow;
        let signed = a as i8 as i16 - m as i8 as i16 - borrow;
        let flags = cpu.flags();

        prop_assert_eq!(cpu.a(), difference as u8);
        prop_assert_eq!(flags.carry, difference >= 0);
        prop_assert_eq!(flags.overflow, !(-128..=127).contains(&signed));
    }

    /// Property: CMP sets C on unsigned >=, Z on equality, N from the difference
    #[test]
    fn prop_cmp_flags(a in any::<u8>(), m in any::<u8>()) {
        let mut cpu = setup_cpu(&[0xA9, a, 0xC9, m]);

        run_instruction(&mut cpu);
        run_instruction(&mut cpu);

        let flags = cpu.flags();
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(flags.carry, a >= m);
        prop_assert_eq!(flags.zero, a == m);
        prop_assert_eq!(flags.negative, a.wrapping_sub(m) & 0x80 != 0);
    }

    /// Property: a balanced push/pull returns the value and the stack pointer
    #[test]
    fn prop_pha_pla_round_trip(value in any::<u8>(), sp in any::<u8>()) {
        // LDX #sp; TXS; LDA #value; PHA; LDA #$00; PLA
        let mut cpu = setup_cpu(&[0xA2, sp, 0x9A, 0xA9, value, 0x48, 0xA9, 0x00, 0x68]);

        for _ in 0..6 {
            run_instruction(&mut cpu);
        }

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.memory().read(0x0100 | sp as u16), value);
    }

    /// Property: PHP followed by PLP leaves the status unchanged
    #[test]
    fn prop_php_plp_round_trip(status in any::<u8>()) {
        // LDA #status; PHA; PLP; PHP; PLP
        let mut cpu = setup_cpu(&[0xA9, status, 0x48, 0x28, 0x08, 0x28]);

        for _ in 0..3 {
            run_instruction(&mut cpu);
        }
        prop_assert_eq!(cpu.status(), status);

        run_instruction(&mut cpu);
        run_instruction(&mut cpu);
        prop_assert_eq!(cpu.status(), status);
        prop_assert_eq!(cpu.sp(), 0xFD);
    }

    /// Property: status packing round-trips every byte
    #[test]
    fn prop_status_byte_round_trip(byte in any::<u8>()) {
        prop_assert_eq!(Status::from_byte(byte).to_byte(), byte);
    }

    /// Property: non-branching opcodes advance PC by their size and cost at
    /// least their base cycles, plus at most one page-crossing cycle
    #[test]
    fn prop_sequential_opcodes_advance_pc(
        index in 0usize..sequential_opcodes().len(),
        op1 in any::<u8>(),
        op2 in any::<u8>(),
    ) {
        let opcode = sequential_opcodes()[index];
        let metadata = &OPCODE_TABLE[opcode as usize];
        let mut cpu = setup_cpu(&[opcode, op1, op2]);

        let cycles = run_instruction(&mut cpu);

        prop_assert_eq!(cpu.pc(), 0x8000 + metadata.size_bytes() as u16);
        prop_assert!(cycles >= metadata.base_cycles as u64);
        prop_assert!(cycles <= metadata.base_cycles as u64 + metadata.page_penalty as u64);
        prop_assert_eq!(cpu.elapsed_instructions(), 1);
    }
}
