//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use nes_cpu::{FlatMemory, MemoryBus, CPU};

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
    assert!(cpu.step());
    while !cpu.is_completed() {
        cpu.step();
    }
    cpu.cycles() - start
}

#[test]
fn test_asl_accumulator() {
    // LDA #$81; ASL A
    let mut cpu = setup_cpu(&[0xA9, 0x81, 0x0A]);

    run_instruction(&mut cpu);
    let cycles = run_instruction(&mut cpu);

    assert_eq!(cpu.a(), 0x02);
    assert!(cpu.flags().carry);
    assert!(!cpu.flags().negative);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cycles, 2);
}

#[test]
fn test_asl_zero_page() {
    // ASL $10
    let mut cpu = setup_cpu(&[0x06, 0x10]);
    cpu.memory_mut().write(0x0010, 0x40);

    let cycles = run_instruction(&mut cpu);

    assert_eq!(cpu.memory().read(0x0010), 0x80);
    assert!(cpu.flags().negative);
    assert!(!cpu.flags().carry);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cycles, 5);
}

#[test]
fn test_asl_absolute_x_always_pays_index_cycle() {
    // LDX #$01; ASL $10FF,X
    let mut cpu = setup_cpu(&[0xA2, 0x01, 0x1E, 0xFF, 0x10]);
    cpu.memory_mut().write(0x1100, 0x01);

    run_instruction(&mut cpu);
    let cycles = run_instruction(&mut cpu);

    assert_eq!(cpu.memory().read(0x1100), 0x02);
    assert_eq!(cycles, 7);
}

#[test]
fn test_lsr_accumulator_to_zero() {
    // LDA #$01; LSR A
    let mut cpu = setup_cpu(&[0xA9, 0x01, 0x4A]);

    run_instruction(&mut cpu);
    run_instruction(&mut cpu);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().zero);
    assert!(cpu.flags().carry);
    assert!(!cpu.flags().negative);
}

#[test]
fn test_lsr_always_clears_negative() {
    // LDA #$FF; LSR A
    let mut cpu = setup_cpu(&[0xA9, 0xFF, 0x4A]);

    run_instruction(&mut cpu);
    assert!(cpu.flags().negative);
    run_instruction(&mut cpu);

    assert_eq!(cpu.a(), 0x7F);
    assert!(!cpu.flags().negative);
}

#[test]
fn test_rol_accumulator_through_carry() {
    // SEC; LDA #$80; ROL A
    let mut cpu = setup_cpu(&[0x38, 0xA9, 0x80, 0x2A]);

    run_instruction(&mut cpu);
    run_instruction(&mut cpu);
    run_instruction(&mut cpu);

    assert_eq!(cpu.a(), 0x01);
    assert!(cpu.flags().carry);
    assert!(!cpu.flags().zero);
}

#[test]
fn test_ror_absolute() {
    // SEC; ROR $0300
    let mut cpu = setup_cpu(&[0x38, 0x6E, 0x00, 0x03]);
    cpu.memory_mut().write(0x0300, 0x02);

    run_instruction(&mut cpu);
    let cycles = run_instruction(&mut cpu);

    assert_eq!(cpu.memory().read(0x0300), 0x81);
    assert!(!cpu.flags().carry);
    assert!(cpu.flags().negative);
    assert_eq!(cycles, 6);
}

#[test]
fn test_ror_accumulator_without_carry() {
    // CLC; LDA #$01; ROR A
    let mut cpu = setup_cpu(&[0x18, 0xA9, 0x01, 0x6A]);

    run_instruction(&mut cpu);
    run_instruction(&mut cpu);
    run_instruction(&mut cpu);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flags().carry);
    assert!(cpu.flags().zero);
}
