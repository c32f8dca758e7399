//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns a mode into an operand location.
//!
//! Resolution happens right after the opcode fetch, with PC pointing at the
//! first operand byte. The resolver consumes the operand bytes (advancing PC)
//! and yields an [`Operand`]: a tagged location that instructions read and
//! write through [`CPU::read_operand`] and [`CPU::write_operand`]. Nothing
//! ever holds a reference into memory or into the register file.

use crate::constants::pages_differ;
use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the next instruction.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Where an instruction's operand lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand (implicit addressing). Never read or written.
    Implied,

    /// The accumulator register.
    Accumulator,

    /// A memory cell. For JMP, JSR and branches this is the target address.
    Memory(u16),
}

impl Operand {
    /// The memory address, if the operand is a memory cell.
    pub const fn address(self) -> Option<u16> {
        match self {
            Operand::Memory(addr) => Some(addr),
            Operand::Implied | Operand::Accumulator => None,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,

    /// Indexing moved the effective address onto another page.
    pub page_crossed: bool,
}

impl Resolved {
    const fn at(operand: Operand) -> Self {
        Self {
            operand,
            page_crossed: false,
        }
    }
}

/// Adds an index to a zero-page base, staying inside page zero.
#[inline]
pub(crate) const fn zero_page_index(base: u8, index: u8) -> u16 {
    base.wrapping_add(index) as u16
}

/// Adds an index to a 16-bit base, reporting whether the page changed.
#[inline]
pub(crate) const fn index_absolute(base: u16, index: u8) -> (u16, bool) {
    let addr = base.wrapping_add(index as u16);
    (addr, pages_differ(base, addr))
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` against the bytes at PC, advancing PC past them.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Resolved {
        match mode {
            AddressingMode::Implicit => Resolved::at(Operand::Implied),
            AddressingMode::Accumulator => Resolved::at(Operand::Accumulator),
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Resolved::at(Operand::Memory(addr))
            }
            AddressingMode::Relative => {
                let offset = self.fetch_byte() as i8;
                // Relative to the instruction after the branch
                let target = self.pc.wrapping_add_signed(offset as i16);
                Resolved::at(Operand::Memory(target))
            }
            AddressingMode::ZeroPage => {
                let base = self.fetch_byte();
                Resolved::at(Operand::Memory(base as u16))
            }
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte();
                Resolved::at(Operand::Memory(zero_page_index(base, self.x)))
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte();
                Resolved::at(Operand::Memory(zero_page_index(base, self.y)))
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word();
                Resolved::at(Operand::Memory(addr))
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let (addr, page_crossed) = index_absolute(base, self.x);
                Resolved {
                    operand: Operand::Memory(addr),
                    page_crossed,
                }
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let (addr, page_crossed) = index_absolute(base, self.y);
                Resolved {
                    operand: Operand::Memory(addr),
                    page_crossed,
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word();

                // Hardware bug: the high byte never carries into the next page,
                // so JMP ($10FF) reads $10FF and $1000.
                let lo = self.memory.read(ptr) as u16;
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_addr) as u16;

                Resolved::at(Operand::Memory((hi << 8) | lo))
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte().wrapping_add(self.x);
                let addr = self.read_zero_page_word(ptr);
                Resolved::at(Operand::Memory(addr))
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte();
                let base = self.read_zero_page_word(ptr);
                let (addr, page_crossed) = index_absolute(base, self.y);
                Resolved {
                    operand: Operand::Memory(addr),
                    page_crossed,
                }
            }
        }
    }

    /// Reads a pointer stored in zero page; the high byte wraps to 0x00.
    fn read_zero_page_word(&self, ptr: u8) -> u16 {
        let lo = self.memory.read(ptr as u16) as u16;
        let hi = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads the value of an operand. Implied operands read as 0.
    pub(crate) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Memory(addr) => self.memory.read(addr),
            Operand::Implied => 0,
        }
    }

    /// Writes the value of an operand. Writes to implied operands are dropped.
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory(addr) => self.memory.write(addr, value),
            Operand::Implied => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_with(program: &[u8]) -> CPU<FlatMemory> {
        let mut memory = FlatMemory::new();
        memory.load(0x8000, program).unwrap();
        let mut cpu = CPU::new(memory);
        cpu.pc = 0x8000;
        cpu
    }

    #[test]
    fn test_zero_page_index_wraps() {
        assert_eq!(zero_page_index(0xFF, 0x02), 0x01);
        assert_eq!(zero_page_index(0x80, 0x7F), 0xFF);
        assert_eq!(zero_page_index(0x00, 0x00), 0x00);
    }

    #[test]
    fn test_index_absolute_page_cross() {
        assert_eq!(index_absolute(0x10FF, 0x01), (0x1100, true));
        assert_eq!(index_absolute(0x1000, 0x01), (0x1001, false));
        assert_eq!(index_absolute(0xFFFF, 0x01), (0x0000, true));
    }

    #[test]
    fn test_operand_bytes() {
        assert_eq!(AddressingMode::Implicit.operand_bytes(), 0);
        assert_eq!(AddressingMode::Accumulator.operand_bytes(), 0);
        assert_eq!(AddressingMode::Relative.operand_bytes(), 1);
        assert_eq!(AddressingMode::IndirectY.operand_bytes(), 1);
        assert_eq!(AddressingMode::Indirect.operand_bytes(), 2);
    }

    #[test]
    fn test_resolve_advances_pc_by_operand_size() {
        let modes = [
            AddressingMode::Implicit,
            AddressingMode::Accumulator,
            AddressingMode::Immediate,
            AddressingMode::ZeroPage,
            AddressingMode::ZeroPageX,
            AddressingMode::ZeroPageY,
            AddressingMode::Relative,
            AddressingMode::Absolute,
            AddressingMode::AbsoluteX,
            AddressingMode::AbsoluteY,
            AddressingMode::Indirect,
            AddressingMode::IndirectX,
            AddressingMode::IndirectY,
        ];

        for mode in modes {
            let mut cpu = cpu_with(&[0x10, 0x20]);
            cpu.resolve(mode);
            assert_eq!(
                cpu.pc,
                0x8000 + mode.operand_bytes() as u16,
                "{:?} advanced PC incorrectly",
                mode
            );
        }
    }

    #[test]
    fn test_relative_backwards_is_relative_to_next_instruction() {
        let mut cpu = cpu_with(&[0xFE]); // -2
        let resolved = cpu.resolve(AddressingMode::Relative);
        assert_eq!(resolved.operand, Operand::Memory(0x7FFF));
    }

    #[test]
    fn test_indirect_page_wrap_bug() {
        let mut cpu = cpu_with(&[0xFF, 0x10]);
        cpu.memory.write(0x10FF, 0x34);
        cpu.memory.write(0x1000, 0x12);
        cpu.memory.write(0x1100, 0x99);

        let resolved = cpu.resolve(AddressingMode::Indirect);
        assert_eq!(resolved.operand, Operand::Memory(0x1234));
    }

    #[test]
    fn test_indirect_x_pointer_wraps_in_zero_page() {
        let mut cpu = cpu_with(&[0xFE]);
        cpu.x = 0x01;
        cpu.memory.write(0x00FF, 0x00);
        cpu.memory.write(0x0000, 0x30);

        let resolved = cpu.resolve(AddressingMode::IndirectX);
        assert_eq!(resolved.operand, Operand::Memory(0x3000));
    }

    #[test]
    fn test_indirect_y_reports_page_cross() {
        let mut cpu = cpu_with(&[0x40]);
        cpu.y = 0x10;
        cpu.memory.write(0x0040, 0xF8);
        cpu.memory.write(0x0041, 0x20);

        let resolved = cpu.resolve(AddressingMode::IndirectY);
        assert_eq!(resolved.operand, Operand::Memory(0x2108));
        assert!(resolved.page_crossed);
    }

    #[test]
    fn test_implied_operand_is_never_touched() {
        let mut cpu = cpu_with(&[]);
        cpu.a = 0x55;
        cpu.write_operand(Operand::Implied, 0xAA);
        assert_eq!(cpu.a, 0x55);
        assert_eq!(cpu.read_operand(Operand::Implied), 0);
        assert_eq!(Operand::Implied.address(), None);
    }
}
