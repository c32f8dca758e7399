//! # Memory Bus Abstraction
//!
//! The CPU reaches memory only through the `MemoryBus` trait, so the engine
//! stays independent of whatever sits behind the 16-bit address space
//! (plain RAM in tests, a console's mapped bus in a full emulator).
//!
//! ## Design Principles
//!
//! The trait follows 6502 hardware behavior:
//! - No bus errors: every address in 0x0000-0xFFFF reads and writes
//! - Simple `u16`/`u8` signatures

use crate::MemoryError;

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use nes_cpu::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes_cpu::MemoryBus;
///
/// /// 2KB of RAM mirrored across the lower 8KB, everything else open bus.
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         match addr {
///             0x0000..=0x1FFF => self.ram[(addr & 0x07FF) as usize],
///             _ => 0x00,
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x2000 {
///             self.ram[(addr & 0x07FF) as usize] = value;
///         }
///     }
/// }
///
/// let mut mem = MirroredRam { ram: [0; 0x0800] };
/// mem.write(0x0801, 0x55);
/// assert_eq!(mem.read(0x0001), 0x55);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic; unmapped addresses may return any value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic; read-only or unmapped addresses may ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word from `addr` and `addr + 1` (wrapping at 0xFFFF).
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are writable RAM, initialized to 0x00.
///
/// # Examples
///
/// ```
/// use nes_cpu::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.load(0x8000, &[0xA9, 0x10]).unwrap(); // LDA #$10
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let mut cpu = CPU::new(memory);
/// cpu.reset();
/// cpu.step_instruction();
/// assert_eq!(cpu.a(), 0x10);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 0x10000]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 0x10000]),
        }
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// The image must fit below the top of the address space; nothing is
    /// written when it does not.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::ImageOverflow`] if `start + bytes.len()` exceeds 0x10000.
    pub fn load(&mut self, start: u16, bytes: &[u8]) -> Result<(), MemoryError> {
        let begin = start as usize;
        let end = begin + bytes.len();
        if end > self.data.len() {
            return Err(MemoryError::ImageOverflow {
                start,
                len: bytes.len(),
            });
        }

        self.data[begin..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Zero-fills the whole address space.
    pub fn wipe(&mut self) {
        self.data.fill(0);
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
