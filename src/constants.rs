//! # Fixed Addresses and Costs
//!
//! Memory-layout constants shared by the addressing resolver, the stack helpers
//! and the exception entry points. All vectors are little-endian word pairs in
//! the top six bytes of the address space.

/// Base address of the hardware stack page (0x0100-0x01FF).
pub const STACK_BASE: u16 = 0x0100;

/// Size of one page. Indexed addressing that leaves the base page costs a cycle.
pub const PAGE_SIZE: u16 = 0x0100;

/// Non-maskable interrupt vector (0xFFFA/0xFFFB).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Reset vector (0xFFFC/0xFFFD).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Interrupt request vector, shared with BRK (0xFFFE/0xFFFF).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Stack pointer value after reset.
pub const RESET_STACK_POINTER: u8 = 0xFD;

/// Cycles the engine stays busy after a reset before the first fetch.
pub const RESET_CYCLES: u32 = 8;

/// Cycles consumed by servicing an IRQ.
pub const IRQ_CYCLES: u32 = 7;

/// Cycles consumed by servicing an NMI.
pub const NMI_CYCLES: u32 = 8;

/// Returns true if `a` and `b` lie on different 256-byte pages.
#[inline]
pub const fn pages_differ(a: u16, b: u16) -> bool {
    (a & 0xFF00) != (b & 0xFF00)
}
