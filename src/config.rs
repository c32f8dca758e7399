//! # Engine Configuration
//!
//! Knobs for the few places where the engine can either follow real silicon
//! or the behaviour existing software tooling was written against. Every
//! field has a default; override individual fields with struct update syntax.
//!
//! ```
//! use nes_cpu::{CpuConfig, InterruptFrame};
//!
//! let config = CpuConfig {
//!     interrupt_frame: InterruptFrame::ProgramCounterFirst,
//!     ..CpuConfig::default()
//! };
//! assert!(config.indirect_indexed_page_penalty);
//! ```

/// Order in which IRQ and NMI push their return frame.
///
/// BRK always pushes the program counter first and the status byte last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterruptFrame {
    /// Status byte first, then PC high, then PC low.
    #[default]
    StatusFirst,

    /// PC high, PC low, then the status byte. This is the frame RTI unwinds.
    ProgramCounterFirst,
}

/// CPU configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Charge one extra cycle when `(zp),Y` indexing crosses a page.
    ///
    /// Real hardware does; the table this engine's timing was modelled on
    /// never did. Defaults to `true`.
    pub indirect_indexed_page_penalty: bool,

    /// Return-frame layout for hardware interrupts.
    pub interrupt_frame: InterruptFrame,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            indirect_indexed_page_penalty: true,
            interrupt_frame: InterruptFrame::default(),
        }
    }
}
