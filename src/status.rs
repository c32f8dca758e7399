//! # Processor Status Register
//!
//! The status register (P) holds eight condition flags. They are stored as
//! individual booleans and packed into a byte only when software can see them
//! as one value (PHP, PLP, BRK, RTI and the interrupt sequences).
//!
//! Bit layout, least significant first:
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 0 | C | Carry |
//! | 1 | Z | Zero |
//! | 2 | I | Interrupt disable |
//! | 3 | D | Decimal mode |
//! | 4 | B | Break |
//! | 5 | U | Unused |
//! | 6 | V | Overflow |
//! | 7 | N | Negative |

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use nes_cpu::Status;
///
/// let mut status = Status::from_byte(0b1000_0001);
/// assert!(status.carry);
/// assert!(status.negative);
///
/// status.zero = true;
/// assert_eq!(status.to_byte(), 0b1000_0011);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status {
    /// Carry out of bit 7 (or "no borrow" for subtraction and compares).
    pub carry: bool,

    /// Last result was zero.
    pub zero: bool,

    /// IRQ requests are masked while set.
    pub interrupt_disable: bool,

    /// Decimal mode. Stored and pushed, arithmetic stays binary.
    pub decimal: bool,

    /// Break. Only meaningful in a pushed copy.
    pub break_command: bool,

    /// Unused bit 5.
    pub unused: bool,

    /// Signed overflow from ADC/SBC, or bit 6 of the BIT operand.
    pub overflow: bool,

    /// Bit 7 of the last result.
    pub negative: bool,
}

impl Status {
    pub const CARRY: u8 = 0b0000_0001;
    pub const ZERO: u8 = 0b0000_0010;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const DECIMAL: u8 = 0b0000_1000;
    pub const BREAK: u8 = 0b0001_0000;
    pub const UNUSED: u8 = 0b0010_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const NEGATIVE: u8 = 0b1000_0000;

    /// Unpacks a status byte.
    pub const fn from_byte(value: u8) -> Self {
        Self {
            carry: value & Self::CARRY != 0,
            zero: value & Self::ZERO != 0,
            interrupt_disable: value & Self::INTERRUPT_DISABLE != 0,
            decimal: value & Self::DECIMAL != 0,
            break_command: value & Self::BREAK != 0,
            unused: value & Self::UNUSED != 0,
            overflow: value & Self::OVERFLOW != 0,
            negative: value & Self::NEGATIVE != 0,
        }
    }

    /// Packs the flags into a byte.
    pub const fn to_byte(self) -> u8 {
        let mut value = 0;
        if self.carry {
            value |= Self::CARRY;
        }
        if self.zero {
            value |= Self::ZERO;
        }
        if self.interrupt_disable {
            value |= Self::INTERRUPT_DISABLE;
        }
        if self.decimal {
            value |= Self::DECIMAL;
        }
        if self.break_command {
            value |= Self::BREAK;
        }
        if self.unused {
            value |= Self::UNUSED;
        }
        if self.overflow {
            value |= Self::OVERFLOW;
        }
        if self.negative {
            value |= Self::NEGATIVE;
        }
        value
    }

    /// Updates Z and N from a result byte.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status.to_byte()
    }
}
