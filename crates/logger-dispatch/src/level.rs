//! Coarse backend levels and their flag representation

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit flag identifying the severity of a single message.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LogFlag(u8);

impl LogFlag {
    /// Error messages
    pub const ERROR: Self = Self(1 << 0);
    /// Warning messages
    pub const WARNING: Self = Self(1 << 1);
    /// Informational messages
    pub const INFO: Self = Self(1 << 2);
    /// Debug messages
    pub const DEBUG: Self = Self(1 << 3);
    /// Verbose messages
    pub const VERBOSE: Self = Self(1 << 4);

    const NAMES: [(Self, &'static str); 5] = [
        (Self::ERROR, "ERROR"),
        (Self::WARNING, "WARNING"),
        (Self::INFO, "INFO"),
        (Self::DEBUG, "DEBUG"),
        (Self::VERBOSE, "VERBOSE"),
    ];

    /// No flags set
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Build from raw bits
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw bits
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no bits are set
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for LogFlag {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogFlag {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for LogFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("LogFlag(empty)");
        }

        let names: Vec<_> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();

        write!(f, "LogFlag({})", names.join(" | "))
    }
}

/// Filter level of the backend. Higher levels let more messages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BackendLevel {
    /// Nothing passes
    Off,
    /// Errors only
    Error,
    /// Errors and warnings
    Warning,
    /// Errors, warnings and informational messages
    Info,
    /// Everything except verbose messages
    Debug,
    /// Everything
    Verbose,
    /// Everything, including flags added later
    #[default]
    All,
}

impl BackendLevel {
    /// Union of the flags this level admits
    #[must_use]
    pub const fn mask(self) -> LogFlag {
        match self {
            Self::Off => LogFlag::empty(),
            Self::Error => LogFlag(0b0_0001),
            Self::Warning => LogFlag(0b0_0011),
            Self::Info => LogFlag(0b0_0111),
            Self::Debug => LogFlag(0b0_1111),
            Self::Verbose => LogFlag(0b1_1111),
            Self::All => LogFlag(u8::MAX),
        }
    }

    /// Whether a message carrying `flag` passes this level
    #[must_use]
    pub const fn admits(self, flag: LogFlag) -> bool {
        !flag.is_empty() && self.mask().contains(flag)
    }
}
