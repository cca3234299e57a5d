// src/models.rs
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PolicyError {
    #[error(
        "password length must be between {min} and {max} characters (got {0})",
        min = PasswordPolicy::MIN_LENGTH,
        max = PasswordPolicy::MAX_LENGTH
    )]
    LengthOutOfRange(usize),

    #[error("character pool is empty")]
    EmptyPool,
}

/// Generation parameters: the requested length and which optional character
/// classes join the pool. Letters are always drawn from and cannot be turned
/// off, so the pool is never empty.
///
/// Fields are private and every construction path validates, so a policy in
/// hand is always one the generator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordPolicy {
    length: usize,
    include_digits: bool,
    include_symbols: bool,
}

impl PasswordPolicy {
    pub const MIN_LENGTH: usize = 6;
    pub const MAX_LENGTH: usize = 100;
    pub const DEFAULT_LENGTH: usize = 8;

    /// Build a policy, rejecting lengths outside [6, 100].
    ///
    /// Out-of-range lengths are a caller error and are never clamped here;
    /// an input control that wants clamping has to do it itself.
    pub fn new(
        length: usize,
        include_digits: bool,
        include_symbols: bool,
    ) -> Result<Self, PolicyError> {
        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(PolicyError::LengthOutOfRange(length));
        }

        Ok(Self {
            length,
            include_digits,
            include_symbols,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_digits(&self) -> bool {
        self.include_digits
    }

    pub fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    /// Same character classes, different length.
    pub fn with_length(&self, length: usize) -> Result<Self, PolicyError> {
        Self::new(length, self.include_digits, self.include_symbols)
    }

    /// New policy with the digits class flipped.
    pub fn toggle_digits(&self) -> Self {
        Self {
            include_digits: !self.include_digits,
            ..*self
        }
    }

    /// New policy with the symbols class flipped.
    pub fn toggle_symbols(&self) -> Self {
        Self {
            include_symbols: !self.include_symbols,
            ..*self
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            include_digits: true,
            include_symbols: true,
        }
    }
}
