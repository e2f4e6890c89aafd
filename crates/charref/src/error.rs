use thiserror::Error;

/// A parse error observed while decoding a character reference.
///
/// None of these stop decoding. Each one is paired with a recovery that the
/// decoder has already applied: emitting U+FFFD, emitting a remapped
/// character, or emitting the reference text unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceError {
    #[error("numeric character reference has no digits")]
    AbsenceOfDigits,
    #[error("numeric character reference to U+0000")]
    NullCharacter,
    #[error("numeric character reference {0:#X} is outside the Unicode range")]
    OutsideUnicodeRange(u32),
    #[error("numeric character reference to surrogate U+{0:04X}")]
    Surrogate(u32),
    #[error("numeric character reference to noncharacter U+{0:04X}")]
    Noncharacter(u32),
    #[error("numeric character reference to control character U+{0:04X}")]
    ControlCharacter(u32),
    #[error("character reference is not terminated by a semicolon")]
    MissingSemicolon,
    #[error("unknown named character reference")]
    UnknownNamedReference,
}
