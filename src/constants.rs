// Constants for expression rendering

/// Token the placeholder renders as
pub const PLACEHOLDER_TOKEN: &str = "_";

// Precedence ranks, 0 binds tightest. Ordering follows the host operator
// table: atoms, subscription, power, unary, multiplicative, additive,
// shifts, `&`, `^`, `|`, comparisons.

/// The placeholder itself: already atomic, never parenthesized
pub const PRECEDENCE_ATOMIC: u8 = 0;
/// Attribute and item access (`_.name`, `_[key]`)
pub const PRECEDENCE_ACCESS: u8 = 1;
/// Exponentiation (`**`)
pub const PRECEDENCE_POWER: u8 = 3;
/// Unary `-`, `+`, `~`
pub const PRECEDENCE_UNARY: u8 = 4;
/// `*`, `/`, `//`, `%`
pub const PRECEDENCE_MULTIPLICATIVE: u8 = 5;
/// `+`, `-`
pub const PRECEDENCE_ADDITIVE: u8 = 6;
/// `<<`, `>>`
pub const PRECEDENCE_SHIFT: u8 = 7;
/// Bitwise `&`
pub const PRECEDENCE_BIT_AND: u8 = 8;
/// Bitwise `^`
pub const PRECEDENCE_BIT_XOR: u8 = 9;
/// Bitwise `|`
pub const PRECEDENCE_BIT_OR: u8 = 10;
/// `<`, `<=`, `>`, `>=`, `==`, `!=`
pub const PRECEDENCE_COMPARISON: u8 = 11;

/// Longest sequence, in items or bytes, that repetition may produce
pub const MAX_REPEAT_LEN: usize = 1 << 28;
