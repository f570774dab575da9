use serde::Serialize;
use std::fmt;

/// The contents of one memory cell as it appears in a listing.
///
/// Opcodes, function values and resolved jump addresses are single uppercase
/// hex digits. Operand literals are copied from the source as written and are
/// not checked to be hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Nibble(String);

impl Nibble {
    pub fn from_value(v: u8) -> Self {
        Self(format!("{:X}", v & 0xF))
    }

    pub fn literal(token: &str) -> Self {
        Self(token.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Nibble {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Two nibbles for a jump target, high digit first.
pub fn address_nibbles(addr: u8) -> [Nibble; 2] {
    [Nibble::from_value(addr >> 4), Nibble::from_value(addr)]
}

pub fn join(nibbles: &[Nibble]) -> String {
    nibbles
        .iter()
        .map(Nibble::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_uppercase_hex() {
        assert_eq!(Nibble::from_value(0xa), "A");
        assert_eq!(address_nibbles(0x4f), [Nibble::from_value(4), Nibble::from_value(0xF)]);
        assert_eq!(join(&address_nibbles(0x0c)), "0 C");
    }

    #[test]
    fn literals_are_kept_verbatim() {
        assert_eq!(Nibble::literal("XYZ").to_string(), "XYZ");
    }
}
