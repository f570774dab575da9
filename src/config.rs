use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AsmConfig {
    pub lit_glyph: char,   // LED on
    pub unlit_glyph: char, // LED off
    pub address_bits: usize,
    /// Highest address a jump may target. The GMC-4 itself only has 0x00..=0x4F.
    pub max_address: u8,
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            lit_glyph: '*',
            unlit_glyph: '-',
            address_bits: 7,
            max_address: 0xFF,
        }
    }
}

impl AsmConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
