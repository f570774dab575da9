// Sub-functions reachable through `CAL <name>`.

#[derive(Debug, Clone, Copy)]
pub struct FuncDesc {
    pub mnemonic: &'static str,
    pub value: u8,
}

pub const FUNCTIONS: &[FuncDesc] = &[
    FuncDesc { mnemonic: "RSTO", value: 0x0 },
    FuncDesc { mnemonic: "SETR", value: 0x1 },
    FuncDesc { mnemonic: "RSTR", value: 0x2 },
    FuncDesc { mnemonic: "CMPL", value: 0x4 },
    FuncDesc { mnemonic: "CHNG", value: 0x5 },
    FuncDesc { mnemonic: "SIFT", value: 0x6 },
    FuncDesc { mnemonic: "ENDS", value: 0x7 },
    FuncDesc { mnemonic: "ERRS", value: 0x8 },
    FuncDesc { mnemonic: "SHTS", value: 0x9 },
    FuncDesc { mnemonic: "LONS", value: 0xA },
    FuncDesc { mnemonic: "SUND", value: 0xB },
    FuncDesc { mnemonic: "TIMR", value: 0xC },
    FuncDesc { mnemonic: "DSPR", value: 0xD },
    FuncDesc { mnemonic: "DEM-", value: 0xE },
    FuncDesc { mnemonic: "DEM+", value: 0xF },
];

pub fn lookup(mnemonic: &str) -> Option<&'static FuncDesc> {
    FUNCTIONS.iter().find(|f| f.mnemonic == mnemonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_functions_without_value_three() {
        assert_eq!(FUNCTIONS.len(), 15);
        assert!(FUNCTIONS.iter().all(|f| f.value != 0x3 && f.value <= 0xF));
        assert_eq!(lookup("DEM+").map(|f| f.value), Some(0xF));
        assert!(lookup("NOPE").is_none());
    }
}
