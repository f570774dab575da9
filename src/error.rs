#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("Unknown instruction: {mnemonic}")]
    UnknownInstruction { mnemonic: String },
    #[error("Bad number of operands for {mnemonic}, expected {expected}, got {found}")]
    OperandCountMismatch {
        mnemonic: String,
        expected: usize,
        found: usize,
    },
    #[error("Not a valid function: {function}")]
    UnknownFunction { function: String },
    #[error("Unknown label: {label}")]
    UnknownLabel { label: String },
    #[error("Label {label} at {address:#04x} is out of jump range (max {max:#04x})")]
    AddressOverflow {
        label: String,
        address: usize,
        max: u8,
    },
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
