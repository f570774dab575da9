/// GMC-4 operations. The discriminant is the opcode nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Ka = 0x0,
    Ao = 0x1,
    Ch = 0x2,
    Cy = 0x3,
    Am = 0x4,
    Ma = 0x5,
    MPlus = 0x6,
    MMinus = 0x7,
    Tia = 0x8,
    Aia = 0x9,
    Tiy = 0xA,
    Aiy = 0xB,
    Cia = 0xC,
    Ciy = 0xD,
    Cal = 0xE,
    Jump = 0xF,
}

impl Op {
    pub fn opcode(self) -> u8 {
        self as u8
    }

    pub fn desc(self) -> &'static InstrDesc {
        &TABLE[self as usize]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    /// Operand nibbles that follow the opcode in memory.
    pub arity: u8,
}

impl InstrDesc {
    /// Operand tokens accepted in source text. JUMP names a single label
    /// that expands to two address nibbles once resolved.
    pub fn source_operands(&self) -> usize {
        match self.op {
            Op::Jump => 1,
            _ => self.arity as usize,
        }
    }

    /// Memory cells occupied by the encoded instruction.
    pub fn width(&self) -> usize {
        1 + self.arity as usize
    }
}

/// Indexed by opcode.
pub const TABLE: &[InstrDesc] = &[
    InstrDesc {
        op: Op::Ka,
        mnemonic: "KA",
        arity: 0,
    },
    InstrDesc {
        op: Op::Ao,
        mnemonic: "AO",
        arity: 0,
    },
    InstrDesc {
        op: Op::Ch,
        mnemonic: "CH",
        arity: 0,
    },
    InstrDesc {
        op: Op::Cy,
        mnemonic: "CY",
        arity: 0,
    },
    InstrDesc {
        op: Op::Am,
        mnemonic: "AM",
        arity: 0,
    },
    InstrDesc {
        op: Op::Ma,
        mnemonic: "MA",
        arity: 0,
    },
    InstrDesc {
        op: Op::MPlus,
        mnemonic: "M+",
        arity: 0,
    },
    InstrDesc {
        op: Op::MMinus,
        mnemonic: "M-",
        arity: 0,
    },
    InstrDesc {
        op: Op::Tia,
        mnemonic: "TIA",
        arity: 1,
    },
    InstrDesc {
        op: Op::Aia,
        mnemonic: "AIA",
        arity: 1,
    },
    InstrDesc {
        op: Op::Tiy,
        mnemonic: "TIY",
        arity: 1,
    },
    InstrDesc {
        op: Op::Aiy,
        mnemonic: "AIY",
        arity: 1,
    },
    InstrDesc {
        op: Op::Cia,
        mnemonic: "CIA",
        arity: 1,
    },
    InstrDesc {
        op: Op::Ciy,
        mnemonic: "CIY",
        arity: 1,
    },
    InstrDesc {
        op: Op::Cal,
        mnemonic: "CAL",
        arity: 1,
    },
    InstrDesc {
        op: Op::Jump,
        mnemonic: "JUMP",
        arity: 2,
    },
];

/// Mnemonics are matched exactly; callers upper-case source text first.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_opcode() {
        assert_eq!(TABLE.len(), 16);
        for (i, d) in TABLE.iter().enumerate() {
            assert_eq!(d.op.opcode() as usize, i, "{}", d.mnemonic);
            assert_eq!(d.op.desc().mnemonic, d.mnemonic);
        }
    }

    #[test]
    fn jump_takes_one_token_but_three_cells() {
        let j = lookup("JUMP").unwrap();
        assert_eq!(j.source_operands(), 1);
        assert_eq!(j.width(), 3);
        let tia = lookup("TIA").unwrap();
        assert_eq!(tia.source_operands(), 1);
        assert_eq!(tia.width(), 2);
        assert!(lookup("tia").is_none());
    }
}
