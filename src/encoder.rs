use std::borrow::Cow;
use tracing::{debug, trace};

use crate::config::AsmConfig;
use crate::error::AsmError;
use crate::functions;
use crate::instructions::{self, Op};
use crate::labels::LabelTable;
use crate::nibble::{address_nibbles, Nibble};

#[derive(Debug, Clone)]
pub enum Item {
    /// Label heading, printed before the line it marks.
    Label(String),
    Line(Line),
}

#[derive(Debug, Clone)]
pub struct Line {
    pub op: Op,
    pub source: String,
    pub nibbles: Vec<Nibble>,
    pub pending_jump: Option<String>,
    /// Address assigned in pass 1.
    pub address: usize,
}

impl Line {
    pub fn width(&self) -> usize {
        self.op.desc().width()
    }

    /// Nibbles with any pending jump target appended.
    pub fn resolve(&self, labels: &LabelTable, cfg: &AsmConfig) -> Result<Cow<'_, [Nibble]>, AsmError> {
        let Some(target) = &self.pending_jump else {
            return Ok(Cow::Borrowed(&self.nibbles));
        };
        let addr = labels.resolve(target, cfg.max_address)?;
        let mut nibbles = self.nibbles.clone();
        nibbles.extend(address_nibbles(addr));
        debug_assert_eq!(nibbles.len(), self.width());
        Ok(Cow::Owned(nibbles))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Program {
    pub items: Vec<Item>,
    pub labels: LabelTable,
    /// Cells used, i.e. the pass-1 address after the last line.
    pub size: usize,
}

impl Program {
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.items.iter().filter_map(|it| match it {
            Item::Line(l) => Some(l),
            Item::Label(_) => None,
        })
    }
}

/// Pass 1 over normalized lines: assign addresses, record labels and emit
/// every nibble except jump targets.
pub fn encode(lines: &[String]) -> Result<Program, AsmError> {
    debug!(lines = lines.len(), "pass 1");
    let mut program = Program::default();
    let mut addr = 0usize;
    for text in lines {
        let mut stmt = text.as_str();
        if let Some((label, rest)) = text.split_once(':') {
            let label = label.trim();
            trace!(label, addr, "label");
            program.labels.define(label, addr);
            program.items.push(Item::Label(label.to_string()));
            stmt = rest.trim();
            if stmt.is_empty() {
                continue;
            }
        }
        let line = encode_line(stmt, addr)?;
        trace!(addr, nibbles = line.nibbles.len(), source = %line.source, "line");
        addr += line.width();
        program.items.push(Item::Line(line));
    }
    program.size = addr;
    debug!(size = program.size, labels = program.labels.len(), "pass 1 done");
    Ok(program)
}

/// Encode one statement with its label already stripped.
pub fn encode_line(stmt: &str, address: usize) -> Result<Line, AsmError> {
    let mut tokens = stmt.split_whitespace();
    let mnemonic = tokens.next().unwrap_or_default();
    let operands: Vec<&str> = tokens.collect();

    let desc = instructions::lookup(mnemonic).ok_or_else(|| AsmError::UnknownInstruction {
        mnemonic: mnemonic.to_string(),
    })?;
    let expected = desc.source_operands();
    if operands.len() != expected {
        return Err(AsmError::OperandCountMismatch {
            mnemonic: mnemonic.to_string(),
            expected,
            found: operands.len(),
        });
    }

    let mut nibbles = vec![Nibble::from_value(desc.op.opcode())];
    let mut pending_jump = None;
    match desc.op {
        Op::Jump => pending_jump = Some(operands[0].to_string()),
        Op::Cal => {
            let f = functions::lookup(operands[0]).ok_or_else(|| AsmError::UnknownFunction {
                function: operands[0].to_string(),
            })?;
            nibbles.push(Nibble::from_value(f.value));
        }
        _ => nibbles.extend(operands.iter().map(|t| Nibble::literal(t))),
    }

    Ok(Line {
        op: desc.op,
        source: stmt.to_string(),
        nibbles,
        pending_jump,
        address,
    })
}
