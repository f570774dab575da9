use serde::Serialize;

use crate::config::AsmConfig;
use crate::encoder::{Item, Program};
use crate::error::AsmError;
use crate::labels::LabelKV;
use crate::nibble::Nibble;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolvedLine {
    pub address: usize,
    pub nibbles: Vec<Nibble>,
    pub source: String,
}

/// Fully resolved program, for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramExport {
    pub size: usize,
    pub labels: Vec<LabelKV>,
    pub lines: Vec<ResolvedLine>,
}

impl Program {
    /// Resolve every line, failing on the first unknown label.
    pub fn resolve(&self, cfg: &AsmConfig) -> Result<Vec<ResolvedLine>, AsmError> {
        let mut addr = 0usize;
        let mut out = Vec::new();
        for item in &self.items {
            let Item::Line(line) = item else { continue };
            let nibbles = line.resolve(&self.labels, cfg)?.into_owned();
            let address = addr;
            addr += nibbles.len();
            out.push(ResolvedLine {
                address,
                nibbles,
                source: line.source.clone(),
            });
        }
        Ok(out)
    }

    pub fn export(&self, cfg: &AsmConfig) -> Result<ProgramExport, AsmError> {
        Ok(ProgramExport {
            size: self.size,
            labels: self.labels.to_kv(),
            lines: self.resolve(cfg)?,
        })
    }
}
