use serde::Serialize;
use std::collections::HashMap;

use crate::error::AsmError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LabelKV {
    pub addr: usize,
    pub name: String,
}

/// Label name -> address recorded during pass 1.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    map: HashMap<String, usize>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redefinition replaces the earlier address; the previous one is returned.
    pub fn define(&mut self, name: &str, addr: usize) -> Option<usize> {
        let prev = self.map.insert(name.to_string(), addr);
        if let Some(old) = prev {
            tracing::trace!(label = name, old, new = addr, "label redefined");
        }
        prev
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    /// Address of `name` as a jump operand, which must fit in `max`.
    pub fn resolve(&self, name: &str, max: u8) -> Result<u8, AsmError> {
        let addr = self.get(name).ok_or_else(|| AsmError::UnknownLabel {
            label: name.to_string(),
        })?;
        u8::try_from(addr)
            .ok()
            .filter(|a| *a <= max)
            .ok_or_else(|| AsmError::AddressOverflow {
                label: name.to_string(),
                address: addr,
                max,
            })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sorted by address, then name.
    pub fn to_kv(&self) -> Vec<LabelKV> {
        let mut out: Vec<LabelKV> = self
            .iter()
            .map(|(name, addr)| LabelKV {
                addr,
                name: name.to_string(),
            })
            .collect();
        out.sort_by(|a, b| a.addr.cmp(&b.addr).then_with(|| a.name.cmp(&b.name)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_definition_wins() {
        let mut t = LabelTable::new();
        assert_eq!(t.define("LOOP", 2), None);
        assert_eq!(t.define("LOOP", 9), Some(2));
        assert_eq!(t.get("LOOP"), Some(9));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn resolve_checks_range() {
        let mut t = LabelTable::new();
        t.define("NEAR", 0x4F);
        t.define("FAR", 0x100);
        assert_eq!(t.resolve("NEAR", 0xFF).unwrap(), 0x4F);
        assert!(matches!(t.resolve("NEAR", 0x40), Err(AsmError::AddressOverflow { address: 0x4F, .. })));
        assert!(matches!(t.resolve("FAR", 0xFF), Err(AsmError::AddressOverflow { .. })));
        assert!(matches!(t.resolve("NONE", 0xFF), Err(AsmError::UnknownLabel { label }) if label == "NONE"));
    }

    #[test]
    fn kv_is_sorted() {
        let mut t = LabelTable::new();
        t.define("B", 3);
        t.define("A", 3);
        t.define("Z", 0);
        let names: Vec<_> = t.to_kv().into_iter().map(|kv| kv.name).collect();
        assert_eq!(names, ["Z", "A", "B"]);
    }
}
