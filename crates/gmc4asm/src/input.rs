use anyhow::{Context, Result};
use std::path::Path;

use gmc4_rs::AsmConfig;

pub fn load_source(path: &Path) -> Result<String> {
    anyhow::ensure!(path.is_file(), "File not found: {}", path.display());
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

pub fn load_config(path: Option<&Path>) -> Result<AsmConfig> {
    let Some(path) = path else { return Ok(AsmConfig::default()) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    AsmConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_is_reported() {
        let err = load_source(Path::new("_no_such_file.asm")).unwrap_err();
        assert_eq!(err.to_string(), "File not found: _no_such_file.asm");
    }

    #[test]
    fn config_file_overrides_glyphs() {
        let cwd = std::env::current_dir().unwrap();
        let path = cwd.join("_test_cfg.json");
        std::fs::write(&path, r##"{ "lit_glyph": "#", "unlit_glyph": "." }"##).unwrap();
        let cfg = load_config(Some(path.as_path())).unwrap();
        assert_eq!(cfg.lit_glyph, '#');
        assert_eq!(cfg.unlit_glyph, '.');
        assert_eq!(cfg.max_address, 0xFF);
        let _ = std::fs::remove_file(&path);
        assert_eq!(load_config(None).unwrap().address_bits, 7);
    }
}
