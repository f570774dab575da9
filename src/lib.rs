pub mod config;
pub mod encoder;
pub mod error;
pub mod export;
pub mod functions;
pub mod instructions;
pub mod labels;
pub mod nibble;
pub mod render;
pub mod source;

pub use config::AsmConfig;
pub use encoder::{encode, Item, Line, Program};
pub use error::AsmError;
pub use labels::LabelTable;
pub use nibble::Nibble;
pub use render::RenderMode;
pub use source::normalize;

use std::io::Write;

/// Normalize, encode and render `text` in one go.
pub fn assemble<W: Write>(text: &str, mode: RenderMode, out: &mut W) -> Result<(), AsmError> {
    assemble_with(text, mode, &AsmConfig::default(), out)
}

pub fn assemble_with<W: Write>(
    text: &str,
    mode: RenderMode,
    cfg: &AsmConfig,
    out: &mut W,
) -> Result<(), AsmError> {
    let program = encode(&normalize(text))?;
    program.render(mode, cfg, out)
}
