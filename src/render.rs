use bitvec::prelude::*;
use std::io::{self, Write};
use tracing::debug;

use crate::config::AsmConfig;
use crate::encoder::{Item, Line, Program};
use crate::error::AsmError;
use crate::nibble::{self, Nibble};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// `AA: N N N<tab><tab>SOURCE`
    #[default]
    AssemblyListing,
    /// One row per memory cell, address drawn as LED glyphs.
    LedDiagram,
}

/// Output strategy for pass 2. Each renderer keeps its own address counter,
/// independent of the one pass 1 stored on the lines.
pub trait Renderer {
    /// Called once before the first item; the address counter restarts at 0.
    fn begin(&mut self);
    fn label<W: Write>(&mut self, out: &mut W, name: &str) -> io::Result<()>;
    fn line<W: Write>(&mut self, out: &mut W, line: &Line, nibbles: &[Nibble]) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct AssemblyListing {
    addr: usize,
}

impl AssemblyListing {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for AssemblyListing {
    fn begin(&mut self) {
        self.addr = 0;
    }

    fn label<W: Write>(&mut self, out: &mut W, name: &str) -> io::Result<()> {
        writeln!(out, "\t{name}:")
    }

    fn line<W: Write>(&mut self, out: &mut W, line: &Line, nibbles: &[Nibble]) -> io::Result<()> {
        debug_assert_eq!(self.addr, line.address);
        writeln!(out, "{:02X}: {}\t\t{}", self.addr, nibble::join(nibbles), line.source)?;
        self.addr += nibbles.len();
        Ok(())
    }
}

#[derive(Debug)]
pub struct LedDiagram<'c> {
    addr: usize,
    cfg: &'c AsmConfig,
}

impl<'c> LedDiagram<'c> {
    pub fn new(cfg: &'c AsmConfig) -> Self {
        Self { addr: 0, cfg }
    }
}

impl Renderer for LedDiagram<'_> {
    fn begin(&mut self) {
        self.addr = 0;
    }

    fn label<W: Write>(&mut self, out: &mut W, name: &str) -> io::Result<()> {
        writeln!(out, "\t\t{name}:")
    }

    fn line<W: Write>(&mut self, out: &mut W, line: &Line, nibbles: &[Nibble]) -> io::Result<()> {
        debug_assert_eq!(self.addr, line.address);
        for (i, n) in nibbles.iter().enumerate() {
            let leds = led_glyphs(self.addr, self.cfg);
            if i == 0 {
                writeln!(out, "{leds}\t {n}\t{}", line.source)?;
            } else {
                writeln!(out, "{leds}\t {n}")?;
            }
            self.addr += 1;
        }
        Ok(())
    }
}

/// `addr` in binary, MSB first, at least `cfg.address_bits` wide.
pub fn led_glyphs(addr: usize, cfg: &AsmConfig) -> String {
    let bits = addr.view_bits::<Msb0>();
    let used = bits.len() - bits.leading_zeros();
    let width = used.max(cfg.address_bits).min(bits.len());
    bits[bits.len() - width..]
        .iter()
        .map(|b| if *b { cfg.lit_glyph } else { cfg.unlit_glyph })
        .collect()
}

/// Pass 2: resolve jump targets and hand every item to `renderer`. Output
/// written before a failing line is left in `out`.
pub fn render_with<R: Renderer, W: Write>(
    program: &Program,
    renderer: &mut R,
    cfg: &AsmConfig,
    out: &mut W,
) -> Result<(), AsmError> {
    debug!(items = program.items.len(), "pass 2");
    renderer.begin();
    for item in &program.items {
        match item {
            Item::Label(name) => renderer.label(out, name)?,
            Item::Line(line) => {
                let nibbles = line.resolve(&program.labels, cfg)?;
                renderer.line(out, line, &nibbles)?;
            }
        }
    }
    Ok(())
}

impl Program {
    pub fn render<W: Write>(&self, mode: RenderMode, cfg: &AsmConfig, out: &mut W) -> Result<(), AsmError> {
        match mode {
            RenderMode::AssemblyListing => render_with(self, &mut AssemblyListing::new(), cfg, out),
            RenderMode::LedDiagram => render_with(self, &mut LedDiagram::new(cfg), cfg, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn led_glyphs_pad_to_seven() {
        let cfg = AsmConfig::default();
        assert_eq!(led_glyphs(0, &cfg), "-------");
        assert_eq!(led_glyphs(5, &cfg), "----*-*");
        assert_eq!(led_glyphs(0x4F, &cfg), "*--****");
    }

    #[test]
    fn led_glyphs_grow_past_width() {
        let cfg = AsmConfig::default();
        assert_eq!(led_glyphs(0x80, &cfg), "*-------");
        let narrow = AsmConfig { address_bits: 2, lit_glyph: 'o', unlit_glyph: '.', ..cfg };
        assert_eq!(led_glyphs(1, &narrow), ".o");
    }
}
