use std::io;

pub use pretty::termcolor;
pub use pretty::termcolor::Color;
pub use pretty::termcolor::ColorChoice;
pub use pretty::termcolor::ColorSpec;
pub use pretty::termcolor::StandardStream;
pub use pretty::termcolor::WriteColor;

mod print_to_string;
pub mod theme;
pub mod tokens;
mod types;
pub mod util;

pub use print_to_string::*;
pub use types::*;

pub const DEFAULT_WIDTH: usize = 100;

pub trait PrintExt {
    fn render<W: io::Write>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()>;
    fn render_colored<W: WriteColor>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()>;
}

impl<T: Print> PrintExt for T {
    fn render<W: io::Write>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()> {
        let alloc = Alloc::new();
        let doc_builder = self.print(cfg, &alloc);
        doc_builder.1.render(cfg.width, out)
    }

    fn render_colored<W: WriteColor>(&self, cfg: &PrintCfg, out: &mut W) -> io::Result<()> {
        let alloc = Alloc::new();
        let doc_builder = self.print(cfg, &alloc);
        doc_builder.1.render_colored(cfg.width, out)
    }
}
