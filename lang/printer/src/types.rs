use pretty::termcolor::ColorSpec;

/// The allocator for pretty-printing documents.
pub type Alloc<'a> = pretty::Arena<'a, ColorSpec>;
/// A partially constructed document.
pub type Builder<'a> = pretty::DocBuilder<'a, Alloc<'a>, ColorSpec>;

/// Operator precedences
pub type Precedence = u32;

pub trait Print {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        self.print_prec(cfg, alloc, 0)
    }

    /// Print with precedence information about the enclosing context.
    ///
    /// * `_prec` The precedence of the surrounding context.
    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        _prec: Precedence,
    ) -> Builder<'a> {
        self.print(cfg, alloc)
    }
}

impl<T: Print> Print for &T {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        T::print(self, cfg, alloc)
    }

    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        T::print_prec(self, cfg, alloc, prec)
    }
}

impl<T: Print> Print for Box<T> {
    fn print<'a>(&'a self, cfg: &PrintCfg, alloc: &'a Alloc<'a>) -> Builder<'a> {
        T::print(self, cfg, alloc)
    }

    fn print_prec<'a>(
        &'a self,
        cfg: &PrintCfg,
        alloc: &'a Alloc<'a>,
        prec: Precedence,
    ) -> Builder<'a> {
        T::print_prec(self, cfg, alloc, prec)
    }
}

pub struct PrintCfg {
    /// The width of the output terminal/device. Width is used for
    /// the insertion of linebreaks.
    pub width: usize,
    /// How many spaces of indentation are used
    pub indent: isize,
    /// Whether to print the internal ids of type variables
    pub print_var_ids: bool,
}

impl Default for PrintCfg {
    fn default() -> Self {
        Self { width: crate::DEFAULT_WIDTH, indent: 4, print_var_ids: false }
    }
}
