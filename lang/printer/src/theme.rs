use pretty::{
    DocAllocator,
    termcolor::{Color, ColorSpec},
};

use super::types::*;

const KEYWORD: Color = Color::Magenta;
const TYPE: Color = Color::Red;
const VAR: Color = Color::Green;
const MARKER: Color = Color::Yellow;

pub trait ThemeExt<'a> {
    fn keyword(&'a self, text: &str) -> Builder<'a>;
    fn typ(&'a self, text: &str) -> Builder<'a>;
    fn var(&'a self, text: &str) -> Builder<'a>;
    fn marker(&'a self, text: &str) -> Builder<'a>;
}

impl<'a> ThemeExt<'a> for Alloc<'a> {
    fn keyword(&'a self, text: &str) -> Builder<'a> {
        self.text(text.to_owned()).annotate(KEYWORD.spec())
    }

    fn typ(&'a self, text: &str) -> Builder<'a> {
        self.text(text.to_owned()).annotate(TYPE.spec())
    }

    fn var(&'a self, text: &str) -> Builder<'a> {
        self.text(text.to_owned()).annotate(VAR.spec())
    }

    fn marker(&'a self, text: &str) -> Builder<'a> {
        self.text(text.to_owned()).annotate(MARKER.spec())
    }
}

pub trait ColorExt {
    fn spec(self) -> ColorSpec;
}

impl ColorExt for Color {
    fn spec(self) -> ColorSpec {
        ColorSpec::new().set_fg(Some(self)).clone()
    }
}
