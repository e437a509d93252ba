pub mod codespan;

pub trait ToMiette {
    type Target;

    fn to_miette(self) -> Self::Target;
}

impl ToMiette for codespan::ByteIndex {
    type Target = miette::SourceOffset;

    fn to_miette(self) -> Self::Target {
        self.to_usize().into()
    }
}

impl ToMiette for codespan::Span {
    type Target = miette::SourceSpan;

    fn to_miette(self) -> Self::Target {
        let length = self.end() - self.start();
        miette::SourceSpan::new(self.start().to_miette(), length.to_usize())
    }
}

impl<T: ToMiette> ToMiette for Option<T> {
    type Target = Option<T::Target>;

    fn to_miette(self) -> Self::Target {
        self.map(ToMiette::to_miette)
    }
}

#[cfg(test)]
mod tests {
    use super::codespan::Span;
    use super::*;

    #[test]
    fn span_to_miette() {
        let span = Span::new(4, 10);
        let converted: miette::SourceSpan = span.to_miette();
        assert_eq!(converted.offset(), 4);
        assert_eq!(converted.len(), 6);
    }

    #[test]
    fn optional_span_to_miette() {
        let span: Option<Span> = None;
        assert_eq!(span.to_miette(), None);
    }
}
