use miette_util::codespan::Span;

/// Trait for syntactic entities which have a source-code span.
///
/// The function `span()` should return `Some(span)` for every entity which
/// is the result of parsing or semantic analysis, but might return `None`
/// for types which were synthesized by the checker, e.g. by one of the
/// erasure transforms.
pub trait HasSpan {
    /// Return the source code span of the entity.
    fn span(&self) -> Option<Span>;
}

impl HasSpan for Option<Span> {
    fn span(&self) -> Option<Span> {
        *self
    }
}
