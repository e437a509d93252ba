use miette::{Diagnostic, SourceSpan};
use miette_util::ToMiette;
use thiserror::Error;

use printer::{Print, PrintToString};
use types::*;

/// The result type specialized to erasure errors.
pub type ErasureResult<T = Type> = Result<T, ErasureError>;

/// This enum contains all errors that can be emitted during type erasure.
///
/// Erasure runs after name resolution and type inference have completed, so
/// every variant reports a type that should no longer occur at this stage of
/// the pipeline.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ErasureError {
    #[error("Cannot erase {typ} because it was not resolved during semantic analysis")]
    #[diagnostic(code("E-001"))]
    UnresolvedType {
        typ: String,
        #[label]
        span: Option<SourceSpan>,
    },
    #[error("The inference placeholder {typ} escaped into type erasure")]
    #[diagnostic(code("E-002"))]
    PlaceholderEscaped {
        typ: String,
        #[label]
        span: Option<SourceSpan>,
    },
}

impl ErasureError {
    pub fn unresolved_type<T: Print + HasSpan>(typ: &T) -> Self {
        Self::UnresolvedType { typ: typ.print_to_string(None), span: typ.span().to_miette() }
    }

    pub fn placeholder_escaped<T: Print + HasSpan>(typ: &T) -> Self {
        Self::PlaceholderEscaped { typ: typ.print_to_string(None), span: typ.span().to_miette() }
    }
}
