mod contains_type_vars;
mod fold;
mod has_span;

pub use contains_type_vars::*;
pub use fold::*;
pub use has_span::*;
