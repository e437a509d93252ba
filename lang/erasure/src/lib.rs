pub mod erase;
pub mod generic;
pub mod result;
pub mod type_vars;

pub use erase::erase_type;
pub use generic::erase_generic_types;
pub use result::ErasureError;
pub use result::ErasureResult;
pub use type_vars::erase_type_vars;
pub use type_vars::replace_meta_vars;
pub use type_vars::substitute_type_vars;
