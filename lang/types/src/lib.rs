pub mod ident;
pub mod traits;
pub mod typ;

pub use ident::*;
pub use traits::*;
pub use typ::*;

/// A hash set from the `fxhash` crate
pub type HashSet<V> = fxhash::FxHashSet<V>;
