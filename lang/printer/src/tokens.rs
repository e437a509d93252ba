//! This module contains the symbols and keywords of the type syntax.
//! These constants are used when we prettyprint types.

// Symbols
//
//

/// The symbol `->`
pub const ARROW: &str = "->";

/// The symbol `,`
pub const COMMA: &str = ",";

/// The symbol `:`
pub const COLON: &str = ":";

/// The symbol `|`
pub const PIPE: &str = "|";

/// The symbol `&`
pub const AMPERSAND: &str = "&";

/// The symbol `*`
pub const STAR: &str = "*";

/// The symbol `?`
pub const QUESTION_MARK: &str = "?";

/// The symbol `#`
pub const HASH: &str = "#";

// Keywords
//
//

/// The keyword `Any`
pub const ANY: &str = "Any";

/// The keyword `Void`
pub const VOID: &str = "Void";

/// The keyword `None`
pub const NONE: &str = "None";

/// The keyword `Never`
pub const NEVER: &str = "Never";

/// The keyword `Type`
pub const TYPE: &str = "Type";

// Markers
//
// Pseudo-types which never occur in the surface syntax but can show up
// in diagnostics and trace output.

/// The marker for the error type
pub const ERROR: &str = "<error>";

/// The marker for the erased placeholder type
pub const ERASED: &str = "<erased>";

/// The marker for the partial placeholder type
pub const PARTIAL: &str = "<partial>";
