//! Input history and move matching.
//!
//! Raw [`FighterAction`]s are translated into numpad-convention
//! [`InputSymbol`]s relative to the fighter's facing, remembered in a short
//! [`InputBuffer`], and compared against move input sequences by
//! [`find_match`].

mod buffer;
mod matcher;
mod symbol;

pub use buffer::InputBuffer;
pub use matcher::find_match;
pub use symbol::{FighterAction, InputSymbol};
