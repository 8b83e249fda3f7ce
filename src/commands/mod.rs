//! Operator commands
//!
//! The command language spoken at the action prompt:
//!
//! | Word | Short | Arguments | Action |
//! |------|-------|-----------|--------|
//! | `pattern` | `p` | pattern text | `SetPattern` |
//! | `insert` | `i` | path | `Add` |
//! | `exclude` | `e` | index | `Remove` |
//! | `reorder` | `r` | `1` name, `2` modified time, `3` reverse | `Reorder` |
//! | `swap` | `s` | two indices | `Swap` |
//! | `confirm` | `c` | | `Done(Confirm)` |
//! | `abort` | `a` | | `Done(Abort)` |

pub mod parse;
pub mod prompt;

pub use parse::{ACTION_PROMPT, Command, UnknownCommand};
pub use prompt::PromptHandler;
