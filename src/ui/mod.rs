//! UI abstraction layer
//!
//! This module keeps the action handler independent of where prompts are
//! answered and where messages go.
//!
//! # Core Traits
//!
//! - **`UserInput`** - prompts (text, confirmation, selection)
//! - **`OutputWriter`** - status messages and the rendered plan
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Action handler (commands)          │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UserInput / OutputWriter           │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Interactive   │  │ Scripted / memory │
//! │ - Dialoguer   │  │ - ScriptedInput   │
//! │ - Stdout      │  │ - MemoryWriter    │
//! └───────────────┘  └───────────────────┘
//! ```

pub mod input;
pub mod output;
pub mod plan;

pub use input::{DialoguerInput, InputError, ScriptedInput, UserInput};
pub use output::{MemoryWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use plan::{PlanLine, plan_lines};
