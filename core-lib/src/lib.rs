//! SM83 opcode table generator.
//!
//! Turns the CB-prefixed page of an `sm83-opcodes.json` dataset into Rust
//! struct literals that an emulator, disassembler or assembler can include as
//! its decode table.
//!
//! ```no_run
//! use opgen_core::{generate, RawDataset, RenderOptions};
//!
//! let dataset = RawDataset::from_path("data/sm83-opcodes.json".as_ref())?;
//! let source = generate(&dataset, &RenderOptions::default())?;
//! println!("{source}");
//! # Ok::<(), opgen_core::GenError>(())
//! ```

pub mod dataset;
pub mod descriptor;
pub mod error;
pub mod flags;
pub mod ident;
pub mod render;
pub mod transform;

// Re-export common types
pub use dataset::{RawDataset, RawEntry, RawFlags, RawOperand};
pub use descriptor::{
    Flag, FlagBehavior, FlagBehaviorSet, InstructionDescriptor, OperandDescriptor,
};
pub use error::GenError;
pub use render::{generate, render_descriptor, render_table, RenderOptions};
pub use transform::{operand_names, transform_entry, transform_table};
