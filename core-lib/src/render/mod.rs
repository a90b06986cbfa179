//! Rendering of descriptors as Rust source.
//!
//! Each descriptor becomes one `Opcode { .. }` struct literal preceded by a
//! `// <code>` comment. Operands are built from `Operand::new(name, immediate)`;
//! optional attributes are written as fields of a struct update only when the
//! dataset provided them.

use std::fmt;

use tracing::{debug, instrument};

use crate::dataset::RawDataset;
use crate::descriptor::{FlagBehaviorSet, InstructionDescriptor, OperandDescriptor};
use crate::error::GenError;
use crate::ident::is_valid_ident;
use crate::transform::transform_table;

mod types;

pub use types::render_types;

const INDENT: &str = "    ";

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Wrap the literals in `pub const <name>: &[Opcode] = &[ .. ];`.
    pub table_name: Option<String>,
    /// Prepend the `Opcode`, `Operand`, flag and name type definitions.
    pub with_types: bool,
}

/// Line-oriented source writer that tracks indentation.
pub(crate) struct SourceWriter {
    out: String,
    depth: usize,
}

impl SourceWriter {
    pub(crate) const fn new(depth: usize) -> Self {
        Self {
            out: String::new(),
            depth,
        }
    }

    pub(crate) fn line(&mut self, args: fmt::Arguments<'_>) {
        let start = self.out.len();
        self.out.push_str(&fmt::format(args));
        if self.out.len() > start {
            self.out.insert_str(start, &INDENT.repeat(self.depth));
        }
        self.out.push('\n');
    }

    pub(crate) fn open(&mut self, args: fmt::Arguments<'_>) {
        self.line(args);
        self.depth += 1;
    }

    pub(crate) fn close(&mut self, args: fmt::Arguments<'_>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(args);
    }

    pub(crate) fn blank(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }
}

/// Renders one descriptor at the top level.
pub fn render_descriptor(desc: &InstructionDescriptor) -> String {
    let mut w = SourceWriter::new(0);
    write_descriptor(&mut w, desc);
    w.finish()
}

fn write_descriptor(w: &mut SourceWriter, desc: &InstructionDescriptor) {
    w.line(format_args!("// {}", desc.code));
    w.open(format_args!("Opcode {{"));
    w.line(format_args!("mnemonic: Mnemonic::{},", desc.mnemonic));
    w.line(format_args!("bytes: {},", desc.byte_length));
    w.line(format_args!("cycles: &[{}],", join(&desc.cycle_counts)));
    if desc.operands.is_empty() {
        w.line(format_args!("operands: &[],"));
    } else {
        w.open(format_args!("operands: &["));
        for op in &desc.operands {
            write_operand(w, op);
        }
        w.close(format_args!("],"));
    }
    w.line(format_args!("immediate: {},", desc.is_immediate));
    write_flags(w, &desc.flag_effects);
    w.close(format_args!("}},"));
}

fn write_operand(w: &mut SourceWriter, op: &OperandDescriptor) {
    let base = format!("Operand::new(OperandName::{}, {})", op.ident, op.immediate);
    if !op.has_attributes() {
        w.line(format_args!("{base},"));
        return;
    }
    let attrs = [
        ("bytes", op.bytes.map(|b| b.to_string())),
        ("increment", op.increment.map(|b| b.to_string())),
        ("decrement", op.decrement.map(|b| b.to_string())),
    ];
    w.open(format_args!("Operand {{"));
    for (field, value) in attrs {
        if let Some(value) = value {
            w.line(format_args!("{field}: Some({value}),"));
        }
    }
    w.line(format_args!("..{base}"));
    w.close(format_args!("}},"));
}

fn write_flags(w: &mut SourceWriter, flags: &FlagBehaviorSet) {
    w.open(format_args!("flags: FlagBehaviors {{"));
    for (field, behavior) in [
        ("z", flags.z),
        ("n", flags.n),
        ("h", flags.h),
        ("c", flags.c),
    ] {
        w.line(format_args!(
            "{field}: FlagBehavior::{},",
            behavior.variant_name()
        ));
    }
    w.close(format_args!("}},"));
}

fn join(values: &[u8]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders all descriptors, in order, separated by blank lines.
///
/// Fails if the table name is not a usable identifier, or if the type prelude
/// is requested and two operand names collide.
#[instrument(skip_all, fields(count = descs.len()), level = "debug")]
pub fn render_table(
    descs: &[InstructionDescriptor],
    options: &RenderOptions,
) -> Result<String, GenError> {
    if let Some(name) = options.table_name.as_deref() {
        if !is_valid_ident(name) {
            return Err(GenError::InvalidOption {
                option: "table_name",
                reason: format!("{name:?} is not a valid identifier"),
            });
        }
    }

    let mut out = String::new();
    if options.with_types {
        out.push_str(&render_types(descs)?);
        out.push('\n');
    }

    let depth = usize::from(options.table_name.is_some());
    let mut w = SourceWriter::new(depth);
    for (i, desc) in descs.iter().enumerate() {
        if i > 0 {
            w.blank();
        }
        write_descriptor(&mut w, desc);
    }
    let body = w.finish();

    match &options.table_name {
        Some(name) => {
            out.push_str(&format!("pub const {name}: &[Opcode] = &[\n"));
            out.push_str(&body);
            out.push_str("];\n");
        }
        None => out.push_str(&body),
    }
    debug!(bytes = out.len(), "Rendered opcode table");
    Ok(out)
}

/// Transforms the whole dataset and renders it.
///
/// Nothing is rendered unless every entry transforms cleanly.
pub fn generate(dataset: &RawDataset, options: &RenderOptions) -> Result<String, GenError> {
    let descs = transform_table(dataset)?;
    render_table(&descs, options)
}
