//! Companion type definitions for generated tables.
//!
//! The `Mnemonic` and `OperandName` enums list every identifier used by the
//! descriptors, in first-seen order, and map each back to its semantic name.

use indexmap::IndexMap;

use super::SourceWriter;
use crate::descriptor::InstructionDescriptor;
use crate::error::GenError;
use crate::transform::operand_names;

const FIXED_TYPES: &str = "\
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBehavior {
    Unaffected,
    Cleared,
    Set,
    DataDependent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagBehaviors {
    pub z: FlagBehavior,
    pub n: FlagBehavior,
    pub h: FlagBehavior,
    pub c: FlagBehavior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    pub name: OperandName,
    pub immediate: bool,
    pub bytes: Option<u8>,
    pub increment: Option<bool>,
    pub decrement: Option<bool>,
}

impl Operand {
    pub const fn new(name: OperandName, immediate: bool) -> Self {
        Self {
            name,
            immediate,
            bytes: None,
            increment: None,
            decrement: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub mnemonic: Mnemonic,
    pub bytes: u8,
    pub cycles: &'static [u8],
    pub operands: &'static [Operand],
    pub immediate: bool,
    pub flags: FlagBehaviors,
}
";

/// Renders the type definitions the literals from `descs` refer to.
pub fn render_types(descs: &[InstructionDescriptor]) -> Result<String, GenError> {
    let mut mnemonics: IndexMap<&str, &str> = IndexMap::new();
    for desc in descs {
        mnemonics
            .entry(desc.mnemonic.as_str())
            .or_insert(desc.mnemonic.as_str());
    }
    let operands = operand_names(descs)?;

    let mut out = String::from(FIXED_TYPES);
    out.push('\n');
    out.push_str(&render_name_enum("Mnemonic", &mnemonics));
    out.push('\n');
    out.push_str(&render_name_enum("OperandName", &operands));
    Ok(out)
}

fn render_name_enum(name: &str, variants: &IndexMap<&str, &str>) -> String {
    let mut w = SourceWriter::new(0);
    w.line(format_args!(
        "#[allow(non_camel_case_types, clippy::upper_case_acronyms)]"
    ));
    w.line(format_args!("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]"));
    w.open(format_args!("pub enum {name} {{"));
    for ident in variants.keys() {
        w.line(format_args!("{ident},"));
    }
    w.close(format_args!("}}"));
    w.blank();

    w.open(format_args!("impl {name} {{"));
    w.open(format_args!("pub const fn as_str(self) -> &'static str {{"));
    if variants.is_empty() {
        w.line(format_args!("match self {{}}"));
    } else {
        w.open(format_args!("match self {{"));
        for (ident, semantic) in variants {
            w.line(format_args!("Self::{ident} => {semantic:?},"));
        }
        w.close(format_args!("}}"));
    }
    w.close(format_args!("}}"));
    w.close(format_args!("}}"));
    w.finish()
}
