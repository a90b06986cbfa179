//! Raw dataset entries to [`InstructionDescriptor`]s.
//!
//! The transform is a stateless, order-preserving map: one descriptor per
//! entry, in the dataset's iteration order. The first invalid entry aborts the
//! whole table.

use indexmap::IndexMap;
use tracing::{debug, instrument, trace};

use crate::dataset::{RawDataset, RawEntry, RawOperand};
use crate::descriptor::{InstructionDescriptor, OperandDescriptor};
use crate::error::GenError;
use crate::flags::translate_flags;
use crate::ident::{is_valid_ident, operand_ident};

/// Most cycle counts an entry may carry (taken / not taken).
pub const MAX_CYCLE_COUNTS: usize = 2;

/// Transforms every entry of the CB-prefixed table, in order.
#[instrument(skip(dataset), fields(entries = dataset.len()), level = "debug")]
pub fn transform_table(dataset: &RawDataset) -> Result<Vec<InstructionDescriptor>, GenError> {
    let descriptors = dataset
        .cbprefixed
        .iter()
        .map(|(code, entry)| transform_entry(code, entry))
        .collect::<Result<Vec<_>, _>>()?;
    operand_names(&descriptors)?;
    debug!(count = descriptors.len(), "Transformed opcode table");
    Ok(descriptors)
}

/// Maps each emitted operand identifier to the dataset name it stands for, in
/// first-seen order.
///
/// Two different names that emit as the same identifier (`"0"` and `"_0"`)
/// would make the generated names ambiguous, so the second one is rejected.
pub fn operand_names(descs: &[InstructionDescriptor]) -> Result<IndexMap<&str, &str>, GenError> {
    let mut names: IndexMap<&str, &str> = IndexMap::new();
    for desc in descs {
        for (i, op) in desc.operands.iter().enumerate() {
            let seen = *names.entry(op.ident.as_str()).or_insert(op.name.as_str());
            if seen != op.name {
                return Err(GenError::malformed(
                    format!("{}.operands[{i}].name", desc.code),
                    format!(
                        "{:?} is emitted as `{}`, which already stands for {seen:?}",
                        op.name, op.ident
                    ),
                ));
            }
        }
    }
    Ok(names)
}

/// Transforms a single dataset entry.
pub fn transform_entry(code: &str, entry: &RawEntry) -> Result<InstructionDescriptor, GenError> {
    trace!(code, mnemonic = %entry.mnemonic, "Transforming entry");

    if !is_valid_ident(&entry.mnemonic) {
        return Err(GenError::malformed(
            format!("{code}.mnemonic"),
            format!("{:?} is not a valid identifier", entry.mnemonic),
        ));
    }
    if entry.bytes == 0 {
        return Err(GenError::malformed(
            format!("{code}.bytes"),
            "instruction length must be at least one byte",
        ));
    }
    if entry.cycles.is_empty() || entry.cycles.len() > MAX_CYCLE_COUNTS {
        return Err(GenError::malformed(
            format!("{code}.cycles"),
            format!(
                "expected 1 to {MAX_CYCLE_COUNTS} cycle counts, found {}",
                entry.cycles.len()
            ),
        ));
    }

    let operands = entry
        .operands
        .iter()
        .enumerate()
        .map(|(i, op)| transform_operand(code, i, op))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(InstructionDescriptor {
        code: code.to_owned(),
        mnemonic: entry.mnemonic.clone(),
        byte_length: entry.bytes,
        cycle_counts: entry.cycles.clone(),
        operands,
        is_immediate: entry.immediate,
        flag_effects: translate_flags(code, entry.flags.symbols())?,
    })
}

fn transform_operand(
    code: &str,
    index: usize,
    op: &RawOperand,
) -> Result<OperandDescriptor, GenError> {
    let ident = operand_ident(&op.name);
    if !is_valid_ident(&ident) {
        return Err(GenError::malformed(
            format!("{code}.operands[{index}].name"),
            format!("{:?} cannot be emitted as an identifier", op.name),
        ));
    }
    Ok(OperandDescriptor {
        name: op.name.clone(),
        ident: ident.into_owned(),
        immediate: op.immediate,
        bytes: op.bytes,
        increment: op.increment,
        decrement: op.decrement,
    })
}
