//! Typed instruction descriptors produced by the transform.
//!
//! These mirror the raw dataset entries after normalisation: operand names are
//! paired with the identifier they are emitted under, and flag symbols have been
//! resolved to a [`FlagBehavior`].

use std::fmt;

/// One of the four SM83 status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Zero
    Z,
    /// Subtract
    N,
    /// Half carry
    H,
    /// Carry
    C,
}

impl Flag {
    /// All flags in register bit order (bit 7 down to bit 4).
    pub const ALL: [Self; 4] = [Self::Z, Self::N, Self::H, Self::C];

    /// The uppercase letter the dataset uses for this flag.
    pub const fn letter(self) -> char {
        match self {
            Self::Z => 'Z',
            Self::N => 'N',
            Self::H => 'H',
            Self::C => 'C',
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Effect an instruction has on a single flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagBehavior {
    /// Left unchanged.
    Unaffected,
    /// Forced to 0.
    Cleared,
    /// Forced to 1.
    Set,
    /// Computed from the result of the operation.
    DataDependent,
}

impl FlagBehavior {
    /// Variant name as it appears in generated source.
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Unaffected => "Unaffected",
            Self::Cleared => "Cleared",
            Self::Set => "Set",
            Self::DataDependent => "DataDependent",
        }
    }
}

/// Behaviour of all four flags for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagBehaviorSet {
    pub z: FlagBehavior,
    pub n: FlagBehavior,
    pub h: FlagBehavior,
    pub c: FlagBehavior,
}

impl FlagBehaviorSet {
    pub const fn get(&self, flag: Flag) -> FlagBehavior {
        match flag {
            Flag::Z => self.z,
            Flag::N => self.n,
            Flag::H => self.h,
            Flag::C => self.c,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandDescriptor {
    /// Name exactly as it appears in the dataset (`"0"`, `"HL"`, ...).
    pub name: String,
    /// Identifier the operand is emitted under (`"_0"`, `"HL"`, ...).
    pub ident: String,
    /// Accessed directly rather than through the address it names.
    pub immediate: bool,
    pub bytes: Option<u8>,
    pub increment: Option<bool>,
    pub decrement: Option<bool>,
}

impl OperandDescriptor {
    /// Returns true if any optional attribute is present.
    pub const fn has_attributes(&self) -> bool {
        self.bytes.is_some() || self.increment.is_some() || self.decrement.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// Opcode key from the dataset, kept for the trace comment only.
    pub code: String,
    pub mnemonic: String,
    pub byte_length: u8,
    /// One entry, or taken/not-taken counts for branches.
    pub cycle_counts: Vec<u8>,
    pub operands: Vec<OperandDescriptor>,
    pub is_immediate: bool,
    pub flag_effects: FlagBehaviorSet,
}
