use crate::descriptor::{Flag, FlagBehavior, FlagBehaviorSet};
use crate::error::GenError;

/// Translates one raw flag symbol into its behaviour.
///
/// `-` is unaffected, `0` cleared, `1` set, and the flag's own uppercase letter
/// means the flag is computed from the result. Anything else, including another
/// flag's letter, is rejected.
pub fn translate_flag(code: &str, flag: Flag, symbol: &str) -> Result<FlagBehavior, GenError> {
    match symbol {
        "-" => Ok(FlagBehavior::Unaffected),
        "0" => Ok(FlagBehavior::Cleared),
        "1" => Ok(FlagBehavior::Set),
        s if is_own_letter(flag, s) => Ok(FlagBehavior::DataDependent),
        _ => Err(GenError::UnrecognizedFlagSymbol {
            code: code.to_owned(),
            flag,
            symbol: symbol.to_owned(),
        }),
    }
}

fn is_own_letter(flag: Flag, symbol: &str) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(flag.letter()) && chars.next().is_none()
}

/// Translates the four raw symbols, in `Z`, `N`, `H`, `C` order.
pub fn translate_flags(code: &str, symbols: [&str; 4]) -> Result<FlagBehaviorSet, GenError> {
    let [z, n, h, c] = symbols;
    Ok(FlagBehaviorSet {
        z: translate_flag(code, Flag::Z, z)?,
        n: translate_flag(code, Flag::N, n)?,
        h: translate_flag(code, Flag::H, h)?,
        c: translate_flag(code, Flag::C, c)?,
    })
}
