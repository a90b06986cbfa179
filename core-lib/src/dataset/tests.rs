/// core-lib/src/dataset/tests.rs
use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

const SET_0_A: &str = r#"{
    "cbprefixed": {
        "0xC7": {
            "mnemonic": "SET",
            "bytes": 2,
            "cycles": [8],
            "operands": [
                { "name": "0", "immediate": true },
                { "name": "A", "immediate": true }
            ],
            "immediate": true,
            "flags": { "Z": "-", "N": "-", "H": "-", "C": "-" }
        }
    }
}"#;

#[test]
fn test_parses_single_entry() {
    let dataset = RawDataset::from_json(SET_0_A).unwrap();
    assert_eq!(dataset.len(), 1);
    let entry = &dataset.cbprefixed["0xC7"];
    assert_eq!(entry.mnemonic, "SET");
    assert_eq!(entry.bytes, 2);
    assert_eq!(entry.cycles, vec![8]);
    assert!(entry.immediate);
    assert_eq!(entry.operands[0].name, "0");
    assert_eq!(entry.operands[0].bytes, None);
    assert_eq!(entry.flags.symbols(), ["-", "-", "-", "-"]);
}

#[test]
fn test_preserves_source_order() {
    let json = r#"{ "cbprefixed": {
        "0x02": { "mnemonic": "RLC", "bytes": 2, "cycles": [8], "operands": [], "immediate": true,
                  "flags": { "Z": "Z", "N": "0", "H": "0", "C": "C" } },
        "0x00": { "mnemonic": "RLC", "bytes": 2, "cycles": [8], "operands": [], "immediate": true,
                  "flags": { "Z": "Z", "N": "0", "H": "0", "C": "C" } },
        "0x01": { "mnemonic": "RLC", "bytes": 2, "cycles": [8], "operands": [], "immediate": true,
                  "flags": { "Z": "Z", "N": "0", "H": "0", "C": "C" } }
    } }"#;
    let dataset = RawDataset::from_json(json).unwrap();
    let keys: Vec<&str> = dataset.cbprefixed.keys().map(String::as_str).collect();
    assert_eq!(keys, ["0x02", "0x00", "0x01"]);
}

#[test]
fn test_optional_operand_attributes() {
    let json = r#"{ "cbprefixed": { "0x00": {
        "mnemonic": "LD", "bytes": 1, "cycles": [8],
        "operands": [
            { "name": "HL", "immediate": false, "increment": true },
            { "name": "n8", "immediate": true, "bytes": 1, "decrement": null }
        ],
        "immediate": false,
        "flags": { "Z": "-", "N": "-", "H": "-", "C": "-" }
    } } }"#;
    let dataset = RawDataset::from_json(json).unwrap();
    let ops = &dataset.cbprefixed["0x00"].operands;
    assert_eq!(ops[0].increment, Some(true));
    assert_eq!(ops[0].decrement, None);
    assert_eq!(ops[1].bytes, Some(1));
    assert_eq!(ops[1].decrement, None);
}

#[test]
fn test_other_tables_are_ignored() {
    let json = r#"{ "unprefixed": { "0x00": { "mnemonic": "NOP" } }, "cbprefixed": {} }"#;
    let dataset = RawDataset::from_json(json).unwrap();
    assert!(dataset.is_empty());
}

#[test]
fn test_missing_table_is_malformed() {
    let err = RawDataset::from_json(r#"{ "unprefixed": {} }"#).unwrap_err();
    assert!(matches!(err, GenError::MalformedDataset { .. }));
    assert!(err.to_string().contains("cbprefixed"));
}

#[test]
fn test_invalid_json_is_malformed() {
    let err = RawDataset::from_json("{ not json").unwrap_err();
    assert!(matches!(err, GenError::MalformedDataset { .. }));
}

#[test_case("mnemonic")]
#[test_case("bytes")]
#[test_case("cycles")]
#[test_case("operands")]
#[test_case("immediate")]
#[test_case("flags")]
fn test_missing_mandatory_field(field: &str) {
    let mut value: serde_json::Value = serde_json::from_str(SET_0_A).unwrap();
    value["cbprefixed"]["0xC7"]
        .as_object_mut()
        .unwrap()
        .remove(field);
    let err = RawDataset::from_json(&value.to_string()).unwrap_err();
    match err {
        GenError::MalformedDataset { context, reason } => {
            assert_eq!(context, "cbprefixed.0xC7");
            assert!(reason.contains(field), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test_case("Z")]
#[test_case("N")]
#[test_case("H")]
#[test_case("C")]
fn test_missing_flag_entry(flag: &str) {
    let mut value: serde_json::Value = serde_json::from_str(SET_0_A).unwrap();
    value["cbprefixed"]["0xC7"]["flags"]
        .as_object_mut()
        .unwrap()
        .remove(flag);
    let err = RawDataset::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, GenError::MalformedDataset { .. }));
}

#[test]
fn test_wrong_type_is_malformed() {
    let json = SET_0_A.replace(r#""bytes": 2"#, r#""bytes": "two""#);
    let err = RawDataset::from_json(&json).unwrap_err();
    assert!(matches!(err, GenError::MalformedDataset { .. }));
}

#[test]
fn test_from_reader() {
    let dataset = RawDataset::from_reader(SET_0_A.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn test_from_path_missing_file() {
    let err = RawDataset::from_path(Path::new("/nonexistent/sm83-opcodes.json")).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/sm83-opcodes.json"));
}
