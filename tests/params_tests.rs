//! Parameter Block Decoder Tests
//!
//! Tests for two-pass decoding of `NAME: VALUE` response bodies.

use samplerctl::protocol::{parse_params, ParamValue};
use samplerctl::LscpError;

// =============================================================================
// Literal Ingestion (Pass 1)
// =============================================================================

#[test]
fn test_boolean_literals() {
    let params = parse_params([
        "ACTIVE: true",
        "MUTED: false",
        "SOLO: yes",
        "LOOPED: no",
    ])
    .unwrap();

    assert_eq!(params.get("active"), Some(&ParamValue::Bool(true)));
    assert_eq!(params.get("muted"), Some(&ParamValue::Bool(false)));
    assert_eq!(params.get("solo"), Some(&ParamValue::Bool(true)));
    assert_eq!(params.get("looped"), Some(&ParamValue::Bool(false)));
}

#[test]
fn test_plain_values_stay_strings() {
    let params = parse_params(["DESCRIPTION: a sampler", "VERSION: 2.0.1"]).unwrap();
    assert_eq!(
        params.get("description"),
        Some(&ParamValue::Str("a sampler".to_string()))
    );
    assert_eq!(
        params.get("version"),
        Some(&ParamValue::Str("2.0.1".to_string()))
    );
}

#[test]
fn test_value_may_contain_colons() {
    let params = parse_params(["NAME: a: b: c"]).unwrap();
    assert_eq!(params.get("name"), Some(&ParamValue::Str("a: b: c".to_string())));
}

#[test]
fn test_missing_delimiter_is_malformed() {
    let err = parse_params(["NoColonHere"]).unwrap_err();
    assert!(matches!(err, LscpError::MalformedParameterLine(_)));
}

#[test]
fn test_lookup_is_case_insensitive() {
    let params = parse_params(["Name: foo"]).unwrap();
    assert_eq!(params.get("NAME"), Some(&ParamValue::Str("foo".to_string())));
}

// =============================================================================
// Dependent Coercion (Pass 2)
// =============================================================================

#[test]
fn test_int_range_and_default() {
    let params = parse_params([
        "TYPE: INT",
        "RANGE_MIN: 0",
        "RANGE_MAX: 127",
        "DEFAULT: 64",
    ])
    .unwrap();

    assert_eq!(params.get("range_min"), Some(&ParamValue::Int(0)));
    assert_eq!(params.get("range_max"), Some(&ParamValue::Int(127)));
    assert_eq!(params.get("default"), Some(&ParamValue::Int(64)));
}

#[test]
fn test_type_may_follow_dependent_fields() {
    // `TYPE` appears after the fields it governs; the two-pass design must
    // still coerce them.
    let params = parse_params(["DEFAULT: 0.5", "RANGE_MAX: 1.0", "TYPE: FLOAT"]).unwrap();
    assert_eq!(params.get("default"), Some(&ParamValue::Float(0.5)));
    assert_eq!(params.get("range_max"), Some(&ParamValue::Float(1.0)));
}

#[test]
fn test_string_possibilities_with_multiplicity() {
    let params = parse_params([
        "TYPE: STRING",
        "MULTIPLICITY: true",
        "POSSIBILITIES: 'a','b','c'",
    ])
    .unwrap();

    assert_eq!(
        params.get("possibilities"),
        Some(&ParamValue::List(vec![
            ParamValue::Str("a".to_string()),
            ParamValue::Str("b".to_string()),
            ParamValue::Str("c".to_string()),
        ]))
    );
}

#[test]
fn test_possibilities_are_a_list_even_without_multiplicity() {
    let params = parse_params(["TYPE: INT", "POSSIBILITIES: 44100,48000,96000"]).unwrap();
    assert_eq!(
        params.get("possibilities"),
        Some(&ParamValue::List(vec![
            ParamValue::Int(44100),
            ParamValue::Int(48000),
            ParamValue::Int(96000),
        ]))
    );
}

#[test]
fn test_default_is_scalar_without_multiplicity() {
    let params = parse_params(["TYPE: STRING", "DEFAULT: 'hw:0'"]).unwrap();
    assert_eq!(params.get("default"), Some(&ParamValue::Str("hw:0".to_string())));
}

#[test]
fn test_default_is_a_list_with_multiplicity() {
    let params = parse_params(["TYPE: INT", "MULTIPLICITY: true", "DEFAULT: 1,2"]).unwrap();
    assert_eq!(
        params.get("default"),
        Some(&ParamValue::List(vec![ParamValue::Int(1), ParamValue::Int(2)]))
    );
}

#[test]
fn test_false_multiplicity_does_not_trigger_lists() {
    let params = parse_params(["TYPE: INT", "MULTIPLICITY: false", "DEFAULT: 7"]).unwrap();
    assert_eq!(params.get("default"), Some(&ParamValue::Int(7)));
}

#[test]
fn test_depends_and_parameters_split_on_commas() {
    let params = parse_params([
        "DEPENDS: a,b",
        "PARAMETERS: CARD,CHANNELS,SAMPLERATE",
    ])
    .unwrap();

    assert_eq!(
        params.get("depends"),
        Some(&ParamValue::List(vec![
            ParamValue::Str("a".to_string()),
            ParamValue::Str("b".to_string()),
        ]))
    );
    assert_eq!(
        params.get("parameters"),
        Some(&ParamValue::List(vec![
            ParamValue::Str("CARD".to_string()),
            ParamValue::Str("CHANNELS".to_string()),
            ParamValue::Str("SAMPLERATE".to_string()),
        ]))
    );
}

#[test]
fn test_bool_type_coercion() {
    let params = parse_params(["TYPE: BOOL", "RANGE_MIN: true", "RANGE_MAX: anything"]).unwrap();
    assert_eq!(params.get("range_min"), Some(&ParamValue::Bool(true)));
    // BOOL coercion is strict string equality with "true"
    assert_eq!(params.get("range_max"), Some(&ParamValue::Bool(false)));
}

// =============================================================================
// Failure Modes
// =============================================================================

#[test]
fn test_unknown_type_is_an_error() {
    let err = parse_params(["TYPE: DOUBLE", "DEFAULT: 1"]).unwrap_err();
    assert!(matches!(err, LscpError::UnknownType(t) if t == "DOUBLE"));
}

#[test]
fn test_missing_type_is_an_error() {
    let err = parse_params(["DEFAULT: 1"]).unwrap_err();
    assert!(matches!(err, LscpError::KeyNotFound(k) if k == "type"));
}

#[test]
fn test_malformed_int_is_a_parse_error() {
    let err = parse_params(["TYPE: INT", "DEFAULT: twelve"]).unwrap_err();
    assert!(matches!(err, LscpError::Parse(_)));
}

#[test]
fn test_malformed_float_is_a_parse_error() {
    let err = parse_params(["TYPE: FLOAT", "RANGE_MAX: 1.2.3"]).unwrap_err();
    assert!(matches!(err, LscpError::Parse(_)));
}
