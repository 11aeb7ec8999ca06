//! Parameter block decoding
//!
//! Multi-line LSCP responses (`GET ... INFO` queries) carry one named value
//! per line in `NAME: VALUE` form. Values are typed: the block's own `TYPE`
//! field says how `DEFAULT`, `POSSIBILITIES`, `RANGE_MIN` and `RANGE_MAX`
//! must be read, and `MULTIPLICITY` says whether a field is a list.
//!
//! Because the deciding fields may appear *after* the fields they decide,
//! decoding is a two-stage pipeline: a literal ingestion pass building a raw
//! map, then an interpretation pass over the completed map resolving the
//! dependent coercions. No reliance on line order remains.

use crate::error::{LscpError, Result};
use crate::protocol::map::CaseInsensitiveMap;

/// A decoded parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Comma-delimited multi-value field
    List(Vec<ParamValue>),
}

impl ParamValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ParamValue]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{b}"),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Str(s) => write!(f, "{s}"),
            ParamValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

/// A decoded parameter block: case-insensitive names to typed values
pub type ParamMap = CaseInsensitiveMap<ParamValue>;

/// Decode a multi-line response body into a typed parameter map.
///
/// Stage 1 ingests every line literally (`true`/`yes` and `false`/`no`
/// become booleans, everything else stays a raw string). Stage 2 re-scans
/// the completed map and resolves the fields whose interpretation depends on
/// the sibling `type` and `multiplicity` entries.
pub fn parse_params<I, S>(lines: I) -> Result<ParamMap>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = ParamMap::new();

    // Stage 1: literal ingestion
    for line in lines {
        let line = line.as_ref();
        let (name, raw) = line
            .split_once(": ")
            .ok_or_else(|| LscpError::MalformedParameterLine(line.to_string()))?;

        let value = match raw {
            "true" | "yes" => ParamValue::Bool(true),
            "false" | "no" => ParamValue::Bool(false),
            _ => ParamValue::Str(raw.to_string()),
        };
        params.insert(name, value);
    }

    // Stage 2: dependent interpretation over the completed map
    let names: Vec<String> = params.keys().map(str::to_string).collect();
    for name in names {
        let raw = match params.get(&name) {
            Some(ParamValue::Str(s)) => s.clone(),
            // yes/no booleans from stage 1 need no further interpretation
            _ => continue,
        };

        let value = match name.as_str() {
            "depends" | "parameters" => ParamValue::List(
                raw.split(',')
                    .map(|part| ParamValue::Str(part.to_string()))
                    .collect(),
            ),
            "default" | "possibilities" => {
                let ty = declared_type(&params)?;
                if name == "possibilities" || has_multiplicity(&params) {
                    let fields = parse_quoted_csv(&raw);
                    ParamValue::List(
                        fields
                            .iter()
                            .map(|field| convert_param(field, &ty))
                            .collect::<Result<Vec<_>>>()?,
                    )
                } else {
                    convert_param(&raw, &ty)?
                }
            }
            "range_min" | "range_max" => {
                let ty = declared_type(&params)?;
                convert_param(&raw, &ty)?
            }
            _ => continue,
        };
        params.insert(&name, value);
    }

    Ok(params)
}

/// The block's own `type` field, required for dependent coercions
fn declared_type(params: &ParamMap) -> Result<String> {
    match params.get("type") {
        Some(ParamValue::Str(ty)) => Ok(ty.clone()),
        _ => Err(LscpError::KeyNotFound("type".to_string())),
    }
}

/// Whether `multiplicity` is present with a truthy boolean value.
///
/// Key presence alone is not enough: `MULTIPLICITY: false` must not switch
/// list parsing on.
fn has_multiplicity(params: &ParamMap) -> bool {
    matches!(params.get("multiplicity"), Some(ParamValue::Bool(true)))
}

/// Coerce a scalar raw value according to the declared `type`
fn convert_param(raw: &str, ty: &str) -> Result<ParamValue> {
    match ty {
        "BOOL" => Ok(ParamValue::Bool(raw == "true")),
        "INT" => raw
            .parse::<i64>()
            .map(ParamValue::Int)
            .map_err(|e| LscpError::Parse(format!("invalid integer {raw:?}: {e}"))),
        "FLOAT" => raw
            .parse::<f64>()
            .map(ParamValue::Float)
            .map_err(|e| LscpError::Parse(format!("invalid float {raw:?}: {e}"))),
        "STRING" => Ok(ParamValue::Str(strip_quotes(raw).to_string())),
        other => Err(LscpError::UnknownType(other.to_string())),
    }
}

/// Strip one leading and one trailing single quote, when both are present.
///
/// No escape decoding happens here; callers needing literal content run the
/// escape codec over the result.
fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Parse a single-quote-delimited CSV list.
///
/// Fields are separated by commas and optionally wrapped in single quotes; a
/// doubled `''` inside a quoted field stands for a literal quote.
fn parse_quoted_csv(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '\'' {
                if chars.peek() == Some(&'\'') {
                    field.push('\'');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '\'' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);

    fields
}
