use cozo::*;

pub use super::super::{Error, *};

pub fn op_result(result: std::result::Result<NamedRows, miette::Report>) -> OpResult {
    use itertools::Itertools;
    let result = result.map_err(Error::EngineError)?;

    let headers = result.headers.iter().map(String::as_str).collect_vec();
    let rows = result.rows.iter().map(Vec::as_slice).collect_vec();

    match (&headers[..], &rows[..]) {
        (["status"], [[v]]) if v == &DataValue::from("OK") => Ok(()),
        _ => Err(Error::ResultError(result)),
    }
}

/// Nullable text column. `None` means the value is neither a string nor null.
pub fn opt_str(value: &DataValue) -> Option<Option<String>> {
    match value {
        DataValue::Null => Some(None),
        DataValue::Str(value) => Some(Some(value.to_string())),
        _ => None,
    }
}

pub fn str_or_null(value: &Option<String>) -> DataValue {
    match value {
        Some(value) => DataValue::from(value.as_str()),
        None => DataValue::Null,
    }
}
