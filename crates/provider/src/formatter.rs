// provider/src/formatter.rs

//! Input formatting: pure per-parameter validation and normalization applied
//! before any backing-client call is made.

use crate::{ProviderError, ProviderResult};
use serde_json::Value;
use thor_client::Revision;

/// Parse a block-number parameter into a [`Revision`].
///
/// Accepts the tags `latest`/`earliest`/`pending`, a non-negative integer, or
/// a `0x`-prefixed hex string. A missing parameter means the best block.
/// `pending` has no equivalent in the Thor model and always fails with
/// `BlockNotFound("pending")`.
pub fn block_revision(param: Option<&Value>) -> ProviderResult<Revision> {
    let value = match param {
        None | Some(Value::Null) => return Ok(Revision::Best),
        Some(value) => value,
    };

    match value {
        Value::String(tag) if tag == "latest" => Ok(Revision::Best),
        Value::String(tag) if tag == "earliest" => Ok(Revision::Number(0)),
        Value::String(tag) if tag == "pending" => {
            Err(ProviderError::BlockNotFound("pending".to_string()))
        }
        Value::String(hex) => {
            let digits = hex
                .strip_prefix("0x")
                .ok_or_else(|| ProviderError::InvalidParams(format!("invalid block number: {hex}")))?;
            u64::from_str_radix(digits, 16)
                .map(Revision::Number)
                .map_err(|_| ProviderError::InvalidParams(format!("invalid block number: {hex}")))
        }
        Value::Number(num) => num
            .as_u64()
            .map(Revision::Number)
            .ok_or_else(|| ProviderError::InvalidParams(format!("invalid block number: {num}"))),
        other => Err(ProviderError::InvalidParams(format!("invalid block number: {other}"))),
    }
}

/// Reject a positional default-block parameter with any value but `"latest"`.
///
/// `position` is 1-based, matching how callers count JSON-RPC parameters.
pub fn default_block_param(method: &str, params: &[Value], position: usize) -> ProviderResult<()> {
    if is_latest_or_absent(params, position) {
        return Ok(());
    }
    Err(ProviderError::MethodParamNotSupported {
        method: method.to_string(),
        index: position,
    })
}

/// Reject a recognized `defaultBlock` option with any value but `"latest"`.
pub fn default_block_opt(
    method: &str,
    params: &[Value],
    position: usize,
    option: &str,
) -> ProviderResult<()> {
    if is_latest_or_absent(params, position) {
        return Ok(());
    }
    Err(ProviderError::MethodOptNotSupported {
        method: method.to_string(),
        option: option.to_string(),
    })
}

fn is_latest_or_absent(params: &[Value], position: usize) -> bool {
    match params.get(position - 1) {
        None => true,
        Some(Value::String(tag)) => tag == "latest",
        Some(_) => false,
    }
}

/// Normalize a storage key to a fixed 32-byte hex string.
///
/// Short keys are left-padded with zeros; over-length keys are a caller error,
/// never truncated.
pub fn to_bytes32(param: Option<&Value>) -> ProviderResult<String> {
    let key = param
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::InvalidParams("storage key must be a hex string".into()))?;

    let digits = key.strip_prefix("0x").unwrap_or(key);
    if digits.is_empty() || digits.len() > 64 {
        return Err(ProviderError::InvalidParams(format!(
            "storage key must be 1 to 32 bytes, got {key}"
        )));
    }

    let padded = format!("{:0>64}", digits.to_ascii_lowercase());
    hex::decode(&padded)
        .map_err(|_| ProviderError::InvalidParams(format!("storage key is not hex: {key}")))?;

    Ok(format!("0x{padded}"))
}

/// Fetch a required string parameter (address, block hash, transaction id).
pub fn param_str<'a>(params: &'a [Value], index: usize, what: &str) -> ProviderResult<&'a str> {
    params
        .get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::InvalidParams(format!("missing {what} at parameter #{}", index + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_revision_tags() {
        assert_eq!(block_revision(Some(&json!("latest"))).unwrap(), Revision::Best);
        assert_eq!(block_revision(Some(&json!("earliest"))).unwrap(), Revision::Number(0));
        assert_eq!(block_revision(None).unwrap(), Revision::Best);
    }

    #[test]
    fn test_block_revision_pending_rejected() {
        let err = block_revision(Some(&json!("pending"))).unwrap_err();
        match err {
            ProviderError::BlockNotFound(tag) => assert_eq!(tag, "pending"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_block_revision_numbers() {
        assert_eq!(block_revision(Some(&json!(11473393))).unwrap(), Revision::Number(11473393));
        assert_eq!(block_revision(Some(&json!("0xaf11f1"))).unwrap(), Revision::Number(0xaf11f1));
        assert_eq!(block_revision(Some(&json!("0x0"))).unwrap(), Revision::Number(0));
    }

    #[test]
    fn test_block_revision_rejects_garbage() {
        assert!(block_revision(Some(&json!(-1))).is_err());
        assert!(block_revision(Some(&json!("12ab"))).is_err());
        assert!(block_revision(Some(&json!("0xzz"))).is_err());
        assert!(block_revision(Some(&json!({}))).is_err());
    }

    #[test]
    fn test_default_block_param_latest_only() {
        let ok = vec![json!("0xabc"), json!("latest")];
        assert!(default_block_param("getBalance", &ok, 2).is_ok());

        let absent = vec![json!("0xabc")];
        assert!(default_block_param("getBalance", &absent, 2).is_ok());

        let bad = vec![json!("0xabc"), json!("0x10")];
        match default_block_param("getBalance", &bad, 2).unwrap_err() {
            ProviderError::MethodParamNotSupported { method, index } => {
                assert_eq!(method, "getBalance");
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_block_opt_names_the_option() {
        let bad = vec![json!("0xabc"), json!("0x1"), json!("earliest")];
        match default_block_opt("getStorageAt", &bad, 3, "defaultBlock").unwrap_err() {
            ProviderError::MethodOptNotSupported { method, option } => {
                assert_eq!(method, "getStorageAt");
                assert_eq!(option, "defaultBlock");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_to_bytes32_left_pads() {
        let key = to_bytes32(Some(&json!("0x1"))).unwrap();
        assert_eq!(key.len(), 66);
        assert_eq!(key, format!("0x{}1", "0".repeat(63)));
    }

    #[test]
    fn test_to_bytes32_full_key_is_noop() {
        let full = format!("0x{}", "ab".repeat(32));
        assert_eq!(to_bytes32(Some(&json!(full))).unwrap(), full);
    }

    #[test]
    fn test_to_bytes32_rejects_overlength_and_nonhex() {
        let long = format!("0x{}", "ab".repeat(33));
        assert!(to_bytes32(Some(&json!(long))).is_err());
        assert!(to_bytes32(Some(&json!("0xnothex"))).is_err());
        assert!(to_bytes32(Some(&json!(42))).is_err());
        assert!(to_bytes32(None).is_err());
    }
}
