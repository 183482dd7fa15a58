//! Canonical string construction.

use super::ParameterSet;

/// Reserved field carrying the signature itself. Never part of the signed message.
pub const SIGNATURE_KEY: &str = "signature";

/// Build the canonical message for a parameter set.
///
/// Entries keyed [`SIGNATURE_KEY`] and entries with an empty value are dropped,
/// the rest are sorted by key (byte order) and joined as `k1=v1&k2=v2`.
///
/// Values are not escaped. A value containing `&` or `=` can therefore produce
/// the same message as a different parameter set; the gateway computes its
/// signatures the same way, so escaping here would break compatibility.
pub fn canonicalize(params: &ParameterSet) -> String {
    let mut pairs: Vec<(&str, &str)> = params
        .iter()
        .filter(|(key, value)| key.as_str() != SIGNATURE_KEY && !value.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut canonical = String::new();
    for (i, (key, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            canonical.push('&');
        }
        canonical.push_str(key);
        canonical.push('=');
        canonical.push_str(value);
    }
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ParameterSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_sorts_keys_and_joins() {
        let p = params(&[
            ("order_id", "ORDER_001"),
            ("amount", "100.00"),
            ("notify_url", "https://example.com/webhook"),
            ("chain_type", "BSC"),
        ]);

        assert_eq!(
            canonicalize(&p),
            "amount=100.00&chain_type=BSC&notify_url=https://example.com/webhook&order_id=ORDER_001"
        );
    }

    #[test]
    fn test_excludes_signature_and_empty_values() {
        let p = params(&[
            ("order_id", "ORDER_001"),
            ("signature", "deadbeef"),
            ("redirect_url", ""),
        ]);

        assert_eq!(canonicalize(&p), "order_id=ORDER_001");
    }

    #[test]
    fn test_byte_order_puts_uppercase_first() {
        let p = params(&[("b", "1"), ("B", "2"), ("a_b", "3"), ("ab", "4")]);

        assert_eq!(canonicalize(&p), "B=2&a_b=3&ab=4&b=1");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let p = params(&[("notify_url", "https://example.com/hook?a=1&b=2")]);

        assert_eq!(canonicalize(&p), "notify_url=https://example.com/hook?a=1&b=2");
    }

    #[test]
    fn test_empty_set() {
        assert_eq!(canonicalize(&ParameterSet::new()), "");
        assert_eq!(canonicalize(&params(&[("signature", "x"), ("a", "")])), "");
    }
}
