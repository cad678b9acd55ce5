//! Cache key derivation for ticket identifiers.
//!
//! The external cache engine caps keys at 250 bytes while ticket identifiers
//! have no length bound, so identifiers are never used as keys directly.
//! Every key is the uppercase hex rendering of a SHA-512 digest over a
//! per-ticket-class namespace prefix followed by the identifier.

use gatepass_core::{require_non_blank, GatepassResult};
use sha2::{Digest, Sha512};

/// Namespace prefix for proxy-granting-ticket IOU mappings.
pub const PROXY_TICKET_NAMESPACE: &str = "PGTIOU::";

/// Namespace prefix for service ticket mappings.
pub const SERVICE_TICKET_NAMESPACE: &str = "ST::";

/// Length in characters of every derived key (SHA-512 as hex).
pub const DERIVED_KEY_LEN: usize = 128;

/// Derives the cache key for a ticket identifier within a namespace.
///
/// Deterministic: the same namespace and identifier always produce the same
/// key, across calls and across processes. The identifier must not be blank;
/// that is rejected here, before any hashing or network traffic.
pub fn derive_key(namespace: &str, identifier: &str) -> GatepassResult<String> {
    require_non_blank("Ticket identifier", identifier)?;

    let mut hasher = Sha512::new();
    hasher.update(namespace.as_bytes());
    hasher.update(identifier.as_bytes());

    Ok(hex::encode_upper(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatepass_core::GatepassError;

    #[test]
    fn test_derive_key_is_deterministic() {
        let first = derive_key(PROXY_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        let second = derive_key(PROXY_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_key_known_answers() {
        let key = derive_key(PROXY_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        assert_eq!(
            key,
            "CC047327D6CE15047EA6948B07A5ED0B208C0C71F7F55A6457F3E5BF352E00FB3AF190884AA0FA0D00B40292B43A2E00B4F99BCE23470338885E33B655F8EDFF"
        );

        let key = derive_key(SERVICE_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        assert_eq!(
            key,
            "B3338FE1C7BB27587979E1C6EFC865221B24F18E557B39CAF269BE6EC54A4628F6472B7F96E1981177EC040157333948DBE123992EEEC5E37FFF9943B272DD7B"
        );

        let key = derive_key(PROXY_TICKET_NAMESPACE, "ticket-42").expect("Failed to derive key");
        assert_eq!(
            key,
            "07248D0C9BA47F3372CBD9534946D8E8CDA49C6F6812AE661712D36DAE1A1AD10797E819E3AB05F27AA218F7B3981F4A6EB0634B9F4A46F1F6D968EA8482B224"
        );
    }

    #[test]
    fn test_derive_key_shape() {
        let key = derive_key(PROXY_TICKET_NAMESPACE, "abc").expect("Failed to derive key");
        assert_eq!(key.len(), DERIVED_KEY_LEN);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key, key.to_uppercase());
    }

    #[test]
    fn test_distinct_identifiers_derive_distinct_keys() {
        let first = derive_key(PROXY_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        let second = derive_key(PROXY_TICKET_NAMESPACE, "IOU-2-def").expect("Failed to derive key");
        assert_ne!(first, second);
    }

    #[test]
    fn test_distinct_namespaces_derive_distinct_keys() {
        let proxy = derive_key(PROXY_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        let service =
            derive_key(SERVICE_TICKET_NAMESPACE, "IOU-1-abc").expect("Failed to derive key");
        assert_ne!(proxy, service);
    }

    #[test]
    fn test_blank_identifier_is_rejected() {
        for identifier in ["", "   ", "\t\n"] {
            match derive_key(PROXY_TICKET_NAMESPACE, identifier).unwrap_err() {
                GatepassError::InvalidArgument(message) => {
                    assert!(message.contains("Ticket identifier"));
                }
                other => panic!("Expected InvalidArgument, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_long_identifier_derives_fixed_length_key() {
        let identifier = "x".repeat(1000);
        let key = derive_key(SERVICE_TICKET_NAMESPACE, &identifier).expect("Failed to derive key");
        assert_eq!(key.len(), DERIVED_KEY_LEN);
    }
}
