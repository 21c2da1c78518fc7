//! Comprehensive unit tests for identifiers and reference numbers

use std::collections::HashSet;
use std::str::FromStr;

use core_kernel::{
    ClientId, ClientNumber, IdentifierError, LoanId, LoanNumber, PaymentId, PaymentNumber,
};
use uuid::Uuid;

mod entity_ids {
    use super::*;

    #[test]
    fn test_display_carries_the_prefix() {
        assert!(LoanId::new().to_string().starts_with("LOAN-"));
        assert!(PaymentId::new().to_string().starts_with("PAY-"));
        assert!(ClientId::new().to_string().starts_with("CLI-"));
    }

    #[test]
    fn test_parse_round_trip() {
        let id = LoanId::new();
        let parsed = LoanId::from_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_accepts_bare_uuid() {
        let uuid = Uuid::new_v4();
        let parsed = PaymentId::from_str(&uuid.to_string()).unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LoanId::from_str("LOAN-not-a-uuid").is_err());
    }

    #[test]
    fn test_v7_ids_are_distinct() {
        let ids: HashSet<_> = (0..100).map(|_| LoanId::new_v7().to_string()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_uuid_conversions() {
        let uuid = Uuid::new_v4();
        let id = ClientId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(uuid, back);
    }
}

mod reference_numbers {
    use super::*;

    #[test]
    fn test_accepts_non_empty_values() {
        let number = LoanNumber::new("LN-2024-0042").unwrap();
        assert_eq!(number.as_str(), "LN-2024-0042");
        assert_eq!(number.to_string(), "LN-2024-0042");
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(ClientNumber::new(""), Err(IdentifierError::Empty));
        assert_eq!(ClientNumber::new("  \t"), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_from_str_round_trip() {
        let parsed: PaymentNumber = "PMT-123456".parse().unwrap();
        assert_eq!(parsed.as_str(), "PMT-123456");
    }

    #[test]
    fn test_equality_and_hashing() {
        let a = LoanNumber::new("LN-1").unwrap();
        let b = LoanNumber::new("LN-1").unwrap();
        let c = LoanNumber::new("LN-2").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<LoanNumber> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_is_transparent() {
        let number = LoanNumber::new("LN-77").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"LN-77\"");

        let back: LoanNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, number);
    }
}

mod generated_payment_numbers {
    use super::*;

    #[test]
    fn test_generated_form() {
        let number = PaymentNumber::generate();
        let digits = number.as_str().strip_prefix("PMT-").unwrap();
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_numbers_vary() {
        let numbers: HashSet<_> = (0..50).map(|_| PaymentNumber::generate()).collect();
        assert!(numbers.len() > 1);
    }
}
