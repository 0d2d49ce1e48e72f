//! Property-based tests for leveled_log using proptest

mod common;

use common::{without_timestamp, SharedBuffer};
use leveled_log::prelude::*;
use proptest::prelude::*;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop::sample::select(Severity::ALL.to_vec())
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Canonical names resolve back to the same severity
    #[test]
    fn test_severity_name_roundtrip(severity in any_severity()) {
        prop_assert_eq!(Severity::from_name(severity.name()), Some(severity));
        prop_assert_eq!(severity.name().parse::<Severity>().unwrap(), severity);
    }

    /// Ordering follows the discriminant
    #[test]
    fn test_severity_ordering(s1 in any_severity(), s2 in any_severity()) {
        let v1 = s1 as u8;
        let v2 = s2 as u8;

        prop_assert_eq!(s1 <= s2, v1 <= v2);
        prop_assert_eq!(s1 < s2, v1 < v2);
        prop_assert_eq!(s1 == s2, v1 == v2);
    }

    /// Display matches to_str and is the uppercase form of the key
    #[test]
    fn test_severity_display(severity in any_severity()) {
        prop_assert_eq!(severity.to_string(), severity.to_str());
        prop_assert_eq!(severity.to_str().to_lowercase(), severity.name());
    }

    /// Anything that is not a canonical key is rejected
    #[test]
    fn test_unknown_names_rejected(name in "[A-Za-z]{0,12}") {
        let known = Severity::ALL.iter().any(|s| s.name() == name);
        prop_assert_eq!(Severity::from_name(&name).is_some(), known);
    }
}

// ============================================================================
// Filtering Tests
// ============================================================================

proptest! {
    /// A call emits exactly one line iff its severity reaches the threshold
    #[test]
    fn test_threshold_filtering(threshold in any_severity(), severity in any_severity()) {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone(), threshold, "");

        logger.write(severity, "sample").unwrap();

        let expected = if severity >= threshold { 1 } else { 0 };
        prop_assert_eq!(buffer.lines().len(), expected);
    }

    /// An unrecognized name never changes the threshold
    #[test]
    fn test_failed_set_level_by_name_is_noop(
        threshold in any_severity(),
        name in "[a-z]{1,10}",
    ) {
        let logger = Logger::new(std::io::sink(), threshold, "");
        match logger.set_level_by_name(&name) {
            Ok(()) => prop_assert_eq!(Some(logger.level()), Severity::from_name(&name)),
            Err(_) => prop_assert_eq!(logger.level(), threshold),
        }
    }
}

// ============================================================================
// Formatting Tests
// ============================================================================

proptest! {
    /// Exactly one trailing terminator, whether or not the message had one
    #[test]
    fn test_single_terminator(message in "[^\n]{0,40}", terminated in any::<bool>()) {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone(), Severity::Debug, "");

        let input = if terminated { format!("{}\n", message) } else { message.clone() };
        logger.info(&input).unwrap();

        let contents = buffer.contents();
        prop_assert!(contents.ends_with('\n'));
        prop_assert!(!contents.ends_with("\n\n"));
        prop_assert_eq!(without_timestamp(&contents), format!("INFO - {}\n", message));
    }

    /// A non-empty prefix appears once, right after the severity name
    #[test]
    fn test_prefix_placement(prefix in "[a-z][a-z0-9_]{0,15}", severity in any_severity()) {
        let buffer = SharedBuffer::new();
        let logger = Logger::new(buffer.clone(), Severity::Debug, &prefix);

        logger.write(severity, "msg").unwrap();

        let contents = buffer.contents();
        let expected = format!("{} {} - msg\n", severity, prefix);
        prop_assert_eq!(without_timestamp(&contents), expected);
        prop_assert_eq!(logger.prefix(), prefix);
    }
}
