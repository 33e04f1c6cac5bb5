//! Property-based tests for 1password query parsing

use proptest::prelude::*;
use resolvar_1password::OnePasswordQuery;

proptest! {
    #[test]
    fn parse_never_panics(reference in ".*") {
        let _ = OnePasswordQuery::parse(&reference);
    }

    #[test]
    fn escaped_colons_round_trip(item in "[a-z]{1,8}(:[a-z]{1,8}){1,3}") {
        let escaped = item.replace(':', r"\:");
        let query = OnePasswordQuery::parse(&format!("1password:{escaped}"));

        prop_assert_eq!(query.item(), item.as_str());
    }

    #[test]
    fn item_is_always_the_last_segment(
        options in prop::collection::vec("[a-z]{1,6}(=[a-z]{0,6})?", 0..4),
        item in "[a-z]{1,10}",
    ) {
        let mut body = options.join(":");
        if !body.is_empty() {
            body.push(':');
        }
        body.push_str(&item);

        let query = OnePasswordQuery::parse(&format!("1password:{body}"));
        prop_assert_eq!(query.item(), item.as_str());
    }

    #[test]
    fn values_keep_extra_equals_signs(value in "=?[a-z=]{0,10}") {
        let query = OnePasswordQuery::parse(&format!("1password:foo={value}:item"));

        match query.option("foo") {
            Some(resolvar_1password::OptionValue::Text(text)) => {
                prop_assert_eq!(text.as_str(), value.as_str());
            }
            other => prop_assert!(false, "expected text option, got {:?}", other),
        }
    }
}
