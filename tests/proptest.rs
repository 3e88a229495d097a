//! Property-based tests for the codec, normalizer and filter.

use proptest::prelude::*;

use groupmeta::codec;
use groupmeta::core::filter::Blacklist;
use groupmeta::core::models::Conversation;
use groupmeta::normalize::normalize;

/// Text mixing the characters the normalizer cares about.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "Z", "7", " ", "  ", "\n", "\r", "\t", "\r\n", "é", "🎉", "-", "@",
        ]),
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in arb_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_leaves_no_control_whitespace(text in arb_text()) {
        let out = normalize(&text);
        prop_assert!(!out.contains('\r'));
        prop_assert!(!out.contains('\n'));
        prop_assert!(!out.contains('\t'));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn normalize_maps_each_break_to_one_space(inner in "[a-z]{1,4}", breaks in 1usize..5) {
        let text = format!("x{}{}y", "\n".repeat(breaks), inner);
        prop_assert_eq!(normalize(&text), format!("x{}{}y", " ".repeat(breaks), inner));
    }

    #[test]
    fn decode_recovers_creator_and_epoch(
        creator in "[0-9]{8,15}",
        middle in prop::option::of("[0-9a-z]{1,6}"),
        epoch in "[0-9]{1,12}",
        suffix in "[a-z]{1,5}\\.[a-z]{2,3}",
    ) {
        let id = match &middle {
            Some(m) => format!("{creator}-{m}-{epoch}@{suffix}"),
            None => format!("{creator}-{epoch}@{suffix}"),
        };
        let decoded = codec::decode(&id).unwrap();
        prop_assert_eq!(decoded.creator, creator);
        prop_assert_eq!(decoded.epoch, epoch);
    }

    #[test]
    fn decode_rejects_ids_without_dash(id in "[0-9a-z]{1,20}@[a-z]{1,5}") {
        prop_assert!(codec::decode(&id).unwrap_err().is_malformed_identifier());
    }

    #[test]
    fn short_id_has_no_suffix(id in "[0-9a-z-]{1,20}(@[a-z.]{1,8})?") {
        let short = codec::short_id(&id);
        prop_assert!(!short.contains('@'));
        prop_assert!(id.starts_with(short));
    }

    #[test]
    fn direct_messages_never_pass(
        name in "[A-Za-z ]{0,12}",
        entries in prop::collection::vec("[A-Za-z0-9 ]{0,12}", 0..5),
    ) {
        let blacklist: Blacklist = entries.into_iter().collect();
        let dm = Conversation::direct("5511999999999@c.us", name);
        prop_assert!(blacklist.is_excluded(&dm));
    }

    #[test]
    fn groups_pass_unless_listed(
        title in "[A-Za-z]{1,12}",
        entries in prop::collection::vec("[A-Za-z]{1,12}", 0..5),
    ) {
        let listed = entries.contains(&title);
        let blacklist: Blacklist = entries.into_iter().collect();
        let group = Conversation::group("5511-1600000000@g.us", title);
        prop_assert_eq!(blacklist.is_excluded(&group), listed);
    }
}
