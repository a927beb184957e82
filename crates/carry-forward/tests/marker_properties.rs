use prep_carry_forward::markers::{CHECKED, UNCHECKED};
use prep_carry_forward::{extract_checklist, normalize, top_up};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "[x]",
        "[X]",
        "[ ]",
        "[]",
        "[",
        "]",
        "x",
        " ",
        "Heir",
        "<li>",
        "</li>",
        "<label>",
        "</label>",
        "<input type=\"checkbox\">",
        "<input type=\"checkbox\" checked>",
        "<input type=\"text\">",
        "\u{2610}",
        "\u{2611}",
    ])
}

fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(token(), 0..24).prop_map(|tokens| tokens.concat())
}

/// One piece of entry text as `(html, decoded text)`
fn entry_piece() -> impl Strategy<Value = (String, String)> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(|word| (word.clone(), word)),
        prop::sample::select(vec![
            ("&amp;", "&"),
            ("&lt;", "<"),
            ("&gt;", ">"),
            ("&rsquo;", "\u{2019}"),
            ("&eacute;", "\u{e9}"),
            ("&#233;", "\u{e9}"),
            ("&", "&"),
            (">", ">"),
            ("< 5 >", "< 5 >"),
        ])
        .prop_map(|(html, text)| (html.to_string(), text.to_string())),
    ]
}

fn entry() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(entry_piece(), 1..6).prop_map(|pieces| {
        let html: Vec<&str> = pieces.iter().map(|(html, _)| html.as_str()).collect();
        let text: Vec<&str> = pieces.iter().map(|(_, text)| text.as_str()).collect();
        (html.join(" "), text.join(" "))
    })
}

proptest! {
    #[test]
    fn proptest_normalize_is_idempotent(html in markup()) {
        let once = normalize(&html);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn proptest_normalize_leaves_no_marker_forms(html in markup()) {
        let out = normalize(&html);
        prop_assert!(!out.contains("[x]") && !out.contains("[X]"));
        prop_assert!(!out.contains("[ ]") && !out.contains("[]"));
        prop_assert!(!out.contains("type=\"checkbox\""));
        prop_assert!(!out.contains("label>"));
    }

    #[test]
    fn proptest_glyph_only_text_is_unchanged(
        text in "[A-Za-z ,.\u{2610}\u{2611}]{0,40}",
    ) {
        prop_assert_eq!(normalize(&text), text);
    }

    #[test]
    fn proptest_top_up_length_and_prefix(
        items in prop::collection::vec("[a-z]{1,8}", 0..16),
        target in 0usize..14,
    ) {
        let out = top_up(items.clone(), target, "Clue");
        prop_assert_eq!(out.len(), target);
        let kept = items.len().min(target);
        prop_assert_eq!(&out[..kept], &items[..kept]);
        prop_assert!(out[kept..].iter().all(|entry| entry == "Clue"));
    }

    #[test]
    fn proptest_extraction_removes_exactly_the_list(
        before in "[a-z ]{0,12}",
        after in "[a-z ]{0,12}",
        entries in prop::collection::vec((entry(), any::<bool>()), 0..6),
    ) {
        let list: String = entries
            .iter()
            .map(|((html, _), checked)| {
                let marker = if *checked { CHECKED } else { UNCHECKED };
                format!("<li>{marker} {html}</li>")
            })
            .collect();
        let html = format!("<p>{before}</p><ul class=\"lgmp-checklist\">{list}</ul><p>{after}</p>");

        let result = extract_checklist(&html);
        let expected = format!("<p>{before}</p><p>{after}</p>");
        prop_assert_eq!(&result.body_without_checklist, &expected);
        prop_assert_eq!(result.items.len(), entries.len());

        let open: Vec<String> = entries
            .iter()
            .filter(|(_, checked)| !checked)
            .map(|((_, text), _)| text.clone())
            .collect();
        prop_assert_eq!(result.unchecked_texts(), open);
    }
}
