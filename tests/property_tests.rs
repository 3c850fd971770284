//! Property-based tests for the guarantees that hold on every input: the
//! pipeline is total, comments never change the result, coercion is
//! deterministic, and nesting depth is preserved.

use lightconf::{coerce, parse, parse_with_options, to_string, Document, ParseOptions, Value};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,8}"
}

fn scalar_lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        word(),
        any::<i64>().prop_map(|n| n.to_string()),
        (any::<i32>(), 0u32..10_000).prop_map(|(a, b)| format!("{}.{}", a, b)),
        "@x[0-9A-F]{1,6}",
        Just("true".to_string()),
        Just("NULL".to_string()),
        "\"[a-z ]{0,10}\"",
    ]
}

/// Well-formed lines of the language: entries and block open/close.
fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        (word(), scalar_lexeme()).prop_map(|(k, v)| format!("{}: {}", k, v)),
        word().prop_map(|k| format!("{} {{", k)),
        Just("}".to_string()),
        Just("};".to_string()),
    ]
}

fn comment() -> impl Strategy<Value = String> {
    ("(##|//)", "[^\n]{0,20}").prop_map(|(marker, text)| format!("{}{}", marker, text))
}

proptest! {
    #[test]
    fn prop_parse_is_total(text in "\\PC{0,200}") {
        let doc = parse(&text);
        let _ = to_string(&doc);
    }

    #[test]
    fn prop_strict_never_panics(text in "[a-z{}:; \"\n@.0-9-]{0,120}") {
        let _ = parse_with_options(&text, &ParseOptions::strict());
    }

    #[test]
    fn prop_comments_do_not_change_result(
        lines in prop::collection::vec((line(), prop::option::of(comment())), 0..20)
    ) {
        let plain: Vec<String> = lines.iter().map(|(l, _)| l.clone()).collect();
        let commented: Vec<String> = lines
            .iter()
            .map(|(l, c)| match c {
                Some(c) => format!("{} {}", l, c),
                None => l.clone(),
            })
            .collect();
        prop_assert_eq!(parse(&commented.join("\n")), parse(&plain.join("\n")));
    }

    #[test]
    fn prop_coerce_is_deterministic(lexeme in "\\PC{0,30}") {
        prop_assert_eq!(coerce(&lexeme), coerce(&lexeme));
    }

    #[test]
    fn prop_integers_coerce_exactly(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string()), Value::Integer(n));
    }

    #[test]
    fn prop_keywords_ignore_case(mask in prop::collection::vec(any::<bool>(), 5)) {
        let word: String = "false"
            .chars()
            .zip(mask)
            .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert_eq!(coerce(&word), Value::Boolean(false));
    }

    #[test]
    fn prop_depth_is_preserved(depth in 1usize..200) {
        let mut text = String::new();
        for level in 0..depth {
            text.push_str(&format!("k{} {{\n", level));
        }
        text.push_str("v: 1\n");
        text.push_str(&"}\n".repeat(depth));
        prop_assert_eq!(parse(&text).depth(), depth);
    }

    #[test]
    fn prop_json_reads_back(lines in prop::collection::vec(line(), 0..30)) {
        let doc = parse(&lines.join("\n"));
        let back: Document = serde_json::from_str(&to_string(&doc)).unwrap();
        prop_assert_eq!(back, doc);
    }
}
