use lightconf::{
    coerce, convert, from_str, lightconf, parse, parse_with_options, to_string, to_string_pretty,
    Document, DuplicateKeys, Error, ParseOptions, Value,
};
use serde::Deserialize;

const MAP_SOURCE: &str = r#".map {
    items {
        item {
            value: "helloworld"
        };
    };
};
"#;

fn nested(depth: usize) -> String {
    let mut text = String::new();
    for level in 0..depth {
        text.push_str(&format!("level{} {{\n", level));
    }
    text.push_str("leaf: 1\n");
    for _ in 0..depth {
        text.push_str("}\n");
    }
    text
}

#[test]
fn test_map_example() {
    let doc = parse(MAP_SOURCE);
    let expected = lightconf!({
        ".map": { "items": { "item": { "value": "helloworld" } } }
    });
    assert_eq!(Value::from(doc), expected);
}

#[test]
fn test_json_round_trip() {
    let doc = parse(MAP_SOURCE);
    let json = to_string_pretty(&doc);
    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);

    let compact: Document = serde_json::from_str(&to_string(&doc)).unwrap();
    assert_eq!(compact, doc);
}

#[test]
fn test_json_round_trip_keeps_scalar_types() {
    let source = "rack {\n  size: 4\n  gain: 0.75\n  inverted: FALSE\n  mask: @x00FF\n  spare: null\n  name: \"Front Truss\"\n}";
    let doc = parse(source);
    let back: Document = serde_json::from_str(&convert(source)).unwrap();
    assert_eq!(back, doc);

    let rack = back.get("rack").and_then(Value::as_mapping).unwrap();
    assert_eq!(rack.get("size"), Some(&Value::Integer(4)));
    assert_eq!(rack.get("gain"), Some(&Value::Float(0.75)));
    assert_eq!(rack.get("inverted"), Some(&Value::Boolean(false)));
    assert_eq!(rack.get("mask"), Some(&Value::String("0x00FF".into())));
    assert_eq!(rack.get("spare"), Some(&Value::Null));
    assert_eq!(rack.get("name"), Some(&Value::String("Front Truss".into())));
}

#[test]
fn test_output_matches_serde_json() {
    let doc = parse("show { title: \"Première\"; cue: 1.5 }\nfade: 3");
    let ours = to_string_pretty(&doc);
    let theirs = serde_json::to_string_pretty(&doc).unwrap();
    let ours_tree: serde_json::Value = serde_json::from_str(&ours).unwrap();
    let theirs_tree: serde_json::Value = serde_json::from_str(&theirs).unwrap();
    assert_eq!(ours_tree, theirs_tree);
    assert_eq!(to_string(&doc), serde_json::to_string(&doc).unwrap());
    assert!(ours.contains("Première"));
}

#[test]
fn test_terminator_equivalence() {
    let closed_by_brace = parse("scene { a: 1\n b { c: x } }");
    let closed_by_semicolon = parse("scene { a: 1\n b { c: x } ;");
    assert_eq!(closed_by_brace, closed_by_semicolon);
}

#[test]
fn test_semicolon_closes_enclosing_block() {
    let doc = parse("outer { inner { a: 1 }; sibling: 2 }");
    assert_eq!(
        Value::from(doc),
        lightconf!({ "outer": { "inner": { "a": 1 } }, "sibling": 2 })
    );
}

#[test]
fn test_last_write_wins() {
    let doc = parse("speed: 1\nmode: a\nspeed: 2");
    let keys: Vec<&String> = doc.keys().collect();
    assert_eq!(keys, vec!["speed", "mode"]);
    assert_eq!(doc.get("speed"), Some(&Value::Integer(2)));

    let doc = parse("fx { rate: 1 }\nfx { depth: 3 }");
    assert_eq!(Value::from(doc), lightconf!({ "fx": { "depth": 3 } }));
}

#[test]
fn test_duplicate_keys_rejected_on_request() {
    let options = ParseOptions::new().with_duplicate_keys(DuplicateKeys::Reject);
    assert!(parse_with_options("a: 1\nb: 2", &options).is_ok());
    assert_eq!(
        parse_with_options("a: 1\na: 2", &options),
        Err(Error::duplicate_key(2, 1, "a"))
    );
}

#[test]
fn test_multi_word_keys() {
    let doc = parse("group dmx_out: 5\nfront   left\twash { on: true }");
    assert_eq!(doc.get("group.dmx_out"), Some(&Value::Integer(5)));
    assert_eq!(
        doc.get_path(&["front.left.wash", "on"]),
        Some(&Value::Boolean(true))
    );
}

#[test]
fn test_multi_word_values_are_joined() {
    let doc = parse("label: front wash\nquoted: \"front wash\"");
    assert_eq!(doc.get("label"), Some(&Value::String("front.wash".into())));
    assert_eq!(doc.get("quoted"), Some(&Value::String("front wash".into())));
}

#[test]
fn test_carriage_return_ends_a_line() {
    assert_eq!(Value::from(parse("a: 1\rb: 2")), lightconf!({ "a": 1, "b": 2 }));
    assert_eq!(
        Value::from(parse("rack {\r size: 4\r}\rgain: 0.5")),
        lightconf!({ "rack": { "size": 4 }, "gain": 0.5 })
    );
}

#[test]
fn test_quoted_keys_keep_quotes() {
    let doc = parse("\"my key\": 1");
    assert_eq!(doc.get("\"my key\""), Some(&Value::Integer(1)));
}

#[test]
fn test_hex_values_stay_strings() {
    assert_eq!(convert("color: @xFF00"), "{\n    \"color\": \"0xFF00\"\n}");
    assert_eq!(coerce("@x"), Value::String("0x".into()));
}

#[test]
fn test_comments_are_removed() {
    let with_comments = parse("## header\nrack { // trailing\n size: 4 ## four\n}");
    let without = parse("rack {\n size: 4\n}");
    assert_eq!(with_comments, without);
}

#[test]
fn test_numbers_outside_i64_stay_strings() {
    let doc = parse("big: 99999999999999999999\nsmall: -9223372036854775808");
    assert_eq!(
        doc.get("big"),
        Some(&Value::String("99999999999999999999".into()))
    );
    assert_eq!(doc.get("small"), Some(&Value::Integer(i64::MIN)));
}

#[test]
fn test_depth_hundreds() {
    for depth in [1, 50, 300] {
        let doc = parse(&nested(depth));
        assert_eq!(doc.depth(), depth);
    }
}

#[test]
fn test_depth_thousands_without_closers() {
    let depth = 1_000;
    let mut text = String::new();
    for level in 0..depth {
        text.push_str(&format!("k{} {{ ", level));
    }
    text.push_str("v: 1");
    let doc = parse(&text);
    assert_eq!(doc.depth(), depth);
}

#[test]
fn test_depth_one_hundred_thousand() {
    let depth = 100_000;
    let mut text = String::new();
    for level in 0..depth {
        text.push_str(&format!("k{} {{\n", level));
    }
    text.push_str("v: 1\n");
    text.push_str(&"}\n".repeat(depth));

    let doc = parse(&text);
    assert_eq!(doc.depth(), depth);

    let json = to_string(&doc);
    assert!(json.starts_with(r#"{"k0":{"k1":{"k2":{"#));
    assert!(json.ends_with(r#"{"v":1}}}}"#));
    assert!(json.contains(r#""k99999":{"v":1}"#));
    assert_eq!(json.matches('{').count(), depth + 1);
    assert_eq!(json.matches('}').count(), depth + 1);

    let copy = doc.clone();
    assert!(copy == doc);
    drop(copy);
    drop(doc);
}

#[test]
fn test_deep_single_line_document_drops() {
    let depth = 100_000;
    let mut text = (0..depth).map(|level| format!("k{} {{ ", level)).collect::<String>();
    text.push_str("v: 1");
    let doc = parse(&text);
    assert_eq!(doc.depth(), depth);
    drop(doc);
}

#[test]
fn test_depth_limit() {
    let options = ParseOptions::new().with_max_depth(10);
    assert!(parse_with_options(&nested(10), &options).is_ok());
    let err = parse_with_options(&nested(11), &options).unwrap_err();
    assert!(matches!(err, Error::DepthLimitExceeded { limit: 10, .. }));
}

#[test]
fn test_strict_accepts_well_formed_input() {
    let lenient = parse(MAP_SOURCE);
    let strict = parse_with_options(MAP_SOURCE, &ParseOptions::strict());
    // the `}` left over after the final `;` is reported at top level
    assert!(strict.is_err());

    let tidy = ".map {\n items {\n  item {\n   value: \"helloworld\"\n  }\n }\n}";
    assert_eq!(parse_with_options(tidy, &ParseOptions::strict()).unwrap(), lenient);
}

#[derive(Deserialize, Debug, PartialEq)]
struct Dimmer {
    address: u16,
    curve: String,
    mask: String,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Rack {
    universe: u8,
    label: String,
    dimmer: Dimmer,
}

#[test]
fn test_typed_rack() {
    #[derive(Deserialize)]
    struct Layout {
        #[serde(rename = "rack.front")]
        rack: Rack,
    }

    let source = r#"
## rack layout for the front truss
rack front {
    universe: 1
    label: "Front Truss"
    dimmer {
        address: 12
        curve: linear
        mask: @x00FF
    }
}
"#;
    let layout: Layout = from_str(source).unwrap();
    assert_eq!(
        layout.rack,
        Rack {
            universe: 1,
            label: "Front Truss".into(),
            dimmer: Dimmer {
                address: 12,
                curve: "linear".into(),
                mask: "0x00FF".into(),
            },
        }
    );
}

#[test]
fn test_typed_mismatch_reports_error() {
    let result = from_str::<Dimmer>("address: twelve\ncurve: linear\nmask: @x1");
    assert!(result.is_err());
}

#[test]
fn test_parse_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || parse(&format!("worker {{ id: {} }}", i))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let doc = handle.join().unwrap();
        assert_eq!(
            doc.get_path(&["worker", "id"]),
            Some(&Value::Integer(i as i64))
        );
    }
}
