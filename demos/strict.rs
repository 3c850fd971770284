//! Lenient versus strict parsing of malformed input.
//!
//! Run with: cargo run --example strict

use lightconf::{parse, parse_with_options, DuplicateKeys, ParseOptions};

fn main() {
    let inputs = [
        "rack {\n  size: 4\n  label\n}",
        "rack {\n  size: 4\n",
        "speed:",
        "fade: 1\nfade: 2",
        "scene { { cue: 1 } }",
    ];

    let strict = ParseOptions::strict().with_duplicate_keys(DuplicateKeys::Reject);

    for input in inputs {
        println!("input:\n{}\n", input);
        println!("  lenient: {}", lightconf::to_string(&parse(input)));
        match parse_with_options(input, &strict) {
            Ok(doc) => println!("  strict:  {}", lightconf::to_string(&doc)),
            Err(err) => println!("  strict:  error: {}", err),
        }
        println!();
    }
}
