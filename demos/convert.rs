//! Converting a configuration file to JSON.
//!
//! Run with: cargo run --example convert -- path/to/show.map
//!
//! Without a path, a built-in rack layout is converted.

use std::error::Error;
use std::fs::File;

const SAMPLE: &str = r#"
## rack layout for the front truss
rack front {
    universe: 1
    label: "Front Truss"
    dimmer {
        address: 12
        curve: linear
        mask: @x00FF
    };
};
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let json = match std::env::args().nth(1) {
        Some(path) => {
            let doc: lightconf::Document = lightconf::from_reader(File::open(&path)?)?;
            eprintln!("{}: {} top-level entries", path, doc.len());
            lightconf::to_string_pretty(&doc)
        }
        None => lightconf::convert(SAMPLE),
    };

    println!("{}", json);
    Ok(())
}
