//! Reading a configuration file into your own types.
//!
//! Run with: cargo run --example typed

use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Curve {
    Linear,
    Square,
    Switch,
}

#[derive(Debug, Deserialize)]
struct Dimmer {
    address: u16,
    curve: Curve,
    gain: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Rack {
    universe: u8,
    label: String,
    #[serde(rename = "dimmer.a")]
    first: Dimmer,
    #[serde(rename = "dimmer.b")]
    second: Dimmer,
}

fn main() -> Result<(), Box<dyn Error>> {
    let source = r#"
universe: 2
label: "Stage Left"
dimmer a { address: 1; curve: linear; gain: 0.9 }
dimmer b { address: 2; curve: SWITCH; gain: null }
"#;

    // `SWITCH` is a plain string; variant names are matched exactly
    match lightconf::from_str::<Rack>(source) {
        Ok(rack) => println!("{:#?}", rack),
        Err(err) => println!("rejected: {}", err),
    }

    let rack: Rack = lightconf::from_str(&source.replace("SWITCH", "switch"))?;
    println!("{:#?}", rack);

    // untyped access works on the same text
    let doc = lightconf::parse(source);
    if let Some(address) = doc.get_path(&["dimmer.b", "address"]).and_then(|v| v.as_i64()) {
        println!("dimmer b address: {}", address);
    }

    Ok(())
}
