//! A binary executable that demonstrates how to use the `scoped-json` library.
//!
//! This is not part of the library itself. Set `RUST_LOG=scoped_json=trace`
//! to watch each pipeline stage and every parser transition.
//!
//! You can run this example with: `cargo run`

use scoped_json::{parse_json, parse_json_with, tokenize, ParserOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let input = r#"
    {
        "user_id": 1815,
        "username": "babbage",
        "active": true,
        "nested": { "values": [1.5, null, -325.45e6] }
    }
    "#;

    println!("--- Tokens ---");
    match tokenize(input) {
        Ok(tokens) => {
            for token in tokens {
                println!("{:<12} {:?}", token.text, token.kind);
            }
        }
        Err(e) => println!("{}", e),
    }

    println!("\n--- Parsed Value ---");
    match parse_json(input) {
        Ok(value) => {
            println!("{:#?}", value);
            println!("nested.values[2] = {:?}", value["nested"]["values"][2].as_f64());
        }
        Err(e) => println!("Parse Error: {}", e),
    }

    println!("\n--- Rejected Inputs ---");
    let shallow = ParserOptions::new().with_max_depth(2);
    for (bad, options) in [
        ("[1, 2,]", ParserOptions::default()),
        (r#"{"a": 1, "a": 2}"#, ParserOptions::default()),
        ("[1, @]", ParserOptions::default()),
        ("[[[]]]", shallow),
    ] {
        match parse_json_with(bad, &options) {
            Ok(value) => println!("{:<20} unexpectedly parsed: {:?}", bad, value),
            Err(e) => println!("{:<20} {}", bad, e),
        }
    }
}
