#![no_main]
use libfuzzer_sys::fuzz_target;

use scoped_json::{parse_json, tokenize, ParseError};

fuzz_target!(|data: &[u8]| {
    // Only valid UTF-8 can reach the parser.
    if let Ok(s) = std::str::from_utf8(data) {
        // Looking for panics; any Ok or Err is fine.
        let result = parse_json(s);

        // A lexical failure from the pipeline must also be one on its own.
        if let Err(ParseError::Lex { .. }) = result {
            assert!(tokenize(s).is_err());
        }
    }
});
