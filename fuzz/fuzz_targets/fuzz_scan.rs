#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quotescan::{CarveOptions, Search, carve_with, scan, scan_quote, trim_quotes};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    src: &'a str,
    start: &'a str,
    end: &'a str,
    start_aware: bool,
    end_aware: bool,
}

fn search(aware: bool) -> Search {
    if aware {
        Search::QuoteAware
    } else {
        Search::Literal
    }
}

fn check(input: &Input<'_>) {
    let split = scan(input.src, input.start);
    if split.found {
        assert_eq!(
            [split.before, input.start, split.after].concat(),
            input.src,
            "scan lost text"
        );
    } else {
        assert_eq!(split.before, input.src);
        assert!(split.after.is_empty());
    }

    let options = CarveOptions {
        start: search(input.start_aware),
        end: search(input.end_aware),
    };
    let c = carve_with(input.src, input.start, input.end, options);
    if c.found {
        assert_eq!(
            [c.before, input.start, c.middle, input.end, c.after].concat(),
            input.src,
            "carve lost text"
        );
    } else {
        assert_eq!(c.before, input.src);
    }

    let span = scan_quote(input.src);
    if span.found {
        assert!(!span.before.contains('\\'));
        assert!(input.src.ends_with(span.after));
    } else {
        assert_eq!(span.before, input.src);
    }

    // must not panic on any bookends
    let _ = trim_quotes(input.src);
}

fuzz_target!(|input: Input<'_>| check(&input));
