use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Characters the scanners treat specially, plus a few multi-byte glyphs.
const ALPHABET: &[char] = &[
    'a', 'b', ' ', '{', '}', '/', '*', '"', '\'', '`', '\\', '“', '”', '»', 'é', '→',
];

fn gen_text(g: &mut Gen, max_len: usize) -> String {
    let len = usize::arbitrary(g) % (max_len + 1);
    (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
}

/// Source text dense in quotes, escapes and braces.
#[derive(Debug, Clone)]
pub(crate) struct ScanText(pub String);

impl Arbitrary for ScanText {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(gen_text(g, 24))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}

/// A short, non-empty separator drawn from the same alphabet.
#[derive(Debug, Clone)]
pub(crate) struct Sep(pub String);

impl Arbitrary for Sep {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut sep = gen_text(g, 2);
        if sep.is_empty() {
            sep.push(*g.choose(ALPHABET).unwrap());
        }
        Self(sep)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() < 2 {
            return quickcheck::empty_shrinker();
        }
        // drop one character at a time
        let shrunk: Vec<Self> = (0..chars.len())
            .map(|skip| {
                let sep = chars
                    .iter()
                    .enumerate()
                    .filter_map(|(i, c)| (i != skip).then_some(*c))
                    .collect();
                Self(sep)
            })
            .collect();
        Box::new(shrunk.into_iter())
    }
}

/// Scales test counts like the other property suites.
pub(crate) fn test_count() -> u64 {
    #[cfg(not(miri))]
    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    #[cfg(miri)]
    let tests = 10;
    tests
}
