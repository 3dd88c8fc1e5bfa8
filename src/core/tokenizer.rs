use crate::core::prefix::Prefix;
use std::collections::HashMap;

/// Raw values of one command line, grouped by the prefix that introduced them.
///
/// Values keep the order they were typed in. A prefix that never appeared
/// has no entry at all, which is different from a prefix followed by nothing
/// (an entry holding an empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    values: HashMap<Prefix, Vec<String>>,
    preamble: String,
}

impl ArgumentMultimap {
    fn put(&mut self, prefix: Prefix, value: String) {
        self.values.entry(prefix).or_default().push(value);
    }

    /// First value supplied for `prefix`, if the prefix appeared at all.
    pub fn value(&self, prefix: &Prefix) -> Option<&str> {
        self.values
            .get(prefix)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value supplied for `prefix`, empty when it never appeared.
    pub fn all_values(&self, prefix: &Prefix) -> &[String] {
        self.values.get(prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_present(&self, prefix: &Prefix) -> bool {
        self.values.contains_key(prefix)
    }

    /// First prefix of `required` (in the given order) that never appeared.
    pub fn first_missing(&self, required: &[Prefix]) -> Option<Prefix> {
        required.iter().copied().find(|p| !self.is_present(p))
    }

    pub fn preamble(&self) -> &str {
        &self.preamble
    }
}

#[derive(Debug, Clone, Copy)]
struct PrefixPosition {
    prefix: Prefix,
    start: usize,
}

/// Splits `args` into the values introduced by each of `prefixes`.
///
/// A marker only counts when it starts the input or follows whitespace, so
/// `e/` inside `alice@e/x` stays part of the surrounding value. Each value
/// runs up to the next recognized marker and is trimmed; text before the
/// first marker becomes the preamble.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let positions = find_all_prefix_positions(args, prefixes);

    let mut multimap = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |p| p.start);
    multimap.preamble = args[..preamble_end].trim().to_string();

    for (i, position) in positions.iter().enumerate() {
        let value_start = position.start + position.prefix.marker().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |next| next.start);
        multimap.put(position.prefix, args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn find_all_prefix_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
    let mut positions: Vec<PrefixPosition> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.marker())
                .filter(|(start, _)| is_token_boundary(args, *start))
                .map(move |(start, _)| PrefixPosition {
                    prefix: *prefix,
                    start,
                })
        })
        .collect();

    // 同一位置若有多個標記符合，保留最長者
    positions.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.prefix.marker().len().cmp(&a.prefix.marker().len()))
    });
    positions.dedup_by_key(|p| p.start);
    positions
}

fn is_token_boundary(args: &str, start: usize) -> bool {
    args[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
}
