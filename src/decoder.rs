//! Reverses the substitutions recorded in a lookup table.

use crate::pair::BytePair;
use crate::table::LookupTable;

/// Expand every occurrence of `symbol` back into the pair it replaced;
/// all other bytes pass through verbatim.
pub fn expand_symbol(data: &[u8], symbol: u8, pair: BytePair) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);

    for &b in data {
        if b == symbol {
            out.extend_from_slice(&pair.bytes());
        } else {
            out.push(b);
        }
    }

    out
}

/// Undo the table one rule at a time until it is empty, starting with
/// the rule recorded last. The returned buffer is the original input
/// the table was built from.
pub fn decode(mut table: LookupTable, mut data: Vec<u8>) -> Vec<u8> {
    while let Some(lookup) = table.pop() {
        data = expand_symbol(&data, lookup.symbol, lookup.pair);
    }

    data
}
