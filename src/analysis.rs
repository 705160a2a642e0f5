//! Pure, stateless structural analysis of a line of symbols.
//!
//! Everything here is a plain function over `&[Symbol]`: no state, no
//! randomness. The constraint generator derives its line characteristics
//! from these, and the solver's deduction rules reuse the adjacency helper.

pub mod suffix;

use crate::board::Symbol;
use suffix::SuffixTree;

/// Which neighbour of an anchor occurrence to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Next,
    Previous,
}

/// The distinct symbols of a line, in first-seen order.
pub fn unique_symbols(line: &[Symbol]) -> Vec<Symbol> {
    let mut seen = Vec::new();
    for &s in line {
        if !seen.contains(&s) {
            seen.push(s);
        }
    }
    seen
}

/// The line with consecutive duplicates collapsed: `AABBA` → `A,B,A`.
pub fn symbols_in_order(line: &[Symbol]) -> Vec<Symbol> {
    let mut runs: Vec<Symbol> = Vec::new();
    for &s in line {
        if runs.last() != Some(&s) {
            runs.push(s);
        }
    }
    runs
}

/// The distinct symbols immediately following (or preceding) every occurrence
/// of `anchor`, in occurrence order. Occurrences at the line boundary are
/// skipped, so an anchor that never occurs or only occurs at the boundary
/// yields an empty set.
pub fn adjacent_symbols(anchor: Symbol, line: &[Symbol], direction: Direction) -> Vec<Symbol> {
    let neighbours = line
        .iter()
        .enumerate()
        .filter(|&(_, &s)| s == anchor)
        .filter_map(|(i, _)| match direction {
            Direction::Next => line.get(i + 1),
            Direction::Previous => i.checked_sub(1).and_then(|j| line.get(j)),
        })
        .copied()
        .collect::<Vec<_>>();
    unique_symbols(&neighbours)
}

/// The longest contiguous palindromic substring, found by expanding around
/// every centre. Ties keep the leftmost starting position.
pub fn longest_palindrome(line: &[Symbol]) -> Vec<Symbol> {
    let mut best_len = 0usize;
    let mut best_range = 0..0;

    for i in 0..line.len() {
        let centre = i as isize;
        for (left, right) in [(centre, centre + 1), (centre, centre)] {
            let (len, range) = expand_around(line, left, right);
            if len > best_len {
                best_len = len;
                best_range = range;
            }
        }

        // No longer palindrome fits in the remaining tail.
        if (line.len() - i) * 2 < best_len {
            break;
        }
    }

    line[best_range].to_vec()
}

/// Expands outwards from a (possibly two-cell) centre while the ends match,
/// returning the palindrome length and its range.
fn expand_around(
    line: &[Symbol],
    mut left: isize,
    mut right: isize,
) -> (usize, std::ops::Range<usize>) {
    while left >= 0 && (right as usize) < line.len() && line[left as usize] == line[right as usize]
    {
        left -= 1;
        right += 1;
    }
    // `left` and `right` overshot by one on each side.
    let len = (right - left - 1).max(0) as usize;
    (len, (left + 1) as usize..right as usize)
}

/// Shannon entropy over symbol frequencies: `-Σ (f/len)·log2(f/len)`.
/// A single-symbol line has entropy 0.
pub fn shannon_entropy(line: &[Symbol]) -> f64 {
    if line.is_empty() {
        return 0.0;
    }
    let len = line.len() as f64;
    unique_symbols(line)
        .iter()
        .map(|&s| line.iter().filter(|&&c| c == s).count() as f64)
        .map(|f| -(f / len) * (f / len).log2())
        .sum()
}

/// Start indices of all non-overlapping occurrences of `needle`, scanning
/// left to right and skipping past each match.
pub fn substring_positions(needle: &[Symbol], line: &[Symbol]) -> Vec<usize> {
    let mut positions = Vec::new();
    if needle.is_empty() {
        return positions;
    }
    let mut i = 0;
    while i + needle.len() <= line.len() {
        if &line[i..i + needle.len()] == needle {
            positions.push(i);
            i += needle.len();
        } else {
            i += 1;
        }
    }
    positions
}

/// Number of non-overlapping occurrences of `needle`.
pub fn occurrence_count(needle: &[Symbol], line: &[Symbol]) -> usize {
    substring_positions(needle, line).len()
}

/// All prefixes of a string, shortest first, including the string itself.
pub fn prefixes(value: &[Symbol]) -> Vec<Vec<Symbol>> {
    (1..=value.len()).map(|end| value[..end].to_vec()).collect()
}

/// All substrings occurring more than once, longest first. Occurrences of one
/// substring may overlap each other here.
///
/// Derived from the suffix structure's productions, expanded to every prefix
/// (a repeat implies all of its prefixes repeat), deduplicated, then sorted
/// by descending length. The relative order of equal-length entries is a
/// deterministic artifact of the production order; downstream code only
/// relies on set membership and the first (longest) element.
pub fn repeated_substrings(line: &[Symbol]) -> Vec<Vec<Symbol>> {
    let mut expanded: Vec<Vec<Symbol>> = Vec::new();
    for production in SuffixTree::build(line).repeated_sub_suffixes() {
        for prefix in prefixes(&production) {
            if !expanded.contains(&prefix) {
                expanded.push(prefix);
            }
        }
    }
    expanded.sort_by_key(|s| s.len());
    expanded.reverse();
    expanded
}

/// All substrings with at least two non-overlapping occurrences, longest
/// first. This is the repeat notion the constraint generator works with.
pub fn repeated_substrings_without_overlap(line: &[Symbol]) -> Vec<Vec<Symbol>> {
    repeated_substrings(line)
        .into_iter()
        .filter(|s| occurrence_count(s, line) > 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(s: &str) -> Vec<Symbol> {
        s.chars().collect()
    }

    fn strings(list: Vec<Vec<Symbol>>) -> Vec<String> {
        list.into_iter().map(String::from_iter).collect()
    }

    #[test]
    fn unique_symbols_keeps_first_seen_order() {
        assert_eq!(unique_symbols(&chars("MISSISSIPPI")), chars("MISP"));
        assert_eq!(unique_symbols(&[]), Vec::<Symbol>::new());
    }

    #[test]
    fn symbols_in_order_collapses_consecutive_duplicates() {
        assert_eq!(symbols_in_order(&chars("AABBA")), chars("ABA"));
        assert_eq!(symbols_in_order(&chars("MISSISSIPPI")), chars("MISISIPI"));
    }

    #[test]
    fn adjacent_symbols_follow_every_anchor_occurrence() {
        let line = chars("MISSISSIPPI");
        assert_eq!(adjacent_symbols('M', &line, Direction::Next), chars("I"));
        assert_eq!(adjacent_symbols('M', &line, Direction::Previous), chars(""));
        assert_eq!(adjacent_symbols('I', &line, Direction::Next), chars("SP"));
        assert_eq!(adjacent_symbols('I', &line, Direction::Previous), chars("MSP"));
        assert_eq!(adjacent_symbols('S', &line, Direction::Next), chars("SI"));
        assert_eq!(adjacent_symbols('S', &line, Direction::Previous), chars("IS"));
        assert_eq!(adjacent_symbols('P', &line, Direction::Next), chars("PI"));
        assert_eq!(adjacent_symbols('P', &line, Direction::Previous), chars("IP"));
    }

    #[test]
    fn adjacent_symbols_of_an_absent_anchor_are_empty() {
        assert_eq!(adjacent_symbols('X', &chars("ABC"), Direction::Next), chars(""));
    }

    #[test]
    fn finds_the_longest_palindrome() {
        assert_eq!(String::from_iter(longest_palindrome(&chars("BANANA"))), "ANANA");
        assert_eq!(
            String::from_iter(longest_palindrome(&chars("MISSISSIPPI"))),
            "ISSISSI"
        );
        assert_eq!(String::from_iter(longest_palindrome(&chars("A"))), "A");
        assert_eq!(longest_palindrome(&[]), Vec::<Symbol>::new());
    }

    #[test]
    fn entropy_is_zero_for_a_single_symbol_line() {
        assert_eq!(shannon_entropy(&chars("AAAA")), 0.0);
        assert_eq!(shannon_entropy(&[]), 0.0);
    }

    #[test]
    fn entropy_of_a_uniform_two_symbol_line_is_one_bit() {
        assert!((shannon_entropy(&chars("ABAB")) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn substring_positions_skip_overlapping_occurrences() {
        assert_eq!(substring_positions(&chars("AN"), &chars("BANANA")), vec![1, 3]);
        assert_eq!(
            substring_positions(&chars("SSI"), &chars("MISSISSIPPI")),
            vec![2, 5]
        );
        // ISSI occurs twice, but only with overlap.
        assert_eq!(
            substring_positions(&chars("ISSI"), &chars("MISSISSIPPI")),
            vec![1]
        );
    }

    #[test]
    fn provides_all_prefixes() {
        assert_eq!(
            strings(prefixes(&chars("QUUX"))),
            vec!["Q", "QU", "QUU", "QUUX"]
        );
    }

    #[test]
    fn finds_all_repeated_substrings() {
        assert_eq!(
            strings(repeated_substrings(&chars("BANANA"))),
            vec!["ANA", "NA", "AN", "N", "A"]
        );
        assert_eq!(
            strings(repeated_substrings(&chars("MISSISSIPPI"))),
            vec!["ISSI", "ISS", "SSI", "IS", "SI", "SS", "P", "I", "S"]
        );
    }

    #[test]
    fn repeated_substrings_without_overlap_drop_self_overlapping_repeats() {
        assert_eq!(
            strings(repeated_substrings_without_overlap(&chars("BANANA"))),
            vec!["NA", "AN", "N", "A"]
        );
        // ISSI only repeats with overlap and is filtered out.
        assert_eq!(
            strings(repeated_substrings_without_overlap(&chars("MISSISSIPPI"))),
            vec!["ISS", "SSI", "IS", "SI", "SS", "P", "I", "S"]
        );
    }
}
