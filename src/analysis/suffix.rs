//! A suffix-tree-like structure over one line, used for repeated-substring
//! queries.
//!
//! Every suffix of the line is inserted into a tree whose edges are single
//! symbols. A node keeps "leaves": suffix remainders that have not branched
//! yet. When a new suffix shares its first symbol with a leaf, the leaf is
//! split into an internal node holding both remainders, so suffixes sharing
//! a prefix naturally group together. Internal nodes therefore correspond to
//! repeated substrings.
//!
//! Nodes live in an arena and refer to each other by index, which keeps the
//! splitting algorithm free of ownership cycles. Built once per line;
//! O(n²) insertion is fine at puzzle sizes.

use crate::board::Symbol;

type NodeId = usize;

#[derive(Debug, Default)]
struct Node {
    /// Edge symbol leading into this node; `None` only for the root.
    value: Option<Symbol>,
    children: Vec<NodeId>,
    /// Suffix remainders that have not branched yet. Never empty strings.
    leaves: Vec<Vec<Symbol>>,
}

#[derive(Debug)]
pub struct SuffixTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SuffixTree {
    pub fn build(line: &[Symbol]) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
            root: 0,
        };
        for start in 0..line.len() {
            tree.add_suffix(tree.root, &line[start..]);
        }
        tree
    }

    fn alloc(&mut self, value: Symbol) -> NodeId {
        self.nodes.push(Node {
            value: Some(value),
            ..Node::default()
        });
        self.nodes.len() - 1
    }

    fn add_suffix(&mut self, node: NodeId, suffix: &[Symbol]) {
        let Some((&first, rest)) = suffix.split_first() else {
            return;
        };

        // An existing child edge matching the first symbol absorbs the rest.
        let matching_child = self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].value == Some(first));
        if let Some(child) = matching_child {
            self.add_suffix(child, rest);
            return;
        }

        // A leaf sharing the first symbol splits into an internal node
        // holding both remainders.
        let matching_leaf = self.nodes[node]
            .leaves
            .iter()
            .position(|leaf| leaf[0] == first);
        if let Some(i) = matching_leaf {
            let leaf = self.nodes[node].leaves.remove(i);
            let split = self.alloc(first);
            self.add_suffix(split, rest);
            self.add_suffix(split, &leaf[1..]);
            self.nodes[node].children.push(split);
        } else {
            self.nodes[node].leaves.push(suffix.to_vec());
        }
    }

    /// The longest string of edge symbols down to the deepest internal node.
    /// Internal nodes are shared prefixes, i.e. repeats. Ties keep the first
    /// production encountered.
    pub fn longest_repeated_substring(&self) -> Vec<Symbol> {
        self.longest_from(self.root)
    }

    fn longest_from(&self, node: NodeId) -> Vec<Symbol> {
        let mut best: Vec<Symbol> = Vec::new();
        for &child in &self.nodes[node].children {
            let candidate = self.longest_from(child);
            if candidate.len() > best.len() {
                best = candidate;
            }
        }
        let mut result: Vec<Symbol> = self.nodes[node].value.into_iter().collect();
        result.extend(best);
        result
    }

    /// All repeated sub-suffixes, in descent production order: each internal
    /// node contributes its edge symbol prefixed onto every production of its
    /// children, or the edge symbol alone when no child produces anything.
    ///
    /// Callers wanting the full repeated-substring set must still expand each
    /// production to all of its prefixes (if `ANA` repeats, so do `AN` and
    /// `A`); see [`crate::analysis::repeated_substrings`].
    pub fn repeated_sub_suffixes(&self) -> Vec<Vec<Symbol>> {
        self.sub_suffixes_from(self.root)
    }

    fn sub_suffixes_from(&self, node: NodeId) -> Vec<Vec<Symbol>> {
        let substrings: Vec<Vec<Symbol>> = self.nodes[node]
            .children
            .iter()
            .flat_map(|&child| self.sub_suffixes_from(child))
            .collect();

        match self.nodes[node].value {
            Some(value) if !substrings.is_empty() => substrings
                .into_iter()
                .map(|s| {
                    let mut prefixed = vec![value];
                    prefixed.extend(s);
                    prefixed
                })
                .collect(),
            Some(value) => vec![vec![value]],
            None => substrings,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn chars(s: &str) -> Vec<Symbol> {
        s.chars().collect()
    }

    fn strings(productions: Vec<Vec<Symbol>>) -> Vec<String> {
        productions.into_iter().map(String::from_iter).collect()
    }

    #[test]
    fn finds_the_longest_repeated_substring() {
        let banana = SuffixTree::build(&chars("BANANA"));
        assert_eq!(String::from_iter(banana.longest_repeated_substring()), "ANA");

        let mississippi = SuffixTree::build(&chars("MISSISSIPPI"));
        assert_eq!(
            String::from_iter(mississippi.longest_repeated_substring()),
            "ISSI"
        );
    }

    #[test]
    fn produces_repeated_sub_suffixes_in_descent_order() {
        let banana = SuffixTree::build(&chars("BANANA"));
        assert_eq!(strings(banana.repeated_sub_suffixes()), vec!["ANA", "NA"]);

        let mississippi = SuffixTree::build(&chars("MISSISSIPPI"));
        assert_eq!(
            strings(mississippi.repeated_sub_suffixes()),
            vec!["SSI", "SI", "ISSI", "P"]
        );
    }

    #[test]
    fn a_line_without_repeats_produces_nothing() {
        let tree = SuffixTree::build(&chars("ABC"));
        assert_eq!(tree.longest_repeated_substring(), Vec::<Symbol>::new());
        assert!(tree.repeated_sub_suffixes().is_empty());
    }

    #[test]
    fn single_symbol_lines_are_handled() {
        let tree = SuffixTree::build(&chars("A"));
        assert!(tree.repeated_sub_suffixes().is_empty());

        let doubled = SuffixTree::build(&chars("AA"));
        assert_eq!(strings(doubled.repeated_sub_suffixes()), vec!["A"]);
    }
}
