// --- File: src/core/trie.rs
use crate::core::types::{Candidate, Confidence};
use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// Child map of a node, keyed by the next normalized character.
/// Ordered so traversals are deterministic.
pub type Branches = BTreeMap<char, MemoryNode>;

/// One character position in the memory. `confidence` counts how many times
/// the word spelled by the path from the forest root down to this node was
/// trained; zero means the node is only a prefix of longer words.
///
/// Paths are as deep as the longest trained word, so every walk over nodes
/// (clone, comparison, drop, collection) keeps its own stack on the heap.
#[derive(Default)]
pub struct MemoryNode {
    children: Branches,
    confidence: Confidence,
}

impl MemoryNode {
    pub fn new(children: Branches, confidence: Confidence) -> Self {
        Self { children, confidence }
    }

    pub fn children(&self) -> &Branches {
        &self.children
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Drop for MemoryNode {
    fn drop(&mut self) {
        let mut pending: Vec<MemoryNode> =
            std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Clone for MemoryNode {
    fn clone(&self) -> Self {
        struct Frame<'a> {
            key: char,
            confidence: Confidence,
            pending: btree_map::Iter<'a, char, MemoryNode>,
            built: Branches,
        }

        let mut stack = vec![Frame {
            key: '\0',
            confidence: self.confidence,
            pending: self.children.iter(),
            built: Branches::new(),
        }];

        while let Some(frame) = stack.last_mut() {
            if let Some((&key, child)) = frame.pending.next() {
                stack.push(Frame {
                    key,
                    confidence: child.confidence,
                    pending: child.children.iter(),
                    built: Branches::new(),
                });
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let node = MemoryNode::new(done.built, done.confidence);
            match stack.last_mut() {
                Some(parent) => {
                    parent.built.insert(done.key, node);
                }
                None => return node,
            }
        }
        MemoryNode::default()
    }
}

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.confidence != b.confidence || a.children.len() != b.children.len() {
                return false;
            }
            for ((ka, ca), (kb, cb)) in a.children.iter().zip(&b.children) {
                if ka != kb {
                    return false;
                }
                pending.push((ca, cb));
            }
        }
        true
    }
}

impl Eq for MemoryNode {}

// Shallow on purpose: one level of keys is enough to read a failing assertion.
impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryNode")
            .field("confidence", &self.confidence)
            .field("children", &self.children.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The learned prefix forest: one tree per first letter, no sentinel root.
/// Grows monotonically; nothing is ever removed or decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Memory {
    roots: Branches,
}

impl Memory {
    pub fn new() -> Self {
        Self { roots: Branches::new() }
    }

    /// Wraps an existing forest, mostly useful for building fixtures.
    pub fn from_roots(roots: Branches) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &Branches {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Records one occurrence of `word`, creating any missing nodes along its
    /// path. Returns true when this is the first time the word was seen.
    /// O(k) complexity where k is word length.
    pub fn memorize(&mut self, word: &str) -> bool {
        debug_assert!(!word.is_empty(), "memorize called with an empty word");

        let mut chars = word.chars();
        let Some(first) = chars.next() else {
            return false;
        };

        let mut node = self.roots.entry(first).or_default();
        for ch in chars {
            node = node.children.entry(ch).or_default();
        }
        node.confidence += 1;
        node.confidence == 1
    }

    /// Follows `fragment` exactly and returns the node under its last character.
    /// `None` as soon as any character along the path is missing.
    pub fn get_bottom_node(&self, fragment: &str) -> Option<&MemoryNode> {
        get_bottom_node(fragment, &self.roots)
    }

    /// Number of distinct trained words.
    pub fn word_count(&self) -> usize {
        self.nodes().filter(|node| node.confidence > 0).count()
    }

    /// Total number of tokens memorized, duplicates included.
    pub fn total_confidence(&self) -> Confidence {
        self.nodes().map(|node| node.confidence).sum()
    }

    /// Number of nodes in the forest.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn nodes(&self) -> Nodes<'_> {
        Nodes { pending: self.roots.values().collect() }
    }
}

/// Every node of a forest, in no particular order.
struct Nodes<'a> {
    pending: Vec<&'a MemoryNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a MemoryNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.pending.extend(node.children.values());
        Some(node)
    }
}

/// Exact descent over an arbitrary child map.
pub fn get_bottom_node<'a>(fragment: &str, branches: &'a Branches) -> Option<&'a MemoryNode> {
    let mut chars = fragment.chars();
    let mut node = branches.get(&chars.next()?)?;
    for ch in chars {
        node = node.children.get(&ch)?;
    }
    Some(node)
}

/// Every completed word reachable through `children`, each spelled as
/// `prefix` followed by the path taken. Only nodes with a positive
/// confidence produce a candidate, but the walk always continues below them.
/// The output is unordered; callers sort it.
pub fn get_candidates(prefix: &str, children: &Branches) -> Vec<Candidate> {
    let mut out = Vec::new();
    let mut buf = prefix.to_string();

    // Each entry remembers how long `buf` was at its parent.
    let mut stack: Vec<(usize, char, &MemoryNode)> =
        children.iter().rev().map(|(&ch, node)| (buf.len(), ch, node)).collect();

    while let Some((parent_len, ch, node)) = stack.pop() {
        buf.truncate(parent_len);
        buf.push(ch);
        if node.confidence > 0 {
            out.push(Candidate::new(buf.clone(), node.confidence));
        }
        let len = buf.len();
        stack.extend(node.children.iter().rev().map(|(&ch, child)| (len, ch, child)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(children: Vec<(char, MemoryNode)>, confidence: Confidence) -> MemoryNode {
        MemoryNode::new(children.into_iter().collect(), confidence)
    }

    // Memory of the single word "abc".
    fn abc_memory() -> Memory {
        Memory::from_roots(
            [('a', node(vec![('b', node(vec![('c', node(vec![], 1))], 0))], 0))]
                .into_iter()
                .collect(),
        )
    }

    #[test]
    fn memorize_into_empty_memory() {
        let mut memory = Memory::new();
        assert!(memory.memorize("abc"));
        assert_eq!(memory, abc_memory());
    }

    #[test]
    fn memorize_shares_common_prefix() {
        let mut memory = abc_memory();
        memory.memorize("adc");

        let expected = Memory::from_roots(
            [(
                'a',
                node(
                    vec![
                        ('b', node(vec![('c', node(vec![], 1))], 0)),
                        ('d', node(vec![('c', node(vec![], 1))], 0)),
                    ],
                    0,
                ),
            )]
            .into_iter()
            .collect(),
        );
        assert_eq!(memory, expected);
    }

    #[test]
    fn memorize_same_word_increments() {
        let mut memory = abc_memory();
        assert!(!memory.memorize("abc"));

        let expected = Memory::from_roots(
            [('a', node(vec![('b', node(vec![('c', node(vec![], 2))], 0))], 0))]
                .into_iter()
                .collect(),
        );
        assert_eq!(memory, expected);
    }

    #[test]
    fn memorize_prefix_of_existing_word() {
        let mut memory = abc_memory();
        assert!(memory.memorize("ab"));

        let expected = Memory::from_roots(
            [('a', node(vec![('b', node(vec![('c', node(vec![], 1))], 1))], 0))]
                .into_iter()
                .collect(),
        );
        assert_eq!(memory, expected);
    }

    #[test]
    fn memorize_leaves_sibling_roots_alone() {
        let mut memory = abc_memory();
        memory.memorize("xy");
        assert_eq!(memory.get_bottom_node("abc"), Some(&node(vec![], 1)));
        assert_eq!(memory.get_bottom_node("xy"), Some(&node(vec![], 1)));
        assert_eq!(memory.roots().len(), 2);
    }

    #[test]
    fn bottom_node_single_char() {
        let memory = abc_memory();
        let expected = node(vec![('b', node(vec![('c', node(vec![], 1))], 0))], 0);
        assert_eq!(memory.get_bottom_node("a"), Some(&expected));
    }

    #[test]
    fn bottom_node_at_leaf() {
        let memory = abc_memory();
        let bottom = memory.get_bottom_node("abc").unwrap();
        assert!(bottom.is_leaf());
        assert_eq!(bottom.confidence(), 1);
    }

    #[test]
    fn bottom_node_picks_correct_branch() {
        let roots: Branches = [(
            'a',
            node(
                vec![
                    ('b', node(vec![('c', node(vec![], 1))], 0)),
                    ('d', node(vec![('e', node(vec![], 2))], 0)),
                ],
                0,
            ),
        )]
        .into_iter()
        .collect();
        assert_eq!(get_bottom_node("ade", &roots), Some(&node(vec![], 2)));
    }

    #[test]
    fn bottom_node_missing_path() {
        let memory = abc_memory();
        assert_eq!(memory.get_bottom_node("def"), None);
        assert_eq!(memory.get_bottom_node("abd"), None);
        assert_eq!(memory.get_bottom_node("abcd"), None);
        assert_eq!(memory.get_bottom_node(""), None);
    }

    #[test]
    fn candidates_include_words_inside_longer_paths() {
        let mut memory = Memory::new();
        for word in ["thin", "thing", "thing", "think"] {
            memory.memorize(word);
        }
        let bottom = memory.get_bottom_node("thi").unwrap();
        let mut found = get_candidates("thi", bottom.children());
        found.sort_by(|a, b| a.word().cmp(&b.word()));
        assert_eq!(
            found,
            vec![
                Candidate::new("thin", 1),
                Candidate::new("thing", 2),
                Candidate::new("think", 1),
            ]
        );
    }

    #[test]
    fn candidates_skip_pure_prefixes() {
        let memory = abc_memory();
        let found = get_candidates("", memory.roots());
        assert_eq!(found, vec![Candidate::new("abc", 1)]);
    }

    #[test]
    fn counts_over_the_forest() {
        let mut memory = Memory::new();
        for word in ["the", "thing", "thing", "a"] {
            memory.memorize(word);
        }
        assert_eq!(memory.word_count(), 3);
        assert_eq!(memory.total_confidence(), 4);
        // t-h-e, i-n-g under "th", and a
        assert_eq!(memory.node_count(), 7);
        assert!(Memory::new().is_empty());
    }

    #[test]
    fn candidates_rebuild_multibyte_paths() {
        let mut memory = Memory::new();
        for word in ["café", "cafés", "caña", "cab"] {
            memory.memorize(word);
        }
        let mut found = get_candidates("", memory.roots());
        found.sort_by(|a, b| a.word().cmp(&b.word()));
        assert_eq!(
            found,
            vec![
                Candidate::new("cab", 1),
                Candidate::new("café", 1),
                Candidate::new("cafés", 1),
                Candidate::new("caña", 1),
            ]
        );
    }

    #[test]
    fn clone_is_equal_and_independent() {
        let mut memory = Memory::new();
        for word in ["the", "thing", "thing", "a"] {
            memory.memorize(word);
        }
        let mut copy = memory.clone();
        assert_eq!(copy, memory);

        copy.memorize("thing");
        assert_ne!(copy, memory);
        assert_eq!(memory.get_bottom_node("thing").map(|n| n.confidence()), Some(2));
    }

    #[test]
    fn very_long_word_survives_every_walk() {
        let word = "a".repeat(100_000);
        let mut memory = Memory::new();
        memory.memorize(&word);
        memory.memorize("ab");

        assert_eq!(memory.node_count(), 100_001);
        assert_eq!(memory.word_count(), 2);
        assert_eq!(memory.total_confidence(), 2);

        let found = get_candidates("", memory.roots());
        assert_eq!(found.len(), 2);
        assert!(found.contains(&Candidate::new(word.clone(), 1)));

        let copy = memory.clone();
        assert_eq!(copy, memory);
        drop(copy);
        drop(memory);
    }
}
