//! Bottom-up Huffman tree construction.
//!
//! The tree lives in an arena of nodes indexed by position and is
//! thrown away once every leaf's depth has been read off. What survives is a
//! [`CodeLengths`]: the `(length, symbol)` pair of every leaf plus the length
//! histogram.
//!
//! # Merge order
//!
//! Nodes are extracted lowest frequency first. Among equal frequencies the
//! node with the smaller symbol id wins; internal nodes carry the id `-1`
//! for this comparison. Remaining ties (only possible between an internal
//! node and a leaf whose symbol is `-1`, or between two internal nodes) go
//! to the node created first. This makes the tree shape, and therefore the
//! canonical code, a pure function of the frequency table.

use huffbit_core::error::{HuffbitError, Result};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

/// Symbol → weight table.
pub type Frequencies = BTreeMap<i32, u64>;

/// Tie-break id carried by internal nodes.
const INTERNAL_TIE: i32 = -1;

/// Count byte occurrences in `data` as a frequency table.
pub fn byte_frequencies(data: &[u8]) -> Frequencies {
    let mut counts = [0u64; 256];
    for &b in data {
        counts[b as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .filter(|&(_, &n)| n > 0)
        .map(|(b, &n)| (b as i32, n))
        .collect()
}

#[derive(Debug, Clone, Copy)]
enum NodeKind {
    Leaf { symbol: i32 },
    Internal { left: usize, right: usize },
}

/// A node in the builder's arena.
#[derive(Debug, Clone, Copy)]
struct HuffmanNode {
    kind: NodeKind,
    frequency: u64,
    /// Distance from the root, filled in after the tree is complete.
    depth: usize,
}

impl HuffmanNode {
    fn tie(&self) -> i32 {
        match self.kind {
            NodeKind::Leaf { symbol } => symbol,
            NodeKind::Internal { .. } => INTERNAL_TIE,
        }
    }
}

/// Priority queue entry; `BinaryHeap` is a max-heap, so the ordering is
/// reversed to pop the lowest node first.
#[derive(Debug, PartialEq, Eq)]
struct QueueEntry {
    frequency: u64,
    tie: i32,
    index: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| other.tie.cmp(&self.tie))
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Code lengths derived from a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLengths {
    /// `(length, symbol)` for every symbol, sorted ascending.
    pub pairs: Vec<(usize, i32)>,
    /// `population[i]` is the number of symbols of length `i + 1`.
    pub population: Vec<usize>,
}

impl CodeLengths {
    /// Longest populated length.
    pub fn max_length(&self) -> usize {
        self.population.len()
    }

    /// Number of symbols.
    pub fn symbol_count(&self) -> usize {
        self.pairs.len()
    }

    /// Length assigned to `symbol`, if present.
    pub fn length_of(&self, symbol: i32) -> Option<usize> {
        self.pairs
            .iter()
            .find(|&&(_, s)| s == symbol)
            .map(|&(len, _)| len)
    }
}

/// Builder for Huffman code lengths from symbol frequencies.
#[derive(Debug, Default, Clone)]
pub struct HuffmanTreeBuilder {
    frequencies: Frequencies,
}

impl HuffmanTreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder seeded with an existing frequency table.
    pub fn from_frequencies(frequencies: &Frequencies) -> Self {
        Self {
            frequencies: frequencies.clone(),
        }
    }

    /// Add a symbol occurrence.
    pub fn add(&mut self, symbol: i32) {
        self.add_count(symbol, 1);
    }

    /// Add multiple occurrences of a symbol.
    pub fn add_count(&mut self, symbol: i32, count: u64) {
        let entry = self.frequencies.entry(symbol).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    /// The accumulated frequency table.
    pub fn frequencies(&self) -> &Frequencies {
        &self.frequencies
    }

    /// Build the tree and return each symbol's depth as its code length.
    ///
    /// A table with a single symbol yields length 1 for that symbol.
    pub fn build_lengths(&self) -> Result<CodeLengths> {
        if self.frequencies.is_empty() {
            return Err(HuffbitError::EmptyAlphabet);
        }

        let mut nodes: Vec<HuffmanNode> = Vec::with_capacity(self.frequencies.len() * 2 - 1);
        let mut queue = BinaryHeap::with_capacity(self.frequencies.len());

        for (&symbol, &frequency) in &self.frequencies {
            let node = HuffmanNode {
                kind: NodeKind::Leaf { symbol },
                frequency,
                depth: 0,
            };
            queue.push(QueueEntry {
                frequency,
                tie: node.tie(),
                index: nodes.len(),
            });
            nodes.push(node);
        }

        let root = loop {
            let right = queue.pop().ok_or(HuffbitError::EmptyAlphabet)?;
            let Some(left) = queue.pop() else {
                break right.index;
            };
            let node = HuffmanNode {
                kind: NodeKind::Internal {
                    left: left.index,
                    right: right.index,
                },
                frequency: left.frequency.saturating_add(right.frequency),
                depth: 0,
            };
            queue.push(QueueEntry {
                frequency: node.frequency,
                tie: node.tie(),
                index: nodes.len(),
            });
            nodes.push(node);
        };

        Ok(Self::collect_depths(&mut nodes, root))
    }

    /// Breadth-first walk assigning depths, then read off leaf lengths.
    fn collect_depths(nodes: &mut [HuffmanNode], root: usize) -> CodeLengths {
        let mut pairs = Vec::new();
        let mut queue = VecDeque::from([root]);

        while let Some(index) = queue.pop_front() {
            let node = nodes[index];
            match node.kind {
                NodeKind::Leaf { symbol } => {
                    // Lone root leaf: give it a one-bit code
                    pairs.push((node.depth.max(1), symbol));
                }
                NodeKind::Internal { left, right } => {
                    nodes[left].depth = node.depth + 1;
                    nodes[right].depth = node.depth + 1;
                    queue.push_back(left);
                    queue.push_back(right);
                }
            }
        }

        pairs.sort_unstable();
        let max_length = pairs.last().map_or(0, |&(len, _)| len);
        let mut population = vec![0usize; max_length];
        for &(len, _) in &pairs {
            population[len - 1] += 1;
        }

        CodeLengths { pairs, population }
    }
}
