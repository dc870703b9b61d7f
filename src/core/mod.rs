pub mod engine;
pub mod normalize;
pub mod trie;
pub mod types;
