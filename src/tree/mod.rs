pub mod trie;

pub use trie::*;
