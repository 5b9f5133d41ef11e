//! Sentence similarity graph
//!
//! This module builds the dense, weighted sentence graph that the
//! centrality measures run over.

pub mod similarity;
