// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the system
// works with: a tokenised corpus, the vocabulary built from it,
// and the abstraction over where a corpus comes from.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// A token stream read from one text file
pub mod corpus;

// Frequency-ranked token <-> id tables
pub mod vocabulary;

// Core abstractions (traits) that other layers implement
pub mod traits;
