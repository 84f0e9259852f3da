// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application: plain Rust structs
// and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO file I/O, no regex, no chart types allowed here
//   - Only plain Rust structs and traits
//
// Think of this layer as the "dictionary" of the system:
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The metric record in its raw (captured) and typed (reloaded) forms
pub mod record;

// Core abstractions (traits) that other layers implement
pub mod traits;
