//! Storage adapters for the loan domain ports

pub mod in_memory;

pub use in_memory::InMemoryStore;
