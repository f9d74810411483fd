//! # Record Store
//!
//! Concurrency-safe CRUD over an in-memory mapping of notes.
//!
//! # Guarantees
//!
//! 1. Ids are allocated from a monotonic counter and never reused
//! 2. Blank titles are rejected before any mutation
//! 3. Reads never observe a partially applied write
//! 4. Every operation checks the caller's [`OpContext`] at entry
//!
//! # Usage
//!
//! ```ignore
//! use notedb::store::{InMemoryStore, OpContext, RecordInput, RecordStore};
//!
//! let store = InMemoryStore::new();
//! let ctx = OpContext::background();
//! let note = store.create(&ctx, RecordInput::new("buy milk"))?;
//! assert_eq!(store.get_by_id(&ctx, note.id)?, note);
//! ```

pub mod context;
pub mod errors;
pub mod memory;
pub mod record;

pub use context::{CancelToken, OpContext};
pub use errors::{StoreError, StoreResult};
pub use memory::{InMemoryStore, RecordStore};
pub use record::{Record, RecordInput, TITLE_REQUIRED};
