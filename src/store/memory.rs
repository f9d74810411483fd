//! # In-Memory Record Store
//!
//! A single readers-writer lock guards both the record mapping and the id
//! counter, so drawing an id and inserting the record are one atomic step.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::observability::Logger;

use super::context::OpContext;
use super::errors::{StoreError, StoreResult};
use super::record::{Record, RecordInput};

/// CRUD contract consumed by the HTTP layer
///
/// Every operation checks `ctx` at entry and returns owned copies.
pub trait RecordStore: Send + Sync {
    /// Validate, allocate the next id and insert
    fn create(&self, ctx: &OpContext, input: RecordInput) -> StoreResult<Record>;

    /// Get one record
    fn get_by_id(&self, ctx: &OpContext, id: u64) -> StoreResult<Record>;

    /// Snapshot of all records, unspecified order
    fn get_all(&self, ctx: &OpContext) -> StoreResult<Vec<Record>>;

    /// Replace title, description and done of an existing record
    fn update(&self, ctx: &OpContext, id: u64, input: RecordInput) -> StoreResult<Record>;

    /// Remove a record; its id is never reissued
    fn delete(&self, ctx: &OpContext, id: u64) -> StoreResult<()>;

    /// Number of stored records
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// State behind the lock
#[derive(Debug, Default)]
struct StoreState {
    /// Records by ID
    records: HashMap<u64, Record>,

    /// Last id handed out; 0 before the first create
    last_id: u64,
}

impl StoreState {
    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Process-wide in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store with the counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    // No code path panics while holding the lock, so a poisoned guard still
    // protects a consistent state.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RecordStore for InMemoryStore {
    fn create(&self, ctx: &OpContext, input: RecordInput) -> StoreResult<Record> {
        ctx.check()?;
        input.validate()?;

        let record = {
            let mut state = self.write();
            let id = state.next_id();
            let record = Record::from_input(id, input);
            state.records.insert(id, record.clone());
            record
        };

        trace_mutation("RECORD_CREATED", record.id, ctx);
        Ok(record)
    }

    fn get_by_id(&self, ctx: &OpContext, id: u64) -> StoreResult<Record> {
        ctx.check()?;

        self.read()
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn get_all(&self, ctx: &OpContext) -> StoreResult<Vec<Record>> {
        ctx.check()?;

        Ok(self.read().records.values().cloned().collect())
    }

    fn update(&self, ctx: &OpContext, id: u64, input: RecordInput) -> StoreResult<Record> {
        ctx.check()?;
        // Computed outside the lock, reported only once existence is confirmed
        let valid = input.validate();

        let record = {
            let mut state = self.write();
            let record = state.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
            valid?;
            record.replace_with(input);
            record.clone()
        };

        trace_mutation("RECORD_UPDATED", id, ctx);
        Ok(record)
    }

    fn delete(&self, ctx: &OpContext, id: u64) -> StoreResult<()> {
        ctx.check()?;

        self.write()
            .records
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;

        trace_mutation("RECORD_DELETED", id, ctx);
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().records.len()
    }
}

fn trace_mutation(event: &str, id: u64, ctx: &OpContext) {
    let id = id.to_string();
    let request_id = ctx.request_id.to_string();
    Logger::trace(event, &[("id", id.as_str()), ("request_id", request_id.as_str())]);
}
