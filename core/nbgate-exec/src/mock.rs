//! A programmable adapter for testing.
//!
//! Each operation answers with a canned result (by default an object naming
//! the operation) and every call is recorded for later inspection.

use crate::{AdapterFactory, ExecResult, ExecutionAdapter};
use async_trait::async_trait;
use nbgate_model::{Notebook, Snippet};
use nbgate_types::Requester;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

/// The adapter operations, one per gateway handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateSession,
    Execute,
    CheckStatus,
    FetchResult,
    FetchResultMetadata,
    Cancel,
    GetLog,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::CreateSession,
        Operation::Execute,
        Operation::CheckStatus,
        Operation::FetchResult,
        Operation::FetchResultMetadata,
        Operation::Cancel,
        Operation::GetLog,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateSession => "create_session",
            Operation::Execute => "execute",
            Operation::CheckStatus => "check_status",
            Operation::FetchResult => "fetch_result",
            Operation::FetchResultMetadata => "fetch_result_metadata",
            Operation::Cancel => "cancel",
            Operation::GetLog => "get_log",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One recorded adapter call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: Operation,
    /// Language passed to `create_session`.
    pub lang: Option<String>,
    /// Row count passed to `fetch_result`.
    pub rows: Option<u64>,
    pub notebook: Option<Notebook>,
    pub snippet: Option<Snippet>,
}

impl RecordedCall {
    fn new(operation: Operation) -> Self {
        Self {
            operation,
            lang: None,
            rows: None,
            notebook: None,
            snippet: None,
        }
    }

    fn with_payload(mut self, notebook: &Notebook, snippet: &Snippet) -> Self {
        self.notebook = Some(notebook.clone());
        self.snippet = Some(snippet.clone());
        self
    }
}

/// A mock adapter with canned responses.
#[derive(Debug, Default)]
pub struct MockAdapter {
    responses: Mutex<HashMap<Operation, ExecResult<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
    resolved_for: Mutex<Vec<String>>,
}

impl MockAdapter {
    /// Creates a mock that answers every operation successfully.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Sets the result returned by `operation`.
    pub fn respond(&self, operation: Operation, result: ExecResult<Value>) {
        self.responses.lock().unwrap().insert(operation, result);
    }

    /// Sets the same result for every operation.
    pub fn respond_all(&self, result: ExecResult<Value>) {
        for operation in Operation::ALL {
            self.respond(operation, result.clone());
        }
    }

    /// A registry factory that hands out this mock and records the requester.
    pub fn factory(self: &Arc<Self>) -> AdapterFactory {
        let mock = Arc::clone(self);
        Arc::new(move |user: &Requester| {
            mock.resolved_for.lock().unwrap().push(user.name().to_string());
            Arc::clone(&mock) as Arc<dyn ExecutionAdapter>
        })
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent call, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Names of the requesters the factory built adapters for.
    pub fn resolved_for(&self) -> Vec<String> {
        self.resolved_for.lock().unwrap().clone()
    }

    fn answer(&self, call: RecordedCall) -> ExecResult<Value> {
        let operation = call.operation;
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .get(&operation)
            .cloned()
            .unwrap_or_else(|| Ok(json!({ "operation": operation.name() })))
    }
}

#[async_trait]
impl ExecutionAdapter for MockAdapter {
    async fn create_session(&self, lang: &str) -> ExecResult<Value> {
        let mut call = RecordedCall::new(Operation::CreateSession);
        call.lang = Some(lang.to_string());
        self.answer(call)
    }

    async fn execute(&self, notebook: &Notebook, snippet: &Snippet) -> ExecResult<Value> {
        self.answer(RecordedCall::new(Operation::Execute).with_payload(notebook, snippet))
    }

    async fn check_status(&self, notebook: &Notebook, snippet: &Snippet) -> ExecResult<Value> {
        self.answer(RecordedCall::new(Operation::CheckStatus).with_payload(notebook, snippet))
    }

    async fn fetch_result(
        &self,
        notebook: &Notebook,
        snippet: &Snippet,
        rows: u64,
    ) -> ExecResult<Value> {
        let mut call = RecordedCall::new(Operation::FetchResult).with_payload(notebook, snippet);
        call.rows = Some(rows);
        self.answer(call)
    }

    async fn fetch_result_metadata(
        &self,
        notebook: &Notebook,
        snippet: &Snippet,
    ) -> ExecResult<Value> {
        self.answer(RecordedCall::new(Operation::FetchResultMetadata).with_payload(notebook, snippet))
    }

    async fn cancel(&self, notebook: &Notebook, snippet: &Snippet) -> ExecResult<Value> {
        self.answer(RecordedCall::new(Operation::Cancel).with_payload(notebook, snippet))
    }

    async fn get_log(&self, snippet: &Snippet) -> ExecResult<Value> {
        let mut call = RecordedCall::new(Operation::GetLog);
        call.snippet = Some(snippet.clone());
        self.answer(call)
    }
}
