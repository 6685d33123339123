//! Response envelopes.
//!
//! Every execution handler answers HTTP 200 with
//! `{"status": <code>, <payload key>: <value>}` on success,
//! `{"status": -2}` when the backend lost the session, and
//! `{"status": -1, "message": <text>}` on any other failure. The payload key
//! (and, for `create_session`, the error key) is fixed per handler by its
//! [`Payload`] type.

use nbgate_exec::ExecResult;
use nbgate_types::DocumentId;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Outcome code carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Failed,
    /// The backend session is gone; the client should recreate it and retry.
    SessionExpired,
}

impl Status {
    pub const fn code(self) -> i8 {
        match self {
            Status::Ok => 0,
            Status::Failed => -1,
            Status::SessionExpired => -2,
        }
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.code())
    }
}

/// A handler's success payload and the keys it is reported under.
pub trait Payload: From<Value> {
    /// Key holding the adapter's value on success.
    const KEY: &'static str;
    /// Key holding the error text on failure.
    const ERROR_KEY: &'static str = "message";

    fn value(&self) -> &Value;
}

macro_rules! payload {
    ($(#[$meta:meta])* $name:ident => $key:literal $(, error = $error_key:literal)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name(pub Value);

        impl From<Value> for $name {
            fn from(value: Value) -> Self {
                Self(value)
            }
        }

        impl Payload for $name {
            const KEY: &'static str = $key;
            $(const ERROR_KEY: &'static str = $error_key;)?

            fn value(&self) -> &Value {
                &self.0
            }
        }
    };
}

payload!(
    /// `create_session`: the new session handle. Failures use `error`.
    SessionPayload => "session", error = "error"
);
payload!(
    /// `execute`: the statement handle.
    HandlePayload => "handle"
);
payload!(
    /// `check_status`: the statement's state.
    QueryStatusPayload => "query_status"
);
payload!(
    /// `fetch_result_data`, `fetch_result_metadata` and `cancel_statement`.
    ResultPayload => "result"
);
payload!(
    /// `get_log`: the log text.
    LogsPayload => "logs"
);

/// The envelope of one execution handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<P> {
    Success(P),
    SessionExpired,
    Failed(String),
}

impl<P: Payload> Outcome<P> {
    /// Classifies an adapter result by its error kind.
    pub fn from_exec(result: ExecResult<Value>) -> Self {
        match result {
            Ok(value) => Outcome::Success(P::from(value)),
            Err(e) if e.is_session_lost() => Outcome::SessionExpired,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    pub fn status(&self) -> Status {
        match self {
            Outcome::Success(_) => Status::Ok,
            Outcome::SessionExpired => Status::SessionExpired,
            Outcome::Failed(_) => Status::Failed,
        }
    }
}

impl<P: Payload> Serialize for Outcome<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("status", &self.status())?;
        match self {
            Outcome::Success(payload) => map.serialize_entry(P::KEY, payload.value())?,
            Outcome::SessionExpired => {}
            Outcome::Failed(message) => map.serialize_entry(P::ERROR_KEY, message)?,
        }
        map.end()
    }
}

pub const NOTEBOOK_SAVED: &str = "Notebook saved!";
pub const NOTEBOOK_OPENED: &str = "Notebook opened!";

/// `save_notebook` response.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NotebookSaved {
    pub status: Status,
    pub id: DocumentId,
    pub message: &'static str,
}

impl NotebookSaved {
    pub fn new(id: DocumentId) -> Self {
        Self {
            status: Status::Ok,
            id,
            message: NOTEBOOK_SAVED,
        }
    }
}

/// `open_notebook` response. `notebook` is the exported JSON text.
#[derive(Debug, Clone, serde::Serialize)]
pub struct NotebookOpened {
    pub status: Status,
    pub notebook: String,
    pub message: &'static str,
}

impl NotebookOpened {
    pub fn new(notebook: String) -> Self {
        Self {
            status: Status::Ok,
            notebook,
            message: NOTEBOOK_OPENED,
        }
    }
}
