use nbgate_exec::ExecError;
use nbgate_server::envelope::{HandlePayload, Outcome, SessionPayload, Status};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn status_codes() {
    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::Failed.code(), -1);
    assert_eq!(Status::SessionExpired.code(), -2);
}

#[test]
fn outcome_classification() {
    let ok: Outcome<HandlePayload> = Outcome::from_exec(Ok(json!({"id": 1})));
    assert_eq!(ok, Outcome::Success(HandlePayload(json!({"id": 1}))));

    let lost: Outcome<HandlePayload> =
        Outcome::from_exec(Err(ExecError::SessionNotFound("s".into())));
    assert_eq!(lost.status(), Status::SessionExpired);
    assert_eq!(serde_json::to_value(&lost).unwrap(), json!({"status": -2}));

    let failed: Outcome<SessionPayload> = Outcome::from_exec(Err(ExecError::failed("nope")));
    assert_eq!(
        serde_json::to_value(&failed).unwrap(),
        json!({"status": -1, "error": "nope"})
    );
}
