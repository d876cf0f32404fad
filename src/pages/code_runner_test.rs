use super::*;

#[test]
fn successful_run_shows_stdout() {
    let result = Ok(RunCodeResponse { success: true, output: "Count: 0\n".to_owned(), error: String::new() });
    assert_eq!(format_run_output(&result), "Count: 0\n");
}

#[test]
fn failed_run_shows_error_block() {
    let result = Ok(RunCodeResponse {
        success: false,
        output: String::new(),
        error: "NameError: name 'x' is not defined".to_owned(),
    });
    assert_eq!(format_run_output(&result), "❌ Error:\nNameError: name 'x' is not defined");
}

#[test]
fn transport_failure_shows_connection_error() {
    let result = Err(ApiError::Network("Failed to fetch".to_owned()));
    assert_eq!(format_run_output(&result), "❌ Connection error: network error: Failed to fetch");
}

#[test]
fn run_request_uses_default_timeout() {
    let req = build_run_request("print(1)");
    assert_eq!(req.code, "print(1)");
    assert_eq!(req.timeout, 30);
}
