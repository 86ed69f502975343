use pcat_derive::pcat_error;
use std::borrow::Cow;

#[pcat_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn failing_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::other("disk unplugged"))
}

#[test]
fn pcat_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pcat_error_pass.rs");
}

#[test]
fn question_mark_converts_source_without_context() {
    fn run() -> Result<(), SampleError> {
        failing_io()?;
        Ok(())
    }

    let err = run().expect_err("io failure should propagate");
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: disk unplugged");
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = failing_io().context("loading users").expect_err("should fail");
    assert_eq!(err.to_string(), "IO error (loading users): disk unplugged");
}

#[test]
fn context_overrides_on_crate_errors() {
    let result: Result<(), SampleError> = Err("unexpected state".into());
    let err = result.context("second pass").expect_err("should fail");
    assert_eq!(err.to_string(), "Internal error (second pass): unexpected state");
}

#[test]
fn owned_strings_map_to_internal() {
    let err = SampleError::from(format!("row {} missing", 7));
    assert!(matches!(err, SampleError::Internal { ref message, .. } if message == "row 7 missing"));
}
