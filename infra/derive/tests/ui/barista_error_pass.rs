use barista_derive::barista_error;
use std::borrow::Cow;

#[barista_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err::<(), _>(std::io::Error::other("disk")).context("Reading order log")?;
    Ok(())
}

fn main() {
    let err = read().expect_err("io error");
    assert_eq!(err.to_string(), "IO error (Reading order log): disk");

    let err: DemoError = "boom".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let err = Err::<(), _>(DemoError::from(String::from("late"))).context("Submitting").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (Submitting): late");
}
