use pcat_derive::pcat_error;
use std::borrow::Cow;

#[pcat_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Data error{}: {message}", format_context(.context))]
    Data { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("reading seed")
}

fn main() {
    let _ = read();
    let _: DemoError = "internal".into();
}
