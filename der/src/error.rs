use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("parser error {0:?}")]
    Parser(nom::error::ErrorKind),
    #[error("parser incomplete: {0:?}")]
    ParserIncomplete(nom::Needed),
    #[error("empty input")]
    EmptyInput,
    #[error("child index {index} out of range ({count} children)")]
    ChildIndexOutOfRange { index: usize, count: usize },
    #[error("expected a constructed element")]
    NotConstructed,
}

impl Error {
    pub(crate) fn from_nom(err: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match err {
            nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
            nom::Err::Error(e) | nom::Err::Failure(e) => Error::Parser(e.code),
        }
    }
}
