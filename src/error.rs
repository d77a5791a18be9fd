//! Library error type.
//!
//! The command engine itself never fails; errors only arise when input
//! from outside the crate (toolbar identifiers, template ids, caller
//! supplied offsets) does not name anything valid.

/// Errors produced by the lookup and selection layers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A toolbar identifier that names no known action.
    #[error("unknown toolbar action `{0}`")]
    UnknownAction(String),

    /// A template id that is not in the catalog.
    #[error("unknown template `{0}`")]
    UnknownTemplate(String),

    /// A selection endpoint past the end of the document.
    #[error("offset {offset} is out of bounds for a document of {len} chars")]
    InvalidOffset { offset: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        assert_eq!(
            Error::UnknownAction("bolder-button".to_string()).to_string(),
            "unknown toolbar action `bolder-button`"
        );
        assert_eq!(
            Error::InvalidOffset { offset: 9, len: 4 }.to_string(),
            "offset 9 is out of bounds for a document of 4 chars"
        );
    }
}
