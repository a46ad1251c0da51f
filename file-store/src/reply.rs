use std::fmt;

use crate::utils::format_names;

/// Outcome of one command. Renders to the exact result line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Uploaded(String),
    Got(String),
    /// Missing name, for both command families.
    NotFound,
    InvalidArguments,
    SourceNotFound,
    Copied { source: String, dest: String },
    Found(Vec<String>),

    UploadedAt(String),
    UploadFailed,
    GotAt(String),
    /// Expired name on lookup, missing source on timed copy.
    NotFoundAt,
    CopiedAt { source: String, dest: String },
    CopyFailed,
    FoundAt(Vec<String>),
    /// Carries the target timestamp as it was written.
    RolledBack(String),

    NoOperation,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Uploaded(name) => write!(f, "uploaded {}", name),
            Reply::Got(name) => write!(f, "got {}", name),
            Reply::NotFound => f.write_str("file not found."),
            Reply::InvalidArguments => f.write_str("invalid arguments"),
            Reply::SourceNotFound => f.write_str("source file not found."),
            Reply::Copied { source, dest } => {
                write!(f, "copied {} to {}", source, dest)
            }
            Reply::Found(names) => write!(f, "found {}", format_names(names)),
            Reply::UploadedAt(name) => write!(f, "uploaded at {}", name),
            Reply::UploadFailed => f.write_str("could not upload file."),
            Reply::GotAt(name) => write!(f, "got at {}", name),
            Reply::NotFoundAt => f.write_str("file not found"),
            Reply::CopiedAt { source, dest } => {
                write!(f, "copied at {} to {}", source, dest)
            }
            Reply::CopyFailed => f.write_str("could not copy file"),
            Reply::FoundAt(names) => {
                write!(f, "found at {}", format_names(names))
            }
            Reply::RolledBack(at) => write!(f, "rollback to {}", at),
            Reply::NoOperation => f.write_str("No operations provided."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reply;

    #[test]
    fn test_not_found_wordings_differ() {
        assert_eq!(Reply::NotFound.to_string(), "file not found.");
        assert_eq!(Reply::NotFoundAt.to_string(), "file not found");
    }

    #[test]
    fn test_found_lists() {
        let reply = Reply::Found(vec!["Baz.pdf".into(), "Bar.csv".into()]);
        assert_eq!(reply.to_string(), "found [Baz.pdf, Bar.csv]");
        assert_eq!(Reply::FoundAt(vec![]).to_string(), "found at []");
    }

    #[test]
    fn test_rollback_echoes_timestamp() {
        let reply = Reply::RolledBack("2021-07-01T12:10:00.000".to_owned());
        assert_eq!(reply.to_string(), "rollback to 2021-07-01T12:10:00.000");
    }
}
