use std::str::FromStr;

use data_error::{Result, StoreError};

use crate::record::{Timestamp, Ttl};

/// One entry of a command script.
///
/// Naive variants carry no timestamp and ignore expiration;
/// the `*At` variants and `Rollback` act on the time-aware namespace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Upload {
        name: String,
        size: String,
    },
    Get {
        name: String,
    },
    Copy {
        source: String,
        dest: String,
    },
    Search {
        prefix: String,
    },
    UploadAt {
        at: Timestamp,
        name: String,
        size: String,
        ttl: Option<Ttl>,
    },
    GetAt {
        at: Timestamp,
        name: String,
    },
    CopyAt {
        at: Timestamp,
        source: String,
        dest: String,
    },
    SearchAt {
        at: Timestamp,
        prefix: String,
    },
    /// `text` is the timestamp exactly as written, echoed in the reply.
    Rollback {
        at: Timestamp,
        text: String,
    },
    /// Anything that could not be understood. Answered with a no-op.
    Unknown(String),
}

impl Command {
    /// Builds a command from a `(NAME, arg1, arg2, ...)` tuple.
    ///
    /// Never fails: unknown names, wrong arity and unparsable
    /// timestamps or ttls all turn into [`Command::Unknown`].
    pub fn parse<S: AsRef<str>>(parts: &[S]) -> Self {
        let Some((name, args)) = parts.split_first() else {
            log::warn!("empty command");
            return Command::Unknown(String::new());
        };
        let name = name.as_ref();
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();

        match Self::try_parse(name, &args) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("unrecognized command {} {:?}: {}", name, args, err);
                Command::Unknown(name.to_owned())
            }
        }
    }

    fn try_parse(name: &str, args: &[&str]) -> Result<Self> {
        let kind = name.strip_prefix("FILE_").unwrap_or(name);
        let command = match (kind, args) {
            ("UPLOAD", [name, size]) => Command::Upload {
                name: name.to_string(),
                size: size.to_string(),
            },
            ("GET", [name]) => Command::Get {
                name: name.to_string(),
            },
            ("COPY", [source, dest]) => Command::Copy {
                source: source.to_string(),
                dest: dest.to_string(),
            },
            ("SEARCH", [prefix]) => Command::Search {
                prefix: prefix.to_string(),
            },
            ("UPLOAD_AT", [at, name, size]) => Command::UploadAt {
                at: at.parse()?,
                name: name.to_string(),
                size: size.to_string(),
                ttl: None,
            },
            ("UPLOAD_AT", [at, name, size, ttl]) => Command::UploadAt {
                at: at.parse()?,
                name: name.to_string(),
                size: size.to_string(),
                ttl: Some(ttl.trim().parse()?),
            },
            ("GET_AT", [at, name]) => Command::GetAt {
                at: at.parse()?,
                name: name.to_string(),
            },
            ("COPY_AT", [at, source, dest]) => Command::CopyAt {
                at: at.parse()?,
                source: source.to_string(),
                dest: dest.to_string(),
            },
            ("SEARCH_AT", [at, prefix]) => Command::SearchAt {
                at: at.parse()?,
                prefix: prefix.to_string(),
            },
            ("ROLLBACK", [at]) => Command::Rollback {
                at: at.parse()?,
                text: at.to_string(),
            },
            _ => {
                return Err(StoreError::Parse(format!(
                    "expected a known command with its arguments, got {} argument(s)",
                    args.len()
                )))
            }
        };
        Ok(command)
    }
}

/// A single whitespace-separated line, e.g. `FILE_GET Cars.txt`.
impl FromStr for Command {
    type Err = StoreError;

    fn from_str(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        Ok(Command::parse(parts.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::Command;
    use rstest::rstest;

    #[test]
    fn test_parse_naive_commands() {
        assert_eq!(
            Command::parse(&["FILE_UPLOAD", "Cars.txt", "200kb"]),
            Command::Upload {
                name: "Cars.txt".to_owned(),
                size: "200kb".to_owned()
            }
        );
        assert_eq!(
            Command::parse(&["COPY", "a", "b"]),
            Command::Copy {
                source: "a".to_owned(),
                dest: "b".to_owned()
            }
        );
    }

    #[test]
    fn test_parse_upload_at_with_and_without_ttl() {
        let at = "2021-07-01T12:00:00".parse().unwrap();
        assert_eq!(
            Command::parse(&[
                "FILE_UPLOAD_AT",
                "2021-07-01T12:00:00",
                "Python.txt",
                "150kb"
            ]),
            Command::UploadAt {
                at,
                name: "Python.txt".to_owned(),
                size: "150kb".to_owned(),
                ttl: None
            }
        );
        assert_eq!(
            Command::parse(&[
                "UPLOAD_AT",
                "2021-07-01T12:00:00",
                "CodeSignal.txt",
                "150kb",
                "3600"
            ]),
            Command::UploadAt {
                at,
                name: "CodeSignal.txt".to_owned(),
                size: "150kb".to_owned(),
                ttl: Some(3600)
            }
        );
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::unknown(&["FILE_DELETE", "a"])]
    #[case::lowercase(&["file_get", "a"])]
    #[case::missing_argument(&["FILE_COPY", "a"])]
    #[case::extra_argument(&["FILE_GET", "a", "b"])]
    #[case::bad_timestamp(&["FILE_GET_AT", "noon", "a"])]
    #[case::negative_ttl(&["FILE_UPLOAD_AT", "2021-07-01T12:00:00", "a", "1kb", "-1"])]
    #[case::bad_rollback(&["ROLLBACK"])]
    fn test_malformed_commands_are_unknown(#[case] parts: &[&str]) {
        assert!(matches!(Command::parse(parts), Command::Unknown(_)));
    }

    #[test]
    fn test_from_line() {
        let command: Command =
            "FILE_SEARCH_AT 2021-07-01T12:00:00 Py".parse().unwrap();
        assert_eq!(
            command,
            Command::SearchAt {
                at: "2021-07-01T12:00:00".parse().unwrap(),
                prefix: "Py".to_owned()
            }
        );
    }
}
