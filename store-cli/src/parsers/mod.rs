use serde::Deserialize;
use serde_json::Value;

use file_store::Command;

use crate::error::ScriptParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScriptFormat {
    /// `[["FILE_UPLOAD", "Cars.txt", "200kb"], ...]`
    Json,
    /// One whitespace-separated command per line
    Lines,
}

impl ScriptFormat {
    /// Guess from the file extension, defaulting to lines.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScriptFormat::Json,
            _ => ScriptFormat::Lines,
        }
    }
}

#[derive(Deserialize)]
#[serde(transparent)]
struct JsonScript(Vec<Vec<Value>>);

pub fn parse_script(
    content: &str,
    format: ScriptFormat,
) -> Result<Vec<Command>, ScriptParseError> {
    match format {
        ScriptFormat::Json => parse_json(content),
        ScriptFormat::Lines => Ok(parse_lines(content)),
    }
}

/// Strings are taken verbatim and numbers are stringified,
/// so a ttl may be written as `3600` or `"3600"`.
pub fn parse_json(content: &str) -> Result<Vec<Command>, ScriptParseError> {
    let JsonScript(operations) = serde_json::from_str(content)
        .map_err(|_| ScriptParseError::InvalidShape)?;

    operations
        .iter()
        .enumerate()
        .map(|(index, operation)| {
            let parts = operation
                .iter()
                .map(|value| match value {
                    Value::String(s) => Ok(s.clone()),
                    Value::Number(n) => Ok(n.to_string()),
                    other => Err(ScriptParseError::InvalidArgument {
                        index,
                        reason: format!("unsupported value {}", other),
                    }),
                })
                .collect::<Result<Vec<String>, _>>()?;
            Ok(Command::parse(parts.as_slice()))
        })
        .collect()
}

/// Blank lines and `#` comments are skipped.
pub fn parse_lines(content: &str) -> Vec<Command> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            Command::parse(parts.as_slice())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_script() {
        let script = r#"[
            ["FILE_UPLOAD_AT", "2021-07-01T12:00:00", "CodeSignal.txt", "150kb", 3600],
            ["FILE_GET", "Cars.txt"],
            ["FILE_BOGUS"]
        ]"#;
        let commands = parse_json(script).unwrap();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            &commands[0],
            Command::UploadAt { ttl: Some(3600), .. }
        ));
        assert!(matches!(&commands[2], Command::Unknown(_)));
    }

    #[test]
    fn test_parse_json_rejects_other_values() {
        assert!(matches!(
            parse_json(r#"{"FILE_GET": "a"}"#),
            Err(ScriptParseError::InvalidShape)
        ));
        assert!(matches!(
            parse_json(r#"[["FILE_GET", "a"], ["FILE_GET", null]]"#),
            Err(ScriptParseError::InvalidArgument { index: 1, .. })
        ));
    }

    #[test]
    fn test_parse_lines_skips_comments() {
        let script = "
            # naive part
            FILE_UPLOAD Cars.txt 200kb

            FILE_GET Cars.txt
        ";
        assert_eq!(parse_lines(script).len(), 2);
    }

    #[test]
    fn test_format_from_path() {
        use std::path::Path;
        assert_eq!(
            ScriptFormat::from_path(Path::new("script.JSON")),
            ScriptFormat::Json
        );
        assert_eq!(
            ScriptFormat::from_path(Path::new("script.txt")),
            ScriptFormat::Lines
        );
    }
}
