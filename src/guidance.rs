//! Guidance printed in place of the retired sync

use std::io::{self, Write};

use crate::config::CANONICAL_DIR;

/// The guidance message, one entry per line
pub fn lines() -> Vec<String> {
    vec![
        "Project simplified - no IDE folders to sync.".to_string(),
        format!("Canonical source: {}/", CANONICAL_DIR),
        String::new(),
        "To integrate with your IDE, copy files from:".to_string(),
        format!("  - Templates: {}/templates/", CANONICAL_DIR),
        format!("  - Scripts: {}/scripts/", CANONICAL_DIR),
        format!("  - SKILL.md: {}/SKILL.md", CANONICAL_DIR),
    ]
}

/// Write the guidance to `out`
pub fn write_to<W: Write>(out: &mut W) -> io::Result<()> {
    for line in lines() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Print the guidance to stdout
///
/// A reader that closed the pipe early is not an error.
pub fn print() -> io::Result<()> {
    ignore_closed_pipe(write_to(&mut io::stdout().lock()))
}

/// Treat `BrokenPipe` as success, pass everything else through
pub fn ignore_closed_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer whose reader has gone away
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_first_line() {
        assert_eq!(lines()[0], "Project simplified - no IDE folders to sync.");
    }

    #[test]
    fn test_names_canonical_locations() {
        let text = lines().join("\n");
        assert!(text.contains("Canonical source: skills/planning-with-files/"));
        assert!(text.contains("skills/planning-with-files/templates/"));
        assert!(text.contains("skills/planning-with-files/scripts/"));
        assert!(text.contains("skills/planning-with-files/SKILL.md"));
    }

    #[test]
    fn test_blank_line_before_instructions() {
        let lines = lines();
        assert_eq!(lines.len(), 7);
        assert!(lines[2].is_empty());
        assert_eq!(lines[3], "To integrate with your IDE, copy files from:");
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Project simplified - no IDE folders to sync.\n"));
        assert!(text.ends_with("SKILL.md: skills/planning-with-files/SKILL.md\n"));
    }

    #[test]
    fn test_closed_pipe_is_not_an_error() {
        let result = write_to(&mut ClosedPipe);
        assert_eq!(
            result.as_ref().unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        assert!(ignore_closed_pipe(result).is_ok());
    }

    #[test]
    fn test_other_errors_pass_through() {
        let result = ignore_closed_pipe(Err(io::Error::from(io::ErrorKind::PermissionDenied)));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
    }
}
