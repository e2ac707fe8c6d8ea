/// Output: the greeting line on stdout, errors on stderr.
use std::io::Write;

use crate::greeting::{GreetError, Greeting};

/// Write the greeting as a single line and flush.
///
/// # Errors
///
/// Returns `GreetError::Write` if the writer rejects the bytes.
pub fn write_greeting<W: Write>(out: &mut W, greeting: &Greeting) -> Result<(), GreetError> {
    writeln!(out, "{greeting}")?;
    out.flush()?;
    Ok(())
}

/// Write an error line to stderr.
pub fn write_error(err: &GreetError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    /// A writer whose every write fails with the given kind.
    struct Failing(io::ErrorKind);

    impl Write for Failing {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn render(greeting: &Greeting) -> String {
        let mut buf = Vec::new();
        write_greeting(&mut buf, greeting).expect("vec never fails");
        String::from_utf8(buf).expect("greeting is utf-8")
    }

    #[test]
    fn world_line() {
        assert_eq!(render(&Greeting::World), "Hello, World!\n");
    }

    #[test]
    fn named_line() {
        assert_eq!(render(&Greeting::Named("Ada".into())), "Hello, Ada!\n");
    }

    #[test]
    fn write_error_propagates() {
        let err = write_greeting(&mut Failing(io::ErrorKind::PermissionDenied), &Greeting::World)
            .unwrap_err();
        assert!(matches!(err, GreetError::Write(ref e) if e.kind() == io::ErrorKind::PermissionDenied));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn broken_pipe_propagates_silently() {
        let err = write_greeting(&mut Failing(io::ErrorKind::BrokenPipe), &Greeting::World)
            .unwrap_err();
        assert!(err.is_silent());
    }
}
