use std::io::{self, Write};

/// Writes `text` plus a newline to stdout. A reader that hangs up early
/// (`pricedash dash ... | head`) is not an error.
pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, text)
}

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    write_stdout_line(text.trim_end_matches('\n'))
}

fn write_tolerating_closed_pipe(writer: &mut dyn Write, text: &str) -> io::Result<()> {
    let result = writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush());
    match result {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
