// crates/engine/src/processor.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Count the lines of the file at `path`.
///
/// Any open or read failure yields 0 so that one unreadable file does not
/// abort the scan. The failure is logged at debug level.
pub fn count_lines(path: &Path) -> usize {
    match try_count_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            log::debug!("Failed to read '{}': {e}", path.display());
            0
        }
    }
}

/// Fallible variant of [`count_lines`].
///
/// # Errors
/// Returns the underlying I/O error if the file cannot be opened or read.
pub fn try_count_lines(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    count_lines_in(BufReader::new(file))
}

/// Count lines from a buffered reader using universal newline rules.
///
/// `\n`, `\r\n` and a lone `\r` each terminate one line. Bytes that are not
/// valid UTF-8 are dropped, so a trailing segment without a terminator is one
/// more line only if at least one character in it decodes.
///
/// # Errors
/// Propagates read errors from `reader`.
pub fn count_lines_in<R: BufRead>(mut reader: R) -> io::Result<usize> {
    let mut lines = 0;
    // `\r` at the end of the previous chunk; its meaning depends on the next byte.
    let mut pending_cr = false;
    let mut tail = Tail::default();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        if pending_cr && buf[0] != b'\n' {
            lines += 1;
        }
        pending_cr = false;

        lines += bytecount::count(buf, b'\n');
        if buf.contains(&b'\r') {
            lines += count_lone_cr(buf);
            pending_cr = buf.last() == Some(&b'\r');
        }

        match buf.iter().rposition(|&b| b == b'\n' || b == b'\r') {
            Some(pos) => {
                tail = Tail::default();
                tail.extend(&buf[pos + 1..]);
            }
            None => tail.extend(buf),
        }

        let len = buf.len();
        reader.consume(len);
    }

    if pending_cr || tail.has_text {
        lines += 1;
    }

    Ok(lines)
}

/// Bytes seen since the last line terminator.
#[derive(Default)]
struct Tail {
    /// At least one character decoded.
    has_text: bool,
    /// Incomplete UTF-8 sequence cut off at a chunk boundary (at most 3 bytes).
    partial: Vec<u8>,
}

impl Tail {
    fn extend(&mut self, bytes: &[u8]) {
        if self.has_text || bytes.is_empty() {
            return;
        }
        let mut joined = std::mem::take(&mut self.partial);
        joined.extend_from_slice(bytes);

        let mut rest = joined.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(s) => {
                    self.has_text = !s.is_empty();
                    return;
                }
                Err(e) if e.valid_up_to() > 0 => {
                    self.has_text = true;
                    return;
                }
                Err(e) => match e.error_len() {
                    Some(n) => rest = &rest[n..],
                    None => {
                        self.partial = rest.to_vec();
                        return;
                    }
                },
            }
        }
    }
}

/// `\r` bytes followed by something other than `\n` within `buf`.
/// A `\r` in the final position is left to the caller.
fn count_lone_cr(buf: &[u8]) -> usize {
    buf.windows(2)
        .filter(|w| w[0] == b'\r' && w[1] != b'\n')
        .count()
}
