//! Console plumbing shared by the two programs: a prompt, a bounded line
//! read, and a report printer.
//!
//! Reads go straight to the standard input file descriptor, unbuffered, so
//! a program consumes no more of the stream than the one line it asked for.

use std::io::{self, Write};
use std::slice;

use libc::c_char;
use log::debug;
use rustix::io::Errno;

use crate::mem;

/// Write `text` to standard output with no trailing newline, flushing so
/// the prompt is visible before a read blocks.
pub fn prompt(text: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Read one line from standard input into `buf`, keeping at most
/// `buf.len() - 1` bytes.
///
/// A trailing line feed is stripped in place, and the kept bytes are
/// NUL-terminated. Returns the number of kept bytes, or `None` if the
/// stream ended before any byte arrived. Interrupted reads are retried.
pub fn read_line(buf: &mut [u8]) -> io::Result<Option<usize>> {
    assert!(buf.len() > 1);

    let stdin = rustix::stdio::stdin();
    let cap = buf.len() - 1;
    let mut filled = 0;

    while filled < cap {
        let n = match rustix::io::read(stdin, &mut buf[filled..cap]) {
            Ok(0) => break,
            Ok(n) => n,
            Err(err) if err == Errno::INTR => continue,
            Err(err) => return Err(err.into()),
        };

        match memchr::memchr(b'\n', &buf[filled..filled + n]) {
            Some(at) => {
                // Anything the descriptor handed us past the line feed is
                // not part of this line; it is dropped with the buffer.
                filled += at + 1;
                break;
            }
            None => filled += n,
        }
    }

    if filled == 0 {
        debug!("end of input before any byte arrived");
        return Ok(None);
    }

    if buf[filled - 1] == b'\n' {
        filled -= 1;
    }
    buf[filled] = 0;

    Ok(Some(filled))
}

/// Print `label` followed by the NUL-terminated sequence at `s` and a line
/// break.
///
/// # Safety
///
/// `s` must point to a NUL-terminated sequence of initialized bytes.
pub unsafe fn report(label: &str, s: *const c_char) -> io::Result<()> {
    let bytes = slice::from_raw_parts(s.cast::<u8>(), mem::terminated_len(s));

    let mut out = io::stdout().lock();
    out.write_all(label.as_bytes())?;
    out.write_all(bytes)?;
    out.write_all(b"\n")?;
    out.flush()
}
