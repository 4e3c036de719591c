//! Reads a line and copies it into a 10-byte stack buffer with an explicit
//! bound, truncating anything longer than 9 characters.

use std::process;

use libc::c_char;
use log::debug;

use overrun::{mem, stdio};

/// Capacity of the line buffer, terminator included.
const LINE_CAP: usize = 256;

/// Capacity of the destination buffer, terminator included.
const DEST_CAP: usize = 10;

fn main() {
    env_logger::init();

    let mut line = [0u8; LINE_CAP];
    let mut buffer = [0 as c_char; DEST_CAP];

    stdio::prompt("Enter a string: ").ok();

    let len = match stdio::read_line(&mut line) {
        Ok(Some(len)) => len,
        Ok(None) | Err(_) => process::exit(1),
    };

    unsafe {
        mem::copy_bounded(buffer.as_mut_ptr(), line.as_ptr().cast(), DEST_CAP - 1);
    }
    // The bounded copy leaves the last slot alone; terminate there no
    // matter how much was copied.
    buffer[DEST_CAP - 1] = 0;

    if len > DEST_CAP - 1 {
        debug!("{} input bytes truncated to {}", len, DEST_CAP - 1);
    }

    unsafe {
        stdio::report("You entered (safe): ", buffer.as_ptr()).ok();
    }
}
