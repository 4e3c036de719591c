//! Reads a line and copies it into a 10-byte stack buffer with no bound.
//!
//! Any input longer than 9 characters is written past the end of the
//! destination. What happens after that is undefined.

use std::process;

use libc::c_char;

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

    match stdio::read_line(&mut line) {
        Ok(Some(_)) => {}
        Ok(None) | Err(_) => process::exit(1),
    }

    // No bound: a line longer than the destination is written past its end.
    unsafe {
        mem::copy_terminated(buffer.as_mut_ptr(), line.as_ptr().cast());

        stdio::report("You entered: ", buffer.as_ptr()).ok();
    }
}
