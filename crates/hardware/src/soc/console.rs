//! Console seam for trap/syscall I/O.
//!
//! The trap services print integers and newlines and, for one service,
//! block reading an integer. Putting the surface behind a trait lets
//! tests script input and capture output without touching stdio.

use std::io::{self, BufRead, Write};

use crate::common::SimError;

/// Console operations the trap services rely on.
pub trait Console {
    /// Prints one signed integer, preceded by a space.
    fn print_int(&mut self, value: i32);

    /// Prints a newline.
    fn print_newline(&mut self);

    /// Blocks reading one integer.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] when the underlying read fails or the
    /// input is not an integer.
    fn read_int(&mut self) -> Result<i32, SimError>;
}

/// Console over the process's stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print_int(&mut self, value: i32) {
        print!(" {value}");
    }

    fn print_newline(&mut self) {
        println!();
    }

    fn read_int(&mut self) -> Result<i32, SimError> {
        print!("\n? ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(SimError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input while reading an integer",
            )));
        }
        line.trim()
            .parse()
            .map_err(|e| SimError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
