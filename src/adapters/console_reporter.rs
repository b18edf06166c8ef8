use crate::ports::{Reporter, Status};

/// Writes status lines to the terminal. Errors go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn line(&self, status: Status, message: &str) {
        match status {
            Status::Error => eprintln!("{} {}", status.tag(), message),
            _ => println!("{} {}", status.tag(), message),
        }
    }

    fn raw(&self, text: &str) {
        println!("{}", text);
    }
}
