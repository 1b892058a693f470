//! Console adapter for development/testing

use std::io::{self, Stdout, Write};

use chrono::Local;

use crate::domain::traits::HostApi;

/// Console host: one chat window on a terminal.
///
/// Local notices print as `[HH:MM:SS] * message`, outgoing messages as
/// `[HH:MM:SS] <nick> message`.
pub struct ConsoleHost<W: Write = Stdout> {
    nickname: String,
    contact: String,
    out: W,
}

impl ConsoleHost<Stdout> {
    pub fn new(nickname: impl Into<String>, contact: impl Into<String>) -> Self {
        Self::with_writer(nickname, contact, io::stdout())
    }
}

impl<W: Write> ConsoleHost<W> {
    pub fn with_writer(nickname: impl Into<String>, contact: impl Into<String>, out: W) -> Self {
        Self {
            nickname: nickname.into(),
            contact: contact.into(),
            out,
        }
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) {
        let timestamp = Local::now().format("%H:%M:%S");
        if let Err(e) = writeln!(self.out, "[{}] {}", timestamp, line).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }
}

impl<W: Write> HostApi for ConsoleHost<W> {
    fn display(&mut self, message: &str) {
        self.write_line(&format!("* {}", message));
    }

    fn nickname(&self) -> String {
        self.nickname.clone()
    }

    fn send(&mut self, message: &str) {
        tracing::debug!("Sending to {}: {}", self.contact, message);
        let line = format!("<{}> {}", self.nickname, message);
        self.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(host: ConsoleHost<Vec<u8>>) -> Vec<String> {
        String::from_utf8(host.into_inner())
            .unwrap()
            .lines()
            .map(|l| l.to_string())
            .collect()
    }

    #[test]
    fn formats_local_and_outgoing_lines() {
        let mut host = ConsoleHost::with_writer("alice", "bob", Vec::new());
        host.display("Only one argument allowed!");
        host.send("hello");

        assert_eq!(host.contact(), "bob");
        let out = lines(host);
        assert_eq!(out.len(), 2);
        assert!(out[0].starts_with('['));
        assert!(out[0].ends_with("] * Only one argument allowed!"));
        assert!(out[1].ends_with("] <alice> hello"));
    }
}
