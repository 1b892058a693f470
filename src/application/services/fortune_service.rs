//! The `/fortune` command: validate one numeric argument, then send that many
//! random fortunes to the contact of the current window.

use std::sync::Mutex;

use rand::Rng;

use crate::application::errors::FortuneError;
use crate::domain::entities::FortuneTable;
use crate::domain::traits::HostApi;

pub const COMMAND_NAME: &str = "/fortune";
pub const COMMAND_HELP: &str = "Send a fortune to the contact of the current window";

/// Validate the invocation arguments into a fortune count.
///
/// Exactly one token is accepted and it must be a base-10 integer. Negative
/// values are valid and result in no fortunes.
pub fn parse_count(args: &[String]) -> Result<i64, FortuneError> {
    let [arg] = args else {
        return Err(FortuneError::ArgumentCount);
    };

    arg.parse::<i64>().map_err(|_| FortuneError::ArgumentType)
}

pub fn announcement(nickname: &str, count: i64) -> String {
    format!("{} has decided to send you {} fortunes:", nickname, count)
}

/// Sends fortunes drawn from a table using an injected random source
pub struct FortuneService<R> {
    table: FortuneTable,
    rng: Mutex<R>,
}

impl<R: Rng + Send> FortuneService<R> {
    pub fn new(table: FortuneTable, rng: R) -> Self {
        Self {
            table,
            rng: Mutex::new(rng),
        }
    }

    pub fn table(&self) -> &FortuneTable {
        &self.table
    }

    /// Handle one `/fortune` invocation.
    ///
    /// Nothing reaches the contact unless the arguments validate. Returns the
    /// number of fortunes sent after the announcement.
    pub fn handle(&self, host: &mut dyn HostApi, args: &[String]) -> Result<u64, FortuneError> {
        let count = parse_count(args)?;
        Ok(self.send_fortunes(host, count))
    }

    /// Announce, then send `count` fortunes. Non-positive counts send the
    /// announcement only.
    pub fn send_fortunes(&self, host: &mut dyn HostApi, count: i64) -> u64 {
        let nickname = host.nickname();
        host.send(&announcement(&nickname, count));

        // A poisoned lock still holds a usable generator
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let mut sent = 0;
        for _ in 0..count {
            host.send(self.table.pick(&mut *rng));
            sent += 1;
        }

        tracing::debug!("{} sent {} fortunes", nickname, sent);
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::memory::MemoryHost;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    fn service(seed: u64) -> FortuneService<StdRng> {
        FortuneService::new(FortuneTable::default(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn parse_count_checks_arity_first() {
        assert_eq!(parse_count(&args(&[])), Err(FortuneError::ArgumentCount));
        assert_eq!(parse_count(&args(&["1", "2"])), Err(FortuneError::ArgumentCount));
        assert_eq!(parse_count(&args(&["x", "y"])), Err(FortuneError::ArgumentCount));
    }

    #[test]
    fn parse_count_accepts_signed_integers() {
        assert_eq!(parse_count(&args(&["3"])), Ok(3));
        assert_eq!(parse_count(&args(&["+4"])), Ok(4));
        assert_eq!(parse_count(&args(&["-2"])), Ok(-2));
        assert_eq!(parse_count(&args(&["0"])), Ok(0));
    }

    #[test]
    fn parse_count_rejects_non_integers() {
        for bad in ["two", "1.5", "", "0x10", "99999999999999999999"] {
            assert_eq!(parse_count(&args(&[bad])), Err(FortuneError::ArgumentType), "{bad}");
        }
    }

    #[test]
    fn announcement_format() {
        assert_eq!(announcement("alice", 3), "alice has decided to send you 3 fortunes:");
        assert_eq!(announcement("bob", -1), "bob has decided to send you -1 fortunes:");
    }

    #[test]
    fn invalid_input_sends_nothing() {
        let svc = service(1);
        let mut host = MemoryHost::new("alice");

        assert_eq!(svc.handle(&mut host, &args(&["two"])), Err(FortuneError::ArgumentType));
        assert!(host.sent().is_empty());
    }

    #[test]
    fn sends_announcement_then_fortunes() {
        let svc = service(9);
        let mut host = MemoryHost::new("alice");

        assert_eq!(svc.handle(&mut host, &args(&["3"])), Ok(3));

        let sent = host.sent();
        assert_eq!(sent.len(), 4);
        assert_eq!(sent[0], "alice has decided to send you 3 fortunes:");
        assert!(sent[1..].iter().all(|m| svc.table().contains(m)));
    }

    #[test]
    fn negative_count_sends_announcement_only() {
        let svc = service(2);
        let mut host = MemoryHost::new("alice");

        assert_eq!(svc.handle(&mut host, &args(&["-5"])), Ok(0));
        assert_eq!(host.sent(), vec!["alice has decided to send you -5 fortunes:"]);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut expected_rng = StdRng::seed_from_u64(7);
        let table = FortuneTable::default();
        let expected: Vec<&str> = (0..5).map(|_| table.pick(&mut expected_rng)).collect();

        let svc = service(7);
        let mut host = MemoryHost::new("carol");
        svc.send_fortunes(&mut host, 5);

        assert_eq!(host.sent()[1..], expected[..]);
    }
}
