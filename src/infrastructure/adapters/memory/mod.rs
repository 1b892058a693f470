//! In-memory host for tests and dry runs

use serde::Serialize;

use crate::domain::traits::HostApi;

/// Something a plugin asked the host to do
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "kebab-case")]
pub enum HostEvent {
    Display(String),
    Send(String),
}

/// Host that records every call in order instead of delivering it
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    nickname: String,
    events: Vec<HostEvent>,
}

impl MemoryHost {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Messages shown to the local user
    pub fn displayed(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Display(m) => Some(m.as_str()),
                HostEvent::Send(_) => None,
            })
            .collect()
    }

    /// Messages delivered to the contact
    pub fn sent(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Send(m) => Some(m.as_str()),
                HostEvent::Display(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl HostApi for MemoryHost {
    fn display(&mut self, message: &str) {
        self.events.push(HostEvent::Display(message.to_string()));
    }

    fn nickname(&self) -> String {
        self.nickname.clone()
    }

    fn send(&mut self, message: &str) {
        self.events.push(HostEvent::Send(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_call_order() {
        let mut host = MemoryHost::new("dana");
        host.send("one");
        host.display("note");
        host.send("two");

        assert_eq!(
            host.events(),
            &[
                HostEvent::Send("one".to_string()),
                HostEvent::Display("note".to_string()),
                HostEvent::Send("two".to_string()),
            ]
        );
        assert_eq!(host.sent(), vec!["one", "two"]);
        assert_eq!(host.displayed(), vec!["note"]);
        assert_eq!(host.nickname(), "dana");

        host.clear();
        assert!(host.events().is_empty());
    }

    #[test]
    fn events_serialize_tagged() {
        let json = serde_json::to_string(&HostEvent::Send("hi".to_string())).unwrap();
        assert_eq!(json, r#"{"kind":"send","message":"hi"}"#);
    }
}
