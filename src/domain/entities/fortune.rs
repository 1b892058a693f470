use rand::Rng;

/// Built-in quotations
pub const FORTUNES: &[&str] = &[
    "A bug in the code is worth two in the documentation.",
    "A bug in the hand is better than one as yet undetected.",
    "\"A debugged program is one for which you have not yet found the \
     conditions that make it fail.\" -- Jerry Ogdin",
];

/// Fixed, non-empty list of fortunes
#[derive(Debug, Clone, Copy)]
pub struct FortuneTable {
    entries: &'static [&'static str],
}

impl FortuneTable {
    /// Returns `None` for an empty list
    pub fn new(entries: &'static [&'static str]) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries })
        }
    }

    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| *e == text)
    }

    /// Uniform pick, with replacement
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'static str {
        self.entries[rng.gen_range(0..self.entries.len())]
    }
}

impl Default for FortuneTable {
    fn default() -> Self {
        Self { entries: FORTUNES }
    }
}
