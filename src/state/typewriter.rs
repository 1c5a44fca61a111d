/// Delay between revealed characters.
pub const TYPEWRITER_INTERVAL_MS: u64 = 45;

/// Reveals `source` one character per tick. Once the whole string is shown it
/// stays shown; there is no restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter<'a> {
    source: &'a str,
    // byte offset, always on a char boundary
    cursor: usize,
}

impl<'a> Typewriter<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Reveals the next character. Returns false if there was nothing left to reveal.
    pub fn tick(&mut self) -> bool {
        match self.source[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn visible(&self) -> &'a str {
        &self.source[..self.cursor]
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_prefixes() {
        let text = "Homelab";
        let mut tw = Typewriter::new(text);
        assert_eq!(tw.visible(), "");
        for n in 1..text.len() {
            assert!(tw.tick());
            assert_eq!(tw.visible(), &text[..n]);
            assert!(!tw.is_complete());
        }
        assert!(tw.tick());
        assert_eq!(tw.visible(), text);
        assert!(tw.is_complete());
    }

    #[test]
    fn test_stops_when_complete() {
        let mut tw = Typewriter::new("ab");
        tw.tick();
        tw.tick();
        assert!(!tw.tick());
        assert!(!tw.tick());
        assert_eq!(tw.visible(), "ab");
    }

    #[test]
    fn test_multibyte_characters() {
        let text = "Engineer • Tinkerer";
        let mut tw = Typewriter::new(text);
        let chars = text.chars().count();
        for n in 1..=chars {
            tw.tick();
            let expected = text.chars().take(n).collect::<String>();
            assert_eq!(tw.visible(), expected);
        }
        assert!(tw.is_complete());
        assert_eq!(tw.visible(), text);
    }

    #[test]
    fn test_empty_source_is_complete() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_complete());
        assert!(!tw.tick());
    }
}
