use std::fmt::Display;

/// A span of a line recognised by a rule.
///
/// `offset` and `length` are byte positions into the scanned line. The token
/// remembers the scan state that was active when it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K, S> {
    pub kind: K,
    pub offset: usize,
    pub length: usize,
    pub text: String,
    pub state: S,
}

impl<K, S> Token<K, S> {
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether `offset` falls inside this token. With `end_inclusive` the
    /// position directly after the last character counts as well, which is
    /// where an editor caret sits while the token is being typed.
    pub fn contains(&self, offset: usize, end_inclusive: bool) -> bool {
        self.offset <= offset && offset < self.end() + usize::from(end_inclusive)
    }
}

impl<K: Display, S> Display for Token<K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} {} {:?}", self.offset, self.end(), self.kind, self.text)
    }
}
