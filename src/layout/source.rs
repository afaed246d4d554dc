/// A lazy view over the unconsumed remainder of a block of text, yielding
/// whitespace-delimited words one at a time. Peeling a word off never
/// mutates anything: [LineSource::next_word] hands back a fresh source
/// positioned after the word, and the original keeps its place, so a
/// wrapping pass can re-measure from any point it has already seen.
#[derive(Debug, Clone, Copy)]
pub struct LineSource<'a> {
    remaining: &'a str,
}

impl<'a> LineSource<'a> {
    pub fn new(text: &'a str) -> LineSource<'a> {
        LineSource { remaining: text }
    }

    /// The unconsumed text, including any leading whitespace
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// true when no words remain in this source
    pub fn is_exhausted(&self) -> bool {
        self.remaining.chars().all(char::is_whitespace)
    }

    /// The next word (maximal run of non-whitespace characters, leading
    /// whitespace skipped) together with the source positioned immediately
    /// after it, or [None] when the source is exhausted
    pub fn next_word(&self) -> Option<(&'a str, LineSource<'a>)> {
        let trimmed = self.remaining.trim_start();
        if trimmed.is_empty() {
            return None;
        }
        let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
        let (word, rest) = trimmed.split_at(end);
        Some((word, LineSource { remaining: rest }))
    }
}

/// Line sources compare by their remaining text, not by where in which
/// buffer that text lives
impl PartialEq for LineSource<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
    }
}

impl Eq for LineSource<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_words_in_order() {
        let source = LineSource::new("  foo \t bar\nbaz  ");

        let (word, rest) = source.next_word().unwrap();
        assert_eq!(word, "foo");
        let (word, rest) = rest.next_word().unwrap();
        assert_eq!(word, "bar");
        let (word, rest) = rest.next_word().unwrap();
        assert_eq!(word, "baz");

        assert!(rest.next_word().is_none());
        assert!(rest.is_exhausted());
    }

    #[test]
    fn taking_a_word_leaves_the_original_in_place() {
        let source = LineSource::new("alpha beta");
        let (word, _) = source.next_word().unwrap();
        assert_eq!(word, "alpha");
        assert_eq!(source.remaining(), "alpha beta");

        // the same call from the same source is idempotent
        let (again, _) = source.next_word().unwrap();
        assert_eq!(again, "alpha");
    }

    #[test]
    fn compares_by_remaining_text() {
        assert_eq!(LineSource::new("foo bar"), LineSource::new("foo bar"));
        assert_ne!(LineSource::new("foo"), LineSource::new("bar"));

        let (_, rest) = LineSource::new("foo bar").next_word().unwrap();
        assert_eq!(rest, LineSource::new(" bar"));
    }

    #[test]
    fn whitespace_only_sources_are_exhausted() {
        assert!(LineSource::new("").is_exhausted());
        assert!(LineSource::new(" \t\r\n").is_exhausted());
        assert!(!LineSource::new(" a ").is_exhausted());
    }
}
