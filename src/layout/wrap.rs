use crate::font::TextFace;

/// One visual line of output: words joined by single spaces
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct LayoutLine {
    text: String,
    chars: usize,
}

impl LayoutLine {
    /// Start a line holding a single word
    fn with_word(word: &str) -> LayoutLine {
        LayoutLine {
            text: word.to_string(),
            chars: word.chars().count(),
        }
    }

    fn push_word(&mut self, word: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
            self.chars += 1;
        }
        self.text.push_str(word);
        self.chars += word.chars().count();
    }

    /// The line as it will be drawn
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the line in characters (not bytes), separators included
    pub fn char_len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The words on this line, in order
    pub fn words(&self) -> std::str::SplitWhitespace<'_> {
        self.text.split_whitespace()
    }
}

impl std::fmt::Display for LayoutLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// How many characters fit on a line `max_width` pixels wide, estimating
/// every character to be as wide as the face's x-height (rounded to the
/// nearest pixel). A face with no x-height fits nothing.
pub fn chars_per_line<F: TextFace + ?Sized>(face: &F, max_width: u32) -> usize {
    let x_height = face.x_height().round().max(0.0) as u32;
    max_width.checked_div(x_height).unwrap_or(0) as usize
}

/// Greedily packs the words of `text` into lines no wider than `max_width`
/// pixels.
///
/// Width is estimated from character counts rather than glyph advances (see
/// [chars_per_line]): a word is moved to a new line when the current line's
/// length plus the word's length plus one exceeds the estimate, and the
/// current line is emitted as it stands. Words are never split, so a word
/// longer than the estimate ends up alone on its own line; if it is the first
/// word, the still-empty first line is emitted ahead of it.
///
/// Whitespace only separates words; runs of it collapse and leading or
/// trailing whitespace is dropped. The result always has at least one line,
/// which is empty if `text` has no words.
pub fn wrap<F: TextFace + ?Sized>(text: &str, face: &F, max_width: u32) -> Vec<LayoutLine> {
    let threshold = chars_per_line(face, max_width);

    let mut lines: Vec<LayoutLine> = Vec::new();
    let mut line = LayoutLine::default();
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line.char_len() + word_len + 1 > threshold {
            lines.push(line);
            line = LayoutLine::with_word(word);
        } else {
            line.push_word(word);
        }
    }
    lines.push(line);

    log::debug!(
        "wrapped {} characters into {} line(s) of at most {} characters",
        text.chars().count(),
        lines.len(),
        threshold
    );
    lines
}
