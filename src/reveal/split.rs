//! Text segmentation into characters, words and lines.
//!
//! Lines come from explicit newlines and, when `max_line_chars` is set, greedy word wrapping.
//! Whitespace separates words and never becomes a character segment.

/// Which segmentation a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Char,
    Word,
    Line,
}

/// One split unit.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
    /// Position among segments of the same kind.
    pub index: usize,
    /// Line the segment sits on.
    pub line: usize,
}

/// What to split into and how lines wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SplitConfig {
    pub chars: bool,
    pub words: bool,
    pub lines: bool,
    /// Wrap width in characters; `None` only breaks on newlines.
    pub max_line_chars: Option<usize>,
    /// Re-split when the wrap width changes.
    pub auto_split: bool,
    /// Clip each line to its own box so vertical offsets slide out of view.
    pub mask_lines: bool,
}

impl SplitConfig {
    pub fn chars() -> Self {
        Self {
            chars: true,
            ..Self::default()
        }
    }

    pub fn words_and_lines(max_line_chars: Option<usize>) -> Self {
        Self {
            words: true,
            lines: true,
            max_line_chars,
            ..Self::default()
        }
    }
}

/// A segmented piece of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitText {
    text: String,
    config: SplitConfig,
    chars: Vec<Segment>,
    words: Vec<Segment>,
    lines: Vec<Segment>,
}

impl SplitText {
    pub fn new(text: impl Into<String>, config: SplitConfig) -> Self {
        let mut split = Self {
            text: text.into(),
            config,
            chars: Vec::new(),
            words: Vec::new(),
            lines: Vec::new(),
        };
        split.split();
        split
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn chars(&self) -> &[Segment] {
        &self.chars
    }

    pub fn words(&self) -> &[Segment] {
        &self.words
    }

    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    pub fn segments(&self, kind: SegmentKind) -> &[Segment] {
        match kind {
            SegmentKind::Char => &self.chars,
            SegmentKind::Word => &self.words,
            SegmentKind::Line => &self.lines,
        }
    }

    /// Change the wrap width. Returns `true` when the text was re-split, which only happens with
    /// `auto_split` and an actual change in width.
    pub fn resize(&mut self, max_line_chars: Option<usize>) -> bool {
        if !self.config.auto_split || self.config.max_line_chars == max_line_chars {
            return false;
        }
        self.config.max_line_chars = max_line_chars;
        let before = self.lines.len();
        self.split();
        tracing::debug!(
            ?max_line_chars,
            lines_before = before,
            lines_after = self.lines.len(),
            "re-split text"
        );
        true
    }

    fn split(&mut self) {
        self.chars.clear();
        self.words.clear();
        self.lines.clear();

        for (line_idx, line_words) in wrap_lines(&self.text, self.config.max_line_chars)
            .into_iter()
            .enumerate()
        {
            if self.config.lines {
                self.lines.push(Segment {
                    kind: SegmentKind::Line,
                    text: line_words.join(" "),
                    index: self.lines.len(),
                    line: line_idx,
                });
            }
            for word in line_words {
                if self.config.words {
                    self.words.push(Segment {
                        kind: SegmentKind::Word,
                        text: word.to_string(),
                        index: self.words.len(),
                        line: line_idx,
                    });
                }
                if self.config.chars {
                    for c in word.chars() {
                        self.chars.push(Segment {
                            kind: SegmentKind::Char,
                            text: c.to_string(),
                            index: self.chars.len(),
                            line: line_idx,
                        });
                    }
                }
            }
        }
    }
}

/// Break `text` into lines of words. Blank lines are dropped.
fn wrap_lines(text: &str, max_line_chars: Option<usize>) -> Vec<Vec<&str>> {
    let mut out = Vec::new();
    for raw in text.lines() {
        let mut line: Vec<&str> = Vec::new();
        let mut width = 0usize;
        for word in raw.split_whitespace() {
            let w = word.chars().count();
            let needed = if line.is_empty() { w } else { width + 1 + w };
            if let Some(max) = max_line_chars
                && !line.is_empty()
                && needed > max
            {
                out.push(std::mem::take(&mut line));
                width = w;
            } else {
                width = needed;
            }
            line.push(word);
        }
        if !line.is_empty() {
            out.push(line);
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/split.rs"]
mod tests;
