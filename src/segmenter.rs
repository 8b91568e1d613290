//! Splits a document into sentence spans using literal delimiter strings.
//!
//! Spans cover the whole document with no gaps and no overlaps, so
//! concatenating raw spans in order reproduces the input exactly. The
//! delimiter text stays attached to the preceding sentence.

/// A contiguous sentence span within the original document.
///
/// `start..end` are byte offsets of the raw span; `text` is the same span
/// trimmed of surrounding whitespace, which is what gets embedded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Sentence<'a> {
    /// The untrimmed span, sliced from the original document.
    pub fn raw(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.end]
    }
}

/// Lazy, finite, restartable iterator over the sentences of `doc`.
///
/// Clone it to rescan from the start.
#[derive(Clone, Debug)]
pub struct Sentences<'a> {
    doc: &'a str,
    delimiters: &'a [String],
    pos: usize,
}

pub fn sentences<'a>(doc: &'a str, delimiters: &'a [String]) -> Sentences<'a> {
    Sentences {
        doc,
        delimiters,
        pos: 0,
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = Sentence<'a>;

    fn next(&mut self) -> Option<Sentence<'a>> {
        while self.pos < self.doc.len() {
            let start = self.pos;
            let mut cursor = start;
            let mut end = self.doc.len();

            while cursor < self.doc.len() {
                if let Some(len) = match_at(self.doc, cursor, self.delimiters) {
                    let mut stop = cursor + len;
                    // Immediately consecutive delimiters share one boundary.
                    while let Some(more) = match_at(self.doc, stop, self.delimiters) {
                        stop += more;
                    }
                    // A whitespace-only tail belongs to the final sentence,
                    // keeping spans gap-free.
                    if self.doc[stop..].chars().all(char::is_whitespace) {
                        stop = self.doc.len();
                    }
                    end = stop;
                    break;
                }
                cursor += self.doc[cursor..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
            }

            self.pos = end;
            let text = self.doc[start..end].trim();
            if !text.is_empty() {
                return Some(Sentence { text, start, end });
            }
        }
        None
    }
}

/// Returns the byte length of the first delimiter matching at `pos`, if any.
/// Earlier entries in `delimiters` win ties.
fn match_at(doc: &str, pos: usize, delimiters: &[String]) -> Option<usize> {
    let rest = &doc[pos..];
    delimiters
        .iter()
        .find(|delimiter| !delimiter.is_empty() && rest.starts_with(delimiter.as_str()))
        .map(|delimiter| delimiter.len())
}
