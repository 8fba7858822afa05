//! Query-word highlighting for result titles and snippets.
//!
//! Output is a flat list of [`Fragment`]s rather than markup: renderers turn
//! each fragment into a text node, so user-typed queries never reach the page
//! as raw HTML.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use tracing::warn;

/// Compiled size cap for a single word pattern. Words that exceed it are skipped.
const MAX_PATTERN_SIZE: usize = 1 << 16;

/// A run of text with the number of highlight wraps around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    /// 0 = plain. Each query word that matches inside an already highlighted
    /// run wraps it once more.
    pub depth: u32,
}

impl Fragment {
    fn new(text: &str, depth: u32) -> Self {
        Self { text: text.to_string(), depth }
    }

    pub fn is_highlighted(&self) -> bool {
        self.depth > 0
    }
}

/// Display text split into plain and highlighted fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    fragments: Vec<Fragment>,
}

impl Highlighted {
    /// Unhighlighted text.
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        Self { fragments: vec![Fragment::new(text, 0)] }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The original text with all highlighting dropped.
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    pub fn has_highlights(&self) -> bool {
        self.fragments.iter().any(Fragment::is_highlighted)
    }

    /// Concatenate fragments, wrapping each highlighted one `depth` times in
    /// `open`/`close`. Used by text renderers (terminal output, tests).
    pub fn to_marked(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for f in &self.fragments {
            let d = f.depth as usize;
            out.push_str(&open.repeat(d));
            out.push_str(&f.text);
            out.push_str(&close.repeat(d));
        }
        out
    }

    /// Wrap every match of `re` inside each fragment one level deeper.
    fn apply(&mut self, re: &Regex) {
        let mut next = Vec::with_capacity(self.fragments.len());
        for frag in self.fragments.drain(..) {
            let mut last = 0;
            for m in re.find_iter(&frag.text) {
                if m.start() > last {
                    next.push(Fragment::new(&frag.text[last..m.start()], frag.depth));
                }
                next.push(Fragment::new(m.as_str(), frag.depth + 1));
                last = m.end();
            }
            if last == 0 {
                next.push(frag);
            } else if last < frag.text.len() {
                next.push(Fragment::new(&frag.text[last..], frag.depth));
            }
        }
        self.fragments = next;
    }
}

/// Lowercased whitespace-separated words of a query.
pub fn query_words(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Literal, case-insensitive pattern for one query word.
fn word_pattern(word: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .size_limit(MAX_PATTERN_SIZE)
        .build()
}

/// Highlight every case-insensitive occurrence of each query word in `text`.
///
/// Words are applied in query order with no de-overlap pass: a later word
/// matching inside an earlier highlight nests one level deeper. A word whose
/// pattern cannot be built is logged and skipped.
pub fn highlight(text: &str, query: &str) -> Highlighted {
    let mut out = Highlighted::plain(text);
    if text.is_empty() || query.trim().is_empty() {
        return out;
    }

    for word in query_words(query) {
        match word_pattern(&word) {
            Ok(re) => out.apply(&re),
            Err(e) => {
                warn!(word_len = word.len(), error = %e, "Skipping highlight word");
            }
        }
    }
    out
}
