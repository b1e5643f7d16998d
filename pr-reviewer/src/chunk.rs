//! Line-bounded diff chunking.
//!
//! Splits a unified diff into chunks that stay under a byte budget so a single
//! provider call never carries an oversized prompt. Boundaries land only on
//! line breaks; chunks are contiguous slices of the input, so joining them
//! with `\n` reconstructs the original text exactly.

/// Default chunk budget in bytes.
pub const DEFAULT_CHUNK_BYTES: usize = 2000;

/// One chunk of diff text, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffChunk<'a> {
    /// 0-based index in the chunk sequence.
    pub index: usize,
    /// The chunk's lines as a contiguous slice of the source diff.
    pub text: &'a str,
}

/// Lazily splits `text` into [`DiffChunk`]s of rendered size ≤ `max_bytes`.
///
/// Rendered size counts each line's length plus one separator byte. Greedy
/// policy: lines accumulate into the current chunk until adding the next line
/// would exceed the budget, at which point the chunk is sealed and the next
/// one starts with that line. A single line longer than the budget forms its
/// own oversized chunk.
///
/// If the whole text already fits the budget the iterator yields exactly one
/// chunk equal to the input, with no splitting overhead.
pub fn chunk_diff(text: &str, max_bytes: usize) -> DiffChunks<'_> {
    DiffChunks {
        rest: Some(text),
        max_bytes,
        whole: text.len() <= max_bytes,
        next_index: 0,
    }
}

/// Iterator produced by [`chunk_diff`].
#[derive(Debug, Clone)]
pub struct DiffChunks<'a> {
    rest: Option<&'a str>,
    max_bytes: usize,
    whole: bool,
    next_index: usize,
}

impl<'a> Iterator for DiffChunks<'a> {
    type Item = DiffChunk<'a>;

    fn next(&mut self) -> Option<DiffChunk<'a>> {
        let rest = self.rest.take()?;

        let index = self.next_index;
        self.next_index += 1;

        if self.whole {
            return Some(DiffChunk { index, text: rest });
        }

        // consumed: bytes of `rest` covered so far, excluding the separator
        // that follows the last accepted line.
        let mut consumed = 0usize;
        let mut rendered = 0usize;
        let mut first = true;

        for line in rest.split('\n') {
            let line_size = line.len() + 1;
            if !first && rendered + line_size > self.max_bytes {
                let chunk = &rest[..consumed];
                self.rest = Some(&rest[consumed + 1..]);
                return Some(DiffChunk { index, text: chunk });
            }
            consumed = if first {
                line.len()
            } else {
                consumed + 1 + line.len()
            };
            rendered += line_size;
            first = false;
        }

        Some(DiffChunk { index, text: rest })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str, max: usize) -> Vec<&str> {
        chunk_diff(text, max).map(|c| c.text).collect()
    }

    #[test]
    fn small_input_is_a_single_chunk() {
        let diff = "diff --git a/x b/x\n+added line\n-removed line";
        let chunks = collect(diff, DEFAULT_CHUNK_BYTES);
        assert_eq!(chunks, vec![diff]);
    }

    #[test]
    fn input_exactly_at_budget_is_not_split() {
        let diff = "aa\nbb\ncc"; // 8 bytes
        assert_eq!(collect(diff, 8), vec![diff]);
    }

    #[test]
    fn joining_chunks_reconstructs_the_input() {
        let diff: String = (0..50)
            .map(|i| format!("+line number {i} with some payload"))
            .collect::<Vec<_>>()
            .join("\n");
        let chunks = collect(&diff, 100);
        assert!(chunks.len() > 1);
        assert_eq!(chunks.join("\n"), diff);
    }

    #[test]
    fn every_chunk_respects_the_budget() {
        let diff: String = (0..40)
            .map(|i| format!("context line {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        for chunk in chunk_diff(&diff, 64) {
            let rendered: usize = chunk.text.split('\n').map(|l| l.len() + 1).sum();
            assert!(rendered <= 64, "chunk {} too large: {rendered}", chunk.index);
        }
    }

    #[test]
    fn oversized_line_forms_its_own_chunk() {
        let long = "x".repeat(64);
        let diff = format!("short\n{long}\ntail");
        let chunks = collect(&diff, 32);
        assert_eq!(chunks, vec!["short", long.as_str(), "tail"]);
    }

    #[test]
    fn indices_are_sequential() {
        let diff: String = (0..20).map(|_| "0123456789").collect::<Vec<_>>().join("\n");
        let indices: Vec<usize> = chunk_diff(&diff, 32).map(|c| c.index).collect();
        assert_eq!(indices, (0..indices.len()).collect::<Vec<_>>());
    }
}
