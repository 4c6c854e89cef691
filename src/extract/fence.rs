//! Fenced code block scanning.
//!
//! A block is "```" + optional language tag (word characters) + content +
//! "```". Content is yielded trimmed, in document order. An unclosed fence
//! ends the scan.

const FENCE: &str = "```";

pub fn fenced_blocks(text: &str) -> FencedBlocks<'_> {
    FencedBlocks { rest: text }
}

pub struct FencedBlocks<'a> {
    rest: &'a str,
}

impl<'a> Iterator for FencedBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let Some(open) = self.rest.find(FENCE) else {
            self.rest = "";
            return None;
        };
        let after = &self.rest[open + FENCE.len()..];

        let tag_len = after
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        let body = &after[tag_len..];

        let Some(close) = body.find(FENCE) else {
            self.rest = "";
            return None;
        };
        self.rest = &body[close + FENCE.len()..];
        Some(body[..close].trim())
    }
}
