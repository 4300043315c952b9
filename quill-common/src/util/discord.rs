use crate::util::regex;

/// Extracts the channel ID from a channel mention (`<#id>`), or parses a bare
/// snowflake.
pub fn channel_mention_to_id(word: &str) -> Option<u64> {
    let capture = regex::CHANNEL_MENTION.captures(word)?;
    capture.get(1)?.as_str().parse().ok()
}
