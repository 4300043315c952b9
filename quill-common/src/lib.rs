pub mod util;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_mention_parses() {
        assert_eq!(util::discord::channel_mention_to_id("<#123456789012345678>"), Some(123456789012345678));
        assert_eq!(util::discord::channel_mention_to_id("123456789012345678"), Some(123456789012345678));
        assert_eq!(util::discord::channel_mention_to_id("<#nope>"), None);
    }

    #[test]
    fn tracing_init_can_be_called_repeatedly() {
        util::tracing_init();
        util::tracing_init();
    }
}
