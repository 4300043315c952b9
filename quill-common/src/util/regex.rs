use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref CHANNEL_MENTION: Regex = Regex::new(r"^(?:<#)?(\d{16,20})>?$").unwrap();
}
