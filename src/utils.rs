use crate::generator::{ALPHABET, ID_LENGTH};

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

// checking validity of the long url
pub fn valid_url(url: &str) -> bool {
    // stored verbatim: no input the parser would trim or give an invented host
    if url != url.trim() || url.chars().any(|c| c.is_ascii_control()) {
        return false;
    }
    match url::Url::parse(url) {
        Ok(parsed) => {
            ALLOWED_SCHEMES.contains(&parsed.scheme())
                && url
                    .get(parsed.scheme().len()..)
                    .is_some_and(|rest| rest.starts_with("://"))
                && parsed.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

// short codes are fixed length and drawn from the id alphabet
pub fn valid_short_code(short_code: &str) -> bool {
    short_code.len() == ID_LENGTH && short_code.bytes().all(|b| ALPHABET.contains(&b))
}
