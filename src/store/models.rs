/// One shortened link as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub url_id: String,
    pub url: String,
}
