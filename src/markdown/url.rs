//! Bare URL detection.
//!
//! A URL is `http://` or `https://` followed by one or more non-whitespace
//! characters. The same scan feeds link nodes and reply embeds.

/// Match a URL starting exactly at `start`, returning its end offset.
pub(crate) fn url_end(text: &str, start: usize) -> Option<usize> {
    let rest = &text[start..];
    let scheme_len = if rest.starts_with("https://") {
        "https://".len()
    } else if rest.starts_with("http://") {
        "http://".len()
    } else {
        return None;
    };

    let tail = &rest[scheme_len..];
    let tail_len = tail.find(char::is_whitespace).unwrap_or(tail.len());
    if tail_len == 0 {
        return None;
    }

    Some(start + scheme_len + tail_len)
}

/// Find every URL in `text`, left to right, without overlap.
pub fn find_urls(text: &str) -> Vec<&str> {
    let mut urls = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find("http") {
        let start = pos + offset;
        match url_end(text, start) {
            Some(end) => {
                urls.push(&text[start..end]);
                pos = end;
            }
            None => pos = start + "http".len(),
        }
    }

    urls
}
