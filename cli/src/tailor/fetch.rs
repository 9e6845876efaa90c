//! Job listing download and text extraction.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use reqwest::Client;

use super::error::TailorError;

/// Desktop browser User-Agent; some job boards reject unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

static HIDDEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script\s*>|<style\b.*?</style\s*>|<!--.*?-->")
        .expect("invalid hidden element regex")
});

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("invalid tag regex"));

static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]{2,8});")
        .expect("invalid entity regex")
});

/// Download a job listing page and return its visible text.
pub async fn fetch_job_details(client: &Client, url: &str) -> Result<String, TailorError> {
    log::debug!("GET {}", url);
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await?;

    let status = response.status();
    if status.as_u16() != 200 {
        return Err(TailorError::FetchStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let html = response.text().await?;
    Ok(extract_text(&html))
}

/// Visible text of an HTML page, one trimmed non-empty line per text run.
///
/// Scripts, styles and comments are dropped; every tag acts as a line break.
pub fn extract_text(html: &str) -> String {
    let visible = HIDDEN_PATTERN.replace_all(html, "");
    let text = TAG_PATTERN.replace_all(&visible, "\n");
    let text = decode_entities(&text);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode numeric references and the common named entities.
///
/// Unknown names are left as written.
pub fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            decode_entity(entity).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(entity: &str) -> Option<String> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse().ok()?,
        };
        return char::from_u32(code).map(String::from);
    }

    let c = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '–',
        "mdash" => '—',
        "hellip" => '…',
        "rsquo" => '’',
        "lsquo" => '‘',
        "rdquo" => '”',
        "ldquo" => '“',
        "bull" => '•',
        "middot" => '·',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        _ => return None,
    };
    Some(c.to_string())
}
