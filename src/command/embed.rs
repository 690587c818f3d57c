//! Embeds attached to bot replies.
//!
//! An embed is a structured side payload (title, description, link, image)
//! that travels next to the reply text. Retrieved tags get a GitHub embed when
//! their content links to `github.com`.

use serde::Serialize;

use crate::markdown::find_urls;

/// Sidebar color used for GitHub embeds.
pub const GITHUB_EMBED_COLOR: &str = "#1e2327";

/// Placeholder preview image used for generated embeds.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/400/225";

const GITHUB_HOST: &str = "github.com";

/// Embed footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedFooter {
    /// Footer text.
    pub text: String,
    /// Optional footer icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// Structured content attached to a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

/// Build the GitHub embed for a tag, if its content links to GitHub.
///
/// Uses the first GitHub URL in the content. The result depends only on the
/// tag name and content.
pub fn github_embed(tag_name: &str, content: &str) -> Option<Embed> {
    let url = find_urls(content)
        .into_iter()
        .find(|u| u.contains(GITHUB_HOST))?;

    Some(Embed {
        title: Some(format!("GitHub - {tag_name} project")),
        description: Some(format!(
            "This program is related to {tag_name}. Contribute to development by creating an account on GitHub."
        )),
        url: Some(url.to_string()),
        color: Some(GITHUB_EMBED_COLOR.to_string()),
        image: Some(PLACEHOLDER_IMAGE.to_string()),
        footer: None,
    })
}
