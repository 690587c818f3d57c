//! Seed data for the tag repository.
//!
//! The built-in tags mirror what a fresh server ships with. Additional tags
//! can be supplied in a TOML file:
//!
//! ```toml
//! [[tags]]
//! name = "rules"
//! content = "Be **nice**."
//! author = "Admin"
//! ```

use std::path::Path;

use serde::Deserialize;

use super::repository::InMemoryTagRepository;
use super::types::Tag;
use crate::config::TagsConfig;
use crate::{Result, TagChatError};

const ROCKSTAR_FIX: &str = "**O jogo está pedindo para entrar no _Launcher da RockStart_, o que eu faço⁉️**

1. Coloque a pasta do jogo nas exclusões do antivírus
2. Acesse o site: https://generator.ryuu.lol/fixes
3. Busque o *nome do jogo* e baixe o fix.
4. Extraia os arquivos para a pasta do jogo.
5. Inicie o jogo pelo `fix dentro da pasta do jogo`.

**Não consigo baixar, o navegador disse é perigoso...**
* É normal, o fix contém arquivos para enganar o jogo.
* Apenas use outro navegador para baixar.

**O fix acima não serviu, tem outra opção?**
* Sim, baixe o fix dessa página:
* https://github.com/onajlikezz/Nightlight-Game-Launcher
* Inicie o jogo pelo `Nightlight Game Launcher`";

const HELLO: &str = "Welcome to the server! 👋\nUse `/tags` to see available commands.";

/// Built-in tags loaded on startup unless disabled.
pub fn default_tags() -> Vec<Tag> {
    vec![
        Tag::new("rockstar-fix", ROCKSTAR_FIX, "Admin"),
        Tag::new("hello", HELLO, "System"),
    ]
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    tags: Vec<SeedTag>,
}

#[derive(Debug, Deserialize)]
struct SeedTag {
    name: String,
    content: String,
    #[serde(default = "default_seed_author")]
    author: String,
}

fn default_seed_author() -> String {
    "System".to_string()
}

/// Parse seed tags from a TOML string.
///
/// Every entry is stamped with the current time. Empty names and duplicate
/// names are rejected.
pub fn parse_seed(s: &str) -> Result<Vec<Tag>> {
    let file: SeedFile =
        toml::from_str(s).map_err(|e| TagChatError::Seed(format!("parse error: {e}")))?;

    let mut tags: Vec<Tag> = Vec::with_capacity(file.tags.len());
    for entry in file.tags {
        let name = entry.name.trim();
        if name.is_empty() {
            return Err(TagChatError::Seed("tag name must not be empty".to_string()));
        }
        if tags.iter().any(|t| t.name == name) {
            return Err(TagChatError::Seed(format!("duplicate tag `{name}`")));
        }
        tags.push(Tag::new(name, entry.content, entry.author));
    }

    Ok(tags)
}

/// Load seed tags from a TOML file.
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Vec<Tag>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    parse_seed(&content)
}

/// Build the startup repository from configuration.
///
/// Built-in tags come first, then the seed file. A seed tag whose name is
/// already taken is skipped.
pub fn seed_repository(config: &TagsConfig) -> Result<InMemoryTagRepository> {
    let mut tags = if config.include_defaults {
        default_tags()
    } else {
        Vec::new()
    };
    if let Some(path) = &config.seed_file {
        tags.extend(load_seed_file(path)?);
    }
    Ok(InMemoryTagRepository::with_tags(tags))
}
