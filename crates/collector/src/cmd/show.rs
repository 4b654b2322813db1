use anyhow::{Context, Result};

use lyricline_core::{CollectionKind, CollectionStore, Config, RawPost, SqliteStore};

pub fn run(config: &Config, kind: CollectionKind, limit: Option<usize>) -> Result<()> {
    let store = SqliteStore::new(&config.store.path).context("Failed to open collection store")?;
    let items = store
        .members(kind)
        .with_context(|| format!("Failed to read {} collection", kind))?;

    if items.is_empty() {
        println!("The {} collection is empty", kind);
        return Ok(());
    }

    let shown = limit.unwrap_or(items.len());
    for (i, payload) in items.iter().take(shown).enumerate() {
        println!("{}", format_item(i + 1, payload));
    }
    Ok(())
}

/// One line per item: `ordinal. text (permalink)`.
fn format_item(ordinal: usize, payload: &str) -> String {
    let post = match RawPost::from_payload(payload) {
        Ok(post) => post,
        Err(e) => return format!("{}. <unreadable item: {}>", ordinal, e),
    };
    let text = post.body().unwrap_or_default().replace('\n', " ");
    match post.permalink() {
        Ok(link) => format!("{}. {} ({})", ordinal, text, link),
        Err(_) => format!("{}. {}", ordinal, text),
    }
}
