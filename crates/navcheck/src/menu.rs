// File: src/menu.rs
// Purpose: Navigation menu model, YAML loading and depth-first flattening

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::CheckError;

/// A node of the navigation tree as written in the site configuration
///
/// Children may be listed under either `children` or `submenu`; both lists are read,
/// in that order, through [`MenuEntry::child_entries`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MenuEntry {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "scalar_string")]
    pub text: Option<String>,

    /// Non-string hrefs are dropped, which exempts the entry from checking
    #[serde(default, deserialize_with = "string_only")]
    pub href: Option<String>,

    #[serde(default)]
    pub children: Option<Vec<MenuEntry>>,

    #[serde(default)]
    pub submenu: Option<Vec<MenuEntry>>,
}

/// One menu node without its nested children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatEntry {
    pub id: Option<String>,
    pub text: Option<String>,
    pub href: Option<String>,
}

impl MenuEntry {
    /// Children source: `children` followed by `submenu`
    pub fn child_entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.children
            .iter()
            .flatten()
            .chain(self.submenu.iter().flatten())
    }

    fn to_flat(&self) -> FlatEntry {
        FlatEntry {
            id: self.id.clone(),
            text: self.text.clone(),
            href: self.href.clone(),
        }
    }
}

impl FlatEntry {
    /// Name shown in diagnostics: text, then id, then a placeholder
    pub fn label(&self) -> &str {
        self.text
            .as_deref()
            .or(self.id.as_deref())
            .unwrap_or("(unnamed)")
    }
}

/// Flattens a menu tree in depth-first pre-order
///
/// Every node appears exactly once, before its own descendants, and a node's whole
/// subtree comes before its next sibling.
///
/// ```
/// use navcheck::{flatten_menu, MenuEntry};
///
/// let menu = vec![MenuEntry {
///     text: Some("Blog".into()),
///     children: Some(vec![MenuEntry { text: Some("Post".into()), ..Default::default() }]),
///     ..Default::default()
/// }];
///
/// let labels: Vec<_> = flatten_menu(&menu).iter().map(|e| e.label().to_string()).collect();
/// assert_eq!(labels, ["Blog", "Post"]);
/// ```
pub fn flatten_menu(entries: &[MenuEntry]) -> Vec<FlatEntry> {
    fn visit(entry: &MenuEntry, out: &mut Vec<FlatEntry>) {
        out.push(entry.to_flat());
        for child in entry.child_entries() {
            visit(child, out);
        }
    }

    let mut flat = Vec::new();
    for entry in entries {
        visit(entry, &mut flat);
    }
    flat
}

#[derive(Debug, Deserialize)]
struct MenuDocument {
    #[serde(default)]
    site: Option<SiteSection>,
}

#[derive(Debug, Deserialize)]
struct SiteSection {
    #[serde(default)]
    menu: Option<Vec<MenuEntry>>,
}

/// Parses the `site.menu` tree out of a YAML document
///
/// Returns `Ok(None)` when the document has no `site.menu` key, including a document
/// that is empty or only comments. Every other key is ignored. Merge keys (`<<: *anchor`)
/// are expanded before the menu is read.
pub fn parse_menu(content: &str) -> Result<Option<Vec<MenuEntry>>, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(None);
    }
    let mut value: Value = serde_yaml::from_str(content)?;
    if value.is_null() {
        return Ok(None);
    }
    value.apply_merge()?;

    let document: MenuDocument = serde_yaml::from_value(value)?;
    Ok(document.site.and_then(|site| site.menu))
}

/// Loads the navigation tree from the site configuration file
pub fn load_menu(path: &Path) -> Result<Vec<MenuEntry>, CheckError> {
    if !path.is_file() {
        return Err(CheckError::MenuFileMissing {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| CheckError::MenuRead {
        path: path.to_path_buf(),
        source,
    })?;

    let menu = parse_menu(&content)
        .map_err(|source| CheckError::MenuParse {
            path: path.to_path_buf(),
            source,
        })?
        .ok_or_else(|| CheckError::MenuKeyMissing {
            path: path.to_path_buf(),
        })?;

    debug!("Loaded {} top-level menu entries from {:?}", menu.len(), path);
    Ok(menu)
}

// Scalars other than strings are rendered as text; mappings and sequences are dropped.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn string_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
