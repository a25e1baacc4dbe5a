//! Asset serialization
//!
//! Renders word lists and score tables in the exact layout the game loads, and
//! replaces asset files atomically.

use super::registry::RegistrationBlock;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Quote a word as an ASCII-only JSON string
///
/// Anything outside printable ASCII becomes a lowercase `\uXXXX` escape, with
/// characters beyond the BMP written as a surrogate pair.
fn quote(word: &str) -> String {
    let json = Value::from(word).to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c < '\u{7f}' {
            out.push(c);
            continue;
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            out.push_str(&format!("\\u{unit:04x}"));
        }
    }
    out
}

/// Render `const NAME = [...];`, optionally followed by the registration block
///
/// One entry per line, every entry but the last followed by a comma.
///
/// # Examples
/// ```
/// use wordle_assets::asset::render_word_list;
///
/// let words = vec!["aback".to_string(), "abase".to_string()];
/// let text = render_word_list("WORD_LIST", &words, None);
/// assert_eq!(text, "const WORD_LIST = [\n  \"aback\",\n  \"abase\"\n];\n");
/// ```
#[must_use]
pub fn render_word_list(
    const_name: &str,
    words: &[String],
    registration: Option<&RegistrationBlock>,
) -> String {
    let mut lines = Vec::with_capacity(words.len() + 16);
    lines.push(format!("const {const_name} = ["));
    for (i, word) in words.iter().enumerate() {
        let suffix = if i + 1 < words.len() { "," } else { "" };
        lines.push(format!("  {}{suffix}", quote(word)));
    }
    lines.push("];".to_string());
    lines.push(String::new());

    if let Some(block) = registration {
        lines.extend(block.render());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render `const NAME = {...};` with a trailing comma after every entry
///
/// # Examples
/// ```
/// use wordle_assets::asset::render_score_table;
///
/// let entries = vec![("apple".to_string(), 4512)];
/// let text = render_score_table("MODERN_WORD_FREQUENCY", &entries);
/// assert_eq!(text, "const MODERN_WORD_FREQUENCY = {\n  \"apple\": 4512,\n};\n");
/// ```
#[must_use]
pub fn render_score_table(const_name: &str, entries: &[(String, i64)]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push(format!("const {const_name} = {{"));
    for (word, score) in entries {
        lines.push(format!("  {}: {score},", quote(word)));
    }
    lines.push("};".to_string());
    lines.push(String::new());
    lines.join("\n")
}

/// Replace `path` with `contents`
///
/// Writes to a temporary file in the same directory and renames it over the
/// target, so readers see either the old file or the complete new one.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created, or the temporary
/// file cannot be written or renamed.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
