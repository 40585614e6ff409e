//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Select};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm running the batch replacement
pub fn confirm_run(rule_count: usize, archive: &Path) -> Result<bool> {
    let message = format!(
        "Apply {} replacement rule(s) to {}?",
        rule_count,
        archive.display()
    );
    confirm_step(&message)
}

/// A file or directory entry in the file browser
struct FileEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Interactively pick a file by walking the filesystem with a Select menu.
///
/// Starts in the user's home directory (falling back to the current
/// directory) and only offers files whose extension appears in
/// `extensions`. Returns None if the user cancels.
pub fn pick_file(prompt: &str, extensions: &[&str]) -> Result<Option<PathBuf>> {
    let mut current_dir = dirs::home_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    loop {
        let entries = list_directory(&current_dir, extensions);

        if entries.is_empty() {
            // Dead end, back out to the parent
            match current_dir.parent() {
                Some(parent) => {
                    current_dir = parent.to_path_buf();
                    continue;
                }
                None => return Ok(None),
            }
        }

        let labels: Vec<String> = entries
            .iter()
            .map(|entry| {
                if entry.is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                }
            })
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} [{}]", prompt, current_dir.display()))
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(index) => {
                let entry = &entries[index];
                if entry.is_dir {
                    current_dir = entry.path.clone();
                } else {
                    return Ok(Some(entry.path.clone()));
                }
            }
            // Esc or q cancels the picker
            None => return Ok(None),
        }
    }
}

/// List directory contents, filtered for directories and matching files
fn list_directory(path: &Path, extensions: &[&str]) -> Vec<FileEntry> {
    let mut entries = Vec::new();

    // Add parent directory entry if not at root
    if let Some(parent) = path.parent() {
        if parent != path {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }
    }

    if let Ok(read_dir) = std::fs::read_dir(path) {
        for entry in read_dir.flatten() {
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();
            let name = entry.file_name().to_string_lossy().to_string();

            // Skip hidden files/directories (starting with .)
            if name.starts_with('.') {
                continue;
            }

            if is_dir || matches_extension(&entry_path, extensions) {
                entries.push(FileEntry {
                    name,
                    path: entry_path,
                    is_dir,
                });
            }
        }
    }

    // Sort: ".." first, then directories, then files alphabetically
    entries.sort_by(|a, b| {
        if a.name == ".." {
            return std::cmp::Ordering::Less;
        }
        if b.name == ".." {
            return std::cmp::Ordering::Greater;
        }
        match (a.is_dir, b.is_dir) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    });

    entries
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            extensions.iter().any(|allowed| *allowed == ext)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_extension_case_insensitive() {
        assert!(matches_extension(Path::new("map.XLSX"), &["xlsx", "xls"]));
        assert!(matches_extension(Path::new("map.xls"), &["xlsx", "xls"]));
        assert!(!matches_extension(Path::new("map.csv"), &["xlsx", "xls"]));
        assert!(!matches_extension(Path::new("noext"), &["xlsx"]));
    }

    #[test]
    fn test_list_directory_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();
        std::fs::write(dir.path().join("b.xlsx"), b"x").unwrap();
        std::fs::write(dir.path().join("a.xlsx"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();
        std::fs::write(dir.path().join(".hidden.xlsx"), b"x").unwrap();

        let entries = list_directory(dir.path(), &["xlsx"]);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "subdir", "a.xlsx", "b.xlsx"]);
    }
}
