//! File collection

use anyhow::Result;
use camino::Utf8PathBuf;
use ignore::WalkBuilder;
use std::collections::HashSet;
use std::fs;

/// Files under `paths` whose extension is in `extensions`.
///
/// Explicit file paths are always included, regardless of gitignore or
/// extension. Directories are walked with gitignore filtering.
pub fn collect_all_files(
    paths: &[Utf8PathBuf],
    extensions: &HashSet<String>,
) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let metadata = fs::metadata(path)?;
        if metadata.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkBuilder::new(path).standard_filters(true).build();

        for result in walker {
            let entry = result?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let p = Utf8PathBuf::from_path_buf(entry.path().to_owned())
                .map_err(|_| anyhow::anyhow!("non-utf8 path: {}", entry.path().display()))?;
            if has_extension(&p, extensions) {
                files.push(p);
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_extension(path: &Utf8PathBuf, extensions: &HashSet<String>) -> bool {
    path.extension()
        .is_some_and(|ext| extensions.contains(&ext.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rust_only() -> HashSet<String> {
        HashSet::from(["rs".to_string()])
    }

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn filters_directory_walk_by_extension() {
        let dir = TempDir::new().unwrap();
        let root = utf8(&dir);
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/lib.rs"), "fn a() {}\n").unwrap();
        fs::write(root.join("src/MAIN.RS"), "fn b() {}\n").unwrap();
        fs::write(root.join("README.md"), "# hi\n").unwrap();

        let files = collect_all_files(&[root.clone()], &rust_only()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.as_str().ends_with(".rs") || f.as_str().ends_with(".RS")));
    }

    #[test]
    fn explicit_file_is_always_included() {
        let dir = TempDir::new().unwrap();
        let file = utf8(&dir).join("notes.txt");
        fs::write(&file, "text\n").unwrap();

        let files = collect_all_files(std::slice::from_ref(&file), &rust_only()).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let missing = Utf8PathBuf::from("/nonexistent/brevity/path");
        assert!(collect_all_files(&[missing], &rust_only()).is_err());
    }
}
