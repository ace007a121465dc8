use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are neither returned nor descended into. Symbolic links are
/// returned when they point at a regular file.
///
/// # Errors
/// Returns an error if `dir` or one of its entries cannot be read.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Cannot read directory '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// Copies `source` into the directory `dest_dir`, keeping its file name.
///
/// An existing file of the same name in `dest_dir` is never overwritten.
///
/// # Errors
/// Returns an error if the target already exists or the copy fails.
pub fn copy_into(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .with_context(|| format!("Invalid file name '{}'", source.display()))?;
    let target = dest_dir.join(file_name);
    if target.exists() {
        bail!("The file '{}' already exists", target.display());
    }
    fs::copy(source, &target)
        .with_context(|| format!("Cannot copy to '{}'", target.display()))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_files_is_sorted_and_not_recursive() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("c.log"), "c").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("inner.txt"), "x").unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.log"]);
    }

    #[test]
    fn test_list_files_empty_dir() {
        let dir = tempdir().unwrap();
        assert!(list_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_list_files_missing_dir() {
        let dir = tempdir().unwrap();
        let res = list_files(&dir.path().join("missing"));
        assert!(res.is_err());
        assert!(format!("{:#}", res.unwrap_err()).contains("Cannot read directory"));
    }

    #[test]
    fn test_copy_into_keeps_name_and_content() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let file = src.path().join("report.txt");
        fs::write(&file, "Hello, World!").unwrap();

        let target = copy_into(&file, dest.path()).unwrap();
        assert_eq!(target, dest.path().join("report.txt"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "Hello, World!");
        assert!(file.exists());
    }

    #[test]
    fn test_copy_into_does_not_overwrite() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let file = src.path().join("report.txt");
        fs::write(&file, "new").unwrap();
        fs::write(dest.path().join("report.txt"), "old").unwrap();

        let err = copy_into(&file, dest.path()).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(dest.path().join("report.txt")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_copy_into_missing_source() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let res = copy_into(&src.path().join("gone.txt"), dest.path());
        assert!(res.is_err());
        assert!(!dest.path().join("gone.txt").exists());
    }
}
