use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub struct File {
    pub path: PathBuf,
    pub content: String,
}

impl File {
    pub fn at_path(path: PathBuf) -> io::Result<Self> {
        let content = fs::read_to_string(&path)?;
        Ok(Self { path, content })
    }

    /// Reads the file, standing in for an empty document when it does not
    /// exist. Used to diff against a destination that has never been
    /// generated.
    pub fn at_path_or_empty(path: PathBuf) -> io::Result<Self> {
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Self { path, content }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self {
                path,
                content: String::new(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Writes `content` to `path` through a temporary sibling and a rename, so
/// the destination is never observed half-written.
pub fn atomic_overwrite(path: &Path, content: &str) -> io::Result<()> {
    let mut tmp_path = path.to_path_buf();
    tmp_path.set_extension("tmp.vue");
    fs::write(&tmp_path, content)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn overwrite_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Component.vue");
        atomic_overwrite(&path, "first").unwrap();
        atomic_overwrite(&path, "second").unwrap();
        assert_eq!("second", File::at_path(path).unwrap().content);
    }

    #[test]
    fn overwrite_leaves_no_temporary_behind() {
        let dir = tempdir().unwrap();
        atomic_overwrite(&dir.path().join("Component.vue"), "content").unwrap();
        assert_eq!(1, fs::read_dir(dir.path()).unwrap().count());
    }

    #[test]
    fn missing_destination_reads_as_empty() {
        let dir = tempdir().unwrap();
        let file = File::at_path_or_empty(dir.path().join("absent.vue")).unwrap();
        assert_eq!("", file.content);
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(File::at_path(dir.path().join("absent.vue")).is_err());
    }
}
