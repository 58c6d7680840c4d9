use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::ZipWriter;

const BUFFER_SIZE: usize = 1024 * 1024; // 1MB buffer
const COMPRESSION_LEVEL: i64 = 5; // Faster compression, still decent ratio

#[derive(Debug)]
pub enum ArchiveError {
    Io(io::Error),
    Walk(walkdir::Error),
    Zip(zip::result::ZipError),
}

impl From<io::Error> for ArchiveError {
    fn from(err: io::Error) -> Self {
        ArchiveError::Io(err)
    }
}

impl From<walkdir::Error> for ArchiveError {
    fn from(err: walkdir::Error) -> Self {
        ArchiveError::Walk(err)
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        ArchiveError::Zip(err)
    }
}

// The message is shown to the user exactly as the underlying error produced it.
impl std::fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArchiveError::Io(e) => write!(f, "{e}"),
            ArchiveError::Walk(e) => write!(f, "{e}"),
            ArchiveError::Zip(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveError::Io(e) => Some(e),
            ArchiveError::Walk(e) => Some(e),
            ArchiveError::Zip(e) => Some(e),
        }
    }
}

/// Compresses the full recursive tree rooted at `src` into a ZIP file at
/// `dest`, overwriting any existing file there. Entry names are relative to
/// `src`, so extracting the archive reproduces the tree without an extra
/// wrapping directory.
pub fn zip_directory(src: &Path, dest: &Path) -> Result<(), ArchiveError> {
    let result = write_archive(src, dest);
    if result.is_err() {
        // A truncated archive must not be left behind.
        let _ = std::fs::remove_file(dest);
    }
    result
}

fn write_archive(src: &Path, dest: &Path) -> Result<(), ArchiveError> {
    let file = BufWriter::new(File::create(dest)?);
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> = FileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .compression_level(Some(COMPRESSION_LEVEL))
        .unix_permissions(0o755);

    let mut buffer = Vec::with_capacity(BUFFER_SIZE);

    for entry in WalkDir::new(src) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        if rel.as_os_str().is_empty() {
            // The walk root itself has no entry.
            continue;
        }

        let name = rel.to_string_lossy().replace('\\', "/");

        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else if entry.file_type().is_file() {
            let reader = File::open(entry.path())?;
            let mut reader = BufReader::with_capacity(BUFFER_SIZE, reader);
            buffer.clear();
            reader.read_to_end(&mut buffer)?;

            zip.start_file(name, options)?;
            zip.write_all(&buffer)?;
        }
    }

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use zip::ZipArchive;

    fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> Vec<u8> {
        let mut data = Vec::new();
        archive
            .by_name(name)
            .expect("entry missing")
            .read_to_end(&mut data)
            .expect("read entry");
        data
    }

    #[test]
    fn archives_recursive_tree_relative_to_root() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("a.txt"), b"alpha").unwrap();
        fs::create_dir(src.path().join("sub")).unwrap();
        fs::write(src.path().join("sub").join("b.txt"), b"beta").unwrap();
        fs::create_dir(src.path().join("empty")).unwrap();

        let dest = out.path().join("tree.zip");
        zip_directory(src.path(), &dest).unwrap();

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let names: BTreeSet<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        let expected: BTreeSet<String> = ["a.txt", "sub/", "sub/b.txt", "empty/"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);

        assert_eq!(read_entry(&mut archive, "a.txt"), b"alpha");
        assert_eq!(read_entry(&mut archive, "sub/b.txt"), b"beta");
    }

    #[test]
    fn missing_source_leaves_no_archive() {
        let out = tempfile::tempdir().unwrap();
        let dest = out.path().join("ghost.zip");

        let err = zip_directory(Path::new("/no/such/folder"), &dest).unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(!dest.exists());
    }

    #[test]
    fn overwrites_existing_destination() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        fs::write(src.path().join("only.txt"), b"data").unwrap();

        let dest = out.path().join("again.zip");
        fs::write(&dest, b"not a zip").unwrap();
        zip_directory(src.path(), &dest).unwrap();

        let mut archive = ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(read_entry(&mut archive, "only.txt"), b"data");
    }
}
