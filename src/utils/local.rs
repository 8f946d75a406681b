use crate::error::{ComposeDiffError, Result};
use crate::traits::ByteSource;
use std::fs::File;
use std::io::Read;

/// Byte source reading manifests from a local compose mirror
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

impl ByteSource for FileSource {
    fn open(&self, location: &str) -> Result<Box<dyn Read + Send>> {
        tracing::debug!(path = location, "opening local file");
        let file = File::open(location).map_err(|e| ComposeDiffError::fetch(location, e))?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn opens_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let mut content = String::new();
        FileSource
            .open(&file.path().to_string_lossy())
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();

        assert_eq!(content, "{}");
    }

    #[test]
    fn missing_file_is_a_fetch_error() {
        let err = FileSource.open("/nonexistent/rpms.json").err().unwrap();
        assert!(matches!(err, ComposeDiffError::Fetch { .. }));
    }
}
