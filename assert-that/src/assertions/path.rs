use std::fs;
use std::path::Path;

use crate::error::{MismatchError, MismatchKind};
use crate::subject::{Subject, render};

mod private {
    use std::path::{Path, PathBuf};

    pub trait FsPath {
        fn fs_path(&self) -> &Path;
    }

    impl FsPath for Path {
        fn fs_path(&self) -> &Path {
            self
        }
    }

    impl FsPath for PathBuf {
        fn fs_path(&self) -> &Path {
            self.as_path()
        }
    }
}

/// Reads a file as UTF-8 text, failing the test if it cannot be read.
///
/// ```no_run
/// use assert_that::prelude::*;
///
/// assert_that(&content_of("notes.txt")).starts_with("The Truth");
/// ```
#[track_caller]
pub fn content_of(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    tracing::trace!(path = %path.display(), "reading file content");
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => MismatchError::new(MismatchKind::File, "readable UTF-8 file", err.to_string())
            .with_subject(path.display().to_string())
            .raise(),
    }
}

/// File-system checks for `Path` and `PathBuf` subjects.
pub trait PathAssertion {
    fn exists(&self) -> &Self;
    fn does_not_exist(&self) -> &Self;
    fn is_file(&self) -> &Self;
    fn is_directory(&self) -> &Self;
    fn is_absolute(&self) -> &Self;
    fn is_relative(&self) -> &Self;

    /// The file reads as exactly `expected`.
    fn has_content(&self, expected: &str) -> &Self;

    /// Both files hold the same bytes.
    fn has_same_content_as(&self, other: impl AsRef<Path>) -> &Self;
}

impl<P: private::FsPath + ?Sized> PathAssertion for Subject<'_, P> {
    #[track_caller]
    fn exists(&self) -> &Self {
        let path = self.actual().fs_path();
        if !path.exists() {
            self.fail(MismatchKind::File, "existing path", describe(path));
        }
        self
    }

    #[track_caller]
    fn does_not_exist(&self) -> &Self {
        let path = self.actual().fs_path();
        if path.exists() {
            self.fail(MismatchKind::File, "missing path", describe(path));
        }
        self
    }

    #[track_caller]
    fn is_file(&self) -> &Self {
        let path = self.actual().fs_path();
        if !path.is_file() {
            self.fail(MismatchKind::File, "regular file", describe(path));
        }
        self
    }

    #[track_caller]
    fn is_directory(&self) -> &Self {
        let path = self.actual().fs_path();
        if !path.is_dir() {
            self.fail(MismatchKind::File, "directory", describe(path));
        }
        self
    }

    #[track_caller]
    fn is_absolute(&self) -> &Self {
        let path = self.actual().fs_path();
        if !path.is_absolute() {
            self.fail(MismatchKind::File, "absolute path", render(path));
        }
        self
    }

    #[track_caller]
    fn is_relative(&self) -> &Self {
        let path = self.actual().fs_path();
        if !path.is_relative() {
            self.fail(MismatchKind::File, "relative path", render(path));
        }
        self
    }

    #[track_caller]
    fn has_content(&self, expected: &str) -> &Self {
        let path = self.actual().fs_path();
        tracing::trace!(path = %path.display(), "comparing file content");
        match fs::read_to_string(path) {
            Ok(content) if content == expected => {}
            Ok(content) => {
                self.report(
                    MismatchError::new(MismatchKind::File, render(expected), render(&content))
                        .with_detail(format!("file: {}", path.display())),
                );
            }
            Err(err) => {
                self.report(
                    MismatchError::new(MismatchKind::File, render(expected), err.to_string())
                        .with_detail(format!("file: {}", path.display())),
                );
            }
        }
        self
    }

    #[track_caller]
    fn has_same_content_as(&self, other: impl AsRef<Path>) -> &Self {
        let path = self.actual().fs_path();
        let other = other.as_ref();
        tracing::trace!(path = %path.display(), other = %other.display(), "comparing file bytes");
        match (fs::read(path), fs::read(other)) {
            (Ok(actual), Ok(expected)) if actual == expected => {}
            (Ok(actual), Ok(expected)) => {
                self.report(
                    MismatchError::new(
                        MismatchKind::File,
                        render(&String::from_utf8_lossy(&expected)),
                        render(&String::from_utf8_lossy(&actual)),
                    )
                    .with_detail(format!("expected content of: {}", other.display())),
                );
            }
            (Err(err), _) => {
                self.fail(MismatchKind::File, "readable file", err.to_string());
            }
            (_, Err(err)) => {
                self.report(
                    MismatchError::new(MismatchKind::File, "readable file", err.to_string())
                        .with_detail(format!("expected content of: {}", other.display())),
                );
            }
        }
        self
    }
}

fn describe(path: &Path) -> String {
    let kind = match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => "directory",
        Ok(meta) if meta.is_file() => "file",
        Ok(_) => "other",
        Err(_) => "missing",
    };
    format!("{} ({})", render(path), kind)
}
