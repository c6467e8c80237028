// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary directory holding documents to paginate
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();
        Self { temp_dir, root_path }
    }

    /// Write a document with given content
    pub fn create_document<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&file_path, content).expect("Failed to write test document");
        file_path
    }
}

/// A paragraph of `sentences` sentences, each holding `words` Latin words
#[allow(dead_code)]
pub fn latin_paragraph(sentences: usize, words: usize) -> String {
    (0..sentences)
        .map(|i| {
            let mut sentence = (0..words)
                .map(|w| format!("w{}", char::from(b'a' + ((i + w) % 26) as u8)))
                .collect::<Vec<_>>()
                .join(" ");
            sentence.push('.');
            sentence
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A CJK paragraph of `sentences` sentences, each holding `chars` ideographs
#[allow(dead_code)]
pub fn cjk_paragraph(sentences: usize, chars: usize) -> String {
    const IDEOGRAPHS: &[char] = &['天', '地', '人', '山', '水', '風', '雲', '月'];
    (0..sentences)
        .map(|i| {
            let mut sentence: String = (0..chars).map(|c| IDEOGRAPHS[(i + c) % IDEOGRAPHS.len()]).collect();
            sentence.push('。');
            sentence
        })
        .collect()
}

/// Non-whitespace characters of `text`, in order
#[allow(dead_code)]
pub fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
