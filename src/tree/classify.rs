//! File classification for the `mime` sort strategy.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maps a file path to a type label (a MIME type or equivalent)
///
/// `None` means the file could not be classified; callers substitute the
/// empty sentinel, which sorts before every real label.
pub trait Classifier: Send + Sync {
    fn classify(&self, path: &Path) -> Option<String>;
}

impl<F> Classifier for F
where
    F: Fn(&Path) -> Option<String> + Send + Sync,
{
    fn classify(&self, path: &Path) -> Option<String> {
        self(path)
    }
}

/// Default classifier that inspects the first bytes of a file
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSniffer;

impl ContentSniffer {
    const SAMPLE_LEN: u64 = 512;
}

impl Classifier for ContentSniffer {
    fn classify(&self, path: &Path) -> Option<String> {
        let file = File::open(path).ok()?;
        let mut sample = Vec::new();
        file.take(Self::SAMPLE_LEN).read_to_end(&mut sample).ok()?;

        let label = if sample.is_empty() {
            "inode/x-empty"
        } else if looks_textual(&sample) {
            "text/plain"
        } else {
            "application/octet-stream"
        };
        Some(label.to_string())
    }
}

fn looks_textual(sample: &[u8]) -> bool {
    if sample.contains(&0) {
        return false;
    }
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // a multi-byte char cut by the sample boundary
        Err(e) => e.error_len().is_none(),
    }
}
