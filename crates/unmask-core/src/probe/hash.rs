/// Streaming content digests (MD5, SHA-256).
///
/// Files are read through a fixed 64 KiB buffer so arbitrarily large files
/// hash in constant memory. [`Digests::from_reader`] feeds both algorithms
/// from the same pass.
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Read buffer size for hashing.
const CHUNK_SIZE: usize = 64 * 1024;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha256,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
        }
    }
}

/// Hash the contents of `path`, returning a lowercase hex digest.
///
/// Fails if the file cannot be opened or read, including when `path` is a
/// directory.
pub fn hash_file(path: &Path, algorithm: HashAlgorithm) -> io::Result<String> {
    let file = File::open(path)?;
    match algorithm {
        HashAlgorithm::Md5 => {
            let mut md5 = Md5::new();
            stream(file, |chunk| md5.update(chunk))?;
            Ok(hex::encode(md5.finalize()))
        }
        HashAlgorithm::Sha256 => {
            let mut sha256 = Sha256::new();
            stream(file, |chunk| sha256.update(chunk))?;
            Ok(hex::encode(sha256.finalize()))
        }
    }
}

/// MD5 and SHA-256 of the same content, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digests {
    pub md5: String,
    pub sha256: String,
}

impl Digests {
    /// Hash everything `reader` yields, reading it exactly once.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut md5 = Md5::new();
        let mut sha256 = Sha256::new();
        stream(reader, |chunk| {
            md5.update(chunk);
            sha256.update(chunk);
        })?;
        Ok(Self {
            md5: hex::encode(md5.finalize()),
            sha256: hex::encode(sha256.finalize()),
        })
    }
}

/// Push `reader` through `sink` one chunk at a time.
fn stream<R: Read>(mut reader: R, mut sink: impl FnMut(&[u8])) -> io::Result<()> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => return Ok(()),
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sink(&buf[..n]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(content).unwrap();
        path
    }

    #[test]
    fn known_vectors_for_abc() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "abc.txt", b"abc");

        assert_eq!(
            hash_file(&path, HashAlgorithm::Md5).unwrap(),
            "900150983cd24fb0d6963f7d28e17f72"
        );
        assert_eq!(
            hash_file(&path, HashAlgorithm::Sha256).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn empty_file_digests() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "empty", b"");

        assert_eq!(
            hash_file(&path, HashAlgorithm::Md5).unwrap(),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            hash_file(&path, HashAlgorithm::Sha256).unwrap(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    /// Hashing the same unmodified file twice must give the same digest.
    #[test]
    fn repeated_hash_is_stable() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(&tmp, "data.bin", &[7u8; 10_000]);

        for algo in [HashAlgorithm::Md5, HashAlgorithm::Sha256] {
            let first = hash_file(&path, algo).unwrap();
            let second = hash_file(&path, algo).unwrap();
            assert_eq!(first, second, "{algo} digest changed between reads");
        }
    }

    /// Content larger than one chunk must hash the same as an in-memory digest.
    #[test]
    fn multi_chunk_file_matches_in_memory_digest() {
        let tmp = TempDir::new().unwrap();
        let content: Vec<u8> = (0..CHUNK_SIZE * 3 + 17).map(|i| (i % 251) as u8).collect();
        let path = write_file(&tmp, "big.bin", &content);

        let expected = hex::encode(Sha256::digest(&content));
        assert_eq!(hash_file(&path, HashAlgorithm::Sha256).unwrap(), expected);
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = hash_file(&tmp.path().join("gone.bin"), HashAlgorithm::Md5).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(hash_file(tmp.path(), HashAlgorithm::Sha256).is_err());
    }

    /// One pass over the content yields the same digests as hashing the file
    /// once per algorithm.
    #[test]
    fn single_pass_digests_match_per_algorithm_hashes() {
        let tmp = TempDir::new().unwrap();
        let content: Vec<u8> = (0..CHUNK_SIZE * 2 + 5).map(|i| (i % 13) as u8).collect();
        let path = write_file(&tmp, "both.bin", &content);

        let both = Digests::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(both.md5, hash_file(&path, HashAlgorithm::Md5).unwrap());
        assert_eq!(both.sha256, hash_file(&path, HashAlgorithm::Sha256).unwrap());
    }

    /// Counts bytes handed out so the test can tell how often content is read.
    struct CountingReader<R> {
        inner: R,
        bytes: usize,
    }

    impl<R: Read> Read for CountingReader<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.inner.read(buf)?;
            self.bytes += n;
            Ok(n)
        }
    }

    #[test]
    fn single_pass_reads_content_once() {
        let content = vec![42u8; CHUNK_SIZE + 100];
        let mut reader = CountingReader {
            inner: content.as_slice(),
            bytes: 0,
        };

        let digests = Digests::from_reader(&mut reader).unwrap();
        assert_eq!(reader.bytes, content.len());
        assert_eq!(digests.sha256, hex::encode(Sha256::digest(&content)));
    }

    #[test]
    fn algorithm_display_names() {
        assert_eq!(HashAlgorithm::Md5.to_string(), "md5");
        assert_eq!(HashAlgorithm::Sha256.to_string(), "sha256");
    }
}
