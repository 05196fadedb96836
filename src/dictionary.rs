//! Dictionary: load a wordlist once, answer case-insensitive lookups.

use crate::bucket_table::{BucketTable, TableStats};
use crate::error::{LoadError, WordError};
use crate::hash::{BucketHash, PrefixHash};
use crate::word::Word;
use log::{debug, error, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Token separators: the six ASCII bytes C `isspace` accepts, vertical tab included.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// What `load` does with a token longer than `LENGTH`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OversizedPolicy {
    /// Abort the load with `LoadError::OversizedToken`.
    #[default]
    Reject,
    /// Keep the first `LENGTH` bytes and continue.
    Truncate,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub oversized: OversizedPolicy,
    /// Empty the table when a load fails partway instead of keeping the
    /// words read so far.
    pub rollback_on_error: bool,
    /// Upper bound on stored entries. Reaching it reports
    /// `LoadError::AllocationFailure`.
    pub entry_limit: Option<usize>,
}

/// A fixed-bucket word table filled from a whitespace-separated wordlist.
///
/// Lifecycle: `load` once, then any number of `check`/`size`, then
/// `unload` (or drop). Only membership is ever reported; stored words are
/// not handed out.
pub struct Dictionary<H = PrefixHash> {
    table: BucketTable<H>,
    options: LoadOptions,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_options(LoadOptions::default())
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self::with_hasher_and_options(PrefixHash, options)
    }

    /// Open `path` and load it into a fresh dictionary.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let mut d = Self::new();
        d.load(path)?;
        Ok(d)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: BucketHash> Dictionary<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self::with_hasher_and_options(hasher, LoadOptions::default())
    }

    pub fn with_hasher_and_options(hasher: H, options: LoadOptions) -> Self {
        Self {
            table: BucketTable::with_hasher(hasher),
            options,
        }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Read every whitespace-separated token of the file at `path` into
    /// the table.
    ///
    /// If the file cannot be opened the table is left untouched. Other
    /// failures keep the words read so far unless
    /// `LoadOptions::rollback_on_error` is set.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        self.ensure_unloaded()?;
        let file = File::open(path).map_err(|source| {
            error!("could not open {}: {}", path.display(), source);
            LoadError::SourceUnavailable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!("loading wordlist from {}", path.display());
        self.load_reader(BufReader::new(file))
    }

    /// Same as `load`, reading from an already-open source.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<(), LoadError> {
        self.ensure_unloaded()?;
        match self.fill(reader) {
            Ok(()) => {
                debug!(
                    "loaded {} words into {} buckets",
                    self.table.len(),
                    self.table.occupied_buckets()
                );
                Ok(())
            }
            Err(e) => {
                error!("load aborted after {} words: {}", self.table.len(), e);
                if self.options.rollback_on_error {
                    self.table.clear();
                }
                Err(e)
            }
        }
    }

    fn ensure_unloaded(&self) -> Result<(), LoadError> {
        if self.table.is_empty() {
            Ok(())
        } else {
            Err(LoadError::AlreadyLoaded {
                size: self.table.len(),
            })
        }
    }

    fn fill<R: BufRead>(&mut self, reader: R) -> Result<(), LoadError> {
        let mut index = 0;
        for line in reader.lines() {
            let line = line?;
            for token in line.split(is_separator) {
                let Some(word) = self.make_word(index, token)? else {
                    continue;
                };
                let loaded = self.table.len();
                if self.options.entry_limit.is_some_and(|limit| loaded >= limit) {
                    return Err(LoadError::AllocationFailure { loaded });
                }
                self.table
                    .insert(word)
                    .map_err(|_| LoadError::AllocationFailure { loaded })?;
                index += 1;
            }
        }
        Ok(())
    }

    /// `None` for the empty pieces left between adjacent separators.
    fn make_word(&self, index: usize, token: &str) -> Result<Option<Word>, LoadError> {
        let word = match Word::new(token) {
            Err(WordError::TooLong { len, max }) => match self.options.oversized {
                OversizedPolicy::Reject => {
                    return Err(LoadError::OversizedToken { index, len, max })
                }
                OversizedPolicy::Truncate => {
                    warn!("token {index} is {len} bytes, truncating to {max}");
                    Word::truncated(token)
                }
            },
            other => other,
        };
        match word {
            Ok(w) => Ok(Some(w)),
            Err(WordError::Empty) => Ok(None),
            Err(WordError::TooLong { len, max }) => {
                Err(LoadError::OversizedToken { index, len, max })
            }
            Err(WordError::Alloc) => Err(LoadError::AllocationFailure {
                loaded: self.table.len(),
            }),
        }
    }

    /// Whether `word` was loaded, ignoring ASCII case.
    pub fn check(&self, word: &str) -> bool {
        self.table.contains(word)
    }

    /// Number of entries currently held, duplicates included.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn is_loaded(&self) -> bool {
        !self.table.is_empty()
    }

    /// Release every entry. Always succeeds; calling it again is a no-op.
    pub fn unload(&mut self) -> bool {
        if self.table.is_empty() {
            return true;
        }
        debug!("unloading {} words", self.table.len());
        self.table.clear();
        true
    }

    pub fn stats(&self) -> TableStats {
        self.table.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::LENGTH;
    use std::io::{self, Cursor, Read};

    fn dict_from(text: &str) -> Dictionary {
        let mut d = Dictionary::new();
        d.load_reader(Cursor::new(text)).unwrap();
        d
    }

    #[test]
    fn fruit_scenario() {
        let mut d = dict_from("apple\nBanana\ncherry\n");
        assert_eq!(d.size(), 3);
        assert!(d.check("APPLE"));
        assert!(d.check("banana"));
        assert!(!d.check("durian"));
        assert!(d.unload());
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        let d = dict_from("  one two\tthree\r\n\nfour  \n");
        assert_eq!(d.size(), 4);
        for w in ["one", "two", "three", "four"] {
            assert!(d.check(w), "{w}");
        }
    }

    #[test]
    fn vertical_tab_and_form_feed_separate_tokens() {
        let d = dict_from("apple\x0bbanana\x0ccherry\n");
        assert_eq!(d.size(), 3);
        assert!(d.check("apple"));
        assert!(d.check("BANANA"));
        assert!(d.check("cherry"));
    }

    #[test]
    fn options_are_kept() {
        let opts = LoadOptions {
            oversized: OversizedPolicy::Truncate,
            rollback_on_error: true,
            entry_limit: Some(10),
        };
        assert_eq!(*Dictionary::with_options(opts).options(), opts);
        assert_eq!(*Dictionary::new().options(), LoadOptions::default());
    }

    #[test]
    fn empty_source_loads_nothing() {
        let d = dict_from("");
        assert_eq!(d.size(), 0);
        assert!(!d.is_loaded());
    }

    #[test]
    fn duplicates_are_counted() {
        let d = dict_from("echo\necho\nEcho\n");
        assert_eq!(d.size(), 3);
        assert!(d.check("echo"));
    }

    #[test]
    fn second_load_is_rejected_and_leaves_table() {
        let mut d = dict_from("apple\n");
        match d.load_reader(Cursor::new("banana\n")) {
            Err(LoadError::AlreadyLoaded { size: 1 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(d.check("apple"));
        assert!(!d.check("banana"));
    }

    #[test]
    fn oversized_token_rejected_keeps_partial() {
        let text = format!("alpha\nbeta\n{}\ngamma\n", "x".repeat(LENGTH + 1));
        let mut d = Dictionary::new();
        match d.load_reader(Cursor::new(text)) {
            Err(LoadError::OversizedToken { index: 2, len, max }) => {
                assert_eq!(len, LENGTH + 1);
                assert_eq!(max, LENGTH);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(d.size(), 2);
        assert!(d.check("beta"));
        assert!(!d.check("gamma"));
    }

    #[test]
    fn oversized_token_truncated_when_configured() {
        let long = "y".repeat(LENGTH + 5);
        let mut d = Dictionary::with_options(LoadOptions {
            oversized: OversizedPolicy::Truncate,
            ..LoadOptions::default()
        });
        d.load_reader(Cursor::new(format!("{long}\nzeta\n"))).unwrap();
        assert_eq!(d.size(), 2);
        assert!(d.check(&long[..LENGTH]));
        assert!(!d.check(&long));
    }

    #[test]
    fn entry_limit_reports_allocation_failure() {
        let mut d = Dictionary::with_options(LoadOptions {
            entry_limit: Some(2),
            ..LoadOptions::default()
        });
        match d.load_reader(Cursor::new("one two three four")) {
            Err(LoadError::AllocationFailure { loaded: 2 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(d.size(), 2);
        assert!(d.check("one"));
        assert!(d.check("two"));
        assert!(!d.check("three"));
    }

    #[test]
    fn rollback_on_error_empties_table() {
        let mut d = Dictionary::with_options(LoadOptions {
            entry_limit: Some(1),
            rollback_on_error: true,
            ..LoadOptions::default()
        });
        assert!(d.load_reader(Cursor::new("one two")).is_err());
        assert_eq!(d.size(), 0);
        assert!(!d.check("one"));

        // A fresh load is possible after rollback.
        d.load_reader(Cursor::new("uno")).unwrap();
        assert!(d.check("UNO"));
    }

    #[test]
    fn read_error_after_open_is_reported() {
        struct Failing {
            served: bool,
        }
        impl Read for Failing {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.served {
                    return Err(io::Error::new(io::ErrorKind::Other, "disk gone"));
                }
                self.served = true;
                let chunk = b"first\nsecond\n";
                buf[..chunk.len()].copy_from_slice(chunk);
                Ok(chunk.len())
            }
        }

        let mut d = Dictionary::new();
        let r = io::BufReader::new(Failing { served: false });
        match d.load_reader(r) {
            Err(LoadError::Read(e)) => assert_eq!(e.kind(), io::ErrorKind::Other),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(d.size(), 2);
        assert!(d.check("second"));
    }

    #[test]
    fn unload_twice_is_safe_and_allows_reload() {
        let mut d = dict_from("apple\nbanana\n");
        assert!(d.unload());
        assert!(d.unload());
        assert_eq!(d.size(), 0);
        assert!(!d.check("apple"));

        d.load_reader(Cursor::new("cherry\n")).unwrap();
        assert_eq!(d.size(), 1);
        assert!(d.check("Cherry"));
        assert!(!d.check("apple"));
    }

    #[test]
    fn custom_hasher_is_used() {
        struct FirstLetter;
        impl BucketHash for FirstLetter {
            fn bucket(&self, word: &str) -> usize {
                word.bytes()
                    .next()
                    .map(|b| usize::from(b.to_ascii_lowercase()))
                    .unwrap_or(0)
            }
        }

        let mut d = Dictionary::with_hasher(FirstLetter);
        d.load_reader(Cursor::new("apple ant axe bee")).unwrap();
        let s = d.stats();
        assert_eq!(s.occupied_buckets, 2);
        assert_eq!(s.longest_chain, 3);
        assert!(d.check("ANT"));
        assert!(!d.check("bat"));
    }
}
