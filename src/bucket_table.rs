//! BucketTable: fixed array of bucket heads over an arena of chained entries.

use crate::hash::{BucketHash, PrefixHash, N};
use crate::word::Word;
use hashbrown::HashMap;
use slotmap::{DefaultKey, SlotMap};
use std::collections::TryReserveError;

#[derive(Debug)]
struct Entry {
    word: Word,
    next: Option<DefaultKey>,
}

/// N bucket heads; each chain is linked through `Entry::next` inside the
/// arena, most recently inserted first.
pub struct BucketTable<H = PrefixHash> {
    hasher: H,
    heads: Box<[Option<DefaultKey>]>,
    slots: SlotMap<DefaultKey, Entry>, // owns every entry
    occupied: usize,
}

impl BucketTable {
    pub fn new() -> Self {
        Self::with_hasher(PrefixHash)
    }
}

impl Default for BucketTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over one collision chain, front to back.
pub struct Chain<'a> {
    slots: &'a SlotMap<DefaultKey, Entry>,
    cursor: Option<DefaultKey>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Word;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let e = self.slots.get(self.cursor?)?;
        self.cursor = e.next;
        Some(&e.word)
    }
}

/// Occupancy summary of the collision chains.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableStats {
    pub words: usize,
    pub buckets: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
    /// Words per bucket.
    pub load_factor: f64,
    /// Chain length -> number of buckets with that length (empty buckets excluded).
    pub chain_lengths: HashMap<usize, usize>,
}

impl<H: BucketHash> BucketTable<H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            heads: vec![None; N].into_boxed_slice(),
            slots: SlotMap::with_key(),
            occupied: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn occupied_buckets(&self) -> usize {
        self.occupied
    }

    /// Bucket for `word`. Indices a hasher returns past `N` wrap around.
    #[inline]
    pub fn bucket_of(&self, word: &str) -> usize {
        self.hasher.bucket(word) % N
    }

    /// Prepend `word` to its bucket's chain. Duplicates are kept.
    ///
    /// Arena growth is fallible; on error the table is unchanged.
    pub fn insert(&mut self, word: Word) -> Result<usize, TryReserveError> {
        self.slots.try_reserve(1)?;
        let b = self.bucket_of(word.as_str());
        let head = &mut self.heads[b];
        if head.is_none() {
            self.occupied += 1;
        }
        let k = self.slots.insert(Entry { word, next: *head });
        *head = Some(k);
        Ok(b)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.chain(self.bucket_of(query)).any(|w| w.matches(query))
    }

    pub fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            slots: &self.slots,
            cursor: self.heads.get(bucket).copied().flatten(),
        }
    }

    /// Release every entry and reset every bucket head. Safe on an empty table.
    pub fn clear(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        for head in self.heads.iter_mut() {
            *head = None;
        }
        self.slots.clear();
        self.occupied = 0;
    }

    /// Every stored word with the bucket that holds it, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Word)> + '_ {
        (0..N).flat_map(move |b| self.chain(b).map(move |w| (b, w)))
    }

    pub fn stats(&self) -> TableStats {
        let mut chain_lengths: HashMap<usize, usize> = HashMap::new();
        let mut longest_chain = 0;
        for b in 0..N {
            let n = self.chain(b).count();
            if n == 0 {
                continue;
            }
            *chain_lengths.entry(n).or_insert(0) += 1;
            longest_chain = longest_chain.max(n);
        }
        TableStats {
            words: self.len(),
            buckets: N,
            occupied_buckets: self.occupied,
            longest_chain,
            load_factor: self.len() as f64 / N as f64,
            chain_lengths,
        }
    }
}
