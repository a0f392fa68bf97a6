use std::collections::BTreeMap;

/// Live page views keyed by page index
#[derive(Debug)]
pub struct DelegatePool<V> {
    live: BTreeMap<usize, V>,
    created: usize,
    released: usize,
}

impl<V> Default for DelegatePool<V> {
    fn default() -> Self {
        Self {
            live: BTreeMap::new(),
            created: 0,
            released: 0,
        }
    }
}

impl<V> DelegatePool<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live instances
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Indices with a live instance, ascending
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.live.keys().copied()
    }

    /// Total instances created over the pool's lifetime
    pub fn created(&self) -> usize {
        self.created
    }

    /// Total instances released over the pool's lifetime
    pub fn released(&self) -> usize {
        self.released
    }

    /// Get the instance for `index`, creating it if needed
    pub fn get_or_create(&mut self, index: usize, create: impl FnOnce() -> V) -> &mut V {
        let created = &mut self.created;
        self.live.entry(index).or_insert_with(|| {
            *created += 1;
            create()
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut V> {
        self.live.get_mut(&index)
    }

    /// Release every instance whose index is not in `keep`
    pub fn retain(&mut self, keep: &[usize], mut release: impl FnMut(usize, V)) {
        let stale: Vec<usize> = self
            .live
            .keys()
            .copied()
            .filter(|index| !keep.contains(index))
            .collect();
        for index in stale {
            if let Some(view) = self.live.remove(&index) {
                self.released += 1;
                release(index, view);
            }
        }
    }

    /// Release every instance
    pub fn clear(&mut self, mut release: impl FnMut(usize, V)) {
        for (index, view) in std::mem::take(&mut self.live) {
            self.released += 1;
            release(index, view);
        }
    }
}
