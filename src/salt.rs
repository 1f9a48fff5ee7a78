const SEED_LEN: usize = 32;

pub(crate) struct Salt<T>(pub T);

impl<T: AsRef<[u8]>> Salt<T> {
    fn get(&self) -> Option<ByteSource<'_>> {
        let data = self.0.as_ref();
        if data.is_empty() {
            return None;
        }

        Some(ByteSource { idx: 0, data })
    }

    /// Folds the salt into a seed for `StdRng`. An empty salt has no seed.
    pub(crate) fn seed(&self) -> Option<[u8; SEED_LEN]> {
        let mut source = self.get()?;
        let len = source.data.len();
        let mut seed = [0u8; SEED_LEN];

        // Short salts repeat until the seed is full; long salts wrap around onto it.
        for idx in 0..len.max(SEED_LEN) {
            let slot = &mut seed[idx % SEED_LEN];
            *slot = slot.rotate_left(3) ^ source.next();
        }

        // Otherwise "ab" and "abab" would share a seed.
        for (slot, byte) in seed[SEED_LEN - 8..].iter_mut().zip(&(len as u64).to_le_bytes()) {
            *slot ^= byte;
        }

        Some(seed)
    }
}

struct ByteSource<'a> {
    idx: usize,
    data: &'a [u8],
}

impl<'a> ByteSource<'a> {
    fn next(&mut self) -> u8 {
        if self.idx == self.data.len() {
            self.idx = 0;
        }

        let ret = self.data[self.idx];
        self.idx += 1;
        ret
    }
}
