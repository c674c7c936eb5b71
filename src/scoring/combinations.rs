/// Number of ways to choose `k` items from `n`.
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let mut acc = 1;
    let mut i = 0;
    while i < k {
        // acc * (n - i) is always divisible by (i + 1) at this point
        acc = acc * (n - i) / (i + 1);
        i += 1;
    }
    acc
}

/// Iterator over all C(N, K) ways of choosing `K` indices from `0..N`.
///
/// Each item is an ascending index array; items come in lexicographic order.
/// The show scorers use it with `N = 5` to walk every subset of hand + starter.
#[derive(Debug, Clone)]
pub struct Combinations<const N: usize, const K: usize> {
    indices: [usize; K],
    remaining: usize,
}

impl<const N: usize, const K: usize> Combinations<N, K> {
    pub const TOTAL: usize = binomial(N, K);

    pub fn new() -> Self {
        let mut indices = [0usize; K];
        for (i, slot) in indices.iter_mut().enumerate() {
            *slot = i;
        }
        Self { indices, remaining: Self::TOTAL }
    }
}

impl<const N: usize, const K: usize> Default for Combinations<N, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const K: usize> Iterator for Combinations<N, K> {
    type Item = [usize; K];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let result = self.indices;

        // Find the rightmost index that can still move right
        let mut i = K;
        while i > 0 {
            i -= 1;
            if self.indices[i] < N - (K - i) {
                self.indices[i] += 1;
                // Reset all indices to the right
                for j in (i + 1)..K {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<const N: usize, const K: usize> ExactSizeIterator for Combinations<N, K> {}
