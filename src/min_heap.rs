use thiserror::Error;

/// Binary min-heap backing the tree builder.
///
/// Elements are compared with `Ord`; callers that need a stable order among
/// equal keys fold a sequence number into the key.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<T>,
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: vec![] }
    }

    pub fn heap_size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(i: usize) -> usize {
        2 * i + 1
    }

    fn right(i: usize) -> usize {
        2 * i + 2
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("extract from an empty heap")]
    Underflow,
}

impl<T: Ord> MinHeap<T> {
    pub fn build(source: Vec<T>) -> Self {
        let mut heap = MinHeap { elements: source };
        let n = heap.heap_size();
        for i in (0..n / 2).rev() {
            heap.min_heapify(i);
        }
        heap
    }

    pub fn valid_min_heap(&self) -> bool {
        (1..self.heap_size()).all(|i| self.elements[Self::parent(i)] <= self.elements[i])
    }

    /// Sift the element at `i` down until both children are no smaller.
    fn min_heapify(&mut self, mut i: usize) {
        let n = self.heap_size();
        loop {
            let l = Self::left(i);
            let r = Self::right(i);
            let mut smallest = i;

            if l < n && self.elements[l] < self.elements[smallest] {
                smallest = l;
            }
            if r < n && self.elements[r] < self.elements[smallest] {
                smallest = r;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        let mut i = self.heap_size() - 1;
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[p] <= self.elements[i] {
                break;
            }
            self.elements.swap(i, p);
            i = p;
        }
    }

    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.is_empty() {
            return Err(HeapError::Underflow);
        }
        let last = self.heap_size() - 1;
        self.elements.swap(0, last);
        let result = self.elements.pop().ok_or(HeapError::Underflow)?;
        if !self.is_empty() {
            self.min_heapify(0);
        }
        Ok(result)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_then_drain_is_sorted() {
        let mut heap = MinHeap::build(vec![9, 4, 7, 1, 8, 2, 2, 6]);
        assert!(heap.valid_min_heap());

        let mut drained = Vec::new();
        while !heap.is_empty() {
            drained.push(heap.extract_min().unwrap());
            assert!(heap.valid_min_heap());
        }
        assert_eq!(drained, vec![1, 2, 2, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn insert_keeps_heap_property() {
        let mut heap = MinHeap::new();
        for v in [5, 3, 8, 1, 9, 0] {
            heap.insert(v);
            assert!(heap.valid_min_heap());
        }
        assert_eq!(heap.heap_size(), 6);
        assert_eq!(heap.extract_min(), Ok(0));
    }

    #[test]
    fn equal_keys_pop_by_sequence() {
        let mut heap = MinHeap::build(vec![(1, 2), (1, 0), (0, 5), (1, 1)]);
        assert_eq!(heap.extract_min(), Ok((0, 5)));
        assert_eq!(heap.extract_min(), Ok((1, 0)));
        assert_eq!(heap.extract_min(), Ok((1, 1)));
        assert_eq!(heap.extract_min(), Ok((1, 2)));
    }

    #[test]
    fn extract_from_empty_underflows() {
        let mut heap: MinHeap<u32> = MinHeap::default();
        assert_eq!(heap.extract_min(), Err(HeapError::Underflow));
    }

    #[test]
    fn interleaved_insert_and_extract() {
        let mut heap = MinHeap::build((0..64).rev().collect());
        assert!(heap.valid_min_heap());
        for v in 64..128 {
            assert_eq!(heap.extract_min(), Ok(v - 64));
            heap.insert(v);
            assert!(heap.valid_min_heap());
        }
        assert_eq!(heap.heap_size(), 64);
    }
}
