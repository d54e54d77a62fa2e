use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over the keys `0..num`, in the given order
pub struct SequentialKeys {
    position: usize,
    num: usize,
    order: KeyOrder,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOrder {
    Ascending,
    Descending,
}

impl SequentialKeys {
    pub fn new(num: usize, order: KeyOrder) -> SequentialKeys {
        SequentialKeys {
            position: 0,
            num,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let key = match self.order {
            KeyOrder::Ascending => self.position,
            KeyOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(key as i64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.num - self.position;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}
