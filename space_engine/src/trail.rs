//! Bounded position history for orbit visualization

use crate::vector::Vector;

/// Fixed-capacity ring buffer of past positions.
///
/// Writes go to `cursor % capacity`, and the cursor only ever grows, so once
/// the buffer is full the oldest sample is overwritten in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<V> {
    points: Vec<V>,
    capacity: usize,
    cursor: u64,
}

impl<V: Vector> Trail<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            cursor: 0,
        }
    }

    pub fn push(&mut self, position: V) {
        if self.capacity == 0 {
            return;
        }

        if self.points.len() < self.capacity {
            self.points.push(position);
        } else {
            let slot = (self.cursor % self.capacity as u64) as usize;
            self.points[slot] = position;
        }
        self.cursor += 1;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total number of samples ever written, including overwritten ones.
    pub fn total_written(&self) -> u64 {
        self.cursor
    }

    /// Most recently recorded position.
    pub fn latest(&self) -> Option<V> {
        if self.points.is_empty() {
            return None;
        }
        let slot = ((self.cursor - 1) % self.capacity as u64) as usize;
        Some(self.points[slot])
    }

    /// Positions ordered oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &V> + '_ {
        let start = if self.capacity == 0 || self.points.len() < self.capacity {
            0
        } else {
            (self.cursor % self.capacity as u64) as usize
        };
        let (newer, older) = self.points.split_at(start);
        older.iter().chain(newer.iter())
    }

}
