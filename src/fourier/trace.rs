//! Rolling history of the chain's terminal point.

use std::collections::VecDeque;

use glam::Vec2;

/// Bounded newest-first history of terminal points.
///
/// Each push inserts at the front; once the buffer is at capacity, every
/// push also evicts the oldest entry from the tail, so the length never
/// exceeds the capacity. The renderer draws the contents as a scrolling
/// waveform, one horizontal unit per index.
pub struct TraceBuffer {
    points: VecDeque<Vec2>,
    capacity: usize,
}

impl TraceBuffer {
    /// Create an empty buffer with a fixed capacity for the session
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a terminal point, evicting the oldest entry if full
    pub fn push(&mut self, point: Vec2) {
        self.points.push_front(point);
        if self.points.len() > self.capacity {
            self.points.pop_back();
        }
    }

    /// Iterate newest-first (index 0 is the most recent point)
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }

    /// Most recently pushed point, if any
    pub fn front(&self) -> Option<Vec2> {
        self.points.front().copied()
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_up_to_capacity() {
        let mut trace = TraceBuffer::new(8);
        assert!(trace.is_empty());

        for i in 0..8 {
            trace.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trace.len(), 8);
    }

    #[test]
    fn test_push_beyond_capacity_evicts_oldest() {
        let capacity = 16;
        let mut trace = TraceBuffer::new(capacity);

        for i in 0..capacity + 5 {
            trace.push(Vec2::new(i as f32, -(i as f32)));
        }

        // Never more than capacity, and the front is the latest push
        assert_eq!(trace.len(), capacity);
        let last = (capacity + 4) as f32;
        assert_eq!(trace.front(), Some(Vec2::new(last, -last)));
    }

    #[test]
    fn test_snapshot_is_newest_first() {
        let mut trace = TraceBuffer::new(4);
        for i in 0..4 {
            trace.push(Vec2::new(i as f32, 0.0));
        }

        let xs: Vec<f32> = trace.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_oldest_retained_after_overflow() {
        // 400 pushes into a 350-slot buffer: the first 50 are gone, the
        // oldest survivor is the 51st point pushed (index 50)
        let mut trace = TraceBuffer::new(350);
        for i in 0..400 {
            trace.push(Vec2::new(i as f32, i as f32 * 2.0));
        }

        assert_eq!(trace.len(), 350);
        let oldest = *trace.iter().last().unwrap();
        assert_eq!(oldest, Vec2::new(50.0, 100.0));
    }
}
