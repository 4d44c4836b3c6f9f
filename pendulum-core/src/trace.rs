use crate::error::ConfigError;
use glam::DVec2;
use std::collections::VecDeque;

/// Bounded FIFO of recent bob positions, oldest first
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    capacity: usize,
    points: VecDeque<DVec2>,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidTraceCapacity);
        }
        Ok(Self {
            capacity,
            points: VecDeque::with_capacity(capacity.min(4096)),
        })
    }

    /// Append a position, evicting the oldest ones past capacity
    pub fn push(&mut self, position: DVec2) {
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Retained positions, oldest first
    pub fn contents(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.points.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<DVec2> {
        self.contents().collect()
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

    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }
}

/// One trace buffer per bob, pushed and evicted in lockstep so index `i`
/// of every buffer belongs to the same frame.
#[derive(Debug, Clone)]
pub struct TraceSet {
    buffers: Vec<TraceBuffer>,
}

impl TraceSet {
    pub fn new(bobs: usize, capacity: usize) -> Result<Self, ConfigError> {
        let buffers = (0..bobs)
            .map(|_| TraceBuffer::new(capacity))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { buffers })
    }

    /// Push one position per bob.
    ///
    /// # Panics
    ///
    /// Panics if `positions` does not hold exactly one point per buffer.
    pub fn push_all(&mut self, positions: &[DVec2]) {
        assert_eq!(
            positions.len(),
            self.buffers.len(),
            "trace set expects one position per bob"
        );
        for (buffer, &pos) in self.buffers.iter_mut().zip(positions) {
            buffer.push(pos);
        }
    }

    pub fn buffers(&self) -> &[TraceBuffer] {
        &self.buffers
    }

    pub fn get(&self, bob: usize) -> Option<&TraceBuffer> {
        self.buffers.get(bob)
    }
}
