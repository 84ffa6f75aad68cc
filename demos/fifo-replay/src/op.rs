/// A single queue operation applied during a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Enqueue(u64),
    Dequeue,
    Front,
    Rear,
    Clear,
    ToVec,
}

impl Op {
    /// Picks an operation, biased towards enqueues so that the queue grows
    /// between the occasional clears.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        match rng.u8(0..100) {
            0..45 => Op::Enqueue(rng.u64(..)),
            45..80 => Op::Dequeue,
            80..88 => Op::Front,
            88..96 => Op::Rear,
            96..98 => Op::ToVec,
            _ => Op::Clear,
        }
    }
}

/// Counters collected over a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Stats {
    pub enqueued: usize,
    pub dequeued: usize,
    /// Dequeues and peeks that found the queue empty.
    pub missed: usize,
    pub cleared: usize,
    pub peak_len: usize,
}
