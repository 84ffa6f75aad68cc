use anyhow::{Result, bail};
use fifo::Queue;

use crate::op::{Op, Stats};

/// Reference behavior: a growing vector whose consumed prefix is skipped.
#[derive(Debug, Default)]
struct Model {
    items: Vec<u64>,
    head: usize,
}

impl Model {
    fn live(&self) -> &[u64] {
        &self.items[self.head..]
    }

    fn apply(&mut self, op: Op) -> Option<u64> {
        match op {
            Op::Enqueue(v) => {
                self.items.push(v);
                None
            },
            Op::Dequeue => {
                let v = self.live().first().copied();
                if v.is_some() {
                    self.head += 1;
                }
                v
            },
            Op::Front => self.live().first().copied(),
            Op::Rear => self.live().last().copied(),
            Op::Clear => {
                self.items.clear();
                self.head = 0;
                None
            },
            Op::ToVec => None,
        }
    }
}

/// Applies `ops` random operations to a [`Queue`] and to the model, failing
/// on the first step where they disagree.
pub(crate) fn replay(rng: &mut fastrand::Rng, ops: usize) -> Result<Stats> {
    let mut q = Queue::new();
    let mut model = Model::default();
    let mut stats = Stats::default();

    for step in 0..ops {
        let op = Op::random(rng);
        tracing::debug!("step {step}: {op:?}, len={}", q.len());

        let expected = model.apply(op);
        let actual = match op {
            Op::Enqueue(v) => {
                q.enqueue(v);
                stats.enqueued += 1;
                None
            },
            Op::Dequeue => q.dequeue(),
            Op::Front => q.front().copied(),
            Op::Rear => q.rear().copied(),
            Op::Clear => {
                q.clear();
                stats.cleared += 1;
                None
            },
            Op::ToVec => {
                let mut snapshot = q.to_vec();
                if snapshot != model.live() {
                    bail!(
                        "step {step}: to_vec returned {snapshot:?}, expected {:?}",
                        model.live()
                    );
                }
                // Scribbling over the snapshot must not reach the queue.
                snapshot.iter_mut().for_each(|v| *v = !*v);
                None
            },
        };

        if actual != expected {
            bail!("step {step}: {op:?} returned {actual:?}, expected {expected:?}");
        }
        match (op, actual) {
            (Op::Dequeue, Some(_)) => stats.dequeued += 1,
            (Op::Dequeue | Op::Front | Op::Rear, None) => stats.missed += 1,
            _ => {},
        }
        if q.len() != model.live().len() {
            bail!("step {step}: len={}, expected {}", q.len(), model.live().len());
        }
        if q.is_empty() != model.live().is_empty() {
            bail!(
                "step {step}: is_empty={}, expected {}",
                q.is_empty(),
                model.live().is_empty()
            );
        }
        stats.peak_len = stats.peak_len.max(q.len());
    }

    if q.to_vec() != model.live() {
        bail!("final contents diverged, len={}", q.len());
    }
    Ok(stats)
}
