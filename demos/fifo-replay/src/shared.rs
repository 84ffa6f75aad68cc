use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Result, anyhow, bail};
use fifo::Queue;

use crate::op::Stats;

/// An entry tagged with its producer and that producer's sequence number.
type Entry = (usize, u64);

/// Runs `producers` threads enqueuing into one mutex-guarded [`Queue`] while
/// a consumer drains it, checking that every producer's entries come out in
/// the order they went in.
pub(crate) fn shared(rng: &mut fastrand::Rng, ops: usize, producers: usize) -> Result<Stats> {
    if producers == 0 {
        bail!("at least one producer is required");
    }
    let per_producer = ops / producers;
    let total = per_producer * producers;
    let queue = Mutex::new(Queue::<Entry>::new());
    let peak_len = AtomicUsize::new(0);
    let seeds = std::iter::repeat_with(|| rng.u64(..))
        .take(producers)
        .collect::<Vec<_>>();

    let consumed = std::thread::scope(|cx| -> Result<Stats> {
        for (id, seed) in seeds.into_iter().enumerate() {
            let (queue, peak_len) = (&queue, &peak_len);
            std::thread::Builder::new()
                .name(format!("producer-{id}"))
                .spawn_scoped(cx, move || {
                    let mut rng = fastrand::Rng::with_seed(seed);
                    for seq in 0..per_producer as u64 {
                        let len = {
                            let mut q = queue.lock().unwrap_or_else(|e| e.into_inner());
                            q.enqueue((id, seq));
                            q.len()
                        };
                        peak_len.fetch_max(len, Ordering::Relaxed);
                        if rng.u8(0..8) == 0 {
                            std::thread::yield_now();
                        }
                    }
                    tracing::debug!("finished producing, count={per_producer}");
                })?;
        }

        let consumer = std::thread::Builder::new()
            .name("consumer".to_owned())
            .spawn_scoped(cx, || consume(&queue, producers, total))?;
        consumer
            .join()
            .map_err(|_| anyhow!("consumer thread panicked"))?
    })?;

    Ok(Stats {
        peak_len: peak_len.into_inner(),
        ..consumed
    })
}

fn consume(queue: &Mutex<Queue<Entry>>, producers: usize, total: usize) -> Result<Stats> {
    let mut next_seq = vec![0u64; producers];
    let mut stats = Stats {
        enqueued: total,
        ..Stats::default()
    };

    while stats.dequeued < total {
        let entry = queue.lock().unwrap_or_else(|e| e.into_inner()).dequeue();
        let Some((id, seq)) = entry else {
            stats.missed += 1;
            std::thread::yield_now();
            continue;
        };
        let Some(expected) = next_seq.get_mut(id) else {
            bail!("dequeued entry from unknown producer {id}");
        };
        if seq != *expected {
            bail!("producer {id}: dequeued seq {seq}, expected {expected}");
        }
        *expected += 1;
        stats.dequeued += 1;
    }

    let q = queue.lock().unwrap_or_else(|e| e.into_inner());
    if !q.is_empty() {
        bail!("{} entries left after consuming everything", q.len());
    }
    tracing::debug!("finished consuming, count={total}");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_preserves_per_producer_order() {
        let mut rng = fastrand::Rng::with_seed(3);
        let stats = shared(&mut rng, 4000, 4).unwrap();
        assert_eq!(stats.enqueued, 4000);
        assert_eq!(stats.dequeued, 4000);
        assert!(stats.peak_len <= 4000);
    }

    #[test]
    fn shared_rounds_down_to_whole_producers() {
        let mut rng = fastrand::Rng::with_seed(11);
        let stats = shared(&mut rng, 10, 3).unwrap();
        assert_eq!(stats.dequeued, 9);
    }

    #[test]
    fn shared_rejects_zero_producers() {
        let mut rng = fastrand::Rng::new();
        assert!(shared(&mut rng, 10, 0).is_err());
    }
}
