use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use lockstep::{
    engine::{config::EngineConfig, Engine},
    partition::{LogicalProcess, TIME_INFINITE},
};

// Partition that burns a fixed slice of CPU per round and idles after a
// set number of rounds.
struct SpinPartition {
    remaining: u64,
    work: u64,
    time: u64,
    acc: u64,
}

impl Default for SpinPartition {
    fn default() -> Self {
        Self {
            remaining: 0,
            work: 0,
            time: 0,
            acc: 1,
        }
    }
}

impl LogicalProcess for SpinPartition {
    fn enable(&mut self, _index: usize, _total: usize) {}

    fn process_one_round(&mut self) {
        if self.remaining == 0 {
            return;
        }
        let mut acc = self.acc;
        for i in 0..self.work {
            acc = acc.wrapping_mul(31).wrapping_add(i);
        }
        self.acc = acc;
        self.remaining -= 1;
        self.time += 1;
    }

    fn receive_messages(&mut self) {}

    fn next(&self) -> u64 {
        if self.remaining == 0 {
            TIME_INFINITE
        } else {
            self.time + 1
        }
    }

    fn is_local_finished(&self) -> bool {
        self.remaining == 0
    }

    fn now(&self) -> u64 {
        self.time
    }
}

fn round_engine_benchmark(c: &mut Criterion) {
    const THREADS: usize = 4;
    const PARTITIONS: usize = 8;
    const ROUNDS: u64 = 1000;
    const WORK_PER_ROUND: u64 = 256;

    let mut group = c.benchmark_group("RoundEngineRun");
    group.sample_size(10);

    group.bench_function(
        format!("run_threads_{THREADS}_partitions_{PARTITIONS}_rounds_{ROUNDS}"),
        |b| {
            b.iter(|| {
                let mut engine =
                    Engine::<SpinPartition>::create(EngineConfig::new(THREADS, PARTITIONS))
                        .unwrap();
                for index in 1..=PARTITIONS {
                    let partition = engine.partition_mut(index).unwrap();
                    partition.remaining = ROUNDS;
                    partition.work = WORK_PER_ROUND;
                }
                engine.run().unwrap();
                black_box(engine.smallest_time());
            });
        },
    );

    group.finish();
}

criterion_group!(benches, round_engine_benchmark);
criterion_main!(benches);
