use std::time::Instant;

use rand::Rng;

use lockstep::{
    engine::{config::EngineConfig, Engine},
    partition::{LogicalProcess, TIME_INFINITE},
};

/// Partition that executes a jittered batch of synthetic events per round.
pub struct JobPartition {
    pub remaining: u64,
    pub work: u64,
    time: u64,
    executed: u64,
    acc: u64,
}

impl Default for JobPartition {
    fn default() -> Self {
        JobPartition {
            remaining: 0,
            work: 0,
            time: 0,
            executed: 0,
            acc: 1,
        }
    }
}

impl LogicalProcess for JobPartition {
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
        self.executed += self.work;
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

    fn event_count(&self) -> u64 {
        self.executed
    }

    fn pending_event_count(&self) -> usize {
        self.remaining as usize
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let threads = 4;
    let partitions = 8;
    let rounds = 10_000;

    let mut engine =
        Engine::<JobPartition>::create(EngineConfig::new(threads, partitions)).unwrap();
    let mut rng = rand::rng();
    for index in 1..=partitions {
        let partition = engine.partition_mut(index).unwrap();
        partition.remaining = rounds;
        partition.work = rng.random_range(64..512);
    }

    let start = Instant::now();
    engine.run().unwrap();
    let elapsed = start.elapsed();

    let total_events: u64 = (1..=partitions)
        .map(|index| engine.partition(index).unwrap().event_count())
        .sum();

    println!("Run Results:");
    println!("Total time: {:.2?}", elapsed);
    println!("Rounds per partition: {rounds}");
    println!("Total events processed: {total_events}");
    println!(
        "Events per second: {:.2}",
        total_events as f64 / elapsed.as_secs_f64()
    );
}
