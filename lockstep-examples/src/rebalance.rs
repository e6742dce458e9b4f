use rand::Rng;

use lockstep::{
    engine::{config::EngineConfig, Engine},
    order::SortMethod,
    partition::{current_partition, LogicalProcess, TIME_INFINITE},
};

/// Partition with a deliberately skewed backlog, so the ranking heuristic
/// has something to chew on.
pub struct BacklogPartition {
    pub backlog: u64,
    time: u64,
    slot_seen: Option<usize>,
}

impl Default for BacklogPartition {
    fn default() -> Self {
        BacklogPartition {
            backlog: 0,
            time: 0,
            slot_seen: None,
        }
    }
}

impl LogicalProcess for BacklogPartition {
    fn enable(&mut self, _index: usize, _total: usize) {}

    fn process_one_round(&mut self) {
        if self.backlog == 0 {
            return;
        }
        self.slot_seen = current_partition();
        self.backlog -= 1;
        self.time += 1;
    }

    fn receive_messages(&mut self) {}

    fn next(&self) -> u64 {
        if self.backlog == 0 {
            TIME_INFINITE
        } else {
            self.time + 1
        }
    }

    fn is_local_finished(&self) -> bool {
        self.backlog == 0
    }

    fn now(&self) -> u64 {
        self.time
    }

    fn pending_event_count(&self) -> usize {
        self.backlog as usize
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let config = EngineConfig::new(4, 6).with_sort_method(SortMethod::ByPendingEventCount);
    let mut engine = Engine::<BacklogPartition>::create(config).unwrap();
    println!(
        "{} threads, ranking by {:?}",
        engine.thread_count(),
        engine.config().sort_method
    );

    let mut rng = rand::rng();
    for index in 1..=6 {
        engine.partition_mut(index).unwrap().backlog = rng.random_range(100..5000);
    }
    engine.run().unwrap();
    println!("first run done, horizon at {}", engine.smallest_time());

    // grow the system and keep going; existing partitions carry their state
    engine.enable_new(2).unwrap();
    for index in 7..=8 {
        engine.partition_mut(index).unwrap().backlog = rng.random_range(100..5000);
    }
    engine.run().unwrap();

    for index in 1..=engine.partition_count() {
        let partition = engine.partition(index).unwrap();
        println!(
            "partition {index}: local time {}, dispatched as slot {:?}",
            partition.now(),
            partition.slot_seen
        );
    }
}
