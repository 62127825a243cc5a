use schedsim::prelude::*;

/// Small deterministic generator so failures reproduce
struct Lcg(u64);

impl Lcg {
    fn below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

fn random_batches(count: usize) -> Vec<Vec<Process>> {
    let mut rng = Lcg(0x5eed);
    (0..count)
        .map(|_| {
            let len = 1 + rng.below(8) as usize;
            (0..len)
                .map(|i| {
                    let arrival = rng.below(16) as i64;
                    let burst = 1 + rng.below(10) as i64;
                    let priority = rng.below(5) as i64;
                    Process::new(i + 1, arrival, burst, priority).unwrap()
                })
                .collect()
        })
        .collect()
}

fn start_of(schedule: &Schedule, id: usize) -> Time {
    schedule
        .timeline()
        .slices()
        .iter()
        .find(|s| s.process_id == id)
        .map(|s| s.start)
        .unwrap()
}

#[test]
fn timing_invariants_hold_for_every_discipline() {
    for processes in random_batches(200) {
        for policy in PolicyType::ALL {
            for quantum in 1..=4 {
                let schedule = simulate(&processes, policy, Some(quantum)).unwrap();

                for p in schedule.processes() {
                    let completion = p.completion_time().unwrap();
                    let turnaround = p.turnaround_time().unwrap();
                    let waiting = p.waiting_time().unwrap();

                    assert_eq!(turnaround, completion - p.arrival_time());
                    assert_eq!(waiting, turnaround - p.burst_time());
                    assert!(completion >= p.arrival_time() + p.burst_time());
                }
            }
        }
    }
}

#[test]
fn timeline_accounts_for_all_work() {
    for processes in random_batches(200) {
        let total: Time = processes.iter().map(Process::burst_time).sum();

        for policy in PolicyType::ALL {
            let schedule = simulate(&processes, policy, Some(3)).unwrap();
            let timeline = schedule.timeline();

            assert_eq!(timeline.busy_time(), total);

            let mut previous_end = 0;
            for slice in timeline.slices() {
                let process = schedule.get(slice.process_id).unwrap();
                assert!(slice.start >= previous_end);
                assert!(slice.start >= process.arrival_time());
                previous_end = slice.end;
            }
        }
    }
}

#[test]
fn cpu_only_idles_when_nothing_is_ready() {
    for processes in random_batches(200) {
        for policy in PolicyType::ALL {
            let schedule = simulate(&processes, policy, Some(2)).unwrap();

            for (idle_from, _) in schedule.timeline().idle_gaps() {
                for p in schedule.processes() {
                    if p.arrival_time() <= idle_from {
                        assert!(p.completion_time().unwrap() <= idle_from);
                    }
                }
            }
        }
    }
}

#[test]
fn fcfs_completes_in_arrival_order() {
    for processes in random_batches(200) {
        let schedule = simulate(&processes, PolicyType::Fcfs, None).unwrap();
        let expected: Vec<usize> = OrderingPolicy::ByArrival
            .sorted_indices(&processes)
            .into_iter()
            .map(|i| processes[i].id())
            .collect();

        assert_eq!(schedule.completion_order(), expected);
    }
}

/// At each dispatch, the chosen process must be minimal among the
/// processes that had arrived and not yet started.
fn assert_chosen_is_minimal<K: Ord>(schedule: &Schedule, key: impl Fn(&Process) -> K) {
    for slice in schedule.timeline().slices() {
        let chosen = schedule.get(slice.process_id).unwrap();
        for other in schedule.processes() {
            if other.id() == chosen.id() {
                continue;
            }
            let waiting = other.arrival_time() <= slice.start
                && start_of(schedule, other.id()) > slice.start;
            if waiting {
                assert!(key(chosen) <= key(other));
            }
        }
    }
}

#[test]
fn sjf_chooses_shortest_ready_job() {
    for processes in random_batches(200) {
        let schedule = simulate(&processes, PolicyType::Sjf, None).unwrap();
        assert_chosen_is_minimal(&schedule, |p| (p.burst_time(), p.arrival_time()));
    }
}

#[test]
fn priority_chooses_most_urgent_ready_job() {
    for processes in random_batches(200) {
        let schedule = simulate(&processes, PolicyType::Priority, None).unwrap();
        assert_chosen_is_minimal(&schedule, |p| (p.priority(), p.arrival_time()));
    }
}

#[test]
fn round_robin_visits_match_quantum() {
    for processes in random_batches(200) {
        for quantum in 1..=4u64 {
            let schedule = simulate(&processes, PolicyType::RoundRobin, Some(quantum as i64)).unwrap();

            for slice in schedule.timeline().slices() {
                assert!(slice.duration() >= 1 && slice.duration() <= quantum);
            }
            for p in &processes {
                let visits = schedule.timeline().visits(p.id()) as u64;
                assert!(visits >= p.burst_time().div_ceil(quantum));
            }
        }
    }
}
