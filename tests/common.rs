//! Common test utilities for the qroute test suite.
#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use qroute::{
    Environment, Location, NODE_COUNT, Result,
    ports::{Observer, RandomSource},
    q_learning::TdUpdate,
};

/// Observer that counts updates through shared atomics.
#[derive(Clone, Default)]
pub struct CountingObserver {
    pub updates: Arc<AtomicUsize>,
    pub started: Arc<AtomicBool>,
}

impl CountingObserver {
    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

impl Observer for CountingObserver {
    fn on_learning_start(&mut self, _goal: usize, _total_iterations: usize) -> Result<()> {
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn on_update(&mut self, _update: &TdUpdate) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Random source replaying scripted (state, candidate position) pairs.
pub struct ScriptedSource {
    draws: VecDeque<(usize, usize)>,
    pending_pick: usize,
}

impl ScriptedSource {
    pub fn new(draws: &[(usize, usize)]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            pending_pick: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_index(&mut self, upper: usize) -> usize {
        let (state, pick) = self.draws.pop_front().expect("script exhausted");
        assert!(state < upper);
        self.pending_pick = pick;
        state
    }

    fn uniform_choice(&mut self, candidates: &[usize]) -> Option<usize> {
        candidates.get(self.pending_pick).copied()
    }
}

/// Shortest number of moves from `from` to `to` along real edges.
pub fn shortest_hops(env: &Environment, from: usize, to: usize) -> Option<usize> {
    let mut distance = [None; NODE_COUNT];
    distance[from] = Some(0);
    let mut queue = VecDeque::from([from]);
    while let Some(state) = queue.pop_front() {
        let next_distance = distance[state].map(|d: usize| d + 1);
        for next in env.neighbors(state) {
            if distance[next].is_none() {
                distance[next] = next_distance;
                queue.push_back(next);
            }
        }
    }
    distance[to]
}

/// Assert that `route` runs from `start` to `end` over real edges only.
pub fn assert_valid_route(env: &Environment, route: &[Location], start: &str, end: &str) {
    assert_eq!(route.first().map(Location::as_str), Some(start));
    assert_eq!(route.last().map(Location::as_str), Some(end));
    for pair in route.windows(2) {
        let from = env.location_to_state(pair[0].as_str()).unwrap();
        let to = env.location_to_state(pair[1].as_str()).unwrap();
        assert!(
            env.is_edge(from, to),
            "{} -> {} is not an edge in route {:?}",
            pair[0],
            pair[1],
            route
        );
    }
}

pub fn labels(route: &[Location]) -> Vec<&str> {
    route.iter().map(Location::as_str).collect()
}
