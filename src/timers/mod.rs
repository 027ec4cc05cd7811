//! Nested wall-clock timers for solver phases.
//!
//! Timers are keyed by static names and form a tree following the
//! order in which they were started, e.g. `solve -> spg iteration ->
//! projection`.  Use the [`timeit!`] macro to time a block of code as a
//! child of the currently running timer, and [`notimeit!`] to exclude a
//! block (typically printing) from every running timer.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct TimerNode {
    started: Option<Instant>,
    elapsed: Duration,
    children: BTreeMap<&'static str, TimerNode>,
}

impl TimerNode {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(t0) = self.started.take() {
            self.elapsed += t0.elapsed();
        }
    }

    // bank time so far and pause every running timer below
    fn suspend(&mut self) {
        if let Some(t0) = self.started {
            self.elapsed += t0.elapsed();
            self.children.values_mut().for_each(TimerNode::suspend);
        }
    }

    fn resume(&mut self) {
        if self.started.is_some() {
            self.started = Some(Instant::now());
            self.children.values_mut().for_each(TimerNode::resume);
        }
    }

    fn write(&self, out: &mut dyn Write, key: &str, depth: usize) -> std::io::Result<()> {
        writeln!(out, "{:indent$}{} : {:?}", "", key, self.elapsed, indent = 4 * depth)?;
        for (k, child) in self.children.iter() {
            child.write(out, k, depth + 1)?;
        }
        Ok(())
    }
}

/// Collection of nested timers.

#[derive(Default, Debug)]
pub struct Timers {
    // names of the running timers, outermost first
    stack: Vec<&'static str>,
    root: TimerNode,
}

impl Timers {
    fn active_mut(&mut self) -> &mut TimerNode {
        let mut node = &mut self.root;
        for key in self.stack.iter() {
            node = node.children.entry(*key).or_default();
        }
        node
    }

    /// Clears the accumulated time of the top level timer `key`.
    pub fn reset_timer(&mut self, key: &'static str) {
        self.root.children.remove(key);
    }

    /// Starts timer `key` as a child of the running timer.
    pub fn start_as_current(&mut self, key: &'static str) {
        self.active_mut().children.entry(key).or_default().start();
        self.stack.push(key);
    }

    /// Stops the innermost running timer.
    pub fn stop_current(&mut self) {
        self.active_mut().stop();
        self.stack.pop();
    }

    /// Pauses every running timer.  Used by `notimeit!`.
    pub fn suspend(&mut self) {
        self.root.children.values_mut().for_each(TimerNode::suspend);
    }

    /// Restarts every paused timer.  Used by `notimeit!`.
    pub fn resume(&mut self) {
        self.root.children.values_mut().for_each(TimerNode::resume);
    }

    /// Accumulated time of the timer at `path`, e.g. `&["solve", "projection"]`.
    pub fn elapsed(&self, path: &[&'static str]) -> Option<Duration> {
        let mut node = &self.root;
        for key in path {
            node = node.children.get(key)?;
        }
        Some(node.elapsed)
    }

    /// Sum over all top level timers.
    pub fn total_time(&self) -> Duration {
        self.root.children.values().map(|t| t.elapsed).sum()
    }

    /// Writes the timer tree, one indented line per timer.
    pub fn print(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for (key, t) in self.root.children.iter() {
            t.write(out, key, 0)?;
        }
        Ok(())
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {
        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {
        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;
