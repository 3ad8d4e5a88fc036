use std::fmt::{self, Debug, Display, Formatter};

use prettytable::{format, Cell, Row, Table};
use separator::Separatable;

/// Counts of states by depth.
///
/// Every created state is either a duplicate (its fingerprint was already known
/// so it never entered the frontier), explored, or still queued when the search ends.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    explored_states: Vec<u64>,
    frontier_size: u64,
    max_frontier_size: u64,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn total_explored(&self) -> u64 {
        self.explored_states.iter().sum()
    }

    /// Number of states left in the frontier when the search ended.
    pub fn frontier_size(&self) -> u64 {
        self.frontier_size
    }

    pub fn max_frontier_size(&self) -> u64 {
        self.max_frontier_size
    }

    pub(crate) fn add_created(&mut self, depth: u32) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    pub(crate) fn add_duplicate(&mut self, depth: u32) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    /// Returns true when this is the first state explored at `depth`.
    pub(crate) fn add_explored(&mut self, depth: u32) -> bool {
        Self::add(&mut self.explored_states, depth)
    }

    pub(crate) fn update_frontier(&mut self, len: usize) {
        self.frontier_size = len as u64;
        if self.frontier_size > self.max_frontier_size {
            self.max_frontier_size = self.frontier_size;
        }
    }

    fn add(counts: &mut Vec<u64>, depth: u32) -> bool {
        let depth = depth as usize;
        let mut ret = false;

        // while because with a priority frontier depths can be reached out of order
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }

    fn at(counts: &[u64], depth: usize) -> u64 {
        counts.get(depth).cloned().unwrap_or(0)
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "explored by depth: {:?}", self.explored_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(f, "total duplicates: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "total explored: {}", self.total_explored().separated_string())?;
        writeln!(f, "frontier size: {}", self.frontier_size.separated_string())?;
        writeln!(f, "max frontier size: {}", self.max_frontier_size.separated_string())
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "States created total: {}", self.total_created().separated_string())?;
        writeln!(f, "Duplicates skipped total: {}", self.total_duplicates().separated_string())?;
        writeln!(f, "Explored total: {}", self.total_explored().separated_string())?;
        writeln!(f, "Left in frontier: {}", self.frontier_size.separated_string())?;
        writeln!(f, "Max frontier size: {}", self.max_frontier_size.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);
        table.set_titles(Row::new(
            ["Depth", "Created", "Duplicates", "Explored", "Queued"]
                .iter()
                .map(|title| Cell::new(title))
                .collect(),
        ));
        // created_states is the longest vec - nothing can be explored or skipped before it's created
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let duplicates = Self::at(&self.duplicate_states, depth);
            let explored = Self::at(&self.explored_states, depth);
            let queued = created - duplicates - explored;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&explored.separated_string()),
                Cell::new(&queued.separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(0));
        assert!(stats.add_explored(0));
        assert!(stats.add_created(1));
        assert!(!stats.add_created(1));
        assert!(stats.add_created(3));
        assert!(stats.add_duplicate(1));
        assert!(stats.add_explored(1));

        assert_eq!(stats.total_created(), 4);
        assert_eq!(stats.total_duplicates(), 1);
        assert_eq!(stats.total_explored(), 2);
        assert_eq!(stats.created_states, vec![1, 2, 0, 1]);
    }

    #[test]
    fn frontier_sizes() {
        let mut stats = Stats::new();
        stats.update_frontier(3);
        stats.update_frontier(7);
        stats.update_frontier(2);
        assert_eq!(stats.frontier_size(), 2);
        assert_eq!(stats.max_frontier_size(), 7);
    }

    #[test]
    fn formatting() {
        let mut stats = Stats::new();
        for _ in 0..1234 {
            stats.add_created(0);
        }
        stats.add_explored(0);
        let s = stats.to_string();
        assert!(s.starts_with("States created total: 1,234\n"));
        assert!(s.contains("Explored total: 1\n"));
        assert!(s.contains("1,233"));
        // the per-depth table follows the totals
        let table = s.split("\n\n").nth(1).unwrap();
        assert!(table.contains("Depth"));
        assert!(table.contains("Queued"));
        assert!(table.contains("0:"));
        assert!(format!("{:?}", stats).contains("created by depth: [1234]"));
    }
}
