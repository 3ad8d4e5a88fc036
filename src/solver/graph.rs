use std::borrow::Cow;
use std::fs;
use std::io;
use std::process::Command;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;

use crate::map::MapModel;
use crate::state::{Fingerprint, PuzzleState};

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Explored,
}

/// The search tree as generated so far, for rendering with graphviz.
pub(crate) struct Graph<'a> {
    map: &'a MapModel,
    node_to_index: FnvHashMap<Fingerprint<'a>, usize>,
    nodes: Vec<(&'a PuzzleState<'a>, Type)>,
    edges: Vec<Ed>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(map: &'a MapModel) -> Self {
        Self {
            map,
            node_to_index: FnvHashMap::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Only states that entered the frontier get added so fingerprints are unique.
    pub(crate) fn add(&mut self, state: &'a PuzzleState<'a>) {
        let node_index = self.nodes.len();
        let previous = self
            .node_to_index
            .insert(state.fingerprint(self.map), node_index);
        debug_assert!(previous.is_none());
        self.nodes.push((state, Type::Queued));

        if let Some(parent) = state.parent() {
            let parent_index = self.node_to_index[&parent.fingerprint(self.map)];
            self.edges.push((parent_index, node_index));
        }
    }

    pub(crate) fn mark_explored(&mut self, state: &'a PuzzleState<'a>) {
        let index = self.node_to_index[&state.fingerprint(self.map)];
        self.nodes[index].1 = Type::Explored;
    }

    /// Writes `state-space.dot` and renders it to svg, failures are only logged.
    pub(crate) fn draw(&self) {
        if let Err(err) = self.try_draw() {
            warn!("Failed to draw the search tree: {}", err);
        }
    }

    fn try_draw(&self) -> io::Result<()> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8_lossy(&writer);
        let s = s.replace("digraph G {", "digraph G {\n    graph [fontname = \"hack\"];\n    node [fontname = \"hack\"];\n    edge [fontname = \"hack\"];");
        fs::write("state-space.dot", &s)?;

        let status = Command::new("dot")
            .args(&["-Tsvg", "-O", "state-space.dot"])
            .status()?;
        if !status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("dot exited with {}", status),
            ));
        }
        Ok(())
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let state = self.nodes[*n].0;
        LabelText::EscStr(
            format!(
                "d: {}, h: {}\ncost: {}\n{}",
                state.depth(),
                state.heuristic(),
                state.cost(),
                self.map.xsb_with_state(state)
            )
            .into(),
        )
    }

    fn edge_label(&'a self, e: &Ed) -> LabelText<'a> {
        let action = self.nodes[e.1].0.action();
        LabelText::LabelStr(action.map(|dir| dir.to_string()).unwrap_or_default().into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].1 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        match self.nodes[*n].1 {
            Type::Explored => Some(LabelText::LabelStr("red".into())),
            Type::Queued => None,
        }
    }
}
