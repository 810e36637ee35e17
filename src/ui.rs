//! src/ui.rs
//!
//! Recursive layout Node + Panel trait used across the UI. Groups split
//! their area with a `Layout`; leaves hand it to a panel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree used to compose the UI each frame.
pub enum Node {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        spacing: u16,
        children: Vec<Node>,
    },
    Leaf {
        panel: Box<dyn Panel>,
    },
}

impl Node {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                spacing,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .spacing(*spacing)
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
            }
        }
    }
}

/// Helper: create a group node.
pub fn group(direction: Direction, constraints: Vec<Constraint>, children: Vec<Node>) -> Node {
    spaced(direction, 0, constraints, children)
}

/// Helper: create a group node with uniform spacing between children.
pub fn spaced(
    direction: Direction,
    spacing: u16,
    constraints: Vec<Constraint>,
    children: Vec<Node>,
) -> Node {
    Node::Group {
        direction,
        constraints,
        spacing,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf(panel: Box<dyn Panel>) -> Node {
    Node::Leaf { panel }
}

/// Leaf that paints nothing; soaks up leftover space at the bottom of a
/// column.
pub struct Spacer;

impl Panel for Spacer {
    fn draw(&self, _f: &mut Frame<'_>, _area: Rect) {}
}
