use tessera_engine::coords::Rect;

use super::QuadMarker;

/// Objects a node keeps before it splits.
pub const MAX_IN_NODE: usize = 1;

/// Nodes at this depth never split, so coincident boxes cannot recurse forever.
pub const MAX_DEPTH: usize = 24;

/// Region quadtree over object bounding boxes.
///
/// Each node holds objects until it exceeds [`MAX_IN_NODE`], then splits into
/// four equal quadrants and pushes its objects down. An object overlapping
/// more than one quadrant (or none) stays in the node.
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
    bounds: Rect,
}

#[derive(Debug, Clone, Default)]
struct Node {
    objects: Vec<(usize, Rect)>,
    children: Option<Box<[Node; 4]>>,
}

impl QuadTree {
    pub fn new(bounds: Rect) -> Self {
        Self { root: Node::default(), bounds }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn insert(&mut self, id: usize, aabb: Rect) {
        self.root.insert((id, aabb), self.bounds, 0);
    }

    /// Ids of objects that share a visited node with `aabb`, excluding `id`.
    ///
    /// A broad-phase candidate set: every real overlap is included, not every
    /// candidate overlaps.
    pub fn might_collide(&self, id: usize, aabb: Rect) -> impl Iterator<Item = usize> + '_ {
        let mut out = Vec::new();
        self.root.collect_candidates(id, aabb, self.bounds, &mut out);
        out.into_iter()
    }

    /// Appends the pre-order traversal of the tree to `out`.
    pub fn export(&self, out: &mut Vec<f64>) {
        self.root.export(out);
    }

    pub fn to_traversal(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.export(&mut out);
        out
    }
}

impl Node {
    fn insert(&mut self, object: (usize, Rect), node_bounds: Rect, depth: usize) {
        let quadrants = node_bounds.quadrants();

        if self.children.is_some() {
            self.insert_into_children(object, &quadrants, depth);
            return;
        }

        self.objects.push(object);
        if self.objects.len() <= MAX_IN_NODE || depth >= MAX_DEPTH {
            return;
        }

        self.children = Some(Box::default());
        for object in std::mem::take(&mut self.objects) {
            self.insert_into_children(object, &quadrants, depth);
        }
    }

    fn insert_into_children(&mut self, object: (usize, Rect), quadrants: &[Rect; 4], depth: usize) {
        let mut hits = quadrants
            .iter()
            .enumerate()
            .filter(|(_, q)| object.1.collides_with(**q))
            .map(|(i, _)| i);

        let target = match (hits.next(), hits.next()) {
            (Some(i), None) => i,
            _ => {
                self.objects.push(object);
                return;
            }
        };

        if let Some(children) = &mut self.children {
            children[target].insert(object, quadrants[target], depth + 1);
        }
    }

    fn collect_candidates(&self, id: usize, aabb: Rect, node_bounds: Rect, out: &mut Vec<usize>) {
        out.extend(self.objects.iter().map(|o| o.0).filter(|&other| other != id));

        let Some(children) = &self.children else {
            return;
        };
        for (child, quadrant) in children.iter().zip(node_bounds.quadrants()) {
            if quadrant.collides_with(aabb) {
                child.collect_candidates(id, aabb, quadrant, out);
            }
        }
    }

    fn export(&self, out: &mut Vec<f64>) {
        match &self.children {
            None => out.push(QuadMarker::Leaf.value()),
            Some(children) => {
                out.push(QuadMarker::Internal.value());
                for child in children.iter() {
                    child.export(out);
                }
            }
        }
    }
}
