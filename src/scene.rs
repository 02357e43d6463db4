//! Scene graph built from one drawing.
//!
//! Nodes live in an index-addressed arena and refer to their parents by
//! [`NodeId`], so the graph is a tree by construction. Every node is also
//! registered under its qualified name (`Kind::shortName`), which is what the
//! document writer emits in the relations and connections sections.
//!
//! Per-type tallies are accumulated while nodes are inserted; the writer
//! declares them in the definitions section instead of recounting.

use std::collections::HashMap;

use crate::color::{DEFAULT_FILL, hex_to_rgb};
use crate::error::{ExportError, Result};
use crate::types::{Color, DrawingItem, Point3D};

/// Qualified name of the implicit scene root every top-level node hangs off
pub const SCENE_ROOT: &str = "Model::Scene";

/// Model subtype as written after the node name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    Null,
    Mesh,
    BindPose,
    Empty,
}

impl Subtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::Null => "Null",
            Subtype::Mesh => "Mesh",
            Subtype::BindPose => "BindPose",
            Subtype::Empty => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    SceneRoot,
    Node(NodeId),
}

/// Role-specific payload of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Model {
        subtype: Subtype,
        translation: Point3D,
    },
    /// `color` is `None` when the source color could not be parsed
    Material { color: Option<Color> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub short_name: String,
    pub qualified_name: String,
    pub parent: Parent,
    pub kind: NodeKind,
}

impl SceneNode {
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Model { .. } => "Model",
            NodeKind::Material { .. } => "Material",
        }
    }

    pub fn subtype(&self) -> Subtype {
        match self.kind {
            NodeKind::Model { subtype, .. } => subtype,
            NodeKind::Material { .. } => Subtype::Empty,
        }
    }

    pub fn is_model(&self) -> bool {
        matches!(self.kind, NodeKind::Model { .. })
    }

    /// Translation of a model node; materials sit at the origin
    pub fn translation(&self) -> Point3D {
        match self.kind {
            NodeKind::Model { translation, .. } => translation,
            NodeKind::Material { .. } => Point3D::origin(),
        }
    }
}

/// Object counts declared in the definitions section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tallies {
    pub models: usize,
    pub geometries: usize,
    pub materials: usize,
}

impl Tallies {
    pub fn total(&self) -> usize {
        self.models + self.geometries + self.materials
    }

    fn record(&mut self, kind: &NodeKind) {
        match kind {
            NodeKind::Model { subtype, .. } => {
                self.models += 1;
                if *subtype == Subtype::Mesh {
                    self.geometries += 1;
                }
            }
            NodeKind::Material { .. } => self.materials += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    index: HashMap<String, NodeId>,
    tallies: Tallies,
}

impl SceneGraph {
    /// Nodes in creation order
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    /// The drawing's root model, if the graph has been populated
    pub fn root(&self) -> Option<&SceneNode> {
        self.nodes.first()
    }

    /// Look up a node by its qualified name
    pub fn find(&self, qualified_name: &str) -> Option<NodeId> {
        self.index.get(qualified_name).copied()
    }

    pub fn tallies(&self) -> Tallies {
        self.tallies
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn models(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(|n| n.is_model())
    }

    /// Qualified name of a node's parent
    pub fn parent_name(&self, node: &SceneNode) -> &str {
        match node.parent {
            Parent::SceneRoot => SCENE_ROOT,
            Parent::Node(id) => &self.nodes[id.0].qualified_name,
        }
    }

    fn insert(&mut self, short_name: String, kind: NodeKind, parent: Parent) -> Result<NodeId> {
        let qualified_name = match kind {
            NodeKind::Model { .. } => format!("Model::{}", short_name),
            NodeKind::Material { .. } => format!("Material::{}", short_name),
        };

        if qualified_name == SCENE_ROOT || self.index.contains_key(&qualified_name) {
            return Err(ExportError::DuplicateName(qualified_name));
        }

        let id = NodeId(self.nodes.len());
        self.tallies.record(&kind);
        self.index.insert(qualified_name.clone(), id);
        self.nodes.push(SceneNode {
            short_name,
            qualified_name,
            parent,
            kind,
        });
        Ok(id)
    }
}

/// Naming counters for one build; shared across all paths of a drawing
#[derive(Debug, Default)]
struct BuildContext {
    areas: usize,
    anchors: usize,
    meshes: usize,
    materials: usize,
}

impl BuildContext {
    fn next(counter: &mut usize, prefix: &str) -> String {
        let name = format!("{}{}", prefix, counter);
        *counter += 1;
        name
    }

    fn area(&mut self) -> String {
        Self::next(&mut self.areas, "Area")
    }

    fn anchor(&mut self) -> String {
        Self::next(&mut self.anchors, "Anchor")
    }

    fn mesh(&mut self) -> String {
        Self::next(&mut self.meshes, "glaze")
    }

    fn material(&mut self) -> String {
        Self::next(&mut self.materials, "Material")
    }
}

/// Names end up both in quoted node names and in the output file name, so
/// quotes, line breaks, path separators and `.`/`..` are refused.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['"', '\n', '\r', '/', '\\'])
    {
        return Err(ExportError::InvalidName(name.to_string()));
    }
    Ok(())
}

fn null_model(translation: Point3D) -> NodeKind {
    NodeKind::Model {
        subtype: Subtype::Null,
        translation,
    }
}

/// Build the scene graph for one drawing.
///
/// Per path: an `AreaN` group under the root, one `AnchorN` per sampled
/// point under the area, a `glazeN` mesh placeholder under the area and a
/// `MaterialN` under the mesh. Only anchors carry a translation.
pub fn build(item: &DrawingItem) -> Result<SceneGraph> {
    validate_name(&item.name)?;

    let mut graph = SceneGraph::default();
    let mut ctx = BuildContext::default();

    let root = graph.insert(
        item.name.clone(),
        null_model(Point3D::origin()),
        Parent::SceneRoot,
    )?;

    for path in &item.paths {
        let area = graph.insert(ctx.area(), null_model(Point3D::origin()), Parent::Node(root))?;

        for point in &path.points {
            graph.insert(
                ctx.anchor(),
                null_model(Point3D::from(*point)),
                Parent::Node(area),
            )?;
        }

        let mesh = graph.insert(
            ctx.mesh(),
            NodeKind::Model {
                subtype: Subtype::Mesh,
                translation: Point3D::origin(),
            },
            Parent::Node(area),
        )?;

        let color = hex_to_rgb(path.color.as_deref().unwrap_or(DEFAULT_FILL));
        graph.insert(
            ctx.material(),
            NodeKind::Material { color },
            Parent::Node(mesh),
        )?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PathSample, Point2D};
    use std::collections::HashSet;

    fn path(color: Option<&str>, n: usize) -> PathSample {
        let points = (0..n).map(|i| Point2D::new(i as f64, -(i as f64))).collect();
        PathSample::new(color.map(str::to_string), points)
    }

    #[test]
    fn test_counts_follow_path_shape() {
        let item = DrawingItem::new("drawing", vec![path(None, 3), path(Some("#00FF00"), 5)]);
        let graph = build(&item).unwrap();
        let t = graph.tallies();
        assert_eq!(t.models, 1 + 2 + 2 + 8);
        assert_eq!(t.geometries, 2);
        assert_eq!(t.materials, 2);
        assert_eq!(t.total(), 13 + 2 + 2);
        assert_eq!(graph.len(), t.models + t.materials);
    }

    #[test]
    fn test_tallies_match_node_scan() {
        let item = DrawingItem::new("d", vec![path(None, 2), path(None, 0), path(None, 4)]);
        let graph = build(&item).unwrap();
        let t = graph.tallies();
        assert_eq!(t.models, graph.models().count());
        assert_eq!(
            t.geometries,
            graph.nodes().iter().filter(|n| n.subtype() == Subtype::Mesh).count()
        );
        assert_eq!(t.materials, graph.nodes().iter().filter(|n| !n.is_model()).count());
    }

    #[test]
    fn test_names_unique_and_counters_not_reset() {
        let item = DrawingItem::new("d", vec![path(None, 2), path(None, 2)]);
        let graph = build(&item).unwrap();
        let names: Vec<&str> = graph.nodes().iter().map(|n| n.qualified_name.as_str()).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
        assert_eq!(
            names,
            vec![
                "Model::d",
                "Model::Area0",
                "Model::Anchor0",
                "Model::Anchor1",
                "Model::glaze0",
                "Material::Material0",
                "Model::Area1",
                "Model::Anchor2",
                "Model::Anchor3",
                "Model::glaze1",
                "Material::Material1",
            ]
        );
    }

    #[test]
    fn test_parent_links() {
        let item = DrawingItem::new("d", vec![path(Some("#FF0000"), 1)]);
        let graph = build(&item).unwrap();
        let parents: Vec<&str> = graph.nodes().iter().map(|n| graph.parent_name(n)).collect();
        assert_eq!(
            parents,
            vec![SCENE_ROOT, "Model::d", "Model::Area0", "Model::Area0", "Model::glaze0"]
        );
        for node in graph.nodes() {
            let parent = graph.parent_name(node);
            assert!(parent == SCENE_ROOT || graph.find(parent).is_some());
        }
    }

    #[test]
    fn test_translations() {
        let item = DrawingItem::new(
            "d",
            vec![PathSample::new(None, vec![Point2D::new(-40.0, 40.0)])],
        );
        let graph = build(&item).unwrap();
        let anchor = graph.node(graph.find("Model::Anchor0").unwrap());
        assert_eq!(anchor.translation(), Point3D::new(-40.0, 40.0, 0.0));
        let area = graph.node(graph.find("Model::Area0").unwrap());
        assert_eq!(area.translation(), Point3D::origin());
        let mesh = graph.node(graph.find("Model::glaze0").unwrap());
        assert_eq!(mesh.translation(), Point3D::origin());
        assert_eq!(mesh.subtype(), Subtype::Mesh);
    }

    #[test]
    fn test_material_colors() {
        let item = DrawingItem::new("d", vec![path(None, 0), path(Some("#FF0000"), 0), path(Some("bogus"), 0)]);
        let graph = build(&item).unwrap();
        let colors: Vec<Option<Color>> = graph
            .nodes()
            .iter()
            .filter_map(|n| match n.kind {
                NodeKind::Material { color } => Some(color),
                _ => None,
            })
            .collect();
        assert_eq!(
            colors,
            vec![Some(Color::white()), Some(Color::new(1.0, 0.0, 0.0)), None]
        );
    }

    #[test]
    fn test_empty_drawing() {
        let graph = build(&DrawingItem::new("empty", vec![])).unwrap();
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.tallies(), Tallies { models: 1, geometries: 0, materials: 0 });
        assert_eq!(graph.root().unwrap().qualified_name, "Model::empty");
    }

    #[test]
    fn test_name_collision_rejected() {
        let item = DrawingItem::new("Area0", vec![path(None, 1)]);
        assert!(matches!(build(&item), Err(ExportError::DuplicateName(n)) if n == "Model::Area0"));

        let item = DrawingItem::new("Scene", vec![]);
        assert!(matches!(build(&item), Err(ExportError::DuplicateName(_))));
    }

    #[test]
    fn test_invalid_names_rejected() {
        for name in [
            "",
            "bad\"name",
            "two\nlines",
            "../escaped",
            "sub/dir",
            "..\\escaped",
            ".",
            "..",
        ] {
            let item = DrawingItem::new(name, vec![]);
            assert!(matches!(build(&item), Err(ExportError::InvalidName(_))));
        }
    }

    #[test]
    fn test_builds_are_independent() {
        let item = DrawingItem::new("d", vec![path(None, 1)]);
        let a = build(&item).unwrap();
        let b = build(&item).unwrap();
        assert_eq!(a.nodes(), b.nodes());
    }
}
