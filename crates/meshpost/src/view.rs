//! Viewer seam
//!
//! The 3-D scene graph that actually renders node colors and deformed
//! geometry lives in the embedding application; the panel drives it through
//! this trait.

/// Rendering operations the result panel needs from the mesh viewer.
pub trait MeshView {
    /// Paint one scalar per node, keyed by node number
    fn set_node_colors(&mut self, nodes: &[u64], scalars: &[f64]);

    /// Remove any scalar coloring
    fn clear_node_colors(&mut self);

    /// Hand the viewer the per-node displacement vectors to deform by
    fn set_node_displacements(&mut self, nodes: &[u64], vectors: &[[f64; 3]]);

    /// Scale the deformed shape by `factor` (0.0 shows the undeformed mesh)
    fn apply_displacement(&mut self, factor: f64);
}

/// A viewer that discards everything. Used by the CLI and in tests.
#[derive(Debug, Default)]
pub struct NullView;

impl MeshView for NullView {
    fn set_node_colors(&mut self, _nodes: &[u64], _scalars: &[f64]) {}
    fn clear_node_colors(&mut self) {}
    fn set_node_displacements(&mut self, _nodes: &[u64], _vectors: &[[f64; 3]]) {}
    fn apply_displacement(&mut self, _factor: f64) {}
}
