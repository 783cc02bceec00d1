//! Operator registration for host applications.
//!
//! A host discovers mesh generators by id through an [`OperatorRegistry`]
//! it owns, instead of through global module state. Each entry carries the
//! metadata a menu needs (label, description) and an `execute` entry point.

use crate::builder::build_from_params;
use crate::error::MeshError;
use crate::params::PyramidParams;
use crate::quad_mesh::QuadMesh;
use config::constants::{ParamSpec, PYRAMID_PARAMS};
use std::collections::BTreeMap;

/// Id of the built-in step pyramid operator.
pub const STEP_PYRAMID_OPERATOR_ID: &str = "mesh.step_pyramid_add";

/// A named mesh-producing operation a host can expose.
///
/// # Examples
/// ```
/// use pyramid_mesh::registry::{MeshOperator, StepPyramidOperator};
/// use pyramid_mesh::PyramidParams;
///
/// let op = StepPyramidOperator;
/// assert_eq!(op.label(), "Pyramid");
/// let mesh = op.execute(&PyramidParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 40);
/// ```
pub trait MeshOperator: Send + Sync {
    /// Stable identifier used for lookup.
    fn id(&self) -> &str;

    /// Short menu label.
    fn label(&self) -> &str;

    /// Tooltip text.
    fn description(&self) -> &str {
        ""
    }

    /// Panel schema of the parameters `execute` reads.
    fn params(&self) -> &[ParamSpec] {
        &[]
    }

    /// Produces a mesh from validated or unvalidated parameters.
    fn execute(&self, params: &PyramidParams) -> Result<QuadMesh, MeshError>;
}

/// The step pyramid generator as an operator. Parameters are validated
/// before building.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepPyramidOperator;

impl MeshOperator for StepPyramidOperator {
    fn id(&self) -> &str {
        STEP_PYRAMID_OPERATOR_ID
    }

    fn label(&self) -> &str {
        "Pyramid"
    }

    fn description(&self) -> &str {
        "Create a Pyramid Mesh"
    }

    fn params(&self) -> &[ParamSpec] {
        &PYRAMID_PARAMS
    }

    fn execute(&self, params: &PyramidParams) -> Result<QuadMesh, MeshError> {
        build_from_params(params)
    }
}

/// Host-owned table of operators keyed by id.
///
/// # Examples
/// ```
/// use pyramid_mesh::registry::{OperatorRegistry, STEP_PYRAMID_OPERATOR_ID};
/// use pyramid_mesh::PyramidParams;
///
/// let registry = OperatorRegistry::with_builtins();
/// let mesh = registry
///     .invoke(STEP_PYRAMID_OPERATOR_ID, &PyramidParams::default())
///     .unwrap();
/// assert_eq!(mesh.face_count(), 38);
/// ```
#[derive(Default)]
pub struct OperatorRegistry {
    operators: BTreeMap<String, Box<dyn MeshOperator>>,
}

impl OperatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the operators this crate ships.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.operators.insert(
            STEP_PYRAMID_OPERATOR_ID.to_string(),
            Box::new(StepPyramidOperator),
        );
        registry
    }

    /// Registers an operator under its id. Ids must be unique.
    pub fn register(&mut self, operator: Box<dyn MeshOperator>) -> Result<(), MeshError> {
        let id = operator.id().to_string();
        if self.operators.contains_key(&id) {
            return Err(MeshError::duplicate_operator(id));
        }
        tracing::debug!(id = %id, label = operator.label(), "registered operator");
        self.operators.insert(id, operator);
        Ok(())
    }

    /// Removes and returns the operator registered under `id`.
    pub fn unregister(&mut self, id: &str) -> Result<Box<dyn MeshOperator>, MeshError> {
        let operator = self
            .operators
            .remove(id)
            .ok_or_else(|| MeshError::unknown_operator(id))?;
        tracing::debug!(id, "unregistered operator");
        Ok(operator)
    }

    pub fn get(&self, id: &str) -> Option<&dyn MeshOperator> {
        self.operators.get(id).map(|op| op.as_ref())
    }

    /// Looks up `id` and executes it with `params`.
    pub fn invoke(&self, id: &str, params: &PyramidParams) -> Result<QuadMesh, MeshError> {
        let operator = self.get(id).ok_or_else(|| MeshError::unknown_operator(id))?;
        operator.execute(params)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
