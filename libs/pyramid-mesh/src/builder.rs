//! # Step Pyramid Builder
//!
//! Stacks square box layers, each inset and raised relative to the one
//! below, and stitches them into a closed quad mesh.
//!
//! Per layer, eight vertices are emitted in [`Corner::ALL`] order followed by
//! four side faces. Every layer after the first also gets four connector
//! faces from the previous top ring to its own bottom ring. The last layer's
//! top ring and the first layer's bottom ring are capped at the end.

use crate::error::MeshError;
use crate::layer::{
    connector_face, layer_face, Corner, StepState, BOTTOM_CAP, CONNECTOR_FACES, SIDE_FACES,
    TOP_CAP,
};
use crate::params::PyramidParams;
use crate::quad_mesh::QuadMesh;
use config::constants::{expected_face_count, expected_vertex_count};
use glam::DVec3;

/// Builds a step pyramid.
///
/// Inputs are not validated: out-of-range values produce degenerate geometry
/// rather than an error. A `step_count` of zero yields an empty mesh.
///
/// # Arguments
///
/// * `base_size` - Footprint edge length of the lowest step
/// * `step_height` - Height of every step
/// * `step_width` - Inset of each step on every side
/// * `step_count` - Number of steps
/// * `point_top` - Collapse the last step's top ring into one apex point
///
/// # Example
///
/// ```rust
/// use pyramid_mesh::build;
///
/// let mesh = build(2.0, 0.2, 0.2, 5, false);
/// assert_eq!(mesh.vertex_count(), 40);
/// assert_eq!(mesh.face_count(), 38);
/// ```
pub fn build(
    base_size: f64,
    step_height: f64,
    step_width: f64,
    step_count: u32,
    point_top: bool,
) -> QuadMesh {
    let mut mesh = QuadMesh::with_capacity(
        expected_vertex_count(step_count),
        expected_face_count(step_count),
    );

    let steps = std::iter::successors(Some(StepState::initial(base_size)), |state| {
        Some(state.advance(step_height, step_width))
    })
    .take(step_count as usize);

    let last = steps.fold(None, |previous: Option<StepState>, state| {
        emit_layer(&mut mesh, &state, previous.as_ref(), step_height);
        Some(state)
    });

    let Some(last) = last else {
        tracing::debug!(step_count, "no steps requested, returning empty mesh");
        return mesh;
    };

    mesh.add_face(layer_face(TOP_CAP, last.vertex_offset));
    mesh.add_face(layer_face(BOTTOM_CAP, 0));

    if point_top {
        collapse_top_ring(&mut mesh, last.vertex_offset);
    }

    tracing::debug!(
        base_size,
        step_height,
        step_width,
        step_count,
        point_top,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "built step pyramid"
    );

    mesh
}

/// Validates `params` and builds the pyramid they describe.
///
/// # Example
///
/// ```rust
/// use pyramid_mesh::{build_from_params, PyramidParams};
///
/// let mesh = build_from_params(&PyramidParams::default()).unwrap();
/// assert_eq!(mesh.face_count(), 38);
///
/// let bad = PyramidParams { step_count: 0, ..PyramidParams::default() };
/// assert!(build_from_params(&bad).is_err());
/// ```
pub fn build_from_params(params: &PyramidParams) -> Result<QuadMesh, MeshError> {
    params.validate()?;
    Ok(build(
        params.base_size,
        params.step_height,
        params.step_width,
        params.step_count,
        params.point_top,
    ))
}

fn emit_layer(
    mesh: &mut QuadMesh,
    state: &StepState,
    previous: Option<&StepState>,
    step_height: f64,
) {
    for position in state.vertices(step_height) {
        mesh.add_vertex(position);
    }

    for pattern in SIDE_FACES {
        mesh.add_face(layer_face(pattern, state.vertex_offset));
    }

    if let Some(previous) = previous {
        for pattern in CONNECTOR_FACES {
            mesh.add_face(connector_face(
                pattern,
                previous.vertex_offset,
                state.vertex_offset,
            ));
        }
    }

    tracing::trace!(
        offset = state.vertex_offset,
        size = state.size,
        z = state.origin.z,
        "emitted layer"
    );
}

/// Moves the four top-ring vertices of the layer at `offset` onto the
/// ring's center. Face indices are left as they are.
fn collapse_top_ring(mesh: &mut QuadMesh, offset: u32) {
    let slot = |corner: Corner| mesh.vertex(corner.index(offset)).unwrap_or(DVec3::ZERO);

    let back_left = slot(Corner::TopBackLeft);
    let back_right = slot(Corner::TopBackRight);
    let front_right = slot(Corner::TopFrontRight);

    let apex = DVec3::new(
        (back_right.x - back_left.x) / 2.0 + back_left.x,
        (back_right.y - front_right.y) / 2.0 + front_right.y,
        back_left.z,
    );

    for corner in Corner::TOP_RING {
        mesh.set_vertex(corner.index(offset), apex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::constants::EPSILON;

    #[test]
    fn test_single_step_counts() {
        let mesh = build(2.0, 0.2, 0.2, 1, false);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.face_count(), 6);
    }

    #[test]
    fn test_single_step_has_no_connectors() {
        let mesh = build(2.0, 0.2, 0.2, 1, false);
        assert_eq!(
            mesh.faces(),
            &[
                [4, 5, 1, 0],
                [6, 7, 3, 2],
                [2, 6, 4, 0],
                [3, 7, 5, 1],
                [6, 7, 5, 4],
                [2, 3, 1, 0],
            ]
        );
    }

    #[test]
    fn test_five_step_counts() {
        let mesh = build(2.0, 0.2, 0.2, 5, false);
        assert_eq!(mesh.vertex_count(), 40);
        assert_eq!(mesh.face_count(), 38);
    }

    #[test]
    fn test_second_layer_faces_order() {
        let mesh = build(2.0, 0.2, 0.2, 2, false);
        // sides of layer 0, then sides and connectors of layer 1
        assert_eq!(mesh.face(4), Some([12, 13, 9, 8]));
        assert_eq!(mesh.face(8), Some([4, 5, 9, 8]));
        assert_eq!(mesh.face(11), Some([5, 7, 11, 9]));
        assert_eq!(mesh.face(12), Some([14, 15, 13, 12]));
        assert_eq!(mesh.face(13), Some([2, 3, 1, 0]));
    }

    #[test]
    fn test_layer_geometry() {
        let mesh = build(2.0, 0.5, 0.25, 2, false);
        assert_eq!(mesh.vertex(0), Some(DVec3::ZERO));
        assert_eq!(mesh.vertex(7), Some(DVec3::new(2.0, 2.0, 0.5)));
        assert_eq!(mesh.vertex(8), Some(DVec3::new(0.25, 0.25, 0.5)));
        assert_eq!(mesh.vertex(15), Some(DVec3::new(1.75, 1.75, 1.0)));
    }

    #[test]
    fn test_point_top_collapses_last_ring() {
        let mesh = build(2.0, 0.2, 0.2, 5, true);
        let ring = mesh.top_ring(4).unwrap();
        assert!(ring.iter().all(|p| *p == ring[0]));
        assert_relative_eq!(ring[0].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(ring[0].y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(ring[0].z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point_top_keeps_lower_layers() {
        let flat = build(2.0, 0.2, 0.2, 5, false);
        let pointed = build(2.0, 0.2, 0.2, 5, true);
        assert_eq!(flat.vertices()[..36], pointed.vertices()[..36]);
        assert_eq!(flat.faces(), pointed.faces());
    }

    #[test]
    fn test_flat_top_is_square_at_full_height() {
        let mesh = build(2.0, 0.2, 0.2, 5, false);
        let ring = mesh.top_ring(4).unwrap();
        for p in ring {
            assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(ring[1].x - ring[0].x, 0.4, epsilon = 1e-12);
        assert_relative_eq!(ring[2].y - ring[0].y, 0.4, epsilon = 1e-12);
        assert!((ring[3] - ring[0]).length() > EPSILON);
    }

    #[test]
    fn test_zero_steps_is_empty() {
        let mesh = build(2.0, 0.2, 0.2, 0, true);
        assert!(mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn test_build_from_params_rejects_invalid() {
        let params = PyramidParams {
            base_size: 25.0,
            ..PyramidParams::default()
        };
        assert!(matches!(
            build_from_params(&params),
            Err(MeshError::InvalidParameter { name: "base_size", .. })
        ));
    }

    #[test]
    fn test_build_from_params_matches_build() {
        let params = PyramidParams {
            point_top: true,
            ..PyramidParams::default()
        };
        assert_eq!(
            build_from_params(&params).unwrap(),
            build(2.0, 0.2, 0.2, 5, true)
        );
    }
}
