//! # Layer Topology
//!
//! Every pyramid step is a box of eight vertices emitted in a fixed order.
//! [`Corner`] names each slot so face patterns read as corner roles instead
//! of raw offsets, and [`StepState`] is the running state threaded from one
//! step to the next.

use config::constants::VERTICES_PER_LAYER;
use glam::DVec3;

/// One of the eight corner slots of a layer, in emission order.
///
/// "Front" is the `y = origin.y` side, "left" the `x = origin.x` side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Corner {
    BottomFrontLeft = 0,
    BottomFrontRight = 1,
    BottomBackLeft = 2,
    BottomBackRight = 3,
    TopFrontLeft = 4,
    TopFrontRight = 5,
    TopBackLeft = 6,
    TopBackRight = 7,
}

impl Corner {
    /// All corners in the order their vertices are appended.
    pub const ALL: [Corner; VERTICES_PER_LAYER] = [
        Corner::BottomFrontLeft,
        Corner::BottomFrontRight,
        Corner::BottomBackLeft,
        Corner::BottomBackRight,
        Corner::TopFrontLeft,
        Corner::TopFrontRight,
        Corner::TopBackLeft,
        Corner::TopBackRight,
    ];

    /// The four corners of the top ring.
    pub const TOP_RING: [Corner; 4] = [
        Corner::TopFrontLeft,
        Corner::TopFrontRight,
        Corner::TopBackLeft,
        Corner::TopBackRight,
    ];

    /// Offset of this corner from the first vertex of its layer.
    #[inline]
    pub fn offset(self) -> u32 {
        self as u32
    }

    /// Absolute vertex index of this corner in the layer starting at `layer_offset`.
    #[inline]
    pub fn index(self, layer_offset: u32) -> u32 {
        layer_offset + self.offset()
    }

    #[inline]
    pub fn is_top(self) -> bool {
        self.offset() >= 4
    }

    #[inline]
    fn is_right(self) -> bool {
        self.offset() % 2 == 1
    }

    #[inline]
    fn is_back(self) -> bool {
        matches!(self.offset() % 4, 2 | 3)
    }
}

/// Side faces of a layer: front, back, left, right.
pub const SIDE_FACES: [[Corner; 4]; 4] = {
    use Corner::*;
    [
        [TopFrontLeft, TopFrontRight, BottomFrontRight, BottomFrontLeft],
        [TopBackLeft, TopBackRight, BottomBackRight, BottomBackLeft],
        [BottomBackLeft, TopBackLeft, TopFrontLeft, BottomFrontLeft],
        [BottomBackRight, TopBackRight, TopFrontRight, BottomFrontRight],
    ]
};

/// Connector faces between two layers: front, back, left, right.
///
/// Top corners refer to the previous layer, bottom corners to the current one.
pub const CONNECTOR_FACES: [[Corner; 4]; 4] = {
    use Corner::*;
    [
        [TopFrontLeft, TopFrontRight, BottomFrontRight, BottomFrontLeft],
        [TopBackLeft, TopBackRight, BottomBackRight, BottomBackLeft],
        [TopFrontLeft, TopBackLeft, BottomBackLeft, BottomFrontLeft],
        [TopFrontRight, TopBackRight, BottomBackRight, BottomFrontRight],
    ]
};

/// Cap closing the top ring of the last layer.
pub const TOP_CAP: [Corner; 4] = [
    Corner::TopBackLeft,
    Corner::TopBackRight,
    Corner::TopFrontRight,
    Corner::TopFrontLeft,
];

/// Cap closing the bottom ring of the first layer.
pub const BOTTOM_CAP: [Corner; 4] = [
    Corner::BottomBackLeft,
    Corner::BottomBackRight,
    Corner::BottomFrontRight,
    Corner::BottomFrontLeft,
];

/// Resolves a face pattern against a single layer.
pub fn layer_face(pattern: [Corner; 4], layer_offset: u32) -> [u32; 4] {
    pattern.map(|corner| corner.index(layer_offset))
}

/// Resolves a connector pattern: top corners against `previous_offset`,
/// bottom corners against `current_offset`.
pub fn connector_face(pattern: [Corner; 4], previous_offset: u32, current_offset: u32) -> [u32; 4] {
    pattern.map(|corner| {
        if corner.is_top() {
            corner.index(previous_offset)
        } else {
            corner.index(current_offset)
        }
    })
}

/// Running state of the step loop.
///
/// Each step is derived from the previous one with [`StepState::advance`];
/// nothing is mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepState {
    /// Edge length of this step's square footprint
    pub size: f64,
    /// Front-left-bottom corner of this step
    pub origin: DVec3,
    /// Index of this step's first vertex
    pub vertex_offset: u32,
}

impl StepState {
    /// State of the first (lowest) step.
    pub fn initial(base_size: f64) -> Self {
        Self {
            size: base_size,
            origin: DVec3::ZERO,
            vertex_offset: 0,
        }
    }

    /// State of the next step up: inset by `step_width` on every side and
    /// raised by `step_height`.
    pub fn advance(&self, step_height: f64, step_width: f64) -> Self {
        Self {
            size: self.size - step_width * 2.0,
            origin: self.origin + DVec3::new(step_width, step_width, step_height),
            vertex_offset: self.vertex_offset + VERTICES_PER_LAYER as u32,
        }
    }

    /// Position of `corner` for a step of height `step_height`.
    pub fn corner_position(&self, corner: Corner, step_height: f64) -> DVec3 {
        let dx = if corner.is_right() { self.size } else { 0.0 };
        let dy = if corner.is_back() { self.size } else { 0.0 };
        let dz = if corner.is_top() { step_height } else { 0.0 };
        self.origin + DVec3::new(dx, dy, dz)
    }

    /// The eight vertex positions of this step, in [`Corner::ALL`] order.
    pub fn vertices(&self, step_height: f64) -> [DVec3; VERTICES_PER_LAYER] {
        Corner::ALL.map(|corner| self.corner_position(corner, step_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_offsets_follow_emission_order() {
        for (i, corner) in Corner::ALL.iter().enumerate() {
            assert_eq!(corner.offset(), i as u32);
        }
    }

    #[test]
    fn test_side_faces_match_fixed_pattern() {
        let v = 16;
        let faces: Vec<[u32; 4]> = SIDE_FACES.iter().map(|p| layer_face(*p, v)).collect();
        assert_eq!(
            faces,
            vec![
                [v + 4, v + 5, v + 1, v],
                [v + 6, v + 7, v + 3, v + 2],
                [v + 2, v + 6, v + 4, v],
                [v + 3, v + 7, v + 5, v + 1],
            ]
        );
    }

    #[test]
    fn test_connector_faces_match_fixed_pattern() {
        let v = 16;
        let faces: Vec<[u32; 4]> = CONNECTOR_FACES
            .iter()
            .map(|p| connector_face(*p, v - 8, v))
            .collect();
        assert_eq!(
            faces,
            vec![
                [v - 4, v - 3, v + 1, v],
                [v - 2, v - 1, v + 3, v + 2],
                [v - 4, v - 2, v + 2, v],
                [v - 3, v - 1, v + 3, v + 1],
            ]
        );
    }

    #[test]
    fn test_caps_match_fixed_pattern() {
        assert_eq!(layer_face(TOP_CAP, 32), [38, 39, 37, 36]);
        assert_eq!(layer_face(BOTTOM_CAP, 0), [2, 3, 1, 0]);
    }

    #[test]
    fn test_initial_state() {
        let state = StepState::initial(2.0);
        assert_eq!(state.size, 2.0);
        assert_eq!(state.origin, DVec3::ZERO);
        assert_eq!(state.vertex_offset, 0);
    }

    #[test]
    fn test_advance_insets_and_raises() {
        let next = StepState::initial(2.0).advance(0.5, 0.25);
        assert_eq!(next.size, 1.5);
        assert_eq!(next.origin, DVec3::new(0.25, 0.25, 0.5));
        assert_eq!(next.vertex_offset, 8);
    }

    #[test]
    fn test_advance_leaves_previous_untouched() {
        let first = StepState::initial(4.0);
        let _ = first.advance(1.0, 1.0);
        assert_eq!(first, StepState::initial(4.0));
    }

    #[test]
    fn test_vertices_emission_order() {
        let verts = StepState::initial(2.0).vertices(1.0);
        assert_eq!(
            verts,
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(2.0, 0.0, 0.0),
                DVec3::new(0.0, 2.0, 0.0),
                DVec3::new(2.0, 2.0, 0.0),
                DVec3::new(0.0, 0.0, 1.0),
                DVec3::new(2.0, 0.0, 1.0),
                DVec3::new(0.0, 2.0, 1.0),
                DVec3::new(2.0, 2.0, 1.0),
            ]
        );
    }
}
