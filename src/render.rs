//! Per-body draw records for hosts.
//!
//! Extraction only reads simulation state; nothing here feeds back into
//! the physics.

use bytemuck::{Pod, Zeroable};

use crate::physics::{Body, Simulation};

/// Per-instance data for drawing one circle.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in arena coordinates.
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    /// Fill color (RGBA).
    pub color: [f32; 4],
}

impl CircleInstance {
    pub fn from_body(body: &Body) -> Self {
        let p = body.position();
        Self {
            center: [p.x as f32, p.y as f32],
            radius: body.radius() as f32,
            _pad: 0.0,
            color: body.color().to_rgba_f32(),
        }
    }
}

/// Snapshot every body of `sim` in collection order.
pub fn extract_instances(sim: &Simulation) -> Vec<CircleInstance> {
    sim.bodies().iter().map(CircleInstance::from_body).collect()
}

/// View instances as raw bytes for upload.
pub fn as_bytes(instances: &[CircleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
