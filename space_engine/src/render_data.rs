//! Read-only, GPU friendly view of the bodies

use crate::body::Body;
use crate::physics::Simulation;
use crate::vector::Vector;

/// Instance data for drawing one body
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BodyInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 4],
}

impl BodyInstance {
    pub fn from_body<V: Vector>(body: &Body<V>) -> Self {
        Self {
            position: body.position.to_array3().map(|c| c as f32),
            radius: body.radius as f32,
            color: body.color,
        }
    }
}

impl<V: Vector> Simulation<V> {
    /// One instance per body, in body order, ready for an instance buffer.
    pub fn instances(&self) -> Vec<BodyInstance> {
        self.bodies().iter().map(BodyInstance::from_body).collect()
    }
}

/// Raw bytes of an instance slice.
pub fn instance_bytes(instances: &[BodyInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
