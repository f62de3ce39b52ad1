use crate::formation::CollectionKind;
use crate::morph::Collection;

/// Per-instance vertex data for instanced collections.
///
/// Layout matches a vertex buffer with `step_mode = Instance`:
/// `pos` at offset 0, `scale` at 12, `color` at 16, `rotation` at 32.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    /// Euler angles (XYZ).
    pub rotation: [f32; 3],
    pub _pad: f32,
}

impl Collection {
    /// Rebuild `out` with one instance per entity at its current position.
    ///
    /// Ribbon segments carry no rotation seed; they are yawed to face the
    /// trunk axis at their own height instead.
    pub fn write_instances(&self, out: &mut Vec<InstanceData>) {
        out.clear();
        out.reserve(self.len());
        let faces_axis = self.kind() == Some(CollectionKind::Ribbon);
        for (pos, seed) in self.positions().iter().zip(self.seeds()) {
            let rotation = match seed.rotation {
                Some(r) => r.to_array(),
                None if faces_axis => [0.0, (-pos.x).atan2(-pos.z), 0.0],
                None => [0.0; 3],
            };
            out.push(InstanceData {
                pos: pos.to_array(),
                scale: seed.scale,
                color: [seed.color[0], seed.color[1], seed.color[2], 1.0],
                rotation,
                _pad: 0.0,
            });
        }
    }
}

/// Raw bytes for uploading an instance slice.
#[inline]
pub fn instance_bytes(instances: &[InstanceData]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
