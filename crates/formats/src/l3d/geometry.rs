use byteorder::LE;
use zerocopy::{AsBytes, FromBytes, FromZeroes, F32, U16};

/// Interleaved vertex record, 32 bytes.
#[derive(AsBytes, FromZeroes, FromBytes, Debug)]
#[repr(packed)]
pub struct Vertex {
    pub position: [F32<LE>; 3],
    pub tex_coords: [F32<LE>; 2],
    pub normal: [F32<LE>; 3],
}

/// Three indices into the owning submesh's vertex array.
#[derive(AsBytes, FromZeroes, FromBytes, Debug)]
#[repr(packed)]
pub struct Triangle {
    pub indices: [U16<LE>; 3],
}

/// Bone-vertex lookup entry: a run of consecutive vertices influenced by
/// one bone.
#[derive(AsBytes, FromZeroes, FromBytes, Debug)]
#[repr(packed)]
pub struct BoneVert {
    pub vertex_run: U16<LE>,
    pub bone_index: U16<LE>,
}
