use byteorder::LE;
use zerocopy::{AsBytes, FromBytes, FromZeroes, I32, U32};

/// Top-level mesh record: four flag bytes plus the submesh and bone tables.
#[derive(AsBytes, FromZeroes, FromBytes, Debug)]
#[repr(packed)]
pub struct Mesh {
    /// Four flag bytes. Two meanings are known: 0x20 in the second byte
    /// marks a no-draw mesh, 0xE0 in the fourth marks transparency.
    pub flags: [u8; 4],
    pub submesh_count: U32<LE>,
    pub submesh_offset: U32<LE>,
    pub bone_count: U32<LE>,
    pub bone_offset: U32<LE>,
}

impl Mesh {
    pub fn no_draw(&self) -> bool {
        self.flags[1] & 0x20 != 0
    }

    pub fn transparent(&self) -> bool {
        self.flags[3] & 0xE0 != 0
    }
}

/// Submesh record: one renderable vertex/index buffer pair plus the
/// skinning lookup tables.
#[derive(AsBytes, FromZeroes, FromBytes, Debug)]
#[repr(packed)]
#[allow(unused)]
pub struct SubMesh {
    unk_00: U32<LE>,
    unk_04: U32<LE>,

    /// Negative when the submesh is unskinned.
    pub skin_id: I32<LE>,
    unk_0c: U32<LE>,

    pub vertex_count: U32<LE>,
    pub vertex_offset: U32<LE>,
    pub triangle_count: U32<LE>,
    pub triangle_offset: U32<LE>,
    pub bone_vert_count: U32<LE>,
    pub bone_vert_offset: U32<LE>,

    /// Entry layout of the vertex-blend table is undocumented; the fields
    /// are carried but the region is never resolved.
    pub vertex_blend_count: U32<LE>,
    pub vertex_blend_offset: U32<LE>,
}
