use byteorder::LE;
use zerocopy::{AsBytes, FromBytes, FromZeroes, U32};

/// Fixed-size record at offset 4, directly after the `L3D0` tag.
///
/// Eleven of the eighteen fields have unknown semantics. They are carried
/// as named reserved fields of fixed width so the record stays byte-exact
/// and future decoding can name them without shifting offsets.
#[derive(AsBytes, FromZeroes, FromBytes)]
#[repr(packed)]
#[allow(unused)]
pub struct Header {
    model_size: U32<LE>,
    skin_offset: U32<LE>,
    mesh_count: U32<LE>,
    mesh_list_offset: U32<LE>,
    unk_10: U32<LE>,
    unk_14: U32<LE>,
    unk_18: U32<LE>,
    unk_1c: U32<LE>,
    unk_20: U32<LE>,
    unk_24: U32<LE>,
    unk_28: U32<LE>,
    unk_2c: U32<LE>,
    unk_30: U32<LE>,
    skin_count: U32<LE>,
    skin_list_offset: U32<LE>,
    unk_3c: U32<LE>,
    unk_40: U32<LE>,

    /// Offset of the skin name region. Never resolved.
    skin_name_offset: U32<LE>,
}

impl Header {
    pub fn model_size(&self) -> u32 {
        self.model_size.get()
    }

    pub fn skin_offset(&self) -> u32 {
        self.skin_offset.get()
    }

    pub fn mesh_count(&self) -> usize {
        self.mesh_count.get() as usize
    }

    pub fn mesh_list_offset(&self) -> u32 {
        self.mesh_list_offset.get()
    }

    pub fn skin_count(&self) -> usize {
        self.skin_count.get() as usize
    }

    pub fn skin_list_offset(&self) -> u32 {
        self.skin_list_offset.get()
    }

    pub fn skin_name_offset(&self) -> u32 {
        self.skin_name_offset.get()
    }
}
