use std::fmt::{Debug, Formatter};

use byteorder::LE;
use zerocopy::{AsBytes, FromBytes, FromZeroes, U16, U32};

pub const SKIN_WIDTH: u32 = 256;
pub const SKIN_HEIGHT: u32 = 256;

/// Texels per skin; the format stores exactly one 256x256 page.
pub const SKIN_TEXELS: usize = (SKIN_WIDTH * SKIN_HEIGHT) as usize;

/// Skin record: an identifier plus a fixed page of RGBA4444 texels.
///
/// Submeshes reference skins by the identifier stored here, which is not
/// required to be contiguous or ordered across the file.
#[derive(AsBytes, FromZeroes, FromBytes)]
#[repr(packed)]
pub struct Skin {
    skin_id: U32<LE>,
    texels: [U16<LE>; SKIN_TEXELS],
}

impl Skin {
    pub fn id(&self) -> u32 {
        self.skin_id.get()
    }

    /// Raw 16-bit texels, four bits per channel, row-major.
    pub fn texels(&self) -> &[U16<LE>] {
        &self.texels
    }
}

impl Debug for Skin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skin")
            .field("skin_id", &self.skin_id.get())
            .field("texels", &self.texels.len())
            .finish()
    }
}
