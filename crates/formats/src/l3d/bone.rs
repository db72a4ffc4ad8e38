use byteorder::LE;
use zerocopy::{AsBytes, FromBytes, FromZeroes, F32, I32};

/// Sentinel for an absent parent/child/sibling link.
pub const NO_BONE: i32 = -1;

/// Bone record: tree links, a rotation matrix stored as three axis
/// vectors, and the bone origin.
#[derive(AsBytes, FromZeroes, FromBytes, Debug)]
#[repr(packed)]
pub struct Bone {
    pub parent: I32<LE>,
    pub child: I32<LE>,
    pub sibling: I32<LE>,
    pub x_axis: [F32<LE>; 3],
    pub y_axis: [F32<LE>; 3],
    pub z_axis: [F32<LE>; 3],
    pub position: [F32<LE>; 3],
}

/// Bone tree assembled from the flat bone table.
///
/// Nodes live in an arena addressed by table index. Links are resolved to
/// `Option` up front, so traversal can never index out of range; an
/// out-of-range link in the file is treated as absent. Skinning math is
/// left to a later animation component.
#[derive(Debug, Default)]
pub struct Skeleton {
    nodes: Vec<BoneNode>,
}

#[derive(Debug, Clone)]
pub struct BoneNode {
    pub parent: Option<usize>,
    pub first_child: Option<usize>,
    pub next_sibling: Option<usize>,

    /// One axis vector per row.
    pub rotation: [[f32; 3]; 3],
    pub position: [f32; 3],
}

impl Skeleton {
    pub fn from_bones(bones: &[Bone]) -> Self {
        let nodes = bones
            .iter()
            .map(|bone| BoneNode {
                parent: link(bone.parent.get(), bones.len()),
                first_child: link(bone.child.get(), bones.len()),
                next_sibling: link(bone.sibling.get(), bones.len()),
                rotation: [
                    bone.x_axis.map(|v| v.get()),
                    bone.y_axis.map(|v| v.get()),
                    bone.z_axis.map(|v| v.get()),
                ],
                position: bone.position.map(|v| v.get()),
            })
            .collect();

        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BoneNode> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoneNode> {
        self.nodes.iter()
    }

    /// Indices of bones without a parent.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| index)
    }

    /// Indices of the direct children of `index`, following the
    /// first-child/next-sibling chain. A malformed chain can cycle, so the
    /// walk is capped at the node count.
    pub fn children(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let mut next = self.nodes.get(index).and_then(|node| node.first_child);
        let mut remaining = self.nodes.len();

        std::iter::from_fn(move || {
            let current = next?;
            remaining = remaining.checked_sub(1)?;
            next = self.nodes.get(current).and_then(|node| node.next_sibling);
            Some(current)
        })
    }
}

fn link(index: i32, bone_count: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < bone_count)
}
