//! Palette RAM, VRAM, and OAM backing stores.
//!
//! These are the three regions the video renderer reads from; this module
//! only owns the bytes. The bus applies mirroring, the BG-mode VRAM hole,
//! and byte-write promotion rules on top of these flat arrays.
//!
//! | Region          | Capacity | Purpose                   |
//! |-----------------|----------|----------------------------|
//! | BG palette RAM  | 512 B    | low half of the 1 KiB palette window |
//! | OBJ palette RAM | 512 B    | high half of the palette window |
//! | VRAM            | 96 KiB   | tile data, tilemaps, bitmap frames |
//! | OAM             | 1 KiB    | sprite attributes |

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Boxed so a `Memory` doesn't blow the stack when moved around (~98 KiB total).
#[serde_as]
#[derive(Serialize, Deserialize)]
pub struct Memory {
    #[serde_as(as = "Box<[_; 512]>")]
    pub bg_palette_ram: Box<[u8; 0x200]>,

    #[serde_as(as = "Box<[_; 512]>")]
    pub obj_palette_ram: Box<[u8; 0x200]>,

    #[serde_as(as = "Box<[_; 98304]>")]
    pub video_ram: Box<[u8; 0x18000]>,

    #[serde_as(as = "Box<[_; 1024]>")]
    pub obj_attributes: Box<[u8; 0x400]>,
}

impl Default for Memory {
    #[allow(clippy::large_stack_arrays)]
    fn default() -> Self {
        Self {
            bg_palette_ram: Box::new([0; 0x200]),
            obj_palette_ram: Box::new([0; 0x200]),
            video_ram: Box::new([0; 0x18000]),
            obj_attributes: Box::new([0; 0x400]),
        }
    }
}
