//! BIOS, work RAM, and cartridge ROM backing stores.
//!
//! | Region | Capacity | Notes |
//! |--------|----------|-------|
//! | BIOS   | 16 KiB   | read-only from the bus's write path |
//! | WRAM   | 256 KiB  | on-board work RAM |
//! | IWRAM  | 32 KiB   | on-chip work RAM |
//! | ROM    | ≤ 32 MiB | reads past the loaded image fall back to [`InternalMemory::rom_byte`]'s address-latch quirk |

use serde::{Deserialize, Serialize};

use crate::error::BusError;

pub const BIOS_SIZE: usize = 0x0000_4000;
pub const WRAM_SIZE: usize = 0x0004_0000;
pub const IWRAM_SIZE: usize = 0x0000_8000;
pub const ROM_MAX_SIZE: usize = 0x0200_0000;

#[derive(Serialize, Deserialize)]
pub struct InternalMemory {
    bios: Vec<u8>,
    wram: Vec<u8>,
    iwram: Vec<u8>,
    pub rom: Vec<u8>,
}

impl InternalMemory {
    /// # Errors
    /// Returns [`BusError::RomTooLarge`] if `rom` exceeds the 32 MiB GamePak window.
    pub fn new(bios: [u8; BIOS_SIZE], rom: Vec<u8>) -> Result<Self, BusError> {
        if rom.len() > ROM_MAX_SIZE {
            return Err(BusError::RomTooLarge(rom.len()));
        }
        Ok(Self {
            bios: bios.to_vec(),
            wram: vec![0; WRAM_SIZE],
            iwram: vec![0; IWRAM_SIZE],
            rom,
        })
    }

    #[must_use]
    pub fn bios(&self) -> &[u8] {
        &self.bios
    }

    #[must_use]
    pub fn wram(&self) -> &[u8] {
        &self.wram
    }

    pub fn wram_mut(&mut self) -> &mut [u8] {
        &mut self.wram
    }

    #[must_use]
    pub fn iwram(&self) -> &[u8] {
        &self.iwram
    }

    pub fn iwram_mut(&mut self) -> &mut [u8] {
        &mut self.iwram
    }

    /// Reads a byte from the GamePak ROM window at `offset` (already masked to
    /// the 32 MiB window by the caller).
    ///
    /// The GamePak bus is 16-bit and the address bus shares its low 16 bits
    /// with the data bus. When `offset` lands past the end of the loaded
    /// image, nothing drives the data lines and the CPU reads back the
    /// halfword-shifted address instead of ROM contents.
    #[must_use]
    pub fn rom_byte(&self, offset: usize) -> u8 {
        if offset < self.rom.len() {
            self.rom[offset]
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let halfword = (offset >> 1) as u16;
            (halfword >> (8 * (offset & 1))) as u8
        }
    }
}

impl Default for InternalMemory {
    fn default() -> Self {
        Self {
            bios: vec![0; BIOS_SIZE],
            wram: vec![0; WRAM_SIZE],
            iwram: vec![0; IWRAM_SIZE],
            rom: vec![0; ROM_MAX_SIZE],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rom_byte_in_range() {
        let im = InternalMemory {
            rom: vec![1, 2, 3, 4],
            ..Default::default()
        };
        assert_eq!(im.rom_byte(0), 1);
        assert_eq!(im.rom_byte(3), 4);
    }

    #[test]
    fn rom_byte_past_end_returns_address_latch() {
        let im = InternalMemory {
            rom: vec![1, 2, 3, 4],
            ..Default::default()
        };
        assert_eq!(im.rom_byte(0x01FF_FFFF), 0xFF);
        assert_eq!(im.rom_byte(0x01FF_FFEE), 0xF7);
        assert_eq!(im.rom_byte(0x01FF_FFEF), 0xFF);
    }

    #[test]
    fn new_rejects_oversized_rom() {
        let bios = [0u8; BIOS_SIZE];
        let oversized = vec![0u8; ROM_MAX_SIZE + 1];
        assert!(matches!(
            InternalMemory::new(bios, oversized),
            Err(BusError::RomTooLarge(_))
        ));
    }
}
