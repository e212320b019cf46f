//! Plain battery-backed SRAM (32 KiB), the simplest of the three save backends.

use super::StorageChip;

const SRAM_SIZE: usize = 0x8000;

pub struct Sram {
    data: Vec<u8>,
}

impl Sram {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: vec![0xFF; SRAM_SIZE],
        }
    }
}

impl Default for Sram {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageChip for Sram {
    fn read(&self, offset: usize) -> u8 {
        self.data.get(offset & (SRAM_SIZE - 1)).copied().unwrap_or(0xFF)
    }

    fn write(&mut self, offset: usize, value: u8) {
        let idx = offset & (SRAM_SIZE - 1);
        if idx < self.data.len() {
            self.data[idx] = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_byte() {
        let mut sram = Sram::new();
        sram.write(0x10, 0x42);
        assert_eq!(sram.read(0x10), 0x42);
    }

    #[test]
    fn erased_state_reads_as_ff() {
        let sram = Sram::new();
        assert_eq!(sram.read(0x100), 0xFF);
    }
}
