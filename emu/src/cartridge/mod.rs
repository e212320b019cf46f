//! Cartridge-facing collaborators: save backend, RTC, and motion sensor.
//!
//! The bus only ever talks to these through narrow capability traits — it
//! never needs to know whether a game uses SRAM, Flash, or EEPROM, only
//! which one. This mirrors how the save backend is modeled as a trait object
//! picked at cartridge-load time rather than baked into the bus itself.

pub mod eeprom;
pub mod flash;
pub mod motion_sensor;
pub mod rtc;
pub mod sram;

use eeprom::{Eeprom, NullEeprom};
use flash::Flash;
use motion_sensor::{MotionSensor, NullMotionSensor};
use rtc::{NullRtc, RtcDevice};
use sram::Sram;

/// Which save backend, if any, a loaded cartridge exposes at `0x0E000000`
/// (and, for EEPROM, at the `0x0D` ROM alias).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveType {
    #[default]
    None,
    Eeprom,
    Sram,
    Flash,
}

/// A byte-addressable save chip (SRAM or Flash). EEPROM is word-oriented and
/// modeled separately by [`EepromDevice`](eeprom::EepromDevice).
pub trait StorageChip {
    fn read(&self, offset: usize) -> u8;
    fn write(&mut self, offset: usize, value: u8);
}

/// Routes `0x08`/`0x0D`/`0x0E` accesses to whichever backend the cartridge's
/// feature set selects, plus the RTC and motion-sensor side channels that
/// share the save region's address space.
pub struct CartridgeGate {
    pub save_type: SaveType,
    pub has_rtc: bool,
    pub has_motion_sensor: bool,
    storage: Box<dyn StorageChip>,
    eeprom: Box<dyn eeprom::EepromDevice>,
    rtc: Box<dyn RtcDevice>,
    sensor: Box<dyn MotionSensor>,
}

impl CartridgeGate {
    #[must_use]
    pub fn new(save_type: SaveType, has_rtc: bool, has_motion_sensor: bool) -> Self {
        let storage: Box<dyn StorageChip> = match save_type {
            SaveType::Flash => Box::new(Flash::new()),
            _ => Box::new(Sram::new()),
        };
        let eeprom: Box<dyn eeprom::EepromDevice> = if save_type == SaveType::Eeprom {
            Box::new(Eeprom::new())
        } else {
            Box::new(NullEeprom)
        };
        let rtc: Box<dyn RtcDevice> = if has_rtc {
            Box::new(rtc::Rtc::new())
        } else {
            Box::new(NullRtc)
        };
        let sensor: Box<dyn MotionSensor> = if has_motion_sensor {
            Box::new(motion_sensor::CenteredMotionSensor::default())
        } else {
            Box::new(NullMotionSensor)
        };
        Self {
            save_type,
            has_rtc,
            has_motion_sensor,
            storage,
            eeprom,
            rtc,
            sensor,
        }
    }

    #[must_use]
    pub fn storage_read(&self, offset: usize) -> u8 {
        self.storage.read(offset)
    }

    pub fn storage_write(&mut self, offset: usize, value: u8) {
        self.storage.write(offset, value);
    }

    #[must_use]
    pub fn eeprom_read(&mut self, addr: usize) -> u32 {
        self.eeprom.read(addr)
    }

    pub fn eeprom_write(&mut self, addr: usize, value: u32) {
        self.eeprom.write(addr, value);
    }

    #[must_use]
    pub fn rtc_read(&self, addr: usize) -> u16 {
        self.rtc.read(addr)
    }

    /// Returns whether the write was accepted by the RTC (vs. falling
    /// through as an ordinary ignored ROM write).
    pub fn rtc_write(&mut self, addr: usize, value: u16) -> bool {
        if self.has_rtc {
            self.rtc.write(addr, value);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn rtc_is_enabled(&self) -> bool {
        self.has_rtc && self.rtc.is_enabled()
    }

    #[must_use]
    pub fn sensor_x(&self) -> i16 {
        self.sensor.get_x()
    }

    #[must_use]
    pub fn sensor_y(&self) -> i16 {
        self.sensor.get_y()
    }
}

impl Default for CartridgeGate {
    fn default() -> Self {
        Self::new(SaveType::None, false, false)
    }
}
