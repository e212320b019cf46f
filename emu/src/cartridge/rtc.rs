//! Real-time clock, exposed to the bus as three GPIO-style 16-bit pins
//! layered over ROM offsets `0xC4` (data), `0xC6` (direction), `0xC8`
//! (control) — the same framing the hardware uses for Pokémon-style RTC
//! carts. The calendar/serial-protocol logic behind those pins belongs to
//! an external collaborator; the bus only needs read/write/enabled.

pub trait RtcDevice {
    fn read(&self, addr: usize) -> u16;
    fn write(&mut self, addr: usize, value: u16);
    fn is_enabled(&self) -> bool;
}

pub struct Rtc {
    data: u16,
    direction: u16,
    control: u16,
}

impl Rtc {
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: 0,
            direction: 0,
            control: 1,
        }
    }
}

impl Default for Rtc {
    fn default() -> Self {
        Self::new()
    }
}

impl RtcDevice for Rtc {
    fn read(&self, addr: usize) -> u16 {
        match addr {
            0x080000C4 => self.data,
            0x080000C6 => self.direction,
            0x080000C8 => self.control,
            _ => 0,
        }
    }

    fn write(&mut self, addr: usize, value: u16) {
        match addr {
            0x080000C4 => self.data = value,
            0x080000C6 => self.direction = value,
            0x080000C8 => self.control = value,
            _ => {}
        }
    }

    fn is_enabled(&self) -> bool {
        self.control & 1 != 0
    }
}

/// Used when the cartridge has no RTC; the bus never routes to this because
/// [`super::CartridgeGate::rtc_write`] checks `has_rtc` first, but reads of
/// a disabled RTC still need a defined (zero) answer.
pub struct NullRtc;

impl RtcDevice for NullRtc {
    fn read(&self, _addr: usize) -> u16 {
        0
    }

    fn write(&mut self, _addr: usize, _value: u16) {}

    fn is_enabled(&self) -> bool {
        false
    }
}
