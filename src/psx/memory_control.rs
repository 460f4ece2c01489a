//! Memory control registers
//!
//! Nine registers configuring expansion base addresses and access latencies. Only the
//! expansion bases matter to us: the emulator hardcodes the standard mapping so any attempt
//! to move them around is reported as unsupported.

use super::memory_map::{EXPANSION_1_BASE, EXPANSION_2_BASE};
use crate::error::Unsupported;
use log::{debug, warn};

pub struct MemoryControl {
    registers: [u32; 9],
}

impl MemoryControl {
    pub fn new() -> MemoryControl {
        MemoryControl {
            registers: [
                EXPANSION_1_BASE,
                EXPANSION_2_BASE,
                0x0013243f,
                0x00003022,
                0x0013243f,
                0x200931e1,
                0x00020843,
                0x00070777,
                0x00031125,
            ],
        }
    }

    /// Read memory control register
    pub fn read(&self, index: usize) -> u32 {
        match self.registers.get(index) {
            Some(&r) => r,
            None => {
                warn!("Invalid memory control register read: {}", index);
                0
            }
        }
    }

    /// Write memory control register
    pub fn write(&mut self, index: usize, value: u32) -> Result<(), Unsupported> {
        match index {
            0 if value != EXPANSION_1_BASE => {
                return Err(Unsupported::ExpansionBase { region: 1, value })
            }
            1 if value != EXPANSION_2_BASE => {
                return Err(Unsupported::ExpansionBase { region: 2, value })
            }
            _ => (),
        }

        match self.registers.get_mut(index) {
            Some(r) => {
                *r = value;
                debug!("Memory control[{}] = 0x{:08x}", index, value);
            }
            None => warn!(
                "Invalid memory control register write: {} = 0x{:08x}",
                index, value
            ),
        }

        Ok(())
    }
}

impl Default for MemoryControl {
    fn default() -> Self {
        MemoryControl::new()
    }
}
