pub mod bios;
pub mod bus;
pub mod cpu;
pub mod dma;
pub mod gpu;
pub mod irq;
pub mod memory_control;
pub mod memory_map;
pub mod ram;

use crate::config::{MachineConfig, UnsupportedPolicy};
use crate::error::{PsxError, Result, Unsupported};
use bios::Bios;
use bus::Bus;
use cpu::{Cpu, CpuSnapshot};
use log::{error, info, warn};

/// The whole emulated console: the CPU and everything it can reach through the bus
pub struct Psx {
    cpu: Cpu,
    bus: Bus,
    on_unsupported: UnsupportedPolicy,
}

impl Psx {
    pub fn new(bios: Bios, config: &MachineConfig) -> Psx {
        info!("psx-core {}", crate::VERSION);

        Psx {
            cpu: Cpu::new(),
            bus: Bus::new(bios, config.ram_fill),
            on_unsupported: config.on_unsupported,
        }
    }

    /// Build a console using the BIOS pointed at by `config`
    pub fn from_config(config: &MachineConfig) -> Result<Psx> {
        let bios = Bios::new(&config.bios_path)?;

        Ok(Psx::new(bios, config))
    }

    /// Run a single CPU instruction
    pub fn step(&mut self) -> ::std::result::Result<(), Unsupported> {
        self.cpu.step(&mut self.bus)
    }

    /// Run up to `instructions` CPU instructions. Unsupported hardware states are handled
    /// following the configured `UnsupportedPolicy`. Returns the number of instructions run.
    pub fn run(&mut self, instructions: u64) -> Result<u64> {
        for n in 0..instructions {
            if let Err(e) = self.step() {
                match self.on_unsupported {
                    UnsupportedPolicy::Halt => {
                        error!(
                            "Halting at 0x{:08x} after {} instructions: {}",
                            self.cpu.current_pc(),
                            n,
                            e
                        );
                        return Err(PsxError::Unsupported(e));
                    }
                    UnsupportedPolicy::LogAndContinue => {
                        warn!("0x{:08x}: {}", self.cpu.current_pc(), e);
                    }
                }
            }
        }

        Ok(instructions)
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    /// Copy of the CPU state for display or debugging
    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot(self.bus.irq_pending())
    }
}

/// Types of access supported by the PlayStation architecture
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum AccessWidth {
    Byte = 1,
    HalfWord = 2,
    Word = 4,
}

/// Trait representing the attributes of a memory access
pub trait Addressable: Copy {
    /// Retrieve the width of the access
    fn width() -> AccessWidth;
    /// Build an Addressable value from an u32. If the Addressable is 8 or 16 bits wide the MSBs
    /// are discarded to fit.
    fn from_u32(v: u32) -> Self;
    /// Retrieve the value of the Addressable as an u32. If the Addressable is 8 or 16 bits wide
    /// the MSBs are padded with 0s.
    fn as_u32(&self) -> u32;
}

impl Addressable for u8 {
    fn width() -> AccessWidth {
        AccessWidth::Byte
    }

    fn from_u32(v: u32) -> u8 {
        v as u8
    }

    fn as_u32(&self) -> u32 {
        *self as u32
    }
}

impl Addressable for u16 {
    fn width() -> AccessWidth {
        AccessWidth::HalfWord
    }

    fn from_u32(v: u32) -> u16 {
        v as u16
    }

    fn as_u32(&self) -> u32 {
        *self as u32
    }
}

impl Addressable for u32 {
    fn width() -> AccessWidth {
        AccessWidth::Word
    }

    fn from_u32(v: u32) -> u32 {
        v
    }

    fn as_u32(&self) -> u32 {
        *self
    }
}
