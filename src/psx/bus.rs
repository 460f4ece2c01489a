//! Interconnect: routes CPU memory accesses to the peripherals

use super::bios::Bios;
use super::dma::Dma;
use super::gpu::Gpu;
use super::irq::{Interrupt, InterruptState};
use super::memory_control::MemoryControl;
use super::memory_map::{self as map, mask_region};
use super::ram::Ram;
use super::{AccessWidth, Addressable};
use crate::error::Unsupported;
use log::{debug, warn};

/// Value returned when reading from an address nothing responds to
const OPEN_BUS: u32 = 0xdeadbeef;

/// Global interconnect
pub struct Bus {
    bios: Bios,
    ram: Ram,
    dma: Dma,
    gpu: Gpu,
    irq: InterruptState,
    mem_control: MemoryControl,
    /// RAM_SIZE register, configured by the BIOS
    ram_size: u32,
    /// Cache control register
    cache_control: u32,
}

impl Bus {
    pub fn new(bios: Bios, ram_fill: u8) -> Bus {
        Bus {
            bios,
            ram: Ram::new(ram_fill),
            dma: Dma::new(),
            gpu: Gpu::new(),
            irq: InterruptState::new(),
            mem_control: MemoryControl::new(),
            ram_size: 0,
            cache_control: 0,
        }
    }

    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    pub fn dma(&self) -> &Dma {
        &self.dma
    }

    pub fn gpu(&self) -> &Gpu {
        &self.gpu
    }

    pub fn gpu_mut(&mut self) -> &mut Gpu {
        &mut self.gpu
    }

    pub fn irq(&self) -> &InterruptState {
        &self.irq
    }

    /// True if the interrupt controller is signaling an interrupt to the CPU
    pub fn irq_pending(&self) -> bool {
        self.irq.active()
    }

    pub fn cache_control(&self) -> u32 {
        self.cache_control
    }

    /// Load value at `addr`. Reads nobody answers are logged and return garbage.
    pub fn load<T: Addressable>(&mut self, addr: u32) -> Result<T, Unsupported> {
        check_alignment::<T>(addr)?;

        let abs_addr = mask_region(addr);
        let width = T::width();

        if let Some(offset) = map::RAM.contains(abs_addr) {
            return Ok(self.ram.load(offset));
        }

        if let Some(offset) = map::BIOS.contains(abs_addr) {
            if width != AccessWidth::HalfWord {
                return Ok(self.bios.load(offset));
            }
        }

        if let Some(offset) = map::IRQ_CONTROL.contains(abs_addr) {
            if width != AccessWidth::Byte {
                return Ok(T::from_u32(self.irq.load(offset)));
            }
        }

        if let Some(offset) = map::DMA.contains(abs_addr) {
            if width == AccessWidth::Word {
                return Ok(T::from_u32(self.dma.load(offset)));
            }
        }

        if let Some(offset) = map::GPU.contains(abs_addr) {
            if width == AccessWidth::Word {
                return Ok(T::from_u32(self.gpu.load(offset)));
            }
        }

        for timer in [map::TIMER0, map::TIMER1, map::TIMER2] {
            if let Some(offset) = timer.contains(abs_addr) {
                warn!("Unhandled read from timer register 0x{:08x} (offset {})", addr, offset);
                return Ok(T::from_u32(0));
            }
        }

        if let Some(offset) = map::SPU.contains(abs_addr) {
            if width == AccessWidth::HalfWord {
                warn!("Unhandled read from SPU register {:x}", offset);
                return Ok(T::from_u32(0));
            }
        }

        if map::EXPANSION_1.contains(abs_addr).is_some() && width == AccessWidth::Byte {
            // No expansion implemented, reads return all ones
            return Ok(T::from_u32(0xff));
        }

        if let Some(offset) = map::MEM_CONTROL.contains(abs_addr) {
            if width == AccessWidth::Word {
                return Ok(T::from_u32(self.mem_control.read((offset >> 2) as usize)));
            }
        }

        if map::RAM_SIZE_REG.contains(abs_addr).is_some() && width == AccessWidth::Word {
            return Ok(T::from_u32(self.ram_size));
        }

        if map::CACHE_CONTROL.contains(abs_addr).is_some() && width == AccessWidth::Word {
            return Ok(T::from_u32(self.cache_control));
        }

        warn!("Unhandled {:?} load at address 0x{:08x}", width, addr);

        Ok(T::from_u32(OPEN_BUS))
    }

    /// Store `val` into `addr`. Writes nobody answers are logged and dropped.
    pub fn store<T: Addressable>(&mut self, addr: u32, val: T) -> Result<(), Unsupported> {
        check_alignment::<T>(addr)?;

        let abs_addr = mask_region(addr);
        let width = T::width();
        let v = val.as_u32();

        if let Some(offset) = map::RAM.contains(abs_addr) {
            self.ram.store(offset, val);
            return Ok(());
        }

        if let Some(offset) = map::MEM_CONTROL.contains(abs_addr) {
            if width == AccessWidth::Word {
                return self.mem_control.write((offset >> 2) as usize, v);
            }
        }

        if map::RAM_SIZE_REG.contains(abs_addr).is_some() && width == AccessWidth::Word {
            debug!("RAM_SIZE = 0x{:08x}", v);
            self.ram_size = v;
            return Ok(());
        }

        if map::CACHE_CONTROL.contains(abs_addr).is_some() && width == AccessWidth::Word {
            debug!("Cache control = 0x{:08x}", v);
            self.cache_control = v;
            return Ok(());
        }

        if let Some(offset) = map::IRQ_CONTROL.contains(abs_addr) {
            if width != AccessWidth::Byte {
                self.irq.store(offset, v);
                return Ok(());
            }
        }

        if let Some(offset) = map::DMA.contains(abs_addr) {
            if width == AccessWidth::Word {
                return self.dma_store(offset, v);
            }
        }

        if let Some(offset) = map::GPU.contains(abs_addr) {
            if width == AccessWidth::Word {
                return self.gpu.store(offset, v);
            }
        }

        for timer in [map::TIMER0, map::TIMER1, map::TIMER2] {
            if let Some(offset) = timer.contains(abs_addr) {
                if width != AccessWidth::Byte {
                    debug!("Unhandled write to timer register {:x}: 0x{:08x}", offset, v);
                    return Ok(());
                }
            }
        }

        if let Some(offset) = map::SPU.contains(abs_addr) {
            if width == AccessWidth::HalfWord {
                debug!("Unhandled write to SPU register {:x}: 0x{:04x}", offset, v);
                return Ok(());
            }
        }

        if let Some(offset) = map::EXPANSION_2.contains(abs_addr) {
            if width == AccessWidth::Byte {
                debug!("Unhandled write to expansion 2 register {:x}: 0x{:02x}", offset, v);
                return Ok(());
            }
        }

        warn!(
            "Unhandled {:?} store at address 0x{:08x}: 0x{:08x}",
            width, addr, v
        );

        Ok(())
    }

    /// DMA register write, runs the transfer right away if it started a channel
    fn dma_store(&mut self, offset: u32, val: u32) -> Result<(), Unsupported> {
        let irq_before = self.dma.irq();

        if let Some(port) = self.dma.store(offset, val)? {
            self.dma.run_transfer(port, &mut self.ram, &mut self.gpu)?;
        }

        if !irq_before && self.dma.irq() {
            self.irq.assert(Interrupt::Dma);
        }

        Ok(())
    }
}

fn check_alignment<T: Addressable>(addr: u32) -> Result<(), Unsupported> {
    let width = T::width() as u32;

    if addr % width != 0 {
        Err(Unsupported::UnalignedAccess { addr, width })
    } else {
        Ok(())
    }
}
