//! Interrupt controller registers

use log::trace;

pub struct InterruptState {
    /// Interrupt status
    status: u16,
    /// Interrupt mask
    mask: u16,
}

impl InterruptState {
    pub fn new() -> InterruptState {
        InterruptState { status: 0, mask: 0 }
    }

    /// True if at least one unmasked interrupt is pending
    pub fn active(&self) -> bool {
        (self.status & self.mask) != 0
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// Acknowledge interrupts by writing 0 to the corresponding bit
    pub fn ack(&mut self, ack: u16) {
        self.status &= ack;
    }

    pub fn mask(&self) -> u16 {
        self.mask
    }

    pub fn set_mask(&mut self, mask: u16) {
        trace!("IRQ mask: 0x{:04x}", mask);
        self.mask = mask;
    }

    /// Flag interrupt `which` as pending
    pub fn assert(&mut self, which: Interrupt) {
        self.status |= 1 << which as u16;
    }

    /// Register read, `offset` 0 is status and 4 is mask
    pub fn load(&self, offset: u32) -> u32 {
        match offset {
            0 => u32::from(self.status),
            4 => u32::from(self.mask),
            _ => 0,
        }
    }

    pub fn store(&mut self, offset: u32, val: u32) {
        match offset {
            0 => self.ack(val as u16),
            4 => self.set_mask(val as u16),
            _ => (),
        }
    }
}

/// Interrupt sources, the value is the bit index in the status and mask registers
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Interrupt {
    VBlank = 0,
    Gpu = 1,
    CdRom = 2,
    Dma = 3,
    Timer0 = 4,
    Timer1 = 5,
    Timer2 = 6,
    PadMemCard = 7,
    Sio = 8,
    Spu = 9,
    Lightpen = 10,
}

impl Default for InterruptState {
    fn default() -> Self {
        InterruptState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_clears_written_zeros() {
        let mut irq = InterruptState::new();

        irq.assert(Interrupt::VBlank);
        irq.assert(Interrupt::Dma);
        assert_eq!(irq.status(), 0b1001);
        assert!(!irq.active());

        irq.store(4, 0b1000);
        assert!(irq.active());

        irq.store(0, !0b1000);
        assert_eq!(irq.load(0), 0b0001);
        assert!(!irq.active());
    }
}
