use crate::error::Unsupported;

/// Per-channel data
#[derive(Debug, Clone, Copy)]
pub struct Channel {
    enable: bool,
    direction: Direction,
    step: Step,
    sync: Sync,
    /// Used to start the DMA transfer when `sync` is `Manual`
    trigger: bool,
    /// If true the DMA "chops" the transfer and lets the CPU run in the gaps
    chop: bool,
    /// Chopping DMA window size (log2 number of words)
    chop_dma_sz: u8,
    /// Chopping CPU window size (log2 number of cycles)
    chop_cpu_sz: u8,
    /// Unknown 2 RW bits in configuration register
    dummy: u8,
    /// DMA start address
    base: u32,
    /// Size of a block in words
    block_size: u16,
    /// Block count, only used when `sync` is `Request`
    block_count: u16,
}

impl Channel {
    pub fn new() -> Channel {
        Channel {
            enable: false,
            direction: Direction::ToRam,
            step: Step::Increment,
            sync: Sync::Manual,
            trigger: false,
            chop: false,
            chop_dma_sz: 0,
            chop_cpu_sz: 0,
            dummy: 0,
            base: 0,
            block_size: 0,
            block_count: 0,
        }
    }

    pub fn control(&self) -> u32 {
        let mut r = 0;

        r |= self.direction as u32;
        r |= (self.step as u32) << 1;
        r |= (self.chop as u32) << 8;
        r |= (self.sync as u32) << 9;
        r |= (self.chop_dma_sz as u32) << 16;
        r |= (self.chop_cpu_sz as u32) << 20;
        r |= (self.enable as u32) << 24;
        r |= (self.trigger as u32) << 28;
        r |= (self.dummy as u32) << 29;

        r
    }

    pub fn set_control(&mut self, val: u32) -> Result<(), Unsupported> {
        self.sync = match (val >> 9) & 3 {
            0 => Sync::Manual,
            1 => Sync::Request,
            2 => Sync::LinkedList,
            n => return Err(Unsupported::DmaSyncMode(n)),
        };

        self.direction = match val & 1 != 0 {
            true => Direction::FromRam,
            false => Direction::ToRam,
        };

        self.step = match (val >> 1) & 1 != 0 {
            true => Step::Decrement,
            false => Step::Increment,
        };

        self.chop = (val >> 8) & 1 != 0;

        self.chop_dma_sz = ((val >> 16) & 7) as u8;
        self.chop_cpu_sz = ((val >> 20) & 7) as u8;

        self.enable = (val >> 24) & 1 != 0;
        self.trigger = (val >> 28) & 1 != 0;

        self.dummy = ((val >> 29) & 3) as u8;

        Ok(())
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Only the low 24 bits of the base address are used
    pub fn set_base(&mut self, val: u32) {
        self.base = val & 0xffffff;
    }

    pub fn block_control(&self) -> u32 {
        let bs = self.block_size as u32;
        let bc = self.block_count as u32;

        (bc << 16) | bs
    }

    pub fn set_block_control(&mut self, val: u32) {
        self.block_size = val as u16;
        self.block_count = (val >> 16) as u16;
    }

    /// Return true if the channel has been started
    pub fn active(&self) -> bool {
        // In manual sync mode the CPU must set the "trigger" bit to start the transfer.
        let trigger = match self.sync {
            Sync::Manual => self.trigger,
            _ => true,
        };

        self.enable && trigger
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn sync(&self) -> Sync {
        self.sync
    }

    /// Return the DMA transfer size in words or `None` for linked list mode
    pub fn transfer_size(&self) -> Option<u32> {
        let bs = self.block_size as u32;
        let bc = self.block_count as u32;

        match self.sync {
            Sync::Manual => Some(bs),
            Sync::Request => Some(bc * bs),
            Sync::LinkedList => None,
        }
    }

    /// Set the channel status to "completed" state
    pub fn done(&mut self) {
        self.enable = false;
        self.trigger = false;
    }
}

impl Default for Channel {
    fn default() -> Self {
        Channel::new()
    }
}

/// DMA transfer direction
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    ToRam = 0,
    FromRam = 1,
}

impl Direction {
    pub fn name(self) -> &'static str {
        match self {
            Direction::ToRam => "to RAM",
            Direction::FromRam => "from RAM",
        }
    }
}

/// DMA transfer step
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Increment = 0,
    Decrement = 1,
}

/// DMA transfer synchronization mode
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Sync {
    /// Transfer starts when the CPU writes to the Trigger bit and transfers everything at once
    Manual = 0,
    /// Sync blocks to DMA requests
    Request = 1,
    /// Used to transfer GPU command lists
    LinkedList = 2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_round_trip() {
        let mut c = Channel::new();

        let val = 0x7177_0103;
        c.set_control(val).unwrap();
        assert_eq!(c.control(), val);
        assert_eq!(c.direction(), Direction::FromRam);
        assert_eq!(c.step(), Step::Decrement);
        assert_eq!(c.sync(), Sync::Manual);
    }

    #[test]
    fn test_reserved_sync_mode() {
        let mut c = Channel::new();

        assert_eq!(c.set_control(3 << 9), Err(Unsupported::DmaSyncMode(3)));
    }

    #[test]
    fn test_active() {
        let mut c = Channel::new();

        // Manual: needs enable and trigger
        c.set_control(1 << 24).unwrap();
        assert!(!c.active());
        c.set_control((1 << 24) | (1 << 28)).unwrap();
        assert!(c.active());

        // Request and linked list: enable is enough
        c.set_control((1 << 24) | (1 << 9)).unwrap();
        assert!(c.active());
        c.set_control((1 << 24) | (2 << 9)).unwrap();
        assert!(c.active());

        // Clearing enable deactivates regardless of trigger
        c.set_control((1 << 28) | (2 << 9)).unwrap();
        assert!(!c.active());
        c.set_control(1 << 28).unwrap();
        assert!(!c.active());
    }

    #[test]
    fn test_done_deactivates() {
        let mut c = Channel::new();

        c.set_control((1 << 24) | (1 << 28)).unwrap();
        c.done();
        assert!(!c.active());
        assert_eq!(c.control() & ((1 << 24) | (1 << 28)), 0);
    }

    #[test]
    fn test_transfer_size() {
        let mut c = Channel::new();

        c.set_block_control(0x0003_0010);
        assert_eq!(c.block_control(), 0x0003_0010);
        assert_eq!(c.transfer_size(), Some(0x10));

        c.set_control(1 << 9).unwrap();
        assert_eq!(c.transfer_size(), Some(0x30));

        c.set_control(2 << 9).unwrap();
        assert_eq!(c.transfer_size(), None);
    }

    #[test]
    fn test_base_is_24bits() {
        let mut c = Channel::new();

        c.set_base(0xff12_3456);
        assert_eq!(c.base(), 0x12_3456);
    }
}
