//! Direct Memory Access controller

mod channel;

pub use channel::{Channel, Direction, Step, Sync};

use crate::error::Unsupported;
use crate::psx::gpu::Gpu;
use crate::psx::ram::Ram;
use log::{debug, warn};

/// Mask applied to every address generated by the DMA, it can only address the 2MB of RAM and
/// always works on aligned words
const ADDR_MASK: u32 = 0x1ffffc;

/// Number of packet headers that fit in RAM. A linked list visiting more headers than that has
/// to go around a cycle and would never reach its end marker.
const LINKED_LIST_MAX_PACKETS: u32 = (ADDR_MASK + 4) / 4;

/// Direct Memory Access
pub struct Dma {
    /// DMA control register
    control: u32,
    /// Master IRQ enable
    irq_en: bool,
    /// IRQ enable for individual channels
    channel_irq_en: u8,
    /// IRQ flags for individual channels
    channel_irq_flags: u8,
    /// When set the interrupt is active unconditionally (even if `irq_en` is false)
    force_irq: bool,
    /// Bits [0:5] of the interrupt registers are RW but I don't know what they're supposed to do
    /// so I just store them and send them back untouched on reads
    irq_dummy: u8,
    /// The 7 channel instances
    channels: [Channel; 7],
}

impl Dma {
    pub fn new() -> Dma {
        Dma {
            // Reset value taken from the Nocash PSX spec
            control: 0x07654321,
            irq_en: false,
            channel_irq_en: 0,
            channel_irq_flags: 0,
            force_irq: false,
            irq_dummy: 0,
            channels: [Channel::new(); 7],
        }
    }

    /// Retrieve the value of the control register
    pub fn control(&self) -> u32 {
        self.control
    }

    /// Set the value of the control register
    pub fn set_control(&mut self, val: u32) {
        self.control = val
    }

    /// Return the status of the DMA interrupt
    pub fn irq(&self) -> bool {
        let channel_irq = self.channel_irq_flags & self.channel_irq_en;

        self.force_irq || (self.irq_en && channel_irq != 0)
    }

    /// Retrieve the value of the interrupt register
    pub fn interrupt(&self) -> u32 {
        let mut r = 0;

        r |= self.irq_dummy as u32;
        r |= (self.force_irq as u32) << 15;
        r |= (self.channel_irq_en as u32) << 16;
        r |= (self.irq_en as u32) << 23;
        r |= (self.channel_irq_flags as u32) << 24;
        r |= (self.irq() as u32) << 31;

        r
    }

    /// Set the value of the interrupt register
    pub fn set_interrupt(&mut self, val: u32) {
        self.irq_dummy = (val & 0x3f) as u8;
        self.force_irq = (val >> 15) & 1 != 0;
        self.channel_irq_en = ((val >> 16) & 0x7f) as u8;
        self.irq_en = (val >> 23) & 1 != 0;

        // Writing 1 to a flag resets it
        let ack = ((val >> 24) & 0x7f) as u8;
        self.channel_irq_flags &= !ack;
    }

    pub fn channel(&self, port: Port) -> &Channel {
        &self.channels[port as usize]
    }

    pub fn channel_mut(&mut self, port: Port) -> &mut Channel {
        &mut self.channels[port as usize]
    }

    /// DMA register read, `offset` is relative to the start of the DMA range
    pub fn load(&self, offset: u32) -> u32 {
        let major = (offset & 0x70) >> 4;
        let minor = offset & 0xf;

        match major {
            0..=6 => {
                let channel = &self.channels[major as usize];

                match minor {
                    0 => channel.base(),
                    4 => channel.block_control(),
                    8 => channel.control(),
                    _ => {
                        warn!("Unhandled DMA read at offset 0x{:x}", offset);
                        0
                    }
                }
            }
            _ => match minor {
                0 => self.control(),
                4 => self.interrupt(),
                _ => {
                    warn!("Unhandled DMA read at offset 0x{:x}", offset);
                    0
                }
            },
        }
    }

    /// DMA register write. Returns the port of the channel written to if that channel became
    /// active, in which case the caller must run the transfer.
    pub fn store(&mut self, offset: u32, val: u32) -> Result<Option<Port>, Unsupported> {
        let major = (offset & 0x70) >> 4;
        let minor = offset & 0xf;

        let port = match major {
            0..=6 => {
                let port = Port::from_index(major);
                let channel = self.channel_mut(port);

                match minor {
                    0 => channel.set_base(val),
                    4 => channel.set_block_control(val),
                    8 => channel.set_control(val)?,
                    _ => {
                        warn!("Unhandled DMA write 0x{:x}: 0x{:08x}", offset, val);
                        return Ok(None);
                    }
                }

                port
            }
            _ => {
                match minor {
                    0 => self.set_control(val),
                    4 => self.set_interrupt(val),
                    _ => warn!("Unhandled DMA write 0x{:x}: 0x{:08x}", offset, val),
                }

                return Ok(None);
            }
        };

        if self.channel(port).active() {
            Ok(Some(port))
        } else {
            Ok(None)
        }
    }

    /// Execute the DMA transfer for `port`. The whole transfer completes synchronously.
    pub fn run_transfer(
        &mut self,
        port: Port,
        ram: &mut Ram,
        gpu: &mut Gpu,
    ) -> Result<(), Unsupported> {
        let channel = *self.channel(port);

        debug!(
            "DMA {:?} start: base 0x{:06x} {:?} {}",
            port,
            channel.base(),
            channel.sync(),
            channel.direction().name()
        );

        match channel.sync() {
            Sync::LinkedList => Dma::do_linked_list(port, &channel, ram, gpu)?,
            _ => Dma::do_block(port, &channel, ram, gpu)?,
        }

        self.channel_mut(port).done();

        if self.channel_irq_en & (1 << port as u8) != 0 {
            self.channel_irq_flags |= 1 << port as u8;
        }

        Ok(())
    }

    /// Emulate DMA transfer for Manual and Request synchronization modes
    fn do_block(
        port: Port,
        channel: &Channel,
        ram: &mut Ram,
        gpu: &mut Gpu,
    ) -> Result<(), Unsupported> {
        let increment = match channel.step() {
            Step::Increment => 4,
            Step::Decrement => 4u32.wrapping_neg(),
        };

        let mut addr = channel.base();

        // Transfer size in words
        let mut remsz = match channel.transfer_size() {
            Some(n) => n,
            // Shouldn't happen since we shouldn't be reaching this code in linked list mode
            None => {
                return Err(Unsupported::LinkedListTransfer {
                    port: port.name(),
                    direction: channel.direction().name(),
                })
            }
        };

        while remsz > 0 {
            // Not sure what happens if the address is bogus, mask it for now
            let cur_addr = addr & ADDR_MASK;

            match (channel.direction(), port) {
                (Direction::FromRam, Port::Gpu) => {
                    let word = ram.load::<u32>(cur_addr);
                    gpu.gp0(word)?;
                }
                (Direction::ToRam, Port::Otc) => {
                    let src_word = match remsz {
                        // Last entry contains the end of table marker
                        1 => 0xffffff,
                        // Pointer to the previous entry
                        _ => addr.wrapping_sub(4) & 0x1fffff,
                    };

                    ram.store(cur_addr, src_word);
                }
                (direction, port) => {
                    return Err(Unsupported::DmaTransfer {
                        port: port.name(),
                        direction: direction.name(),
                    })
                }
            }

            addr = addr.wrapping_add(increment);
            remsz -= 1;
        }

        Ok(())
    }

    /// Emulate DMA transfer for linked list synchronization mode. The list is followed until a
    /// header with bit 23 set; a list that loops back on itself is reported as
    /// `Unsupported::LinkedListLoop` once more headers than RAM can hold have been visited.
    fn do_linked_list(
        port: Port,
        channel: &Channel,
        ram: &mut Ram,
        gpu: &mut Gpu,
    ) -> Result<(), Unsupported> {
        // Only supported for the GPU command lists going from RAM
        if port != Port::Gpu || channel.direction() != Direction::FromRam {
            return Err(Unsupported::LinkedListTransfer {
                port: port.name(),
                direction: channel.direction().name(),
            });
        }

        let start = channel.base() & ADDR_MASK;
        let mut addr = start;
        let mut packets = 0;

        loop {
            if packets == LINKED_LIST_MAX_PACKETS {
                return Err(Unsupported::LinkedListLoop { start });
            }
            packets += 1;

            // In linked list mode each entry starts with a "header" word. The high byte contains
            // the number of words in the "packet" (not counting the header word)
            let header = ram.load::<u32>(addr);

            let mut remsz = header >> 24;

            while remsz > 0 {
                addr = (addr + 4) & ADDR_MASK;

                let command = ram.load::<u32>(addr);

                gpu.gp0(command)?;

                remsz -= 1;
            }

            // The end-of-table marker is usually 0xffffff but mednafen only checks for the MSB
            // so presumably the hardware does that as well
            if header & 0x800000 != 0 {
                break;
            }

            addr = header & ADDR_MASK;
        }

        Ok(())
    }
}

impl Default for Dma {
    fn default() -> Self {
        Dma::new()
    }
}

/// The 7 DMA ports
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Port {
    /// Macroblock decoder input
    MdecIn = 0,
    /// Macroblock decoder output
    MdecOut = 1,
    /// Graphics Processing Unit
    Gpu = 2,
    /// CD-ROM drive
    CdRom = 3,
    /// Sound Processing Unit
    Spu = 4,
    /// Extension port
    Pio = 5,
    /// Used to clear the ordering table
    Otc = 6,
}

impl Port {
    pub fn from_index(index: u32) -> Port {
        match index {
            0 => Port::MdecIn,
            1 => Port::MdecOut,
            2 => Port::Gpu,
            3 => Port::CdRom,
            4 => Port::Spu,
            5 => Port::Pio,
            6 => Port::Otc,
            n => unreachable!("Invalid DMA port {}", n),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Port::MdecIn => "MDECin",
            Port::MdecOut => "MDECout",
            Port::Gpu => "GPU",
            Port::CdRom => "CD-ROM",
            Port::Spu => "SPU",
            Port::Pio => "PIO",
            Port::Otc => "OTC",
        }
    }
}
