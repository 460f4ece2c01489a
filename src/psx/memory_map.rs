//! PSX Memory Map Constants
//!
//! Every address range the interconnect knows about, along with the region masking used to
//! turn a CPU address into a physical one.

// ============================================================================
// Address ranges
// ============================================================================

/// A contiguous range in the physical address space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: u32,
    pub length: u32,
}

impl Range {
    pub const fn new(start: u32, length: u32) -> Range {
        Range { start, length }
    }

    /// Return `Some(offset)` if `addr` is contained in `self`
    #[inline(always)]
    pub fn contains(self, addr: u32) -> Option<u32> {
        if addr >= self.start && addr - self.start < self.length {
            Some(addr - self.start)
        } else {
            None
        }
    }
}

// ============================================================================
// Memory
// ============================================================================

/// Main RAM, 2MB
pub const RAM_SIZE: usize = 2 * 1024 * 1024;
pub const RAM: Range = Range::new(0x00000000, RAM_SIZE as u32);

/// BIOS ROM, 512KB
pub const BIOS_SIZE: usize = 512 * 1024;
pub const BIOS: Range = Range::new(0x1fc00000, BIOS_SIZE as u32);

/// Reset vector (CPU starts here)
pub const RESET_VECTOR: u32 = 0xbfc00000;

// ============================================================================
// Hardware registers
// ============================================================================

/// Memory latency and expansion mapping
pub const MEM_CONTROL: Range = Range::new(0x1f801000, 36);

/// Register that has something to do with RAM configuration, configured by the BIOS
pub const RAM_SIZE_REG: Range = Range::new(0x1f801060, 4);

/// Cache control register. Full address since it's in KSEG2
pub const CACHE_CONTROL: Range = Range::new(0xfffe0130, 4);

/// Interrupt control registers (status and mask)
pub const IRQ_CONTROL: Range = Range::new(0x1f801070, 8);

/// Direct Memory Access registers
pub const DMA: Range = Range::new(0x1f801080, 0x80);

pub const TIMER0: Range = Range::new(0x1f801100, 16);
pub const TIMER1: Range = Range::new(0x1f801110, 16);
pub const TIMER2: Range = Range::new(0x1f801120, 16);

/// GPU registers: GP0 at offset 0, GP1 at offset 4
pub const GPU: Range = Range::new(0x1f801810, 8);

/// SPU registers
pub const SPU: Range = Range::new(0x1f801c00, 640);

/// Expansion region 1
pub const EXPANSION_1: Range = Range::new(0x1f000000, 512 * 1024);

/// Expansion region 2
pub const EXPANSION_2: Range = Range::new(0x1f802000, 66);

/// Expected expansion bases, anything else in the memory control registers is unsupported
pub const EXPANSION_1_BASE: u32 = 0x1f000000;
pub const EXPANSION_2_BASE: u32 = 0x1f802000;

// ============================================================================
// Exception vectors
// ============================================================================

/// Exception handler when BEV is set (ROM)
pub const EXCEPTION_VECTOR_ROM: u32 = 0xbfc00180;

/// Exception handler when BEV is clear (RAM)
pub const EXCEPTION_VECTOR_RAM: u32 = 0x80000080;

// ============================================================================
// Region masking
// ============================================================================

/// Mask array used to strip the region bits of the address. The mask is selected using the 3
/// MSBs of the address so each entry effectively matches 512MB of the address space. KSEG2 is
/// not touched since it doesn't share anything with the other regions.
const REGION_MASK: [u32; 8] = [
    // KUSEG: 2048MB
    0xffffffff, 0xffffffff, 0xffffffff, 0xffffffff,
    // KSEG0: 512MB
    0x7fffffff,
    // KSEG1: 512MB
    0x1fffffff,
    // KSEG2: 1024MB
    0xffffffff, 0xffffffff,
];

/// Mask a CPU address to remove the region bits
#[inline(always)]
pub fn mask_region(addr: u32) -> u32 {
    let index = (addr >> 29) as usize;

    addr & REGION_MASK[index]
}
