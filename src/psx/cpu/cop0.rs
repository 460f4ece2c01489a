//! Coprocessor 0: system control

use crate::psx::memory_map::{EXCEPTION_VECTOR_RAM, EXCEPTION_VECTOR_ROM};
use bitflags::bitflags;

bitflags! {
    /// Bits of the status register we care about. The rest are stored but ignored.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct Status: u32 {
        /// Current interrupt enable
        const IEC = 1 << 0;
        /// Current kernel/user mode
        const KUC = 1 << 1;
        /// Previous interrupt enable
        const IEP = 1 << 2;
        /// Previous kernel/user mode
        const KUP = 1 << 3;
        /// Old interrupt enable
        const IEO = 1 << 4;
        /// Old kernel/user mode
        const KUO = 1 << 5;
        /// Hardware interrupt mask (the only one wired on the PSX)
        const IM_HW = 1 << 10;
        /// Isolate cache: stores go to the cache instead of memory
        const ISOLATE_CACHE = 1 << 16;
        /// Boot exception vectors in ROM
        const BEV = 1 << 22;
    }
}

/// Exception types (as stored in the `CAUSE` register)
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Exception {
    /// Interrupt Request
    Interrupt = 0x0,
    /// Address error on load
    LoadAddressError = 0x4,
    /// Address error on store
    StoreAddressError = 0x5,
    /// Bus error on instruction fetch
    InstructionBusError = 0x6,
    /// Bus error on data access
    DataBusError = 0x7,
    /// System call (caused by the SYSCALL opcode)
    SysCall = 0x8,
    /// Breakpoint (caused by the BREAK opcode)
    Break = 0x9,
    /// CPU encountered an unknown instruction
    IllegalInstruction = 0xa,
    /// Unsupported coprocessor operation
    CoprocessorError = 0xb,
    /// Arithmetic overflow
    Overflow = 0xc,
}

pub struct Cop0 {
    /// Cop0r12: Status Register
    sr: Status,
    /// Cop0r13: Cause Register
    cause: u32,
    /// Cop0r14: Exception PC
    epc: u32,
}

impl Cop0 {
    pub fn new() -> Cop0 {
        Cop0 {
            sr: Status::empty(),
            cause: 0,
            epc: 0,
        }
    }

    pub fn sr(&self) -> u32 {
        self.sr.bits()
    }

    pub fn set_sr(&mut self, sr: u32) {
        self.sr = Status::from_bits_retain(sr);
    }

    /// Cause register. Bit 10 mirrors the state of the external interrupt line
    pub fn cause(&self, irq_pending: bool) -> u32 {
        self.cause | ((irq_pending as u32) << 10)
    }

    pub fn epc(&self) -> u32 {
        self.epc
    }

    pub fn cache_isolated(&self) -> bool {
        self.sr.contains(Status::ISOLATE_CACHE)
    }

    /// Return true if an interrupt is pending and unmasked
    pub fn irq_active(&self, irq_pending: bool) -> bool {
        irq_pending && self.sr.contains(Status::IEC | Status::IM_HW)
    }

    /// Update the registers to enter the exception handler and return its address. `pc` is
    /// the address of the instruction that raised the exception.
    pub fn enter_exception(&mut self, cause: Exception, pc: u32, in_delay_slot: bool) -> u32 {
        // Shift bits [5:0] of `SR` two places to the left. Those bits are three pairs of
        // Interrupt Enable/User Mode bits behaving like a stack 3 entries deep. Entering an
        // exception pushes a pair of zeroes by left shifting the stack which disables
        // interrupts and puts the CPU in kernel mode. The original third entry is discarded
        // (it's up to the kernel to handle more than two recursive exception levels).
        let sr = self.sr.bits();
        let mode = sr & 0x3f;

        self.set_sr((sr & !0x3f) | ((mode << 2) & 0x3f));

        self.cause = (cause as u32) << 2;

        if in_delay_slot {
            // When an exception occurs in a delay slot `EPC` is moved one instruction past the
            // faulting one and bit 31 of `CAUSE` is set
            self.epc = pc.wrapping_add(4);
            self.cause |= 1 << 31;
        } else {
            self.epc = pc;
        }

        // The address of the exception handler address depends on the value of the BEV bit
        // in SR
        if self.sr.contains(Status::BEV) {
            EXCEPTION_VECTOR_ROM
        } else {
            EXCEPTION_VECTOR_RAM
        }
    }

    /// The counterpart to `enter_exception`: shift SR's mode back into place
    pub fn return_from_exception(&mut self) {
        let sr = self.sr.bits();
        let mode = sr & 0x3f;

        // Bits [5:4] (the last two bits of the stack) are not touched and retain their value
        self.set_sr((sr & !0xf) | (mode >> 2));
    }
}

impl Default for Cop0 {
    fn default() -> Self {
        Cop0::new()
    }
}
