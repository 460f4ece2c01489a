//! General purpose register file with load delay emulation
//!
//! Two copies of the registers are kept: instructions read from `regs` and write to `out_regs`,
//! which becomes visible once the instruction completes. A load doesn't write the output set
//! right away, it's kept aside in `load` and only lands at the start of the next instruction
//! so that instruction still sees the old value.

use super::instruction::RegisterIndex;

pub struct RegisterFile {
    /// Registers as seen by the current instruction
    regs: [u32; 32],
    /// Registers once the current instruction completes
    out_regs: [u32; 32],
    /// Pending load: target register and value
    load: (RegisterIndex, u32),
}

impl RegisterFile {
    pub fn new() -> RegisterFile {
        // Garbage value for all registers
        let mut regs = [0xdeadbeef; 32];

        // ... but R0 is hardwired to 0
        regs[0] = 0;

        RegisterFile {
            regs,
            out_regs: regs,
            load: (RegisterIndex(0), 0),
        }
    }

    pub fn reg(&self, index: RegisterIndex) -> u32 {
        self.regs[index.0 as usize]
    }

    pub fn set_reg(&mut self, index: RegisterIndex, val: u32) {
        self.out_regs[index.0 as usize] = val;

        // Make sure R0 is always 0
        self.out_regs[0] = 0;
    }

    /// Value the register will have once the current instruction completes, including a load
    /// that just landed
    pub fn pending(&self, index: RegisterIndex) -> u32 {
        self.out_regs[index.0 as usize]
    }

    /// Schedule a delayed load
    pub fn load_delay(&mut self, index: RegisterIndex, val: u32) {
        self.load = (index, val);
    }

    /// Execute the pending load (if any, otherwise it will load `R0` which is a NOP)
    pub fn apply_pending_load(&mut self) {
        let (reg, val) = self.load;
        self.set_reg(reg, val);

        // We reset the load to target register 0 for the next instruction
        self.load = (RegisterIndex(0), 0);
    }

    /// Make this instruction's writes visible
    pub fn commit(&mut self) {
        self.regs = self.out_regs;
    }

    pub fn all(&self) -> [u32; 32] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        RegisterFile::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r0_is_hardwired() {
        let mut r = RegisterFile::new();

        r.set_reg(RegisterIndex(0), 0x1234);
        r.commit();
        assert_eq!(r.reg(RegisterIndex(0)), 0);

        r.load_delay(RegisterIndex(0), 0x1234);
        r.apply_pending_load();
        r.commit();
        assert_eq!(r.reg(RegisterIndex(0)), 0);
    }

    #[test]
    fn test_write_visible_after_commit() {
        let mut r = RegisterFile::new();

        r.set_reg(RegisterIndex(3), 7);
        assert_eq!(r.reg(RegisterIndex(3)), 0xdeadbeef);
        assert_eq!(r.pending(RegisterIndex(3)), 7);

        r.commit();
        assert_eq!(r.reg(RegisterIndex(3)), 7);
    }

    #[test]
    fn test_load_lands_one_cycle_late() {
        for i in 1..32 {
            let reg = RegisterIndex(i);
            let mut r = RegisterFile::new();

            // Cycle 0: load issued
            r.apply_pending_load();
            r.load_delay(reg, i * 3);
            r.commit();
            assert_eq!(r.reg(reg), 0xdeadbeef);

            // Cycle 1: the load lands in the output set only
            r.apply_pending_load();
            assert_eq!(r.reg(reg), 0xdeadbeef);
            r.commit();

            // Cycle 2
            assert_eq!(r.reg(reg), i * 3);
        }
    }

    #[test]
    fn test_direct_write_wins_over_landing_load() {
        let mut r = RegisterFile::new();

        r.load_delay(RegisterIndex(5), 1);
        r.commit();

        r.apply_pending_load();
        r.set_reg(RegisterIndex(5), 2);
        r.commit();

        assert_eq!(r.reg(RegisterIndex(5)), 2);
    }
}
