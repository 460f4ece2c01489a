//! MIPS R3000A interpreter

mod cop0;
mod instruction;
mod registers;

pub use self::cop0::{Cop0, Exception, Status};
pub use self::instruction::{Instruction, RegisterIndex};
use self::registers::RegisterFile;

use super::bus::Bus;
use super::memory_map::RESET_VECTOR;
use crate::error::Unsupported;
use log::{debug, warn};
use std::fmt;

/// Result of every instruction handler. Architectural exceptions are handled inside the CPU,
/// errors only report unsupported hardware states.
type OpResult = Result<(), Unsupported>;

/// Instruction handler
type Handler = fn(&mut Cpu, Instruction, &mut Bus) -> OpResult;

/// CPU state
pub struct Cpu {
    /// Address of the instruction currently being executed. Used for setting the EPC in
    /// exceptions.
    current_pc: u32,
    /// The Program Counter register: points to the next instruction
    pc: u32,
    /// Next value for the PC, used to emulate the branch delay slot
    next_pc: u32,
    /// General purpose registers and load delay slot
    regs: RegisterFile,
    /// HI register for division remainder and multiplication MSBs
    hi: u32,
    /// LO register for division quotient and multiplication LSBs
    lo: u32,
    /// Coprocessor 0: System control
    cop0: Cop0,
    /// Set by the current instruction if a branch occured and the next instruction will be in
    /// the delay slot
    branch: bool,
    /// Set if the current instruction executes in the delay slot
    delay_slot: bool,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu {
            current_pc: RESET_VECTOR,
            pc: RESET_VECTOR,
            next_pc: RESET_VECTOR.wrapping_add(4),
            regs: RegisterFile::new(),
            hi: 0xdeadbeef,
            lo: 0xdeadbeef,
            cop0: Cop0::new(),
            branch: false,
            delay_slot: false,
        }
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Address of the last instruction executed
    pub fn current_pc(&self) -> u32 {
        self.current_pc
    }

    /// Force PC address. Meant to be used from the debugger or to side-load executables.
    pub fn force_pc(&mut self, pc: u32) {
        self.pc = pc;
        self.next_pc = pc.wrapping_add(4);
        self.branch = false;
        self.delay_slot = false;
    }

    /// Value of general purpose register `index`
    pub fn gpr(&self, index: u32) -> u32 {
        self.regs.reg(RegisterIndex(index & 0x1f))
    }

    pub fn hi(&self) -> u32 {
        self.hi
    }

    pub fn lo(&self) -> u32 {
        self.lo
    }

    pub fn cop0(&self) -> &Cop0 {
        &self.cop0
    }

    /// Return true if the instruction last executed was in a delay slot
    pub fn in_delay_slot(&self) -> bool {
        self.delay_slot
    }

    /// Copy of the architectural state. `irq_pending` is the state of the external interrupt
    /// line, reflected in bit 10 of CAUSE.
    pub fn snapshot(&self, irq_pending: bool) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            current_pc: self.current_pc,
            regs: self.regs.all(),
            hi: self.hi,
            lo: self.lo,
            sr: self.cop0.sr(),
            cause: self.cop0.cause(irq_pending),
            epc: self.cop0.epc(),
        }
    }

    /// Run a single instruction
    pub fn step(&mut self, bus: &mut Bus) -> OpResult {
        // Explanation of the various *pc variables:
        //
        // * `current_pc`: Pointer to the instruction about to be executed.
        //
        // * `pc`: Pointer to the next instruction to be executed. It's possible for this value
        //         to change before the next instruction is reached if an exception occurs
        //         (exceptions have no delay slot).
        //
        // * `next_pc`: Value `pc` will take on the *next* cycle, so effectively a pointer to
        //              the next next instruction being executed. A branch only modifies this
        //              one, which leaves the instruction at `pc` in the pipeline and emulates
        //              the branch delay slot.
        self.current_pc = self.pc;
        self.pc = self.next_pc;
        self.next_pc = self.pc.wrapping_add(4);

        // If the last instruction was a branch then we're in the delay slot
        self.delay_slot = self.branch;
        self.branch = false;

        // Execute the pending load (if any)
        self.regs.apply_pending_load();

        let result = self.fetch_and_execute(bus);

        // Copy the output registers as input for the next instruction
        self.regs.commit();

        result
    }

    fn fetch_and_execute(&mut self, bus: &mut Bus) -> OpResult {
        if self.current_pc % 4 != 0 {
            // PC is not correctly aligned!
            self.exception(Exception::LoadAddressError);
            return Ok(());
        }

        let instruction = Instruction(bus.load::<u32>(self.current_pc)?);

        if self.cop0.irq_active(bus.irq_pending()) {
            // The instruction will be executed when returning from the handler
            self.exception(Exception::Interrupt);
            return Ok(());
        }

        let handler = OPCODE_HANDLERS[instruction.opcode() as usize];

        handler(self, instruction, bus)
    }

    /// Trigger an exception
    fn exception(&mut self, cause: Exception) {
        let handler = self
            .cop0
            .enter_exception(cause, self.current_pc, self.delay_slot);

        // Exceptions don't have a branch delay, we jump directly into the handler
        self.pc = handler;
        self.next_pc = handler.wrapping_add(4);
    }

    fn reg(&self, index: RegisterIndex) -> u32 {
        self.regs.reg(index)
    }

    fn set_reg(&mut self, index: RegisterIndex, val: u32) {
        self.regs.set_reg(index, val)
    }

    /// Branch to immediate value `offset`
    fn branch(&mut self, offset: u32) {
        // Offset immediates are always shifted two places to the right since `PC` addresses
        // have to be aligned on 32bits at all times.
        let offset = offset << 2;

        self.next_pc = self.pc.wrapping_add(offset);

        self.branch = true;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "PC: 0x{:08x}", self.pc)?;

        for i in 0..8 {
            let r = i * 4;

            writeln!(
                f,
                "{}: 0x{:08x}  {}: 0x{:08x}  {}: 0x{:08x}  {}: 0x{:08x}",
                REGISTER_NAMES[r],
                self.gpr(r as u32),
                REGISTER_NAMES[r + 1],
                self.gpr(r as u32 + 1),
                REGISTER_NAMES[r + 2],
                self.gpr(r as u32 + 2),
                REGISTER_NAMES[r + 3],
                self.gpr(r as u32 + 3),
            )?;
        }

        writeln!(f, "HI: 0x{:08x}  LO: 0x{:08x}", self.hi, self.lo)
    }
}

/// Copy of the architectural state, handed to debuggers and front-ends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub pc: u32,
    pub current_pc: u32,
    pub regs: [u32; 32],
    pub hi: u32,
    pub lo: u32,
    pub sr: u32,
    pub cause: u32,
    pub epc: u32,
}

/// Load with alignment check. Returns `None` if an exception was raised.
fn load<T: super::Addressable>(
    cpu: &mut Cpu,
    bus: &mut Bus,
    addr: u32,
) -> Result<Option<T>, Unsupported> {
    if addr % T::width() as u32 != 0 {
        cpu.exception(Exception::LoadAddressError);
        return Ok(None);
    }

    bus.load::<T>(addr).map(Some)
}

/// Store with cache isolation and alignment checks
fn store<T: super::Addressable>(cpu: &mut Cpu, bus: &mut Bus, addr: u32, val: T) -> OpResult {
    if cpu.cop0.cache_isolated() {
        // The cache isn't emulated, drop the write
        return Ok(());
    }

    if addr % T::width() as u32 != 0 {
        cpu.exception(Exception::StoreAddressError);
        return Ok(());
    }

    bus.store(addr, val)
}

/// Decode the instruction using the function field
fn op_function(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let handler = FUNCTION_HANDLERS[instruction.function() as usize];

    handler(cpu, instruction, bus)
}

/// Shift Left Logical
fn op_sll(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.shift();
    let t = instruction.t();
    let d = instruction.d();

    let v = cpu.reg(t) << i;

    cpu.set_reg(d, v);

    Ok(())
}

/// Shift Right Logical
fn op_srl(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.shift();
    let t = instruction.t();
    let d = instruction.d();

    let v = cpu.reg(t) >> i;

    cpu.set_reg(d, v);

    Ok(())
}

/// Shift Right Arithmetic
fn op_sra(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.shift();
    let t = instruction.t();
    let d = instruction.d();

    let v = (cpu.reg(t) as i32) >> i;

    cpu.set_reg(d, v as u32);

    Ok(())
}

/// Shift Left Logical Variable
fn op_sllv(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    // Shift amount is truncated to 5 bits
    let v = cpu.reg(t) << (cpu.reg(s) & 0x1f);

    cpu.set_reg(d, v);

    Ok(())
}

/// Shift Right Logical Variable
fn op_srlv(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = cpu.reg(t) >> (cpu.reg(s) & 0x1f);

    cpu.set_reg(d, v);

    Ok(())
}

/// Shift Right Arithmetic Variable
fn op_srav(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = (cpu.reg(t) as i32) >> (cpu.reg(s) & 0x1f);

    cpu.set_reg(d, v as u32);

    Ok(())
}

/// Jump Register
fn op_jr(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();

    cpu.next_pc = cpu.reg(s);
    cpu.branch = true;

    Ok(())
}

/// Jump And Link Register
fn op_jalr(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();

    let ra = cpu.next_pc;

    cpu.next_pc = cpu.reg(s);
    cpu.branch = true;

    // Store return address in `d`
    cpu.set_reg(d, ra);

    Ok(())
}

/// System Call
fn op_syscall(cpu: &mut Cpu, _: Instruction, _: &mut Bus) -> OpResult {
    cpu.exception(Exception::SysCall);

    Ok(())
}

/// Break
fn op_break(cpu: &mut Cpu, _: Instruction, _: &mut Bus) -> OpResult {
    cpu.exception(Exception::Break);

    Ok(())
}

/// Move From HI
fn op_mfhi(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();

    let hi = cpu.hi;
    cpu.set_reg(d, hi);

    Ok(())
}

/// Move to HI
fn op_mthi(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();

    cpu.hi = cpu.reg(s);

    Ok(())
}

/// Move From LO
fn op_mflo(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();

    let lo = cpu.lo;
    cpu.set_reg(d, lo);

    Ok(())
}

/// Move to LO
fn op_mtlo(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();

    cpu.lo = cpu.reg(s);

    Ok(())
}

/// Multiply (signed)
fn op_mult(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();

    let a = (cpu.reg(s) as i32) as i64;
    let b = (cpu.reg(t) as i32) as i64;

    let v = (a * b) as u64;

    cpu.hi = (v >> 32) as u32;
    cpu.lo = v as u32;

    Ok(())
}

/// Multiply Unsigned
fn op_multu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();

    let a = cpu.reg(s) as u64;
    let b = cpu.reg(t) as u64;

    let v = a * b;

    cpu.hi = (v >> 32) as u32;
    cpu.lo = v as u32;

    Ok(())
}

/// Divide (signed)
fn op_div(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();

    let n = cpu.reg(s) as i32;
    let d = cpu.reg(t) as i32;

    if d == 0 {
        // Division by zero, results are bogus
        cpu.hi = n as u32;

        if n >= 0 {
            cpu.lo = 0xffffffff;
        } else {
            cpu.lo = 1;
        }
    } else if n as u32 == 0x80000000 && d == -1 {
        // Result is not representable in a 32bit signed integer
        cpu.hi = 0;
        cpu.lo = 0x80000000;
    } else {
        cpu.hi = (n % d) as u32;
        cpu.lo = (n / d) as u32;
    }

    Ok(())
}

/// Divide Unsigned
fn op_divu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();

    let n = cpu.reg(s);
    let d = cpu.reg(t);

    if d == 0 {
        // Division by zero, results are bogus
        cpu.hi = n;
        cpu.lo = 0xffffffff;
    } else {
        cpu.hi = n % d;
        cpu.lo = n / d;
    }

    Ok(())
}

/// Add and generate an exception on overflow
fn op_add(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();
    let d = instruction.d();

    let s = cpu.reg(s) as i32;
    let t = cpu.reg(t) as i32;

    match s.checked_add(t) {
        Some(v) => cpu.set_reg(d, v as u32),
        None => cpu.exception(Exception::Overflow),
    }

    Ok(())
}

/// Add Unsigned
fn op_addu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();
    let d = instruction.d();

    let v = cpu.reg(s).wrapping_add(cpu.reg(t));

    cpu.set_reg(d, v);

    Ok(())
}

/// Subtract and generate an exception on overflow
fn op_sub(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();
    let d = instruction.d();

    let s = cpu.reg(s) as i32;
    let t = cpu.reg(t) as i32;

    match s.checked_sub(t) {
        Some(v) => cpu.set_reg(d, v as u32),
        None => cpu.exception(Exception::Overflow),
    }

    Ok(())
}

/// Subtract Unsigned
fn op_subu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let s = instruction.s();
    let t = instruction.t();
    let d = instruction.d();

    let v = cpu.reg(s).wrapping_sub(cpu.reg(t));

    cpu.set_reg(d, v);

    Ok(())
}

/// Bitwise And
fn op_and(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = cpu.reg(s) & cpu.reg(t);

    cpu.set_reg(d, v);

    Ok(())
}

/// Bitwise Or
fn op_or(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = cpu.reg(s) | cpu.reg(t);

    cpu.set_reg(d, v);

    Ok(())
}

/// Bitwise Exclusive Or
fn op_xor(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = cpu.reg(s) ^ cpu.reg(t);

    cpu.set_reg(d, v);

    Ok(())
}

/// Bitwise Not Or
fn op_nor(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = !(cpu.reg(s) | cpu.reg(t));

    cpu.set_reg(d, v);

    Ok(())
}

/// Set on Less Than (signed)
fn op_slt(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let s = cpu.reg(s) as i32;
    let t = cpu.reg(t) as i32;

    let v = s < t;

    cpu.set_reg(d, v as u32);

    Ok(())
}

/// Set on Less Than Unsigned
fn op_sltu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let d = instruction.d();
    let s = instruction.s();
    let t = instruction.t();

    let v = cpu.reg(s) < cpu.reg(t);

    cpu.set_reg(d, v as u32);

    Ok(())
}

/// Various branch instructions: BGEZ, BLTZ, BGEZAL, BLTZAL. Bits [20:16] are used to figure out
/// which one to use
fn op_bxx(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let s = instruction.s();

    let instruction = instruction.0;

    let is_bgez = (instruction >> 16) & 1;
    // It's not enough to test for bit 20 to see if we're supposed to link, if any bit in the
    // range [19:17] is set the link doesn't take place and RA is left untouched.
    let is_link = (instruction >> 17) & 0xf == 0x8;

    let v = cpu.reg(s) as i32;

    // Test "less than zero"
    let test = (v < 0) as u32;

    // If the test is "greater than or equal to zero" we need to negate the comparison above
    // ("a >= 0" <=> "!(a < 0)"). The xor takes care of that.
    let test = test ^ is_bgez;

    // If linking is requested it occurs unconditionally, even if the branch is not taken
    if is_link {
        let ra = cpu.next_pc;

        // Store return address in R31
        cpu.set_reg(RegisterIndex(31), ra);
    }

    if test != 0 {
        cpu.branch(i);
    }

    Ok(())
}

/// Jump
fn op_j(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_jump();

    // The target only holds 26 bits, the 4 MSBs come from the address of the delay slot
    cpu.next_pc = (cpu.pc & 0xf0000000) | (i << 2);
    cpu.branch = true;

    Ok(())
}

/// Jump And Link
fn op_jal(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let ra = cpu.next_pc;

    op_j(cpu, instruction, bus)?;

    // Store return address in R31
    cpu.set_reg(RegisterIndex(31), ra);

    Ok(())
}

/// Branch if Equal
fn op_beq(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let s = instruction.s();
    let t = instruction.t();

    if cpu.reg(s) == cpu.reg(t) {
        cpu.branch(i);
    }

    Ok(())
}

/// Branch if Not Equal
fn op_bne(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let s = instruction.s();
    let t = instruction.t();

    if cpu.reg(s) != cpu.reg(t) {
        cpu.branch(i);
    }

    Ok(())
}

/// Branch if Less than or Equal to Zero
fn op_blez(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let s = instruction.s();

    let v = cpu.reg(s) as i32;

    if v <= 0 {
        cpu.branch(i);
    }

    Ok(())
}

/// Branch if Greater Than Zero
fn op_bgtz(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let s = instruction.s();

    let v = cpu.reg(s) as i32;

    if v > 0 {
        cpu.branch(i);
    }

    Ok(())
}

/// Add Immediate and check for signed overflow
fn op_addi(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se() as i32;
    let t = instruction.t();
    let s = instruction.s();

    let s = cpu.reg(s) as i32;

    match s.checked_add(i) {
        Some(v) => cpu.set_reg(t, v as u32),
        None => cpu.exception(Exception::Overflow),
    }

    Ok(())
}

/// Add Immediate Unsigned
fn op_addiu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let v = cpu.reg(s).wrapping_add(i);

    cpu.set_reg(t, v);

    Ok(())
}

/// Set if Less Than Immediate (signed)
fn op_slti(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se() as i32;
    let s = instruction.s();
    let t = instruction.t();

    let v = (cpu.reg(s) as i32) < i;

    cpu.set_reg(t, v as u32);

    Ok(())
}

/// Set if Less Than Immediate Unsigned
fn op_sltiu(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let s = instruction.s();
    let t = instruction.t();

    let v = cpu.reg(s) < i;

    cpu.set_reg(t, v as u32);

    Ok(())
}

/// Bitwise And Immediate
fn op_andi(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm();
    let t = instruction.t();
    let s = instruction.s();

    let v = cpu.reg(s) & i;

    cpu.set_reg(t, v);

    Ok(())
}

/// Bitwise Or Immediate
fn op_ori(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm();
    let t = instruction.t();
    let s = instruction.s();

    let v = cpu.reg(s) | i;

    cpu.set_reg(t, v);

    Ok(())
}

/// Bitwise eXclusive Or Immediate
fn op_xori(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm();
    let t = instruction.t();
    let s = instruction.s();

    let v = cpu.reg(s) ^ i;

    cpu.set_reg(t, v);

    Ok(())
}

/// Load Upper Immediate
fn op_lui(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    let i = instruction.imm();
    let t = instruction.t();

    // Low 16 bits are set to 0
    let v = i << 16;

    cpu.set_reg(t, v);

    Ok(())
}

/// Coprocessor 0 opcode
fn op_cop0(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    match instruction.cop_opcode() {
        0b00000 => op_mfc0(cpu, instruction, bus),
        0b00100 => op_mtc0(cpu, instruction),
        0b10000 => op_rfe(cpu, instruction),
        _ => op_illegal(cpu, instruction, bus),
    }
}

/// Move To Coprocessor 0
fn op_mtc0(cpu: &mut Cpu, instruction: Instruction) -> OpResult {
    let cpu_r = instruction.t();
    let cop_r = instruction.d().0;

    let v = cpu.reg(cpu_r);

    match cop_r {
        // Breakpoints registers, only zero is supported
        3 | 5 | 6 | 7 | 9 | 11 => {
            if v != 0 {
                return Err(Unsupported::Cop0Write { reg: cop_r, value: v });
            }
        }
        12 => cpu.cop0.set_sr(v),
        // Cause register, only zero is supported
        13 => {
            if v != 0 {
                return Err(Unsupported::Cop0Write { reg: cop_r, value: v });
            }
        }
        _ => return Err(Unsupported::Cop0Write { reg: cop_r, value: v }),
    }

    Ok(())
}

/// Move From Coprocessor 0
fn op_mfc0(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let cpu_r = instruction.t();
    let cop_r = instruction.d().0;

    let v = match cop_r {
        12 => cpu.cop0.sr(),
        13 => cpu.cop0.cause(bus.irq_pending()),
        14 => cpu.cop0.epc(),
        _ => return Err(Unsupported::Cop0Read(cop_r)),
    };

    cpu.regs.load_delay(cpu_r, v);

    Ok(())
}

/// Return From Exception
fn op_rfe(cpu: &mut Cpu, instruction: Instruction) -> OpResult {
    // There are other instructions with the same encoding but all are virtual memory related
    // and the PlayStation doesn't implement them. Still, let's make sure we're not running
    // buggy code.
    if instruction.function() != 0b010000 {
        warn!("Invalid cop0 instruction: {:?}", instruction);
        cpu.exception(Exception::IllegalInstruction);
        return Ok(());
    }

    cpu.cop0.return_from_exception();

    Ok(())
}

/// Coprocessor 1 opcode (does not exist on the PlayStation)
fn op_cop1(cpu: &mut Cpu, _: Instruction, _: &mut Bus) -> OpResult {
    cpu.exception(Exception::CoprocessorError);

    Ok(())
}

/// Coprocessor 2 opcode (GTE)
fn op_cop2(_: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    warn!("Unhandled GTE instruction: {:?}", instruction);

    Ok(())
}

/// Coprocessor 3 opcode (does not exist on the PlayStation)
fn op_cop3(cpu: &mut Cpu, _: Instruction, _: &mut Bus) -> OpResult {
    cpu.exception(Exception::CoprocessorError);

    Ok(())
}

/// Load Byte (signed)
fn op_lb(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    if let Some(v) = load::<u8>(cpu, bus, addr)? {
        // Cast as i8 to force sign extension
        let v = v as i8;

        cpu.regs.load_delay(t, v as u32);
    }

    Ok(())
}

/// Load Halfword (signed)
fn op_lh(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    if let Some(v) = load::<u16>(cpu, bus, addr)? {
        // Cast as i16 to force sign extension
        let v = v as i16;

        cpu.regs.load_delay(t, v as u32);
    }

    Ok(())
}

/// Load Word Left (little-endian only implementation)
fn op_lwl(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    // This instruction bypasses the load delay restriction: this instruction will merge the
    // new contents with the value currently being loaded if need be.
    let cur_v = cpu.regs.pending(t);

    // Next we load the *aligned* word containing the first addressed byte
    let aligned_addr = addr & !3;
    let aligned_word = bus.load::<u32>(aligned_addr)?;

    // Depending on the address alignment we fetch the 1, 2, 3 or 4 *most* significant bytes
    // and put them in the target register.
    let v = match addr & 3 {
        0 => (cur_v & 0x00ffffff) | (aligned_word << 24),
        1 => (cur_v & 0x0000ffff) | (aligned_word << 16),
        2 => (cur_v & 0x000000ff) | (aligned_word << 8),
        _ => aligned_word,
    };

    cpu.regs.load_delay(t, v);

    Ok(())
}

/// Load Word
fn op_lw(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    if let Some(v) = load::<u32>(cpu, bus, addr)? {
        cpu.regs.load_delay(t, v);
    }

    Ok(())
}

/// Load Byte Unsigned
fn op_lbu(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    if let Some(v) = load::<u8>(cpu, bus, addr)? {
        cpu.regs.load_delay(t, v as u32);
    }

    Ok(())
}

/// Load Halfword Unsigned
fn op_lhu(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    if let Some(v) = load::<u16>(cpu, bus, addr)? {
        cpu.regs.load_delay(t, v as u32);
    }

    Ok(())
}

/// Load Word Right (little-endian only implementation)
fn op_lwr(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);

    // This instruction bypasses the load delay restriction: this instruction will merge the
    // new contents with the value currently being loaded if need be.
    let cur_v = cpu.regs.pending(t);

    // Next we load the *aligned* word containing the first addressed byte
    let aligned_addr = addr & !3;
    let aligned_word = bus.load::<u32>(aligned_addr)?;

    // Depending on the address alignment we fetch the 1, 2, 3 or 4 *least* significant bytes
    // and put them in the target register.
    let v = match addr & 3 {
        0 => aligned_word,
        1 => (cur_v & 0xff000000) | (aligned_word >> 8),
        2 => (cur_v & 0xffff0000) | (aligned_word >> 16),
        _ => (cur_v & 0xffffff00) | (aligned_word >> 24),
    };

    cpu.regs.load_delay(t, v);

    Ok(())
}

/// Store Byte
fn op_sb(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);
    let v = cpu.reg(t);

    store(cpu, bus, addr, v as u8)
}

/// Store Halfword
fn op_sh(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);
    let v = cpu.reg(t);

    store(cpu, bus, addr, v as u16)
}

/// Store Word Left (little-endian only implementation)
fn op_swl(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);
    let v = cpu.reg(t);

    let aligned_addr = addr & !3;

    if cpu.cop0.cache_isolated() {
        return Ok(());
    }

    // Load the current value for the aligned word at the target address
    let cur_mem = bus.load::<u32>(aligned_addr)?;

    let mem = match addr & 3 {
        0 => (cur_mem & 0xffffff00) | (v >> 24),
        1 => (cur_mem & 0xffff0000) | (v >> 16),
        2 => (cur_mem & 0xff000000) | (v >> 8),
        _ => v,
    };

    store(cpu, bus, aligned_addr, mem)
}

/// Store Word
fn op_sw(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);
    let v = cpu.reg(t);

    store(cpu, bus, addr, v)
}

/// Store Word Right (little-endian only implementation)
fn op_swr(cpu: &mut Cpu, instruction: Instruction, bus: &mut Bus) -> OpResult {
    let i = instruction.imm_se();
    let t = instruction.t();
    let s = instruction.s();

    let addr = cpu.reg(s).wrapping_add(i);
    let v = cpu.reg(t);

    let aligned_addr = addr & !3;

    if cpu.cop0.cache_isolated() {
        return Ok(());
    }

    // Load the current value for the aligned word at the target address
    let cur_mem = bus.load::<u32>(aligned_addr)?;

    let mem = match addr & 3 {
        0 => v,
        1 => (cur_mem & 0x000000ff) | (v << 8),
        2 => (cur_mem & 0x0000ffff) | (v << 16),
        _ => (cur_mem & 0x00ffffff) | (v << 24),
    };

    store(cpu, bus, aligned_addr, mem)
}

/// Load Word in Coprocessor 0, 1 or 3 (not supported on the PlayStation)
fn op_lwc_unusable(cpu: &mut Cpu, _: Instruction, _: &mut Bus) -> OpResult {
    cpu.exception(Exception::CoprocessorError);

    Ok(())
}

/// Load Word in Coprocessor 2
fn op_lwc2(_: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    warn!("Unhandled GTE LWC: {:?}", instruction);

    Ok(())
}

/// Store Word in Coprocessor 0, 1 or 3 (not supported on the PlayStation)
fn op_swc_unusable(cpu: &mut Cpu, _: Instruction, _: &mut Bus) -> OpResult {
    cpu.exception(Exception::CoprocessorError);

    Ok(())
}

/// Store Word in Coprocessor 2
fn op_swc2(_: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    warn!("Unhandled GTE SWC: {:?}", instruction);

    Ok(())
}

/// Illegal instruction
fn op_illegal(cpu: &mut Cpu, instruction: Instruction, _: &mut Bus) -> OpResult {
    warn!(
        "Illegal instruction {:?} at 0x{:08x}",
        instruction, cpu.current_pc
    );
    debug!("{:?}", cpu);

    cpu.exception(Exception::IllegalInstruction);

    Ok(())
}

/// Handler table for the main opcodes (instruction bits [31:26])
#[rustfmt::skip]
const OPCODE_HANDLERS: [Handler; 64] = [
    // 0x00
    op_function,     op_bxx,          op_j,            op_jal,
    op_beq,          op_bne,          op_blez,         op_bgtz,
    op_addi,         op_addiu,        op_slti,         op_sltiu,
    op_andi,         op_ori,          op_xori,         op_lui,
    // 0x10
    op_cop0,         op_cop1,         op_cop2,         op_cop3,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    // 0x20
    op_lb,           op_lh,           op_lwl,          op_lw,
    op_lbu,          op_lhu,          op_lwr,          op_illegal,
    op_sb,           op_sh,           op_swl,          op_sw,
    op_illegal,      op_illegal,      op_swr,          op_illegal,
    // 0x30
    op_lwc_unusable, op_lwc_unusable, op_lwc2,         op_lwc_unusable,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_swc_unusable, op_swc_unusable, op_swc2,         op_swc_unusable,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
];

/// Handler table for the function codes (instruction bits [5:0] when opcode is 0)
#[rustfmt::skip]
const FUNCTION_HANDLERS: [Handler; 64] = [
    // 0x00
    op_sll,          op_illegal,      op_srl,          op_sra,
    op_sllv,         op_illegal,      op_srlv,         op_srav,
    op_jr,           op_jalr,         op_illegal,      op_illegal,
    op_syscall,      op_break,        op_illegal,      op_illegal,
    // 0x10
    op_mfhi,         op_mthi,         op_mflo,         op_mtlo,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_mult,         op_multu,        op_div,          op_divu,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    // 0x20
    op_add,          op_addu,         op_sub,          op_subu,
    op_and,          op_or,           op_xor,          op_nor,
    op_illegal,      op_illegal,      op_slt,          op_sltu,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    // 0x30
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
    op_illegal,      op_illegal,      op_illegal,      op_illegal,
];

/// Conventional names given to the MIPS registers
const REGISTER_NAMES: [&str; 32] = [
    "r0", // Hardwired to be always 0
    "at", // Assembler Temporary (reserved for the assembler)
    "v0", "v1", // First and second return values
    "a0", "a1", "a2", "a3", // First four function arguments
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", // Temporary registers
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", // Saved registers
    "t8", "t9", // Temporary registers
    "k0", "k1", // Reserved for the kernel
    "gp", // Global pointer
    "sp", // Stack pointer
    "fp", // Frame pointer
    "ra", // Function return address
];
