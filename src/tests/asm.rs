// Minimal MIPS assembler and machine setup shared by the scenario tests

use crate::config::MachineConfig;
use crate::psx::bios::Bios;
use crate::psx::memory_map::BIOS_SIZE;
use crate::psx::Psx;

pub const T0: u32 = 8;
pub const T1: u32 = 9;
pub const T2: u32 = 10;
pub const T3: u32 = 11;
pub const RA: u32 = 31;

pub const NOP: u32 = 0;

/// Build a BIOS image with `program` at the reset vector
pub fn bios_with_program(program: &[u32]) -> Vec<u8> {
    let mut data = vec![0u8; BIOS_SIZE];

    for (i, w) in program.iter().enumerate() {
        data[i * 4..i * 4 + 4].copy_from_slice(&w.to_le_bytes());
    }

    data
}

/// Console whose BIOS starts with `program`, RAM zeroed
pub fn psx_with_program(program: &[u32]) -> Psx {
    let bios = Bios::from_bytes(bios_with_program(program)).unwrap();

    Psx::new(bios, &MachineConfig::default())
}

/// Step `n` instructions, none of which may hit an unsupported state
pub fn step_n(psx: &mut Psx, n: usize) {
    for _ in 0..n {
        psx.step().unwrap();
    }
}

fn i_type(op: u32, s: u32, t: u32, imm: u16) -> u32 {
    (op << 26) | (s << 21) | (t << 16) | imm as u32
}

fn r_type(function: u32, s: u32, t: u32, d: u32, shift: u32) -> u32 {
    (s << 21) | (t << 16) | (d << 11) | (shift << 6) | function
}

pub fn lui(t: u32, imm: u16) -> u32 {
    i_type(0x0f, 0, t, imm)
}

pub fn ori(t: u32, s: u32, imm: u16) -> u32 {
    i_type(0x0d, s, t, imm)
}

pub fn addi(t: u32, s: u32, imm: u16) -> u32 {
    i_type(0x08, s, t, imm)
}

pub fn addiu(t: u32, s: u32, imm: u16) -> u32 {
    i_type(0x09, s, t, imm)
}

pub fn slti(t: u32, s: u32, imm: u16) -> u32 {
    i_type(0x0a, s, t, imm)
}

pub fn sltiu(t: u32, s: u32, imm: u16) -> u32 {
    i_type(0x0b, s, t, imm)
}

pub fn add(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x20, s, t, d, 0)
}

pub fn addu(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x21, s, t, d, 0)
}

pub fn sub(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x22, s, t, d, 0)
}

pub fn or(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x25, s, t, d, 0)
}

pub fn nor(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x27, s, t, d, 0)
}

pub fn slt(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x2a, s, t, d, 0)
}

pub fn sltu(d: u32, s: u32, t: u32) -> u32 {
    r_type(0x2b, s, t, d, 0)
}

pub fn sll(d: u32, t: u32, shift: u32) -> u32 {
    r_type(0x00, 0, t, d, shift)
}

pub fn sra(d: u32, t: u32, shift: u32) -> u32 {
    r_type(0x03, 0, t, d, shift)
}

pub fn srlv(d: u32, t: u32, s: u32) -> u32 {
    r_type(0x06, s, t, d, 0)
}

pub fn jr(s: u32) -> u32 {
    r_type(0x08, s, 0, 0, 0)
}

pub fn jalr(d: u32, s: u32) -> u32 {
    r_type(0x09, s, 0, d, 0)
}

pub fn syscall() -> u32 {
    0x0000_000c
}

pub fn brk() -> u32 {
    0x0000_000d
}

pub fn mfhi(d: u32) -> u32 {
    r_type(0x10, 0, 0, d, 0)
}

pub fn mflo(d: u32) -> u32 {
    r_type(0x12, 0, 0, d, 0)
}

pub fn mult(s: u32, t: u32) -> u32 {
    r_type(0x18, s, t, 0, 0)
}

pub fn multu(s: u32, t: u32) -> u32 {
    r_type(0x19, s, t, 0, 0)
}

pub fn div(s: u32, t: u32) -> u32 {
    r_type(0x1a, s, t, 0, 0)
}

pub fn divu(s: u32, t: u32) -> u32 {
    r_type(0x1b, s, t, 0, 0)
}

pub fn beq(s: u32, t: u32, offset: u16) -> u32 {
    i_type(0x04, s, t, offset)
}

pub fn bne(s: u32, t: u32, offset: u16) -> u32 {
    i_type(0x05, s, t, offset)
}

/// BLTZ, BGEZ, BLTZAL, BGEZAL depending on `rt`
pub fn bxx(rt: u32, s: u32, offset: u16) -> u32 {
    i_type(0x01, s, rt, offset)
}

pub fn j(target: u32) -> u32 {
    (0x02 << 26) | ((target >> 2) & 0x3ff_ffff)
}

pub fn jal(target: u32) -> u32 {
    (0x03 << 26) | ((target >> 2) & 0x3ff_ffff)
}

pub fn lb(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x20, base, t, offset)
}

pub fn lh(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x21, base, t, offset)
}

pub fn lwl(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x22, base, t, offset)
}

pub fn lw(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x23, base, t, offset)
}

pub fn lbu(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x24, base, t, offset)
}

pub fn lhu(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x25, base, t, offset)
}

pub fn lwr(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x26, base, t, offset)
}

pub fn sb(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x28, base, t, offset)
}

pub fn sh(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x29, base, t, offset)
}

pub fn swl(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x2a, base, t, offset)
}

pub fn sw(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x2b, base, t, offset)
}

pub fn swr(t: u32, offset: u16, base: u32) -> u32 {
    i_type(0x2e, base, t, offset)
}

pub fn mtc0(t: u32, cop_r: u32) -> u32 {
    (0x10 << 26) | (0x04 << 21) | (t << 16) | (cop_r << 11)
}

pub fn mfc0(t: u32, cop_r: u32) -> u32 {
    (0x10 << 26) | (t << 16) | (cop_r << 11)
}

pub fn rfe() -> u32 {
    0x4200_0010
}
