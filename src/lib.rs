//! PlayStation emulator core: MIPS interpreter, interconnect, DMA and the GPU command front end

pub mod config;
pub mod error;
pub mod psx;

#[cfg(test)]
mod tests;

pub use config::{MachineConfig, UnsupportedPolicy};
pub use error::{PsxError, Result, Unsupported};
pub use psx::Psx;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
