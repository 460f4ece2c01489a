use std::io;
use thiserror::Error;

pub type Result<T> = ::std::result::Result<T, PsxError>;

#[derive(Error, Debug)]
pub enum PsxError {
    #[error("Input output error: {0}")]
    IoError(#[from] io::Error),
    #[error("Invalid BIOS file `{0}`")]
    BadBios(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Unsupported hardware state: {0}")]
    Unsupported(#[from] Unsupported),
}

impl PsxError {
    /// True when the error was raised by the emulated hardware rather than by the host
    pub fn is_unsupported(&self) -> bool {
        matches!(self, PsxError::Unsupported(_))
    }
}

/// Hardware configurations the emulator doesn't know how to handle. Running into one of these
/// means that the emulated state can't be trusted anymore so they're propagated all the way up
/// to the driving loop instead of being silently ignored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    #[error("unknown DMA sync mode {0}")]
    DmaSyncMode(u32),
    #[error("unhandled DMA block transfer on port {port} ({direction})")]
    DmaTransfer {
        port: &'static str,
        direction: &'static str,
    },
    #[error("unhandled DMA linked list transfer on port {port} ({direction})")]
    LinkedListTransfer {
        port: &'static str,
        direction: &'static str,
    },
    #[error("DMA linked list starting at 0x{start:06x} never terminates")]
    LinkedListLoop { start: u32 },
    #[error("bad expansion {region} base address 0x{value:08x}")]
    ExpansionBase { region: u8, value: u32 },
    #[error("unhandled GP0 command 0x{0:08x}")]
    Gp0Command(u32),
    #[error("unhandled GP1 command 0x{0:08x}")]
    Gp1Command(u32),
    #[error("unsupported display mode 0x{0:08x}")]
    DisplayMode(u32),
    #[error("unsupported texture depth {0}")]
    TextureDepth(u32),
    #[error("unhandled write to cop0r{reg}: 0x{value:08x}")]
    Cop0Write { reg: u32, value: u32 },
    #[error("unhandled read from cop0r{0}")]
    Cop0Read(u32),
    #[error("GPU command buffer index {index} out of range (len {len})")]
    CommandBufferIndex { index: usize, len: usize },
    #[error("unaligned {width}-byte access at 0x{addr:08x}")]
    UnalignedAccess { addr: u32, width: u32 },
}
