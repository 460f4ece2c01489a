use crate::error::{PsxError, Result};
use crate::psx::memory_map::BIOS_SIZE;
use crate::psx::Addressable;
use log::info;
use std::fs;
use std::path::Path;

/// BIOS image
pub struct Bios {
    rom: Box<[u8]>,
}

impl Bios {
    /// Load a BIOS image from the file located at `path`. The file must be exactly `BIOS_SIZE`
    /// bytes long.
    pub fn new(path: &Path) -> Result<Bios> {
        let data = fs::read(path)?;

        let bios = Bios::from_bytes(data).map_err(|e| match e {
            PsxError::BadBios(reason) => PsxError::BadBios(format!("{}: {}", path.display(), reason)),
            e => e,
        })?;

        info!("Loaded BIOS from {}", path.display());

        Ok(bios)
    }

    /// Build a BIOS image from an in-memory blob
    pub fn from_bytes(data: Vec<u8>) -> Result<Bios> {
        if data.len() != BIOS_SIZE {
            return Err(PsxError::BadBios(format!(
                "expected {} bytes, got {}",
                BIOS_SIZE,
                data.len()
            )));
        }

        Ok(Bios {
            rom: data.into_boxed_slice(),
        })
    }

    /// Fetch the little endian value at `offset`
    pub fn load<T: Addressable>(&self, offset: u32) -> T {
        let offset = offset as usize;

        let mut v = 0;

        for i in 0..T::width() as usize {
            v |= (self.rom[offset + i] as u32) << (i * 8);
        }

        T::from_u32(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_exact_size_loads_little_endian() {
        let mut data = vec![0u8; BIOS_SIZE];
        data[0..4].copy_from_slice(&[0x78, 0x56, 0x34, 0x12]);

        let bios = Bios::from_bytes(data).unwrap();

        assert_eq!(bios.load::<u32>(0), 0x12345678);
        assert_eq!(bios.load::<u16>(2), 0x1234);
        assert_eq!(bios.load::<u8>(1), 0x56);
    }

    #[test]
    fn test_wrong_sizes_rejected() {
        for len in [BIOS_SIZE - 1, BIOS_SIZE + 1, 0] {
            match Bios::from_bytes(vec![0; len]) {
                Err(PsxError::BadBios(_)) => (),
                _ => panic!("BIOS of {} bytes should be rejected", len),
            }
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0xab; BIOS_SIZE]).unwrap();

        let bios = Bios::new(file.path()).unwrap();
        assert_eq!(bios.load::<u32>(0x100), 0xabababab);
    }

    #[test]
    fn test_short_file_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![0; BIOS_SIZE - 1]).unwrap();

        assert!(matches!(Bios::new(file.path()), Err(PsxError::BadBios(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            Bios::new(&dir.path().join("missing.bin")),
            Err(PsxError::IoError(_))
        ));
    }
}
