use super::memory_map::RAM_SIZE;
use super::Addressable;

/// Main RAM
pub struct Ram {
    data: Box<[u8]>,
}

impl Ram {
    /// Instantiate main RAM with every byte set to `fill`
    pub fn new(fill: u8) -> Ram {
        Ram {
            data: vec![fill; RAM_SIZE].into_boxed_slice(),
        }
    }

    /// Fetch the little endian value at `offset`
    pub fn load<T: Addressable>(&self, offset: u32) -> T {
        let offset = offset as usize;

        let mut v = 0;

        for i in 0..T::width() as usize {
            v |= (self.data[offset + i] as u32) << (i * 8);
        }

        T::from_u32(v)
    }

    /// Store the value `val` into `offset`
    pub fn store<T: Addressable>(&mut self, offset: u32, val: T) {
        let offset = offset as usize;
        let val = val.as_u32();

        for i in 0..T::width() as usize {
            self.data[offset + i] = (val >> (i * 8)) as u8;
        }
    }
}
