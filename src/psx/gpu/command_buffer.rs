use crate::error::Unsupported;
use arrayvec::ArrayVec;

/// Buffer holding multi-word fixed-length GP0 command parameters. The longest command is 12
/// words long.
pub struct CommandBuffer {
    words: ArrayVec<u32, 12>,
}

impl CommandBuffer {
    pub fn new() -> CommandBuffer {
        CommandBuffer {
            words: ArrayVec::new(),
        }
    }

    /// Clear the command buffer
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Append a parameter word. Pushing past the capacity means a command length table entry is
    /// longer than the buffer.
    pub fn push_word(&mut self, word: u32) -> Result<(), Unsupported> {
        let len = self.words.len();

        self.words
            .try_push(word)
            .map_err(|_| Unsupported::CommandBufferIndex { index: len, len })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`. Reading past the last word pushed means a command handler expects more
    /// parameters than it was given.
    pub fn get(&self, index: usize) -> Result<u32, Unsupported> {
        self.words
            .get(index)
            .copied()
            .ok_or(Unsupported::CommandBufferIndex {
                index,
                len: self.words.len(),
            })
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        CommandBuffer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_past_length() {
        let mut buf = CommandBuffer::new();

        buf.push_word(0xe100_0000).unwrap();
        buf.push_word(0x1234).unwrap();

        assert_eq!(buf.get(1), Ok(0x1234));
        assert_eq!(
            buf.get(2),
            Err(Unsupported::CommandBufferIndex { index: 2, len: 2 })
        );

        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.get(0).is_err());
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut buf = CommandBuffer::new();

        for i in 0..12 {
            buf.push_word(i).unwrap();
        }

        assert_eq!(
            buf.push_word(12),
            Err(Unsupported::CommandBufferIndex { index: 12, len: 12 })
        );

        // The buffer is left untouched
        assert_eq!(buf.len(), 12);
        assert_eq!(buf.get(11), Ok(11));
    }
}
