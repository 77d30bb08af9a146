/// Fixed-capacity command buffer with silent, bounded formatting.
use std::fmt;

/// Default buffer capacity in bytes, terminator included.
pub const DEFAULT_CAPACITY: usize = 1024;

/// A caller-owned command buffer holding at most `N - 1` bytes of text.
///
/// The last byte is reserved for a NUL terminator so the contents can be
/// handed to C consumers via [`CommandBuffer::as_bytes_with_nul`]. Filling the
/// buffer never allocates and never writes past `N`.
#[derive(Clone)]
pub struct CommandBuffer<const N: usize = DEFAULT_CAPACITY> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> CommandBuffer<N> {
    const HAS_TERMINATOR_ROOM: () = assert!(N >= 1, "CommandBuffer needs room for a terminator");

    #[must_use]
    pub const fn new() -> Self {
        let () = Self::HAS_TERMINATOR_ROOM;
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Total capacity in bytes, terminator included.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Maximum text length in bytes.
    #[must_use]
    pub const fn limit(&self) -> usize {
        N - 1
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The written text, without terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The written text followed by its NUL terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Truncation only ever cuts on a char boundary.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes[0] = 0;
    }

    /// Replace the contents with `args`, truncated to [`Self::limit`] bytes.
    ///
    /// Returns the resulting text length. Truncation is not reported; compare
    /// the result against the expected length to detect it.
    pub fn fill(&mut self, args: fmt::Arguments<'_>) -> usize {
        let limit = self.limit();
        let mut writer = BoundedWriter {
            dst: &mut self.bytes[..limit],
            len: 0,
            truncated: false,
        };
        // BoundedWriter never fails, and a Display impl that does simply
        // leaves what was written so far.
        let _ = fmt::Write::write_fmt(&mut writer, args);
        let len = writer.len;
        self.len = len;
        self.bytes[len] = 0;
        len
    }
}

impl<const N: usize> Default for CommandBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for CommandBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandBuffer")
            .field("capacity", &N)
            .field("text", &self.as_str())
            .finish()
    }
}

impl<const N: usize> fmt::Display for CommandBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `fmt::Write` sink over a fixed slice that drops whatever does not fit.
struct BoundedWriter<'a> {
    dst: &'a mut [u8],
    len: usize,
    truncated: bool,
}

impl fmt::Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        let room = self.dst.len() - self.len;
        let take = if s.len() <= room {
            s.len()
        } else {
            self.truncated = true;
            floor_char_boundary(s, room)
        };
        self.dst[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        Ok(())
    }
}

/// Largest index `<= at` that lies on a char boundary of `s`.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    let mut cut = at.min(s.len());
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    cut
}
