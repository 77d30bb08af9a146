/// `setblock` command rendering.
///
/// Renders `setblock <x> <y> <z> <block> <data> <method>`, either unbounded
/// via `Display` or into a [`CommandBuffer`] with silent truncation. Values
/// are passed through as decimal text without range checks.
use std::fmt;

use super::buffer::CommandBuffer;

/// Block coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A block name with its data value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRef<'a> {
    pub name: &'a str,
    pub data: u16,
}

impl<'a> BlockRef<'a> {
    #[must_use]
    pub const fn new(name: &'a str, data: u16) -> Self {
        Self { name, data }
    }
}

/// A single `setblock` instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBlock<'a> {
    pub point: Point,
    pub block: BlockRef<'a>,
    /// Placement method, e.g. `replace`, `keep` or `destroy`.
    pub method: &'a str,
}

impl<'a> SetBlock<'a> {
    #[must_use]
    pub const fn new(point: Point, block: BlockRef<'a>, method: &'a str) -> Self {
        Self {
            point,
            block,
            method,
        }
    }

    /// Build a request for a build module that may not carry its own block,
    /// falling back to the configured default block.
    #[must_use]
    pub fn with_fallback(
        point: Point,
        block: Option<BlockRef<'a>>,
        default_block: BlockRef<'a>,
        method: &'a str,
    ) -> Self {
        Self::new(point, block.unwrap_or(default_block), method)
    }

    /// Render into `buf`, replacing its contents. Returns the text length,
    /// which is at most `N - 1`.
    pub fn write_into<const N: usize>(&self, buf: &mut CommandBuffer<N>) -> usize {
        buf.fill(format_args!("{self}"))
    }
}

impl fmt::Display for SetBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Point { x, y, z } = self.point;
        write!(
            f,
            "setblock {x} {y} {z} {} {} {}",
            self.block.name, self.block.data, self.method
        )
    }
}

/// Render a `setblock` command into `buf` and return the written length.
///
/// Output longer than the buffer's limit (1023 bytes for the default
/// capacity) is truncated without notice.
pub fn format_setblock<const N: usize>(
    buf: &mut CommandBuffer<N>,
    x: i32,
    y: i32,
    z: i32,
    block_name: &str,
    data: u16,
    method: &str,
) -> usize {
    SetBlock::new(Point::new(x, y, z), BlockRef::new(block_name, data), method).write_into(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_basic() {
        let mut buf = CommandBuffer::<1024>::new();
        let len = format_setblock(&mut buf, 10, 64, -3, "stone", 0, "replace");
        assert_eq!(buf.as_str(), "setblock 10 64 -3 stone 0 replace");
        assert_eq!(len, 33);
        assert_eq!(buf.len(), 33);
    }

    #[test]
    fn test_format_extremes_pass_through() {
        let mut buf: CommandBuffer = CommandBuffer::new();
        format_setblock(&mut buf, i32::MIN, i32::MAX, 0, "air", u16::MAX, "keep");
        assert_eq!(
            buf.as_str(),
            "setblock -2147483648 2147483647 0 air 65535 keep"
        );
    }

    #[test]
    fn test_format_truncates_long_block_name() {
        let mut buf: CommandBuffer = CommandBuffer::new();
        let name = "x".repeat(2000);
        let len = format_setblock(&mut buf, 1, 2, 3, &name, 0, "replace");
        assert_eq!(len, 1023);
        assert_eq!(buf.as_bytes().len(), 1023);
        assert!(buf.as_str().starts_with("setblock 1 2 3 xxx"));
        assert_eq!(buf.as_bytes_with_nul()[1023], 0);
    }

    #[test]
    fn test_format_exactly_at_limit_is_not_truncated() {
        let mut buf: CommandBuffer = CommandBuffer::new();
        // "setblock 0 0 0 " + name + " 0 r" == 1023 bytes
        let name = "b".repeat(1023 - "setblock 0 0 0 ".len() - " 0 r".len());
        let len = format_setblock(&mut buf, 0, 0, 0, &name, 0, "r");
        assert_eq!(len, 1023);
        assert!(buf.as_str().ends_with(" 0 r"));
    }

    #[test]
    fn test_small_buffer() {
        let mut buf = CommandBuffer::<16>::new();
        let len = format_setblock(&mut buf, 10, 64, -3, "stone", 0, "replace");
        assert_eq!(len, 15);
        assert_eq!(buf.as_str(), "setblock 10 64 ");
    }

    #[test]
    fn test_display_matches_buffer() {
        let request = SetBlock::new(Point::new(5, 70, 5), BlockRef::new("glass", 3), "destroy");
        let mut buf: CommandBuffer = CommandBuffer::new();
        request.write_into(&mut buf);
        assert_eq!(request.to_string(), buf.as_str());
    }

    #[test]
    fn test_fallback_block() {
        let default_block = BlockRef::new("iron_block", 0);
        let point = Point::new(0, 4, 0);

        let own = SetBlock::with_fallback(point, Some(BlockRef::new("wool", 14)), default_block, "replace");
        assert_eq!(own.to_string(), "setblock 0 4 0 wool 14 replace");

        let fallback = SetBlock::with_fallback(point, None, default_block, "replace");
        assert_eq!(fallback.to_string(), "setblock 0 4 0 iron_block 0 replace");
    }
}
