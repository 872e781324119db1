/// A caller-owned, growable byte buffer that encoders append into.
///
/// Encoders never keep a reference to the buffer after returning; each call
/// reserves exactly the bytes it writes and fills them in place.
pub trait AppendBuffer {
    /// Extends the buffer by `n` zeroed bytes and returns the writable view
    /// over exactly those bytes.
    ///
    /// Spare capacity is reused when it covers `n`, so no reallocation or copy
    /// happens in that case. Otherwise the buffer grows and every prior byte
    /// is preserved.
    ///
    /// # Example
    ///
    /// ```
    /// use crockford::AppendBuffer;
    ///
    /// let mut buf = Vec::with_capacity(16);
    /// buf.extend_from_slice(b"id-");
    /// buf.append_zeroed(4).copy_from_slice(b"0123");
    /// assert_eq!(buf, b"id-0123");
    /// ```
    fn append_zeroed(&mut self, n: usize) -> &mut [u8];
}

impl AppendBuffer for Vec<u8> {
    fn append_zeroed(&mut self, n: usize) -> &mut [u8] {
        let start = self.len();
        self.resize(start + n, 0);
        &mut self[start..]
    }
}

#[cfg(feature = "bytes")]
impl AppendBuffer for bytes::BytesMut {
    fn append_zeroed(&mut self, n: usize) -> &mut [u8] {
        let start = self.len();
        self.resize(start + n, 0);
        &mut self[start..]
    }
}
