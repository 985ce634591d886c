use crate::{error::AccessError, schema::REGISTER_SIZE, window::RegisterWindow};

/// Outcome of a successful byte-stream transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Bytes moved: [`REGISTER_SIZE`] for a register transfer, 0 at end of
    /// window.
    pub bytes: usize,
    /// Offset to resume from. Advanced past the register on a transfer,
    /// unchanged otherwise.
    pub offset: i64,
}

/// Offset-addressed, whole-register accessor over a window.
///
/// Each call moves exactly one 32-bit register between a caller buffer and
/// the region, at a caller-chosen offset. Callers asking for any other
/// length still get a single whole-register transfer; only full-word
/// granularity exists on this surface.
#[derive(Debug, Clone, Copy)]
pub struct ByteStream<'w, 'm, 'r> {
    window: &'w RegisterWindow<'m, 'r>,
}

impl<'w, 'm, 'r> ByteStream<'w, 'm, 'r> {
    pub(crate) const fn new(window: &'w RegisterWindow<'m, 'r>) -> Self {
        Self { window }
    }

    /// Opens a session cursor positioned at offset 0.
    pub const fn cursor(self) -> StreamCursor<'w, 'm, 'r> {
        StreamCursor {
            stream: self,
            pos: 0,
        }
    }

    /// Reads the register at `offset` into `dest`.
    ///
    /// Offsets at or past the span yield a zero-byte transfer rather than an
    /// error, so a sequential caller detects end of window by the short
    /// result. No lock is taken: the load is a single aligned word, so a
    /// concurrent write can never be observed half-applied.
    ///
    /// # Errors
    /// - [`AccessError::InvalidOffset`] for negative offsets
    /// - [`AccessError::UnalignedAccess`] if `offset` is not a multiple of 4
    /// - [`AccessError::TransferFault`] if `dest` cannot hold a register; the
    ///   offset is not advanced
    pub fn read_at(&self, offset: i64, dest: &mut [u8]) -> Result<Transfer, AccessError> {
        let Some(off) = self.validate(offset)? else {
            return Ok(Transfer { bytes: 0, offset });
        };

        let value = self.window.region().load(off);

        let Some(chunk) = dest.first_chunk_mut::<REGISTER_SIZE>() else {
            return Err(AccessError::TransferFault);
        };
        *chunk = value.to_ne_bytes();

        Ok(Transfer {
            bytes: REGISTER_SIZE,
            offset: offset + REGISTER_SIZE as i64,
        })
    }

    /// Writes the first register's worth of `src` to the register at
    /// `offset`. The value is stored verbatim; any 32-bit pattern is
    /// accepted.
    ///
    /// Copy-in and store run inside one critical section, serializing this
    /// write against every other mutation of the window. A failed copy-in
    /// leaves the section without touching the region.
    ///
    /// # Errors
    /// Same as [`ByteStream::read_at`], with [`AccessError::TransferFault`]
    /// meaning `src` held fewer than 4 bytes.
    pub fn write_at(&self, offset: i64, src: &[u8]) -> Result<Transfer, AccessError> {
        let Some(off) = self.validate(offset)? else {
            return Ok(Transfer { bytes: 0, offset });
        };

        critical_section::with(|_| {
            let Some(chunk) = src.first_chunk::<REGISTER_SIZE>() else {
                return Err(AccessError::TransferFault);
            };
            self.window.region().store(off, u32::from_ne_bytes(*chunk));

            Ok(Transfer {
                bytes: REGISTER_SIZE,
                offset: offset + REGISTER_SIZE as i64,
            })
        })
    }

    /// Shared validation, in protocol order: negative, then end-of-window,
    /// then alignment. `Ok(None)` is the end-of-window case.
    fn validate(&self, offset: i64) -> Result<Option<usize>, AccessError> {
        if offset < 0 {
            return Err(AccessError::InvalidOffset);
        }
        let off = offset as usize;
        if off >= self.window.schema().span() {
            return Ok(None);
        }
        if off % REGISTER_SIZE != 0 {
            return Err(AccessError::UnalignedAccess);
        }
        Ok(Some(off))
    }
}

/// Per-session cursor over a window's byte stream.
///
/// Every open session owns its own cursor; concurrent sessions on the same
/// window never affect each other's position.
#[derive(Debug, Clone, Copy)]
pub struct StreamCursor<'w, 'm, 'r> {
    stream: ByteStream<'w, 'm, 'r>,
    pos: i64,
}

impl StreamCursor<'_, '_, '_> {
    /// Current byte offset.
    pub const fn position(&self) -> i64 {
        self.pos
    }

    /// Repositions the cursor. Any non-negative offset is accepted,
    /// including past the end of the window, where reads simply return 0
    /// bytes.
    ///
    /// # Errors
    /// [`AccessError::InvalidOffset`] for negative offsets.
    pub fn seek(&mut self, offset: i64) -> Result<i64, AccessError> {
        if offset < 0 {
            return Err(AccessError::InvalidOffset);
        }
        self.pos = offset;
        Ok(offset)
    }

    /// Reads the register at the cursor, advancing on success. Returns the
    /// number of bytes moved; 0 signals end of window.
    pub fn read(&mut self, dest: &mut [u8]) -> Result<usize, AccessError> {
        let transfer = self.stream.read_at(self.pos, dest)?;
        self.pos = transfer.offset;
        Ok(transfer.bytes)
    }

    /// Writes the register at the cursor, advancing on success.
    pub fn write(&mut self, src: &[u8]) -> Result<usize, AccessError> {
        let transfer = self.stream.write_at(self.pos, src)?;
        self.pos = transfer.offset;
        Ok(transfer.bytes)
    }
}
