use heapless::Vec;

use crate::error::SchemaError;

/// Width in bytes of every register. The whole protocol moves data in units
/// of this size.
pub const REGISTER_SIZE: usize = 4;

/// Access mode of a register as seen through the named attribute surface.
///
/// The core protocol stores any 32-bit pattern verbatim either way; the host
/// framework consults this when deciding which endpoints get a setter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Value can be read back and overwritten.
    ReadWrite,
    /// Writes take effect but the readback value is unspecified.
    WriteOnly,
}

/// Description of a single 32-bit register within a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterDesc {
    name: &'static str,
    offset: usize,
    default: u32,
    access: Access,
}

impl RegisterDesc {
    /// Creates a read-write register description.
    pub const fn new(name: &'static str, offset: usize, default: u32) -> Self {
        Self {
            name,
            offset,
            default,
            access: Access::ReadWrite,
        }
    }

    /// Overrides the access mode.
    pub const fn with_access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    /// Register name, as exposed on the attribute surface.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Byte offset within the window.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Power-on value written at attach time.
    pub const fn default_value(&self) -> u32 {
        self.default
    }

    /// Access mode.
    pub const fn access(&self) -> Access {
        self.access
    }
}

/// Immutable layout of one peripheral variant's register window.
///
/// Schemas are plain values, cheap to copy and freely shared read-only across
/// every window of the same variant. See [`crate::catalog`] for the fixed
/// variants this crate ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSchema<'r> {
    span: usize,
    registers: &'r [RegisterDesc],
}

impl<'r> RegisterSchema<'r> {
    /// Validates the layout and builds a schema.
    ///
    /// # Errors
    /// - [`SchemaError::BadSpan`] if `span` is zero or not a multiple of 4
    /// - [`SchemaError::UnalignedRegister`] if any offset is not 4-byte aligned
    /// - [`SchemaError::OutOfBounds`] if any register ends past `span`
    /// - [`SchemaError::DuplicateOffset`] if two registers share an offset
    pub const fn new(span: usize, registers: &'r [RegisterDesc]) -> Result<Self, SchemaError> {
        if span == 0 || span % REGISTER_SIZE != 0 {
            return Err(SchemaError::BadSpan);
        }

        let mut i = 0;
        while i < registers.len() {
            let offset = registers[i].offset;
            if offset % REGISTER_SIZE != 0 {
                return Err(SchemaError::UnalignedRegister);
            }
            if offset + REGISTER_SIZE > span {
                return Err(SchemaError::OutOfBounds);
            }
            let mut j = i + 1;
            while j < registers.len() {
                if registers[j].offset == offset {
                    return Err(SchemaError::DuplicateOffset);
                }
                j += 1;
            }
            i += 1;
        }

        Ok(Self { span, registers })
    }

    /// Total addressable byte length of the register window.
    pub const fn span(&self) -> usize {
        self.span
    }

    /// The register table, in schema order.
    pub const fn registers(&self) -> &'r [RegisterDesc] {
        self.registers
    }

    /// Finds a register by name.
    pub fn lookup(&self, name: &str) -> Option<&'r RegisterDesc> {
        self.registers.iter().find(|reg| reg.name == name)
    }

    /// Finds a register by byte offset.
    pub fn at_offset(&self, offset: usize) -> Option<&'r RegisterDesc> {
        self.registers.iter().find(|reg| reg.offset == offset)
    }
}

/// Incremental schema construction for layouts not known as `const` data,
/// such as windows described by a device tree.
///
/// Fixed capacity `N`; the finished schema borrows the builder's table, so
/// the builder must outlive any window using it.
#[derive(Debug)]
pub struct SchemaBuilder<const N: usize> {
    span: usize,
    registers: Vec<RegisterDesc, N>,
}

impl<const N: usize> SchemaBuilder<N> {
    /// Starts a builder for a window of `span` bytes.
    pub const fn new(span: usize) -> Self {
        Self {
            span,
            registers: Vec::new(),
        }
    }

    /// Appends a read-write register, validating it against the layout so far.
    ///
    /// # Errors
    /// The per-register errors of [`RegisterSchema::new`], plus
    /// [`SchemaError::TableFull`] when `N` registers are already present.
    pub fn register(
        mut self,
        name: &'static str,
        offset: usize,
        default: u32,
    ) -> Result<Self, SchemaError> {
        if offset % REGISTER_SIZE != 0 {
            return Err(SchemaError::UnalignedRegister);
        }
        if offset + REGISTER_SIZE > self.span {
            return Err(SchemaError::OutOfBounds);
        }
        if self.registers.iter().any(|reg| reg.offset == offset) {
            return Err(SchemaError::DuplicateOffset);
        }
        self.registers
            .push(RegisterDesc::new(name, offset, default))
            .map_err(|_| SchemaError::TableFull)?;
        Ok(self)
    }

    /// Finishes the builder into a validated schema borrowing its table.
    pub fn schema(&self) -> Result<RegisterSchema<'_>, SchemaError> {
        RegisterSchema::new(self.span, &self.registers)
    }
}
