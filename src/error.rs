/// Errors surfaced by the register window accessors.
///
/// Every error is returned synchronously to the immediate caller; nothing is
/// retried inside the crate. Retry policy, if any, belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// Negative byte offset.
    InvalidOffset,
    /// Offset is not aligned to the 4-byte register size.
    UnalignedAccess,
    /// Caller buffer could not supply or receive a whole register.
    TransferFault,
    /// Text could not be parsed as an unsigned 32-bit integer.
    InvalidFormat,
    /// Mapped region is smaller than the schema span.
    ResourceUnavailable,
}

impl core::fmt::Display for AccessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AccessError::InvalidOffset => write!(f, "negative byte offset"),
            AccessError::UnalignedAccess => write!(f, "offset not aligned to register size"),
            AccessError::TransferFault => write!(f, "caller buffer too short for a register"),
            AccessError::InvalidFormat => write!(f, "text is not an unsigned 32-bit integer"),
            AccessError::ResourceUnavailable => write!(f, "mapped region smaller than schema span"),
        }
    }
}

/// Errors reported while validating a register schema layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaError {
    /// Span is zero or not a multiple of the register size.
    BadSpan,
    /// Register offset is not 4-byte aligned.
    UnalignedRegister,
    /// Register does not fit inside the span.
    OutOfBounds,
    /// Two registers share the same offset.
    DuplicateOffset,
    /// Builder capacity exhausted.
    TableFull,
}

impl core::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SchemaError::BadSpan => write!(f, "span is zero or not a multiple of 4"),
            SchemaError::UnalignedRegister => write!(f, "register offset not 4-byte aligned"),
            SchemaError::OutOfBounds => write!(f, "register does not fit inside the span"),
            SchemaError::DuplicateOffset => write!(f, "two registers share the same offset"),
            SchemaError::TableFull => write!(f, "schema builder capacity exhausted"),
        }
    }
}
