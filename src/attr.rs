use core::fmt::Write as _;

use crate::{error::AccessError, parse, schema::RegisterDesc, window::RegisterWindow};

/// Rendered attribute value: at most ten decimal digits plus a newline.
pub type AttrText = heapless::String<12>;

/// Text accessor for one named schema register, independent of any stream
/// cursor.
///
/// Bound once at endpoint setup through [`RegisterWindow::attr`] or
/// [`RegisterWindow::attrs`]; name lookup is a configuration-time concern,
/// not a per-call error path.
#[derive(Debug, Clone, Copy)]
pub struct NamedRegister<'w, 'm, 'r> {
    window: &'w RegisterWindow<'m, 'r>,
    desc: &'r RegisterDesc,
}

impl<'w, 'm, 'r> NamedRegister<'w, 'm, 'r> {
    pub(crate) const fn new(window: &'w RegisterWindow<'m, 'r>, desc: &'r RegisterDesc) -> Self {
        Self { window, desc }
    }

    /// The register's name.
    pub const fn name(&self) -> &'r str {
        self.desc.name()
    }

    /// The full register description, for endpoint wiring.
    pub const fn desc(&self) -> &'r RegisterDesc {
        self.desc
    }

    /// Reads the register and renders it as unsigned decimal followed by a
    /// newline. That is the whole contract: no unit conversion, no scaling.
    /// Lock-free, like stream reads.
    pub fn show(&self) -> AttrText {
        let value = self.window.region().load(self.desc.offset());
        let mut text = AttrText::new();
        // u32 is at most ten digits, so the buffer always fits.
        let _ = write!(text, "{}\n", value);
        text
    }

    /// Parses `text` with auto-detected base (`0x` hex, leading `0` octal,
    /// decimal otherwise) and stores the value. The store runs under the
    /// same write serialization as the byte-stream accessor, so it cannot
    /// interleave with a concurrent stream write.
    ///
    /// Returns the number of input bytes consumed, which is always the full
    /// input length, trailing newline included.
    ///
    /// # Errors
    /// [`AccessError::InvalidFormat`] if `text` does not parse; the register
    /// keeps its prior value.
    pub fn store(&self, text: &str) -> Result<usize, AccessError> {
        let value = parse::parse_u32(text)?;
        critical_section::with(|_| {
            self.window.region().store(self.desc.offset(), value);
        });
        Ok(text.len())
    }
}
