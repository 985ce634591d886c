use crate::{
    attr::NamedRegister, error::AccessError, region::MappedRegion, schema::RegisterSchema,
    stream::ByteStream,
};

/// Runtime binding between a [`RegisterSchema`] and one device instance's
/// mapped memory.
///
/// The host framework creates a window at discovery time via
/// [`RegisterWindow::attach`] and tears it down with
/// [`RegisterWindow::detach`]. In between, any number of concurrent sessions
/// reach the region through the two accessor surfaces: the offset-addressed
/// [`ByteStream`] and the per-register [`NamedRegister`] attributes. Register
/// state is volatile hardware state; nothing is preserved across detach.
pub struct RegisterWindow<'m, 'r> {
    region: MappedRegion<'m>,
    schema: RegisterSchema<'r>,
}

impl core::fmt::Debug for RegisterWindow<'_, '_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegisterWindow")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl<'m, 'r> RegisterWindow<'m, 'r> {
    /// Binds `region` to `schema` and writes every schema default value into
    /// the region, exactly once.
    ///
    /// # Errors
    /// [`AccessError::ResourceUnavailable`] if the region does not cover the
    /// schema span. No window is created and no default is written.
    pub fn attach(
        region: MappedRegion<'m>,
        schema: RegisterSchema<'r>,
    ) -> Result<Self, AccessError> {
        if region.span() < schema.span() {
            return Err(AccessError::ResourceUnavailable);
        }

        for reg in schema.registers() {
            region.store(reg.offset(), reg.default_value());
        }

        Ok(Self { region, schema })
    }

    /// Releases the window, handing the region capability back to the host
    /// framework. Register values are left as-is in device memory.
    pub fn detach(self) -> MappedRegion<'m> {
        self.region
    }

    /// The schema this window was attached with.
    pub const fn schema(&self) -> RegisterSchema<'r> {
        self.schema
    }

    /// Offset-addressed accessor over this window.
    pub const fn stream(&self) -> ByteStream<'_, 'm, 'r> {
        ByteStream::new(self)
    }

    /// Binds the named register `name`, if the schema defines it.
    ///
    /// Endpoint wiring is a configuration-time concern; a `None` here means
    /// the host asked for a register the variant does not have.
    pub fn attr(&self, name: &str) -> Option<NamedRegister<'_, 'm, 'r>> {
        self.schema
            .lookup(name)
            .map(|desc| NamedRegister::new(self, desc))
    }

    /// Named accessors for every schema register, in schema order. Used by
    /// the host framework when it registers the attribute endpoints.
    pub fn attrs(&self) -> impl Iterator<Item = NamedRegister<'_, 'm, 'r>> {
        self.schema
            .registers()
            .iter()
            .map(move |desc| NamedRegister::new(self, desc))
    }

    pub(crate) fn region(&self) -> &MappedRegion<'m> {
        &self.region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, test_support::words};

    #[test]
    fn attach_writes_schema_defaults_once() {
        let storage = words::<1>();
        let window =
            RegisterWindow::attach(MappedRegion::new(&storage), catalog::BUZZER).unwrap();

        let mut buf = [0u8; 4];
        window.stream().read_at(0, &mut buf).unwrap();
        assert_eq!(u32::from_ne_bytes(buf), 0x80);
    }

    #[test]
    fn attach_rejects_undersized_region() {
        let storage = words::<2>();
        let err = RegisterWindow::attach(MappedRegion::new(&storage), catalog::RGB_CONTROLLER)
            .unwrap_err();
        assert_eq!(err, AccessError::ResourceUnavailable);
    }

    #[test]
    fn attach_accepts_oversized_region() {
        let storage = words::<8>();
        assert!(RegisterWindow::attach(MappedRegion::new(&storage), catalog::RGB_CONTROLLER).is_ok());
    }

    #[test]
    fn detach_returns_region_without_flushing() {
        let storage = words::<1>();
        let window =
            RegisterWindow::attach(MappedRegion::new(&storage), catalog::BUZZER).unwrap();
        window
            .stream()
            .write_at(0, &0x55u32.to_ne_bytes())
            .unwrap();

        let region = window.detach();
        assert_eq!(region.load(0), 0x55);
    }

    #[test]
    fn attr_binds_known_registers_only() {
        let storage = words::<4>();
        let window =
            RegisterWindow::attach(MappedRegion::new(&storage), catalog::RGB_CONTROLLER).unwrap();

        assert!(window.attr("green").is_some());
        assert!(window.attr("brightness").is_none());
    }

    #[test]
    fn attrs_iterates_in_schema_order() {
        let storage = words::<4>();
        let window =
            RegisterWindow::attach(MappedRegion::new(&storage), catalog::RGB_CONTROLLER).unwrap();

        let names: std::vec::Vec<_> = window.attrs().map(|attr| attr.name()).collect();
        assert_eq!(names, ["period", "red", "green", "blue"]);
    }

    #[test]
    fn concurrent_same_offset_writes_leave_one_written_value() {
        let storage = words::<1>();
        let window =
            RegisterWindow::attach(MappedRegion::new(&storage), catalog::BUZZER).unwrap();

        let written: [u32; 8] = core::array::from_fn(|i| 0x1111_1111 * (i as u32 + 1));

        std::thread::scope(|scope| {
            for &value in &written {
                let window = &window;
                scope.spawn(move || {
                    for _ in 0..100 {
                        let transfer = window
                            .stream()
                            .write_at(0, &value.to_ne_bytes())
                            .unwrap();
                        assert_eq!(transfer.bytes, 4);
                    }
                });
            }
        });

        let mut buf = [0u8; 4];
        window.stream().read_at(0, &mut buf).unwrap();
        let last = u32::from_ne_bytes(buf);
        assert!(written.contains(&last), "register holds a mixed word: {last:#x}");
    }
}
