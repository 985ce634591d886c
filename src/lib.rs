//! A `no_std`, no-alloc access layer for memory-mapped peripheral register windows.
//!
//! This crate implements the register-access protocol shared by a family of
//! small peripherals (a buzzer, an RGB LED controller, a PWM color
//! controller): a window of 32-bit registers exposed both as an
//! offset-addressed byte stream and as named text attributes.
//!
//! # Features
//!
//! - **Zero heap allocation** - schemas are plain `const` data
//! - **One generic implementation** - peripheral variants differ only in their
//!   register schema, not in code
//! - **Strict access validation** - negative, past-the-end and unaligned
//!   offsets are handled exactly once, in one place
//! - **Serialized writes** - every mutation runs inside a critical section;
//!   reads are lock-free single-word loads
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐      ┌──────────────────────┐
//! │ ByteStream / Cursor │      │ NamedRegister        │
//! │  read_at/write_at   │      │  show/store          │
//! └──────────┬──────────┘      └──────────┬───────────┘
//!            │        RegisterWindow      │
//!            └─────────────┬──────────────┘
//!                ┌─────────┴──────────┐
//!                │ MappedRegion       │  atomic u32 loads/stores
//!                │ RegisterSchema     │  span + named register table
//!                └────────────────────┘
//! ```
//!
//! A [`RegisterWindow`] binds one device instance's mapped memory to a
//! [`RegisterSchema`] and writes the schema defaults once at attach time.
//! The host framework then routes stream and attribute calls into the two
//! accessor types; any number of sessions may do so concurrently.
//!
//! # Example
//!
//! ```rust
//! use core::sync::atomic::AtomicU32;
//! use regwin::prelude::*;
//!
//! // Back the window with plain RAM; on hardware this would wrap the
//! // mapped register block instead (see `MappedRegion::from_raw`).
//! let words = [const { AtomicU32::new(0) }; 4];
//! let window = RegisterWindow::attach(
//!     MappedRegion::new(&words),
//!     regwin::catalog::RGB_CONTROLLER,
//! )
//! .unwrap();
//!
//! // Sequential register reads through a byte-stream cursor.
//! let mut cursor = window.stream().cursor();
//! let mut buf = [0u8; 4];
//! assert_eq!(cursor.read(&mut buf).unwrap(), 4);
//! assert_eq!(u32::from_ne_bytes(buf), 0x80);
//!
//! // Named access to the same registers.
//! let red = window.attr("red").unwrap();
//! red.store("0x1A").unwrap();
//! assert_eq!(red.show().as_str(), "26\n");
//! ```

#![deny(unsafe_code)]
#![no_std]

#[cfg(test)]
extern crate std;

pub mod attr;
pub mod catalog;
pub mod error;
pub mod parse;
pub mod region;
pub mod schema;
pub mod stream;
pub mod window;

#[cfg(test)]
mod test_support;

pub use attr::{AttrText, NamedRegister};
pub use error::{AccessError, SchemaError};
pub use region::MappedRegion;
pub use schema::{Access, REGISTER_SIZE, RegisterDesc, RegisterSchema, SchemaBuilder};
pub use stream::{ByteStream, StreamCursor, Transfer};
pub use window::RegisterWindow;

pub mod prelude {
    pub use super::{
        Access, AccessError, AttrText, ByteStream, MappedRegion, NamedRegister, REGISTER_SIZE,
        RegisterDesc, RegisterSchema, RegisterWindow, SchemaBuilder, SchemaError, StreamCursor,
        Transfer,
    };
}
