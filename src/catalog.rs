//! Fixed schemas for the supported peripheral variants.
//!
//! The three variants share one access protocol and differ only in their
//! register tables and power-on defaults, so each is just a `const`
//! [`RegisterSchema`] value. Schemas validate at compile time; an invalid
//! catalog entry fails the build.

use crate::schema::{RegisterDesc, RegisterSchema};

/// Defines a peripheral variant: its register table and its validated schema.
macro_rules! peripheral_schema {
    (
        $(#[$meta:meta])*
        $name:ident, span = $span:expr, {
            $( $reg:ident @ $offset:expr => $default:expr ),+ $(,)?
        }
    ) => {
        paste::paste! {
            #[doc = "Register table of the `" $name "` variant."]
            pub const [<$name:upper _REGISTERS>]: &[RegisterDesc] = &[
                $( RegisterDesc::new(stringify!($reg), $offset, $default), )+
            ];

            $(#[$meta])*
            pub const [<$name:upper>]: RegisterSchema<'static> =
                match RegisterSchema::new($span, [<$name:upper _REGISTERS>]) {
                    Ok(schema) => schema,
                    Err(_) => panic!(concat!("invalid ", stringify!($name), " schema")),
                };
        }
    };
}

peripheral_schema!(
    /// Buzzer: a single PWM period register.
    buzzer, span = 4, {
        period @ 0 => 0x80,
    }
);

peripheral_schema!(
    /// RGB LED controller: a shared period register plus one duty-cycle
    /// register per channel.
    rgb_controller, span = 16, {
        period @ 0 => 0x80,
        red @ 4 => 0x10_0000,
        green @ 8 => 0x08_0000,
        blue @ 12 => 0x04_0000,
    }
);

peripheral_schema!(
    /// PWM color controller: one output register per channel. The window
    /// spans 16 bytes but only the first 12 carry registers; the trailing
    /// word is still stream-addressable.
    pwm_controller, span = 16, {
        red @ 0 => 1,
        green @ 4 => 0,
        blue @ 8 => 0xff,
    }
);
