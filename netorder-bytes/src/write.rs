//! Primitive to bytes.
//!
//! Every writer emits exactly `WIDTH` bytes, most significant first, whatever
//! the host byte order. A failing sink stops the write at that byte; bytes
//! already handed over stay with the sink.

use std::convert::Infallible;

use paste::paste;

use crate::endian::Endian;
use crate::io::{infallible, ByteSink, ContextSink, FnSink};
use crate::traits::{Primitive, MAX_WIDTH};
use crate::NE;

pub fn write<T, S>(value: T, sink: &mut S) -> Result<(), S::Error>
where
    T: Primitive,
    S: ByteSink + ?Sized,
{
    #[cfg(feature = "extra-logging")]
    log::trace!("write {} ({} bytes)", std::any::type_name::<T>(), T::WIDTH);

    let mut buf = [0u8; MAX_WIDTH];
    let native = &mut buf[..T::WIDTH];

    value.into_bytes::<NE>(native);
    emit(native, Endian::host(), sink)
}

// `native` holds the value as laid out in memory on a `host` machine
fn emit<S>(native: &[u8], host: Endian, sink: &mut S) -> Result<(), S::Error>
where
    S: ByteSink + ?Sized,
{
    if host.is_big() {
        for byte in native {
            sink.put(*byte)?;
        }
    } else {
        for byte in native.iter().rev() {
            sink.put(*byte)?;
        }
    }
    Ok(())
}

macro_rules! writers_for {
    [$($t:ident),*] => {
        $(
            paste! {
                pub fn [<write_ $t>]<F>(value: $t, mut out: F)
                where
                    F: FnMut(u8),
                {
                    let sink = &mut FnSink::new(|b| {
                        out(b);
                        Ok::<_, Infallible>(())
                    });
                    infallible(write(value, sink))
                }

                pub fn [<write_ $t _with>]<C, F>(value: $t, mut out: F, context: &mut C)
                where
                    C: ?Sized,
                    F: FnMut(u8, &mut C),
                {
                    let sink = &mut ContextSink::new(
                        |b, context: &mut C| {
                            out(b, context);
                            Ok::<_, Infallible>(())
                        },
                        context,
                    );
                    infallible(write(value, sink))
                }

                pub fn [<try_write_ $t>]<F, E>(value: $t, out: F) -> Result<(), E>
                where
                    F: FnMut(u8) -> Result<(), E>,
                {
                    write(value, &mut FnSink::new(out))
                }

                pub fn [<try_write_ $t _with>]<C, F, E>(
                    value: $t,
                    out: F,
                    context: &mut C,
                ) -> Result<(), E>
                where
                    C: ?Sized,
                    F: FnMut(u8, &mut C) -> Result<(), E>,
                {
                    write(value, &mut ContextSink::new(out, context))
                }
            }
        )*
    };
}

writers_for![bool, u8, i8, i32, i64, f32, f64];
