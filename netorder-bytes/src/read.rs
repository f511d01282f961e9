//! Bytes to primitive.
//!
//! Readers consume exactly `WIDTH` bytes, most significant first. A failing
//! source aborts the read at that byte and its error is returned unchanged.

use std::convert::Infallible;

use paste::paste;

use crate::endian::Endian;
use crate::io::{infallible, ByteSource, ContextSource, FnSource};
use crate::traits::{Primitive, MAX_WIDTH};
use crate::NE;

pub fn read<T, S>(source: &mut S) -> Result<T, S::Error>
where
    T: Primitive,
    S: ByteSource + ?Sized,
{
    #[cfg(feature = "extra-logging")]
    log::trace!("read {} ({} bytes)", std::any::type_name::<T>(), T::WIDTH);

    let mut buf = [0u8; MAX_WIDTH];
    let native = &mut buf[..T::WIDTH];

    fill(native, Endian::host(), source)?;
    Ok(T::from_bytes::<NE>(native))
}

// lays the incoming bytes out the way a `host` machine stores the value
fn fill<S>(native: &mut [u8], host: Endian, source: &mut S) -> Result<(), S::Error>
where
    S: ByteSource + ?Sized,
{
    if host.is_big() {
        for slot in native.iter_mut() {
            *slot = source.take()?;
        }
    } else {
        for slot in native.iter_mut().rev() {
            *slot = source.take()?;
        }
    }
    Ok(())
}

macro_rules! readers_for {
    [$($t:ident),*] => {
        $(
            paste! {
                pub fn [<read_ $t>]<F>(mut input: F) -> $t
                where
                    F: FnMut() -> u8,
                {
                    let source = &mut FnSource::new(|| Ok::<_, Infallible>(input()));
                    infallible(read(source))
                }

                pub fn [<read_ $t _with>]<C, F>(mut input: F, context: &mut C) -> $t
                where
                    C: ?Sized,
                    F: FnMut(&mut C) -> u8,
                {
                    let source = &mut ContextSource::new(
                        |context: &mut C| Ok::<_, Infallible>(input(context)),
                        context,
                    );
                    infallible(read(source))
                }

                pub fn [<try_read_ $t>]<F, E>(input: F) -> Result<$t, E>
                where
                    F: FnMut() -> Result<u8, E>,
                {
                    read(&mut FnSource::new(input))
                }

                pub fn [<try_read_ $t _with>]<C, F, E>(input: F, context: &mut C) -> Result<$t, E>
                where
                    C: ?Sized,
                    F: FnMut(&mut C) -> Result<u8, E>,
                {
                    read(&mut ContextSource::new(input, context))
                }
            }
        )*
    };
}

readers_for![bool, u8, i8, i32, i64, f32, f64];

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::{SliceSource, SourceError};
    use crate::{BE, LE};

    fn parse<T: Primitive>(bytes: &[u8]) -> T {
        let mut source = SliceSource::new(bytes);
        let value = read(&mut source).unwrap();
        assert!(source.is_empty());
        value
    }

    #[test]
    fn test_big_endian_layout() {
        assert_eq!(parse::<i32>(&[0x01, 0x02, 0x03, 0x04]), 16909060);
        assert_eq!(parse::<i64>(&[0xff; 8]), -1);
        assert_eq!(parse::<f32>(&[0x3f, 0x80, 0x00, 0x00]), 1.0);
        assert_eq!(parse::<u8>(&[0xc3]), 0xc3);
        assert_eq!(parse::<i32>(&[0x80, 0x00, 0x00, 0x00]), i32::MIN);

        let zero = parse::<f64>(&[0x80, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(zero.to_bits(), (-0.0f64).to_bits());
        assert!(zero.is_sign_negative());
    }

    #[test]
    fn test_signed_char() {
        assert_eq!(parse::<i8>(&[0xff]), -1);
        assert_eq!(parse::<i8>(&[0x80]), -128);
        assert_eq!(parse::<i8>(&[0x7f]), 127);
        assert_eq!(parse::<i8>(&[0x00]), 0);
    }

    #[test]
    fn test_bool_nonzero() {
        assert!(parse::<bool>(&[0x7f]));
        assert!(parse::<bool>(&[0x01]));
        assert!(parse::<bool>(&[0xff]));
        assert!(!parse::<bool>(&[0x00]));
    }

    #[test]
    fn test_width() {
        let mut calls = 0usize;

        read_bool(|| { calls += 1; 0 });
        read_u8(|| { calls += 1; 0 });
        read_i8(|| { calls += 1; 0 });
        assert_eq!(calls, 3);

        calls = 0;
        read_i32(|| { calls += 1; 0 });
        read_f32(|| { calls += 1; 0 });
        assert_eq!(calls, 8);

        calls = 0;
        read_i64(|| { calls += 1; 0 });
        read_f64(|| { calls += 1; 0 });
        assert_eq!(calls, 16);
    }

    #[test]
    fn test_host_independent() {
        let wire = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];

        let mut on_little = [0u8; 8];
        fill(&mut on_little, Endian::Little, &mut SliceSource::new(&wire)).unwrap();

        let mut on_big = [0u8; 8];
        fill(&mut on_big, Endian::Big, &mut SliceSource::new(&wire)).unwrap();

        assert_eq!(on_big, wire);
        assert_eq!(i64::from_bytes::<LE>(&on_little), 0x0123_4567_89ab_cdef);
        assert_eq!(i64::from_bytes::<BE>(&on_big), 0x0123_4567_89ab_cdef);
    }

    #[test]
    fn test_context_form_matches_plain() {
        let wire = [0xc0, 0x93, 0x4a, 0x45, 0x6d, 0x5c, 0xfa, 0xad];

        let mut it = wire.iter().copied();
        let plain = read_f64(|| it.next().unwrap_or(0));

        let mut position = 0usize;
        let threaded = read_f64_with(
            |position: &mut usize| {
                let b = wire[*position];
                *position += 1;
                b
            },
            &mut position,
        );

        assert_eq!(plain.to_bits(), threaded.to_bits());
        assert_eq!(position, 8);
        assert_eq!(plain, parse::<f64>(&wire));
    }

    #[test]
    fn test_source_failure_stops_read() {
        let mut source = SliceSource::new(&[0x01, 0x02, 0x03]);

        assert_eq!(
            read::<i32, _>(&mut source),
            Err(SourceError::Exhausted { position: 3 })
        );

        let mut calls = 0;
        let result = try_read_i64(|| {
            calls += 1;
            if calls > 5 { Err("eof") } else { Ok(0) }
        });
        assert_eq!(result, Err("eof"));
        assert_eq!(calls, 6);
    }

    #[test]
    fn test_try_context_form() {
        let mut source = SliceSource::new(&[0xff, 0xff, 0xff, 0xfe, 0x2a]);

        let value = try_read_i32_with(|s| s.take(), &mut source);
        assert_eq!(value, Ok(-2));

        let tail = try_read_i8_with(|s| s.take(), &mut source);
        assert_eq!(tail, Ok(42));
        assert!(source.is_empty());
    }
}
