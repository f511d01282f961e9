use paste::paste;

use crate::order::Order;

/// Width in bytes of the widest [`Primitive`].
pub const MAX_WIDTH: usize = 16;

/// A fixed-width scalar that can be laid out as bytes in a given [`Order`].
///
/// `WIDTH` never depends on the host: pointer-sized integers are not
/// primitives.
pub trait Primitive: Copy {
    const WIDTH: usize;
    const SIGNED: bool;

    fn from_bytes<O: Order>(buf: &[u8]) -> Self;
    fn into_bytes<O: Order>(&self, buf: &mut [u8]);
}

macro_rules! impl_for {
    ($t:ident, $read:ident, $write:ident, $signed:ident) => {
        impl Primitive for $t {
            const WIDTH: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            #[inline]
            fn from_bytes<O: Order>(buf: &[u8]) -> Self {
                O::$read(buf)
            }

            #[inline]
            fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
                O::$write(buf, *self)
            }
        }
    };
}

macro_rules! impls_for {
    ([$($tname:ident),*], $signed:ident) => {
        $(
            paste! {
                impl_for!($tname, [<read_ $tname>], [<write_ $tname>], $signed);
            }
        )*
    };
}

impl Primitive for bool {
    const WIDTH: usize = 1;
    const SIGNED: bool = false;

    #[inline]
    fn from_bytes<O: Order>(buf: &[u8]) -> Self {
        O::read_u8(buf) != 0
    }

    #[inline]
    fn into_bytes<O: Order>(&self, buf: &mut [u8]) {
        O::write_u8(buf, if *self { 1 } else { 0 })
    }
}

impls_for! { [i8, i16, i32, i64, i128], true }
impls_for! { [u8, u16, u32, u64, u128], false }

// floats carry their raw IEEE 754 bits; NaN payloads and signed zeros survive
impls_for! { [f32, f64], true }
