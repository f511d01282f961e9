use byteorder::ByteOrder;

use crate::{BE, LE};
use crate::endian::Endian;

pub trait Order: ByteOrder + Send + Sync + 'static {
    const ENDIAN: Endian;
    const NATIVE: bool;

    fn read_i8(buf: &[u8]) -> i8 {
        // two's-complement: bytes above 0x7f come back as `byte - 256`
        Self::read_u8(buf) as i8
    }

    fn write_i8(buf: &mut [u8], n: i8) {
        Self::write_u8(buf, n as u8)
    }

    fn read_u8(buf: &[u8]) -> u8 {
        buf.first().copied().unwrap_or(0)
    }

    fn write_u8(buf: &mut [u8], n: u8) {
        if let Some(b) = buf.first_mut() {
            *b = n;
        }
    }
}

impl Order for BE {
    const ENDIAN: Endian = Endian::Big;
    const NATIVE: bool = cfg!(target_endian = "big");
}

impl Order for LE {
    const ENDIAN: Endian = Endian::Little;
    const NATIVE: bool = cfg!(target_endian = "little");
}
