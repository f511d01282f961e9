pub use byteorder::{BE, LE};
pub use byteorder::NativeEndian as NE;

pub mod endian;
pub use endian::Endian;

pub mod order;
pub use order::Order;

pub mod traits;
pub use traits::{Primitive, MAX_WIDTH};

pub mod io;
pub use io::{
    ByteSink, ByteSource, ContextSink, ContextSource, FnSink, FnSource, SliceSource, SourceError,
};

pub mod read;
pub use read::*;

pub mod write;
pub use write::*;
