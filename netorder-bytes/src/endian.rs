use std::fmt::Display;

use static_init::dynamic;

#[dynamic(lazy)]
static HOST: Endian = Endian::probe_logged();

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
pub enum Endian {
    Big,
    Little,
}

impl Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(if self.is_big() { "BE" } else { "LE" })
    }
}

impl Endian {
    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }

    /// Byte order used on the wire; always big-endian.
    pub const fn network() -> Self {
        Self::Big
    }

    /// Compile-time view of the target's byte order.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Determines the host byte order by laying out the integer `1` in memory
    /// and inspecting its first byte.
    pub fn probe() -> Self {
        let probe = 1u32.to_ne_bytes();
        if probe[0] == 1 {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Memoized [`Endian::probe`].
    #[inline]
    pub fn host() -> Self {
        *HOST
    }

    fn probe_logged() -> Self {
        let endian = Self::probe();
        log::debug!("host byte order: {}", endian);
        endian
    }
}
