//! Information units. A bit is a bare count; bytes and the binary multiples derive from it.

use super::si::{COUNT, S};
use crate::PreciseUnit;

/// Bit.
pub const BIT: PreciseUnit = COUNT;
/// Nibble.
pub const NIBBLE: PreciseUnit = BIT.scaled(4.0);
/// Byte (octet).
pub const BYTE: PreciseUnit = BIT.scaled(8.0);
/// Kilobyte.
pub const KB: PreciseUnit = BYTE.scaled(1e3);
/// Megabyte.
pub const MB: PreciseUnit = BYTE.scaled(1e6);
/// Gigabyte.
pub const GB: PreciseUnit = BYTE.scaled(1e9);
/// Terabyte.
pub const TB: PreciseUnit = BYTE.scaled(1e12);
/// Kibibyte.
pub const KIB: PreciseUnit = BYTE.scaled(1024.0);
/// Mebibyte.
pub const MIB: PreciseUnit = KIB.scaled(1024.0);
/// Gibibyte.
pub const GIB: PreciseUnit = MIB.scaled(1024.0);
/// Tebibyte.
pub const TIB: PreciseUnit = GIB.scaled(1024.0);
/// Shannon (information content of one binary choice).
pub const SHANNON: PreciseUnit = BIT;
/// Hartley (decimal digit of information).
pub const HARTLEY: PreciseUnit = BIT.scaled(3.321_928_094_887_362);
/// Nat.
pub const NAT: PreciseUnit = BIT.scaled(1.442_695_040_888_963_4);
/// Baud.
pub const BAUD: PreciseUnit = COUNT.divide(S);
/// Bits per second.
pub const BPS: PreciseUnit = BIT.divide(S);
/// Floating-point operation.
pub const FLOP: PreciseUnit = COUNT;
/// Floating-point operations per second.
pub const FLOPS: PreciseUnit = COUNT.divide(S);
/// Million instructions per second.
pub const MIPS: PreciseUnit = COUNT.divide(S).scaled(1e6);
