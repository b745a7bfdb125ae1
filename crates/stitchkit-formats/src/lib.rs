//! # stitchkit-formats
//!
//! Binary stitch file writers for industrial embroidery machines:
//!
//! - **DST** (Tajima): 512-byte ASCII header plus 3-byte interleaved-bit
//!   records, the de-facto interchange format
//! - **EXP** (Melco): headerless relative byte stream
//!
//! Both formats quantize to 0.1mm units, expect the design centred at the
//! origin, and express motion as saturating relative steps. The writers
//! consume the `Stitch` sequence produced by stitchkit-digitizer and own
//! their respective split-and-saturate delta loops.

pub mod dst;
pub mod error;
pub mod exp;

pub use dst::encode_dst;
pub use error::{EncodeError, FormatResult};
pub use exp::encode_exp;
