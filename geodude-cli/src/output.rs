use geodude_core::GeocodeResult;
use std::io::{self, Write};

pub const USAGE: &str = "Geodude is a tiny command-line utility for geocoding addresses.

Usage:

  geodude [address]

";

/// Write the usage text
pub fn write_usage(w: &mut impl Write) -> io::Result<()> {
    w.write_all(USAGE.as_bytes())
}

/// Write a round-trip result in the fixed two-line format followed by a blank line
pub fn write_result(w: &mut impl Write, result: &GeocodeResult) -> io::Result<()> {
    let point = result.point();
    write!(
        w,
        "Address: {}\nCoordinates: {}, {}\n\n",
        result.address(),
        point.lat(),
        point.lng()
    )
}
