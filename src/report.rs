use crate::mma8452q::Acceleration;
use std::io::Write;

/// Write one labelled line per axis.
pub fn report<W: Write + ?Sized>(out: &mut W, accel: &Acceleration) -> std::io::Result<()> {
    writeln!(out, "Acceleration in X-Axis : {}", accel.x)?;
    writeln!(out, "Acceleration in Y-Axis : {}", accel.y)?;
    writeln!(out, "Acceleration in Z-Axis : {}", accel.z)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lines() {
        let mut out = Vec::<u8>::new();
        report(&mut out, &Acceleration { x: 16, y: -32, z: 1 }).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Acceleration in X-Axis : 16\n\
             Acceleration in Y-Axis : -32\n\
             Acceleration in Z-Axis : 1\n"
        );
    }
}
