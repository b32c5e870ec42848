//! Row building and argument parsing for the demonstration binary.

use polygons::{cfg::DEFAULT_REPORT_PRECISION, Polygon, Scalar};
use serde::Serialize;

/// Flat snapshot of one polygon and all of its derived values.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolygonRow {
    pub edge_count: u32,
    pub circumradius: f64,
    pub interior_angle: f64,
    pub edge_length: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
    pub efficiency: f64,
}

impl From<&Polygon> for PolygonRow {
    fn from(p: &Polygon) -> Self {
        Self {
            edge_count: p.edge_count(),
            circumradius: p.circumradius(),
            interior_angle: p.interior_angle(),
            edge_length: p.edge_length(),
            apothem: p.apothem(),
            area: p.area(),
            perimeter: p.perimeter(),
            efficiency: p.efficiency(),
        }
    }
}

impl PolygonRow {
    /// One human-readable line, floats at `DEFAULT_REPORT_PRECISION` digits.
    pub fn to_line(&self) -> String {
        let d = DEFAULT_REPORT_PRECISION;
        format!(
            "n={:<4} R={} angle={:.d$} edge={:.d$} apothem={:.d$} area={:.d$} perimeter={:.d$} area/perimeter={:.d$}",
            self.edge_count,
            self.circumradius,
            self.interior_angle,
            self.edge_length,
            self.apothem,
            self.area,
            self.perimeter,
            self.efficiency,
        )
    }
}

/// Interpret a command-line token the way an untyped caller would hand it over:
/// integer, real, complex (`5+5j`, `2j`) or otherwise text.
pub fn parse_scalar(token: &str) -> Scalar {
    let t = token.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Scalar::Int(v);
    }
    if let Ok(x) = t.parse::<f64>() {
        return Scalar::Real(x);
    }
    if let Some(body) = t.strip_suffix('j') {
        if let Some(z) = parse_complex(body) {
            return z;
        }
    }
    Scalar::Text(t.to_owned())
}

fn parse_complex(body: &str) -> Option<Scalar> {
    // Split at the last sign that is not leading and not part of an exponent.
    let bytes = body.as_bytes();
    let split = (1..bytes.len())
        .rev()
        .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
    match split {
        Some(i) => {
            let re = body[..i].parse::<f64>().ok()?;
            let im = body[i..].parse::<f64>().ok()?;
            Some(Scalar::complex(re, im))
        }
        None => {
            let im = match body {
                "" | "+" => 1.0,
                "-" => -1.0,
                _ => body.parse::<f64>().ok()?,
            };
            Some(Scalar::complex(0.0, im))
        }
    }
}
