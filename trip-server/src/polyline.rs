//! Encoded-polyline codec.
//!
//! Leg geometry arrives from the journey planner as a compact encoded
//! polyline: signed deltas at 5-decimal-digit precision, zig-zag encoded,
//! split into 5-bit chunks, each chunk offset by 63 into printable ASCII
//! with bit 0x20 marking continuation. `decode` is total for well-formed
//! input and reports `MalformedGeometry` for anything else; it never
//! panics. `encode` is the matching encoder, used by round-trip tests and
//! anything that needs to hand geometry back in wire form.

use crate::domain::Coord;

/// Precision factor: coordinates are encoded at 1e-5 degrees.
const PRECISION: f64 = 1e5;

/// Error returned when an encoded polyline cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed geometry: {reason}")]
pub struct MalformedGeometry {
    reason: &'static str,
}

/// Decode an encoded polyline into its ordered sequence of coordinates.
///
/// # Examples
///
/// ```
/// use trip_server::polyline::decode;
///
/// let points = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@").unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[0].lat(), 38.5);
/// assert_eq!(points[0].lon(), -120.2);
/// ```
pub fn decode(encoded: &str) -> Result<Vec<Coord>, MalformedGeometry> {
    let mut bytes = encoded.bytes();
    let mut coords = Vec::new();
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    loop {
        let Some(dlat) = next_delta(&mut bytes)? else {
            return Ok(coords);
        };
        let dlon = next_delta(&mut bytes)?.ok_or(MalformedGeometry {
            reason: "latitude delta without matching longitude delta",
        })?;

        lat += dlat;
        lon += dlon;

        let coord = Coord::new(lat as f64 / PRECISION, lon as f64 / PRECISION).map_err(|_| {
            MalformedGeometry {
                reason: "decoded coordinate out of range",
            }
        })?;
        coords.push(coord);
    }
}

/// Encode coordinates as a polyline string at 5-digit precision.
pub fn encode(coords: &[Coord]) -> String {
    let mut out = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for coord in coords {
        let lat = (coord.lat() * PRECISION).round() as i64;
        let lon = (coord.lon() * PRECISION).round() as i64;
        push_delta(lat - prev_lat, &mut out);
        push_delta(lon - prev_lon, &mut out);
        prev_lat = lat;
        prev_lon = lon;
    }

    out
}

/// Read one zig-zag varint delta. `Ok(None)` at a clean end of input.
fn next_delta(bytes: &mut std::str::Bytes<'_>) -> Result<Option<i64>, MalformedGeometry> {
    let mut value: i64 = 0;
    let mut shift: u32 = 0;
    let mut started = false;

    loop {
        let Some(byte) = bytes.next() else {
            if started {
                return Err(MalformedGeometry {
                    reason: "unterminated coordinate chunk",
                });
            }
            return Ok(None);
        };

        if !(63..=126).contains(&byte) {
            return Err(MalformedGeometry {
                reason: "byte outside the encodable range",
            });
        }

        if shift > 30 {
            return Err(MalformedGeometry {
                reason: "coordinate delta overflows",
            });
        }

        let chunk = (byte - 63) as i64;
        value |= (chunk & 0x1f) << shift;
        shift += 5;
        started = true;

        if chunk & 0x20 == 0 {
            break;
        }
    }

    // Undo the zig-zag: even values are positive, odd are negative.
    let delta = if value & 1 != 0 {
        !(value >> 1)
    } else {
        value >> 1
    };

    Ok(Some(delta))
}

/// Append one delta in zig-zag varint form.
fn push_delta(delta: i64, out: &mut String) {
    let mut value = if delta < 0 { !(delta << 1) } else { delta << 1 };

    while value >= 0x20 {
        out.push((((value & 0x1f) | 0x20) as u8 + 63) as char);
        value >>= 5;
    }
    out.push((value as u8 + 63) as char);
}
