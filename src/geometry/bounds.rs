use std::fmt;

use crate::geometry::rect::Rect;

/// Failure to extract a rectangle from a raw `bounds` attribute value.
#[derive(Debug)]
pub enum BoundsError {
    /// Fewer than four integer tokens could be extracted from the value.
    Malformed { raw: String, found: usize },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsError::Malformed { raw, found } => {
                write!(f, "Malformed bounds '{}': found {} of 4 integers", raw, found)
            }
        }
    }
}

impl std::error::Error for BoundsError {}

/// Parse a `bounds` attribute value into a rectangle.
///
/// The canonical dump format is `"[x1,y1][x2,y2]"`, but encodings degrade in
/// the wild, so every non-digit character is treated as a separator and the
/// first four integer runs are taken as `x1, y1, x2, y2`. The result is
/// `{x1, y1, x2-x1, y2-y1}`; negative extents are passed through untouched
/// and fail containment later rather than being rejected here.
pub fn parse_bounds(raw: &str) -> Result<Rect, BoundsError> {
    let mut numbers = [0i32; 4];
    let mut count = 0;

    for token in raw.split(|c: char| !c.is_ascii_digit()) {
        if token.is_empty() {
            continue;
        }
        // A digit run too large for an i32 invalidates the whole value;
        // skipping it would let later tokens shift into its slot and
        // fabricate a rectangle from the wrong numbers.
        let value = token.parse::<i32>().map_err(|_| BoundsError::Malformed {
            raw: raw.to_string(),
            found: count,
        })?;
        numbers[count] = value;
        count += 1;
        if count == 4 {
            break;
        }
    }

    if count < 4 {
        return Err(BoundsError::Malformed {
            raw: raw.to_string(),
            found: count,
        });
    }

    let [x1, y1, x2, y2] = numbers;
    Ok(Rect {
        x: x1,
        y: y1,
        width: x2 - x1,
        height: y2 - y1,
    })
}
