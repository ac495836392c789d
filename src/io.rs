//! Plain-text point files.
//!
//! Input and output share one format: a line holding the number of points,
//! followed by one line per point with its two coordinates separated by
//! whitespace. Blank lines are ignored.
//!
//! ```text
//! 3
//!    0.000000     0.000000
//!    4.000000     0.000000
//!    0.000000     4.000000
//! ```
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::data::{Point, DEFAULT_CAPACITY};

#[derive(Debug)]
pub enum InputError {
  /// The input holds no point count.
  Empty,
  /// A line (1-based) is not a count or a coordinate pair.
  Malformed { line: usize },
  /// The declared count differs from the number of coordinate lines.
  SizeMismatch { declared: usize, actual: usize },
  /// The declared count exceeds what a scan can hold.
  TooManyPoints { declared: usize, capacity: usize },
  Io(io::Error),
}

impl fmt::Display for InputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      InputError::Empty => write!(f, "The input cannot be empty"),
      InputError::Malformed { line } => write!(f, "Malformed input on line {}", line),
      InputError::SizeMismatch { declared, actual } => write!(
        f,
        "The problem size and the number of points do not match: declared {}, found {}",
        declared, actual
      ),
      InputError::TooManyPoints { declared, capacity } => write!(
        f,
        "The problem size is too big: {} points, at most {} are supported",
        declared, capacity
      ),
      InputError::Io(err) => write!(f, "Failed to read the input: {}", err),
    }
  }
}

impl std::error::Error for InputError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      InputError::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<io::Error> for InputError {
  fn from(err: io::Error) -> Self {
    InputError::Io(err)
  }
}

/// Read a point file, rejecting more than [`DEFAULT_CAPACITY`] points.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, InputError> {
  read_points_with_capacity(reader, DEFAULT_CAPACITY)
}

/// Read a point file, rejecting more than `capacity` points.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::io::{read_points_with_capacity, InputError};
/// # use graham_hull::data::Point;
/// let text = "2\n0 0\n1.5 -2\n";
/// let points = read_points_with_capacity(text.as_bytes(), 10).unwrap();
/// assert_eq!(points, vec![Point::new([0.0, 0.0]), Point::new([1.5, -2.0])]);
///
/// let err = read_points_with_capacity("3\n0 0\n".as_bytes(), 10).unwrap_err();
/// assert!(matches!(err, InputError::SizeMismatch { declared: 3, actual: 1 }));
/// ```
pub fn read_points_with_capacity<R: BufRead>(
  reader: R,
  capacity: usize,
) -> Result<Vec<Point>, InputError> {
  let mut lines = reader
    .lines()
    .enumerate()
    .map(|(idx, line)| line.map(|text| (idx + 1, text)))
    .filter(|line| !matches!(line, Ok((_, text)) if text.trim().is_empty()));

  let declared = match lines.next() {
    None => return Err(InputError::Empty),
    Some(line) => {
      let (line, text) = line?;
      text
        .trim()
        .parse::<usize>()
        .map_err(|_| InputError::Malformed { line })?
    }
  };
  if declared > capacity {
    return Err(InputError::TooManyPoints { declared, capacity });
  }

  // Sized by the lines actually read, not by the declared count.
  let mut points = Vec::with_capacity(declared.min(DEFAULT_CAPACITY));
  let mut actual = 0;
  for line in lines {
    let (line, text) = line?;
    let point = parse_point(&text).ok_or(InputError::Malformed { line })?;
    actual += 1;
    if actual <= declared {
      points.push(point);
    }
  }
  if actual != declared {
    return Err(InputError::SizeMismatch { declared, actual });
  }
  Ok(points)
}

fn parse_point(text: &str) -> Option<Point> {
  let mut fields = text.split_whitespace();
  let x = fields.next()?.parse().ok()?;
  let y = fields.next()?.parse().ok()?;
  if fields.next().is_some() {
    return None;
  }
  Some(Point::new([x, y]))
}

/// Write `hull` in the point file format, six fractional digits per
/// coordinate.
///
/// # Examples
///
/// ```rust
/// # use graham_hull::io::write_hull;
/// # use graham_hull::data::Point;
/// let mut out = Vec::new();
/// write_hull(&mut out, &[Point::new([1.0, -2.5])]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1\n   1.000000    -2.500000\n");
/// ```
pub fn write_hull<W: Write>(mut writer: W, hull: &[Point]) -> io::Result<()> {
  writeln!(writer, "{}", hull.len())?;
  for point in hull {
    writeln!(writer, "{:11.6}  {:11.6}", point.x_coord(), point.y_coord())?;
  }
  Ok(())
}
