/// A filter bound as given on the command line: either a single number, read
/// as an upper bound, or an explicit `low,high` pair.
#[derive(Copy, Clone, Debug)]
pub enum ArgBounds {
    Scalar(f64),
    Range(f64, f64),
}

/// Error type for parsing a bounds string.
#[derive(Debug)]
pub struct ParseBoundsErr(String);

impl std::fmt::Display for ParseBoundsErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid bounds format: {}", self.0)
    }
}

impl std::error::Error for ParseBoundsErr {}

impl<'a> TryFrom<&'a str> for ArgBounds {
    type Error = ParseBoundsErr;

    fn try_from(arg: &'a str) -> Result<ArgBounds, Self::Error> {
        let parts: Vec<&str> = arg.split(',').collect();

        let parse = |s: &str| {
            s.trim().parse::<f64>().map_err(|_| {
                ParseBoundsErr(format!("'{}' is not a number", s.trim()))
            })
        };

        match parts[..] {
            [single] => Ok(ArgBounds::Scalar(parse(single)?)),
            [low, high] => Ok(ArgBounds::Range(parse(low)?, parse(high)?)),
            _ => Err(ParseBoundsErr(indoc::formatdoc! {"
            Expected a single number or '<low>,<high>', got '{arg}', as in:
              --gc 80
              --gc 20,80
              --len 0,15000
            "})),
        }
    }
}

/// A canonical closed interval, with `low <= high` guaranteed by `normalize`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub fn contains(&self, v: f64) -> bool {
        (self.low <= v) && (v <= self.high)
    }
}

/// Turns a scalar-or-pair bound into a canonical `Interval`.
///
/// A single number is read as the *upper* bound, with `default_low` as the
/// lower. A reversed pair is swapped rather than rejected, so the result
/// always satisfies `low <= high`.
pub fn normalize(bounds: ArgBounds, default_low: f64) -> Interval {
    let (low, high) = match bounds {
        ArgBounds::Scalar(high) => (default_low, high),
        ArgBounds::Range(low, high) => (low, high),
    };

    if low > high {
        Interval { low: high, high: low }
    } else {
        Interval { low, high }
    }
}
