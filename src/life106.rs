//! Reading and writing the Life 1.06 text format.

use std::io::{self, Write};

use crate::{pos, FormatError, Pos};

pub const SIGNATURE: &str = "#Life 1.06";

/// Parses the live coordinates of a Life 1.06 document.
pub fn deserialize(str: &str) -> Result<Vec<Pos>, FormatError> {
    let mut lines = str.lines();
    match lines.next() {
        Some(SIGNATURE) => (),
        _ => {
            return Err(FormatError::Signature {
                expected: SIGNATURE,
            })
        }
    }

    let mut result = vec![];
    for (index, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let pos = parse_pair(line).ok_or_else(|| FormatError::Coordinate {
            line: index + 2,
            content: line.to_string(),
        })?;
        result.push(pos);
    }

    if result.is_empty() {
        return Err(FormatError::Empty);
    }
    Ok(result)
}

fn parse_pair(line: &str) -> Option<Pos> {
    let mut fields = line.split_whitespace();
    let x = fields.next()?.parse().ok()?;
    let y = fields.next()?.parse().ok()?;
    fields.next().is_none().then_some(pos!(x, y))
}

/// Writes the signature then one `x y` line per position, without a final newline.
pub fn serialize(out: &mut impl Write, positions: &[Pos]) -> io::Result<()> {
    writeln!(out, "{SIGNATURE}")?;
    for (index, Pos { x, y }) in positions.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write!(out, "{x} {y}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_signed_pairs() {
        let input = "#Life 1.06\n0 1\n-3   7\n\n 9223372036854775807 -9223372036854775808\n";
        assert_eq!(
            deserialize(input),
            Ok(vec![
                pos!(0, 1),
                pos!(-3, 7),
                pos!(i64::MAX, i64::MIN)
            ])
        );
    }

    #[test]
    fn tolerates_crlf() {
        assert_eq!(deserialize("#Life 1.06\r\n1 2\r\n"), Ok(vec![pos!(1, 2)]));
    }

    #[test]
    fn rejects_bad_signature() {
        let expected = Err(FormatError::Signature {
            expected: SIGNATURE,
        });
        assert_eq!(deserialize(""), expected);
        assert_eq!(deserialize("#Life 1.05\n0 0"), expected);
        assert_eq!(deserialize("0 0\n#Life 1.06"), expected);
    }

    #[test]
    fn rejects_malformed_lines() {
        for bad in ["1", "1 2 3", "a b", "1.5 2"] {
            let input = format!("#Life 1.06\n0 0\n{bad}");
            assert_eq!(
                deserialize(&input),
                Err(FormatError::Coordinate {
                    line: 3,
                    content: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn rejects_empty_list() {
        assert_eq!(deserialize("#Life 1.06\n"), Err(FormatError::Empty));
        assert_eq!(deserialize("#Life 1.06\n\n  \n"), Err(FormatError::Empty));
    }

    #[test]
    fn writes_without_trailing_newline() {
        let mut out = vec![];
        serialize(&mut out, &[pos!(0, -1), pos!(0, 0), pos!(0, 1)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#Life 1.06\n0 -1\n0 0\n0 1");

        let mut out = vec![];
        serialize(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "#Life 1.06\n");
    }
}
