use crate::{Error, Result};

/// Pattern read from the RLE format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RlePattern {
    pub width: u32,
    pub height: u32,
    /// `(row, col)` of every alive cell.
    pub alive: Vec<(u32, u32)>,
}

fn next_number(data: &[u8], i: &mut usize) -> Option<u32> {
    while *i < data.len() && !data[*i].is_ascii_digit() {
        *i += 1;
    }
    let j = {
        let mut j = *i;
        while j < data.len() && data[j].is_ascii_digit() {
            j += 1;
        }
        j
    };
    let ans = std::str::from_utf8(&data[*i..j]).ok()?.parse::<u32>().ok()?;
    *i = j;
    Some(ans)
}

/// Parses the header line `x = W, y = H[, rule = ...]` and the run-length
/// encoded body (`b` dead, `o` alive, `$` end of row, `!` end of pattern).
pub fn parse_rle(data: &[u8]) -> Result<RlePattern> {
    let mut i = 0;
    // skipping comment and blank lines
    while matches!(data.get(i), Some(b'#' | b'\n' | b'\r')) {
        while i < data.len() && data[i] != b'\n' {
            i += 1;
        }
        i += 1;
    }
    if data.get(i) != Some(&b'x') {
        return Err(Error::Rle("missing `x = .., y = ..` header".to_owned()));
    }
    let header_end = data[i..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(data.len(), |p| i + p);
    let header = &data[i..header_end];
    let mut j = 0;
    let width =
        next_number(header, &mut j).ok_or_else(|| Error::Rle("bad width".to_owned()))?;
    let height =
        next_number(header, &mut j).ok_or_else(|| Error::Rle("bad height".to_owned()))?;

    // run-length encoded pattern data
    let body = data.get(header_end + 1..).unwrap_or_default();
    let (mut x, mut y, mut cnt) = (0u32, 0u32, 1u32);
    let mut alive = vec![];
    let mut i = 0;
    while i < body.len() {
        match body[i] {
            b'0'..=b'9' => {
                cnt = next_number(body, &mut i)
                    .ok_or_else(|| Error::Rle("run count is too large".to_owned()))?;
            }
            b'o' => {
                if y >= height || x.saturating_add(cnt) > width {
                    return Err(Error::Rle(format!(
                        "cells at row {} exceed the {}x{} bounding box",
                        y, width, height
                    )));
                }
                alive.extend((x..x + cnt).map(|col| (y, col)));
                (x, i, cnt) = (x + cnt, i + 1, 1);
            }
            b'b' => (x, i, cnt) = (x.saturating_add(cnt), i + 1, 1),
            b'$' => (x, y, i, cnt) = (0, y.saturating_add(cnt), i + 1, 1),
            b'!' => break,
            c if c.is_ascii_whitespace() => i += 1,
            c => return Err(Error::Rle(format!("unexpected symbol {:?}", c as char))),
        };
    }
    Ok(RlePattern {
        width,
        height,
        alive,
    })
}
