// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Group location and excision.

const OPEN: u8 = b'{';
const CLOSE: u8 = b'}';

/// Find the end of the group opening at `start`.
///
/// Returns the offset just past the `}` that balances the `{` at `start`,
/// or `None` when `start` is not an opening delimiter or the buffer ends
/// before the group closes.
pub fn locate_group_end(buffer: &str, start: usize) -> Option<usize> {
    let bytes = buffer.as_bytes();
    if bytes.get(start) != Some(&OPEN) {
        return None;
    }

    let mut depth: usize = 0;
    for (offset, &byte) in bytes.iter().enumerate().skip(start) {
        match byte {
            OPEN => depth += 1,
            CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Return `buffer` without the span `[open, end)`.
///
/// Both offsets must lie on character boundaries with `open <= end`; the
/// locator only produces offsets next to ASCII delimiters, which satisfies
/// this.
pub fn excise(buffer: &str, open: usize, end: usize) -> String {
    let mut out = String::with_capacity(buffer.len() - (end - open));
    out.push_str(&buffer[..open]);
    out.push_str(&buffer[end..]);
    out
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
