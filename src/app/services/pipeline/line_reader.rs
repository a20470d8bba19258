//! Line-at-a-time reading of observation streams

use std::io::BufRead;

use crate::Result;

/// Call `handle` with each line of `reader`, without its terminator
///
/// Line numbers start at 1. One buffer is reused for the whole stream.
/// Bytes that are not valid UTF-8 are replaced, so such a line reaches the
/// handler and fails validation instead of aborting the stream.
pub fn for_each_line<R, F>(mut reader: R, mut handle: F) -> Result<u64>
where
    R: BufRead,
    F: FnMut(u64, &str) -> Result<()>,
{
    let mut buffer = Vec::new();
    let mut line_number = 0;

    loop {
        buffer.clear();
        if reader.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        line_number += 1;

        let line = String::from_utf8_lossy(&buffer);
        handle(line_number, line.trim_end_matches(['\n', '\r']))?;
    }

    Ok(line_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_strips_terminators_and_counts() {
        let input = "first\nsecond\r\nthird";
        let mut seen = Vec::new();

        let count = for_each_line(Cursor::new(input), |n, line| {
            seen.push((n, line.to_string()));
            Ok(())
        })
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            seen,
            vec![
                (1, "first".to_string()),
                (2, "second".to_string()),
                (3, "third".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_lines_are_delivered() {
        let mut seen = Vec::new();
        for_each_line(Cursor::new("\n\nx\n"), |_, line| {
            seen.push(line.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, vec!["", "", "x"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let mut seen = Vec::new();
        for_each_line(Cursor::new(bytes), |_, line| {
            seen.push(line.to_string());
            Ok(())
        })
        .unwrap();
        assert_eq!(seen[0], "ok");
        assert_eq!(seen[1], "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_handler_error_stops_stream() {
        let mut calls = 0;
        let result = for_each_line(Cursor::new("a\nb\nc\n"), |n, _| {
            calls += 1;
            if n == 2 {
                Err(crate::Error::configuration("stop"))
            } else {
                Ok(())
            }
        });
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }
}
