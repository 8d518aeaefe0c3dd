//! Reading grammar input from files.
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

/// Reads a file line by line, each line (including the last) terminated by `\n`.
pub fn read_lines(path: impl AsRef<Path>) -> io::Result<String> {
    from_reader(BufReader::new(File::open(path)?))
}

/// As [read_lines], over any buffered reader. `\r\n` endings are normalised to `\n`.
pub fn from_reader<R: BufRead>(reader: R) -> io::Result<String> {
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("a", "a\n")]
    #[case("a\n", "a\n")]
    #[case("a\r\n\nb", "a\n\nb\n")]
    fn lines_are_terminated(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(from_reader(input.as_bytes()).unwrap(), expected);
    }

    #[test]
    fn missing_file() {
        let err = read_lines("this/file/does/not/exist.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
