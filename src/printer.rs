use anyhow::Result;
use log::warn;
use std::io::Write;
use std::path::Path;

use crate::cli::DisplayOptions;
use crate::format;
use crate::meta;

/// Writes the listing header and one line per entry, in the order the
/// entries are given.
pub fn print_listing(
    out: &mut impl Write,
    dir: &Path,
    entries: &[String],
    opts: &DisplayOptions,
) -> Result<()> {
    writeln!(out, "Contents of directory: {}", dir.display())?;

    for name in entries {
        if opts.long_listing {
            writeln!(out, "{}", long_line(dir, name, opts.human_readable))?;
        } else {
            writeln!(out, "{:<40}", name)?;
        }
    }

    Ok(())
}

/// Builds a long-listing line: size field, timestamp, 60-column name.
///
/// Entries without a byte length (devices, sockets) drop the size field.
/// A failed stat drops both metadata fields; the listing continues with
/// just the name.
fn long_line(dir: &Path, name: &str, human_readable: bool) -> String {
    let mut line = String::new();

    match meta::inspect(dir, name) {
        Ok(meta) => {
            if let Some(size) = meta.size {
                line.push_str(&format::size_field(size, human_readable));
            }
            line.push_str(&format::mtime_field(meta.modified));
        }
        Err(err) => warn!("{:#}", err),
    }

    line.push_str(&format!("{:<60}", name));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entries(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_short_listing_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"12345").unwrap();
        fs::write(dir.path().join("b.txt"), b"0123456789").unwrap();

        let mut buf = Vec::new();
        let names = entries(&[".", "..", "a.txt", "b.txt"]);
        print_listing(&mut buf, dir.path(), &names, &DisplayOptions::default()).unwrap();

        let expected = format!(
            "Contents of directory: {}\n{:<40}\n{:<40}\n{:<40}\n{:<40}\n",
            dir.path().display(),
            ".",
            "..",
            "a.txt",
            "b.txt"
        );
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }

    #[test]
    fn test_short_listing_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"12345").unwrap();

        let names = entries(&[".", "..", "a.txt"]);
        let mut first = Vec::new();
        let mut second = Vec::new();
        print_listing(&mut first, dir.path(), &names, &DisplayOptions::default()).unwrap();
        print_listing(&mut second, dir.path(), &names, &DisplayOptions::default()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_long_line_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"12345").unwrap();

        let line = long_line(dir.path(), "a.txt", false);

        // size field (13) + timestamp (30) + name (60)
        assert!(line.starts_with("5      bytes\t"));
        assert_eq!(line.len(), 13 + 30 + 60);
        assert_eq!(&line[43..48], "a.txt");
    }

    #[test]
    fn test_long_line_human_readable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("two_k.bin"), vec![0u8; 2048]).unwrap();

        let line = long_line(dir.path(), "two_k.bin", true);
        assert!(line.starts_with("2.00   KB\t"));
    }

    #[test]
    fn test_long_line_directory_size() {
        let dir = tempfile::tempdir().unwrap();

        let line = long_line(dir.path(), ".", false);
        assert!(line.starts_with("4096   bytes\t"));
    }

    #[test]
    fn test_long_line_survives_vanished_entry() {
        let dir = tempfile::tempdir().unwrap();

        let line = long_line(dir.path(), "ghost", false);
        assert_eq!(line, format!("{:<60}", "ghost"));
    }

    #[test]
    fn test_long_listing_output_shape() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"12345").unwrap();

        let mut buf = Vec::new();
        let names = entries(&["a.txt"]);
        let opts = DisplayOptions { long_listing: true, human_readable: false };
        print_listing(&mut buf, dir.path(), &names, &opts).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Contents of directory: "));
        assert!(lines[1].starts_with("5      bytes\t"));
        assert!(lines[1].ends_with(&format!("{:<60}", "a.txt")));
    }
}
