//! Digest command implementation.

use huffbit_core::md5::{Md5, to_hex};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Read buffer size for streaming digests.
const CHUNK_SIZE: usize = 64 * 1024;

fn digest_reader<R: Read>(mut reader: R) -> std::io::Result<[u8; 16]> {
    let mut md5 = Md5::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        md5.consume(&buf[..n]);
    }
    Ok(md5.finalize())
}

fn digest_file(path: &Path) -> std::io::Result<[u8; 16]> {
    digest_reader(BufReader::new(File::open(path)?))
}

/// Print `<hex>  <path>` for each file, like `md5sum`.
pub fn cmd_digest(files: &[PathBuf]) -> Result<(), Box<dyn std::error::Error>> {
    let mut failures = 0usize;
    for path in files {
        match digest_file(path) {
            Ok(digest) => println!("{}  {}", to_hex(&digest), path.display()),
            Err(e) => {
                failures += 1;
                eprintln!("{}: {}", path.display(), e);
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} of {} files could not be read", failures, files.len()).into());
    }
    Ok(())
}
