use std::path::Path;

use anyhow::{anyhow, Result};
use log::debug;
use tokio::{fs, io::AsyncReadExt};

/// Split the source file into fixed-size block files and return the count.
///
/// Blocks land in `blocks_directory` as `<file_name>_block_<index>`, indexed
/// from 0, where peers later read them. The last block may be shorter than
/// `block_size`. An empty source yields zero blocks, which is a valid run.
pub async fn partition_file(
    source: &str,
    blocks_directory: &str,
    block_size: usize,
) -> Result<usize> {
    if block_size == 0 {
        return Err(anyhow!("invalid configuration"));
    }

    let file_name = file_name(source)?;

    fs::create_dir_all(blocks_directory).await?;

    let mut file = fs::File::open(source).await?;
    let mut index = 0;

    loop {
        let mut block = vec![0u8; block_size];

        // A single read may return short of a full block mid-file.
        let mut filled = 0;
        while filled < block_size {
            let n = file.read(&mut block[filled..]).await?;
            if n == 0 {
                break;
            }
            filled += n;
        }

        if filled == 0 {
            break;
        }

        block.truncate(filled);
        fs::write(format!("{blocks_directory}/{file_name}_block_{index}"), &block).await?;

        debug!("Wrote block {index} ({filled} bytes). ");

        index += 1;
    }

    Ok(index)
}

/// Rebuild the original file by concatenating blocks in index order.
pub async fn assemble_file(
    blocks_directory: &str,
    file_name: &str,
    total_blocks: usize,
    output: &str,
) -> Result<()> {
    let mut assembled = vec![];

    for index in 0..total_blocks {
        let block = fs::read(format!("{blocks_directory}/{file_name}_block_{index}")).await?;
        assembled.extend_from_slice(&block);
    }

    fs::write(output, &assembled).await?;

    Ok(())
}

fn file_name(source: &str) -> Result<String> {
    let file_name = Path::new(source)
        .file_name()
        .ok_or(anyhow!("source path {source} has no file name"))?;

    Ok(file_name.to_string_lossy().into_owned())
}
