//! `docsize format-bytes` command

use docsize_core::error::Result;
use docsize_core::format::format_bytes;

use crate::cli::Cli;
use crate::output_by_format_result;

/// Execute the format-bytes command
pub fn execute(cli: &Cli, bytes: u64, decimals: usize) -> Result<()> {
    let formatted = format_bytes(bytes, decimals);

    output_by_format_result!(cli.format,
        json => {
            let output = serde_json::json!({
                "bytes": bytes,
                "formatted": formatted,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), docsize_core::error::DocsizeError>(())
        },
        human => {
            println!("{}", formatted);
        },
        records => {
            println!("B bytes={} formatted=\"{}\"", bytes, formatted);
        }
    )
}
