//! Format output dispatch helpers

/// Macro for format dispatch that automatically wraps result handling.
/// Use when json branch returns Result and human/records return ().
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&report) },
///     human => { println!("{}", total); },
///     records => { println!("H docsize=1 records=1"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
