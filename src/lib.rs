/*!
 * # xamlcopy
 *
 * Copies the text of every `.xaml` file in a directory into a sibling
 * `.xaml.txt` file and moves the result to the user's Desktop.
 *
 * ## Architecture
 *
 * - `app_config`: Run configuration and Desktop resolution
 * - `app_controller`: The read, write, move pipeline
 * - `file_utils`: Directory listing, naming and file moves
 * - `text_decoding`: Permissive UTF-8 decoding
 * - `errors`: Error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod text_decoding;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ConversionSummary, COMPLETION_MESSAGE};
pub use errors::ConvertError;
pub use text_decoding::DecodePolicy;
