//! Decoders for frontmatter blocks
//!
//! A decoder turns the raw text of a metadata node into a JSON value.
//! Decoders are looked up by the mdast type tag of the node (`yaml`, `toml`, ...).
//!
//! # Architecture
//!
//! - **[`Decoder`]**: Trait for text-to-value decoders (closures implement it)
//! - **[`DecoderRegistry`]**: Tag to decoder mapping, seeded with YAML and TOML
//! - **[`YamlDecoder`]** / **[`TomlDecoder`]**: The built-in entries

mod builtin;
mod registry;
mod traits;

pub use builtin::{TomlDecoder, YamlDecoder};
pub use registry::DecoderRegistry;
pub use traits::Decoder;
