//! Image source adapter.
//!
//! Fetches images over HTTP (or reads them from disk) and decodes them with
//! the `image` crate into a [`PixelBuffer`] the converter can consume.

mod client;
mod error;
mod examples;
mod types;

pub use client::{
    decode, FetchOptions, ImageClient, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_BYTES,
    DEFAULT_TIMEOUT,
};
pub use error::SourceError;
pub use examples::{random_example_url, EXAMPLE_URLS};
pub use types::{ImageInput, PixelBuffer, PixelFormat};
