//! Business logic services for the application layer.

pub mod converter_service;

pub use converter_service::{Conversion, ConversionSource, ConverterService, DynConverterService};
