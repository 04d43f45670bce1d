//! File-format adapters layered on the storage contract.

pub mod dimacs;

pub use dimacs::{
    load_dimacs, load_dimacs_weighted, parse_dimacs, read_dimacs_file, save_dimacs_file,
    save_dimacs_file_weighted, write_dimacs, write_dimacs_weighted, DimacsError, DimacsResult,
    ParsedGraph,
};
