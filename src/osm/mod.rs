// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod filter;
mod reader;

pub use filter::{WayFilter, ALL_WAYS, HIGHWAYS};
pub use reader::{
    load_network_from_buffer, load_network_from_file, load_network_from_io, Error, FileFormat,
    Options,
};
