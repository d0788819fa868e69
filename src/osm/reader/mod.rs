// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use loader::NetworkLoader;

use crate::osm::{WayFilter, ALL_WAYS};
use crate::Network;

mod loader;
mod model;
mod xml;

/// Format of the input OSM file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Unknown format - guess the compression based on the first bytes of the content
    #[default]
    Unknown,

    /// Force uncompressed [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    Xml,

    /// Force [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    XmlGz,

    /// Force [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    XmlBz2,
}

impl FileFormat {
    /// Guesses the format of a file from its first few bytes.
    /// Falls back to [FileFormat::Xml].
    pub fn detect(prefix: &[u8]) -> Self {
        if prefix.starts_with(&[0x1F, 0x8B]) {
            Self::XmlGz
        } else if prefix.starts_with(b"BZh") {
            Self::XmlBz2
        } else {
            Self::Xml
        }
    }
}

/// Additional controls for interpreting OSM data as a routing [Network].
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    /// Format of the input data.
    pub file_format: FileFormat,

    /// Which OSM ways should be converted into edges of the [Graph](crate::Graph).
    pub way_filter: &'a WayFilter<'a>,

    /// Remove references to nodes which are not present in the input
    /// (as is common in extracts cut from a larger dataset) instead of
    /// failing with [Error::NodeNotFound](crate::Error::NodeNotFound).
    pub skip_unknown_nodes: bool,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            file_format: FileFormat::Unknown,
            way_filter: &ALL_WAYS,
            skip_unknown_nodes: false,
        }
    }
}

/// Error which can occur when loading a [Network] from OSM data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("graph: {0}")]
    Graph(#[from] crate::Error),
}

fn load_xml<R: BufRead>(options: &Options<'_>, reader: R) -> Result<Network, Error> {
    let mut loader = NetworkLoader::new(options);
    loader.add_features(xml::Reader::from_io(reader))?;
    Ok(loader.finish()?)
}

/// Parse OSM features from a reader into a [Network] as per the provided [Options].
///
/// The provided stream will be automatically wrapped in a buffered reader when needed.
pub fn load_network_from_io<R: io::Read>(
    options: &Options<'_>,
    reader: R,
) -> Result<Network, Error> {
    let mut b = io::BufReader::new(reader);

    let format = match options.file_format {
        FileFormat::Unknown => FileFormat::detect(b.fill_buf()?),
        other => other,
    };
    log::debug!("reading OSM data as {:?}", format);

    match format {
        FileFormat::Unknown | FileFormat::Xml => load_xml(options, b),

        FileFormat::XmlGz => {
            let d = flate2::read::MultiGzDecoder::new(b);
            load_xml(options, io::BufReader::new(d))
        }

        FileFormat::XmlBz2 => {
            let d = bzip2::read::MultiBzDecoder::new(b);
            load_xml(options, io::BufReader::new(d))
        }
    }
}

/// Parse OSM features from a file at the provided path into a [Network] as per the provided [Options].
pub fn load_network_from_file<P: AsRef<Path>>(
    options: &Options<'_>,
    path: P,
) -> Result<Network, Error> {
    let f = File::open(path)?;
    load_network_from_io(options, f)
}

/// Parse OSM features from a static buffer into a [Network] as per the provided [Options].
pub fn load_network_from_buffer(options: &Options<'_>, data: &[u8]) -> Result<Network, Error> {
    let format = match options.file_format {
        FileFormat::Unknown => FileFormat::detect(data),
        other => other,
    };

    if format == FileFormat::Xml {
        // Fast path is available for in-memory XML data
        let mut loader = NetworkLoader::new(options);
        loader.add_features(xml::Reader::from_buffer(data))?;
        Ok(loader.finish()?)
    } else {
        // Wrap the buffer in a cursor and use the IO path
        let options = Options {
            file_format: format,
            ..*options
        };
        load_network_from_io(&options, io::Cursor::new(data))
    }
}
