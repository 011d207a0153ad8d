//! Artifact download: one GET streamed to a file

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Result, fs as fs_error, transport as transport_error};
use crate::progress::DownloadProgress;
use crate::transport::Transport;

const CHUNK_SIZE: usize = 64 * 1024;

/// Downloads archives, one request at a time
pub struct Fetcher<'a> {
    transport: &'a dyn Transport,
    show_progress: bool,
}

impl<'a> Fetcher<'a> {
    pub fn new(transport: &'a dyn Transport, show_progress: bool) -> Self {
        Self {
            transport,
            show_progress,
        }
    }

    /// Download `url` + `query` into `destination`, returning the number of bytes written.
    ///
    /// `what` names the artifact in errors; `url` is reported without the query.
    /// Returns only after the whole body has been written.
    pub fn fetch(&self, what: &str, url: &str, query: &str, destination: &Path) -> Result<u64> {
        let mut response = self.transport.get(&format!("{url}{query}"))?;
        if !response.is_ok() {
            return Err(transport_error::download_failed(what, url, response.status));
        }

        let file = File::create(destination).map_err(|e| fs_error::write_failed(destination, e))?;
        let mut writer = BufWriter::new(file);
        let mut progress = DownloadProgress::new(response.content_length, self.show_progress);
        let mut buf = vec![0u8; CHUNK_SIZE];

        loop {
            let read = match response.body.read(&mut buf) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    progress.abandon();
                    return Err(transport_error::request_failed(url, e));
                }
            };
            if let Err(e) = writer.write_all(&buf[..read]) {
                progress.abandon();
                return Err(fs_error::write_failed(destination, e));
            }
            progress.advance(read as u64);
        }

        writer
            .flush()
            .map_err(|e| fs_error::write_failed(destination, e))?;

        let written = progress.finish();
        tracing::debug!(url, bytes = written, path = %destination.display(), "download complete");
        Ok(written)
    }
}
