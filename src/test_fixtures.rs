//! Test fixtures and utilities for reducing test setup duplication.
//!
//! This module provides helpers to create common test environments
//! (temp directories, build archives, an in-memory build server and
//! scripted answers to prompts) with a single call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{FakeTransport, create_temp_dir, runtime_archive};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let transport = FakeTransport::new()
//!         .route("https://builds.example.test/x.zip", 200, runtime_archive("2023-05-01").to_bytes());
//! }
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::TempDir;
use walkdir::WalkDir;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::product::Product;
use crate::prompt::Prompter;
use crate::transport::{HttpResponse, Transport};

/// Base URL of the fake build server
pub const TEST_BASE_URL: &str = "https://builds.example.test/SmartClient";

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// The LGPL product pointed at the fake build server
#[must_use]
pub fn test_product() -> Product {
    Product {
        base_url: TEST_BASE_URL.to_string(),
        ..Product::lgpl()
    }
}

/// Sorted relative paths of every file below `root`
#[must_use]
pub fn tree_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .map(|p| p.to_string_lossy().replace('\\', "/"))
        })
        .collect();
    files.sort();
    files
}

/// In-memory build server: fixed responses per exact URL, 404 otherwise
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, (u16, Vec<u8>)>,
    requests: RefCell<Vec<String>>,
}

impl FakeTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn route(mut self, url: &str, status: u16, body: Vec<u8>) -> Self {
        self.routes.insert(url.to_string(), (status, body));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        self.requests.borrow_mut().push(url.to_string());
        let (status, body) = self
            .routes
            .get(url)
            .cloned()
            .unwrap_or((404, Vec::new()));
        Ok(HttpResponse {
            status,
            content_length: Some(body.len() as u64),
            body: Box::new(Cursor::new(body)),
        })
    }
}

/// Prompter answering from scripts.
///
/// Confirmations default to yes once the script runs out; text answers default to none.
#[derive(Default)]
pub struct ScriptedPrompter {
    confirms: VecDeque<bool>,
    texts: VecDeque<Option<String>>,
    /// Every message shown, in order
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    #[must_use]
    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    #[must_use]
    pub fn with_text(mut self, answer: Option<&str>) -> Self {
        self.texts.push_back(answer.map(str::to_string));
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        self.asked.push(message.to_string());
        Ok(self.confirms.pop_front().unwrap_or(true))
    }

    fn ask_text(&mut self, message: &str, _secret: bool) -> Result<Option<String>> {
        self.asked.push(message.to_string());
        Ok(self.texts.pop_front().flatten())
    }
}

/// Builds zip archives in memory
#[derive(Default)]
pub struct ZipBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl ZipBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn file(mut self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.entries.push((name.to_string(), content.as_ref().to_vec()));
        self
    }

    /// # Panics
    ///
    /// Panics if the archive cannot be written.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, content) in &self.entries {
            writer.start_file(name.as_str(), options).expect("Failed to start zip entry");
            writer.write_all(content).expect("Failed to write zip entry");
        }
        writer.finish().expect("Failed to finish zip").into_inner()
    }

    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_to(&self, path: &Path) {
        std::fs::write(path, self.to_bytes()).expect("Failed to write zip file");
    }
}

/// A 12.1 runtime archive built on `date` with both module trees and two skins
#[must_use]
pub fn runtime_archive(date: &str) -> ZipBuilder {
    let root = format!("SmartClient_v121p_{date}_LGPL/smartclientRuntime/isomorphic");
    ZipBuilder::new()
        .file(&format!("SmartClient_v121p_{date}_LGPL/readme.txt"), "readme")
        .file(&format!("{root}/system/modules/ISC_Core.js"), "core")
        .file(&format!("{root}/system/modules-debug/ISC_Core.js"), "core debug")
        .file(&format!("{root}/system/development/ISC_Dev.js"), "dev")
        .file(&format!("{root}/skins/load_skin.js"), "load")
        .file(&format!("{root}/skins/Tahoe/skin_styles.css"), "tahoe")
        .file(&format!("{root}/skins/Enterprise/skin_styles.css"), "enterprise")
}

/// An optional module archive shipping `file`
#[must_use]
pub fn module_archive(file: &str) -> ZipBuilder {
    ZipBuilder::new()
        .file(file, "module")
        .file(&format!("{file}.gz"), "gzipped module")
        .file("readme.txt", "not a script")
        .file(&format!("modules-debug/{file}"), "module debug")
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_fake_transport_unknown_route_is_404() {
        let transport = FakeTransport::new().route("https://a/", 200, b"ok".to_vec());
        assert_eq!(transport.get("https://a/").unwrap().status, 200);
        assert_eq!(transport.get("https://b/").unwrap().status, 404);
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_scripted_prompter_defaults() {
        let mut prompter = ScriptedPrompter::default().with_confirm(false);
        assert!(!prompter.confirm("first").unwrap());
        assert!(prompter.confirm("second").unwrap());
        assert_eq!(prompter.ask_text("name", false).unwrap(), None);
        assert_eq!(prompter.asked.len(), 3);
    }

    #[test]
    fn test_runtime_archive_layout() {
        let temp = create_temp_dir();
        let archive = temp.path().join("a.zip");
        runtime_archive("2023-05-01").write_to(&archive);
        let out = temp.path().join("out");
        crate::installer::extract_archive(&archive, &out).unwrap();
        assert!(tree_files(&out).contains(
            &"SmartClient_v121p_2023-05-01_LGPL/smartclientRuntime/isomorphic/skins/Tahoe/skin_styles.css"
                .to_string()
        ));
    }
}
