//! Download link resolution
//!
//! Builds live under `<base>/<branch><channel>/<component>/<date>/`. For a concrete
//! date the archive name is deterministic, so the link is computed without touching
//! the network. For the "latest" sentinel the directory listing is fetched and the
//! first zip named in it is taken.

use std::io::Read;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{Branch, BuildDate, Channel};
use crate::error::{InstallerError, Result, transport as transport_error};
use crate::product::{PACKAGE_DIR_PREFIX, Product};
use crate::transport::Transport;

static ZIP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_-]+\.zip").expect("valid zip pattern"));

/// A download link together with the build date named in it, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Archive URL, without any credentials query
    pub url: String,
    /// Concrete `YYYY-MM-DD` found in the URL
    pub date: Option<String>,
}

impl ResolvedLink {
    /// The build date, required for the core runtime whose date is recorded
    pub fn require_date(&self) -> Result<&str> {
        self.date
            .as_deref()
            .ok_or_else(|| InstallerError::UnresolvedBuildDate { url: self.url.clone() })
    }
}

/// Directory of a build: `<branch><channel>/<component>/<date>`
pub fn link_dir(branch: Branch, date: &BuildDate, component: &str) -> String {
    format!("{}{}/{}/{}", branch, branch.channel().letter(), component, date)
}

/// Archive name of a concrete build, e.g. `SmartClient_v121p_2023-05-01_LGPL.zip`
pub fn archive_name(product: &Product, branch: Branch, date: &str) -> String {
    let channel = branch.channel();
    let snapshot = match channel {
        Channel::Production => "",
        Channel::Development => "SNAPSHOT_",
    };
    format!(
        "{}{}v{}{}_{}_{}.zip",
        PACKAGE_DIR_PREFIX,
        snapshot,
        branch.times_ten(),
        channel.letter(),
        date,
        product.edition
    )
}

/// Resolves download links for the core runtime and optional modules
pub struct LinkResolver<'a> {
    product: &'a Product,
    transport: &'a dyn Transport,
}

impl<'a> LinkResolver<'a> {
    pub fn new(product: &'a Product, transport: &'a dyn Transport) -> Self {
        Self { product, transport }
    }

    /// Resolve the archive link of `component` for a branch and date.
    ///
    /// `query` is the credentials query (possibly empty); it is sent with the listing
    /// request but never part of the returned URL.
    pub fn resolve(
        &self,
        branch: Branch,
        date: &BuildDate,
        query: &str,
        component: &str,
    ) -> Result<ResolvedLink> {
        let dir_url = format!(
            "{}/{}",
            self.product.base_url.trim_end_matches('/'),
            link_dir(branch, date, component)
        );

        let url = match date {
            BuildDate::On(day) => {
                format!("{}/{}", dir_url, archive_name(self.product, branch, day))
            }
            BuildDate::Latest => {
                let file = self.latest_archive(&dir_url, query)?;
                format!("{dir_url}/{file}")
            }
        };

        let date = BuildDate::find_in(&url).map(str::to_string);

        tracing::debug!(%url, ?date, component, "resolved download link");
        Ok(ResolvedLink { url, date })
    }

    /// First zip file named in the directory listing at `dir_url`
    fn latest_archive(&self, dir_url: &str, query: &str) -> Result<String> {
        let mut response = self.transport.get(&format!("{dir_url}{query}"))?;
        if !response.is_ok() {
            return Err(transport_error::listing_failed(dir_url, response.status));
        }

        let mut body = Vec::new();
        response
            .body
            .read_to_end(&mut body)
            .map_err(|e| transport_error::request_failed(dir_url, e))?;
        if body.is_empty() {
            return Err(transport_error::listing_empty(dir_url));
        }

        let listing = String::from_utf8_lossy(&body);
        ZIP_NAME
            .find(&listing)
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| transport_error::no_archive(dir_url))
    }
}
