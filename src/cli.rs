use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::update_request::{
    DEFAULT_ADVISORY_URL, DEFAULT_RETRY, DEFAULT_VULN_LIST_DIR,
};
use crate::application::dto::UpdateRequest;

/// Mirror VMware Photon OS security advisories into a local vuln-list directory
#[derive(Parser, Debug)]
#[command(name = "photon-sync")]
#[command(version)]
#[command(about = "Mirror Photon OS security advisories into a local vuln-list directory", long_about = None)]
pub struct Args {
    /// Base URL of the Photon advisory feed
    #[arg(long, env = "PHOTON_ADVISORY_URL", default_value = DEFAULT_ADVISORY_URL)]
    pub base_url: String,

    /// Number of fetch attempts per advisory resource
    #[arg(long, env = "PHOTON_RETRY", default_value_t = DEFAULT_RETRY)]
    pub retry: u32,

    /// Root directory of the local vuln-list mirror
    #[arg(short = 'd', long, env = "VULN_LIST_DIR", default_value = DEFAULT_VULN_LIST_DIR)]
    pub vuln_list_dir: PathBuf,

    /// Suppress progress output (diagnostics still honor RUST_LOG)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the use case request from the parsed arguments
    pub fn to_request(&self) -> UpdateRequest {
        UpdateRequest::new(
            self.base_url.clone(),
            self.retry,
            self.vuln_list_dir.clone(),
        )
    }
}
