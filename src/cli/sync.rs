use std::path::PathBuf;

use clap::Parser;
use clap::builder::BoolishValueParser;

use crate::request::Overrides;

/// Arguments for the install and update commands
///
/// Each flag may also come from the matching `npm_config_*` environment variable,
/// which is how npm passes `npm install <pkg> --flag=value` through to scripts.
#[derive(Parser, Debug, Clone, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  New install, selecting a specific branch and date:\n    scinstall install --branch=11.1 --date=2018-12-30\n\n\
                  Update to the latest nightly build:\n    scinstall update --date=latest\n\n\
                  Update to the 12.0 branch, installing all skins:\n    scinstall update --branch=12.0 --skins")]
pub struct SyncArgs {
    /// Directory to place the runtime root (isomorphic) in
    #[arg(long, value_name = "DIRECTORY", env = "npm_config_location")]
    pub location: Option<String>,

    /// Branch to install, e.g. 12.1
    #[arg(long, value_name = "NUMBER", env = "npm_config_branch")]
    pub branch: Option<String>,

    /// Build date as YYYY-MM-DD, or 'latest'
    #[arg(long, value_name = "DATE", env = "npm_config_date")]
    pub date: Option<String>,

    /// Runtime(s) to install: release, debug or both
    #[arg(long, value_name = "RUNTIME", env = "npm_config_runtime")]
    pub runtime: Option<String>,

    /// Install all skins instead of only the default one
    #[arg(
        long,
        env = "npm_config_skins",
        value_name = "BOOLEAN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub skins: Option<bool>,

    /// Answer 'yes' to prompts that default to yes
    #[arg(
        long,
        short = 'y',
        env = "npm_config_yes",
        value_name = "BOOLEAN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub yes: Option<bool>,

    /// Install the optional Analytics module
    #[arg(
        long,
        env = "npm_config_analytics",
        value_name = "BOOLEAN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub analytics: Option<bool>,

    /// Install the optional RealtimeMessaging module
    #[arg(
        long,
        env = "npm_config_rtm",
        value_name = "BOOLEAN",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub rtm: Option<bool>,

    /// Account username for authenticated downloads
    #[arg(long, env = "npm_config_username")]
    pub username: Option<String>,

    /// Account password for authenticated downloads
    #[arg(long, env = "npm_config_password", hide_env_values = true)]
    pub password: Option<String>,
}

/// An empty flag or variable (`--date=`, `npm_config_date=`) counts as not given
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.is_empty())
}

impl From<&SyncArgs> for Overrides {
    fn from(args: &SyncArgs) -> Self {
        Self {
            location: non_empty(&args.location).map(PathBuf::from),
            branch: non_empty(&args.branch),
            date: non_empty(&args.date),
            runtime: non_empty(&args.runtime),
            skins: args.skins,
            yes: args.yes,
            analytics: args.analytics,
            rtm: args.rtm,
            username: non_empty(&args.username),
            password: non_empty(&args.password),
        }
    }
}
