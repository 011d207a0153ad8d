//! Usage text printed when a request is rejected

use std::fmt::Write;

use crate::domain::Branch;
use crate::product::{DEFAULT_SKIN, ISOMORPHIC_DIR, Product};

/// Full usage text for `package_name`.
///
/// Module and credential flags are listed only when the product has them.
pub fn usage_text(product: &Product, package_name: &str) -> String {
    let mut text = String::new();
    let _ = write!(
        text,
        "Install package and SmartClient runtime(s):\n\n\
         \x20    npm install {package_name} [flags]\n\n\
         Update/reconfigure SmartClient runtime(s) (must be run from package directory):\n\n\
         \x20    npm run update [flags]\n\n\
         where the supported flags are:\n\n\
         \x20    --location=<directory>  where to install the SmartClient runtime(s);\n\
         \x20                            default is to place runtime root ({ISOMORPHIC_DIR})\n\
         \x20                            in the parent of the node_modules directory\n\
         \x20                            containing the {package_name} package\n\n\
         \x20    --branch=<number>       desired branch (e.g. 11.1); default is {default_branch}\n\n\
         \x20    --date=<date|'latest'>  desired build date, in format YYYY-MM-DD,\n\
         \x20                            or 'latest'; default is 'latest'\n\n\
         \x20    --runtime=<'release'|'debug'|'both'>\n\
         \x20                            which runtime(s) to install; default is 'both'\n\n\
         \x20    --skins[=<boolean>]     whether to install all skins or not;\n\
         \x20                            default is to only install {DEFAULT_SKIN}\n\n\
         \x20    --yes[=<boolean>]       assume answer 'yes' to prompts with default\n\n",
        default_branch = Branch::DEFAULT,
    );

    if product.requires_account {
        text.push_str(
            "     --username=<string>     username for account on www.smartclient.com\n\n\
             \x20    --password=<string>     password for account on www.smartclient.com\n\n",
        );
    }
    if product.supports_modules {
        text.push_str(
            "     --analytics[=<boolean>] install the optional Analytics module\n\n\
             \x20    --rtm[=<boolean>]       install the optional RealtimeMessaging module\n\n",
        );
    }

    text.push_str(
        "After installation, command-line configuration is persisted, so command-line arguments only\n\
         need to be supplied when updating if the desired configuration has changed.",
    );
    if product.requires_account {
        text.push_str(
            "  If a username\n\
             and password aren't supplied via the above options, you will be prompted to enter them by\n\
             the update script.  A password typed in response to the script won't be persisted to your\n\
             configuration, so you may choose to always enter it interactively for security.",
        );
    }

    let _ = write!(
        text,
        "\n\n\
         Every flag can also be given as an npm_config_<flag> environment variable.\n\n\
         Examples:\n\n\
         New install, selecting a specific branch and date:\n\n\
         \x20    npm install {package_name} --branch=11.1 --date=2018-12-30\n\n\
         Update to latest nightly build (run from package directory):\n\n\
         \x20    npm run update --date=latest\n\n\
         Update to SmartClient 12.0 branch, installing all skins:\n\n\
         \x20    npm run update --branch=12.0 --skins\n"
    );
    text
}
