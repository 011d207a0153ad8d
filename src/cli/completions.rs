use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    scinstall completions bash > ~/.bash_completion.d/scinstall\n\n\
                  Generate zsh completions:\n    scinstall completions zsh > ~/.zfunc/_scinstall\n\n\
                  Generate fish completions:\n    scinstall completions fish > ~/.config/fish/completions/scinstall.fish\n\n\
                  Generate PowerShell completions:\n    scinstall completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
