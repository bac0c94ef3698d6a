use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("rdproxy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check, inspect and generate RDP proxy configuration files")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("check")
                .about("Load a configuration file and report whether it is valid")
                .arg(
                    Arg::new("config")
                        .help("Path to the INI configuration file")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("print")
                .about("Load a configuration file and print the effective settings")
                .arg(
                    Arg::new("config")
                        .help("Path to the INI configuration file")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format (inline key content is shown as \"set\")")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("dump-config")
                .about("Write a template configuration file with every key and its default")
                .arg(
                    Arg::new("output")
                        .help("Where to write the template")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .help("Overwrite the output file if it already exists")
                        .action(ArgAction::SetTrue)
                )
        )
}
