use clap::{Parser, Subcommand};
use colored::Colorize;
use ip_tools::config::{init_logging, Settings};
use ip_tools::output::{format_row, CidrSummary};
use ip_tools::{
    convert_to_ipv4, ipv4_format, is_ip_in_range, is_ip_in_subnet, is_private_ipv4, ping,
    CidrBlock, FormatOptions, Ipv4Address, Radix,
};
use std::error::Error;
use std::io::{BufWriter, Write};

#[derive(Parser)]
#[command(name = "ip-tools")]
#[command(about = "IPv4 address conversion and subnet calculator.")]
struct CommandLine {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show network, mask, usable range and broadcast of a block
    #[command(alias = "i")]
    Info {
        /// Block as a.b.c.d/N or a.b.c.d/m.m.m.m
        cidr: CidrBlock,
        /// Print JSON instead of fields
        #[arg(long)]
        json: bool,
    },
    /// List every address of a block
    #[command(alias = "h")]
    Hosts { cidr: CidrBlock },
    /// Convert a binary/octal/decimal/hex/integer value to dotted decimal
    #[command(alias = "c")]
    Convert {
        value: String,
        #[arg(long, default_value = "binary")]
        from: Radix,
    },
    /// Render an address in binary/octal/hex/integer
    #[command(alias = "f")]
    Format {
        addr: String,
        #[arg(long, default_value = "binary")]
        to: Radix,
        /// Do not zero-pad octets
        #[arg(long)]
        no_pad: bool,
        #[arg(long, default_value = ".")]
        separator: String,
    },
    /// Validate an address and test its membership
    Check {
        addr: String,
        /// Wildcard/range pattern, e.g. 10.25-32.*.*
        #[arg(long)]
        range: Option<String>,
        /// CIDR block, e.g. 172.16.0.0/12
        #[arg(long)]
        subnet: Option<String>,
    },
    /// Ping a host with the platform ping utility
    Ping { host: String },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let commands = CommandLine::parse();
    let settings = Settings::from_env();
    init_logging(&settings)?;
    log::info!("#Start main()");

    match commands.command {
        Commands::Info { cidr, json } => {
            let summary = CidrSummary::from(&cidr);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                summary.rows().iter().for_each(|row| println!("{row}"));
            }
        }
        Commands::Hosts { cidr } => {
            let mut out = BufWriter::new(std::io::stdout().lock());
            for ip in cidr.hosts() {
                writeln!(out, "{ip}")?;
            }
            out.flush()?;
        }
        Commands::Convert { value, from } => {
            println!("{}", convert_to_ipv4(&value, from)?);
        }
        Commands::Format {
            addr,
            to,
            no_pad,
            separator,
        } => {
            let opts = FormatOptions::default()
                .zero_pad(!no_pad)
                .separator(&separator);
            println!("{}", ipv4_format(&addr, to, &opts)?);
        }
        Commands::Check {
            addr,
            range,
            subnet,
        } => {
            let ip = Ipv4Address::parse(&addr)?;
            println!("{}", format_row("address", ip));
            println!("{}", format_row("private", is_private_ipv4(&addr)));
            if let Some(pattern) = range {
                println!("{}", format_row("in_range", is_ip_in_range(&addr, &pattern)?));
            }
            if let Some(cidr) = subnet {
                println!("{}", format_row("in_subnet", is_ip_in_subnet(&addr, &cidr)?));
            }
        }
        Commands::Ping { host } => {
            let output = ping(&host, &settings.ping_options()).map_err(|e| {
                log::error!("{} {e}", "ping failed".on_red());
                e
            })?;
            print!("{output}");
        }
    }

    Ok(())
}
