//! # nft-frame
//!
//! Command-line front end for the NFT frame configuration contract.
//!
//! - `nft-frame schema` lists the recognized options
//! - `nft-frame project <FILE>` prints what the child frame would receive
//! - `nft-frame card --url <URL> --origin <ORIGIN>` shows a demo card

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use nft_frame_config::{
    ConfigSchema, DemoCard, FrameRenderer, FrameRequest, NftFrame, NftFrameConfig,
    load_from_path,
};

use crate::cli::{Cli, Command};

mod cli;

#[macro_use]
extern crate log;

/// Renderer standing in for the child frame: it hands the request back so it
/// can be printed.
struct PrintRenderer;

impl FrameRenderer for PrintRenderer {
    type Output = FrameRequest;

    fn render(&mut self, request: FrameRequest) -> FrameRequest {
        request
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Schema { json } => print_schema(json)?,
        Command::Project { file } => {
            let full = load_from_path(&file)
                .with_context(|| format!("Failed to load {}", file.display()))?;
            let request = NftFrame::new(full)
                .render(&mut PrintRenderer)
                .with_context(|| format!("Invalid configuration in {}", file.display()))?;
            if let Some(url) = &request.frame_url {
                info!("child frame source: {url}");
            }
            println!("{}", serde_json::to_string_pretty(&request.config)?);
        }
        Command::Card { url, origin } => {
            let view = DemoCard::new(url, origin).render(&mut PrintRenderer)?;
            println!(
                "{} {}",
                view.link.text.bold(),
                format!("<{}>", view.link.href).dimmed()
            );
            println!("{}", serde_json::to_string_pretty(&view.frame)?);
        }
    }

    Ok(())
}

fn print_schema(json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&NftFrameConfig::json_schema())?
        );
        return Ok(());
    }

    for opt in ConfigSchema::global().options() {
        let name = if opt.required {
            opt.name.bold().yellow()
        } else {
            opt.name.normal()
        };
        let mut line = format!("{name:<24} {:<22}", opt.value_type.describe());
        if let Some(default) = &opt.default {
            line.push_str(&format!(" default={default}"));
        }
        if !opt.forward_to_child {
            line.push_str(&format!(" {}", "caller-only".purple()));
        }
        println!("{line}");
        debug!("{}: {}", opt.name, opt.description);
    }
    Ok(())
}
