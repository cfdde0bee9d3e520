use std::io::Read;
use std::{env, fs, process};

use anyhow::{Context, Result};
use marginalia_engine::{
    NormalizeCache, assign_offsets, detect, parse, parse_streaming,
};

struct Args {
    path: Option<String>,
    offsets: bool,
    semantic: bool,
    streaming: bool,
    json: bool,
}

fn usage() -> ! {
    eprintln!("usage: marginalia [--offsets] [--semantic] [--streaming] [--json] [FILE]");
    eprintln!("reads FILE (or stdin) and prints the parsed block structure");
    process::exit(2);
}

fn parse_args() -> Args {
    let mut args = Args {
        path: None,
        offsets: false,
        semantic: false,
        streaming: false,
        json: false,
    };
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--offsets" => args.offsets = true,
            "--semantic" => args.semantic = true,
            "--streaming" => args.streaming = true,
            "--json" => args.json = true,
            "--help" | "-h" => usage(),
            flag if flag.starts_with('-') => usage(),
            path => {
                if args.path.replace(path.to_string()).is_some() {
                    usage();
                }
            }
        }
    }
    args
}

fn main() -> Result<()> {
    let args = parse_args();

    let raw = match &args.path {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    if args.streaming {
        let result = parse_streaming(&raw);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            for block in &result.blocks {
                println!("{block:?}");
            }
            match &result.partial {
                Some(partial) => println!("partial: {partial:?}"),
                None => println!("partial: none"),
            }
        }
        return Ok(());
    }

    let mut blocks = parse(&raw);
    if args.offsets {
        let mut cache = NormalizeCache::default();
        let rendered = cache.normalize(&raw);
        blocks = assign_offsets(blocks, &rendered);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else {
        for block in &blocks {
            println!("{block:?}");
        }
    }

    if args.semantic {
        for highlight in detect(&raw) {
            println!(
                "semantic {:?} [{}..{}] {:?}",
                highlight.kind, highlight.start, highlight.end, highlight.label
            );
        }
    }

    Ok(())
}
