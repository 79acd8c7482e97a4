use std::env;
use std::process;

use fmbridge::{BridgeConfig, FileManager};
use tracing_subscriber::{fmt, EnvFilter};

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("fmbridge=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let mut i = 0;
        while i < self.args.len() {
            if names.contains(&self.args[i].as_str()) {
                let value = self.args.get(i + 1).cloned();
                if value.is_none() {
                    usage_and_exit(self.usage);
                }
                self.args.drain(i..=i + 1);
                return value;
            }
            i += 1;
        }
        None
    }

    #[allow(dead_code)]
    pub fn take_flag(&mut self, names: &[&str]) -> bool {
        match self.args.iter().position(|a| names.contains(&a.as_str())) {
            Some(i) => {
                self.args.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

/// Connection options shared by all demos.
#[allow(dead_code)]
pub struct Connection {
    pub config: BridgeConfig,
    pub positionals: Vec<String>,
}

/// Parse `--config FILE`, `--url URL` and `--proxy PROXY`, leaving the rest
/// as positionals. `--url` and `--proxy` override the config file.
#[allow(dead_code)] // Some demos parse extra flags first.
pub fn parse_connection(usage: &'static str) -> Connection {
    let mut parser = ArgParser::new(usage);
    let config = config_from_parser(&mut parser, usage);
    Connection {
        config,
        positionals: parser.remaining(),
    }
}

pub fn config_from_parser(parser: &mut ArgParser, usage: &'static str) -> BridgeConfig {
    let mut config = match parser.take_value(&["--config", "-c"]) {
        Some(path) => BridgeConfig::load(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load {}: {}", path, e);
            usage_and_exit(usage)
        }),
        None => BridgeConfig::default(),
    };
    if let Some(url) = parser.take_value(&["--url", "-u"]) {
        config.base_url = url;
    }
    if let Some(proxy) = parser.take_value(&["--proxy"]) {
        config.http.proxy = Some(proxy);
    }
    config
}

#[allow(dead_code)]
impl Connection {
    pub fn connect(&self) -> fmbridge::Result<FileManager> {
        FileManager::new(&self.config)
    }
}

/// Split "/a/b/c" into `["a", "b", "c"]`.
#[allow(dead_code)]
pub fn segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
