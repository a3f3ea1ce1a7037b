use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use traybill_core::domain::{
    catalog::value_objects::MenuFormat,
    checkout::value_objects::{CheckoutSettings, MissingPricePolicy},
    common::{MenuConfig, TraybillConfig, VisionConfig, VisionProvider},
    detection::value_objects::ResponseFormat,
    matching::services::DEFAULT_THRESHOLD,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "traybill", version, about = "Bakery tray checkout assistant")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub menu: MenuArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub checkout: CheckoutArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Check out a single tray photo and print the bill.
    Checkout {
        #[arg(long, short)]
        image: PathBuf,
    },
}

#[derive(Debug, Clone, ClapArgs)]
#[command(next_help_heading = "Logging")]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
#[command(next_help_heading = "Menu")]
pub struct MenuArgs {
    #[arg(long = "menu-path", env = "MENU_PATH", default_value = "menu.json")]
    pub path: PathBuf,

    /// json or csv; inferred from the file extension when omitted.
    #[arg(long = "menu-format", env = "MENU_FORMAT")]
    pub format: Option<MenuFormat>,
}

#[derive(Debug, Clone, ClapArgs)]
#[command(next_help_heading = "Vision model")]
pub struct VisionArgs {
    /// gemini or huggingface
    #[arg(long = "vision-provider", env = "VISION_PROVIDER", default_value = "gemini")]
    pub provider: VisionProvider,

    #[arg(long = "api-key", env = "API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Defaults to the provider's usual model.
    #[arg(long = "vision-model", env = "VISION_MODEL")]
    pub model: Option<String>,

    #[arg(long = "vision-base-url", env = "VISION_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long = "vision-timeout-secs", env = "VISION_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
#[command(next_help_heading = "Checkout")]
pub struct CheckoutArgs {
    /// Minimum similarity (0-100) for a detected item to count as a menu item.
    #[arg(
        long = "match-threshold",
        env = "MATCH_THRESHOLD",
        default_value_t = DEFAULT_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub threshold: u8,

    /// lines, json or caption; defaults to what the provider returns.
    #[arg(long = "response-format", env = "RESPONSE_FORMAT")]
    pub response_format: Option<ResponseFormat>,

    /// abort or skip
    #[arg(long = "missing-price", env = "MISSING_PRICE", default_value = "abort")]
    pub missing_price: MissingPricePolicy,

    /// Number of menu items listed in the prompt.
    #[arg(long = "prompt-menu-limit", env = "PROMPT_MENU_LIMIT")]
    pub prompt_menu_limit: Option<usize>,
}

#[derive(Debug, Clone, ClapArgs)]
#[command(next_help_heading = "Server")]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

impl From<Args> for TraybillConfig {
    fn from(args: Args) -> Self {
        let provider = args.vision.provider;

        Self {
            menu: MenuConfig {
                path: args.menu.path,
                format: args.menu.format,
            },
            vision: VisionConfig {
                provider,
                api_key: args.vision.api_key,
                model: args
                    .vision
                    .model
                    .unwrap_or_else(|| provider.default_model().to_string()),
                base_url: args.vision.base_url,
                timeout_secs: args.vision.timeout_secs,
            },
            checkout: CheckoutSettings {
                threshold: args.checkout.threshold,
                response_format: args
                    .checkout
                    .response_format
                    .unwrap_or_else(|| provider.default_response_format()),
                missing_price: args.checkout.missing_price,
                prompt_menu_limit: args.checkout.prompt_menu_limit,
            },
        }
    }
}
