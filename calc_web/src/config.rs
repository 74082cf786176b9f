use clap::Parser;

/// Command line options for the web form server
#[derive(Parser, Debug, Clone)]
#[command(name = "calc_web")]
#[command(about = "Formulário web do estimador de terreno")]
#[command(version)]
pub struct WebConfig {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000)]
    pub port: u16,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl WebConfig {
    /// `host:port` for display
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
