use clap::Parser;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6379;

/// 命令行参数, 客户端与本地 server 共用
#[derive(Debug, Parser)]
#[command(version, about = "Set and get values on a redis server asynchronously")]
pub struct Cli {
    /// redis server 的主机地址
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// redis server 的端口
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// 输出 debug 日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    addr: String,
}

impl StoreConfig {
    pub fn new(host: &str, port: u16) -> StoreConfig {
        StoreConfig {
            addr: format!("{}:{}", host, port),
        }
    }

    /// 直接使用一个 `host:port` 形式的地址
    pub fn from_addr(addr: impl Into<String>) -> StoreConfig {
        StoreConfig { addr: addr.into() }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_redis() {
        assert_eq!(StoreConfig::default().addr(), "127.0.0.1:6379");
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["redis-op-async"]);
        assert_eq!(cli.store_config(), StoreConfig::default());
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_overrides_host_and_port() {
        let cli = Cli::parse_from(["redis-op-async", "--host", "10.0.0.5", "-p", "7000", "-v"]);
        assert_eq!(cli.store_config().addr(), "10.0.0.5:7000");
        assert!(cli.verbose);
    }
}
