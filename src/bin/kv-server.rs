use clap::Parser;
use redis_op_async::{logger, server, Cli};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> mini_redis::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    // 绑定监听器到一个地址
    let listener = TcpListener::bind(cli.store_config().addr()).await?;
    server::run(listener).await?;

    Ok(())
}
