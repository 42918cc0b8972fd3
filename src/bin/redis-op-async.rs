use clap::Parser;
use redis_op_async::school::{display_school_value, set_new_school};
use redis_op_async::{connect, logger, print_reply, Cli};

/// 配合 kv-server 或者任意一个 redis server 使用
#[tokio::main]
async fn main() -> mini_redis::Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    // 链接失败的原因已经记录在日志中了
    let client = match connect(&cli.store_config()).await {
        Ok(client) => client,
        Err(_) => std::process::exit(1),
    };

    display_school_value(&client, "Holberton").await?;

    // 不等待 SET 的结果就发出 GET; 两个回复在同一个链接上按顺序返回,
    // join 先 poll print_reply, 所以 Reply 一定先于值打印
    let pending = set_new_school(&client, "HolbertonSanFrancisco", "100");
    let (_, value) = tokio::join!(
        print_reply(pending),
        display_school_value(&client, "HolbertonSanFrancisco")
    );
    value?;

    client.quit().await;
    Ok(())
}
