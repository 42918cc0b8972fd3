use std::process::Stdio;

use redis_op_async::server;
use tokio::net::TcpListener;
use tokio::process::Command;

const DEMO: &str = env!("CARGO_BIN_EXE_redis-op-async");

#[tokio::test]
async fn demo_prints_values_and_reply_in_order() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port().to_string();
    tokio::spawn(async move {
        server::run(listener).await.unwrap();
    });

    let output = Command::new(DEMO)
        .args(&["--port", port.as_str()])
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "null\nReply: OK\n100\n"
    );
}

#[test]
fn connection_failure_is_logged_to_stderr() {
    // 先占用一个端口再释放, 保证没有人在监听
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port().to_string();
    drop(listener);

    let output = std::process::Command::new(DEMO)
        .args(&["--port", port.as_str()])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Redis client not connected to the server"));
}
