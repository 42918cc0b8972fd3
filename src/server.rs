//! 一个只支持 GET / SET 的内存 key-value server, 供本地演示和测试使用.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use mini_redis::cmd::Command::{Get, Set};
use mini_redis::{Command, Connection, Frame};
use tokio::io;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

type Db = Arc<Mutex<HashMap<String, Bytes>>>;

/// 不断接收新的链接, 每个链接交给一个单独的任务处理
pub async fn run(mut listener: TcpListener) -> io::Result<()> {
    info!("Mini Redis Server started, listening on {}", listener.local_addr()?);

    let db: Db = Arc::new(Mutex::new(HashMap::new()));

    loop {
        let (socket, peer) = listener.accept().await?;
        debug!(%peer, "accepted");
        // clone 一份 db 的句柄给新任务
        let db = db.clone();
        tokio::spawn(async move {
            if let Err(err) = process(socket, db).await {
                warn!(%peer, "connection error: {}", err);
            }
        });
    }
}

/// 处理一个链接上的所有帧, 对端关闭时返回
async fn process(socket: TcpStream, db: Db) -> mini_redis::Result<()> {
    // 此 connection 由 mini_redis 包提供, 可以处理 socket 中的帧
    let mut connection = Connection::new(socket);

    while let Some(frame) = connection.read_frame().await? {
        let response = match Command::from_frame(frame) {
            Ok(Set(cmd)) => {
                let mut db = db.lock().unwrap();
                db.insert(cmd.key().to_string(), cmd.value().clone());
                Frame::Simple("OK".to_string())
            }
            Ok(Get(cmd)) => {
                let db = db.lock().unwrap();
                match db.get(cmd.key()) {
                    Some(value) => Frame::Bulk(value.clone()),
                    None => Frame::Null,
                }
            }
            // 其它的命令没有实现
            Ok(cmd) => Frame::Error(format!("ERR unimplemented {:?}", cmd)),
            Err(err) => Frame::Error(format!("ERR {}", err)),
        };
        // 写入响应到客户端
        connection.write_frame(&response).await?;
    }

    Ok(())
}
